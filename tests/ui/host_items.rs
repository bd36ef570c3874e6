//! Only the first enumeration provides keys; other members of the module stay usable.

use localizable::localizable;

#[localizable]
mod localization {
    #[allow(non_camel_case_types, dead_code)]
    enum Strings {
        first_key
    }

    #[allow(dead_code)]
    enum Later {
        IgnoredKey
    }

    pub const ANSWER: u32 = 42;

    pub fn helper() -> u32 {
        ANSWER
    }
}

fn main() {
    assert_eq!(*localization::first_key, "first_key");
    assert_eq!(localization::helper(), 42);
}
