//! Both accessor shapes expand and are reachable from outside the module.

use localizable::localizable;

#[localizable]
mod localization {
    #[allow(non_camel_case_types, dead_code)]
    enum Strings {
        ready,
        greet(String)
    }
}

fn main() {
    // No table installed: lookups fall back to the key.
    assert_eq!(*localization::ready, "ready");
    assert_eq!(localization::greet(String::from("you")), "greet");
}
