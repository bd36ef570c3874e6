//! A minimal client: defines the key set, installs a key → template table and prints localized
//! strings. Run with `cargo run --example client`.

use localizable::localizable;

#[localizable]
mod localization {
    #[allow(non_camel_case_types, dead_code)]
    enum Strings {
        login_welcome,
        login_message(String)
    }
}

fn main() {
    let mut strings = std::collections::HashMap::new();
    strings.insert(String::from("login_welcome"), String::from("Welcome!"));
    strings.insert(String::from("login_message"), String::from("Hello, {}!"));

    if localizable::install_strings(strings).is_err() {
        eprintln!("localization table was already installed");
    }

    println!("{}", *localization::login_welcome);
    println!("{}", localization::login_message(String::from("Ada")));
}
