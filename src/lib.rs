//! # Localization accessors for Rust
//!
//! Provides a macro which turns an enumeration of localization keys into typed accessors, so keys
//! are defined once as enumeration cases instead of hand-written string constants and format
//! wrappers.
//!
//! ## Description
//!
//! The [`localizable`] attribute is applied to an inline module. The first enumeration inside the
//! module acts as the set of localization keys: every case without parameters becomes a lazily
//! initialised constant, every case with parameters becomes a formatting function. The case name
//! is used verbatim as the member name and as the lookup key. All other members of the module are
//! kept untouched, the generated members are appended after them in case order.
//!
//! The generated code resolves keys via [`localized_string`] and fills templates via
//! [`localized_format`]. A key → template table can be installed once per process with
//! [`install_strings`]; without a table, or for an unknown key, the lookup returns the key
//! itself.
//!
//! ## Example
//!
//! ```rust
//! use localizable::localizable;
//!
//! #[localizable]
//! mod localization {
//!     #[allow(non_camel_case_types, dead_code)]
//!     enum Strings {
//!         login_error,
//!         login_welcome(String),
//!     }
//! }
//!
//! // No table installed: the lookup falls back to the key itself.
//! assert_eq!(*localization::login_error, "login_error");
//! assert_eq!(localization::login_welcome(String::from("Ada")), "login_welcome");
//! ```

pub use localizable_impl::localizable;

/// The process-wide key → template table. Installed at most once, read on every lookup.
static STRINGS: std::sync::OnceLock<std::collections::HashMap<String, String>> =
    std::sync::OnceLock::new();

/// Installs the process-wide localization table. Returns the rejected table if one was installed
/// before.
///
/// ```rust
/// let mut strings = std::collections::HashMap::new();
/// strings.insert(String::from("greeting"), String::from("Hello, {}!"));
///
/// assert!(localizable::install_strings(strings).is_ok());
/// assert_eq!(localizable::localized_string("greeting", ""), "Hello, {}!");
/// ```
pub fn install_strings(
    strings: std::collections::HashMap<String, String>
) -> Result<(), std::collections::HashMap<String, String>> {
    STRINGS.set(strings)
}

/// Resolves a localization key to its template. Returns the key itself if no table is installed
/// or the key is unknown.
///
/// The comment is not evaluated at run time; extraction tooling reads it from source.
///
/// ```rust
/// assert_eq!(localizable::localized_string("missing", ""), "missing");
/// ```
pub fn localized_string(key: &str, _comment: &str) -> String {
    STRINGS.get()
        .and_then(|strings| strings.get(key))
        .map_or_else(|| key.to_string(), Clone::clone)
}

/// Replaces each `{}` placeholder in the template with the next argument, in order. Placeholders
/// without a matching argument are kept, surplus arguments are ignored.
///
/// ```rust
/// assert_eq!(localizable::localized_format("{} and {}", &[&1, &"two"]), "1 and two");
/// ```
pub fn localized_format(template: &str, arguments: &[&dyn core::fmt::Display]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut arguments = arguments.iter();
    let mut rest = template;

    while let Some(position) = rest.find("{}") {
        match arguments.next() {
            Some(argument) => {
                result.push_str(&rest[..position]);
                result.push_str(&argument.to_string());
            }

            None => result.push_str(&rest[..position + 2])
        }

        rest = &rest[position + 2..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test formatting.

    #[test]
    fn format() {
        assert_eq!(localized_format("", &[]), "");
        assert_eq!(localized_format("no placeholders", &[]), "no placeholders");
        assert_eq!(localized_format("{}", &[&"a"]), "a");
        assert_eq!(localized_format("{}{}", &[&"a", &"b"]), "ab");
        assert_eq!(localized_format("{} and {}", &[&1, &"two"]), "1 and two");
        assert_eq!(localized_format("pre {} post", &[&7u32]), "pre 7 post");
    }

    #[test]
    fn format_surplus_placeholders() {
        assert_eq!(localized_format("{} and {}", &[&1]), "1 and {}");
        assert_eq!(localized_format("{}", &[]), "{}");
    }

    #[test]
    fn format_surplus_arguments() {
        assert_eq!(localized_format("none", &[&1]), "none");
        assert_eq!(localized_format("{}", &[&1, &2]), "1");
    }

    // Test lookup.

    #[test]
    fn lookup_fallback() {
        assert_eq!(localized_string("missing", ""), "missing");
        assert_eq!(localized_string("missing", "a comment"), "missing");
    }

    #[test]
    fn lookup_installed() {
        let mut strings = std::collections::HashMap::new();
        strings.insert(String::from("greeting"), String::from("Hello, {}!"));

        assert!(install_strings(strings).is_ok());
        assert_eq!(localized_string("greeting", ""), "Hello, {}!");

        // The table can only be installed once.
        assert!(install_strings(std::collections::HashMap::new()).is_err());
        assert_eq!(localized_string("greeting", ""), "Hello, {}!");
    }
}
