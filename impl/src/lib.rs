//! This crate serves as the backbone for the `localizable` crate.

#[cfg(test)]
#[macro_use]
mod test;

mod container;
mod key;

/// Generates localization accessors for the first enumeration inside the annotated module.
///
/// Every case of that enumeration names one localization key. A case without parameters becomes a
/// lazily initialised constant, a case with parameters becomes a formatting function whose
/// arguments fill the looked up template in declaration order. Further enumerations in the same
/// module are ignored.
///
/// ```ignore
/// #[localizable::localizable]
/// mod localization {
///     enum Strings {
///         login_error,
///         login_welcome(String),
///     }
/// }
/// ```
///
/// expands to
///
/// ```ignore
/// mod localization {
///     enum Strings {
///         login_error,
///         login_welcome(String),
///     }
///
///     #[allow(non_upper_case_globals)]
///     pub static login_error: ::std::sync::LazyLock<::std::string::String> =
///         ::std::sync::LazyLock::new(|| ::localizable::localized_string("login_error", ""));
///
///     pub fn login_welcome(value0: String) -> ::std::string::String {
///         ::localizable::localized_format(
///             &::localizable::localized_string("login_welcome", ""),
///             &[&value0 as &dyn ::core::fmt::Display]
///         )
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn localizable(
    attribute: proc_macro::TokenStream,
    item: proc_macro::TokenStream
) -> proc_macro::TokenStream {
    let item = proc_macro2::TokenStream::from(item);

    match container::Container::parse(attribute.into(), item.clone()) {
        Ok(container) => Into::<proc_macro2::TokenStream>::into(container),

        // Re-emit the unmodified module ahead of the error, so the rest of the crate can still
        // resolve names inside it.
        Err(error) => {
            let mut output = item;
            output.extend(error.to_compile_error());
            output
        }
    }.into()
}
