//! Contains all data types to represent a localization container.

#[macro_use]
pub(crate) mod parse;
pub(crate) mod generate;

/// Stores all information about a localization container, which is parsed from an inline module
/// holding the key enumeration.
pub(crate) struct Container {
    attrs: Vec<syn::Attribute>,
    vis: syn::Visibility,
    ident: syn::Ident,
    /// The original members, re-emitted untouched.
    items: Vec<syn::Item>,
    /// One synthesized member per key case, in case order.
    members: Vec<crate::key::Member>
}
