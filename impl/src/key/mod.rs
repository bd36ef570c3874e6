//! Contains all data types to represent localization keys.

#[macro_use]
pub(crate) mod parse;
pub(crate) mod generate;

/// Stores one case of the key enumeration. The identifier doubles as the name of the synthesized
/// member and as the lookup key string.
pub(crate) struct Key {
    ident: syn::Ident,
    parameters: Vec<syn::Ident>
}

/// A member that is synthesized for one localization key and appended to the container.
pub(crate) enum Member {
    /// A lazily initialised constant for a key without payload.
    Constant { ident: syn::Ident },
    /// A formatting function for a key with payload.
    Function { ident: syn::Ident, parameters: Vec<syn::Ident> }
}

/// Routes the payload shape of a key: no parameters yield a constant, one or more parameters
/// yield a function. There is no other branch.
impl core::convert::From<Key> for Member {
    fn from(key: Key) -> Self {
        if key.parameters.is_empty() {
            Self::Constant { ident: key.ident }
        } else {
            Self::Function { ident: key.ident, parameters: key.parameters }
        }
    }
}
