//! Contains code to parse a localization container module.

use syn::spanned::Spanned;

impl super::Container {
    /// Tries to parse the `attribute` and `item` into a `Container` structure.
    pub(crate) fn parse(
        attribute: proc_macro2::TokenStream,
        item: proc_macro2::TokenStream
    ) -> syn::Result<Self> {
        if let Some(token) = attribute.into_iter().next() {
            return Err(syn::Error::new(token.span(), "expected no attribute arguments"));
        }

        let module: syn::ItemMod = syn::parse2(item)?;
        let span = module.span();

        let (_, items) = module.content.ok_or_else(
            || syn::Error::new(span, "expected a module with a body")
        )?;

        // The first enumeration in declaration order provides the keys. Further enumerations and
        // nested containers are ignored.
        let enumeration = items.iter()
            .find_map(|item| match item {
                syn::Item::Enum(enumeration) => Some(enumeration),
                _ => None
            })
            .ok_or_else(|| syn::Error::new(
                span, "requires an internal enumeration acting as the set of localization keys"
            ))?;

        if !enumeration.generics.params.is_empty() {
            return Err(syn::Error::new(
                enumeration.generics.span(), "expected a non-generic enumeration"
            ));
        }

        let members = enumeration.variants.iter()
            .map(|variant| crate::key::Key::parse(variant.clone()).map(crate::key::Member::from))
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Self {
            attrs: module.attrs,
            vis: module.vis,
            ident: module.ident,
            items,
            members
        })
    }
}
