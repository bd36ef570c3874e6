//! Contains code to parse localization key cases.

use syn::spanned::Spanned;

impl super::Key {
    /// Tries to parse an enumeration case into a `Key` structure.
    ///
    /// Parameter types must be bare single-segment paths. Anything else can not be carried over
    /// into the synthesized function signature and fails the expansion.
    pub(crate) fn parse(variant: syn::Variant) -> syn::Result<Self> {
        let parameters = match variant.fields {
            syn::Fields::Unit => vec!(),

            syn::Fields::Unnamed(fields) => fields.unnamed.iter().map(
                |field| match &field.ty {
                    syn::Type::Path(ty) if ty.qself.is_none() => ty.path.get_ident()
                        .cloned()
                        .ok_or_else(|| syn::Error::new(
                            ty.span(), "expected a simple type name"
                        )),

                    ty => Err(syn::Error::new(ty.span(), "expected a simple type name"))
                }
            ).collect::<syn::Result<Vec<_>>>()?,

            syn::Fields::Named(fields) => return Err(syn::Error::new(
                fields.span(), "expected unnamed parameters"
            ))
        };

        Ok(Self { ident: variant.ident, parameters })
    }
}
