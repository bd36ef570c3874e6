//! Contains code to generate the synthesized members.

impl super::Member {
    /// Generates a lazily initialised constant which resolves the key on first access.
    fn generate_constant(ident: &syn::Ident) -> proc_macro2::TokenStream {
        let key = syn::LitStr::new(&ident.to_string(), ident.span());

        quote::quote! {
            #[allow(non_upper_case_globals)]
            pub static #ident: ::std::sync::LazyLock<::std::string::String> =
                ::std::sync::LazyLock::new(|| ::localizable::localized_string(#key, ""));
        }
    }

    /// Generates a function which resolves the key and fills the template with its arguments, in
    /// parameter order.
    fn generate_function(ident: &syn::Ident, parameters: &[syn::Ident]) -> proc_macro2::TokenStream {
        let key = syn::LitStr::new(&ident.to_string(), ident.span());
        let values: Vec<syn::Ident> = (0..parameters.len()).map(
            |index| quote::format_ident!("value{}", index)
        ).collect();

        quote::quote! {
            pub fn #ident(#(#values: #parameters),*) -> ::std::string::String {
                ::localizable::localized_format(
                    &::localizable::localized_string(#key, ""),
                    &[#(&#values as &dyn ::core::fmt::Display),*]
                )
            }
        }
    }

    /// Generates the declaration that is appended to the container.
    pub(crate) fn generate(&self) -> proc_macro2::TokenStream {
        match self {
            Self::Constant { ident } => Self::generate_constant(ident),
            Self::Function { ident, parameters } => Self::generate_function(ident, parameters)
        }
    }
}
