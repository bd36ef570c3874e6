//! Contains code to generate the expanded container module.

/// Generates the user code for the parsed container: the original members, re-emitted untouched,
/// followed by one synthesized member per key case.
impl core::convert::Into<proc_macro2::TokenStream> for super::Container {
    fn into(self) -> proc_macro2::TokenStream {
        let attrs = &self.attrs;
        let vis = &self.vis;
        let ident = &self.ident;
        let items = &self.items;
        let members = self.members.iter().map(|member| member.generate());

        quote::quote! {
            #(#attrs)*
            #vis mod #ident {
                #(#items)*
                #(#members)*
            }
        }
    }
}
