//! `#[derive(Lenses)]`: one lens constructor per named field.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, parse_macro_input};

pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_field_lenses(&input.ident, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) | Data::Union(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs with named fields.",
        )
        .to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn generate_field_lenses(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    let Fields::Named(named_fields) = fields else {
        return syn::Error::new_spanned(
            name,
            "Lenses can only be derived for structs with named fields.",
        )
        .to_compile_error();
    };

    let lens_methods = named_fields.named.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;
        let method_name = format_ident!("{}_lens", field_name);
        let doc = format!("A lens onto the `{field_name}` field, for `field_at` and `focus`.");

        Some(quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::formlets::optics::Lens<Self, #field_type> + Clone {
                ::formlets::optics::FunctionLens::new(
                    |source: &Self| &source.#field_name,
                    |mut source: Self, value: #field_type| {
                        source.#field_name = value;
                        source
                    },
                )
            }
        })
    });

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#lens_methods)*
        }
    }
}
