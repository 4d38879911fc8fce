//! `#[derive(MarkModified)]`: marks every field, except those tagged
//! `#[mark_modified(skip)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Index, parse_macro_input};

pub fn derive_mark_modified_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_impl(&input, &data_struct.fields)
            .unwrap_or_else(syn::Error::into_compile_error),
        Data::Enum(_) | Data::Union(_) => syn::Error::new_spanned(
            &input.ident,
            "MarkModified can only be derived for structs.",
        )
        .to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skip = false;
    for attribute in &field.attrs {
        if !attribute.path().is_ident("mark_modified") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn generate_struct_impl(input: &DeriveInput, fields: &Fields) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let mut bounds = Vec::new();
    let mut assignments = Vec::new();

    for (position, field) in fields.iter().enumerate() {
        let member = field.ident.as_ref().map_or_else(
            || {
                let index = Index::from(position);
                quote!(#index)
            },
            |ident| quote!(#ident),
        );
        let binding = format_ident!("field_{}", position);
        let value = if is_skipped(field)? {
            quote!(self.#member)
        } else {
            let field_type = &field.ty;
            bounds.push(quote!(#field_type: ::formlets::validation::MarkModified));
            quote!(::formlets::validation::MarkModified::mark_modified(self.#member))
        };
        assignments.push((member, binding, value));
    }

    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    let predicates = where_clause.map(|clause| {
        let existing = &clause.predicates;
        quote!(#existing,)
    });

    let lets = assignments
        .iter()
        .map(|(_, binding, value)| quote!(let #binding = #value;));
    let members = assignments
        .iter()
        .map(|(member, binding, _)| quote!(#member: #binding));

    Ok(quote! {
        impl #impl_generics ::formlets::validation::MarkModified for #name #type_generics
        where
            #predicates
            #(#bounds,)*
        {
            fn mark_modified(self) -> Self {
                #(#lets)*
                Self { #(#members),* }
            }
        }
    })
}
