use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, GenericParam, parse_macro_input, parse_quote};

#[proc_macro_derive(NamedVars)]
pub fn named_vars_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let mut type_params = input.generics.params.iter().filter_map(|param| match param {
        GenericParam::Type(ty) => Some(&ty.ident),
        _ => None,
    });
    let scalar = match (type_params.next(), type_params.next()) {
        (Some(ident), None) => ident.clone(),
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "NamedVars needs exactly one type parameter for the scalar type",
            ));
        }
    };

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields_named) => &fields_named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "NamedVars can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "NamedVars can only be derived for structs",
            ));
        }
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let mut where_clause = where_clause.cloned().unwrap_or(syn::WhereClause {
        where_token: Default::default(),
        predicates: syn::punctuated::Punctuated::new(),
    });
    where_clause.predicates.push(parse_quote! {
        #scalar: ::named_vars::nalgebra::Scalar + Copy
    });

    let n_fields = fields.len();
    let n_literal = syn::Index::from(n_fields);
    let field_names: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();
    let field_strings = field_names.iter().map(|ident| ident.to_string());
    let field_indexes = (0..n_fields).map(syn::Index::from);

    Ok(quote! {
        impl #impl_generics ::named_vars::NamedVars<#scalar, #n_literal>
            for #name #ty_generics
            #where_clause
        {
            const NAMES: [&'static str; #n_literal] = [#(#field_strings),*];

            fn to_svector(&self) -> ::named_vars::nalgebra::SVector<#scalar, #n_literal> {
                ::named_vars::nalgebra::SVector::from([
                    #(self.#field_names),*
                ])
            }

            fn from_svector(v: &::named_vars::nalgebra::SVector<#scalar, #n_literal>) -> Self {
                Self {
                    #(#field_names: v[#field_indexes]),*
                }
            }
        }
    })
}
