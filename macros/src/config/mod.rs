//! Config derive macro - generates FIELDS and KEYS.

mod attr;
mod field;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::get_rename_all;
use field::FieldInfo;

/// Generate Config implementation (FIELDS + KEYS).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let casing = match get_rename_all(&input.attrs).as_deref() {
        None | Some("snake_case") => types::Casing::Snake,
        Some("camelCase") => types::Casing::Camel,
        Some(other) => {
            let msg = format!("unsupported rename_all value `{other}`");
            return quote! { compile_error!(#msg); };
        }
    };

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); }
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    // Skipped fields carry no raw key
    let field_infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(|f| FieldInfo::from_field(f, casing))
        .filter(|f| !f.skip)
        .collect();

    let field_defs = field_infos.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = field_infos.iter().map(|f| {
        let name = &f.name;
        let raw = &f.raw_name;
        quote! { #name: crate::config::FieldPath::new(#raw), }
    });

    let keys = field_infos.iter().map(|f| {
        let raw = &f.raw_name;
        quote! { #raw, }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };

            /// Raw keys accepted for this record.
            pub const KEYS: &'static [&'static str] = &[#(#keys)*];
        }
    }
}
