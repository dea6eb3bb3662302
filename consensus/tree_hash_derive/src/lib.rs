//! Provides a procedural derive macro for the `TreeHash` trait of the `tree_hash` crate.
//!
//! Structs with named fields are containers: the root of each field is a leaf, in the order the
//! fields are defined.
//!
//! Enums are supported when every variant holds exactly one unnamed field and the enum carries
//! `#[tree_hash(enum_behaviour = "transparent")]`. The root of such an enum is the root of the
//! variant it holds.
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DataEnum, DataStruct, DeriveInput, Ident};

const ENUM_TRANSPARENT: &str = "transparent";

/// Returns a Vec of `syn::Ident` for each named field in the struct, whilst filtering out fields
/// that should not be hashed.
///
/// # Panics
/// Any unnamed struct field (like in a tuple struct) will raise a panic at compile time.
fn get_hashable_fields(struct_data: &DataStruct) -> Vec<&Ident> {
    struct_data
        .fields
        .iter()
        .filter_map(|f| {
            if should_skip_hashing(f) {
                None
            } else {
                Some(match &f.ident {
                    Some(ref ident) => ident,
                    _ => panic!("tree_hash_derive only supports named struct fields."),
                })
            }
        })
        .collect()
}

/// Returns true if some field has an attribute declaring it should not be hashed.
///
/// The field attribute is: `#[tree_hash(skip_hashing)]`
fn should_skip_hashing(field: &syn::Field) -> bool {
    field.attrs.iter().any(|attr| {
        attr.path.is_ident("tree_hash")
            && matches!(
                attr.parse_meta(),
                Ok(syn::Meta::List(list)) if list.nested.iter().any(|nested| matches!(
                    nested,
                    syn::NestedMeta::Meta(syn::Meta::Path(path)) if path.is_ident("skip_hashing")
                ))
            )
    })
}

/// Returns the value of `#[tree_hash(enum_behaviour = "...")]`, if present.
fn enum_behaviour(item: &DeriveInput) -> Option<String> {
    item.attrs
        .iter()
        .filter(|attr| attr.path.is_ident("tree_hash"))
        .filter_map(|attr| match attr.parse_meta() {
            Ok(syn::Meta::List(list)) => Some(list.nested),
            _ => None,
        })
        .flatten()
        .find_map(|nested| match nested {
            syn::NestedMeta::Meta(syn::Meta::NameValue(name_value))
                if name_value.path.is_ident("enum_behaviour") =>
            {
                match name_value.lit {
                    syn::Lit::Str(lit) => Some(lit.value()),
                    _ => panic!("enum_behaviour must be a string, e.g. \"transparent\"."),
                }
            }
            _ => None,
        })
}

/// Implements `tree_hash::TreeHash` for some `struct` or transparent `enum`.
///
/// Fields are hashed in the order they are defined.
#[proc_macro_derive(TreeHash, attributes(tree_hash))]
pub fn tree_hash_derive(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);

    match &item.data {
        syn::Data::Struct(s) => tree_hash_derive_struct(&item, s),
        syn::Data::Enum(e) => match enum_behaviour(&item).as_deref() {
            Some(ENUM_TRANSPARENT) => tree_hash_derive_enum_transparent(&item, e),
            _ => panic!(
                "tree_hash_derive only supports enums with #[tree_hash(enum_behaviour = \"transparent\")]."
            ),
        },
        syn::Data::Union(_) => panic!("tree_hash_derive does not support unions."),
    }
}

fn tree_hash_derive_struct(item: &DeriveInput, struct_data: &DataStruct) -> TokenStream {
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = &item.generics.split_for_impl();

    let idents = get_hashable_fields(struct_data);
    let num_leaves = idents.len();

    let output = quote! {
        impl #impl_generics tree_hash::TreeHash for #name #ty_generics #where_clause {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Container
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("Struct should never be packed.")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("Struct should never be packed.")
            }

            fn tree_hash_root(&self) -> tree_hash::Hash256 {
                let mut hasher = tree_hash::MerkleHasher::with_leaves(#num_leaves);

                #(
                    hasher.write(self.#idents.tree_hash_root().as_bytes())
                        .expect("tree hash derive should not apply too many leaves");
                )*

                hasher.finish().expect("tree hash derive should not have a remaining buffer")
            }
        }
    };
    output.into()
}

fn tree_hash_derive_enum_transparent(item: &DeriveInput, enum_data: &DataEnum) -> TokenStream {
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = &item.generics.split_for_impl();

    let variant_idents = enum_data
        .variants
        .iter()
        .map(|variant| match &variant.fields {
            syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &variant.ident,
            _ => panic!("tree_hash_derive only supports enum variants with a single unnamed field."),
        })
        .collect::<Vec<_>>();

    let output = quote! {
        impl #impl_generics tree_hash::TreeHash for #name #ty_generics #where_clause {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Container
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("Enum should never be packed.")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("Enum should never be packed.")
            }

            fn tree_hash_root(&self) -> tree_hash::Hash256 {
                match self {
                    #(
                        #name::#variant_idents(inner) => inner.tree_hash_root(),
                    )*
                }
            }
        }
    };
    output.into()
}
