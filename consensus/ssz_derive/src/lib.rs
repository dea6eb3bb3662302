//! Provides procedural derive macros for the `Encode`, `Decode` and `SszSchema` traits of the
//! `ssz` crate.
//!
//! ## Structs
//!
//! Structs with named fields are SSZ containers. Fields are encoded, decoded and described in the
//! order they are defined.
//!
//! ## Enums
//!
//! Enums are only supported when every variant holds exactly one unnamed field, and only in the
//! "transparent" style: the enum encodes as whichever variant it holds, with no selector byte.
//!
//! ```ignore
//! #[derive(Encode, SszSchema)]
//! #[ssz(enum_behaviour = "transparent")]
//! enum Block {
//!     Base(BlockBase),
//!     Altair(BlockAltair),
//! }
//! ```
//!
//! The bytes of a transparent enum carry no hint of the variant, so `Decode` cannot be derived for
//! enums. Decoding must be done by a function that is told which variant to expect.
//!
//! `SszSchema` may be derived for any such enum, transparent or not, and describes it as a union
//! of its variants.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DataEnum, DataStruct, DeriveInput, Ident, LitStr, Type};

const ENUM_TRANSPARENT: &str = "transparent";

/// Returns the `(ident, type)` of each named field in the struct.
///
/// # Panics
/// Any unnamed struct field (like in a tuple struct) will raise a panic at compile time.
fn named_fields(struct_data: &DataStruct) -> Vec<(&Ident, &Type)> {
    struct_data
        .fields
        .iter()
        .map(|f| match &f.ident {
            Some(ident) => (ident, &f.ty),
            None => panic!("ssz_derive only supports named struct fields."),
        })
        .collect()
}

/// Returns the `(ident, inner type)` of each variant in the enum.
///
/// # Panics
/// Any variant without exactly one unnamed field will raise a panic at compile time.
fn single_field_variants(enum_data: &DataEnum) -> Vec<(&Ident, &Type)> {
    enum_data
        .variants
        .iter()
        .map(|variant| match &variant.fields {
            syn::Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                (&variant.ident, &fields.unnamed[0].ty)
            }
            _ => panic!("ssz_derive only supports enum variants with a single unnamed field."),
        })
        .collect()
}

/// Returns the value of `#[ssz(enum_behaviour = "...")]`, if present.
fn enum_behaviour(item: &DeriveInput) -> Option<String> {
    item.attrs
        .iter()
        .filter(|attr| attr.path.is_ident("ssz"))
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

/// The field or variant name, without any raw identifier prefix.
fn ident_name(ident: &Ident) -> LitStr {
    let name = ident.to_string();
    LitStr::new(name.trim_start_matches("r#"), ident.span())
}

/// Implements `ssz::Encode` for some `struct` or transparent `enum`.
///
/// Fields are encoded in the order they are defined.
#[proc_macro_derive(Encode, attributes(ssz))]
pub fn ssz_encode_derive(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);

    match &item.data {
        syn::Data::Struct(s) => ssz_encode_derive_struct(&item, s),
        syn::Data::Enum(e) => match enum_behaviour(&item).as_deref() {
            Some(ENUM_TRANSPARENT) => ssz_encode_derive_enum_transparent(&item, e),
            _ => panic!("ssz_derive only supports enums with #[ssz(enum_behaviour = \"transparent\")]."),
        },
        syn::Data::Union(_) => panic!("ssz_derive does not support unions."),
    }
}

fn ssz_encode_derive_struct(item: &DeriveInput, struct_data: &DataStruct) -> TokenStream {
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = &item.generics.split_for_impl();

    let fields = named_fields(struct_data);
    let idents = fields.iter().map(|(ident, _)| ident).collect::<Vec<_>>();
    let types = fields.iter().map(|(_, ty)| ty).collect::<Vec<_>>();

    let output = quote! {
        impl #impl_generics ssz::Encode for #name #ty_generics #where_clause {
            fn is_ssz_fixed_len() -> bool {
                #(
                    <#types as ssz::Encode>::is_ssz_fixed_len() &&
                )*
                    true
            }

            fn ssz_fixed_len() -> usize {
                if <Self as ssz::Encode>::is_ssz_fixed_len() {
                    #(
                        <#types as ssz::Encode>::ssz_fixed_len() +
                    )*
                        0
                } else {
                    ssz::BYTES_PER_LENGTH_OFFSET
                }
            }

            fn ssz_bytes_len(&self) -> usize {
                if <Self as ssz::Encode>::is_ssz_fixed_len() {
                    <Self as ssz::Encode>::ssz_fixed_len()
                } else {
                    let mut len: usize = 0;
                    #(
                        if <#types as ssz::Encode>::is_ssz_fixed_len() {
                            len += <#types as ssz::Encode>::ssz_fixed_len();
                        } else {
                            len += ssz::BYTES_PER_LENGTH_OFFSET;
                            len += self.#idents.ssz_bytes_len();
                        }
                    )*

                    len
                }
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                let offset = #(
                        <#types as ssz::Encode>::ssz_fixed_len() +
                    )*
                        0;

                let mut encoder = ssz::SszEncoder::container(buf, offset);

                #(
                    encoder.append(&self.#idents);
                )*

                encoder.finalize();
            }
        }
    };
    output.into()
}

fn ssz_encode_derive_enum_transparent(item: &DeriveInput, enum_data: &DataEnum) -> TokenStream {
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = &item.generics.split_for_impl();

    let variants = single_field_variants(enum_data);
    let variant_idents = variants.iter().map(|(ident, _)| ident).collect::<Vec<_>>();
    let types = variants.iter().map(|(_, ty)| ty).collect::<Vec<_>>();
    let first_type = types
        .first()
        .unwrap_or_else(|| panic!("ssz_derive does not support enums without variants."));

    let output = quote! {
        impl #impl_generics ssz::Encode for #name #ty_generics #where_clause {
            fn is_ssz_fixed_len() -> bool {
                // Fixed only if every variant is fixed and they all have the same length.
                let lens = [
                    #(
                        if <#types as ssz::Encode>::is_ssz_fixed_len() {
                            Some(<#types as ssz::Encode>::ssz_fixed_len())
                        } else {
                            None
                        },
                    )*
                ];
                lens.iter().all(|len| len.is_some() && *len == lens[0])
            }

            fn ssz_fixed_len() -> usize {
                if <Self as ssz::Encode>::is_ssz_fixed_len() {
                    <#first_type as ssz::Encode>::ssz_fixed_len()
                } else {
                    ssz::BYTES_PER_LENGTH_OFFSET
                }
            }

            fn ssz_bytes_len(&self) -> usize {
                match self {
                    #(
                        #name::#variant_idents(inner) => inner.ssz_bytes_len(),
                    )*
                }
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                match self {
                    #(
                        #name::#variant_idents(inner) => inner.ssz_append(buf),
                    )*
                }
            }
        }
    };
    output.into()
}

/// Implements `ssz::Decode` for some `struct`.
///
/// Fields are decoded in the order they are defined.
#[proc_macro_derive(Decode, attributes(ssz))]
pub fn ssz_decode_derive(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);

    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = &item.generics.split_for_impl();

    let struct_data = match &item.data {
        syn::Data::Struct(s) => s,
        _ => panic!(
            "ssz_derive only supports Decode for structs; decode enums by naming the variant."
        ),
    };

    let fields = named_fields(struct_data);
    let idents = fields.iter().map(|(ident, _)| ident).collect::<Vec<_>>();
    let types = fields.iter().map(|(_, ty)| ty).collect::<Vec<_>>();

    let output = quote! {
        impl #impl_generics ssz::Decode for #name #ty_generics #where_clause {
            fn is_ssz_fixed_len() -> bool {
                #(
                    <#types as ssz::Decode>::is_ssz_fixed_len() &&
                )*
                    true
            }

            fn ssz_fixed_len() -> usize {
                if <Self as ssz::Decode>::is_ssz_fixed_len() {
                    #(
                        <#types as ssz::Decode>::ssz_fixed_len() +
                    )*
                        0
                } else {
                    ssz::BYTES_PER_LENGTH_OFFSET
                }
            }

            fn from_ssz_bytes(bytes: &[u8]) -> std::result::Result<Self, ssz::DecodeError> {
                let num_fixed_bytes = #(
                        <#types as ssz::Decode>::ssz_fixed_len() +
                    )*
                        0;

                let len = bytes.len();
                if <Self as ssz::Decode>::is_ssz_fixed_len() {
                    if len != num_fixed_bytes {
                        return Err(ssz::DecodeError::InvalidByteLength {
                            len,
                            expected: num_fixed_bytes,
                        });
                    }
                } else if len < num_fixed_bytes {
                    return Err(ssz::DecodeError::InvalidByteLength {
                        len,
                        expected: num_fixed_bytes,
                    });
                }

                let mut builder = ssz::SszDecoderBuilder::new(bytes);

                #(
                    builder.register_type::<#types>()?;
                )*

                let mut decoder = builder.build()?;

                Ok(Self {
                    #(
                        #idents: decoder.decode_next()?,
                    )*
                })
            }
        }
    };
    output.into()
}

/// Implements `ssz::SszSchema` for some `struct` (a container) or `enum` (a union of its
/// variants).
#[proc_macro_derive(SszSchema, attributes(ssz))]
pub fn ssz_schema_derive(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);

    let name = &item.ident;
    let name_str = ident_name(name);
    let (impl_generics, ty_generics, where_clause) = &item.generics.split_for_impl();

    let body = match &item.data {
        syn::Data::Struct(s) => {
            let fields = named_fields(s);
            let names = fields.iter().map(|(ident, _)| ident_name(ident));
            let types = fields.iter().map(|(_, ty)| ty);

            quote! {
                ssz::TypeDescriptor::container(
                    #name_str,
                    vec![
                        #(
                            ssz::Field::new(#names, <#types as ssz::SszSchema>::ssz_schema()),
                        )*
                    ],
                )
            }
        }
        syn::Data::Enum(e) => {
            let variants = single_field_variants(e);
            let names = variants.iter().map(|(ident, _)| ident_name(ident));
            let types = variants.iter().map(|(_, ty)| ty);

            quote! {
                ssz::TypeDescriptor::union(
                    #name_str,
                    vec![
                        #(
                            ssz::Variant::new(#names, <#types as ssz::SszSchema>::ssz_schema()),
                        )*
                    ],
                )
            }
        }
        syn::Data::Union(_) => panic!("ssz_derive does not support unions."),
    };

    let output = quote! {
        impl #impl_generics ssz::SszSchema for #name #ty_generics #where_clause {
            fn ssz_schema() -> ssz::TypeDescriptor {
                #body
            }
        }
    };
    output.into()
}
