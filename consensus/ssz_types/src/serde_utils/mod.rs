//! Alternative serde formats for vectors and lists, for use with `#[serde(with = "...")]`.
pub mod hex_fixed_vec;
pub mod hex_var_list;
pub mod list_of_hex_var_list;
pub mod quoted_u64_fixed_vec;
pub mod quoted_u64_var_list;
