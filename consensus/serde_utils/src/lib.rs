mod quoted_int;

pub mod fixed_bytes_hex;
pub mod hex;
pub mod quoted_u256;
pub mod quoted_u64_vec;

pub use quoted_int::{quoted_u64, quoted_u8};
