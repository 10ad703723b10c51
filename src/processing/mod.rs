//! IPv4 processing logic.
//!
//! Pure functions over the textual and byte representations:
//! - [`validate`] - Format checks for each representation
//! - [`convert`] - Conversions between representations and prefix lengths
//! - [`compare`] - Unsigned ordering and range tests
//! - [`border`] - Subnet borders and membership

mod border;
mod compare;
mod convert;
mod validate;

// Re-export public functions
pub use border::{
    is_binary_ip_in_subnet, is_byte_ip_in_subnet, is_decimal_ip_in_subnet, max_border_binary,
    max_border_decimal, min_border_binary, min_border_decimal,
};
pub use compare::{
    compare_binary_ips, compare_byte_ips, compare_decimal_ips, is_binary_ip_in_between,
    is_byte_ip_in_between, is_decimal_ip_in_between, is_greater, is_in_between, Address,
};
pub use convert::{
    binary_ip_to_byte_ip, binary_ip_to_decimal_ip, binary_ip_to_u32, binary_mask_to_byte_mask,
    binary_mask_to_decimal_mask, binary_mask_to_prefix, byte_ip_to_binary_ip,
    byte_ip_to_decimal_ip, byte_ip_to_u32, byte_mask_to_binary_mask, byte_mask_to_decimal_mask,
    byte_mask_to_prefix, decimal_ip_to_binary_ip, decimal_ip_to_byte_ip, decimal_ip_to_u32,
    decimal_mask_to_binary_mask, decimal_mask_to_byte_mask, decimal_mask_to_prefix,
    prefix_to_binary_mask, prefix_to_byte_mask, prefix_to_decimal_mask, u32_to_binary_ip,
    u32_to_byte_ip, u32_to_decimal_ip,
};
pub use validate::{
    validate_binary_ip, validate_binary_mask, validate_byte_ip, validate_byte_mask,
    validate_decimal_ip, validate_decimal_mask, validate_prefix_length,
};

pub(crate) use border::borders;
pub(crate) use convert::{format_binary, format_decimal, mask_bits};
pub(crate) use validate::{
    parse_binary_ip, parse_binary_mask, parse_byte_ip, parse_byte_mask, parse_decimal_ip,
    parse_decimal_mask,
};
