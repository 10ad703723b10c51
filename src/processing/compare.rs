//! Ordering and range tests over addresses.
//!
//! All comparisons use the unsigned 32-bit value of an address, so
//! `255.255.255.255` is greater than `0.0.0.0`.

use super::validate::{parse_binary_ip, parse_byte_ip, parse_decimal_ip};
use crate::error::Result;

/// An address in one of the supported representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address<'a> {
    /// Dotted decimal, e.g. `10.0.0.1`.
    Decimal(&'a str),
    /// Dotted binary, e.g. `00001010.00000000.00000000.00000001`.
    Binary(&'a str),
    /// Four bytes, most significant first.
    Bytes(&'a [u8]),
}

impl Address<'_> {
    /// Validate the address and return its unsigned value.
    pub fn value(&self) -> Result<u32> {
        match self {
            Address::Decimal(ip) => parse_decimal_ip(ip),
            Address::Binary(ip) => parse_binary_ip(ip),
            Address::Bytes(ip) => parse_byte_ip(ip),
        }
    }
}

/// Inclusive unsigned range test.
pub(crate) fn in_range(value: u32, lo: u32, hi: u32) -> bool {
    lo <= value && value <= hi
}

/// True if `a` is strictly greater than `b`.
pub fn is_greater(a: Address, b: Address) -> Result<bool> {
    Ok(a.value()? > b.value()?)
}

/// True if `lo <= x <= hi`.
pub fn is_in_between(x: Address, lo: Address, hi: Address) -> Result<bool> {
    Ok(in_range(x.value()?, lo.value()?, hi.value()?))
}

/// # Examples
/// ```
/// use ipv4_subnet_utils::processing::compare_decimal_ips;
/// assert!(compare_decimal_ips("255.255.255.255", "0.0.0.0").unwrap());
/// assert!(!compare_decimal_ips("0.0.0.0", "255.255.255.255").unwrap());
/// ```
pub fn compare_decimal_ips(a: &str, b: &str) -> Result<bool> {
    is_greater(Address::Decimal(a), Address::Decimal(b))
}

pub fn compare_binary_ips(a: &str, b: &str) -> Result<bool> {
    is_greater(Address::Binary(a), Address::Binary(b))
}

pub fn compare_byte_ips(a: &[u8], b: &[u8]) -> Result<bool> {
    is_greater(Address::Bytes(a), Address::Bytes(b))
}

pub fn is_decimal_ip_in_between(ip: &str, lo: &str, hi: &str) -> Result<bool> {
    is_in_between(Address::Decimal(ip), Address::Decimal(lo), Address::Decimal(hi))
}

pub fn is_binary_ip_in_between(ip: &str, lo: &str, hi: &str) -> Result<bool> {
    is_in_between(Address::Binary(ip), Address::Binary(lo), Address::Binary(hi))
}

pub fn is_byte_ip_in_between(ip: &[u8], lo: &[u8], hi: &[u8]) -> Result<bool> {
    is_in_between(Address::Bytes(ip), Address::Bytes(lo), Address::Bytes(hi))
}
