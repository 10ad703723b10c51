//! Format checks for every representation.
//!
//! The public `validate_*` functions are gates: they return `Ok(())` or an
//! [`InvalidFormat`]. The crate-internal `parse_*` helpers do the same checks
//! and hand back the parsed value so converters never parse twice.

use crate::config::{MASK_OCTETS, MAX_LENGTH, OCTETS};
use crate::error::{Format, InvalidFormat, Result};
use regex::Regex;
use std::sync::OnceLock;

static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();
static BINARY_REGEX: OnceLock<Regex> = OnceLock::new();

fn decimal_regex() -> &'static Regex {
    DECIMAL_REGEX.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex")
    })
}

fn binary_regex() -> &'static Regex {
    BINARY_REGEX.get_or_init(|| {
        Regex::new(r"^([01]{8})\.([01]{8})\.([01]{8})\.([01]{8})$").expect("Invalid Regex")
    })
}

/// True when `mask` is a run of one bits followed only by zero bits.
pub(crate) fn is_contiguous_mask(mask: u32) -> bool {
    mask.leading_ones() + mask.trailing_zeros() == u32::BITS
}

/// Parse dotted decimal text into octets, each in 0-255.
pub(crate) fn parse_decimal(value: &str, format: Format) -> Result<[u8; OCTETS]> {
    let caps = decimal_regex()
        .captures(value)
        .ok_or_else(|| InvalidFormat::new(value, format))?;
    let mut octets = [0u8; OCTETS];
    for (i, octet) in octets.iter_mut().enumerate() {
        // 3 digits may still overflow a u8, e.g. 256
        *octet = caps[i + 1]
            .parse()
            .map_err(|_| InvalidFormat::new(value, format))?;
    }
    Ok(octets)
}

/// Parse dotted binary text into octets.
pub(crate) fn parse_binary(value: &str, format: Format) -> Result<[u8; OCTETS]> {
    let caps = binary_regex()
        .captures(value)
        .ok_or_else(|| InvalidFormat::new(value, format))?;
    let mut octets = [0u8; OCTETS];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&caps[i + 1], 2)
            .map_err(|_| InvalidFormat::new(value, format))?;
    }
    Ok(octets)
}

/// Check a byte slice holds exactly one address.
pub(crate) fn parse_bytes(value: &[u8], format: Format) -> Result<[u8; OCTETS]> {
    <[u8; OCTETS]>::try_from(value).map_err(|_| InvalidFormat::new(format!("{value:?}"), format))
}

pub(crate) fn parse_decimal_ip(ip: &str) -> Result<u32> {
    parse_decimal(ip, Format::DecimalIp).map(u32::from_be_bytes)
}

pub(crate) fn parse_binary_ip(ip: &str) -> Result<u32> {
    parse_binary(ip, Format::BinaryIp).map(u32::from_be_bytes)
}

pub(crate) fn parse_byte_ip(ip: &[u8]) -> Result<u32> {
    parse_bytes(ip, Format::ByteIp).map(u32::from_be_bytes)
}

pub(crate) fn parse_decimal_mask(mask: &str) -> Result<u32> {
    let octets = parse_decimal(mask, Format::DecimalMask)?;
    if !octets.iter().all(|o| MASK_OCTETS.contains(o)) {
        return Err(InvalidFormat::new(mask, Format::DecimalMask));
    }
    let bits = u32::from_be_bytes(octets);
    // 255.0.255.0 passes the per octet check
    if !is_contiguous_mask(bits) {
        return Err(InvalidFormat::new(mask, Format::DecimalMask));
    }
    Ok(bits)
}

pub(crate) fn parse_binary_mask(mask: &str) -> Result<u32> {
    let bits = parse_binary(mask, Format::BinaryMask).map(u32::from_be_bytes)?;
    if !is_contiguous_mask(bits) {
        return Err(InvalidFormat::new(mask, Format::BinaryMask));
    }
    Ok(bits)
}

pub(crate) fn parse_byte_mask(mask: &[u8]) -> Result<u32> {
    let bits = parse_bytes(mask, Format::ByteMask).map(u32::from_be_bytes)?;
    if !is_contiguous_mask(bits) {
        return Err(InvalidFormat::new(format!("{mask:?}"), Format::ByteMask));
    }
    Ok(bits)
}

/// Check a dotted decimal address such as `192.168.1.10`.
pub fn validate_decimal_ip(ip: &str) -> Result<()> {
    parse_decimal_ip(ip).map(|_| ())
}

/// Check a dotted decimal mask. Every octet must be one of
/// [`MASK_OCTETS`] and the whole mask must be contiguous.
pub fn validate_decimal_mask(mask: &str) -> Result<()> {
    parse_decimal_mask(mask).map(|_| ())
}

/// Check a dotted binary address such as `11000000.10101000.00000001.00001010`.
pub fn validate_binary_ip(ip: &str) -> Result<()> {
    parse_binary_ip(ip).map(|_| ())
}

/// Check a dotted binary mask. Ones must come before zeros.
pub fn validate_binary_mask(mask: &str) -> Result<()> {
    parse_binary_mask(mask).map(|_| ())
}

/// Check a byte address is exactly 4 bytes long.
pub fn validate_byte_ip(ip: &[u8]) -> Result<()> {
    parse_byte_ip(ip).map(|_| ())
}

/// Check a byte mask is 4 bytes long and contiguous.
pub fn validate_byte_mask(mask: &[u8]) -> Result<()> {
    parse_byte_mask(mask).map(|_| ())
}

/// Check a prefix length is in `0..=32`.
///
/// Accepts any integer type so negative lengths reported by callers are
/// rejected here rather than wrapping.
///
/// # Examples
/// ```
/// use ipv4_subnet_utils::processing::validate_prefix_length;
/// assert!(validate_prefix_length(24u8).is_ok());
/// assert!(validate_prefix_length(-1).is_err());
/// ```
pub fn validate_prefix_length<T: Into<i64>>(len: T) -> Result<()> {
    let len = len.into();
    if (0..=i64::from(MAX_LENGTH)).contains(&len) {
        Ok(())
    } else {
        Err(InvalidFormat::new(len.to_string(), Format::PrefixLength))
    }
}
