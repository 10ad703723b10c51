//! Usable address range of a subnet and membership tests.
//!
//! For prefix lengths up to 30 the first and last address of the range are
//! excluded: the minimum border has every host bit clear except the last,
//! the maximum border has every host bit set except the last. A /31 or /32
//! has no spare host bits, so its borders are the whole range.

use super::compare::{in_range, Address};
use super::convert::{format_binary, format_decimal};
use super::validate::{
    parse_binary_ip, parse_binary_mask, parse_byte_mask, parse_decimal_ip, parse_decimal_mask,
};
use crate::config::MAX_LENGTH;
use crate::error::Result;

/// Inclusive `(min, max)` border values for an address and contiguous mask.
pub(crate) fn borders(ip: u32, mask: u32) -> (u32, u32) {
    let prefix = mask.count_ones();
    let network = ip & mask;
    let broadcast = network | !mask;
    if prefix >= u32::from(MAX_LENGTH) - 1 {
        (network, broadcast)
    } else {
        (network | 1, broadcast & !1)
    }
}

fn binary_borders(ip: &str, mask: &str) -> Result<(u32, u32)> {
    Ok(borders(parse_binary_ip(ip)?, parse_binary_mask(mask)?))
}

fn decimal_borders(ip: &str, mask: &str) -> Result<(u32, u32)> {
    Ok(borders(parse_decimal_ip(ip)?, parse_decimal_mask(mask)?))
}

pub fn min_border_binary(ip: &str, mask: &str) -> Result<String> {
    binary_borders(ip, mask).map(|(min, _)| format_binary(min))
}

pub fn max_border_binary(ip: &str, mask: &str) -> Result<String> {
    binary_borders(ip, mask).map(|(_, max)| format_binary(max))
}

/// # Examples
/// ```
/// use ipv4_subnet_utils::processing::min_border_decimal;
/// assert_eq!(min_border_decimal("192.168.1.0", "255.255.255.0").unwrap(), "192.168.1.1");
/// ```
pub fn min_border_decimal(ip: &str, mask: &str) -> Result<String> {
    decimal_borders(ip, mask).map(|(min, _)| format_decimal(min))
}

pub fn max_border_decimal(ip: &str, mask: &str) -> Result<String> {
    decimal_borders(ip, mask).map(|(_, max)| format_decimal(max))
}

/// True if `ip` lies within the borders of the subnet `subnet_ip`/`subnet_mask`.
pub fn is_decimal_ip_in_subnet(ip: &str, subnet_ip: &str, subnet_mask: &str) -> Result<bool> {
    let (min, max) = decimal_borders(subnet_ip, subnet_mask)?;
    Ok(in_range(Address::Decimal(ip).value()?, min, max))
}

pub fn is_binary_ip_in_subnet(ip: &str, subnet_ip: &str, subnet_mask: &str) -> Result<bool> {
    let (min, max) = binary_borders(subnet_ip, subnet_mask)?;
    Ok(in_range(Address::Binary(ip).value()?, min, max))
}

pub fn is_byte_ip_in_subnet(ip: &[u8], subnet_ip: &[u8], subnet_mask: &[u8]) -> Result<bool> {
    let subnet_ip = Address::Bytes(subnet_ip).value()?;
    let subnet_mask = parse_byte_mask(subnet_mask)?;
    let (min, max) = borders(subnet_ip, subnet_mask);
    Ok(in_range(Address::Bytes(ip).value()?, min, max))
}
