//! Conversions between decimal text, binary text, byte arrays, integer
//! values and prefix lengths.
//!
//! Every entry point validates its own input, so a malformed value fails
//! with the same [`InvalidFormat`](crate::error::InvalidFormat) wherever it
//! is passed in.

use super::validate::{
    parse_binary_ip, parse_binary_mask, parse_byte_ip, parse_byte_mask, parse_decimal_ip,
    parse_decimal_mask, validate_prefix_length,
};
use crate::config::{MAX_LENGTH, OCTETS, OCTET_BITS};
use crate::error::Result;
use itertools::Itertools;

/// Render a value as dotted decimal text.
pub(crate) fn format_decimal(value: u32) -> String {
    value.to_be_bytes().iter().join(".")
}

/// Render a value as dotted binary text, each octet zero padded to 8 digits.
pub(crate) fn format_binary(value: u32) -> String {
    value
        .to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:0width$b}", width = OCTET_BITS))
        .join(".")
}

/// Convert a CIDR prefix length to a subnet mask as u32.
pub(crate) fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Mask with the top `len` bits set, as dotted decimal.
///
/// # Examples
/// ```
/// use ipv4_subnet_utils::processing::prefix_to_decimal_mask;
/// assert_eq!(prefix_to_decimal_mask(24).unwrap(), "255.255.255.0");
/// assert_eq!(prefix_to_decimal_mask(0).unwrap(), "0.0.0.0");
/// ```
pub fn prefix_to_decimal_mask(len: u8) -> Result<String> {
    validate_prefix_length(len)?;
    Ok(format_decimal(mask_bits(len)))
}

/// Number of one bits in a decimal mask.
pub fn decimal_mask_to_prefix(mask: &str) -> Result<u8> {
    Ok(parse_decimal_mask(mask)?.count_ones() as u8)
}

/// `len` ones followed by `32 - len` zeros, split into 4 dotted groups.
pub fn prefix_to_binary_mask(len: u8) -> Result<String> {
    validate_prefix_length(len)?;
    let len = len as usize;
    let bits = "1".repeat(len) + &"0".repeat(MAX_LENGTH as usize - len);
    let groups = bits.chars().chunks(OCTET_BITS);
    let mask = groups
        .into_iter()
        .map(|group| group.collect::<String>())
        .join(".");
    Ok(mask)
}

/// Position of the first zero bit in a binary mask, or 32 if there is none.
pub fn binary_mask_to_prefix(mask: &str) -> Result<u8> {
    parse_binary_mask(mask)?;
    let bits = mask.replace('.', "");
    Ok(bits.find('0').map_or(MAX_LENGTH, |i| i as u8))
}

pub fn prefix_to_byte_mask(len: u8) -> Result<[u8; OCTETS]> {
    validate_prefix_length(len)?;
    Ok(mask_bits(len).to_be_bytes())
}

pub fn byte_mask_to_prefix(mask: &[u8]) -> Result<u8> {
    Ok(parse_byte_mask(mask)?.count_ones() as u8)
}

pub fn decimal_mask_to_binary_mask(mask: &str) -> Result<String> {
    parse_decimal_mask(mask).map(format_binary)
}

pub fn binary_mask_to_decimal_mask(mask: &str) -> Result<String> {
    parse_binary_mask(mask).map(format_decimal)
}

pub fn decimal_mask_to_byte_mask(mask: &str) -> Result<[u8; OCTETS]> {
    parse_decimal_mask(mask).map(u32::to_be_bytes)
}

pub fn byte_mask_to_decimal_mask(mask: &[u8]) -> Result<String> {
    parse_byte_mask(mask).map(format_decimal)
}

pub fn binary_mask_to_byte_mask(mask: &str) -> Result<[u8; OCTETS]> {
    parse_binary_mask(mask).map(u32::to_be_bytes)
}

pub fn byte_mask_to_binary_mask(mask: &[u8]) -> Result<String> {
    parse_byte_mask(mask).map(format_binary)
}

/// `192.168.1.10` to `11000000.10101000.00000001.00001010`.
pub fn decimal_ip_to_binary_ip(ip: &str) -> Result<String> {
    parse_decimal_ip(ip).map(format_binary)
}

pub fn binary_ip_to_decimal_ip(ip: &str) -> Result<String> {
    parse_binary_ip(ip).map(format_decimal)
}

pub fn decimal_ip_to_byte_ip(ip: &str) -> Result<[u8; OCTETS]> {
    parse_decimal_ip(ip).map(u32::to_be_bytes)
}

pub fn byte_ip_to_decimal_ip(ip: &[u8]) -> Result<String> {
    parse_byte_ip(ip).map(format_decimal)
}

pub fn binary_ip_to_byte_ip(ip: &str) -> Result<[u8; OCTETS]> {
    parse_binary_ip(ip).map(u32::to_be_bytes)
}

pub fn byte_ip_to_binary_ip(ip: &[u8]) -> Result<String> {
    parse_byte_ip(ip).map(format_binary)
}

/// Big-endian value of a 4 byte address, first byte most significant.
///
/// # Examples
/// ```
/// use ipv4_subnet_utils::processing::byte_ip_to_u32;
/// assert_eq!(byte_ip_to_u32(&[255, 255, 255, 255]).unwrap(), u32::MAX);
/// ```
pub fn byte_ip_to_u32(ip: &[u8]) -> Result<u32> {
    parse_byte_ip(ip)
}

pub fn decimal_ip_to_u32(ip: &str) -> Result<u32> {
    parse_decimal_ip(ip)
}

pub fn binary_ip_to_u32(ip: &str) -> Result<u32> {
    parse_binary_ip(ip)
}

pub fn u32_to_decimal_ip(value: u32) -> String {
    format_decimal(value)
}

pub fn u32_to_binary_ip(value: u32) -> String {
    format_binary(value)
}

pub fn u32_to_byte_ip(value: u32) -> [u8; OCTETS] {
    value.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Format;

    #[test]
    fn test_mask_bits() {
        assert_eq!(mask_bits(0), 0x00000000);
        assert_eq!(mask_bits(8), 0xFF000000);
        assert_eq!(mask_bits(16), 0xFFFF0000);
        assert_eq!(mask_bits(24), 0xFFFFFF00);
        assert_eq!(mask_bits(32), 0xFFFFFFFF);
    }

    #[test]
    fn test_prefix_to_masks() {
        assert_eq!(prefix_to_decimal_mask(0).unwrap(), "0.0.0.0");
        assert_eq!(prefix_to_decimal_mask(20).unwrap(), "255.255.240.0");
        assert_eq!(prefix_to_decimal_mask(32).unwrap(), "255.255.255.255");
        assert_eq!(
            prefix_to_decimal_mask(33).unwrap_err().format,
            Format::PrefixLength
        );

        assert_eq!(
            prefix_to_binary_mask(0).unwrap(),
            "00000000.00000000.00000000.00000000"
        );
        assert_eq!(
            prefix_to_binary_mask(20).unwrap(),
            "11111111.11111111.11110000.00000000"
        );
        assert_eq!(
            prefix_to_binary_mask(32).unwrap(),
            "11111111.11111111.11111111.11111111"
        );
        assert!(prefix_to_binary_mask(40).is_err());

        assert_eq!(prefix_to_byte_mask(25).unwrap(), [255, 255, 255, 128]);
    }

    #[test]
    fn test_masks_to_prefix() {
        assert_eq!(decimal_mask_to_prefix("255.255.255.0").unwrap(), 24);
        assert_eq!(decimal_mask_to_prefix("0.0.0.0").unwrap(), 0);
        assert_eq!(
            binary_mask_to_prefix("11111111.11111111.11111110.00000000").unwrap(),
            23
        );
        assert_eq!(
            binary_mask_to_prefix("11111111.11111111.11111111.11111111").unwrap(),
            32
        );
        assert_eq!(byte_mask_to_prefix(&[255, 192, 0, 0]).unwrap(), 10);
        assert!(decimal_mask_to_prefix("255.0.255.0").is_err());
    }

    #[test]
    fn test_prefix_round_trip() {
        for len in 0..=MAX_LENGTH {
            let binary = prefix_to_binary_mask(len).unwrap();
            assert_eq!(binary_mask_to_prefix(&binary).unwrap(), len);
            let decimal = prefix_to_decimal_mask(len).unwrap();
            assert_eq!(decimal_mask_to_prefix(&decimal).unwrap(), len);
            assert_eq!(decimal_mask_to_binary_mask(&decimal).unwrap(), binary);
        }
    }

    #[test]
    fn test_ip_conversions() {
        assert_eq!(
            decimal_ip_to_binary_ip("192.168.1.10").unwrap(),
            "11000000.10101000.00000001.00001010"
        );
        assert_eq!(
            binary_ip_to_decimal_ip("00001010.00000000.00000000.00000001").unwrap(),
            "10.0.0.1"
        );
        assert_eq!(decimal_ip_to_byte_ip("10.20.30.40").unwrap(), [10, 20, 30, 40]);
        assert_eq!(byte_ip_to_decimal_ip(&[172, 16, 0, 1]).unwrap(), "172.16.0.1");
        assert_eq!(
            binary_ip_to_byte_ip("11111111.00000000.10000000.00000001").unwrap(),
            [255, 0, 128, 1]
        );
        // leading zeros normalize
        assert_eq!(
            binary_ip_to_decimal_ip(&decimal_ip_to_binary_ip("010.001.0.00").unwrap()).unwrap(),
            "10.1.0.0"
        );
    }

    #[test]
    fn test_high_bit_bytes() {
        assert_eq!(
            byte_ip_to_binary_ip(&[255, 255, 255, 255]).unwrap(),
            "11111111.11111111.11111111.11111111"
        );
        assert_eq!(byte_ip_to_decimal_ip(&[255, 128, 200, 0]).unwrap(), "255.128.200.0");
        assert_eq!(byte_ip_to_u32(&[128, 0, 0, 0]).unwrap(), 0x8000_0000);
        assert_eq!(
            byte_ip_to_u32(&[192, 168, 1, 2]).unwrap(),
            (192 << 24) | (168 << 16) | (1 << 8) | 2
        );
    }

    #[test]
    fn test_u32_conversions() {
        assert_eq!(decimal_ip_to_u32("0.0.0.1").unwrap(), 1);
        assert_eq!(
            binary_ip_to_u32("10000000.00000000.00000000.00000000").unwrap(),
            0x8000_0000
        );
        assert_eq!(u32_to_decimal_ip(0xC0A8_0101), "192.168.1.1");
        assert_eq!(
            u32_to_binary_ip(1),
            "00000000.00000000.00000000.00000001"
        );
        assert_eq!(u32_to_byte_ip(0x0A00_0001), [10, 0, 0, 1]);
    }

    #[test]
    fn test_round_trips() {
        for ip in ["0.0.0.0", "1.2.3.4", "192.168.100.200", "255.255.255.255"] {
            let binary = decimal_ip_to_binary_ip(ip).unwrap();
            assert_eq!(binary_ip_to_decimal_ip(&binary).unwrap(), ip);
            let bytes = decimal_ip_to_byte_ip(ip).unwrap();
            assert_eq!(byte_ip_to_decimal_ip(&bytes).unwrap(), ip);
            let bytes = binary_ip_to_byte_ip(&binary).unwrap();
            assert_eq!(byte_ip_to_binary_ip(&bytes).unwrap(), binary);
        }
        for mask in ["0.0.0.0", "255.128.0.0", "255.255.255.254", "255.255.255.255"] {
            let binary = decimal_mask_to_binary_mask(mask).unwrap();
            assert_eq!(binary_mask_to_decimal_mask(&binary).unwrap(), mask);
            let bytes = decimal_mask_to_byte_mask(mask).unwrap();
            assert_eq!(byte_mask_to_decimal_mask(&bytes).unwrap(), mask);
            let bytes = binary_mask_to_byte_mask(&binary).unwrap();
            assert_eq!(byte_mask_to_binary_mask(&bytes).unwrap(), binary);
        }
    }

    #[test]
    fn test_conversions_revalidate() {
        assert_eq!(
            decimal_ip_to_binary_ip("1.2.3").unwrap_err().format,
            Format::DecimalIp
        );
        assert_eq!(
            byte_ip_to_decimal_ip(&[1, 2, 3]).unwrap_err().format,
            Format::ByteIp
        );
        assert_eq!(
            binary_mask_to_decimal_mask("10101010.00000000.00000000.00000000")
                .unwrap_err()
                .format,
            Format::BinaryMask
        );
        assert!(byte_mask_to_binary_mask(&[255, 255, 255, 255, 0]).is_err());
    }
}
