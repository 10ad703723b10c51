//! Self-validating IPv4 address and mask value types.
//!
//! Each type can only be built through a checked constructor, so holding one
//! means the value is well formed. All of them store the canonical unsigned
//! 32-bit value and compare by it.

use crate::config::{MAX_LENGTH, OCTETS};
use crate::error::{InvalidFormat, Result};
use crate::processing::{
    format_binary, format_decimal, mask_bits, parse_binary_ip, parse_binary_mask, parse_byte_ip,
    parse_byte_mask, parse_decimal_ip, parse_decimal_mask, validate_prefix_length,
};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Display, parsing and serde for the text backed types.
macro_rules! impl_text_repr {
    ($name:ident, $parse:path, $render:path) => {
        impl $name {
            /// Parse and validate the text form.
            pub fn new(text: &str) -> Result<$name> {
                $parse(text).map($name)
            }

            /// The canonical unsigned value.
            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&$render(self.0))
            }
        }

        impl FromStr for $name {
            type Err = InvalidFormat;

            fn from_str(s: &str) -> Result<$name> {
                $name::new(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<$name, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $name::new(&s).map_err(de::Error::custom)
            }
        }
    };
}

/// Dotted decimal address, e.g. `192.168.1.10`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecimalIp(u32);

/// Dotted binary address, e.g. `11000000.10101000.00000001.00001010`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinaryIp(u32);

/// Four byte address, most significant octet first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteIp(u32);

/// Dotted decimal subnet mask, e.g. `255.255.255.0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecimalMask(u32);

/// Dotted binary subnet mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinaryMask(u32);

/// Four byte subnet mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteMask(u32);

impl_text_repr!(DecimalIp, parse_decimal_ip, format_decimal);
impl_text_repr!(BinaryIp, parse_binary_ip, format_binary);
impl_text_repr!(DecimalMask, parse_decimal_mask, format_decimal);
impl_text_repr!(BinaryMask, parse_binary_mask, format_binary);

impl DecimalIp {
    pub fn to_binary(&self) -> BinaryIp {
        BinaryIp(self.0)
    }

    pub fn to_bytes(&self) -> ByteIp {
        ByteIp(self.0)
    }
}

impl BinaryIp {
    pub fn to_decimal(&self) -> DecimalIp {
        DecimalIp(self.0)
    }

    pub fn to_bytes(&self) -> ByteIp {
        ByteIp(self.0)
    }
}

impl ByteIp {
    /// Validate that `bytes` holds exactly 4 bytes.
    pub fn new(bytes: &[u8]) -> Result<ByteIp> {
        parse_byte_ip(bytes).map(ByteIp)
    }

    pub fn octets(&self) -> [u8; OCTETS] {
        self.0.to_be_bytes()
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn to_decimal(&self) -> DecimalIp {
        DecimalIp(self.0)
    }

    pub fn to_binary(&self) -> BinaryIp {
        BinaryIp(self.0)
    }
}

impl From<Ipv4Addr> for DecimalIp {
    fn from(addr: Ipv4Addr) -> Self {
        DecimalIp(u32::from(addr))
    }
}

impl From<DecimalIp> for Ipv4Addr {
    fn from(ip: DecimalIp) -> Self {
        Ipv4Addr::from(ip.0)
    }
}

impl From<u32> for DecimalIp {
    fn from(value: u32) -> Self {
        DecimalIp(value)
    }
}

impl From<u32> for BinaryIp {
    fn from(value: u32) -> Self {
        BinaryIp(value)
    }
}

impl From<[u8; OCTETS]> for ByteIp {
    fn from(octets: [u8; OCTETS]) -> Self {
        ByteIp(u32::from_be_bytes(octets))
    }
}

impl DecimalMask {
    /// Mask with the top `len` bits set.
    pub fn from_prefix(len: u8) -> Result<DecimalMask> {
        validate_prefix_length(len)?;
        Ok(DecimalMask(mask_bits(len)))
    }

    pub fn prefix_length(&self) -> u8 {
        self.0.count_ones() as u8
    }

    pub fn to_binary(&self) -> BinaryMask {
        BinaryMask(self.0)
    }

    pub fn to_bytes(&self) -> ByteMask {
        ByteMask(self.0)
    }
}

impl BinaryMask {
    pub fn prefix_length(&self) -> u8 {
        // contiguous, so the first zero bit is the prefix length
        self.0.leading_ones() as u8
    }

    pub fn to_decimal(&self) -> DecimalMask {
        DecimalMask(self.0)
    }

    pub fn to_bytes(&self) -> ByteMask {
        ByteMask(self.0)
    }
}

impl ByteMask {
    /// Validate that `bytes` is a 4 byte contiguous mask.
    pub fn new(bytes: &[u8]) -> Result<ByteMask> {
        parse_byte_mask(bytes).map(ByteMask)
    }

    pub fn octets(&self) -> [u8; OCTETS] {
        self.0.to_be_bytes()
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn prefix_length(&self) -> u8 {
        self.0.count_ones() as u8
    }

    pub fn to_decimal(&self) -> DecimalMask {
        DecimalMask(self.0)
    }

    pub fn to_binary(&self) -> BinaryMask {
        BinaryMask(self.0)
    }
}

impl Default for DecimalMask {
    /// A /32 host mask.
    fn default() -> Self {
        DecimalMask(mask_bits(MAX_LENGTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Format;

    #[test]
    fn test_decimal_ip() {
        let ip = DecimalIp::new("192.168.1.10").unwrap();
        assert_eq!(ip.value(), 0xC0A8010A);
        assert_eq!(ip.to_string(), "192.168.1.10");
        assert_eq!(
            ip.to_binary().to_string(),
            "11000000.10101000.00000001.00001010"
        );
        assert_eq!(ip.to_bytes().octets(), [192, 168, 1, 10]);
        assert_eq!(Ipv4Addr::from(ip), Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(DecimalIp::from(Ipv4Addr::new(10, 0, 0, 1)).to_string(), "10.0.0.1");

        let err = DecimalIp::new("256.1.1.1").unwrap_err();
        assert_eq!(err.format, Format::DecimalIp);
        assert!("1.2.3".parse::<DecimalIp>().is_err());
    }

    #[test]
    fn test_binary_ip() {
        let ip: BinaryIp = "11111111.00000000.00000000.00000001".parse().unwrap();
        assert_eq!(ip.to_decimal().to_string(), "255.0.0.1");
        assert_eq!(ip.to_bytes().octets(), [255, 0, 0, 1]);
        assert!(BinaryIp::new("11111111.00000000.00000000.0000001").is_err());
    }

    #[test]
    fn test_byte_ip() {
        let ip = ByteIp::new(&[255, 255, 255, 255]).unwrap();
        assert_eq!(ip.value(), u32::MAX);
        assert_eq!(ip.to_decimal().to_string(), "255.255.255.255");
        assert_eq!(
            ip.to_binary().to_string(),
            "11111111.11111111.11111111.11111111"
        );
        assert_eq!(ByteIp::from([10, 0, 0, 1]), ByteIp::new(&[10, 0, 0, 1]).unwrap());
        assert_eq!(ByteIp::new(&[1, 2, 3]).unwrap_err().format, Format::ByteIp);
        assert!(ByteIp::new(&[1, 2, 3, 4, 5]).is_err());
    }

    #[test]
    fn test_masks() {
        let mask = DecimalMask::new("255.255.240.0").unwrap();
        assert_eq!(mask.prefix_length(), 20);
        assert_eq!(mask.to_binary().prefix_length(), 20);
        assert_eq!(mask.to_bytes().octets(), [255, 255, 240, 0]);
        assert_eq!(DecimalMask::from_prefix(20).unwrap(), mask);
        assert_eq!(DecimalMask::from_prefix(0).unwrap().to_string(), "0.0.0.0");
        assert!(DecimalMask::from_prefix(33).is_err());
        assert_eq!(DecimalMask::default().to_string(), "255.255.255.255");

        assert!(DecimalMask::new("255.0.255.0").is_err());
        assert!(BinaryMask::new("11111111.00000000.11111111.00000000").is_err());
        assert!(ByteMask::new(&[255, 0, 255, 0]).is_err());

        let mask = ByteMask::new(&[255, 255, 255, 252]).unwrap();
        assert_eq!(mask.prefix_length(), 30);
        assert_eq!(mask.to_decimal().to_string(), "255.255.255.252");
        assert_eq!(
            mask.to_binary().to_string(),
            "11111111.11111111.11111111.11111100"
        );
    }

    #[test]
    fn test_ordering_is_unsigned() {
        let lo = DecimalIp::new("0.0.0.0").unwrap();
        let hi = DecimalIp::new("255.255.255.255").unwrap();
        let mid = DecimalIp::new("128.0.0.0").unwrap();
        assert!(hi > lo);
        assert!(mid > lo);
        assert!(hi > mid);
        assert!(hi.to_bytes() > mid.to_bytes());
    }

    #[test]
    fn test_serde() {
        let ip = DecimalIp::new("10.1.2.3").unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"10.1.2.3\"");
        let back: DecimalIp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ip);

        let mask: BinaryMask =
            serde_json::from_str("\"11111111.11111111.00000000.00000000\"").unwrap();
        assert_eq!(mask.prefix_length(), 16);

        assert!(serde_json::from_str::<DecimalIp>("\"10.1.2.300\"").is_err());
        assert!(serde_json::from_str::<DecimalMask>("\"255.0.255.0\"").is_err());
    }
}
