//! Error type returned by every validation, conversion and subnet operation.

use std::fmt;
use thiserror::Error;

/// The representation a value was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    DecimalIp,
    DecimalMask,
    BinaryIp,
    BinaryMask,
    ByteIp,
    ByteMask,
    PrefixLength,
    /// Address and prefix length joined by a slash, e.g. `10.0.0.0/24`.
    Cidr,
}

impl Format {
    /// Shape a legal value of this format must have.
    pub fn expected(&self) -> &'static str {
        match self {
            Format::DecimalIp => "four dot separated decimal octets in 0-255",
            Format::DecimalMask => "four dot separated mask octets, ones followed by zeros",
            Format::BinaryIp => "four dot separated groups of 8 binary digits",
            Format::BinaryMask => {
                "four dot separated groups of 8 binary digits, ones followed by zeros"
            }
            Format::ByteIp => "exactly 4 bytes, most significant first",
            Format::ByteMask => "exactly 4 bytes, ones followed by zeros",
            Format::PrefixLength => "a prefix length in 0-32",
            Format::Cidr => "a decimal address and prefix length, e.g. 10.0.0.0/24",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Format::DecimalIp => "decimal ip",
            Format::DecimalMask => "decimal mask",
            Format::BinaryIp => "binary ip",
            Format::BinaryMask => "binary mask",
            Format::ByteIp => "byte ip",
            Format::ByteMask => "byte mask",
            Format::PrefixLength => "prefix length",
            Format::Cidr => "cidr",
        };
        f.write_str(name)
    }
}

/// A value failed the format check for its representation.
///
/// This is the only error kind in the crate. Syntax errors and out of range
/// values both end up here, with the offending value kept for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {format} {value:?}, expected {}", .format.expected())]
pub struct InvalidFormat {
    /// The rejected value as text. Byte forms are rendered with `{:?}`.
    pub value: String,
    /// Which check rejected it.
    pub format: Format,
}

impl InvalidFormat {
    pub fn new(value: impl Into<String>, format: Format) -> Self {
        let value = value.into();
        log::debug!("Rejected {format} value {value:?}");
        InvalidFormat { value, format }
    }
}

pub type Result<T> = std::result::Result<T, InvalidFormat>;
