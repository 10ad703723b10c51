//! Value types for IPv4 addresses, masks and subnets.
//!
//! - [`DecimalIp`], [`BinaryIp`], [`ByteIp`] - Self-validating addresses
//! - [`DecimalMask`], [`BinaryMask`], [`ByteMask`] - Self-validating masks
//! - [`Subnet`] - Address and mask pair with border computation
//! - [`InterfaceAddress`] - Address reported by a host network interface

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{BinaryIp, BinaryMask, ByteIp, ByteMask, DecimalIp, DecimalMask};
pub use subnet::{subnets_from_interfaces, InterfaceAddress, Subnet};
