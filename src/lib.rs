//! Validate, convert and compare IPv4 addresses and subnet masks.
//!
//! Addresses and masks can be given as dotted decimal text, dotted binary
//! text or 4 byte arrays, and masks also as CIDR prefix lengths. Every
//! representation maps onto one unsigned 32-bit value, which is what all
//! ordering and subnet arithmetic use.
//!
//! ```
//! use ipv4_subnet_utils::{is_decimal_ip_in_subnet, Subnet};
//!
//! let subnet = Subnet::new("192.168.1.0", "255.255.255.0").unwrap();
//! assert_eq!(subnet.min_border().to_string(), "192.168.1.1");
//! assert_eq!(subnet.max_border().to_string(), "192.168.1.254");
//! assert!(is_decimal_ip_in_subnet("192.168.1.1", "192.168.1.0", "255.255.255.0").unwrap());
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod processing;

pub use error::{Format, InvalidFormat, Result};
pub use models::{
    subnets_from_interfaces, BinaryIp, BinaryMask, ByteIp, ByteMask, DecimalIp, DecimalMask,
    InterfaceAddress, Subnet,
};
pub use processing::*;
