//! Subnet made of an address and a contiguous mask.

use super::ipv4::{BinaryIp, DecimalIp, DecimalMask};
use crate::error::{Format, InvalidFormat, Result};
use crate::processing::{
    binary_ip_to_decimal_ip, binary_mask_to_decimal_mask, borders, byte_ip_to_decimal_ip,
    byte_mask_to_decimal_mask, prefix_to_decimal_mask,
};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::IpAddr;
use std::str::FromStr;

/// An IPv4 subnet, stored as a decimal address and decimal mask.
///
/// Borders are computed on demand from the stored pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    ip: DecimalIp,
    mask: DecimalMask,
}

impl Subnet {
    /// Create a subnet from a dotted decimal address and mask.
    pub fn new(ip: &str, mask: &str) -> Result<Subnet> {
        let ip = DecimalIp::new(ip)?;
        let mask = DecimalMask::new(mask)?;
        log::trace!("Subnet::new({ip}, {mask})");
        Ok(Subnet { ip, mask })
    }

    /// Create a subnet from a dotted binary address and mask.
    pub fn from_binary(ip: &str, mask: &str) -> Result<Subnet> {
        Subnet::new(
            &binary_ip_to_decimal_ip(ip)?,
            &binary_mask_to_decimal_mask(mask)?,
        )
    }

    /// Create a subnet from a 4 byte address and mask.
    pub fn from_bytes(ip: &[u8], mask: &[u8]) -> Result<Subnet> {
        Subnet::new(
            &byte_ip_to_decimal_ip(ip)?,
            &byte_mask_to_decimal_mask(mask)?,
        )
    }

    /// Create a subnet from an interface address and its reported prefix length.
    pub fn from_interface(ip: &str, prefix_len: u8) -> Result<Subnet> {
        Subnet::new(ip, &prefix_to_decimal_mask(prefix_len)?)
    }

    /// Create a subnet from CIDR text (e.g. "10.0.0.0/24").
    pub fn from_cidr(addr_cidr: &str) -> Result<Subnet> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(InvalidFormat::new(addr_cidr, Format::Cidr));
        }
        let prefix_len: u8 = parts[1]
            .parse()
            .map_err(|_| InvalidFormat::new(parts[1], Format::PrefixLength))?;
        Subnet::from_interface(parts[0], prefix_len)
    }

    pub fn ip(&self) -> DecimalIp {
        self.ip
    }

    pub fn mask(&self) -> DecimalMask {
        self.mask
    }

    pub fn prefix_length(&self) -> u8 {
        self.mask.prefix_length()
    }

    /// Lowest usable address.
    pub fn min_border(&self) -> DecimalIp {
        let (min, _) = borders(self.ip.value(), self.mask.value());
        DecimalIp::from(min)
    }

    /// Highest usable address.
    pub fn max_border(&self) -> DecimalIp {
        let (_, max) = borders(self.ip.value(), self.mask.value());
        DecimalIp::from(max)
    }

    /// Check if an address lies within the subnet borders.
    pub fn contains(&self, ip: DecimalIp) -> bool {
        ip >= self.min_border() && ip <= self.max_border()
    }

    /// Like [`Subnet::contains`] for a dotted decimal candidate.
    pub fn contains_decimal_ip(&self, ip: &str) -> Result<bool> {
        Ok(self.contains(DecimalIp::new(ip)?))
    }

    /// Like [`Subnet::contains`] for a dotted binary candidate.
    pub fn contains_binary_ip(&self, ip: &str) -> Result<bool> {
        Ok(self.contains(BinaryIp::new(ip)?.to_decimal()))
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.ip, self.prefix_length())
    }
}

impl FromStr for Subnet {
    type Err = InvalidFormat;

    fn from_str(s: &str) -> Result<Subnet> {
        Subnet::from_cidr(s)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.ip, self.prefix_length());
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::from_cidr(&s).map_err(|e| de::Error::custom(format!("invalid CIDR format: {e}")))
    }
}

/// One address reported by a host network interface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddress {
    /// Interface name, e.g. `eth0`.
    pub name: String,
    pub addr: IpAddr,
    /// Prefix length reported with the address.
    pub prefix_len: u8,
}

/// Build a subnet for every IPv4 interface address, skipping IPv6 entries.
pub fn subnets_from_interfaces<I>(addrs: I) -> Result<Vec<Subnet>>
where
    I: IntoIterator<Item = InterfaceAddress>,
{
    let mut subnets = Vec::new();
    for iface in addrs {
        match iface.addr {
            IpAddr::V4(v4) => {
                let subnet = Subnet::from_interface(&v4.to_string(), iface.prefix_len)?;
                log::debug!("Interface {} subnet {subnet}", iface.name);
                subnets.push(subnet);
            }
            IpAddr::V6(v6) => {
                log::trace!("Skipping IPv6 address {v6} on {}", iface.name);
            }
        }
    }
    Ok(subnets)
}
