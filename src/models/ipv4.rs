//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 addresses with a prefix length,
//! along with the bit arithmetic shared by the single-prefix calculator and the
//! VLSM allocator.

use crate::error::PlanError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Parse a dotted-decimal address into an [`Ipv4Addr`].
///
/// Exactly four period-separated components are required, each made of decimal
/// digits only and within 0-255. Leading zeros are accepted and dropped, so
/// `010.000.000.001` parses as `10.0.0.1`.
///
/// # Examples
/// ```
/// use subnet_planner::models::parse_address;
/// assert_eq!(u32::from(parse_address("192.168.1.100").unwrap()), 0xC0A80164);
/// assert!(parse_address("192.168.1").is_err());
/// ```
pub fn parse_address(dotted: &str) -> Result<Ipv4Addr, PlanError> {
    let dotted = dotted.trim();
    let parts: Vec<&str> = dotted.split('.').collect();
    if parts.len() != 4 {
        return Err(PlanError::Parse(format!(
            "expected 4 octets in '{dotted}', found {}",
            parts.len()
        )));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts.iter()) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlanError::Parse(format!(
                "octet '{part}' in '{dotted}' is not a decimal number"
            )));
        }
        let value: u32 = part.parse().map_err(|_| {
            PlanError::Parse(format!("octet '{part}' in '{dotted}' is out of range 0-255"))
        })?;
        *octet = u8::try_from(value).map_err(|_| {
            PlanError::Parse(format!("octet '{part}' in '{dotted}' is out of range 0-255"))
        })?;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Render an address as four dot-separated octets.
///
/// Total over all 32-bit values and the exact inverse of [`parse_address`] for
/// canonical input.
pub fn format_address(addr: Ipv4Addr) -> String {
    let bits = u32::from(addr);
    format!(
        "{}.{}.{}.{}",
        (bits >> 24) & 0xFF,
        (bits >> 16) & 0xFF,
        (bits >> 8) & 0xFF,
        bits & 0xFF
    )
}

/// Parse a prefix length such as `"24"`.
///
/// Non-integer text is a [`PlanError::Parse`]; integers outside 0-32 (negative
/// ones included) are a [`PlanError::Range`].
pub fn parse_prefix(text: &str) -> Result<u8, PlanError> {
    let text = text.trim().trim_start_matches('/');
    let value: i64 = text
        .parse()
        .map_err(|_| PlanError::Parse(format!("prefix '{text}' is not an integer")))?;
    check_prefix(value)
}

fn check_prefix(value: i64) -> Result<u8, PlanError> {
    if (0..=MAX_LENGTH as i64).contains(&value) {
        Ok(value as u8)
    } else {
        Err(PlanError::Range(format!(
            "prefix /{value} is outside 0-{MAX_LENGTH}"
        )))
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_planner::models::mask_for_prefix;
/// assert_eq!(mask_for_prefix(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(mask_for_prefix(0).unwrap(), 0);
/// ```
pub fn mask_for_prefix(len: u8) -> Result<u32, PlanError> {
    let len = check_prefix(len as i64)?;
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    Ok(mask as u32)
}

/// Number of addresses covered by a prefix, `2^(32-len)`.
pub fn block_size(len: u8) -> Result<u64, PlanError> {
    let len = check_prefix(len as i64)?;
    Ok(1u64 << (MAX_LENGTH - len))
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PlanError> {
    let mask = mask_for_prefix(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PlanError> {
    let mask = mask_for_prefix(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Smallest prefix for which `ip` is a valid network address, based on trailing zeros.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let trailing_zeros = u32::from(ip).trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR '{s}': {e}")))
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, PlanError> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| PlanError::Parse(format!("expected ADDRESS/PREFIX, got '{addr_cidr}'")))?;
        Ok(Ipv4 {
            addr: parse_address(addr)?,
            mask: parse_prefix(mask)?,
        })
    }

    /// Build from an address and prefix, checking the prefix range.
    pub fn from_parts(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, PlanError> {
        let mask = check_prefix(mask as i64)?;
        Ok(Ipv4 { addr, mask })
    }

    /// The same prefix with the host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | !self.mask_bits())
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    fn mask_bits(&self) -> u32 {
        // mask is range checked on construction; clamp for struct literals
        mask_for_prefix(self.mask.min(MAX_LENGTH)).unwrap_or(u32::MAX)
    }
}

impl std::str::FromStr for Ipv4 {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", format_address(self.addr), self.mask)
    }
}
