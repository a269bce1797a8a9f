//! Result types produced by the calculators.

use super::Ipv4;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Everything derivable from one address and prefix length.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrefixDescriptor {
    /// The address as given, before normalization.
    pub address: Ipv4Addr,
    pub prefix: u8,
    pub mask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    pub usable_hosts: u64,
    pub total_addresses: u64,
}

impl PrefixDescriptor {
    /// The normalized block, e.g. `192.168.1.64/26`.
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network,
            mask: self.prefix,
        }
    }
}

/// One subnet carved out of the base block by the VLSM allocator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AllocatedSubnet {
    /// Name of the requirement this subnet satisfies.
    pub name: String,
    /// Hosts the caller asked for.
    pub required_hosts: u64,
    pub network: Ipv4Addr,
    pub prefix: u8,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub usable_hosts: u64,
    /// Block size, always a power of two.
    pub total_addresses: u64,
}

impl AllocatedSubnet {
    pub fn cidr(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network,
            mask: self.prefix,
        }
    }

    /// One past the last address of the block, as a 64-bit integer.
    pub fn end(&self) -> u64 {
        u32::from(self.network) as u64 + self.total_addresses
    }
}

/// Result of a VLSM run: the normalized base block and its subnets in allocation order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VlsmPlan {
    pub base: Ipv4,
    pub subnets: Vec<AllocatedSubnet>,
    /// Aligned blocks covering the unused tail of the base block.
    pub unallocated: Vec<Ipv4>,
}

impl VlsmPlan {
    /// Total addresses handed out to subnets.
    pub fn allocated_addresses(&self) -> u64 {
        self.subnets.iter().map(|s| s.total_addresses).sum()
    }

    /// Addresses of the base block left unused.
    pub fn free_addresses(&self) -> u64 {
        self.base.size() - self.allocated_addresses()
    }
}
