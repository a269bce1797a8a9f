//! Domain models for the subnet planner.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the mask arithmetic
//! - [`SubnetRequirement`] - a named host-count requirement
//! - [`PrefixDescriptor`], [`AllocatedSubnet`] and [`VlsmPlan`] - calculator results

mod ipv4;
mod requirement;
mod subnet;

// Re-export public types
pub use ipv4::{
    block_size, broadcast_addr, format_address, lo_mask, mask_for_prefix, network_addr,
    parse_address, parse_prefix, Ipv4, MAX_LENGTH,
};
pub use requirement::{parse_host_count, SubnetRequirement};
pub use subnet::{AllocatedSubnet, PrefixDescriptor, VlsmPlan};
