//! Subnet calculation logic.
//!
//! This module contains the pure calculators:
//! - [`describe`] - Network, broadcast and usable range of a single prefix
//! - [`vlsm`] - Largest-first VLSM allocation against a base block
//! - [`gap_finder`] - Aligned blocks covering unused address space

mod describe;
mod gap_finder;
mod vlsm;

// Re-export public functions
pub use describe::describe_prefix;
pub use gap_finder::unallocated_blocks;
pub use vlsm::{allocate_vlsm, minimal_prefix_for_hosts};
