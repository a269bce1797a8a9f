//! Gap finding after allocation.
//!
//! Describes the unused tail of a base block as the fewest aligned CIDR blocks.

use crate::models::{lo_mask, Ipv4, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Cover `[start, end)` with aligned CIDR blocks, largest first.
///
/// `start` and `end` are 64-bit so that the end of IPv4 space (`2^32`) is
/// representable.
pub fn unallocated_blocks(mut start: u64, end: u64) -> Vec<Ipv4> {
    let mut blocks = Vec::new();

    while start < end {
        let start_ip = Ipv4Addr::from(start as u32);
        let mask = find_biggest_block(start_ip, end);
        let block = Ipv4 {
            addr: start_ip,
            mask,
        };
        log::trace!("unallocated block {block}");
        start += block.size();
        blocks.push(block);
    }

    blocks
}

/// Find the biggest block that starts at `start_ip` and ends at or before `end`.
///
/// The returned mask is constrained by:
/// 1. The IP alignment - `start_ip` must be a valid network address for the mask
/// 2. The block must not run past `end`
fn find_biggest_block(start_ip: Ipv4Addr, end: u64) -> u8 {
    let start = u32::from(start_ip) as u64;
    assert!(start < end, "start[{start_ip}] >= end[{end}] should never happen.");

    let mut next_mask = lo_mask(start_ip);
    while start + (1u64 << (MAX_LENGTH - next_mask)) > end {
        next_mask += 1;
    }

    assert!(
        next_mask <= MAX_LENGTH,
        "next_mask[{next_mask}] > 32 should never happen."
    );
    next_mask
}
