//! Variable Length Subnet Masking allocation.
//!
//! Requirements are placed largest-first into the base block, each at the
//! lowest free address, so every block lands on its natural alignment and the
//! allocated subnets form a gap-free prefix of the base block.

use super::describe::describe_prefix;
use super::gap_finder::unallocated_blocks;
use crate::error::PlanError;
use crate::models::{
    block_size, format_address, network_addr, AllocatedSubnet, Ipv4, SubnetRequirement, VlsmPlan,
    MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Smallest prefix whose block holds `required_hosts` plus network and broadcast.
///
/// `host_bits = ceil(log2(required_hosts + 2))`, computed exactly on integers.
///
/// # Examples
/// ```
/// use subnet_planner::processing::minimal_prefix_for_hosts;
/// assert_eq!(minimal_prefix_for_hosts(100).unwrap(), 25);
/// assert_eq!(minimal_prefix_for_hosts(62).unwrap(), 26);
/// assert_eq!(minimal_prefix_for_hosts(63).unwrap(), 25);
/// ```
pub fn minimal_prefix_for_hosts(required_hosts: u64) -> Result<u8, PlanError> {
    let total = required_hosts
        .checked_add(2)
        .and_then(u64::checked_next_power_of_two)
        .ok_or_else(|| PlanError::Range(format!("{required_hosts} hosts is larger than IPv4")))?;
    let host_bits = total.trailing_zeros();
    if host_bits > MAX_LENGTH as u32 {
        return Err(PlanError::Range(format!(
            "{required_hosts} hosts needs {host_bits} host bits, IPv4 has {MAX_LENGTH}"
        )));
    }
    Ok(MAX_LENGTH - host_bits as u8)
}

/// Allocate one subnet per requirement from `base_addr/base_prefix`.
///
/// Requirements are stable-sorted by `required_hosts` descending, so equal
/// requirements keep their input order. The returned plan lists subnets in
/// allocation order, not input order.
///
/// Fails with [`PlanError::Capacity`] as soon as a block would extend past the
/// end of the base block.
pub fn allocate_vlsm(
    base_addr: Ipv4Addr,
    base_prefix: u8,
    requirements: &[SubnetRequirement],
) -> Result<VlsmPlan, PlanError> {
    let base_network = network_addr(base_addr, base_prefix)?;
    let base = Ipv4 {
        addr: base_network,
        mask: base_prefix,
    };
    let base_end = u32::from(base_network) as u64 + block_size(base_prefix)?;
    log::info!(
        "#Start allocate_vlsm() base={base} requirements={}",
        requirements.len()
    );

    let mut sorted: Vec<&SubnetRequirement> = requirements.iter().collect();
    sorted.sort_by(|a, b| b.required_hosts.cmp(&a.required_hosts));

    let mut cursor = u32::from(base_network) as u64;
    let mut subnets = Vec::with_capacity(sorted.len());

    for req in sorted {
        let prefix = minimal_prefix_for_hosts(req.required_hosts)?;
        let block = block_size(prefix)?;

        if cursor + block > base_end {
            log::debug!(
                "{} /{prefix} does not fit: cursor={cursor} block={block} base_end={base_end}",
                req.name
            );
            return Err(PlanError::Capacity {
                name: req.name.clone(),
                prefix,
                block_size: block,
                cursor: format_cursor(cursor),
                base: base.to_string(),
            });
        }

        // cursor < base_end <= 2^32 here, so it fits in u32
        let d = describe_prefix(Ipv4Addr::from(cursor as u32), prefix)?;
        debug_assert_eq!(u32::from(d.network) as u64, cursor, "cursor lost alignment");
        log::debug!(
            "allocated {} ({} hosts) -> {}",
            req.name,
            req.required_hosts,
            d.cidr()
        );

        subnets.push(AllocatedSubnet {
            name: req.name.clone(),
            required_hosts: req.required_hosts,
            network: d.network,
            prefix,
            first_usable: d.first_usable,
            last_usable: d.last_usable,
            broadcast: d.broadcast,
            usable_hosts: d.usable_hosts,
            total_addresses: block,
        });
        cursor += block;
    }

    let unallocated = unallocated_blocks(cursor, base_end);
    log::info!(
        "# Allocated {} subnets in {base}, {} unallocated blocks left",
        subnets.len(),
        unallocated.len()
    );

    Ok(VlsmPlan {
        base,
        subnets,
        unallocated,
    })
}

fn format_cursor(cursor: u64) -> String {
    match u32::try_from(cursor) {
        Ok(bits) => format_address(Ipv4Addr::from(bits)),
        Err(_) => "the end of IPv4 space".to_string(),
    }
}
