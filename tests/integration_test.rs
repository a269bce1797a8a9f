//! Integration tests for subnet-planner
//!
//! These tests drive the public API the same way the CLI does: text input in,
//! rendered plans out.

use std::net::Ipv4Addr;
use subnet_planner::models::{format_address, mask_for_prefix, parse_address};
use subnet_planner::output::{render_describe, render_vlsm};
use subnet_planner::processing::{allocate_vlsm, minimal_prefix_for_hosts};
use subnet_planner::{describe_cidr, plan_vlsm, OutputFormat, SubnetRequirement};

fn requirements(specs: &[&str]) -> Vec<SubnetRequirement> {
    specs
        .iter()
        .map(|s| s.parse().expect("valid NAME=HOSTS"))
        .collect()
}

#[test]
fn test_full_vlsm_workflow() {
    let reqs = requirements(&["D=10", "C=25", "A=100", "B=50"]);
    let plan = plan_vlsm("192.168.1.0/24", &reqs).expect("plan fits");

    let cidrs: Vec<String> = plan.subnets.iter().map(|s| s.cidr().to_string()).collect();
    assert_eq!(
        cidrs,
        vec![
            "192.168.1.0/25",
            "192.168.1.128/26",
            "192.168.1.192/27",
            "192.168.1.224/28"
        ]
    );
    let usable: Vec<u64> = plan.subnets.iter().map(|s| s.usable_hosts).collect();
    assert_eq!(usable, vec![126, 62, 30, 14]);

    let csv = render_vlsm(&plan, OutputFormat::Csv).unwrap();
    assert_eq!(csv.lines().count(), 1 + 4 + 1, "header, subnets, one gap");
    assert!(csv.contains("\"192.168.1.240/28\""));
}

#[test]
fn test_describe_workflow() {
    let d = describe_cidr("192.168.1.100/26", None).unwrap();
    assert_eq!(format_address(d.network), "192.168.1.64");
    assert_eq!(format_address(d.broadcast), "192.168.1.127");
    assert_eq!(format_address(d.first_usable), "192.168.1.65");
    assert_eq!(format_address(d.last_usable), "192.168.1.126");
    assert_eq!(d.usable_hosts, 62);

    let text = render_describe(&d, OutputFormat::Text).unwrap();
    assert!(text.contains("255.255.255.192"));
}

#[test]
fn test_error_kinds() {
    assert!(parse_address("192.168.1").unwrap_err().is_parse());
    assert!(mask_for_prefix(33).unwrap_err().is_range());
    assert!("Lab=-3"
        .parse::<SubnetRequirement>()
        .unwrap_err()
        .is_range());

    let reqs = requirements(&["A=100", "B=100", "C=100"]);
    let err = plan_vlsm("10.0.0.0/24", &reqs).unwrap_err();
    assert!(err.is_capacity(), "expected capacity error, got {err}");
}

#[test]
fn test_capacity_error_never_wraps() {
    let reqs = requirements(&["A=60", "B=60", "C=60", "D=60", "E=60"]);
    let err = allocate_vlsm(Ipv4Addr::new(10, 0, 0, 0), 24, &reqs).unwrap_err();
    assert!(err.is_capacity());
    assert!(err.to_string().contains("E needs /26"));
}

mod property_tests {
    use super::*;
    use itertools::Itertools;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_address_roundtrip(bits in any::<u32>()) {
            let addr = Ipv4Addr::from(bits);
            let text = format_address(addr);
            prop_assert_eq!(parse_address(&text).unwrap(), addr);
            prop_assert_eq!(format_address(parse_address(&text).unwrap()), text);
        }

        #[test]
        fn test_leading_zeros_canonicalize(a in any::<u8>(), b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
            let padded = format!("{a:03}.{b:03}.{c:03}.{d:03}");
            let canonical = format!("{a}.{b}.{c}.{d}");
            prop_assert_eq!(format_address(parse_address(&padded).unwrap()), canonical);
        }

        #[test]
        fn test_minimal_prefix_monotonic(h1 in 0u64..5_000_000, delta in 0u64..5_000_000) {
            let h2 = h1 + delta;
            let p1 = minimal_prefix_for_hosts(h1).unwrap();
            let p2 = minimal_prefix_for_hosts(h2).unwrap();
            prop_assert!(p1 >= p2);
            prop_assert!((1u64 << (32 - p1)) >= h1 + 2);
        }

        #[test]
        fn test_vlsm_blocks_disjoint(
            base_bits in any::<u32>(),
            base_prefix in 8u8..=24,
            hosts in prop::collection::vec(0u64..3000, 0..12),
        ) {
            let reqs: Vec<SubnetRequirement> = hosts
                .iter()
                .enumerate()
                .map(|(i, h)| SubnetRequirement::new(format!("net{i}"), *h))
                .collect();
            match allocate_vlsm(Ipv4Addr::from(base_bits), base_prefix, &reqs) {
                Ok(plan) => {
                    prop_assert_eq!(plan.subnets.len(), reqs.len());
                    let base_lo = u32::from(plan.base.lo()) as u64;
                    let base_end = base_lo + plan.base.size();
                    for s in &plan.subnets {
                        let lo = u32::from(s.network) as u64;
                        prop_assert!(lo >= base_lo && s.end() <= base_end);
                        prop_assert!(s.usable_hosts >= s.required_hosts);
                    }
                    for (a, b) in plan.subnets.iter().tuple_combinations() {
                        let (a_lo, b_lo) = (u32::from(a.network) as u64, u32::from(b.network) as u64);
                        prop_assert!(a.end() <= b_lo || b.end() <= a_lo);
                    }
                    prop_assert_eq!(plan.allocated_addresses() + plan.free_addresses(), plan.base.size());
                    let gap_total: u64 = plan.unallocated.iter().map(|b| b.size()).sum();
                    prop_assert_eq!(gap_total, plan.free_addresses());
                }
                Err(e) => {
                    prop_assert!(e.is_capacity(), "unexpected error {}", e);
                    let needed: u64 = hosts
                        .iter()
                        .map(|h| 1u64 << (32 - minimal_prefix_for_hosts(*h).unwrap()))
                        .sum();
                    prop_assert!(needed > 1u64 << (32 - base_prefix));
                }
            }
        }
    }
}
