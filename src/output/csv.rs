//! CSV output formatting for calculator results.

use crate::models::{format_address, Ipv4, PrefixDescriptor, VlsmPlan};
use std::fmt::Write;

use super::terminal::format_field;

const HEADER: &str = r#" "cnt",   "gap",       "subnet_cidr",    "first_usable",     "last_usable",       "broadcast",   "hosts",  "total",          "name""#;

/// One CSV line: an allocated subnet, a described prefix, or an unused gap.
#[derive(Debug)]
struct CsvRow {
    j: usize,
    gap: String,
    subnet_cidr: String,
    first_usable: String,
    last_usable: String,
    broadcast: String,
    hosts: String,
    total: u64,
    name: String,
}

/// Render a single-prefix calculation as a header plus one CSV row.
pub fn describe_csv(d: &PrefixDescriptor) -> String {
    let row = CsvRow {
        j: 1,
        gap: "Net".to_string(),
        subnet_cidr: d.cidr().to_string(),
        first_usable: format_address(d.first_usable),
        last_usable: format_address(d.last_usable),
        broadcast: format_address(d.broadcast),
        hosts: d.usable_hosts.to_string(),
        total: d.total_addresses,
        name: format_address(d.address),
    };
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");
    let _ = writeln!(out, "{}", csv_row(&row));
    out
}

/// Render a VLSM plan as CSV; unallocated blocks follow as `-gap-` rows.
pub fn vlsm_csv(plan: &VlsmPlan) -> String {
    log::debug!(
        "vlsm_csv() {} subnets, {} gaps",
        plan.subnets.len(),
        plan.unallocated.len()
    );
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");

    for (i, s) in plan.subnets.iter().enumerate() {
        let row = CsvRow {
            j: i + 1,
            gap: format!("Sub{}", i + 1),
            subnet_cidr: s.cidr().to_string(),
            first_usable: format_address(s.first_usable),
            last_usable: format_address(s.last_usable),
            broadcast: format_address(s.broadcast),
            hosts: format!("{}/{}", s.required_hosts, s.usable_hosts),
            total: s.total_addresses,
            name: s.name.clone(),
        };
        let _ = writeln!(out, "{}", csv_row(&row));
    }

    for block in &plan.unallocated {
        let _ = writeln!(out, "{}", csv_row(&gap_row(block)));
    }
    out
}

fn gap_row(block: &Ipv4) -> CsvRow {
    CsvRow {
        j: 0,
        gap: "-gap-".to_string(),
        subnet_cidr: block.to_string(),
        first_usable: "None".to_string(),
        last_usable: "None".to_string(),
        broadcast: format_address(block.hi()),
        hosts: "0".to_string(),
        total: block.size(),
        name: "None".to_string(),
    }
}

fn csv_row(row: &CsvRow) -> String {
    format!(
        r#"{j},{gap},{subnet_cidr},{first_usable},{last_usable},{broadcast},{hosts},{total},{name}"#,
        j = format_field(row.j, 6),
        gap = format_field(&row.gap, 8),
        subnet_cidr = format_field(&row.subnet_cidr, 19),
        first_usable = format_field(&row.first_usable, 18),
        last_usable = format_field(&row.last_usable, 18),
        broadcast = format_field(&row.broadcast, 18),
        hosts = format_field(&row.hosts, 10),
        total = format_field(row.total, 8),
        name = format_field(escape_quotes(&row.name), 17),
    )
}

/// Double any quotes so names stay inside their field.
fn escape_quotes(input: &str) -> String {
    input.replace('"', "\"\"")
}
