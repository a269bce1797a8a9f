//! Terminal output utilities.
//!
//! Colored text reports plus the quoted field helper shared with CSV output.

use crate::models::{format_address, PrefixDescriptor, VlsmPlan};
use colored::Colorize;
use itertools::Itertools;
use std::fmt::Write;

const WIDTH: usize = 80;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn header(out: &mut String, text: &str) {
    let rule = "=".repeat(WIDTH);
    let width = WIDTH;
    let _ = writeln!(out, "{}", rule.blue().bold());
    let _ = writeln!(out, "{}", format!("{text:^width$}").blue().bold());
    let _ = writeln!(out, "{}", rule.blue().bold());
}

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let label = format!("{label}:");
    let _ = writeln!(out, "  {} {value}", format!("{label:<19}").bold());
}

/// Render a single-prefix calculation as a text report.
pub fn describe_report(d: &PrefixDescriptor) -> String {
    let mut out = String::new();
    let title = format!(
        "Subnet Calculation for {}/{}",
        format_address(d.address),
        d.prefix
    );
    let _ = writeln!(out, "{}", title.bold());
    let _ = writeln!(out, "{}", "=".repeat(50));
    line(&mut out, "IP Address", format_address(d.address));
    line(&mut out, "Subnet Mask", format_address(d.mask));
    line(&mut out, "Wildcard Mask", format_address(d.wildcard));
    line(&mut out, "Network Address", d.cidr());
    line(&mut out, "Broadcast", format_address(d.broadcast));
    if d.usable_hosts == 0 {
        line(&mut out, "Usable Range", "none (single host)");
    } else {
        line(
            &mut out,
            "Usable Range",
            format!(
                "{} - {}",
                format_address(d.first_usable),
                format_address(d.last_usable)
            ),
        );
    }
    line(&mut out, "Usable Hosts", d.usable_hosts);
    line(&mut out, "Total Addresses", d.total_addresses);
    out
}

/// Render a VLSM plan as a text report, subnets in allocation order.
pub fn vlsm_report(plan: &VlsmPlan) -> String {
    let mut out = String::new();
    header(&mut out, "VLSM CALCULATION RESULTS");
    let _ = writeln!(out, "{} {}\n", "Base Network:".bold(), plan.base);

    for (i, s) in plan.subnets.iter().enumerate() {
        let title = format!("Subnet {}: {}", i + 1, s.name);
        let _ = writeln!(out, "{}", title.yellow().bold());
        let _ = writeln!(out, "{}", "-".repeat(WIDTH).yellow());
        line(&mut out, "Network Address", s.cidr());
        line(&mut out, "First Usable IP", format_address(s.first_usable));
        line(&mut out, "Last Usable IP", format_address(s.last_usable));
        line(&mut out, "Broadcast Address", format_address(s.broadcast));
        line(
            &mut out,
            "Usable Hosts",
            format!(
                "{} {}",
                s.usable_hosts,
                format!("(required: {})", s.required_hosts).green()
            ),
        );
        line(&mut out, "Total IPs", s.total_addresses);
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} {} of {} addresses allocated, {} free",
        "Summary:".bold(),
        plan.allocated_addresses(),
        plan.base.size(),
        plan.free_addresses()
    );
    if !plan.unallocated.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            "Unallocated:".bold(),
            plan.unallocated.iter().join(", ")
        );
    }
    let _ = writeln!(out, "\n{}", "✓ Calculation complete!".green().bold());
    out
}
