//! Subnet host requirement supplied by the caller.

use crate::error::PlanError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

/// Regex for `NAME=HOSTS` or `NAME:HOSTS` requirement specs.
static REQUIREMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_requirement_regex() -> &'static Regex {
    REQUIREMENT_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?P<name>[^=:]*?)\s*[=:]\s*(?P<hosts>\S+)\s*$").expect("Invalid Regex")
    })
}

/// A named subnet and the number of hosts it must hold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRequirement {
    /// Name shown next to the allocated subnet.
    pub name: String,
    /// Hosts needed, not counting network and broadcast addresses.
    pub required_hosts: u64,
}

impl SubnetRequirement {
    pub fn new(name: impl Into<String>, required_hosts: u64) -> Self {
        SubnetRequirement {
            name: name.into(),
            required_hosts,
        }
    }
}

/// Parse a host count; negative values are a range error, not a parse error.
pub fn parse_host_count(text: &str) -> Result<u64, PlanError> {
    let text = text.trim();
    let value: i128 = text
        .parse()
        .map_err(|_| PlanError::Parse(format!("host count '{text}' is not an integer")))?;
    if value < 0 {
        return Err(PlanError::Range(format!(
            "host count {value} is negative"
        )));
    }
    u64::try_from(value)
        .map_err(|_| PlanError::Range(format!("host count {value} is larger than IPv4")))
}

impl FromStr for SubnetRequirement {
    type Err = PlanError;

    /// Parse `NAME=HOSTS`, e.g. `Sales=100` or `Lab:25`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = get_requirement_regex().captures(s).ok_or_else(|| {
            PlanError::Parse(format!("expected NAME=HOSTS, got '{s}'"))
        })?;
        let name = &caps["name"];
        if name.is_empty() {
            return Err(PlanError::Parse(format!("missing subnet name in '{s}'")));
        }
        let required_hosts = parse_host_count(&caps["hosts"])?;
        Ok(SubnetRequirement::new(name, required_hosts))
    }
}
