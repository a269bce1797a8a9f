// cargo watch -x 'fmt' -x 'test'

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use config::{Config, OutputFormat};
pub use error::PlanError;
pub use models::{parse_address, Ipv4, SubnetRequirement, VlsmPlan};
pub use processing::{allocate_vlsm, describe_prefix};

use models::parse_prefix;
use models::PrefixDescriptor;

/// Describe `ADDRESS/PREFIX`, or `ADDRESS` with the prefix given separately.
pub fn describe_cidr(addr_cidr: &str, prefix: Option<&str>) -> Result<PrefixDescriptor, PlanError> {
    let cidr = match prefix {
        Some(prefix) => Ipv4::from_parts(parse_address(addr_cidr)?, parse_prefix(prefix)?)?,
        None => Ipv4::new(addr_cidr)?,
    };
    log::info!("#Start describe_cidr() {cidr}");
    describe_prefix(cidr.addr, cidr.mask)
}

/// Plan `requirements` inside the base block given as `ADDRESS/PREFIX`.
pub fn plan_vlsm(base_cidr: &str, requirements: &[SubnetRequirement]) -> Result<VlsmPlan, PlanError> {
    let base = Ipv4::new(base_cidr)?;
    allocate_vlsm(base.addr, base.mask, requirements)
}
