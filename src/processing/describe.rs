//! Single-prefix calculator.

use crate::error::PlanError;
use crate::models::{block_size, mask_for_prefix, PrefixDescriptor};
use std::net::Ipv4Addr;

/// Describe the block `addr/prefix` belongs to.
///
/// The address does not need to be the network address; host bits are cleared.
///
/// /31 is treated as a point-to-point link: both addresses are usable and
/// `first_usable`/`last_usable` are the network and broadcast addresses.
/// /32 is a single host with no usable range: `usable_hosts` is 0 and both
/// bounds equal the network address.
pub fn describe_prefix(addr: Ipv4Addr, prefix: u8) -> Result<PrefixDescriptor, PlanError> {
    let mask = mask_for_prefix(prefix)?;
    let total_addresses = block_size(prefix)?;
    let wildcard = !mask;
    let network = u32::from(addr) & mask;
    let broadcast = network | wildcard;

    let (first_usable, last_usable, usable_hosts) = match prefix {
        32 => (network, network, 0),
        31 => (network, broadcast, 2),
        _ => (network + 1, broadcast - 1, total_addresses - 2),
    };

    log::trace!(
        "describe_prefix({addr}/{prefix}) network={} total={total_addresses}",
        Ipv4Addr::from(network)
    );

    Ok(PrefixDescriptor {
        address: addr,
        prefix,
        mask: Ipv4Addr::from(mask),
        wildcard: Ipv4Addr::from(wildcard),
        network: Ipv4Addr::from(network),
        broadcast: Ipv4Addr::from(broadcast),
        first_usable: Ipv4Addr::from(first_usable),
        last_usable: Ipv4Addr::from(last_usable),
        usable_hosts,
        total_addresses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_address;

    #[test]
    fn test_describe_prefix_26() {
        let d = describe_prefix(parse_address("192.168.1.100").unwrap(), 26).unwrap();
        assert_eq!(d.address, Ipv4Addr::new(192, 168, 1, 100));
        assert_eq!(d.mask, Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(d.wildcard, Ipv4Addr::new(0, 0, 0, 63));
        assert_eq!(d.network, Ipv4Addr::new(192, 168, 1, 64));
        assert_eq!(d.broadcast, Ipv4Addr::new(192, 168, 1, 127));
        assert_eq!(d.first_usable, Ipv4Addr::new(192, 168, 1, 65));
        assert_eq!(d.last_usable, Ipv4Addr::new(192, 168, 1, 126));
        assert_eq!(d.usable_hosts, 62);
        assert_eq!(d.total_addresses, 64);
        assert_eq!(d.cidr().to_string(), "192.168.1.64/26");
    }

    #[test]
    fn test_describe_prefix_30() {
        let d = describe_prefix(Ipv4Addr::new(10, 0, 0, 5), 30).unwrap();
        assert_eq!(d.network, Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(d.first_usable, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(d.last_usable, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(d.broadcast, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(d.usable_hosts, 2);
    }

    #[test]
    fn test_describe_prefix_31_point_to_point() {
        let d = describe_prefix(Ipv4Addr::new(10, 0, 0, 7), 31).unwrap();
        assert_eq!(d.network, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(d.broadcast, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(d.first_usable, Ipv4Addr::new(10, 0, 0, 6));
        assert_eq!(d.last_usable, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(d.usable_hosts, 2);
        assert_eq!(d.total_addresses, 2);
    }

    #[test]
    fn test_describe_prefix_32_single_host() {
        let d = describe_prefix(Ipv4Addr::new(10, 0, 0, 7), 32).unwrap();
        assert_eq!(d.network, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(d.broadcast, Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(d.first_usable, d.network);
        assert_eq!(d.last_usable, d.network);
        assert_eq!(d.usable_hosts, 0);
        assert_eq!(d.total_addresses, 1);
    }

    #[test]
    fn test_describe_prefix_0_whole_space() {
        let d = describe_prefix(Ipv4Addr::new(8, 8, 8, 8), 0).unwrap();
        assert_eq!(d.mask, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(d.network, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(d.broadcast, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(d.first_usable, Ipv4Addr::new(0, 0, 0, 1));
        assert_eq!(d.last_usable, Ipv4Addr::new(255, 255, 255, 254));
        assert_eq!(d.total_addresses, 4_294_967_296);
        assert_eq!(d.usable_hosts, 4_294_967_294);
    }

    #[test]
    fn test_describe_prefix_range_error() {
        assert!(describe_prefix(Ipv4Addr::new(10, 0, 0, 0), 33)
            .unwrap_err()
            .is_range());
    }
}
