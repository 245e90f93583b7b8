use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::Ipv6Addr;

use ipnet::IpNet;
use ipnet::Ipv4Net;
use ipnet::Ipv6Net;

/// Address blocks that belong to our own infrastructure and never identify a client.
pub const PRIVATE_RANGES: [IpNet; 6] = [
  // IPv4 loopback
  IpNet::V4(Ipv4Net::new_assert(Ipv4Addr::new(127, 0, 0, 0), 8)),
  // RFC 1918
  IpNet::V4(Ipv4Net::new_assert(Ipv4Addr::new(10, 0, 0, 0), 8)),
  IpNet::V4(Ipv4Net::new_assert(Ipv4Addr::new(172, 16, 0, 0), 12)),
  IpNet::V4(Ipv4Net::new_assert(Ipv4Addr::new(192, 168, 0, 0), 16)),
  // IPv6 loopback
  IpNet::V6(Ipv6Net::new_assert(Ipv6Addr::LOCALHOST, 128)),
  // IPv6 link-local
  IpNet::V6(Ipv6Net::new_assert(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0), 10)),
];

/// Returns `true` for addresses that can be routed to a single host on the internet.
///
/// Rejects the unspecified, loopback, multicast and link-local ranges as well as the IPv4
/// limited broadcast address. IPv4-mapped IPv6 addresses are classified by their IPv4 form.
pub fn is_global_unicast(ip: IpAddr) -> bool {
  match ip.to_canonical() {
    IpAddr::V4(ip) => {
      !(ip.is_broadcast()
        || ip.is_unspecified()
        || ip.is_loopback()
        || ip.is_multicast()
        || ip.is_link_local())
    }
    IpAddr::V6(ip) => {
      !(ip.is_unspecified() || ip.is_loopback() || ip.is_multicast() || ip.is_unicast_link_local())
    }
  }
}

pub fn is_private(ip: IpAddr, ranges: &[IpNet]) -> bool {
  let ip = ip.to_canonical();
  ranges.iter().any(|range| range.contains(&ip))
}
