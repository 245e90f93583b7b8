//! Best-effort resolution of the public address of the client behind our reverse proxies.
//!
//! Proxies append the address they received the request from to `X-Forwarded-For`, so the
//! rightmost entries are written by infrastructure closest to this server. Walking the chain
//! from the right and stopping at the first public address yields the hop just before our own
//! proxies, which a client cannot forge by sending its own `X-Forwarded-For`.

mod host_port;
mod private;

use std::net::IpAddr;
use std::net::SocketAddr;

use hyper::Request;
use hyper::header::HeaderName;
use hyper::http::Extensions;
use hyper::http::HeaderMap;
use ipnet::IpNet;
use tracing::debug;
use tracing::trace;

pub use host_port::split_host_port;
pub use private::PRIVATE_RANGES;
pub use private::is_global_unicast;
pub use private::is_private;

use crate::config::ResolverConfig;

pub const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Returns the public client address for a request.
///
/// `forwarded_for` is the raw `X-Forwarded-For` value and `remote_addr` the peer address of
/// the connection (`host:port` or `[host]:port`). The rightmost forwarded entry that is a
/// global unicast address outside [`PRIVATE_RANGES`] is returned as written. Otherwise the host
/// of `remote_addr` is returned, normalized when it is an IP address. Returns an empty string
/// when neither yields anything.
pub fn resolve_client_ip(forwarded_for: &str, remote_addr: &str) -> String {
  resolve(forwarded_for, remote_addr, &PRIVATE_RANGES)
}

/// Client address resolver with a configurable header and additional private ranges.
#[derive(Clone, Debug)]
pub struct ClientIpResolver {
  forwarded_header: HeaderName,
  private_ranges: Vec<IpNet>,
}

impl Default for ClientIpResolver {
  fn default() -> Self {
    Self::new(ResolverConfig::default())
  }
}

impl ClientIpResolver {
  /// Builds a resolver from `config`. Configured ranges extend the built-in private ranges.
  pub fn new(config: ResolverConfig) -> Self {
    let (forwarded_header, extra_ranges) = config.into_parts();
    let mut private_ranges = PRIVATE_RANGES.to_vec();
    private_ranges.extend(extra_ranges);
    Self { forwarded_header, private_ranges }
  }

  pub fn forwarded_header(&self) -> &HeaderName {
    &self.forwarded_header
  }

  pub fn private_ranges(&self) -> &[IpNet] {
    &self.private_ranges
  }

  pub fn resolve(&self, forwarded_for: &str, remote_addr: &str) -> String {
    resolve(forwarded_for, remote_addr, &self.private_ranges)
  }

  /// Resolves the client address of `request`.
  ///
  /// Every line of the forwarded header is used, in order. The connection address is read
  /// from a [`SocketAddr`] stored in the request extensions.
  pub fn resolve_request<B>(&self, request: &Request<B>) -> String {
    resolve_parts(
      request.headers(),
      request.extensions(),
      &self.forwarded_header,
      &self.private_ranges,
    )
  }
}

pub(crate) fn resolve_parts(
  headers: &HeaderMap,
  extensions: &Extensions,
  forwarded_header: &HeaderName,
  private_ranges: &[IpNet],
) -> String {
  let forwarded_for = headers
    .get_all(forwarded_header)
    .iter()
    .filter_map(|value| value.to_str().ok())
    .collect::<Vec<_>>()
    .join(",");
  let remote_addr =
    extensions.get::<SocketAddr>().map(ToString::to_string).unwrap_or_default();

  resolve(&forwarded_for, &remote_addr, private_ranges)
}

fn resolve(forwarded_for: &str, remote_addr: &str, private_ranges: &[IpNet]) -> String {
  if let Some(client_ip) = rightmost_public(forwarded_for, private_ranges) {
    return client_ip.to_string();
  }

  trace!(remote_addr, "no public address in forwarded chain, using connection address");
  host_of(remote_addr)
}

fn rightmost_public<'a>(forwarded_for: &'a str, private_ranges: &[IpNet]) -> Option<&'a str> {
  forwarded_for.rsplit(',').map(str::trim).find(|entry| match entry.parse::<IpAddr>() {
    Ok(ip) if is_global_unicast(ip) && !is_private(ip, private_ranges) => true,
    _ => {
      trace!(entry, "skipping forwarded address");
      false
    }
  })
}

fn host_of(remote_addr: &str) -> String {
  if remote_addr.is_empty() {
    return String::new();
  }

  match split_host_port(remote_addr) {
    Ok((host, _)) => match host.parse::<IpAddr>() {
      Ok(ip) => ip.to_canonical().to_string(),
      Err(_) => host.to_string(),
    },
    Err(err) => {
      debug!(remote_addr, %err, "unable to split connection address");
      String::new()
    }
  }
}
