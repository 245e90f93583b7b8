use std::path::Path;
use std::str::FromStr;

use hyper::header::HeaderName;
use ipnet::IpNet;
use serde::Deserialize;
use serde::Deserializer;

use crate::client_ip::X_FORWARDED_FOR;
use crate::error::ConfigError;

/// Settings for [`ClientIpResolver`](crate::ClientIpResolver), usually loaded from TOML.
///
/// ```toml
/// forwarded_header = "x-forwarded-for"
/// private_ranges = ["100.64.0.0/10", "fc00::/7"]
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ResolverConfig {
  #[serde(default = "default_forwarded_header", deserialize_with = "deserialize_header_name")]
  forwarded_header: HeaderName,
  #[serde(default)]
  private_ranges: Vec<IpNet>,
}

impl Default for ResolverConfig {
  fn default() -> Self {
    Self { forwarded_header: default_forwarded_header(), private_ranges: Vec::new() }
  }
}

impl ResolverConfig {
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

    content.parse()
  }

  pub fn forwarded_header(&self) -> &HeaderName {
    &self.forwarded_header
  }

  /// Ranges treated as private in addition to the built-in ones.
  pub fn private_ranges(&self) -> &[IpNet] {
    &self.private_ranges
  }

  pub(crate) fn into_parts(self) -> (HeaderName, Vec<IpNet>) {
    (self.forwarded_header, self.private_ranges)
  }
}

impl FromStr for ResolverConfig {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(toml::from_str(s)?)
  }
}

fn default_forwarded_header() -> HeaderName {
  X_FORWARDED_FOR
}

fn deserialize_header_name<'de, D>(deserializer: D) -> Result<HeaderName, D::Error>
where
  D: Deserializer<'de>,
{
  HeaderName::from_str(&String::deserialize(deserializer)?).map_err(serde::de::Error::custom)
}
