use crate::error::SplitHostPortError;

/// Splits a connection address of the form `host:port` or `[host]:port` into host and port.
///
/// The port may be empty, but the separating colon is required. IPv6 hosts must be bracketed.
pub fn split_host_port(address: &str) -> Result<(&str, &str), SplitHostPortError> {
  let colon = address.rfind(':').ok_or(SplitHostPortError::MissingPort)?;

  let (host, open, close) = if address.starts_with('[') {
    let end = address.find(']').ok_or(SplitHostPortError::MissingBracket)?;
    if end + 1 == address.len() {
      return Err(SplitHostPortError::MissingPort);
    }
    if end + 1 != colon {
      return match address.as_bytes()[end + 1] {
        b':' => Err(SplitHostPortError::TooManyColons),
        _ => Err(SplitHostPortError::MissingPort),
      };
    }
    (&address[1..end], 1, end + 1)
  } else {
    let host = &address[..colon];
    if host.contains(':') {
      return Err(SplitHostPortError::TooManyColons);
    }
    (host, 0, 0)
  };

  if address[open..].contains('[') || address[close..].contains(']') {
    return Err(SplitHostPortError::UnexpectedBracket);
  }

  Ok((host, &address[colon + 1..]))
}
