use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::QualityValueError;
use crate::quality::QualityValue;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^((?:\*|[A-Za-z0-9_+]+)/(?:\*|[A-Za-z0-9_+]+))(?:;q=([01](?:\.[0-9]{1,3})?))?$")
    .expect("quality value pattern must compile")
});

/// Parses a comma-separated quality value header such as
/// `text/html,application/xml;q=0.9,*/*;q=0.8`.
///
/// Entries are returned in the order they appear; use
/// [`sort_quality_values`](crate::sort_quality_values) to rank them. Empty entries are skipped
/// and a missing `q` defaults to `1`. A single malformed entry fails the whole header.
pub fn parse_quality_values(header: &str) -> Result<Vec<QualityValue>, QualityValueError> {
  header
    .split(',')
    .map(str::trim)
    .filter(|token| !token.is_empty())
    .map(|token| {
      parse_entry(token).ok_or_else(|| {
        debug!(token, header, "rejecting malformed quality value");
        QualityValueError::MalformedEntry(header.to_string())
      })
    })
    .collect()
}

fn parse_entry(token: &str) -> Option<QualityValue> {
  let captures = ENTRY.captures(token)?;
  let priority = match captures.get(2) {
    None => 1.0,
    Some(priority) => priority.as_str().parse::<f64>().ok().filter(|priority| *priority <= 1.0)?,
  };

  Some(QualityValue { mime_type: captures[1].to_string(), priority })
}
