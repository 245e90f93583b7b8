use std::str::FromStr;

use headers::Header;
use hyper::header::ACCEPT;
use hyper::header::HeaderName;
use hyper::header::HeaderValue;
use tracing::debug;

use crate::error::QualityValueError;
use crate::quality::QualityValue;
use crate::quality::parse_quality_values;
use crate::quality::sort_quality_values;

/// Typed `Accept` header holding its media ranges in the order they were sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accept(Vec<QualityValue>);

impl Accept {
  pub fn iter(&self) -> std::slice::Iter<'_, QualityValue> {
    self.0.iter()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns the media ranges ordered from most to least preferred.
  pub fn sorted(mut self) -> Self {
    sort_quality_values(&mut self.0);
    self
  }

  /// Returns the most preferred media range, if any.
  pub fn preferred(&self) -> Option<QualityValue> {
    self.clone().sorted().0.into_iter().next()
  }
}

impl From<Vec<QualityValue>> for Accept {
  fn from(values: Vec<QualityValue>) -> Self {
    Self(values)
  }
}

impl From<Accept> for Vec<QualityValue> {
  fn from(accept: Accept) -> Self {
    accept.0
  }
}

impl IntoIterator for Accept {
  type Item = QualityValue;
  type IntoIter = std::vec::IntoIter<QualityValue>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a Accept {
  type Item = &'a QualityValue;
  type IntoIter = std::slice::Iter<'a, QualityValue>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl FromStr for Accept {
  type Err = QualityValueError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse_quality_values(s).map(Self)
  }
}

impl Header for Accept {
  fn name() -> &'static HeaderName {
    &ACCEPT
  }

  fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
  where
    Self: Sized,
    I: Iterator<Item = &'i HeaderValue>,
  {
    let mut entries = Vec::new();
    for value in values {
      let value = value.to_str().map_err(|_| headers::Error::invalid())?;
      let parsed = parse_quality_values(value).map_err(|err| {
        debug!(%err, "rejecting Accept header");
        headers::Error::invalid()
      })?;
      entries.extend(parsed);
    }

    Ok(Self(entries))
  }

  fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
    let rendered = self.0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    match HeaderValue::from_str(&rendered) {
      Ok(value) => values.extend(std::iter::once(value)),
      Err(err) => debug!(%err, rendered, "skipping unencodable Accept header"),
    }
  }
}

#[cfg(test)]
mod tests {
  use headers::HeaderMapExt;
  use hyper::header::ACCEPT;
  use hyper::header::HeaderValue;
  use hyper::http::HeaderMap;

  use crate::quality::Accept;
  use crate::quality::QualityValue;

  #[test]
  fn test_from_str() {
    let accept: Accept = "text/html,*/*;q=0.8".parse().unwrap();
    assert_eq!(accept.len(), 2);
    assert!(!accept.is_empty());
    assert!("text/html;q=2".parse::<Accept>().is_err());
  }

  #[test]
  fn test_sorted_and_preferred() {
    let accept: Accept = "*/*;q=0.8, text/*, text/html".parse().unwrap();
    let mime_types =
      accept.clone().sorted().iter().map(|v| v.mime_type().to_string()).collect::<Vec<_>>();

    assert_eq!(mime_types, ["text/html", "text/*", "*/*"]);
    assert_eq!(accept.preferred(), Some(QualityValue::new("text/html", 1.0)));
    assert_eq!(accept.iter().next().map(QualityValue::mime_type), Some("*/*"));
    assert_eq!(Accept::default().preferred(), None);
  }

  #[test]
  fn test_decode_multiple_lines() {
    let mut headers = HeaderMap::new();
    headers.append(ACCEPT, HeaderValue::from_static("text/html"));
    headers.append(ACCEPT, HeaderValue::from_static("application/json;q=0.5"));

    let accept = headers.typed_get::<Accept>().unwrap();
    assert_eq!(
      Vec::from(accept),
      vec![QualityValue::new("text/html", 1.0), QualityValue::new("application/json", 0.5)]
    );
  }

  #[test]
  fn test_decode_missing_and_invalid() {
    let mut headers = HeaderMap::new();
    assert!(matches!(headers.typed_try_get::<Accept>(), Ok(None)));

    headers.insert(ACCEPT, HeaderValue::from_static("text/html?q=2.0"));
    assert!(headers.typed_try_get::<Accept>().is_err());
  }

  #[test]
  fn test_encode() {
    let accept: Accept = "text/html,application/xml;q=0.90,*/*;q=0.8".parse().unwrap();
    let mut headers = HeaderMap::new();
    headers.typed_insert(accept);

    assert_eq!(headers.get(ACCEPT).unwrap(), "text/html, application/xml;q=0.9, */*;q=0.8");
  }
}
