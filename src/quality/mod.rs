//! HTTP quality values, as found in `Accept` style content negotiation headers.
//!
//! See <https://developer.mozilla.org/en-US/docs/Glossary/Quality_values>.

mod header;
mod parse;
mod sort;

use std::fmt::Display;
use std::fmt::Formatter;

pub use header::Accept;
pub use parse::parse_quality_values;
pub use sort::sort_quality_values;

/// A single `type/subtype` entry with its priority in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct QualityValue {
  mime_type: String,
  priority: f64,
}

impl QualityValue {
  /// Creates an entry, clamping `priority` into `[0, 1]`. `NaN` becomes `0`.
  pub fn new(mime_type: impl Into<String>, priority: f64) -> Self {
    let priority = if priority.is_nan() { 0.0 } else { priority.clamp(0.0, 1.0) };
    Self { mime_type: mime_type.into(), priority }
  }

  pub fn mime_type(&self) -> &str {
    &self.mime_type
  }

  pub fn priority(&self) -> f64 {
    self.priority
  }

  pub fn specificity(&self) -> Specificity {
    Specificity::of(&self.mime_type)
  }
}

impl Display for QualityValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.mime_type)?;
    let thousandths = (self.priority * 1000.0).round() as u32;
    if thousandths < 1000 {
      let priority = format!("0.{thousandths:03}");
      write!(f, ";q={}", priority.trim_end_matches('0').trim_end_matches('.'))?;
    }
    Ok(())
  }
}

/// How concrete a media range is. Variants are ordered from least to most specific.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Specificity {
  /// `*/*`
  Any,
  /// `type/*`
  AnySubtype,
  /// `type/subtype`
  Exact,
}

impl Specificity {
  pub fn of(mime_type: &str) -> Self {
    if mime_type == "*/*" {
      Specificity::Any
    } else if mime_type.ends_with("/*") {
      Specificity::AnySubtype
    } else {
      Specificity::Exact
    }
  }
}
