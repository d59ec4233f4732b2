use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
  static ref SEPARATOR_RUN: Regex = Regex::new(r"[^\p{Alphabetic}\p{Nd}]+").unwrap();
}

/// Identifier-safe company code, derived once from the display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyCode(String);

impl CompanyCode {
  /// Slugify a display name: lowercase, runs of spaces and punctuation
  /// collapse into a single hyphen, no leading or trailing hyphen.
  pub fn from_name(name: &str) -> Self {
    let lowered = name.trim().to_lowercase();
    let slug = SEPARATOR_RUN.replace_all(&lowered, "-");
    Self(slug.trim_matches('-').to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for CompanyCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
