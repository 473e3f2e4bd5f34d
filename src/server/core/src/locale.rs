/* src/server/core/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SiteError;

/// Content and UI language. The site ships exactly these two.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Id,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::En, Locale::Id];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Id => "id",
    }
  }

  /// URL prefix for this locale. English lives at the root.
  pub fn prefix(self) -> &'static str {
    match self {
      Self::En => "",
      Self::Id => "/id",
    }
  }

  pub fn other(self) -> Self {
    match self {
      Self::En => Self::Id,
      Self::Id => Self::En,
    }
  }

  /// Exact, case-insensitive match on a locale code.
  pub fn parse(raw: &str) -> Option<Self> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("en") {
      Some(Self::En)
    } else if raw.eq_ignore_ascii_case("id") {
      Some(Self::Id)
    } else {
      None
    }
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Locale {
  type Err = SiteError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s).ok_or_else(|| SiteError::validation(format!("unsupported locale \"{s}\"")))
  }
}
