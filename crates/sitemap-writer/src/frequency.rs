//! Page change frequency.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How often a page's content is expected to change.
///
/// The value is a hint for crawlers, not a command. `Always` describes
/// documents that change on every access; `Never` describes archived URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl Frequency {
    /// All frequencies, from most to least frequent.
    pub const ALL: [Frequency; 7] = [
        Frequency::Always,
        Frequency::Hourly,
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
        Frequency::Never,
    ];

    /// The `<changefreq>` token for this frequency.
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Always => "always",
            Frequency::Hourly => "hourly",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
            Frequency::Never => "never",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown change frequency token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown change frequency: {0}")]
pub struct ParseFrequencyError(String);

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    /// Parse a `<changefreq>` token, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFrequencyError(s.to_owned()))
    }
}
