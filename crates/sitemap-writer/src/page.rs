//! Sitemap and sitemap index entries.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::Frequency;

/// A page listed in a sitemap.
///
/// Field values are rendered verbatim: `location` is neither validated nor
/// XML-escaped, and `priority` is not clamped to `0.0..=1.0`.
///
/// Serde field names follow the sitemap element names, so a JSON record
/// looks like:
///
/// ```json
/// {"loc": "https://example.com/", "lastmod": "2024-12-01", "changefreq": "daily", "priority": 0.5}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Absolute page URL.
    #[serde(rename = "loc")]
    pub location: String,
    /// Date of the last modification.
    #[serde(rename = "lastmod")]
    pub last_modified: NaiveDate,
    /// Expected change frequency.
    #[serde(rename = "changefreq")]
    pub change_frequency: Frequency,
    /// Crawl priority relative to other pages of the site.
    pub priority: f32,
}

impl PageRecord {
    /// Create a page record.
    pub fn new(
        location: impl Into<String>,
        last_modified: NaiveDate,
        change_frequency: Frequency,
        priority: f32,
    ) -> Self {
        Self {
            location: location.into(),
            last_modified,
            change_frequency,
            priority,
        }
    }

    /// Create a page record from a timestamp.
    ///
    /// Only the calendar date in the timestamp's own time zone is kept.
    pub fn from_timestamp<Tz: TimeZone>(
        location: impl Into<String>,
        timestamp: &DateTime<Tz>,
        change_frequency: Frequency,
        priority: f32,
    ) -> Self {
        Self::new(location, timestamp.date_naive(), change_frequency, priority)
    }
}

/// A sitemap file listed in a sitemap index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Sitemap file URL.
    pub location: String,
    /// Date the sitemap file was last modified.
    pub last_modified: NaiveDate,
}

impl IndexEntry {
    /// Create an index entry.
    pub fn new(location: impl Into<String>, last_modified: NaiveDate) -> Self {
        Self {
            location: location.into(),
            last_modified,
        }
    }
}
