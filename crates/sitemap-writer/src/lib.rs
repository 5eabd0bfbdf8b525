//! XML sitemap and sitemap index generation.
//!
//! Renders page records into the sitemap protocol's XML format and writes
//! them to disk:
//!
//! - [`write_sitemap`]: gzip-compressed `.xml.gz` sitemap of page records
//! - [`write_sitemap_index`]: plain XML index of the sitemap files in a directory
//! - [`render_page`]: the `<url>` fragment of a single record
//!
//! [`SitemapWriter`] carries settings from [`sitemap_config`] such as the gzip
//! compression level; the free functions use the defaults.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sitemap_writer::{Frequency, PageRecord, render_page};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
//! let page = PageRecord::new("https://example.com/", date, Frequency::Daily, 0.5);
//! assert!(render_page(&page).contains("<lastmod>2024-12-01</lastmod>"));
//! ```

mod error;
mod frequency;
mod page;
mod scanner;
mod template;
mod writer;

pub use error::SitemapError;
pub use frequency::{Frequency, ParseFrequencyError};
pub use page::{IndexEntry, PageRecord};
pub use template::{
    INDEX_FOOTER, INDEX_HEADER, SITEMAP_FOOTER, SITEMAP_HEADER, SITEMAP_SUFFIX, render_index_entry,
    render_page, render_sitemap, render_sitemap_index,
};
pub use writer::{SitemapWriter, write_sitemap, write_sitemap_index};
