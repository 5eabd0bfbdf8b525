//! Error type for sitemap writing.

use std::path::PathBuf;

/// Error returned when writing a sitemap or sitemap index.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// The output path does not end with `.xml.gz`. Reported before any I/O.
    #[error("not an .xml.gz file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
