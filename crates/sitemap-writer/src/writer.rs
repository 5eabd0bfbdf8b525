//! Sitemap and sitemap index file writing.
//!
//! Documents are rendered fully in memory and then written in one pass.
//! Output files are created or truncated in place, so an error part-way
//! through a write can leave a truncated file behind.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use sitemap_config::{IndexSettings, SitemapSettings};

use crate::error::SitemapError;
use crate::page::PageRecord;
use crate::scanner::scan_sitemaps;
use crate::template::{SITEMAP_SUFFIX, render_sitemap, render_sitemap_index};

/// Writes sitemap files and sitemap indexes with fixed settings.
///
/// Settings are expected to be validated (see [`SitemapSettings::validate`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct SitemapWriter {
    settings: SitemapSettings,
}

impl SitemapWriter {
    /// Create a writer with the given sitemap settings.
    #[must_use]
    pub fn new(settings: SitemapSettings) -> Self {
        Self { settings }
    }

    /// Gzip compression used for sitemap files.
    pub fn compression(&self) -> Compression {
        Compression::new(self.settings.compression_level)
    }

    /// Write a gzip-compressed sitemap of `records` to `path`.
    ///
    /// `path` must end with `.xml.gz`; otherwise
    /// [`SitemapError::InvalidFileName`] is returned and nothing is written.
    /// Records are written in the given order.
    pub fn write_sitemap(
        &self,
        path: impl AsRef<Path>,
        records: &[PageRecord],
    ) -> Result<(), SitemapError> {
        let path = path.as_ref();
        if !path.as_os_str().to_string_lossy().ends_with(SITEMAP_SUFFIX) {
            return Err(SitemapError::InvalidFileName(path.to_path_buf()));
        }

        let document = render_sitemap(records);
        tracing::debug!(
            "rendered sitemap with {} records ({} bytes)",
            records.len(),
            document.len()
        );

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(file, self.compression());
        encoder.write_all(document.as_bytes())?;
        encoder.finish()?;

        tracing::info!("wrote sitemap {}", path.display());
        Ok(())
    }

    /// Write a sitemap index for the `.xml.gz` files in `directory`.
    ///
    /// The index is written uncompressed to `directory/index_file_name`.
    /// Each entry's location is `base_url` followed by the file name, and its
    /// date is the file's modification date. Scanned files are not modified.
    pub fn write_sitemap_index(
        &self,
        directory: impl AsRef<Path>,
        index_file_name: &str,
        base_url: &str,
    ) -> Result<(), SitemapError> {
        let directory = directory.as_ref();
        let entries = scan_sitemaps(directory, base_url)?;
        let document = render_sitemap_index(&entries);

        let path = directory.join(index_file_name);
        let mut file = File::create(&path)?;
        file.write_all(document.as_bytes())?;

        tracing::info!(
            "wrote sitemap index {} ({} sitemaps)",
            path.display(),
            entries.len()
        );
        Ok(())
    }

    /// Write a sitemap index using the file name and base URL from `settings`.
    pub fn write_configured_index(
        &self,
        directory: impl AsRef<Path>,
        settings: &IndexSettings,
    ) -> Result<(), SitemapError> {
        self.write_sitemap_index(directory, &settings.file_name, &settings.base_url)
    }
}

/// Write a gzip-compressed sitemap with default settings.
///
/// See [`SitemapWriter::write_sitemap`].
pub fn write_sitemap(path: impl AsRef<Path>, records: &[PageRecord]) -> Result<(), SitemapError> {
    SitemapWriter::default().write_sitemap(path, records)
}

/// Write a sitemap index with default settings.
///
/// See [`SitemapWriter::write_sitemap_index`].
pub fn write_sitemap_index(
    directory: impl AsRef<Path>,
    index_file_name: &str,
    base_url: &str,
) -> Result<(), SitemapError> {
    SitemapWriter::default().write_sitemap_index(directory, index_file_name, base_url)
}
