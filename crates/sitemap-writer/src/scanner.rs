//! Sitemap file discovery for index generation.

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate};

use crate::page::IndexEntry;
use crate::template::SITEMAP_SUFFIX;

/// List the sitemap files directly inside `directory` as index entries.
///
/// Only entries whose name ends with `.xml.gz` are kept, sorted by file
/// name. Each location is `base_url` followed by the file name, with no
/// separator added. The first listing or metadata error aborts the scan.
pub(crate) fn scan_sitemaps(directory: &Path, base_url: &str) -> io::Result<Vec<IndexEntry>> {
    // read_dir order is filesystem dependent
    let mut dir_entries = fs::read_dir(directory)?.collect::<io::Result<Vec<_>>>()?;
    dir_entries.sort_by_key(fs::DirEntry::file_name);

    let mut entries = Vec::new();
    for entry in dir_entries {
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if !file_name.ends_with(SITEMAP_SUFFIX) {
            continue;
        }

        let last_modified = modified_date(&entry.metadata()?)?;
        entries.push(IndexEntry::new(
            format!("{base_url}{file_name}"),
            last_modified,
        ));
    }

    tracing::debug!(
        "found {} sitemap files in {}",
        entries.len(),
        directory.display()
    );
    Ok(entries)
}

/// Modification time of a file as a calendar date in the local time zone.
pub(crate) fn modified_date(metadata: &Metadata) -> io::Result<NaiveDate> {
    let modified: DateTime<Local> = metadata.modified()?.into();
    Ok(modified.date_naive())
}
