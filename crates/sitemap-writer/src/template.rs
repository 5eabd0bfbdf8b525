//! XML templates for sitemap and sitemap index documents.
//!
//! Documents are produced by plain string concatenation: a fixed header,
//! one fragment per entry, and a fixed footer. The whitespace inside the
//! templates is part of the output format.

use std::fmt::Write;

use crate::page::{IndexEntry, PageRecord};

/// File name suffix of a compressed sitemap.
pub const SITEMAP_SUFFIX: &str = ".xml.gz";

/// Date format of `<lastmod>` elements.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opening of a sitemap document, up to and including `<urlset>`.
pub const SITEMAP_HEADER: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    "\n\t",
    r#"<urlset xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd" xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
);

/// Closing of a sitemap document.
pub const SITEMAP_FOOTER: &str = "\n\t</urlset>";

/// Opening of a sitemap index document, up to and including `<sitemapindex>`.
pub const INDEX_HEADER: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    "\n  ",
    r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
);

/// Closing of a sitemap index document.
pub const INDEX_FOOTER: &str = "\n\t</sitemapindex>";

/// Render a single `<url>` fragment.
pub fn render_page(record: &PageRecord) -> String {
    let mut xml = String::with_capacity(160 + record.location.len());
    push_page(&mut xml, record);
    xml
}

/// Render a single `<sitemap>` fragment.
pub fn render_index_entry(entry: &IndexEntry) -> String {
    let mut xml = String::with_capacity(80 + entry.location.len());
    push_index_entry(&mut xml, entry);
    xml
}

/// Render a complete sitemap document, keeping record order.
pub fn render_sitemap(records: &[PageRecord]) -> String {
    let mut xml = String::with_capacity(
        SITEMAP_HEADER.len() + SITEMAP_FOOTER.len() + records.len() * 192,
    );
    xml.push_str(SITEMAP_HEADER);
    for record in records {
        push_page(&mut xml, record);
    }
    xml.push_str(SITEMAP_FOOTER);
    xml
}

/// Render a complete sitemap index document, keeping entry order.
pub fn render_sitemap_index(entries: &[IndexEntry]) -> String {
    let mut xml =
        String::with_capacity(INDEX_HEADER.len() + INDEX_FOOTER.len() + entries.len() * 128);
    xml.push_str(INDEX_HEADER);
    for entry in entries {
        push_index_entry(&mut xml, entry);
    }
    xml.push_str(INDEX_FOOTER);
    xml
}

fn push_page(xml: &mut String, record: &PageRecord) {
    xml.push_str("\n\t<url>\n");
    let _ = writeln!(xml, "\t  <loc>{}</loc>", record.location);
    let _ = writeln!(
        xml,
        "\t  <lastmod>{}</lastmod>",
        record.last_modified.format(DATE_FORMAT)
    );
    let _ = writeln!(xml, "\t  <changefreq>{}</changefreq>", record.change_frequency);
    let _ = writeln!(xml, "\t  <priority>{:.1}</priority>", record.priority);
    // Trailing space and tab are part of the format.
    xml.push_str("\t</url> \t");
}

fn push_index_entry(xml: &mut String, entry: &IndexEntry) {
    xml.push_str("\n\t<sitemap>\n");
    let _ = writeln!(xml, "\t\t<loc>{}</loc>", entry.location);
    let _ = writeln!(
        xml,
        "\t\t<lastmod>{}</lastmod>",
        entry.last_modified.format(DATE_FORMAT)
    );
    xml.push_str("\t</sitemap>");
}
