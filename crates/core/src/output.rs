use std::io::{self, Write};
use std::path::Path;

use crate::domain_paths::{DomainPaths, IndexedPath};

/// Header line printed above each domain's paths.
pub fn domain_header(domain: &str) -> String {
    format!("== {domain} ==")
}

/// Write the grouped listing: a header per domain, `id: path` lines, then a blank line.
pub fn write_listing<W: Write>(out: &mut W, grouped: &DomainPaths) -> io::Result<()> {
    let mut entries = grouped.indexed().peekable();
    while let Some(first) = entries.next() {
        writeln!(out, "{}", domain_header(first.domain))?;
        writeln!(out, "{}: {}", first.id, first.path)?;
        while let Some(entry) = entries.next_if(|e| e.domain == first.domain) {
            writeln!(out, "{}: {}", entry.id, entry.path)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the listing as a pretty-printed JSON array of `{id, domain, path}` objects.
pub fn write_listing_json<W: Write>(out: &mut W, grouped: &DomainPaths) -> serde_json::Result<()> {
    let entries: Vec<IndexedPath<'_>> = grouped.indexed().collect();
    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out).map_err(serde_json::Error::io)
}

pub fn not_found_message(id: i64, filename: &Path) -> String {
    format!("Identifier {id} not found in {}.", filename.display())
}
