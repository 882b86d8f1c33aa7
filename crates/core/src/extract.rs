use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain_paths::DomainPaths;
use crate::url_parts::UrlParts;

static CURL_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"curl\s+'(https?://[^'\s]+)'"#).unwrap());

/// Extract the quoted URL of every `curl '<url>'` occurrence in `text`.
/// Returns a vector preserving original order.
pub fn extract_urls(text: &str) -> Vec<&str> {
    CURL_URL_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Turn bare extension tokens (`js`, `css`) into the suffixes matched against
/// paths (`.js`, `.css`). Tokens are used exactly as given otherwise.
pub fn normalize_extensions<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter().map(|ext| format!(".{}", ext.as_ref())).collect()
}

/// Group the paths of every extracted URL by domain.
///
/// A path ending with any of `excluded` is skipped. Suffix matching is exact
/// and case-sensitive; callers pass full suffixes such as `.js`.
pub fn extract<S: AsRef<str>>(text: &str, excluded: &[S]) -> DomainPaths {
    let excluded: Vec<&str> = excluded.iter().map(AsRef::as_ref).collect();
    let mut grouped = DomainPaths::new();

    for url in extract_urls(text) {
        let parts = UrlParts::parse(url);
        if let Some(ext) = excluded.iter().find(|ext| parts.path.ends_with(**ext)) {
            debug!("excluding {url} (matches {ext})");
            continue;
        }
        grouped.insert(parts.netloc, parts.path);
    }

    debug!(
        "extracted {} unique paths across {} domains",
        grouped.path_count(),
        grouped.domain_count()
    );
    grouped
}
