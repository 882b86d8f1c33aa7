/// Components of a URL split the way Python's `urlparse` splits them.
///
/// Every field borrows from the input. Nothing is decoded or normalized, so
/// `path` is always a verbatim substring of the text it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlParts<'a> {
    pub scheme: &'a str,
    pub netloc: &'a str,
    pub path: &'a str,
    pub params: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

impl<'a> UrlParts<'a> {
    /// Split `url` into its components. Never fails: anything unrecognised
    /// ends up in `path`, and missing components are empty.
    pub fn parse(url: &'a str) -> Self {
        let mut parts = UrlParts::default();
        let mut rest = url;

        if let Some((scheme, after)) = split_scheme(rest) {
            parts.scheme = scheme;
            rest = after;
        }

        if let Some(after_slashes) = rest.strip_prefix("//") {
            let end = after_slashes
                .find(|c| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after_slashes.len());
            parts.netloc = &after_slashes[..end];
            rest = &after_slashes[end..];
        }

        if let Some((before, fragment)) = rest.split_once('#') {
            parts.fragment = fragment;
            rest = before;
        }
        if let Some((before, query)) = rest.split_once('?') {
            parts.query = query;
            rest = before;
        }

        // Params only live in the last path segment.
        let last_segment = rest.rfind('/').unwrap_or(0);
        match rest[last_segment..].find(';') {
            Some(offset) => {
                let idx = last_segment + offset;
                parts.path = &rest[..idx];
                parts.params = &rest[idx + 1..];
            }
            None => parts.path = rest,
        }

        parts
    }
}

fn split_scheme(url: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = url.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}
