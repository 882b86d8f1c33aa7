use curlscan_core::{extract, extract_urls, normalize_extensions};

const SAMPLE: &str = "\
curl 'https://a.com/x' \\
  -H 'accept: */*' \\
  --compressed ;
curl 'https://b.com/y?cache=1' \\
  -H 'accept: */*' ;
curl 'https://a.com/x#again';
curl 'https://a.com/assets/app.js';
curl 'https://a.com/data.json';
";

fn paths_of<'a>(grouped: &'a curlscan_core::DomainPaths, domain: &str) -> Vec<&'a str> {
    grouped
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, paths)| paths.iter().map(String::as_str).collect())
        .unwrap_or_default()
}

#[test]
fn finds_urls_in_order() {
    let urls = extract_urls(SAMPLE);
    assert_eq!(
        urls,
        vec![
            "https://a.com/x",
            "https://b.com/y?cache=1",
            "https://a.com/x#again",
            "https://a.com/assets/app.js",
            "https://a.com/data.json",
        ]
    );
}

#[test]
fn ignores_unquoted_and_non_http_urls() {
    let text = "curl https://a.com/x;\ncurl \"https://a.com/y\";\ncurl 'ftp://a.com/z';\nwget 'https://a.com/w';";
    assert!(extract_urls(text).is_empty());
}

#[test]
fn whitespace_between_curl_and_quote_is_allowed() {
    let text = "curl\t  'http://a.com/x';";
    assert_eq!(extract_urls(text), vec!["http://a.com/x"]);
}

#[test]
fn groups_by_first_appearance_and_dedupes() {
    let grouped = extract::<&str>(SAMPLE, &[]);
    let domains: Vec<&str> = grouped.domains().collect();
    assert_eq!(domains, vec!["a.com", "b.com"]);
    assert_eq!(paths_of(&grouped, "a.com"), vec!["/assets/app.js", "/data.json", "/x"]);
    assert_eq!(paths_of(&grouped, "b.com"), vec!["/y"]);
    assert_eq!(grouped.path_count(), 4);
}

#[test]
fn exclusion_is_exact_suffix() {
    let grouped = extract(SAMPLE, &normalize_extensions(&["js"]));
    assert_eq!(paths_of(&grouped, "a.com"), vec!["/data.json", "/x"]);
}

#[test]
fn exclusion_is_case_sensitive() {
    let text = "curl 'https://a.com/APP.JS';";
    let grouped = extract(text, &[".js"]);
    assert_eq!(paths_of(&grouped, "a.com"), vec!["/APP.JS"]);
}

#[test]
fn domain_with_only_excluded_paths_is_absent() {
    let text = "curl 'https://a.com/x';\ncurl 'https://b.com/y.y';\n";
    let grouped = extract(text, &normalize_extensions(&["y"]));
    let domains: Vec<&str> = grouped.domains().collect();
    assert_eq!(domains, vec!["a.com"]);
}

#[test]
fn bare_path_equal_to_token_is_kept() {
    // `y` becomes `.y`, which `/y` does not end with.
    let grouped = extract(SAMPLE, &normalize_extensions(&["y"]));
    assert_eq!(paths_of(&grouped, "b.com"), vec!["/y"]);
}

#[test]
fn normalize_prepends_dot() {
    assert_eq!(normalize_extensions(&["js", "css", ".png"]), vec![".js", ".css", "..png"]);
    assert!(normalize_extensions::<&str>(&[]).is_empty());
}

#[test]
fn no_matches_gives_empty_grouping() {
    let grouped = extract::<&str>("echo hello\n", &[]);
    assert!(grouped.is_empty());
    assert!(grouped.flatten().is_empty());
}
