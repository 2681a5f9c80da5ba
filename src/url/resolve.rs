use url::Url;

/// Resolves a raw link target into the URL string used as a graph key
///
/// Absolute links are returned unchanged. Protocol-relative links borrow the
/// scheme of `domain`. Every other link is treated as relative and prefixed
/// with the domain string, joined by exactly one `/`.
///
/// The result is resolved but not canonicalized: no `..` collapsing, no
/// trailing-slash or `index.html` folding. Two spellings of the same resource
/// are distinct keys.
///
/// # Examples
///
/// ```
/// use webcrawler::url::resolve_link;
///
/// assert_eq!(resolve_link("https://example.com", "/about"), "https://example.com/about");
/// assert_eq!(resolve_link("https://example.com/", "/about"), "https://example.com/about");
/// assert_eq!(
///     resolve_link("https://example.com", "https://example.com/x"),
///     "https://example.com/x"
/// );
/// ```
pub fn resolve_link(domain: &str, link: &str) -> String {
    if Url::parse(link).is_ok() {
        return link.to_string();
    }

    if let Some(rest) = link.strip_prefix("//") {
        let scheme = Url::parse(domain)
            .map(|d| d.scheme().to_string())
            .unwrap_or_else(|_| "http".to_string());
        return format!("{}://{}", scheme, rest);
    }

    let base = domain.trim_end_matches('/');
    match link.strip_prefix('/') {
        Some(path) => format!("{}/{}", base, path),
        None => format!("{}/{}", base, link),
    }
}
