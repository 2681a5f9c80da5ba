use crate::{UrlError, UrlResult};
use url::{ParseError, Url};

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (e.g. `mailto:` or `data:` URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use webcrawler::url::extract_domain;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Reports whether `link` stays on the host of `domain`
///
/// Relative references (no host of their own) always count as same-domain.
/// Absolute references count only when their host equals the domain's host;
/// the port is ignored. Protocol-relative references (`//host/path`) are
/// compared by the host they name.
///
/// # Errors
///
/// Returns `UrlError::Parse` when either string cannot be parsed at all.
pub fn is_same_domain(link: &str, domain: &Url) -> UrlResult<bool> {
    let target = match Url::parse(link) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => domain
            .join(link)
            .map_err(|e| UrlError::Parse(format!("{}: {}", link, e)))?,
        Err(e) => return Err(UrlError::Parse(format!("{}: {}", link, e))),
    };

    let host = extract_domain(&target);
    Ok(host.is_some() && host == extract_domain(domain))
}
