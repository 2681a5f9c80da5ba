//! HTML parser for extracting the page title and same-domain links
//!
//! Link extraction rules:
//!
//! **Include:** every `<a href="...">` whose target is relative, or absolute
//! with the same host as the crawl domain. Links are kept raw, in document
//! order, duplicates included.
//!
//! **Exclude:** other hosts, host-less schemes (`mailto:`, `javascript:`,
//! `tel:`, `data:`), empty and fragment-only hrefs, unparseable targets.

use crate::url::is_same_domain;
use crate::ParseError;
use scraper::{Html, Selector};
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Text of the first non-empty `<title>` element (empty if none)
    pub title: String,

    /// Raw same-domain link targets
    pub links: Vec<String>,
}

/// Turns a document body into a title and outbound links
pub trait DocumentParser: Send + Sync {
    /// Parses `body`, keeping only links that stay on `domain`
    fn parse(&self, body: &str, domain: &str) -> Result<ParsedPage, ParseError>;
}

/// `DocumentParser` backed by `scraper`
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl DocumentParser for HtmlParser {
    fn parse(&self, body: &str, domain: &str) -> Result<ParsedPage, ParseError> {
        let domain = Url::parse(domain).map_err(|e| ParseError::InvalidDomain {
            domain: domain.to_string(),
            message: e.to_string(),
        })?;
        parse_html(body, &domain)
    }
}

/// Parses HTML content and extracts the title and same-domain links
///
/// # Example
///
/// ```
/// use webcrawler::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let domain = Url::parse("https://example.com").unwrap();
/// let parsed = parse_html(html, &domain).unwrap();
/// assert_eq!(parsed.title, "Test");
/// assert_eq!(parsed.links, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str, domain: &Url) -> Result<ParsedPage, ParseError> {
    if html.trim().is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    let document = Html::parse_document(html);

    Ok(ParsedPage {
        title: extract_title(&document)?,
        links: extract_links(&document, domain)?,
    })
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Extracts the first non-empty title in document order
///
/// The title's first text node is returned as written, surrounding
/// whitespace included. Empty `<title>` elements are passed over.
fn extract_title(document: &Html) -> Result<String, ParseError> {
    let title_selector = selector("title")?;

    Ok(document
        .select(&title_selector)
        .filter_map(|element| element.text().next())
        .find(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_default())
}

fn extract_links(document: &Html, domain: &Url) -> Result<Vec<String>, ParseError> {
    let a_selector = selector("a[href]")?;
    let mut links = Vec::new();

    for element in document.select(&a_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();

        // Skip empty and same-page anchors
        if href.is_empty() || href.starts_with('#') {
            continue;
        }

        match is_same_domain(href, domain) {
            Ok(true) => links.push(href.to_string()),
            Ok(false) => tracing::trace!("Skipping off-domain link {}", href),
            Err(e) => tracing::trace!("Skipping unparseable link {}: {}", href, e),
        }
    }

    Ok(links)
}
