/// Title and outbound links of one crawled page
///
/// Links are kept exactly as they appeared in the document (already filtered to
/// the crawl domain but not yet resolved against it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRecord {
    /// Text of the first `<title>` element, empty if the page has none
    pub title: String,

    /// Same-domain link targets in document order
    pub links: Vec<String>,
}

impl PageRecord {
    /// Creates a record from a title and its extracted links
    pub fn new(title: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            title: title.into(),
            links,
        }
    }
}
