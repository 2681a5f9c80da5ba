use crate::graph::PageRecord;
use crate::url::resolve_link;
use std::collections::HashMap;

/// Lists every (parent URL, child URL) edge of a crawled graph
///
/// Parents are sorted; children keep document order and are resolved against
/// `domain` the same way the crawler resolved them.
pub fn edges(graph: &HashMap<String, PageRecord>, domain: &str) -> Vec<(String, String)> {
    let mut parents: Vec<&String> = graph.keys().collect();
    parents.sort();

    parents
        .into_iter()
        .flat_map(|parent| {
            graph[parent]
                .links
                .iter()
                .map(move |link| (parent.clone(), resolve_link(domain, link)))
        })
        .collect()
}

/// Prints every edge as `Parent URL: <p>. Child URL: <c>`
pub fn print_edges(graph: &HashMap<String, PageRecord>, domain: &str) {
    for (parent, child) in edges(graph, domain) {
        println!("Parent URL: {}. Child URL: {}", parent, child);
    }
}
