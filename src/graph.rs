//! Immutable link graph over interned page names.

use std::collections::HashMap;

/// Dense index of a page in a [`LinkGraph`].
pub type PageId = usize;

/// A directed graph of intra-corpus hyperlinks.
///
/// Page names are interned to dense ids at construction and everything
/// downstream works on ids; name lookup happens only at the boundaries
/// (building the graph, reporting results). Construction drops self-links
/// and links whose target is not itself a page, so every stored edge
/// points at a real page and a page with no surviving links is dangling.
///
/// The graph is immutable once built.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    names: Vec<String>,
    index: HashMap<String, PageId>,
    links: Vec<Vec<PageId>>,
}

impl LinkGraph {
    /// Build a graph from `(page, link targets)` pairs.
    ///
    /// Ids are assigned in the order pages first appear. Targets that name
    /// no page in the input are discarded, as are self-links; duplicate
    /// targets collapse to one edge. Repeating a page name merges its
    /// target lists.
    pub fn from_links<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut index: HashMap<String, PageId> = HashMap::new();
        let mut raw: Vec<Vec<String>> = Vec::new();

        // Register every page before resolving targets, so forward links
        // to pages that appear later in the input still count.
        for (name, targets) in pages {
            if let Some(&id) = index.get(&name) {
                raw[id].extend(targets);
            } else {
                index.insert(name.clone(), names.len());
                names.push(name);
                raw.push(targets);
            }
        }

        let mut links: Vec<Vec<PageId>> = Vec::with_capacity(names.len());
        for (id, targets) in raw.into_iter().enumerate() {
            let mut row: Vec<PageId> = targets
                .iter()
                .filter_map(|target| index.get(target).copied())
                .filter(|&target| target != id)
                .collect();
            // Sort for deterministic edge order regardless of input order.
            row.sort_unstable();
            row.dedup();
            links.push(row);
        }

        Self { names, index, links }
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the graph has no pages.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a page id by name.
    pub fn page_id(&self, name: &str) -> Option<PageId> {
        self.index.get(name).copied()
    }

    /// Name of a page.
    pub fn page_name(&self, page: PageId) -> &str {
        &self.names[page]
    }

    /// Iterate over all page ids.
    pub fn pages(&self) -> impl Iterator<Item = PageId> {
        0..self.names.len()
    }

    /// Outbound links of a page.
    pub fn out_links(&self, page: PageId) -> &[PageId] {
        &self.links[page]
    }

    /// Out-degree of a page.
    pub fn out_degree(&self, page: PageId) -> usize {
        self.links[page].len()
    }

    /// Check if a page has no outbound links.
    pub fn is_dangling(&self, page: PageId) -> bool {
        self.links[page].is_empty()
    }

    /// Find dangling pages (pages with no outbound links).
    pub fn dangling_pages(&self) -> Vec<PageId> {
        self.pages().filter(|&p| self.is_dangling(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, targets: &[&str]) -> (String, Vec<String>) {
        (
            name.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn interns_pages_in_first_appearance_order() {
        let g = LinkGraph::from_links([
            pair("b.html", &["a.html"]),
            pair("a.html", &["b.html"]),
        ]);
        assert_eq!(g.len(), 2);
        assert_eq!(g.page_id("b.html"), Some(0));
        assert_eq!(g.page_id("a.html"), Some(1));
        assert_eq!(g.page_name(0), "b.html");
    }

    #[test]
    fn drops_self_links_and_external_targets() {
        let g = LinkGraph::from_links([
            pair("a.html", &["a.html", "b.html", "https://example.com"]),
            pair("b.html", &[]),
        ]);
        let a = g.page_id("a.html").unwrap();
        let b = g.page_id("b.html").unwrap();
        assert_eq!(g.out_links(a), &[b]);
        assert!(g.is_dangling(b));
    }

    #[test]
    fn page_linking_only_to_itself_becomes_dangling() {
        let g = LinkGraph::from_links([pair("a.html", &["a.html"]), pair("b.html", &["a.html"])]);
        let a = g.page_id("a.html").unwrap();
        assert_eq!(g.out_degree(a), 0);
        assert!(g.is_dangling(a));
    }

    #[test]
    fn dedups_repeated_targets() {
        let g = LinkGraph::from_links([
            pair("a.html", &["b.html", "b.html", "b.html"]),
            pair("b.html", &[]),
        ]);
        let a = g.page_id("a.html").unwrap();
        assert_eq!(g.out_degree(a), 1);
    }

    #[test]
    fn resolves_forward_links() {
        // a links to b before b has been registered.
        let g = LinkGraph::from_links([pair("a.html", &["b.html"]), pair("b.html", &["a.html"])]);
        let a = g.page_id("a.html").unwrap();
        let b = g.page_id("b.html").unwrap();
        assert_eq!(g.out_links(a), &[b]);
        assert_eq!(g.out_links(b), &[a]);
    }

    #[test]
    fn finds_dangling_pages() {
        let g = LinkGraph::from_links([
            pair("a.html", &[]),
            pair("b.html", &["a.html"]),
            pair("c.html", &[]),
        ]);
        assert_eq!(g.dangling_pages(), vec![0, 2]);
    }

    #[test]
    fn empty_input_gives_empty_graph() {
        let g = LinkGraph::from_links(std::iter::empty());
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
        assert!(g.dangling_pages().is_empty());
    }
}
