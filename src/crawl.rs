//! Corpus loading: a directory of HTML pages becomes a [`LinkGraph`].

use crate::error::{Error, Result};
use crate::graph::LinkGraph;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Build the link graph for a directory of `.html` files.
///
/// Each file becomes a page named by its filename, and every anchor
/// `href` in its contents that names another file in the corpus becomes
/// an outbound link. Self-links and targets outside the corpus are
/// dropped by graph construction. Filenames are visited in sorted order
/// so page ids are identical across runs over the same corpus.
///
/// An unreadable directory or file is a fatal input error, as is a
/// directory containing no `.html` files.
pub fn crawl(dir: &Path) -> Result<LinkGraph> {
    let entries = fs::read_dir(dir).map_err(|source| Error::CorpusUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut filenames: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::CorpusUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.path().is_file() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        if name.ends_with(".html") {
            filenames.push(name);
        }
    }
    filenames.sort();

    let href = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");

    let mut pages: Vec<(String, Vec<String>)> = Vec::with_capacity(filenames.len());
    for name in filenames {
        let path = dir.join(&name);
        let contents = fs::read_to_string(&path).map_err(|source| Error::CorpusUnreadable {
            path: path.clone(),
            source,
        })?;
        let targets: Vec<String> = href
            .captures_iter(&contents)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .collect();
        pages.push((name, targets));
    }

    if pages.is_empty() {
        return Err(Error::EmptyCorpus(dir.to_path_buf()));
    }

    let graph = LinkGraph::from_links(pages);
    let edges: usize = graph.pages().map(|p| graph.out_degree(p)).sum();
    tracing::info!(
        "Crawled {} pages ({} links) from {}",
        graph.len(),
        edges,
        dir.display()
    );
    Ok(graph)
}
