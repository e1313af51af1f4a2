//! End-to-end sketch: link graph → both PageRank estimators → report.
//!
//! Builds the corpus in memory instead of crawling a directory, which
//! keeps the demo self-contained while exercising the exact seams the
//! CLI uses:
//! - `LinkGraph::from_links` for graph construction
//! - `transition_model` for one surfer step
//! - `sample_pagerank` / `iterate_pagerank` as independent estimates

use surfrank::{
    iterate_pagerank, sample_pagerank, transition_model, IterateConfig, LinkGraph, SampleConfig,
};

fn main() -> surfrank::Result<()> {
    let graph = LinkGraph::from_links([
        ("1.html".to_string(), vec!["2.html".to_string()]),
        (
            "2.html".to_string(),
            vec!["1.html".to_string(), "3.html".to_string()],
        ),
        ("3.html".to_string(), vec!["2.html".to_string()]),
        // 4.html links nowhere: a dangling page.
        ("4.html".to_string(), vec![]),
    ]);

    let dist = transition_model(&graph, "2.html", 0.85)?;
    println!("One surfer step from 2.html:");
    for page in graph.pages() {
        println!("  {}: {:.4}", graph.page_name(page), dist[page]);
    }

    let sampled = sample_pagerank(&graph, SampleConfig::default())?;
    println!("PageRank Results from Sampling (n = 10000)");
    for (page, rank) in sampled.sorted_by_page(&graph) {
        println!("  {page}: {rank:.4}");
    }

    let iterated = iterate_pagerank(&graph, IterateConfig::default())?;
    println!("PageRank Results from Iteration");
    for (page, rank) in iterated.sorted_by_page(&graph) {
        println!("  {page}: {rank:.4}");
    }

    let (best, rank) = iterated.top_k(1)[0];
    println!("Most important page: {} ({rank:.4})", graph.page_name(best));

    Ok(())
}
