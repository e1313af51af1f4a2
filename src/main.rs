//! surfrank CLI
//!
//! Crawl a directory of HTML pages and report PageRank from both
//! estimators, sorted by page name.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use surfrank::{
    crawl, iterate_pagerank, sample_pagerank, IterateConfig, LinkGraph, RankVector, SampleConfig,
};

/// Estimate PageRank for a directory of HTML pages.
#[derive(Debug, Parser)]
#[command(name = "surfrank", version, about)]
struct Cli {
    /// Directory containing the .html corpus.
    corpus: PathBuf,

    /// Damping factor for both estimators, in (0, 1).
    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    /// Number of surfer steps for the sampling estimator.
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Per-page convergence threshold for the iterative estimator.
    #[arg(long, default_value_t = 0.001)]
    tolerance: f64,

    /// Abort iteration after this many rounds without convergence.
    #[arg(long)]
    max_rounds: Option<usize>,

    /// Seed for the sampling walk.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Also print the top K pages per estimator.
    #[arg(long, value_name = "K")]
    top: Option<usize>,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("surfrank: {err}");
        process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> surfrank::Result<()> {
    let graph = crawl(&cli.corpus)?;

    let sampled = sample_pagerank(
        &graph,
        SampleConfig {
            damping: cli.damping,
            samples: cli.samples,
            seed: cli.seed,
        },
    )?;
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    for (page, rank) in sampled.sorted_by_page(&graph) {
        println!("  {page}: {rank:.4}");
    }
    print_top(&graph, &sampled, cli.top);

    let iterated = iterate_pagerank(
        &graph,
        IterateConfig {
            damping: cli.damping,
            tolerance: cli.tolerance,
            max_rounds: cli.max_rounds,
        },
    )?;
    println!("PageRank Results from Iteration");
    for (page, rank) in iterated.sorted_by_page(&graph) {
        println!("  {page}: {rank:.4}");
    }
    print_top(&graph, &iterated, cli.top);

    Ok(())
}

fn print_top(graph: &LinkGraph, ranks: &RankVector, top: Option<usize>) {
    if let Some(k) = top {
        println!("Top {k} pages");
        for (page, rank) in ranks.top_k(k) {
            println!("  {}: {rank:.4}", graph.page_name(page));
        }
    }
}
