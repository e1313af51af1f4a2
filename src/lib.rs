//! # surfrank
//!
//! PageRank for a small corpus of HTML pages, estimated two independent
//! ways: a Monte Carlo simulation of the random surfer and a
//! deterministic fixed-point iteration. The estimators share nothing but
//! the link graph and the transition model, so each validates the other.
//!
//! ```
//! use surfrank::{iterate_pagerank, IterateConfig, LinkGraph};
//!
//! let graph = LinkGraph::from_links([
//!     ("a.html".to_string(), vec!["b.html".to_string()]),
//!     ("b.html".to_string(), vec!["a.html".to_string()]),
//! ]);
//! let ranks = iterate_pagerank(&graph, IterateConfig::default())?;
//! assert!((ranks.sum() - 1.0).abs() < 1e-9);
//! # Ok::<(), surfrank::Error>(())
//! ```

pub mod crawl;
pub mod error;
pub mod graph;
pub mod iterate;
pub mod rank;
pub mod sample;
pub mod transition;

pub use crawl::crawl;
pub use error::{exit_codes, Error, Result};
pub use graph::{LinkGraph, PageId};
pub use iterate::{iterate_pagerank, IterateConfig};
pub use rank::RankVector;
pub use sample::{sample_pagerank, sample_pagerank_with_rng, SampleConfig};
pub use transition::transition_model;
