//! Top-level module for the word-adjacency graph system.
//!
//! This module groups the full query surface over a corpus-built graph:
//! - The graph model itself (`WordGraph`)
//! - Corpus tokenization (`tokenizer`)
//! - Graph construction from tokens, lines or a file (`builder`)
//! - Bridge-word lookup (`bridge`)
//! - Text generation via bridge insertion (`generator`)
//! - Minimum-weight path search (`shortest_path`)
//! - Randomized traversal (`walker`)

/// Directed, edge-weighted graph keyed by word.
///
/// Supports edge insertion with weight accumulation, neighbor lookup,
/// node enumeration and an ordered read-only snapshot for display.
pub mod word_graph;

/// Corpus normalization into a flat token stream.
///
/// Strips every non-letter character, lowercases, splits on whitespace.
pub mod tokenizer;

/// Graph construction from a token sequence, raw lines or a text file.
///
/// Adjacency spans line boundaries: all lines feed one continuous stream.
pub mod builder;

/// Bridge-word lookup between two words.
///
/// Distinguishes "no bridges between two known words" from
/// "one or both words are unknown".
pub mod bridge;

/// Text generation by probabilistic bridge-word insertion.
pub mod generator;

/// Single-source minimum-weight path search (Dijkstra).
pub mod shortest_path;

/// Randomized walk with edge-revisit and step-count termination.
pub mod walker;
