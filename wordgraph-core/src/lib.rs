//! Word-adjacency graph analysis library.
//!
//! This crate builds a weighted directed graph from word adjacency in a
//! text corpus and answers queries over it:
//! - Bridge-word lookup between two words
//! - Text generation via bridge-word insertion
//! - Minimum-weight path search between two words
//! - Randomized walk over the graph
//!
//! The graph is built once per session and is read-only afterwards; every
//! query returns a tagged result the caller inspects. Formatting of results
//! as text is left entirely to the presentation layer.

/// Core graph model and query algorithms.
///
/// This module exposes the graph type, its builders and the four query
/// operations while keeping internal helpers private.
pub mod graph;

/// I/O utilities (line-oriented file loading).
pub mod io;
