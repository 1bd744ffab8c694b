use std::fmt;
use std::path::Path;

use crate::graph::tokenizer::tokenize;
use crate::graph::word_graph::WordGraph;
use crate::io::read_lines;

/// Failure of the build phase.
///
/// # Variants
/// - `Io`: the input file could not be read.
/// - `EmptyInput`: the input produced no token at all, so there is
///   nothing to build a graph from.
///
/// The caller decides whether to abort or carry on with an empty graph.
#[derive(Debug)]
pub enum BuildError {
	Io(std::io::Error),
	EmptyInput,
}

impl fmt::Display for BuildError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(e) => write!(f, "Failed to read input: {e}"),
			Self::EmptyInput => write!(f, "Input contains no words"),
		}
	}
}

impl std::error::Error for BuildError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			Self::EmptyInput => None,
		}
	}
}

impl From<std::io::Error> for BuildError {
	fn from(e: std::io::Error) -> Self {
		Self::Io(e)
	}
}

/// Builds a graph from an ordered token sequence.
///
/// Every consecutive pair becomes an edge occurrence; repeated pairs
/// accumulate weight. Fewer than two tokens yield a graph without edges
/// (and without nodes, since nodes only arise from edge endpoints).
pub fn build_graph<I, S>(tokens: I) -> WordGraph
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut graph = WordGraph::new();
	let mut previous: Option<S> = None;

	for token in tokens {
		if let Some(prev) = &previous {
			graph.add_edge(prev.as_ref(), token.as_ref());
		}
		previous = Some(token);
	}

	graph
}

/// Builds a graph from raw text lines.
///
/// Each line is tokenized and all lines feed one continuous stream, so
/// the last word of a line is adjacent to the first word of the next.
pub fn build_graph_from_lines<I, S>(lines: I) -> WordGraph
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	build_graph(lines.into_iter().flat_map(|line| tokenize(line.as_ref())))
}

/// Builds a graph from a plain-text file.
///
/// # Errors
/// - `BuildError::Io` if the file cannot be read.
/// - `BuildError::EmptyInput` if the file yields no token.
pub fn build_graph_from_file<P: AsRef<Path>>(path: P) -> Result<WordGraph, BuildError> {
	let lines = read_lines(path)?;
	let tokens: Vec<String> = lines.iter().flat_map(|line| tokenize(line)).collect();
	if tokens.is_empty() {
		return Err(BuildError::EmptyInput);
	}
	Ok(build_graph(tokens))
}
