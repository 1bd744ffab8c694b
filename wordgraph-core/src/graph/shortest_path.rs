use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::word_graph::WordGraph;

/// Outcome of a shortest-path query.
///
/// # Variants
/// - `Path`: the minimum total-weight path from start to end, inclusive
///   of both endpoints, together with its weight.
/// - `NoPath`: end is unreachable from start, or either endpoint is
///   absent from the graph. Absence is folded into unreachability:
///   there is no separate error channel for unknown words here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
	Path { words: Vec<String>, weight: usize },
	NoPath,
}

/// Computes the minimum-weight path from `start` to `end`.
///
/// Dijkstra over occurrence-count weights (all >= 1, so non-negative by
/// construction), with a binary-heap frontier. The search stops as soon
/// as `end` is popped with its final distance; the rest of the graph is
/// left unexplored. Stale heap entries are skipped on pop.
///
/// # Notes
/// - `start == end` yields the trivial path `[start]` with weight 0,
///   provided the word is a node.
/// - When several paths share the minimum weight, the one discovered
///   first wins; callers comparing results should compare weights.
pub fn shortest_path(graph: &WordGraph, start: &str, end: &str) -> PathResult {
	if !graph.has_node(start) || !graph.has_node(end) {
		return PathResult::NoPath;
	}
	if start == end {
		return PathResult::Path { words: vec![start.to_owned()], weight: 0 };
	}

	let mut distances: HashMap<&str, usize> = HashMap::new();
	let mut predecessors: HashMap<&str, &str> = HashMap::new();
	let mut frontier: BinaryHeap<Reverse<(usize, &str)>> = BinaryHeap::new();

	distances.insert(start, 0);
	frontier.push(Reverse((0, start)));

	while let Some(Reverse((distance, current))) = frontier.pop() {
		if current == end {
			return PathResult::Path {
				words: reconstruct(&predecessors, end),
				weight: distance,
			};
		}
		// Outdated entry, a shorter route was already settled
		if distance > *distances.get(current).unwrap_or(&usize::MAX) {
			continue;
		}

		for (next, weight) in graph.neighbors(current) {
			let next = next.as_str();
			let candidate = distance + weight;
			if candidate < *distances.get(next).unwrap_or(&usize::MAX) {
				distances.insert(next, candidate);
				predecessors.insert(next, current);
				frontier.push(Reverse((candidate, next)));
			}
		}
	}

	PathResult::NoPath
}

/// Rebuilds the start-to-end word sequence from the predecessor chain.
fn reconstruct(predecessors: &HashMap<&str, &str>, end: &str) -> Vec<String> {
	let mut words = vec![end.to_owned()];
	let mut cursor = end;
	while let Some(previous) = predecessors.get(cursor) {
		words.push((*previous).to_owned());
		cursor = previous;
	}
	words.reverse();
	words
}
