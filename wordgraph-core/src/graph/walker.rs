use std::collections::HashSet;

use rand::Rng;
use rand::prelude::IteratorRandom;

use crate::graph::word_graph::WordGraph;

/// Default cap on the number of recorded nodes in a walk.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Outcome of a random walk.
///
/// # Variants
/// - `Walk`: the visited node sequence, in order, start included.
/// - `EmptyGraph`: the graph has no nodes to start from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkResult {
	Walk(Vec<String>),
	EmptyGraph,
}

/// Walks the graph from a uniformly random start node.
///
/// Each step records the current node, stops at a dead end, otherwise
/// moves to a uniformly random out-neighbor. Edge weights are ignored.
///
/// # Termination
/// The bare walk never ends on a cyclic graph, so two bounds apply,
/// both guaranteeing termination:
/// - the walk stops before traversing an edge it has already taken
///   (edges, not nodes: revisiting a node through a fresh edge is a
///   legitimate part of a walk);
/// - the walk stops once `max_steps` nodes have been recorded
///   (`DEFAULT_MAX_STEPS` for callers without a preference).
///
/// # Notes
/// - The randomness source is injected; production code passes
///   `rand::rng()`, tests a seeded `StdRng`.
pub fn random_walk<R: Rng>(graph: &WordGraph, rng: &mut R, max_steps: usize) -> WalkResult {
	let Some(start) = graph.nodes().choose(rng) else {
		return WalkResult::EmptyGraph;
	};

	let mut walk: Vec<String> = Vec::new();
	let mut traversed: HashSet<(&str, &str)> = HashSet::new();
	let mut current = start;

	loop {
		walk.push(current.to_owned());
		if walk.len() >= max_steps {
			break;
		}

		let neighbors = graph.neighbors(current);
		let Some(next) = neighbors.keys().choose(rng) else {
			// Dead end
			break;
		};
		if !traversed.insert((current, next.as_str())) {
			// This edge was already taken once
			break;
		}
		current = next.as_str();
	}

	WalkResult::Walk(walk)
}
