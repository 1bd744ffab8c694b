use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Shared empty edge set returned for unknown words.
static NO_EDGES: LazyLock<HashMap<String, usize>> = LazyLock::new(HashMap::new);

/// Directed, edge-weighted graph of words.
///
/// A node is any word seen as either endpoint of an adjacency pair.
/// An edge (from, to) carries a strictly positive weight: the number of
/// times `to` immediately followed `from` in the source text.
///
/// ## Responsibilities
/// - Accumulate edge occurrences during the build phase
/// - Expose outgoing neighbors for the query algorithms
/// - Provide an ordered read-only snapshot for display
///
/// ## Invariants
/// - Every edge weight is >= 1
/// - Every node has an adjacency entry (empty for sinks), so there are
///   no isolated nodes: all nodes arise from edge endpoints
/// - Queries never mutate the graph; all mutation happens during build
#[derive(Clone, Debug, Default)]
pub struct WordGraph {
	/// Outgoing edges indexed by source word.
	/// The value maps each destination to its occurrence count.
	/// Example: { "new" => { "worlds" => 2, "life" => 1 } }
	adjacency: HashMap<String, HashMap<String, usize>>,
}

impl WordGraph {
	/// Creates an empty graph.
	pub fn new() -> Self {
		Self { adjacency: HashMap::new() }
	}

	/// Records an occurrence of the adjacency `from` -> `to`.
	///
	/// - If the edge already exists, its weight is increased.
	/// - Otherwise, a new edge is created with an initial weight of 1.
	/// - Both endpoints become nodes; `to` gets an (empty) adjacency
	///   entry so that pure sinks still count as nodes.
	pub fn add_edge(&mut self, from: &str, to: &str) {
		self.adjacency.entry(to.to_owned()).or_default();
		let edges = self.adjacency.entry(from.to_owned()).or_default();
		*edges.entry(to.to_owned()).or_insert(0) += 1;
	}

	/// Returns the outgoing edge set of `word`.
	///
	/// Unknown words yield an empty mapping; absence is not an error
	/// here. Callers that must distinguish "unknown word" check
	/// `has_node` separately.
	pub fn neighbors(&self, word: &str) -> &HashMap<String, usize> {
		self.adjacency.get(word).unwrap_or(&NO_EDGES)
	}

	/// Returns true if `word` was seen as either edge endpoint.
	pub fn has_node(&self, word: &str) -> bool {
		self.adjacency.contains_key(word)
	}

	/// Iterates over all nodes, in no particular order.
	pub fn nodes(&self) -> impl Iterator<Item = &str> {
		self.adjacency.keys().map(String::as_str)
	}

	/// Number of nodes in the graph.
	pub fn node_count(&self) -> usize {
		self.adjacency.len()
	}

	/// Returns true if the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.adjacency.is_empty()
	}

	/// Returns an alphabetically ordered view of the whole graph.
	///
	/// Intended for display: the presentation layer decides formatting,
	/// this method only guarantees a deterministic iteration order.
	pub fn snapshot(&self) -> BTreeMap<&str, BTreeMap<&str, usize>> {
		self.adjacency
			.iter()
			.map(|(from, edges)| {
				let ordered = edges
					.iter()
					.map(|(to, weight)| (to.as_str(), *weight))
					.collect();
				(from.as_str(), ordered)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repeated_edges_accumulate_weight() {
		let mut graph = WordGraph::new();
		graph.add_edge("b", "c");
		graph.add_edge("b", "c");
		graph.add_edge("a", "b");

		assert_eq!(graph.neighbors("b").get("c"), Some(&2));
		assert_eq!(graph.neighbors("a").get("b"), Some(&1));
	}

	#[test]
	fn sink_words_are_nodes() {
		let mut graph = WordGraph::new();
		graph.add_edge("a", "b");

		assert!(graph.has_node("a"));
		assert!(graph.has_node("b"));
		assert!(graph.neighbors("b").is_empty());
		assert_eq!(graph.node_count(), 2);
	}

	#[test]
	fn unknown_word_has_no_neighbors() {
		let graph = WordGraph::new();
		assert!(graph.neighbors("missing").is_empty());
		assert!(!graph.has_node("missing"));
	}

	#[test]
	fn all_weights_are_positive() {
		let mut graph = WordGraph::new();
		for pair in [("a", "b"), ("b", "c"), ("a", "b"), ("c", "a")] {
			graph.add_edge(pair.0, pair.1);
		}

		for (_, edges) in graph.snapshot() {
			for (_, weight) in edges {
				assert!(weight >= 1);
			}
		}
	}

	#[test]
	fn snapshot_is_alphabetically_ordered() {
		let mut graph = WordGraph::new();
		graph.add_edge("zebra", "apple");
		graph.add_edge("apple", "zebra");
		graph.add_edge("apple", "mango");

		let snapshot = graph.snapshot();
		let sources: Vec<&str> = snapshot.keys().copied().collect();
		assert_eq!(sources, vec!["apple", "mango", "zebra"]);

		let from_apple: Vec<&str> = snapshot["apple"].keys().copied().collect();
		assert_eq!(from_apple, vec!["mango", "zebra"]);
	}
}
