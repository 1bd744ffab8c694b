use std::collections::BTreeSet;

use crate::graph::word_graph::WordGraph;

/// Outcome of a bridge-word lookup.
///
/// # Variants
/// - `Bridges`: both words are in the graph; the set holds every word `w`
///   with edges word1 -> w and w -> word2. May be empty. Ordered
///   alphabetically so a rendered result is stable.
/// - `UnknownWords`: one or both query words are not graph nodes; the
///   list names the absent ones. Distinct from an empty bridge set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BridgeResult {
	Bridges(BTreeSet<String>),
	UnknownWords(Vec<String>),
}

/// Finds all bridge words between `word1` and `word2`.
///
/// A bridge word `w` forms the two-hop path word1 -> w -> word2. Edge
/// weights are irrelevant here; only edge existence matters.
pub fn bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> BridgeResult {
	let missing: Vec<String> = [word1, word2]
		.into_iter()
		.filter(|word| !graph.has_node(word))
		.map(str::to_owned)
		.collect();
	if !missing.is_empty() {
		return BridgeResult::UnknownWords(missing);
	}

	BridgeResult::Bridges(bridge_set(graph, word1, word2))
}

/// Raw bridge set without the membership check.
///
/// Unknown endpoints simply yield an empty set; used by the text
/// generator where "unknown word" is not a distinguishable outcome.
pub(crate) fn bridge_set(graph: &WordGraph, word1: &str, word2: &str) -> BTreeSet<String> {
	graph
		.neighbors(word1)
		.keys()
		.filter(|bridge| graph.neighbors(bridge).contains_key(word2))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::builder::build_graph_from_lines;

	fn sample_graph() -> WordGraph {
		build_graph_from_lines(["to explore strange new worlds", "to seek new life"])
	}

	#[test]
	fn finds_the_exact_bridge_set() {
		// "seek" bridges "to" and "new"; "explore" leads to "strange", not "new"
		let graph = sample_graph();
		match bridge_words(&graph, "to", "new") {
			BridgeResult::Bridges(set) => {
				assert_eq!(set, BTreeSet::from(["seek".to_owned()]));
			}
			other => panic!("Expected bridges, got {other:?}"),
		}
	}

	#[test]
	fn known_words_without_bridges_yield_an_empty_set() {
		let graph = sample_graph();
		match bridge_words(&graph, "strange", "life") {
			BridgeResult::Bridges(set) => assert!(set.is_empty()),
			other => panic!("Expected empty bridges, got {other:?}"),
		}
	}

	#[test]
	fn unknown_words_are_reported_not_emptied() {
		let graph = sample_graph();
		match bridge_words(&graph, "to", "starship") {
			BridgeResult::UnknownWords(missing) => {
				assert_eq!(missing, vec!["starship".to_owned()]);
			}
			other => panic!("Expected unknown words, got {other:?}"),
		}

		match bridge_words(&graph, "warp", "starship") {
			BridgeResult::UnknownWords(missing) => assert_eq!(missing.len(), 2),
			other => panic!("Expected unknown words, got {other:?}"),
		}
	}

	#[test]
	fn bridge_detection_ignores_weights() {
		// Heavy direct edge a -> c must not mask the bridge through b
		let graph = build_graph_from_lines(["a c a c a c a b c"]);
		match bridge_words(&graph, "a", "c") {
			BridgeResult::Bridges(set) => {
				assert!(set.contains("b"));
			}
			other => panic!("Expected bridges, got {other:?}"),
		}
	}

	#[test]
	fn multiple_bridges_come_back_sorted() {
		let graph = build_graph_from_lines(["a z c", "a b c", "a m c"]);
		match bridge_words(&graph, "a", "c") {
			BridgeResult::Bridges(set) => {
				let ordered: Vec<&str> = set.iter().map(String::as_str).collect();
				assert_eq!(ordered, vec!["b", "m", "z"]);
			}
			other => panic!("Expected bridges, got {other:?}"),
		}
	}
}
