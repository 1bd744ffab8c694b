use rand::Rng;

use crate::graph::bridge::bridge_set;
use crate::graph::word_graph::WordGraph;

/// Re-walks `words`, inserting bridge words where the graph offers one.
///
/// For each consecutive pair (w, next) the first word is emitted, then,
/// if the bridge set between the pair is non-empty, one uniformly random
/// member of it. The last word is always emitted unchanged. Inputs of
/// fewer than two words pass through as-is.
///
/// # Notes
/// - The choice is uniform per gap and independent across gaps.
/// - Words absent from the graph have an empty bridge set, so they
///   simply produce no insertion.
/// - The randomness source is injected so callers (and tests) control
///   reproducibility; production code passes `rand::rng()`.
pub fn generate_text<R: Rng>(graph: &WordGraph, words: &[String], rng: &mut R) -> Vec<String> {
	if words.len() < 2 {
		return words.to_vec();
	}

	let mut output = Vec::with_capacity(words.len());
	for pair in words.windows(2) {
		output.push(pair[0].clone());

		let bridges = bridge_set(graph, &pair[0], &pair[1]);
		if !bridges.is_empty() {
			// BTreeSet iteration is ordered, so indexing is stable for a seeded rng
			let index = rng.random_range(0..bridges.len());
			if let Some(bridge) = bridges.iter().nth(index) {
				output.push(bridge.clone());
			}
		}
	}
	// windows(2) emitted every word but the final one
	output.push(words[words.len() - 1].clone());

	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::builder::build_graph_from_lines;
	use crate::graph::tokenizer::tokenize;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn sample_graph() -> WordGraph {
		build_graph_from_lines(["to explore strange new worlds", "to seek new life"])
	}

	#[test]
	fn inserts_a_valid_bridge_word_in_each_gap() {
		// "seek" is the only bridge between "to" and "new"
		let graph = sample_graph();
		let input = tokenize("to new");

		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			let output = generate_text(&graph, &input, &mut rng);
			assert_eq!(output, vec!["to", "seek", "new"]);
		}
	}

	#[test]
	fn no_bridge_leaves_the_input_unchanged() {
		let graph = sample_graph();
		let input = tokenize("new worlds");
		let mut rng = StdRng::seed_from_u64(7);

		// No word w with new -> w and w -> worlds exists in the corpus
		assert_eq!(generate_text(&graph, &input, &mut rng), input);
	}

	#[test]
	fn chosen_bridges_always_come_from_the_valid_set() {
		let graph = build_graph_from_lines(["a x c", "a y c", "a z c"]);
		let input = tokenize("a c");

		for seed in 0..50 {
			let mut rng = StdRng::seed_from_u64(seed);
			let output = generate_text(&graph, &input, &mut rng);
			assert_eq!(output.len(), 3);
			assert_eq!(output[0], "a");
			assert!(["x", "y", "z"].contains(&output[1].as_str()));
			assert_eq!(output[2], "c");
		}
	}

	#[test]
	fn short_inputs_pass_through() {
		let graph = sample_graph();
		let mut rng = StdRng::seed_from_u64(0);

		let single = vec!["worlds".to_owned()];
		assert_eq!(generate_text(&graph, &single, &mut rng), single);
		assert!(generate_text(&graph, &[], &mut rng).is_empty());
	}

	#[test]
	fn unknown_words_produce_no_insertion() {
		let graph = sample_graph();
		let input = tokenize("warp drive");
		let mut rng = StdRng::seed_from_u64(3);

		assert_eq!(generate_text(&graph, &input, &mut rng), input);
	}
}
