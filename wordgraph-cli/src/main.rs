use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use wordgraph_core::graph::bridge::{BridgeResult, bridge_words};
use wordgraph_core::graph::builder::build_graph_from_file;
use wordgraph_core::graph::generator::generate_text;
use wordgraph_core::graph::shortest_path::{PathResult, shortest_path};
use wordgraph_core::graph::tokenizer::tokenize;
use wordgraph_core::graph::walker::{DEFAULT_MAX_STEPS, WalkResult, random_walk};
use wordgraph_core::graph::word_graph::WordGraph;

/// Interactive shell over a word-adjacency graph.
///
/// Builds the graph once from the file given as the single positional
/// argument, then dispatches menu commands until exit. All formatting of
/// query outcomes happens here; the core only returns tagged results.
fn main() -> ExitCode {
	let mut args = env::args();
	let program = args.next().unwrap_or_else(|| "wordgraph".to_owned());
	let Some(filename) = args.next() else {
		eprintln!("Usage: {program} <input_file>");
		return ExitCode::FAILURE;
	};

	let graph = match build_graph_from_file(&filename) {
		Ok(graph) => graph,
		Err(e) => {
			eprintln!("{e}");
			return ExitCode::FAILURE;
		}
	};

	match run_menu(&graph) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{e}");
			ExitCode::FAILURE
		}
	}
}

/// Reads and dispatches menu choices until exit or end of input.
fn run_menu(graph: &WordGraph) -> io::Result<()> {
	let stdin = io::stdin();
	let mut rng = rand::rng();

	loop {
		println!("Choose an option:");
		println!("1. Display graph");
		println!("2. Query bridge words");
		println!("3. Generate new text");
		println!("4. Calculate shortest path");
		println!("5. Random walk");
		println!("6. Exit");

		let Some(choice) = read_line(&stdin)? else {
			// End of input behaves like exit
			return Ok(());
		};

		match choice.trim() {
			"1" => display(graph),
			"2" => {
				let word1 = prompt(&stdin, "Enter first word: ")?;
				let word2 = prompt(&stdin, "Enter second word: ")?;
				println!("{}", format_bridges(graph, &word1, &word2));
			}
			"3" => {
				let text = prompt(&stdin, "Enter new text: ")?;
				let words = tokenize(&text);
				println!("{}", generate_text(graph, &words, &mut rng).join(" "));
			}
			"4" => {
				let start = prompt(&stdin, "Enter start word: ")?;
				let end = prompt(&stdin, "Enter end word: ")?;
				println!("{}", format_path(graph, &start, &end));
			}
			"5" => match random_walk(graph, &mut rng, DEFAULT_MAX_STEPS) {
				WalkResult::Walk(walk) => println!("{}", walk.join(" ")),
				WalkResult::EmptyGraph => println!("The graph is empty!"),
			},
			"6" => return Ok(()),
			_ => println!("Invalid option. Please try again."),
		}
	}
}

/// Prints the whole graph, one source word per line.
fn display(graph: &WordGraph) {
	for (from, edges) in graph.snapshot() {
		let rendered: Vec<String> = edges
			.iter()
			.map(|(to, weight)| format!("{to}({weight})"))
			.collect();
		println!("{from} -> {}", rendered.join(", "));
	}
}

/// Formats a bridge-word query.
fn format_bridges(graph: &WordGraph, word1: &str, word2: &str) -> String {
	match bridge_words(graph, word1, word2) {
		BridgeResult::UnknownWords(missing) => {
			let quoted: Vec<String> = missing.iter().map(|w| format!("\"{w}\"")).collect();
			format!("No {} in the graph!", quoted.join(" or "))
		}
		BridgeResult::Bridges(set) if set.is_empty() => {
			format!("No bridge words from \"{word1}\" to \"{word2}\"!")
		}
		BridgeResult::Bridges(set) => {
			let bridges: Vec<&str> = set.iter().map(String::as_str).collect();
			format!(
				"The bridge words from \"{word1}\" to \"{word2}\" are: {}",
				bridges.join(", ")
			)
		}
	}
}

/// Formats a shortest-path query.
fn format_path(graph: &WordGraph, start: &str, end: &str) -> String {
	match shortest_path(graph, start, end) {
		PathResult::Path { words, weight } => format!(
			"Shortest path from \"{start}\" to \"{end}\": {} with length {weight}",
			words.join(" -> ")
		),
		PathResult::NoPath => format!("No path from \"{start}\" to \"{end}\""),
	}
}

/// Prints a prompt and reads the answer, lowercased and trimmed.
fn prompt(stdin: &io::Stdin, label: &str) -> io::Result<String> {
	print!("{label}");
	io::stdout().flush()?;
	Ok(read_line(stdin)?.unwrap_or_default().trim().to_lowercase())
}

/// Reads one line from stdin; `None` at end of input.
fn read_line(stdin: &io::Stdin) -> io::Result<Option<String>> {
	let mut line = String::new();
	match stdin.lock().read_line(&mut line)? {
		0 => Ok(None),
		_ => Ok(Some(line)),
	}
}
