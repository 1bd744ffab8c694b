use std::sync::LazyLock;

use regex::Regex;

/// Matches every character that is neither an ASCII letter nor a space.
static NON_LETTER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[^a-zA-Z ]").expect("Failed to build regex"));

/// Normalizes raw text into a flat sequence of lowercase words.
///
/// - Deletes every character that is not an ASCII letter or a space
///   (so punctuation glues nothing together: "don't" becomes "dont")
/// - Lowercases the remainder
/// - Splits on runs of whitespace, dropping empty tokens
///
/// Empty or letter-free input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
	let stripped = NON_LETTER.replace_all(text, "");
	stripped
		.split_whitespace()
		.map(str::to_lowercase)
		.collect()
}
