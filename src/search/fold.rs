use std::ops::Range;

/// Locate the first case-insensitive occurrence of `needle` in `haystack`.
///
/// `needle` is compared literally, character by character, so characters such
/// as `.` or `*` carry no special meaning. The returned byte range always lies
/// on character boundaries of `haystack` and spans exactly as many characters
/// as `needle` has. An empty needle matches at offset zero.
///
/// Runs in time linear in `haystack` plus `needle` (Knuth-Morris-Pratt over
/// case-folded characters).
#[must_use]
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
	if needle.is_empty() {
		return Some(0..0);
	}

	let pattern: Vec<Folded> = needle.chars().map(fold).collect();
	let failure = failure_table(&pattern);

	// Byte offsets of the last `pattern.len()` haystack chars.
	let mut starts = vec![0; pattern.len()];
	let mut matched = 0;

	for (count, (offset, ch)) in haystack.char_indices().enumerate() {
		starts[count % pattern.len()] = offset;
		let key = fold(ch);

		while matched > 0 && pattern[matched] != key {
			matched = failure[matched - 1];
		}
		if pattern[matched] == key {
			matched += 1;
		}
		if matched == pattern.len() {
			let start = starts[(count + 1) % pattern.len()];
			return Some(start..offset + ch.len_utf8());
		}
	}

	None
}

/// Lowercase expansion of one char, padded. No char lowercases to more than
/// three chars.
type Folded = [char; 3];

fn fold(ch: char) -> Folded {
	let mut folded = ['\0'; 3];
	for (slot, lower) in folded.iter_mut().zip(ch.to_lowercase()) {
		*slot = lower;
	}
	folded
}

/// `table[i]` is the length of the longest proper border of `pattern[..=i]`.
fn failure_table(pattern: &[Folded]) -> Vec<usize> {
	let mut table = vec![0; pattern.len()];
	let mut border = 0;
	for i in 1..pattern.len() {
		while border > 0 && pattern[i] != pattern[border] {
			border = table[border - 1];
		}
		if pattern[i] == pattern[border] {
			border += 1;
		}
		table[i] = border;
	}
	table
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn finds_first_occurrence_ignoring_case() {
		assert_eq!(find_ignore_case("say Hello, hello", "HELLO"), Some(4..9));
	}

	#[test]
	fn special_characters_are_literal() {
		assert_eq!(find_ignore_case("a.b.c", "."), Some(1..2));
		assert_eq!(find_ignore_case("abc", "."), None);
		assert_eq!(find_ignore_case("f(x)*", "(x)*"), Some(1..5));
		assert_eq!(find_ignore_case("[a-z]+", "[a-z]"), Some(0..5));
	}

	#[test]
	fn ranges_fall_on_char_boundaries() {
		let text = "Crème brûlée";
		let range = find_ignore_case(text, "BRÛ").expect("match");
		assert_eq!(&text[range], "brû");
	}

	#[test]
	fn needle_longer_than_haystack_does_not_match() {
		assert_eq!(find_ignore_case("ab", "abc"), None);
		assert_eq!(find_ignore_case("", "a"), None);
	}

	#[test]
	fn overlapping_prefixes_do_not_skip_matches() {
		assert_eq!(find_ignore_case("aaab", "AAB"), Some(1..4));
		assert_eq!(find_ignore_case("abababc", "ABABC"), Some(2..7));
		assert_eq!(find_ignore_case("ÉéÉéx", "éÉX"), Some(4..9));
	}

	#[test]
	fn empty_needle_matches_at_start() {
		assert_eq!(find_ignore_case("anything", ""), Some(0..0));
		assert_eq!(find_ignore_case("", ""), Some(0..0));
	}
}
