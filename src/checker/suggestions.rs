use crate::checker::dictionary::Dictionary;

/// Rank dictionary words within `max_distance` edits of `word`.
///
/// Candidates are ordered by distance; equal distances keep dictionary
/// order. Each suggestion is returned with its first letter capitalized.
pub fn generate(
    word: &str,
    dictionary: &Dictionary,
    max_suggestions: usize,
    max_distance: usize,
) -> Vec<String> {
    let word = word.to_lowercase();

    let mut candidates: Vec<(usize, String)> = Vec::new();
    dictionary.for_each_word(|candidate| {
        let distance = edit_distance(&word, candidate);
        if distance > 0 && distance <= max_distance {
            candidates.push((distance, candidate.to_string()));
        }
    });

    // sort_by_key is stable
    candidates.sort_by_key(|(distance, _)| *distance);

    candidates
        .into_iter()
        .take(max_suggestions)
        .map(|(_, candidate)| capitalize(&candidate))
        .collect()
}

/// Confidence that the best suggestion is the intended word.
pub fn confidence(word: &str, suggestions: &[String]) -> f32 {
    let Some(best) = suggestions.first() else {
        return 0.0;
    };

    match edit_distance(&word.to_lowercase(), &best.to_lowercase()) {
        1 => 0.9,
        2 => 0.7,
        _ => 0.5,
    }
}

/// Calculate Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rows of the DP matrix are enough
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        current[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };

            current[j + 1] = std::cmp::min(
                std::cmp::min(
                    previous[j + 1] + 1, // deletion
                    current[j] + 1,      // insertion
                ),
                previous[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("hello", "hullo"), 1);
        assert_eq!(edit_distance("hello", "world"), 4);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_edit_distance_is_symmetric() {
        for (a, b) in [("flaw", "lawn"), ("gumbo", "gambol"), ("book", "back")] {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }

    #[test]
    fn test_ties_keep_base_before_additions() {
        let dict = Dictionary::from_words(["bat"]).unwrap();
        dict.insert("cat");
        dict.insert("aat");

        assert_eq!(generate("mat", &dict, 5, 1), vec!["Bat", "Aat", "Cat"]);
    }

    #[test]
    fn test_generate_ranks_by_distance() {
        let dict = Dictionary::from_words(["love", "live", "glove", "lover", "python"]).unwrap();

        let suggestions = generate("luv", &dict, 5, 2);
        // "live" and "love" are two edits away, the rest are further
        assert_eq!(suggestions, vec!["Live", "Love"]);
    }

    #[test]
    fn test_generate_excludes_exact_match_and_truncates() {
        let dict = Dictionary::from_words(["cat", "bat", "hat", "mat", "rat", "sat", "vat"]).unwrap();

        let suggestions = generate("cat", &dict, 5, 2);
        assert_eq!(suggestions.len(), 5);
        assert!(!suggestions.contains(&"Cat".to_string()));
        assert_eq!(suggestions[0], "Bat");
    }

    #[test]
    fn test_confidence_by_best_distance() {
        assert_eq!(confidence("pythn", &["Python".to_string()]), 0.9);
        assert_eq!(confidence("luv", &["Love".to_string()]), 0.7);
        assert_eq!(confidence("abc", &[]), 0.0);
    }
}
