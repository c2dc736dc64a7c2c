// Relation-field tokenizer.
//
// Raw fields are comma-separated display names typed by humans. Splitting
// happens before any resolution: tokens are trimmed, empties dropped, and
// the order of appearance preserved.

/// Split a raw relation field into candidate names.
///
/// An empty or whitespace-only field yields an empty list, never an error.
pub fn split_name_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_drops_empties() {
        assert_eq!(split_name_list("Bob, Charlie ,, Eve "), vec!["Bob", "Charlie", "Eve"]);
    }

    #[test]
    fn test_split_empty_field() {
        assert!(split_name_list("").is_empty());
        assert!(split_name_list("   ").is_empty());
        assert!(split_name_list(",,,").is_empty());
    }

    #[test]
    fn test_split_preserves_order() {
        assert_eq!(split_name_list("Zoe,Alice,Mia"), vec!["Zoe", "Alice", "Mia"]);
    }

    #[test]
    fn test_split_keeps_duplicates() {
        // Deduplication is the graph builder's job, not the tokenizer's.
        assert_eq!(split_name_list("Bob,Bob"), vec!["Bob", "Bob"]);
    }
}
