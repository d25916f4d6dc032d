//! Splits the catalog document into model-digestible text chunks.

use serde_json::{Map, Value};

/// Split `document` into chunks of serialized entries under `budget` chars.
///
/// Entries are taken in document order and serialized independently as
/// single-key objects, one per line. When appending the next entry would
/// push the accumulator past `budget`, the accumulator is sealed and the
/// triggering entry starts the next chunk; entries are never split or
/// dropped. A single entry larger than the whole budget still lands alone
/// in its own over-budget chunk, which downstream callers must tolerate.
#[must_use]
pub fn chunk(document: &Map<String, Value>, budget: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for (key, value) in document {
        let mut item = Map::new();
        item.insert(key.clone(), value.clone());
        let serialized = Value::Object(item).to_string();

        // The +1 accounts for the newline appended after each entry.
        if !current.is_empty() && current.len() + serialized.len() + 1 > budget {
            chunks.push(std::mem::take(&mut current));
        }

        current.push_str(&serialized);
        current.push('\n');
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(entries: &[(&str, Value)]) -> Map<String, Value> {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        map
    }

    fn reassemble(chunks: &[String]) -> Vec<(String, Value)> {
        let mut entries = Vec::new();
        for chunk in chunks {
            for line in chunk.lines() {
                let parsed: Map<String, Value> = serde_json::from_str(line).unwrap();
                for (key, value) in parsed {
                    entries.push((key, value));
                }
            }
        }
        entries
    }

    #[test]
    fn empty_document_yields_no_chunks() {
        assert!(chunk(&Map::new(), 100).is_empty());
    }

    #[test]
    fn small_document_fits_one_chunk() {
        let doc = catalog(&[("a", json!({"artist": "X", "title": "Y"}))]);
        let chunks = chunk(&doc, 1000);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].contains("\"artist\""));
    }

    #[test]
    fn chunks_partition_entries_exactly_once_in_order() {
        let doc = catalog(&[
            ("track1", json!({"artist": "Aretha", "title": "Respect"})),
            ("track2", json!({"artist": "Otis", "title": "Dock of the Bay"})),
            ("track3", json!({"artist": "Sam", "title": "Wonderful World"})),
            ("track4", json!({"artist": "Etta", "title": "At Last"})),
        ]);
        let chunks = chunk(&doc, 80);
        assert!(chunks.len() > 1);

        let entries = reassemble(&chunks);
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["track1", "track2", "track3", "track4"]);
    }

    #[test]
    fn chunks_stay_under_budget() {
        let doc = catalog(&[
            ("a", json!("one")),
            ("b", json!("two")),
            ("c", json!("three")),
            ("d", json!("four")),
            ("e", json!("five")),
        ]);
        let budget = 30;
        for piece in chunk(&doc, budget) {
            assert!(piece.len() <= budget, "chunk too large: {piece:?}");
        }
    }

    #[test]
    fn oversized_entry_sits_alone() {
        let long: String = "x".repeat(200);
        let doc = catalog(&[
            ("small1", json!("a")),
            ("huge", json!(long)),
            ("small2", json!("b")),
        ]);
        let chunks = chunk(&doc, 50);

        let alone: Vec<&String> = chunks.iter().filter(|c| c.len() > 50).collect();
        assert_eq!(alone.len(), 1);
        assert_eq!(alone[0].lines().count(), 1);
        assert!(alone[0].contains("huge"));

        // Nothing lost around the oversized entry.
        let keys: Vec<String> = reassemble(&chunks).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["small1", "huge", "small2"]);
    }

    #[test]
    fn no_empty_chunks() {
        let long: String = "y".repeat(100);
        let doc = catalog(&[("first", json!(long)), ("second", json!("ok"))]);
        for piece in chunk(&doc, 20) {
            assert!(!piece.is_empty());
        }
    }
}
