use std::collections::HashMap;

use pretty_assertions::assert_eq;
use wordfreq_core::{count, normalize, tokenize, word_frequency, FrequencyMap};

const SHIPPED_TEXT: &str = "Four, One two two three Three three four four  four";

fn as_hash_map(map: &FrequencyMap) -> HashMap<String, u64> {
    map.iter().map(|(k, v)| (k.clone(), *v)).collect()
}

#[test]
fn shipped_text_counts() {
    wordfreq_logging::initialize_for_tests();
    let map = word_frequency(SHIPPED_TEXT);

    let expected: HashMap<String, u64> = [("four", 4), ("one", 1), ("two", 2), ("three", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    assert_eq!(as_hash_map(&map), expected);
}

#[test]
fn total_matches_token_count() {
    let inputs = [
        "",
        "   ",
        SHIPPED_TEXT,
        "one,,two",
        "a-b_c d\te\nf!!g",
        "Hello, hello; HELLO... world_1 world_1",
    ];
    for input in inputs {
        let tokens = tokenize(&normalize(input)).count() as u64;
        assert_eq!(word_frequency(input).total_tokens(), tokens, "input: {input:?}");
    }
}

#[test]
fn counting_ignores_case() {
    assert_eq!(word_frequency("Four").get("four"), 1);
    assert_eq!(
        word_frequency("Four").get("four"),
        word_frequency("four").get("four")
    );
    assert!(!word_frequency("Four").contains("Four"));
}

#[test]
fn punctuation_runs_split_words() {
    let map = word_frequency("one,,two");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("one"), 1);
    assert_eq!(map.get("two"), 1);
}

#[test]
fn empty_input_gives_empty_map() {
    let map = word_frequency("");
    assert!(map.is_empty());
    assert_eq!(map.total_tokens(), 0);
    assert_eq!(map, FrequencyMap::default());
}

#[test]
fn keys_are_non_empty_and_lowercase() {
    let map = word_frequency("  MiXeD case, ,, Words_2 and MORE  ");
    for (word, n) in &map {
        assert!(!word.is_empty());
        assert_eq!(word, &word.to_lowercase());
        assert!(*n >= 1);
    }
}

#[test]
fn count_starts_each_token_at_one() {
    let map = count(["x", "y", "x", "x"]);
    assert_eq!(map.get("x"), 3);
    assert_eq!(map.get("y"), 1);
    assert_eq!(map.get("z"), 0);

    assert!(count(Vec::<String>::new()).is_empty());
}

#[test]
fn count_skips_empty_fragments_and_folds_case() {
    let map = count(["", "Four", "four", "FOUR", "", "Two"]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("four"), 3);
    assert_eq!(map.get("two"), 1);
    assert_eq!(map.total_tokens(), 4);
    for (word, _) in &map {
        assert!(!word.is_empty());
        assert_eq!(word, &word.to_lowercase());
    }
    assert!(!map.contains(""));
    assert!(!map.contains("Four"));
}

#[test]
fn normalization_is_idempotent() {
    for input in [SHIPPED_TEXT, "", "one,,two", "  --x--  y\t", "already normal"] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input: {input:?}");
    }
}
