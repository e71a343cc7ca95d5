use std::collections::hash_map::{self, HashMap};

use wordfreq_logging::freq_debug;

use crate::normalize::normalize;
use crate::token::tokenize;

/// Occurrence count per lowercase token.
///
/// Only built through [`count`] or [`word_frequency`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyMap {
    counts: HashMap<String, u64>,
}

impl FrequencyMap {
    /// Count for `word`, or 0 when it never occurred.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were counted.
    pub fn total_tokens(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyMap {
    type Item = (&'a String, &'a u64);
    type IntoIter = hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tally tokens; the first occurrence of a token starts its counter at 1.
///
/// Tokens are lowercased before counting and empty fragments are skipped, so
/// every key is a non-empty lowercase word.
pub fn count<I>(tokens: I) -> FrequencyMap
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        counts
            .entry(token.to_lowercase())
            .and_modify(|n| *n += 1)
            .or_insert(1);
    }
    FrequencyMap { counts }
}

/// Normalize, tokenize and count `text` in one go.
pub fn word_frequency(text: &str) -> FrequencyMap {
    let cleaned = normalize(text);
    let map = count(tokenize(&cleaned));
    freq_debug!(
        "counted {} tokens ({} distinct) from {} input bytes",
        map.total_tokens(),
        map.len(),
        text.len()
    );
    map
}
