//! Insertion-stable token counting.

use std::collections::HashMap;

use crate::types::{HashtagCount, KeywordCount};

/// Counts tokens while remembering the order each was first seen.
///
/// [`FrequencyTable::most_common`] sorts by count descending and breaks
/// ties by first appearance.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`.
    pub fn add(&mut self, token: &str) {
        self.add_n(token, 1);
    }

    /// Record `n` occurrences of `token` at once.
    ///
    /// Same result as calling [`FrequencyTable::add`] `n` times, so `n == 0`
    /// leaves the table untouched.
    pub fn add_n(&mut self, token: &str, n: u64) {
        if n == 0 {
            return;
        }
        if let Some(&slot) = self.index.get(token) {
            self.entries[slot].1 += n;
        } else {
            self.index.insert(token.to_string(), self.entries.len());
            self.entries.push((token.to_string(), n));
        }
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    #[must_use]
    pub fn count(&self, token: &str) -> u64 {
        self.index.get(token).map_or(0, |&slot| self.entries[slot].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent tokens.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        // `sort_by` is stable, which preserves first-seen order among ties.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(token, count)| (token.clone(), *count))
            .collect()
    }

    #[must_use]
    pub fn top_keywords(&self, n: usize) -> Vec<KeywordCount> {
        self.most_common(n)
            .into_iter()
            .map(|(keyword, count)| KeywordCount { keyword, count })
            .collect()
    }

    #[must_use]
    pub fn top_hashtags(&self, n: usize) -> Vec<HashtagCount> {
        self.most_common(n)
            .into_iter()
            .map(|(hashtag, count)| HashtagCount { hashtag, count })
            .collect()
    }
}

/// Merge per-platform keyword tables into one table, in the given order.
///
/// Each `{keyword, count}` contributes `count` occurrences, so the merged
/// count of a token is the sum of its per-platform counts.
#[must_use]
pub fn merge_keywords<'a, I>(tables: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a [KeywordCount]>,
{
    let mut merged = FrequencyTable::new();
    for table in tables {
        for entry in table {
            merged.add_n(&entry.keyword, entry.count);
        }
    }
    merged
}

/// Hashtag counterpart of [`merge_keywords`].
#[must_use]
pub fn merge_hashtags<'a, I>(tables: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a [HashtagCount]>,
{
    let mut merged = FrequencyTable::new();
    for table in tables {
        for entry in table {
            merged.add_n(&entry.hashtag, entry.count);
        }
    }
    merged
}
