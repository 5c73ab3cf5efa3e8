//! Word frequencies and selection of the most frequent candidate.
use hashbrown::HashMap;
use smol_str::SmolStr;

use crate::tokenizer::case_handling::Locale;
use crate::types::Frequency;

/// Occurrence counts of the words of one language, keyed by their lowercased
/// form.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: HashMap<SmolStr, Frequency>,
}

impl FrequencyTable {
    pub fn from_words<I, S>(words: I, locale: &Locale) -> FrequencyTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = HashMap::new();
        for word in words {
            *counts.entry(locale.lower_case(word.as_ref())).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }

    #[inline(always)]
    pub fn frequency(&self, word: &str) -> Option<Frequency> {
        self.counts.get(word).copied()
    }

    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Adds every candidate found in the table to `hits`.
    pub(crate) fn collect_known<I, S>(&self, candidates: I, hits: &mut HashMap<SmolStr, Frequency>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for candidate in candidates {
            if let Some((word, &count)) = self.counts.get_key_value(candidate.as_ref()) {
                hits.insert(word.clone(), count);
            }
        }
    }
}

/// The most frequent hit; among equally frequent hits the lexicographically
/// smallest word.
pub(crate) fn most_frequent(hits: &HashMap<SmolStr, Frequency>) -> Option<(&SmolStr, Frequency)> {
    hits.iter()
        .map(|(word, &count)| (word, count))
        .max_by(|(wa, fa), (wb, fb)| fa.cmp(fb).then_with(|| wb.cmp(wa)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_counted_after_lowercasing() {
        let table =
            FrequencyTable::from_words(["Dog", "dog", "DOG", "cat"], &Locale::from_code("en"));

        assert_eq!(table.len(), 2);
        assert_eq!(table.frequency("dog"), Some(3));
        assert_eq!(table.frequency("cat"), Some(1));
        assert_eq!(table.frequency("Dog"), None);
        assert!(!table.contains("bird"));
    }

    #[test]
    fn collects_only_known_candidates() {
        let table = FrequencyTable::from_words(["all", "all", "wall"], &Locale::default());
        let mut hits = HashMap::new();

        table.collect_known(["all", "xll", "wall", "all"], &mut hits);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits.get("all"), Some(&2));
        assert_eq!(hits.get("wall"), Some(&1));
    }

    #[test]
    fn highest_frequency_then_smallest_word() {
        let mut hits = HashMap::new();
        assert_eq!(most_frequent(&hits), None);

        hits.insert(SmolStr::new("wall"), 1);
        hits.insert(SmolStr::new("all"), 1);
        hits.insert(SmolStr::new("ball"), 1);
        assert_eq!(most_frequent(&hits).map(|(w, _)| w.as_str()), Some("all"));

        hits.insert(SmolStr::new("wall"), 5);
        assert_eq!(most_frequent(&hits), Some((&SmolStr::new("wall"), 5)));
    }
}
