use hashbrown::{HashMap, HashSet};
use smol_str::SmolStr;

use super::distance::distance;
use super::edits::edits;
use super::frequency::{most_frequent, FrequencyTable};
use crate::alphabet::Alphabet;
use crate::speller::suggestion::Correction;
use crate::tokenizer::case_handling::Locale;
use crate::types::Frequency;

/// Corrector for a single language: one locale, one alphabet and one
/// frequency table, none of which change after construction.
#[derive(Debug)]
pub struct LanguageSpeller {
    code: SmolStr,
    locale: Locale,
    alphabet: Alphabet,
    table: FrequencyTable,
}

impl LanguageSpeller {
    pub fn new<I, S>(code: &str, alphabet: Alphabet, words: I) -> LanguageSpeller
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let locale = Locale::from_code(code);
        let table = FrequencyTable::from_words(words, &locale);

        LanguageSpeller {
            code: SmolStr::new(code),
            locale,
            alphabet,
            table,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn is_correct(&self, word: &str) -> bool {
        self.table.contains(&self.locale.lower_case(word))
    }

    /// Most frequent known word within two edits of `word`.
    ///
    /// A known word is returned with distance 0. Words one edit away are
    /// preferred over words two edits away regardless of frequency; the second
    /// round only runs when the first finds nothing.
    pub fn correct(&self, word: &str) -> Option<Correction> {
        let word = self.locale.lower_case(word);

        if self.table.contains(&word) {
            return Some(Correction::new(word, 0, self.code.clone()));
        }

        let first = edits(&word, &self.alphabet);
        let mut hits: HashMap<SmolStr, Frequency> = HashMap::new();
        self.table.collect_known(&first, &mut hits);

        if hits.is_empty() {
            let candidates: HashSet<&str> = first.iter().map(String::as_str).collect();
            log::trace!(
                "{}: no single edit of {:?} known, trying {} candidates",
                self.code,
                word,
                candidates.len()
            );

            for candidate in candidates {
                self.table
                    .collect_known(edits(candidate, &self.alphabet), &mut hits);
            }
        }

        let (best, _) = most_frequent(&hits)?;
        let d = distance(&word, best);

        Some(Correction::new(best.clone(), d, self.code.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english(words: &[&str]) -> LanguageSpeller {
        LanguageSpeller::new("en_US.UTF-8", Alphabet::range('a'..='z'), words)
    }

    #[test]
    fn known_word_is_exact() {
        let speller = english(&["dog", "cat"]);

        let c = speller.correct("Dog").unwrap();
        assert_eq!(c.value(), "dog");
        assert_eq!(c.distance(), 0);
        assert!(c.is_exact());
        assert!(speller.is_correct("DOG"));
        assert!(!speller.is_correct("dgo"));
    }

    #[test]
    fn single_edit_ties_break_lexicographically() {
        let speller = english(&["all", "wall", "ball"]);

        let c = speller.correct("wll").unwrap();
        assert_eq!(c.value(), "all");
        assert_eq!(c.distance(), 1);
        assert_eq!(c.language(), "en_US.UTF-8");
    }

    #[test]
    fn single_edit_prefers_frequency() {
        let speller = english(&["all", "wall", "wall", "ball", "ball", "ball"]);

        // "ball" is the most frequent word but two edits away.
        let c = speller.correct("wll").unwrap();
        assert_eq!(c.value(), "wall");
        assert_eq!(c.distance(), 1);
    }

    #[test]
    fn transposition_is_one_edit() {
        let speller = english(&["spelling"]);

        let c = speller.correct("speliln").unwrap();
        assert_eq!(c.value(), "spelling");
        assert_eq!(c.distance(), 2);

        let c = speller.correct("spelilng").unwrap();
        assert_eq!(c.distance(), 1);
    }

    #[test]
    fn second_order_edits() {
        let speller = english(&["ball", "dog"]);

        let c = speller.correct("wll").unwrap();
        assert_eq!(c.value(), "ball");
        assert_eq!(c.distance(), 2);
    }

    #[test]
    fn nothing_within_two_edits() {
        let speller = english(&["dog"]);
        assert_eq!(speller.correct("elephant"), None);
        assert_eq!(speller.correct("bда"), None);
    }

    #[test]
    fn empty_dictionary() {
        let speller = english(&[]);
        assert_eq!(speller.correct("dog"), None);
        assert_eq!(speller.correct(""), None);
    }

    #[test]
    fn empty_input_reaches_short_words() {
        let speller = english(&["a", "an"]);

        let c = speller.correct("").unwrap();
        assert_eq!(c.value(), "a");
        assert_eq!(c.distance(), 1);
    }

    #[test]
    fn cyrillic() {
        let speller = LanguageSpeller::new("ru_RU.UTF-8", Alphabet::range('а'..='я'), ["да", "нет"]);

        let c = speller.correct("bда").unwrap();
        assert_eq!(c.value(), "да");
        assert_eq!(c.distance(), 1);

        let c = speller.correct("НЕТ").unwrap();
        assert!(c.is_exact());
    }
}
