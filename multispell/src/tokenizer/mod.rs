use unic_segment::{WordBoundIndices, Words};

pub mod case_handling;

/// Characters separating words in a dictionary source.
pub const DELIMITERS: &str = "1234567890|-+/*=!?%.,;:~^@$&#_()[]{}<>«»'\" \t\r\n";

#[inline(always)]
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(ch)
}

/// Non-empty runs of non-delimiter characters, in source order.
pub struct DictionaryWords<'a> {
    inner: std::str::Split<'a, fn(char) -> bool>,
}

impl<'a> DictionaryWords<'a> {
    pub fn new(source: &'a str) -> DictionaryWords<'a> {
        DictionaryWords {
            inner: source.split(is_delimiter as fn(char) -> bool),
        }
    }
}

impl<'a> Iterator for DictionaryWords<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.by_ref().find(|s| !s.is_empty())
    }
}

pub trait Tokenize {
    fn word_bound_indices(&self) -> WordBoundIndices;
    fn words(&self) -> Words;
    fn dictionary_words(&self) -> DictionaryWords;
}

impl Tokenize for str {
    fn word_bound_indices(&self) -> WordBoundIndices {
        WordBoundIndices::new(self)
    }

    fn words(&self) -> Words {
        Words::new(self, |s| s.chars().any(|ch| ch.is_alphanumeric()))
    }

    fn dictionary_words(&self) -> DictionaryWords {
        DictionaryWords::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic() {
        let msg = "this is an ordinary sentence! \"This was quoted,\", an emoji: (😄), and\t a tab was there and a new line.";
        msg.word_bound_indices().for_each(|t| println!("{:?}", t));
        assert_eq!(
            msg.words().collect::<Vec<_>>(),
            vec![
                "this", "is", "an", "ordinary", "sentence", "This", "was", "quoted", "an",
                "emoji", "and", "a", "tab", "was", "there", "and", "a", "new", "line"
            ]
        );
    }

    #[test]
    fn dictionary_words_split_on_delimiters() {
        let msg = "The dog's bowl, (2 bowls) -- «да» and\tball_room\r\nwall42all";
        assert_eq!(
            msg.dictionary_words().collect::<Vec<_>>(),
            vec!["The", "dog", "s", "bowl", "bowls", "да", "and", "ball", "room", "wall", "all"]
        );
    }

    #[test]
    fn dictionary_words_keep_duplicates() {
        assert_eq!(
            "all all\nall".dictionary_words().collect::<Vec<_>>(),
            vec!["all", "all", "all"]
        );
    }

    #[test]
    fn dictionary_words_of_nothing() {
        assert_eq!("".dictionary_words().count(), 0);
        assert_eq!(" ,.-- 123 ".dictionary_words().count(), 0);
    }
}
