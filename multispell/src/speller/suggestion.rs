//! Correction proposed by a single language.
use crate::types::Distance;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Best correction one language found for a word
pub struct Correction {
    /// the corrected word-form, lowercased
    pub value: SmolStr,
    /// edit distance from the lowercased input
    pub distance: Distance,
    /// code of the language the word-form comes from
    pub language: SmolStr,
}

impl Correction {
    /// creates a correction
    pub fn new(value: SmolStr, distance: Distance, language: SmolStr) -> Correction {
        Correction {
            value,
            distance,
            language,
        }
    }

    /// gets the corrected word-form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// gets the edit distance of the correction
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// gets the language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// returns whether the input was already a known word
    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}
