/*! Multi-language spelling correction.

Every registered language owns an alphabet and a table of word frequencies
read from a dictionary source. A word is corrected by generating all strings
one edit away from it (deletion, adjacent transposition, substitution or
insertion of an alphabet symbol), then, if none of them is known, all strings
two edits away. The most frequent known candidate wins within a language; the
candidate with the smallest Damerau-Levenshtein distance wins across
languages.

# Usage examples

```no_run
use std::path::Path;

use multispell::alphabet::Alphabet;
use multispell::speller::{Corrector, CorrectorConfigurator, SpellChecker};

let checker = SpellChecker::new();
checker
    .add_language("en_US.UTF-8", Alphabet::range('a'..='z'), Path::new("en.txt"))
    .unwrap();
checker
    .add_language("ru_RU.UTF-8", Alphabet::range('а'..='я'), Path::new("ru.txt"))
    .unwrap();

println!("{}", checker.correct("speling"));
```

Dictionaries can also be listed in a [`config::SpellCheckerConfig`] file,
and loaded from somewhere other than the filesystem by giving the spell
checker another [`reader::WordListReader`].

*/

pub mod alphabet;
pub mod config;
pub mod reader;
pub mod speller;
pub mod tokenizer;
pub mod types;
pub mod vfs;
