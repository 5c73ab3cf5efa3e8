//! Candidate generation.
//!
//! For a word of `n` characters and an alphabet of `k` symbols, [`edits`]
//! produces `n` deletions, `n - 1` adjacent transpositions, `k * n`
//! substitutions and `k * (n + 1)` insertions. Nothing is deduplicated and no
//! candidate is checked against a dictionary here.
//!
//! Applying [`edits`] to each of its own results reaches every word within two
//! edits, at a cost of O(n² k²) candidates. That second pass dominates the cost
//! of a correction for long words or large alphabets.
use crate::alphabet::Alphabet;

/// Number of candidates [`edits`] produces for a word of `len` characters.
#[inline(always)]
pub fn edit_count(len: usize, alphabet: &Alphabet) -> usize {
    let k = alphabet.len();
    len + len.saturating_sub(1) + k * len + k * (len + 1)
}

#[inline(always)]
fn build(parts: &[&[char]], capacity: usize) -> String {
    let mut out = String::with_capacity(capacity);
    for part in parts {
        out.extend(part.iter());
    }
    out
}

/// All strings one deletion, transposition, substitution or insertion away
/// from `word`.
pub fn edits(word: &str, alphabet: &Alphabet) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let capacity = word.len() + 4;
    let mut out = Vec::with_capacity(edit_count(n, alphabet));

    for i in 0..n {
        out.push(build(&[&chars[..i], &chars[i + 1..]], capacity));
    }

    for i in 0..n.saturating_sub(1) {
        out.push(build(
            &[&chars[..i], &[chars[i + 1], chars[i]], &chars[i + 2..]],
            capacity,
        ));
    }

    for symbol in alphabet.symbols() {
        let symbol = std::slice::from_ref(symbol);

        for i in 0..n {
            out.push(build(&[&chars[..i], symbol, &chars[i + 1..]], capacity));
        }

        for i in 0..=n {
            out.push(build(&[&chars[..i], symbol, &chars[i..]], capacity));
        }
    }

    out
}
