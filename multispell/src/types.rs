/// Number of times a word occurs in a dictionary source.
pub type Frequency = u64;

/// Edit distance between two words.
pub type Distance = usize;
