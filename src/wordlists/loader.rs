//! Word list loading utilities
//!
//! Turns raw lines into [`Word`]s. Invalid entries are skipped and duplicates
//! keep their first position, so the order of the source is preserved.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file with one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_eliminator::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to words
///
/// # Examples
/// ```
/// use wordle_eliminator::wordlists::loader::words_from_slice;
/// use wordle_eliminator::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    words.push(word);
                }
            }
            Err(e) => warn!(entry = trimmed, error = %e, "skipping word list entry"),
        }
    }

    words
}
