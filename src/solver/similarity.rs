//! Gestalt (Ratcliff/Obershelp) string similarity
//!
//! The ratio is `2 * M / T`, where `T` is the combined length of both strings and
//! `M` the number of characters covered by matching blocks. Blocks are found by
//! taking the longest common substring, then recursing on the pieces to its
//! left and right.

/// Similarity ratio between two byte strings, in `0.0..=1.0`
///
/// # Examples
/// ```
/// use wordle_eliminator::solver::similarity::ratio;
///
/// assert_eq!(ratio(b"check", b"check"), 1.0);
/// assert_eq!(ratio(b"abcde", b"fghij"), 0.0);
/// assert_eq!(ratio(b"salet", b"later"), 0.4);
/// ```
#[must_use]
pub fn ratio(a: &[u8], b: &[u8]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_characters(a, b) as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`
#[must_use]
pub fn matching_characters(a: &[u8], b: &[u8]) -> usize {
    let (start_a, start_b, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_characters(&a[..start_a], &b[..start_b])
        + matching_characters(&a[start_a + len..], &b[start_b + len..])
}

/// Longest common substring as `(start in a, start in b, length)`
///
/// Among equally long blocks the one starting earliest in `a` wins, then the
/// one starting earliest in `b`.
fn longest_common_block(a: &[u8], b: &[u8]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // current[j + 1] holds the length of the match ending at a[i], b[j]
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb { previous[j] + 1 } else { 0 };

            let len = current[j + 1];
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    best
}
