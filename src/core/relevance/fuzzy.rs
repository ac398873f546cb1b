//! Fuzzy string similarity on a 0-100 scale.
//!
//! `partial_ratio` slides the shorter string over the longer one,
//! anchoring a window at every matching block, and keeps the best
//! window score. A window scores `2·M / T` where M counts characters
//! on the matching blocks of a Myers character diff and T is the
//! combined length. Strings are compared as Unicode scalar values.

use similar::{capture_diff_slices, get_diff_ratio, Algorithm, DiffOp};

/// Similarity of two whole strings (0-100)
#[cfg(test)]
fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    to_score(char_ratio(&a, &b))
}

/// Best similarity of the shorter string against any equally long
/// window of the longer one (0-100)
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.len() <= b.len() {
        (&a, &b)
    } else {
        (&b, &a)
    };

    let ops = capture_diff_slices(Algorithm::Myers, shorter, longer);

    // Window anchors: one per matching block, plus the tail of `longer`
    let anchors = ops
        .iter()
        .filter_map(|op| match *op {
            DiffOp::Equal {
                old_index,
                new_index,
                ..
            } => Some(new_index.saturating_sub(old_index)),
            _ => None,
        })
        .chain(std::iter::once(longer.len() - shorter.len()));

    let mut best = 0.0f32;
    for start in anchors {
        let end = (start + shorter.len()).min(longer.len());
        let score = char_ratio(shorter, &longer[start..end]);
        if score > 0.995 {
            return 100;
        }
        best = best.max(score);
    }

    to_score(best)
}

fn char_ratio(a: &[char], b: &[char]) -> f32 {
    let ops = capture_diff_slices(Algorithm::Myers, a, b);
    get_diff_ratio(&ops, a.len(), b.len())
}

fn to_score(ratio: f32) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
