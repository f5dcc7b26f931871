//! Fuzzy string similarity for product search.

/// Similarity between two strings in [0, 1], case-insensitive.
///
/// The cascade is evaluated strictly in order: equal strings score 1.0
/// (two empty strings land here), a prefix relation either way scores
/// 0.9, containment either way scores 0.8, and anything else falls back
/// to normalized edit distance, clamped at 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }
    if a.starts_with(&b) || b.starts_with(&a) {
        return 0.9;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.8;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let max_len = a_chars.len().max(b_chars.len());
    let distance = levenshtein(&a_chars, &b_chars);

    (1.0 - distance as f64 / max_len as f64).max(0.0)
}

/// Levenshtein distance over chars, two-row rolling buffer.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
