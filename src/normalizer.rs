//! Text normalization for Vietnamese address strings.
//!
//! Normalization is a pure, total function applied to every string before
//! it touches a trie: gazetteer entries at build time and raw addresses at
//! resolution time. Both sides therefore meet in the same reduced form.
//!
//! The steps, in order:
//!
//! 1. lowercase;
//! 2. strip leading/trailing whitespace;
//! 3. substitute letters absent from the Vietnamese alphabet in place:
//!    `j→i`, `z→s`, `w→v`, `f→ph`;
//! 4. strip leading/trailing punctuation (interior punctuation stays;
//!    commas delimit segments and must survive);
//! 5. collapse interior whitespace runs to single spaces.
//!
//! The function is idempotent: `normalize(normalize(x)) == normalize(x)`.

/// Normalize a raw text fragment.
///
/// # Example
///
/// ```rust
/// use vietaddr::normalizer::normalize;
///
/// assert_eq!(normalize("  TP. Hồ  Chí Minh.  "), "tp. hồ chí minh");
/// assert_eq!(normalize("Hồ Zhí Minh"), "hồ shí minh");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    // Character-level, not word-level: an "f" inside a word becomes "ph"
    // in place.
    let mut replaced = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match ch {
            'j' => replaced.push('i'),
            'z' => replaced.push('s'),
            'w' => replaced.push('v'),
            'f' => replaced.push_str("ph"),
            _ => replaced.push(ch),
        }
    }

    // Stripping punctuation can expose fresh whitespace at the ends, so
    // both are trimmed together to keep the function idempotent.
    let stripped = replaced.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace());

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
