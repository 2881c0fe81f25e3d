//! Sliding-window longest match of word sequences against a trie.
//!
//! The matcher anchors at the rightmost unconsumed word of a segment and
//! expands the window leftward, accepting the longest phrase bound in the
//! trie. When no right-anchored window matches it retries with trailing
//! words dropped, since street-level free text often trails the true
//! component.

use crate::trie::Trie;

/// Default bound on how many rightmost words may be dropped before the
/// matcher gives up. The default exhausts the segment, trying the
/// fallback once per word position; tune it down with
/// [`ComponentMatcher::with_max_trailing_drops`] to keep matches anchored
/// near the segment end.
pub const DEFAULT_MAX_TRAILING_DROPS: usize = usize::MAX;

/// A successful match of a word window against a trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentMatch {
    /// Canonical value bound to the matched phrase
    pub value: String,
    /// Index of the first consumed word
    pub start: usize,
    /// One past the index of the last consumed word
    pub end: usize,
}

impl SegmentMatch {
    /// Number of words consumed by the match.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the match consumed no words (never produced by the
    /// matcher; present for completeness).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Longest-match window search over a segment's words.
#[derive(Debug, Clone)]
pub struct ComponentMatcher {
    max_trailing_drops: usize,
}

impl ComponentMatcher {
    /// Create a matcher with the default trailing-drop bound.
    pub fn new() -> Self {
        Self {
            max_trailing_drops: DEFAULT_MAX_TRAILING_DROPS,
        }
    }

    /// Set how many rightmost words may be dropped when no right-anchored
    /// window matches.
    pub fn with_max_trailing_drops(mut self, drops: usize) -> Self {
        self.max_trailing_drops = drops;
        self
    }

    /// Find the longest word window bound in `trie`.
    ///
    /// Words must already be normalized; candidate phrases are the words
    /// of each window joined with single spaces. Windows are searched
    /// longest first, anchored at the segment end; ties are broken by
    /// maximum length, never by position. On a miss the rightmost word is
    /// dropped and the search repeats, up to the configured bound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vietaddr::{CanonicalEntry, ComponentMatcher, Trie};
    ///
    /// let trie = Trie::from_entries(&[CanonicalEntry::new("Hà Nội")])?;
    /// let words: Vec<String> = ["cầu", "giấy", "hà", "nội"]
    ///     .iter()
    ///     .map(|w| w.to_string())
    ///     .collect();
    ///
    /// let hit = ComponentMatcher::new().match_segment(&trie, &words).unwrap();
    /// assert_eq!(hit.value, "Hà Nội");
    /// assert_eq!((hit.start, hit.end), (2, 4));
    /// # Ok::<(), vietaddr::Error>(())
    /// ```
    pub fn match_segment(&self, trie: &Trie, words: &[String]) -> Option<SegmentMatch> {
        let n = words.len();
        if n == 0 {
            return None;
        }

        for dropped in 0..=self.max_trailing_drops.min(n - 1) {
            let end = n - dropped;
            // start = 0 is the full window; increasing start shrinks it,
            // so the longest candidate is always tried first.
            for start in 0..end {
                let candidate = words[start..end].join(" ");
                if let Some(value) = trie.get(&candidate) {
                    return Some(SegmentMatch {
                        value: value.to_string(),
                        start,
                        end,
                    });
                }
            }
        }

        None
    }
}

impl Default for ComponentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CanonicalEntry;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn fixture() -> Trie {
        Trie::from_entries(&[CanonicalEntry::new("Hà Nội"), CanonicalEntry::new("Phú Mỹ")])
            .unwrap()
    }

    #[test]
    fn test_right_anchored_longest_match() {
        let trie = fixture();
        let hit = ComponentMatcher::new()
            .match_segment(&trie, &words("đường abc hà nội"))
            .unwrap();

        assert_eq!(hit.value, "Hà Nội");
        assert_eq!((hit.start, hit.end), (2, 4));
        assert_eq!(hit.len(), 2);
    }

    #[test]
    fn test_longest_window_wins() {
        // "an" is a key and so is "long an"; the two-word window must win.
        let trie =
            Trie::from_entries(&[CanonicalEntry::new("Long An"), CanonicalEntry::new("An")])
                .unwrap();
        let hit = ComponentMatcher::new()
            .match_segment(&trie, &words("thị trấn long an"))
            .unwrap();

        assert_eq!(hit.value, "Long An");
        assert_eq!(hit.len(), 2);
    }

    #[test]
    fn test_exact_span_length() {
        let trie = fixture();
        let segment = words("x y phú mỹ");
        let hit = ComponentMatcher::new().match_segment(&trie, &segment).unwrap();
        assert_eq!((hit.start, hit.end), (2, 4));
    }

    #[test]
    fn test_trailing_word_dropped() {
        let trie = fixture();
        // free text trails the component; no right-anchored window matches
        let hit = ComponentMatcher::new()
            .match_segment(&trie, &words("hà nội việtnamxyz"))
            .unwrap();

        assert_eq!(hit.value, "Hà Nội");
        assert_eq!((hit.start, hit.end), (0, 2));
    }

    #[test]
    fn test_trailing_drop_bound_respected() {
        let trie = fixture();
        let matcher = ComponentMatcher::new().with_max_trailing_drops(0);
        assert!(matcher.match_segment(&trie, &words("hà nội việtnamxyz")).is_none());
    }

    #[test]
    fn test_no_match() {
        let trie = fixture();
        assert!(ComponentMatcher::new()
            .match_segment(&trie, &words("số 1 đường lê lợi"))
            .is_none());
    }

    #[test]
    fn test_empty_segment() {
        let trie = fixture();
        assert!(ComponentMatcher::new().match_segment(&trie, &[]).is_none());
    }
}
