//! Multi-pass address resolution.
//!
//! An [`AddressResolver`] holds one prebuilt trie per administrative
//! level and runs three sequential matcher passes (province, then
//! district, then ward) over the comma-delimited segments of a
//! normalized address. Provinces are the least ambiguous names and are
//! resolved first, shrinking the search space for the two harder, more
//! locally-ambiguous passes. Words consumed by one pass are removed
//! before the next; whatever survives all three becomes the remnant.

use crate::error::Result;
use crate::matcher::ComponentMatcher;
use crate::normalizer::normalize;
use crate::trie::Trie;
use crate::types::CanonicalEntry;

/// Structured result of resolving one address.
///
/// Any component with no hit stays empty; absence of a match is a normal
/// outcome, never an error. `remnant` carries the normalized text that no
/// pass consumed, for callers that want the street-level leftovers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressResult {
    /// Canonical province name, or empty
    pub province: String,
    /// Canonical district name, or empty
    pub district: String,
    /// Canonical ward name, or empty
    pub ward: String,
    /// Normalized words never consumed by any pass, in original segment
    /// order; segments joined with ", "
    pub remnant: String,
}

impl AddressResult {
    /// Whether no administrative component was resolved at all.
    pub fn is_unresolved(&self) -> bool {
        self.province.is_empty() && self.district.is_empty() && self.ward.is_empty()
    }
}

/// Resolver holding the three prebuilt component tries.
///
/// Construction is the only write phase; every method on a built resolver
/// takes `&self`, so one instance can serve concurrent callers without
/// locking.
#[derive(Debug)]
pub struct AddressResolver {
    province: Trie,
    district: Trie,
    ward: Trie,
    matcher: ComponentMatcher,
}

impl AddressResolver {
    /// Create a resolver from prebuilt tries.
    pub fn new(province: Trie, district: Trie, ward: Trie) -> Self {
        Self {
            province,
            district,
            ward,
            matcher: ComponentMatcher::new(),
        }
    }

    /// Build the three tries from canonical entries and create a
    /// resolver.
    ///
    /// # Errors
    ///
    /// Propagates trie construction errors; a resolver is never handed
    /// out over a partially-built trie.
    pub fn from_entries(
        provinces: &[CanonicalEntry],
        districts: &[CanonicalEntry],
        wards: &[CanonicalEntry],
    ) -> Result<Self> {
        Ok(Self::new(
            Trie::from_entries(provinces)?,
            Trie::from_entries(districts)?,
            Trie::from_entries(wards)?,
        ))
    }

    /// Replace the matcher, e.g. to tune the trailing-drop bound.
    pub fn with_matcher(mut self, matcher: ComponentMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Resolve one raw address into its administrative components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vietaddr::{AddressResolver, CanonicalEntry};
    ///
    /// let resolver = AddressResolver::from_entries(
    ///     &[CanonicalEntry::new("Hồ Chí Minh")],
    ///     &[CanonicalEntry::new("7")],
    ///     &[CanonicalEntry::new("Phú Mỹ")],
    /// )?;
    ///
    /// let result = resolver.process("123 Đường ABC, Phường Phú Mỹ, Quận 7, TP. Hồ Chí Minh");
    /// assert_eq!(result.province, "Hồ Chí Minh");
    /// assert_eq!(result.district, "7");
    /// assert_eq!(result.ward, "Phú Mỹ");
    /// # Ok::<(), vietaddr::Error>(())
    /// ```
    pub fn process(&self, raw: &str) -> AddressResult {
        let normalized = normalize(raw);

        // Segments keep their left-to-right order of appearance; passes
        // visit them right to left since Vietnamese addresses place the
        // province last.
        let mut segments: Vec<Vec<String>> = normalized
            .split(',')
            .map(|slice| slice.split_whitespace().map(str::to_string).collect())
            .filter(|words: &Vec<String>| !words.is_empty())
            .collect();

        let province = self.pass(&self.province, &mut segments);
        let district = self.pass(&self.district, &mut segments);
        let ward = self.pass(&self.ward, &mut segments);

        let remnant = segments
            .iter()
            .filter(|words| !words.is_empty())
            .map(|words| words.join(" "))
            .collect::<Vec<_>>()
            .join(", ");

        AddressResult {
            province: province.unwrap_or_default(),
            district: district.unwrap_or_default(),
            ward: ward.unwrap_or_default(),
            remnant,
        }
    }

    /// Resolve multiple addresses sequentially.
    pub fn process_batch(&self, addresses: &[&str]) -> Vec<AddressResult> {
        addresses.iter().map(|address| self.process(address)).collect()
    }

    /// Resolve multiple addresses in parallel.
    ///
    /// The tries are immutable after construction, so the whole resolver
    /// is shared read-only across the worker threads.
    #[cfg(feature = "parallel")]
    pub fn process_batch_parallel(&self, addresses: &[&str]) -> Vec<AddressResult> {
        use rayon::prelude::*;

        addresses
            .par_iter()
            .map(|address| self.process(address))
            .collect()
    }

    /// One matcher pass: scan segments right to left, take the first hit,
    /// and replace that segment with its unconsumed words. At most one
    /// component of each level per address, so the scan stops at the
    /// first hit.
    fn pass(&self, trie: &Trie, segments: &mut [Vec<String>]) -> Option<String> {
        for segment in segments.iter_mut().rev() {
            if let Some(hit) = self.matcher.match_segment(trie, segment) {
                let mut rest = Vec::with_capacity(segment.len() - hit.len());
                rest.extend_from_slice(&segment[..hit.start]);
                rest.extend_from_slice(&segment[hit.end..]);
                *segment = rest;
                return Some(hit.value);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> AddressResolver {
        AddressResolver::from_entries(
            &[
                CanonicalEntry::new("Hồ Chí Minh"),
                CanonicalEntry::new("Hà Nội"),
                CanonicalEntry::new("Long An"),
            ],
            &[
                CanonicalEntry::new("7"),
                CanonicalEntry::new("Hà Đông"),
                CanonicalEntry::new("Mỹ Tho"),
            ],
            &[CanonicalEntry::new("Phú Mỹ"), CanonicalEntry::new("3")],
        )
        .unwrap()
    }

    #[test]
    fn test_full_address() {
        let result = fixture().process("123 Đường ABC, Phường Phú Mỹ, Quận 7, TP. Hồ Chí Minh");

        assert_eq!(result.province, "Hồ Chí Minh");
        assert_eq!(result.district, "7");
        assert_eq!(result.ward, "Phú Mỹ");
        assert!(!result.is_unresolved());
    }

    #[test]
    fn test_typo_tolerated_per_component() {
        // one substitution in the province, one insertion in the district
        let result = fixture().process("Hà Đôngg, Hà Nộc");

        assert_eq!(result.province, "Hà Nội");
        assert_eq!(result.district, "Hà Đông");
        assert_eq!(result.ward, "");
    }

    #[test]
    fn test_empty_input() {
        let result = fixture().process("");

        assert_eq!(result, AddressResult::default());
        assert!(result.is_unresolved());
    }

    #[test]
    fn test_no_match_anywhere() {
        let result = fixture().process("số 10 đường trần hưng đạo");

        assert!(result.is_unresolved());
        assert_eq!(result.remnant, "số 10 đường trần hưng đạo");
    }

    #[test]
    fn test_remnant_keeps_unconsumed_words() {
        let result = fixture().process("284 Ng Văn Giáo, Mỹ Tho, Long An");

        assert_eq!(result.province, "Long An");
        assert_eq!(result.district, "Mỹ Tho");
        assert_eq!(result.ward, "");
        assert_eq!(result.remnant, "284 ng văn giáo");
    }

    #[test]
    fn test_component_in_shared_segment() {
        // ward and district share one segment; each pass consumes its own
        // span and forwards the rest
        let result = fixture().process("Phú Mỹ Quận 7, TP Hồ Chí Minh");

        assert_eq!(result.province, "Hồ Chí Minh");
        assert_eq!(result.district, "7");
        assert_eq!(result.ward, "Phú Mỹ");
        assert_eq!(result.remnant, "quận, tp");
    }

    #[test]
    fn test_province_only() {
        let result = fixture().process("Hà Nội");

        assert_eq!(result.province, "Hà Nội");
        assert_eq!(result.district, "");
        assert_eq!(result.ward, "");
        assert_eq!(result.remnant, "");
    }

    #[test]
    fn test_batch_matches_sequential() {
        let resolver = fixture();
        let addresses = ["Quận 7, TP. Hồ Chí Minh", "", "Hà Nội"];
        let batch = resolver.process_batch(&addresses);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0], resolver.process(addresses[0]));
        assert_eq!(batch[1], resolver.process(addresses[1]));
        assert_eq!(batch[2], resolver.process(addresses[2]));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_batch_matches_sequential() {
        let resolver = fixture();
        let addresses = ["Quận 7, TP. Hồ Chí Minh", "Phường Phú Mỹ, Hà Nội", ""];

        assert_eq!(
            resolver.process_batch_parallel(&addresses),
            resolver.process_batch(&addresses)
        );
    }
}
