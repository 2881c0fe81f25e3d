//! Single-edit spelling variant generation.
//!
//! Every canonical name is expanded into the set of strings one edit away
//! from it (deletions, substitutions and insertions) and each variant is
//! inserted into the trie mapping back to the same canonical value. A typo
//! of the supported classes then hits the trie directly, with no search at
//! lookup time.

use std::collections::HashSet;

/// Alphabet used for substitution and insertion variants: ASCII lowercase,
/// every Vietnamese letter with diacritics, and the space separator.
///
/// The alphabet size directly controls the memory cost of a built trie.
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz\
    áàảãạăắằẳẵặâấầẩẫậđéèẻẽẹêếềểễệíìỉĩịóòỏõọôốồổỗộơớờởỡợúùủũụưứừửữựýỳỷỹỵ ";

/// Generate every single-edit variant of a normalized canonical name.
///
/// The result is deterministic, holds no duplicates, and never contains
/// the name itself. Deleting a space merges two adjacent words, which
/// covers the common missing-space typo; for names of three or more words
/// the fully concatenated form (all spaces removed) is generated as well.
///
/// # Example
///
/// ```rust
/// use vietaddr::variants::generate_variants;
///
/// let variants = generate_variants("hà nội");
/// assert!(variants.contains(&"hà nộc".to_string())); // substitution
/// assert!(variants.contains(&"hà ni".to_string())); // deletion
/// assert!(variants.contains(&"hàq nội".to_string())); // insertion
/// assert!(variants.contains(&"hànội".to_string())); // missing space
/// ```
pub fn generate_variants(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut variants: Vec<String> = Vec::new();

    // Deletions
    for i in 0..chars.len() {
        let mut variant = String::with_capacity(name.len());
        variant.extend(&chars[..i]);
        variant.extend(&chars[i + 1..]);
        if seen.insert(variant.clone()) {
            variants.push(variant);
        }
    }

    // Substitutions
    for i in 0..chars.len() {
        for letter in ALPHABET.chars() {
            if letter == chars[i] {
                continue;
            }
            let mut variant = String::with_capacity(name.len() + letter.len_utf8());
            variant.extend(&chars[..i]);
            variant.push(letter);
            variant.extend(&chars[i + 1..]);
            if seen.insert(variant.clone()) {
                variants.push(variant);
            }
        }
    }

    // Insertions
    for i in 0..=chars.len() {
        for letter in ALPHABET.chars() {
            let mut variant = String::with_capacity(name.len() + letter.len_utf8());
            variant.extend(&chars[..i]);
            variant.push(letter);
            variant.extend(&chars[i..]);
            if seen.insert(variant.clone()) {
                variants.push(variant);
            }
        }
    }

    // Fully concatenated form; single missing spaces are already covered
    // by the deletion pass.
    if name.contains(' ') {
        let variant: String = chars.iter().filter(|c| **c != ' ').collect();
        if seen.insert(variant.clone()) {
            variants.push(variant);
        }
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletions() {
        let variants = generate_variants("an");
        assert!(variants.contains(&"a".to_string()));
        assert!(variants.contains(&"n".to_string()));
    }

    #[test]
    fn test_substitutions_cover_diacritics() {
        let variants = generate_variants("an");
        assert!(variants.contains(&"án".to_string()));
        assert!(variants.contains(&"am".to_string()));
    }

    #[test]
    fn test_insertions() {
        let variants = generate_variants("an");
        assert!(variants.contains(&"aan".to_string()));
        assert!(variants.contains(&"anh".to_string()));
        assert!(variants.contains(&"ban".to_string()));
    }

    #[test]
    fn test_space_handling() {
        let variants = generate_variants("hà nội");
        // deleting the space merges the words
        assert!(variants.contains(&"hànội".to_string()));
        // inserting a space splits a word
        assert!(variants.contains(&"h à nội".to_string()));
    }

    #[test]
    fn test_concatenated_form_for_long_names() {
        let variants = generate_variants("bà rịa vũng tàu");
        assert!(variants.contains(&"bàrịavũngtàu".to_string()));
    }

    #[test]
    fn test_no_duplicates_and_no_identity() {
        let variants = generate_variants("phú mỹ");
        let unique: HashSet<&String> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
        assert!(!variants.contains(&"phú mỹ".to_string()));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate_variants("long an"), generate_variants("long an"));
    }
}
