// crates/atlas-core/src/text.rs

/// Convert a string into a folded key suitable for loose comparison.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2) Normalize to lowercase
///
/// Used for diagnostics only. Directory search and the HDI join do not fold
/// accents.
///
/// # Examples
///
/// ```rust
/// use atlas_core::text::fold_key;
///
/// assert_eq!(fold_key("Curaçao"), "curacao");
/// assert_eq!(fold_key("Türkiye"), "turkiye");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case-insensitive substring test. `needle_lower` must already be
/// lowercased; the haystack is lowercased here.
#[inline]
pub fn contains_lowered(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding() {
        assert_eq!(fold_key("São Tomé and Príncipe"), fold_key("Sao Tome and Principe"));
        assert_ne!(fold_key("Niger"), fold_key("Nigeria"));
    }

    #[test]
    fn lowered_contains() {
        assert!(contains_lowered("France", "fra"));
        assert!(contains_lowered("ÅLAND", "åland"));
        assert!(!contains_lowered("Spain", "fra"));
    }
}
