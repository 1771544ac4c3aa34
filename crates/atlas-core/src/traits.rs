// crates/atlas-core/src/traits.rs
use crate::error::Result;
use crate::raw::CountryRaw;
use crate::text::contains_lowered;

/// Free-text matching for records that expose a few searchable fields.
///
/// Implementors list their fields via [`TextMatch::search_fields`] and get a
/// case-insensitive substring test for free.
///
/// # Examples
/// ```rust
/// use atlas_core::traits::TextMatch;
///
/// struct Place(&'static str);
/// impl TextMatch for Place {
///     fn search_fields(&self) -> Vec<&str> { vec![self.0] }
/// }
///
/// assert!(Place("Reykjavík").matches_query("REYK"));
/// assert!(Place("Reykjavík").matches_query(""));
/// ```
pub trait TextMatch {
    /// The fields a free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// `true` if any field contains `needle_lower`, which the caller has
    /// already lowercased.
    #[inline]
    fn matches_lowered(&self, needle_lower: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| contains_lowered(field, needle_lower))
    }

    /// Case-insensitive substring match. An empty query matches everything.
    #[inline]
    fn matches_query(&self, query: &str) -> bool {
        self.matches_lowered(&query.to_lowercase())
    }
}

/// Where raw catalog records come from.
///
/// A failing source is fatal to the load: there is no partial-catalog
/// fallback.
pub trait CatalogSource {
    /// Fetches and decodes every raw record.
    fn fetch(&self) -> Result<Vec<CountryRaw>>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}

impl CatalogSource for Vec<CountryRaw> {
    fn fetch(&self) -> Result<Vec<CountryRaw>> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} records)", self.len())
    }
}
