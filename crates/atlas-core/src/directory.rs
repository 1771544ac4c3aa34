// crates/atlas-core/src/directory.rs

//! # Directory Service
//!
//! Owns the normalized collection, the HDI table it was joined with, and the
//! favorites store. [`Directory::answer`] turns raw request parameters into a
//! [`QueryOutcome`] by running the query engine in a fixed order and stopping
//! at the first terminal state:
//!
//! 1. unknown parameter name → [`QueryOutcome::InvalidParameter`]
//! 2. timezone / time-range filter leaves nothing → [`QueryOutcome::EmptyByFilter`]
//! 3. non-empty search leaves nothing → [`QueryOutcome::EmptyBySearch`]
//! 4. page beyond the last page → [`QueryOutcome::InvalidPage`]
//! 5. otherwise [`QueryOutcome::Normal`]

use crate::common::DirectoryStats;
use crate::error::Result;
use crate::favorites::{FavoriteAction, FavoritesStore};
use crate::hdi::HdiTable;
use crate::model::{Country, QueryCriteria};
use crate::notice::Notice;
use crate::search::{self, Filtered, PAGE_SIZE};
use crate::text::fold_key;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Request parameter names a directory query understands.
pub const VALID_PARAMS: [&str; 5] = ["q", "region", "timezone", "timerange", "page"];

/// A country in a result page, annotated with its favorite status.
///
/// The flag is derived per response from the favorites snapshot; it is never
/// stored on the [`Country`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedCountry<'a> {
    #[serde(flatten)]
    pub country: &'a Country,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

/// A rendered page of results together with everything a view needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPage<'a> {
    pub countries: Vec<ListedCountry<'a>>,
    /// The criteria as requested, echoed back.
    pub criteria: QueryCriteria,
    /// Region facet over the full collection.
    pub regions: Vec<String>,
    /// Timezone facet over the full collection.
    pub timezones: Vec<String>,
    /// The requested page (not clamped).
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
}

/// Terminal state of a directory query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QueryOutcome<'a> {
    Normal(DirectoryPage<'a>),
    EmptyBySearch { query: String },
    EmptyByFilter,
    InvalidPage { max_page: usize },
    InvalidParameter { name: String },
}

impl QueryOutcome<'_> {
    pub fn is_normal(&self) -> bool {
        matches!(self, QueryOutcome::Normal(_))
    }

    /// Message and suggestions for every outcome but `Normal`.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            QueryOutcome::Normal(_) => None,
            QueryOutcome::EmptyBySearch { query } => Some(Notice::empty_by_search(query)),
            QueryOutcome::EmptyByFilter => Some(Notice::empty_by_filter()),
            QueryOutcome::InvalidPage { max_page } => Some(Notice::invalid_page(*max_page)),
            QueryOutcome::InvalidParameter { name } => Some(Notice::invalid_parameter(name)),
        }
    }
}

/// A catalog country that found no HDI row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinMiss {
    pub country: String,
    /// HDI row name equal to `country` after accent and case folding.
    pub suggestion: Option<String>,
}

/// Parses request parameters into criteria.
///
/// Returns the first unknown parameter name as the error. For repeated names
/// the first value wins; a missing, unparseable or non-positive `page` is 1.
pub fn parse_criteria<K, V>(params: &[(K, V)]) -> std::result::Result<QueryCriteria, String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if let Some((name, _)) = params
        .iter()
        .find(|(name, _)| !VALID_PARAMS.contains(&name.as_ref()))
    {
        return Err(name.as_ref().to_string());
    }

    let get = |key: &str| {
        params
            .iter()
            .find(|(name, _)| name.as_ref() == key)
            .map(|(_, value)| value.as_ref().to_string())
            .unwrap_or_default()
    };

    Ok(QueryCriteria {
        query: get("q"),
        region: get("region"),
        timezone: get("timezone"),
        time_range: get("timerange"),
        page: parse_page(&get("page")),
    })
}

/// Leniently parses a 1-based page number. Non-numeric input and values
/// below 1 give 1; a digit string too large for `usize` saturates, so it
/// still lands beyond the last page.
fn parse_page(raw: &str) -> usize {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 1;
    }
    digits.parse::<usize>().unwrap_or(usize::MAX).max(1)
}

/// The loaded country directory.
#[derive(Debug)]
pub struct Directory {
    countries: Vec<Country>,
    hdi: HdiTable,
    favorites: FavoritesStore,
}

impl Directory {
    pub fn new(countries: Vec<Country>, hdi: HdiTable, favorites: FavoritesStore) -> Self {
        Self {
            countries,
            hdi,
            favorites,
        }
    }

    /// All countries in catalog order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn hdi(&self) -> &HdiTable {
        &self.hdi
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn find_country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Answers a directory query given raw `(name, value)` request pairs.
    pub fn answer<K, V>(&self, params: &[(K, V)]) -> QueryOutcome<'_>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match parse_criteria(params) {
            Ok(criteria) => self.query(criteria),
            Err(name) => {
                debug!(param = %name, "rejecting unknown query parameter");
                QueryOutcome::InvalidParameter { name }
            }
        }
    }

    /// Runs already-validated criteria through filter → search → paginate.
    pub fn query(&self, criteria: QueryCriteria) -> QueryOutcome<'_> {
        let filtered = match search::filter(&self.countries, &criteria) {
            Filtered::Matches(records) => records,
            Filtered::EmptyByFilter => return QueryOutcome::EmptyByFilter,
        };

        let found = search::search(filtered, &criteria.query);
        if !criteria.query.is_empty() && found.is_empty() {
            return QueryOutcome::EmptyBySearch {
                query: criteria.query,
            };
        }

        let total_pages = search::total_pages(found.len());
        if criteria.page > total_pages && total_pages > 0 {
            return QueryOutcome::InvalidPage {
                max_page: total_pages,
            };
        }

        let requested = i64::try_from(criteria.page).unwrap_or(i64::MAX);
        let (page, _) = search::paginate(&found, requested);
        let favorites = self.favorites.snapshot();
        let countries = page
            .iter()
            .map(|&country| ListedCountry {
                country,
                is_favorite: favorites.contains(&country.name),
            })
            .collect();

        QueryOutcome::Normal(DirectoryPage {
            countries,
            regions: self.regions(),
            timezones: self.timezones(),
            current_page: criteria.page,
            total_pages,
            items_per_page: PAGE_SIZE,
            criteria,
        })
    }

    /// Region facet over the full collection.
    pub fn regions(&self) -> Vec<String> {
        search::region_facet(&self.countries)
    }

    /// Timezone facet over the full collection.
    pub fn timezones(&self) -> Vec<String> {
        search::timezone_facet(&self.countries)
    }

    /// Favorite countries in catalog order.
    pub fn favorite_countries(&self) -> Vec<ListedCountry<'_>> {
        let favorites = self.favorites.snapshot();
        self.countries
            .iter()
            .filter(|c| favorites.contains(&c.name))
            .map(|country| ListedCountry {
                country,
                is_favorite: true,
            })
            .collect()
    }

    /// Adds or removes a favorite. Names are not checked against the catalog.
    pub fn apply_favorite(&self, name: &str, action: FavoriteAction) -> Result<bool> {
        self.favorites.apply(name, action)
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            countries: self.countries.len(),
            with_hdi: self.countries.iter().filter(|c| c.hdi.is_present()).count(),
            hdi_rows: self.hdi.len(),
            regions: self.regions().len(),
            favorites: self.favorites.snapshot().len(),
        }
    }

    /// Countries without HDI data, each with a folded-name candidate from the
    /// HDI table when one exists. The join itself stays exact.
    pub fn hdi_join_report(&self) -> Vec<JoinMiss> {
        let folded: BTreeMap<String, &str> = self
            .hdi
            .keys()
            .map(|name| (fold_key(name), name.as_str()))
            .collect();

        self.countries
            .iter()
            .filter(|c| !c.hdi.is_present())
            .map(|c| JoinMiss {
                country: c.name.clone(),
                suggestion: folded.get(&fold_key(&c.name)).map(|s| s.to_string()),
            })
            .collect()
    }
}
