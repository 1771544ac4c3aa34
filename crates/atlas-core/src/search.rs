// crates/atlas-core/src/search.rs

//! # Query Engine
//!
//! Filtering, free-text search, pagination and facets over the in-memory
//! collection. Every operation borrows the collection and returns new
//! sequences of references; nothing here mutates a [`Country`].
//!
//! The directory applies them in a fixed order: filter → search → paginate.
//! Facets are computed independently over the full collection.

use crate::model::{Country, QueryCriteria};
use crate::traits::TextMatch;
use std::collections::BTreeSet;

/// Number of countries per result page.
pub const PAGE_SIZE: usize = 12;

/// Standard UTC offsets always offered by the timezone facet.
pub const STANDARD_TIMEZONES: [&str; 37] = [
    "UTC-12:00", "UTC-11:00", "UTC-10:00", "UTC-09:30", "UTC-09:00",
    "UTC-08:00", "UTC-07:00", "UTC-06:00", "UTC-05:00", "UTC-04:00",
    "UTC-03:30", "UTC-03:00", "UTC-02:00", "UTC-01:00", "UTC",
    "UTC+01:00", "UTC+02:00", "UTC+03:00", "UTC+03:30", "UTC+04:00",
    "UTC+04:30", "UTC+05:00", "UTC+05:30", "UTC+05:45", "UTC+06:00",
    "UTC+06:30", "UTC+07:00", "UTC+08:00", "UTC+08:45", "UTC+09:00",
    "UTC+09:30", "UTC+10:00", "UTC+10:30", "UTC+11:00", "UTC+12:00",
    "UTC+13:00", "UTC+14:00",
];

/// Time-of-day buckets used by the `timerange` filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// 00:00–05:59
    Night,
    /// 06:00–11:59
    Morning,
    /// 12:00–17:59
    Afternoon,
    /// 18:00–23:59
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [Self::Night, Self::Morning, Self::Afternoon, Self::Evening];

    /// Parses a bucket name. Unknown names yield `None`, which the filter
    /// treats as "no constraint".
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "night" => Some(Self::Night),
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            "evening" => Some(Self::Evening),
            _ => None,
        }
    }

    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            0..=5 => Some(Self::Night),
            6..=11 => Some(Self::Morning),
            12..=17 => Some(Self::Afternoon),
            18..=23 => Some(Self::Evening),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

/// Result of [`filter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Filtered<'a> {
    /// Surviving records, in collection order. May be empty when only a
    /// region filter was supplied.
    Matches(Vec<&'a Country>),
    /// Nothing survived and a timezone or time-range filter was involved.
    EmptyByFilter,
}

impl<'a> Filtered<'a> {
    /// The surviving records; empty for [`Filtered::EmptyByFilter`].
    pub fn into_records(self) -> Vec<&'a Country> {
        match self {
            Filtered::Matches(records) => records,
            Filtered::EmptyByFilter => Vec::new(),
        }
    }
}

impl TextMatch for Country {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.region.as_str(), self.capital.as_str()]
    }
}

/// `true` if `country` satisfies every supplied filter of `criteria`.
pub fn matches_filters(country: &Country, criteria: &QueryCriteria) -> bool {
    (criteria.region.is_empty() || country.region == criteria.region)
        && (criteria.timezone.is_empty() || country.has_timezone(&criteria.timezone))
        && in_time_range(country, &criteria.time_range)
}

fn in_time_range(country: &Country, time_range: &str) -> bool {
    if time_range.is_empty() {
        return true;
    }
    let Some(bucket) = TimeOfDay::parse(time_range) else {
        return true;
    };
    country.current_hour().and_then(TimeOfDay::from_hour) == Some(bucket)
}

/// Applies the region, timezone and time-range filters.
pub fn filter<'a, I>(countries: I, criteria: &QueryCriteria) -> Filtered<'a>
where
    I: IntoIterator<Item = &'a Country>,
{
    let records: Vec<&Country> = countries
        .into_iter()
        .filter(|c| matches_filters(c, criteria))
        .collect();

    if records.is_empty() && criteria.has_time_filters() {
        Filtered::EmptyByFilter
    } else {
        Filtered::Matches(records)
    }
}

/// Case-insensitive substring search; an empty query returns `records`
/// unchanged.
pub fn search<'a, T: TextMatch>(records: Vec<&'a T>, query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return records;
    }
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.matches_lowered(&needle))
        .collect()
}

/// `ceil(len / PAGE_SIZE)`.
#[inline]
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Returns the requested 1-based page and the total page count.
///
/// Out-of-range pages are clamped into `[1, total_pages]`; an empty input
/// gives an empty page and zero pages.
pub fn paginate<T>(items: &[T], page: i64) -> (&[T], usize) {
    let total = total_pages(items.len());
    if total == 0 {
        return (&items[..0], 0);
    }

    let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX).min(total);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(items.len());
    (&items[start..end], total)
}

/// Sorted, de-duplicated regions of `countries`.
pub fn region_facet<'a, I>(countries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Country>,
{
    countries
        .into_iter()
        .map(|c| c.region.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// [`STANDARD_TIMEZONES`] merged with every trimmed, non-empty timezone of
/// `countries`.
///
/// Sorted as plain strings rather than by offset: every `UTC+` zone sorts
/// before every `UTC-` zone, and `UTC-01:00` sorts before `UTC-12:00`.
pub fn timezone_facet<'a, I>(countries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Country>,
{
    let mut zones: BTreeSet<String> = STANDARD_TIMEZONES.iter().map(|tz| tz.to_string()).collect();
    zones.extend(
        countries
            .into_iter()
            .flat_map(|c| c.timezones.iter())
            .map(|tz| tz.trim())
            .filter(|tz| !tz.is_empty())
            .map(str::to_string),
    );
    zones.into_iter().collect()
}
