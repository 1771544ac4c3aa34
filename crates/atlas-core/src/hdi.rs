// crates/atlas-core/src/hdi.rs

//! # HDI Table Parser
//!
//! Turns the statistical annex of the Human Development Report (exported as a
//! loosely quoted CSV) into a map of country name → [`DevelopmentMetrics`].
//!
//! The file is stateful: category header lines such as
//! `VERY HIGH HUMAN DEVELOPMENT` apply to every ranked row until the next
//! header. Parsing is a fold over lines with a `(category, table)`
//! accumulator.
//!
//! The parser never fails. Rows that do not look like ranked country rows are
//! skipped, rows with an unparseable HDI value are skipped with a warning, and
//! a missing file yields an empty table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Country name → metrics. Ordered so that two parses of the same text are
/// identical, including iteration order.
pub type HdiTable = BTreeMap<String, DevelopmentMetrics>;

/// Header substrings, most specific first.
const CATEGORY_HEADERS: [&str; 4] = [
    "VERY HIGH HUMAN DEVELOPMENT",
    "HIGH HUMAN DEVELOPMENT",
    "MEDIUM HUMAN DEVELOPMENT",
    "LOW HUMAN DEVELOPMENT",
];

// Column layout: rank, name, value, _, life expectancy, _, school years, _, GNI
const COL_RANK: usize = 0;
const COL_NAME: usize = 1;
const COL_VALUE: usize = 2;
const COL_LIFE_EXPECTANCY: usize = 4;
const COL_SCHOOL_YEARS: usize = 6;
const COL_GNI: usize = 8;

/// One ranked row of the HDI table.
///
/// `Default` is the "no data" sentinel: rank 0, zero values, empty strings.
/// Every [`crate::Country`] carries one of these, matched or not.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentMetrics {
    #[serde(rename = "hdi_rank")]
    pub rank: u32,
    #[serde(rename = "hdi_value")]
    pub value: f64,
    /// Label of the last category header seen before this row.
    pub category: String,
    pub life_expectancy: f64,
    pub school_years: f64,
    /// Kept verbatim (e.g. `"45,678"`), never parsed.
    pub gni_per_capita: String,
}

impl DevelopmentMetrics {
    /// `true` when this value came from the HDI table rather than the sentinel.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.rank > 0
    }

    pub fn tier(&self) -> Option<DevelopmentTier> {
        DevelopmentTier::from_label(&self.category)
    }
}

/// The four human-development tiers, ordered from lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DevelopmentTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl DevelopmentTier {
    /// Maps a category label onto its tier. `VERY HIGH` is tested before
    /// `HIGH` since the latter is a substring of the former.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.contains(CATEGORY_HEADERS[0]) {
            Some(Self::VeryHigh)
        } else if label.contains(CATEGORY_HEADERS[1]) {
            Some(Self::High)
        } else if label.contains(CATEGORY_HEADERS[2]) {
            Some(Self::Medium)
        } else if label.contains(CATEGORY_HEADERS[3]) {
            Some(Self::Low)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => CATEGORY_HEADERS[0],
            Self::High => CATEGORY_HEADERS[1],
            Self::Medium => CATEGORY_HEADERS[2],
            Self::Low => CATEGORY_HEADERS[3],
        }
    }
}

/// Parses the HDI text. Never fails; see the module docs for the rules.
pub fn parse_hdi(text: &str) -> HdiTable {
    let state = text.lines().fold(ParseState::default(), ParseState::feed);
    info!(
        rows = state.table.len(),
        "parsed HDI table"
    );
    state.table
}

/// Reads and parses the HDI file at `path`.
///
/// A missing or unreadable file is logged and produces an empty table: HDI
/// enrichment is best-effort and must never block a load.
pub fn load_hdi(path: impl AsRef<Path>) -> HdiTable {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => parse_hdi(&String::from_utf8_lossy(&bytes)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load HDI data; continuing without it");
            HdiTable::new()
        }
    }
}

/// Accumulator of the line fold.
#[derive(Debug, Default)]
struct ParseState {
    category: String,
    table: HdiTable,
}

impl ParseState {
    fn feed(mut self, line: &str) -> Self {
        if line.trim().is_empty() {
            return self;
        }

        let fields = split_fields(line);
        let first = fields.first().copied().unwrap_or_default();

        if is_category_header(first) {
            debug!(category = first, "found HDI category");
            self.category = first.to_string();
            return self;
        }

        if let Some((name, metrics)) = parse_row(&fields, &self.category) {
            debug!(country = %name, rank = metrics.rank, value = metrics.value, "parsed HDI row");
            // Last occurrence wins.
            self.table.insert(name, metrics);
        }
        self
    }
}

fn is_category_header(field: &str) -> bool {
    CATEGORY_HEADERS.iter().any(|h| field.contains(h))
}

/// Builds a row from split fields, or `None` if the line is not a country row.
fn parse_row(fields: &[&str], category: &str) -> Option<(String, DevelopmentMetrics)> {
    let field = |i: usize| fields.get(i).copied().unwrap_or_default();

    // Section separators, column headers and notes have no integer rank.
    let rank = field(COL_RANK).parse::<u32>().ok().filter(|r| *r > 0)?;

    let name = field(COL_NAME);
    if name.is_empty() {
        return None;
    }

    let value = match field(COL_VALUE).parse::<f64>() {
        Ok(v) => v,
        Err(e) => {
            warn!(country = name, error = %e, "could not parse HDI value; skipping row");
            return None;
        }
    };

    let metrics = DevelopmentMetrics {
        rank,
        value,
        category: category.to_string(),
        life_expectancy: field(COL_LIFE_EXPECTANCY).parse().unwrap_or(0.0),
        school_years: field(COL_SCHOOL_YEARS).parse().unwrap_or(0.0),
        gni_per_capita: field(COL_GNI).to_string(),
    };
    Some((name.to_string(), metrics))
}

/// Splits on commas outside double quotes, trimming quotes and whitespace
/// from each field.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(clean_field(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(clean_field(&line[start..]));
    fields
}

#[inline]
fn clean_field(field: &str) -> &str {
    field.trim_matches(|c: char| c == '"' || c.is_whitespace())
}
