// crates/atlas-core/src/model/domain.rs
use crate::hdi::DevelopmentMetrics;
use serde::{Deserialize, Serialize};

/// A normalized country, joined with its HDI metrics.
///
/// Serialized names follow the public catalog API (`callingCode`,
/// `drivingSide`, ...). The primary timezone and the derived local time are
/// display helpers and are not serialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Common name; also the join key against the HDI table.
    pub name: String,
    pub capital: String,
    pub region: String,
    pub flag: String,
    /// All timezones in catalog order, as listed by the source.
    pub timezones: Vec<String>,
    /// First entry of `timezones`, or `UTC` when the source lists none.
    #[serde(skip)]
    pub primary_timezone: String,
    /// Local wall-clock time (`HH:MM`) of the primary timezone at load time.
    #[serde(skip)]
    pub current_time: String,
    /// Thousands-separated, e.g. `"67,391,582"`.
    pub population: String,
    pub area: f64,
    pub languages: Vec<String>,
    pub currency: String,
    pub calling_code: String,
    pub driving_side: String,
    pub borders: Vec<String>,
    pub hdi: DevelopmentMetrics,
}

impl Country {
    /// Hour part of [`Country::current_time`], if it parses.
    pub fn current_hour(&self) -> Option<u32> {
        self.current_time.split(':').next()?.trim().parse().ok()
    }

    #[inline]
    pub fn has_timezone(&self, tz: &str) -> bool {
        self.timezones.iter().any(|t| t == tz)
    }
}

/// One directory query, as parsed from request parameters.
///
/// Empty strings mean "criterion not supplied".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCriteria {
    /// Free-text search (`q`).
    pub query: String,
    pub region: String,
    pub timezone: String,
    /// Time-of-day bucket name (`timerange`).
    pub time_range: String,
    /// 1-based page number, already clamped to at least 1.
    pub page: usize,
}

impl QueryCriteria {
    /// Timezone and time-range filters are the ones whose empty result is
    /// reported as an outcome of its own.
    pub fn has_time_filters(&self) -> bool {
        !self.timezone.is_empty() || !self.time_range.is_empty()
    }
}
