// crates/atlas-core/src/model/convert.rs
use crate::hdi::{DevelopmentMetrics, HdiTable};
use crate::model::domain::Country;
use crate::raw::CountryRaw;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Primary timezone used when a record lists none.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// **Standard Converter:** Raw -> Country, joined with HDI by exact name.
///
/// `now` is the reference instant for the derived local times.
pub fn from_raw(raw_countries: Vec<CountryRaw>, hdi: &HdiTable, now: DateTime<Utc>) -> Vec<Country> {
    let countries: Vec<Country> = raw_countries
        .into_iter()
        .map(|raw| normalize(raw, hdi, now))
        .collect();

    let matched = countries.iter().filter(|c| c.hdi.is_present()).count();
    info!(
        countries = countries.len(),
        with_hdi = matched,
        "normalized catalog"
    );
    countries
}

/// Normalizes a single record. Never fails; malformed parts were already
/// defaulted while decoding.
pub fn normalize(raw: CountryRaw, hdi: &HdiTable, now: DateTime<Utc>) -> Country {
    let CountryRaw {
        name,
        capital,
        region,
        flag,
        timezones,
        population,
        area,
        languages,
        currencies,
        idd,
        car,
        borders,
    } = raw;
    let name = name.common;

    let primary_timezone = timezones
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
    let current_time = local_time(&primary_timezone, now);

    let hdi = match hdi.get(&name) {
        Some(metrics) => metrics.clone(),
        None => {
            debug!(country = %name, "no HDI match");
            DevelopmentMetrics::default()
        }
    };

    Country {
        capital: capital.into_iter().next().unwrap_or_default(),
        region,
        flag,
        timezones,
        primary_timezone,
        current_time,
        population: format_population(population),
        area: if area.is_finite() && area > 0.0 { area } else { 0.0 },
        // Sorted by language code.
        languages: languages.into_values().collect(),
        currency: pick_currency(&currencies),
        calling_code: calling_code(&idd.root, &idd.suffixes),
        driving_side: title_case(&car.side),
        borders,
        hdi,
        name,
    }
}

/// Wall-clock `HH:MM` for a `UTC±HH:MM` style timezone at instant `now`.
///
/// A bare `UTC` (or an empty string) is UTC itself. Anything that does not
/// parse as an offset, or whose offset is out of range for the clock, is
/// treated as UTC as well.
pub fn local_time(timezone: &str, now: DateTime<Utc>) -> String {
    let offset = timezone.strip_prefix("UTC").unwrap_or(timezone);
    let local = parse_offset_minutes(offset)
        .and_then(Duration::try_minutes)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or_else(|| {
            debug!(timezone, "unusable timezone offset; using UTC");
            now
        });
    local.format("%H:%M").to_string()
}

/// Parses `±HH[:MM]` into signed minutes. The minutes carry the sign of the
/// hours, so `-03:30` is `-210`. An empty string is offset zero; values that
/// overflow `i64` minutes are `None`.
pub fn parse_offset_minutes(offset: &str) -> Option<i64> {
    let offset = offset.trim();
    if offset.is_empty() {
        return Some(0);
    }

    let (sign, rest) = if let Some(rest) = offset.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = offset.strip_prefix('-') {
        (-1, rest)
    } else {
        (1, offset)
    };

    let mut parts = rest.splitn(2, ':');
    let hours: i64 = parts.next()?.trim().parse().ok()?;
    let minutes: i64 = parts
        .next()
        .and_then(|m| m.trim().parse().ok())
        .unwrap_or(0);
    hours
        .checked_mul(60)?
        .checked_add(minutes)?
        .checked_mul(sign)
}

/// `1234567` → `"1,234,567"`; the sign is kept outside the grouping.
pub fn format_population(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Name of the first currency (by code) that carries a string `name`.
fn pick_currency(currencies: &BTreeMap<String, Value>) -> String {
    currencies
        .values()
        .find_map(|c| c.get("name")?.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// Dialing root plus the first suffix, e.g. `+3` + `3` = `+33`.
pub fn calling_code(root: &str, suffixes: &[String]) -> String {
    if root.is_empty() {
        return String::new();
    }
    match suffixes.first() {
        Some(suffix) => format!("{root}{suffix}"),
        None => root.to_string(),
    }
}

/// Upper-cases the first letter of every word (`"right"` → `"Right"`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}
