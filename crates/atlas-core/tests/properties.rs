use atlas_core::model::convert::{format_population, parse_offset_minutes};
use atlas_core::search::{filter, paginate, search, total_pages};
use atlas_core::{Country, QueryCriteria, PAGE_SIZE, STANDARD_TIMEZONES};
use proptest::prelude::*;

const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

fn arb_country() -> impl Strategy<Value = Country> {
    (
        "[A-Za-z][A-Za-z ]{0,11}",
        prop::sample::select(REGIONS.to_vec()),
        prop::sample::select(STANDARD_TIMEZONES.to_vec()),
        0u32..24,
        0u32..60,
    )
        .prop_map(|(name, region, tz, hour, minute)| Country {
            capital: format!("{name} City"),
            name,
            region: region.to_string(),
            timezones: vec![tz.to_string()],
            primary_timezone: tz.to_string(),
            current_time: format!("{hour:02}:{minute:02}"),
            ..Default::default()
        })
}

fn arb_criteria() -> impl Strategy<Value = QueryCriteria> {
    (
        prop::option::of(prop::sample::select(REGIONS.to_vec())),
        prop::option::of(prop::sample::select(STANDARD_TIMEZONES.to_vec())),
        prop::option::of(prop::sample::select(vec!["night", "morning", "afternoon", "evening"])),
    )
        .prop_map(|(region, timezone, range)| QueryCriteria {
            region: region.unwrap_or_default().to_string(),
            timezone: timezone.unwrap_or_default().to_string(),
            time_range: range.unwrap_or_default().to_string(),
            page: 1,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn pages_reassemble_the_input(items in prop::collection::vec(any::<u16>(), 0..100)) {
        let total = total_pages(items.len());
        let mut rebuilt = Vec::new();
        for page in 1..=total {
            let (slice, reported) = paginate(&items, page as i64);
            prop_assert_eq!(reported, total);
            prop_assert!(!slice.is_empty() && slice.len() <= PAGE_SIZE);
            rebuilt.extend_from_slice(slice);
        }
        prop_assert_eq!(rebuilt, items);
    }

    #[test]
    fn out_of_range_pages_clamp(items in prop::collection::vec(any::<u8>(), 1..60), page in -5i64..20) {
        let total = total_pages(items.len());
        let (slice, _) = paginate(&items, page);
        let clamped = page.clamp(1, total as i64);
        prop_assert_eq!(slice, paginate(&items, clamped).0);
    }

    #[test]
    fn filtering_is_idempotent(
        countries in prop::collection::vec(arb_country(), 0..40),
        criteria in arb_criteria(),
    ) {
        let once = filter(&countries, &criteria).into_records();
        let twice = filter(once.iter().copied(), &criteria).into_records();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn search_ignores_case(
        countries in prop::collection::vec(arb_country(), 0..40),
        query in "[a-z]{1,3}",
    ) {
        let records: Vec<&Country> = countries.iter().collect();
        let lower = search(records.clone(), &query);
        let upper = search(records, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn offsets_round_trip(negative in any::<bool>(), hours in 0i64..15, minutes in 0i64..60) {
        let sign = if negative { '-' } else { '+' };
        let text = format!("{sign}{hours:02}:{minutes:02}");
        let expected = (hours * 60 + minutes) * if negative { -1 } else { 1 };
        prop_assert_eq!(parse_offset_minutes(&text), Some(expected));
    }

    #[test]
    fn population_grouping_keeps_digits(n in any::<i64>()) {
        let formatted = format_population(n);
        prop_assert_eq!(formatted.replace(',', ""), n.to_string());
    }
}
