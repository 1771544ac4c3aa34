//! Error handling example for atlas-core
//!
//! This example demonstrates load failures, degraded loads and the
//! non-normal query outcomes.

use atlas_core::{
    AtlasConfig, AtlasError, CatalogLocation, Directory, FavoriteAction, FileCatalog, Result,
};
use chrono::{TimeZone, Utc};

fn main() -> Result<()> {
    println!("=== atlas-core Error Handling Example ===\n");

    // Example 1: A missing catalog is fatal
    println!("--- Example 1: Missing catalog file ---");
    let broken = AtlasConfig::bundled_sample()
        .with_catalog(CatalogLocation::File("does/not/exist.json".into()));
    match Directory::load(&broken) {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(AtlasError::NotFound(msg)) => println!("  ✗ {msg}"),
        Err(e) => println!("  ✗ other error: {e}"),
    }
    println!();

    // Example 2: A missing HDI file only degrades the data
    println!("--- Example 2: Missing HDI file ---");
    let config = AtlasConfig::bundled_sample().with_hdi_path("does/not/exist.csv");
    let source = FileCatalog::new(AtlasConfig::default_data_dir().join("sample_catalog.json"));
    let noon = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single();
    let directory = Directory::load_from(&source, &config, noon.unwrap_or_else(Utc::now))?;
    let stats = directory.stats();
    println!("  ✓ loaded {} countries, {} with HDI data", stats.countries, stats.with_hdi);
    println!();

    // Example 3: Query outcomes are values, not errors
    println!("--- Example 3: Non-normal outcomes ---");
    let queries: [&[(&str, &str)]; 4] = [
        &[("foo", "bar")],
        &[("q", "atlantis")],
        &[("timezone", "UTC+14:00")],
        &[("page", "99")],
    ];
    for params in queries {
        let outcome = directory.answer(params);
        if let Some(notice) = outcome.notice() {
            println!("  {params:?} → {}", notice.title);
            println!("    {}", notice.message);
        }
    }
    println!();

    // Example 4: Unknown favorite actions are rejected
    println!("--- Example 4: Invalid favorite action ---");
    match "toggle".parse::<FavoriteAction>() {
        Ok(action) => println!("  parsed {action:?}"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}
