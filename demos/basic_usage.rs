//! Basic usage example for atlas-core
//!
//! This example demonstrates how to:
//! - Load the bundled sample catalog and HDI table
//! - Page through the directory
//! - Combine search with region and time-of-day filters
//! - Read facets and statistics

use atlas_core::{AtlasConfig, Directory, QueryOutcome, Result};

fn print_page(outcome: &QueryOutcome<'_>) {
    match outcome {
        QueryOutcome::Normal(page) => {
            println!(
                "Page {}/{}: {} countries",
                page.current_page,
                page.total_pages,
                page.countries.len()
            );
            for listed in &page.countries {
                let c = listed.country;
                println!("  {} {} ({}, {}) local time {}", c.flag, c.name, c.capital, c.region, c.current_time);
            }
        }
        other => {
            if let Some(notice) = other.notice() {
                println!("{}: {}", notice.title, notice.message);
            }
        }
    }
}

fn main() -> Result<()> {
    println!("=== atlas-core Basic Usage Example ===\n");

    println!("Loading sample directory...");
    let directory = Directory::load(&AtlasConfig::bundled_sample())?;
    println!("✓ Directory loaded\n");

    // Example 1: First page
    println!("--- Example 1: First page ---");
    print_page(&directory.answer(&[("page", "1")]));
    println!();

    // Example 2: Free-text search (name, region or capital)
    println!("--- Example 2: Search for 'land' ---");
    print_page(&directory.answer(&[("q", "land")]));
    println!();

    // Example 3: Region plus time of day
    println!("--- Example 3: Europe, morning ---");
    print_page(&directory.answer(&[("region", "Europe"), ("timerange", "morning")]));
    println!();

    // Example 4: HDI data on a single country
    println!("--- Example 4: HDI for Japan ---");
    if let Some(japan) = directory.find_country("Japan") {
        println!(
            "  rank {} value {:.3} ({}), life expectancy {:.1}, GNI {}",
            japan.hdi.rank,
            japan.hdi.value,
            japan.hdi.category,
            japan.hdi.life_expectancy,
            japan.hdi.gni_per_capita
        );
    }
    println!();

    // Example 5: Facets and statistics
    println!("--- Example 5: Facets and stats ---");
    println!("  Regions: {}", directory.regions().join(", "));
    println!("  Timezone options: {}", directory.timezones().len());
    let stats = directory.stats();
    println!(
        "  {} countries, {} with HDI data, {} HDI rows",
        stats.countries, stats.with_hdi, stats.hdi_rows
    );

    Ok(())
}
