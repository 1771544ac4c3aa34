//! atlas-cli: command-line interface for atlas-core
//!
//! This binary loads the country catalog, joins it with the HDI table and
//! answers directory queries from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - First page of everything, or a filtered search
//!   $ atlas query
//!   $ atlas query q=land region=Europe
//!   $ atlas query "timezone=UTC%2B01:00&page=2" --json
//!
//! - Facets and statistics
//!   $ atlas facets
//!   $ atlas stats
//!
//! - HDI table on its own
//!   $ atlas hdi --limit 10
//!
//! - Favorites
//!   $ atlas favorites list
//!   $ atlas favorites set add "New Zealand"
//!
//! Data source
//! -----------
//!
//! By default the catalog is fetched from the REST countries endpoint and the
//! HDI CSV and favorites file are read from the working directory. Use
//! `--catalog <path|url>`, `--hdi <path>` and `--favorites <path>` to point
//! elsewhere, e.g. at the sample data bundled in `crates/atlas-core/data/`.
mod args;

use crate::args::{CliArgs, Commands, FavoritesCommand};
use anyhow::Context;
use atlas_core::hdi::load_hdi;
use atlas_core::{
    AtlasConfig, CatalogLocation, Directory, FavoriteAction, HdiTable, QueryOutcome,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::form_urlencoded;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = config_from(&args);

    match args.command {
        // The HDI listing needs no catalog.
        Commands::Hdi { limit } => print_hdi(&config, limit),
        command => {
            let directory = Directory::load(&config).with_context(|| {
                format!("failed to load the directory from {}", config.catalog)
            })?;
            run(command, &directory)?;
        }
    }

    Ok(())
}

fn run(command: Commands, directory: &Directory) -> anyhow::Result<()> {
    match command {
        Commands::Query { params, json } => {
            let pairs = parse_params(&params);
            let outcome = directory.answer(&pairs);
            if json {
                let mut value = serde_json::to_value(&outcome)?;
                if let Some(notice) = outcome.notice() {
                    value["notice"] = serde_json::to_value(notice)?;
                }
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_outcome(&outcome);
            }
        }

        Commands::Countries => {
            println!("{}", serde_json::to_string_pretty(directory.countries())?);
        }

        Commands::Facets => {
            println!("Regions:");
            for region in directory.regions() {
                println!("  {region}");
            }
            println!("Timezones:");
            for tz in directory.timezones() {
                println!("  {tz}");
            }
        }

        Commands::Stats => {
            let stats = directory.stats();
            println!("Directory statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  With HDI data: {}", stats.with_hdi);
            println!("  HDI rows: {}", stats.hdi_rows);
            println!("  Regions: {}", stats.regions);
            println!("  Favorites: {}", stats.favorites);
        }

        Commands::Favorites(FavoritesCommand::List) => {
            let favorites = directory.favorite_countries();
            if favorites.is_empty() {
                println!("No favorites yet.");
            }
            for listed in favorites {
                println!("{} {}", listed.country.flag, listed.country.name);
            }
        }

        Commands::Favorites(FavoritesCommand::Set { action, country }) => {
            let action: FavoriteAction = action.parse()?;
            let changed = directory
                .apply_favorite(&country, action)
                .context("failed to save favorites")?;
            match (action, changed) {
                (FavoriteAction::Add, true) => println!("Added {country} to favorites"),
                (FavoriteAction::Remove, true) => println!("Removed {country} from favorites"),
                (_, false) => println!("Favorites unchanged"),
            }
        }

        Commands::JoinReport => {
            let report = directory.hdi_join_report();
            println!("{} countries without HDI data:", report.len());
            for miss in report {
                match miss.suggestion {
                    Some(name) => println!("  {} (HDI table has '{name}')", miss.country),
                    None => println!("  {}", miss.country),
                }
            }
        }

        Commands::Hdi { limit } => print_hdi_rows(directory.hdi(), limit),
    }

    Ok(())
}

/// Logs go to stderr so JSON output on stdout stays clean.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_from(args: &CliArgs) -> AtlasConfig {
    let mut config = AtlasConfig::default();
    if let Some(catalog) = &args.catalog {
        config = config.with_catalog(CatalogLocation::parse(catalog));
    }
    if let Some(hdi) = &args.hdi {
        config = config.with_hdi_path(hdi);
    }
    if let Some(favorites) = &args.favorites {
        config = config.with_favorites_path(Some(favorites.clone()));
    }
    config
}

/// Each argument is a query string; `q=fra` and `q=fra&page=2` both work.
fn parse_params(raw: &[String]) -> Vec<(String, String)> {
    raw.iter()
        .flat_map(|arg| {
            form_urlencoded::parse(arg.trim_start_matches('?').as_bytes())
                .into_owned()
                .collect::<Vec<_>>()
        })
        .collect()
}

fn print_outcome(outcome: &QueryOutcome<'_>) {
    let QueryOutcome::Normal(page) = outcome else {
        if let Some(notice) = outcome.notice() {
            println!("{}", notice.title);
            println!("{}", notice.message);
            for suggestion in &notice.suggestions {
                println!("  - {suggestion}");
            }
        }
        return;
    };

    println!(
        "Page {} of {} ({} per page)",
        page.current_page, page.total_pages, page.items_per_page
    );
    for listed in &page.countries {
        let c = listed.country;
        let star = if listed.is_favorite { "*" } else { " " };
        let hdi = if c.hdi.is_present() {
            format!("HDI #{} {:.3}", c.hdi.rank, c.hdi.value)
        } else {
            "HDI n/a".to_string()
        };
        println!(
            "{star} {} {:<24} {:<10} {:<20} {} {}",
            c.flag, c.name, c.region, c.capital, c.current_time, hdi
        );
    }
}

fn print_hdi(config: &AtlasConfig, limit: usize) {
    let table = load_hdi(&config.hdi_path);
    println!("{} HDI rows in {}", table.len(), config.hdi_path.display());
    print_hdi_rows(&table, limit);
}

fn print_hdi_rows(table: &HdiTable, limit: usize) {
    let mut rows: Vec<_> = table.iter().collect();
    rows.sort_by_key(|(_, metrics)| metrics.rank);
    for (name, m) in rows.into_iter().take(limit) {
        println!(
            "{:>4} {:<32} {:.3}  life {:>5.1}  school {:>5.1}  GNI {}",
            m.rank, name, m.value, m.life_expectancy, m.school_years, m.gni_per_capita
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_accept_pairs_and_query_strings() {
        let raw = vec![
            "q=new zealand".to_string(),
            "?region=Oceania&page=2".to_string(),
            "timezone=UTC%2B12:00".to_string(),
        ];
        assert_eq!(
            parse_params(&raw),
            vec![
                ("q".to_string(), "new zealand".to_string()),
                ("region".to_string(), "Oceania".to_string()),
                ("page".to_string(), "2".to_string()),
                ("timezone".to_string(), "UTC+12:00".to_string()),
            ]
        );
    }

    #[test]
    fn bare_words_become_empty_parameters() {
        assert_eq!(
            parse_params(&["foo".to_string()]),
            vec![("foo".to_string(), String::new())]
        );
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::parse_from([
            "atlas",
            "--catalog",
            "data/sample_catalog.json",
            "--favorites",
            "/tmp/favs.json",
            "stats",
        ]);
        let config = config_from(&args);
        assert_eq!(
            config.catalog,
            CatalogLocation::File("data/sample_catalog.json".into())
        );
        assert_eq!(config.favorites_path, Some("/tmp/favs.json".into()));
    }
}
