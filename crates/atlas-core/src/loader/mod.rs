// crates/atlas-core/src/loader/mod.rs

//! # Data Loader
//!
//! Runs the startup pipeline: favorites → HDI table → catalog → normalize and
//! join. Catalog and favorites failures are fatal; a missing HDI file only
//! degrades the data.

use crate::directory::Directory;
use crate::error::Result;
use crate::favorites::FavoritesStore;
use crate::hdi::load_hdi;
use crate::model::convert::from_raw;
use crate::traits::CatalogSource;
use chrono::{DateTime, Utc};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

mod common_io;
mod source;

#[cfg(feature = "fetch")]
pub use source::HttpCatalog;
pub use source::{decode_catalog, FileCatalog};

pub const DEFAULT_CATALOG_URL: &str = "https://restcountries.com/v3.1/all?fields=name,capital,region,flag,timezones,population,area,languages,currencies,idd,car,borders";
pub const DEFAULT_HDI_FILE: &str = "HDR23-24_Statistical_Annex_HDI_Table - HDI.csv";
pub const DEFAULT_FAVORITES_FILE: &str = "favorites.json";

/// Where the raw catalog lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Url(String),
    File(PathBuf),
}

impl CatalogLocation {
    /// `http://` and `https://` strings are URLs, everything else a path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::File(PathBuf::from(s))
        }
    }

    /// Builds the matching [`CatalogSource`].
    pub fn source(&self) -> Result<Box<dyn CatalogSource>> {
        match self {
            Self::File(path) => Ok(Box::new(FileCatalog::new(path))),
            #[cfg(feature = "fetch")]
            Self::Url(url) => Ok(Box::new(HttpCatalog::new(url.clone()))),
            #[cfg(not(feature = "fetch"))]
            Self::Url(url) => Err(crate::error::AtlasError::InvalidData(format!(
                "fetching {url} requires the 'fetch' feature"
            ))),
        }
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load-time configuration.
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    pub catalog: CatalogLocation,
    /// HDI CSV; optional in practice since a missing file only degrades data.
    pub hdi_path: PathBuf,
    /// Favorites JSON. `None` keeps favorites in memory only.
    pub favorites_path: Option<PathBuf>,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogLocation::Url(DEFAULT_CATALOG_URL.to_string()),
            hdi_path: PathBuf::from(DEFAULT_HDI_FILE),
            favorites_path: Some(PathBuf::from(DEFAULT_FAVORITES_FILE)),
        }
    }
}

impl AtlasConfig {
    /// Directory holding the bundled sample data.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// The bundled sample catalog and HDI extract, with in-memory favorites.
    pub fn bundled_sample() -> Self {
        let dir = Self::default_data_dir();
        Self {
            catalog: CatalogLocation::File(dir.join("sample_catalog.json")),
            hdi_path: dir.join("hdi_sample.csv"),
            favorites_path: None,
        }
    }

    pub fn with_catalog(mut self, catalog: CatalogLocation) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_hdi_path(mut self, path: impl AsRef<Path>) -> Self {
        self.hdi_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_favorites_path(mut self, path: Option<PathBuf>) -> Self {
        self.favorites_path = path;
        self
    }
}

impl Directory {
    /// Loads everything named by `config`, using the current time for the
    /// derived local times.
    pub fn load(config: &AtlasConfig) -> Result<Self> {
        let source = config.catalog.source()?;
        Self::load_from(source.as_ref(), config, Utc::now())
    }

    /// Like [`Directory::load`] with an explicit catalog source and clock.
    /// `config.catalog` is ignored.
    pub fn load_from(
        source: &dyn CatalogSource,
        config: &AtlasConfig,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let favorites = match &config.favorites_path {
            Some(path) => FavoritesStore::open(path)?,
            None => FavoritesStore::default(),
        };

        let hdi = load_hdi(&config.hdi_path);

        info!(source = %source.describe(), "loading catalog");
        let raw = source.fetch()?;
        let countries = from_raw(raw, &hdi, now);
        Ok(Directory::new(countries, hdi, favorites))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locations() {
        assert_eq!(
            CatalogLocation::parse("https://example.org/all"),
            CatalogLocation::Url("https://example.org/all".into())
        );
        assert_eq!(
            CatalogLocation::parse("data/catalog.json"),
            CatalogLocation::File(PathBuf::from("data/catalog.json"))
        );
    }

    #[test]
    fn defaults_point_at_live_sources() {
        let config = AtlasConfig::default();
        assert_eq!(config.catalog, CatalogLocation::Url(DEFAULT_CATALOG_URL.into()));
        assert_eq!(config.favorites_path.as_deref(), Some(Path::new(DEFAULT_FAVORITES_FILE)));
    }

    #[test]
    fn missing_hdi_file_only_degrades() {
        let raw = vec![crate::raw::CountryRaw::from_value(serde_json::json!({
            "name": {"common": "Testland"}
        }))
        .unwrap()];
        let config = AtlasConfig::bundled_sample().with_hdi_path("/no/such/hdi.csv");
        let directory = Directory::load_from(&raw, &config, Utc::now()).unwrap();
        assert_eq!(directory.countries().len(), 1);
        assert!(directory.hdi().is_empty());
    }

    #[test]
    fn corrupt_favorites_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "not json").unwrap();
        let raw: Vec<crate::raw::CountryRaw> = Vec::new();
        let config = AtlasConfig::bundled_sample().with_favorites_path(Some(path));
        assert!(Directory::load_from(&raw, &config, Utc::now()).is_err());
    }
}
