// crates/atlas-core/src/lib.rs
//! # atlas-core
//!
//! A directory of world countries joined with the UNDP Human Development
//! Index table.
//!
//! The crate is organised as a small pipeline:
//!
//! 1. [`hdi`] parses the loosely formatted HDI CSV into a [`HdiTable`].
//! 2. [`model::convert`] normalizes raw catalog records into [`Country`]
//!    values and joins the HDI metrics by name.
//! 3. [`search`] filters, searches, paginates and computes facets.
//! 4. [`Directory`] owns the collection and the favorites, and turns a raw
//!    request into a [`QueryOutcome`].
//!
//! ```no_run
//! use atlas_core::{AtlasConfig, Directory, QueryOutcome};
//!
//! let directory = Directory::load(&AtlasConfig::default()).unwrap();
//! let params = vec![("q".to_string(), "fra".to_string())];
//! match directory.answer(&params) {
//!     QueryOutcome::Normal(page) => println!("{} hits", page.countries.len()),
//!     other => println!("{:?}", other.notice()),
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod directory;
pub mod error;
pub mod favorites;
pub mod hdi;
pub mod loader;
pub mod model;
pub mod notice;
pub mod search;
pub mod text;
pub mod traits;
// Raw catalog input shapes (used by loaders and the normalizer)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::DirectoryStats;
pub use crate::directory::{Directory, DirectoryPage, JoinMiss, ListedCountry, QueryOutcome};
pub use crate::error::{AtlasError, Result};
pub use crate::favorites::{FavoriteAction, Favorites, FavoritesStore};
pub use crate::hdi::{parse_hdi, DevelopmentMetrics, DevelopmentTier, HdiTable};
pub use crate::loader::{decode_catalog, AtlasConfig, CatalogLocation, FileCatalog};
#[cfg(feature = "fetch")]
pub use crate::loader::HttpCatalog;
pub use crate::model::{Country, QueryCriteria};
pub use crate::notice::Notice;
pub use crate::search::{Filtered, TimeOfDay, PAGE_SIZE, STANDARD_TIMEZONES};
pub use crate::traits::{CatalogSource, TextMatch};
