//! atlas-cli
//! =========
//!
//! Command-line interface for the `atlas-core` country directory.
//!
//! This crate primarily provides a binary (`atlas`). The library target only
//! exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! atlas --help
//! atlas --catalog crates/atlas-core/data/sample_catalog.json \
//!       --hdi crates/atlas-core/data/hdi_sample.csv query q=land
//! atlas stats
//! atlas join-report
//! ```
//!
//! For programmatic access, use the [`atlas_core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
