//! hdi-atlas
//!
//! Workspace facade over [`atlas_core`]. The demos under `demos/` build
//! against this package; applications should depend on `atlas-core`.
pub use atlas_core::*;
