// crates/atlas-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the directory.
///
/// Returned by [`crate::Directory::stats`]; counts reflect the collection as
/// loaded plus the current favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub countries: usize,
    /// Countries whose name matched a row of the HDI table.
    pub with_hdi: usize,
    /// Rows in the HDI table, matched or not.
    pub hdi_rows: usize,
    pub regions: usize,
    pub favorites: usize,
}
