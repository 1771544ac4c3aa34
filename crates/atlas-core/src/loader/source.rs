// crates/atlas-core/src/loader/source.rs
use super::common_io;
use crate::error::Result;
use crate::raw::CountryRaw;
use crate::traits::CatalogSource;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Decodes a JSON array of catalog records.
///
/// The array itself must be valid JSON; entries that are not objects are
/// skipped with a warning.
pub fn decode_catalog<R: Read>(reader: R) -> Result<Vec<CountryRaw>> {
    let values: Vec<Value> = serde_json::from_reader(reader)?;
    Ok(decode_values(values))
}

fn decode_values(values: Vec<Value>) -> Vec<CountryRaw> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let raw = CountryRaw::from_value(value);
            if raw.is_none() {
                warn!(index, "skipping catalog entry that is not an object");
            }
            raw
        })
        .collect()
}

/// Catalog stored on disk (`.json`, or `.json.gz` with the `compact` feature).
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for FileCatalog {
    fn fetch(&self) -> Result<Vec<CountryRaw>> {
        let reader = common_io::open_stream(&self.path)?;
        decode_catalog(reader)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The live REST endpoint, fetched with a blocking client.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: String,
}

#[cfg(feature = "fetch")]
impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "fetch")]
impl CatalogSource for HttpCatalog {
    fn fetch(&self) -> Result<Vec<CountryRaw>> {
        use crate::error::AtlasError;

        let response = reqwest::blocking::get(&self.url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| AtlasError::Http(e.to_string()))?;
        let body = response
            .bytes()
            .map_err(|e| AtlasError::Http(e.to_string()))?;
        decode_catalog(body.as_ref())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtlasError;

    #[test]
    fn skips_non_object_entries() {
        let json = r#"[{"name": {"common": "A"}}, 42, "x", {"name": {"common": "B"}}]"#;
        let raw = decode_catalog(json.as_bytes()).unwrap();
        let names: Vec<_> = raw.iter().map(|r| r.name.common.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn rejects_non_array_documents() {
        assert!(matches!(
            decode_catalog(r#"{"name": "A"}"#.as_bytes()),
            Err(AtlasError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = FileCatalog::new("/no/such/catalog.json");
        assert!(matches!(source.fetch(), Err(AtlasError::NotFound(_))));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn reads_gzipped_catalogs() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json.gz");
        let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        encoder
            .write_all(br#"[{"name": {"common": "Zipland"}}]"#)
            .unwrap();
        encoder.finish().unwrap();

        let raw = FileCatalog::new(&path).fetch().unwrap();
        assert_eq!(raw[0].name.common, "Zipland");
    }
}
