// crates/atlas-core/src/favorites.rs

//! Favorite countries: an ordered set of names persisted as
//! `{"countries": [...]}`.
//!
//! The store is the only mutable shared state of a [`crate::Directory`]. All
//! changes go through [`FavoritesStore::apply`], which holds one mutex across
//! read, modify and persist, so concurrent callers cannot lose updates.

use crate::error::{AtlasError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

/// Country names in insertion order, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    #[serde(default, deserialize_with = "null_as_empty")]
    countries: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Favorites {
    /// Builds a set from `names`, dropping repeats but keeping first-seen order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut favorites = Self::default();
        for name in names {
            favorites.insert(name.into());
        }
        favorites
    }

    pub fn contains(&self, name: &str) -> bool {
        self.countries.iter().any(|c| c == name)
    }

    /// Returns `false` if `name` was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.countries.push(name);
        true
    }

    /// Returns `false` if `name` was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.countries.len();
        self.countries.retain(|c| c != name);
        self.countries.len() != before
    }

    pub fn names(&self) -> &[String] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// What to do with a favorite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
}

impl FromStr for FavoriteAction {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            other => Err(AtlasError::InvalidAction(other.to_string())),
        }
    }
}

/// Mutex-guarded [`Favorites`] with optional file persistence.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    path: Option<PathBuf>,
    inner: Mutex<Favorites>,
}

impl FavoritesStore {
    /// A store that never touches the filesystem.
    pub fn in_memory(initial: Favorites) -> Self {
        Self {
            path: None,
            inner: Mutex::new(initial),
        }
    }

    /// Opens the favorites file at `path`.
    ///
    /// A missing file is an empty set. Any other read error, or invalid JSON,
    /// is returned to the caller.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let favorites = match fs::read(path) {
            Ok(bytes) => {
                let stored: Favorites = serde_json::from_slice(&bytes)?;
                Favorites::from_names(stored.countries)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no favorites file yet");
                Favorites::default()
            }
            Err(e) => return Err(AtlasError::Io(e)),
        };
        info!(path = %path.display(), count = favorites.len(), "loaded favorites");

        Ok(Self {
            path: Some(path.to_path_buf()),
            inner: Mutex::new(favorites),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// A copy of the current set.
    pub fn snapshot(&self) -> Favorites {
        self.lock().clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains(name)
    }

    /// Adds or removes `name` and persists the result.
    ///
    /// Returns whether the set changed. If persisting fails the in-memory set
    /// is left untouched.
    pub fn apply(&self, name: &str, action: FavoriteAction) -> Result<bool> {
        let mut current = self.lock();
        let mut next = current.clone();
        let changed = match action {
            FavoriteAction::Add => next.insert(name),
            FavoriteAction::Remove => next.remove(name),
        };

        if changed {
            self.persist(&next)?;
            *current = next;
            debug!(country = name, ?action, "favorites updated");
        }
        Ok(changed)
    }

    fn persist(&self, favorites: &Favorites) -> Result<()> {
        if let Some(path) = &self.path {
            let data = serde_json::to_vec(favorites)?;
            fs::write(path, data)?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Favorites> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn set_semantics() {
        let mut favorites = Favorites::from_names(["Peru", "Chile", "Peru"]);
        assert_eq!(favorites.names(), ["Peru", "Chile"]);
        assert!(!favorites.insert("Chile"));
        assert!(favorites.remove("Peru"));
        assert!(!favorites.remove("Peru"));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn parses_actions() {
        assert_eq!("add".parse::<FavoriteAction>().unwrap(), FavoriteAction::Add);
        assert_eq!("remove".parse::<FavoriteAction>().unwrap(), FavoriteAction::Remove);
        assert!(matches!(
            "toggle".parse::<FavoriteAction>(),
            Err(AtlasError::InvalidAction(a)) if a == "toggle"
        ));
    }

    #[test]
    fn missing_file_is_empty_and_first_write_creates_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let store = FavoritesStore::open(&path).unwrap();
        assert!(store.snapshot().is_empty());
        assert!(store.apply("Japan", FavoriteAction::Add).unwrap());
        assert!(!store.apply("Japan", FavoriteAction::Add).unwrap());

        let reopened = FavoritesStore::open(&path).unwrap();
        assert!(reopened.contains("Japan"));

        assert!(reopened.apply("Japan", FavoriteAction::Remove).unwrap());
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"countries":[]}"#);
    }

    #[test]
    fn null_countries_and_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        fs::write(&path, r#"{"countries":null}"#).unwrap();
        assert!(FavoritesStore::open(&path).unwrap().snapshot().is_empty());

        fs::write(&path, "not json").unwrap();
        assert!(matches!(FavoritesStore::open(&path), Err(AtlasError::Json(_))));
    }

    #[test]
    fn concurrent_adds_are_not_lost() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let store = Arc::new(FavoritesStore::open(&path).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.apply(&format!("Country {i}"), FavoriteAction::Add))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().unwrap());
        }

        let reopened = FavoritesStore::open(&path).unwrap();
        assert_eq!(reopened.snapshot().len(), 8);
    }
}
