//! Small key/value settings that survive restarts.
//!
//! Values are stored in a flat TOML table; any serde type that maps onto a
//! TOML value can be stored under a key.

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{StoreError, atomic_write};
use crate::api::SearchParameters;

const LAST_SEARCH_KEY: &str = "last_search";

pub struct PreferenceStore {
    path: PathBuf,
    values: toml::Table,
}

impl PreferenceStore {
    /// Loads `path` if it exists. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str(&contents).map_err(|e| StoreError::Parse(e.to_string()))?
        } else {
            toml::Table::new()
        };
        debug!("Loaded {} preferences from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    /// Returns the value under `key`, or None if it is missing or has the
    /// wrong shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?.clone();
        match value.try_into() {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Ignoring preference '{}': {}", key, e);
                None
            }
        }
    }

    /// Stores `value` under `key` and writes the file.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = toml::Value::try_from(value).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.values.insert(key.to_string(), value);
        self.persist()
    }

    /// The filters of the last submitted search, pulled back inside their
    /// bounds since the file may have been edited by hand.
    pub fn last_search(&self) -> Option<SearchParameters> {
        self.get::<SearchParameters>(LAST_SEARCH_KEY)
            .map(SearchParameters::sanitized)
    }

    pub fn set_last_search(&mut self, params: &SearchParameters) -> Result<(), StoreError> {
        self.set(LAST_SEARCH_KEY, params)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let contents =
            toml::to_string(&self.values).map_err(|e| StoreError::Serialize(e.to_string()))?;
        atomic_write(&self.path, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SearchField, SortOption};

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PreferenceStore::open(dir.path().join("preferences.toml")).unwrap();
        assert_eq!(prefs.get::<String>("anything"), None);
        assert!(prefs.last_search().is_none());
    }

    #[test]
    fn test_set_get_scalars() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = PreferenceStore::open(dir.path().join("preferences.toml")).unwrap();
        prefs.set("page_size", &25u32).unwrap();
        prefs.set("theme", &"dark").unwrap();
        assert_eq!(prefs.get::<u32>("page_size"), Some(25));
        assert_eq!(prefs.get::<String>("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_wrong_type_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = PreferenceStore::open(dir.path().join("preferences.toml")).unwrap();
        prefs.set("theme", &"dark").unwrap();
        assert_eq!(prefs.get::<u32>("theme"), None);
    }

    #[test]
    fn test_last_search_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        let params = SearchParameters {
            age_range: 18..=23,
            sort: SortOption::CurrentAbilityDescending,
            ..Default::default()
        };

        let mut prefs = PreferenceStore::open(&path).unwrap();
        prefs.set_last_search(&params).unwrap();
        drop(prefs);

        let reopened = PreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.last_search(), Some(params));
    }

    #[test]
    fn test_hand_edited_last_search_is_pulled_into_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(
            &path,
            "[last_search]\n\
             age_range = { start = 10, end = 12 }\n\
             current_ability_range = { start = 300, end = 250 }\n\
             potential_ability_range = { start = 0, end = 80 }\n",
        )
        .unwrap();

        let mut params = PreferenceStore::open(&path).unwrap().last_search().unwrap();
        assert_eq!(params.age_range, 15..=15);
        assert_eq!(params.current_ability_range, 200..=200);
        assert_eq!(params.potential_ability_range, 1..=80);

        for field in SearchField::ALL {
            params.adjust(field, false);
            params.adjust(field, true);
        }
        assert!(params.age_range.start() <= params.age_range.end());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "this is = = not toml").unwrap();
        assert!(matches!(
            PreferenceStore::open(&path),
            Err(StoreError::Parse(_))
        ));
    }
}
