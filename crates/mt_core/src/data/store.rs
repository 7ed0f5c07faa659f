//! Load-once dataset store.
//!
//! Datasets are installed once (typically after a background load at
//! startup) and never mutated. Readers before installation see an empty
//! set, so evaluations resolve to "no match" instead of failing.

use once_cell::sync::{Lazy, OnceCell};

use super::loader::Datasets;
use crate::error::{CoreError, Result};

static EMPTY: Lazy<Datasets> = Lazy::new(Datasets::default);

#[derive(Debug, Default)]
pub struct DatasetStore {
    inner: OnceCell<Datasets>,
}

impl DatasetStore {
    pub const fn new() -> Self {
        Self {
            inner: OnceCell::new(),
        }
    }

    /// Install the datasets; only the first call succeeds
    pub fn install(&self, datasets: Datasets) -> Result<()> {
        self.inner
            .set(datasets)
            .map_err(|_| CoreError::AlreadyLoaded)
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Installed datasets, or an empty set when none are installed yet
    pub fn current(&self) -> &Datasets {
        self.inner.get().unwrap_or(&*EMPTY)
    }
}

/// Process-wide store
pub static DATASETS: DatasetStore = DatasetStore::new();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SerifuEntry;

    #[test]
    fn test_empty_before_install() {
        let store = DatasetStore::new();
        assert!(!store.is_loaded());
        assert!(store.current().reference.is_empty());
    }

    #[test]
    fn test_install_once() {
        let store = DatasetStore::new();
        let serifu = vec![SerifuEntry {
            category: "通常時".to_string(),
            text: "a".to_string(),
            note: "b".to_string(),
        }];
        store.install(Datasets::new(Vec::new(), serifu)).unwrap();
        assert!(store.is_loaded());
        assert_eq!(store.current().serifu.len(), 1);

        let second = store.install(Datasets::default());
        assert!(matches!(second, Err(CoreError::AlreadyLoaded)));
        assert_eq!(store.current().serifu.len(), 1);
    }
}
