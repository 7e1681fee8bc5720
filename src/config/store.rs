//! Preference storage.
//!
//! The UI only talks to [`PreferenceStore`]; [`PrefStore`] is the
//! TOML-backed implementation used by the binary.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::loader::{ConfigError, PrefsFile};
use crate::prefs::{PrefId, PrefValue};

/// Get/set access to preference values.
///
/// `set` is fire-and-forget from the caller's side: implementations deal with
/// their own persistence failures.
pub trait PreferenceStore {
    /// Current value, or the declared default when nothing is stored.
    fn get(&self, id: PrefId) -> PrefValue;

    fn set(&mut self, id: PrefId, value: PrefValue);
}

/// Preference values backed by an optional TOML file.
///
/// Every accepted `set` rewrites the `[prefs]` table of the file.
pub struct PrefStore {
    values: HashMap<PrefId, PrefValue>,
    file: PrefsFile,
    path: Option<PathBuf>,
}

impl PrefStore {
    /// Store with defaults only and no persistence.
    pub fn in_memory() -> Self {
        Self {
            values: HashMap::new(),
            file: PrefsFile::default(),
            path: None,
        }
    }

    /// Open the store at `path`.
    ///
    /// A missing file starts from defaults. Entries with the wrong type or a
    /// key outside their entry list are dropped with a warning. Unknown keys
    /// are kept in the file untouched (forward compat).
    pub fn open(path: PathBuf) -> Result<Self, ConfigError> {
        let mut file = PrefsFile::load_from(&path)?;
        let mut values = HashMap::new();
        let mut rejected = Vec::new();

        for (key, raw) in &file.prefs {
            let Some(id) = PrefId::parse(key) else {
                tracing::debug!(key = %key, "Keeping unknown preference key");
                continue;
            };
            let kind = id.def().kind;
            match PrefValue::from_toml(&kind, raw).and_then(|value| kind.normalize(value)) {
                Some(value) => {
                    values.insert(id, value);
                }
                None => {
                    tracing::warn!(key = %key, value = %raw, "Ignoring invalid preference value");
                    rejected.push(key.clone());
                }
            }
        }
        for key in rejected {
            file.prefs.remove(&key);
        }

        tracing::info!(
            path = %path.display(),
            loaded = values.len(),
            "Preferences loaded"
        );

        Ok(Self {
            values,
            file,
            path: Some(path),
        })
    }

    /// Write all stored values to the backing file. No-op when in memory.
    pub fn save(&mut self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        for (id, value) in &self.values {
            self.file.prefs.insert(id.as_str().to_string(), value.to_toml());
        }
        self.file.save_to(path)
    }
}

impl PreferenceStore for PrefStore {
    fn get(&self, id: PrefId) -> PrefValue {
        self.values
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.def().kind.default_value())
    }

    fn set(&mut self, id: PrefId, value: PrefValue) {
        let Some(value) = id.def().kind.normalize(value.clone()) else {
            tracing::warn!(pref = id.as_str(), ?value, "Rejected value for preference");
            return;
        };
        tracing::debug!(pref = id.as_str(), ?value, "Preference set");
        self.values.insert(id, value);

        if let Err(err) = self.save() {
            tracing::error!(pref = id.as_str(), error = %err, "Failed to persist preferences");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_returns_defaults() {
        let store = PrefStore::in_memory();
        assert_eq!(store.get(PrefId::DockHide), PrefValue::Bool(false));
        assert_eq!(store.get(PrefId::DrawerColumns), PrefValue::Int(5));
    }

    #[test]
    fn set_then_get() {
        let mut store = PrefStore::in_memory();
        store.set(PrefId::DrawerSortMode, PrefValue::Int(2));
        assert_eq!(store.get(PrefId::DrawerSortMode), PrefValue::Int(2));
    }

    #[test]
    fn set_rejects_wrong_kind() {
        let mut store = PrefStore::in_memory();
        store.set(PrefId::DockHide, PrefValue::Str("yes".into()));
        assert_eq!(store.get(PrefId::DockHide), PrefValue::Bool(false));
    }

    #[test]
    fn set_rejects_unknown_entry_key() {
        let mut store = PrefStore::in_memory();
        store.set(PrefId::DockBackgroundColor, PrefValue::Str("mauve".into()));
        assert_eq!(
            store.get(PrefId::DockBackgroundColor),
            PrefValue::Str("surface".into())
        );
    }

    #[test]
    fn set_clamps_float() {
        let mut store = PrefStore::in_memory();
        store.set(PrefId::DockScale, PrefValue::Float(9.0));
        assert_eq!(store.get(PrefId::DockScale), PrefValue::Float(1.5));
    }
}
