mod loader;
mod store;

pub use loader::{ConfigError, PrefsFile};
pub use store::{PrefStore, PreferenceStore};
