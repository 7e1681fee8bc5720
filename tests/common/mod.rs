//! Shared test utilities.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use neoprefs::config::PreferenceStore;
use neoprefs::prefs::{PrefId, PrefValue};
use neoprefs::ui::app::App;
use neoprefs::ui::page::PageId;

pub type WriteLog = Rc<RefCell<Vec<(PrefId, PrefValue)>>>;

/// In-memory store that records every `set` call.
pub struct RecordingStore {
    values: HashMap<PrefId, PrefValue>,
    writes: WriteLog,
}

impl RecordingStore {
    pub fn new() -> (Self, WriteLog) {
        let writes = WriteLog::default();
        let store = Self {
            values: HashMap::new(),
            writes: Rc::clone(&writes),
        };
        (store, writes)
    }

    pub fn with(mut self, id: PrefId, value: PrefValue) -> Self {
        self.values.insert(id, value);
        self
    }
}

impl PreferenceStore for RecordingStore {
    fn get(&self, id: PrefId) -> PrefValue {
        self.values
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.def().kind.default_value())
    }

    fn set(&mut self, id: PrefId, value: PrefValue) {
        self.writes.borrow_mut().push((id, value.clone()));
        self.values.insert(id, value);
    }
}

/// App on `page` backed by a recording store.
pub fn recording_app(page: PageId, store: RecordingStore) -> App {
    App::new(Box::new(store), page)
}

pub fn str_set(keys: &[&str]) -> PrefValue {
    PrefValue::StrSet(keys.iter().map(|k| k.to_string()).collect())
}
