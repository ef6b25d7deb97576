//! Device-local persistence: the draft list and the session identity.
//!
//! Everything lives under two keys in a string key-value store. Each
//! operation is a full read-modify-write; the single-threaded event loop
//! makes that atomic with respect to the store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shared_types::{AppError, SessionUser, ViolationReport};
use uuid::Uuid;

const REPORTS_KEY: &str = "fiscal_reports";
const SESSION_KEY: &str = "fiscal_session";

/// String key-value storage. `localStorage` on the web build, in-memory
/// everywhere else (native tests, desktop fallback).
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryBackend {
    data: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.data.borrow_mut().remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = Self::storage()
            .ok_or_else(|| AppError::storage("Device storage is unavailable."))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::storage("Could not write to device storage."))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The draft store: the full report list under one key, the session
/// identity under another.
pub struct DraftStore {
    backend: Box<dyn StorageBackend>,
}

impl DraftStore {
    pub fn for_platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self {
                backend: Box::new(LocalStorageBackend),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::default()),
        }
    }

    /// All stored reports, newest first. Malformed stored JSON degrades to
    /// an empty list rather than wedging the app.
    pub fn list(&self) -> Vec<ViolationReport> {
        let Some(raw) = self.backend.get(REPORTS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(reports) => reports,
            Err(e) => {
                tracing::warn!(error = %e, "stored report list is unreadable");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: Uuid) -> Option<ViolationReport> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Replace the matching report in place, or prepend a new one.
    pub fn upsert(&self, report: &ViolationReport) -> Result<(), AppError> {
        let mut all = self.list();
        match all.iter().position(|r| r.id == report.id) {
            Some(index) => all[index] = report.clone(),
            None => all.insert(0, report.clone()),
        }
        self.write_reports(&all)
    }

    pub fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut all = self.list();
        all.retain(|r| r.id != id);
        self.write_reports(&all)
    }

    fn write_reports(&self, reports: &[ViolationReport]) -> Result<(), AppError> {
        let raw = serde_json::to_string(reports)
            .map_err(|e| AppError::storage(format!("Could not encode drafts: {e}")))?;
        self.backend.set(REPORTS_KEY, &raw)
    }

    pub fn load_session(&self) -> Option<SessionUser> {
        let raw = self.backend.get(SESSION_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn save_session(&self, user: &SessionUser) -> Result<(), AppError> {
        let raw = serde_json::to_string(user)
            .map_err(|e| AppError::storage(format!("Could not encode session: {e}")))?;
        self.backend.set(SESSION_KEY, &raw)
    }

    pub fn clear_session(&self) {
        self.backend.remove(SESSION_KEY);
    }
}

/// Cheap clonable handle for the Dioxus context.
#[derive(Clone)]
pub struct Drafts(pub Rc<DraftStore>);

impl std::ops::Deref for Drafts {
    type Target = DraftStore;

    fn deref(&self) -> &DraftStore {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report(date: &str) -> ViolationReport {
        ViolationReport::new(date.to_string(), "10:00".to_string())
    }

    #[test]
    fn list_is_empty_on_fresh_store() {
        let store = DraftStore::in_memory();
        assert!(store.list().is_empty());
    }

    #[test]
    fn upsert_prepends_new_reports() {
        let store = DraftStore::in_memory();
        let first = report("2025-10-01");
        let second = report("2025-10-02");
        store.upsert(&first).unwrap();
        store.upsert(&second).unwrap();

        let all = store.list();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let store = DraftStore::in_memory();
        let mut draft = report("2025-10-01");
        store.upsert(&draft).unwrap();

        draft.location = "Terminal Rodoviario".into();
        store.upsert(&draft).unwrap();

        let all = store.list();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].location, "Terminal Rodoviario");
    }

    #[test]
    fn remove_deletes_only_the_matching_report() {
        let store = DraftStore::in_memory();
        let keep = report("2025-10-01");
        let gone = report("2025-10-02");
        store.upsert(&keep).unwrap();
        store.upsert(&gone).unwrap();

        store.remove(gone.id).unwrap();
        let all = store.list();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep.id);
    }

    #[test]
    fn session_roundtrip_and_clear() {
        let store = DraftStore::in_memory();
        let user = SessionUser {
            user_id: 1560,
            employee_id: 88,
            full_name: "Jose Inspetor".into(),
            username: "jinspetor".into(),
        };
        assert!(store.load_session().is_none());
        store.save_session(&user).unwrap();
        assert_eq!(store.load_session().unwrap(), user);
        store.clear_session();
        assert!(store.load_session().is_none());
    }

    #[test]
    fn malformed_report_list_degrades_to_empty() {
        let backend = MemoryBackend::default();
        backend.set(REPORTS_KEY, "not json").unwrap();
        let store = DraftStore {
            backend: Box::new(backend),
        };
        assert!(store.list().is_empty());
    }
}
