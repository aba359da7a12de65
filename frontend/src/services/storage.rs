use gloo::storage::LocalStorage;
use gloo::storage::Storage;
use shared::KeyValueStore;

/// `localStorage` behind the shared `KeyValueStore` seam. Storage failures
/// (private mode, quota) read as missing and drop writes.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            gloo::console::warn!(format!("[storage] could not persist {}", key));
        }
    }

    fn remove(&self, key: &str) {
        if LocalStorage::raw().remove_item(key).is_err() {
            gloo::console::warn!(format!("[storage] could not remove {}", key));
        }
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_store_round_trip() {
        let store = BrowserStore;
        store.set("hotel-console-test", "42");
        assert_eq!(store.get("hotel-console-test").as_deref(), Some("42"));
        store.remove("hotel-console-test");
        assert_eq!(store.get("hotel-console-test"), None);
    }

    #[wasm_bindgen_test]
    fn test_removing_missing_key_is_harmless() {
        let store = BrowserStore;
        store.remove("hotel-console-never-set");
        assert_eq!(store.get("hotel-console-never-set"), None);
    }
}
