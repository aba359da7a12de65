use std::cell::RefCell;
use std::collections::HashMap;

/// String key/value storage that outlives a page (browser `localStorage` in
/// the frontend, an in-memory map in tests).
///
/// Writes are best-effort: a full or disabled store drops the value and the
/// page keeps working with its in-memory copy.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("bookingId", "123");
        assert_eq!(store.get("bookingId").as_deref(), Some("123"));

        store.set("bookingId", "456");
        assert_eq!(store.get("bookingId").as_deref(), Some("456"));
        assert_eq!(store.len(), 1);

        store.remove("bookingId");
        assert_eq!(store.get("bookingId"), None);
    }
}
