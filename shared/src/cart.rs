use crate::models::{CartItem, MenuItem};
use crate::storage::KeyValueStore;

/// Storage key holding the JSON array of cart lines
pub const CART_KEY: &str = "foodCart";

/// Food cart persisted between pages. Lines are unique by item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the cart from storage. A missing value is an empty cart; a value
    /// that does not decode is an error and is left in place.
    pub fn load(store: &impl KeyValueStore) -> Result<Self, serde_json::Error> {
        let items = match store.get(CART_KEY) {
            Some(raw) => serde_json::from_str::<Vec<CartItem>>(&raw)?,
            None => Vec::new(),
        };
        Ok(Self { items })
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        if let Ok(raw) = serde_json::to_string(&self.items) {
            store.set(CART_KEY, &raw);
        }
    }

    /// Merge by id: an existing line accumulates the quantity.
    pub fn add(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|line| line.price * f64::from(line.quantity))
            .sum()
    }

    pub fn badge_visible(&self) -> bool {
        self.total_quantity() > 0
    }
}

/// Load, add one of `item`, save. Returns the new badge count. Nothing is
/// written when the stored cart cannot be read.
pub fn add_to_cart(store: &impl KeyValueStore, item: &MenuItem) -> Result<u32, serde_json::Error> {
    let mut cart = Cart::load(store)?;
    cart.add(CartItem::from_menu_item(item));
    cart.save(store);
    Ok(cart.total_quantity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn menu_item(id: i64, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: format!("Item {}", id),
            description: None,
            price,
            category: None,
            image_url: None,
            available: true,
        }
    }

    #[test]
    fn test_same_id_twice_merges_into_one_line() {
        let store = MemoryStore::new();
        let item = menu_item(7, 4.5);

        assert_eq!(add_to_cart(&store, &item).unwrap(), 1);
        assert_eq!(add_to_cart(&store, &item).unwrap(), 2);

        let cart = Cart::load(&store).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total_price(), 9.0);
    }

    #[test]
    fn test_quantities_sum_on_merge() {
        let mut cart = Cart::new();
        cart.add(CartItem { id: 1, name: "Tea".into(), price: 2.0, quantity: 2 });
        cart.add(CartItem { id: 1, name: "Tea".into(), price: 2.0, quantity: 3 });
        cart.add(CartItem { id: 2, name: "Cake".into(), price: 5.0, quantity: 1 });
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.total_quantity(), 6);
    }

    #[test]
    fn test_missing_storage_loads_empty() {
        let store = MemoryStore::new();
        let cart = Cart::load(&store).unwrap();
        assert!(cart.items().is_empty());
        assert!(!cart.badge_visible());

        assert_eq!(add_to_cart(&store, &menu_item(3, 1.0)).unwrap(), 1);
    }

    #[test]
    fn test_unreadable_cart_is_left_untouched() {
        let store = MemoryStore::new();
        let stored = r#"[{"id":9,"name":"Soup","price":4.5,"quantity":2},{"id":"bad"}]"#;
        store.set(CART_KEY, stored);

        assert!(Cart::load(&store).is_err());
        assert!(add_to_cart(&store, &menu_item(1, 2.0)).is_err());
        assert_eq!(store.get(CART_KEY).as_deref(), Some(stored));

        store.set(CART_KEY, "{not json");
        assert!(add_to_cart(&store, &menu_item(1, 2.0)).is_err());
        assert_eq!(store.get(CART_KEY).as_deref(), Some("{not json"));
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let store = MemoryStore::new();
        store.set(CART_KEY, &format!(r#"[{{"id":5,"name":"Tea","price":2.0,"quantity":{}}}]"#, u32::MAX));

        assert_eq!(add_to_cart(&store, &menu_item(5, 2.0)).unwrap(), u32::MAX);
        assert_eq!(Cart::load(&store).unwrap().items()[0].quantity, u32::MAX);

        let mut cart = Cart::new();
        cart.add(CartItem { id: 1, name: "Tea".into(), price: 2.0, quantity: u32::MAX });
        cart.add(CartItem { id: 2, name: "Cake".into(), price: 5.0, quantity: 3 });
        assert_eq!(cart.total_quantity(), u32::MAX);
        assert!(cart.badge_visible());
    }

    #[test]
    fn test_loads_legacy_string_ids() {
        let store = MemoryStore::new();
        store.set(CART_KEY, r#"[{"id":"3","name":"Soup","price":6.0,"quantity":1}]"#);
        assert_eq!(add_to_cart(&store, &menu_item(3, 6.0)).unwrap(), 2);
        assert_eq!(Cart::load(&store).unwrap().items().len(), 1);
    }
}
