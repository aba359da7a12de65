//! Restaurant staff dashboard: order status changes and menu item upkeep.

use crate::api_error::ApiError;
use crate::backend::{Method, RestBackend};
use crate::endpoint::Endpoint;
use crate::format::truncate_preview;
use crate::models::{FoodOrder, MenuItem, MenuItemPayload, OrderStatus, OrderStatusUpdate};
use crate::validation::FieldErrors;

pub const ORDERS_PATH: &str = "/api/food-orders/all";
pub const MENU_ITEMS_PATH: &str = "/api/menu-items";
pub const ALL_MENU_ITEMS_PATH: &str = "/api/menu-items/all";
pub const UPLOAD_PATH: &str = "/api/files/upload";
pub const THUMBNAIL_PLACEHOLDER: &str = "https://via.placeholder.com/60";
pub const PREVIEW_LEN: usize = 50;

pub const CONFIRM_DELETE_MENU_ITEM: &str = "Are you sure you want to delete this menu item?";

impl OrderStatus {
    /// Statuses offered by the inline dropdown
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Bootstrap contextual colour of the status badge
    pub fn badge_color(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "warning",
            OrderStatus::Preparing => "primary",
            OrderStatus::Delivered => "success",
            OrderStatus::Cancelled => "danger",
            OrderStatus::Unknown => "secondary",
        }
    }
}

pub fn order_status_path(order_id: i64) -> String {
    format!("/api/food-orders/{}/status", order_id)
}

pub fn menu_item_path(item_id: i64) -> String {
    format!("{}/{}", MENU_ITEMS_PATH, item_id)
}

/// Comma-joined item names, cut for the table cell
pub fn order_items_preview(order: &FoodOrder) -> (String, String) {
    let full = order
        .items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let short = truncate_preview(&full, PREVIEW_LEN);
    (full, short)
}

pub fn description_preview(item: &MenuItem) -> String {
    truncate_preview(item.description.as_deref().unwrap_or_default(), PREVIEW_LEN)
}

pub fn thumbnail_src(item: &MenuItem) -> String {
    match item.image_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => THUMBNAIL_PLACEHOLDER.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounters {
    pub pending_orders: usize,
    pub menu_items: usize,
}

impl DashboardCounters {
    pub fn compute(orders: &[FoodOrder], items: &[MenuItem]) -> Self {
        Self {
            pending_orders: orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count(),
            menu_items: items.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Menu item form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub available: bool,
    /// URL already stored for the item, kept when no new file is picked
    pub image_url: String,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            available: true,
            image_url: String::new(),
        }
    }
}

impl MenuItemForm {
    /// Edit pre-fill straight from the list already on screen
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: item.price.to_string(),
            category: item.category.clone().unwrap_or_default(),
            available: item.available,
            image_url: item.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.id.is_some() {
            "Edit Menu Item"
        } else {
            "Add Menu Item"
        }
    }

    /// Checked before any upload so a bad price never orphans a file.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Name is required.");
        }
        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => {}
            _ => errors.add("price", "Price must be a number."),
        }
        errors.into_result(())
    }

    pub fn into_payload(&self, image_url: Option<String>) -> Result<MenuItemPayload, FieldErrors> {
        self.validate()?;
        let price = self.price.trim().parse::<f64>().unwrap_or_default();
        Ok(MenuItemPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            category: self.category.clone(),
            available: self.available,
            image_url: image_url.filter(|url| !url.is_empty()),
        })
    }
}

// ---------------------------------------------------------------------------
// Workflows
// ---------------------------------------------------------------------------

pub async fn load_orders<B: RestBackend>(backend: &B) -> Result<Vec<FoodOrder>, ApiError> {
    backend.get_json(&Endpoint::new(ORDERS_PATH)).await
}

pub async fn load_menu_items<B: RestBackend>(backend: &B) -> Result<Vec<MenuItem>, ApiError> {
    backend.get_json(&Endpoint::new(ALL_MENU_ITEMS_PATH)).await
}

pub async fn update_order_status<B: RestBackend>(
    backend: &B,
    order_id: i64,
    status: OrderStatus,
) -> Result<Vec<FoodOrder>, ApiError> {
    backend
        .send_json(Method::Put, &order_status_path(order_id), &OrderStatusUpdate { status })
        .await?;
    load_orders(backend).await
}

/// Where a menu item save stopped
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveMenuItemError {
    #[error("{0}")]
    Invalid(FieldErrors),
    /// Nothing was written
    #[error("Image upload failed!")]
    Upload(ApiError),
    /// The uploaded file, if any, stays on the server
    #[error("Failed to save menu item.")]
    Save(ApiError),
    /// The write went through; only the list refresh failed
    #[error("Failed to load menu items.")]
    Refresh(ApiError),
}

/// Upload the picked file first, then write the item carrying the returned
/// URL, then re-fetch the whole list.
pub async fn save_menu_item<B: RestBackend>(
    backend: &B,
    form: &MenuItemForm,
    file: Option<&B::File>,
) -> Result<Vec<MenuItem>, SaveMenuItemError> {
    form.validate().map_err(SaveMenuItemError::Invalid)?;

    let image_url = match file {
        Some(file) => backend
            .upload_file(UPLOAD_PATH, file)
            .await
            .map(|uploaded| uploaded.url)
            .map_err(SaveMenuItemError::Upload)?,
        None => form.image_url.clone(),
    };

    let payload = form
        .into_payload(Some(image_url))
        .map_err(SaveMenuItemError::Invalid)?;
    let (method, path) = match form.id {
        Some(id) => (Method::Put, menu_item_path(id)),
        None => (Method::Post, MENU_ITEMS_PATH.to_string()),
    };
    backend
        .send_json(method, &path, &payload)
        .await
        .map_err(SaveMenuItemError::Save)?;

    load_menu_items(backend).await.map_err(SaveMenuItemError::Refresh)
}

pub async fn delete_menu_item<B: RestBackend>(backend: &B, item_id: i64) -> Result<Vec<MenuItem>, ApiError> {
    backend.send_empty(Method::Delete, &menu_item_path(item_id)).await?;
    load_menu_items(backend).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::backend::testing::RecordingBackend;
    use crate::models::{OrderedItem, RoomRef};

    const ITEMS_JSON: &str = r#"[{"id":1,"name":"Soup","price":6.0,"available":true,"imageUrl":"/uploads/soup.png"}]"#;
    const ORDERS_JSON: &str = r#"[{"id":3,"room":{"roomNumber":"101"},"items":[{"name":"Soup"}],"totalPrice":6.0,"status":"PREPARING"}]"#;

    fn order(status: OrderStatus, names: &[&str]) -> FoodOrder {
        FoodOrder {
            id: 1,
            room: RoomRef {
                room_number: "101".into(),
                room_type: None,
            },
            items: names
                .iter()
                .map(|n| OrderedItem { name: n.to_string() })
                .collect(),
            total_price: 0.0,
            status,
        }
    }

    fn form() -> MenuItemForm {
        MenuItemForm {
            name: "Soup".into(),
            price: "6".into(),
            category: "Appetizer".into(),
            ..MenuItemForm::default()
        }
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(OrderStatus::Pending.badge_color(), "warning");
        assert_eq!(OrderStatus::Preparing.badge_color(), "primary");
        assert_eq!(OrderStatus::Delivered.badge_color(), "success");
        assert_eq!(OrderStatus::Cancelled.badge_color(), "danger");
        assert_eq!(OrderStatus::Unknown.badge_color(), "secondary");
        assert_eq!(OrderStatus::parse("DELIVERED"), Some(OrderStatus::Delivered));
    }

    #[test]
    fn test_counters_from_lists() {
        let orders = vec![
            order(OrderStatus::Pending, &[]),
            order(OrderStatus::Pending, &[]),
            order(OrderStatus::Delivered, &[]),
        ];
        let counters = DashboardCounters::compute(&orders, &[]);
        assert_eq!(counters.pending_orders, 2);
        assert_eq!(counters.menu_items, 0);
    }

    #[test]
    fn test_items_preview_is_cut_at_fifty() {
        let names: Vec<String> = (0..20).map(|i| format!("Dish {}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let (full, short) = order_items_preview(&order(OrderStatus::Pending, &refs));
        assert!(full.len() > 50);
        assert_eq!(short.chars().count(), 53);
    }

    #[test]
    fn test_edit_prefill_keeps_existing_image() {
        let items: Vec<MenuItem> = serde_json::from_str(ITEMS_JSON).unwrap();
        let form = MenuItemForm::from_item(&items[0]);
        assert_eq!(form.title(), "Edit Menu Item");
        assert_eq!(form.image_url, "/uploads/soup.png");
        assert_eq!(form.price, "6");
    }

    #[test]
    fn test_update_status_puts_then_refetches() {
        let backend = RecordingBackend::new().respond(ORDERS_PATH, ORDERS_JSON);
        let orders = block_on(update_order_status(&backend, 3, OrderStatus::Delivered)).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(
            backend.calls(),
            vec![
                (Method::Put, "/api/food-orders/3/status".to_string()),
                (Method::Get, ORDERS_PATH.to_string()),
            ]
        );
        assert_eq!(
            backend.body_of(Method::Put, "/api/food-orders/3/status").as_deref(),
            Some(r#"{"status":"DELIVERED"}"#)
        );
    }

    #[test]
    fn test_save_uploads_before_writing_item() {
        let backend = RecordingBackend::new().respond(ALL_MENU_ITEMS_PATH, ITEMS_JSON);
        let file = "soup.png".to_string();
        block_on(save_menu_item(&backend, &form(), Some(&file))).unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                (Method::Post, UPLOAD_PATH.to_string()),
                (Method::Post, MENU_ITEMS_PATH.to_string()),
                (Method::Get, ALL_MENU_ITEMS_PATH.to_string()),
            ]
        );
        let body = backend.body_of(Method::Post, MENU_ITEMS_PATH).unwrap();
        assert!(body.contains(r#""imageUrl":"/uploads/soup.png""#));
    }

    #[test]
    fn test_upload_failure_aborts_save() {
        let backend = RecordingBackend::new().fail(
            Method::Post,
            UPLOAD_PATH,
            ApiError::Network("offline".into()),
        );
        let file = "soup.png".to_string();
        let err = block_on(save_menu_item(&backend, &form(), Some(&file))).unwrap_err();
        assert!(matches!(err, SaveMenuItemError::Upload(_)));
        assert_eq!(backend.calls().len(), 1);
    }

    #[test]
    fn test_save_failure_after_upload_leaves_file_uploaded() {
        let mut edit = form();
        edit.id = Some(1);
        let backend = RecordingBackend::new().fail(
            Method::Put,
            "/api/menu-items/1",
            ApiError::from_error_body(500, "Internal Server Error", ""),
        );
        let file = "soup.png".to_string();
        let err = block_on(save_menu_item(&backend, &edit, Some(&file))).unwrap_err();
        assert!(matches!(err, SaveMenuItemError::Save(_)));
        assert_eq!(backend.calls()[0], (Method::Post, UPLOAD_PATH.to_string()));
        assert_eq!(backend.calls().len(), 2);
    }

    #[test]
    fn test_invalid_price_never_uploads() {
        let backend = RecordingBackend::new();
        let mut bad = form();
        bad.price = "six".into();
        let file = "soup.png".to_string();
        let err = block_on(save_menu_item(&backend, &bad, Some(&file))).unwrap_err();
        assert!(matches!(err, SaveMenuItemError::Invalid(_)));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_delete_refetches_all_items() {
        let backend = RecordingBackend::new().respond(ALL_MENU_ITEMS_PATH, "[]");
        let items = block_on(delete_menu_item(&backend, 1)).unwrap();
        assert!(items.is_empty());
        assert_eq!(backend.calls()[0], (Method::Delete, "/api/menu-items/1".to_string()));
    }
}
