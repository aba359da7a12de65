//! Menu browsing: category filter buttons, search box and the in-memory
//! catalog they narrow down.

use std::fmt;

use thiserror::Error;

use crate::api_error::ApiError;
use crate::backend::RestBackend;
use crate::endpoint::Endpoint;
use crate::models::MenuItem;

pub const DEFAULT_FOOD_IMAGE: &str = "/images/default-food.jpg";

/// Display vocabulary for menu categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    Appetizer,
    MainCourse,
    Dessert,
    Beverage,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Appetizer,
        MenuCategory::MainCourse,
        MenuCategory::Dessert,
        MenuCategory::Beverage,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::Appetizer => "Appetizer",
            MenuCategory::MainCourse => "Main Course",
            MenuCategory::Dessert => "Dessert",
            MenuCategory::Beverage => "Beverage",
        }
    }

    /// Key carried by the filter button (`data-category`)
    pub fn key(&self) -> &'static str {
        match self {
            MenuCategory::Appetizer => "appetizers",
            MenuCategory::MainCourse => "main",
            MenuCategory::Dessert => "desserts",
            MenuCategory::Beverage => "drinks",
        }
    }

    pub fn from_key(key: &str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| UnknownCategory(key.to_string()))
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        category
            .map(|c| c.trim().eq_ignore_ascii_case(self.display_name()))
            .unwrap_or(false)
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown menu category: {0}")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(MenuCategory),
}

impl CategoryFilter {
    /// `"all"` clears the filter; any other key must be in the mapping table.
    pub fn from_key(key: &str) -> Result<Self, UnknownCategory> {
        if key.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            MenuCategory::from_key(key).map(CategoryFilter::Only)
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.key(),
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => category.matches(item.category.as_deref()),
        }
    }
}

/// `GET /api/menu-items/available[?category=Main Course]`
pub fn available_items_endpoint(filter: CategoryFilter) -> Endpoint {
    let endpoint = Endpoint::new("/api/menu-items/available");
    match filter {
        CategoryFilter::All => endpoint,
        CategoryFilter::Only(category) => endpoint.with_query("category", category.display_name()),
    }
}

pub async fn load_available_items<B: RestBackend>(
    backend: &B,
    filter: CategoryFilter,
) -> Result<Vec<MenuItem>, ApiError> {
    backend.get_json(&available_items_endpoint(filter)).await
}

pub fn matches_search(item: &MenuItem, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(&term)
        || item
            .description
            .as_deref()
            .map(|d| d.to_lowercase().contains(&term))
            .unwrap_or(false)
}

/// Image path for a menu card, always rooted at `/`.
pub fn image_src(item: &MenuItem) -> String {
    match item.image_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => {
            if url.starts_with('/') || url.starts_with("http://") || url.starts_with("https://") {
                url.to_string()
            } else {
                format!("/{}", url)
            }
        }
        _ => DEFAULT_FOOD_IMAGE.to_string(),
    }
}

/// Everything the menu page knows: the last fetched items plus the active
/// filters. Filtering never goes back to the network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    category: CategoryFilter,
    search: String,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn replace_items(&mut self, items: Vec<MenuItem>) {
        self.items = items;
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Apply a button key. An unknown key leaves the current filter alone.
    pub fn select_category_key(&mut self, key: &str) -> Result<(), UnknownCategory> {
        self.category = CategoryFilter::from_key(key)?;
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn find(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn visible(&self) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| self.category.matches(item))
            .filter(|item| matches_search(item, &self.search))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::RecordingBackend;
    use futures::executor::block_on;

    fn item(id: i64, name: &str, description: &str, category: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: Some(description.to_string()),
            price: 10.0,
            category: Some(category.to_string()),
            image_url: None,
            available: true,
        }
    }

    fn catalog() -> MenuCatalog {
        MenuCatalog::new(vec![
            item(1, "Spring Rolls", "Crispy vegetable rolls", "Appetizer"),
            item(2, "Grilled Salmon", "With lemon butter", "Main Course"),
            item(3, "Cheesecake", "New York style", "dessert"),
            item(4, "Lemonade", "Fresh squeezed lemons", "Beverage"),
        ])
    }

    #[test]
    fn test_category_keys_map_to_display_names() {
        assert_eq!(MenuCategory::from_key("appetizers"), Ok(MenuCategory::Appetizer));
        assert_eq!(MenuCategory::from_key("MAIN"), Ok(MenuCategory::MainCourse));
        assert_eq!(MenuCategory::from_key("desserts"), Ok(MenuCategory::Dessert));
        assert_eq!(MenuCategory::from_key("drinks"), Ok(MenuCategory::Beverage));
    }

    #[test]
    fn test_unknown_category_is_an_error_not_show_all() {
        let mut catalog = catalog();
        catalog.set_category(CategoryFilter::Only(MenuCategory::Dessert));

        let err = catalog.select_category_key("sides").unwrap_err();
        assert_eq!(err, UnknownCategory("sides".to_string()));
        // filter unchanged, still narrowed
        assert_eq!(catalog.visible().len(), 1);
    }

    #[test]
    fn test_category_match_is_case_insensitive_exact() {
        let mut catalog = catalog();
        catalog.select_category_key("desserts").unwrap();
        let visible = catalog.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);

        let partial = item(5, "Main Salad", "", "Main");
        assert!(!CategoryFilter::Only(MenuCategory::MainCourse).matches(&partial));
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let mut catalog = catalog();
        catalog.set_search("  LEMON ");
        let ids: Vec<i64> = catalog.visible().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_search_and_category_combine() {
        let mut catalog = catalog();
        catalog.set_search("lemon");
        catalog.select_category_key("drinks").unwrap();
        let ids: Vec<i64> = catalog.visible().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4]);

        catalog.select_category_key("all").unwrap();
        catalog.set_search("");
        assert_eq!(catalog.visible().len(), 4);
    }

    #[test]
    fn test_available_items_endpoint() {
        assert_eq!(
            available_items_endpoint(CategoryFilter::All).to_string(),
            "/api/menu-items/available"
        );
        let endpoint = available_items_endpoint(CategoryFilter::Only(MenuCategory::MainCourse));
        assert_eq!(endpoint.query_value("category"), Some("Main Course"));
    }

    #[test]
    fn test_image_src_normalisation() {
        let mut menu_item = item(1, "Tea", "", "Beverage");
        assert_eq!(image_src(&menu_item), DEFAULT_FOOD_IMAGE);

        menu_item.image_url = Some("uploads/tea.png".to_string());
        assert_eq!(image_src(&menu_item), "/uploads/tea.png");

        menu_item.image_url = Some("/uploads/tea.png".to_string());
        assert_eq!(image_src(&menu_item), "/uploads/tea.png");

        menu_item.image_url = Some("   ".to_string());
        assert_eq!(image_src(&menu_item), DEFAULT_FOOD_IMAGE);
    }

    #[test]
    fn test_load_available_items_by_category() {
        let backend = RecordingBackend::new().respond(
            "/api/menu-items/available?category=Dessert",
            r#"[{"id": 3, "name": "Tart", "price": 6.0, "category": "Dessert", "available": true}]"#,
        );
        let items = block_on(load_available_items(
            &backend,
            CategoryFilter::Only(MenuCategory::Dessert),
        ))
        .unwrap();
        assert_eq!(items.len(), 1);

        let err = block_on(load_available_items(&backend, CategoryFilter::All)).unwrap_err();
        assert!(err.is_not_found());
    }
}
