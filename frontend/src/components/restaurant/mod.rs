pub mod menu_item_modal;
pub mod menu_table;
pub mod orders_table;
pub mod page;

pub use page::RestaurantDashboard;
