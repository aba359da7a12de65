pub mod use_financial_reports;
pub mod use_manager_reports;
pub mod use_menu;
pub mod use_reservation_search;
pub mod use_reservations;
pub mod use_restaurant;
pub mod use_toast;
pub mod use_wallet;
