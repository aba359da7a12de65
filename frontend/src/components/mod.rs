pub mod financial_reports;
pub mod form_feedback;
pub mod manager_reports;
pub mod menu_page;
pub mod reservation_search;
pub mod reservations_page;
pub mod restaurant;
pub mod toast;
pub mod wallet;
