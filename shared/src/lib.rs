//! Page logic and backend records for the hotel console.
//!
//! Nothing in here touches the DOM; the frontend crate renders what these
//! modules compute and drives the workflows through its `RestBackend`.

pub mod api_error;
pub mod backend;
pub mod cart;
pub mod endpoint;
pub mod finance;
pub mod format;
pub mod manager_reports;
pub mod menu;
pub mod models;
pub mod reservations;
pub mod restaurant;
pub mod storage;
pub mod validation;
pub mod wallet;

pub use api_error::ApiError;
pub use backend::{Method, RestBackend};
pub use endpoint::Endpoint;
pub use models::*;
pub use storage::KeyValueStore;
pub use validation::FieldErrors;
