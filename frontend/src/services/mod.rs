pub mod api;
pub mod config;
pub mod date_utils;
pub mod download;
pub mod logging;
pub mod storage;
