pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

pub use api::router;
pub use config::AppConfig;
pub use models::AppState;
