//! Mountain Risk API Library

pub mod assessment;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod reports;
pub mod suggestions;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
