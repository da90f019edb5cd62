//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → api.rs (assess-risk, generate-report, location-suggestions)
//!         or ServeDir fallback (static assets)
//!     → response.rs / error.rs (JSON envelopes)
//!     → Send to client
//! ```

pub mod api;
pub mod error;
pub mod request;
pub mod response;
pub mod server;

pub use error::{ApiError, HandlerError};
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
