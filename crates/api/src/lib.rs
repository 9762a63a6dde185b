//! HTTP API layer for kuchikomi.
//!
//! This crate provides the REST API:
//!
//! - **Endpoints**: restaurant feed, likes, comments, cuisines, price
//!   ranges, registration and sessions
//! - **Extractors**: bearer-token authentication
//! - **Middleware**: application state, auth
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;

pub use endpoints::router;
