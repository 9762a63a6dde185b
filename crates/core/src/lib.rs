//! Core business logic for kuchikomi.

pub mod services;

pub use services::*;
