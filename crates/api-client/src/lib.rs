//! Client for the municipal protocol backend.
//!
//! The backend's routes, field names, and credential scheme are a fixed
//! contract; this crate wraps them behind the typed [`ProtocolApi`] trait
//! so the rest of the application (and its tests) never touch HTTP
//! directly.

pub mod api;
pub mod config;
pub mod digest;

pub use api::{FileUpload, HttpApi, ProtocolApi};
pub use config::ApiConfig;
