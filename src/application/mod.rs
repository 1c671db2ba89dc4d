//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository calls,
//! alias generation and validation, and expose a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias creation and resolution

pub mod services;
