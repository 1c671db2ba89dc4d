//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and maps
//! [`crate::error::AppError`] values to status codes. Storage error details
//! never reach a response body.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
