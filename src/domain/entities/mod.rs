//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A stored alias to long URL mapping
//! - [`NewUrl`] - Candidate mapping submitted for creation

pub mod url;

pub use url::{NewUrl, UrlRecord};
