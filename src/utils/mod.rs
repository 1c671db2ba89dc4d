//! Utility functions for alias generation, URL validation, and storage errors.
//!
//! - [`alias`] - Alias generator strategies
//! - [`url_validator`] - Absolute URL validation
//! - [`db_error`] - SQLx error classification

pub mod alias;
pub mod db_error;
pub mod url_validator;
