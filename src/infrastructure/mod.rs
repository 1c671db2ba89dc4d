//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete storage backends.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory and PostgreSQL repository implementations

pub mod persistence;
