//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations. Implementations live in
//! `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for testing.

pub mod error;
pub mod url_repository;

pub use error::RepositoryError;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
