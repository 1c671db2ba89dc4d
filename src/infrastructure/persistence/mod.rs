//! URL repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryUrlRepository`] - Process-local storage behind a reader/writer lock
//! - [`PgUrlRepository`] - PostgreSQL storage using SQLx
//!
//! [`pool::connect`] builds the PostgreSQL pool and runs migrations.

pub mod memory_url_repository;
pub mod pg_url_repository;
pub mod pool;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
