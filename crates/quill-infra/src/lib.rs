//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the database adapters and the completion provider client.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No database driver, in-memory store only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod completion;
pub mod database;

pub use completion::{OpenAiCompletionClient, OpenAiConfig};
pub use database::{DatabaseConfig, InMemoryBlogRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresBlogRepository;
