//! # Quill Core
//!
//! The domain layer of the Quill blog backend.
//! This crate contains the post model and the ports infrastructure must implement;
//! it has no database or HTTP dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
