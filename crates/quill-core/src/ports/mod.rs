//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod completion;
mod repository;

pub use completion::{CompletionClient, CompletionError};
pub use repository::BlogRepository;
