//! Text completion providers.

mod openai;

pub use openai::{OpenAiCompletionClient, OpenAiConfig};
