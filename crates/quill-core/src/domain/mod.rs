//! Domain entities - the core business objects.

mod post;
mod projection;
mod samples;

pub use post::{BlogPost, PartialPost};
pub use projection::{PostField, Projection};
pub use samples::sample_posts;
