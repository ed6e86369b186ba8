use async_trait::async_trait;

use crate::domain::{BlogPost, PartialPost, Projection};
use crate::error::RepoError;

/// Blog post store.
///
/// Every method is a single round trip to the backing store. There are no
/// retries and no transactions spanning calls.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// All stored posts in insertion order. Empty store yields an empty vector.
    async fn list_posts(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// All stored posts, limited to the projected fields.
    async fn list_projected(&self, projection: &Projection)
    -> Result<Vec<PartialPost>, RepoError>;

    /// First stored post whose `id` equals `id`.
    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError>;

    /// Store every post as a new document and return how many were written.
    ///
    /// Duplicate ids, within the batch or against stored posts, are accepted.
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError>;
}
