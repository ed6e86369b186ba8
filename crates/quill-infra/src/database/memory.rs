//! In-memory blog repository - used when the server is built without a database driver.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{BlogPost, PartialPost, Projection};
use quill_core::error::RepoError;
use quill_core::ports::BlogRepository;

/// Insertion-ordered post list behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Start with `posts` already stored.
    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn list_projected(
        &self,
        projection: &Projection,
    ) -> Result<Vec<PartialPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().map(|post| post.project(projection)).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError> {
        let count = posts.len() as u64;
        self.posts.write().await.extend(posts);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::sample_posts;

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let repo = InMemoryBlogRepository::new();
        assert!(repo.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inserted_posts_are_listed() {
        let repo = InMemoryBlogRepository::new();
        let posts = sample_posts();

        let inserted = repo.insert_many(posts.clone()).await.unwrap();
        assert_eq!(inserted, 5);

        let ids: Vec<String> = repo
            .list_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        for post in &posts {
            assert!(ids.contains(&post.id));
        }
    }

    #[tokio::test]
    async fn test_empty_batch_writes_nothing() {
        let repo = InMemoryBlogRepository::new();
        assert_eq!(repo.insert_many(Vec::new()).await.unwrap(), 0);
        assert!(repo.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_returns_first_duplicate() {
        let repo = InMemoryBlogRepository::new();
        let first = BlogPost::new("dup", "First", "A", "one", "2023-01-01");
        let second = BlogPost::new("dup", "Second", "B", "two", "2023-01-02");
        repo.insert_many(vec![first.clone(), second]).await.unwrap();

        let found = repo.find_by_id("dup").await.unwrap();
        assert_eq!(found, Some(first.clone()));
        // No intervening writes: same answer.
        assert_eq!(repo.find_by_id("dup").await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_find_by_missing_id() {
        let repo = InMemoryBlogRepository::with_posts(sample_posts());
        assert_eq!(repo.find_by_id("does-not-exist").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_projected() {
        let repo = InMemoryBlogRepository::with_posts(sample_posts());
        let projection = Projection::parse("title,author").unwrap();

        let partial = repo.list_projected(&projection).await.unwrap();
        assert_eq!(partial.len(), 5);
        assert_eq!(partial[0].author.as_deref(), Some("John Doe"));
        assert!(partial.iter().all(|p| p.content.is_none() && p.id.is_none()));
    }
}
