//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use quill_core::domain::{BlogPost, PartialPost, Projection};
use quill_core::error::RepoError;
use quill_core::ports::BlogRepository;

use super::entity::blog_post::{self, ActiveModel, Entity as BlogPostEntity};

/// PostgreSQL blog post repository.
pub struct PostgresBlogRepository {
    pub(crate) db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list_posts(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Pk)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_projected(
        &self,
        projection: &Projection,
    ) -> Result<Vec<PartialPost>, RepoError> {
        let columns = projection
            .fields()
            .iter()
            .map(|&field| blog_post::Column::from(field));

        let rows = BlogPostEntity::find()
            .select_only()
            .columns(columns)
            .order_by_asc(blog_post::Column::Pk)
            .into_json()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| RepoError::Decode(e.to_string())))
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<BlogPost>, RepoError> {
        tracing::debug!(post_id = %id, "Finding blog post by id");

        let result = BlogPostEntity::find()
            .filter(blog_post::Column::Id.eq(id))
            .order_by_asc(blog_post::Column::Pk)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError> {
        if posts.is_empty() {
            return Ok(0);
        }

        let models = posts.into_iter().map(ActiveModel::from);
        let inserted = BlogPostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(inserted, "Inserted blog posts");
        Ok(inserted)
    }
}
