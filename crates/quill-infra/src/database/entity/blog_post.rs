//! Blog post entity for SeaORM.
//!
//! `pk` plays the role of the document identifier the store assigns; the
//! caller-supplied `id` slug is indexed but not unique.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use quill_core::domain::{BlogPost, PostField};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pk: i64,
    pub id: String,
    pub title: String,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub publication_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<PostField> for Column {
    fn from(field: PostField) -> Self {
        match field {
            PostField::Id => Column::Id,
            PostField::Title => Column::Title,
            PostField::Author => Column::Author,
            PostField::Content => Column::Content,
            PostField::PublicationDate => Column::PublicationDate,
        }
    }
}

/// Conversion from SeaORM Model to Domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            content: model.content,
            publication_date: model.publication_date,
        }
    }
}

/// Conversion from Domain BlogPost to a fresh ActiveModel; `pk` is left to the database.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            pk: NotSet,
            id: Set(post.id),
            title: Set(post.title),
            author: Set(post.author),
            content: Set(post.content),
            publication_date: Set(post.publication_date),
        }
    }
}
