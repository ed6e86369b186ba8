use serde::{Deserialize, Serialize};

use super::projection::{PostField, Projection};

/// Blog post entity.
///
/// `id` is a caller-supplied slug, not a storage-generated key. Nothing
/// enforces its uniqueness; lookups return the first stored match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub publication_date: String,
}

impl BlogPost {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        publication_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            content: content.into(),
            publication_date: publication_date.into(),
        }
    }

    /// Keep only the fields named by `projection`.
    pub fn project(&self, projection: &Projection) -> PartialPost {
        let pick = |field: PostField, value: &String| {
            projection.contains(field).then(|| value.clone())
        };

        PartialPost {
            id: pick(PostField::Id, &self.id),
            title: pick(PostField::Title, &self.title),
            author: pick(PostField::Author, &self.author),
            content: pick(PostField::Content, &self.content),
            publication_date: pick(PostField::PublicationDate, &self.publication_date),
        }
    }
}

/// A post limited to a projection. Unselected fields are omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
}
