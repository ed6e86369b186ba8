//! Field projections for list queries.

use std::str::FromStr;

use crate::error::DomainError;

/// A single [`BlogPost`](super::BlogPost) field, addressed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostField {
    Id,
    Title,
    Author,
    Content,
    PublicationDate,
}

impl PostField {
    pub const ALL: [PostField; 5] = [
        PostField::Id,
        PostField::Title,
        PostField::Author,
        PostField::Content,
        PostField::PublicationDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostField::Id => "id",
            PostField::Title => "title",
            PostField::Author => "author",
            PostField::Content => "content",
            PostField::PublicationDate => "publication_date",
        }
    }
}

impl FromStr for PostField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown post field '{s}'")))
    }
}

/// Non-empty, duplicate-free set of fields to return from a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    fields: Vec<PostField>,
}

impl Projection {
    /// Build from a list of fields. Duplicates are dropped, first occurrence wins.
    pub fn new(fields: impl IntoIterator<Item = PostField>) -> Result<Self, DomainError> {
        let mut unique = Vec::new();
        for field in fields {
            if !unique.contains(&field) {
                unique.push(field);
            }
        }

        if unique.is_empty() {
            return Err(DomainError::Validation(
                "projection must name at least one field".to_string(),
            ));
        }

        Ok(Self { fields: unique })
    }

    /// Parse a comma separated list such as `title,author`.
    pub fn parse(list: &str) -> Result<Self, DomainError> {
        let fields = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PostField::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(fields)
    }

    pub fn fields(&self) -> &[PostField] {
        &self.fields
    }

    pub fn contains(&self, field: PostField) -> bool {
        self.fields.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_dedupes() {
        let projection = Projection::parse(" title , author,title").unwrap();
        assert_eq!(projection.fields(), &[PostField::Title, PostField::Author]);
    }

    #[test]
    fn parse_rejects_unknown_field() {
        let err = Projection::parse("title,rating").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("rating")));
    }

    #[test]
    fn empty_projection_is_rejected() {
        assert!(Projection::parse(" , ").is_err());
        assert!(Projection::new([]).is_err());
    }
}
