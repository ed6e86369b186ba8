#[cfg(test)]
mod tests {
    use crate::database::entity::blog_post;
    use crate::database::postgres_repo::PostgresBlogRepository;
    use std::collections::BTreeMap;

    use quill_core::domain::{BlogPost, PartialPost, Projection, sample_posts};
    use quill_core::ports::BlogRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction, Value};

    fn model(pk: i64, id: &str, author: &str) -> blog_post::Model {
        blog_post::Model {
            pk,
            id: id.to_owned(),
            title: "Test Post".to_owned(),
            author: author.to_owned(),
            content: "Content".to_owned(),
            publication_date: "2023-09-16".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "the-art-of-programming", "John Doe")]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id("the-art-of-programming").await.unwrap();

        let post = result.expect("post should be found");
        assert_eq!(post.id, "the-art-of-programming");
        assert_eq!(post.author, "John Doe");
    }

    #[tokio::test]
    async fn test_find_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog_post::Model>::new()])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        assert!(repo.find_by_id("does-not-exist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_posts_keeps_store_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "a", "Ann"), model(2, "b", "Bob")]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let ids: Vec<String> = repo
            .list_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_list_projected_selects_only_requested_columns() {
        let row = BTreeMap::from([
            ("title", Value::from("T")),
            ("author", Value::from("A")),
        ]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[row]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let projection = Projection::parse("title,author").unwrap();

        let partial = repo.list_projected(&projection).await.unwrap();
        assert_eq!(
            partial,
            vec![PartialPost {
                title: Some("T".to_owned()),
                author: Some("A".to_owned()),
                ..Default::default()
            }]
        );

        assert_eq!(
            repo.db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "blog_post"."title", "blog_post"."author" FROM "blog_post" ORDER BY "blog_post"."pk" ASC"#,
                []
            )]
        );
    }

    #[tokio::test]
    async fn test_insert_many_reports_rows_written() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 5,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        assert_eq!(repo.insert_many(sample_posts()).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_insert_empty_batch_skips_the_database() {
        // No results are queued, so any statement would fail.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PostgresBlogRepository::new(db);

        assert_eq!(repo.insert_many(Vec::new()).await.unwrap(), 0);

        let log = repo.db.into_transaction_log();
        assert!(log.is_empty());
    }
}
