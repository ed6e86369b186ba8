use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPost::Pk)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPost::Id).string().not_null())
                    .col(ColumnDef::new(BlogPost::Title).string().not_null())
                    .col(ColumnDef::new(BlogPost::Author).string().not_null())
                    .col(ColumnDef::new(BlogPost::Content).text().not_null())
                    .col(ColumnDef::new(BlogPost::PublicationDate).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Lookups go by the public id; duplicates are allowed.
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_post_id")
                    .table(BlogPost::Table)
                    .col(BlogPost::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPost {
    Table,
    Pk,
    Id,
    Title,
    Author,
    Content,
    PublicationDate,
}
