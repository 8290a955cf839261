use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeneratedLawBlogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GeneratedLawBlogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GeneratedLawBlogs::SearchTopic)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GeneratedLawBlogs::Title).string().not_null())
                    .col(ColumnDef::new(GeneratedLawBlogs::Content).text().not_null())
                    .col(
                        ColumnDef::new(GeneratedLawBlogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Title uniqueness lives in the store so concurrent generators can't race past it.
        manager
            .create_index(
                Index::create()
                    .name("idx_generated_law_blogs_title_unique")
                    .table(GeneratedLawBlogs::Table)
                    .col(GeneratedLawBlogs::Title)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_generated_law_blogs_created_at")
                    .table(GeneratedLawBlogs::Table)
                    .col(GeneratedLawBlogs::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GeneratedLawBlogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GeneratedLawBlogs {
    Table,
    Id,
    SearchTopic,
    Title,
    Content,
    CreatedAt,
}
