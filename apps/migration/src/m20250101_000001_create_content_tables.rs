//! Creates the news, blog_posts and matches tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(News::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(News::Title).string().not_null())
                    .col(ColumnDef::new(News::Content).text().not_null())
                    .col(ColumnDef::new(News::Excerpt).string().not_null())
                    .col(ColumnDef::new(News::Image).string().not_null())
                    .col(ColumnDef::new(News::Category).string().not_null())
                    .col(ColumnDef::new(News::Date).string().not_null())
                    // Slug uniqueness is expected but deliberately not enforced.
                    .col(ColumnDef::new(News::Slug).string().not_null())
                    .col(ColumnDef::new(News::Featured).boolean().not_null())
                    .col(ColumnDef::new(News::Author).string().not_null())
                    .col(
                        ColumnDef::new(News::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(News::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPosts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::Excerpt).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Image).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Category).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Date).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Slug).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Featured).boolean().not_null())
                    .col(ColumnDef::new(BlogPosts::Author).string().not_null())
                    .col(ColumnDef::new(BlogPosts::ReadTime).integer().not_null())
                    .col(ColumnDef::new(BlogPosts::Tags).json().not_null())
                    .col(
                        ColumnDef::new(BlogPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matches::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Matches::Game).string().not_null())
                    .col(ColumnDef::new(Matches::Tournament).string().not_null())
                    .col(ColumnDef::new(Matches::Date).string().not_null())
                    .col(ColumnDef::new(Matches::Time).string().not_null())
                    .col(ColumnDef::new(Matches::TeamAName).string().not_null())
                    .col(ColumnDef::new(Matches::TeamALogo).string().not_null())
                    .col(ColumnDef::new(Matches::TeamAScore).integer())
                    .col(ColumnDef::new(Matches::TeamBName).string().not_null())
                    .col(ColumnDef::new(Matches::TeamBLogo).string().not_null())
                    .col(ColumnDef::new(Matches::TeamBScore).integer())
                    .col(ColumnDef::new(Matches::Status).string().not_null())
                    .col(ColumnDef::new(Matches::Result).string())
                    .col(
                        ColumnDef::new(Matches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Matches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing and lookup endpoints order and filter on these columns.
        manager
            .create_index(
                Index::create()
                    .name("idx_news_slug")
                    .table(News::Table)
                    .col(News::Slug)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_slug")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Slug)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_news_featured")
                    .table(News::Table)
                    .col(News::Featured)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_featured")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Featured)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_matches_status")
                    .table(Matches::Table)
                    .col(Matches::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
    Title,
    Content,
    Excerpt,
    Image,
    Category,
    Date,
    Slug,
    Featured,
    Author,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Content,
    Excerpt,
    Image,
    Category,
    Date,
    Slug,
    Featured,
    Author,
    ReadTime,
    Tags,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Matches {
    Table,
    Id,
    Game,
    Tournament,
    Date,
    Time,
    TeamAName,
    TeamALogo,
    TeamAScore,
    TeamBName,
    TeamBLogo,
    TeamBScore,
    Status,
    Result,
    CreatedAt,
    UpdatedAt,
}
