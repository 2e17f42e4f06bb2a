//! Migration to create the posts table for seller content

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(pk_auto(Posts::Id))
                    .col(integer(Posts::SellerId))
                    .col(string(Posts::Title))
                    .col(text(Posts::Description))
                    .col(json(Posts::Media))
                    .col(string(Posts::MediaType).default("image"))
                    .col(integer_null(Posts::TaggedProductId))
                    .col(integer(Posts::Views).default(0))
                    .col(integer(Posts::Likes).default(0))
                    .col(integer(Posts::Comments).default(0))
                    .col(json(Posts::LikedBy))
                    .col(boolean(Posts::IsActive).default(true))
                    .col(timestamp_with_time_zone(Posts::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Posts::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_seller")
                            .from(Posts::Table, Posts::SellerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the newest-first content feed
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_seller_created_at")
                    .table(Posts::Table)
                    .col(Posts::SellerId)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    SellerId,
    Title,
    Description,
    Media,
    MediaType,
    TaggedProductId,
    Views,
    Likes,
    Comments,
    LikedBy,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
