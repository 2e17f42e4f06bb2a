//! Migration to create the products table (seller catalog)

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(integer(Products::SellerId))
                    .col(string(Products::Title))
                    .col(text(Products::Description).default(""))
                    .col(double(Products::Price))
                    .col(double(Products::OriginalPrice).default(0.0))
                    .col(string(Products::Category))
                    .col(string(Products::Subcategory).default(""))
                    .col(string(Products::Size).default(""))
                    .col(string(Products::Material).default(""))
                    .col(integer(Products::Stock).default(0))
                    .col(json(Products::Images))
                    .col(json(Products::Colors))
                    .col(json(Products::Tags))
                    .col(integer(Products::UnitsSold).default(0))
                    .col(boolean(Products::IsActive).default(true))
                    .col(boolean(Products::IsFeatured).default(false))
                    .col(boolean(Products::IsCod).default(false))
                    .col(boolean(Products::IsReturnable).default(false))
                    .col(string(Products::DeliveryTime).default("3-5 days"))
                    .col(double(Products::ShippingCost).default(0.0))
                    .col(double(Products::RatingAverage).default(0.0))
                    .col(integer(Products::RatingCount).default(0))
                    .col(timestamp_with_time_zone(Products::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Products::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_seller")
                            .from(Products::Table, Products::SellerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Catalog listing and category rollups are always per seller
        manager
            .create_index(
                Index::create()
                    .name("idx_products_seller_category")
                    .table(Products::Table)
                    .col(Products::SellerId)
                    .col(Products::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    SellerId,
    Title,
    Description,
    Price,
    OriginalPrice,
    Category,
    Subcategory,
    Size,
    Material,
    Stock,
    Images,
    Colors,
    Tags,
    UnitsSold,
    IsActive,
    IsFeatured,
    IsCod,
    IsReturnable,
    DeliveryTime,
    ShippingCost,
    RatingAverage,
    RatingCount,
    CreatedAt,
    UpdatedAt,
}
