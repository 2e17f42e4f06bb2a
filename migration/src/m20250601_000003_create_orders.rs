//! Migration to create the orders table
//!
//! Orders keep a plain product_id reference without a foreign key so that a
//! seller can remove a product without losing its sales history.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer(Orders::SellerId))
                    .col(integer(Orders::ProductId))
                    .col(string(Orders::OrderNumber).unique_key())
                    .col(integer(Orders::Quantity))
                    .col(double(Orders::Price))
                    .col(double(Orders::TotalAmount))
                    .col(string(Orders::Status).default("pending"))
                    .col(string(Orders::CustomerName))
                    .col(string(Orders::CustomerEmail))
                    .col(string(Orders::CustomerPhone))
                    .col(text(Orders::CustomerAddress))
                    .col(string(Orders::PaymentMethod).default("cod"))
                    .col(string(Orders::PaymentStatus).default("pending"))
                    .col(string(Orders::TrackingNumber).default(""))
                    .col(text(Orders::Notes).default(""))
                    .col(timestamp_with_time_zone(Orders::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Orders::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_seller")
                            .from(Orders::Table, Orders::SellerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the seller order list and pending counts
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_seller_status")
                    .table(Orders::Table)
                    .col(Orders::SellerId)
                    .col(Orders::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_product")
                    .table(Orders::Table)
                    .col(Orders::ProductId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    SellerId,
    ProductId,
    OrderNumber,
    Quantity,
    Price,
    TotalAmount,
    Status,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    CustomerAddress,
    PaymentMethod,
    PaymentStatus,
    TrackingNumber,
    Notes,
    CreatedAt,
    UpdatedAt,
}
