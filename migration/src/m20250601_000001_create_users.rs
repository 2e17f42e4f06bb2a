//! Migration to create the users table holding seller accounts and their
//! onboarding profile.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Name))
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::PasswordHash))
                    .col(string(Users::Role).default("seller"))
                    .col(string(Users::City).default(""))
                    .col(integer(Users::Followers).default(0))
                    .col(string(Users::StoreName).default(""))
                    .col(text(Users::StoreDescription).default(""))
                    .col(string(Users::ProfileImage).default(""))
                    .col(string(Users::Instagram).default(""))
                    .col(string(Users::Youtube).default(""))
                    .col(string(Users::Facebook).default(""))
                    .col(string(Users::Twitter).default(""))
                    .col(integer(Users::OnboardingStep).default(1))
                    .col(boolean(Users::IsVerified).default(false))
                    .col(string(Users::BankAccountNumber).default(""))
                    .col(string(Users::BankIfsc).default(""))
                    .col(string(Users::BankAccountHolder).default(""))
                    .col(string(Users::DocumentAadhar).default(""))
                    .col(string(Users::DocumentPan).default(""))
                    .col(string(Users::DocumentGst).default(""))
                    .col(timestamp_with_time_zone(Users::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Users::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Role,
    City,
    Followers,
    StoreName,
    StoreDescription,
    ProfileImage,
    Instagram,
    Youtube,
    Facebook,
    Twitter,
    OnboardingStep,
    IsVerified,
    BankAccountNumber,
    BankIfsc,
    BankAccountHolder,
    DocumentAadhar,
    DocumentPan,
    DocumentGst,
    CreatedAt,
    UpdatedAt,
}
