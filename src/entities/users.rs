//! SeaORM Entity for sellers
//!
//! Social links, bank details and KYC documents are flattened into columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Lower-cased, trimmed login email
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// "seller" or "admin"
    pub role: String,
    pub city: String,
    pub followers: i32,
    pub store_name: String,
    #[sea_orm(column_type = "Text")]
    pub store_description: String,
    pub profile_image: String,
    pub instagram: String,
    pub youtube: String,
    pub facebook: String,
    pub twitter: String,
    pub onboarding_step: i32,
    pub is_verified: bool,
    pub bank_account_number: String,
    pub bank_ifsc: String,
    pub bank_account_holder: String,
    /// Uploaded document URLs, empty until uploaded
    pub document_aadhar: String,
    pub document_pan: String,
    pub document_gst: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
