//! SeaORM Entity for seller products

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning seller (users.id)
    pub seller_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
    pub original_price: f64,
    /// One of the ProductCategory values
    pub category: String,
    pub subcategory: String,
    pub size: String,
    pub material: String,
    pub stock: i32,
    /// Image URLs as JSON array
    pub images: Json,
    /// Color names as JSON array
    pub colors: Json,
    /// Free-form tags as JSON array
    pub tags: Json,
    pub units_sold: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub is_cod: bool,
    pub is_returnable: bool,
    pub delivery_time: String,
    pub shipping_cost: f64,
    pub rating_average: f64,
    pub rating_count: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SellerId",
        to = "super::users::Column::Id"
    )]
    Seller,
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
    #[sea_orm(has_many = "super::posts::Entity")]
    Posts,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
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
