//! SeaORM Entity for seller content posts

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seller_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Media URLs as JSON array
    pub media: Json,
    /// "image" or "video"
    pub media_type: String,
    pub tagged_product_id: Option<i32>,
    pub views: i32,
    pub likes: i32,
    pub comments: i32,
    /// Seller ids that liked this post, as JSON array
    pub liked_by: Json,
    pub is_active: bool,
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
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::TaggedProductId",
        to = "super::products::Column::Id"
    )]
    TaggedProduct,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TaggedProduct.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
