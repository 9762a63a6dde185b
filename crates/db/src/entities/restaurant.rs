//! Restaurant entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "restaurant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,

    pub address: String,

    pub offers_english_menu: bool,

    pub walk_ins_ok: bool,

    pub accepts_credit_cards: bool,

    #[sea_orm(column_type = "Text")]
    pub notes: String,

    /// Creator user ID
    #[sea_orm(indexed)]
    pub created_by_user_id: i64,

    /// Cuisine ID; 0 means no cuisine was picked
    #[sea_orm(default_value = 0)]
    pub cuisine_id: i64,

    /// Price range ID; 0 means no price range was picked
    #[sea_orm(default_value = 0)]
    pub price_range_id: i64,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedByUserId",
        to = "super::user::Column::Id"
    )]
    CreatedByUser,

    #[sea_orm(has_many = "super::photo_url::Entity")]
    PhotoUrls,

    #[sea_orm(has_many = "super::like::Entity")]
    Likes,

    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedByUser.def()
    }
}

impl Related<super::photo_url::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PhotoUrls.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
