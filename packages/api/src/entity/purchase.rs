//! `SeaORM` Entity for logged grocery purchases

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One purchased item as entered through the add-item form.
///
/// Every data column is nullable; required fields are enforced at the form
/// layer, not by the schema.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub product: Option<String>,
    #[sea_orm(nullable)]
    pub price: Option<f64>,
    /// Purchase date, already normalized to a calendar date.
    #[sea_orm(nullable)]
    pub date: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub store: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub category: Option<String>,
    #[sea_orm(nullable)]
    pub volume: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub units: Option<String>,
    /// Whether the item was bought on special.
    #[sea_orm(nullable)]
    pub special: Option<bool>,
    #[sea_orm(column_type = "Text", nullable)]
    pub brand: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
