use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Derived stock classification stored alongside the raw quantities.
#[derive(
    Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    #[sea_orm(string_value = "IN_STOCK")]
    InStock,
    #[sea_orm(string_value = "LOW_STOCK")]
    LowStock,
    #[sea_orm(string_value = "OUT_OF_STOCK")]
    OutOfStock,
}

/// The `medications` table.
///
/// Numeric and date columns are optional on purpose: the dashboard
/// aggregation layer owns the null-to-zero coercion, so the model must not
/// paper over absent values with defaults.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medications")]
pub struct Model {
    /// Primary key: Unique identifier for the medication.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Branch (tenant/location) the record belongs to.
    pub branch_id: String,

    /// Trade name of the medication.
    pub name: String,

    /// Dosage strength, e.g. "500mg".
    pub strength: Option<String>,

    /// Units currently on hand.
    pub stock_quantity: Option<i32>,

    /// Threshold at or below which the medication is due for restocking.
    pub reorder_level: Option<i32>,

    /// Unit sale price.
    pub price: Option<Decimal>,

    /// Manufacturer batch number.
    pub batch_number: Option<String>,

    /// Expiry date of the current batch.
    pub expiry_date: Option<NaiveDate>,

    /// Free-form description.
    pub description: Option<String>,

    /// Stored stock classification.
    pub stock_status: Option<StockStatus>,

    /// Timestamp when the record was created.
    pub created_at: NaiveDateTime,

    /// Timestamp of the last update.
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A medication has many sale line items.
    #[sea_orm(has_many = "super::sale_item::Entity")]
    SaleItems,
}

impl Related<super::sale_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SaleItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
