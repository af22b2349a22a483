use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `purchases` table: stock bought in from suppliers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    /// Primary key: Unique identifier for the purchase.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Branch (tenant/location) the purchase was made for.
    pub branch_id: String,

    /// Timestamp the purchase was made.
    pub purchase_date: NaiveDateTime,

    /// Grand total of the purchase.
    pub total_amount: Option<Decimal>,

    /// Supplier invoice number.
    pub invoice_number: Option<String>,

    /// Free-form notes.
    pub notes: Option<String>,

    /// Timestamp when the record was created.
    pub created_at: NaiveDateTime,

    /// Timestamp of the last update.
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
