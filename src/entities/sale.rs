use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How a sale was paid for. Stored as the tag name, matching the legacy
/// string-valued column.
#[derive(
    Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "CASH")]
    Cash,
    #[sea_orm(string_value = "CARD")]
    Card,
    #[sea_orm(string_value = "MOBILE_MONEY")]
    MobileMoney,
    #[sea_orm(string_value = "INSURANCE")]
    Insurance,
}

/// The `sales` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    /// Primary key: Unique identifier for the sale.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Branch (tenant/location) the sale was made at.
    pub branch_id: String,

    /// Grand total of the sale.
    pub total_amount: Option<Decimal>,

    /// Tax portion of the total.
    pub tax_amount: Option<Decimal>,

    /// Discount applied to the sale.
    pub discount: Option<Decimal>,

    /// Payment method used; absent for legacy rows recorded before the
    /// column existed.
    pub payment_method: Option<PaymentMethod>,

    /// Timestamp the sale was made.
    pub sale_date: NaiveDateTime,

    /// Walk-in customer name, if captured.
    pub customer_name: Option<String>,

    /// Walk-in customer phone, if captured.
    pub customer_phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A sale has many line items.
    #[sea_orm(has_many = "super::sale_item::Entity")]
    SaleItems,
}

impl Related<super::sale_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SaleItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
