use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `sale_items` table: one line of a sale, tied to the medication sold.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sale_items")]
pub struct Model {
    /// Primary key: Unique identifier for the line item.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Foreign key referencing the sale.
    pub sale_id: i64,

    /// Foreign key referencing the medication sold.
    pub medication_id: i64,

    /// Units sold on this line.
    pub quantity: i32,

    /// Price per unit at the time of sale.
    pub unit_price: Decimal,

    /// Line total (quantity x unit price, minus line-level adjustments).
    pub sub_total: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The sale this line belongs to.
    #[sea_orm(
        belongs_to = "super::sale::Entity",
        from = "Column::SaleId",
        to = "super::sale::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Sale,

    /// The medication sold on this line.
    #[sea_orm(
        belongs_to = "super::medication::Entity",
        from = "Column::MedicationId",
        to = "super::medication::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Medication,
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sale.def()
    }
}

impl Related<super::medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
