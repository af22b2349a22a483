//! Read-only queries feeding the dashboard aggregation.
//!
//! No transaction spans these reads: a snapshot assembled from them is
//! best-effort-consistent, not atomic.

use chrono::NaiveDateTime;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::entities::{medication, purchase, sale, sale_item};

pub async fn list_all_medications(
    db: &DatabaseConnection,
) -> Result<Vec<medication::Model>, DbErr> {
    medication::Entity::find().all(db).await
}

/// All sale line items. The medication-to-line-items association is
/// materialized by the caller grouping these by `medication_id`.
pub async fn list_all_sale_items(db: &DatabaseConnection) -> Result<Vec<sale_item::Model>, DbErr> {
    sale_item::Entity::find().all(db).await
}

pub async fn list_all_sales(db: &DatabaseConnection) -> Result<Vec<sale::Model>, DbErr> {
    sale::Entity::find().all(db).await
}

/// Sales whose `sale_date` falls within `[start, end]`, bounds inclusive.
pub async fn list_sales_between(
    db: &DatabaseConnection,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<sale::Model>, DbErr> {
    sale::Entity::find()
        .filter(sale::Column::SaleDate.between(start, end))
        .all(db)
        .await
}

pub async fn list_all_purchases(db: &DatabaseConnection) -> Result<Vec<purchase::Model>, DbErr> {
    purchase::Entity::find().all(db).await
}

/// Purchases whose `purchase_date` falls within `[start, end]`, bounds inclusive.
pub async fn list_purchases_between(
    db: &DatabaseConnection,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<purchase::Model>, DbErr> {
    purchase::Entity::find()
        .filter(purchase::Column::PurchaseDate.between(start, end))
        .all(db)
        .await
}
