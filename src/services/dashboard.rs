//! Dashboard statistics aggregation.
//!
//! Derives a snapshot of business metrics from the medications, sales, and
//! purchases collections. The service is a pure reader: it never writes,
//! caches, or calls out, and every invocation recomputes the snapshot from
//! the records visible at call time.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::{
    entities::{medication, sale, sale_item},
    errors::ServiceError,
    queries::dashboard_queries,
};

/// Complete dashboard snapshot. Field names are a compatibility surface
/// consumed by the existing dashboard frontend; do not rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of all sale totals.
    pub total_sales: Decimal,
    /// Sum of all purchase totals.
    pub total_purchases: Decimal,
    /// Value of stock on hand (price x quantity over all medications).
    pub stock_value: Decimal,
    /// Value of already-expired stock.
    pub expiry_loss: Decimal,
    /// Medications at or below their reorder level.
    pub low_stock_items: u64,
    /// Medications expiring within the next 30 days.
    pub expiring_items: u64,
    /// Sales vs purchases per calendar month, oldest first, current month last.
    pub monthly_trend: Vec<MonthlyTrendEntry>,
    pub revenue_by_payment_method: Vec<PaymentMethodRevenue>,
    pub top_selling_medications: Vec<TopSellingMedication>,
    pub stock_level_distribution: StockLevelDistribution,
    pub expiry_forecast: ExpiryForecast,
}

/// One calendar month of the sales/purchases trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendEntry {
    /// Label of the form "JANUARY 2025".
    pub month: String,
    pub sales: Decimal,
    pub purchases: Decimal,
}

/// Revenue attributed to one payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodRevenue {
    pub method: String,
    pub amount: Decimal,
}

/// Ranking entry for the top-selling medications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopSellingMedication {
    pub id: i64,
    pub name: String,
    /// Revenue over all sale line items (quantity x unit price).
    pub total_sold: Decimal,
    pub stock_quantity: Option<i32>,
}

/// Counts of medications per stock classification. Buckets are mutually
/// exclusive; rows missing quantity or reorder level are in none of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockLevelDistribution {
    pub out_of_stock: u64,
    pub low_stock: u64,
    pub in_stock: u64,
}

/// Cumulative expiry outlook. Each window is counted from today, so the
/// 60-day figure always includes the 30-day one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryForecast {
    pub expiring_in_30_days: u64,
    pub expiring_in_60_days: u64,
    pub expiring_in_90_days: u64,
    /// Medications expiring within 30 days, soonest first.
    pub soon_to_expire_list: Vec<ExpiringMedication>,
}

/// One soon-to-expire medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringMedication {
    pub id: i64,
    pub name: String,
    pub expiry_date: NaiveDate,
    pub days_to_expire: i64,
    pub stock_quantity: Option<i32>,
}

/// Service computing dashboard statistics
#[derive(Clone)]
pub struct DashboardService {
    db_pool: Arc<DatabaseConnection>,
}

impl DashboardService {
    /// Creates a new dashboard service instance
    pub fn new(db_pool: Arc<DatabaseConnection>) -> Self {
        Self { db_pool }
    }

    /// Computes the full dashboard snapshot.
    ///
    /// Any fetch failure aborts the whole aggregation; a caller either gets
    /// a complete snapshot or an `AggregationFailed` error, never partial
    /// data.
    #[instrument(skip(self))]
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ServiceError> {
        info!("Calculating dashboard statistics");
        let db = &*self.db_pool;
        let today = Utc::now().date_naive();

        let medications = dashboard_queries::list_all_medications(db)
            .await
            .map_err(ServiceError::AggregationFailed)?;
        let sales = dashboard_queries::list_all_sales(db)
            .await
            .map_err(ServiceError::AggregationFailed)?;
        let purchases = dashboard_queries::list_all_purchases(db)
            .await
            .map_err(ServiceError::AggregationFailed)?;
        let sale_items = dashboard_queries::list_all_sale_items(db)
            .await
            .map_err(ServiceError::AggregationFailed)?;

        let items_by_medication = group_items_by_medication(sale_items);
        let monthly_trend = self.monthly_trend(db, today).await?;

        let stats = DashboardStats {
            total_sales: round2(sum_amounts(sales.iter().map(|sale| sale.total_amount))),
            total_purchases: round2(sum_amounts(
                purchases.iter().map(|purchase| purchase.total_amount),
            )),
            stock_value: round2(stock_value(&medications)),
            expiry_loss: round2(expiry_loss(&medications, today)),
            low_stock_items: low_stock_count(&medications),
            expiring_items: expiring_within(&medications, today, 30),
            monthly_trend,
            revenue_by_payment_method: revenue_by_payment_method(&sales),
            top_selling_medications: top_selling_medications(&medications, &items_by_medication),
            stock_level_distribution: stock_level_distribution(&medications),
            expiry_forecast: expiry_forecast(&medications, today),
        };

        info!("Dashboard statistics calculated successfully");
        Ok(stats)
    }

    /// Sales and purchases per calendar month for the 12 months ending with
    /// the current one. Month boundaries come from the actual calendar, not
    /// a fixed 30-day window.
    async fn monthly_trend(
        &self,
        db: &DatabaseConnection,
        today: NaiveDate,
    ) -> Result<Vec<MonthlyTrendEntry>, ServiceError> {
        let mut trend = Vec::with_capacity(12);

        for months_back in (0..12u32).rev() {
            let (window_start, window_end) = month_window(today, months_back);

            let sales = dashboard_queries::list_sales_between(db, window_start, window_end)
                .await
                .map_err(ServiceError::AggregationFailed)?;
            let purchases = dashboard_queries::list_purchases_between(db, window_start, window_end)
                .await
                .map_err(ServiceError::AggregationFailed)?;

            trend.push(MonthlyTrendEntry {
                month: month_label(window_start.date()),
                sales: round2(sum_amounts(sales.iter().map(|sale| sale.total_amount))),
                purchases: round2(sum_amounts(
                    purchases.iter().map(|purchase| purchase.total_amount),
                )),
            });
        }

        Ok(trend)
    }
}

/// Missing monetary values count as zero.
fn amount_or_zero(amount: Option<Decimal>) -> Decimal {
    amount.unwrap_or(Decimal::ZERO)
}

/// Rounds half-up to exactly two decimal places. Applied once per emitted
/// figure; sums must accumulate unrounded values.
fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

fn sum_amounts<I>(amounts: I) -> Decimal
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    amounts.into_iter().map(amount_or_zero).sum()
}

/// Value of the stock a single medication holds.
fn holding_value(med: &medication::Model) -> Decimal {
    amount_or_zero(med.price) * Decimal::from(med.stock_quantity.unwrap_or(0))
}

fn stock_value(medications: &[medication::Model]) -> Decimal {
    medications.iter().map(holding_value).sum()
}

/// Value of stock whose expiry date is strictly in the past.
fn expiry_loss(medications: &[medication::Model], today: NaiveDate) -> Decimal {
    medications
        .iter()
        .filter(|med| med.expiry_date.is_some_and(|expiry| expiry < today))
        .map(holding_value)
        .sum()
}

/// Medications at or below their reorder level. Rows missing either
/// quantity or reorder level are not counted.
fn low_stock_count(medications: &[medication::Model]) -> u64 {
    medications
        .iter()
        .filter(|med| match (med.stock_quantity, med.reorder_level) {
            (Some(quantity), Some(reorder_level)) => quantity <= reorder_level,
            _ => false,
        })
        .count() as u64
}

/// Medications expiring within `[today, today + days]`, bounds inclusive.
fn expiring_within(medications: &[medication::Model], today: NaiveDate, days: i64) -> u64 {
    let window_end = today + Duration::days(days);
    medications
        .iter()
        .filter(|med| {
            med.expiry_date
                .is_some_and(|expiry| expiry >= today && expiry <= window_end)
        })
        .count() as u64
}

/// Groups sale totals by payment method. Sales without a payment method are
/// excluded entirely. A `BTreeMap` keeps the emission order stable so
/// repeated snapshots over unchanged data are identical.
fn revenue_by_payment_method(sales: &[sale::Model]) -> Vec<PaymentMethodRevenue> {
    let mut revenue: BTreeMap<String, Decimal> = BTreeMap::new();

    for sale in sales {
        if let Some(method) = &sale.payment_method {
            *revenue.entry(method.to_string()).or_insert(Decimal::ZERO) +=
                amount_or_zero(sale.total_amount);
        }
    }

    revenue
        .into_iter()
        .map(|(method, amount)| PaymentMethodRevenue {
            method,
            amount: round2(amount),
        })
        .collect()
}

fn group_items_by_medication(
    items: Vec<sale_item::Model>,
) -> HashMap<i64, Vec<sale_item::Model>> {
    let mut by_medication: HashMap<i64, Vec<sale_item::Model>> = HashMap::new();
    for item in items {
        by_medication.entry(item.medication_id).or_default().push(item);
    }
    by_medication
}

/// Top ten medications by line-item revenue. Medications with no sale line
/// items are excluded rather than ranked at zero. Ties on revenue break by
/// ascending medication id.
fn top_selling_medications(
    medications: &[medication::Model],
    items_by_medication: &HashMap<i64, Vec<sale_item::Model>>,
) -> Vec<TopSellingMedication> {
    let mut ranked: Vec<TopSellingMedication> = medications
        .iter()
        .filter_map(|med| {
            let items = items_by_medication.get(&med.id)?;
            if items.is_empty() {
                return None;
            }

            let total_sold: Decimal = items
                .iter()
                .map(|item| Decimal::from(item.quantity) * item.unit_price)
                .sum();

            Some(TopSellingMedication {
                id: med.id,
                name: med.name.clone(),
                total_sold: round2(total_sold),
                stock_quantity: med.stock_quantity,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.total_sold.cmp(&a.total_sold).then(a.id.cmp(&b.id)));
    ranked.truncate(10);
    ranked
}

/// Buckets every classifiable medication into exactly one of out-of-stock,
/// low-stock, or in-stock. Unlike the basic low-stock metric this skips rows
/// missing either field for all three buckets; the asymmetry is inherited
/// behavior the dashboard frontend depends on.
fn stock_level_distribution(medications: &[medication::Model]) -> StockLevelDistribution {
    let mut distribution = StockLevelDistribution {
        out_of_stock: 0,
        low_stock: 0,
        in_stock: 0,
    };

    for med in medications {
        let (quantity, reorder_level) = match (med.stock_quantity, med.reorder_level) {
            (Some(quantity), Some(reorder_level)) => (quantity, reorder_level),
            _ => continue,
        };

        if quantity == 0 {
            distribution.out_of_stock += 1;
        } else if quantity <= reorder_level {
            distribution.low_stock += 1;
        } else {
            distribution.in_stock += 1;
        }
    }

    distribution
}

fn expiry_forecast(medications: &[medication::Model], today: NaiveDate) -> ExpiryForecast {
    let mut soon_to_expire: Vec<ExpiringMedication> = medications
        .iter()
        .filter_map(|med| {
            let expiry = med.expiry_date?;
            if expiry < today || expiry > today + Duration::days(30) {
                return None;
            }
            Some(ExpiringMedication {
                id: med.id,
                name: med.name.clone(),
                expiry_date: expiry,
                days_to_expire: (expiry - today).num_days(),
                stock_quantity: med.stock_quantity,
            })
        })
        .collect();

    // Secondary id key: the scan order of the underlying table is not
    // guaranteed stable between calls.
    soon_to_expire.sort_by_key(|entry| (entry.days_to_expire, entry.id));

    ExpiryForecast {
        expiring_in_30_days: expiring_within(medications, today, 30),
        expiring_in_60_days: expiring_within(medications, today, 60),
        expiring_in_90_days: expiring_within(medications, today, 90),
        soon_to_expire_list: soon_to_expire,
    }
}

/// Start and end instants of the calendar month `months_back` months before
/// `today`: first day at 00:00:00 through last day at 23:59:59.
fn month_window(today: NaiveDate, months_back: u32) -> (NaiveDateTime, NaiveDateTime) {
    let month_start = today
        .checked_sub_months(Months::new(months_back))
        .and_then(|date| date.with_day(1))
        .unwrap_or(today);
    let month_end = month_start
        .checked_add_months(Months::new(1))
        .and_then(|date| date.pred_opt())
        .unwrap_or(month_start);

    (
        month_start.and_hms_opt(0, 0, 0).unwrap(),
        month_end.and_hms_opt(23, 59, 59).unwrap(),
    )
}

/// Uppercase month name plus year, e.g. "JANUARY 2025"; the label format the
/// dashboard frontend was built against.
fn month_label(month_start: NaiveDate) -> String {
    format!(
        "{} {}",
        month_start.format("%B").to_string().to_uppercase(),
        month_start.year()
    )
}
