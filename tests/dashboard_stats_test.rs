mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use rust_decimal_macros::dec;
use serde_json::json;

use common::{insert_medication, insert_purchase, insert_sale, insert_sale_item, TestApp};
use pharmacy_inventory_api::entities::sale::PaymentMethod;

/// Label format the snapshot uses for trend entries.
fn month_label(date: NaiveDate) -> String {
    format!(
        "{} {}",
        date.format("%B").to_string().to_uppercase(),
        date.year()
    )
}

#[tokio::test]
async fn dashboard_stats_snapshot_over_seeded_data() {
    let app = TestApp::new("dashboard_snapshot_test.db").await;
    let db = app.db();
    let today = Utc::now().date_naive();
    let noon = today.and_hms_opt(12, 0, 0).unwrap();

    // Medications: one low-stock and expiring, one out of stock, one
    // expired batch still on the shelf, one with no stock bookkeeping.
    let amoxicillin = insert_medication(
        db,
        "Amoxicillin 500mg",
        Some(dec!(10.25)),
        Some(5),
        Some(10),
        Some(today + Duration::days(10)),
    )
    .await;
    insert_medication(db, "Ibuprofen 200mg", Some(dec!(20.50)), Some(0), Some(5), None).await;
    let paracetamol = insert_medication(
        db,
        "Paracetamol 500mg",
        Some(dec!(4.75)),
        Some(100),
        Some(10),
        Some(today - Duration::days(5)),
    )
    .await;
    insert_medication(
        db,
        "Cetirizine 10mg",
        None,
        None,
        None,
        Some(today + Duration::days(45)),
    )
    .await;

    // Sales, all in the current month.
    let cash_sale = insert_sale(db, Some(dec!(100.25)), Some(PaymentMethod::Cash), noon).await;
    insert_sale(db, Some(dec!(50.25)), Some(PaymentMethod::Cash), noon).await;
    insert_sale(db, Some(dec!(30.00)), Some(PaymentMethod::Card), noon).await;
    insert_sale(db, None, Some(PaymentMethod::Card), noon).await;
    insert_sale(db, Some(dec!(10.50)), None, noon).await;

    insert_sale_item(db, cash_sale, amoxicillin, 3, dec!(10.25)).await;
    insert_sale_item(db, cash_sale, paracetamol, 10, dec!(4.75)).await;
    insert_sale_item(db, cash_sale, amoxicillin, 1, dec!(10.25)).await;

    // Purchases: one this month, one three months back.
    insert_purchase(db, Some(dec!(80.75)), noon).await;
    let three_months_back = today
        .checked_sub_months(Months::new(3))
        .unwrap()
        .with_day(1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    insert_purchase(db, Some(dec!(40.00)), three_months_back).await;

    let (status, body) = app.get_json("/api/dashboard/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let data = &body["data"];
    assert_eq!(data["totalSales"], json!("191.00"));
    assert_eq!(data["totalPurchases"], json!("120.75"));
    assert_eq!(data["stockValue"], json!("526.25"));
    assert_eq!(data["expiryLoss"], json!("475.00"));
    // Zero-stock rows with a reorder level count as low stock too.
    assert_eq!(data["lowStockItems"], json!(2));
    assert_eq!(data["expiringItems"], json!(1));

    let revenue = data["revenueByPaymentMethod"]
        .as_array()
        .expect("revenueByPaymentMethod is an array");
    assert_eq!(
        revenue,
        &vec![
            json!({"method": "CARD", "amount": "30.00"}),
            json!({"method": "CASH", "amount": "150.50"}),
        ]
    );

    let top_selling = data["topSellingMedications"]
        .as_array()
        .expect("topSellingMedications is an array");
    assert_eq!(top_selling.len(), 2);
    assert_eq!(top_selling[0]["name"], json!("Paracetamol 500mg"));
    assert_eq!(top_selling[0]["totalSold"], json!("47.50"));
    assert_eq!(top_selling[0]["stockQuantity"], json!(100));
    assert_eq!(top_selling[1]["name"], json!("Amoxicillin 500mg"));
    assert_eq!(top_selling[1]["totalSold"], json!("41.00"));

    assert_eq!(
        data["stockLevelDistribution"],
        json!({"outOfStock": 1, "lowStock": 1, "inStock": 1})
    );

    let forecast = &data["expiryForecast"];
    assert_eq!(forecast["expiringIn30Days"], json!(1));
    assert_eq!(forecast["expiringIn60Days"], json!(2));
    assert_eq!(forecast["expiringIn90Days"], json!(2));
    let soon = forecast["soonToExpireList"]
        .as_array()
        .expect("soonToExpireList is an array");
    assert_eq!(soon.len(), 1);
    assert_eq!(soon[0]["name"], json!("Amoxicillin 500mg"));
    assert_eq!(soon[0]["daysToExpire"], json!(10));
    assert_eq!(soon[0]["stockQuantity"], json!(5));
    assert_eq!(
        soon[0]["expiryDate"],
        json!((today + Duration::days(10)).to_string())
    );

    let trend = data["monthlyTrend"]
        .as_array()
        .expect("monthlyTrend is an array");
    assert_eq!(trend.len(), 12);
    assert_eq!(trend[11]["month"], json!(month_label(today)));
    assert_eq!(trend[11]["sales"], json!("191.00"));
    assert_eq!(trend[11]["purchases"], json!("80.75"));
    assert_eq!(
        trend[8]["month"],
        json!(month_label(three_months_back.date()))
    );
    assert_eq!(trend[8]["sales"], json!("0.00"));
    assert_eq!(trend[8]["purchases"], json!("40.00"));
    assert_eq!(trend[0]["sales"], json!("0.00"));
}

#[tokio::test]
async fn dashboard_stats_on_an_empty_database() {
    let app = TestApp::new("dashboard_empty_test.db").await;

    let (status, body) = app.get_json("/api/dashboard/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let data = &body["data"];
    assert_eq!(data["totalSales"], json!("0.00"));
    assert_eq!(data["totalPurchases"], json!("0.00"));
    assert_eq!(data["stockValue"], json!("0.00"));
    assert_eq!(data["expiryLoss"], json!("0.00"));
    assert_eq!(data["lowStockItems"], json!(0));
    assert_eq!(data["expiringItems"], json!(0));
    assert_eq!(data["revenueByPaymentMethod"], json!([]));
    assert_eq!(data["topSellingMedications"], json!([]));
    assert_eq!(
        data["stockLevelDistribution"],
        json!({"outOfStock": 0, "lowStock": 0, "inStock": 0})
    );
    assert_eq!(data["expiryForecast"]["soonToExpireList"], json!([]));

    let trend = data["monthlyTrend"]
        .as_array()
        .expect("monthlyTrend is an array");
    assert_eq!(trend.len(), 12);
    assert!(trend
        .iter()
        .all(|entry| entry["sales"] == json!("0.00") && entry["purchases"] == json!("0.00")));
}

#[tokio::test]
async fn dashboard_stats_repeat_calls_are_identical() {
    let app = TestApp::new("dashboard_idempotent_test.db").await;
    let db = app.db();
    let today = Utc::now().date_naive();
    let noon = today.and_hms_opt(12, 0, 0).unwrap();

    let med = insert_medication(
        db,
        "Metformin 850mg",
        Some(dec!(7.25)),
        Some(40),
        Some(10),
        Some(today + Duration::days(20)),
    )
    .await;
    let sale = insert_sale(db, Some(dec!(21.75)), Some(PaymentMethod::MobileMoney), noon).await;
    insert_sale_item(db, sale, med, 3, dec!(7.25)).await;
    insert_purchase(db, Some(dec!(290.00)), noon).await;

    let (first_status, first_body) = app.get_json("/api/dashboard/stats").await;
    let (second_status, second_body) = app.get_json("/api/dashboard/stats").await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body, second_body);
}

#[tokio::test]
async fn liveness_probe_is_always_up() {
    let app = TestApp::new("health_liveness_test.db").await;

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("up"));
}

#[tokio::test]
async fn readiness_probe_reports_database_up() {
    let app = TestApp::new("health_readiness_test.db").await;

    let (status, body) = app.get_json("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ready"));
    assert_eq!(body["checks"]["database"]["status"], json!("up"));
}
