use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use serde_json::Value;
use tower::ServiceExt;

use pharmacy_inventory_api::{
    config::AppConfig,
    db,
    entities::{medication, purchase, sale, sale_item},
    handlers::AppServices,
    AppState,
};

/// Helper harness for spinning up an application router backed by a
/// throwaway sqlite database file.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    db_file: String,
}

impl TestApp {
    /// Construct a new test application with fresh database state. Each test
    /// passes its own file name so tests can run in parallel.
    pub async fn new(db_file: &str) -> Self {
        let _ = std::fs::remove_file(db_file);

        let cfg = AppConfig::new(
            format!("sqlite://{db_file}?mode=rwc"),
            "127.0.0.1".to_string(),
            0,
            "test".to_string(),
        );

        let db_pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to open test database");
        db::run_migrations(&db_pool)
            .await
            .expect("failed to run migrations");

        let db_arc = Arc::new(db_pool);
        let services = AppServices::new(db_arc.clone());
        let state = AppState {
            db: db_arc,
            config: cfg,
            services,
        };

        let router = Router::new()
            .nest("/api", pharmacy_inventory_api::api_routes())
            .nest(
                "/health",
                pharmacy_inventory_api::handlers::health::health_router(),
            )
            .with_state(state.clone());

        Self {
            router,
            state,
            db_file: db_file.to_string(),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.state.db
    }

    /// Issue a GET request against the router and decode the JSON body.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not valid JSON")
        };

        (status, value)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_file);
    }
}

pub async fn insert_medication(
    db: &DatabaseConnection,
    name: &str,
    price: Option<Decimal>,
    stock_quantity: Option<i32>,
    reorder_level: Option<i32>,
    expiry_date: Option<NaiveDate>,
) -> i64 {
    let row = medication::ActiveModel {
        branch_id: Set("main".to_string()),
        name: Set(name.to_string()),
        stock_quantity: Set(stock_quantity),
        reorder_level: Set(reorder_level),
        price: Set(price),
        expiry_date: Set(expiry_date),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    medication::Entity::insert(row)
        .exec(db)
        .await
        .expect("failed to insert medication")
        .last_insert_id
}

pub async fn insert_sale(
    db: &DatabaseConnection,
    total_amount: Option<Decimal>,
    payment_method: Option<sale::PaymentMethod>,
    sale_date: NaiveDateTime,
) -> i64 {
    let row = sale::ActiveModel {
        branch_id: Set("main".to_string()),
        total_amount: Set(total_amount),
        payment_method: Set(payment_method),
        sale_date: Set(sale_date),
        ..Default::default()
    };

    sale::Entity::insert(row)
        .exec(db)
        .await
        .expect("failed to insert sale")
        .last_insert_id
}

pub async fn insert_sale_item(
    db: &DatabaseConnection,
    sale_id: i64,
    medication_id: i64,
    quantity: i32,
    unit_price: Decimal,
) -> i64 {
    let row = sale_item::ActiveModel {
        sale_id: Set(sale_id),
        medication_id: Set(medication_id),
        quantity: Set(quantity),
        unit_price: Set(unit_price),
        sub_total: Set(Decimal::from(quantity) * unit_price),
        ..Default::default()
    };

    sale_item::Entity::insert(row)
        .exec(db)
        .await
        .expect("failed to insert sale item")
        .last_insert_id
}

pub async fn insert_purchase(
    db: &DatabaseConnection,
    total_amount: Option<Decimal>,
    purchase_date: NaiveDateTime,
) -> i64 {
    let row = purchase::ActiveModel {
        branch_id: Set("main".to_string()),
        purchase_date: Set(purchase_date),
        total_amount: Set(total_amount),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    purchase::Entity::insert(row)
        .exec(db)
        .await
        .expect("failed to insert purchase")
        .last_insert_id
}
