use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the dashboard API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pharmacy Inventory API",
        version = "0.1.0",
        description = r#"
# Pharmacy Inventory API

Backend for pharmacy inventory and sales management, exposing the dashboard
statistics aggregation surface.

## Dashboard statistics

`GET /api/dashboard/stats` returns a complete snapshot of derived business
metrics computed from the current medications, sales, and purchases records:
basic KPIs, a 12-month sales/purchase trend, revenue by payment method, the
top-10 selling medications, the stock level distribution, and an expiry
forecast. The snapshot is recomputed on every call; either a complete,
internally consistent snapshot is returned or the request fails with a 5xx.

## Error Handling

Failures use a consistent error body:

```json
{
  "error": "Internal Server Error",
  "message": "Dashboard aggregation failed",
  "timestamp": "2025-03-01T00:00:00Z"
}
```
"#
    ),
    paths(crate::handlers::dashboard::get_dashboard_stats),
    components(schemas(
        crate::handlers::dashboard::DashboardStatsResponse,
        crate::services::dashboard::DashboardStats,
        crate::services::dashboard::MonthlyTrendEntry,
        crate::services::dashboard::PaymentMethodRevenue,
        crate::services::dashboard::TopSellingMedication,
        crate::services::dashboard::StockLevelDistribution,
        crate::services::dashboard::ExpiryForecast,
        crate::services::dashboard::ExpiringMedication,
        crate::errors::ErrorResponse,
    )),
    tags(
        (name = "dashboard", description = "Derived dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Swagger UI mounted at `/swagger-ui`, serving the OpenAPI document from
/// `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
