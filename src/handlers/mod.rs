pub mod common;
pub mod dashboard;
pub mod health;

use crate::db::DbPool;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub dashboard: Arc<crate::services::dashboard::DashboardService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        let dashboard = Arc::new(crate::services::dashboard::DashboardService::new(db_pool));

        Self { dashboard }
    }
}
