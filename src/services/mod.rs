// Analytics and reporting
pub mod dashboard;
