//! Pharmacy Inventory API Library
//!
//! This crate provides the core functionality for the pharmacy inventory API:
//! the dashboard statistics aggregation surface over the medications, sales,
//! and purchases data.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod queries;
pub mod services;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

/// Routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/dashboard", handlers::dashboard::dashboard_router())
}
