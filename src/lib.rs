// src/lib.rs

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

pub mod entities {
    pub mod prelude;
    pub mod sea_orm_active_enums;
    pub mod eia_data_points;
    pub mod steo_data;
    pub mod psm_data;
    pub mod weekly_data;
    pub mod supply_disposition;
    pub mod scenarios;
    pub mod scenario_impacts;
    pub mod price_data;
    pub mod price_forecasts;
    pub mod seasonal_patterns;
    pub mod hurricane_historical;
    pub mod dashboard_config;
    pub mod report_templates;
    pub mod data_alerts;
}

pub mod models {
    pub mod dashboard;
    pub mod data_point;
    pub mod error;
    pub mod scenario;
    pub mod supply_disposition;
}

pub mod services {
    pub mod alerts;
    pub mod dashboard;
    pub mod data_points;
    pub mod scenarios;
    pub mod supply_disposition;
}

pub mod handlers {
    pub mod alerts;
    pub mod dashboard;
    pub mod data_points;
    pub mod scenarios;
    pub mod supply_disposition;
}

pub mod config;
pub mod error;
pub mod validation;

async fn hello_catalog() -> &'static str {
    "Energy market data catalog is running"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello_catalog))
        .route("/api/data-points", post(handlers::data_points::create_data_point))
        .route("/api/scenarios", post(handlers::scenarios::create_scenario))
        .route(
            "/api/scenarios/{id}",
            get(handlers::scenarios::get_scenario).patch(handlers::scenarios::update_scenario),
        )
        .route(
            "/api/scenarios/{id}/impacts",
            get(handlers::scenarios::get_scenario_impacts),
        )
        .route(
            "/api/scenarios/{id}/price-forecasts",
            get(handlers::scenarios::get_scenario_price_forecasts),
        )
        .route(
            "/api/dashboard-configs",
            post(handlers::dashboard::create_config),
        )
        .route(
            "/api/supply-disposition/summary",
            get(handlers::supply_disposition::get_summary),
        )
        .route("/api/alerts/{id}/trigger", post(handlers::alerts::trigger_alert))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
