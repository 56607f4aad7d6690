#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, Utc};
use energy_catalog::entities::sea_orm_active_enums::{ScenarioType, SeverityLevel};
use energy_catalog::entities::{data_alerts, scenarios};
use energy_catalog::{router, AppState};
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router backed by a mock Postgres connection
pub fn test_app(db: DatabaseConnection) -> Router {
    router(AppState { db: Arc::new(db) })
}

pub fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

/// Send one request and decode the JSON body (Null for an empty body)
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn sample_scenario() -> scenarios::Model {
    scenarios::Model {
        id: 3,
        name: "Gulf Coast Category 4".to_string(),
        description: "Landfall near Port Arthur".to_string(),
        scenario_type: ScenarioType::Hurricane,
        severity_level: SeverityLevel::High,
        start_date: NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
        hurricane_category: Some(4),
        affected_regions: json!(["PADD 3"]),
        production_impact_pct: dec!(-18.50),
        refining_capacity_impact_pct: dec!(-24.00),
        import_disruption_pct: dec!(0),
        parameters: json!({}),
        is_active: true,
        created_by: None,
        created_at: Utc::now().fixed_offset(),
    }
}

pub fn sample_alert() -> data_alerts::Model {
    data_alerts::Model {
        id: 1,
        alert_name: "Crude stocks below 400 MMbbl".to_string(),
        alert_type: "threshold".to_string(),
        product_type: None,
        threshold_value: Some(dec!(400000)),
        threshold_operator: Some("<".to_string()),
        check_frequency_minutes: 1440,
        cooldown_hours: 24,
        severity_level: SeverityLevel::High,
        is_active: true,
        last_triggered: None,
        created_at: Utc::now().fixed_offset(),
    }
}
