//! `SeaORM` entity aliases

pub use super::dashboard_config::Entity as DashboardConfig;
pub use super::data_alerts::Entity as DataAlerts;
pub use super::eia_data_points::Entity as EiaDataPoints;
pub use super::hurricane_historical::Entity as HurricaneHistorical;
pub use super::price_data::Entity as PriceData;
pub use super::price_forecasts::Entity as PriceForecasts;
pub use super::psm_data::Entity as PsmData;
pub use super::report_templates::Entity as ReportTemplates;
pub use super::scenario_impacts::Entity as ScenarioImpacts;
pub use super::scenarios::Entity as Scenarios;
pub use super::seasonal_patterns::Entity as SeasonalPatterns;
pub use super::steo_data::Entity as SteoData;
pub use super::supply_disposition::Entity as SupplyDisposition;
pub use super::weekly_data::Entity as WeeklyData;
