//! SeaORM Entity for automated report templates

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::validation::{lengths, Constraints, Validate, ValidationError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "report_templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template_name: String,
    /// weekly_summary, scenario_analysis, price_alert
    pub report_type: String,

    // Template configuration
    #[sea_orm(column_type = "JsonBinary")]
    pub data_sources: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub products_included: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub regions_included: Json,

    /// PDF, CSV, JSON
    pub output_format: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub chart_specifications: Json,

    /// Cron-like pattern
    pub schedule_pattern: Option<String>,
    pub auto_send: bool,
    #[sea_orm(column_type = "JsonBinary")]
    pub recipients: Json,

    pub is_active: bool,
    pub created_by: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Validate for Model {
    fn validate(&self) -> Result<(), ValidationError> {
        Constraints::new()
            .max_len("template_name", &self.template_name, lengths::TEMPLATE_NAME)
            .max_len("report_type", &self.report_type, lengths::REPORT_TYPE)
            .string_list("data_sources", &self.data_sources)
            .string_list("products_included", &self.products_included)
            .string_list("regions_included", &self.regions_included)
            .max_len("output_format", &self.output_format, lengths::OUTPUT_FORMAT)
            .object("chart_specifications", &self.chart_specifications)
            .max_len_opt(
                "schedule_pattern",
                self.schedule_pattern.as_deref(),
                lengths::SCHEDULE_PATTERN,
            )
            .string_list("recipients", &self.recipients)
            .max_len_opt("created_by", self.created_by.as_deref(), lengths::CREATED_BY)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_template_lists_must_hold_strings() {
        let mut template = Model {
            id: 2,
            template_name: "Weekly stocks digest".to_string(),
            report_type: "weekly_summary".to_string(),
            data_sources: json!(["WEEKLY"]),
            products_included: json!(["CRUDE_OIL", "GASOLINE"]),
            regions_included: json!([]),
            output_format: "PDF".to_string(),
            chart_specifications: json!({}),
            schedule_pattern: Some("0 12 * * 3".to_string()),
            auto_send: true,
            recipients: json!(["desk@example.com"]),
            is_active: true,
            created_by: None,
            created_at: Utc::now().fixed_offset(),
        };
        assert!(template.validate().is_ok());

        template.products_included = json!({ "CRUDE_OIL": true });
        template.output_format = "OpenDocument Spreadsheet".to_string();
        let err = template.validate().unwrap_err();
        assert_eq!(err.fields(), vec!["products_included", "output_format"]);
    }
}
