use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a005_production_order::aggregate::ProductionOrderDto;
use crate::domain::common::{Record, Resource, SearchLink};
use crate::shared::indicators::{count_where, percent_of, sum_by, Indicator, IndicatorStatus};
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStatus {
    #[default]
    Waiting,
    Running,
    Paused,
    Done,
}

impl LineStatus {
    pub const VALUES: &'static [&'static str] = &["waiting", "running", "paused", "done"];
}

/// Ход выполнения заказа на линии
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductionStatusDto {
    pub order_number: String,
    pub product_name: String,
    pub line: String,
    pub planned_quantity: Option<i64>,
    pub produced_quantity: Option<i64>,
    pub defect_quantity: Option<i64>,
    pub status: LineStatus,
    pub operator: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub type ProductionStatus = Record<ProductionStatusDto>;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("orderNumber", "Order No.").required(),
    FieldMetadata::text("productName", "Product").required(),
    FieldMetadata::text("line", "Line").required().placeholder("LINE-1"),
    FieldMetadata::integer("plannedQuantity", "Planned").min(0.0),
    FieldMetadata::integer("producedQuantity", "Produced").min(0.0),
    FieldMetadata::integer("defectQuantity", "Defects").min(0.0),
    FieldMetadata::enumeration("status", "Status", LineStatus::VALUES),
    FieldMetadata::text("operator", "Operator"),
    FieldMetadata::date("startDate", "Start"),
    FieldMetadata::date("endDate", "End"),
];

impl Resource for ProductionStatusDto {
    fn resource_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "production-status"
    }

    fn element_name() -> &'static str {
        "Production status"
    }

    fn list_name() -> &'static str {
        "Production status"
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn validate(&self) -> Result<(), String> {
        self.validate_fields()?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err("End date must not be before start date".into());
            }
        }
        Ok(())
    }

    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        let produced = sum_by(records, |r| r.data.produced_quantity.unwrap_or(0) as f64);
        let defects = sum_by(records, |r| r.data.defect_quantity.unwrap_or(0) as f64);
        let defect_rate = percent_of(defects, produced);
        vec![
            Indicator::count(
                "Running lines",
                "play",
                count_where(records, |r| r.data.status == LineStatus::Running),
            ),
            Indicator::quantity("Produced", "layers", produced),
            Indicator::quantity("Defects", "alert", defects).bad_if_positive(),
            Indicator::percent("Defect rate", "percent", defect_rate).with_status(
                if defect_rate > 5.0 {
                    IndicatorStatus::Bad
                } else {
                    IndicatorStatus::Good
                },
            ),
        ]
    }

    fn search_link() -> Option<SearchLink> {
        Some(SearchLink::to::<ProductionOrderDto>(
            "Select production order",
            &[("orderNumber", "Order No."), ("productName", "Product"), ("customerName", "Customer")],
            &[
                ("orderNumber", "orderNumber"),
                ("productName", "productName"),
                ("quantity", "plannedQuantity"),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_before_start_rejected() {
        let dto = ProductionStatusDto {
            order_number: "PO-0001".into(),
            product_name: "Widget".into(),
            line: "LINE-1".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 10),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 9),
            ..Default::default()
        };
        assert_eq!(
            dto.validate(),
            Err("End date must not be before start date".to_string())
        );
    }

    #[test]
    fn test_defect_rate() {
        let record = |i: usize, produced: i64, defects: i64| {
            Record::sample(
                i,
                ProductionStatusDto {
                    produced_quantity: Some(produced),
                    defect_quantity: Some(defects),
                    status: LineStatus::Running,
                    ..Default::default()
                },
            )
        };
        let summary = ProductionStatusDto::summary(&[record(0, 150, 3), record(1, 50, 1)]);
        assert_eq!(summary[0].value, 2.0);
        assert_eq!(summary[1].value, 200.0);
        assert_eq!(summary[3].value, 2.0);
        assert_eq!(summary[3].status, IndicatorStatus::Good);
    }

    #[test]
    fn test_no_production_means_zero_rate() {
        let summary = ProductionStatusDto::summary(&[]);
        assert_eq!(summary[3].value, 0.0);
    }
}
