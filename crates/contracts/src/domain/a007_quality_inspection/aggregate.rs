use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a005_production_order::aggregate::ProductionOrderDto;
use crate::domain::common::{Record, Resource, SearchLink};
use crate::shared::indicators::{count_where, percent_of, Indicator, IndicatorStatus};
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionType {
    #[default]
    Incoming,
    InProcess,
    Final,
    Outgoing,
}

impl InspectionType {
    pub const VALUES: &'static [&'static str] = &["incoming", "in_process", "final", "outgoing"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionResult {
    #[default]
    Pending,
    Pass,
    Fail,
    Conditional,
}

impl InspectionResult {
    pub const VALUES: &'static [&'static str] = &["pending", "pass", "fail", "conditional"];
}

/// Контроль качества партии
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityInspectionDto {
    pub inspection_number: String,
    pub inspection_type: InspectionType,
    pub product_code: String,
    pub product_name: String,
    pub lot_number: String,
    pub sample_size: Option<i64>,
    pub defect_count: Option<i64>,
    pub result: InspectionResult,
    pub inspector: String,
    pub inspection_date: Option<NaiveDate>,
    pub remarks: String,
}

pub type QualityInspection = Record<QualityInspectionDto>;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("inspectionNumber", "Inspection No.")
        .required()
        .placeholder("QI-0001"),
    FieldMetadata::enumeration("inspectionType", "Type", InspectionType::VALUES),
    FieldMetadata::text("productCode", "Product code").required(),
    FieldMetadata::text("productName", "Product").required(),
    FieldMetadata::text("lotNumber", "Lot"),
    FieldMetadata::integer("sampleSize", "Sample size").min(0.0),
    FieldMetadata::integer("defectCount", "Defects").min(0.0),
    FieldMetadata::enumeration("result", "Result", InspectionResult::VALUES),
    FieldMetadata::text("inspector", "Inspector"),
    FieldMetadata::date("inspectionDate", "Date"),
    FieldMetadata::text_area("remarks", "Remarks"),
];

impl Resource for QualityInspectionDto {
    fn resource_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "quality-inspections"
    }

    fn element_name() -> &'static str {
        "Quality inspection"
    }

    fn list_name() -> &'static str {
        "Quality inspections"
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn validate(&self) -> Result<(), String> {
        self.validate_fields()?;
        if let (Some(sample), Some(defects)) = (self.sample_size, self.defect_count) {
            if defects > sample {
                return Err("Defects can not exceed the sample size".into());
            }
        }
        Ok(())
    }

    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        let passed = count_where(records, |r| r.data.result == InspectionResult::Pass);
        let failed = count_where(records, |r| r.data.result == InspectionResult::Fail);
        let decided = count_where(records, |r| r.data.result != InspectionResult::Pending);
        vec![
            Indicator::count("Inspections", "list", records.len()),
            Indicator::count("Passed", "check", passed).with_status(IndicatorStatus::Good),
            Indicator::count("Failed", "x", failed).bad_if_positive(),
            Indicator::percent("Pass rate", "percent", percent_of(passed as f64, decided as f64)),
        ]
    }

    fn search_link() -> Option<SearchLink> {
        Some(SearchLink::to::<ProductionOrderDto>(
            "Select production order",
            &[("orderNumber", "Order No."), ("productCode", "Product code"), ("productName", "Product")],
            &[
                ("productCode", "productCode"),
                ("productName", "productName"),
                ("orderNumber", "lotNumber"),
            ],
        ))
    }

    fn sample() -> Vec<Self> {
        vec![QualityInspectionDto {
            inspection_number: "QI-0001".into(),
            inspection_type: InspectionType::Final,
            product_code: "P1".into(),
            product_name: "Widget".into(),
            lot_number: "PO-0001".into(),
            sample_size: Some(50),
            defect_count: Some(1),
            result: InspectionResult::Pass,
            inspector: "Kim".into(),
            inspection_date: NaiveDate::from_ymd_opt(2024, 5, 20),
            remarks: String::new(),
        }]
    }
}
