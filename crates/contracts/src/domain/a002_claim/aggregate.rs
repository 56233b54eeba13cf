use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_business::aggregate::BusinessDto;
use crate::domain::common::{Record, Resource, SearchLink};
use crate::enums::Priority;
use crate::shared::indicators::{count_where, sum_by, Indicator, IndicatorStatus};
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    #[default]
    Quality,
    Delivery,
    Quantity,
    Other,
}

impl ClaimType {
    pub const VALUES: &'static [&'static str] = &["quality", "delivery", "quantity", "other"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ClaimStatus {
    pub const VALUES: &'static [&'static str] = &["pending", "in_progress", "resolved", "rejected"];

    pub fn is_open(&self) -> bool {
        matches!(self, ClaimStatus::Pending | ClaimStatus::InProgress)
    }
}

/// Customer claim (complaint) against a delivered product
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimDto {
    pub claim_number: String,
    pub customer_name: String,
    pub product_code: String,
    pub product_name: String,
    pub claim_type: ClaimType,
    pub quantity: Option<i64>,
    pub claim_amount: Option<f64>,
    pub priority: Priority,
    pub status: ClaimStatus,
    pub claim_date: Option<NaiveDate>,
    pub assignee: String,
    pub description: String,
}

pub type Claim = Record<ClaimDto>;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("claimNumber", "Claim No.").placeholder("CLM-0001"),
    FieldMetadata::text("customerName", "Customer").required(),
    FieldMetadata::text("productCode", "Product code").required(),
    FieldMetadata::text("productName", "Product").required(),
    FieldMetadata::enumeration("claimType", "Type", ClaimType::VALUES),
    FieldMetadata::integer("quantity", "Quantity").min(0.0),
    FieldMetadata::number("claimAmount", "Amount").min(0.0),
    FieldMetadata::enumeration("priority", "Priority", Priority::VALUES),
    FieldMetadata::enumeration("status", "Status", ClaimStatus::VALUES),
    FieldMetadata::date("claimDate", "Claim date"),
    FieldMetadata::text("assignee", "Assignee"),
    FieldMetadata::text_area("description", "Description"),
];

impl Resource for ClaimDto {
    fn resource_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "claims"
    }

    fn element_name() -> &'static str {
        "Claim"
    }

    fn list_name() -> &'static str {
        "Claims"
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        let open = count_where(records, |r| r.data.status.is_open());
        vec![
            Indicator::count("Claims", "list", records.len()),
            Indicator::count("Open", "clock", open).with_status(if open > 0 {
                IndicatorStatus::Warning
            } else {
                IndicatorStatus::Good
            }),
            Indicator::count(
                "Resolved",
                "check",
                count_where(records, |r| r.data.status == ClaimStatus::Resolved),
            )
            .with_status(IndicatorStatus::Good),
            Indicator::count(
                "High priority",
                "alert",
                count_where(records, |r| r.data.priority.is_elevated()),
            )
            .bad_if_positive(),
            Indicator::money(
                "Claimed amount",
                "money",
                sum_by(records, |r| r.data.claim_amount.unwrap_or(0.0)),
            ),
        ]
    }

    fn search_link() -> Option<SearchLink> {
        Some(SearchLink::to::<BusinessDto>(
            "Select customer",
            &[("companyName", "Company"), ("businessNumber", "Business No."), ("representative", "Representative")],
            &[("companyName", "customerName")],
        ))
    }

    fn sample() -> Vec<Self> {
        vec![
            ClaimDto {
                claim_number: "CLM-0001".into(),
                customer_name: "A Corp".into(),
                product_code: "P1".into(),
                product_name: "Widget".into(),
                claim_type: ClaimType::Quality,
                quantity: Some(12),
                claim_amount: Some(1_200.0),
                priority: Priority::High,
                status: ClaimStatus::Pending,
                claim_date: NaiveDate::from_ymd_opt(2024, 5, 2),
                assignee: "QA team".into(),
                description: "Scratches on housing".into(),
            },
            ClaimDto {
                claim_number: "CLM-0002".into(),
                customer_name: "Beta Supply".into(),
                product_code: "P7".into(),
                product_name: "Bracket".into(),
                claim_type: ClaimType::Delivery,
                quantity: Some(40),
                claim_amount: Some(350.5),
                priority: Priority::Low,
                status: ClaimStatus::Resolved,
                claim_date: NaiveDate::from_ymd_opt(2024, 4, 18),
                assignee: "Logistics".into(),
                description: "Late delivery".into(),
            },
        ]
    }
}
