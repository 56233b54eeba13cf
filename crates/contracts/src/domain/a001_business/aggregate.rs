use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Resource};
use crate::shared::indicators::{count_where, Indicator};
use crate::shared::metadata::FieldMetadata;

/// Статус контрагента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessStatus {
    #[default]
    Active,
    Inactive,
}

impl BusinessStatus {
    pub const VALUES: &'static [&'static str] = &["active", "inactive"];
}

/// Business partner / company (customer or supplier)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessDto {
    pub company_name: String,
    pub business_number: String,
    pub representative: String,
    pub business_type: String,
    pub industry: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub status: BusinessStatus,
}

pub type Business = Record<BusinessDto>;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("companyName", "Company").required(),
    FieldMetadata::text("businessNumber", "Business No.")
        .required()
        .placeholder("000-00-00000"),
    FieldMetadata::text("representative", "Representative"),
    FieldMetadata::text("businessType", "Business type"),
    FieldMetadata::text("industry", "Industry"),
    FieldMetadata::text("phone", "Phone"),
    FieldMetadata::text("email", "Email").hidden_in_list(),
    FieldMetadata::text_area("address", "Address"),
    FieldMetadata::enumeration("status", "Status", BusinessStatus::VALUES),
];

impl Resource for BusinessDto {
    fn resource_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "businesses"
    }

    fn element_name() -> &'static str {
        "Business"
    }

    fn list_name() -> &'static str {
        "Businesses"
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn validate(&self) -> Result<(), String> {
        self.validate_fields()?;
        // Email is optional, but must look like one when present
        let email = self.email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err("Email must contain '@'".into());
        }
        Ok(())
    }

    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        vec![
            Indicator::count("Businesses", "building", records.len()),
            Indicator::count(
                "Active",
                "check",
                count_where(records, |r| r.data.status == BusinessStatus::Active),
            ),
            Indicator::count(
                "Inactive",
                "pause",
                count_where(records, |r| r.data.status == BusinessStatus::Inactive),
            ),
        ]
    }

    fn sample() -> Vec<Self> {
        vec![
            BusinessDto {
                company_name: "A Corp".into(),
                business_number: "123-45-67890".into(),
                representative: "Jane Park".into(),
                business_type: "Manufacturing".into(),
                industry: "Electronics".into(),
                phone: "02-555-0101".into(),
                email: "contact@acorp.example".into(),
                address: "12 Industrial Rd".into(),
                status: BusinessStatus::Active,
            },
            BusinessDto {
                company_name: "Beta Supply".into(),
                business_number: "220-81-11111".into(),
                representative: "Tom Lee".into(),
                business_type: "Wholesale".into(),
                industry: "Raw materials".into(),
                phone: "031-555-0199".into(),
                email: String::new(),
                address: "7 Harbor St".into(),
                status: BusinessStatus::Inactive,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        let mut dto = BusinessDto::sample().remove(0);
        assert!(dto.validate().is_ok());
        dto.email = "not-an-email".into();
        assert_eq!(dto.validate(), Err("Email must contain '@'".to_string()));
        dto.email = String::new();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_validate_required() {
        let dto = BusinessDto {
            company_name: "A Corp".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate(), Err("Business No. is required".to_string()));
        assert_eq!(dto.missing_required(), vec!["Business No."]);
    }
}
