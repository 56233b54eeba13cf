use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Resource};
use crate::enums::Priority;
use crate::shared::indicators::{count_where, sum_by, Indicator, IndicatorStatus};
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const VALUES: &'static [&'static str] = &["planned", "in_progress", "completed", "cancelled"];
}

/// Заказ на производство
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductionOrderDto {
    pub order_number: String,
    pub customer_name: String,
    pub product_code: String,
    pub product_name: String,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: OrderStatus,
    pub note: String,
}

pub type ProductionOrder = Record<ProductionOrderDto>;

impl ProductionOrderDto {
    pub fn order_value(&self) -> f64 {
        self.quantity.unwrap_or(0) as f64 * self.unit_price.unwrap_or(0.0)
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("orderNumber", "Order No.").required().placeholder("PO-0001"),
    FieldMetadata::text("customerName", "Customer").required(),
    FieldMetadata::text("productCode", "Product code").required(),
    FieldMetadata::text("productName", "Product").required(),
    FieldMetadata::integer("quantity", "Quantity").required().min(1.0),
    FieldMetadata::number("unitPrice", "Unit price").min(0.0),
    FieldMetadata::date("dueDate", "Due date"),
    FieldMetadata::enumeration("priority", "Priority", Priority::VALUES),
    FieldMetadata::enumeration("status", "Status", OrderStatus::VALUES),
    FieldMetadata::text_area("note", "Note"),
];

impl Resource for ProductionOrderDto {
    fn resource_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "production-orders"
    }

    fn element_name() -> &'static str {
        "Production order"
    }

    fn list_name() -> &'static str {
        "Production orders"
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        vec![
            Indicator::count("Orders", "list", records.len()),
            Indicator::count(
                "In progress",
                "play",
                count_where(records, |r| r.data.status == OrderStatus::InProgress),
            ),
            Indicator::count(
                "Completed",
                "check",
                count_where(records, |r| r.data.status == OrderStatus::Completed),
            )
            .with_status(IndicatorStatus::Good),
            Indicator::quantity(
                "Ordered qty",
                "layers",
                sum_by(records, |r| r.data.quantity.unwrap_or(0) as f64),
            ),
            Indicator::money("Order value", "money", sum_by(records, |r| r.data.order_value())),
        ]
    }

    fn sample() -> Vec<Self> {
        vec![
            ProductionOrderDto {
                order_number: "PO-0001".into(),
                customer_name: "A Corp".into(),
                product_code: "P1".into(),
                product_name: "Widget".into(),
                quantity: Some(1_000),
                unit_price: Some(12.5),
                due_date: NaiveDate::from_ymd_opt(2024, 6, 30),
                priority: Priority::High,
                status: OrderStatus::InProgress,
                note: String::new(),
            },
            ProductionOrderDto {
                order_number: "PO-0002".into(),
                customer_name: "Beta Supply".into(),
                product_code: "P7".into(),
                product_name: "Bracket".into(),
                quantity: Some(250),
                unit_price: Some(4.0),
                due_date: NaiveDate::from_ymd_opt(2024, 7, 15),
                priority: Priority::Medium,
                status: OrderStatus::Planned,
                note: "Rush if possible".into(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_must_be_positive() {
        let mut dto = ProductionOrderDto::sample().remove(0);
        dto.quantity = Some(0);
        assert_eq!(dto.validate(), Err("Quantity must be at least 1".to_string()));
    }

    #[test]
    fn test_order_value() {
        let dto = ProductionOrderDto::sample().remove(0);
        assert_eq!(dto.order_value(), 12_500.0);
        assert_eq!(ProductionOrderDto::default().order_value(), 0.0);
    }
}
