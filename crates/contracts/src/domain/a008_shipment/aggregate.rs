use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a005_production_order::aggregate::ProductionOrderDto;
use crate::domain::common::{Record, Resource, SearchLink};
use crate::shared::indicators::{count_where, sum_by, Indicator, IndicatorStatus};
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    #[default]
    Preparing,
    Shipped,
    InTransit,
    Delivered,
    Returned,
}

impl ShipmentStatus {
    pub const VALUES: &'static [&'static str] =
        &["preparing", "shipped", "in_transit", "delivered", "returned"];
}

/// Отгрузка клиенту
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentDto {
    pub shipment_number: String,
    pub order_number: String,
    pub customer_name: String,
    pub product_code: String,
    pub product_name: String,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    /// quantity * unit price, maintained by the server
    pub total_amount: Option<f64>,
    pub carrier: String,
    pub tracking_number: String,
    pub shipping_address: String,
    pub shipment_date: Option<NaiveDate>,
    pub status: ShipmentStatus,
}

pub type Shipment = Record<ShipmentDto>;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("shipmentNumber", "Shipment No.")
        .required()
        .placeholder("SH-0001"),
    FieldMetadata::text("orderNumber", "Order No."),
    FieldMetadata::text("customerName", "Customer").required(),
    FieldMetadata::text("productCode", "Product code").hidden_in_list(),
    FieldMetadata::text("productName", "Product").required(),
    FieldMetadata::integer("quantity", "Quantity").required().min(1.0),
    FieldMetadata::number("unitPrice", "Unit price").min(0.0),
    FieldMetadata::number("totalAmount", "Total").read_only(),
    FieldMetadata::text("carrier", "Carrier"),
    FieldMetadata::text("trackingNumber", "Tracking No."),
    FieldMetadata::text_area("shippingAddress", "Address"),
    FieldMetadata::date("shipmentDate", "Ship date"),
    FieldMetadata::enumeration("status", "Status", ShipmentStatus::VALUES),
];

impl Resource for ShipmentDto {
    fn resource_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "shipments"
    }

    fn element_name() -> &'static str {
        "Shipment"
    }

    fn list_name() -> &'static str {
        "Shipments"
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn server_fields() -> &'static [&'static str] {
        &["totalAmount"]
    }

    fn before_write(&mut self) {
        self.total_amount = match (self.quantity, self.unit_price) {
            (Some(quantity), Some(price)) => Some(quantity as f64 * price),
            _ => None,
        };
    }

    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        vec![
            Indicator::count("Shipments", "truck", records.len()),
            Indicator::count(
                "In transit",
                "truck",
                count_where(records, |r| {
                    matches!(r.data.status, ShipmentStatus::Shipped | ShipmentStatus::InTransit)
                }),
            ),
            Indicator::count(
                "Delivered",
                "check",
                count_where(records, |r| r.data.status == ShipmentStatus::Delivered),
            )
            .with_status(IndicatorStatus::Good),
            Indicator::count(
                "Returned",
                "undo",
                count_where(records, |r| r.data.status == ShipmentStatus::Returned),
            )
            .bad_if_positive(),
            Indicator::money(
                "Shipped value",
                "money",
                sum_by(records, |r| r.data.total_amount.unwrap_or(0.0)),
            ),
        ]
    }

    fn search_link() -> Option<SearchLink> {
        Some(SearchLink::to::<ProductionOrderDto>(
            "Select production order",
            &[("orderNumber", "Order No."), ("customerName", "Customer"), ("productName", "Product")],
            &[
                ("orderNumber", "orderNumber"),
                ("customerName", "customerName"),
                ("productCode", "productCode"),
                ("productName", "productName"),
                ("quantity", "quantity"),
                ("unitPrice", "unitPrice"),
            ],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_write_computes_total() {
        let mut dto = ShipmentDto {
            quantity: Some(4),
            unit_price: Some(2.5),
            total_amount: Some(999.0),
            ..Default::default()
        };
        dto.before_write();
        assert_eq!(dto.total_amount, Some(10.0));

        dto.unit_price = None;
        dto.before_write();
        assert_eq!(dto.total_amount, None);
    }

    #[test]
    fn test_total_amount_is_server_only() {
        assert_eq!(ShipmentDto::server_fields(), &["totalAmount"]);
        let field = ShipmentDto::fields()
            .iter()
            .find(|f| f.name == "totalAmount")
            .unwrap();
        assert!(!field.visible_in_form());
    }
}
