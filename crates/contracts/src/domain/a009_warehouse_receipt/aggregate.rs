use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a005_production_order::aggregate::ProductionOrderDto;
use crate::domain::common::{Record, Resource, SearchLink};
use crate::shared::indicators::{count_where, sum_by, Indicator};
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    #[default]
    Pending,
    Received,
    Rejected,
}

impl ReceiptStatus {
    pub const VALUES: &'static [&'static str] = &["pending", "received", "rejected"];
}

/// Приходная накладная склада
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarehouseReceiptDto {
    pub receipt_number: String,
    pub order_number: String,
    pub supplier_name: String,
    pub item_code: String,
    pub item_name: String,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub warehouse: String,
    pub received_date: Option<NaiveDate>,
    pub receiver: String,
    pub status: ReceiptStatus,
}

pub type WarehouseReceipt = Record<WarehouseReceiptDto>;

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("receiptNumber", "Receipt No.")
        .required()
        .placeholder("WR-0001"),
    FieldMetadata::text("orderNumber", "Order No."),
    FieldMetadata::text("supplierName", "Supplier").required(),
    FieldMetadata::text("itemCode", "Item code").required(),
    FieldMetadata::text("itemName", "Item").required(),
    FieldMetadata::integer("quantity", "Quantity").required().min(1.0),
    FieldMetadata::number("unitPrice", "Unit price").min(0.0),
    FieldMetadata::text("warehouse", "Warehouse"),
    FieldMetadata::date("receivedDate", "Received"),
    FieldMetadata::text("receiver", "Receiver"),
    FieldMetadata::enumeration("status", "Status", ReceiptStatus::VALUES),
];

impl Resource for WarehouseReceiptDto {
    fn resource_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "warehouse-receipts"
    }

    fn element_name() -> &'static str {
        "Warehouse receipt"
    }

    fn list_name() -> &'static str {
        "Warehouse receipts"
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        vec![
            Indicator::count("Receipts", "inbox", records.len()),
            Indicator::count(
                "Pending",
                "clock",
                count_where(records, |r| r.data.status == ReceiptStatus::Pending),
            ),
            Indicator::quantity(
                "Received qty",
                "layers",
                sum_by(records, |r| {
                    if r.data.status == ReceiptStatus::Received {
                        r.data.quantity.unwrap_or(0) as f64
                    } else {
                        0.0
                    }
                }),
            ),
            Indicator::money(
                "Receipt value",
                "money",
                sum_by(records, |r| {
                    r.data.quantity.unwrap_or(0) as f64 * r.data.unit_price.unwrap_or(0.0)
                }),
            ),
        ]
    }

    fn search_link() -> Option<SearchLink> {
        Some(SearchLink::to::<ProductionOrderDto>(
            "Select order",
            &[("orderNumber", "Order No."), ("productCode", "Product code"), ("productName", "Product")],
            &[
                ("orderNumber", "orderNumber"),
                ("productCode", "itemCode"),
                ("productName", "itemName"),
                ("quantity", "quantity"),
            ],
        ))
    }
}
