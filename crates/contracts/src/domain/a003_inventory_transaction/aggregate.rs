use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Resource};
use crate::shared::indicators::{count_where, sum_by, Indicator};
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    #[default]
    Inbound,
    Outbound,
    Adjustment,
    Transfer,
}

impl TransactionType {
    pub const VALUES: &'static [&'static str] = &["inbound", "outbound", "adjustment", "transfer"];
}

/// Движение товара по складу
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryTransactionDto {
    pub transaction_type: TransactionType,
    pub item_code: String,
    pub item_name: String,
    pub quantity: Option<i64>,
    pub unit: String,
    pub unit_price: Option<f64>,
    pub warehouse: String,
    pub location: String,
    pub reference_no: String,
    pub transaction_date: Option<NaiveDate>,
    pub note: String,
}

pub type InventoryTransaction = Record<InventoryTransactionDto>;

impl InventoryTransactionDto {
    pub fn value(&self) -> f64 {
        self.quantity.unwrap_or(0) as f64 * self.unit_price.unwrap_or(0.0)
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::enumeration("transactionType", "Type", TransactionType::VALUES),
    FieldMetadata::text("itemCode", "Item code").required(),
    FieldMetadata::text("itemName", "Item").required(),
    FieldMetadata::integer("quantity", "Quantity").required().min(0.0),
    FieldMetadata::text("unit", "Unit").placeholder("EA"),
    FieldMetadata::number("unitPrice", "Unit price").min(0.0),
    FieldMetadata::text("warehouse", "Warehouse"),
    FieldMetadata::text("location", "Location").hidden_in_list(),
    FieldMetadata::text("referenceNo", "Reference"),
    FieldMetadata::date("transactionDate", "Date"),
    FieldMetadata::text_area("note", "Note"),
];

impl Resource for InventoryTransactionDto {
    fn resource_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "inventory-transactions"
    }

    fn element_name() -> &'static str {
        "Inventory transaction"
    }

    fn list_name() -> &'static str {
        "Inventory transactions"
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        let quantity_of = |kind: TransactionType| {
            sum_by(records, |r| {
                if r.data.transaction_type == kind {
                    r.data.quantity.unwrap_or(0) as f64
                } else {
                    0.0
                }
            })
        };
        vec![
            Indicator::count("Transactions", "list", records.len()),
            Indicator::quantity("Inbound qty", "arrow-down", quantity_of(TransactionType::Inbound)),
            Indicator::quantity("Outbound qty", "arrow-up", quantity_of(TransactionType::Outbound)),
            Indicator::count(
                "Adjustments",
                "edit",
                count_where(records, |r| r.data.transaction_type == TransactionType::Adjustment),
            ),
            Indicator::money("Total value", "money", sum_by(records, |r| r.data.value())),
        ]
    }
}
