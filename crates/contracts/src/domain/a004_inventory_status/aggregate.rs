use serde::{Deserialize, Serialize};

use crate::domain::common::{Record, Resource};
use crate::shared::indicators::{count_where, sum_by, Indicator};
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    Normal,
    Low,
    OutOfStock,
    Excess,
}

impl StockStatus {
    pub const VALUES: &'static [&'static str] = &["normal", "low", "out_of_stock", "excess"];
}

/// Остатки по позиции на складе
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryStatusDto {
    pub item_code: String,
    pub item_name: String,
    pub category: String,
    pub current_stock: Option<i64>,
    pub safety_stock: Option<i64>,
    pub unit: String,
    pub warehouse: String,
    pub location: String,
    pub status: StockStatus,
}

pub type InventoryStatus = Record<InventoryStatusDto>;

impl InventoryStatusDto {
    /// Stock at or below the safety level (and some safety level is set)
    pub fn is_below_safety(&self) -> bool {
        match (self.current_stock, self.safety_stock) {
            (Some(current), Some(safety)) => safety > 0 && current <= safety,
            (None, Some(safety)) => safety > 0,
            _ => false,
        }
    }
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("itemCode", "Item code").required(),
    FieldMetadata::text("itemName", "Item").required(),
    FieldMetadata::text("category", "Category"),
    FieldMetadata::integer("currentStock", "Current stock").min(0.0),
    FieldMetadata::integer("safetyStock", "Safety stock").min(0.0),
    FieldMetadata::text("unit", "Unit").placeholder("EA"),
    FieldMetadata::text("warehouse", "Warehouse"),
    FieldMetadata::text("location", "Location"),
    FieldMetadata::enumeration("status", "Status", StockStatus::VALUES),
];

impl Resource for InventoryStatusDto {
    fn resource_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "inventory-status"
    }

    fn element_name() -> &'static str {
        "Inventory item"
    }

    fn list_name() -> &'static str {
        "Inventory status"
    }

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        vec![
            Indicator::count("Items", "box", records.len()),
            Indicator::quantity(
                "Total stock",
                "layers",
                sum_by(records, |r| r.data.current_stock.unwrap_or(0) as f64),
            ),
            Indicator::count(
                "Below safety stock",
                "alert",
                count_where(records, |r| r.data.is_below_safety()),
            )
            .bad_if_positive(),
            Indicator::count(
                "Out of stock",
                "x",
                count_where(records, |r| r.data.status == StockStatus::OutOfStock),
            )
            .bad_if_positive(),
        ]
    }

    fn sample() -> Vec<Self> {
        vec![
            InventoryStatusDto {
                item_code: "RM-100".into(),
                item_name: "Steel sheet".into(),
                category: "Raw material".into(),
                current_stock: Some(1_250),
                safety_stock: Some(500),
                unit: "EA".into(),
                warehouse: "Main".into(),
                location: "A-01".into(),
                status: StockStatus::Normal,
            },
            InventoryStatusDto {
                item_code: "RM-205".into(),
                item_name: "Copper wire".into(),
                category: "Raw material".into(),
                current_stock: Some(80),
                safety_stock: Some(200),
                unit: "M".into(),
                warehouse: "Main".into(),
                location: "B-04".into(),
                status: StockStatus::Low,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_safety() {
        let mut dto = InventoryStatusDto {
            current_stock: Some(10),
            safety_stock: Some(10),
            ..Default::default()
        };
        assert!(dto.is_below_safety());
        dto.current_stock = Some(11);
        assert!(!dto.is_below_safety());
        dto.safety_stock = None;
        assert!(!dto.is_below_safety());
        dto.current_stock = None;
        dto.safety_stock = Some(5);
        assert!(dto.is_below_safety());
    }

    #[test]
    fn test_summary_on_sample() {
        let records: Vec<InventoryStatus> = InventoryStatusDto::sample()
            .into_iter()
            .enumerate()
            .map(|(i, dto)| Record::sample(i, dto))
            .collect();
        let summary = InventoryStatusDto::summary(&records);
        assert_eq!(summary[1].value, 1_330.0);
        assert_eq!(summary[2].value, 1.0);
        assert_eq!(summary[3].value, 0.0);
    }
}
