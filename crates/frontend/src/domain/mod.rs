//! One list page per MES resource

pub mod a001_business;
pub mod a002_claim;
pub mod a003_inventory_transaction;
pub mod a004_inventory_status;
pub mod a005_production_order;
pub mod a006_production_status;
pub mod a007_quality_inspection;
pub mod a008_shipment;
pub mod a009_warehouse_receipt;

use contracts::domain::common::Resource;

/// Пункт навигации: путь, название, иконка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl NavEntry {
    fn of<R: Resource>(icon: &'static str) -> Self {
        Self {
            path: R::collection_name(),
            label: R::list_name(),
            icon,
        }
    }
}

/// Navigation order of the resource pages
pub fn nav_entries() -> Vec<NavEntry> {
    use contracts::domain::*;

    vec![
        NavEntry::of::<a001_business::aggregate::BusinessDto>("building"),
        NavEntry::of::<a002_claim::aggregate::ClaimDto>("alert"),
        NavEntry::of::<a003_inventory_transaction::aggregate::InventoryTransactionDto>("layers"),
        NavEntry::of::<a004_inventory_status::aggregate::InventoryStatusDto>("inbox"),
        NavEntry::of::<a005_production_order::aggregate::ProductionOrderDto>("factory"),
        NavEntry::of::<a006_production_status::aggregate::ProductionStatusDto>("play"),
        NavEntry::of::<a007_quality_inspection::aggregate::QualityInspectionDto>("check"),
        NavEntry::of::<a008_shipment::aggregate::ShipmentDto>("truck"),
        NavEntry::of::<a009_warehouse_receipt::aggregate::WarehouseReceiptDto>("inbox"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_paths_are_unique() {
        let entries = nav_entries();
        let paths: HashSet<_> = entries.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), 9);
        assert_eq!(entries[1].path, "claims");
        assert_eq!(entries[1].label, "Claims");
    }
}
