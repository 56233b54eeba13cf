pub mod a001_business;
pub mod a002_claim;
pub mod a003_inventory_transaction;
pub mod a004_inventory_status;
pub mod a005_production_order;
pub mod a006_production_status;
pub mod a007_quality_inspection;
pub mod a008_shipment;
pub mod a009_warehouse_receipt;
pub mod common;

#[cfg(test)]
mod tests;
