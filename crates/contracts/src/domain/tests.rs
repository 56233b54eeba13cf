//! Checks shared by every resource: the field descriptors must describe the
//! serialized payload exactly, and the hard-coded datasets must be valid.

use serde_json::Value;

use super::a001_business::aggregate::BusinessDto;
use super::a002_claim::aggregate::ClaimDto;
use super::a003_inventory_transaction::aggregate::InventoryTransactionDto;
use super::a004_inventory_status::aggregate::InventoryStatusDto;
use super::a005_production_order::aggregate::ProductionOrderDto;
use super::a006_production_status::aggregate::ProductionStatusDto;
use super::a007_quality_inspection::aggregate::QualityInspectionDto;
use super::a008_shipment::aggregate::ShipmentDto;
use super::a009_warehouse_receipt::aggregate::WarehouseReceiptDto;
use super::common::{Record, Resource};

fn check_descriptors<R: Resource>() {
    let value = serde_json::to_value(R::default()).unwrap();
    let object = value.as_object().unwrap();

    for key in object.keys() {
        assert!(
            R::fields().iter().any(|f| f.name == key) || R::server_fields().contains(&key.as_str()),
            "{}: serialized key `{}` has no descriptor",
            R::full_name(),
            key
        );
    }

    for field in R::fields() {
        assert!(
            object.contains_key(field.name),
            "{}: descriptor `{}` is not a payload field",
            R::full_name(),
            field.name
        );
        for variant in field.enum_values.unwrap_or(&[]) {
            let mut candidate = value.clone();
            candidate[field.name] = Value::String(variant.to_string());
            assert!(
                serde_json::from_value::<R>(candidate).is_ok(),
                "{}: `{}` does not accept `{}`",
                R::full_name(),
                field.name,
                variant
            );
        }
    }

    for field in R::server_fields() {
        assert!(object.contains_key(*field), "{}: unknown server field `{}`", R::full_name(), field);
    }
}

fn check_samples<R: Resource>() {
    for (index, mut dto) in R::sample().into_iter().enumerate() {
        dto.before_write();
        assert_eq!(dto.validate(), Ok(()), "{} sample #{}", R::full_name(), index);
    }
}

fn check_link<R: Resource, S: Resource>() {
    let link = R::search_link().unwrap();
    assert_eq!(link.collection, S::collection_name());

    let source_fields = serde_json::to_value(S::default()).unwrap();
    let target_fields = serde_json::to_value(R::default()).unwrap();
    for (source, target) in link.copies {
        assert!(source_fields.get(*source).is_some(), "{}: no source `{}`", R::full_name(), source);
        assert!(target_fields.get(*target).is_some(), "{}: no target `{}`", R::full_name(), target);
    }
    for (column, _) in link.columns {
        assert!(source_fields.get(*column).is_some(), "{}: no column `{}`", R::full_name(), column);
    }

    for (index, dto) in S::sample().into_iter().enumerate() {
        let row = serde_json::to_value(Record::sample(index, dto)).unwrap();
        assert_eq!((link.validate)(&row), Ok(()));
    }
    assert!((link.validate)(&serde_json::json!({"id": "x"})).is_err());
}

#[test]
fn test_descriptors_match_payloads() {
    check_descriptors::<BusinessDto>();
    check_descriptors::<ClaimDto>();
    check_descriptors::<InventoryTransactionDto>();
    check_descriptors::<InventoryStatusDto>();
    check_descriptors::<ProductionOrderDto>();
    check_descriptors::<ProductionStatusDto>();
    check_descriptors::<QualityInspectionDto>();
    check_descriptors::<ShipmentDto>();
    check_descriptors::<WarehouseReceiptDto>();
}

#[test]
fn test_samples_are_valid() {
    check_samples::<BusinessDto>();
    check_samples::<ClaimDto>();
    check_samples::<InventoryTransactionDto>();
    check_samples::<InventoryStatusDto>();
    check_samples::<ProductionOrderDto>();
    check_samples::<ProductionStatusDto>();
    check_samples::<QualityInspectionDto>();
    check_samples::<ShipmentDto>();
    check_samples::<WarehouseReceiptDto>();
}

#[test]
fn test_search_links() {
    check_link::<ClaimDto, BusinessDto>();
    check_link::<ProductionStatusDto, ProductionOrderDto>();
    check_link::<QualityInspectionDto, ProductionOrderDto>();
    check_link::<ShipmentDto, ProductionOrderDto>();
    check_link::<WarehouseReceiptDto, ProductionOrderDto>();

    assert!(BusinessDto::search_link().is_none());
    assert!(ProductionOrderDto::search_link().is_none());
}

#[test]
fn test_collections_are_unique() {
    let mut names = vec![
        BusinessDto::collection_name(),
        ClaimDto::collection_name(),
        InventoryTransactionDto::collection_name(),
        InventoryStatusDto::collection_name(),
        ProductionOrderDto::collection_name(),
        ProductionStatusDto::collection_name(),
        QualityInspectionDto::collection_name(),
        ShipmentDto::collection_name(),
        WarehouseReceiptDto::collection_name(),
    ];
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 9);
}
