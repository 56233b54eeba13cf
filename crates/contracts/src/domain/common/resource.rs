use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{Record, SearchLink};
use crate::shared::indicators::Indicator;
use crate::shared::metadata::FieldMetadata;

/// Трейт ресурса MES
///
/// Implemented by the payload type of every business entity (the draft the
/// user edits). The stored form is `Record<Self>`; identity and timestamps
/// never appear in the payload type itself.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static
{
    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the resource in the system (e.g. "a002")
    fn resource_index() -> &'static str;

    /// REST path segment (e.g. "claims")
    fn collection_name() -> &'static str;

    /// UI name, singular (e.g. "Claim")
    fn element_name() -> &'static str;

    /// UI name, plural (e.g. "Claims")
    fn list_name() -> &'static str;

    /// Field descriptors in display order
    fn fields() -> &'static [FieldMetadata];

    // ============================================================================
    // Overridable behaviour
    // ============================================================================

    /// Server-only payload fields, stripped from every mutation request in
    /// addition to `id`, `createdAt` and `updatedAt`
    fn server_fields() -> &'static [&'static str] {
        &[]
    }

    /// Full validation before a write. Resources with cross-field rules
    /// override this and call `validate_fields` first.
    fn validate(&self) -> Result<(), String> {
        self.validate_fields()
    }

    /// Хук перед записью (server-computed fields)
    fn before_write(&mut self) {}

    /// Indicators shown above the list table
    fn summary(records: &[Record<Self>]) -> Vec<Indicator> {
        vec![Indicator::count("Total", "list", records.len())]
    }

    /// Related resource the form can pick a row from
    fn search_link() -> Option<SearchLink> {
        None
    }

    /// Hard-coded dataset: UI fallback when loading fails, backend test data
    fn sample() -> Vec<Self> {
        Vec::new()
    }

    // ============================================================================
    // Provided
    // ============================================================================

    /// Full resource name (e.g. "a002_claims")
    fn full_name() -> String {
        format!("{}_{}", Self::resource_index(), Self::collection_name())
    }

    /// Descriptor-driven validation: required fields present, numeric ranges
    fn validate_fields(&self) -> Result<(), String> {
        let value = serde_json::to_value(self).map_err(|e| e.to_string())?;
        for field in Self::fields() {
            let v = value.get(field.name).unwrap_or(&Value::Null);
            field.validation.validate_value(v, field.label())?;
        }
        Ok(())
    }

    /// Labels of required fields that are missing in this payload
    fn missing_required(&self) -> Vec<&'static str> {
        let value = serde_json::to_value(self).unwrap_or(Value::Null);
        Self::fields()
            .iter()
            .filter(|f| f.validation.required)
            .filter(|f| {
                let v = value.get(f.name).unwrap_or(&Value::Null);
                f.validation.validate_value(v, f.label()).is_err()
            })
            .map(|f| f.label())
            .collect()
    }
}
