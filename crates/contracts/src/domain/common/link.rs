use serde_json::{Map, Value};

use super::payload::copy_fields;
use super::{Record, Resource};

/// Связь формы со сторонним ресурсом (search modal)
///
/// The form fetches `collection` in full, lets the user filter it by
/// `columns` and copies `copies` (`source -> target`) from the picked row
/// into its draft.
#[derive(Debug, Clone, Copy)]
pub struct SearchLink {
    pub collection: &'static str,
    pub title: &'static str,
    /// `(field, label)` shown in the search table and matched by the query
    pub columns: &'static [(&'static str, &'static str)],
    /// `(source field, target field)`
    pub copies: &'static [(&'static str, &'static str)],
    /// Schema check for a fetched row
    pub validate: fn(&Value) -> Result<(), String>,
}

impl SearchLink {
    pub fn to<S: Resource>(
        title: &'static str,
        columns: &'static [(&'static str, &'static str)],
        copies: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            collection: S::collection_name(),
            title,
            columns,
            copies,
            validate: validate_row::<S>,
        }
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|(name, _)| *name).collect()
    }

    pub fn copy_into(&self, source: &Value, target: &mut Map<String, Value>) {
        copy_fields(source, target, self.copies);
    }
}

/// Does the JSON row deserialize as a stored `S`?
pub fn validate_row<S: Resource>(row: &Value) -> Result<(), String> {
    serde_json::from_value::<Record<S>>(row.clone())
        .map(|_| ())
        .map_err(|e| format!("Invalid {} row: {}", S::element_name(), e))
}
