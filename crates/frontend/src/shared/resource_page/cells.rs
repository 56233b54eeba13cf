use contracts::shared::metadata::{FieldMetadata, FieldType};
use serde_json::Value;

use crate::shared::components::table::format_number;

/// "in_progress" -> "In progress"
pub fn humanize(value: &str) -> String {
    let text = value.replace('_', " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Текст ячейки таблицы списка
pub fn cell_text(field: &FieldMetadata, value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Number(n)) if field.field_type.is_numeric() => {
            n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
        }
        Some(Value::String(s)) if field.field_type == FieldType::Enum => humanize(s),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("in_progress"), "In progress");
        assert_eq!(humanize("pending"), "Pending");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_cell_text() {
        let quantity = FieldMetadata::integer("quantity", "Quantity");
        let status = FieldMetadata::enumeration("status", "Status", &["in_transit"]);
        let name = FieldMetadata::text("customerName", "Customer");

        assert_eq!(cell_text(&quantity, Some(&json!(1000))), "1,000");
        assert_eq!(cell_text(&quantity, Some(&Value::Null)), "");
        assert_eq!(cell_text(&status, Some(&json!("in_transit"))), "In transit");
        assert_eq!(cell_text(&name, Some(&json!("A Corp"))), "A Corp");
        assert_eq!(cell_text(&name, None), "");
    }
}
