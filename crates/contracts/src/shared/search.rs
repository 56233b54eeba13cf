//! Substring search over JSON rows
//!
//! Used by the search modal: the related collection is fetched in full and
//! filtered on every keystroke. No index, no pagination.

use serde_json::Value;

/// Text shown for a JSON cell: strings as-is, numbers/bools via `to_string`,
/// `null`/missing as empty.
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Case-insensitive substring match of `query` against any of `columns`.
/// A blank query matches every row.
pub fn matches_query(row: &Value, columns: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    columns
        .iter()
        .any(|column| value_text(row.get(column)).to_lowercase().contains(&needle))
}

pub fn filter_rows<'a>(rows: &'a [Value], columns: &[&str], query: &str) -> Vec<&'a Value> {
    rows.iter()
        .filter(|row| matches_query(row, columns, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({"orderNumber": "PO-001", "customerName": "A Corp", "quantity": 10}),
            json!({"orderNumber": "PO-002", "customerName": "Beta Ltd", "quantity": 250}),
            json!({"orderNumber": "PO-003", "customerName": null, "quantity": 5}),
        ]
    }

    #[test]
    fn test_blank_query_returns_all() {
        let rows = rows();
        assert_eq!(filter_rows(&rows, &["orderNumber"], "  ").len(), 3);
    }

    #[test]
    fn test_case_insensitive_match_on_any_column() {
        let rows = rows();
        let found = filter_rows(&rows, &["orderNumber", "customerName"], "beta");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["orderNumber"], "PO-002");
    }

    #[test]
    fn test_numbers_are_searchable_and_null_is_empty() {
        let rows = rows();
        assert_eq!(filter_rows(&rows, &["quantity"], "25").len(), 1);
        assert_eq!(value_text(rows[2].get("customerName")), "");
        assert_eq!(value_text(rows[2].get("absent")), "");
    }
}
