use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned numeric identifier
pub type RecordId = i64;

/// A stored resource: the resource fields plus server-managed identity and
/// lifecycle timestamps, all flattened into one camelCase JSON object.
///
/// ```json
/// {"id": 7, "customerName": "A Corp", "createdAt": "...", "updatedAt": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<R> {
    pub id: RecordId,
    #[serde(flatten)]
    pub data: R,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<R> Record<R> {
    pub fn new(id: RecordId, data: R, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            data,
            created_at,
            updated_at,
        }
    }

    /// Record that never came from the server (sample datasets).
    /// Sample ids are negative so they can not collide with stored ones.
    pub fn sample(index: usize, data: R) -> Self {
        let now = Utc::now();
        Self::new(-(index as RecordId) - 1, data, now, now)
    }

    pub fn is_sample(&self) -> bool {
        self.id < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    struct Item {
        item_code: String,
        quantity: i64,
    }

    #[test]
    fn test_flattened_wire_shape() {
        let value = json!({
            "id": 3,
            "itemCode": "P1",
            "quantity": 12,
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-02T10:00:00Z"
        });
        let record: Record<Item> = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.data.item_code, "P1");
        assert_eq!(record.data.quantity, 12);
        assert_eq!(serde_json::to_value(&record).unwrap(), value);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let value = json!({"itemCode": "P1", "createdAt": "2024-05-01T10:00:00Z", "updatedAt": "2024-05-01T10:00:00Z"});
        assert!(serde_json::from_value::<Record<Item>>(value).is_err());
    }

    #[test]
    fn test_sample_ids_are_negative() {
        let first = Record::sample(0, Item::default());
        let third = Record::sample(2, Item::default());
        assert_eq!(first.id, -1);
        assert_eq!(third.id, -3);
        assert!(first.is_sample());
    }
}
