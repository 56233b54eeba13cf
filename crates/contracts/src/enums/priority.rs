use serde::{Deserialize, Serialize};

/// Приоритет (claims, production orders)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Wire values, in escalation order
    pub const VALUES: &'static [&'static str] = &["low", "medium", "high", "urgent"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// High and urgent items are highlighted on dashboards
    pub fn is_elevated(&self) -> bool {
        matches!(self, Priority::High | Priority::Urgent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_match_serde() {
        for value in Priority::VALUES {
            let parsed: Priority = serde_json::from_value(serde_json::json!(value)).unwrap();
            assert_eq!(parsed.as_str(), *value);
        }
    }
}
