//! Field type enumeration for metadata system

/// Category of field type, decides which input widget is rendered and how
/// the raw input string is coerced before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    TextArea,
    /// Whole number (`i64` on the wire)
    Integer,
    /// Decimal number (`f64` on the wire)
    Number,
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// Closed set of snake_case string values
    Enum,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Date => "date",
            Self::Enum => "enum",
        }
    }

    /// Numeric fields get thousands-separator stripping on input
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_types() {
        assert!(FieldType::Integer.is_numeric());
        assert!(FieldType::Number.is_numeric());
        assert!(!FieldType::Text.is_numeric());
        assert!(!FieldType::Enum.is_numeric());
        assert_eq!(FieldType::default(), FieldType::Text);
    }
}
