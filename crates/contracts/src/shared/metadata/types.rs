//! Field-level metadata
//!
//! All string fields are `'static` so whole descriptor tables can live in
//! `const` items next to the resource they describe.

use super::field_type::FieldType;
use super::validation::ValidationRules;

/// Metadata for a single field of a resource
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// JSON (camelCase) name of the field
    pub name: &'static str,
    pub field_type: FieldType,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    /// Allowed wire values for `FieldType::Enum`
    pub enum_values: Option<&'static [&'static str]>,
}

impl FieldMetadata {
    const fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            ui: FieldUiMetadata::labeled(label),
            validation: ValidationRules::none(),
            enum_values: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    /// Multi-line text; hidden from the list table by default
    pub const fn text_area(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::TextArea).hidden_in_list()
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Integer)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Number)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Date)
    }

    pub const fn enumeration(
        name: &'static str,
        label: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        let mut field = Self::new(name, label, FieldType::Enum);
        field.enum_values = Some(values);
        field
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }

    pub const fn hidden_in_list(mut self) -> Self {
        self.ui.visible_in_list = false;
        self
    }

    /// Computed by the server; shown in the table, never edited
    pub const fn read_only(mut self) -> Self {
        self.ui.visible_in_form = false;
        self
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    pub fn label(&self) -> &'static str {
        self.ui.label
    }

    /// Check if field should be visible in list view
    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    /// Check if field should be visible in form
    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            visible_in_list: true,
            visible_in_form: true,
        }
    }
}

impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self::labeled("")
    }
}

/// Find a field descriptor by its JSON name
pub fn find_field(fields: &'static [FieldMetadata], name: &str) -> Option<&'static FieldMetadata> {
    fields.iter().find(|f| f.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldMetadata] = &[
        FieldMetadata::text("code", "Code").required(),
        FieldMetadata::integer("quantity", "Quantity").min(0.0),
        FieldMetadata::text_area("note", "Note"),
        FieldMetadata::number("total", "Total").read_only(),
        FieldMetadata::enumeration("status", "Status", &["open", "closed"]),
    ];

    #[test]
    fn test_const_builders() {
        assert!(FIELDS[0].validation.required);
        assert_eq!(FIELDS[1].validation.min, Some(0.0));
        assert!(!FIELDS[2].visible_in_list());
        assert!(FIELDS[2].visible_in_form());
        assert!(!FIELDS[3].visible_in_form());
        assert_eq!(FIELDS[4].enum_values, Some(&["open", "closed"][..]));
        assert!(FIELDS[4].is_optional());
    }

    #[test]
    fn test_find_field() {
        assert_eq!(find_field(FIELDS, "quantity").map(|f| f.label()), Some("Quantity"));
        assert!(find_field(FIELDS, "missing").is_none());
    }
}
