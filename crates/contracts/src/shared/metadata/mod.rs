//! Field descriptor system
//!
//! Every resource describes its fields with a static `&[FieldMetadata]`.
//! The descriptors drive list columns, form inputs, numeric coercion and
//! required-field validation on both sides of the wire.

pub mod field_type;
pub mod types;
pub mod validation;

pub use field_type::FieldType;
pub use types::{find_field, FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
