use std::collections::BTreeMap;
use std::marker::PhantomData;

use contracts::domain::common::{Resource, SearchLink};
use contracts::shared::metadata::{find_field, FieldMetadata, FieldType};
use serde_json::{Map, Number, Value};

use crate::shared::components::table::{format_number, parse_integer, parse_number};

/// Черновик формы: строки ввода по имени поля
///
/// Fields hidden from the form keep their loaded value in `base` and travel
/// back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft<R> {
    base: Map<String, Value>,
    inputs: BTreeMap<&'static str, String>,
    _resource: PhantomData<fn() -> R>,
}

/// Начальный текст поля ввода для сохранённого значения
fn input_text(field: &FieldMetadata, value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Number(n)) if field.field_type.is_numeric() => {
            n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
        }
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl<R: Resource> FormDraft<R> {
    pub fn from_dto(dto: &R) -> Self {
        let base = match serde_json::to_value(dto) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let inputs = Self::form_fields()
            .map(|field| (field.name, input_text(field, base.get(field.name))))
            .collect();
        Self {
            base,
            inputs,
            _resource: PhantomData,
        }
    }

    pub fn form_fields() -> impl Iterator<Item = &'static FieldMetadata> {
        R::fields().iter().filter(|f| f.visible_in_form())
    }

    pub fn get(&self, name: &str) -> String {
        self.inputs.get(name).cloned().unwrap_or_default()
    }

    /// Unknown or read-only names are ignored
    pub fn set_input(&mut self, name: &str, text: String) {
        if let Some(slot) = self.inputs.get_mut(name) {
            *slot = text;
        }
    }

    /// Labels of required fields left blank. `0` counts as filled.
    pub fn missing_required(&self) -> Vec<&'static str> {
        Self::form_fields()
            .filter(|f| f.validation.required)
            .filter(|f| self.get(f.name).trim().is_empty())
            .map(|f| f.label())
            .collect()
    }

    fn parse_input(field: &FieldMetadata, text: &str) -> Result<Value, String> {
        let trimmed = text.trim();
        match field.field_type {
            FieldType::Text | FieldType::TextArea | FieldType::Enum => {
                Ok(Value::String(text.to_string()))
            }
            _ if trimmed.is_empty() => Ok(Value::Null),
            FieldType::Date => chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(|_| Value::String(trimmed.to_string()))
                .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", field.label())),
            FieldType::Integer => match parse_integer(trimmed) {
                Some(number) => Ok(Value::Number(Number::from(number))),
                None if parse_number(trimmed).is_some() => {
                    Err(format!("{} must be a whole number", field.label()))
                }
                None => Err(format!("{} must be a number", field.label())),
            },
            FieldType::Number => parse_number(trimmed)
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| format!("{} must be a number", field.label())),
        }
    }

    /// Typed JSON of the draft, numbers parsed
    pub fn to_value(&self) -> Result<Value, String> {
        let mut map = self.base.clone();
        for field in Self::form_fields() {
            let value = Self::parse_input(field, &self.get(field.name))?;
            map.insert(field.name.to_string(), value);
        }
        Ok(Value::Object(map))
    }

    pub fn to_dto(&self) -> Result<R, String> {
        serde_json::from_value(self.to_value()?).map_err(|e| e.to_string())
    }

    /// Copies the link's fields from a picked row of the related collection
    pub fn apply_selection(&mut self, link: &SearchLink, row: &Value) {
        let mut picked = Map::new();
        link.copy_into(row, &mut picked);
        for (name, value) in picked {
            match find_field(R::fields(), &name).filter(|f| f.visible_in_form()) {
                Some(field) => {
                    let text = input_text(field, Some(&value));
                    self.set_input(field.name, text);
                }
                None => {
                    self.base.insert(name, value);
                }
            }
        }
    }
}
