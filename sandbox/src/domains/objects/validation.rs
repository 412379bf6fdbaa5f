use serde_json::Value;

use crate::objects::SpecError;

fn invalid(type_name: &str, field: &str, value: f32) -> SpecError {
    SpecError::InvalidGeometry {
        type_name: type_name.to_string(),
        field: field.to_string(),
        value,
    }
}

pub(crate) fn ensure_finite(type_name: &str, field: &str, value: f32) -> Result<(), SpecError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(type_name, field, value))
    }
}

pub(crate) fn ensure_positive(type_name: &str, field: &str, value: f32) -> Result<(), SpecError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(type_name, field, value))
    }
}

pub(crate) fn ensure_non_negative(
    type_name: &str,
    field: &str,
    value: f32,
) -> Result<(), SpecError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(type_name, field, value))
    }
}

/// Reads the `type` tag of a declarative spec.
pub(crate) fn discriminant(value: &Value) -> Result<String, SpecError> {
    match value.get("type") {
        Some(Value::String(type_name)) => Ok(type_name.clone()),
        Some(other) => Err(SpecError::Malformed {
            type_name: String::new(),
            reason: format!("type tag must be a string, got {}", other),
        }),
        None => Err(SpecError::MissingType),
    }
}

/// Rejects keys that do not belong to the tagged variant.
pub(crate) fn ensure_fields(
    type_name: &str,
    value: &Value,
    allowed: &[&str],
) -> Result<(), SpecError> {
    if let Value::Object(map) = value {
        for key in map.keys() {
            if key != "type" && !allowed.contains(&key.as_str()) {
                return Err(SpecError::Malformed {
                    type_name: type_name.to_string(),
                    reason: format!("unexpected field '{}'", key),
                });
            }
        }
    }
    Ok(())
}
