// Error flattening - JSON-safe copies of failure properties

use serde_json::{Map, Value};
use thiserror::Error;

/// Nesting budget for a single property, matching serde_json's own
/// recursion limit. An owned JSON tree cannot hold a reference cycle, so a
/// circular structure flattened by a host adapter shows up here as nesting
/// past this budget.
const NESTING_BUDGET: usize = 128;

/// Failure while flattening an error property
#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("property nesting exceeds the serialization budget")]
    Circular,
    #[error("property failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Flatten error properties into a JSON-safe map
///
/// Each property is serialized in isolation; a property that turns out to be
/// circular is dropped silently, any other serialization failure is returned.
/// The input is never mutated and iteration follows the map's stable order.
pub fn error_json(props: &Map<String, Value>) -> Result<Map<String, Value>, FlattenError> {
    let mut output = Map::new();
    for (key, value) in props {
        match stringify_isolated(value) {
            Ok(_) => {
                output.insert(key.clone(), value.clone());
            }
            Err(FlattenError::Circular) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(output)
}

fn stringify_isolated(value: &Value) -> Result<String, FlattenError> {
    if exceeds_budget(value, NESTING_BUDGET) {
        return Err(FlattenError::Circular);
    }
    Ok(serde_json::to_string(value)?)
}

fn exceeds_budget(value: &Value, budget: usize) -> bool {
    if budget == 0 {
        return true;
    }
    match value {
        Value::Array(items) => items.iter().any(|item| exceeds_budget(item, budget - 1)),
        Value::Object(entries) => entries
            .values()
            .any(|entry| exceeds_budget(entry, budget - 1)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(depth: usize) -> Value {
        let mut value = Value::Null;
        for _ in 0..depth {
            value = Value::Array(vec![value]);
        }
        value
    }

    #[test]
    fn test_error_json_keeps_plain_properties() {
        let mut props = Map::new();
        props.insert("message".to_string(), Value::String("boom".to_string()));
        props.insert("stack".to_string(), Value::String("at foo".to_string()));

        let flat = error_json(&props).unwrap();

        assert_eq!(flat.len(), 2);
        assert_eq!(flat["message"], Value::String("boom".to_string()));
    }

    #[test]
    fn test_error_json_drops_circular_property() {
        let mut props = Map::new();
        props.insert("message".to_string(), Value::String("boom".to_string()));
        props.insert("cause".to_string(), nested(200));

        let flat = error_json(&props).unwrap();

        assert!(flat.get("cause").is_none());
        assert_eq!(flat["message"], Value::String("boom".to_string()));
    }

    #[test]
    fn test_error_json_is_idempotent() {
        let mut props = Map::new();
        props.insert("message".to_string(), Value::String("boom".to_string()));
        props.insert("cause".to_string(), nested(200));
        props.insert("code".to_string(), Value::from(42));

        let once = error_json(&props).unwrap();
        let twice = error_json(&once).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_error_json_does_not_mutate_input() {
        let mut props = Map::new();
        props.insert("cause".to_string(), nested(200));

        let _ = error_json(&props).unwrap();

        assert!(props.contains_key("cause"));
    }
}
