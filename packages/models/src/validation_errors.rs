use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping of error codes to their details, as reported by a control's validators.
///
/// Iteration follows insertion order, so the "first" error is the one the
/// validator chain reported first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Map<String, Value>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert
    pub fn with(mut self, code: impl Into<String>, detail: impl Into<Value>) -> Self {
        self.insert(code, detail);
        self
    }

    /// Insert or replace an error. Replacing keeps the existing position.
    pub fn insert(&mut self, code: impl Into<String>, detail: impl Into<Value>) {
        self.0.insert(code.into(), detail.into());
    }

    pub fn remove(&mut self, code: &str) -> Option<Value> {
        self.0.shift_remove(code)
    }

    /// The first error code with its detail.
    pub fn first(&self) -> Option<(&str, &Value)> {
        self.0.iter().next().map(|(code, detail)| (code.as_str(), detail))
    }

    pub fn get(&self, code: &str) -> Option<&Value> {
        self.0.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(code, detail)| (code.as_str(), detail))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = ValidationErrors::new();
        for (code, detail) in iter {
            errors.insert(code, detail);
        }
        errors
    }
}

impl From<Map<String, Value>> for ValidationErrors {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_follows_insertion_order() {
        let errors = ValidationErrors::new()
            .with("required", true)
            .with("minlength", 3);

        assert_eq!(errors.first(), Some(("required", &json!(true))));

        let reversed = ValidationErrors::new()
            .with("minlength", 3)
            .with("required", true);

        assert_eq!(reversed.first(), Some(("minlength", &json!(3))));
    }

    #[test]
    fn test_replacing_keeps_position() {
        let mut errors = ValidationErrors::new()
            .with("pattern", "^a")
            .with("required", true);
        errors.insert("pattern", "^b");

        assert_eq!(errors.first(), Some(("pattern", &json!("^b"))));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_empty_has_no_first() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(errors.first().is_none());
    }

    #[test]
    fn test_deserializes_from_object() {
        let errors: ValidationErrors =
            serde_json::from_value(json!({ "maxlength": { "requiredLength": 5 }, "email": true }))
                .unwrap();

        assert_eq!(errors.first().map(|(code, _)| code), Some("maxlength"));
        assert!(errors.contains("email"));
    }

    #[test]
    fn test_remove_shifts_next_error_first() {
        let mut errors = ValidationErrors::new()
            .with("required", true)
            .with("email", true);

        assert_eq!(errors.remove("required"), Some(json!(true)));
        assert_eq!(errors.remove("required"), None);
        assert_eq!(errors.first(), Some(("email", &json!(true))));
    }

    #[test]
    fn test_from_json_map() {
        let map = json!({ "min": { "min": 1, "actual": 0 } })
            .as_object()
            .cloned()
            .unwrap();

        let errors = ValidationErrors::from(map);

        assert_eq!(errors.get("min"), Some(&json!({ "min": 1, "actual": 0 })));
        assert_eq!(errors.iter().count(), 1);
    }
}
