use serde::Serialize;

use super::manifest::ERROR_DELIMITER;

/// A manifest entry annotated with its validation verdict
///
/// Built once at load time and never mutated. `error_message` is `Some`
/// exactly when `is_valid` is false; the constructors are the only way to
/// build one, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSourceDescriptor {
    name: String,
    path: String,
    is_valid: bool,
    error_message: Option<String>,
}

impl FileSourceDescriptor {
    /// A source that passed every check
    pub fn valid(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_valid: true,
            error_message: None,
        }
    }

    /// Build from the accumulated check failures; valid iff `errors` is empty
    pub fn from_checks(name: impl Into<String>, path: impl Into<String>, errors: Vec<String>) -> Self {
        let error_message = if errors.is_empty() {
            None
        } else {
            Some(errors.join(ERROR_DELIMITER))
        };
        Self {
            name: name.into(),
            path: path.into(),
            is_valid: error_message.is_none(),
            error_message,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_checks_without_errors_is_valid() {
        let d = FileSourceDescriptor::from_checks("A", "/tmp/a.json", vec![]);
        assert!(d.is_valid());
        assert!(d.error_message().is_none());
        assert_eq!(d, FileSourceDescriptor::valid("A", "/tmp/a.json"));
    }

    #[test]
    fn test_from_checks_joins_errors() {
        let d = FileSourceDescriptor::from_checks(
            "Unnamed Source 1",
            "rel.json",
            vec!["first.".to_string(), "second.".to_string()],
        );
        assert!(!d.is_valid());
        assert_eq!(d.error_message(), Some("first. | second."));
    }

    #[test]
    fn test_serialized_shape() {
        let d = FileSourceDescriptor::valid("A", "/tmp/a.json");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "A",
                "path": "/tmp/a.json",
                "is_valid": true,
                "error_message": null,
            })
        );
    }
}
