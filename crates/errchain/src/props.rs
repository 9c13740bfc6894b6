//! Serializable view of an error chain.

use crate::Error;
use serde::{Deserialize, Serialize};

/// Plain nested record produced by [`Error::to_object`].
///
/// `name`, `stack` and `link` are never part of it. `details` is only present
/// for aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<Box<ErrorProps>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorProps>>,
}

impl Error {
    /// Serialize the chain rooted at this error.
    pub fn to_object(&self) -> ErrorProps {
        ErrorProps::from(self)
    }

    /// [`Error::to_object`] as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        // String-only fields and string map keys: serialization cannot fail.
        serde_json::to_value(self.to_object()).unwrap_or(serde_json::Value::Null)
    }
}

impl From<&Error> for ErrorProps {
    fn from(err: &Error) -> Self {
        let details = err
            .is_aggregate()
            .then(|| err.errors().iter().map(ErrorProps::from).collect());

        ErrorProps {
            message: Some(err.message().to_string()),
            code: Some(err.code().to_string()),
            target: err.target().map(str::to_string),
            inner_error: err.inner_error().map(|inner| Box::new(ErrorProps::from(inner))),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_object_plain() {
        let err = Error::new("boom")
            .with_target("db::connect")
            .with_link("https://example.com/errors/boom")
            .with_stack(Some("at main".to_string()));

        let props = err.to_object();
        assert_eq!(props.message.as_deref(), Some("boom"));
        assert_eq!(props.code.as_deref(), Some("Error"));
        assert_eq!(props.target.as_deref(), Some("db::connect"));
        assert!(props.inner_error.is_none());
        assert!(props.details.is_none());
    }

    #[test]
    fn test_to_json_omits_name_stack_and_link() {
        let err = Error::timeout()
            .with_link("https://example.com")
            .with_stack(Some("at main".to_string()));
        let value = err.to_json();

        assert_eq!(
            value,
            json!({ "message": "Operation timed out.", "code": "TimeoutError" })
        );
    }

    #[test]
    fn test_to_object_recurses_into_inner_error() {
        let err = Error::new("outer").with_cause(Error::new("inner").with_code("E_INNER"));
        assert_eq!(
            err.to_json(),
            json!({
                "message": "outer",
                "code": "Error",
                "innerError": { "message": "inner", "code": "E_INNER" }
            })
        );
    }

    #[test]
    fn test_aggregate_details_in_order() {
        let err = Error::multi(vec![Error::new("a"), Error::timeout()]);
        let props = err.to_object();
        let details = props.details.expect("aggregate has details");
        let messages: Vec<_> = details.iter().filter_map(|d| d.message.as_deref()).collect();
        assert_eq!(messages, ["a", "Operation timed out."]);

        let empty = Error::multi(Vec::new()).to_json();
        assert_eq!(empty["details"], json!([]));
    }

    #[test]
    fn test_props_deserialize() {
        let props: ErrorProps = serde_json::from_value(json!({
            "message": "m",
            "innerError": { "code": "C" }
        }))
        .unwrap();
        assert_eq!(props.message.as_deref(), Some("m"));
        assert_eq!(
            props.inner_error.and_then(|inner| inner.code),
            Some("C".to_string())
        );
    }
}
