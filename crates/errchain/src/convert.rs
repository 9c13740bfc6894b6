//! Normalizing foreign errors into the chain.

use crate::error::aggregate_message;
use crate::{Error, ErrorKind};

/// An error produced outside the chain.
///
/// Only the shape matters: a message, an optional stack and cause, and an
/// optional list of aggregated errors. Having `errors` is what marks a
/// foreign error as an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForeignError {
    pub message: String,
    pub stack: Option<String>,
    pub cause: Option<Box<ForeignError>>,
    pub errors: Option<Vec<ForeignError>>,
}

impl ForeignError {
    /// A plain foreign error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// An aggregate of several foreign errors.
    pub fn aggregate(message: impl Into<String>, errors: Vec<ForeignError>) -> Self {
        Self {
            message: message.into(),
            errors: Some(errors),
            ..Self::default()
        }
    }

    /// Set the foreign cause.
    pub fn with_cause(mut self, cause: ForeignError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Set the stack text.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Check if this error carries aggregated errors
    pub fn is_aggregate(&self) -> bool {
        self.errors.is_some()
    }

    /// Snapshot a standard library error: message from `Display`, cause from
    /// `source()`.
    pub fn from_std(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut foreign = Self::new(err.to_string());
        foreign.cause = err.source().map(|source| Box::new(Self::from_std(source)));
        foreign
    }
}

/// Anything that can be attached as the cause of an [`Error`].
#[derive(Debug, Clone)]
pub enum Cause {
    /// Already part of the chain; used as is.
    Chain(Error),
    /// Produced elsewhere; converted on attach.
    Foreign(ForeignError),
}

impl From<Error> for Cause {
    fn from(err: Error) -> Self {
        Cause::Chain(err)
    }
}

impl From<ForeignError> for Cause {
    fn from(err: ForeignError) -> Self {
        Cause::Foreign(err)
    }
}

impl From<std::io::Error> for Cause {
    fn from(err: std::io::Error) -> Self {
        Cause::Foreign(ForeignError::from_std(&err))
    }
}

impl From<Box<dyn std::error::Error + Send + Sync + 'static>> for Cause {
    fn from(err: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        Cause::Foreign(ForeignError::from_std(err.as_ref()))
    }
}

/// Normalize any cause into a chain [`Error`].
///
/// Chain errors pass through untouched. Foreign aggregates go through
/// [`Error::from_foreign_aggregate`]. Any other foreign error is wrapped one
/// level deep: message and stack are copied, its own cause is dropped.
pub fn convert(cause: impl Into<Cause>) -> Error {
    match cause.into() {
        Cause::Chain(err) => err,
        Cause::Foreign(foreign) => convert_foreign(&foreign),
    }
}

fn convert_foreign(foreign: &ForeignError) -> Error {
    if foreign.is_aggregate() {
        Error::from_foreign_aggregate(foreign)
    } else {
        tracing::trace!("wrapping foreign error '{}'", foreign.message);
        wrap_plain(foreign)
    }
}

fn wrap_plain(foreign: &ForeignError) -> Error {
    Error::with_kind(ErrorKind::Base, foreign.message.clone()).with_stack(foreign.stack.clone())
}

impl Error {
    /// Convert a foreign aggregate into an aggregate [`Error`].
    ///
    /// Every child is converted on its own, in order. The inner error comes
    /// from the aggregate's own cause; without one it is a plain copy of the
    /// aggregate itself (message and stack only).
    pub fn from_foreign_aggregate(foreign: &ForeignError) -> Error {
        let children = foreign.errors.as_deref().unwrap_or_default();
        tracing::trace!(
            "converting foreign aggregate '{}' with {} errors",
            foreign.message,
            children.len()
        );

        let errors = children.iter().map(convert_foreign).collect();
        let inner = match &foreign.cause {
            Some(cause) => convert_foreign(cause),
            None => wrap_plain(foreign),
        };

        let message = aggregate_message(foreign.message.clone());

        Error::with_kind(ErrorKind::Aggregate, message)
            .with_stack(foreign.stack.clone())
            .with_errors(errors)
            .with_cause(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_error_passes_through() {
        let err = Error::new("boom").with_code("E1");
        let converted = convert(err);
        assert_eq!(converted.message(), "boom");
        assert_eq!(converted.code(), "E1");
    }

    #[test]
    fn test_plain_foreign_is_wrapped_one_level() {
        let foreign = ForeignError::new("boom")
            .with_stack("Error: boom\n    at main (x.js:1)")
            .with_cause(ForeignError::new("deeper"));

        let err = convert(foreign);
        assert_eq!(err.kind(), ErrorKind::Base);
        assert_eq!(err.message(), "boom");
        assert_eq!(err.stack(), Some("Error: boom\n    at main (x.js:1)"));
        assert!(err.inner_error().is_none());
    }

    #[test]
    fn test_from_std_snapshots_sources() {
        let io = std::io::Error::other(Error::new("root"));
        let foreign = ForeignError::from_std(&io);
        assert_eq!(foreign.message, "Error: root");
        assert!(!foreign.is_aggregate());
    }

    #[test]
    fn test_io_error_as_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
        let err = Error::new("load failed").with_cause(io);
        let inner = err.inner_error().map(|e| e.message());
        assert_eq!(inner, Some("config.toml missing"));
    }

    #[test]
    fn test_aggregate_children_converted_in_order() {
        let foreign = ForeignError::aggregate(
            "two failed",
            vec![
                ForeignError::new("first"),
                ForeignError::aggregate("nested", vec![ForeignError::new("third")]),
            ],
        );

        let err = convert(foreign);
        assert!(err.is_aggregate());
        assert_eq!(err.message(), "two failed");
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.errors()[0].message(), "first");
        assert!(err.errors()[1].is_aggregate());
        assert_eq!(err.errors()[1].errors()[0].message(), "third");
    }

    #[test]
    fn test_aggregate_inner_from_own_cause() {
        let foreign = ForeignError::aggregate("batch", vec![ForeignError::new("child")])
            .with_cause(ForeignError::new("upstream"));

        let err = Error::from_foreign_aggregate(&foreign);
        let inner = err.inner_error().map(|e| e.message());
        assert_eq!(inner, Some("upstream"));
    }

    #[test]
    fn test_aggregate_inner_falls_back_to_self_copy() {
        let foreign = ForeignError::aggregate("batch", vec![ForeignError::new("child")])
            .with_stack("at run (a.js:3)");

        let err = Error::from_foreign_aggregate(&foreign);
        let inner = err.inner_error().expect("fallback inner error");
        assert_eq!(inner.message(), "batch");
        assert_eq!(inner.stack(), Some("at run (a.js:3)"));
        assert!(!inner.is_aggregate());
        assert!(inner.errors().is_empty());
        assert!(inner.inner_error().is_none());
    }

    #[test]
    fn test_converted_aggregate_keeps_its_inner_error() {
        let err = Error::from_foreign_aggregate(&ForeignError::aggregate("batch", vec![]))
            .with_cause(Error::new("other"));
        assert_eq!(err.inner_error().map(|e| e.message()), Some("batch"));
    }

    #[test]
    fn test_aggregate_empty_message_uses_default() {
        let err = convert(ForeignError::aggregate("", Vec::new()));
        assert_eq!(err.message(), "One or more errors occurred.");
    }
}
