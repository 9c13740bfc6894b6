//! Error kinds for the error chain model

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The kind of error that occurred.
///
/// Every error in the chain shares one record shape; the kind only decides the
/// default `name` and default message. Argument kinds additionally carry a
/// parameter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display, EnumIter)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// A plain error with no preset defaults
    Base,

    /// Several parallel failures aggregated into one node
    Aggregate,

    // =========================================================================
    // Argument errors
    // =========================================================================
    /// An argument is invalid
    Argument,

    /// An argument is null or absent
    ArgumentNull,

    /// An argument is null or empty
    ArgumentEmpty,

    /// An argument is null, empty or whitespace
    ArgumentWhiteSpace,

    /// An argument is out of range
    ArgumentRange,

    // =========================================================================
    // Operation errors
    // =========================================================================
    /// Assertion failed
    Assertion,

    /// Timeout occurred
    Timeout,

    /// The requested operation is not supported
    NotSupported,

    /// The object has already been disposed
    ObjectDisposed,

    /// Feature or operation not implemented
    NotImplemented,

    /// Operation is not valid in the current state
    InvalidOperation,

    /// A value could not be cast to the requested type
    InvalidCast,

    /// A null or absent reference was dereferenced
    NullReference,

    /// Input was not in the expected format
    Format,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this kind belongs to the argument family
    pub fn is_argument(&self) -> bool {
        matches!(
            self,
            ErrorKind::Argument
                | ErrorKind::ArgumentNull
                | ErrorKind::ArgumentEmpty
                | ErrorKind::ArgumentWhiteSpace
                | ErrorKind::ArgumentRange
        )
    }

    /// The `name` an error of this kind starts with.
    ///
    /// The whole argument family reports `ArgumentError`.
    pub fn default_name(&self) -> &'static str {
        match self {
            ErrorKind::Base => "Error",
            ErrorKind::Aggregate => "AggregateError",
            ErrorKind::Argument
            | ErrorKind::ArgumentNull
            | ErrorKind::ArgumentEmpty
            | ErrorKind::ArgumentWhiteSpace
            | ErrorKind::ArgumentRange => "ArgumentError",
            ErrorKind::Assertion => "AssertionError",
            ErrorKind::Timeout => "TimeoutError",
            ErrorKind::NotSupported => "NotSupportedError",
            ErrorKind::ObjectDisposed => "ObjectDisposedError",
            ErrorKind::NotImplemented => "NotImplementedError",
            ErrorKind::InvalidOperation => "InvalidOperationError",
            ErrorKind::InvalidCast => "InvalidCastError",
            ErrorKind::NullReference => "NullReferenceError",
            ErrorKind::Format => "FormatError",
        }
    }

    /// The message used when the caller does not supply one.
    pub fn default_message(&self, parameter_name: Option<&str>) -> String {
        let argument = |rest: &str| match parameter_name {
            Some(name) => format!("Argument {} {}", name, rest),
            None => format!("Argument {}", rest),
        };

        match self {
            ErrorKind::Base => String::new(),
            ErrorKind::Aggregate => "One or more errors occurred.".to_string(),
            ErrorKind::Argument => argument("is invalid."),
            ErrorKind::ArgumentNull => argument("must not be null or undefined."),
            ErrorKind::ArgumentEmpty => argument("must not be null or empty."),
            ErrorKind::ArgumentWhiteSpace => argument("must not be null, empty, or whitespace."),
            ErrorKind::ArgumentRange => argument("is out of range."),
            ErrorKind::Assertion => "Assertion failed.".to_string(),
            ErrorKind::Timeout => "Operation timed out.".to_string(),
            ErrorKind::NotSupported => "Operation is not supported.".to_string(),
            ErrorKind::ObjectDisposed => "Object has been disposed.".to_string(),
            ErrorKind::NotImplemented => "Not implemented".to_string(),
            ErrorKind::InvalidOperation => "Invalid operation".to_string(),
            ErrorKind::InvalidCast => "Invalid cast".to_string(),
            ErrorKind::NullReference => "Null or undefined reference".to_string(),
            ErrorKind::Format => "Format SystemError".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ArgumentNull.to_string(), "ArgumentNull");
        assert_eq!(ErrorKind::Timeout.as_str(), "Timeout");
    }

    #[test]
    fn test_argument_family_shares_name() {
        for kind in ErrorKind::iter().filter(|k| k.is_argument()) {
            assert_eq!(kind.default_name(), "ArgumentError", "{kind}");
        }
        assert!(!ErrorKind::Timeout.is_argument());
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(
            ErrorKind::ArgumentWhiteSpace.default_message(Some("p")),
            "Argument p must not be null, empty, or whitespace."
        );
        assert_eq!(
            ErrorKind::ArgumentRange.default_message(None),
            "Argument is out of range."
        );
        assert_eq!(
            ErrorKind::Aggregate.default_message(None),
            "One or more errors occurred."
        );
        assert_eq!(ErrorKind::Format.default_message(Some("ignored")), "Format SystemError");
    }

    #[test]
    fn test_every_kind_has_a_name() {
        for kind in ErrorKind::iter() {
            assert!(kind.default_name().ends_with("Error"), "{kind}");
        }
    }
}
