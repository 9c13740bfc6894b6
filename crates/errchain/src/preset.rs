//! Preset constructors and argument validators.

use crate::{Error, ErrorKind, Result};

impl Error {
    /// Create an error of the given kind.
    ///
    /// The message defaults to the kind's template, with `parameter_name`
    /// filled in for argument kinds. `parameter_name` is only stored for
    /// argument kinds.
    pub fn preset(kind: ErrorKind, parameter_name: Option<&str>, message: Option<&str>) -> Self {
        let message = match message {
            Some(message) => message.to_string(),
            None => kind.default_message(parameter_name),
        };

        let parameter_name = parameter_name
            .filter(|_| kind.is_argument())
            .map(str::to_string);

        Self::with_kind(kind, message)
            .with_parameter_name(parameter_name)
            .with_captured_stack()
    }

    /// Create an Argument error
    pub fn argument(parameter_name: &str) -> Self {
        Self::preset(ErrorKind::Argument, Some(parameter_name), None)
    }

    /// Create an Argument error with an explicit message
    pub fn argument_with_message(parameter_name: &str, message: &str) -> Self {
        Self::preset(ErrorKind::Argument, Some(parameter_name), Some(message))
    }

    /// Create an ArgumentNull error
    pub fn argument_null(parameter_name: &str) -> Self {
        Self::preset(ErrorKind::ArgumentNull, Some(parameter_name), None)
    }

    /// Create an ArgumentNull error with an explicit message
    pub fn argument_null_with_message(parameter_name: &str, message: &str) -> Self {
        Self::preset(ErrorKind::ArgumentNull, Some(parameter_name), Some(message))
    }

    /// Create an ArgumentEmpty error
    pub fn argument_empty(parameter_name: &str) -> Self {
        Self::preset(ErrorKind::ArgumentEmpty, Some(parameter_name), None)
    }

    /// Create an ArgumentEmpty error with an explicit message
    pub fn argument_empty_with_message(parameter_name: &str, message: &str) -> Self {
        Self::preset(ErrorKind::ArgumentEmpty, Some(parameter_name), Some(message))
    }

    /// Create an ArgumentWhiteSpace error
    pub fn argument_white_space(parameter_name: &str) -> Self {
        Self::preset(ErrorKind::ArgumentWhiteSpace, Some(parameter_name), None)
    }

    /// Create an ArgumentWhiteSpace error with an explicit message
    pub fn argument_white_space_with_message(parameter_name: &str, message: &str) -> Self {
        Self::preset(ErrorKind::ArgumentWhiteSpace, Some(parameter_name), Some(message))
    }

    /// Create an ArgumentRange error
    pub fn argument_range(parameter_name: &str) -> Self {
        Self::preset(ErrorKind::ArgumentRange, Some(parameter_name), None)
    }

    /// Create an ArgumentRange error with an explicit message
    pub fn argument_range_with_message(parameter_name: &str, message: &str) -> Self {
        Self::preset(ErrorKind::ArgumentRange, Some(parameter_name), Some(message))
    }

    /// Create an Assertion error
    pub fn assertion() -> Self {
        Self::preset(ErrorKind::Assertion, None, None)
    }

    /// Create an Assertion error with an explicit message
    pub fn assertion_with_message(message: &str) -> Self {
        Self::preset(ErrorKind::Assertion, None, Some(message))
    }

    /// Create a Timeout error
    pub fn timeout() -> Self {
        Self::preset(ErrorKind::Timeout, None, None)
    }

    /// Create a Timeout error with an explicit message
    pub fn timeout_with_message(message: &str) -> Self {
        Self::preset(ErrorKind::Timeout, None, Some(message))
    }

    /// Create a NotSupported error
    pub fn not_supported() -> Self {
        Self::preset(ErrorKind::NotSupported, None, None)
    }

    /// Create a NotSupported error with an explicit message
    pub fn not_supported_with_message(message: &str) -> Self {
        Self::preset(ErrorKind::NotSupported, None, Some(message))
    }

    /// Create an ObjectDisposed error
    pub fn object_disposed() -> Self {
        Self::preset(ErrorKind::ObjectDisposed, None, None)
    }

    /// Create a NotImplemented error
    pub fn not_implemented() -> Self {
        Self::preset(ErrorKind::NotImplemented, None, None)
    }

    /// Create an InvalidOperation error
    pub fn invalid_operation() -> Self {
        Self::preset(ErrorKind::InvalidOperation, None, None)
    }

    /// Create an InvalidOperation error with an explicit message
    pub fn invalid_operation_with_message(message: &str) -> Self {
        Self::preset(ErrorKind::InvalidOperation, None, Some(message))
    }

    /// Create an InvalidCast error
    pub fn invalid_cast() -> Self {
        Self::preset(ErrorKind::InvalidCast, None, None)
    }

    /// Create a NullReference error
    pub fn null_reference() -> Self {
        Self::preset(ErrorKind::NullReference, None, None)
    }

    /// Create a Format error
    pub fn format_error() -> Self {
        Self::preset(ErrorKind::Format, None, None)
    }
}

/// Fail with an ArgumentNull error when `value` is absent.
pub fn validate_not_null<T: ?Sized>(value: Option<&T>, parameter_name: &str) -> Result<()> {
    if value.is_none() {
        tracing::debug!("argument '{}' is null", parameter_name);
        return Err(Error::argument_null(parameter_name));
    }
    Ok(())
}

/// Fail with an ArgumentEmpty error when `value` is absent or empty.
pub fn validate_not_empty(value: Option<&str>, parameter_name: &str) -> Result<()> {
    match value {
        Some(value) if !value.is_empty() => Ok(()),
        _ => {
            tracing::debug!("argument '{}' is empty", parameter_name);
            Err(Error::argument_empty(parameter_name))
        }
    }
}

/// Fail with an ArgumentWhiteSpace error when `value` is absent, empty or
/// whitespace only.
pub fn validate_not_white_space(value: Option<&str>, parameter_name: &str) -> Result<()> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(()),
        _ => {
            tracing::debug!("argument '{}' is blank", parameter_name);
            Err(Error::argument_white_space(parameter_name))
        }
    }
}
