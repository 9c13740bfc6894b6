//! The error record shared by plain errors, aggregates and presets.

use crate::ErrorKind;
use crate::convert::{Cause, convert};
use serde_json::Value;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::sync::OnceLock;

/// A node in an error chain.
///
/// Carries a stable machine code, an optional target naming the operation that
/// failed, and the inner error that caused it. Aggregates additionally hold
/// the parallel failures they collect in [`Error::errors`].
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    name: String,
    code: Option<String>,
    target: Option<String>,
    parameter_name: Option<String>,
    link: Option<String>,
    inner_error: Option<Box<Error>>,
    errors: Vec<Error>,
    stack: Option<String>,
    stack_trace: OnceLock<Vec<String>>,
}

impl Error {
    /// Create a plain error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(ErrorKind::Base, message).with_captured_stack()
    }

    /// Create an aggregate of the given errors with the default message.
    pub fn multi(errors: impl IntoIterator<Item = Error>) -> Self {
        let message = ErrorKind::Aggregate.default_message(None);
        Self::multi_with_message(message, errors)
    }

    /// Create an aggregate of the given errors. An empty message falls back to
    /// the aggregate default.
    pub fn multi_with_message(
        message: impl Into<String>,
        errors: impl IntoIterator<Item = Error>,
    ) -> Self {
        let message = aggregate_message(message.into());
        let mut err = Self::with_kind(ErrorKind::Aggregate, message).with_captured_stack();
        err.errors = errors.into_iter().collect();
        err
    }

    /// Bare record of the given kind: default name, no stack, no cause.
    pub(crate) fn with_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            name: kind.default_name().to_string(),
            code: None,
            target: None,
            parameter_name: None,
            link: None,
            inner_error: None,
            errors: Vec::new(),
            stack: None,
            stack_trace: OnceLock::new(),
        }
    }

    /// Store the runtime backtrace when the runtime captured one.
    pub(crate) fn with_captured_stack(mut self) -> Self {
        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            self.set_stack(Some(backtrace.to_string()));
        }
        self
    }

    pub(crate) fn with_parameter_name(mut self, parameter_name: Option<String>) -> Self {
        self.parameter_name = parameter_name;
        self
    }

    pub(crate) fn with_errors(mut self, errors: Vec<Error>) -> Self {
        self.errors = errors;
        self
    }

    /// Attach the error that caused this one.
    ///
    /// The cause is normalized with [`convert`]: chain errors are used as is,
    /// foreign aggregates become aggregates and any other foreign error is
    /// wrapped one level deep.
    ///
    /// Only the first cause is kept; once an inner error is attached, later
    /// calls leave it in place.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        if self.inner_error.is_some() {
            tracing::debug!("inner error of '{}' already set, keeping it", self);
            return self;
        }
        self.inner_error = Some(Box::new(convert(cause)));
        self
    }

    /// Set the machine code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the operation or parameter that failed.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the documentation link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Replace the stack text.
    pub fn with_stack(mut self, stack: Option<String>) -> Self {
        self.set_stack(stack);
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the error name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the machine code, falling back to the name when none was set.
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or(&self.name)
    }

    /// Override the machine code.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = Some(code.into());
    }

    /// Drop the code override so [`Error::code`] follows the name again.
    pub fn clear_code(&mut self) {
        self.code = None;
    }

    /// Get the operation or parameter that failed
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Set or clear the operation or parameter that failed.
    pub fn set_target(&mut self, target: Option<String>) {
        self.target = target;
    }

    /// Get the parameter name (argument errors only)
    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter_name.as_deref()
    }

    /// Get the documentation link
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Set or clear the documentation link.
    pub fn set_link(&mut self, link: Option<String>) {
        self.link = link;
    }

    /// Get the error that caused this one.
    pub fn inner_error(&self) -> Option<&Error> {
        self.inner_error.as_deref()
    }

    /// Get the aggregated errors, in insertion order. Empty unless this is an
    /// aggregate.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Check if this error aggregates parallel failures
    pub fn is_aggregate(&self) -> bool {
        self.kind == ErrorKind::Aggregate
    }

    /// Get the raw stack text
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// Replace the raw stack text. The derived stack trace is recomputed on
    /// next access.
    pub fn set_stack(&mut self, stack: Option<String>) {
        self.stack = stack;
        self.stack_trace = OnceLock::new();
    }

    /// Stack frame lines of [`Error::stack`]: trimmed, keeping only lines
    /// starting with `at `.
    pub fn stack_trace(&self) -> &[String] {
        self.stack_trace
            .get_or_init(|| parse_stack_trace(self.stack.as_deref()))
    }

    /// Replace the stack trace. The raw stack becomes the lines joined with
    /// `\n`; the lines are stored as given.
    pub fn set_stack_trace(&mut self, lines: Vec<String>) {
        self.stack = Some(lines.join("\n"));
        self.stack_trace = OnceLock::from(lines);
    }

    /// Bulk-assign fields from a partial props object.
    ///
    /// Only `code`, `target`, `link` and (for argument errors) `parameterName`
    /// are applied. A string sets the field, `null` clears it. Every other
    /// key, including `name`, `stack`, `message` and `innerError`, is ignored.
    pub fn set(&mut self, props: &Value) -> &mut Self {
        let Some(props) = props.as_object() else {
            return self;
        };

        for (key, value) in props {
            let value = match value {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                _ => continue,
            };

            match key.as_str() {
                "code" => self.code = value,
                "target" => self.target = value,
                "link" => self.link = value,
                "parameterName" if self.kind.is_argument() => self.parameter_name = value,
                _ => {}
            }
        }

        self
    }
}

/// Aggregate message, defaulting when empty.
pub(crate) fn aggregate_message(message: String) -> String {
    if message.is_empty() {
        ErrorKind::Aggregate.default_message(None)
    } else {
        message
    }
}

fn parse_stack_trace(stack: Option<&str>) -> Vec<String> {
    let Some(stack) = stack else {
        return Vec::new();
    };

    stack
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("at "))
        .map(str::to_string)
        .collect()
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code())?;
        if let Some(target) = &self.target {
            write!(f, " at {}", target)?;
        }
        writeln!(f)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if let Some(parameter_name) = &self.parameter_name {
            writeln!(f, "    Parameter: {}", parameter_name)?;
        }

        if let Some(link) = &self.link {
            writeln!(f, "    Link: {}", link)?;
        }

        let stack_trace = self.stack_trace();
        if !stack_trace.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Stack:")?;
            for line in stack_trace {
                writeln!(f, "        {}", line)?;
            }
        }

        for (i, err) in self.errors.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "    Error #{}: {}", i, err)?;
        }

        if let Some(inner) = &self.inner_error {
            writeln!(f)?;
            writeln!(f, "    Inner error: {:?}", inner)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner_error
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::new(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::new(msg)
    }
}
