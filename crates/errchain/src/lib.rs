//! # errchain
//!
//! Structured errors with stable codes, targets and causal chains.
//!
//! ## Design Philosophy
//!
//! - **Error**: one record shape for plain errors, aggregates and presets
//! - **ErrorKind**: which preset produced it (default name and message)
//! - **Inner error**: the error that caused this one, fixed at construction
//! - **Aggregate**: several parallel failures collected into one node
//!
//! ## Usage
//!
//! ```rust
//! use errchain::{Error, ForeignError};
//!
//! let err = Error::new("failed to load settings")
//!     .with_code("E_SETTINGS")
//!     .with_target("settings::load")
//!     .with_cause(ForeignError::new("permission denied"));
//!
//! assert_eq!(err.code(), "E_SETTINGS");
//! assert_eq!(err.collect().len(), 2);
//! assert_eq!(err.to_json()["innerError"]["message"], "permission denied");
//! ```
//!
//! ## Traversal
//!
//! [`walk`], [`collect`] and [`print_error`] all visit aggregated errors
//! first, then the inner error, then the node itself.

mod convert;
mod error;
mod kind;
mod preset;
mod print;
mod props;
mod traverse;

pub use convert::{Cause, ForeignError, convert};
pub use error::Error;
pub use kind::ErrorKind;
pub use preset::{validate_not_empty, validate_not_null, validate_not_white_space};
pub use print::{PrintConfig, PrintFormat, Printer, print_error, print_error_with, render};
pub use props::ErrorProps;
pub use traverse::{collect, walk};

/// Result type alias using the chain Error
pub type Result<T> = std::result::Result<T, Error>;
