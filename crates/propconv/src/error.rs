//! Error types for value conversion and property assignment.
//!
//! Neither type escapes the conversion layer as a failure of a converter:
//! [`ConvertError`] is swallowed by [`crate::convert()`] and turned into a
//! fallback value plus a diagnostic, and [`PropertyError`] is collapsed into a
//! boolean by [`crate::set_property`] and [`crate::copy_property`].

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a JSON value could not be converted into a native value.
pub enum ConvertError {
    /// The value has the wrong JSON shape for the target type.
    #[error("expected {expected}, found {found}")]
    Mismatch {
        /// Description of the accepted input shapes.
        expected: &'static str,
        /// JSON kind of the offending value.
        found: &'static str,
    },
    /// A string could not be parsed into the target type.
    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        /// Name of the target type.
        expected: &'static str,
        /// Offending input text.
        input: String,
    },
    /// A number does not fit the target type or its valid value set.
    #[error("{value} is out of range for {expected}")]
    OutOfRange {
        /// Name of the target type.
        expected: &'static str,
        /// Rendered offending value.
        value: String,
    },
    /// A sequence has the wrong number of elements.
    #[error("expected {expected} elements, found {found}")]
    Length {
        /// Required element count.
        expected: usize,
        /// Actual element count.
        found: usize,
    },
    /// A sequence has neither of the two accepted element counts.
    #[error("expected {short} or {long} elements, found {found}")]
    LengthEither {
        /// Shorter accepted count.
        short: usize,
        /// Longer accepted count.
        long: usize,
        /// Actual element count.
        found: usize,
    },
    /// A string is not a key of an enum table.
    #[error("unknown {name} value {key:?}")]
    UnknownName {
        /// Enum type name.
        name: &'static str,
        /// Offending key.
        key: String,
    },
}

impl ConvertError {
    /// Build a shape mismatch error for `value`.
    pub fn mismatch(expected: &'static str, value: &Value) -> Self {
        Self::Mismatch {
            expected,
            found: kind_name(value),
        }
    }

    /// Build a parse error for the string `input`.
    pub fn parse(expected: &'static str, input: &str) -> Self {
        Self::Parse {
            expected,
            input: input.to_string(),
        }
    }

    /// Build an out-of-range error for a rendered value.
    pub fn out_of_range(expected: &'static str, value: impl ToString) -> Self {
        Self::OutOfRange {
            expected,
            value: value.to_string(),
        }
    }
}

/// Short name of the JSON kind of `value`, for error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a property could not be assigned or copied.
///
/// These are expected "not applicable" outcomes, not conversion anomalies, so
/// they are never reported through the diagnostics sink.
pub enum PropertyError {
    /// No property (or intermediate child object) exists at the path.
    #[error("unknown property '{path}'")]
    Unknown {
        /// Property path as given by the caller.
        path: String,
    },
    /// The property exists but cannot be written.
    #[error("property '{path}' is read-only")]
    ReadOnly {
        /// Property path as given by the caller.
        path: String,
    },
    /// No converter is registered for the property's declared type.
    #[error("no converter for type {ty} of property '{path}'")]
    NoConverter {
        /// Property path as given by the caller.
        path: String,
        /// Rendered declared type.
        ty: String,
    },
    /// Source and destination declare the property with different types.
    #[error("property '{path}' has type {source_ty} on the source but {dest_ty} on the destination")]
    TypeMismatch {
        /// Property path as given by the caller.
        path: String,
        /// Declared type on the source object.
        source_ty: String,
        /// Declared type on the destination object.
        dest_ty: String,
    },
    /// The target refused the value handed to it.
    #[error("property '{path}' rejected the assigned value")]
    Rejected {
        /// Property path as given by the caller.
        path: String,
    },
}

impl PropertyError {
    /// Access the property path attached to this error.
    pub fn path(&self) -> &str {
        match self {
            Self::Unknown { path }
            | Self::ReadOnly { path }
            | Self::NoConverter { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::Rejected { path } => path,
        }
    }
}
