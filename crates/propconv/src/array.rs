//! Lifting element converters to sequence converters.

use serde_json::Value;

use crate::{
    convert::{Convert, convert},
    diagnostics,
    error::ConvertError,
};

/// Convert a sequence element-wise with `element`.
///
/// Null gives an empty vector silently. Any other non-sequence gives an empty
/// vector and a single diagnostic naming `array_name`. Length and order are
/// preserved; each element degrades on its own according to `element`.
pub fn convert_array_with<T>(
    json: &Value,
    array_name: &str,
    element: impl Fn(&Value) -> T,
) -> Vec<T> {
    match json {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(element).collect(),
        other => {
            diagnostics::report_error(other, array_name, &ConvertError::mismatch("array", other));
            Vec::new()
        }
    }
}

/// Diagnostic name of a sequence of `T`, e.g. `[Color]`.
pub fn array_type_name(element: &str) -> String {
    format!("[{element}]")
}

/// Convert a sequence of `T` using its scalar converter.
pub fn convert_array<T: Convert>(json: &Value) -> Vec<T> {
    convert_array_with(json, &array_type_name(T::NAME), convert::<T>)
}

/// Lift a scalar converter for `element_name` into a converter over
/// sequences.
///
/// Diagnostics for non-sequence input name the sequence type, e.g. `[Color]`.
pub fn lift<T, F>(element_name: &str, element: F) -> impl Fn(&Value) -> Vec<T>
where
    F: Fn(&Value) -> T,
{
    let array_name = array_type_name(element_name);
    move |json| convert_array_with(json, &array_name, &element)
}
