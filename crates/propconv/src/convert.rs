//! The conversion contract shared by every catalog type.

use serde_json::Value;

use crate::{diagnostics, error::ConvertError, number::number};

/// A native type that can be produced from a JSON value.
///
/// Implementations only describe the happy path in [`Convert::try_convert`];
/// null handling, fallback, and diagnostics are applied uniformly by
/// [`convert`].
pub trait Convert: Sized {
    /// Type name used in diagnostics and as the registry key.
    const NAME: &'static str;

    /// Value produced for null input and after a failed conversion.
    fn fallback() -> Self;

    /// Convert a non-null value.
    fn try_convert(json: &Value) -> Result<Self, ConvertError>;

    /// Convert `json`, degrading to [`Convert::fallback`] on invalid input.
    fn from_json(json: &Value) -> Self {
        convert(json)
    }
}

/// Convert `json` into `T`.
///
/// Null yields `T::fallback()` silently. Invalid input yields `T::fallback()`
/// and reports the value and `T::NAME` to the diagnostics sink. Never fails.
pub fn convert<T: Convert>(json: &Value) -> T {
    if json.is_null() {
        return T::fallback();
    }
    match T::try_convert(json) {
        Ok(v) => v,
        Err(err) => {
            diagnostics::report_error(json, T::NAME, &err);
            T::fallback()
        }
    }
}

/// Read `N` numeric fields from a mapping (by key) or a sequence (by position).
///
/// Mapping fields that are absent read as 0; present fields go through the
/// numeric converter, so a bad field degrades to 0 on its own. Sequences must
/// have exactly `N` elements.
pub(crate) fn numeric_fields<const N: usize>(
    json: &Value,
    keys: [&str; N],
) -> Result<[f64; N], ConvertError> {
    let mut out = [0.0; N];
    match json {
        Value::Object(map) => {
            for (slot, key) in out.iter_mut().zip(keys) {
                if let Some(v) = map.get(key) {
                    *slot = number(v);
                }
            }
            Ok(out)
        }
        Value::Array(items) if items.len() == N => {
            for (slot, v) in out.iter_mut().zip(items) {
                *slot = number(v);
            }
            Ok(out)
        }
        Value::Array(items) => Err(ConvertError::Length {
            expected: N,
            found: items.len(),
        }),
        other => Err(ConvertError::mismatch("object or array", other)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn fields_from_object_default_missing_to_zero() {
        let got = numeric_fields(&json!({"x": 1.5, "z": 9}), ["x", "y"]).unwrap();
        assert_eq!(got, [1.5, 0.0]);
    }

    #[test]
    fn fields_from_array_require_exact_length() {
        assert_eq!(numeric_fields(&json!([1, 2]), ["x", "y"]).unwrap(), [1.0, 2.0]);
        assert_eq!(
            numeric_fields(&json!([1, 2, 3]), ["x", "y"]),
            Err(ConvertError::Length {
                expected: 2,
                found: 3
            })
        );
        assert!(matches!(
            numeric_fields(&json!("1,2"), ["x", "y"]),
            Err(ConvertError::Mismatch { .. })
        ));
    }
}
