//! Boolean and numeric converters.
//!
//! Numbers accept JSON numbers, numeric-looking strings (surrounding
//! whitespace is ignored), and booleans as 1/0. Floats going to integer types
//! are truncated toward zero and saturate at the type bounds. Unsigned types
//! reject negative input.

use serde_json::Value;

use crate::{
    convert::{Convert, convert},
    error::ConvertError,
};

/// Convert `json` to `f64`, degrading to 0 with a diagnostic.
pub fn number(json: &Value) -> f64 {
    convert::<f64>(json)
}

/// Strict float read shared by every numeric converter.
fn try_f64(json: &Value, name: &'static str) -> Result<f64, ConvertError> {
    match json {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ConvertError::out_of_range(name, n)),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            _ => Err(ConvertError::parse(name, s)),
        },
        other => Err(ConvertError::mismatch("number or numeric string", other)),
    }
}

/// Strict signed integer read, exact when the input is integral.
fn try_i64(json: &Value, name: &'static str) -> Result<i64, ConvertError> {
    match json {
        Value::Number(n) if n.is_i64() => n
            .as_i64()
            .ok_or_else(|| ConvertError::out_of_range(name, n)),
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => Ok(i),
            Err(_) => try_f64(json, name).map(|f| f as i64),
        },
        _ => try_f64(json, name).map(|f| f as i64),
    }
}

/// Strict unsigned integer read, exact when the input is integral.
fn try_u64(json: &Value, name: &'static str) -> Result<u64, ConvertError> {
    let exact = match json {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    if let Some(u) = exact {
        return Ok(u);
    }
    let f = try_f64(json, name)?;
    if f < 0.0 {
        return Err(ConvertError::out_of_range(name, f));
    }
    Ok(f as u64)
}

impl Convert for bool {
    const NAME: &'static str = "bool";

    fn fallback() -> Self {
        false
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        match json {
            Value::Bool(b) => Ok(*b),
            Value::Number(_) => try_f64(json, Self::NAME).map(|f| f != 0.0),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(true),
                "false" | "no" | "0" => Ok(false),
                _ => Err(ConvertError::parse(Self::NAME, s)),
            },
            other => Err(ConvertError::mismatch("boolean", other)),
        }
    }
}

impl Convert for f64 {
    const NAME: &'static str = "f64";

    fn fallback() -> Self {
        0.0
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        try_f64(json, Self::NAME)
    }
}

impl Convert for f32 {
    const NAME: &'static str = "f32";

    fn fallback() -> Self {
        0.0
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        try_f64(json, Self::NAME).map(|f| f as f32)
    }
}

impl Convert for i64 {
    const NAME: &'static str = "i64";

    fn fallback() -> Self {
        0
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        try_i64(json, Self::NAME)
    }
}

impl Convert for i32 {
    const NAME: &'static str = "i32";

    fn fallback() -> Self {
        0
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let i = try_i64(json, Self::NAME)?;
        Ok(i.clamp(Self::MIN.into(), Self::MAX.into()) as Self)
    }
}

impl Convert for isize {
    const NAME: &'static str = "isize";

    fn fallback() -> Self {
        0
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let i = try_i64(json, Self::NAME)?;
        Ok(Self::try_from(i).unwrap_or(if i < 0 { Self::MIN } else { Self::MAX }))
    }
}

impl Convert for u64 {
    const NAME: &'static str = "u64";

    fn fallback() -> Self {
        0
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        try_u64(json, Self::NAME)
    }
}

impl Convert for usize {
    const NAME: &'static str = "usize";

    fn fallback() -> Self {
        0
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let u = try_u64(json, Self::NAME)?;
        Ok(Self::try_from(u).unwrap_or(Self::MAX))
    }
}
