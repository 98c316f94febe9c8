//! String, byte, URL, and raw JSON passthrough converters.

use serde_json::{Map, Value};
use url::Url;

use crate::{convert::Convert, error::ConvertError};

impl Convert for String {
    const NAME: &'static str = "String";

    fn fallback() -> Self {
        Self::new()
    }

    /// Strings pass through; numbers and booleans use their JSON text form.
    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        match json {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(ConvertError::mismatch("string", other)),
        }
    }
}

/// Raw bytes, taken from the UTF-8 encoding of a string.
impl Convert for Vec<u8> {
    const NAME: &'static str = "Bytes";

    fn fallback() -> Self {
        Self::new()
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        match json {
            Value::String(s) => Ok(s.as_bytes().to_vec()),
            other => Err(ConvertError::mismatch("string", other)),
        }
    }
}

/// Any JSON value, unchanged.
impl Convert for Value {
    const NAME: &'static str = "Value";

    fn fallback() -> Self {
        Self::Null
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        Ok(json.clone())
    }
}

/// A JSON mapping, unchanged.
impl Convert for Map<String, Value> {
    const NAME: &'static str = "Map";

    fn fallback() -> Self {
        Self::new()
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        match json {
            Value::Object(map) => Ok(map.clone()),
            other => Err(ConvertError::mismatch("object", other)),
        }
    }
}

/// An absolute URL. Absolute filesystem paths become `file://` URLs and the
/// empty string means "no URL".
impl Convert for Option<Url> {
    const NAME: &'static str = "Url";

    fn fallback() -> Self {
        None
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let Value::String(s) = json else {
            return Err(ConvertError::mismatch("string", json));
        };
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        if let Ok(url) = Url::parse(s) {
            return Ok(Some(url));
        }
        if s.starts_with('/') {
            return Url::from_file_path(s)
                .map(Some)
                .map_err(|()| ConvertError::parse(Self::NAME, s));
        }
        Err(ConvertError::parse(Self::NAME, s))
    }
}
