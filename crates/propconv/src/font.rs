//! Fonts derived from a base font plus JSON overrides.
//!
//! Every derivation treats the base as input-with-defaults: an absent (null)
//! override keeps the base's attribute, and an invalid one falls back to the
//! base attribute as well, after reporting a diagnostic.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    catalog::{FontStyle, FontWeight},
    convert::{Convert, convert},
    diagnostics,
    error::ConvertError,
};

/// Family used when nothing else is specified.
pub const DEFAULT_FAMILY: &str = "System";
/// Point size used when nothing else is specified.
pub const DEFAULT_SIZE: f64 = 14.0;

/// A font description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name.
    pub family: String,
    /// Point size.
    pub size: f64,
    /// Stroke weight.
    pub weight: FontWeight,
    /// Slant.
    pub style: FontStyle,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: DEFAULT_FAMILY.to_string(),
            size: DEFAULT_SIZE,
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
        }
    }
}

/// Convert `json` to `T`, using `base` for null and invalid input.
fn override_or<T: Convert>(json: &Value, base: T) -> T {
    if json.is_null() {
        return base;
    }
    match T::try_convert(json) {
        Ok(v) => v,
        Err(err) => {
            diagnostics::report_error(json, T::NAME, &err);
            base
        }
    }
}

impl Font {
    /// Derive a font with its size replaced by `json`. Sizes must be positive.
    pub fn with_size(&self, json: &Value) -> Self {
        let size = override_or(json, self.size);
        Self {
            size: if size > 0.0 { size } else { self.size },
            ..self.clone()
        }
    }

    /// Derive a font with its weight replaced by `json`.
    pub fn with_weight(&self, json: &Value) -> Self {
        Self {
            weight: override_or(json, self.weight),
            ..self.clone()
        }
    }

    /// Derive a font with its style replaced by `json`.
    pub fn with_style(&self, json: &Value) -> Self {
        Self {
            style: override_or(json, self.style),
            ..self.clone()
        }
    }

    /// Derive a font with its family replaced by `json`. Empty names are ignored.
    pub fn with_family(&self, json: &Value) -> Self {
        let family = override_or(json, self.family.clone());
        Self {
            family: if family.trim().is_empty() {
                self.family.clone()
            } else {
                family
            },
            ..self.clone()
        }
    }

    /// Apply every override at once; null arguments keep the base attribute.
    pub fn with_overrides(
        &self,
        family: &Value,
        size: &Value,
        weight: &Value,
        style: &Value,
    ) -> Self {
        self.with_family(family)
            .with_size(size)
            .with_weight(weight)
            .with_style(style)
    }
}

/// Keys of the mapping form.
const FAMILY: &str = "family";
/// Size key.
const SIZE: &str = "size";
/// Weight key.
const WEIGHT: &str = "weight";
/// Style key.
const STYLE: &str = "style";

impl Convert for Font {
    const NAME: &'static str = "Font";

    fn fallback() -> Self {
        Self::default()
    }

    /// `{"family", "size", "weight", "style"}` over [`Font::default`]; a bare
    /// number is a size and a bare string a family.
    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let base = Self::default();
        match json {
            Value::Object(map) => {
                let field = |k: &str| map.get(k).unwrap_or(&Value::Null);
                Ok(base.with_overrides(field(FAMILY), field(SIZE), field(WEIGHT), field(STYLE)))
            }
            Value::Number(_) => Ok(base.with_size(json)),
            Value::String(_) => Ok(base.with_family(json)),
            other => Err(ConvertError::mismatch("font object, size or family", other)),
        }
    }
}

/// Convert a font mapping over `base` instead of the default font.
pub fn font_over(base: &Font, json: &Value) -> Font {
    match json {
        Value::Object(map) => {
            let field = |k: &str| map.get(k).unwrap_or(&Value::Null);
            base.with_overrides(field(FAMILY), field(SIZE), field(WEIGHT), field(STYLE))
        }
        Value::Null => base.clone(),
        _ => convert::<Font>(json),
    }
}
