//! Geometric primitives and their converters.
//!
//! Every type converts from a mapping of named fields or a sequence holding
//! the same fields in declaration order. Absent mapping fields are 0, for the
//! transforms too: `{}` is the zero matrix, not the identity.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    convert::{Convert, numeric_fields},
    error::ConvertError,
};

/// A point in a two-dimensional coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Convert for Point {
    const NAME: &'static str = "Point";

    fn fallback() -> Self {
        Self::default()
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let [x, y] = numeric_fields(json, ["x", "y"])?;
        Ok(Self { x, y })
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Convert for Size {
    const NAME: &'static str = "Size";

    fn fallback() -> Self {
        Self::default()
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let [width, height] = numeric_fields(json, ["width", "height"])?;
        Ok(Self { width, height })
    }
}

/// An origin and a size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// Build a rect from its four components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }
}

impl Convert for Rect {
    const NAME: &'static str = "Rect";

    fn fallback() -> Self {
        Self::default()
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let [x, y, width, height] = numeric_fields(json, ["x", "y", "width", "height"])?;
        Ok(Self::new(x, y, width, height))
    }
}

/// Per-edge insets (margins, paddings, borders, hit slop).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the right edge.
    pub right: f64,
}

impl EdgeInsets {
    /// The same inset on every edge.
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            left: v,
            bottom: v,
            right: v,
        }
    }
}

impl Convert for EdgeInsets {
    const NAME: &'static str = "EdgeInsets";

    fn fallback() -> Self {
        Self::default()
    }

    /// A single number applies to all four edges.
    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        if let Value::Number(_) | Value::String(_) = json {
            return <f64 as Convert>::try_convert(json).map(Self::uniform);
        }
        let [top, left, bottom, right] = numeric_fields(json, ["top", "left", "bottom", "right"])?;
        Ok(Self {
            top,
            left,
            bottom,
            right,
        })
    }
}

/// A 2D affine transform `[a b 0; c d 0; tx ty 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    /// Row 1, column 1.
    pub a: f64,
    /// Row 1, column 2.
    pub b: f64,
    /// Row 2, column 1.
    pub c: f64,
    /// Row 2, column 2.
    pub d: f64,
    /// Horizontal translation.
    pub tx: f64,
    /// Vertical translation.
    pub ty: f64,
}

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Convert for AffineTransform {
    const NAME: &'static str = "AffineTransform";

    fn fallback() -> Self {
        Self::IDENTITY
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let [a, b, c, d, tx, ty] = numeric_fields(json, ["a", "b", "c", "d", "tx", "ty"])?;
        Ok(Self {
            a,
            b,
            c,
            d,
            tx,
            ty,
        })
    }
}

/// A 4x4 homogeneous transform, row-major (`m[0][3]` is `m14`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Matrix rows.
    pub m: [[f64; 4]; 4],
}

impl Transform3D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// A pure translation.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[3] = [x, y, z, 1.0];
        t
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Field keys `m11`..`m44` in row-major order.
const MATRIX_KEYS: [&str; 16] = [
    "m11", "m12", "m13", "m14", "m21", "m22", "m23", "m24", "m31", "m32", "m33", "m34", "m41",
    "m42", "m43", "m44",
];

impl Convert for Transform3D {
    const NAME: &'static str = "Transform3D";

    fn fallback() -> Self {
        Self::IDENTITY
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        let flat = numeric_fields(json, MATRIX_KEYS)?;
        let mut m = [[0.0; 4]; 4];
        for (i, v) in flat.into_iter().enumerate() {
            m[i / 4][i % 4] = v;
        }
        Ok(Self { m })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::{
        convert::convert,
        diagnostics::{RecordingLog, with_sink},
    };

    #[test]
    fn points_and_sizes_from_either_shape() {
        assert_eq!(convert::<Point>(&json!({"x": 1, "y": "2"})), Point { x: 1.0, y: 2.0 });
        assert_eq!(convert::<Point>(&json!([3, 4])), Point { x: 3.0, y: 4.0 });
        assert_eq!(
            convert::<Size>(&json!({"width": 5})),
            Size {
                width: 5.0,
                height: 0.0
            }
        );
    }

    #[test]
    fn rect_fields_in_order() {
        assert_eq!(convert::<Rect>(&json!([1, 2, 3, 4])), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            convert::<Rect>(&json!({"x": 1, "height": 4})),
            Rect::new(1.0, 0.0, 0.0, 4.0)
        );
    }

    #[test]
    fn insets_accept_uniform_number() {
        assert_eq!(convert::<EdgeInsets>(&json!(8)), EdgeInsets::uniform(8.0));
        let e = convert::<EdgeInsets>(&json!({"top": 1, "right": 4}));
        assert_eq!((e.top, e.left, e.bottom, e.right), (1.0, 0.0, 0.0, 4.0));
    }

    #[test]
    fn transforms_default_to_identity() {
        assert_eq!(convert::<AffineTransform>(&Value::Null), AffineTransform::IDENTITY);
        assert_eq!(convert::<Transform3D>(&Value::Null), Transform3D::IDENTITY);

        let flat: Vec<f64> = (0..16).map(f64::from).collect();
        let t = convert::<Transform3D>(&json!(flat));
        assert_eq!(t.m[1][2], 6.0);
        assert_eq!(t.m[3][0], 12.0);

        let a = convert::<AffineTransform>(&json!({"a": 2, "d": 2, "tx": 10}));
        assert_eq!((a.a, a.b, a.d, a.tx), (2.0, 0.0, 2.0, 10.0));
    }

    #[test]
    fn malformed_structure_falls_back_and_logs() {
        let log = Arc::new(RecordingLog::new());
        with_sink(log.clone(), || {
            assert_eq!(convert::<Point>(&json!([1, 2, 3])), Point::default());
            assert_eq!(convert::<Rect>(&json!("0 0 10 10")), Rect::default());
            assert_eq!(convert::<Transform3D>(&json!([1, 0])), Transform3D::IDENTITY);
        });
        assert_eq!(log.type_names(), vec!["Point", "Rect", "Transform3D"]);
    }

    #[test]
    fn bad_field_degrades_only_that_field() {
        let log = Arc::new(RecordingLog::new());
        let p = with_sink(log.clone(), || convert::<Point>(&json!({"x": "wide", "y": 2})));
        assert_eq!(p, Point { x: 0.0, y: 2.0 });
        assert_eq!(log.type_names(), vec!["f64"]);
    }
}
