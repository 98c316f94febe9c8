//! Type-erased converters keyed by type name.
//!
//! The property setter never knows the concrete type of a property; it only
//! sees the type name a target declares. The registry maps that name to the
//! monomorphized scalar converter and its lifted array form.

use std::{collections::HashMap, fmt, sync::OnceLock, time::Duration};

use serde_json::{Map, Value};
use time::{OffsetDateTime, UtcOffset};
use url::Url;

use crate::{
    array::convert_array,
    catalog::*,
    color::Color,
    convert::{Convert, convert},
    font::Font,
    geometry::{AffineTransform, EdgeInsets, Point, Rect, Size, Transform3D},
    value::{Native, PropValue},
};

/// Declared type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropType {
    /// A single value of the named type.
    Scalar(&'static str),
    /// A sequence of values of the named element type.
    Array(&'static str),
}

impl PropType {
    /// The scalar type of `T`.
    pub fn of<T: Convert>() -> Self {
        Self::Scalar(T::NAME)
    }

    /// A sequence of `T`.
    pub fn array_of<T: Convert>() -> Self {
        Self::Array(T::NAME)
    }

    /// Name of the scalar or element type.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Scalar(name) | Self::Array(name) => name,
        }
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(name) => f.write_str(name),
            Self::Array(name) => write!(f, "[{name}]"),
        }
    }
}

/// Type-erased converters for one registered type.
#[derive(Clone, Copy)]
pub struct Converter {
    /// Registered type name.
    pub type_name: &'static str,
    /// The type's fallback value.
    pub fallback: fn() -> PropValue,
    /// Scalar conversion producing a `T`.
    pub scalar: fn(&Value) -> PropValue,
    /// Sequence conversion producing a `Vec<T>`.
    pub array: fn(&Value) -> PropValue,
}

impl Converter {
    /// Converters for `T`.
    pub fn of<T: Convert + Native>() -> Self {
        Self {
            type_name: T::NAME,
            fallback: || PropValue::new(T::fallback()),
            scalar: |json| PropValue::new(convert::<T>(json)),
            array: |json| PropValue::new(convert_array::<T>(json)),
        }
    }

    /// Convert `json` to the shape `ty` asks for.
    pub fn convert(&self, ty: PropType, json: &Value) -> PropValue {
        match ty {
            PropType::Scalar(_) => (self.scalar)(json),
            PropType::Array(_) => (self.array)(json),
        }
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// A set of converters keyed by exact type name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Converters by type name.
    converters: HashMap<&'static str, Converter>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh registry holding the whole reference catalog.
    pub fn with_catalog() -> Self {
        let mut r = Self::new();
        r.register_catalog();
        r
    }

    /// The process-wide catalog registry, built on first use.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(Self::with_catalog)
    }

    /// Register `T` under its type name, replacing any previous entry.
    pub fn register<T: Convert + Native>(&mut self) -> &mut Self {
        self.converters.insert(T::NAME, Converter::of::<T>());
        self
    }

    /// Look up converters by exact type name.
    pub fn get(&self, type_name: &str) -> Option<&Converter> {
        self.converters.get(type_name)
    }

    /// Whether a converter exists for `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.converters.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.converters.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Convert `json` as `ty`, if a converter for its type is registered.
    pub fn convert(&self, ty: PropType, json: &Value) -> Option<PropValue> {
        self.get(ty.type_name()).map(|c| c.convert(ty, json))
    }

    /// Add every type of the reference catalog.
    fn register_catalog(&mut self) {
        self.register::<bool>()
            .register::<f64>()
            .register::<f32>()
            .register::<i32>()
            .register::<i64>()
            .register::<u64>()
            .register::<isize>()
            .register::<usize>()
            .register::<String>()
            .register::<Vec<u8>>()
            .register::<Value>()
            .register::<Map<String, Value>>()
            .register::<Option<Url>>()
            .register::<Option<OffsetDateTime>>()
            .register::<Option<UtcOffset>>()
            .register::<Duration>()
            .register::<Point>()
            .register::<Size>()
            .register::<Rect>()
            .register::<EdgeInsets>()
            .register::<AffineTransform>()
            .register::<Transform3D>()
            .register::<Color>()
            .register::<Font>();
        self.register::<TextAlignment>()
            .register::<WritingDirection>()
            .register::<Autocapitalization>()
            .register::<TextFieldViewMode>()
            .register::<KeyboardDismissMode>()
            .register::<KeyboardType>()
            .register::<ReturnKeyType>()
            .register::<ContentMode>()
            .register::<BarStyle>()
            .register::<LineCap>()
            .register::<LineJoin>()
            .register::<FontWeight>()
            .register::<FontStyle>()
            .register::<Direction>()
            .register::<FlexDirection>()
            .register::<Justify>()
            .register::<Align>()
            .register::<PositionType>()
            .register::<FlexWrap>()
            .register::<Overflow>()
            .register::<PointerEvents>()
            .register::<AnimationType>();
    }
}
