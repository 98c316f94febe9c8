//! Conversion of loosely-typed JSON values into typed native values, and
//! assignment of typed properties by name.
//!
//! Two directions are covered:
//! - [`convert`] turns a [`serde_json::Value`] into any [`Convert`] type. It
//!   never fails: null gives the type's fallback, and invalid input gives the
//!   fallback plus a report to the [`diagnostics`] sink.
//! - [`set_property`] writes a JSON value onto a [`Properties`] target,
//!   choosing the converter from the property's declared type through a
//!   [`Registry`]. [`copy_property`] moves a value between two targets
//!   without going through JSON.
//!
//! The [`catalog`], [`geometry`], [`color`] and [`font`] modules hold the
//! reference set of convertible types; [`layout`] holds reference targets.

mod array;
pub mod catalog;
pub mod color;
mod convert;
mod date;
pub mod diagnostics;
mod enums;
mod error;
pub mod font;
pub mod geometry;
pub mod layout;
mod number;
mod property;
mod registry;
mod text;
mod value;

#[cfg(test)]
mod test_property;
#[cfg(test)]
mod test_registry;

pub use array::{array_type_name, convert_array, convert_array_with, lift};
pub use color::Color;
pub use convert::{Convert, convert};
pub use enums::{
    ConvertEnum, EnumConverter, EnumSource, EnumTable, convert_enum, try_convert_enum,
};
pub use error::{ConvertError, PropertyError, kind_name};
pub use font::Font;
pub use geometry::{AffineTransform, EdgeInsets, Point, Rect, Size, Transform3D};
pub use layout::{Layer, LayoutStyle, View};
pub use number::number;
pub use property::{
    Properties, PropertyDescriptor, copy_property, set_property, set_property_as,
    set_property_with, try_copy_property, try_set_property,
};
pub use registry::{Converter, PropType, Registry};
pub use value::{Native, Prop, PropValue};
