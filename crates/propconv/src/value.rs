//! Type-erased property values.
//!
//! A [`PropValue`] carries a converted native value from a registry converter
//! (or from a property getter) to a property setter without either side
//! knowing the concrete type at compile time. Targets downcast it back.

use std::{any::Any, fmt};

use serde::Serialize;
use serde_json::Value;

/// A native value a converter can produce.
///
/// Unlike [`Prop`], the bounds are supertraits, so generic code holding a
/// `T: Native` can also wrap a `Vec<T>`.
pub trait Native: Any + Send + Sync + Clone + fmt::Debug + Serialize {}

impl<T> Native for T where T: Any + Send + Sync + Clone + fmt::Debug + Serialize {}

/// Object-safe view of a value that can travel through [`PropValue`].
pub trait Prop: Any + Send + Sync {
    /// Clone into a new box.
    fn clone_box(&self) -> Box<dyn Prop>;
    /// Borrow as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
    /// Move the value into `slot` if it is an `Option<Self>`, otherwise hand
    /// the box back.
    fn take_into(self: Box<Self>, slot: &mut dyn Any) -> Result<(), Box<dyn Prop>>;
    /// Render as JSON for display.
    fn to_json(&self) -> Value;
    /// Debug rendering.
    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: Native> Prop for T {
    fn clone_box(&self) -> Box<dyn Prop> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn take_into(self: Box<Self>, slot: &mut dyn Any) -> Result<(), Box<dyn Prop>> {
        match slot.downcast_mut::<Option<T>>() {
            Some(slot) => {
                *slot = Some(*self);
                Ok(())
            }
            None => Err(self),
        }
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    fn debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An owned, type-erased native value.
pub struct PropValue(Box<dyn Prop>);

impl PropValue {
    /// Wrap a native value.
    pub fn new<T: Prop>(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Whether the wrapped value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Borrow the wrapped value as a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    /// Take the wrapped value as a `T`, or get `self` back unchanged.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let mut slot: Option<T> = None;
        self.0.take_into(&mut slot).map_err(Self)?;
        // A successful take always fills the slot.
        slot.ok_or_else(|| Self::new(Value::Null))
    }

    /// JSON rendering of the wrapped value; null if it does not serialize.
    pub fn to_json(&self) -> Value {
        self.0.to_json()
    }
}

impl Clone for PropValue {
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.debug(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn downcast_round_trips_and_rejects_other_types() {
        let v = PropValue::new(Color::WHITE);
        assert!(v.is::<Color>());
        assert_eq!(v.downcast_ref::<Color>(), Some(&Color::WHITE));

        let v = match v.downcast::<f64>() {
            Ok(_) => panic!("color is not f64"),
            Err(v) => v,
        };
        assert_eq!(v.clone().downcast::<Color>().ok(), Some(Color::WHITE));
    }

    #[test]
    fn renders_debug_and_json() {
        let v = PropValue::new(vec![1.5f64, 2.0]);
        assert_eq!(format!("{v:?}"), "[1.5, 2.0]");
        assert_eq!(v.to_json(), serde_json::json!([1.5, 2.0]));
    }
}
