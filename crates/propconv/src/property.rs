//! Assigning and copying properties by name.
//!
//! A target exposes its properties through [`Properties`]: it describes each
//! property's declared type, reads and writes type-erased values, and hands
//! out child objects for dotted paths. The setter picks a converter from the
//! declared type, so callers never name the type themselves.
//!
//! Failures here are "not applicable" outcomes rather than conversion
//! anomalies. They are traced at `debug` and never reach the diagnostics sink.

use serde_json::Value;

use crate::{
    error::PropertyError,
    registry::{PropType, Registry},
    value::PropValue,
};

/// Introspection record for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name.
    pub name: &'static str,
    /// Declared type.
    pub ty: PropType,
    /// Whether [`Properties::set`] accepts values for it.
    pub writable: bool,
}

impl PropertyDescriptor {
    /// A writable property.
    pub const fn writable(name: &'static str, ty: PropType) -> Self {
        Self {
            name,
            ty,
            writable: true,
        }
    }

    /// A read-only property.
    pub const fn read_only(name: &'static str, ty: PropType) -> Self {
        Self {
            name,
            ty,
            writable: false,
        }
    }
}

/// Runtime property access on a target object.
pub trait Properties {
    /// Describe the property called `name`, if any.
    fn property(&self, name: &str) -> Option<PropertyDescriptor>;

    /// Read the current value of `name`.
    fn get(&self, name: &str) -> Option<PropValue>;

    /// Write `value` to `name`. The value is returned when the target does not
    /// accept it (wrong type or unknown property); the target is then
    /// unchanged.
    fn set(&mut self, name: &str, value: PropValue) -> Result<(), PropValue>;

    /// Names of every property, in a stable order.
    fn property_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// Child object reachable as `name` in a dotted path.
    fn child(&self, _name: &str) -> Option<&dyn Properties> {
        None
    }

    /// Mutable child object reachable as `name` in a dotted path.
    fn child_mut(&mut self, _name: &str) -> Option<&mut dyn Properties> {
        None
    }
}

/// Split a dotted path into its object segments and the final property name.
fn split_path(path: &str) -> (impl Iterator<Item = &str>, &str) {
    let (parents, leaf) = match path.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, path),
    };
    (parents.into_iter().flat_map(|p| p.split('.')), leaf)
}

/// Walk to the object owning the last segment of `path`.
fn resolve<'a, 'p>(
    target: &'a dyn Properties,
    path: &'p str,
) -> Result<(&'a dyn Properties, &'p str), PropertyError> {
    let (parents, leaf) = split_path(path);
    let mut obj = target;
    for seg in parents {
        obj = obj.child(seg).ok_or_else(|| unknown(path))?;
    }
    Ok((obj, leaf))
}

/// Mutable counterpart of [`resolve`].
fn resolve_mut<'a, 'p>(
    target: &'a mut dyn Properties,
    path: &'p str,
) -> Result<(&'a mut dyn Properties, &'p str), PropertyError> {
    let (parents, leaf) = split_path(path);
    let mut obj = target;
    for seg in parents {
        obj = obj.child_mut(seg).ok_or_else(|| unknown(path))?;
    }
    Ok((obj, leaf))
}

/// Unknown-property error for `path`.
fn unknown(path: &str) -> PropertyError {
    PropertyError::Unknown {
        path: path.to_string(),
    }
}

/// Assign `json` to the property at `path`, converting with `registry`.
///
/// With `ty` set, that type is used instead of the declared one.
fn assign(
    registry: &Registry,
    target: &mut dyn Properties,
    path: &str,
    ty: Option<PropType>,
    json: &Value,
) -> Result<(), PropertyError> {
    let (obj, leaf) = resolve_mut(target, path)?;
    let desc = obj.property(leaf).ok_or_else(|| unknown(path))?;
    if !desc.writable {
        return Err(PropertyError::ReadOnly {
            path: path.to_string(),
        });
    }
    let ty = ty.unwrap_or(desc.ty);
    let value = registry
        .convert(ty, json)
        .ok_or_else(|| PropertyError::NoConverter {
            path: path.to_string(),
            ty: ty.to_string(),
        })?;
    obj.set(leaf, value).map_err(|_| PropertyError::Rejected {
        path: path.to_string(),
    })
}

/// Collapse a property outcome to a flag, tracing the reason for a failure.
fn succeeded(res: Result<(), PropertyError>) -> bool {
    match res {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(target: "propconv::property", path = err.path(), error = %err, "property not assigned");
            false
        }
    }
}

/// Assign `json` to the property at `path` using the built-in registry.
pub fn try_set_property(
    target: &mut dyn Properties,
    path: &str,
    json: &Value,
) -> Result<(), PropertyError> {
    assign(Registry::builtin(), target, path, None, json)
}

/// Assign `json` to the property at `path`, inferring the converter from the
/// property's declared type.
///
/// Returns false, leaving the target unchanged, when the property does not
/// exist, is read-only, has no registered converter, or refuses the value.
/// An invalid `json` is not a failure: it converts to the type's fallback,
/// which is assigned.
pub fn set_property(target: &mut dyn Properties, path: &str, json: &Value) -> bool {
    succeeded(try_set_property(target, path, json))
}

/// [`set_property`] with an explicit registry.
pub fn set_property_with(
    registry: &Registry,
    target: &mut dyn Properties,
    path: &str,
    json: &Value,
) -> bool {
    succeeded(assign(registry, target, path, None, json))
}

/// [`set_property`] with an explicit type instead of the declared one.
pub fn set_property_as(target: &mut dyn Properties, path: &str, ty: PropType, json: &Value) -> bool {
    succeeded(assign(Registry::builtin(), target, path, Some(ty), json))
}

/// Copy the property at `path` from `source` to `dest`.
pub fn try_copy_property(
    dest: &mut dyn Properties,
    source: &dyn Properties,
    path: &str,
) -> Result<(), PropertyError> {
    let (src, leaf) = resolve(source, path)?;
    let src_desc = src.property(leaf).ok_or_else(|| unknown(path))?;

    let (dst, _) = resolve_mut(dest, path)?;
    let dst_desc = dst.property(leaf).ok_or_else(|| unknown(path))?;
    if !dst_desc.writable {
        return Err(PropertyError::ReadOnly {
            path: path.to_string(),
        });
    }
    if src_desc.ty != dst_desc.ty {
        return Err(PropertyError::TypeMismatch {
            path: path.to_string(),
            source_ty: src_desc.ty.to_string(),
            dest_ty: dst_desc.ty.to_string(),
        });
    }
    let value = src.get(leaf).ok_or_else(|| unknown(path))?;
    dst.set(leaf, value).map_err(|_| PropertyError::Rejected {
        path: path.to_string(),
    })
}

/// Copy the property at `path` from `source` to `dest` without going
/// through JSON.
///
/// Returns false, leaving `dest` unchanged, when either side lacks the
/// property, `dest` cannot write it, or the two declare different types.
pub fn copy_property(dest: &mut dyn Properties, source: &dyn Properties, path: &str) -> bool {
    succeeded(try_copy_property(dest, source, path))
}

/// Implement [`Properties`] for a struct from a table of its fields.
///
/// Each entry maps a property name to a field and its kind: `scalar T` for a
/// writable `T`, `array T` for a writable `Vec<T>`, and `readonly T` for a
/// `T` that can be read and copied from but not written. An optional
/// `children` table names fields that are themselves [`Properties`] targets.
macro_rules! properties {
    (@desc scalar $key:literal, $ty:ty) => {
        $crate::property::PropertyDescriptor::writable(
            $key,
            $crate::registry::PropType::of::<$ty>(),
        )
    };
    (@desc array $key:literal, $ty:ty) => {
        $crate::property::PropertyDescriptor::writable(
            $key,
            $crate::registry::PropType::array_of::<$ty>(),
        )
    };
    (@desc readonly $key:literal, $ty:ty) => {
        $crate::property::PropertyDescriptor::read_only(
            $key,
            $crate::registry::PropType::of::<$ty>(),
        )
    };
    (@store scalar $ty:ty, $slot:expr, $value:ident) => {{
        *$slot = $value.downcast::<$ty>()?;
        Ok(())
    }};
    (@store array $ty:ty, $slot:expr, $value:ident) => {{
        *$slot = $value.downcast::<Vec<$ty>>()?;
        Ok(())
    }};
    (@store readonly $ty:ty, $slot:expr, $value:ident) => {
        Err($value)
    };
    (
        $target:ty {
            $( $key:literal => $field:ident : $kind:ident $ty:ty ),+ $(,)?
        }
        $( children { $( $ckey:literal => $cfield:ident ),+ $(,)? } )?
    ) => {
        impl $crate::property::Properties for $target {
            fn property(&self, name: &str) -> Option<$crate::property::PropertyDescriptor> {
                match name {
                    $( $key => Some($crate::property::properties!(@desc $kind $key, $ty)), )+
                    _ => None,
                }
            }

            fn get(&self, name: &str) -> Option<$crate::value::PropValue> {
                match name {
                    $( $key => Some($crate::value::PropValue::new(self.$field.clone())), )+
                    _ => None,
                }
            }

            fn set(
                &mut self,
                name: &str,
                value: $crate::value::PropValue,
            ) -> Result<(), $crate::value::PropValue> {
                match name {
                    $( $key => $crate::property::properties!(@store $kind $ty, &mut self.$field, value), )+
                    _ => Err(value),
                }
            }

            fn property_names(&self) -> &'static [&'static str] {
                &[$($key),+]
            }

            $(
                fn child(&self, name: &str) -> Option<&dyn $crate::property::Properties> {
                    match name {
                        $( $ckey => Some(&self.$cfield), )+
                        _ => None,
                    }
                }

                fn child_mut(&mut self, name: &str) -> Option<&mut dyn $crate::property::Properties> {
                    match name {
                        $( $ckey => Some(&mut self.$cfield), )+
                        _ => None,
                    }
                }
            )?
        }
    };
}

pub(crate) use properties;
