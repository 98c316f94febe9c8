//! Enum conversion from declarative name tables.
//!
//! An [`EnumConverter`] is declared as a `static` holding the enum's name, its
//! default raw value, and the source of its name-to-raw table. The table is
//! built on first use, exactly once even under concurrent first use, and is
//! immutable afterwards; reads after construction take no lock.
//!
//! Input policy:
//! - null gives the default;
//! - a string that is a key of the table (exact, case-sensitive) gives its
//!   raw value;
//! - an integer that is one of the table's raw values passes through;
//! - anything else gives the default and is reported to the diagnostics sink.

use std::{
    collections::{BTreeSet, HashMap},
    sync::OnceLock,
};

use serde_json::Value;

use crate::{
    convert::{Convert, convert},
    diagnostics,
    error::ConvertError,
};

/// Where an enum's name table comes from.
#[derive(Debug, Clone, Copy)]
pub enum EnumSource {
    /// A fixed table.
    Static(&'static [(&'static str, i64)]),
    /// A table computed by a function on first use.
    Builder(fn() -> Vec<(&'static str, i64)>),
}

impl EnumSource {
    /// Materialize the entries.
    fn entries(self) -> Vec<(&'static str, i64)> {
        match self {
            Self::Static(entries) => entries.to_vec(),
            Self::Builder(build) => build(),
        }
    }
}

/// Immutable name-to-raw lookup table for one enum type.
#[derive(Debug, Clone)]
pub struct EnumTable {
    /// Enum type name, for diagnostics.
    name: &'static str,
    /// Case-sensitive key lookup.
    by_name: HashMap<&'static str, i64>,
    /// Every raw value that some key maps to.
    raw_values: BTreeSet<i64>,
}

impl EnumTable {
    /// Build a table. Later duplicates of a key win.
    pub fn new(name: &'static str, entries: impl IntoIterator<Item = (&'static str, i64)>) -> Self {
        let by_name: HashMap<_, _> = entries.into_iter().collect();
        let raw_values = by_name.values().copied().collect();
        Self {
            name,
            by_name,
            raw_values,
        }
    }

    /// Enum type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw value for an exact key.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.by_name.get(key).copied()
    }

    /// Whether `raw` is a member of the enum's valid raw-value set.
    pub fn contains_raw(&self, raw: i64) -> bool {
        self.raw_values.contains(&raw)
    }

    /// Every key, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolve a non-null value to a raw value of this enum.
    pub fn resolve(&self, json: &Value) -> Result<i64, ConvertError> {
        match json {
            Value::String(key) => self.get(key).ok_or_else(|| ConvertError::UnknownName {
                name: self.name,
                key: key.clone(),
            }),
            Value::Number(n) => {
                let raw = n.as_i64().or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                        .map(|f| f as i64)
                });
                match raw {
                    Some(raw) if self.contains_raw(raw) => Ok(raw),
                    _ => Err(ConvertError::out_of_range(self.name, n)),
                }
            }
            other => Err(ConvertError::mismatch("enum name or raw value", other)),
        }
    }
}

/// Converter for one enum type, usable as a `static`.
#[derive(Debug)]
pub struct EnumConverter {
    /// Enum type name.
    name: &'static str,
    /// Raw value returned for null and invalid input.
    default: i64,
    /// Table definition.
    source: EnumSource,
    /// Table, built on first use.
    table: OnceLock<EnumTable>,
}

impl EnumConverter {
    /// Declare a converter over a fixed table.
    pub const fn new(
        name: &'static str,
        default: i64,
        entries: &'static [(&'static str, i64)],
    ) -> Self {
        Self::from_source(name, default, EnumSource::Static(entries))
    }

    /// Declare a converter whose table is computed by `build` on first use.
    pub const fn with_builder(
        name: &'static str,
        default: i64,
        build: fn() -> Vec<(&'static str, i64)>,
    ) -> Self {
        Self::from_source(name, default, EnumSource::Builder(build))
    }

    /// Declare a converter over any table source.
    pub const fn from_source(name: &'static str, default: i64, source: EnumSource) -> Self {
        Self {
            name,
            default,
            source,
            table: OnceLock::new(),
        }
    }

    /// Enum type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw value used for null and invalid input.
    pub fn default_raw(&self) -> i64 {
        self.default
    }

    /// The lookup table, built on first access.
    pub fn table(&self) -> &EnumTable {
        self.table.get_or_init(|| {
            tracing::trace!(target: "propconv::enums", name = self.name, "building enum table");
            EnumTable::new(self.name, self.source.entries())
        })
    }

    /// Convert `json` to a raw value; never fails.
    pub fn convert(&self, json: &Value) -> i64 {
        if json.is_null() {
            return self.default;
        }
        match self.table().resolve(json) {
            Ok(raw) => raw,
            Err(err) => {
                diagnostics::report_error(json, self.name, &err);
                self.default
            }
        }
    }
}

/// A Rust enum backed by an [`EnumConverter`].
pub trait ConvertEnum: Copy + 'static {
    /// The converter holding this enum's table.
    fn converter() -> &'static EnumConverter;

    /// Variant for a raw value.
    fn from_raw(raw: i64) -> Option<Self>;

    /// Raw value of a variant.
    fn raw(self) -> i64;
}

/// Resolve a non-null value to a variant of `E`.
///
/// This is the `try_convert` of every table-backed enum; [`convert`] adds the
/// null, fallback, and diagnostics policy on top.
pub fn try_convert_enum<E: ConvertEnum>(json: &Value) -> Result<E, ConvertError> {
    let conv = E::converter();
    let raw = conv.table().resolve(json)?;
    E::from_raw(raw).ok_or_else(|| ConvertError::out_of_range(conv.name(), raw))
}

/// Convert `json` to a variant of `E`, degrading to its default.
pub fn convert_enum<E: ConvertEnum + Convert>(json: &Value) -> E {
    convert::<E>(json)
}

/// Declare a catalog enum together with its name table.
///
/// Generates the enum, `Default`, an `ALL` list, [`ConvertEnum`] backed by a
/// static [`EnumConverter`], and [`Convert`].
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $raw:literal ),+ $(,)?
        }
        names { $( $key:literal => $kvariant:ident ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $raw, )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $crate::enums::ConvertEnum for $name {
            fn converter() -> &'static $crate::enums::EnumConverter {
                static CONVERTER: $crate::enums::EnumConverter = $crate::enums::EnumConverter::new(
                    stringify!($name),
                    $name::$default as i64,
                    &[$(($key, $name::$kvariant as i64)),+],
                );
                &CONVERTER
            }

            fn from_raw(raw: i64) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| *v as i64 == raw)
            }

            fn raw(self) -> i64 {
                self as i64
            }
        }

        impl $crate::convert::Convert for $name {
            const NAME: &'static str = stringify!($name);

            fn fallback() -> Self {
                Self::$default
            }

            fn try_convert(
                json: &::serde_json::Value,
            ) -> Result<Self, $crate::error::ConvertError> {
                $crate::enums::try_convert_enum(json)
            }
        }
    };
}

pub(crate) use catalog_enum;
