//! Implementations of the subcommands.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use propconv::{PropType, PropertyError, Registry, View, kind_name, try_set_property};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    cli::{ApplyArgs, ConvertArgs},
    error::{Error, Result},
};

/// Read all of stdin.
fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Parse JSON from `arg`, or from stdin when absent.
fn read_json(arg: Option<&str>) -> Result<Value> {
    let text = match arg {
        Some(text) => text.to_string(),
        None => read_stdin()?,
    };
    Ok(serde_json::from_str(&text)?)
}

/// Print every registered type name, one per line.
pub fn types(registry: &Registry) {
    for name in registry.type_names() {
        println!("{name}");
    }
}

/// Convert the input to the requested type and print it.
pub fn convert(registry: &Registry, args: &ConvertArgs) -> Result<()> {
    let conv = registry
        .get(&args.type_name)
        .ok_or_else(|| Error::UnknownType(args.type_name.clone()))?;
    let ty = if args.array {
        PropType::Array(conv.type_name)
    } else {
        PropType::Scalar(conv.type_name)
    };
    let json = read_json(args.json.as_deref())?;
    debug!(%ty, "converting");
    let value = conv.convert(ty, &json);
    if args.json_output {
        println!("{}", serde_json::to_string_pretty(&value.to_json())?);
    } else {
        println!("{value:#?}");
    }
    Ok(())
}

/// Result of applying one path.
#[derive(Debug)]
pub struct Outcome {
    /// Property path as given.
    pub path: String,
    /// Why the path was not assigned, if it was not.
    pub error: Option<PropertyError>,
}

/// Apply each `path: value` pair of `updates` to `view`, in key order.
pub fn apply_updates(view: &mut View, updates: &Value) -> Result<Vec<Outcome>> {
    let Value::Object(map) = updates else {
        return Err(Error::NotAnObject(kind_name(updates)));
    };
    Ok(map
        .iter()
        .map(|(path, value)| Outcome {
            path: path.clone(),
            error: try_set_property(view, path, value).err(),
        })
        .collect())
}

/// Read the input, apply it to a default view, and report the outcome.
pub fn apply(args: &ApplyArgs) -> Result<()> {
    let text = match &args.file {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };
    let updates: Value = serde_json::from_str(&text)?;

    let mut view = View::default();
    let outcomes = apply_updates(&mut view, &updates)?;
    let mut rejected = 0;
    for outcome in &outcomes {
        match &outcome.error {
            None => println!("set   {}", outcome.path),
            Some(err) => {
                rejected += 1;
                println!("skip  {}: {err}", outcome.path);
            }
        }
    }
    info!(applied = outcomes.len() - rejected, rejected, "applied properties");
    println!("{}", serde_json::to_string_pretty(&view)?);

    if args.strict && rejected > 0 {
        return Err(Error::Rejected(rejected));
    }
    Ok(())
}

/// Read a whole file as text.
fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
