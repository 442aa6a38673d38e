//! Typed configuration built from loosely structured input
//!
//! Configuration usually arrives as a generic key/value tree (parsed JSON,
//! YAML, command-line overrides). [`TypedConfig`] maps such a tree onto a
//! concrete schema, keeping the keys the schema knows about and reporting
//! the rest instead of failing on them.

use crate::logging::log_banner;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Title used by [`log_config`]
pub const CONFIG_BANNER_TITLE: &str = "CONFIG FILE:";

/// A configuration schema that can be built from a generic value tree.
pub trait TypedConfig: Serialize + DeserializeOwned {
    /// Schema name used in diagnostics
    const NAME: &'static str;

    /// Top-level keys the schema accepts
    const FIELDS: &'static [&'static str];

    /// Build the schema from `value`, logging a warning for unknown keys.
    fn from_value(value: Value) -> Result<Self> {
        Self::from_value_reporting(value).map(|(config, _)| config)
    }

    /// Build the schema from `value` and also return the sorted list of keys
    /// that were dropped because the schema does not declare them.
    fn from_value_reporting(value: Value) -> Result<(Self, Vec<String>)> {
        let Value::Object(entries) = value else {
            return Err(Error::Config(format!(
                "{} must be built from a key/value mapping",
                Self::NAME
            )));
        };

        let (known, unused) = split_known_keys(entries, Self::FIELDS);

        if !unused.is_empty() {
            warn!(
                "When constructing '{}', did not use the following parameters: {:?}",
                Self::NAME,
                unused
            );
        }

        debug!("Building {} from {} parameters", Self::NAME, known.len());
        let config = serde_json::from_value(Value::Object(known))
            .map_err(|e| Error::Config(format!("Invalid {}: {e}", Self::NAME)))?;

        Ok((config, unused))
    }
}

/// Partition `entries` into the keys listed in `fields` and the sorted names
/// of everything else.
fn split_known_keys(entries: Map<String, Value>, fields: &[&str]) -> (Map<String, Value>, Vec<String>) {
    let mut known = Map::new();
    let mut unused = Vec::new();

    for (key, value) in entries {
        if fields.contains(&key.as_str()) {
            known.insert(key, value);
        } else {
            unused.push(key);
        }
    }

    unused.sort();
    (known, unused)
}

/// Render a configuration as YAML.
pub fn to_yaml<T: Serialize>(config: &T) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}

/// Log a configuration inside a banner.
///
/// When `print` is false only a placeholder line is emitted, so runs with
/// large or sensitive configs still mark where the dump would have been.
pub fn log_config<T: Serialize>(config: &T, print: bool) -> Result<()> {
    let body = if print {
        to_yaml(config)?
    } else {
        "Config file not printed.".to_string()
    };
    log_banner(CONFIG_BANNER_TITLE, body.trim_end());
    Ok(())
}
