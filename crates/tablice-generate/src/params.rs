use serde_json::{Map, Value};

use crate::errors::GenerationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// `null`, or an array whose entries are strings or `null`.
    NameList,
}

#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    pub key: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl ParamSpec {
    pub const fn new(key: &'static str, kind: ParamKind, required: bool) -> Self {
        Self {
            key,
            kind,
            required,
        }
    }
}

#[derive(Debug)]
pub struct ParamMap<'a> {
    map: Option<&'a Map<String, Value>>,
}

pub fn validate_params<'a>(
    params: Option<&'a Value>,
    specs: &[ParamSpec],
    ctx: &'static str,
) -> Result<ParamMap<'a>, GenerationError> {
    let map = match params {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            return Err(GenerationError::InvalidParams(format!(
                "{ctx}: params must be a JSON object"
            )));
        }
    };

    if let Some(map) = map {
        for (key, value) in map {
            let Some(spec) = specs.iter().find(|spec| spec.key == key.as_str()) else {
                return Err(GenerationError::InvalidParams(format!(
                    "{ctx}: unknown param '{key}'"
                )));
            };
            validate_kind(ctx, key, spec.kind, value)?;
        }
    }

    for spec in specs {
        if spec.required && !map.is_some_and(|map| map.contains_key(spec.key)) {
            return Err(GenerationError::InvalidParams(format!(
                "{ctx}: missing required param '{}'",
                spec.key
            )));
        }
    }

    Ok(ParamMap { map })
}

impl<'a> ParamMap<'a> {
    /// Entries of a name list, non-string entries mapped to `None`.
    /// Returns `None` when the key is absent or `null`.
    pub fn get_name_list(&self, key: &str) -> Option<Vec<Option<&'a str>>> {
        let entries = self.map?.get(key)?.as_array()?;
        Some(entries.iter().map(Value::as_str).collect())
    }
}

fn validate_kind(
    ctx: &'static str,
    key: &str,
    kind: ParamKind,
    value: &Value,
) -> Result<(), GenerationError> {
    let valid = match kind {
        ParamKind::NameList => matches!(value, Value::Null | Value::Array(_)),
    };
    if valid {
        Ok(())
    } else {
        Err(GenerationError::InvalidParams(format!(
            "{ctx}: param '{key}' must be an array of names or null"
        )))
    }
}
