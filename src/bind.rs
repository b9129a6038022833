//! Keyword-argument binding.
//!
//! The calling surface is an automated agent that cannot be expected to know
//! each plugin's exact parameter names in advance. The agreed tolerance
//! policy: keys the plugin does not declare are silently dropped, absent
//! optional keys are omitted, and an absent required key is an error raised
//! before any process is spawned.

use crate::error::DispatchError;
use crate::plugins::ParamSpec;
use serde_json::Value;
use std::collections::BTreeMap;

/// Arguments projected onto a plugin's declared parameter set, keyed by
/// parameter name.
pub type BoundArgs = BTreeMap<&'static str, Value>;

/// Project a caller-supplied keyword bag onto `params`.
///
/// Deterministic: the result depends only on the inputs, never on map
/// iteration order. A JSON `null` counts as absent.
pub fn project(
    params: &'static [ParamSpec],
    kw_args: Option<&Value>,
) -> Result<BoundArgs, DispatchError> {
    let supplied = kw_args.and_then(|v| v.as_object());
    let mut bound = BTreeMap::new();

    for param in params {
        match supplied.and_then(|m| m.get(param.name)) {
            Some(Value::Null) | None => {
                if param.required {
                    return Err(DispatchError::MissingArgument(param.name));
                }
            }
            Some(value) => {
                bound.insert(param.name, value.clone());
            }
        }
    }

    Ok(bound)
}
