//! Volatility 3 plugin catalogue.
//!
//! Each entry maps a registered name to the selector token handed to
//! `vol.py` plus the parameters the plugin accepts on its command line. The
//! catalogue is const data, one table per platform family; the behavior that
//! turns a table entry into a process invocation lives in the dispatcher.

pub mod common;
pub mod linux;
pub mod mac;
pub mod windows;

use crate::bind::BoundArgs;
use serde_json::Value;
use std::path::Path;

/// One parameter a plugin accepts beyond the memory dump path.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Name the caller supplies in the keyword bag, e.g. `"pid"`.
    pub name: &'static str,
    /// Command-line flag it maps to, e.g. `"--pid"`.
    pub flag: &'static str,
    pub required: bool,
}

/// A single Volatility plugin exposed through the dispatch facade.
#[derive(Debug, Clone, Copy)]
pub struct PluginSpec {
    /// Name within its family, e.g. `"PsList"`.
    pub name: &'static str,
    /// Volatility selector token, e.g. `"linux.pslist.PsList"`.
    pub selector: &'static str,
    /// One-line description surfaced by the listing tool.
    pub summary: &'static str,
    /// Extra command-line parameters, in the order they are emitted.
    pub params: &'static [ParamSpec],
}

impl PluginSpec {
    /// Build the `vol.py` argument vector for this plugin.
    ///
    /// Shape: `["-f", <dump path>, <selector>, <flag[, value]>...]`. A bound
    /// boolean `true` emits the flag alone; `false` emits nothing; any other
    /// scalar emits the flag followed by its rendered value.
    pub fn argv(&self, dump_path: &Path, bound: &BoundArgs) -> Vec<String> {
        let mut argv = vec![
            "-f".to_string(),
            dump_path.display().to_string(),
            self.selector.to_string(),
        ];
        for param in self.params {
            match bound.get(param.name) {
                Some(Value::Bool(true)) => argv.push(param.flag.to_string()),
                Some(Value::Bool(false)) | None => {}
                Some(value) => {
                    argv.push(param.flag.to_string());
                    argv.push(render_value(value));
                }
            }
        }
        argv
    }
}

/// Render a JSON scalar the way it should appear on a command line: strings
/// bare (no quotes), everything else via its JSON form.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
