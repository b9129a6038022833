//! Request types for MCP tools.

use schemars::JsonSchema;
use serde::Deserialize;

/// Request to run a Volatility plugin.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RunPluginRequest {
    /// Absolute path to the memory dump file, or a bare file name resolved
    /// under the configured dumps directory.
    pub memory_dump_path: String,
    /// Registered plugin name, e.g. "linux.PsList", "windows.MemMap",
    /// "Banners".
    pub plugin_name: String,
    /// Optional plugin-specific keyword arguments as a JSON object, e.g.
    /// {"pid": 4} or {"key": "ControlSet001\\Control"}. Unrecognized keys
    /// are ignored.
    pub kw_args: Option<serde_json::Value>,
    /// Optional timeout override in seconds; values above the configured
    /// ceiling are clamped.
    pub timeout_secs: Option<u64>,
}

/// Request to list memory dump files.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListDumpsRequest {
    /// Directory to search; defaults to the configured dumps directory.
    pub search_dir: Option<String>,
}
