//! MCP tool definitions for the voloxide server.

use crate::config::VolConfig;
use crate::dispatch::Dispatcher;
use crate::server::types::*;
use rmcp::handler::server::{router::tool::ToolRouter, tool::Parameters};
use std::future::Future;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use walkdir::WalkDir;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extensions commonly used for memory dump files.
const DUMP_EXTENSIONS: &[&str] = &["raw", "vmem", "dmp", "mem", "bin", "img", "001", "dump"];

/// Depth limit for the dump-file scan; deep trees are symlink farms or
/// container layers, not evidence directories.
const DUMP_SCAN_MAX_DEPTH: usize = 6;

/// Coerce a keyword bag that arrived as a JSON-encoded string back into an
/// object. Some MCP clients double-encode structured parameters.
fn coerce_kw_args(kw_args: Option<serde_json::Value>) -> Option<serde_json::Value> {
    match kw_args {
        Some(serde_json::Value::String(s)) => match serde_json::from_str(&s) {
            Ok(parsed) => Some(parsed),
            Err(_) => Some(serde_json::Value::String(s)),
        },
        other => other,
    }
}

/// The voloxide MCP server.
#[derive(Clone)]
pub struct VoloxideServer {
    dispatcher: Arc<Dispatcher>,
    config: Arc<VolConfig>,
    started_at: chrono::DateTime<chrono::Utc>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl VoloxideServer {
    pub fn new(dispatcher: Dispatcher, config: Arc<VolConfig>) -> Self {
        VoloxideServer {
            dispatcher: Arc::new(dispatcher),
            config,
            started_at: chrono::Utc::now(),
            tool_router: Self::tool_router(),
        }
    }

    /// Run a Volatility plugin.
    #[tool(description = "Run a Volatility 3 plugin against a memory dump. Fields: memory_dump_path (absolute path, or a bare file name under the configured dumps directory), plugin_name (e.g. \"linux.PsList\", \"windows.MemMap\", \"Banners\" — see vol_list_plugins), kw_args (optional JSON object of plugin parameters, e.g. {\"pid\": 4}; unrecognized keys are ignored), timeout_secs (optional, clamped to the server ceiling). Returns the plugin's output, or a descriptive error message.")]
    async fn vol_run_plugin(
        &self,
        Parameters(req): Parameters<RunPluginRequest>,
    ) -> Result<CallToolResult, McpError> {
        let kw_args = coerce_kw_args(req.kw_args);
        info!(
            "Running plugin {} against {}",
            req.plugin_name, req.memory_dump_path
        );
        let output = self
            .dispatcher
            .dispatch(
                &req.memory_dump_path,
                &req.plugin_name,
                kw_args.as_ref(),
                req.timeout_secs.map(Duration::from_secs),
            )
            .await;
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    /// List all available plugins.
    #[tool(description = "List all available Volatility plugins as a JSON mapping of plugin name to description.")]
    async fn vol_list_plugins(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            self.dispatcher.list_all(),
        )]))
    }

    /// List memory dump files under a directory.
    #[tool(description = "List memory dump files (.raw/.vmem/.dmp/.mem/.bin/.img/.001/.dump) under a directory with their sizes. Defaults to the configured dumps directory.")]
    async fn vol_list_memory_dumps(
        &self,
        Parameters(req): Parameters<ListDumpsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let dir = req
            .search_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config.dumps_dir.clone());

        if !dir.is_dir() {
            return Ok(CallToolResult::success(vec![Content::text(format!(
                "Error: directory not found at {}",
                dir.display()
            ))]));
        }

        let mut dumps = Vec::new();
        for entry in WalkDir::new(&dir)
            .max_depth(DUMP_SCAN_MAX_DEPTH)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let known_ext = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| DUMP_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if !known_ext {
                continue;
            }
            let size_mb = entry
                .metadata()
                .map(|m| m.len() as f64 / (1024.0 * 1024.0))
                .unwrap_or(0.0);
            dumps.push(format!(
                "{} (Size: {:.2} MB)",
                entry.path().display(),
                size_mb
            ));
        }

        let text = if dumps.is_empty() {
            format!("No memory dump files found in {}", dir.display())
        } else {
            format!("Found memory dump files:\n{}", dumps.join("\n"))
        };
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Get server status.
    #[tool(description = "Get voloxide server status: version, plugin count, configured Volatility paths and timeout limits.")]
    async fn vol_status(&self) -> Result<CallToolResult, McpError> {
        let status = json!({
            "version": VERSION,
            "engine": "volatility3 (external subprocess)",
            "started_at": self.started_at.to_rfc3339(),
            "plugin_count": self.dispatcher.registry().len(),
            "volatility_python": self.config.python.display().to_string(),
            "volatility_script": self.config.script.display().to_string(),
            "volatility_dir": self.config.install_dir.display().to_string(),
            "dumps_dir": self.config.dumps_dir.display().to_string(),
            "default_timeout_secs": self.config.default_timeout.as_secs(),
            "max_timeout_secs": self.config.max_timeout.as_secs(),
        });
        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&status).unwrap_or_default(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for VoloxideServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "voloxide: Volatility 3 forensics MCP server. \
                 Runs Volatility plugins against memory dump files and returns \
                 their output as text.\n\
                 Call vol_list_plugins to discover plugin names, then \
                 vol_run_plugin with a dump path and plugin name.\n\
                 Plugin names are namespaced by platform (windows.*, linux.*, \
                 mac.*); cross-platform plugins like Banners use bare names.\n\
                 windows.MemMap requires kw_args {\"pid\": N}; \
                 windows.RegistryPrintKey requires kw_args {\"key\": \"...\"}.\n\
                 Use vol_list_memory_dumps to find candidate dump files."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_kw_args_parses_double_encoded_object() {
        let coerced = coerce_kw_args(Some(json!("{\"pid\": 4}")));
        assert_eq!(coerced, Some(json!({"pid": 4})));
    }

    #[test]
    fn test_coerce_kw_args_leaves_objects_alone() {
        let coerced = coerce_kw_args(Some(json!({"pid": 4})));
        assert_eq!(coerced, Some(json!({"pid": 4})));
        assert_eq!(coerce_kw_args(None), None);
    }

    #[test]
    fn test_coerce_kw_args_keeps_unparseable_strings() {
        let coerced = coerce_kw_args(Some(json!("not json")));
        assert_eq!(coerced, Some(json!("not json")));
    }
}
