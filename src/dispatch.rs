//! Dispatch facade.
//!
//! The single entry point the MCP tools call into: resolve the plugin name,
//! bind the keyword bag, resolve the dump path, build the argument vector,
//! run the external tool. The boundary contract is "always returns text" —
//! every failure at or below this layer comes back as a message, never as an
//! `Err` the transport would turn into a protocol fault.

use crate::bind;
use crate::error::DispatchError;
use crate::registry::PluginRegistry;
use crate::runner::VolRunner;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub struct Dispatcher {
    registry: PluginRegistry,
    runner: VolRunner,
    dumps_dir: PathBuf,
}

impl Dispatcher {
    pub fn new(registry: PluginRegistry, runner: VolRunner, dumps_dir: PathBuf) -> Self {
        Dispatcher {
            registry,
            runner,
            dumps_dir,
        }
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Run a plugin against a memory dump.
    pub async fn dispatch(
        &self,
        dump_path: &str,
        plugin_name: &str,
        kw_args: Option<&Value>,
        timeout: Option<Duration>,
    ) -> String {
        match self.try_dispatch(dump_path, plugin_name, kw_args, timeout).await {
            Ok(output) => output,
            Err(e) => e.to_string(),
        }
    }

    async fn try_dispatch(
        &self,
        dump_path: &str,
        plugin_name: &str,
        kw_args: Option<&Value>,
        timeout: Option<Duration>,
    ) -> Result<String, DispatchError> {
        let spec = self.registry.resolve(plugin_name)?;
        let bound = bind::project(spec.params, kw_args)?;
        let resolved = self.resolve_dump_path(dump_path)?;
        debug!(
            "Dispatching {} ({}) against {}",
            plugin_name,
            spec.selector,
            resolved.display()
        );
        let argv = spec.argv(&resolved, &bound);
        Ok(self.runner.execute(&argv, timeout).await.payload())
    }

    /// Accept an absolute path to an existing file, or a bare file name
    /// looked up under the dumps directory. Only the base name of the input
    /// participates in the directory lookup, so traversal segments cannot
    /// escape it. The existence check is advisory; the external tool performs
    /// the authoritative open.
    fn resolve_dump_path(&self, raw: &str) -> Result<PathBuf, DispatchError> {
        let candidate = Path::new(raw);
        if candidate.is_absolute() && candidate.is_file() {
            return Ok(candidate.to_path_buf());
        }
        if let Some(file_name) = candidate.file_name() {
            let fallback = self.dumps_dir.join(file_name);
            if fallback.is_file() {
                return Ok(fallback);
            }
        }
        Err(DispatchError::ArtifactNotFound(raw.to_string()))
    }

    /// Serialized name → summary mapping for the discovery tool.
    pub fn list_all(&self) -> String {
        let map: serde_json::Map<String, Value> = self
            .registry
            .list_all()
            .map(|(name, summary)| (name.to_string(), Value::String(summary.to_string())))
            .collect();
        serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PluginRegistry;
    use serde_json::json;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        dispatcher: Dispatcher,
        dumps_dir: PathBuf,
        spawn_marker: PathBuf,
    }

    /// Dispatcher wired to a /bin/sh shim standing in for vol.py. The shim
    /// records that it ran, then echoes its argument vector.
    fn fixture(script_tail: &str) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let dumps_dir = dir.path().join("dumps");
        std::fs::create_dir(&dumps_dir).unwrap();
        std::fs::write(dumps_dir.join("sample.raw"), b"\x00").unwrap();

        let spawn_marker = dir.path().join("spawned");
        let script = dir.path().join("vol.sh");
        let mut f = std::fs::File::create(&script).unwrap();
        writeln!(f, "#!/bin/sh").unwrap();
        writeln!(f, "touch {}", spawn_marker.display()).unwrap();
        writeln!(f, "{}", script_tail).unwrap();

        let config = crate::config::VolConfig {
            python: PathBuf::from("/bin/sh"),
            script,
            install_dir: dir.path().to_path_buf(),
            dumps_dir: dumps_dir.clone(),
            default_timeout: Duration::from_secs(10),
            max_timeout: Duration::from_secs(10),
        };
        let dispatcher = Dispatcher::new(
            PluginRegistry::with_all_families().unwrap(),
            VolRunner::new(&config),
            dumps_dir.clone(),
        );
        Fixture {
            _dir: dir,
            dispatcher,
            dumps_dir,
            spawn_marker,
        }
    }

    #[tokio::test]
    async fn test_dispatch_returns_tool_output_verbatim() {
        let fx = fixture("echo \"PID PPID COMM\"");
        let dump = fx.dumps_dir.join("sample.raw");
        let output = fx
            .dispatcher
            .dispatch(dump.to_str().unwrap(), "linux.PsList", None, None)
            .await;
        assert_eq!(output, "PID PPID COMM\n");
    }

    #[tokio::test]
    async fn test_dispatch_builds_expected_argv() {
        let fx = fixture("echo \"$@\"");
        let dump = fx.dumps_dir.join("sample.raw");
        let output = fx
            .dispatcher
            .dispatch(
                dump.to_str().unwrap(),
                "windows.MemMap",
                Some(&json!({"pid": 4})),
                None,
            )
            .await;
        let expected = format!("-f {} windows.memmap.Memmap --pid 4\n", dump.display());
        assert_eq!(output, expected);
    }

    #[tokio::test]
    async fn test_dispatch_resolves_bare_filename_in_dumps_dir() {
        let fx = fixture("echo \"$@\"");
        let output = fx
            .dispatcher
            .dispatch("sample.raw", "linux.PsList", None, None)
            .await;
        assert!(output.contains("linux.pslist.PsList"));
        assert!(output.starts_with(&format!("-f {}", fx.dumps_dir.join("sample.raw").display())));
    }

    #[tokio::test]
    async fn test_dispatch_traversal_cannot_escape_dumps_dir() {
        let fx = fixture("echo \"$@\"");
        // ../sample.raw reduces to its base name, which exists in the dumps
        // dir; the resolved path must stay inside it.
        let output = fx
            .dispatcher
            .dispatch("../sample.raw", "linux.PsList", None, None)
            .await;
        assert!(output.contains(&fx.dumps_dir.join("sample.raw").display().to_string()));
        assert!(!output.contains(".."));

        // A traversal name with no match in the dumps dir is simply not found.
        let output = fx
            .dispatcher
            .dispatch("../../etc/passwd", "linux.PsList", None, None)
            .await;
        assert!(output.contains("not found"));
    }

    #[tokio::test]
    async fn test_dispatch_missing_dump_spawns_nothing() {
        let fx = fixture("echo ran");
        let output = fx
            .dispatcher
            .dispatch("missing.raw", "linux.PsList", None, None)
            .await;
        assert_eq!(output, "Error: memory dump file not found at missing.raw");
        assert!(!fx.spawn_marker.exists());
    }

    #[tokio::test]
    async fn test_dispatch_missing_required_argument_spawns_nothing() {
        let fx = fixture("echo ran");
        let dump = fx.dumps_dir.join("sample.raw");
        let output = fx
            .dispatcher
            .dispatch(dump.to_str().unwrap(), "windows.MemMap", None, None)
            .await;
        assert_eq!(output, "Error: missing required argument 'pid'");
        assert!(!fx.spawn_marker.exists());
    }

    #[tokio::test]
    async fn test_dispatch_unknown_plugin_spawns_nothing() {
        let fx = fixture("echo ran");
        let output = fx
            .dispatcher
            .dispatch("sample.raw", "nonexistent.Plugin", None, None)
            .await;
        assert_eq!(output, "Error: plugin 'nonexistent.Plugin' not found");
        assert!(!fx.spawn_marker.exists());
    }

    #[tokio::test]
    async fn test_dispatch_timeout_comes_back_as_text() {
        let fx = fixture("sleep 5");
        let output = fx
            .dispatcher
            .dispatch(
                "sample.raw",
                "linux.Bash",
                None,
                Some(Duration::from_secs(1)),
            )
            .await;
        assert!(output.contains("timed out after 1 seconds"));
    }

    #[tokio::test]
    async fn test_dispatch_nonzero_exit_surfaces_stderr() {
        let fx = fixture("echo 'Unsatisfied requirement' >&2; exit 1");
        let output = fx
            .dispatcher
            .dispatch("sample.raw", "linux.PsList", None, None)
            .await;
        assert!(output.contains("return code 1"));
        assert!(output.contains("Unsatisfied requirement"));
    }

    #[test]
    fn test_list_all_is_valid_json_with_summaries() {
        let fx = fixture("true");
        let listing = fx.dispatcher.list_all();
        let parsed: serde_json::Value = serde_json::from_str(&listing).unwrap();
        let map = parsed.as_object().unwrap();
        assert_eq!(map.len(), 97);
        assert_eq!(
            map.get("linux.PsList").and_then(|v| v.as_str()),
            Some("Lists the processes present in a particular linux memory image")
        );
    }
}
