//! Asynchronous Volatility process execution.
//!
//! Runs `<python> <vol.py> <args...>` with the Volatility installation
//! directory as working directory, waits under a timeout, and converts every
//! failure mode into data. Nothing in this module returns `Err` or panics;
//! the caller always gets a [`RunOutcome`].

use crate::config::VolConfig;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, error, info, warn};

/// How an external tool invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Process exited with code 0; stdout is the payload.
    Success,
    /// Process exceeded its time budget and was killed.
    Timeout,
    /// Process ran to completion but reported failure; stderr is the payload.
    NonZeroExit,
    /// The process could not be spawned or waited on at all. This affects
    /// every subsequent dispatch, so it is logged as an operational error.
    SpawnFailure,
}

/// Captured result of one `vol.py` invocation.
#[derive(Debug)]
pub struct RunOutcome {
    pub status: RunStatus,
    /// Decoded standard output (invalid UTF-8 replaced, never fatal).
    pub stdout: String,
    /// Decoded standard error.
    pub stderr: String,
    /// Exit code, present for `Success` and `NonZeroExit`.
    pub exit_code: Option<i32>,
    /// Explanatory message for `Timeout` and `SpawnFailure`.
    pub detail: String,
}

impl RunOutcome {
    fn failed(status: RunStatus, detail: String) -> Self {
        RunOutcome {
            status,
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
            detail,
        }
    }

    /// The single text payload surfaced upstream: stdout on success, an
    /// explanatory message otherwise.
    pub fn payload(&self) -> String {
        match self.status {
            RunStatus::Success => self.stdout.clone(),
            RunStatus::NonZeroExit => format!(
                "Command failed with return code {}: {}",
                self.exit_code.unwrap_or(-1),
                self.stderr
            ),
            RunStatus::Timeout | RunStatus::SpawnFailure => self.detail.clone(),
        }
    }
}

/// Handle for running `vol.py` as a subprocess.
///
/// Each [`execute`](VolRunner::execute) call is independent; concurrent
/// invocations share nothing but the filesystem and the OS process table.
#[derive(Debug, Clone)]
pub struct VolRunner {
    python: PathBuf,
    script: PathBuf,
    workdir: PathBuf,
    default_timeout: Duration,
    max_timeout: Duration,
}

impl VolRunner {
    pub fn new(config: &VolConfig) -> Self {
        VolRunner {
            python: config.python.clone(),
            script: config.script.clone(),
            workdir: config.install_dir.clone(),
            default_timeout: config.default_timeout,
            max_timeout: config.max_timeout,
        }
    }

    /// Clamp a caller-supplied timeout override to the configured ceiling.
    fn effective_timeout(&self, requested: Option<Duration>) -> Duration {
        match requested {
            Some(t) if t > self.max_timeout => {
                warn!(
                    "Requested timeout {}s exceeds ceiling {}s; clamping",
                    t.as_secs(),
                    self.max_timeout.as_secs()
                );
                self.max_timeout
            }
            Some(t) => t,
            None => self.default_timeout,
        }
    }

    /// Run `vol.py` with the given argument vector.
    pub async fn execute(&self, args: &[String], timeout: Option<Duration>) -> RunOutcome {
        let timeout = self.effective_timeout(timeout);
        let cmd_str = format!(
            "{} {} {}",
            self.python.display(),
            self.script.display(),
            args.join(" ")
        );

        info!("Running command: {}", cmd_str);

        let mut command = Command::new(&self.python);
        command
            .arg(&self.script)
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                let detail = format!("Exception running command {}: {}", cmd_str, e);
                error!("{}", detail);
                return RunOutcome::failed(RunStatus::SpawnFailure, detail);
            }
        };

        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                let detail = format!("Exception running command {}: {}", cmd_str, e);
                error!("{}", detail);
                return RunOutcome::failed(RunStatus::SpawnFailure, detail);
            }
            Err(_elapsed) => {
                // The timed-out wait future is dropped here, which drops the
                // child handle; kill_on_drop reaps the process.
                let detail = format!(
                    "Command timed out after {} seconds: {}",
                    timeout.as_secs(),
                    cmd_str
                );
                error!("{}", detail);
                return RunOutcome::failed(RunStatus::Timeout, detail);
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let exit_code = output.status.code();

        if output.status.success() {
            debug!("Command completed successfully: {}", cmd_str);
            RunOutcome {
                status: RunStatus::Success,
                stdout,
                stderr,
                exit_code,
                detail: String::new(),
            }
        } else {
            error!(
                "Command failed with return code {}: {}",
                exit_code.unwrap_or(-1),
                stderr.trim_end()
            );
            RunOutcome {
                status: RunStatus::NonZeroExit,
                stdout,
                stderr,
                exit_code,
                detail: String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Runner whose "python" is /bin/sh and whose "vol.py" is a shell script,
    /// so `execute` runs `sh script.sh <args...>`.
    fn sh_runner(dir: &std::path::Path, script_body: &str) -> VolRunner {
        let script = dir.join("vol.sh");
        let mut f = std::fs::File::create(&script).unwrap();
        writeln!(f, "#!/bin/sh").unwrap();
        writeln!(f, "{}", script_body).unwrap();
        VolRunner {
            python: PathBuf::from("/bin/sh"),
            script,
            workdir: dir.to_path_buf(),
            default_timeout: Duration::from_secs(10),
            max_timeout: Duration::from_secs(10),
        }
    }

    #[tokio::test]
    async fn test_success_captures_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let runner = sh_runner(dir.path(), "echo hello");
        let outcome = runner.execute(&[], None).await;
        assert_eq!(outcome.status, RunStatus::Success);
        assert_eq!(outcome.exit_code, Some(0));
        assert_eq!(outcome.payload(), "hello\n");
    }

    #[tokio::test]
    async fn test_args_are_forwarded() {
        let dir = tempfile::tempdir().unwrap();
        let runner = sh_runner(dir.path(), "echo \"$@\"");
        let args = vec!["-f".to_string(), "mem.raw".to_string()];
        let outcome = runner.execute(&args, None).await;
        assert_eq!(outcome.status, RunStatus::Success);
        assert_eq!(outcome.stdout, "-f mem.raw\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_surfaces_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let runner = sh_runner(dir.path(), "echo boom >&2; exit 3");
        let outcome = runner.execute(&[], None).await;
        assert_eq!(outcome.status, RunStatus::NonZeroExit);
        assert_eq!(outcome.exit_code, Some(3));
        let payload = outcome.payload();
        assert!(payload.contains("return code 3"));
        assert!(payload.contains("boom"));
    }

    #[tokio::test]
    async fn test_spawn_failure_is_data_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        let mut runner = sh_runner(dir.path(), "echo unreachable");
        runner.python = PathBuf::from("/nonexistent/interpreter");
        let outcome = runner.execute(&[], None).await;
        assert_eq!(outcome.status, RunStatus::SpawnFailure);
        assert!(outcome.payload().contains("Exception running command"));
    }

    #[tokio::test]
    async fn test_timeout_kills_process() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("survived");
        let body = format!("sleep 3\necho done > {}", marker.display());
        let runner = sh_runner(dir.path(), &body);

        let started = std::time::Instant::now();
        let outcome = runner.execute(&[], Some(Duration::from_secs(1))).await;
        assert_eq!(outcome.status, RunStatus::Timeout);
        assert!(started.elapsed() < Duration::from_secs(3));
        assert!(outcome.payload().contains("timed out after 1 seconds"));

        // If the process had survived the kill it would write the marker
        // once the sleep finishes.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(!marker.exists());
    }

    #[test]
    fn test_timeout_override_clamped_to_ceiling() {
        let dir = tempfile::tempdir().unwrap();
        let runner = sh_runner(dir.path(), "true");
        assert_eq!(
            runner.effective_timeout(Some(Duration::from_secs(3600))),
            Duration::from_secs(10)
        );
        assert_eq!(
            runner.effective_timeout(Some(Duration::from_secs(2))),
            Duration::from_secs(2)
        );
        assert_eq!(runner.effective_timeout(None), Duration::from_secs(10));
    }
}
