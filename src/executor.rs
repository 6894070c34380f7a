//! Running swetest as a child process
//!
//! [`CommandRunner`] is the seam between the client and the operating system.
//! [`SwissephExecutor`] is the tokio implementation; tests substitute their
//! own runner to feed canned output.

use std::future::Future;
use std::process::Stdio;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use regex::Regex;
use tokio::process::Command as ProcessCommand;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::SwissephConfig;
use crate::error::{Result, SwissephError};
use crate::models::Command;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("line break pattern is a valid regex"));

/// Runs a built command and returns its non-empty output lines
pub trait CommandRunner {
    fn run(&self, command: &Command) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Spawns the swetest executable with a deadline
#[derive(Debug, Clone)]
pub struct SwissephExecutor {
    timeout: Duration,
}

impl SwissephExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_config(config: &SwissephConfig) -> Self {
        Self::new(config.timeout())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SwissephExecutor {
    fn default() -> Self {
        Self::from_config(&SwissephConfig::default())
    }
}

impl CommandRunner for SwissephExecutor {
    async fn run(&self, command: &Command) -> Result<Vec<String>> {
        info!("Running: {}", command);
        let start = Instant::now();

        let output = ProcessCommand::new(&command.executable)
            .args(command.to_process_args())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = timeout(self.timeout, output).await.map_err(|_| {
            warn!("swetest exceeded {:?}, process killed", self.timeout);
            SwissephError::ProcessTimeout {
                seconds: self.timeout.as_secs_f64(),
            }
        })??;

        if !output.status.success() {
            return Err(SwissephError::ProcessFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let lines = split_output_lines(&String::from_utf8_lossy(&output.stdout));
        debug!(
            "swetest produced {} lines in {:.2?}",
            lines.len(),
            start.elapsed()
        );
        Ok(lines)
    }
}

/// Split on any line break, trim each line and drop empty ones
pub fn split_output_lines(output: &str) -> Vec<String> {
    LINE_BREAK
        .split(output)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(executable: &str, arguments: &[&str]) -> Command {
        Command {
            executable: executable.to_string(),
            arguments: arguments.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    #[test]
    fn test_split_output_lines() {
        let lines = split_output_lines("0PPPSun\r\n1PPPMoon\n\n  \r 2PPPMercury \r\n");
        assert_eq!(lines, vec!["0PPPSun", "1PPPMoon", "2PPPMercury"]);
    }

    #[test]
    fn test_split_output_lines_empty() {
        assert!(split_output_lines("").is_empty());
        assert!(split_output_lines("\n\r\n  \n").is_empty());
    }

    #[test]
    fn test_executor_uses_config_timeout() {
        let config = SwissephConfig::default().with_timeout_secs(3);
        assert_eq!(
            SwissephExecutor::from_config(&config).timeout(),
            Duration::from_secs(3)
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_collects_stdout_lines() {
        let executor = SwissephExecutor::new(Duration::from_secs(5));
        let lines = executor
            .run(&command("echo", &["b01.01.2025", "pd"]))
            .await
            .unwrap();

        assert_eq!(lines, vec!["-b01.01.2025 -pd"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_reports_failed_exit() {
        let executor = SwissephExecutor::new(Duration::from_secs(5));
        let err = executor.run(&command("false", &[])).await.unwrap_err();

        assert!(matches!(err, SwissephError::ProcessFailed { .. }));
    }

    #[tokio::test]
    async fn test_run_missing_executable() {
        let executor = SwissephExecutor::new(Duration::from_secs(5));
        let err = executor
            .run(&command("/nonexistent/swetest-missing", &["pd"]))
            .await
            .unwrap_err();

        assert!(matches!(err, SwissephError::Io(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_times_out() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("slow-swetest");
        std::fs::write(&script, "#!/bin/sh\nexec sleep 5\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let executor = SwissephExecutor::new(Duration::from_millis(200));
        let err = executor
            .run(&command(&script.to_string_lossy(), &[]))
            .await
            .unwrap_err();

        assert!(matches!(err, SwissephError::ProcessTimeout { .. }));
    }
}
