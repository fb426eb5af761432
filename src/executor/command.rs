//! Single command execution
//!
//! Runs one external command with a wall-clock timeout and captures its
//! outcome. Launch failures and timeouts are folded into the result record
//! so callers never have to unwind because a tool is missing.

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::models::CommandResult;

/// Execute `command` in `working_dir` with a hard timeout.
///
/// When `go_root` is set, `<go_root>/bin` is prepended to PATH and GOROOT is
/// exported so the Go toolchain resolves from the project-local installation.
/// A timed-out child is killed when its handle is dropped.
pub async fn run_command(
    command: &str,
    working_dir: &Path,
    go_root: Option<&Path>,
    timeout_secs: u64,
) -> CommandResult {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return CommandResult::launch_failed(command, "empty command");
    };

    let mut cmd = Command::new(program);
    cmd.args(parts)
        .current_dir(working_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(root) = go_root {
        let path = std::env::var("PATH").unwrap_or_default();
        cmd.env("PATH", format!("{}/bin:{path}", root.display()));
        cmd.env("GOROOT", root);
    }

    debug!("Spawning: {command}");
    let start = Instant::now();

    let child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => return CommandResult::launch_failed(command, e),
    };

    match timeout(Duration::from_secs(timeout_secs), child.wait_with_output()).await {
        Ok(Ok(output)) => CommandResult::completed(
            command,
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            start.elapsed().as_millis() as u64,
        ),
        Ok(Err(e)) => CommandResult::launch_failed(command, e),
        Err(_) => {
            CommandResult::timed_out(command, timeout_secs, start.elapsed().as_millis() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[tokio::test]
    async fn test_successful_command() {
        let result = run_command("true", &cwd(), None, 10).await;
        assert!(result.succeeded);
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_failing_command() {
        let result = run_command("false", &cwd(), None, 10).await;
        assert!(!result.succeeded);
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_output_capture() {
        let result = run_command("echo hello world", &cwd(), None, 10).await;
        assert!(result.succeeded);
        assert_eq!(result.stdout.trim(), "hello world");
        assert!(result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_missing_binary_is_not_fatal() {
        let result = run_command("definitely-not-a-real-binary-xyz", &cwd(), None, 10).await;
        assert!(!result.succeeded);
        assert_eq!(result.exit_code, -1);
        assert!(!result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_kills_and_reports() {
        let result = run_command("sleep 30", &cwd(), None, 1).await;
        assert!(!result.succeeded);
        assert_eq!(result.exit_code, -1);
        assert!(result.stderr.contains("timed out after"));
        assert_eq!(result.stderr, "Command timed out after 1 seconds");
    }

    #[tokio::test]
    async fn test_missing_working_dir_is_not_fatal() {
        let result = run_command(
            "true",
            Path::new("/definitely/not/a/real/dir"),
            None,
            10,
        )
        .await;
        assert!(!result.succeeded);
        assert_eq!(result.exit_code, -1);
    }

    #[test]
    fn test_empty_command() {
        let result = tokio_test::block_on(run_command("   ", &cwd(), None, 10));
        assert!(!result.succeeded);
        assert_eq!(result.exit_code, -1);
    }
}
