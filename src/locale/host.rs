//! Best-effort query of the host OS locale from inside a compatibility layer.

use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

use tracing::debug;

use crate::constants::HOST_LOCALE_QUERY_TIMEOUT;

/// Source of the host operating system's locale tag.
///
/// Implementations return `None` on any failure; they never error.
pub trait HostLocaleReader {
    fn query_host_locale(&self) -> Option<String>;
}

/// Reader for hosts with nothing to ask
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHostLocale;

impl HostLocaleReader for NoHostLocale {
    fn query_host_locale(&self) -> Option<String> {
        None
    }
}

/// One shell invocation: program and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostQuery {
    pub program: String,
    pub args: Vec<String>,
}

impl HostQuery {
    pub fn new(program: &str, args: &[&str]) -> Self {
        HostQuery {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Asks the Windows host through its shells: PowerShell first, then `cmd.exe`.
///
/// Queries run in order; the first zero-exit, non-empty answer wins.
#[derive(Debug, Clone)]
pub struct WindowsHostLocaleReader {
    queries: Vec<HostQuery>,
    timeout: Duration,
}

impl Default for WindowsHostLocaleReader {
    fn default() -> Self {
        WindowsHostLocaleReader::with_queries(
            vec![
                HostQuery::new(
                    "powershell.exe",
                    &[
                        "-NoLogo",
                        "-NoProfile",
                        "-Command",
                        "[cultureinfo]::CurrentUICulture.Name",
                    ],
                ),
                HostQuery::new("cmd.exe", &["/c", "echo", "%LANG%"]),
            ],
            HOST_LOCALE_QUERY_TIMEOUT,
        )
    }
}

impl WindowsHostLocaleReader {
    pub(crate) fn with_queries(queries: Vec<HostQuery>, timeout: Duration) -> Self {
        WindowsHostLocaleReader { queries, timeout }
    }
}

impl HostLocaleReader for WindowsHostLocaleReader {
    fn query_host_locale(&self) -> Option<String> {
        self.queries
            .iter()
            .find_map(|query| run_with_timeout(query.command(), self.timeout))
    }
}

/// Runs `cmd` and returns its trimmed stdout if it exits zero within `timeout`.
///
/// Spawn failures, non-zero exits, empty output, and timeouts all yield `None`.
/// A child that outlives the timeout is killed.
pub fn run_with_timeout(mut cmd: Command, timeout: Duration) -> Option<String> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let child = match cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            debug!(%program, "could not spawn: {}", e);
            return None;
        }
    };

    let pid = child.id();
    let (sender, receiver) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = sender.send(child.wait_with_output());
    });

    let output = match receiver.recv_timeout(timeout) {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            debug!(%program, "wait failed: {}", e);
            return None;
        }
        Err(_) => {
            debug!(%program, ?timeout, "timed out");
            kill_process(pid);
            return None;
        }
    };

    if !output.status.success() {
        debug!(%program, status = ?output.status, "non-zero exit");
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() {
        None
    } else {
        Some(stdout)
    }
}

#[cfg(unix)]
fn kill_process(pid: u32) {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    if let Ok(raw) = i32::try_from(pid) {
        let _ = kill(Pid::from_raw(raw), Signal::SIGKILL);
    }
}

#[cfg(not(unix))]
fn kill_process(_pid: u32) {}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_run_with_timeout_returns_trimmed_stdout() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo '  ja-JP  '"]);

        assert_eq!(
            run_with_timeout(cmd, Duration::from_secs(5)),
            Some("ja-JP".to_string())
        );
    }

    #[test]
    fn test_run_with_timeout_missing_binary() {
        let cmd = Command::new("definitely-not-a-real-binary-bon");
        assert_eq!(run_with_timeout(cmd, Duration::from_secs(1)), None);
    }

    #[test]
    fn test_run_with_timeout_non_zero_exit() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo en-US; exit 3"]);
        assert_eq!(run_with_timeout(cmd, Duration::from_secs(5)), None);
    }

    #[test]
    fn test_run_with_timeout_empty_output() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "true"]);
        assert_eq!(run_with_timeout(cmd, Duration::from_secs(5)), None);
    }

    #[test]
    fn test_run_with_timeout_kills_slow_child() {
        let mut cmd = Command::new("sleep");
        cmd.arg("10");

        let started = Instant::now();
        assert_eq!(run_with_timeout(cmd, Duration::from_millis(200)), None);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    fn sh(script: &str) -> HostQuery {
        HostQuery::new("sh", &["-c", script])
    }

    #[test]
    fn test_host_reader_falls_through_failed_queries() {
        let reader = WindowsHostLocaleReader::with_queries(
            vec![sh("exit 1"), sh("true"), sh("echo ja-JP")],
            Duration::from_secs(5),
        );
        assert_eq!(reader.query_host_locale(), Some("ja-JP".to_string()));
    }

    #[test]
    fn test_host_reader_stops_at_first_answer() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("second-ran");
        let second = format!("touch '{}'; echo ja-JP", marker.display());

        let reader = WindowsHostLocaleReader::with_queries(
            vec![sh("echo en-US"), sh(&second)],
            Duration::from_secs(5),
        );
        assert_eq!(reader.query_host_locale(), Some("en-US".to_string()));
        assert!(!marker.exists());
    }

    #[test]
    fn test_host_reader_all_queries_fail() {
        let reader = WindowsHostLocaleReader::with_queries(
            vec![
                HostQuery::new("definitely-not-a-real-binary-bon", &[]),
                sh("exit 2"),
            ],
            Duration::from_secs(5),
        );
        assert_eq!(reader.query_host_locale(), None);
    }

    #[test]
    fn test_default_reader_asks_powershell_then_cmd() {
        let reader = WindowsHostLocaleReader::default();
        let programs: Vec<_> = reader.queries.iter().map(|q| q.program.as_str()).collect();
        assert_eq!(programs, ["powershell.exe", "cmd.exe"]);
        assert_eq!(reader.timeout, HOST_LOCALE_QUERY_TIMEOUT);
    }

    #[test]
    fn test_no_host_locale() {
        assert_eq!(NoHostLocale.query_host_locale(), None);
    }
}
