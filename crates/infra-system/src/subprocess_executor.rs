// Subprocess executor implementation
// reason: async-trait, tokio for async process management
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::time::{timeout, timeout_at};
use tracing::{debug, info, warn};

use aspire_core::domain::{InvocationResult, LAUNCH_FAILURE_EXIT_CODE};
use aspire_core::port::CommandExecutor;

/// Grace period between SIGTERM and SIGKILL when a deadline expires
pub const KILL_GRACE_PERIOD: Duration = Duration::from_secs(2);

/// Flags whose value is masked in logs
const SECRET_FLAGS: &[&str] = &["--token"];

/// How waiting on the child ended
enum ExitOutcome {
    Exited(ExitStatus),
    TimedOut,
    WaitFailed(io::Error),
}

/// Subprocess executor
/// Runs one fixed program per instance; every call spawns its own child
pub struct SubprocessExecutor {
    program: String,
    execution_timeout: Option<Duration>,
    kill_grace_period: Duration,
}

impl SubprocessExecutor {
    /// Create a new subprocess executor
    ///
    /// # Arguments
    /// * `program` - Executable name or path, looked up on `PATH`
    ///
    /// # Example
    /// ```ignore
    /// let executor = SubprocessExecutor::new("aspire");
    /// let result = executor.execute("--version", None).await;
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            execution_timeout: None,
            kill_grace_period: KILL_GRACE_PERIOD,
        }
    }

    /// Bound every invocation; `None` waits indefinitely
    pub fn with_timeout(mut self, execution_timeout: Option<Duration>) -> Self {
        self.execution_timeout = execution_timeout;
        self
    }

    pub fn with_kill_grace_period(mut self, grace: Duration) -> Self {
        self.kill_grace_period = grace;
        self
    }

    /// Command line as recorded in the result
    fn command_line(&self, arguments: &str) -> String {
        if arguments.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, arguments)
        }
    }

    /// Describe a spawn failure, naming the directory when it is the culprit
    fn describe_launch_error(&self, error: &io::Error, cwd: &Path) -> String {
        if !cwd.is_dir() {
            format!(
                "Failed to start '{}': working directory '{}' does not exist ({})",
                self.program,
                cwd.display(),
                error
            )
        } else {
            format!("Failed to start '{}': {}", self.program, error)
        }
    }

    /// Wait for exit, enforcing the optional deadline
    ///
    /// Returns the elapsed time taken right after exit, before the output
    /// drains finish.
    async fn wait_for_exit(&self, child: &mut Child, started: Instant) -> (ExitOutcome, Duration) {
        let outcome = match self.execution_timeout {
            None => match child.wait().await {
                Ok(status) => ExitOutcome::Exited(status),
                Err(e) => ExitOutcome::WaitFailed(e),
            },
            Some(limit) => {
                let remaining = limit.saturating_sub(started.elapsed());
                match timeout(remaining, child.wait()).await {
                    Ok(Ok(status)) => ExitOutcome::Exited(status),
                    Ok(Err(e)) => ExitOutcome::WaitFailed(e),
                    Err(_) => {
                        self.terminate(child).await;
                        ExitOutcome::TimedOut
                    }
                }
            }
        };

        (outcome, started.elapsed())
    }

    /// SIGTERM first, SIGKILL after the grace period
    ///
    /// On Unix the child leads its own process group, so grandchildren that
    /// still hold the output pipes are signalled too.
    async fn terminate(&self, child: &mut Child) {
        #[cfg(unix)]
        {
            use nix::sys::signal::{killpg, Signal};
            use nix::unistd::Pid;

            if let Some(pid) = child.id() {
                let group = Pid::from_raw(pid as i32);
                info!(pid = %pid, program = %self.program, "Deadline exceeded, sending SIGTERM");

                if killpg(group, Signal::SIGTERM).is_ok() {
                    if let Ok(Ok(_)) = timeout(self.kill_grace_period, child.wait()).await {
                        info!(pid = %pid, "Process exited gracefully after SIGTERM");
                        // Leader is gone; stragglers in the group are not
                        let _ = killpg(group, Signal::SIGKILL);
                        return;
                    }
                    warn!(pid = %pid, "Process did not exit after SIGTERM, sending SIGKILL");
                }

                let _ = killpg(group, Signal::SIGKILL);
            }
        }

        if let Err(e) = child.kill().await {
            warn!(program = %self.program, error = %e, "Failed to kill timed out process");
        }
    }
}

/// Resolve the directory a child runs in
///
/// An explicit directory is used verbatim. Otherwise the current directory
/// is read now, on every call, never cached.
pub fn resolve_working_directory(requested: Option<&Path>) -> io::Result<PathBuf> {
    match requested {
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir(),
    }
}

/// Map an exit status to the recorded integer code
///
/// Unix signals become `128 + signal`, matching shell conventions.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    LAUNCH_FAILURE_EXIT_CODE
}

/// Command line as written to logs, secret flag values masked
fn loggable_command(program: &str, argv: &[String]) -> String {
    let mut masked = Vec::with_capacity(argv.len() + 1);
    masked.push(program.to_string());

    let mut mask_next = false;
    for arg in argv {
        if mask_next {
            masked.push("***".to_string());
            mask_next = false;
            continue;
        }

        match arg.split_once('=') {
            Some((flag, _)) if SECRET_FLAGS.contains(&flag) => masked.push(format!("{}=***", flag)),
            _ => {
                mask_next = SECRET_FLAGS.contains(&arg.as_str());
                masked.push(arg.clone());
            }
        }
    }

    shell_words::join(masked)
}

/// Read a child stream into `buf` until end-of-file
///
/// Whatever arrived stays in `buf` if the read is abandoned.
async fn drain_into<R: AsyncRead + Unpin>(stream: Option<R>, buf: &mut Vec<u8>) {
    let Some(mut stream) = stream else {
        return;
    };

    let mut chunk = [0u8; 8192];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
            Err(e) => {
                warn!(error = %e, "Failed to read child output stream");
                break;
            }
        }
    }
}

#[async_trait]
impl CommandExecutor for SubprocessExecutor {
    fn program(&self) -> &str {
        &self.program
    }

    async fn execute(&self, arguments: &str, working_directory: Option<&Path>) -> InvocationResult {
        let command_line = self.command_line(arguments);
        // Failures before spawn are timed from entry
        let entered = Instant::now();

        let cwd = match resolve_working_directory(working_directory) {
            Ok(dir) => dir,
            Err(e) => {
                warn!(program = %self.program, error = %e, "Cannot resolve current directory");
                return InvocationResult::launch_failed(
                    command_line,
                    PathBuf::from("."),
                    format!("Failed to resolve current directory: {}", e),
                    entered.elapsed(),
                );
            }
        };

        let argv = match shell_words::split(arguments) {
            Ok(argv) => argv,
            Err(e) => {
                warn!(program = %self.program, error = %e, "Invalid argument string");
                return InvocationResult::launch_failed(
                    command_line,
                    cwd,
                    format!("Invalid argument string: {}", e),
                    entered.elapsed(),
                );
            }
        };

        let logged = loggable_command(&self.program, &argv);
        debug!(
            command = %logged,
            working_dir = %cwd.display(),
            timeout_ms = ?self.execution_timeout.map(|t| t.as_millis()),
            "Starting subprocess execution"
        );

        let mut command = Command::new(&self.program);
        command
            .args(&argv)
            .current_dir(&cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        #[cfg(unix)]
        command.process_group(0);

        let started = Instant::now();
        let spawned = command.spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                let message = self.describe_launch_error(&e, &cwd);
                warn!(command = %logged, error = %message, "Subprocess launch failed");
                return InvocationResult::launch_failed(
                    command_line,
                    cwd,
                    message,
                    started.elapsed(),
                );
            }
        };

        // Both pipes drain alongside the exit wait; sequential reads deadlock
        // once the child fills the other pipe's buffer.
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let mut stdout_buf = Vec::new();
        let mut stderr_buf = Vec::new();

        let drains = async {
            let both = async {
                tokio::join!(
                    drain_into(stdout_pipe, &mut stdout_buf),
                    drain_into(stderr_pipe, &mut stderr_buf),
                )
            };

            // A descendant outside the process group can hold the pipes open
            // forever; with a deadline, reading stops one grace period past it.
            match self.execution_timeout {
                None => {
                    both.await;
                }
                Some(limit) => {
                    let cutoff = tokio::time::Instant::from_std(started + limit)
                        + self.kill_grace_period;
                    if timeout_at(cutoff, both).await.is_err() {
                        warn!(command = %logged, "Output pipes still open past deadline, keeping partial output");
                    }
                }
            }
        };

        let ((outcome, elapsed), ()) =
            tokio::join!(self.wait_for_exit(&mut child, started), drains);

        let stdout = String::from_utf8_lossy(&stdout_buf).into_owned();
        let stderr = String::from_utf8_lossy(&stderr_buf).into_owned();

        let result = match outcome {
            ExitOutcome::Exited(status) => InvocationResult::completed(
                command_line,
                cwd,
                exit_code(status),
                stdout,
                stderr,
                elapsed,
            ),
            ExitOutcome::TimedOut => {
                InvocationResult::timed_out(command_line, cwd, stdout, stderr, elapsed)
            }
            ExitOutcome::WaitFailed(e) => InvocationResult::wait_failed(
                command_line,
                cwd,
                stdout,
                format!("Failed to wait for process: {}", e),
                elapsed,
            ),
        };

        info!(
            command = %logged,
            exit_code = result.exit_code(),
            termination = result.termination().as_str(),
            duration_ms = %format!("{:.2}", result.execution_time_ms()),
            "Subprocess execution completed"
        );

        result
    }
}
