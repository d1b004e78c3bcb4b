// Invocation Result - outcome of one run of the external program

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Exit code recorded when the child process could not be started at all
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = -1;

/// Exit code recorded when the child was terminated for exceeding its deadline
/// (same convention as coreutils `timeout`)
pub const TIMED_OUT_EXIT_CODE: i32 = 124;

/// How the invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Child ran and exited (any exit code, including signals)
    Exited,
    /// Child could not be spawned (missing executable, bad cwd, bad arguments)
    LaunchFailed,
    /// Child exceeded the executor deadline and was killed
    TimedOut,
    /// Child was spawned but its exit status could not be collected
    WaitFailed,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::Exited => "EXITED",
            Termination::LaunchFailed => "LAUNCH_FAILED",
            Termination::TimedOut => "TIMED_OUT",
            Termination::WaitFailed => "WAIT_FAILED",
        }
    }
}

/// Immutable record of a single invocation
///
/// Every field is populated on every path: a launch failure still carries a
/// sentinel exit code, the resolved working directory and an error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    command: String,
    working_directory: PathBuf,
    exit_code: i32,
    standard_output: String,
    standard_error: String,
    execution_time: Duration,
    termination: Termination,
}

impl InvocationResult {
    /// Result for a child that ran to completion
    pub fn completed(
        command: impl Into<String>,
        working_directory: impl Into<PathBuf>,
        exit_code: i32,
        standard_output: impl Into<String>,
        standard_error: impl Into<String>,
        execution_time: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            working_directory: working_directory.into(),
            exit_code,
            standard_output: standard_output.into(),
            standard_error: standard_error.into(),
            execution_time,
            termination: Termination::Exited,
        }
    }

    /// Result for a child that never started
    pub fn launch_failed(
        command: impl Into<String>,
        working_directory: impl Into<PathBuf>,
        error: impl Into<String>,
        execution_time: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            working_directory: working_directory.into(),
            exit_code: LAUNCH_FAILURE_EXIT_CODE,
            standard_output: String::new(),
            standard_error: error.into(),
            execution_time,
            termination: Termination::LaunchFailed,
        }
    }

    /// Result for a child killed after its deadline; keeps the partial output
    pub fn timed_out(
        command: impl Into<String>,
        working_directory: impl Into<PathBuf>,
        standard_output: impl Into<String>,
        standard_error: impl Into<String>,
        execution_time: Duration,
    ) -> Self {
        let mut standard_error = standard_error.into();
        if !standard_error.is_empty() && !standard_error.ends_with('\n') {
            standard_error.push('\n');
        }
        standard_error.push_str(&format!(
            "Process timed out after {}ms",
            execution_time.as_millis()
        ));

        Self {
            command: command.into(),
            working_directory: working_directory.into(),
            exit_code: TIMED_OUT_EXIT_CODE,
            standard_output: standard_output.into(),
            standard_error,
            execution_time,
            termination: Termination::TimedOut,
        }
    }

    /// Result for a child whose exit status was lost
    pub fn wait_failed(
        command: impl Into<String>,
        working_directory: impl Into<PathBuf>,
        standard_output: impl Into<String>,
        error: impl Into<String>,
        execution_time: Duration,
    ) -> Self {
        Self {
            command: command.into(),
            working_directory: working_directory.into(),
            exit_code: LAUNCH_FAILURE_EXIT_CODE,
            standard_output: standard_output.into(),
            standard_error: error.into(),
            execution_time,
            termination: Termination::WaitFailed,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn standard_output(&self) -> &str {
        &self.standard_output
    }

    pub fn standard_error(&self) -> &str {
        &self.standard_error
    }

    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Exit code 0 and nothing else
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Elapsed time in fractional milliseconds
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }
}

/// Canonical report. Callers match on the literal labels, keep them stable.
impl fmt::Display for InvocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Command: {}", self.command)?;
        writeln!(f, "Working Directory: {}", self.working_directory.display())?;
        writeln!(f, "Exit Code: {}", self.exit_code)?;
        writeln!(f, "Execution Time: {:.2}ms", self.execution_time_ms())?;
        writeln!(f, "Standard Output:")?;
        writeln!(f, "{}", self.standard_output)?;
        writeln!(f, "Standard Error:")?;
        write!(f, "{}", self.standard_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(exit_code: i32) -> InvocationResult {
        InvocationResult::completed(
            "prog --help",
            "/tmp",
            exit_code,
            "Test output",
            "Test error",
            Duration::from_millis(100),
        )
    }

    #[test]
    fn test_display_includes_all_fields() {
        let rendered = sample(1).to_string();

        assert!(rendered.contains("prog --help"));
        assert!(rendered.contains("/tmp"));
        assert!(rendered.contains("Exit Code: 1"));
        assert!(rendered.contains("100.00ms"));
        assert!(rendered.contains("Test output"));
        assert!(rendered.contains("Test error"));
    }

    #[test]
    fn test_display_field_order_is_stable() {
        let rendered = sample(0).to_string();
        let labels = [
            "Command: ",
            "Working Directory: ",
            "Exit Code: ",
            "Execution Time: ",
            "Standard Output:",
            "Standard Error:",
        ];

        let positions: Vec<usize> = labels
            .iter()
            .map(|label| rendered.find(label).expect("label missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_display_keeps_empty_streams() {
        let result = InvocationResult::completed(
            "prog",
            "/work",
            0,
            "",
            "",
            Duration::from_micros(1500),
        );
        let rendered = result.to_string();

        assert!(rendered.contains("Standard Output:\n\nStandard Error:"));
        assert!(rendered.contains("Execution Time: 1.50ms"));
    }

    #[test]
    fn test_is_success_only_for_zero() {
        assert!(sample(0).is_success());
        assert!(!sample(1).is_success());
        assert!(!sample(-1).is_success());
        assert!(!sample(255).is_success());
    }

    #[test]
    fn test_launch_failed_is_well_formed() {
        let result = InvocationResult::launch_failed(
            "missing-prog --version",
            "/tmp",
            "No such file or directory (os error 2)",
            Duration::from_micros(42),
        );

        assert_eq!(result.exit_code(), LAUNCH_FAILURE_EXIT_CODE);
        assert_eq!(result.termination(), Termination::LaunchFailed);
        assert!(!result.is_success());
        assert!(result.standard_output().is_empty());
        assert!(!result.standard_error().is_empty());
    }

    #[test]
    fn test_timed_out_appends_notice() {
        let result = InvocationResult::timed_out(
            "prog serve",
            "/tmp",
            "partial",
            "warming up",
            Duration::from_millis(1500),
        );

        assert_eq!(result.exit_code(), TIMED_OUT_EXIT_CODE);
        assert_eq!(result.termination(), Termination::TimedOut);
        assert_eq!(result.standard_output(), "partial");
        assert_eq!(
            result.standard_error(),
            "warming up\nProcess timed out after 1500ms"
        );
    }
}
