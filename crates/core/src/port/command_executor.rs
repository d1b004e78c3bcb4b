// Command Executor Port
// Abstraction over running the external CLI as a child process

use crate::domain::InvocationResult;
use async_trait::async_trait;
use std::path::Path;

/// Argument used by the availability probe
pub const VERSION_ARGUMENT: &str = "--version";

/// Command Executor trait
///
/// Implementations:
/// - SubprocessExecutor: spawns the configured program (infra-system)
/// - MockCommandExecutor: records calls, returns canned results (tests)
///
/// `execute` has no error channel. A child that cannot be launched is
/// reported as an `InvocationResult` with a sentinel exit code, so callers
/// only ever branch on `is_success()` / `exit_code()`.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Program name every invocation runs (e.g. `aspire`)
    fn program(&self) -> &str;

    /// Run the program with `arguments` (never including the program name)
    ///
    /// # Arguments
    /// * `arguments` - Space separated argument string, may be empty
    /// * `working_directory` - Directory for the child; `None` resolves the
    ///   caller's current directory at call time
    async fn execute(&self, arguments: &str, working_directory: Option<&Path>)
        -> InvocationResult;

    /// Availability probe: runs `--version` and reduces the outcome to a bool
    ///
    /// Never fails. Launch failures and non-zero exits are both `false`.
    async fn is_available(&self) -> bool {
        let result = self.execute(VERSION_ARGUMENT, None).await;

        tracing::debug!(
            program = %self.program(),
            exit_code = result.exit_code(),
            termination = result.termination().as_str(),
            "Availability probe completed"
        );

        result.is_success()
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// One recorded call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub arguments: String,
        pub working_directory: Option<PathBuf>,
    }

    /// Mock executor behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Exit with the given code, echoing the arguments on stdout
        Exit(i32),
        /// Pretend the program could not be launched
        LaunchFailure(String),
    }

    /// Mock Command Executor for testing
    pub struct MockCommandExecutor {
        program: String,
        behavior: MockBehavior,
        calls: Arc<Mutex<Vec<RecordedCall>>>,
    }

    impl MockCommandExecutor {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                program: "aspire".to_string(),
                behavior,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn new_success() -> Self {
            Self::new(MockBehavior::Exit(0))
        }

        pub fn new_exit(code: i32) -> Self {
            Self::new(MockBehavior::Exit(code))
        }

        pub fn new_launch_failure(message: impl Into<String>) -> Self {
            Self::new(MockBehavior::LaunchFailure(message.into()))
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn last_arguments(&self) -> Option<String> {
            self.calls
                .lock()
                .unwrap()
                .last()
                .map(|call| call.arguments.clone())
        }
    }

    #[async_trait]
    impl CommandExecutor for MockCommandExecutor {
        fn program(&self) -> &str {
            &self.program
        }

        async fn execute(
            &self,
            arguments: &str,
            working_directory: Option<&Path>,
        ) -> InvocationResult {
            self.calls.lock().unwrap().push(RecordedCall {
                arguments: arguments.to_string(),
                working_directory: working_directory.map(Path::to_path_buf),
            });

            let command = if arguments.is_empty() {
                self.program.clone()
            } else {
                format!("{} {}", self.program, arguments)
            };
            let cwd = working_directory
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("/mock"));

            match self.behavior.clone() {
                MockBehavior::Exit(code) => InvocationResult::completed(
                    command,
                    cwd,
                    code,
                    arguments,
                    "",
                    Duration::from_millis(1),
                ),
                MockBehavior::LaunchFailure(msg) => {
                    InvocationResult::launch_failed(command, cwd, msg, Duration::from_millis(1))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::*;
    use super::*;

    #[tokio::test]
    async fn test_is_available_true_on_zero_exit() {
        let executor = MockCommandExecutor::new_success();

        assert!(executor.is_available().await);
        assert_eq!(executor.last_arguments().as_deref(), Some(VERSION_ARGUMENT));
        assert_eq!(executor.calls()[0].working_directory, None);
    }

    #[tokio::test]
    async fn test_is_available_false_on_non_zero_exit() {
        let executor = MockCommandExecutor::new_exit(2);
        assert!(!executor.is_available().await);
    }

    #[tokio::test]
    async fn test_is_available_false_on_launch_failure() {
        let executor = MockCommandExecutor::new_launch_failure("program not found");
        assert!(!executor.is_available().await);
    }
}
