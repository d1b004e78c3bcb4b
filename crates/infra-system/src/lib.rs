// Aspire Infrastructure - System Adapters
// Implements: CommandExecutor

pub mod subprocess_executor;

pub use subprocess_executor::{resolve_working_directory, SubprocessExecutor, KILL_GRACE_PERIOD};
