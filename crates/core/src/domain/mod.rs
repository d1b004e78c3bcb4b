// Domain Layer - Invocation outcome model

pub mod error;
pub mod invocation;

// Re-exports
pub use error::DomainError;
pub use invocation::{
    InvocationResult, Termination, LAUNCH_FAILURE_EXIT_CODE, TIMED_OUT_EXIT_CODE,
};
