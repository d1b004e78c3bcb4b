// Tool Service - validate a catalog tool, then run it through the executor

use crate::application::catalog::ToolCommand;
use crate::domain::InvocationResult;
use crate::error::Result;
use crate::port::CommandExecutor;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tool Service
///
/// Parameter validation failures come back as `Err`; everything that reaches
/// the executor comes back as `Ok(InvocationResult)`, whatever the child did.
pub struct ToolService {
    executor: Arc<dyn CommandExecutor>,
}

impl ToolService {
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Program name behind every tool
    pub fn program(&self) -> &str {
        self.executor.program()
    }

    /// Validate `tool`, render its arguments and execute them
    pub async fn invoke<T: ToolCommand>(&self, tool: &T) -> Result<InvocationResult> {
        let arguments = tool.arguments().map_err(|e| {
            debug!(tool = T::NAME, error = %e, "Tool parameters rejected");
            e
        })?;

        let result = self
            .executor
            .execute(&arguments, tool.working_directory())
            .await;

        if result.is_success() {
            info!(
                tool = T::NAME,
                exit_code = result.exit_code(),
                duration_ms = %format!("{:.2}", result.execution_time_ms()),
                "Tool invocation succeeded"
            );
        } else {
            warn!(
                tool = T::NAME,
                exit_code = result.exit_code(),
                termination = result.termination().as_str(),
                duration_ms = %format!("{:.2}", result.execution_time_ms()),
                "Tool invocation failed"
            );
        }

        Ok(result)
    }

    /// Availability probe (never fails)
    pub async fn is_available(&self) -> bool {
        self.executor.is_available().await
    }
}
