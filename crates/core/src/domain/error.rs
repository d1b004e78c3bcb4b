// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required parameter '{parameter}' for tool {tool}")]
    MissingParameter {
        tool: &'static str,
        parameter: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DomainError>;
