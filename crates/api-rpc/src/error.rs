//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use aspire_core::error::AppError;
use jsonrpsee::types::ErrorObjectOwned;

/// RPC Error Codes
pub mod code {
    /// JSON-RPC 2.0 reserved code for malformed params
    pub const INVALID_PARAMS: i32 = -32602;
    pub const VALIDATION_ERROR: i32 = 4000;
}

/// Params that could not be decoded into the tool's parameter struct
pub fn invalid_params(msg: impl Into<String>) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(code::INVALID_PARAMS, msg.into(), None::<()>)
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Domain(e) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
        AppError::Serialization(e) => invalid_params(e.to_string()),
    }
}
