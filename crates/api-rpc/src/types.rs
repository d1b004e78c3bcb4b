//! RPC Request/Response Types
//!
//! Tool methods take the tool's own parameter struct (see the core catalog)
//! and return the rendered report as a string. Only request decoding and the
//! discovery listing live here.

use crate::error::{invalid_params, to_rpc_error};
use aspire_core::error::AppError;
use aspire_core::application::{ParameterSpec, ToolDescriptor};
use jsonrpsee::types::{ErrorObjectOwned, Params};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// tools.list.v1 - one catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub required: bool,
    pub description: String,
}

impl From<&ParameterSpec> for ParameterInfo {
    fn from(spec: &ParameterSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            required: spec.required,
            description: spec.description.to_string(),
        }
    }
}

impl From<ToolDescriptor> for ToolInfo {
    fn from(descriptor: ToolDescriptor) -> Self {
        Self {
            name: descriptor.name.to_string(),
            description: descriptor.description.to_string(),
            parameters: descriptor.parameters.iter().map(ParameterInfo::from).collect(),
        }
    }
}

/// Decode tool params
///
/// Accepted shapes: a named object, a single-element positional array
/// wrapping that object, or no params at all (every field defaulted).
pub fn parse_params<T: DeserializeOwned>(params: &Params<'_>) -> Result<T, ErrorObjectOwned> {
    let raw = match params.as_str().map(str::trim_start) {
        None | Some("") => return from_value(Value::Object(Default::default())),
        Some(raw) => raw,
    };

    if raw.starts_with('[') {
        let mut values: Vec<Value> = params.parse()?;
        return match values.len() {
            0 => from_value(Value::Object(Default::default())),
            1 => from_value(values.remove(0)),
            n => Err(invalid_params(format!(
                "Expected a single parameter object, got {} positional params",
                n
            ))),
        };
    }

    params.parse()
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ErrorObjectOwned> {
    serde_json::from_value(value).map_err(|e| to_rpc_error(AppError::Serialization(e)))
}
