use std::fmt::Display;

use fm_core::FrameError;
use fm_tool::FmToolError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub(crate) struct CliError {
    pub(crate) code: String,
    pub(crate) message: String,
}

impl CliError {
    pub(crate) fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<FrameError> for CliError {
    fn from(error: FrameError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

impl From<FmToolError> for CliError {
    fn from(error: FmToolError) -> Self {
        match error {
            FmToolError::Frame(error) => error.into(),
            FmToolError::ReadFile { .. } => map_error("CLI_SOURCE_READ", error),
            FmToolError::ParseDocument { .. } => map_error("CLI_DOCUMENT_INVALID", error),
            FmToolError::ParseCase { .. } | FmToolError::InvalidSchemaVersion { .. } => {
                map_error("CLI_CASE_INVALID", error)
            }
            FmToolError::SourceEmpty { .. } => map_error("CLI_SOURCE_EMPTY", error),
            other => map_error("CLI_CASE_FAILED", other),
        }
    }
}

fn map_error(code: &'static str, error: impl Display) -> CliError {
    CliError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: CliError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!("ERROR_MSG_JSON:{}", json_string(&error.message));
    1
}

pub(crate) fn json_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}

pub(crate) fn map_cli_responses_read(error: std::io::Error) -> CliError {
    map_error("CLI_RESPONSES_READ", error)
}

pub(crate) fn map_cli_responses_invalid(error: serde_json::Error) -> CliError {
    map_error("CLI_RESPONSES_INVALID", error)
}

pub(crate) fn map_cli_var_invalid(raw: &str) -> CliError {
    CliError::new(
        "CLI_VAR_INVALID",
        format!("Expected KEY=VALUE with KEY made of letters, digits or '_', got \"{}\".", raw),
    )
}
