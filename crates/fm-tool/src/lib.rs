mod case;
mod runner;
mod source;

pub use case::{TestCase, TESTCASE_SCHEMA_V1};
pub use runner::{assert_case, assert_case_for_source, run_case, run_document_tests, RunReport};
pub use source::{collect_script_paths, read_document, read_script, read_test_case};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FmToolError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse testcase {path}: {source}")]
    ParseCase {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to parse script document {path}: {source}")]
    ParseDocument {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid testcase schema version \"{found}\", expected \"{expected}\".")]
    InvalidSchemaVersion { expected: String, found: String },
    #[error("No .frame/.frame.json files under {path}.")]
    SourceEmpty { path: PathBuf },
    #[error("Script error: {0}")]
    Frame(#[from] fm_core::FrameError),
    #[error("Expected error {expected}, but the script ran to completion.")]
    ExpectedErrorMissing { expected: String },
    #[error("Expected error {expected}, got {actual}.")]
    ErrorMismatch { expected: String, actual: String },
    #[error("Unused responses: used {used} of {total}.")]
    UnusedResponses { used: usize, total: usize },
    #[error("Expected exchange count {expected}, actual {actual}. observed={observed}")]
    ExchangeCountMismatch {
        expected: usize,
        actual: usize,
        observed: String,
    },
    #[error("Exchange mismatch at index {index}. expected={expected} actual={actual}")]
    ExchangeMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
    #[error("Failed to serialize exchange for diff: {0}")]
    ExchangeSerialize(serde_json::Error),
}
