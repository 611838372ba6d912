use std::collections::BTreeMap;

use fm_core::{ExecutionResult, FrameError, FrameProgram, ScriptDocument};
use fm_runtime::{FrameEngine, FrameEngineOptions};
use tracing::warn;

pub use fm_compiler::{is_valid, validate};
pub use fm_runtime::{substitute, FirstWordModel, ModelCall, ScriptedModel};

pub fn compile_script(source: &str) -> Result<FrameProgram, FrameError> {
    fm_compiler::compile_script(source).inspect_err(|error| {
        warn!(code = error.code(), %error, "script rejected");
    })
}

/// Validates `source`, then runs it with a fresh copy of `initial_variables`.
///
/// Validation happens before anything else, so an invalid script never
/// reaches `model_call`. On failure the partial transcript is discarded.
pub fn execute(
    source: &str,
    model_call: Option<&mut dyn ModelCall>,
    initial_variables: BTreeMap<String, String>,
) -> Result<ExecutionResult, FrameError> {
    let program = compile_script(source)?;
    FrameEngine::new(FrameEngineOptions {
        program,
        model_call,
        variables: initial_variables,
    })?
    .run()
}

pub fn execute_document(
    document: &ScriptDocument,
    model_call: Option<&mut dyn ModelCall>,
    initial_variables: BTreeMap<String, String>,
) -> Result<ExecutionResult, FrameError> {
    execute(&document.script, model_call, initial_variables)
}

pub fn is_document_valid(document: &ScriptDocument) -> bool {
    is_valid(&document.script)
}
