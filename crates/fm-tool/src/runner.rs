use std::collections::BTreeMap;
use std::path::Path;

use fm_api::{execute, ScriptedModel};
use fm_core::{Exchange, FrameError};
use tracing::info;

use crate::source::{read_document, read_test_case};
use crate::{FmToolError, TestCase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub exchanges: Vec<Exchange>,
    pub variables: BTreeMap<String, String>,
    pub consumed_responses: usize,
}

pub fn run_case(source: &str, case: &TestCase) -> Result<RunReport, FmToolError> {
    let mut model = ScriptedModel::new(case.responses.iter().cloned());
    let result = execute(source, Some(&mut model), case.variables.clone())?;
    Ok(RunReport {
        exchanges: result.transcript.exchanges,
        variables: result.variables,
        consumed_responses: case.responses.len() - model.remaining(),
    })
}

pub fn assert_case(script_path: &Path, case_path: &Path) -> Result<(), FmToolError> {
    let document = read_document(script_path)?;
    let case = read_test_case(case_path)?;
    assert_case_for_source(&document.script, &case)
}

pub fn assert_case_for_source(source: &str, case: &TestCase) -> Result<(), FmToolError> {
    let outcome = run_case(source, case);
    if let Some(expected) = &case.expected_error {
        return match outcome {
            Ok(_) => Err(FmToolError::ExpectedErrorMissing {
                expected: expected.clone(),
            }),
            Err(FmToolError::Frame(error)) => check_error_code(expected, &error),
            Err(other) => Err(other),
        };
    }

    let report = outcome?;
    if report.exchanges.len() != case.expected_exchanges.len() {
        let observed = serde_json::to_string_pretty(&report.exchanges)
            .map_err(FmToolError::ExchangeSerialize)?;
        return Err(FmToolError::ExchangeCountMismatch {
            expected: case.expected_exchanges.len(),
            actual: report.exchanges.len(),
            observed,
        });
    }

    for (index, (expected, actual)) in case
        .expected_exchanges
        .iter()
        .zip(report.exchanges.iter())
        .enumerate()
    {
        if expected != actual {
            let expected =
                serde_json::to_string(expected).map_err(FmToolError::ExchangeSerialize)?;
            let actual = serde_json::to_string(actual).map_err(FmToolError::ExchangeSerialize)?;
            return Err(FmToolError::ExchangeMismatch {
                index,
                expected,
                actual,
            });
        }
    }

    if report.consumed_responses != case.responses.len() {
        return Err(FmToolError::UnusedResponses {
            used: report.consumed_responses,
            total: case.responses.len(),
        });
    }

    Ok(())
}

/// Runs every test descriptor of a script document. Each descriptor is a
/// testcase path relative to the document.
pub fn run_document_tests(document_path: &Path) -> Result<usize, FmToolError> {
    let document = read_document(document_path)?;
    let base_dir = document_path.parent().unwrap_or_else(|| Path::new(""));

    for test in &document.tests {
        let case_path = base_dir.join(test);
        let case = read_test_case(&case_path)?;
        assert_case_for_source(&document.script, &case)?;
        info!(case = %case_path.display(), "case passed");
    }

    Ok(document.tests.len())
}

fn check_error_code(expected: &str, error: &FrameError) -> Result<(), FmToolError> {
    if error.code() == expected {
        Ok(())
    } else {
        Err(FmToolError::ErrorMismatch {
            expected: expected.to_string(),
            actual: error.code().to_string(),
        })
    }
}
