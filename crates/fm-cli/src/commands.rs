use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use fm_api::{execute, validate, FirstWordModel, ModelCall, ScriptedModel};
use fm_core::{ExecutionResult, FrameError};
use fm_tool::{assert_case, collect_script_paths, read_script, run_document_tests};
use tracing::info;

use crate::{
    json_string, map_cli_responses_invalid, map_cli_responses_read, map_cli_var_invalid,
    CheckArgs, CliError, RunArgs, TestArgs,
};

pub(crate) fn run_check(args: CheckArgs) -> Result<i32, CliError> {
    let paths = match (args.script, args.scripts_dir) {
        (Some(script), _) => vec![PathBuf::from(script)],
        (None, Some(dir)) => collect_script_paths(Path::new(&dir))?,
        (None, None) => {
            return Err(CliError::new(
                "CLI_SOURCE_MISSING",
                "Either --script or --scripts-dir is required.",
            ))
        }
    };

    let mut invalid = 0usize;
    for path in &paths {
        let source = read_script(path)?;
        println!("SCRIPT:{}", path.display());
        match validate(&source) {
            Ok(()) => println!("VALID:true"),
            Err(error) => {
                invalid += 1;
                println!("VALID:false");
                if let FrameError::InvalidScript {
                    line: Some(line), ..
                } = &error
                {
                    println!("LINE:{}", line);
                }
                println!("ERROR_MSG_JSON:{}", json_string(&error.to_string()));
            }
        }
    }

    info!(checked = paths.len(), invalid, "check finished");
    if invalid == 0 {
        println!("RESULT:OK");
        Ok(0)
    } else {
        println!("RESULT:INVALID");
        Ok(1)
    }
}

pub(crate) fn run_script(args: RunArgs) -> Result<i32, CliError> {
    let source = read_script(Path::new(&args.script))?;
    let variables = parse_vars(&args.vars)?;

    let result = match args.responses {
        Some(path) => {
            let mut model = ScriptedModel::new(read_responses(Path::new(&path))?);
            execute_with(&source, &mut model, variables)?
        }
        None => execute_with(&source, &mut FirstWordModel, variables)?,
    };

    for exchange in &result.transcript.exchanges {
        println!("PROMPT_JSON:{}", json_string(&exchange.prompt));
        println!("RESPONSE_JSON:{}", json_string(&exchange.response));
    }
    println!(
        "TRANSCRIPT_JSON:{}",
        json_string(&result.transcript.to_string())
    );
    let variables_json = serde_json::to_string(&result.variables)
        .map_err(|error| CliError::new("CLI_OUTPUT", error.to_string()))?;
    println!("VARIABLES_JSON:{}", variables_json);
    println!("RESULT:OK");
    Ok(0)
}

pub(crate) fn run_test(args: TestArgs) -> Result<i32, CliError> {
    let script = Path::new(&args.script);
    let passed = match args.case {
        Some(case) => {
            assert_case(script, Path::new(&case))?;
            1
        }
        None => run_document_tests(script)?,
    };
    println!("CASES_PASSED:{}", passed);
    println!("RESULT:OK");
    Ok(0)
}

fn execute_with(
    source: &str,
    model: &mut dyn ModelCall,
    variables: BTreeMap<String, String>,
) -> Result<ExecutionResult, FrameError> {
    execute(source, Some(model), variables)
}

fn read_responses(path: &Path) -> Result<Vec<String>, CliError> {
    let raw = fs::read_to_string(path).map_err(map_cli_responses_read)?;
    serde_json::from_str(&raw).map_err(map_cli_responses_invalid)
}

pub(crate) fn parse_vars(raw_vars: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    let mut variables = BTreeMap::new();
    for raw in raw_vars {
        let Some((key, value)) = raw.split_once('=') else {
            return Err(map_cli_var_invalid(raw));
        };
        let key = key.trim();
        if key.is_empty() || !key.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
            return Err(map_cli_var_invalid(raw));
        }
        variables.insert(key.to_string(), value.to_string());
    }
    Ok(variables)
}
