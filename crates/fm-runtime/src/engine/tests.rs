use super::*;
use crate::model::{FirstWordModel, ScriptedModel};
use fm_compiler::compile_script;

fn vars(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

fn run_with(
    source: &str,
    model: &mut dyn ModelCall,
    variables: BTreeMap<String, String>,
) -> Result<ExecutionResult, FrameError> {
    let program = compile_script(source).expect("compile should pass");
    FrameEngine::new(FrameEngineOptions {
        program,
        model_call: Some(model),
        variables,
    })?
    .run()
}

fn run_scripted(source: &str, responses: &[&str]) -> (ExecutionResult, ScriptedModel) {
    let mut model = ScriptedModel::new(responses.iter().copied());
    let result = run_with(source, &mut model, BTreeMap::new()).expect("run should pass");
    (result, model)
}

const BRANCHING: &str = "> Tell a joke\n! if 'Knock' in {{1}}\n> Who's there?\n! elif 'Dog' in {{1}}\n> Dog joke\n! else\n> Great job!\n! endif\n> Wrap up {{2}}";

#[test]
fn prompts_run_in_order_and_bind_numbered_variables() {
    let (result, _) = run_scripted("> A\n> B {{1}}\n> C {{2}}", &["x", "y", "z"]);
    assert_eq!(result.transcript.prompts(), vec!["A", "B x", "C y"]);
    assert_eq!(result.variables["1"], "x");
    assert_eq!(result.variables["2"], "y");
    assert_eq!(result.variables["3"], "z");
    assert_eq!(result.transcript.to_string(), ">A\n>>x\n>B x\n>>y\n>C y\n>>z\n");
}

#[test]
fn if_branch_taken_skips_elif_and_else() {
    let (result, model) = run_scripted(BRANCHING, &["Knock knock", "Orange", "done"]);
    assert_eq!(
        result.transcript.prompts(),
        vec!["Tell a joke", "Who's there?", "Wrap up Orange"]
    );
    assert_eq!(model.received().len(), 3);
}

#[test]
fn elif_branch_taken_when_if_fails() {
    let (result, _) = run_scripted(BRANCHING, &["Dog walks in", "ha", "done"]);
    assert_eq!(
        result.transcript.prompts(),
        vec!["Tell a joke", "Dog joke", "Wrap up ha"]
    );
}

#[test]
fn else_branch_taken_when_no_condition_holds() {
    let (result, _) = run_scripted(BRANCHING, &["Cat", "thanks", "done"]);
    assert_eq!(
        result.transcript.prompts(),
        vec!["Tell a joke", "Great job!", "Wrap up thanks"]
    );
}

#[test]
fn only_first_true_segment_runs_even_if_later_ones_match() {
    let source = "> Start\n! if 'a' in {{1}}\n> A\n! elif 'ab' in {{1}}\n> AB\n! else\n> Other\n! endif";
    let (result, model) = run_scripted(source, &["abc", "first"]);
    assert_eq!(result.transcript.prompts(), vec!["Start", "A"]);
    assert_eq!(model.remaining(), 0);
    assert!(model.received().iter().all(|prompt| prompt != "AB"));
}

#[test]
fn block_without_matching_segment_runs_nothing() {
    let source = "> Start\n! if 'x' in {{1}}\n> X\n! elif 'y' in {{1}}\n> Y\n! endif\n> End";
    let (result, _) = run_scripted(source, &["zzz", "end"]);
    assert_eq!(result.transcript.prompts(), vec!["Start", "End"]);
    assert_eq!(result.variables["2"], "end");
}

#[test]
fn conditions_use_regex_search_semantics() {
    let source = "> Start\n! if 'wor(st|se)' in {{1}}\n> Bad\n! else\n> Good\n! endif";
    let (result, _) = run_scripted(source, &["the worse film", "ok"]);
    assert_eq!(result.transcript.prompts(), vec!["Start", "Bad"]);

    let source = "> Start\n! if '^hi$' in {{1}}\n> Exact\n! else\n> Partial\n! endif";
    let (result, _) = run_scripted(source, &["oh hi there", "ok"]);
    assert_eq!(result.transcript.prompts(), vec!["Start", "Partial"]);
}

#[test]
fn conditions_are_case_sensitive() {
    let source = "> Start\n! if 'hi' in {{1}}\n> Lower\n! else\n> Other\n! endif";
    let (result, _) = run_scripted(source, &["HI", "ok"]);
    assert_eq!(result.transcript.prompts(), vec!["Start", "Other"]);
}

#[test]
fn numbering_is_global_across_blocks() {
    let source = "> One\n! if 'go' in {{1}}\n> Two\n> Three {{2}}\n! endif\n! if 'c' in {{3}}\n> Four {{3}}\n! else\n> Never\n! endif";
    let (result, _) = run_scripted(source, &["go", "b", "c", "d"]);
    assert_eq!(
        result.transcript.prompts(),
        vec!["One", "Two", "Three b", "Four c"]
    );
    assert_eq!(result.variables["4"], "d");
}

#[test]
fn resolved_flag_resets_for_each_new_block() {
    let source = "> Start\n! if 's' in {{1}}\n> First\n! endif\n! if 'zzz' in {{1}}\n> Never\n! else\n> Second else\n! endif";
    let (result, _) = run_scripted(source, &["s", "a", "b"]);
    assert_eq!(
        result.transcript.prompts(),
        vec!["Start", "First", "Second else"]
    );
}

#[test]
fn conditions_can_read_initial_variables() {
    let mut model = FirstWordModel;
    let result = run_with(
        "! if 'worst' in {{MOOD}}\n> Roast {{TITLE}}\n! else\n> Praise {{TITLE}}\n! endif",
        &mut model,
        vars(&[("MOOD", "the worst"), ("TITLE", "Cats")]),
    )
    .expect("run should pass");
    assert_eq!(result.transcript.prompts(), vec!["Roast Cats"]);
    assert_eq!(result.variables["1"], "Roast");
    assert_eq!(result.variables["MOOD"], "the worst");
}

#[test]
fn say_hi_scenario_runs_exactly_two_prompts() {
    let source = "> Say hi\n! if 'hi' in {{1}}\n> Echo hi\n! else\n> Echo other\n! endif";
    let mut prompts = Vec::new();
    let mut model = |prompt: &str| -> Result<String, FrameError> {
        prompts.push(prompt.to_string());
        let first = prompt.split_whitespace().next().unwrap_or_default();
        Ok(prompt.replacen(first, &first.to_lowercase(), 1))
    };
    let result = run_with(source, &mut model, BTreeMap::new()).expect("run should pass");
    assert_eq!(prompts, vec!["Say hi", "Echo hi"]);
    assert_eq!(
        result.transcript.to_string(),
        ">Say hi\n>>say hi\n>Echo hi\n>>echo hi\n"
    );
}

#[test]
fn undefined_prompt_variable_aborts_execution() {
    let mut model = ScriptedModel::new(["x"]);
    let error = run_with("> A\n> B {{missing}}\n> C", &mut model, BTreeMap::new())
        .expect_err("missing variable should fail");
    assert_eq!(error, FrameError::undefined("missing"));
    assert_eq!(model.received(), ["A"]);
}

#[test]
fn undefined_condition_variable_aborts_execution() {
    let mut model = ScriptedModel::new(["x"]);
    let error = run_with(
        "> A\n! if 'x' in {{2}}\n> B\n! endif",
        &mut model,
        BTreeMap::new(),
    )
    .expect_err("condition on unset variable should fail");
    assert_eq!(error, FrameError::undefined("2"));
}

#[test]
fn skipped_segments_do_not_evaluate_conditions_or_prompts() {
    let source = "> A\n! if 'x' in {{1}}\n> B\n! elif 'y' in {{unset}}\n> C {{unset}}\n! else\n> D {{unset}}\n! endif";
    let (result, _) = run_scripted(source, &["x", "b"]);
    assert_eq!(result.transcript.prompts(), vec!["A", "B"]);
}

#[test]
fn model_call_errors_propagate() {
    let mut model = |_prompt: &str| -> Result<String, FrameError> {
        Err(FrameError::model_call("deadline exceeded"))
    };
    let error = run_with("> A\n> B", &mut model, BTreeMap::new()).expect_err("model fails");
    assert_eq!(error, FrameError::model_call("deadline exceeded"));
}

#[test]
fn missing_model_call_is_rejected_before_running() {
    let program = compile_script("> A").expect("compile should pass");
    let error = FrameEngine::new(FrameEngineOptions {
        program,
        model_call: None,
        variables: BTreeMap::new(),
    })
    .err()
    .expect("engine without model call should fail");
    assert_eq!(error, FrameError::MissingModelCall);
}

#[test]
fn separate_runs_do_not_share_environment() {
    let source = "> A {{seed}}";
    let first = run_with(source, &mut FirstWordModel, vars(&[("seed", "one")]))
        .expect("first run should pass");
    let second = run_with(source, &mut FirstWordModel, vars(&[("seed", "two")]))
        .expect("second run should pass");
    assert_eq!(first.transcript.prompts(), vec!["A one"]);
    assert_eq!(second.transcript.prompts(), vec!["A two"]);
    assert_eq!(second.variables.len(), 2);
}
