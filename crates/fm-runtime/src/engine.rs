use std::collections::{BTreeMap, HashMap};

use fm_core::{Condition, ExecutionResult, FrameError, FrameProgram, ScriptLine, Transcript};
use regex::Regex;
use tracing::{debug, info};

use crate::model::ModelCall;
use crate::substitute::substitute;

mod control_flow;
mod step;

pub struct FrameEngineOptions<'m> {
    pub program: FrameProgram,
    pub model_call: Option<&'m mut dyn ModelCall>,
    pub variables: BTreeMap<String, String>,
}

/// Executes one validated program. Each engine owns its own environment and
/// is consumed by [`FrameEngine::run`].
pub struct FrameEngine<'m> {
    lines: Vec<ScriptLine>,
    model_call: &'m mut dyn ModelCall,
    variables: BTreeMap<String, String>,
    transcript: Transcript,
    cursor: usize,
    block_resolved: bool,
    response_counter: usize,
    patterns: HashMap<String, Regex>,
}

impl<'m> FrameEngine<'m> {
    pub fn new(options: FrameEngineOptions<'m>) -> Result<Self, FrameError> {
        let model_call = options.model_call.ok_or(FrameError::MissingModelCall)?;
        Ok(Self {
            lines: options.program.lines,
            model_call,
            variables: options.variables,
            transcript: Transcript::default(),
            cursor: 0,
            block_resolved: false,
            response_counter: 0,
            patterns: HashMap::new(),
        })
    }

    pub fn run(mut self) -> Result<ExecutionResult, FrameError> {
        while self.cursor < self.lines.len() {
            self.step()?;
        }
        info!(prompts = self.response_counter, "script finished");
        Ok(ExecutionResult {
            transcript: self.transcript,
            variables: self.variables,
        })
    }

    fn execute_prompt(&mut self, template: &str) -> Result<(), FrameError> {
        let prompt = substitute(template, &self.variables)?;
        let index = self.response_counter + 1;
        info!(index, prompt = %prompt, "sending");
        let response = self.model_call.call(&prompt)?;
        info!(index, response = %response, "received");

        self.response_counter = index;
        self.variables.insert(index.to_string(), response.clone());
        self.transcript.push(prompt, response);
        Ok(())
    }

    fn condition_holds(&mut self, condition: &Condition, line: usize) -> Result<bool, FrameError> {
        if !self.patterns.contains_key(&condition.pattern) {
            let regex = Regex::new(&condition.pattern).map_err(|error| {
                FrameError::invalid(
                    line,
                    format!(
                        "condition pattern '{}' is not a valid regex: {}",
                        condition.pattern, error
                    ),
                )
            })?;
            self.patterns.insert(condition.pattern.clone(), regex);
        }

        let value = self
            .variables
            .get(&condition.variable)
            .ok_or_else(|| FrameError::undefined(&condition.variable))?;
        let holds = self.patterns[&condition.pattern].is_match(value);
        debug!(
            line,
            pattern = %condition.pattern,
            variable = %condition.variable,
            holds,
            "condition evaluated"
        );
        Ok(holds)
    }
}

#[cfg(test)]
mod tests;
