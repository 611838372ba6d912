use std::collections::VecDeque;

use fm_core::FrameError;

/// The text-generation collaborator: one blocking call per executed prompt.
pub trait ModelCall {
    fn call(&mut self, prompt: &str) -> Result<String, FrameError>;
}

impl<F> ModelCall for F
where
    F: FnMut(&str) -> Result<String, FrameError>,
{
    fn call(&mut self, prompt: &str) -> Result<String, FrameError> {
        self(prompt)
    }
}

/// Replays canned responses in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedModel {
    responses: VecDeque<String>,
    received: Vec<String>,
}

impl ScriptedModel {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            received: Vec::new(),
        }
    }

    pub fn received(&self) -> &[String] {
        &self.received
    }

    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl ModelCall for ScriptedModel {
    fn call(&mut self, prompt: &str) -> Result<String, FrameError> {
        self.received.push(prompt.to_string());
        self.responses.pop_front().ok_or_else(|| {
            FrameError::model_call(format!(
                "no scripted response left for prompt #{}",
                self.received.len()
            ))
        })
    }
}

/// Answers every prompt with its first word.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstWordModel;

impl ModelCall for FirstWordModel {
    fn call(&mut self, prompt: &str) -> Result<String, FrameError> {
        Ok(prompt.split_whitespace().next().unwrap_or_default().to_string())
    }
}
