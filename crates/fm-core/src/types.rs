use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The `'<pattern>' in {{variable}}` part of an `if`/`elif` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub pattern: String,
    pub variable: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LineKind {
    Blank,
    Comment,
    Prompt { text: String },
    If { condition: Condition },
    Elif { condition: Condition },
    Else,
    Endif,
    /// A `!` line that matches none of the known directives.
    UnknownDirective { text: String },
    /// Neither a prompt, a directive, nor a comment.
    Unrecognized { text: String },
}

impl LineKind {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Blank | Self::Comment)
    }

    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::Prompt { .. })
    }

    pub fn is_directive(&self) -> bool {
        matches!(
            self,
            Self::If { .. }
                | Self::Elif { .. }
                | Self::Else
                | Self::Endif
                | Self::UnknownDirective { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Comment => "comment",
            Self::Prompt { .. } => "prompt",
            Self::If { .. } => "`! if`",
            Self::Elif { .. } => "`! elif`",
            Self::Else => "`! else`",
            Self::Endif => "`! endif`",
            Self::UnknownDirective { .. } => "unknown directive",
            Self::Unrecognized { .. } => "unrecognized line",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptLine {
    /// 1-based line number in the raw script text.
    pub number: usize,
    pub kind: LineKind,
}

/// A script that passed structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameProgram {
    pub lines: Vec<ScriptLine>,
}

impl FrameProgram {
    pub fn prompt_count(&self) -> usize {
        self.lines.iter().filter(|line| line.kind.is_prompt()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub prompt: String,
    pub response: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    pub exchanges: Vec<Exchange>,
}

impl Transcript {
    pub fn push(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.exchanges.push(Exchange {
            prompt: prompt.into(),
            response: response.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn prompts(&self) -> Vec<&str> {
        self.exchanges
            .iter()
            .map(|exchange| exchange.prompt.as_str())
            .collect()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for exchange in &self.exchanges {
            write!(f, ">{}\n>>{}\n", exchange.prompt, exchange.response)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub transcript: Transcript,
    pub variables: BTreeMap<String, String>,
}
