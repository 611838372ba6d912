use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Persisted form of a script: the raw source plus opaque test descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDocument {
    pub script: String,
    #[serde(default)]
    pub tests: Vec<String>,
}

impl ScriptDocument {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            tests: Vec::new(),
        }
    }

    pub fn with_tests(mut self, tests: Vec<String>) -> Self {
        self.tests = tests;
        self
    }

    pub fn add_tests(&mut self, tests: impl IntoIterator<Item = String>) {
        self.tests.extend(tests);
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::json!({
            "script": self.script,
            "tests": self.tests,
        })
    }

    pub fn from_json(value: JsonValue) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl fmt::Display for ScriptDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
