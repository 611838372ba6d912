use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Script is invalid{}: {reason}", line_suffix(.line))]
    InvalidScript { line: Option<usize>, reason: String },
    #[error("Variable \"{name}\" has no value in the variable environment.")]
    UndefinedVariable { name: String },
    #[error("No model call function was supplied.")]
    MissingModelCall,
    #[error("Model call failed: {message}")]
    ModelCall { message: String },
}

impl FrameError {
    pub fn invalid(line: usize, reason: impl Into<String>) -> Self {
        Self::InvalidScript {
            line: Some(line),
            reason: reason.into(),
        }
    }

    pub fn undefined(name: impl Into<String>) -> Self {
        Self::UndefinedVariable { name: name.into() }
    }

    pub fn model_call(message: impl Into<String>) -> Self {
        Self::ModelCall {
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidScript { .. } => "SCRIPT_INVALID",
            Self::UndefinedVariable { .. } => "VARIABLE_UNDEFINED",
            Self::MissingModelCall => "MODEL_CALL_MISSING",
            Self::ModelCall { .. } => "MODEL_CALL_FAILED",
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" at line {}", line),
        None => String::new(),
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn invalid_script_message_includes_line_when_known() {
        let error = FrameError::invalid(3, "stray `! endif`");
        assert_eq!(
            error.to_string(),
            "Script is invalid at line 3: stray `! endif`"
        );

        let error = FrameError::InvalidScript {
            line: None,
            reason: "script has no lines".to_string(),
        };
        assert_eq!(error.to_string(), "Script is invalid: script has no lines");
    }

    #[test]
    fn codes_are_stable_per_variant() {
        assert_eq!(FrameError::invalid(1, "x").code(), "SCRIPT_INVALID");
        assert_eq!(FrameError::undefined("y").code(), "VARIABLE_UNDEFINED");
        assert_eq!(FrameError::MissingModelCall.code(), "MODEL_CALL_MISSING");
        assert_eq!(FrameError::model_call("boom").code(), "MODEL_CALL_FAILED");
    }

    #[test]
    fn undefined_variable_names_the_variable() {
        let error = FrameError::undefined("MOVIE");
        assert!(error.to_string().contains("\"MOVIE\""));
    }
}
