//! Line classification for FrameML scripts.
//!
//! Every physical line is trimmed and then matched against a fixed table:
//!
//!   # comment
//!   > prompt text with {{variables}}
//!   ! if '<regex>' in {{var}}
//!   ! elif '<regex>' in {{var}}
//!   ! else
//!   ! endif
//!
//! Directive lines may end with a `# comment`. Prompt lines keep `#` verbatim.

use std::sync::OnceLock;

use fm_core::{Condition, LineKind, ScriptLine};
use regex::{Captures, Regex};

/// Classifies every line of `source`, comments and blanks included.
pub fn parse_lines(source: &str) -> Vec<ScriptLine> {
    source
        .lines()
        .enumerate()
        .map(|(index, raw)| ScriptLine {
            number: index + 1,
            kind: classify_line(raw),
        })
        .collect()
}

/// Classified lines with comments and blank lines removed.
pub fn significant_lines(source: &str) -> Vec<ScriptLine> {
    parse_lines(source)
        .into_iter()
        .filter(|line| !line.kind.is_ignored())
        .collect()
}

pub fn classify_line(raw: &str) -> LineKind {
    let line = raw.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with('#') {
        return LineKind::Comment;
    }

    if let Some(captures) = prompt_regex().captures(line) {
        return LineKind::Prompt {
            text: captures[1].to_string(),
        };
    }

    if !line.starts_with('!') {
        return LineKind::Unrecognized {
            text: line.to_string(),
        };
    }

    if let Some(captures) = if_regex().captures(line) {
        return LineKind::If {
            condition: condition_from(&captures),
        };
    }
    if let Some(captures) = elif_regex().captures(line) {
        return LineKind::Elif {
            condition: condition_from(&captures),
        };
    }
    if else_regex().is_match(line) {
        return LineKind::Else;
    }
    if endif_regex().is_match(line) {
        return LineKind::Endif;
    }

    LineKind::UnknownDirective {
        text: line.to_string(),
    }
}

fn condition_from(captures: &Captures<'_>) -> Condition {
    Condition {
        pattern: captures[1].to_string(),
        variable: captures[2].to_string(),
    }
}

fn prompt_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^>\s+(.+)$").expect("prompt regex"))
}

fn if_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^!\s+if\s+'(.*)'\s+in\s+\{\{([A-Za-z0-9_]+)\}\}\s*(?:#.*)?$")
            .expect("if regex")
    })
}

fn elif_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^!\s+elif\s+'(.*)'\s+in\s+\{\{([A-Za-z0-9_]+)\}\}\s*(?:#.*)?$")
            .expect("elif regex")
    })
}

fn else_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^!\s+else\s*(?:#.*)?$").expect("else regex"))
}

fn endif_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^!\s+endif\s*(?:#.*)?$").expect("endif regex"))
}
