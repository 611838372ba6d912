use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRef {
    pub name: String,
    /// `\{{name}}`: a literal placeholder that must not be substituted.
    pub escaped: bool,
    /// Byte range of the whole reference, including the escaping backslash.
    pub span: Range<usize>,
}

/// Finds every `{{name}}` reference in `text`, in order of appearance.
pub fn variable_references(text: &str) -> Vec<VariableRef> {
    variable_regex()
        .captures_iter(text)
        .filter_map(|captures| {
            let full = captures.get(0)?;
            Some(VariableRef {
                name: captures[2].to_string(),
                escaped: !captures[1].is_empty(),
                span: full.range(),
            })
        })
        .collect()
}

fn variable_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\\?)\{\{([A-Za-z0-9_]+)\}\}").expect("variable regex"))
}
