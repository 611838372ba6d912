use std::collections::BTreeMap;

use fm_core::FrameError;
use fm_parser::variable_references;

/// Replaces every `{{name}}` in `text` with its value.
///
/// Escaped placeholders (`\{{name}}`) are copied verbatim, backslash included.
/// Substituted values are not scanned again.
pub fn substitute(text: &str, variables: &BTreeMap<String, String>) -> Result<String, FrameError> {
    let mut output = String::with_capacity(text.len());
    let mut last_index = 0usize;
    for reference in variable_references(text) {
        if reference.escaped {
            continue;
        }
        let value = variables
            .get(&reference.name)
            .ok_or_else(|| FrameError::undefined(&reference.name))?;
        output.push_str(&text[last_index..reference.span.start]);
        output.push_str(value);
        last_index = reference.span.end;
    }
    output.push_str(&text[last_index..]);
    Ok(output)
}
