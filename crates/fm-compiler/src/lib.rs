use fm_core::{Condition, FrameError, FrameProgram, LineKind, ScriptLine};
use fm_parser::significant_lines;
use regex::Regex;
use tracing::debug;

/// Conditional blocks cannot be opened inside another block.
pub const MAX_BLOCK_DEPTH: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    If,
    Elif,
    Else,
}

#[derive(Debug, Clone, Copy)]
struct OpenBlock {
    state: BlockState,
    opened_at: usize,
}

pub fn is_valid(source: &str) -> bool {
    compile_script(source).is_ok()
}

pub fn validate(source: &str) -> Result<(), FrameError> {
    compile_script(source).map(|_| ())
}

/// Strips comments, classifies every line and checks block structure.
pub fn compile_script(source: &str) -> Result<FrameProgram, FrameError> {
    let lines = significant_lines(source);
    if lines.is_empty() {
        return Err(FrameError::InvalidScript {
            line: None,
            reason: "script contains no prompt or directive lines".to_string(),
        });
    }

    let mut stack: Vec<OpenBlock> = Vec::new();
    for line in &lines {
        check_line(line, &mut stack)?;
    }

    if let Some(open) = stack.last() {
        return Err(FrameError::invalid(
            open.opened_at,
            "`! if` is never closed by `! endif`",
        ));
    }

    debug!(lines = lines.len(), "script compiled");
    Ok(FrameProgram { lines })
}

fn check_line(line: &ScriptLine, stack: &mut Vec<OpenBlock>) -> Result<(), FrameError> {
    match &line.kind {
        LineKind::Blank | LineKind::Comment | LineKind::Prompt { .. } => Ok(()),
        LineKind::If { condition } => {
            check_condition(line.number, condition)?;
            if stack.len() >= MAX_BLOCK_DEPTH {
                let outer = stack.last().map(|open| open.opened_at).unwrap_or_default();
                return Err(FrameError::invalid(
                    line.number,
                    format!("`! if` cannot be nested inside the block opened at line {}", outer),
                ));
            }
            stack.push(OpenBlock {
                state: BlockState::If,
                opened_at: line.number,
            });
            Ok(())
        }
        LineKind::Elif { condition } => {
            check_condition(line.number, condition)?;
            advance_block(line, stack, BlockState::Elif)
        }
        LineKind::Else => advance_block(line, stack, BlockState::Else),
        LineKind::Endif => match stack.pop() {
            Some(_) => Ok(()),
            None => Err(FrameError::invalid(
                line.number,
                "`! endif` without an open `! if`",
            )),
        },
        LineKind::UnknownDirective { text } => Err(FrameError::invalid(
            line.number,
            format!("unknown directive \"{}\"", text),
        )),
        LineKind::Unrecognized { text } => Err(FrameError::invalid(
            line.number,
            format!("line is neither a prompt nor a directive: \"{}\"", text),
        )),
    }
}

fn advance_block(
    line: &ScriptLine,
    stack: &mut [OpenBlock],
    next: BlockState,
) -> Result<(), FrameError> {
    match stack.last_mut() {
        Some(top) if matches!(top.state, BlockState::If | BlockState::Elif) => {
            top.state = next;
            Ok(())
        }
        Some(_) => Err(FrameError::invalid(
            line.number,
            format!("{} after `! else` in the same block", line.kind.name()),
        )),
        None => Err(FrameError::invalid(
            line.number,
            format!("{} without an open `! if`", line.kind.name()),
        )),
    }
}

fn check_condition(line: usize, condition: &Condition) -> Result<(), FrameError> {
    Regex::new(&condition.pattern).map(|_| ()).map_err(|error| {
        FrameError::invalid(
            line,
            format!(
                "condition pattern '{}' is not a valid regex: {}",
                condition.pattern, error
            ),
        )
    })
}
