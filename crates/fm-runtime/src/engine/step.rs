use fm_core::{FrameError, LineKind};
use tracing::debug;

use super::FrameEngine;

impl FrameEngine<'_> {
    pub(super) fn step(&mut self) -> Result<(), FrameError> {
        let line = self.lines[self.cursor].clone();
        match line.kind {
            LineKind::Prompt { text } => {
                self.execute_prompt(&text)?;
                self.cursor += 1;
            }
            LineKind::If { condition } => {
                self.block_resolved = false;
                if self.condition_holds(&condition, line.number)? {
                    self.take_branch()?;
                } else {
                    self.skip_to_next_directive();
                }
            }
            LineKind::Elif { condition } => {
                if !self.block_resolved && self.condition_holds(&condition, line.number)? {
                    self.take_branch()?;
                } else {
                    self.skip_to_next_directive();
                }
            }
            LineKind::Else => {
                if self.block_resolved {
                    self.skip_past_endif();
                } else {
                    self.take_branch()?;
                }
            }
            LineKind::Endif => {
                self.block_resolved = false;
                self.cursor += 1;
            }
            LineKind::Blank | LineKind::Comment => {
                self.cursor += 1;
            }
            LineKind::UnknownDirective { text } | LineKind::Unrecognized { text } => {
                debug!(line = line.number, "refusing to execute unvalidated line");
                return Err(FrameError::invalid(
                    line.number,
                    format!("line cannot be executed: \"{}\"", text),
                ));
            }
        }
        Ok(())
    }
}
