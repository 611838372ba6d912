use fm_core::{FrameError, LineKind};
use tracing::debug;

use super::FrameEngine;

impl FrameEngine<'_> {
    /// Runs the prompts of the segment that starts at the cursor, then leaves
    /// the block.
    pub(super) fn take_branch(&mut self) -> Result<(), FrameError> {
        let opened_at = self.lines[self.cursor].number;
        debug!(line = opened_at, "branch taken");
        self.block_resolved = true;
        self.cursor += 1;

        loop {
            let text = match self.lines.get(self.cursor).map(|line| &line.kind) {
                Some(LineKind::Prompt { text }) => text.clone(),
                _ => break,
            };
            self.execute_prompt(&text)?;
            self.cursor += 1;
        }

        self.skip_past_endif();
        Ok(())
    }

    /// Moves to the next `elif`/`else`/`endif` of the current block.
    pub(super) fn skip_to_next_directive(&mut self) {
        self.cursor += 1;
        while self
            .lines
            .get(self.cursor)
            .is_some_and(|line| !line.kind.is_directive())
        {
            self.cursor += 1;
        }
    }

    /// Moves to the line after the block's `endif`.
    pub(super) fn skip_past_endif(&mut self) {
        while let Some(line) = self.lines.get(self.cursor) {
            self.cursor += 1;
            if line.kind == LineKind::Endif {
                self.block_resolved = false;
                break;
            }
        }
    }
}
