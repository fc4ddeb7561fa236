//! Interactive pauses between pipeline stages.

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Decides whether the pipeline may proceed to the next stage.
pub trait Checkpoint {
    /// Ask before performing `action`. `Ok(false)` stops the run.
    fn confirm(&mut self, action: &str) -> Result<bool>;
}

/// Never pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Checkpoint for NoPause {
    fn confirm(&mut self, _action: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Waits for Enter before each stage.
///
/// End of input counts as declining.
#[derive(Debug)]
pub struct PromptPause<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptPause<R, W> {
    /// Prompt on `output`, read answers from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptPause<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Checkpoint for PromptPause<R, W> {
    fn confirm(&mut self, action: &str) -> Result<bool> {
        write!(self.output, "Hit enter to: {action} ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pause_always_proceeds() {
        assert!(NoPause.confirm("start making cuts").unwrap());
    }

    #[test]
    fn test_prompt_proceeds_on_enter() {
        let mut output = Vec::new();
        let mut pause = PromptPause::new(&b"\n"[..], &mut output);
        assert!(pause.confirm("start making cuts").unwrap());
        drop(pause);
        assert_eq!(String::from_utf8(output).unwrap(), "Hit enter to: start making cuts ");
    }

    #[test]
    fn test_prompt_declines_on_eof() {
        let mut pause = PromptPause::new(&b""[..], Vec::new());
        assert!(!pause.confirm("clean up").unwrap());
    }
}
