use std::io::{
    self,
    BufRead,
    Write,
};

use tracing::warn;

/// Blocking user dialogs the controller needs: ask for a value, confirm a
/// destructive action, show a message.
pub trait Interaction {
    /// `None` when the user cancels.
    fn ask(&mut self, prompt: &str) -> Option<String>;

    fn confirm(&mut self, prompt: &str) -> bool;

    fn notify(&mut self, message: &str);
}

/// Line-based dialogs over any reader/writer pair.
pub struct TerminalInteraction<R, W> {
    input: R,
    output: W,
}

impl TerminalInteraction<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its line terminator, `None` on EOF or read error.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!(error = %e, "failed to read terminal input");
                None
            }
        }
    }

    /// Output failures are logged and otherwise ignored.
    pub fn write(&mut self, text: &str) -> bool {
        match self.output.write_all(text.as_bytes()).and_then(|()| self.output.flush()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to write terminal output");
                false
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Interaction for TerminalInteraction<R, W> {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.write(&format!("{prompt} "));
        self.read_line()
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.write(&format!("{prompt} [y/N] "));
        self.read_line()
            .map(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn notify(&mut self, message: &str) {
        self.write(&format!("{message}\n"));
    }
}
