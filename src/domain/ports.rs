use crate::utils::error::Result;

/// Terminal seam for the interactive flows. The binary talks to the real
/// stdin/stdout; tests drive the flows with a scripted implementation.
pub trait Console {
    /// Shows `prompt` and reads one line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn print_line(&mut self, text: &str);
}
