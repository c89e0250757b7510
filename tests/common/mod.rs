use bottl::{Console, Result};
use std::collections::VecDeque;

/// Scripted stand-in for the terminal: hands out canned input lines and
/// records everything the app shows (prompts included).
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn print_line(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}
