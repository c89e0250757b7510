use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// Real terminal: prompts go to stdout unbuffered, one line is read back.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn print_line(&mut self, text: &str) {
        println!("{}", text);
    }
}
