//! Terminal interaction channel for the setup flow.
//!
//! The flow talks to the operator through the `Console` trait so tests can
//! script answers and capture output without a real terminal. Prompts block
//! until a line arrives; there is no timeout.

use anyhow::Result;
use std::io::{self, BufRead, Write};

pub trait Console {
    /// Print an informational line to the operator.
    fn line(&mut self, text: &str) -> Result<()>;

    /// Print `query` without a trailing newline and read one line of input.
    ///
    /// Returns the raw line; callers decide how much to trim.
    fn prompt(&mut self, query: &str) -> Result<String>;
}

/// Process stdin/stdout.
pub struct StdioConsole;

impl Console for StdioConsole {
    fn line(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }

    fn prompt(&mut self, query: &str) -> Result<String> {
        print!("{}", query);
        io::stdout().flush()?;

        let stdin = io::stdin();
        let mut answer = String::new();
        stdin.lock().read_line(&mut answer)?;

        Ok(answer)
    }
}
