//! Line-based prompts for the interactive menu.
//!
//! Every reader re-asks until it gets something usable. End of input is reported as
//! an `UnexpectedEof` I/O error so the menu can stop instead of spinning.

use rollbook::error::{RollbookError, Result};
use rollbook::model::MAX_MARK;
use std::io::{BufRead, ErrorKind, Write};

pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `prompt` and returns the next line without its line ending.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RollbookError::Io(ErrorKind::UnexpectedEof.into()));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i32> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse() {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "Invalid number. Try again.")?,
            }
        }
    }

    /// Like [`Prompter::read_int`], but only accepts `0..=limit`.
    pub fn read_count(&mut self, prompt: &str, limit: i32) -> Result<usize> {
        loop {
            let n = self.read_int(prompt)?;
            if (0..=limit).contains(&n) {
                return Ok(n as usize);
            }
            writeln!(self.output, "Enter a number between 0 and {}.", limit)?;
        }
    }

    pub fn read_mark(&mut self, prompt: &str) -> Result<i32> {
        loop {
            let line = self.read_line(prompt)?;
            match line.trim().parse::<i32>() {
                Ok(m) if (0..=MAX_MARK).contains(&m) => return Ok(m),
                Ok(_) => writeln!(
                    self.output,
                    "Marks must be between 0 and {}. Try again.",
                    MAX_MARK
                )?,
                Err(_) => writeln!(
                    self.output,
                    "Invalid input. Enter a number between 0 and {}.",
                    MAX_MARK
                )?,
            }
        }
    }

    pub fn read_marks(&mut self, count: usize) -> Result<Vec<i32>> {
        (1..=count)
            .map(|i| self.read_mark(&format!("Mark for subject {} (0-{}): ", i, MAX_MARK)))
            .collect()
    }

    pub fn pause(&mut self) -> Result<()> {
        self.read_line("Press Enter to continue...")?;
        Ok(())
    }
}

pub fn is_end_of_input(error: &RollbookError) -> bool {
    matches!(error, RollbookError::Io(e) if e.kind() == ErrorKind::UnexpectedEof)
}
