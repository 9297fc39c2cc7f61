//! Line-oriented interactive I/O.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Answer assumed when the reply to a yes/no question is empty or unrecognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    fn hint(&self) -> &'static str {
        match self {
            Answer::Yes => "[Y/n]",
            Answer::No => "[y/N]",
        }
    }
}

/// `Some(true)` for y/yes, `Some(false)` for n/no, ignoring case and whitespace.
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Prints `prompt` and reads one line. End of input reads as an empty line.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        Ok(line.trim().to_string())
    }

    pub fn confirm(&mut self, question: &str, default: Answer) -> io::Result<bool> {
        let answer = self.ask(&format!("{} {}: ", question, default.hint()))?;

        Ok(parse_answer(&answer).unwrap_or(default == Answer::Yes))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
pub(crate) fn scripted(input: &str) -> Console<io::Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(io::Cursor::new(input.as_bytes().to_vec()), Vec::new())
}
