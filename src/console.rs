#![cfg(feature = "std")]

//! Console input helpers: prompt, parse, and retry until the input meets the
//! caller's condition. Retries are iterative, so a hostile user cannot grow
//! the stack.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Blocking line-oriented console, generic over the underlying streams so
/// tests can drive it with scripted input.
pub struct ConsoleIo<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleIo<BufReader<Stdin>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prompt for an integer until one parses and satisfies `accept`. Each
    /// rejected line gets a diagnostic and a fresh prompt; there is no
    /// attempt limit. Errors only on stream failure or end of input.
    pub fn get_validated_int(
        &mut self,
        prompt: &str,
        accept: impl Fn(i64) -> bool,
    ) -> io::Result<i64> {
        loop {
            let line = self.read_line(prompt)?;
            let value = match line.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    writeln!(self.writer, "Input '{}' is not a whole number.", line)?;
                    continue;
                }
            };
            if !accept(value) {
                writeln!(self.writer, "Input '{}' is not an acceptable value.", value)?;
                continue;
            }
            return Ok(value);
        }
    }

    /// Prompt until the user answers `y` or `n` (case-insensitive).
    pub fn get_yes_or_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let line = self.read_line(prompt)?;
            match line.to_ascii_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.writer, "Enter 'y' or 'n'.")?,
            }
        }
    }

    /// Write one line of output.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    /// Consume the console and return its streams, e.g. to inspect captured
    /// output in tests.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed while awaiting a response",
            ));
        }
        Ok(line.trim().to_string())
    }
}
