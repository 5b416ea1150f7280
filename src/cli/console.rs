use std::{
    fmt,
    io::{self, BufRead, Write},
};

use colored::Colorize;

use crate::errors::{CliError, TrackerError};

/// Message categories used by the console output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Line-oriented terminal I/O. Generic over reader and writer so whole sessions
/// can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    prefs: OutputPreferences,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(prefs: OutputPreferences) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), prefs)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, prefs: OutputPreferences) -> Self {
        Self {
            input,
            output,
            prefs,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `label: ` and reads one line without its line ending.
    /// A closed input stream surfaces as [`CliError::EndOfInput`].
    pub fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            writeln!(self.output)?;
            return Err(CliError::EndOfInput);
        }
        Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Re-prompts until `parse` accepts the input, reporting each rejection.
    pub fn prompt_parsed<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, TrackerError>,
    ) -> Result<T, CliError> {
        loop {
            let input = self.prompt(label)?;
            match parse(&input) {
                Ok(value) => return Ok(value),
                Err(err) => self.error(err)?,
            }
        }
    }

    /// Like [`Console::prompt_parsed`], but empty input keeps `current`.
    pub fn prompt_or_keep<T: Clone>(
        &mut self,
        label: &str,
        current: &T,
        shown: impl fmt::Display,
        parse: impl Fn(&str) -> Result<T, TrackerError>,
    ) -> Result<T, CliError> {
        let label = format!("{label} [{shown}]");
        loop {
            let input = self.prompt(&label)?;
            if input.trim().is_empty() {
                return Ok(current.clone());
            }
            match parse(&input) {
                Ok(value) => return Ok(value),
                Err(err) => self.error(err)?,
            }
        }
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        let answer = self.prompt(&format!("{question} (yes/no)"))?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    pub fn line(&mut self, text: impl fmt::Display) -> Result<(), CliError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> Result<(), CliError> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn info(&mut self, message: impl fmt::Display) -> Result<(), CliError> {
        self.print(MessageKind::Info, message)
    }

    pub fn success(&mut self, message: impl fmt::Display) -> Result<(), CliError> {
        self.print(MessageKind::Success, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> Result<(), CliError> {
        self.print(MessageKind::Warning, message)
    }

    pub fn error(&mut self, message: impl fmt::Display) -> Result<(), CliError> {
        self.print(MessageKind::Error, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> Result<(), CliError> {
        self.print(MessageKind::Section, title)
    }

    fn print(&mut self, kind: MessageKind, message: impl fmt::Display) -> Result<(), CliError> {
        let formatted = self.apply_style(kind, message);
        match kind {
            MessageKind::Section => writeln!(self.output, "\n{formatted}")?,
            _ => writeln!(self.output, "{formatted}")?,
        }
        Ok(())
    }

    fn apply_style(&self, kind: MessageKind, message: impl fmt::Display) -> String {
        let text = message.to_string();
        let base = match kind {
            MessageKind::Section => format!("=== {} ===", text.trim()),
            MessageKind::Info => text,
            MessageKind::Success => format!("SUCCESS: {text}"),
            MessageKind::Warning => format!("WARNING: {text}"),
            MessageKind::Error => format!("ERROR: {text}"),
        };

        if !self.prefs.color {
            return base;
        }

        match kind {
            MessageKind::Success => base.bright_green().to_string(),
            MessageKind::Warning => base.bright_yellow().to_string(),
            MessageKind::Error => base.bright_red().to_string(),
            MessageKind::Section => base.bold().to_string(),
            MessageKind::Info => base,
        }
    }
}
