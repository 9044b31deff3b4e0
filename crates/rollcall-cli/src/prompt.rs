use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Line-oriented question and answer over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
    hide_secrets: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Read secrets from the terminal with echo off instead of from `input`
    pub fn hiding_secrets(mut self, hide: bool) -> Self {
        self.hide_secrets = hide;
        self
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Asks for one line of text. `None` means the input was closed.
    pub fn line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read answer")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(answer.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks for a line that should not be shown while typed
    ///
    /// Falls back to [`Prompter::line`] unless secrets are hidden, so piped
    /// input behaves the same for every field.
    pub fn secret(&mut self, label: &str) -> Result<Option<String>> {
        if !self.hide_secrets {
            return self.line(label);
        }

        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let answer = match rpassword::read_password() {
            Ok(answer) => answer,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(err) => return Err(err).context("Failed to read answer"),
        };
        // The typed newline was not echoed
        writeln!(self.output)?;

        Ok(Some(answer))
    }

    /// Asks until the answer parses or is left blank
    ///
    /// Outer `None`: input closed. Inner `None`: nothing selected.
    pub fn select<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<Option<Option<T>>> {
        loop {
            let Some(answer) = self.line(label)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(None));
            }
            match parse(answer) {
                Ok(value) => return Ok(Some(Some(value))),
                Err(reason) => writeln!(self.output, "  {}", reason)?,
            }
        }
    }

    /// Yes/no question; anything but `y` or `yes` is a no
    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        let answer = self.line(&format!("{} [y/N]", label))?;
        Ok(matches!(
            answer.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
            Some("y") | Some("yes")
        ))
    }
}
