pub mod form;
pub mod list;
pub mod register;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use rollcall::{Config, FileStore, LocalSequence, Registrar, StudentRecord, Submission};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
struct Registered<'a> {
    record: &'a StudentRecord,
    line: String,
    stored: bool,
    store_error: Option<String>,
}

/// Loads the config file and applies the `--store` override
pub fn load_config(path: &Path, store: Option<PathBuf>) -> Result<Config> {
    let mut config = Config::load(path).context("Failed to load configuration")?;
    if let Some(store) = store {
        config.store.path = store;
    }
    Ok(config)
}

/// One form session: a fresh sequence and the configured record file
pub fn open_registrar(config: &Config) -> Registrar<LocalSequence, FileStore> {
    Registrar::new(LocalSequence::new(), FileStore::new(&config.store.path))
        .with_policy(config.policy.to_policy())
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Shows a submission outcome. Returns whether a record was issued.
///
/// Records go to `out` so they can be piped; errors and warnings go to `err`.
pub fn report(
    submission: &Submission,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    match submission {
        Submission::Rejected(errors) => {
            if json {
                let body = JsonOut {
                    ok: false,
                    data: errors.messages(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                writeln!(err, "{}", "Registration failed:".red().bold())?;
                for message in errors.messages() {
                    writeln!(err, "  {} {}", "✗".red(), message)?;
                }
            }
            Ok(false)
        }
        Submission::Registered { record, persisted } => {
            if json {
                let body = JsonOut {
                    ok: true,
                    data: Registered {
                        record,
                        line: record.line(),
                        stored: persisted.is_ok(),
                        store_error: persisted.as_ref().err().map(ToString::to_string),
                    },
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                writeln!(out, "{}", record.line())?;
            }

            if let Err(e) = persisted {
                writeln!(err, "  {} Record was not saved: {}", "⚠".yellow(), e)?;
            }
            Ok(true)
        }
    }
}
