use anyhow::{Context, Result};
use colored::Colorize;
use rollcall::{Config, FileStore, RecordStore};
use std::process::ExitCode;

use super::JsonOut;

pub fn execute(config: &Config, json: bool) -> Result<ExitCode> {
    let store = FileStore::new(&config.store.path);
    let lines = store.read_all().context("Failed to read registrations")?;

    if json {
        let body = JsonOut {
            ok: true,
            data: &lines,
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else if lines.is_empty() {
        println!(
            "{} {}",
            "No registrations in".yellow(),
            store.path().display()
        );
    } else {
        for line in &lines {
            println!("{}", line);
        }
    }

    Ok(ExitCode::SUCCESS)
}
