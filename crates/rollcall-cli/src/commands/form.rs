use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use colored::Colorize;
use rollcall::{
    parse_month, Config, Department, FormInput, Gender, RecordStore, Registrar, SequenceGenerator,
};
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use super::{open_registrar, report, today};
use crate::prompt::Prompter;

/// Earliest year offered for the date of birth
const FIRST_BIRTH_YEAR: i32 = 1960;

/// Counts for one interactive session
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub registered: usize,
    pub rejected: usize,
}

pub fn execute(config: &Config, json: bool) -> Result<ExitCode> {
    let registrar = open_registrar(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let interactive = stdin.is_terminal();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock()).hiding_secrets(interactive);

    writeln!(prompter.output(), "{}", "New Student Registration Form".bold())?;
    let summary = run_session(&registrar, &mut prompter, today(), json)?;

    writeln!(
        prompter.output(),
        "{} registered, {} rejected",
        summary.registered, summary.rejected
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Repeats the form until the user stops or the input closes
///
/// The registrar, and so the sequence, lives for the whole session.
pub fn run_session<S, St, R, W>(
    registrar: &Registrar<S, St>,
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
    json: bool,
) -> Result<SessionSummary>
where
    S: SequenceGenerator,
    St: RecordStore,
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    loop {
        let Some(input) = collect_form(prompter, today)? else {
            break;
        };

        let submission = registrar.submit(&input, today);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let registered = report(&submission, json, &mut out, &mut err)?;
        prompter.output().write_all(&err)?;
        prompter.output().write_all(&out)?;

        if registered {
            summary.registered += 1;
        } else {
            summary.rejected += 1;
        }

        if !prompter.confirm("Submit another form?")? {
            break;
        }
    }

    Ok(summary)
}

/// Asks for every field once. `None` when the input closes part way.
fn collect_form<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<Option<FormInput>> {
    let Some(first_name) = prompter.line("First Name")? else {
        return Ok(None);
    };
    let Some(last_name) = prompter.line("Last Name")? else {
        return Ok(None);
    };
    let Some(email) = prompter.line("Email")? else {
        return Ok(None);
    };
    let Some(confirm_email) = prompter.line("Confirm Email")? else {
        return Ok(None);
    };
    let Some(password) = prompter.secret("Password")? else {
        return Ok(None);
    };
    let Some(confirm_password) = prompter.secret("Confirm Password")? else {
        return Ok(None);
    };

    let last_year = today.year();
    let year_label = format!("DOB year ({}-{})", FIRST_BIRTH_YEAR, last_year);
    let Some(birth_year) = prompter.select(&year_label, |s| {
        s.parse::<i32>()
            .ok()
            .filter(|year| (FIRST_BIRTH_YEAR..=last_year).contains(year))
            .ok_or_else(|| format!("Choose a year between {} and {}", FIRST_BIRTH_YEAR, last_year))
    })?
    else {
        return Ok(None);
    };

    let Some(birth_month) = prompter.select("DOB month (1-12 or name)", |s| {
        parse_month(s).ok_or_else(|| format!("'{}' is not a month", s))
    })?
    else {
        return Ok(None);
    };

    let Some(gender) = prompter.select("Gender (Male/Female)", |s| {
        s.parse::<Gender>().map_err(|e| e.to_string())
    })?
    else {
        return Ok(None);
    };

    let Some(department) = prompter.select(
        "Department (Civil/CSE/Electrical/E&C/Mechanical)",
        |s| s.parse::<Department>().map_err(|e| e.to_string()),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(FormInput {
        first_name,
        last_name,
        email,
        confirm_email,
        password,
        confirm_password,
        birth_year,
        birth_month,
        gender,
        department,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall::{LocalSequence, MemoryStore};
    use std::io::Cursor;

    const ADA: &str = "Ada\nLovelace\nada@x.com\nada@x.com\npass1234\npass1234\n2000\n5\nFemale\nCSE\n";

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn session(script: &str) -> (SessionSummary, String, MemoryStore) {
        let store = MemoryStore::new();
        let registrar = Registrar::new(LocalSequence::new(), &store);
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());

        let summary = run_session(&registrar, &mut prompter, day(), false).unwrap();
        let shown = String::from_utf8(prompter.output().clone()).unwrap();
        drop(registrar);
        (summary, shown, store)
    }

    #[test]
    fn test_single_registration() {
        let (summary, shown, store) = session(&format!("{}n\n", ADA));

        assert_eq!(summary, SessionSummary { registered: 1, rejected: 0 });
        assert!(shown.contains("2024-00001 | Ada Lovelace | Female | CSE | 2024-06-15 | ada@x.com"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_rejection_then_retry_keeps_sequence() {
        let blank = "\n\n\n\n\n\n\n\n\n\n";
        let (summary, shown, store) = session(&format!("{}y\n{}y\n{}n\n", blank, ADA, ADA));

        assert_eq!(summary, SessionSummary { registered: 2, rejected: 1 });
        assert!(shown.contains("Name required"));
        assert!(shown.contains("Select department"));
        assert!(shown.contains("2024-00001 | Ada Lovelace"));
        assert!(shown.contains("2024-00002 | Ada Lovelace"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_out_of_range_year_is_asked_again() {
        let script = "Ada\nLovelace\nada@x.com\nada@x.com\npass1234\npass1234\n1950\n2000\n5\nFemale\nCSE\nn\n";
        let (summary, shown, _) = session(script);

        assert!(shown.contains("Choose a year between 1960 and 2024"));
        assert_eq!(summary.registered, 1);
    }

    #[test]
    fn test_piped_passwords_are_read_like_other_fields() {
        let script = "Ada\nLovelace\nada@x.com\nada@x.com\npass1234\npass9999\n2000\n5\nFemale\nCSE\nn\n";
        let (summary, shown, store) = session(script);

        assert!(shown.contains("Password: Confirm Password: "));
        assert!(shown.contains("Invalid or mismatched password"));
        assert_eq!(summary, SessionSummary { registered: 0, rejected: 1 });
        assert!(store.is_empty());
    }

    #[test]
    fn test_closed_input_ends_session() {
        let (summary, _, store) = session("Ada\nLovelace\n");

        assert_eq!(summary, SessionSummary::default());
        assert!(store.is_empty());
    }
}
