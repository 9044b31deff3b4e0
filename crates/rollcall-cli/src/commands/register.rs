use anyhow::Result;
use chrono::Month;
use clap::Args;
use rollcall::{parse_month, Config, Department, FormInput, Gender};
use std::io;
use std::process::ExitCode;

use super::{open_registrar, report, today};

/// Form fields for a single submission
///
/// Text fields default to empty and selections to "nothing picked", so a
/// partial command line is reported the same way an incomplete form is.
#[derive(Args, Debug)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub confirm_email: String,

    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value = "")]
    pub confirm_password: String,

    #[arg(long, allow_negative_numbers = true)]
    pub birth_year: Option<i32>,

    /// 1-12 or a month name
    #[arg(long, value_parser = month_arg)]
    pub birth_month: Option<Month>,

    /// Male or Female
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Civil, CSE, Electrical, E&C or Mechanical
    #[arg(long)]
    pub department: Option<Department>,
}

impl From<FormArgs> for FormInput {
    fn from(args: FormArgs) -> Self {
        FormInput {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            confirm_email: args.confirm_email,
            password: args.password,
            confirm_password: args.confirm_password,
            birth_year: args.birth_year,
            birth_month: args.birth_month,
            gender: args.gender,
            department: args.department,
        }
    }
}

fn month_arg(s: &str) -> Result<Month, String> {
    parse_month(s).ok_or_else(|| format!("'{}' is not a month (use 1-12 or a month name)", s))
}

pub fn execute(config: &Config, args: FormArgs, json: bool) -> Result<ExitCode> {
    let registrar = open_registrar(config);
    let submission = registrar.submit(&args.into(), today());

    let registered = report(&submission, json, &mut io::stdout(), &mut io::stderr())?;
    Ok(if registered {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
