use anyhow::{anyhow, bail};
use chrono::NaiveDate;
use clap::Parser;

use crate::holiday::DATE_FORMAT;
use crate::prompt::parse_answer;
use crate::source::DEFAULT_API_BASE_URL;

/// Look up the closest public holiday, then optionally examine the employee database
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// ISO 3166-1 alpha-2 country code
    #[arg(long, env = "HOLIDAY_COUNTRY", default_value = "UA")]
    pub country: String,

    #[arg(long, env = "HOLIDAY_YEAR", default_value_t = 2020)]
    pub year: i32,

    #[arg(long, env = "HOLIDAY_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Run the holiday check without asking (yes/no)
    #[arg(long, value_parser = parse_gate)]
    pub holidays: Option<bool>,

    /// Run the employee subsystem without asking (yes/no)
    #[arg(long, value_parser = parse_gate)]
    pub employees: Option<bool>,

    /// Command line launching the employee subsystem
    #[arg(long, env = "EMPLOYEES_COMMAND")]
    pub employees_command: Option<String>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| e.to_string())
}

fn parse_gate(value: &str) -> Result<bool, String> {
    parse_answer(value).ok_or_else(|| format!("expected yes or no, got {:?}", value))
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub country_code: String,
    pub year: i32,
    pub api_base_url: String,
    pub today: Option<NaiveDate>,
    /// `None` means ask on the terminal
    pub holiday_check: Option<bool>,
    pub employee_check: Option<bool>,
    pub employees_command: Option<String>,
}

impl Config {
    /// Read `.env`, the environment and the command line
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Config::try_from(Args::parse())
    }
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> anyhow::Result<Self> {
        let country_code = args.country.trim().to_ascii_uppercase();
        if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_alphabetic()) {
            bail!("Invalid country code: {}", args.country);
        }

        let api_base_url = args.api_base_url.trim().to_string();
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(anyhow!("Invalid holiday API base URL: {}", api_base_url));
        }

        Ok(Config {
            country_code,
            year: args.year,
            api_base_url,
            today: args.today,
            holiday_check: args.holidays,
            employee_check: args.employees,
            employees_command: args.employees_command.filter(|c| !c.trim().is_empty()),
        })
    }
}
