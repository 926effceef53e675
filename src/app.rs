use chrono::NaiveDate;
use std::io::{BufRead, Write};

use crate::config::Config;
use crate::employees::EmployeeExaminer;
use crate::error::HolidayError;
use crate::holiday::{self, decode_holidays, find_closest};
use crate::prompt::define_part;
use crate::report::Conclusion;
use crate::source::HolidaySource;

pub const HOLIDAY_PART: (u32, &str) = (1, "Holiday API");
pub const EMPLOYEES_PART: (u32, &str) = (2, "MySQL employees database");

/// Fetch, decode and search the holiday list, then size the holiday's window.
///
/// Only a network failure is returned, everything past the fetch degrades
/// to "no upcoming holiday".
pub fn check_holidays<S: HolidaySource + ?Sized>(
    source: &S,
    country_code: &str,
    year: i32,
    today: NaiveDate,
) -> Result<Conclusion, HolidayError> {
    let raw = source.fetch(country_code, year)?;
    let holidays = decode_holidays(&raw);
    let closest = find_closest(&holidays, today);
    Ok(Conclusion::from_closest(closest, today))
}

fn gate<R: BufRead, W: Write>(
    preset: Option<bool>,
    (part, title): (u32, &str),
    input: &mut R,
    output: &mut W,
) -> std::io::Result<bool> {
    match preset {
        Some(run) => Ok(run),
        None => define_part(input, output, part, title),
    }
}

/// Run both parts of the program, each behind its own gate.
///
/// A failed holiday lookup is logged and does not stop the employee part.
pub fn run<S, E, R, W>(
    config: &Config,
    source: &S,
    employees: &mut E,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()>
where
    S: HolidaySource + ?Sized,
    E: EmployeeExaminer + ?Sized,
    R: BufRead,
    W: Write,
{
    if gate(config.holiday_check, HOLIDAY_PART, input, output)? {
        let today = config.today.unwrap_or_else(holiday::today);
        match check_holidays(source, &config.country_code, config.year, today) {
            Ok(conclusion) => writeln!(output, "{}", conclusion)?,
            Err(err) => tracing::error!(
                error = %err,
                country = %config.country_code,
                year = config.year,
                "holiday check failed"
            ),
        }
    }

    if gate(config.employee_check, EMPLOYEES_PART, input, output)? {
        employees.examine_employees();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StaticSource {
        body: Option<&'static str>,
        requests: RefCell<Vec<(String, i32)>>,
    }

    impl StaticSource {
        fn new(body: Option<&'static str>) -> StaticSource {
            StaticSource {
                body,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl HolidaySource for StaticSource {
        fn fetch(&self, country_code: &str, year: i32) -> Result<String, HolidayError> {
            self.requests
                .borrow_mut()
                .push((country_code.to_string(), year));
            match self.body {
                Some(body) => Ok(body.to_string()),
                // an unusable URL fails before any connection is attempted
                None => Err(HolidayError::Network(
                    reqwest::blocking::get("not a url").unwrap_err(),
                )),
            }
        }
    }

    #[derive(Default)]
    struct CountingEmployees {
        runs: u32,
    }

    impl EmployeeExaminer for CountingEmployees {
        fn examine_employees(&mut self) {
            self.runs += 1;
        }
    }

    const HOLIDAYS: &str = r#"[
        {"date": "2020-01-01", "name": "New Year", "countryCode": "UA"},
        {"date": "2020-01-07", "name": "Christmas", "countryCode": "UA"}
    ]"#;

    fn config(holiday_check: Option<bool>, employee_check: Option<bool>) -> Config {
        Config {
            country_code: "UA".to_string(),
            year: 2020,
            api_base_url: "http://localhost".to_string(),
            today: NaiveDate::from_ymd_opt(2020, 1, 1),
            holiday_check,
            employee_check,
            employees_command: None,
        }
    }

    fn run_with(
        config: &Config,
        source: &StaticSource,
        input: &str,
    ) -> (String, CountingEmployees) {
        let mut employees = CountingEmployees::default();
        let mut input = input.as_bytes();
        let mut output = Vec::new();
        run(config, source, &mut employees, &mut input, &mut output).unwrap();
        (String::from_utf8(output).unwrap(), employees)
    }

    #[test]
    fn test_check_holidays() {
        let source = StaticSource::new(Some(HOLIDAYS));
        let today = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        let conclusion = check_holidays(&source, "UA", 2020, today).unwrap();
        assert_eq!(
            conclusion.to_string(),
            "The closest holiday is a Christmas on 2020-01-07. It will last 1 day: From 7 January to 8 January."
        );
        assert_eq!(*source.requests.borrow(), vec![("UA".to_string(), 2020)]);
    }

    #[test]
    fn test_check_holidays_malformed_body() {
        let source = StaticSource::new(Some("<html>rate limited</html>"));
        let today = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        let conclusion = check_holidays(&source, "UA", 2020, today).unwrap();
        assert_eq!(conclusion, Conclusion::NoUpcoming { today });
    }

    #[test]
    fn test_run_preset_gates() {
        let source = StaticSource::new(Some(HOLIDAYS));
        let (output, employees) = run_with(&config(Some(true), Some(true)), &source, "");
        assert_eq!(
            output,
            "Today is a New Year on 2020-01-01. It will last 1 day: From 1 January to 2 January.\n"
        );
        assert_eq!(employees.runs, 1);
    }

    #[test]
    fn test_run_prompts() {
        let source = StaticSource::new(Some(HOLIDAYS));
        let (output, employees) = run_with(&config(None, None), &source, "n\ny\n");
        assert!(output.contains("Part 1: Holiday API. Run it? [y/n]: "));
        assert!(output.contains("Part 2: MySQL employees database. Run it? [y/n]: "));
        assert!(!output.contains("New Year"));
        assert!(source.requests.borrow().is_empty());
        assert_eq!(employees.runs, 1);
    }

    #[test]
    fn test_run_network_failure_continues() {
        let source = StaticSource::new(None);
        let (output, employees) = run_with(&config(Some(true), Some(true)), &source, "");
        assert_eq!(output, "");
        assert_eq!(source.requests.borrow().len(), 1);
        assert_eq!(employees.runs, 1);
    }

    #[test]
    fn test_run_employees_declined() {
        let source = StaticSource::new(Some(HOLIDAYS));
        let (_, employees) = run_with(&config(Some(false), Some(false)), &source, "");
        assert_eq!(employees.runs, 0);
    }
}
