use chrono::NaiveDate;
use std::fmt;

use crate::holiday::{ClosestHoliday, HolidayRecord};
use crate::window::HolidayWindow;

/// Outcome of a holiday check, rendered as a single sentence
#[derive(Debug, Clone, PartialEq)]
pub enum Conclusion {
    Found {
        holiday: HolidayRecord,
        window: HolidayWindow,
        is_today: bool,
    },
    NoUpcoming {
        today: NaiveDate,
    },
}

impl Conclusion {
    pub fn from_closest(closest: Option<ClosestHoliday>, today: NaiveDate) -> Conclusion {
        match closest {
            Some(closest) => Conclusion::Found {
                window: closest.window,
                holiday: closest.holiday,
                is_today: closest.is_today,
            },
            None => Conclusion::NoUpcoming { today },
        }
    }
}

/// `day` for exactly one day, `days` for anything else
pub fn day_unit(length_days: f64) -> &'static str {
    if length_days == 1.0 {
        "day"
    } else {
        "days"
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conclusion::Found {
                holiday,
                window,
                is_today,
            } => {
                let prefix = if *is_today {
                    "Today"
                } else {
                    "The closest holiday"
                };
                write!(
                    f,
                    "{} is a {} on {}. It will last {} {}: {}.",
                    prefix,
                    holiday.name,
                    holiday.date,
                    window.length_days,
                    day_unit(window.length_days),
                    window
                )
            }
            Conclusion::NoUpcoming { today } => write!(
                f,
                "There is no upcoming holiday on or after {}.",
                today.format(crate::holiday::DATE_FORMAT)
            ),
        }
    }
}
