//! How long a holiday break lasts once it is snapped to the adjacent weekend.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

const HOURS_IN_A_DAY: f64 = 24.0;

/// Days to move the start and the end of a window away from the holiday itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOffsets {
    pub start: i64,
    pub end: i64,
}

/// Offsets per weekday, indexed by `Weekday::num_days_from_monday`.
///
/// A Monday holiday reaches back into the weekend just passed, Friday and
/// Saturday reach into the coming one. Midweek holidays stand alone.
pub const WEEKDAY_OFFSETS: [(Weekday, WindowOffsets); 7] = [
    (Weekday::Mon, WindowOffsets { start: -2, end: 1 }),
    (Weekday::Tue, WindowOffsets { start: 0, end: 1 }),
    (Weekday::Wed, WindowOffsets { start: 0, end: 1 }),
    (Weekday::Thu, WindowOffsets { start: 0, end: 1 }),
    (Weekday::Fri, WindowOffsets { start: 0, end: 3 }),
    (Weekday::Sat, WindowOffsets { start: 0, end: 3 }),
    (Weekday::Sun, WindowOffsets { start: -1, end: 2 }),
];

/// Look up the offsets for a weekday
pub fn offsets_for(weekday: Weekday) -> WindowOffsets {
    WEEKDAY_OFFSETS[weekday.num_days_from_monday() as usize].1
}

/// The contiguous break a holiday is part of
#[derive(Debug, Clone, PartialEq)]
pub struct HolidayWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub length_days: f64,
}

impl HolidayWindow {
    /// Compute the window around `date` from its weekday, `None` when the
    /// window would leave the representable calendar
    pub fn for_date(date: NaiveDate) -> Option<HolidayWindow> {
        let offsets = offsets_for(date.weekday());
        let start = date.checked_add_signed(Duration::days(offsets.start))?;
        let end = date.checked_add_signed(Duration::days(offsets.end))?;
        Some(HolidayWindow::between(start, end))
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> HolidayWindow {
        let length_days = (end - start).num_hours() as f64 / HOURS_IN_A_DAY;
        HolidayWindow {
            start,
            end,
            length_days,
        }
    }

    /// `From 1 January to 2 January`
    pub fn range_display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HolidayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From {} {} to {} {}",
            self.start.day(),
            self.start.format("%B"),
            self.end.day(),
            self.end.format("%B")
        )
    }
}
