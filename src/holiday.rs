//! Public holiday records as served by the Nager.Date API, and the search for
//! the holiday closest to a given day.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::HolidayError;
use crate::window::HolidayWindow;

/// Layout of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One public holiday entry.
///
/// Every field defaults when missing from the payload or `null`, unknown
/// fields are ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HolidayRecord {
    /// `YYYY-MM-DD`, kept as received and parsed on demand
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub local_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fixed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub global: bool,
    /// `null`, absent or a list of region codes
    pub counties: Option<Value>,
    pub launch_year: Option<Value>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// True for exactly four digits, `-`, two digits, `-`, two digits
fn has_date_shape(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl HolidayRecord {
    pub fn new(name: &str, date: &str) -> HolidayRecord {
        HolidayRecord {
            name: name.to_string(),
            local_name: name.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    /// Parse `date` with the fixed `YYYY-MM-DD` layout, no padding, signs or
    /// short fields
    pub fn parsed_date(&self) -> Result<NaiveDate, HolidayError> {
        if !has_date_shape(&self.date) {
            return Err(HolidayError::DateParse {
                date: self.date.clone(),
                source: None,
            });
        }
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|source| {
            HolidayError::DateParse {
                date: self.date.clone(),
                source: Some(source),
            }
        })
    }
}

/// Decode a JSON array of holidays, keeping the order of the payload.
pub fn try_decode_holidays(raw: &str) -> Result<Vec<HolidayRecord>, HolidayError> {
    Ok(serde_json::from_str(raw)?)
}

/// Like [`try_decode_holidays`], but a malformed payload is logged and yields
/// no holidays at all.
pub fn decode_holidays(raw: &str) -> Vec<HolidayRecord> {
    match try_decode_holidays(raw) {
        Ok(holidays) => {
            tracing::debug!(count = holidays.len(), "decoded holidays");
            holidays
        }
        Err(err) => {
            tracing::error!(error = %err, "could not decode the holiday list");
            Vec::new()
        }
    }
}

/// The holiday found by [`find_closest`]
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestHoliday {
    pub holiday: HolidayRecord,
    pub date: NaiveDate,
    pub window: HolidayWindow,
    pub is_today: bool,
}

/// Find the first holiday falling on or after `today`.
///
/// The list is expected in ascending date order and is scanned as given, so
/// the first match wins even if a closer date comes later. Records whose date
/// does not parse, or whose window falls off the calendar, are logged and
/// skipped. Returns `None` when nothing is left in the list on or after `today`.
pub fn find_closest(holidays: &[HolidayRecord], today: NaiveDate) -> Option<ClosestHoliday> {
    for holiday in holidays {
        let date = match holiday.parsed_date() {
            Ok(date) => date,
            Err(err) => {
                tracing::warn!(name = %holiday.name, error = %err, "skipping holiday");
                continue;
            }
        };
        if date < today {
            continue;
        }
        let Some(window) = HolidayWindow::for_date(date) else {
            tracing::warn!(name = %holiday.name, %date, "holiday window out of range, skipping");
            continue;
        };
        return Some(ClosestHoliday {
            holiday: holiday.clone(),
            date,
            window,
            is_today: date == today,
        });
    }
    None
}

/// Today's date on the local calendar
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
