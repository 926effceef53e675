use thiserror::Error;

/// Failures of the holiday lookup.
///
/// None of them is fatal to the program: decode and date failures degrade to
/// "nothing to match", a network failure only ends the holiday part.
#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("failed to fetch holidays: {0}")]
    Network(#[from] reqwest::Error),
    #[error("failed to decode holidays: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid holiday date {date:?}, expected YYYY-MM-DD")]
    DateParse {
        date: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}
