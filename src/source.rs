//! Where the raw holiday list comes from.

use reqwest::blocking::Client;

use crate::error::HolidayError;

pub const DEFAULT_API_BASE_URL: &str = "https://date.nager.at";

/// Anything able to hand out the raw JSON holiday list for a country and year
pub trait HolidaySource {
    fn fetch(&self, country_code: &str, year: i32) -> Result<String, HolidayError>;
}

/// The public Nager.Date REST API
pub struct NagerDateSource {
    client: Client,
    base_url: String,
}

impl NagerDateSource {
    pub fn new(base_url: &str) -> Result<NagerDateSource, HolidayError> {
        let client = Client::builder()
            .user_agent(concat!("closest-holiday/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(NagerDateSource {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, country_code: &str, year: i32) -> String {
        format!(
            "{}/api/v2/publicholidays/{}/{}",
            self.base_url, year, country_code
        )
    }
}

impl HolidaySource for NagerDateSource {
    fn fetch(&self, country_code: &str, year: i32) -> Result<String, HolidayError> {
        let url = self.endpoint(country_code, year);
        tracing::debug!(%url, "fetching holidays");
        // the body is only read once the request and the status are known good
        let body = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .text()?;
        tracing::debug!(bytes = body.len(), "received holiday list");
        Ok(body)
    }
}
