use crate::config::CheckerConfig;
use crate::core::{FareSource, TimeSlot};
use crate::utils::error::{CheckerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const TIME_SLOTS_POINTER: &str = "/pageProps/outboundTimeSlots";

/// Fare lookups against the Snap search endpoint.
pub struct HttpFareSource {
    config: CheckerConfig,
    client: Client,
}

impl HttpFareSource {
    pub fn new(config: CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { config, client })
    }
}

/// Pulls the slot list out of a search response body. A body without the
/// slot list (or with `null` there) has no slots.
pub fn parse_time_slots(body: &str) -> Result<Vec<TimeSlot>> {
    let json_data: serde_json::Value = serde_json::from_str(body)?;

    match json_data.pointer(TIME_SLOTS_POINTER) {
        None | Some(serde_json::Value::Null) => {
            tracing::debug!("Response has no {}", TIME_SLOTS_POINTER);
            Ok(Vec::new())
        }
        Some(slots) => Ok(Vec::<TimeSlot>::deserialize(slots)?),
    }
}

#[async_trait]
impl FareSource for HttpFareSource {
    async fn fetch_time_slots(&self, destination_code: &str) -> Result<Vec<TimeSlot>> {
        let url = self.config.search_url(destination_code)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(CheckerError::HttpStatusError {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        parse_time_slots(&body)
    }
}
