//! Device client: word triggers and log retrieval over HTTP.

use crate::errors::{AppError, AppResult};
use crate::models::EventRecord;
use crate::models::word::wire_word;
use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Path of the event history on the device.
pub const LOG_PATH: &str = "log";

pub trait DeviceClient {
    /// Fire-and-forget trigger. Only transport failures are errors.
    fn send_word(&self, word: &str) -> AppResult<()>;

    /// Full event history, oldest first.
    fn fetch_log(&self) -> AppResult<Vec<EventRecord>>;
}

#[derive(Clone)]
pub struct HttpDeviceClient {
    base_url: String,
    client: Client,
}

impl HttpDeviceClient {
    /// Build a client for `base_url`. Requests have no timeout.
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// `{base}/{segment}` with the segment percent-encoded.
    pub fn url(&self, segment: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|_| AppError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push(segment);

        Ok(url)
    }
}

impl DeviceClient for HttpDeviceClient {
    fn send_word(&self, word: &str) -> AppResult<()> {
        let url = self.url(&wire_word(word))?;
        let res = self.client.get(url.clone()).send()?;
        log::debug!("GET {url} -> {}", res.status());
        Ok(())
    }

    fn fetch_log(&self) -> AppResult<Vec<EventRecord>> {
        let url = self.url(LOG_PATH)?;
        let body: Value = self
            .client
            .get(url.clone())
            .send()?
            .error_for_status()?
            .json()?;
        log::debug!("GET {url} -> ok");

        EventRecord::list_from_value(&body)
            .ok_or_else(|| AppError::Decode(format!("expected a JSON array, got: {body}")))
    }
}
