// src/export/model.rs

use crate::core::format::{TimePolicy, parse_device_time};
use crate::models::EventRecord;
use crate::models::word::display_word;
use serde::Serialize;

/// Flat row written by the CSV / JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LogExport {
    pub word: String,
    pub display_word: String,
    /// Timestamp exactly as sent by the device
    pub time: String,
    /// Timestamp rendered with the configured policy
    pub display_time: String,
}

impl LogExport {
    /// Build a row, or `None` when the record would not be shown in the pane.
    pub fn from_record(record: &EventRecord, policy: &TimePolicy) -> Option<Self> {
        let word = record.word()?;
        let raw = record.time()?;
        let parsed = parse_device_time(raw)?;

        Some(Self {
            word: word.to_string(),
            display_word: display_word(word).to_string(),
            time: raw.to_string(),
            display_time: policy.render(&parsed),
        })
    }
}
