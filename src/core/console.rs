//! Console wiring: what happens when a word is pressed.

use crate::core::client::DeviceClient;
use crate::core::format::TimePolicy;
use crate::core::render::LogPane;
use std::thread;
use std::time::Duration;

/// Moment at which the pane is handed back to the caller for painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStage {
    /// The pending line was just appended
    Pending,
    /// The authoritative log replaced the pane (or the fetch failed)
    Refreshed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressOutcome {
    pub sent: bool,
    pub refreshed: bool,
}

pub struct Console<C: DeviceClient> {
    client: C,
    pane: LogPane,
    policy: TimePolicy,
    refresh_delay: Duration,
}

impl<C: DeviceClient> Console<C> {
    pub fn new(client: C, pane: LogPane, policy: TimePolicy, refresh_delay: Duration) -> Self {
        Self {
            client,
            pane,
            policy,
            refresh_delay,
        }
    }

    pub fn pane(&self) -> &LogPane {
        &self.pane
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Re-fetch the device log. On failure the pane keeps its content.
    pub fn refresh(&mut self) -> bool {
        match self.client.fetch_log() {
            Ok(records) => {
                let shown = self.pane.replace(&records, &self.policy);
                log::debug!("log refreshed: {shown}/{} records shown", records.len());
                true
            }
            Err(e) => {
                log::error!("log fetch error: {e}");
                false
            }
        }
    }

    /// Pending line, trigger, fixed delay, refresh.
    ///
    /// The delay is a best-effort heuristic: the device may not have
    /// processed the word yet when the log is fetched again.
    pub fn press<F>(&mut self, raw_word: &str, refresh: bool, mut paint: F) -> PressOutcome
    where
        F: FnMut(&LogPane, PaintStage),
    {
        self.pane.append_pending(raw_word);
        paint(&self.pane, PaintStage::Pending);

        let sent = match self.client.send_word(raw_word) {
            Ok(()) => true,
            Err(e) => {
                log::error!("send error ({raw_word}): {e}");
                false
            }
        };

        if !refresh {
            return PressOutcome {
                sent,
                refreshed: false,
            };
        }

        if !self.refresh_delay.is_zero() {
            thread::sleep(self.refresh_delay);
        }

        let refreshed = self.refresh();
        paint(&self.pane, PaintStage::Refreshed);

        PressOutcome { sent, refreshed }
    }
}
