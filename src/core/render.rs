//! Log renderer: the scrolling log pane.

use crate::core::format::{TimePolicy, format_line};
use crate::models::{EventRecord, LogLine};
use crate::utils::colors::{GREY, RESET};
use std::io::{self, Write};

/// In-memory model of the log pane.
///
/// The pane is always scrolled to its end after a change: `scroll_top` is the
/// index of the first visible line given `view_height` (0 = unbounded).
#[derive(Debug, Default)]
pub struct LogPane {
    lines: Vec<LogLine>,
    view_height: usize,
    scroll_top: usize,
}

impl LogPane {
    pub fn new(view_height: usize) -> Self {
        Self {
            lines: Vec::new(),
            view_height,
            scroll_top: 0,
        }
    }

    /// Replace the whole pane with the formatted `records`.
    /// Records that fail formatting are skipped; order is preserved.
    /// Returns the number of lines now shown.
    pub fn replace(&mut self, records: &[EventRecord], policy: &TimePolicy) -> usize {
        self.lines = records
            .iter()
            .map(|r| format_line(r, policy))
            .filter(|line| !line.is_empty())
            .map(LogLine::confirmed)
            .collect();

        self.scroll_to_end();
        self.lines.len()
    }

    /// Append the transient `[sending…] <word>` line.
    pub fn append_pending(&mut self, word: &str) {
        self.lines.push(LogLine::pending(word));
        self.scroll_to_end();
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_pending()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Lines inside the viewport.
    pub fn visible(&self) -> &[LogLine] {
        &self.lines[self.scroll_top..]
    }

    fn scroll_to_end(&mut self) {
        self.scroll_top = if self.view_height == 0 {
            0
        } else {
            self.lines.len().saturating_sub(self.view_height)
        };
    }

    /// Write the visible lines, one per row. Pending lines are greyed out
    /// when `colored` is set.
    pub fn paint<W: Write>(&self, out: &mut W, colored: bool) -> io::Result<()> {
        for line in self.visible() {
            if colored && line.is_pending() {
                writeln!(out, "{GREY}{}{RESET}", line.text)?;
            } else {
                writeln!(out, "{}", line.text)?;
            }
        }
        out.flush()
    }
}
