use serde::Serialize;

/// Prefix of the transient line shown while a word is on its way.
pub const PENDING_PREFIX: &str = "[sending…] ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    /// Formatted from the authoritative device log
    Confirmed,
    /// Local feedback, dropped on the next full replace
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLine {
    pub text: String,
    pub kind: LineKind,
}

impl LogLine {
    pub fn confirmed(text: String) -> Self {
        Self {
            text,
            kind: LineKind::Confirmed,
        }
    }

    pub fn pending(word: &str) -> Self {
        Self {
            text: format!("{PENDING_PREFIX}{word}"),
            kind: LineKind::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.kind == LineKind::Pending
    }
}
