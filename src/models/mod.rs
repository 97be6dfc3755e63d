pub mod log_line;
pub mod record;
pub mod word;

pub use log_line::{LineKind, LogLine};
pub use record::EventRecord;
