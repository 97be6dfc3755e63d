pub mod client;
pub mod console;
pub mod export;
pub mod format;
pub mod render;
