use crate::core::format::TimePolicyKind;
use crate::export::ExportFormat;
use crate::gesture::Gesture;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for wordlink
/// CLI front-end to send words to the device and follow its event log
#[derive(Parser)]
#[command(
    name = "wordlink",
    version = env!("CARGO_PKG_VERSION"),
    about = "Send word triggers to the device, follow its event log and render the breath/flutter gestures",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.wordlink/wordlink.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the device base URL
    #[arg(global = true, long = "base", value_name = "URL")]
    pub base: Option<String>,

    /// Override how device timestamps are interpreted
    #[arg(global = true, long = "time-policy", value_enum)]
    pub time_policy: Option<TimePolicyKind>,

    /// Display offset for `--time-policy fixed` (e.g. +09:00)
    #[arg(global = true, long = "offset", allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Disable ANSI colours
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Verbose diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Send one word to the device, then show the refreshed log
    Send {
        /// Word to send (hyphens are stripped on the wire, e.g. how-are-you)
        word: String,

        /// Do not re-fetch the log after sending
        #[arg(long = "no-refresh")]
        no_refresh: bool,

        /// Play the gesture bound to this word after the log refresh
        #[arg(long = "animate")]
        animate: bool,
    },

    /// Fetch and print the device log
    Log {
        /// Print every line instead of the configured view height
        #[arg(long = "all")]
        all: bool,
    },

    /// Export the device log to a file
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Render a gesture animation
    ///
    /// Without options every frame's SVG path data is printed, one per line,
    /// as fast as possible.
    Animate {
        /// Gesture to render
        #[arg(value_enum)]
        gesture: Gesture,

        /// Frames per second (default from config)
        #[arg(long)]
        fps: Option<u32>,

        /// Pace frames in real time
        #[arg(long)]
        realtime: bool,

        /// Write an animated SVG document instead of printing frames
        #[arg(long, value_name = "FILE")]
        svg: Option<String>,

        /// Overwrite the SVG file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Read words from stdin, one per line, and send each of them
    Interactive {
        /// Play the gesture bound to each word
        #[arg(long = "animate")]
        animate: bool,
    },
}
