use crate::cli::commands::{open_console, paint_stage, play_live, print_pane};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead};

/// Handle the `interactive` subcommand.
///
/// Every non-empty stdin line is one word press. `quit`, `exit` or EOF end
/// the session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Interactive { animate } = cmd {
        let mut console = open_console(cfg)?;
        let colored = cfg.color;

        if !console.refresh() {
            warning("Could not fetch the device log.");
        }
        print_pane(console.pane(), colored)?;
        info("Type a word and press Enter (quit to leave).");

        for line in io::stdin().lock().lines() {
            let line = line?;
            let word = line.trim();

            if word.is_empty() {
                continue;
            }
            if word == "quit" || word == "exit" {
                break;
            }

            let outcome = console.press(word, true, |pane, stage| {
                paint_stage(pane, stage, colored)
            });
            if !outcome.refreshed {
                warning("Log refresh failed: showing the previous log.");
            }

            if *animate && let Some(gesture) = cfg.gesture_for(word) {
                play_live(gesture, cfg);
            }
        }
    }

    Ok(())
}
