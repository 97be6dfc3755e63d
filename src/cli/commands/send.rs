use crate::cli::commands::{open_console, paint_stage, play_live};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `send` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Send {
        word,
        no_refresh,
        animate,
    } = cmd
    {
        let mut console = open_console(cfg)?;
        let colored = cfg.color;

        let outcome = console.press(word, !no_refresh, |pane, stage| {
            paint_stage(pane, stage, colored)
        });

        if !outcome.sent {
            warning(format!("The device did not receive '{word}' (see diagnostics)."));
        }
        if !no_refresh && !outcome.refreshed {
            warning("Log refresh failed: showing the previous log.");
        }

        if *animate {
            match cfg.gesture_for(word) {
                Some(gesture) => {
                    play_live(gesture, cfg);
                }
                None => warning(format!("No gesture is bound to '{word}'.")),
            }
        }
    }

    Ok(())
}
