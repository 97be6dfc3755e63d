pub mod animate;
pub mod config;
pub mod export;
pub mod init;
pub mod interactive;
pub mod log;
pub mod send;

use crate::config::Config;
use crate::core::client::HttpDeviceClient;
use crate::core::console::{Console, PaintStage};
use crate::core::render::LogPane;
use crate::errors::AppResult;
use crate::gesture::{Gesture, RealtimeTicks, play};
use crate::ui::messages::redraw_line;
use crate::utils::colors::{GREY, RESET, paint_gesture};
use std::io;

/// Console talking to the configured device.
pub(crate) fn open_console(cfg: &Config) -> AppResult<Console<HttpDeviceClient>> {
    let client = HttpDeviceClient::new(cfg.device_url.clone())?;
    Ok(Console::new(
        client,
        LogPane::new(cfg.log_view_lines),
        cfg.time_policy()?,
        cfg.refresh_delay(),
    ))
}

/// Print the full visible pane under a header.
pub(crate) fn print_pane(pane: &LogPane, colored: bool) -> AppResult<()> {
    println!("📜 Device log:\n");
    if pane.is_empty() {
        println!("(empty)");
        return Ok(());
    }
    pane.paint(&mut io::stdout().lock(), colored)?;
    Ok(())
}

/// Terminal painting for each stage of a word press: the pending line is
/// printed on its own, the refreshed pane in full.
pub(crate) fn paint_stage(pane: &LogPane, stage: PaintStage, colored: bool) {
    match stage {
        PaintStage::Pending => {
            if let Some(line) = pane.visible().last() {
                if colored {
                    println!("{GREY}{}{RESET}", line.text);
                } else {
                    println!("{}", line.text);
                }
            }
        }
        PaintStage::Refreshed => {
            println!();
            if let Err(e) = print_pane(pane, colored) {
                crate::ui::messages::error(format!("Failed to print the log: {e}"));
            }
        }
    }
}

/// Play `gesture` live on a single redrawn terminal line.
pub(crate) fn play_live(gesture: Gesture, cfg: &Config) -> usize {
    println!(
        "\n🎞️  Gesture: {}",
        paint_gesture(gesture, gesture.as_str(), cfg.color)
    );

    let mut animator = gesture.animator();
    let mut ticks = RealtimeTicks::from_fps(cfg.fps);
    let frames = play(animator.as_mut(), &mut ticks, |frame| redraw_line(&frame.path));

    println!();
    frames
}
