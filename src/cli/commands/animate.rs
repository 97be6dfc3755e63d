use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::gesture::svg::animated_document;
use crate::gesture::ticks::frame_interval;
use crate::gesture::{FixedStepTicks, RealtimeTicks, TickSource, play};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `animate` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Animate {
        gesture,
        fps,
        realtime,
        svg,
        force,
    } = cmd
    {
        let fps = fps.unwrap_or(cfg.fps).max(1);
        let mut animator = gesture.animator();
        let mut ticks: Box<dyn TickSource> = if *realtime {
            Box::new(RealtimeTicks::from_fps(fps))
        } else {
            Box::new(FixedStepTicks::from_fps(fps))
        };

        match svg {
            Some(file) => {
                let path = expand_tilde(file);
                ensure_writable(&path, *force)?;

                let mut frames = vec![animator.idle_path()];
                play(animator.as_mut(), ticks.as_mut(), |frame| {
                    frames.push(frame.path.clone())
                });

                let doc = animated_document(*gesture, &frames, frame_interval(fps));
                fs::write(&path, doc)?;

                success(format!(
                    "{} animation ({} frames) written to {}",
                    gesture.as_str(),
                    frames.len(),
                    path.display()
                ));
            }
            None => {
                let n = play(animator.as_mut(), ticks.as_mut(), |frame| {
                    println!("{}", frame.path)
                });
                log::debug!("{} animation: {n} frames at {fps} fps", gesture.as_str());
            }
        }
    }

    Ok(())
}
