/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

use crate::gesture::Gesture;
use ansi_term::Colour;

/// Colour used for a gesture name in terminal output.
pub fn color_for_gesture(gesture: Gesture) -> Colour {
    match gesture {
        Gesture::Breath => Colour::Cyan,
        Gesture::Flutter => Colour::Purple,
    }
}

/// Paint `text` for `gesture`, or leave it plain when colours are off.
pub fn paint_gesture(gesture: Gesture, text: &str, colored: bool) -> String {
    if colored {
        color_for_gesture(gesture).bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}
