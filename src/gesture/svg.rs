//! SVG path data and standalone animated documents.

use crate::gesture::Gesture;
use std::fmt::Write;
use std::time::Duration;

/// Element id of the breath curve.
pub const BREATH_PATH_ID: &str = "breathPath";
/// Element id of the paper sheet.
pub const PAPER_PATH_ID: &str = "paperPath";

/// Paper sheet geometry (viewBox units).
pub const PAPER_LEFT: f64 = 20.0;
pub const PAPER_RIGHT: f64 = 120.0;
pub const PAPER_TOP: f64 = 10.0;
pub const PAPER_BOTTOM: f64 = 110.0;

/// `M x0 y0 Q cx cy x1 y1`
pub fn quad_path(start: (f64, f64), control: (f64, f64), end: (f64, f64)) -> String {
    format!(
        "M {:.2} {:.2} Q {:.2} {:.2} {:.2} {:.2}",
        start.0, start.1, control.0, control.1, end.0, end.1
    )
}

/// Paper sheet whose left edge is pulled inward by `inward` at mid-height.
pub fn paper_path(inward: f64) -> String {
    let mid_y = (PAPER_TOP + PAPER_BOTTOM) / 2.0;
    // The control point sits at twice the apex displacement.
    let edge = quad_path(
        (PAPER_LEFT, PAPER_TOP),
        (PAPER_LEFT + 2.0 * inward, mid_y),
        (PAPER_LEFT, PAPER_BOTTOM),
    );
    format!(
        "{edge} L {PAPER_RIGHT:.2} {PAPER_BOTTOM:.2} L {PAPER_RIGHT:.2} {PAPER_TOP:.2} Z"
    )
}

fn view_box(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::Breath => "0 0 200 100",
        Gesture::Flutter => "0 0 140 120",
    }
}

fn path_id(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::Breath => BREATH_PATH_ID,
        Gesture::Flutter => PAPER_PATH_ID,
    }
}

/// Standalone SVG replaying `frames` once, `frame_step` apart.
/// The path rests on the last frame (the idle path) afterwards.
pub fn animated_document(gesture: Gesture, frames: &[String], frame_step: Duration) -> String {
    let first = frames.first().map(String::as_str).unwrap_or_default();
    let dur = frame_step.as_secs_f64() * frames.len() as f64;

    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">"#,
        view_box(gesture)
    );
    let _ = writeln!(
        doc,
        r#"  <path id="{}" d="{first}" fill="none" stroke="currentColor" stroke-width="2">"#,
        path_id(gesture)
    );
    if frames.len() > 1 {
        let _ = writeln!(
            doc,
            r#"    <animate attributeName="d" dur="{dur:.3}s" fill="freeze" calcMode="discrete" values="{}"/>"#,
            frames.join(";")
        );
    }
    doc.push_str("  </path>\n</svg>\n");
    doc
}
