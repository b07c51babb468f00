use moveto_types::Rect;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::effect::Effect;

static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*Position:\s*(-?\d+),(-?\d+)").expect("valid position regex")
});
static GEOMETRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Geometry:\s*(\d+)x(\d+)").expect("valid geometry regex"));

/// Parse `xdotool getwindowgeometry` output:
///
/// ```text
/// Window 81788943
///   Position: 960,43 (screen: 0)
///   Geometry: 958x1051
/// ```
pub fn parse_window_geometry(output: &str) -> Option<Rect> {
    let lines: Vec<&str> = output.trim().lines().collect();
    let [_, position, geometry] = lines.as_slice() else {
        return None;
    };

    let pos = POSITION_RE.captures(position)?;
    let size = GEOMETRY_RE.captures(geometry)?;
    Some(Rect::new(
        pos[1].parse().ok()?,
        pos[2].parse().ok()?,
        size[1].parse().ok()?,
        size[2].parse().ok()?,
    ))
}

/// Arguments for a single chained `xdotool` call applying `effects`.
pub fn command_args(effects: &[Effect]) -> Vec<String> {
    let mut args = Vec::new();
    if effects.iter().any(Effect::targets_window) {
        args.push("getactivewindow".to_string());
    }
    for effect in effects {
        let (cmd, a, b) = match *effect {
            Effect::MoveWindow { x, y } => ("windowmove", x, y),
            Effect::ResizeWindow { width, height } => ("windowsize", width, height),
            Effect::WarpPointer { x, y } => ("mousemove", x, y),
        };
        args.extend([cmd.to_string(), a.to_string(), b.to_string()]);
    }
    args
}
