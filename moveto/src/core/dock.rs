use super::layout::ICON_SIZE;
use moveto_types::Rect;
use std::collections::{BTreeMap, BTreeSet};

/// Guess the horizontal position of a vertically arranged dock.
///
/// Dock tiles and app icons are the only `ICON_SIZE` square windows around,
/// so the x coordinate shared by the most distinct tile rows wins. Ties go to
/// the smallest x.
pub fn locate_dock(windows: &[Rect]) -> Option<i32> {
    let mut columns: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();
    for window in windows
        .iter()
        .filter(|w| w.width == ICON_SIZE && w.height == ICON_SIZE)
    {
        columns.entry(window.x).or_default().insert(window.y);
    }

    let mut winner = None;
    let mut rows = 0;
    for (x, ys) in &columns {
        if ys.len() > rows {
            rows = ys.len();
            winner = Some(*x);
        }
    }

    match winner {
        Some(x) => tracing::debug!("Predicted dock x position: {} ({} tiles)", x, rows),
        None => tracing::debug!("No dock tiles found"),
    }

    winner
}
