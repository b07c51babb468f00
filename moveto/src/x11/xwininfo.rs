use moveto_types::Rect;

/// Geometries of the children listed by `xwininfo -tree -root -children`.
///
/// Child lines end with the relative geometry followed by the absolute
/// offset, e.g. `0x1200004 "wmdock": ("wmdock" "DockApp")  64x64+1856+0  +1856+0`.
pub fn parse_children(output: &str) -> Vec<Rect> {
    output
        .lines()
        .filter_map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let geometry = tokens.len().checked_sub(2).map(|i| tokens[i])?;
            Rect::from_x_geometry(geometry)
        })
        .collect()
}

/// Value of the `Relative upper-left Y:` line of `xwininfo -id`.
pub fn parse_relative_y(output: &str) -> Option<i32> {
    output.lines().find_map(|line| {
        line.trim()
            .strip_prefix("Relative upper-left Y:")
            .and_then(|value| value.trim().parse().ok())
    })
}
