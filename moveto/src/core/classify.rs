use super::monitor_set::MonitorSet;
use moveto_types::{Placement, Rect};

/// Width slack accepted for windows maximized by the window manager itself.
pub const MAXIMIZE_TOLERANCE: i32 = 32;

/// Recognize which placement `window` currently occupies.
///
/// Halves must match exactly. A window at the origin counts as maximized when
/// its width is within `tolerance` of a monitor's usable width. Monitors are
/// tried left to right and the first hit wins.
pub fn classify(window: &Rect, monitors: &MonitorSet, tolerance: i32) -> Placement {
    for layout in monitors.iter() {
        if *window == layout.left_half() {
            return Placement::Left;
        }
        if *window == layout.right_half() {
            return Placement::Right;
        }
        if window.x == 0
            && window.y == 0
            && (layout.usable_width - tolerance..layout.usable_width + tolerance)
                .contains(&window.width)
        {
            return Placement::Maximized;
        }
    }

    Placement::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::Reservations;
    use crate::core::monitor_set::MainMonitor;
    use moveto_types::MonitorInfo;

    fn two_monitors() -> MonitorSet {
        let monitors = [
            MonitorInfo {
                name: "DP-0".to_string(),
                frame: Rect::new(0, 0, 1920, 1080),
                primary: true,
            },
            MonitorInfo {
                name: "DP-1".to_string(),
                frame: Rect::new(1920, 0, 1920, 1080),
                primary: false,
            },
        ];
        let reserve = Reservations {
            cover_dock: false,
            cover_miniwindows: true,
            decoration_height: 29,
        };
        MonitorSet::build(&monitors, &MainMonitor::Rightmost, &reserve, Vec::new)
    }

    #[test]
    fn test_halves_round_trip() {
        let set = two_monitors();
        for layout in set.iter() {
            assert_eq!(
                classify(&layout.left_half(), &set, MAXIMIZE_TOLERANCE),
                Placement::Left
            );
            assert_eq!(
                classify(&layout.right_half(), &set, MAXIMIZE_TOLERANCE),
                Placement::Right
            );
        }
    }

    #[test]
    fn test_maximized_within_tolerance() {
        let set = two_monitors();
        // left monitor usable width is 1918
        for width in [1886, 1900, 1918, 1920, 1949] {
            let window = Rect::new(0, 0, width, 700);
            assert_eq!(
                classify(&window, &set, MAXIMIZE_TOLERANCE),
                Placement::Maximized,
                "width {}",
                width
            );
        }
        assert_eq!(
            classify(&Rect::new(0, 0, 1950, 1051), &set, MAXIMIZE_TOLERANCE),
            Placement::None
        );
    }

    #[test]
    fn test_maximized_requires_origin() {
        let set = two_monitors();
        let window = Rect::new(0, 5, 1918, 1051);
        assert_eq!(classify(&window, &set, MAXIMIZE_TOLERANCE), Placement::None);
    }

    #[test]
    fn test_maximized_matches_any_monitor_width() {
        let set = two_monitors();
        // only the origin is checked, the main monitor's width matches too
        let window = Rect::new(0, 0, 1854, 1051);
        assert_eq!(
            classify(&window, &set, MAXIMIZE_TOLERANCE),
            Placement::Maximized
        );
    }

    #[test]
    fn test_near_miss_half_is_none() {
        let set = two_monitors();
        let mut window = set.get(1).unwrap().left_half();
        window.width += 1;
        assert_eq!(classify(&window, &set, MAXIMIZE_TOLERANCE), Placement::None);
    }

    #[test]
    fn test_empty_set() {
        let set = MonitorSet::default();
        assert_eq!(
            classify(&Rect::new(0, 0, 100, 100), &set, MAXIMIZE_TOLERANCE),
            Placement::None
        );
    }
}
