use moveto_types::Rect;

/// Window manager offsets, measured once per process on a live window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorations {
    /// Title bar height reserved above every placement.
    pub height: i32,
    /// Subtracted from every y position xdotool reports.
    pub y_offset: i32,
}

impl Decorations {
    /// Derive both offsets from the `Relative upper-left Y` of a decorated window.
    pub fn from_relative_y(relative_y: i32) -> Self {
        Self {
            height: relative_y + 8,
            y_offset: relative_y * 2 + 1,
        }
    }
}

/// Focused window as reported by the display server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveWindow {
    pub title: String,
    /// Reported geometry, `None` when position or size could not be read.
    pub frame: Option<Rect>,
}

impl ActiveWindow {
    /// Geometry in the coordinates placements are computed in.
    pub fn corrected_frame(&self, decorations: &Decorations) -> Option<Rect> {
        self.frame.map(|frame| Rect {
            x: frame.x - 1,
            y: frame.y - decorations.y_offset,
            ..frame
        })
    }

    /// Whether the title contains one of `patterns`.
    pub fn matches_any(&self, patterns: &[String]) -> bool {
        patterns
            .iter()
            .any(|p| !p.is_empty() && self.title.contains(p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorations_from_relative_y() {
        let decorations = Decorations::from_relative_y(21);
        assert_eq!(decorations.height, 29);
        assert_eq!(decorations.y_offset, 43);
    }

    #[test]
    fn test_corrected_frame() {
        let window = ActiveWindow {
            title: "xterm".to_string(),
            frame: Some(Rect::new(960, 43, 958, 1051)),
        };
        let decorations = Decorations::from_relative_y(21);
        assert_eq!(
            window.corrected_frame(&decorations),
            Some(Rect::new(959, 0, 958, 1051))
        );
        assert_eq!(ActiveWindow::default().corrected_frame(&decorations), None);
    }

    #[test]
    fn test_matches_any() {
        let window = ActiveWindow {
            title: "report.odt - LibreOffice Writer".to_string(),
            frame: None,
        };
        let patterns = vec!["Oracle VM VirtualBox".to_string(), "LibreOffice".to_string()];
        assert!(window.matches_any(&patterns));
        assert!(!window.matches_any(&patterns[..1]));
        assert!(!window.matches_any(&[String::new()]));
    }
}
