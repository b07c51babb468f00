use serde::{Deserialize, Serialize};

/// Pixel rectangle used for monitors, windows and computed placements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point, rounded towards the origin.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Parse an X geometry string of the form `WxH+X+Y`.
    ///
    /// Offsets may be negative (`64x64+-10+0`, `64x64-10+0`).
    pub fn from_x_geometry(s: &str) -> Option<Self> {
        let (size, offsets) = s.split_at(s.find(['+', '-'])?);
        let (width, height) = size.split_once('x')?;
        let (x, y) = split_offsets(offsets)?;
        Some(Self {
            x,
            y,
            width: width.parse().ok()?,
            height: height.parse().ok()?,
        })
    }
}

fn split_offsets(s: &str) -> Option<(i32, i32)> {
    let body = s.strip_prefix('+').unwrap_or(s);
    let split_at = body
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '+' || c == '-')
        .map(|(i, _)| i)?;
    let (x, y) = body.split_at(split_at);
    let y = y.strip_prefix('+').unwrap_or(y);
    Some((x.parse().ok()?, y.parse().ok()?))
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Monitor as reported by the display server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorInfo {
    pub name: String,
    pub frame: Rect,
    #[serde(default)]
    pub primary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let rect = Rect::new(1920, 0, 959, 1051);
        assert_eq!(rect.center(), (1920 + 479, 525));
    }

    #[test]
    fn test_from_x_geometry() {
        assert_eq!(
            Rect::from_x_geometry("64x64+1856+0"),
            Some(Rect::new(1856, 0, 64, 64))
        );
        assert_eq!(
            Rect::from_x_geometry("64x64+-10+128"),
            Some(Rect::new(-10, 128, 64, 64))
        );
        assert_eq!(
            Rect::from_x_geometry("10x20-5-6"),
            Some(Rect::new(-5, -6, 10, 20))
        );
        assert_eq!(Rect::from_x_geometry("64x64"), None);
        assert_eq!(Rect::from_x_geometry("+1856+0"), None);
        assert_eq!(Rect::from_x_geometry("garbage"), None);
    }

    #[test]
    fn test_monitor_info_json() {
        let info = MonitorInfo {
            name: "DP-1".to_string(),
            frame: Rect::new(1920, 0, 1920, 1080),
            primary: false,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["name"], "DP-1");
        assert_eq!(json["frame"]["x"], 1920);
        assert_eq!(json["frame"]["width"], 1920);

        let parsed: MonitorInfo =
            serde_json::from_str(r#"{"name":"HDMI-1","frame":{"x":0,"y":0,"width":1280,"height":1024}}"#)
                .unwrap();
        assert!(!parsed.primary);
        assert_eq!(parsed.frame.height, 1024);
    }
}
