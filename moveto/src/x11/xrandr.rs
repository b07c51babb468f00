use moveto_types::{MonitorInfo, Rect};
use once_cell::sync::Lazy;
use regex::Regex;

static OUTPUT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+) connected (primary )?(\d+)x(\d+)\+(\d+)\+(\d+)")
        .expect("valid xrandr output regex")
});

/// Active outputs listed by `xrandr --query`.
pub fn parse_monitors(output: &str) -> Vec<MonitorInfo> {
    output
        .lines()
        .filter_map(|line| OUTPUT_RE.captures(line))
        .filter_map(|caps| {
            let num = |i: usize| caps[i].parse::<i32>().ok();
            Some(MonitorInfo {
                name: caps[1].to_string(),
                frame: Rect::new(num(5)?, num(6)?, num(3)?, num(4)?),
                primary: caps.get(2).is_some(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const XRANDR: &str = "\
Screen 0: minimum 8 x 8, current 3840 x 1080, maximum 32767 x 32767
DVI-D-0 disconnected (normal left inverted right x axis y axis)
HDMI-0 connected 1920x1080+1920+0 (normal left inverted right x axis y axis) 527mm x 296mm
   1920x1080     60.00*+  59.94    50.00
   1680x1050     59.95
DP-0 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 598mm x 336mm
   1920x1080     60.00*+
DP-1 connected (normal left inverted right x axis y axis)
   1280x1024     60.02 +
";

    #[test]
    fn test_parse_monitors() {
        let monitors = parse_monitors(XRANDR);
        assert_eq!(
            monitors,
            vec![
                MonitorInfo {
                    name: "HDMI-0".to_string(),
                    frame: Rect::new(1920, 0, 1920, 1080),
                    primary: false,
                },
                MonitorInfo {
                    name: "DP-0".to_string(),
                    frame: Rect::new(0, 0, 1920, 1080),
                    primary: true,
                },
            ]
        );
    }

    #[test]
    fn test_parse_no_monitors() {
        assert!(parse_monitors("").is_empty());
        assert!(parse_monitors("DP-1 disconnected (normal)\n").is_empty());
    }
}
