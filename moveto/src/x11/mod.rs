mod xdotool;
mod xrandr;
mod xwininfo;

use anyhow::{bail, Context, Result};
use moveto_types::{MonitorInfo, Rect};
use std::process::{Command, Output, Stdio};

use crate::core::{ActiveWindow, Decorations};
use crate::desktop::{CommandSink, Desktop};
use crate::effect::Effect;
use crate::error::Error;

/// Talks to the X server through `xrandr`, `xdotool` and `xwininfo`.
#[derive(Debug, Default)]
pub struct X11Desktop;

impl X11Desktop {
    pub fn new() -> Self {
        Self
    }
}

fn output(program: &str, args: &[&str]) -> Result<Output> {
    tracing::trace!("Running {} {}", program, args.join(" "));
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .with_context(|| format!("Failed to run {}", program))
}

/// Stdout of a command that has to succeed.
fn stdout(program: &str, args: &[&str]) -> Result<String> {
    let out = output(program, args)?;
    if !out.status.success() {
        bail!("{} {} exited with {}", program, args.join(" "), out.status);
    }
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Stdout of a command, `None` if it reported failure.
fn stdout_if_success(program: &str, args: &[&str]) -> Result<Option<String>> {
    let out = output(program, args)?;
    if !out.status.success() {
        tracing::debug!("{} {} exited with {}", program, args.join(" "), out.status);
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&out.stdout).into_owned()))
}

impl Desktop for X11Desktop {
    fn monitors(&self) -> Result<Vec<MonitorInfo>> {
        let out = stdout("xrandr", &["--query"])?;
        let monitors = xrandr::parse_monitors(&out);
        for monitor in &monitors {
            tracing::debug!("Monitor {} at {}", monitor.name, monitor.frame);
        }
        Ok(monitors)
    }

    fn active_window(&self) -> Result<ActiveWindow> {
        let title = stdout_if_success("xdotool", &["getactivewindow", "getwindowname"])?
            .map(|name| name.trim().to_string())
            .unwrap_or_default();
        let frame = stdout_if_success("xdotool", &["getactivewindow", "getwindowgeometry"])?
            .and_then(|out| xdotool::parse_window_geometry(&out));
        tracing::debug!("Active window {:?}: {:?}", title, frame);
        Ok(ActiveWindow { title, frame })
    }

    fn window_geometries(&self) -> Result<Vec<Rect>> {
        let out = stdout("xwininfo", &["-tree", "-root", "-children"])?;
        Ok(xwininfo::parse_children(&out))
    }

    fn decorations(&self) -> Result<Decorations> {
        let Some(id) = stdout_if_success("xdotool", &["getactivewindow"])? else {
            return Err(Error::Query("active window".to_string()).into());
        };
        let relative_y = stdout_if_success("xwininfo", &["-id", id.trim()])?
            .and_then(|out| xwininfo::parse_relative_y(&out))
            .ok_or_else(|| Error::Query("decorations of the active window".to_string()))?;
        let decorations = Decorations::from_relative_y(relative_y);
        tracing::debug!(
            "Decoration height {}, y offset {}",
            decorations.height,
            decorations.y_offset
        );
        Ok(decorations)
    }
}

/// Applies effects with a single chained `xdotool` call.
#[derive(Debug, Default)]
pub struct XdotoolSink;

impl CommandSink for XdotoolSink {
    fn apply(&mut self, effects: &[Effect]) -> Result<()> {
        if effects.is_empty() {
            return Ok(());
        }
        let args = xdotool::command_args(effects);
        tracing::info!("xdotool {}", args.join(" "));
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        stdout("xdotool", &args)?;
        Ok(())
    }
}
