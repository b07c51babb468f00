use anyhow::Result;
use moveto_types::Direction;
use std::io::Write;

use crate::config::{Settings, WmakerPrefs};
use crate::core::{classify, plan, Decorations, MainMonitor, MonitorSet, Reservations};
use crate::desktop::{CommandSink, Desktop};
use crate::effect::{place_window, Effect};
use crate::error::Error;

/// Pointer position relative to a monitor's top-left corner for `mouse-move`.
const POINTER_INSET: (i32, i32) = (15, 50);

/// Everything a cycle needs besides live display server state.
#[derive(Debug, Clone)]
pub struct CycleContext {
    pub prefs: WmakerPrefs,
    pub settings: Settings,
    pub decorations: Decorations,
}

impl CycleContext {
    fn reservations(&self) -> Reservations {
        Reservations {
            cover_dock: self.prefs.cover_dock,
            cover_miniwindows: self.prefs.cover_miniwindows,
            decoration_height: self.decorations.height,
        }
    }
}

/// Advance the active window one step towards `direction`.
///
/// Returns the effects sent to `sink`.
pub fn move_window<D, S>(
    desktop: &D,
    sink: &mut S,
    direction: Direction,
    main: &MainMonitor,
    ctx: &CycleContext,
) -> Result<Vec<Effect>>
where
    D: Desktop,
    S: CommandSink,
{
    let monitors = desktop.monitors()?;
    let window = desktop.active_window()?;
    let Some(frame) = window.corrected_frame(&ctx.decorations) else {
        let what = format!("size and position of window {:?}", window.title);
        return Err(Error::Query(what).into());
    };

    let set = MonitorSet::build(&monitors, main, &ctx.reservations(), || {
        desktop.window_geometries().unwrap_or_else(|e| {
            tracing::warn!("Cannot list windows for dock detection: {:#}", e);
            Vec::new()
        })
    });
    if set.is_empty() {
        return Err(Error::NoMonitors.into());
    }
    tracing::debug!(
        "Main monitor: {}",
        set.main().map_or("none", |l| l.name.as_str())
    );

    let current = set.index_at(frame.x).unwrap_or(0);
    let state = classify(&frame, &set, ctx.settings.maximize_tolerance);
    tracing::debug!(
        "Window {:?} at {} on monitor {} is {}",
        window.title,
        frame,
        current,
        state
    );

    let step = plan(state, direction, current, set.len())?;
    let layout = set.get(step.monitor).ok_or(Error::NoMonitors)?;
    let layout = if window.matches_any(&ctx.settings.misbehaving_windows) {
        tracing::debug!(
            "Correcting position of window {:?} to y={}",
            window.title,
            ctx.settings.misbehaving_offset
        );
        layout.with_top(ctx.settings.misbehaving_offset)
    } else {
        layout.clone()
    };

    let effects = place_window(layout.rect(step.target), step.order);
    sink.apply(&effects)?;
    Ok(effects)
}

/// Measure decorations, then advance the active window one step.
pub fn cycle<D, S>(
    desktop: &D,
    sink: &mut S,
    direction: Direction,
    main: &MainMonitor,
    prefs: WmakerPrefs,
    settings: Settings,
) -> Result<Vec<Effect>>
where
    D: Desktop,
    S: CommandSink,
{
    let ctx = CycleContext {
        prefs,
        settings,
        decorations: desktop.decorations()?,
    };
    move_window(desktop, sink, direction, main, &ctx)
}

/// Warp the pointer near the top-left corner of the monitor called `name`.
pub fn move_mouse<D, S>(desktop: &D, sink: &mut S, name: &str) -> Result<Vec<Effect>>
where
    D: Desktop,
    S: CommandSink,
{
    let monitors = desktop.monitors()?;
    let monitor = monitors
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| Error::NoSuchMonitor(name.to_string()))?;

    let effects = vec![Effect::WarpPointer {
        x: monitor.frame.x + POINTER_INSET.0,
        y: monitor.frame.y + POINTER_INSET.1,
    }];
    sink.apply(&effects)?;
    Ok(effects)
}

/// Print the detected monitors, left to right.
pub fn show_monitors<D, W>(desktop: &D, json: bool, out: &mut W) -> Result<()>
where
    D: Desktop,
    W: Write,
{
    let mut monitors = desktop.monitors()?;
    monitors.sort_by_key(|m| m.frame.x);

    if json {
        serde_json::to_writer_pretty(&mut *out, &monitors)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Available monitors:")?;
    for m in &monitors {
        writeln!(
            out,
            "{} at {}x{} with dimensions {}x{}{}",
            m.name,
            m.frame.x,
            m.frame.y,
            m.frame.width,
            m.frame.height,
            if m.primary { " (primary)" } else { "" }
        )?;
    }
    Ok(())
}

/// Turn expected no-op outcomes into success after logging them.
///
/// Failures to reach the display server are passed through.
pub fn settle<T>(result: Result<T>) -> Result<()> {
    let err = match result {
        Ok(_) => return Ok(()),
        Err(err) => err,
    };
    match err.downcast_ref::<Error>() {
        Some(e @ Error::BoundaryReached) => {
            tracing::info!("Nothing to do: {}", e);
            Ok(())
        }
        Some(e) if e.is_benign() => {
            tracing::warn!("Nothing to do: {}", e);
            Ok(())
        }
        Some(e @ Error::NoSuchMonitor(_)) => {
            tracing::error!("{}", e);
            Ok(())
        }
        _ => Err(err),
    }
}
