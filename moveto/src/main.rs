mod config;
mod core;
mod desktop;
mod effect;
mod error;
mod runner;
mod x11;

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use moveto_types::Direction;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{Settings, WmakerPrefs};
use crate::core::MainMonitor;
use crate::x11::{X11Desktop, XdotoolSink};

#[derive(FromArgs)]
/// Move windows around mimicking the Windows 7 flag+arrows behaviour.
struct Args {
    /// show debug messages
    #[argh(switch, short = 'd')]
    debug: bool,

    /// append log output to this file instead of stderr
    #[argh(option)]
    log_file: Option<PathBuf>,

    /// print the version and exit
    #[argh(switch, short = 'v')]
    version: bool,

    #[argh(subcommand)]
    command: Option<Subcommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Subcommand {
    Move(MoveArgs),
    MouseMove(MouseMoveArgs),
    ShowMonitors(ShowMonitorsArgs),
}

#[derive(FromArgs)]
/// Cycle the active window to the next placement.
#[argh(subcommand, name = "move")]
struct MoveArgs {
    /// left or right
    #[argh(positional)]
    direction: Direction,

    /// name of the monitor treated as the main one (hosting the dock)
    #[argh(option, short = 'm')]
    monitor: Option<String>,

    /// dock is on the right edge of the rightmost monitor
    #[argh(switch, short = 'r')]
    dock_right: bool,

    /// dock is on the left edge of the leftmost monitor
    #[argh(switch, short = 'l')]
    dock_left: bool,
}

#[derive(FromArgs)]
/// Move the mouse pointer to the top-left corner of a monitor.
#[argh(subcommand, name = "mouse-move")]
struct MouseMoveArgs {
    /// name of the monitor
    #[argh(option, short = 'm')]
    monitor: String,
}

#[derive(FromArgs)]
/// Print the available monitors.
#[argh(subcommand, name = "show-monitors")]
struct ShowMonitorsArgs {
    /// print JSON instead of text
    #[argh(switch)]
    json: bool,
}

fn init_logging(debug: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if debug { "moveto=debug" } else { "moveto=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let writer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .init();
    Ok(())
}

fn main_monitor(args: &MoveArgs, settings: &Settings) -> Result<MainMonitor> {
    if args.dock_left && args.dock_right {
        bail!("--dock-left and --dock-right are mutually exclusive");
    }
    let main = match args.monitor.as_ref().or(settings.main_monitor.as_ref()) {
        Some(name) => MainMonitor::Named(name.clone()),
        None if args.dock_right => MainMonitor::Rightmost,
        None if args.dock_left => MainMonitor::Leftmost,
        None => MainMonitor::Detect,
    };
    Ok(main)
}

fn run_move(args: &MoveArgs) -> Result<()> {
    let settings = match Settings::default_path() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let prefs = match WmakerPrefs::default_path() {
        Some(path) => WmakerPrefs::load(&path)?,
        None => WmakerPrefs::default(),
    };
    let main = main_monitor(args, &settings)?;

    let desktop = X11Desktop::new();
    let mut sink = XdotoolSink;
    runner::settle(runner::cycle(
        &desktop,
        &mut sink,
        args.direction,
        &main,
        prefs,
        settings,
    ))
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    if args.version {
        println!("moveto {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    init_logging(args.debug, args.log_file.as_deref())?;

    let Some(command) = &args.command else {
        bail!("No command given, see --help");
    };
    match command {
        Subcommand::Move(move_args) => run_move(move_args),
        Subcommand::MouseMove(mouse_args) => {
            let desktop = X11Desktop::new();
            let mut sink = XdotoolSink;
            runner::settle(runner::move_mouse(&desktop, &mut sink, &mouse_args.monitor))
        }
        Subcommand::ShowMonitors(show_args) => {
            let desktop = X11Desktop::new();
            runner::show_monitors(&desktop, show_args.json, &mut io::stdout().lock())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, argh::EarlyExit> {
        Args::from_args(&["moveto"], args)
    }

    #[test]
    fn test_version_without_command() {
        let args = parse(&["--version"]).unwrap();
        assert!(args.version);
        assert!(args.command.is_none());
        assert!(parse(&["-v"]).unwrap().version);
    }

    #[test]
    fn test_move_arguments() {
        let args = parse(&["-d", "move", "right", "-m", "DP-1"]).unwrap();
        assert!(args.debug);
        match args.command {
            Some(Subcommand::Move(m)) => {
                assert_eq!(m.direction, Direction::Right);
                assert_eq!(m.monitor.as_deref(), Some("DP-1"));
            }
            _ => panic!("expected move"),
        }
        assert!(parse(&["move", "up"]).is_err());
    }

    #[test]
    fn test_main_monitor_selection() {
        let settings = Settings::default();
        let args = MoveArgs {
            direction: Direction::Left,
            monitor: None,
            dock_right: true,
            dock_left: false,
        };
        assert_eq!(main_monitor(&args, &settings).unwrap(), MainMonitor::Rightmost);

        let both = MoveArgs {
            dock_left: true,
            ..args
        };
        assert!(main_monitor(&both, &settings).is_err());
    }
}
