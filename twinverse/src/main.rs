mod app;
mod core;
mod error;
mod event;
mod panels;
mod platform;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use tracing_subscriber::EnvFilter;
use twinverse_ipc::{HostMessage, LayoutMode, MonitorInfo, Rect, WindowInfo};

use crate::app::{do_recompute, LayoutPolicy};
use crate::core::{Config, WindowClassifier};
use crate::platform::BridgeHost;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Twinverse - splitscreen layout daemon for gamescope windows
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Option<SubCommand>,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Start(StartCmd),
    Preview(PreviewCmd),
    Version(VersionCmd),
}

/// Run the layout daemon, talking to the host bridge over stdin/stdout
#[derive(FromArgs)]
#[argh(subcommand, name = "start")]
struct StartCmd {
    /// layout mode: fullscreen, horizontal, vertical
    #[argh(option)]
    mode: Option<LayoutMode>,
    /// resource class of the windows to manage
    #[argh(option)]
    class: Option<String>,
    /// leave Plasma panels untouched
    #[argh(switch)]
    no_panels: bool,
    /// path to config.json
    #[argh(option)]
    config: Option<PathBuf>,
}

/// Print the host requests a layout pass would send for synthetic windows
#[derive(FromArgs)]
#[argh(subcommand, name = "preview")]
struct PreviewCmd {
    /// layout mode: fullscreen, horizontal, vertical
    #[argh(option)]
    mode: LayoutMode,
    /// number of managed windows (ids start at 1)
    #[argh(option)]
    windows: u32,
    /// monitor geometry as WIDTHxHEIGHT+X+Y, repeat in host order
    #[argh(option)]
    monitor: Vec<String>,
    /// id of the active window, if any
    #[argh(option)]
    active: Option<u32>,
}

/// Show version information
#[derive(FromArgs)]
#[argh(subcommand, name = "version")]
struct VersionCmd {}

fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    match cli.command {
        None => {
            // No subcommand - show help (simulate --help)
            let args: Vec<&str> = vec!["twinverse", "--help"];
            if let Err(e) = Cli::from_args(&args[..1], &args[1..]) {
                println!("{}", e.output);
            }
            Ok(())
        }
        Some(SubCommand::Start(cmd)) => {
            init_tracing();
            let config = resolve_config(cmd)?;
            tracing::info!(
                "twinverse {} starting in {} mode",
                VERSION,
                config.mode
            );
            app::App::run(config)
        }
        Some(SubCommand::Preview(cmd)) => {
            init_tracing();
            run_preview(cmd)
        }
        Some(SubCommand::Version(_)) => {
            println!("twinverse {}", VERSION);
            Ok(())
        }
    }
}

// Logs go to stderr; stdout carries the host protocol.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cmd: StartCmd) -> Result<Config> {
    let mut config = match cmd.config.or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    if let Some(mode) = cmd.mode {
        config.mode = mode;
    }
    if let Some(class) = cmd.class {
        if class.is_empty() {
            bail!("--class must not be empty");
        }
        config.managed_class = class;
    }
    if cmd.no_panels {
        config.manage_panels = false;
    }
    Ok(config)
}

fn run_preview(cmd: PreviewCmd) -> Result<()> {
    let monitors = cmd
        .monitor
        .iter()
        .enumerate()
        .map(|(i, geometry)| -> Result<MonitorInfo> {
            let geometry = Rect::parse_geometry(geometry)
                .with_context(|| format!("Invalid monitor geometry: {}", geometry))?;
            Ok(MonitorInfo {
                name: format!("Monitor-{}", i),
                geometry,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let classifier = WindowClassifier::default();
    let windows = (1..=cmd.windows)
        .map(|id| WindowInfo {
            id,
            resource_class: classifier.managed_class().to_string(),
            output: None,
        })
        .collect();

    let mut host = BridgeHost::new(std::io::stdout());
    host.apply_message(HostMessage::Snapshot {
        windows,
        monitors,
        active_window: cmd.active,
    });

    let policy = LayoutPolicy::new(cmd.mode, classifier);
    let summary = do_recompute(&host, &policy)?;
    eprintln!(
        "{} windows placed, {} skipped",
        summary.placed, summary.skipped
    );
    Ok(())
}
