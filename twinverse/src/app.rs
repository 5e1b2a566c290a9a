mod binder;
mod retile;

pub use binder::{bind, run_recompute};
pub use retile::{do_recompute, LayoutPolicy};

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::unix::{signal, SignalKind};
use twinverse_ipc::HostMessage;

use crate::core::Config;
use crate::event::Dispatcher;
use crate::panels::{self, DbusPlasmaShell, PanelManager};
use crate::platform::{BridgeHost, MirrorChange};

pub struct App {}

impl App {
    pub fn run(config: Config) -> Result<()> {
        let policy = LayoutPolicy::from_config(&config);

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        // Panel scripts go over blocking D-Bus calls, so they stay outside the runtime.
        // Dropping the manager puts the panels back, also on error or panic.
        let panels = Self::setup_panels(&config);
        let result = rt.block_on(Self::run_async(policy));
        drop(panels);

        tracing::info!("twinverse exiting");
        result
    }

    fn setup_panels(config: &Config) -> Option<PanelManager<DbusPlasmaShell>> {
        if !config.manage_panels || !panels::is_kde_desktop() {
            return None;
        }
        match DbusPlasmaShell::connect() {
            Ok(shell) => {
                let mut manager = PanelManager::new(shell);
                manager.save_states();
                tracing::info!("Saved {} panel states", manager.saved_states().len());
                manager.set_dodge_windows();
                Some(manager)
            }
            Err(e) => {
                tracing::warn!("Plasma shell unavailable, leaving panels alone: {}", e);
                None
            }
        }
    }

    async fn run_async(policy: LayoutPolicy) -> Result<()> {
        let mut host = BridgeHost::new(std::io::stdout());
        let mut dispatcher = Dispatcher::new();
        bind(&mut dispatcher, policy.clone());

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut terminate = signal(SignalKind::terminate())?;

        tracing::info!("Waiting for host messages on stdin");

        loop {
            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => handle_line(&line, &mut host, &mut dispatcher, &policy),
                    Ok(None) => {
                        tracing::info!("Host bridge closed");
                        break;
                    }
                    Err(e) => {
                        tracing::error!("Failed to read from host bridge: {}", e);
                        break;
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted");
                    break;
                }
                _ = terminate.recv() => {
                    tracing::info!("Terminated");
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Fold one protocol line into the host mirror and run whatever it triggers.
pub fn handle_line<W: Write>(
    line: &str,
    host: &mut BridgeHost<W>,
    dispatcher: &mut Dispatcher<BridgeHost<W>>,
    policy: &LayoutPolicy,
) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    let msg: HostMessage = match serde_json::from_str(line) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!("Ignoring malformed host message ({}): {}", e, line);
            return;
        }
    };

    match host.apply_message(msg) {
        MirrorChange::Event(event) => {
            dispatcher.dispatch(event, host);
        }
        MirrorChange::Resync => run_recompute(host, policy),
    }
}
