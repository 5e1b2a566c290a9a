//! Plasma panel visibility handling while a session runs.
//!
//! Panels are switched to "dodge windows" so they never cover a game window,
//! and put back the way they were when the daemon exits.

use std::collections::BTreeMap;

use anyhow::Result;

const PLASMA_SERVICE: &str = "org.kde.plasmashell";
const PLASMA_PATH: &str = "/PlasmaShell";
const PLASMA_INTERFACE: &str = "org.kde.PlasmaShell";

pub fn is_kde_desktop() -> bool {
    std::env::var("XDG_CURRENT_DESKTOP").is_ok_and(|v| v == "KDE")
}

/// Evaluates Plasma desktop scripts.
/// This abstraction allows mocking in tests.
pub trait PlasmaShell {
    fn evaluate_script(&self, script: &str) -> Result<String>;
}

/// Plasma shell reached over the session bus
pub struct DbusPlasmaShell {
    conn: zbus::blocking::Connection,
}

impl DbusPlasmaShell {
    pub fn connect() -> Result<Self> {
        let conn = zbus::blocking::Connection::session()?;
        Ok(Self { conn })
    }
}

impl PlasmaShell for DbusPlasmaShell {
    fn evaluate_script(&self, script: &str) -> Result<String> {
        let proxy = zbus::blocking::Proxy::new(
            &self.conn,
            PLASMA_SERVICE,
            PLASMA_PATH,
            PLASMA_INTERFACE,
        )?;
        let output: String = proxy.call("evaluateScript", &(script,))?;
        Ok(output.trim().to_string())
    }
}

pub struct PanelManager<S: PlasmaShell> {
    shell: S,
    saved: BTreeMap<usize, String>,
}

impl<S: PlasmaShell> PanelManager<S> {
    pub fn new(shell: S) -> Self {
        Self {
            shell,
            saved: BTreeMap::new(),
        }
    }

    pub fn saved_states(&self) -> &BTreeMap<usize, String> {
        &self.saved
    }

    pub fn panel_count(&self) -> usize {
        self.run("print(panels().length)")
            .and_then(|out| out.parse().ok())
            .unwrap_or(0)
    }

    /// Remember each panel's current hiding mode.
    pub fn save_states(&mut self) {
        let count = self.panel_count();
        if count == 0 {
            tracing::info!("No Plasma panels found");
            return;
        }

        self.saved.clear();
        for i in 0..count {
            if let Some(state) = self.run(&format!("print(panels()[{}].hiding)", i)) {
                tracing::info!("Saved panel {} state: {}", i, state);
                self.saved.insert(i, state);
            }
        }
    }

    pub fn set_dodge_windows(&self) {
        for i in 0..self.panel_count() {
            if self
                .run(&format!("panels()[{}].hiding = 'dodgewindows'", i))
                .is_some()
            {
                tracing::info!("Set panel {} to dodge windows", i);
            }
        }
    }

    /// Write back whatever `save_states` recorded, then forget it.
    pub fn restore_states(&mut self) {
        for (i, state) in std::mem::take(&mut self.saved) {
            let value = if state == "null" {
                state.clone()
            } else {
                format!("'{}'", state)
            };
            if self
                .run(&format!("panels()[{}].hiding = {}", i, value))
                .is_some()
            {
                tracing::info!("Restored panel {} to {}", i, state);
            }
        }
    }

    fn run(&self, script: &str) -> Option<String> {
        match self.shell.evaluate_script(script) {
            Ok(out) => Some(out),
            Err(e) => {
                tracing::error!("Plasma script failed ({}): {}", script, e);
                None
            }
        }
    }
}

impl<S: PlasmaShell> Drop for PanelManager<S> {
    fn drop(&mut self) {
        self.restore_states();
    }
}
