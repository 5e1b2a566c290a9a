use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which placement policy the daemon runs. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// One window per monitor, covering the whole monitor.
    Fullscreen,
    /// Up to four windows per monitor, split side by side.
    #[default]
    Horizontal,
    /// Up to four windows per monitor, split top to bottom.
    Vertical,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Fullscreen => "fullscreen",
            LayoutMode::Horizontal => "horizontal",
            LayoutMode::Vertical => "vertical",
        }
    }

    pub fn is_splitscreen(&self) -> bool {
        !matches!(self, LayoutMode::Fullscreen)
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutModeError(String);

impl fmt::Display for ParseLayoutModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown layout mode: {} (use fullscreen, horizontal, vertical)",
            self.0
        )
    }
}

impl std::error::Error for ParseLayoutModeError {}

impl FromStr for LayoutMode {
    type Err = ParseLayoutModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fullscreen" => Ok(LayoutMode::Fullscreen),
            "horizontal" => Ok(LayoutMode::Horizontal),
            "vertical" => Ok(LayoutMode::Vertical),
            _ => Err(ParseLayoutModeError(s.to_string())),
        }
    }
}
