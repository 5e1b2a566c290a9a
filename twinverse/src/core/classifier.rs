use super::ManagedWindow;

pub const DEFAULT_MANAGED_CLASS: &str = "gamescope";

/// Picks the windows this daemon is allowed to place: those whose resource
/// class equals one fixed application identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowClassifier {
    managed_class: String,
}

impl WindowClassifier {
    pub fn new(managed_class: impl Into<String>) -> Self {
        Self {
            managed_class: managed_class.into(),
        }
    }

    pub fn managed_class(&self) -> &str {
        &self.managed_class
    }

    pub fn is_managed(&self, window: &ManagedWindow) -> bool {
        window.resource_class == self.managed_class
    }

    /// Keep only managed windows, in host enumeration order.
    pub fn classify(&self, windows: Vec<ManagedWindow>) -> Vec<ManagedWindow> {
        windows.into_iter().filter(|w| self.is_managed(w)).collect()
    }

    /// Number of managed windows the host reports on the named output.
    pub fn count_on_output(&self, windows: &[ManagedWindow], output: &str) -> usize {
        windows
            .iter()
            .filter(|w| self.is_managed(w) && w.output.as_deref() == Some(output))
            .count()
    }
}

impl Default for WindowClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MANAGED_CLASS)
    }
}
