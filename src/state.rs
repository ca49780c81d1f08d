//! Wiring state of a component.

/// Whether a component's collaborator has been injected yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WiringState {
    /// Constructed, collaborator not set. Collaborator-backed calls panic.
    #[default]
    Unwired,
    /// Collaborator set. Terminal for the life of the process.
    Wired,
}

impl WiringState {
    /// Check if collaborator-backed operations may be called.
    pub fn is_wired(&self) -> bool {
        matches!(self, WiringState::Wired)
    }
}
