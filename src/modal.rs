//! About-modal state machine
//!
//! ```text
//!            open
//!   Closed ───────► Open { saved_overflow }
//!     ▲                      │
//!     └──────────────────────┘
//!   close button | overlay click | Escape
//! ```
//!
//! The open state remembers the body's inline `overflow` so closing restores
//! exactly what the page had before.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        saved_overflow: String,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    /// Transition to open. Returns false if already open, in which case the
    /// originally saved overflow is kept.
    pub fn open(&mut self, current_overflow: impl Into<String>) -> bool {
        if self.is_open() {
            return false;
        }
        *self = ModalState::Open {
            saved_overflow: current_overflow.into(),
        };
        true
    }

    /// Transition to closed, yielding the overflow to restore if it was open.
    pub fn close(&mut self) -> Option<String> {
        match std::mem::take(self) {
            ModalState::Open { saved_overflow } => Some(saved_overflow),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(ModalState::default(), ModalState::Closed);
        assert!(!ModalState::default().is_open());
    }

    #[test]
    fn test_open_close_cycle() {
        let mut state = ModalState::default();
        assert!(state.open("auto"));
        assert!(state.is_open());
        assert_eq!(state.close(), Some("auto".to_string()));
        assert_eq!(state, ModalState::Closed);
        assert_eq!(state.close(), None);
    }

    #[test]
    fn test_reopen_keeps_first_saved_overflow() {
        let mut state = ModalState::default();
        state.open("");
        assert!(!state.open("hidden"));
        assert_eq!(state.close(), Some(String::new()));
    }
}
