use derive_more::Display;

/// Lifecycle of an animation handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HandleState {
    /// Registered but waiting for something it needs (e.g. viewport geometry)
    Idle,
    Scheduled,
    Running,
    Completed,
    /// Released; terminal
    Cancelled,
}

impl HandleState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, HandleState::Cancelled)
    }

    /// Whether `self -> next` is a legal move.
    ///
    /// `Completed -> Scheduled` is only legal for repeating sequences.
    pub fn can_transition_to(&self, next: HandleState, repeating: bool) -> bool {
        use HandleState::*;
        match (*self, next) {
            (Cancelled, _) => false,
            (_, Cancelled) => true,
            (Idle, Scheduled) | (Scheduled, Running) | (Running, Completed) => true,
            (Completed, Scheduled) => repeating,
            (a, b) => a == b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::HandleState::*;

    #[test]
    fn test_forward_path() {
        assert!(Idle.can_transition_to(Scheduled, false));
        assert!(Scheduled.can_transition_to(Running, false));
        assert!(Running.can_transition_to(Completed, false));
    }

    #[test]
    fn test_cancel_from_any_live_state() {
        for state in [Idle, Scheduled, Running, Completed] {
            assert!(state.can_transition_to(Cancelled, false));
        }
        assert!(Cancelled.is_terminal());
        assert!(!Cancelled.can_transition_to(Scheduled, true));
    }

    #[test]
    fn test_loop_back_only_for_sequences() {
        assert!(!Completed.can_transition_to(Scheduled, false));
        assert!(Completed.can_transition_to(Scheduled, true));
    }

    #[test]
    fn test_no_skipping() {
        assert!(!Idle.can_transition_to(Running, false));
        assert!(!Scheduled.can_transition_to(Completed, false));
        assert!(!Running.can_transition_to(Scheduled, true));
    }
}
