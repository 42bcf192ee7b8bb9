//! Screen State Machine
//!
//! Tracks which screen the page shows: the title screen until Play is
//! pressed, then the play screen until the game is stopped.

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Title,
    Playing,
    Stopped,
}

/// Actions that trigger screen transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Play,
    Stop,
}

/// Result of a screen transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: ScreenState,
    to_state: ScreenState,
    action: ScreenAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> ScreenState {
        self.from_state
    }

    pub fn to_state(&self) -> ScreenState {
        self.to_state
    }

    pub fn action(&self) -> ScreenAction {
        self.action
    }
}

/// Screen Finite State Machine
pub struct ScreenFsm {
    state: ScreenState,
}

impl ScreenFsm {
    pub fn new() -> Self {
        Self {
            state: ScreenState::Title,
        }
    }

    /// Get current state
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: ScreenAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(&self, action: ScreenAction) -> Option<ScreenState> {
        match (self.state, action) {
            (ScreenState::Title, ScreenAction::Play) => Some(ScreenState::Playing),
            // Play again starts a fresh game
            (ScreenState::Playing, ScreenAction::Play) => Some(ScreenState::Playing),
            (ScreenState::Playing, ScreenAction::Stop) => Some(ScreenState::Stopped),
            _ => None,
        }
    }

    /// Whether the title screen is hidden
    pub fn is_playing(&self) -> bool {
        self.state == ScreenState::Playing
    }
}

impl Default for ScreenFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = ScreenFsm::new();
        assert_eq!(fsm.state(), ScreenState::Title);
        assert!(!fsm.is_playing());
    }

    #[test]
    fn test_play_from_title() {
        let mut fsm = ScreenFsm::new();
        let result = fsm.transition(ScreenAction::Play);
        assert!(result.success());
        assert_eq!(result.from_state(), ScreenState::Title);
        assert_eq!(result.to_state(), ScreenState::Playing);
        assert_eq!(result.action(), ScreenAction::Play);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_play_again_stays_playing() {
        let mut fsm = ScreenFsm::new();
        fsm.transition(ScreenAction::Play);
        assert!(fsm.transition(ScreenAction::Play).success());
        assert_eq!(fsm.state(), ScreenState::Playing);
    }

    #[test]
    fn test_stop_is_final() {
        let mut fsm = ScreenFsm::new();
        fsm.transition(ScreenAction::Play);
        assert!(fsm.transition(ScreenAction::Stop).success());
        assert_eq!(fsm.state(), ScreenState::Stopped);
        assert!(!fsm.transition(ScreenAction::Play).success());
    }

    #[test]
    fn test_stop_from_title_is_invalid() {
        let mut fsm = ScreenFsm::new();
        let result = fsm.transition(ScreenAction::Stop);
        assert!(!result.success());
        assert_eq!(fsm.state(), ScreenState::Title);
    }
}
