use crate::{Error, Result, translate::TranslatedMenu};
use tracing::{debug, info, warn};

// Translation states; exactly one holds at a time
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TranslationState {
    #[default]
    Idle,
    InFlight,
    Success(TranslatedMenu),
    Error(String),
}

// Translation events
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationEvent {
    Submit,
    Completed(TranslatedMenu),
    Failed(String),
}

impl TranslationState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::InFlight => "InFlight",
            Self::Success(_) => "Success",
            Self::Error(_) => "Error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }
}

impl TranslationEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Completed(_) => "Completed",
            Self::Failed(_) => "Failed",
        }
    }
}

pub struct TranslationStateMachine {
    state: TranslationState,
}

impl TranslationStateMachine {
    pub fn new() -> Self {
        Self {
            state: TranslationState::Idle,
        }
    }

    pub fn current_state(&self) -> &TranslationState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == TranslationState::InFlight
    }

    pub fn transition(&mut self, event: TranslationEvent) -> Result<()> {
        debug!(
            "FSM processing event {} in state {}",
            event.name(),
            self.state.name()
        );

        let new_state = match (&self.state, event) {
            (TranslationState::InFlight, TranslationEvent::Submit) => {
                warn!("Rejecting submit: a translation is already in flight");
                return Err(Error::RequestInFlight);
            }
            (_, TranslationEvent::Submit) => TranslationState::InFlight,
            (TranslationState::InFlight, TranslationEvent::Completed(menu)) => {
                TranslationState::Success(menu)
            }
            (TranslationState::InFlight, TranslationEvent::Failed(message)) => {
                TranslationState::Error(message)
            }
            (current, event) => {
                warn!(
                    "Invalid FSM transition from {} with event {}",
                    current.name(),
                    event.name()
                );
                return Err(Error::InvalidTransition {
                    current: current.name().to_string(),
                    requested: event.name().to_string(),
                });
            }
        };

        info!(
            "FSM state transition: {} -> {}",
            self.state.name(),
            new_state.name()
        );
        self.state = new_state;
        Ok(())
    }
}

impl Default for TranslationStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_completed_outside_flight_is_rejected() {
        let mut fsm = TranslationStateMachine::new();
        let result = fsm.transition(TranslationEvent::Completed(TranslatedMenu::default()));

        match result {
            Err(Error::InvalidTransition { current, requested }) => {
                assert_eq!(current, "Idle");
                assert_eq!(requested, "Completed");
            }
            other => panic!("expected invalid transition, got {:?}", other),
        }
        assert_eq!(*fsm.current_state(), TranslationState::Idle);
    }

    #[test]
    fn test_terminal_states() {
        let mut fsm = TranslationStateMachine::new();
        assert!(!fsm.current_state().is_terminal());

        fsm.transition(TranslationEvent::Submit).unwrap();
        assert!(!fsm.current_state().is_terminal());

        fsm.transition(TranslationEvent::Failed("Error: boom".to_string()))
            .unwrap();
        assert!(fsm.current_state().is_terminal());

        fsm.transition(TranslationEvent::Submit).unwrap();
        fsm.transition(TranslationEvent::Completed(TranslatedMenu::default()))
            .unwrap();
        assert!(fsm.current_state().is_terminal());
    }

    #[test]
    fn test_second_submit_keeps_in_flight() {
        let mut fsm = TranslationStateMachine::new();
        fsm.transition(TranslationEvent::Submit).unwrap();

        assert!(matches!(
            fsm.transition(TranslationEvent::Submit),
            Err(Error::RequestInFlight)
        ));
        assert!(fsm.is_in_flight());
    }
}
