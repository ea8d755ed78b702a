use crate::errors::MoveLearnerError;
use schema::Move;
use serde::{Deserialize, Serialize};

/// Where a teaching flow currently stands.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeachingState {
    Entry,          // Announcement shown, waiting for the player to continue
    MovesetFull,    // Asking whether to forget an old move
    AwaitingChoice, // Asking which move to forget
    Done,
    Refused,
}

impl TeachingState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TeachingState::Done | TeachingState::Refused)
    }
}

/// The player's answer to whatever the active dialog is asking.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    // Dismiss an announcement
    Continue,
    // "Yes" to the delete-a-move prompt
    Accept,
    // "No" to the delete-a-move prompt
    Decline,
    // The slot picked from the which-move list
    Forget { slot: i32 },
    // Back out of the which-move list
    Cancel,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum TeachingEvent {
    DialogOpened {
        text: String,
    },
    MoveLearned {
        slot: usize,
        move_title: String,
    },
    MoveForgotten {
        slot: usize,
        old_move: String,
        new_move: String,
    },
    AssignmentRejected {
        slot: i32,
        reason: String,
    },
    LearningAbandoned {
        move_title: String,
    },
}

/// A teaching flow parked between player decisions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeachingSession {
    candidate: Move,
    state: TeachingState,
    events: Vec<TeachingEvent>,
    #[serde(skip)]
    last_rejection: Option<MoveLearnerError>,
}

impl TeachingSession {
    pub(crate) fn new(candidate: Move) -> Self {
        Self {
            candidate,
            state: TeachingState::Entry,
            events: Vec::new(),
            last_rejection: None,
        }
    }

    /// The move being offered
    pub fn candidate(&self) -> &Move {
        &self.candidate
    }

    pub fn state(&self) -> TeachingState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Everything that happened in this flow, oldest first
    pub fn events(&self) -> &[TeachingEvent] {
        &self.events
    }

    /// Why the most recent forget-a-move attempt was turned down, if it was
    pub fn last_rejection(&self) -> Option<&MoveLearnerError> {
        self.last_rejection.as_ref()
    }

    pub(crate) fn set_state(&mut self, state: TeachingState) {
        self.state = state;
    }

    pub(crate) fn push(&mut self, event: TeachingEvent) {
        self.events.push(event);
    }

    pub(crate) fn reject(&mut self, slot: i32, error: MoveLearnerError) {
        self.push(TeachingEvent::AssignmentRejected {
            slot,
            reason: error.to_string(),
        });
        self.last_rejection = Some(error);
    }

    /// Print all events in debug format with indentation.
    pub fn print_debug(&self) {
        for event in &self.events {
            println!("  {:?}", event);
        }
    }

    /// Print all events in debug format with a custom prefix message.
    pub fn print_debug_with_message(&self, message: &str) {
        println!("{}", message);
        self.print_debug();
    }
}
