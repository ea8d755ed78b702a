//! Move learning for a single Pokemon.
//!
//! Two entry points: [`MoveLearner::add_move`] writes a move straight into a
//! slot, and [`MoveLearner::start_dialog`] begins the interactive flow where
//! the player may be asked to forget a move. The flow is parked in a
//! [`TeachingSession`] between player decisions and advanced with
//! [`MoveLearner::resolve`].

pub mod session;

#[cfg(test)]
mod tests;

use crate::config::{render, LearnerConfig};
use crate::errors::{LearnResult, MoveLearnerError};
use crate::menu::{Dialog, MenuService};
use crate::pokemon::Pokemon;
use schema::{MenuName, Move};
use tracing::{debug, info, warn};

pub use session::{PlayerInput, TeachingEvent, TeachingSession, TeachingState};

pub struct MoveLearner<M: MenuService> {
    menu: M,
    config: LearnerConfig,
}

impl<M: MenuService> MoveLearner<M> {
    pub fn new(menu: M) -> Self {
        Self::with_config(menu, LearnerConfig::default())
    }

    pub fn with_config(menu: M, config: LearnerConfig) -> Self {
        Self { menu, config }
    }

    pub fn menu(&self) -> &M {
        &self.menu
    }

    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// Put `move_` into slot `index` of the Pokemon's moveset.
    ///
    /// `index` may point at any known move (replace) or at the first empty
    /// slot (append). Returns the move that was replaced, if any. Nothing is
    /// written when the index is out of range or the move is already known in
    /// another slot.
    pub fn add_move(
        &self,
        pokemon: &mut Pokemon,
        move_: Move,
        index: i32,
    ) -> LearnResult<Option<Move>> {
        let title = move_.title().to_string();
        match pokemon.moves.assign(move_, index) {
            Ok(replaced) => {
                info!(
                    pokemon = %pokemon.name,
                    move_title = %title,
                    slot = index,
                    replaced = ?replaced.as_ref().map(Move::title),
                    "move assigned"
                );
                Ok(replaced)
            }
            Err(err) => {
                debug!(pokemon = %pokemon.name, move_title = %title, slot = index, %err, "move rejected");
                Err(err)
            }
        }
    }

    /// Offer `move_` to the Pokemon.
    ///
    /// Opens the announcement dialog and returns the parked flow. The moveset
    /// is not touched until the player continues past the announcement.
    pub fn start_dialog(&mut self, pokemon: &Pokemon, move_: Move) -> TeachingSession {
        debug!(pokemon = %pokemon.name, move_title = %move_.title(), "starting teaching dialog");

        let text = render(
            &self.config.trying_to_learn,
            &pokemon.name,
            move_.title(),
            None,
        );
        let mut session = TeachingSession::new(move_);
        self.open(&mut session, Dialog::text(text));
        session
    }

    /// Feed the player's decision into a parked flow and return the new state.
    ///
    /// Input that makes no sense for the current state is ignored, and a
    /// finished flow ignores everything. A forget-a-move choice that breaks
    /// the moveset rules is dropped and the player is asked again.
    pub fn resolve(
        &mut self,
        session: &mut TeachingSession,
        pokemon: &mut Pokemon,
        input: PlayerInput,
    ) -> TeachingState {
        let state = session.state();
        match (state, input) {
            (TeachingState::Entry, PlayerInput::Continue) => {
                let known = pokemon.moves.position_of(session.candidate().title());
                match (pokemon.moves.free_slot(), known) {
                    (Some(slot), _) => self.learn_into_free_slot(session, pokemon, slot),
                    // No point offering to forget a move for one already known
                    (None, Some(slot)) => {
                        let err = MoveLearnerError::DuplicateMove {
                            title: session.candidate().title().to_string(),
                            slot,
                        };
                        self.refuse_known_move(session, pokemon, slot as i32, err)
                    }
                    (None, None) => self.prompt_moveset_full(session, pokemon),
                }
            }
            (TeachingState::MovesetFull, PlayerInput::Accept) => {
                let dialog =
                    Dialog::text(self.config.which_move.clone()).with_options(pokemon.moves.titles());
                self.open(session, dialog);
                session.set_state(TeachingState::AwaitingChoice);
            }
            (TeachingState::MovesetFull, PlayerInput::Decline) => self.refuse(session, pokemon),
            (TeachingState::AwaitingChoice, PlayerInput::Forget { slot }) => {
                self.replace_chosen_slot(session, pokemon, slot)
            }
            (TeachingState::AwaitingChoice, PlayerInput::Cancel) => {
                self.prompt_moveset_full(session, pokemon)
            }
            _ => {
                debug!(?state, ?input, "input ignored by teaching flow");
            }
        }

        if session.state() != state {
            debug!(from = ?state, to = ?session.state(), "teaching flow transition");
        }
        session.state()
    }

    fn learn_into_free_slot(
        &mut self,
        session: &mut TeachingSession,
        pokemon: &mut Pokemon,
        slot: usize,
    ) {
        let candidate = session.candidate().clone();
        let title = candidate.title().to_string();

        // A free slot is always in range, so the only way this fails is a
        // move the Pokemon already knows.
        match self.add_move(pokemon, candidate, slot as i32) {
            Ok(_) => {
                session.push(TeachingEvent::MoveLearned {
                    slot,
                    move_title: title.clone(),
                });
                let text = render(&self.config.learned, &pokemon.name, &title, None);
                self.open(session, Dialog::text(text));
                session.set_state(TeachingState::Done);
            }
            Err(err) => self.refuse_known_move(session, pokemon, slot as i32, err),
        }
    }

    fn refuse_known_move(
        &mut self,
        session: &mut TeachingSession,
        pokemon: &Pokemon,
        slot: i32,
        err: MoveLearnerError,
    ) {
        let title = session.candidate().title().to_string();
        session.reject(slot, err);
        let text = render(&self.config.already_knows, &pokemon.name, &title, None);
        self.open(session, Dialog::text(text));
        session.push(TeachingEvent::LearningAbandoned { move_title: title });
        session.set_state(TeachingState::Refused);
    }

    fn replace_chosen_slot(
        &mut self,
        session: &mut TeachingSession,
        pokemon: &mut Pokemon,
        slot: i32,
    ) {
        let candidate = session.candidate().clone();
        let title = candidate.title().to_string();

        match self.add_move(pokemon, candidate, slot) {
            Ok(replaced) => {
                let slot = slot as usize;
                let text = match replaced {
                    Some(old) => {
                        session.push(TeachingEvent::MoveForgotten {
                            slot,
                            old_move: old.title().to_string(),
                            new_move: title.clone(),
                        });
                        render(
                            &self.config.forgot_and_learned,
                            &pokemon.name,
                            &title,
                            Some(old.title()),
                        )
                    }
                    // Only reachable if a slot was freed while the prompt was open
                    None => render(&self.config.learned, &pokemon.name, &title, None),
                };
                session.push(TeachingEvent::MoveLearned {
                    slot,
                    move_title: title,
                });
                self.open(session, Dialog::text(text));
                session.set_state(TeachingState::Done);
            }
            Err(err) => {
                warn!(pokemon = %pokemon.name, slot, %err, "forget choice rejected");
                session.reject(slot, err);
                self.prompt_moveset_full(session, pokemon);
            }
        }
    }

    fn prompt_moveset_full(&mut self, session: &mut TeachingSession, pokemon: &Pokemon) {
        let text = render(
            &self.config.moveset_full,
            &pokemon.name,
            session.candidate().title(),
            None,
        );
        let options = vec![self.config.yes_option.clone(), self.config.no_option.clone()];
        self.open(session, Dialog::text(text).with_options(options));
        session.set_state(TeachingState::MovesetFull);
    }

    fn refuse(&mut self, session: &mut TeachingSession, pokemon: &Pokemon) {
        let title = session.candidate().title().to_string();
        let text = render(&self.config.did_not_learn, &pokemon.name, &title, None);
        self.open(session, Dialog::text(text));
        session.push(TeachingEvent::LearningAbandoned { move_title: title });
        session.set_state(TeachingState::Refused);
    }

    fn open(&mut self, session: &mut TeachingSession, dialog: Dialog) {
        session.push(TeachingEvent::DialogOpened {
            text: dialog.text.clone(),
        });
        self.menu.open_dialog(MenuName::GeneralText, dialog);
    }
}
