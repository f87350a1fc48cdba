//! Game session: submit orchestration around the solver call
//!
//! The session owns the history plus the two concurrency primitives the
//! design needs: a busy flag (at most one solver call in flight; taps and
//! submits are rejected while it is set) and a session epoch (incremented on
//! restart, so a completion handler for a stale call can be recognized and
//! discarded instead of corrupting a freshly started game).

use super::history::{GameStatus, GuessHistory, MAX_ROUNDS};
use super::round::Round;
use crate::core::{LetterStatus, WINNING_CLUE, WORD_LENGTH, Word};
use crate::solver::{GuessClue, SolverError, build_payload};
use rustc_hash::FxHashSet;

/// What a submit request resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Submit not accepted: busy, terminal, or nothing to submit
    Rejected,
    /// The submitted clue was all greens
    Won,
    /// Sixth guess submitted without winning
    Lost,
    /// Call the solver with this payload, then resolve with the same epoch
    Call {
        payload: Vec<GuessClue>,
        epoch: u64,
    },
}

/// Outcome of delivering a solver completion to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The completion belonged to the current session and was applied
    Applied,
    /// The completion belonged to a previous session epoch and was dropped
    Stale,
}

/// One user's game against today's puzzle
#[derive(Debug, Default)]
pub struct GameSession {
    history: GuessHistory,
    busy: bool,
    epoch: u64,
    interacted: bool,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All rounds in play order
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        self.history.rounds()
    }

    /// Read access to the full history (open-round index, counts)
    #[inline]
    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Derived game status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.history.status()
    }

    /// Positions the user may not edit this round
    #[must_use]
    pub fn locked_positions(&self) -> FxHashSet<usize> {
        self.history.locked_positions()
    }

    /// Whether a solver call is in flight
    #[inline]
    #[must_use]
    pub const fn busy(&self) -> bool {
        self.busy
    }

    /// Whether the user has touched the current session yet
    #[inline]
    #[must_use]
    pub const fn user_interacted(&self) -> bool {
        self.interacted
    }

    /// Current session epoch
    #[inline]
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start (or restart) a game
    ///
    /// Clears the history wholesale, bumps the epoch so any in-flight call
    /// resolves as stale, and marks the session busy for the first-guess
    /// fetch. Returns the epoch to resolve that fetch with.
    pub fn new_game(&mut self) -> u64 {
        self.history.reset();
        self.epoch += 1;
        self.busy = true;
        self.interacted = false;
        self.epoch
    }

    /// Deliver the first-guess fetch result
    ///
    /// # Errors
    /// Propagates the classified solver error, or `InvalidSolverResponse`
    /// when the returned word is not a valid 5-letter word. The history is
    /// left empty in both cases.
    pub fn resolve_first_guess(
        &mut self,
        epoch: u64,
        outcome: Result<String, SolverError>,
    ) -> Result<Resolution, SolverError> {
        if epoch != self.epoch {
            return Ok(Resolution::Stale);
        }
        self.busy = false;

        let text = outcome?;
        let first = Word::new(text).map_err(|_| SolverError::InvalidSolverResponse)?;
        self.history.start(first);
        Ok(Resolution::Applied)
    }

    /// Cycle one cell of the open round through the tap cycle
    ///
    /// Returns `false` without touching anything when the session is busy,
    /// the game is over, the position is locked, or there is no open round.
    /// A successful tap marks the session as user-interacted, which cancels
    /// the idle hint.
    pub fn tap_cell(&mut self, position: usize) -> bool {
        if self.busy || self.status().is_terminal() || position >= WORD_LENGTH {
            return false;
        }
        let Some(open) = self.history.open_round() else {
            return false;
        };
        let next = open.status_at(position).cycled();
        self.mark_cell(position, next)
    }

    /// Set one cell of the open round to a specific status
    ///
    /// Same guards as `tap_cell`; used by the line-based surface, where the
    /// user types a whole status row instead of tapping cells.
    pub fn mark_cell(&mut self, position: usize, status: LetterStatus) -> bool {
        if self.busy || self.status().is_terminal() {
            return false;
        }
        let changed = self.history.set_feedback(position, status);
        if changed {
            self.interacted = true;
        }
        changed
    }

    /// Submit the open round's feedback
    ///
    /// Evaluates the terminal rule on the serialized clue first; only a
    /// non-terminal submit produces a solver call. The open round freezes
    /// immediately on a terminal clue and stays open (and editable, for
    /// retry) when the call later fails.
    pub fn submit(&mut self) -> SubmitAction {
        if self.busy || self.status().is_terminal() {
            return SubmitAction::Rejected;
        }
        let Some(open) = self.history.open_round() else {
            return SubmitAction::Rejected;
        };

        if open.clue() == WINNING_CLUE {
            self.history.freeze_open();
            return SubmitAction::Won;
        }

        let index = self
            .history
            .open_index()
            .expect("open round implies open index");
        if index >= MAX_ROUNDS - 1 {
            self.history.freeze_open();
            return SubmitAction::Lost;
        }

        let payload = build_payload(&self.history);
        self.busy = true;
        SubmitAction::Call {
            payload,
            epoch: self.epoch,
        }
    }

    /// Deliver a solver completion for a submitted round
    ///
    /// A completion from a previous epoch is discarded untouched. On
    /// success the next guess is validated, confirmed letters are carried
    /// into the new round, and the round is appended (freezing the previous
    /// one). On failure the history is left exactly as it was before the
    /// submit - the round stays open for retry.
    ///
    /// # Errors
    /// Propagates the classified solver error, or `InvalidSolverResponse`
    /// when the returned guess is not a valid 5-letter word.
    pub fn resolve_submit(
        &mut self,
        epoch: u64,
        outcome: Result<String, SolverError>,
    ) -> Result<Resolution, SolverError> {
        if epoch != self.epoch {
            return Ok(Resolution::Stale);
        }
        self.busy = false;

        let text = outcome?;
        let next = Word::new(text).map_err(|_| SolverError::InvalidSolverResponse)?;

        let Some(submitted) = self.history.open_round() else {
            // Nothing to extend; treat like a stale completion
            return Ok(Resolution::Stale);
        };
        let feedback = reconcile_feedback(&next, submitted);
        self.history.append_round(Round::with_feedback(next, feedback));
        Ok(Resolution::Applied)
    }
}

/// Derive the new round's initial feedback from the solver's next guess
///
/// A position starts `Correct` only when the letter recurs at the same
/// position *and* the user had confirmed that position correct in the
/// submitted round. A merely coincidental positional match stays unset -
/// the user has not re-confirmed it.
fn reconcile_feedback(next: &Word, submitted: &Round) -> [LetterStatus; WORD_LENGTH] {
    let mut feedback = [LetterStatus::Unset; WORD_LENGTH];
    for (i, cell) in feedback.iter_mut().enumerate() {
        if next.char_at(i) == submitted.guess().char_at(i)
            && submitted.status_at(i) == LetterStatus::Correct
        {
            *cell = LetterStatus::Correct;
        }
    }
    feedback
}
