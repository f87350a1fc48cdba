//! Game-session state machine
//!
//! Round history, the open/frozen round split, locked positions, terminal
//! state detection, and the submit/reconcile orchestration around the
//! remote solver call.

mod history;
mod round;
mod session;

pub use history::{GameStatus, GuessHistory, MAX_ROUNDS};
pub use round::Round;
pub use session::{GameSession, Resolution, SubmitAction};
