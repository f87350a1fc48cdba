//! Remote solver boundary
//!
//! Wire protocol, error taxonomy, and the HTTP client for the external
//! solver service that picks the next guess.

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, HttpSolver, Solve};
pub use error::{SolverError, classify};
pub use protocol::{GuessClue, SolverResponse, build_payload};
