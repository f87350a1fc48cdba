//! Blocking HTTP client for the solver service
//!
//! The whole exchange is one POST: the round history goes out as a JSON
//! array, the next guess comes back as `{"guess": "..."}`. The `Solve`
//! trait is the seam that lets game logic run against an in-memory fake.

use super::error::{SolverError, classify};
use super::protocol::{GuessClue, SolverResponse};
use std::time::Duration;

/// Default solver endpoint; override with `--api-url`
pub const DEFAULT_API_URL: &str = "https://wordle-solver-api.fly.dev/guess";

/// Default per-request timeout in seconds; override with `--timeout`
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The solver boundary: exchange accumulated history for the next guess
pub trait Solve {
    /// Request the next guess for the given round history
    ///
    /// Called with an empty payload to obtain the very first guess.
    ///
    /// # Errors
    /// Returns a classified `SolverError` on transport failure or when the
    /// solver rejects the request.
    fn solve(&self, payload: &[GuessClue]) -> Result<SolverResponse, SolverError>;
}

/// Production client posting JSON to the solver service
#[derive(Clone)]
pub struct HttpSolver {
    agent: ureq::Agent,
    url: String,
}

impl HttpSolver {
    /// Create a client for the given endpoint
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            url: url.into(),
        }
    }

    /// The endpoint this client posts to
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Solve for HttpSolver {
    fn solve(&self, payload: &[GuessClue]) -> Result<SolverResponse, SolverError> {
        match self.agent.post(&self.url).send_json(payload) {
            Ok(response) => response
                .into_json::<SolverResponse>()
                .map_err(|_| SolverError::InvalidSolverResponse),
            Err(ureq::Error::Status(_, response)) => {
                // The solver reports failures as prose in the response body
                let body = response.into_string().unwrap_or_default();
                Err(classify(&body))
            }
            Err(ureq::Error::Transport(_)) => Err(SolverError::TransportFailure),
        }
    }
}
