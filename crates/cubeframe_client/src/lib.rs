//! Client for the external cube move/solve service.
//!
//! The service owns the authoritative facelet string: it validates states,
//! applies named moves, scrambles, and solves. This crate only speaks its
//! JSON wire format; the geometry engine consumes the returned move tokens
//! and facelet strings as-is.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use ureq::Agent;
use ureq::config::Config;

/// Request timeout for all service calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type used for service requests.
#[derive(thiserror::Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{0}")]
    Ureq(#[from] ureq::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Ureq(ureq::Error::Json(e))
    }
}

/// Result of validating a facelet string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckResponse {
    /// Every face is uniform; the solution is empty.
    Solved {
        /// Always empty.
        solution: String,
    },
    /// Fully specified and solvable.
    Valid {
        /// Space-separated move tokens that solve the state.
        solution: String,
    },
    /// Partially specified (`_` facelets); the service enumerated solvable
    /// completions.
    Partial {
        /// Number of completions found (capped server-side).
        count: usize,
        /// The completed facelet strings.
        valid_completions: Vec<String>,
    },
    /// Not a reachable cube state.
    Invalid {
        /// Human-readable explanation.
        reason: String,
    },
}

/// Result of applying a move to a facelet string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApplyMoveResponse {
    /// The move was applied.
    Ok {
        /// Facelet string after the move.
        new_state: String,
    },
    /// The state or move token was rejected.
    Invalid {
        /// Human-readable explanation.
        reason: String,
    },
    /// The service failed to apply the move.
    Error {
        /// Human-readable explanation.
        reason: String,
    },
}

/// Result of solving a facelet string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SolveResponse {
    /// Solved (the solution is empty if the state already was).
    Ok {
        /// Facelet string after applying the solution.
        state: String,
        /// Space-separated move tokens, empty when already solved.
        solution: String,
    },
    /// The state was rejected.
    Invalid {
        /// Human-readable explanation.
        reason: String,
    },
    /// The solver failed.
    Error {
        /// Human-readable explanation.
        reason: String,
    },
}

#[derive(Serialize)]
struct StateBody<'a> {
    state: &'a str,
}
#[derive(Serialize)]
struct MoveBody<'a> {
    state: &'a str,
    #[serde(rename = "move")]
    mv: &'a str,
}
#[derive(Deserialize)]
struct RandomStateBody {
    state: String,
}

/// Blocking client for one move/solve service endpoint.
///
/// All methods block and should be run off the render thread.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    domain: String,
    agent: Agent,
}
impl ServiceClient {
    /// Constructs a client for the service at `domain`
    /// (e.g. `http://localhost:5000`).
    pub fn new(domain: impl Into<String>) -> Self {
        let domain = domain.into();
        // Error statuses still carry a JSON body with a structured reason,
        // so they are parsed like any other response.
        let agent: Agent = Config::builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();
        Self { domain, agent }
    }

    /// Validates a facelet string, solving or enumerating completions.
    pub fn check_state(&self, state: &str) -> Result<CheckResponse, Error> {
        log::debug!("checking state of length {}", state.len());
        Ok(self
            .agent
            .post(format!("{}/check_state", self.domain))
            .send_json(StateBody { state })?
            .into_body()
            .read_json()?)
    }

    /// Fetches a scrambled facelet string.
    pub fn random_state(&self) -> Result<String, Error> {
        let body: RandomStateBody = self
            .agent
            .get(format!("{}/random_state", self.domain))
            .call()?
            .into_body()
            .read_json()?;
        Ok(body.state)
    }

    /// Applies one move token to a facelet string.
    pub fn apply_move(&self, state: &str, mv: &str) -> Result<ApplyMoveResponse, Error> {
        log::debug!("applying move {mv:?}");
        Ok(self
            .agent
            .post(format!("{}/apply_move", self.domain))
            .send_json(MoveBody { state, mv })?
            .into_body()
            .read_json()?)
    }

    /// Solves a fully-specified facelet string.
    pub fn solve(&self, state: &str) -> Result<SolveResponse, Error> {
        Ok(self
            .agent
            .post(format!("{}/solve", self.domain))
            .send_json(StateBody { state })?
            .into_body()
            .read_json()?)
    }
}

/// Splits a solution string into move tokens, for playback.
pub fn solution_moves(solution: &str) -> impl Iterator<Item = &str> {
    solution.split_whitespace()
}
