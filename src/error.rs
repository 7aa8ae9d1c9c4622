//! Simulation error types.
//!
//! All user-facing errors are raised during validation, before any strategy
//! runs; strategies themselves are total functions over validated input.
//! The internal-consistency variants exist to surface scheduling bugs
//! loudly instead of handing back a partial timeline.

use thiserror::Error;

use crate::engine::Algorithm;
use crate::models::ProcessId;

/// Errors raised by the simulation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// No processes were supplied.
    #[error("no processes supplied")]
    EmptyInput,

    /// Two processes share the same ID.
    #[error("duplicate process ID {id}")]
    DuplicateId {
        /// The ID that appears more than once.
        id: ProcessId,
    },

    /// A process has a non-positive burst time or negative arrival time.
    #[error("process {id} has invalid timing (arrival {arrival_time}, burst {burst_time})")]
    InvalidDuration {
        /// The offending process.
        id: ProcessId,
        /// Its arrival time as supplied.
        arrival_time: i64,
        /// Its burst time as supplied.
        burst_time: i64,
    },

    /// Round robin was requested with a missing or out-of-range quantum.
    #[error("round robin requires a quantum in 1..={max}, got {quantum:?}")]
    InvalidQuantum {
        /// The quantum as supplied (`None` = missing).
        quantum: Option<i64>,
        /// The largest accepted quantum.
        max: i64,
    },

    /// A priority discipline was requested but a process carries no priority.
    #[error("process {id} has no priority, required by {algorithm}")]
    MissingPriority {
        /// The process missing a priority.
        id: ProcessId,
        /// The discipline that needs it.
        algorithm: Algorithm,
    },

    /// A process never appeared in the assembled timeline. This is a bug in
    /// a strategy, not a user error.
    #[error("process {id} never appeared in the assembled timeline")]
    ProcessNotScheduled {
        /// The dropped process.
        id: ProcessId,
    },

    /// A strategy emitted a decision sequence violating timeline invariants
    /// (overlap, backwards start, or non-positive duration).
    #[error("timeline invariant violated: {detail}")]
    InternalInvariant {
        /// What went wrong.
        detail: String,
    },
}
