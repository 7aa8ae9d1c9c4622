//! Input validation for simulation requests.
//!
//! All user-facing errors are caught here, before any strategy runs — fail
//! fast, no partial timelines. Checks, in order:
//! - Empty process list
//! - Duplicate process IDs
//! - Non-positive burst times and negative arrival times
//! - Round robin quantum presence and bounds
//! - Missing priorities for the priority disciplines
//!
//! Strategies are total functions over input that passes these checks.

use std::collections::HashSet;

use crate::engine::SimulationRequest;
use crate::error::SimulationError;

/// Largest accepted round robin quantum.
pub const MAX_QUANTUM: i64 = 100;

/// Validates a simulation request, returning the first problem found.
pub fn validate(request: &SimulationRequest) -> Result<(), SimulationError> {
    if request.processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }

    let mut seen = HashSet::new();
    for p in &request.processes {
        if !seen.insert(p.id) {
            return Err(SimulationError::DuplicateId { id: p.id });
        }
        if p.burst_time <= 0 || p.arrival_time < 0 {
            return Err(SimulationError::InvalidDuration {
                id: p.id,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
            });
        }
    }

    if request.algorithm.uses_quantum() {
        match request.quantum {
            Some(q) if (1..=MAX_QUANTUM).contains(&q) => {}
            quantum => {
                return Err(SimulationError::InvalidQuantum {
                    quantum,
                    max: MAX_QUANTUM,
                })
            }
        }
    }

    if request.algorithm.uses_priority() {
        for p in &request.processes {
            if p.priority.is_none() {
                return Err(SimulationError::MissingPriority {
                    id: p.id,
                    algorithm: request.algorithm,
                });
            }
        }
    }

    Ok(())
}
