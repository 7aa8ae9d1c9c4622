//! Process (input entity) model.
//!
//! A process is the unit of work the simulated CPU executes: it becomes
//! ready at its arrival time, requires a fixed amount of CPU time, and
//! optionally carries a priority for the priority disciplines.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// Unique, stable process identifier.
pub type ProcessId = u32;

/// A process to be scheduled.
///
/// Immutable once a run starts; strategies work on their own per-run copies
/// and never mutate the caller's list.
///
/// # Time Representation
/// All times are integer simulation ticks relative to t=0. The consumer
/// defines what one tick means (e.g., 1 ms, 1 time unit on a chart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Tick at which the process becomes ready (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent). Required only by the
    /// priority disciplines; `None` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process without a priority.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}
