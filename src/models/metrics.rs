//! Schedule quality metrics.
//!
//! Computes standard CPU-scheduling performance indicators from an
//! assembled timeline and its input processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Total Time | Makespan (idle-inclusive) |
//! | Busy Time | Sum of all burst times |
//! | CPU Utilization | busy_time / total_time |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Timeline};
use crate::error::SimulationError;

/// Performance figures for a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process this entry describes.
    pub process_id: ProcessId,
    /// Completion time: end of the process's last slice.
    pub completion_time: i64,
    /// Turnaround: completion minus arrival.
    pub turnaround_time: i64,
    /// Waiting: turnaround minus burst. Never negative for a correct schedule.
    pub waiting_time: i64,
}

/// Aggregate performance indicators for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Per-process figures, sorted by process ID.
    pub per_process: Vec<ProcessMetrics>,
    /// Sum of waiting times.
    pub total_waiting: i64,
    /// Sum of turnaround times.
    pub total_turnaround: i64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Makespan: total span from 0 to the last completion.
    pub total_time: i64,
    /// Total CPU time spent executing (equals the sum of burst times).
    pub busy_time: i64,
    /// busy_time / total_time, in `0.0..=1.0`. Exactly 1.0 only when the
    /// timeline contains no idle slice.
    pub cpu_utilization: f64,
}

impl Metrics {
    /// Computes metrics from an assembled timeline and its input processes.
    ///
    /// A process that never appears in the timeline is a scheduling bug, not
    /// a user error; it is surfaced as [`SimulationError::ProcessNotScheduled`]
    /// rather than silently dropped from the aggregates.
    pub fn calculate(timeline: &Timeline, processes: &[Process]) -> Result<Self, SimulationError> {
        let mut per_process = Vec::with_capacity(processes.len());

        for p in processes {
            let completion = timeline
                .completion_time(p.id)
                .ok_or(SimulationError::ProcessNotScheduled { id: p.id })?;

            let turnaround = completion - p.arrival_time;
            let waiting = turnaround - p.burst_time;
            debug_assert!(
                waiting >= 0,
                "process {} computed negative waiting time {}",
                p.id,
                waiting
            );

            per_process.push(ProcessMetrics {
                process_id: p.id,
                completion_time: completion,
                turnaround_time: turnaround,
                waiting_time: waiting,
            });
        }
        per_process.sort_by_key(|m| m.process_id);

        let total_waiting: i64 = per_process.iter().map(|m| m.waiting_time).sum();
        let total_turnaround: i64 = per_process.iter().map(|m| m.turnaround_time).sum();
        let count = per_process.len().max(1) as f64;

        let total_time = timeline.makespan();
        let busy_time = timeline.busy_time();
        debug_assert_eq!(
            busy_time,
            processes.iter().map(|p| p.burst_time).sum::<i64>(),
            "timeline busy time must equal the total requested burst time"
        );

        let cpu_utilization = if total_time > 0 {
            busy_time as f64 / total_time as f64
        } else {
            0.0
        };

        Ok(Self {
            per_process,
            total_waiting,
            total_turnaround,
            avg_waiting: total_waiting as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
            total_time,
            busy_time,
            cpu_utilization,
        })
    }

    /// Figures for a single process, if present.
    pub fn for_process(&self, process_id: ProcessId) -> Option<&ProcessMetrics> {
        self.per_process
            .iter()
            .find(|m| m.process_id == process_id)
    }
}
