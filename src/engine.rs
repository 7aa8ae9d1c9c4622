//! Simulation entry point.
//!
//! # Pipeline
//!
//! 1. Validate the request (fail fast, no partial timelines).
//! 2. Run the selected strategy to get a decision sequence.
//! 3. Assemble the canonical, gap-aware timeline.
//! 4. Derive per-process and aggregate metrics.
//!
//! The engine is purely synchronous and side-effect-free with respect to
//! its inputs: each invocation owns its own per-run state and clock, so
//! concurrent runs with different requests are trivially safe.
//!
//! # Example
//!
//! ```
//! use cpu_sched::{run, Algorithm, Process, SimulationRequest};
//!
//! let request = SimulationRequest::new(
//!     vec![Process::new(1, 0, 5), Process::new(2, 0, 3)],
//!     Algorithm::RoundRobin,
//! )
//! .with_quantum(2);
//!
//! let outcome = run(&request).unwrap();
//! assert_eq!(outcome.timeline.makespan(), 8);
//! assert_eq!(outcome.metrics.for_process(1).unwrap().waiting_time, 3);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assembler;
use crate::error::SimulationError;
use crate::models::{Metrics, Process, Timeline};
use crate::strategies::{fcfs, priority, round_robin, sjf, srtf};
use crate::validation;

/// The scheduling discipline to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served (non-preemptive).
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Round Robin with a fixed quantum (preemptive).
    RoundRobin,
    /// Shortest-Remaining-Time-First (preemptive).
    Srtf,
    /// Priority, lower value = more urgent (non-preemptive).
    PriorityNonPreemptive,
    /// Priority, lower value = more urgent (preemptive).
    PriorityPreemptive,
}

impl Algorithm {
    /// Snake-case string form, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin => "round_robin",
            Self::Srtf => "srtf",
            Self::PriorityNonPreemptive => "priority_non_preemptive",
            Self::PriorityPreemptive => "priority_preemptive",
        }
    }

    /// Whether the discipline may interrupt a running process.
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::RoundRobin | Self::Srtf | Self::PriorityPreemptive
        )
    }

    /// Whether every process must carry a priority.
    pub const fn uses_priority(&self) -> bool {
        matches!(self, Self::PriorityNonPreemptive | Self::PriorityPreemptive)
    }

    /// Whether a quantum is required.
    pub const fn uses_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "round_robin" | "rr" => Ok(Self::RoundRobin),
            "srtf" => Ok(Self::Srtf),
            "priority_non_preemptive" | "priority" => Ok(Self::PriorityNonPreemptive),
            "priority_preemptive" => Ok(Self::PriorityPreemptive),
            _ => Err(format!(
                "unknown algorithm '{s}'; expected one of fcfs, sjf, round_robin, srtf, \
                 priority_non_preemptive, priority_preemptive"
            )),
        }
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline to simulate.
    pub algorithm: Algorithm,
    /// Round robin quantum. Required for `RoundRobin`, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the round robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Output of one simulation run: the timeline and its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Canonical gap-aware execution timeline.
    pub timeline: Timeline,
    /// Per-process and aggregate performance figures.
    pub metrics: Metrics,
}

/// Runs one simulation: validate, schedule, assemble, measure.
pub fn run(request: &SimulationRequest) -> Result<SimulationOutcome, SimulationError> {
    validation::validate(request)?;
    log::debug!(
        "simulating {} over {} processes",
        request.algorithm,
        request.processes.len()
    );

    let decisions = match request.algorithm {
        Algorithm::Fcfs => fcfs::schedule(&request.processes),
        Algorithm::Sjf => sjf::schedule(&request.processes),
        Algorithm::RoundRobin => {
            let quantum = request.quantum.ok_or(SimulationError::InvalidQuantum {
                quantum: None,
                max: validation::MAX_QUANTUM,
            })?;
            round_robin::schedule(&request.processes, quantum)
        }
        Algorithm::Srtf => srtf::schedule(&request.processes),
        Algorithm::PriorityNonPreemptive => priority::schedule_non_preemptive(&request.processes),
        Algorithm::PriorityPreemptive => priority::schedule_preemptive(&request.processes),
    };

    let timeline = assembler::assemble(decisions)?;
    let metrics = Metrics::calculate(&timeline, &request.processes)?;
    log::debug!(
        "{}: makespan {}, cpu utilization {:.3}",
        request.algorithm,
        metrics.total_time,
        metrics.cpu_utilization
    );

    Ok(SimulationOutcome { timeline, metrics })
}
