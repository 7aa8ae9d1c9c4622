//! CPU scheduling simulation engine.
//!
//! Simulates classic single-CPU dispatch disciplines over a finite set of
//! user-defined processes and produces an execution timeline plus aggregate
//! performance metrics. The engine is a pure function boundary: one request
//! in, one `(Timeline, Metrics)` pair out, no I/O, no shared state between
//! runs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionSlice`, `Timeline`,
//!   `Metrics`
//! - **`engine`**: `SimulationRequest`, `Algorithm`, and the `run` entry point
//! - **`validation`**: Input integrity checks (empty input, duplicate IDs,
//!   invalid durations, quantum bounds, missing priorities)
//!
//! # Disciplines
//!
//! FCFS, SJF, Round Robin, SRTF, and priority scheduling in both
//! non-preemptive and preemptive variants. All strategies are deterministic:
//! equally eligible processes are ordered by arrival time and then by ID, so
//! identical input always yields an identical timeline.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod assembler;
pub mod engine;
pub mod error;
pub mod models;
mod strategies;
pub mod validation;

pub use engine::{run, Algorithm, SimulationOutcome, SimulationRequest};
pub use error::SimulationError;
pub use models::{ExecutionSlice, Metrics, Process, ProcessId, ProcessMetrics, Timeline};
