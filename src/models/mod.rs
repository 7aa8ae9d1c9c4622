//! Simulation domain models.
//!
//! Provides the core data types for one scheduling simulation run:
//! the immutable input entity (`Process`), the canonical output
//! (`Timeline` of `ExecutionSlice`s), and the derived performance
//! figures (`Metrics`).
//!
//! # Lifecycle
//!
//! The process list is created by the caller before a run and is read-only
//! during it; `Timeline` and `Metrics` are created fresh per run and never
//! mutated after being handed back.

mod metrics;
mod process;
mod timeline;

pub use metrics::{Metrics, ProcessMetrics};
pub use process::{Process, ProcessId};
pub use timeline::{ExecutionSlice, Timeline};
