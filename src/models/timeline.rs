//! Timeline (solution) model.
//!
//! A timeline is the canonical output of one simulation run: an ordered
//! sequence of non-overlapping execution slices that covers `[0, makespan)`
//! exactly, with explicit idle slices wherever no process was ready.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.1
//! (Gantt chart representation)

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// One contiguous span where a single process (or nothing) occupies the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Occupying process, or `None` for an idle slice.
    pub process_id: Option<ProcessId>,
    /// Start tick (inclusive).
    pub start_time: i64,
    /// Slice length in ticks (> 0).
    pub duration: i64,
}

/// A complete execution timeline for one simulation run.
///
/// Immutable once produced by the assembler. Slices are totally ordered by
/// start time, mutually non-overlapping, and contiguous from tick 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Execution slices in chronological order.
    pub slices: Vec<ExecutionSlice>,
}

impl ExecutionSlice {
    /// Creates a slice occupied by a process.
    pub fn new(process_id: ProcessId, start_time: i64, duration: i64) -> Self {
        Self {
            process_id: Some(process_id),
            start_time,
            duration,
        }
    }

    /// Creates an idle slice.
    pub fn idle(start_time: i64, duration: i64) -> Self {
        Self {
            process_id: None,
            start_time,
            duration,
        }
    }

    /// End tick (exclusive).
    #[inline]
    pub fn end_time(&self) -> i64 {
        self.start_time + self.duration
    }

    /// Whether no process occupies this slice.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.process_id.is_none()
    }
}

impl Timeline {
    /// Makespan: end of the last slice, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.slices.last().map(ExecutionSlice::end_time).unwrap_or(0)
    }

    /// Total CPU time spent executing processes (idle slices excluded).
    pub fn busy_time(&self) -> i64 {
        self.slices
            .iter()
            .filter(|s| !s.is_idle())
            .map(|s| s.duration)
            .sum()
    }

    /// Whether any idle slice exists.
    pub fn has_idle(&self) -> bool {
        self.slices.iter().any(ExecutionSlice::is_idle)
    }

    /// Returns all slices occupied by a given process.
    pub fn slices_for(&self, process_id: ProcessId) -> Vec<&ExecutionSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == Some(process_id))
            .collect()
    }

    /// Start of a process's first slice (actual start time).
    pub fn first_start(&self, process_id: ProcessId) -> Option<i64> {
        self.slices
            .iter()
            .find(|s| s.process_id == Some(process_id))
            .map(|s| s.start_time)
    }

    /// End of a process's last slice (completion time).
    pub fn completion_time(&self, process_id: ProcessId) -> Option<i64> {
        self.slices
            .iter()
            .rev()
            .find(|s| s.process_id == Some(process_id))
            .map(ExecutionSlice::end_time)
    }

    /// Number of slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Whether the slices are contiguous from tick 0 with positive durations.
    pub fn is_well_formed(&self) -> bool {
        let mut cursor = 0;
        for s in &self.slices {
            if s.start_time != cursor || s.duration <= 0 {
                return false;
            }
            cursor = s.end_time();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        Timeline {
            slices: vec![
                ExecutionSlice::new(1, 0, 3),
                ExecutionSlice::idle(3, 2),
                ExecutionSlice::new(2, 5, 4),
                ExecutionSlice::new(1, 9, 1),
            ],
        }
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_timeline().makespan(), 10);
        assert_eq!(Timeline::default().makespan(), 0);
    }

    #[test]
    fn test_busy_time_excludes_idle() {
        assert_eq!(sample_timeline().busy_time(), 8);
    }

    #[test]
    fn test_has_idle() {
        assert!(sample_timeline().has_idle());

        let solid = Timeline {
            slices: vec![ExecutionSlice::new(1, 0, 3)],
        };
        assert!(!solid.has_idle());
    }

    #[test]
    fn test_slices_for() {
        let t = sample_timeline();
        assert_eq!(t.slices_for(1).len(), 2);
        assert_eq!(t.slices_for(2).len(), 1);
        assert!(t.slices_for(99).is_empty());
    }

    #[test]
    fn test_first_start_and_completion() {
        let t = sample_timeline();
        assert_eq!(t.first_start(1), Some(0));
        assert_eq!(t.completion_time(1), Some(10));
        assert_eq!(t.first_start(2), Some(5));
        assert_eq!(t.completion_time(2), Some(9));
        assert_eq!(t.completion_time(99), None);
    }

    #[test]
    fn test_well_formedness() {
        assert!(sample_timeline().is_well_formed());
        assert!(Timeline::default().is_well_formed());

        let gap = Timeline {
            slices: vec![ExecutionSlice::new(1, 0, 3), ExecutionSlice::new(2, 4, 1)],
        };
        assert!(!gap.is_well_formed());

        let late_start = Timeline {
            slices: vec![ExecutionSlice::new(1, 2, 3)],
        };
        assert!(!late_start.is_well_formed());
    }

    #[test]
    fn test_slice_end_time() {
        let s = ExecutionSlice::new(7, 3, 4);
        assert_eq!(s.end_time(), 7);
        assert!(!s.is_idle());
        assert!(ExecutionSlice::idle(0, 1).is_idle());
    }
}
