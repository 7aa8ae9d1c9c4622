//! Scheduling strategies.
//!
//! Each discipline implements the same contract: given the validated
//! process list (plus a quantum for round robin), produce an ordered
//! decision sequence of `(process, start, duration)` slices with absolute
//! start times stamped from the strategy's own simulation clock. The
//! assembler (`crate::assembler`) fills idle gaps and enforces timeline
//! invariants; it applies no per-strategy logic.
//!
//! # Tie-breaking
//!
//! When two ready processes are equally eligible under a discipline's
//! selection key, the earlier arrival wins, and on equal arrivals the lower
//! ID wins. [`select_ready`] is the single comparator shared by every
//! discipline, so the rule cannot diverge between them.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

pub(crate) mod fcfs;
pub(crate) mod priority;
pub(crate) mod round_robin;
pub(crate) mod sjf;
pub(crate) mod srtf;

use crate::models::{Process, ProcessId};

/// One entry of a strategy's decision sequence: a process ran from
/// `start_time` for `duration` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decision {
    pub process_id: ProcessId,
    pub start_time: i64,
    pub duration: i64,
}

/// Per-run mutable state for one process.
///
/// Owned exclusively by the strategy executing the run and discarded
/// afterwards; the caller's `Process` list is never aliased or mutated.
#[derive(Debug, Clone)]
pub(crate) struct RuntimeProcess {
    pub id: ProcessId,
    pub arrival_time: i64,
    pub burst_time: i64,
    /// Resolved priority; 0 for disciplines that ignore it.
    pub priority: i32,
    /// CPU time still required. Reaches 0 exactly once.
    pub remaining_time: i64,
    /// Tick at which the process last became ready: its arrival at first,
    /// then the preemption instant each time it re-enters the ready set.
    pub last_ready_time: i64,
}

impl RuntimeProcess {
    fn from_process(p: &Process) -> Self {
        Self {
            id: p.id,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            priority: p.priority.unwrap_or(0),
            remaining_time: p.burst_time,
            last_ready_time: p.arrival_time,
        }
    }

    /// Whether the process is in the ready set at the given tick.
    pub fn is_ready(&self, clock: i64) -> bool {
        self.remaining_time > 0 && self.last_ready_time <= clock
    }
}

/// Builds the per-run owned copies for a strategy invocation.
pub(crate) fn runtime_copies(processes: &[Process]) -> Vec<RuntimeProcess> {
    processes.iter().map(RuntimeProcess::from_process).collect()
}

/// Index of the ready process with the smallest selection key.
///
/// Ties break by arrival time and then by ID, which keeps every discipline
/// deterministic for identical input. Returns `None` when nothing is ready.
pub(crate) fn select_ready<K>(procs: &[RuntimeProcess], clock: i64, key: K) -> Option<usize>
where
    K: Fn(&RuntimeProcess) -> i64,
{
    procs
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_ready(clock))
        .min_by_key(|(_, p)| (key(p), p.arrival_time, p.id))
        .map(|(i, _)| i)
}

/// Earliest tick after `clock` at which an unfinished process becomes ready,
/// or `None` when all remaining work is already ready or done.
pub(crate) fn next_ready_time(procs: &[RuntimeProcess], clock: i64) -> Option<i64> {
    procs
        .iter()
        .filter(|p| p.remaining_time > 0 && p.last_ready_time > clock)
        .map(|p| p.last_ready_time)
        .min()
}

/// Appends a decision, extending the previous one when the same process
/// continues without interruption. Keeps one decision per uninterrupted
/// run segment in the preemptive disciplines.
pub(crate) fn push_segment(
    decisions: &mut Vec<Decision>,
    process_id: ProcessId,
    start_time: i64,
    duration: i64,
) {
    if let Some(last) = decisions.last_mut() {
        if last.process_id == process_id && last.start_time + last.duration == start_time {
            last.duration += duration;
            return;
        }
    }
    decisions.push(Decision {
        process_id,
        start_time,
        duration,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rp(id: ProcessId, arrival: i64, burst: i64) -> RuntimeProcess {
        RuntimeProcess::from_process(&Process::new(id, arrival, burst))
    }

    #[test]
    fn test_select_ready_filters_by_clock() {
        let procs = vec![rp(1, 0, 5), rp(2, 3, 1)];
        // At tick 0 only P1 is ready, even though P2 has the smaller burst.
        assert_eq!(select_ready(&procs, 0, |p| p.burst_time), Some(0));
        assert_eq!(select_ready(&procs, 3, |p| p.burst_time), Some(1));
    }

    #[test]
    fn test_select_ready_tie_breaks_by_arrival_then_id() {
        let procs = vec![rp(3, 1, 4), rp(2, 0, 4), rp(1, 1, 4)];
        // Equal keys: P2 arrived first.
        assert_eq!(select_ready(&procs, 1, |p| p.burst_time), Some(1));

        let same_arrival = vec![rp(3, 0, 4), rp(1, 0, 4)];
        // Equal keys and arrivals: lower ID wins.
        assert_eq!(select_ready(&same_arrival, 0, |p| p.burst_time), Some(1));
    }

    #[test]
    fn test_select_ready_skips_finished() {
        let mut procs = vec![rp(1, 0, 5), rp(2, 0, 3)];
        procs[1].remaining_time = 0;
        assert_eq!(select_ready(&procs, 0, |p| p.remaining_time), Some(0));
    }

    #[test]
    fn test_next_ready_time() {
        let procs = vec![rp(1, 4, 2), rp(2, 7, 2)];
        assert_eq!(next_ready_time(&procs, 0), Some(4));
        assert_eq!(next_ready_time(&procs, 4), Some(7));
        assert_eq!(next_ready_time(&procs, 7), None);
    }

    #[test]
    fn test_push_segment_merges_contiguous_runs() {
        let mut decisions = Vec::new();
        push_segment(&mut decisions, 1, 0, 2);
        push_segment(&mut decisions, 1, 2, 3);
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].duration, 5);

        push_segment(&mut decisions, 2, 5, 1);
        assert_eq!(decisions.len(), 2);

        // Same process but after a gap: a new segment.
        push_segment(&mut decisions, 2, 8, 1);
        assert_eq!(decisions.len(), 3);
    }

    #[test]
    fn test_runtime_copy_initial_state() {
        let p = Process::new(1, 3, 5).with_priority(2);
        let copies = runtime_copies(std::slice::from_ref(&p));
        assert_eq!(copies[0].remaining_time, 5);
        assert_eq!(copies[0].last_ready_time, 3);
        assert_eq!(copies[0].priority, 2);
        assert!(!copies[0].is_ready(2));
        assert!(copies[0].is_ready(3));
    }
}
