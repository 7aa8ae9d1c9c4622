//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! At every arrival and every completion the ready process with the least
//! remaining work runs. A newcomer preempts only when its remaining time is
//! strictly smaller than the running process's — the shared tie-break
//! (arrival, then ID) makes that automatic, since the running process always
//! arrived no later than the newcomer.
//!
//! Each decision covers one uninterrupted run segment; a resumed segment is
//! gated by the preemption instant, never by the original arrival, so a
//! legitimate idle gap before resumption survives assembly.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use super::{next_ready_time, push_segment, runtime_copies, select_ready, Decision};
use crate::models::Process;

pub(crate) fn schedule(processes: &[Process]) -> Vec<Decision> {
    let mut procs = runtime_copies(processes);
    let mut decisions = Vec::new();
    let mut clock = 0;

    loop {
        let Some(idx) = select_ready(&procs, clock, |p| p.remaining_time) else {
            match next_ready_time(&procs, clock) {
                Some(t) => {
                    clock = t;
                    continue;
                }
                None => break,
            }
        };

        // Run until completion or the next arrival, whichever comes first;
        // an arrival may preempt, so re-evaluate there.
        let completion = clock + procs[idx].remaining_time;
        let horizon = match next_ready_time(&procs, clock) {
            Some(t) if t < completion => t,
            _ => completion,
        };

        push_segment(&mut decisions, procs[idx].id, clock, horizon - clock);
        procs[idx].remaining_time -= horizon - clock;
        if procs[idx].remaining_time > 0 {
            procs[idx].last_ready_time = horizon;
        }
        clock = horizon;
    }
    decisions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32, arrival: i64, burst: i64) -> Process {
        Process::new(id, arrival, burst)
    }

    fn sequence(decisions: &[Decision]) -> Vec<(u32, i64, i64)> {
        decisions
            .iter()
            .map(|d| (d.process_id, d.start_time, d.duration))
            .collect()
    }

    #[test]
    fn test_textbook_preemption_chain() {
        // P1(0,8) P2(1,4) P3(2,9) P4(3,5): P2 preempts P1 at 1 and runs to
        // completion; P4 next, then P1 resumes, then P3.
        let decisions = schedule(&[p(1, 0, 8), p(2, 1, 4), p(3, 2, 9), p(4, 3, 5)]);
        assert_eq!(
            sequence(&decisions),
            vec![(1, 0, 1), (2, 1, 4), (4, 5, 5), (1, 10, 7), (3, 17, 9)]
        );
    }

    #[test]
    fn test_no_preemption_on_equal_remaining() {
        // P2 arrives with remaining equal to P1's: the running process keeps
        // the CPU (strictly-smaller-only preemption).
        let decisions = schedule(&[p(1, 0, 6), p(2, 2, 4)]);
        assert_eq!(sequence(&decisions), vec![(1, 0, 6), (2, 6, 4)]);
    }

    #[test]
    fn test_uninterrupted_segments_are_merged() {
        // P2's arrival does not preempt P1, so P1 stays a single segment
        // across the arrival event.
        let decisions = schedule(&[p(1, 0, 4), p(2, 2, 5)]);
        assert_eq!(sequence(&decisions), vec![(1, 0, 4), (2, 4, 5)]);
    }

    #[test]
    fn test_resumption_after_idle_gap() {
        // P1 is preempted by P2, both drain, and the CPU idles before P3
        // arrives. The resumed work never collapses the gap.
        let decisions = schedule(&[p(1, 0, 5), p(2, 1, 2), p(3, 10, 1)]);
        assert_eq!(
            sequence(&decisions),
            vec![(1, 0, 1), (2, 1, 2), (1, 3, 4), (3, 10, 1)]
        );
    }

    #[test]
    fn test_preempted_process_keeps_remaining_time() {
        let decisions = schedule(&[p(1, 0, 8), p(2, 1, 4)]);
        // P1 runs 1 tick, P2 runs 4, P1 resumes with 7 remaining.
        assert_eq!(sequence(&decisions), vec![(1, 0, 1), (2, 1, 4), (1, 5, 7)]);
    }
}
