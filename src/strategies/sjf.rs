//! Shortest-Job-First (non-preemptive).
//!
//! Whenever the CPU is free, the ready process with the smallest burst time
//! runs to completion; ties break by arrival and then ID. If nothing is
//! ready, the clock jumps to the next arrival.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use super::{next_ready_time, runtime_copies, select_ready, Decision};
use crate::models::Process;

pub(crate) fn schedule(processes: &[Process]) -> Vec<Decision> {
    let mut procs = runtime_copies(processes);
    let mut decisions = Vec::with_capacity(procs.len());
    let mut clock = 0;

    loop {
        let Some(idx) = select_ready(&procs, clock, |p| p.burst_time) else {
            match next_ready_time(&procs, clock) {
                Some(t) => {
                    clock = t;
                    continue;
                }
                None => break,
            }
        };

        let run = procs[idx].remaining_time;
        decisions.push(Decision {
            process_id: procs[idx].id,
            start_time: clock,
            duration: run,
        });
        clock += run;
        procs[idx].remaining_time = 0;
    }
    decisions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u32, arrival: i64, burst: i64) -> Process {
        Process::new(id, arrival, burst)
    }

    #[test]
    fn test_shortest_ready_job_first() {
        // P1(0,5) P2(1,3) P3(2,1): at tick 5 both P2 and P3 are ready,
        // P3 has the smaller burst → order P1, P3, P2.
        let decisions = schedule(&[p(1, 0, 5), p(2, 1, 3), p(3, 2, 1)]);
        assert_eq!(decisions.len(), 3);
        assert_eq!((decisions[0].process_id, decisions[0].start_time), (1, 0));
        assert_eq!((decisions[1].process_id, decisions[1].start_time), (3, 5));
        assert_eq!((decisions[2].process_id, decisions[2].start_time), (2, 6));
    }

    #[test]
    fn test_only_ready_processes_are_eligible() {
        // P2 has the shortest burst overall but arrives after P1 finishes
        // committing: non-preemptive SJF never waits for a shorter job.
        let decisions = schedule(&[p(1, 0, 10), p(2, 1, 1)]);
        assert_eq!(decisions[0].process_id, 1);
        assert_eq!(decisions[1].start_time, 10);
    }

    #[test]
    fn test_idle_jump_to_next_arrival() {
        let decisions = schedule(&[p(1, 3, 2), p(2, 10, 1)]);
        assert_eq!(decisions[0].start_time, 3);
        assert_eq!(decisions[1].start_time, 10);
    }

    #[test]
    fn test_equal_burst_tie_breaks_by_arrival_then_id() {
        let decisions = schedule(&[p(9, 0, 4), p(4, 0, 4), p(2, 1, 4)]);
        let order: Vec<u32> = decisions.iter().map(|d| d.process_id).collect();
        assert_eq!(order, vec![4, 9, 2]);
    }
}
