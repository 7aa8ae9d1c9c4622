//! First-Come-First-Served (non-preemptive).
//!
//! Processes run to completion in arrival order, ties by ID. Idle gaps
//! appear naturally when a process arrives after the CPU has drained.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.1

use super::Decision;
use crate::models::Process;

pub(crate) fn schedule(processes: &[Process]) -> Vec<Decision> {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| (p.arrival_time, p.id));

    let mut decisions = Vec::with_capacity(order.len());
    let mut clock = 0;
    for p in order {
        let start = clock.max(p.arrival_time);
        decisions.push(Decision {
            process_id: p.id,
            start_time: start,
            duration: p.burst_time,
        });
        clock = start + p.burst_time;
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
    fn test_arrival_order() {
        // P1(0,5) P2(1,3) P3(2,1) → P1 at 0, P2 at 5, P3 at 8.
        let decisions = schedule(&[p(1, 0, 5), p(2, 1, 3), p(3, 2, 1)]);
        assert_eq!(decisions.len(), 3);
        assert_eq!((decisions[0].process_id, decisions[0].start_time), (1, 0));
        assert_eq!((decisions[1].process_id, decisions[1].start_time), (2, 5));
        assert_eq!((decisions[2].process_id, decisions[2].start_time), (3, 8));
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let shuffled = schedule(&[p(3, 2, 1), p(1, 0, 5), p(2, 1, 3)]);
        let sorted = schedule(&[p(1, 0, 5), p(2, 1, 3), p(3, 2, 1)]);
        assert_eq!(shuffled, sorted);
    }

    #[test]
    fn test_gap_before_late_arrival() {
        let decisions = schedule(&[p(1, 0, 2), p(2, 6, 1)]);
        assert_eq!(decisions[1].start_time, 6);
    }

    #[test]
    fn test_same_arrival_tie_breaks_by_id() {
        let decisions = schedule(&[p(7, 0, 2), p(2, 0, 2)]);
        assert_eq!(decisions[0].process_id, 2);
        assert_eq!(decisions[1].process_id, 7);
    }

    #[test]
    fn test_late_first_arrival() {
        let decisions = schedule(&[p(1, 4, 3)]);
        assert_eq!(decisions[0].start_time, 4);
    }
}
