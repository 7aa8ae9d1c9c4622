//! Round Robin (preemptive, fixed quantum).
//!
//! A FIFO ready queue ordered by arrival (ties by ID). The head runs for at
//! most one quantum; a process preempted with work left re-enters the tail
//! *after* any processes that arrived during its slice. A process finishing
//! exactly on the quantum boundary is not re-enqueued.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use super::{runtime_copies, Decision};
use crate::models::Process;

pub(crate) fn schedule(processes: &[Process], quantum: i64) -> Vec<Decision> {
    let mut procs = runtime_copies(processes);

    // Admission order: arrival time, ties by ID.
    let mut arrival_order: Vec<usize> = (0..procs.len()).collect();
    arrival_order.sort_by_key(|&i| (procs[i].arrival_time, procs[i].id));

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut admitted = 0;
    let mut clock = 0;
    let mut decisions = Vec::new();

    loop {
        while admitted < arrival_order.len()
            && procs[arrival_order[admitted]].arrival_time <= clock
        {
            queue.push_back(arrival_order[admitted]);
            admitted += 1;
        }

        let Some(idx) = queue.pop_front() else {
            if admitted == arrival_order.len() {
                break;
            }
            // CPU idle until the next arrival.
            clock = procs[arrival_order[admitted]].arrival_time;
            continue;
        };

        let run = procs[idx].remaining_time.min(quantum);
        decisions.push(Decision {
            process_id: procs[idx].id,
            start_time: clock,
            duration: run,
        });
        clock += run;
        procs[idx].remaining_time -= run;

        // Processes that arrived during this slice enter the queue ahead of
        // the preempted one.
        while admitted < arrival_order.len()
            && procs[arrival_order[admitted]].arrival_time <= clock
        {
            queue.push_back(arrival_order[admitted]);
            admitted += 1;
        }
        if procs[idx].remaining_time > 0 {
            queue.push_back(idx);
        }
    }
    decisions
}
