//! Priority scheduling, non-preemptive and preemptive.
//!
//! Lower numeric priority = more urgent. The non-preemptive variant shares
//! SJF's control structure with the selection key swapped for priority; the
//! preemptive variant shares SRTF's event loop, so a newly arrived process
//! with a strictly lower priority value takes the CPU immediately while the
//! preempted process keeps its remaining time.
//!
//! Validation guarantees every process carries a priority before either
//! variant runs.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use super::{next_ready_time, push_segment, runtime_copies, select_ready, Decision};
use crate::models::Process;

pub(crate) fn schedule_non_preemptive(processes: &[Process]) -> Vec<Decision> {
    let mut procs = runtime_copies(processes);
    let mut decisions = Vec::with_capacity(procs.len());
    let mut clock = 0;

    loop {
        let Some(idx) = select_ready(&procs, clock, |p| i64::from(p.priority)) else {
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

pub(crate) fn schedule_preemptive(processes: &[Process]) -> Vec<Decision> {
    let mut procs = runtime_copies(processes);
    let mut decisions = Vec::new();
    let mut clock = 0;

    loop {
        let Some(idx) = select_ready(&procs, clock, |p| i64::from(p.priority)) else {
            match next_ready_time(&procs, clock) {
                Some(t) => {
                    clock = t;
                    continue;
                }
                None => break,
            }
        };

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
