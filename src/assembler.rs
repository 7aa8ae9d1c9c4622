//! Timeline assembly.
//!
//! Turns a strategy's decision sequence into the canonical timeline: a
//! contiguous run of slices covering `[0, makespan)` with explicit idle
//! slices wherever the CPU sat empty, including before the first arrival.
//!
//! Strategies stamp their own start times, so assembly is a pure
//! idle-filler and invariant check — it never reorders or re-times a
//! decision. An overlapping or non-positive decision is a strategy bug and
//! is rejected, never repaired.

use crate::error::SimulationError;
use crate::models::{ExecutionSlice, Timeline};
use crate::strategies::Decision;

pub(crate) fn assemble(decisions: Vec<Decision>) -> Result<Timeline, SimulationError> {
    let mut slices = Vec::with_capacity(decisions.len());
    let mut cursor = 0;

    for d in decisions {
        if d.duration <= 0 {
            return Err(SimulationError::InternalInvariant {
                detail: format!(
                    "process {} was given a non-positive slice of {} ticks",
                    d.process_id, d.duration
                ),
            });
        }
        if d.start_time < cursor {
            return Err(SimulationError::InternalInvariant {
                detail: format!(
                    "process {} starts at {} but the CPU is occupied until {}",
                    d.process_id, d.start_time, cursor
                ),
            });
        }

        if d.start_time > cursor {
            slices.push(ExecutionSlice::idle(cursor, d.start_time - cursor));
        }
        slices.push(ExecutionSlice::new(d.process_id, d.start_time, d.duration));
        cursor = d.start_time + d.duration;
    }

    let timeline = Timeline { slices };
    debug_assert!(timeline.is_well_formed());
    Ok(timeline)
}
