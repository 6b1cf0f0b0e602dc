use rt_core::{LatchKind, PoolKind, SimTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("latch {latch} already fired at {fired_at}")]
    LatchRefired {
        latch:    LatchKind,
        fired_at: SimTime,
    },

    #[error("release of pool {0} with no holders")]
    ReleaseUnheld(PoolKind),

    #[error("agenda entry at {at} is earlier than the current time {now}")]
    ScheduledInPast {
        at:  SimTime,
        now: SimTime,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
