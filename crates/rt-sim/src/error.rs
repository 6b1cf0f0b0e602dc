use rt_core::{ConfigError, ProcessId};
use rt_schedule::ScheduleError;
use thiserror::Error;

use crate::{RunReport, StallReason};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("scheduler error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("process {0} is not registered")]
    UnknownProcess(ProcessId),

    #[error("process table full at {0} entries")]
    ProcessTableFull(usize),

    /// The clock stopped without the completion barrier.  The partial report
    /// holds everything recorded up to that point.
    #[error("run incomplete ({reason}): {}/{} riders finished", .report.finished, .report.expected)]
    IncompleteRun {
        reason: StallReason,
        report: Box<RunReport>,
    },
}

impl SimError {
    /// The partial report of an incomplete run.
    pub fn partial_report(&self) -> Option<&RunReport> {
        match self {
            SimError::IncompleteRun { report, .. } => Some(report),
            _ => None,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
