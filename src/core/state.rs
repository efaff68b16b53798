//! Execution state models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall pipeline execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Every entry succeeded
    Completed,
    /// An entry failed and the rest were not started
    Failed,
}

/// State of a single step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StepState {
    /// Step has not been started (and never will be, once the pipeline halts)
    Pending,
    /// Step is currently running
    Running { started_at: DateTime<Utc> },
    /// Step completed successfully
    Completed {
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    },
    /// Step failed
    Failed {
        error: String,
        started_at: DateTime<Utc>,
        failed_at: DateTime<Utc>,
    },
}

impl StepState {
    /// Whether the step was ever started
    pub fn was_started(&self) -> bool {
        !matches!(self, StepState::Pending)
    }

    pub fn start(&mut self) {
        *self = StepState::Running {
            started_at: Utc::now(),
        };
    }

    pub fn complete(&mut self) {
        *self = StepState::Completed {
            started_at: self.started_at(),
            completed_at: Utc::now(),
        };
    }

    pub fn fail(&mut self, error: String) {
        *self = StepState::Failed {
            error,
            started_at: self.started_at(),
            failed_at: Utc::now(),
        };
    }

    fn started_at(&self) -> DateTime<Utc> {
        match self {
            StepState::Running { started_at }
            | StepState::Completed { started_at, .. }
            | StepState::Failed { started_at, .. } => *started_at,
            StepState::Pending => Utc::now(),
        }
    }
}

/// Record of one step within a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub id: String,
    pub state: StepState,
}
