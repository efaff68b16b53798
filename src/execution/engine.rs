//! Main execution engine - runs a step list against a shared context

use crate::core::{
    ExecutionStatus, PipelineContext, ScaffoldError, Step, StepEntry, StepList, StepRecord,
    StepState,
};
use crate::execution::group::join_all_settled;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Events that can occur during pipeline execution
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    PipelineStarted {
        execution_id: Uuid,
        name: String,
        total_entries: usize,
    },
    GroupStarted {
        step_ids: Vec<String>,
    },
    StepStarted {
        step_id: String,
        description: String,
    },
    StepCompleted {
        step_id: String,
    },
    StepFailed {
        step_id: String,
        error: String,
    },
    PipelineCompleted {
        execution_id: Uuid,
        status: ExecutionStatus,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(ExecutionEvent) + Send + Sync>;

/// Outcome of one run
#[derive(Debug)]
pub struct ExecutionReport {
    pub execution_id: Uuid,
    pub status: ExecutionStatus,
    /// Every step in declared order (groups flattened)
    pub steps: Vec<StepRecord>,
    /// The first error raised, reported verbatim
    pub error: Option<ScaffoldError>,
}

impl ExecutionReport {
    pub fn is_success(&self) -> bool {
        self.status == ExecutionStatus::Completed
    }

    pub fn step_state(&self, step_id: &str) -> Option<&StepState> {
        self.steps.iter().find(|r| r.id == step_id).map(|r| &r.state)
    }

    /// Ids of steps that were started, in declared order
    pub fn started_steps(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|r| r.state.was_started())
            .map(|r| r.id.as_str())
            .collect()
    }

    pub fn into_result(self) -> Result<(), ScaffoldError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Sequential executor with concurrent groups; halts on the first failure
#[derive(Default)]
pub struct ExecutionEngine {
    event_handlers: Vec<EventHandler>,
}

impl ExecutionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(ExecutionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
    }

    /// Emit an event to all handlers
    fn emit_event(&self, event: ExecutionEvent) {
        for handler in &self.event_handlers {
            handler(event.clone());
        }
    }

    /// Execute every entry in order
    ///
    /// Entry N+1 never starts before entry N has finished. A failing entry
    /// stops the run; steps after it stay `Pending` in the report.
    pub async fn execute(&self, steps: &StepList, ctx: &PipelineContext) -> ExecutionReport {
        let execution_id = Uuid::new_v4();
        let mut records: Vec<StepRecord> = steps
            .step_ids()
            .into_iter()
            .map(|id| StepRecord {
                id: id.to_string(),
                state: StepState::Pending,
            })
            .collect();

        info!("Starting scaffold of {} ({})", ctx.name, execution_id);
        self.emit_event(ExecutionEvent::PipelineStarted {
            execution_id,
            name: ctx.name.clone(),
            total_entries: steps.len(),
        });

        let mut offset = 0;
        let mut failure = None;

        for entry in steps.entries() {
            let outcome = match entry {
                StepEntry::Single(step) => {
                    let (state, result) = self.execute_step(step.as_ref(), ctx).await;
                    records[offset].state = state;
                    result
                }
                StepEntry::Group(members) => {
                    self.execute_group(members, ctx, &mut records[offset..offset + members.len()])
                        .await
                }
            };
            offset += entry.ids().len();

            if let Err(err) = outcome {
                failure = Some(err);
                break;
            }
        }

        let status = match failure {
            Some(_) => ExecutionStatus::Failed,
            None => ExecutionStatus::Completed,
        };

        info!("Scaffold of {} finished: {:?}", ctx.name, status);
        self.emit_event(ExecutionEvent::PipelineCompleted {
            execution_id,
            status,
        });

        ExecutionReport {
            execution_id,
            status,
            steps: records,
            error: failure,
        }
    }

    /// Run group members concurrently and wait for all of them
    ///
    /// The first failure to settle is returned.
    async fn execute_group(
        &self,
        members: &[Box<dyn Step>],
        ctx: &PipelineContext,
        records: &mut [StepRecord],
    ) -> Result<(), ScaffoldError> {
        self.emit_event(ExecutionEvent::GroupStarted {
            step_ids: members.iter().map(|s| s.id().to_string()).collect(),
        });

        let settled = join_all_settled(members.iter().enumerate().map(move |(index, step)| async move {
            let (state, result) = self.execute_step(step.as_ref(), ctx).await;
            (index, state, result)
        }))
        .await;

        let mut first_error = None;
        for (index, state, result) in settled {
            records[index].state = state;
            if let Err(err) = result {
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Execute a single step
    async fn execute_step(
        &self,
        step: &dyn Step,
        ctx: &PipelineContext,
    ) -> (StepState, Result<(), ScaffoldError>) {
        let step_id = step.id();
        info!("Executing step: {}", step_id);

        let mut state = StepState::Pending;
        state.start();
        self.emit_event(ExecutionEvent::StepStarted {
            step_id: step_id.to_string(),
            description: step.describe(ctx),
        });

        let result = step.run(ctx).await;
        match &result {
            Ok(()) => {
                state.complete();
                self.emit_event(ExecutionEvent::StepCompleted {
                    step_id: step_id.to_string(),
                });
            }
            Err(err) => {
                error!("Step {} failed: {}", step_id, err);
                state.fail(err.to_string());
                self.emit_event(ExecutionEvent::StepFailed {
                    step_id: step_id.to_string(),
                    error: err.to_string(),
                });
            }
        }

        (state, result)
    }
}
