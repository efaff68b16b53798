//! Step domain model

use crate::core::{context::PipelineContext, error::ScaffoldError};
use async_trait::async_trait;
use std::fmt;

/// A single named unit of pipeline work
#[async_trait]
pub trait Step: Send + Sync {
    /// Stable identifier used in events and reports
    fn id(&self) -> &'static str;

    /// Human-readable progress line printed when the step starts
    fn describe(&self, ctx: &PipelineContext) -> String {
        let _ = ctx;
        self.id().to_string()
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError>;
}

/// One top-level entry in the step list
pub enum StepEntry {
    /// Runs on its own, after the previous entry finished
    Single(Box<dyn Step>),
    /// Members run concurrently; the entry succeeds only if all of them do
    Group(Vec<Box<dyn Step>>),
}

impl StepEntry {
    pub fn single<S: Step + 'static>(step: S) -> Self {
        StepEntry::Single(Box::new(step))
    }

    /// Ids of the step(s) in this entry, in declared order
    pub fn ids(&self) -> Vec<&'static str> {
        match self {
            StepEntry::Single(step) => vec![step.id()],
            StepEntry::Group(steps) => steps.iter().map(|s| s.id()).collect(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, StepEntry::Group(_))
    }
}

impl fmt::Debug for StepEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepEntry::Single(step) => f.debug_tuple("Single").field(&step.id()).finish(),
            StepEntry::Group(_) => f.debug_tuple("Group").field(&self.ids()).finish(),
        }
    }
}

/// Ordered list of entries, assembled once and then consumed by the engine
#[derive(Debug, Default)]
pub struct StepList {
    entries: Vec<StepEntry>,
}

impl StepList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: StepEntry) {
        self.entries.push(entry);
    }

    pub fn prepend(&mut self, entry: StepEntry) {
        self.entries.insert(0, entry);
    }

    pub fn entries(&self) -> &[StepEntry] {
        &self.entries
    }

    /// Number of top-level entries (a group counts once)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every step id, groups flattened, in declared order
    pub fn step_ids(&self) -> Vec<&'static str> {
        self.entries.iter().flat_map(|e| e.ids()).collect()
    }
}
