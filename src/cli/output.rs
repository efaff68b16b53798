//! CLI output formatting

use crate::core::{ExecutionStatus, StepEntry, StepList};
use crate::execution::ExecutionEvent;
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SPINNER: Emoji<'_, '_> = Emoji("⏳ ", "~ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Format an execution event for display
pub fn format_execution_event(event: &ExecutionEvent) -> String {
    match event {
        ExecutionEvent::PipelineStarted {
            execution_id,
            name,
            total_entries,
        } => format!(
            "{} Creating {} in {} steps ({})",
            ROCKET,
            style(name).bold(),
            style(total_entries).cyan(),
            style(&execution_id.to_string()[..8]).dim()
        ),
        ExecutionEvent::GroupStarted { step_ids } => {
            format!("{} In parallel: {}", INFO, style(step_ids.join(", ")).dim())
        }
        ExecutionEvent::StepStarted { description, .. } => {
            format!("{} {}", SPINNER, style(description).cyan())
        }
        ExecutionEvent::StepCompleted { step_id } => {
            format!("{} {}", CHECK, style(step_id).green())
        }
        ExecutionEvent::StepFailed { step_id, error } => {
            format!("{} {}: {}", CROSS, style(step_id).red(), style(error).dim())
        }
        ExecutionEvent::PipelineCompleted { status, .. } => match status {
            ExecutionStatus::Completed => "Done.".to_string(),
            ExecutionStatus::Failed => format!("{} {}", CROSS, style(format!("{:?}", status)).red()),
        },
    }
}

/// Numbered listing of a step list, groups on one line
pub fn format_step_list(steps: &StepList) -> String {
    steps
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            StepEntry::Single(_) => format!("{:>2}. {}\n", i + 1, entry.ids().join("")),
            StepEntry::Group(_) => format!("{:>2}. [{}]\n", i + 1, entry.ids().join(" | ")),
        })
        .collect()
}
