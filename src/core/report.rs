//! Project report assembly.
//!
//! This module builds the structured snapshot that both the display layer and
//! the PDF export consume: budget summary, annotated phase list, overall
//! completion, and the before/after room pairs. Both consumers call the same
//! pure functions over the same loaded snapshot, so their figures always
//! match bit for bit. Formatting helpers here stop at plain strings; visual
//! layout belongs to the callers.

use crate::{
    core::{
        budget::{self, BudgetSummary, ProjectBudget},
        currency::{self, Currency},
        furniture as furniture_ops, material as material_ops,
        phase::{self, PhaseProgress},
        project as project_ops, room,
    },
    entities::{project, room as room_entity},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;

/// Everything the display and export layers need about one project, derived
/// from a single data snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectReport {
    /// The project being reported on
    pub project: project::Model,
    /// Budget summary, or `Unavailable` when nothing was computable
    pub budget: ProjectBudget,
    /// Phases in workflow order, annotated for display
    pub phases: Vec<PhaseProgress>,
    /// Mean phase completion; `None` when the project has no phases
    pub overall_completion: Option<f64>,
    /// Rooms with both a "before" and a "concept" image, in room order
    pub comparable_rooms: Vec<room_entity::Model>,
}

/// Generates a full report for a project.
///
/// Loads the project's line items, phases, and rooms once and runs every
/// aggregation over that snapshot. A report on a project that does not exist
/// is a caller bug and returns [`Error::ProjectNotFound`], unlike the budget
/// builder's tolerant `Unavailable`.
pub async fn generate_project_report(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<ProjectReport> {
    let project = project_ops::get_project_by_id(db, project_id)
        .await?
        .ok_or_else(|| Error::ProjectNotFound {
            reference: project_id.to_string(),
        })?;

    let materials = material_ops::get_materials_for_project(db, project_id).await?;
    let furniture = furniture_ops::get_furniture_for_project(db, project_id).await?;
    let phases = phase::get_phases_for_project(db, project_id).await?;
    let rooms = room::get_rooms_for_project(db, project_id).await?;

    let budget = budget::build_budget_summary(Some(&project), &materials, &furniture);
    let tracked = phase::track_phases(&phases);
    let overall = phase::overall_completion(&phases);
    let comparable = room::comparable_rooms(&rooms);

    Ok(ProjectReport {
        project,
        budget,
        phases: tracked,
        overall_completion: overall,
        comparable_rooms: comparable,
    })
}

/// Generates a completion bar string for visual representation.
///
/// Creates a text-based bar like: `[████████░░] 80.0%`
#[must_use]
pub fn format_completion_bar(completion_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = completion_percent.clamp(0.0, 100.0);

    // Cast safety: clamped ∈ [0, 100], length is small (10-20).
    // Result is mathematically in [0, length], truncation/sign loss intentional for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {completion_percent:.1}%")
}

/// Formats the budget line of a report.
///
/// With an applicable ceiling: `"250 000 FCFA of 500 000 FCFA (50.0%)"`.
/// Without one, the usage figure is omitted entirely rather than shown as a
/// bogus zero: `"250 000 FCFA (no budget ceiling)"`.
#[must_use]
pub fn format_budget_line(summary: &BudgetSummary, currency: Currency) -> String {
    let total = currency::format_amount(summary.total_estimated_cost, currency);

    match (summary.budget_max, summary.budget_usage_percent) {
        (Some(max), Some(usage)) => {
            let ceiling = currency::format_amount(max, currency);
            format!("{total} of {ceiling} ({usage:.1}%)")
        }
        _ => format!("{total} (no budget ceiling)"),
    }
}
