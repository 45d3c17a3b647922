//! Cost aggregation and budget summary building.
//!
//! Turns a project's itemized material and furniture lines into category
//! subtotals, a grand total, and a budget usage percentage against the
//! project's declared ceiling. The aggregation is deliberately forgiving:
//! unpriced or corrupt line items contribute zero instead of aborting the
//! rest of the computation, and a missing or non-positive budget ceiling
//! yields an explicit "usage not applicable" state instead of a division by
//! zero. The same functions feed the on-screen summary and the exported
//! report, so both always agree for a given snapshot.

use crate::{
    core::{furniture as furniture_ops, material as material_ops, project as project_ops},
    entities::{furniture, material, project},
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Aggregated cost figures for one project snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    /// Sum of all material line totals
    pub total_materials_cost: f64,
    /// Sum of all furniture line totals
    pub total_furniture_cost: f64,
    /// Grand total: materials plus furniture
    pub total_estimated_cost: f64,
    /// The project's declared budget ceiling, if one is set
    pub budget_max: Option<f64>,
    /// Estimated cost as a percentage of the ceiling; None when the ceiling
    /// is absent or not strictly positive ("usage not applicable")
    pub budget_usage_percent: Option<f64>,
}

/// The outcome of building a budget summary.
///
/// `Unavailable` means no project data was there to compute from, which the
/// display layer renders differently from a computed-as-zero summary.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectBudget {
    /// No project record was available; nothing was computed
    Unavailable,
    /// A summary computed from the project's current line items
    Computed(BudgetSummary),
}

impl ProjectBudget {
    /// The computed summary, if one is available.
    #[must_use]
    pub const fn summary(&self) -> Option<&BudgetSummary> {
        match self {
            Self::Unavailable => None,
            Self::Computed(summary) => Some(summary),
        }
    }
}

/// A cost component is usable only when it is actually a number.
fn usable(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// The total cost of one material line: quantity times unit cost.
///
/// Unpriced lines (no unit cost yet) and corrupt values contribute zero.
#[must_use]
pub fn material_line_cost(item: &material::Model) -> f64 {
    let quantity = if item.quantity.is_finite() {
        item.quantity
    } else {
        0.0
    };

    usable(item.unit_cost) * quantity
}

/// The total cost of one furniture line.
///
/// Pieces still being sourced (no cost yet) contribute zero.
#[must_use]
pub fn furniture_line_cost(item: &furniture::Model) -> f64 {
    usable(item.cost)
}

/// Sums the material lines of a project. Empty lists yield zero.
#[must_use]
pub fn total_materials_cost(materials: &[material::Model]) -> f64 {
    materials.iter().map(material_line_cost).sum()
}

/// Sums the furniture lines of a project. Empty lists yield zero.
#[must_use]
pub fn total_furniture_cost(pieces: &[furniture::Model]) -> f64 {
    pieces.iter().map(furniture_line_cost).sum()
}

/// Builds the budget summary for one project snapshot.
///
/// Passing `None` for the project yields [`ProjectBudget::Unavailable`], which
/// keeps "nothing computed yet" distinct from "computed as zero". The usage
/// percentage is only present when the ceiling is set, finite, and strictly
/// positive.
#[must_use]
pub fn build_budget_summary(
    project: Option<&project::Model>,
    materials: &[material::Model],
    furniture: &[furniture::Model],
) -> ProjectBudget {
    let Some(project) = project else {
        return ProjectBudget::Unavailable;
    };

    let total_materials = total_materials_cost(materials);
    let total_furniture = total_furniture_cost(furniture);
    let total_estimated = total_materials + total_furniture;

    let budget_usage_percent = match project.budget_max {
        Some(max) if max.is_finite() && max > 0.0 => Some(total_estimated / max * 100.0),
        _ => None,
    };

    ProjectBudget::Computed(BudgetSummary {
        total_materials_cost: total_materials,
        total_furniture_cost: total_furniture,
        total_estimated_cost: total_estimated,
        budget_max: project.budget_max,
        budget_usage_percent,
    })
}

/// Loads a project's current line items and builds its budget summary.
///
/// A project id that matches nothing yields [`ProjectBudget::Unavailable`]
/// rather than an error, mirroring the pure builder.
pub async fn budget_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<ProjectBudget> {
    let Some(project) = project_ops::get_project_by_id(db, project_id).await? else {
        return Ok(ProjectBudget::Unavailable);
    };

    let materials = material_ops::get_materials_for_project(db, project_id).await?;
    let furniture = furniture_ops::get_furniture_for_project(db, project_id).await?;

    Ok(build_budget_summary(Some(&project), &materials, &furniture))
}
