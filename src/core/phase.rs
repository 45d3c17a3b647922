//! Workflow phase business logic - progress tracking and phase management.
//!
//! Phases model the studio's engagement workflow (brief, technical visit,
//! concept design, execution plans). Their order is the explicit `sequence`
//! column, never alphabetical. Completion percentages are clamped to [0, 100]
//! both on write and on read, because rows can be edited outside this crate.
//! The overall project completion is the mean of the phase percentages and is
//! absent, not zero, when a project has no phases yet.

use crate::{
    config::settings::PhaseTemplate,
    entities::{Phase, phase},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Derived lifecycle state of a phase, for display annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    /// Nothing done yet (0%)
    NotStarted,
    /// Somewhere in between
    InProgress,
    /// Fully done (100%)
    Complete,
}

/// A phase annotated for display: the record, its clamped completion, and the
/// lifecycle state derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseProgress {
    /// The underlying phase record
    pub phase: phase::Model,
    /// Completion percentage, guaranteed to be in [0, 100]
    pub completion: f64,
    /// Lifecycle state derived from the clamped completion
    pub status: PhaseStatus,
}

/// Clamps a completion percentage into [0, 100].
///
/// Out-of-range values are corrected rather than rejected, since they come
/// from edits outside this crate's control. Non-finite values collapse to 0.
#[must_use]
pub fn clamp_completion(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Derives the lifecycle state for a clamped completion percentage.
#[must_use]
pub fn phase_status(completion: f64) -> PhaseStatus {
    if completion >= 100.0 {
        PhaseStatus::Complete
    } else if completion > 0.0 {
        PhaseStatus::InProgress
    } else {
        PhaseStatus::NotStarted
    }
}

/// Annotates a phase list for display, preserving the given order.
///
/// The input order is meaningful (workflow sequence) and is carried through
/// untouched; each percentage is clamped and tagged with its lifecycle state.
#[must_use]
pub fn track_phases(phases: &[phase::Model]) -> Vec<PhaseProgress> {
    phases
        .iter()
        .map(|p| {
            let completion = clamp_completion(p.completion_percentage);
            PhaseProgress {
                phase: p.clone(),
                completion,
                status: phase_status(completion),
            }
        })
        .collect()
}

/// Overall project completion: the arithmetic mean of the clamped phase
/// percentages, or `None` when the project has no phases yet.
///
/// `None` keeps "no phases defined" distinct from a genuine 0% - an empty
/// list never produces a fake zero or a NaN.
#[must_use]
pub fn overall_completion(phases: &[phase::Model]) -> Option<f64> {
    if phases.is_empty() {
        return None;
    }

    let sum: f64 = phases
        .iter()
        .map(|p| clamp_completion(p.completion_percentage))
        .sum();

    // Cast safety: phase lists are tiny, far below f64's integer precision.
    #[allow(clippy::cast_precision_loss)]
    let count = phases.len() as f64;

    Some(sum / count)
}

/// Retrieves a project's phases in workflow order (ascending `sequence`).
pub async fn get_phases_for_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<phase::Model>> {
    Phase::find()
        .filter(phase::Column::ProjectId.eq(project_id))
        .order_by_asc(phase::Column::Sequence)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new phase at the given workflow position, starting at 0%.
pub async fn create_phase(
    db: &DatabaseConnection,
    project_id: i64,
    name: String,
    description: Option<String>,
    sequence: i32,
) -> Result<phase::Model> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Phase name cannot be empty".to_string(),
        });
    }

    let phase = phase::ActiveModel {
        project_id: Set(project_id),
        name: Set(name.trim().to_string()),
        description: Set(description),
        sequence: Set(sequence),
        completion_percentage: Set(0.0),
        ..Default::default()
    };

    phase.insert(db).await.map_err(Into::into)
}

/// Updates a phase's completion percentage, clamping it into [0, 100].
///
/// Out-of-range input is corrected, not rejected; staff tools routinely send
/// 105 after a sloppy edit and the intent is obviously "done".
pub async fn update_phase_completion(
    db: &DatabaseConnection,
    phase_id: i64,
    completion_percentage: f64,
) -> Result<phase::Model> {
    let phase = Phase::find_by_id(phase_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::PhaseNotFound {
            reference: phase_id.to_string(),
        })?;

    let mut active: phase::ActiveModel = phase.into();
    active.completion_percentage = Set(clamp_completion(completion_percentage));

    active.update(db).await.map_err(Into::into)
}

/// Seeds a new project's phase list from the configured workflow templates.
///
/// Templates are created in order with consecutive sequence numbers, each at
/// 0% completion. Returns the created phases in workflow order.
pub async fn seed_project_phases(
    db: &DatabaseConnection,
    project_id: i64,
    templates: &[PhaseTemplate],
) -> Result<Vec<phase::Model>> {
    let mut created = Vec::with_capacity(templates.len());

    for (index, template) in templates.iter().enumerate() {
        let sequence = i32::try_from(index).unwrap_or(i32::MAX);
        let phase = create_phase(
            db,
            project_id,
            template.name.clone(),
            template.description.clone(),
            sequence,
        )
        .await?;
        created.push(phase);
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::config::settings::Settings;
    use crate::test_utils::{create_test_phase, setup_with_project};

    fn phase_with(name: &str, sequence: i32, completion: f64) -> phase::Model {
        phase::Model {
            id: i64::from(sequence),
            project_id: 0,
            name: name.to_string(),
            description: None,
            sequence,
            completion_percentage: completion,
        }
    }

    #[test]
    fn test_clamp_completion_corrects_out_of_range_values() {
        assert_eq!(clamp_completion(-5.0), 0.0);
        assert_eq!(clamp_completion(140.0), 100.0);
        assert_eq!(clamp_completion(62.5), 62.5);
        assert_eq!(clamp_completion(f64::NAN), 0.0);
        assert_eq!(clamp_completion(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_phase_status_boundaries() {
        assert_eq!(phase_status(0.0), PhaseStatus::NotStarted);
        assert_eq!(phase_status(0.1), PhaseStatus::InProgress);
        assert_eq!(phase_status(99.9), PhaseStatus::InProgress);
        assert_eq!(phase_status(100.0), PhaseStatus::Complete);
    }

    #[test]
    fn test_track_phases_preserves_order_and_clamps() {
        let phases = vec![
            phase_with("Brief", 0, 140.0),
            phase_with("Technical visit", 1, -5.0),
            phase_with("Concept design", 2, 50.0),
        ];

        let tracked = track_phases(&phases);

        assert_eq!(tracked.len(), 3);
        assert_eq!(tracked[0].phase.name, "Brief");
        assert_eq!(tracked[0].completion, 100.0);
        assert_eq!(tracked[0].status, PhaseStatus::Complete);
        assert_eq!(tracked[1].phase.name, "Technical visit");
        assert_eq!(tracked[1].completion, 0.0);
        assert_eq!(tracked[1].status, PhaseStatus::NotStarted);
        assert_eq!(tracked[2].completion, 50.0);
        assert_eq!(tracked[2].status, PhaseStatus::InProgress);
    }

    #[test]
    fn test_overall_completion_is_mean_of_clamped_values() {
        let phases = vec![
            phase_with("Brief", 0, 100.0),
            phase_with("Technical visit", 1, 50.0),
            phase_with("Concept design", 2, 150.0),
        ];

        // 150 clamps to 100, so the mean is (100 + 50 + 100) / 3
        assert_eq!(overall_completion(&phases), Some(250.0 / 3.0));
    }

    #[test]
    fn test_overall_completion_is_absent_for_empty_list() {
        assert_eq!(overall_completion(&[]), None);
    }

    #[tokio::test]
    async fn test_phases_come_back_in_sequence_order() -> Result<()> {
        let (db, project) = setup_with_project().await?;

        // Insert out of order; sequence must win over insertion or name order
        create_test_phase(&db, project.id, "Zebra finishing", 2).await?;
        create_test_phase(&db, project.id, "Brief", 0).await?;
        create_test_phase(&db, project.id, "Technical visit", 1).await?;

        let phases = get_phases_for_project(&db, project.id).await?;

        let names: Vec<&str> = phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Brief", "Technical visit", "Zebra finishing"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_phase_completion_clamps_on_ingestion() -> Result<()> {
        let (db, project) = setup_with_project().await?;
        let phase = create_test_phase(&db, project.id, "Brief", 0).await?;

        let updated = update_phase_completion(&db, phase.id, 150.0).await?;
        assert_eq!(updated.completion_percentage, 100.0);

        let updated = update_phase_completion(&db, phase.id, -20.0).await?;
        assert_eq!(updated.completion_percentage, 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_phase_fails() -> Result<()> {
        let (db, _project) = setup_with_project().await?;

        let result = update_phase_completion(&db, 999, 50.0).await;
        assert!(matches!(result, Err(Error::PhaseNotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_project_phases_follows_templates() -> Result<()> {
        let (db, project) = setup_with_project().await?;
        let settings = Settings::default();

        let created = seed_project_phases(&db, project.id, &settings.phases).await?;

        assert_eq!(created.len(), settings.phases.len());
        for (index, phase) in created.iter().enumerate() {
            assert_eq!(phase.name, settings.phases[index].name);
            assert_eq!(phase.sequence, i32::try_from(index).unwrap_or(i32::MAX));
            assert_eq!(phase.completion_percentage, 0.0);
        }

        let stored = get_phases_for_project(&db, project.id).await?;
        assert_eq!(stored.len(), created.len());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_phase_rejects_blank_name() -> Result<()> {
        let (db, project) = setup_with_project().await?;

        let result = create_phase(&db, project.id, "   ".to_string(), None, 0).await;
        assert!(matches!(result, Err(Error::Config { .. })));

        Ok(())
    }
}
