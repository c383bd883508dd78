use chrono::{DateTime, Months, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::database::models::Thesis;

use super::{Clock, ThesisStatus};

/// Months that must elapse after department approval before any
/// committee-stage status may be requested.
const DEPARTMENT_WAIT_MONTHS: u32 = 3;

/// A requested mutation against an existing thesis, as parsed by the
/// handler layer. `None` fields were not supplied by the caller.
#[derive(Debug, Default, Clone)]
pub struct UpdateRequest {
    pub status: Option<ThesisStatus>,
    /// Date the status change is evaluated against. Falls back to the
    /// injected clock when absent.
    pub reference_date: Option<DateTime<Utc>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Path of a replacement file. Its presence also unlocks edits on a
    /// thesis whose status would otherwise forbid them.
    pub file_path: Option<String>,
    pub delegation_list: Option<String>,
}

/// Sparse field-set approved for persistence. `None` means "leave the
/// stored value untouched"; the store must never null out an absent field.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ThesisPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ThesisStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by_departament_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation_list: Option<String>,
}

impl ThesisPatch {
    pub fn is_empty(&self) -> bool {
        self == &ThesisPatch::default()
    }
}

/// Policy rejections from the lifecycle rules. The messages are surfaced
/// verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("Three months should pass after it gets approved by department.")]
    WaitingPeriodActive,
    #[error("You can't modify this thesis anymore.")]
    EditLocked,
}

/// Validate a requested update against the stored snapshot and produce the
/// sparse field-set to persist.
///
/// Rule order matters:
/// 1. A committee-stage status request is blocked until three months have
///    passed since department approval. A thesis that was never
///    department-approved has no deadline to violate, so the gate cannot
///    fire for it.
/// 2. A status change maps onto its milestone timestamp, stamped with the
///    resolved reference date.
/// 3. Without a status change, edits are allowed only while the thesis is
///    still in a pre-approval state, unless a replacement file is supplied.
///
/// Only the three named statuses carry the timing gate and the edit lock
/// applies only to status-less updates. The enum ordering is deliberately
/// not enforced as a total order over transitions.
pub fn plan_update(
    current: &Thesis,
    request: &UpdateRequest,
    clock: &dyn Clock,
) -> Result<ThesisPatch, LifecycleError> {
    let reference = request.reference_date.unwrap_or_else(|| clock.now());
    let mut patch = ThesisPatch::default();

    if let Some(status) = request.status {
        if status.is_committee_stage() {
            if let Some(approved) = current.approved_by_departament_date {
                let deadline = approved
                    .checked_add_months(Months::new(DEPARTMENT_WAIT_MONTHS))
                    .unwrap_or(DateTime::<Utc>::MAX_UTC);
                if deadline > reference {
                    return Err(LifecycleError::WaitingPeriodActive);
                }
            }
        }

        match status {
            ThesisStatus::AprovuarDepartamenti => {
                patch.approved_by_departament_date = Some(reference);
            }
            ThesisStatus::KomisioniICaktuar => {
                patch.delegation_date = Some(reference);
            }
            ThesisStatus::EKryer => {
                patch.published_date = Some(reference);
            }
            _ => {}
        }
        patch.status = Some(status);
    } else if !current.status.allows_plain_edits() && non_empty(&request.file_path).is_none() {
        return Err(LifecycleError::EditLocked);
    }

    patch.title = non_empty(&request.title);
    patch.description = non_empty(&request.description);
    patch.category = non_empty(&request.category);
    patch.file_path = non_empty(&request.file_path);
    patch.delegation_list = non_empty(&request.delegation_list);

    Ok(patch)
}

/// Empty or whitespace-only strings count as absent under the sparse
/// update contract.
fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
