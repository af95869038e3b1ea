//! Visit Form
//!
//! Draft for creating or editing a visit.

use chrono::{NaiveDate, NaiveTime};

use crate::api::{self, ApiClient, Transport};
use crate::error::{SubmitError, ValidationError};
use crate::models::{Caregiver, MedicationStatus, Visit, VisitMedication, VisitPayload, VisitStatus, VisitTask};
use super::{is_blank, optional_text};

pub const VISIT_CREATED: &str = "Visit scheduled successfully.";
pub const VISIT_UPDATED: &str = "Visit updated successfully.";

/// Raw form fields, as typed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisitDraft {
    pub caregiver: String,
    pub patient: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub status: VisitStatus,
    pub notes: String,
    pub tasks: Vec<VisitTask>,
    pub medications: Vec<VisitMedication>,
}

impl VisitDraft {
    /// Prefill from an existing visit
    pub fn from_visit(visit: &Visit) -> Self {
        Self {
            caregiver: visit.caregiver.id().to_string(),
            patient: visit.patient.id().to_string(),
            date: visit.day().to_string(),
            start_time: visit.start_time.clone(),
            end_time: visit.end_time.clone(),
            location: visit.location.clone().unwrap_or_default(),
            status: visit.status,
            notes: visit.notes.clone().unwrap_or_default(),
            tasks: visit.task_list.clone(),
            medications: visit.medication_list.clone(),
        }
    }

    pub fn add_task(&mut self) {
        self.tasks.push(VisitTask { id: None, task_name: String::new(), completed: false, notes: None });
    }

    pub fn add_medication(&mut self) {
        self.medications.push(VisitMedication {
            id: None,
            medication_name: String::new(),
            status: MedicationStatus::Pending,
            notes: None,
        });
    }

    pub fn remove_task(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.tasks.remove(index);
        }
    }

    pub fn remove_medication(&mut self, index: usize) {
        if index < self.medications.len() {
            self.medications.remove(index);
        }
    }

    /// Date and times when all three are filled, for the availability lookup
    pub fn slot(&self) -> Option<(&str, &str, &str)> {
        if is_blank(&self.date) || is_blank(&self.start_time) || is_blank(&self.end_time) {
            return None;
        }
        Some((self.date.trim(), self.start_time.trim(), self.end_time.trim()))
    }

    /// Clear the chosen caregiver when it is not among `shown`.
    /// Returns true if the choice was cleared.
    pub fn keep_caregiver_among(&mut self, shown: &[Caregiver]) -> bool {
        if self.caregiver.is_empty() || shown.iter().any(|c| c.id == self.caregiver) {
            return false;
        }
        self.caregiver.clear();
        true
    }

    /// Check required fields and formats; blank checklist rows are dropped
    pub fn validate(&self) -> Result<VisitPayload, ValidationError> {
        let required = [&self.caregiver, &self.patient, &self.date, &self.start_time, &self.end_time];
        if required.iter().any(|field| is_blank(field)) {
            return Err(ValidationError::MissingRequired);
        }

        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)?;
        let start = parse_time(&self.start_time)?;
        let end = parse_time(&self.end_time)?;
        if end <= start {
            return Err(ValidationError::EndBeforeStart);
        }

        Ok(VisitPayload {
            caregiver: self.caregiver.trim().to_string(),
            patient: self.patient.trim().to_string(),
            date: self.date.trim().to_string(),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            location: optional_text(&self.location),
            status: self.status,
            task_list: self
                .tasks
                .iter()
                .filter(|task| !is_blank(&task.task_name))
                .cloned()
                .collect(),
            medication_list: self
                .medications
                .iter()
                .filter(|med| !is_blank(&med.medication_name))
                .cloned()
                .collect(),
            notes: optional_text(&self.notes),
        })
    }
}

/// `<input type="time">` yields `HH:MM`, or `HH:MM:SS` with a seconds step
fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime)
}

/// Validate, then create (`editing == None`) or update the visit
pub async fn submit_visit<T: Transport>(
    api: &ApiClient<T>,
    draft: &VisitDraft,
    editing: Option<&str>,
) -> Result<Visit, SubmitError> {
    let payload = draft.validate()?;
    let visit = match editing {
        Some(id) => api::update_visit(api, id, &payload).await?,
        None => api::create_visit(api, &payload).await?,
    };
    log::info!("saved visit {}", visit.id);
    Ok(visit)
}
