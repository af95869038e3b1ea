//! Frontend Models
//!
//! Data structures matching the REST backend, plus the payloads sent back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ========================
// People
// ========================

/// Caregiver or patient as listed by the directory endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

pub type Caregiver = Person;
pub type Patient = Person;

/// Reference to a person: either a bare id or the populated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersonRef {
    Id(String),
    Populated(Person),
}

impl PersonRef {
    pub fn id(&self) -> &str {
        match self {
            PersonRef::Id(id) => id,
            PersonRef::Populated(person) => &person.id,
        }
    }

    /// Name when populated, otherwise the raw id
    pub fn display_name(&self) -> &str {
        match self {
            PersonRef::Populated(person) if !person.name.is_empty() => &person.name,
            _ => self.id(),
        }
    }
}

// ========================
// Enumerations
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    #[serde(other)]
    Other,
}

impl VisitStatus {
    pub const ALL: [VisitStatus; 4] = [
        VisitStatus::Scheduled,
        VisitStatus::InProgress,
        VisitStatus::Completed,
        VisitStatus::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "scheduled",
            VisitStatus::InProgress => "in_progress",
            VisitStatus::Completed => "completed",
            VisitStatus::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "Scheduled",
            VisitStatus::InProgress => "In progress",
            VisitStatus::Completed => "Completed",
            VisitStatus::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == value).unwrap_or(VisitStatus::Other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    #[default]
    Pending,
    Given,
    Missed,
    Refused,
    #[serde(other)]
    Other,
}

impl MedicationStatus {
    pub const ALL: [MedicationStatus; 5] = [
        MedicationStatus::Pending,
        MedicationStatus::Given,
        MedicationStatus::Missed,
        MedicationStatus::Refused,
        MedicationStatus::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MedicationStatus::Pending => "pending",
            MedicationStatus::Given => "given",
            MedicationStatus::Missed => "missed",
            MedicationStatus::Refused => "refused",
            MedicationStatus::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MedicationStatus::Pending => "Pending",
            MedicationStatus::Given => "Given",
            MedicationStatus::Missed => "Missed",
            MedicationStatus::Refused => "Refused",
            MedicationStatus::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == value).unwrap_or(MedicationStatus::Other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Achieved,
    #[serde(other)]
    Other,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 4] = [
        GoalStatus::NotStarted,
        GoalStatus::InProgress,
        GoalStatus::Achieved,
        GoalStatus::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "not_started",
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Achieved => "achieved",
            GoalStatus::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "Not started",
            GoalStatus::InProgress => "In progress",
            GoalStatus::Achieved => "Achieved",
            GoalStatus::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == value).unwrap_or(GoalStatus::Other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Diet,
    Mental,
    Exercise,
    #[default]
    #[serde(other)]
    Other,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 4] = [
        ResourceCategory::Diet,
        ResourceCategory::Mental,
        ResourceCategory::Exercise,
        ResourceCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceCategory::Diet => "diet",
            ResourceCategory::Mental => "mental",
            ResourceCategory::Exercise => "exercise",
            ResourceCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceCategory::Diet => "Diet",
            ResourceCategory::Mental => "Mental health",
            ResourceCategory::Exercise => "Exercise",
            ResourceCategory::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL.into_iter().find(|c| c.as_str() == value).unwrap_or(ResourceCategory::Other)
    }
}

// ========================
// Visits
// ========================

/// One task on a visit checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitTask {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub task_name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One medication to administer during a visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitMedication {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub medication_name: String,
    #[serde(default)]
    pub status: MedicationStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Scheduled caregiver-patient appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub caregiver: PersonRef,
    pub patient: PersonRef,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: VisitStatus,
    #[serde(default)]
    pub task_list: Vec<VisitTask>,
    #[serde(default)]
    pub medication_list: Vec<VisitMedication>,
    #[serde(default)]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_in_location: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out_location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Visit {
    /// Calendar date without any time component the backend may append
    pub fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }

    pub fn tasks_done(&self) -> usize {
        self.task_list.iter().filter(|t| t.completed).count()
    }
}

/// Body for creating or fully updating a visit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitPayload {
    pub caregiver: String,
    pub patient: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: VisitStatus,
    pub task_list: Vec<VisitTask>,
    pub medication_list: Vec<VisitMedication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update used for quick status changes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitStatusPatch {
    pub status: VisitStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicationUpdate {
    pub status: MedicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ========================
// Wellness
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarePlanGoal {
    pub goal: String,
    #[serde(default)]
    pub status: GoalStatus,
}

/// Goal-oriented wellness plan for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarePlan {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub patient: PersonRef,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub goals: Vec<CarePlanGoal>,
}

impl CarePlan {
    pub fn achieved_count(&self) -> usize {
        self.goals.iter().filter(|g| g.status == GoalStatus::Achieved).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarePlanPayload {
    pub patient: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub goals: Vec<CarePlanGoal>,
}

/// Body of `PUT /wellness/care-plan/goal`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub care_plan_id: String,
    pub goal_index: usize,
    pub status: GoalStatus,
}

/// Categorized link to external wellness material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub link: String,
    #[serde(default)]
    pub category: ResourceCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourcePayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub link: String,
    pub category: ResourceCategory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_visit_with_populated_refs() {
        let visit: Visit = serde_json::from_value(json!({
            "_id": "v1",
            "caregiver": { "_id": "c1", "name": "Ana Ruiz" },
            "patient": "p9",
            "date": "2024-05-02T00:00:00.000Z",
            "startTime": "09:00",
            "endTime": "10:30",
            "status": "in_progress",
            "taskList": [
                { "_id": "t1", "taskName": "Bathing", "completed": true },
                { "taskName": "Lunch", "completed": false, "notes": "low salt" }
            ],
            "medicationList": [
                { "_id": "m1", "medicationName": "Metformin", "status": "given" }
            ],
            "checkInTime": "2024-05-02T09:02:00Z",
            "checkInLocation": "Front door"
        }))
        .unwrap();

        assert_eq!(visit.caregiver.display_name(), "Ana Ruiz");
        assert_eq!(visit.patient.id(), "p9");
        assert_eq!(visit.patient.display_name(), "p9");
        assert_eq!(visit.day(), "2024-05-02");
        assert_eq!(visit.status, VisitStatus::InProgress);
        assert_eq!(visit.tasks_done(), 1);
        assert_eq!(visit.task_list[1].id, None);
        assert_eq!(visit.medication_list[0].status, MedicationStatus::Given);
        assert!(visit.check_in_time.is_some());
        assert!(visit.check_out_time.is_none());
    }

    #[test]
    fn test_unknown_enum_values_become_other() {
        let resource: Resource = serde_json::from_value(json!({
            "id": "r1",
            "title": "Sleep hygiene",
            "link": "https://example.org/sleep",
            "category": "sleep"
        }))
        .unwrap();
        assert_eq!(resource.category, ResourceCategory::Other);

        let status: VisitStatus = serde_json::from_value(json!("cancelled")).unwrap();
        assert_eq!(status, VisitStatus::Other);
    }

    #[test]
    fn test_payload_shape() {
        let payload = VisitPayload {
            caregiver: "c1".into(),
            patient: "p1".into(),
            date: "2024-05-02".into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            location: None,
            status: VisitStatus::Scheduled,
            task_list: vec![VisitTask { id: None, task_name: "Walk".into(), completed: false, notes: None }],
            medication_list: vec![],
            notes: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["startTime"], "09:00");
        assert_eq!(value["status"], "scheduled");
        assert_eq!(value["taskList"][0]["taskName"], "Walk");
        assert!(value["taskList"][0].get("_id").is_none());
        assert!(value.get("location").is_none());

        let goal = serde_json::to_value(GoalUpdate {
            care_plan_id: "cp1".into(),
            goal_index: 2,
            status: GoalStatus::Achieved,
        })
        .unwrap();
        assert_eq!(goal, json!({ "carePlanId": "cp1", "goalIndex": 2, "status": "achieved" }));
    }

    #[test]
    fn test_parse_round_trips_known_values() {
        for status in VisitStatus::ALL {
            assert_eq!(VisitStatus::parse(status.as_str()), status);
        }
        for category in ResourceCategory::ALL {
            assert_eq!(ResourceCategory::parse(category.as_str()), category);
        }
        assert_eq!(GoalStatus::parse("nope"), GoalStatus::Other);
        assert_eq!(MedicationStatus::parse("refused"), MedicationStatus::Refused);
    }
}
