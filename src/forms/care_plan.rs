//! Care Plan Form

use crate::api::{self, ApiClient, Transport};
use crate::error::{SubmitError, ValidationError};
use crate::models::{CarePlan, CarePlanGoal, CarePlanPayload, GoalStatus};
use super::{is_blank, optional_text};

pub const CARE_PLAN_CREATED: &str = "Care plan created successfully.";

#[derive(Debug, Clone, PartialEq)]
pub struct CarePlanDraft {
    pub patient: String,
    pub title: String,
    pub description: String,
    pub goals: Vec<CarePlanGoal>,
}

impl Default for CarePlanDraft {
    /// Starts with one empty goal row
    fn default() -> Self {
        Self {
            patient: String::new(),
            title: String::new(),
            description: String::new(),
            goals: vec![empty_goal()],
        }
    }
}

fn empty_goal() -> CarePlanGoal {
    CarePlanGoal { goal: String::new(), status: GoalStatus::NotStarted }
}

impl CarePlanDraft {
    pub fn add_goal(&mut self) {
        self.goals.push(empty_goal());
    }

    /// Remove a goal row; the last remaining row stays
    pub fn remove_goal(&mut self, index: usize) {
        if index < self.goals.len() && self.goals.len() > 1 {
            self.goals.remove(index);
        }
    }

    pub fn set_goal_text(&mut self, index: usize, text: String) {
        if let Some(goal) = self.goals.get_mut(index) {
            goal.goal = text;
        }
    }

    pub fn validate(&self) -> Result<CarePlanPayload, ValidationError> {
        if is_blank(&self.patient) || is_blank(&self.title) {
            return Err(ValidationError::MissingRequired);
        }
        if let Some(index) = self.goals.iter().position(|g| is_blank(&g.goal)) {
            return Err(ValidationError::EmptyGoal { index });
        }

        Ok(CarePlanPayload {
            patient: self.patient.trim().to_string(),
            title: self.title.trim().to_string(),
            description: optional_text(&self.description),
            goals: self
                .goals
                .iter()
                .map(|g| CarePlanGoal { goal: g.goal.trim().to_string(), status: g.status })
                .collect(),
        })
    }
}

pub async fn submit_care_plan<T: Transport>(
    api: &ApiClient<T>,
    draft: &CarePlanDraft,
) -> Result<CarePlan, SubmitError> {
    let payload = draft.validate()?;
    let plan = api::create_care_plan(api, &payload).await?;
    log::info!("created care plan {}", plan.id);
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{assert_call, client, RecordingTransport};
    use crate::api::Method;
    use futures::executor::block_on;
    use serde_json::json;

    fn filled(goals: &[&str]) -> CarePlanDraft {
        CarePlanDraft {
            patient: "p1".into(),
            title: "Mobility".into(),
            description: String::new(),
            goals: goals
                .iter()
                .map(|g| CarePlanGoal { goal: g.to_string(), status: GoalStatus::NotStarted })
                .collect(),
        }
    }

    #[test]
    fn test_empty_goal_at_any_index_blocks() {
        for index in 0..3 {
            let mut texts = vec!["Walk daily", "Stretch", "Hydrate"];
            texts[index] = "   ";
            let draft = filled(&texts);
            let transport = RecordingTransport::new();

            let err = block_on(submit_care_plan(&client(transport.clone()), &draft)).unwrap_err();

            assert_eq!(err, SubmitError::Invalid(ValidationError::EmptyGoal { index }));
            assert!(transport.requests().is_empty());
        }
    }

    #[test]
    fn test_patient_and_title_required() {
        let mut draft = filled(&["Walk"]);
        draft.title = " ".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequired));

        let mut draft = filled(&["Walk"]);
        draft.patient.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn test_goal_editing() {
        let mut draft = CarePlanDraft::default();
        assert_eq!(draft.goals.len(), 1);
        draft.add_goal();
        draft.set_goal_text(1, "Sleep 8h".into());
        draft.remove_goal(0);
        draft.remove_goal(5);
        assert_eq!(draft.goals.len(), 1);
        assert_eq!(draft.goals[0].goal, "Sleep 8h");

        draft.remove_goal(0);
        assert_eq!(draft.goals.len(), 1);
        assert_eq!(draft.goals[0].goal, "Sleep 8h");
    }

    #[test]
    fn test_submit_posts_trimmed_goals() {
        let transport = RecordingTransport::new().respond(
            201,
            json!({ "_id": "cp1", "patient": "p1", "title": "Mobility", "goals": [] }),
        );
        block_on(submit_care_plan(&client(transport.clone()), &filled(&[" Walk daily "]))).unwrap();

        let request = transport.single();
        assert_call(&request, Method::Post, "/wellness/care-plan");
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["goals"][0]["goal"], "Walk daily");
        assert!(body.get("description").is_none());
    }
}
