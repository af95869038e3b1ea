//! List Page Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on list pages,
//! plus the plain helpers those pages use to patch lists in place.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CarePlan, GoalStatus, Resource, ResourceCategory, Visit};

/// Anything listed by server id
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Visit {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Resource {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Remove the entry with `id`; true if something was removed
pub fn remove_by_id<T: Identified>(list: &mut Vec<T>, id: &str) -> bool {
    let before = list.len();
    list.retain(|entry| entry.id() != id);
    list.len() != before
}

/// Record a goal status the server accepted
pub fn set_goal_status(plans: &mut [CarePlan], plan_id: &str, index: usize, status: GoalStatus) -> bool {
    plans
        .iter_mut()
        .find(|plan| plan.id == plan_id)
        .and_then(|plan| plan.goals.get_mut(index))
        .map(|goal| goal.status = status)
        .is_some()
}

pub fn filter_by_category(resources: &[Resource], category: Option<ResourceCategory>) -> Vec<Resource> {
    resources
        .iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .cloned()
        .collect()
}

// ========================
// Stores
// ========================

/// State of the visit list page
#[derive(Clone, Debug, Default, Store)]
pub struct VisitBoard {
    pub visits: Vec<Visit>,
    /// Showing `/visits/today` instead of every visit
    pub today_only: bool,
}

/// State of the resource list page
#[derive(Clone, Debug, Default, Store)]
pub struct ResourceShelf {
    pub resources: Vec<Resource>,
    pub category: Option<ResourceCategory>,
}

pub fn store_remove_visit(store: &Store<VisitBoard>, id: &str) {
    remove_by_id(&mut store.visits().write(), id);
}

pub fn store_remove_resource(store: &Store<ResourceShelf>, id: &str) {
    remove_by_id(&mut store.resources().write(), id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str, category: ResourceCategory) -> Resource {
        Resource {
            id: id.to_string(),
            title: format!("Resource {}", id),
            description: None,
            link: "https://example.org".into(),
            category,
        }
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut list = vec![
            resource("r1", ResourceCategory::Diet),
            resource("r2", ResourceCategory::Mental),
            resource("r3", ResourceCategory::Diet),
        ];

        assert!(remove_by_id(&mut list, "r2"));
        let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);

        assert!(!remove_by_id(&mut list, "missing"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_set_goal_status() {
        use crate::models::{CarePlanGoal, PersonRef};

        let mut plans = vec![CarePlan {
            id: "cp1".into(),
            patient: PersonRef::Id("p1".into()),
            title: "Mobility".into(),
            description: None,
            goals: vec![
                CarePlanGoal { goal: "Walk".into(), status: GoalStatus::NotStarted },
                CarePlanGoal { goal: "Stretch".into(), status: GoalStatus::NotStarted },
            ],
        }];

        assert!(set_goal_status(&mut plans, "cp1", 1, GoalStatus::Achieved));
        assert_eq!(plans[0].goals[1].status, GoalStatus::Achieved);
        assert_eq!(plans[0].goals[0].status, GoalStatus::NotStarted);
        assert_eq!(plans[0].achieved_count(), 1);

        assert!(!set_goal_status(&mut plans, "cp1", 5, GoalStatus::Achieved));
        assert!(!set_goal_status(&mut plans, "cp9", 0, GoalStatus::Achieved));
    }

    #[test]
    fn test_category_filter() {
        let list = vec![resource("r1", ResourceCategory::Diet), resource("r2", ResourceCategory::Mental)];
        assert_eq!(filter_by_category(&list, None).len(), 2);
        let diet = filter_by_category(&list, Some(ResourceCategory::Diet));
        assert_eq!(diet.len(), 1);
        assert_eq!(diet[0].id, "r1");
    }
}
