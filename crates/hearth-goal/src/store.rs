// store.rs — GoalStore: the authoritative owner of goals and completions.
//
// The store is an explicit, instantiable object — no module-level
// singleton — so tests run in isolation and multiple instances can
// coexist. State lives in two in-memory collections; there is no
// persistence in scope, and every operation is synchronous.
//
// Lifecycle: Pending --complete--> Completed --revert--> Pending.
// Delete removes the entity outright rather than transitioning it.

use chrono::Utc;
use uuid::Uuid;

use crate::error::GoalError;
use crate::types::{
    Assignee, AssigneeFilter, Completion, Goal, GoalDraft, GoalPatch, GoalStatus,
};

/// In-memory store for goals and their completion history.
#[derive(Debug, Default)]
pub struct GoalStore {
    goals: Vec<Goal>,
    completions: Vec<Completion>,
}

impl GoalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing data.
    pub fn with_data(goals: Vec<Goal>, completions: Vec<Completion>) -> Self {
        Self { goals, completions }
    }

    /// List goals passing the assignee filter, sorted ascending by due
    /// date. Returns a snapshot copy; an empty store yields an empty list.
    pub fn list(&self, filter: AssigneeFilter) -> Vec<Goal> {
        let mut goals: Vec<Goal> = self
            .goals
            .iter()
            .filter(|g| filter.matches(g.assignee))
            .cloned()
            .collect();
        // Stable sort: goals sharing a due date keep insertion order.
        goals.sort_by_key(|g| g.due_date);
        goals
    }

    /// Get a specific goal by id.
    pub fn get(&self, id: Uuid) -> Result<Goal, GoalError> {
        self.goals
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(GoalError::NotFound(id))
    }

    /// Create a new goal from a draft.
    ///
    /// Validates that the title is non-blank and that assignee, category,
    /// and due date are present; all missing fields are reported in one
    /// [`GoalError::Validation`]. The new goal starts Pending with
    /// `created_at == updated_at`.
    pub fn create(&mut self, draft: GoalDraft) -> Result<Goal, GoalError> {
        let (Some(assignee), Some(category), Some(due_date)) =
            (draft.assignee, draft.category, draft.due_date)
        else {
            return Err(Self::missing_fields(&draft));
        };
        if draft.title.trim().is_empty() {
            return Err(Self::missing_fields(&draft));
        }

        let now = Utc::now();
        let goal = Goal {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            assignee,
            category,
            due_date,
            due_time: draft.due_time,
            status: GoalStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        tracing::debug!(goal_id = %goal.id, title = %goal.title, "goal created");
        self.goals.push(goal.clone());
        Ok(goal)
    }

    /// Every required creation field that is missing or invalid, as one
    /// validation error.
    fn missing_fields(draft: &GoalDraft) -> GoalError {
        let mut fields = Vec::new();
        if draft.title.trim().is_empty() {
            fields.push("title");
        }
        if draft.assignee.is_none() {
            fields.push("assignee");
        }
        if draft.category.is_none() {
            fields.push("category");
        }
        if draft.due_date.is_none() {
            fields.push("due_date");
        }
        GoalError::Validation { fields }
    }

    /// Merge a partial update into an existing goal and re-stamp
    /// `updated_at`. Status is never touched here.
    pub fn update(&mut self, id: Uuid, patch: GoalPatch) -> Result<Goal, GoalError> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(GoalError::NotFound(id))?;

        if let Some(title) = patch.title {
            goal.title = title;
        }
        if let Some(description) = patch.description {
            goal.description = description;
        }
        if let Some(assignee) = patch.assignee {
            goal.assignee = assignee;
        }
        if let Some(category) = patch.category {
            goal.category = category;
        }
        if let Some(due_date) = patch.due_date {
            goal.due_date = due_date;
        }
        if let Some(due_time) = patch.due_time {
            goal.due_time = due_time;
        }
        goal.updated_at = Utc::now();
        tracing::debug!(goal_id = %id, "goal updated");
        Ok(goal.clone())
    }

    /// Remove a goal and its completion records.
    ///
    /// Idempotent: deleting an unknown id is a no-op, not an error.
    /// Returns whether a goal was actually removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        let removed = self.goals.len() != before;
        if removed {
            // Cascade: completion history has no consumer once the goal
            // itself is gone.
            self.completions.retain(|c| c.goal_id != id);
            tracing::debug!(goal_id = %id, "goal deleted");
        }
        removed
    }

    /// Mark a goal completed and record who closed it out.
    ///
    /// Rejects a goal that is already completed — the lifecycle has no
    /// Completed → Completed edge, and a second record would corrupt the
    /// completion history.
    pub fn complete(&mut self, id: Uuid, completed_by: Assignee) -> Result<Goal, GoalError> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(GoalError::NotFound(id))?;

        if goal.status == GoalStatus::Completed {
            tracing::warn!(goal_id = %id, "complete called on already-completed goal");
            return Err(GoalError::AlreadyCompleted(id));
        }

        let now = Utc::now();
        goal.status = GoalStatus::Completed;
        goal.updated_at = now;
        self.completions.push(Completion {
            id: Uuid::new_v4(),
            goal_id: id,
            completed_at: now,
            completed_by,
        });
        tracing::debug!(goal_id = %id, by = %completed_by, "goal completed");
        Ok(goal.clone())
    }

    /// Move a completed goal back to Pending and drop every completion
    /// record that references it.
    pub fn revert(&mut self, id: Uuid) -> Result<Goal, GoalError> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(GoalError::NotFound(id))?;

        goal.status = GoalStatus::Pending;
        goal.updated_at = Utc::now();
        self.completions.retain(|c| c.goal_id != id);
        tracing::debug!(goal_id = %id, "goal reverted");
        Ok(goal.clone())
    }

    /// The most recent completion for a goal, if any.
    pub fn completion_for(&self, goal_id: Uuid) -> Option<Completion> {
        self.completions
            .iter()
            .filter(|c| c.goal_id == goal_id)
            .max_by_key(|c| c.completed_at)
            .cloned()
    }

    /// Read-only snapshot of the completion history, for aggregation.
    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    /// Number of goals currently stored (any status).
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Whether the store holds no goals.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}
