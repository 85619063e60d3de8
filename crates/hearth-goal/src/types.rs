// types.rs — Domain records: Goal, Completion, and their option sets.
//
// The assignee and category option sets are closed — no dynamic extension.
// The query-side "everyone" value lives in a separate AssigneeFilter type
// so that it can never end up stored on a goal.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A household member a goal can be assigned to.
///
/// `Family` is a real stored assignee for shared goals, not a filter
/// sentinel — "show me everything" is expressed with
/// [`AssigneeFilter::Everyone`] instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Assignee {
    /// The whole household together (shared goals).
    Family,
    Eun,
    Mirang,
    Jaeseong,
}

impl Assignee {
    /// All stored assignees, in display order.
    pub const ALL: [Assignee; 4] = [
        Assignee::Family,
        Assignee::Eun,
        Assignee::Mirang,
        Assignee::Jaeseong,
    ];

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            Assignee::Family => "Family",
            Assignee::Eun => "Eun",
            Assignee::Mirang => "Mirang",
            Assignee::Jaeseong => "Jaeseong",
        }
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignee::Family => write!(f, "family"),
            Assignee::Eun => write!(f, "eun"),
            Assignee::Mirang => write!(f, "mirang"),
            Assignee::Jaeseong => write!(f, "jaeseong"),
        }
    }
}

impl FromStr for Assignee {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "family" => Ok(Assignee::Family),
            "eun" => Ok(Assignee::Eun),
            "mirang" => Ok(Assignee::Mirang),
            "jaeseong" => Ok(Assignee::Jaeseong),
            other => Err(format!("unknown assignee: {other}")),
        }
    }
}

/// Query-side assignee filter.
///
/// Queries can ask for every goal or for one member's goals; `Everyone`
/// exists only here and is never stored on a [`Goal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssigneeFilter {
    /// No filtering — goals for the whole household.
    Everyone,
    /// Only goals assigned to this member.
    Only(Assignee),
}

impl AssigneeFilter {
    /// Whether a stored assignee passes this filter.
    pub fn matches(&self, assignee: Assignee) -> bool {
        match self {
            AssigneeFilter::Everyone => true,
            AssigneeFilter::Only(a) => *a == assignee,
        }
    }
}

impl fmt::Display for AssigneeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssigneeFilter::Everyone => write!(f, "everyone"),
            AssigneeFilter::Only(a) => write!(f, "{a}"),
        }
    }
}

impl FromStr for AssigneeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("everyone") {
            return Ok(AssigneeFilter::Everyone);
        }
        Assignee::from_str(s).map(AssigneeFilter::Only)
    }
}

/// The kind of goal being tracked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Hobby,
    Exercise,
    Study,
    Routine,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Health,
        Category::Hobby,
        Category::Exercise,
        Category::Study,
        Category::Routine,
        Category::Other,
    ];

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Hobby => "Hobby",
            Category::Exercise => "Exercise",
            Category::Study => "Study",
            Category::Routine => "Routine",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Health => write!(f, "health"),
            Category::Hobby => write!(f, "hobby"),
            Category::Exercise => write!(f, "exercise"),
            Category::Study => write!(f, "study"),
            Category::Routine => write!(f, "routine"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Lifecycle state of a goal: Pending ⇄ Completed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Pending,
    Completed,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalStatus::Pending => write!(f, "pending"),
            GoalStatus::Completed => write!(f, "completed"),
        }
    }
}

/// One trackable unit of household work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier, immutable after creation.
    pub id: Uuid,

    /// Short title (e.g., "Evening walk"). Never empty.
    pub title: String,

    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Who is responsible for this goal.
    pub assignee: Assignee,

    /// What kind of goal it is.
    pub category: Category,

    /// Calendar date the goal is due (date-only, no time zone).
    pub due_date: NaiveDate,

    /// Optional time of day; absence means "no specific time".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveTime>,

    /// Current lifecycle state.
    pub status: GoalStatus,

    /// When the goal was created.
    pub created_at: DateTime<Utc>,

    /// When the goal was last mutated (edit, complete, revert).
    pub updated_at: DateTime<Utc>,
}

/// A record that a specific goal was marked done, by whom and when.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    /// Unique identifier.
    pub id: Uuid,

    /// The goal this completion closes.
    pub goal_id: Uuid,

    /// When the goal was completed.
    pub completed_at: DateTime<Utc>,

    /// Who completed it.
    pub completed_by: Assignee,
}

/// Creation payload for a new goal.
///
/// Mirrors the entry form: required fields are optional here so that
/// validation can name every missing one in a single
/// [`GoalError::Validation`](crate::GoalError::Validation) error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDraft {
    /// Goal title; must be non-blank.
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub assignee: Option<Assignee>,

    #[serde(default)]
    pub category: Option<Category>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub due_time: Option<NaiveTime>,
}

/// Partial update for an existing goal.
///
/// `None` leaves the current value untouched. The clearable fields use a
/// nested `Option`: `Some(None)` clears, `Some(Some(v))` replaces.
/// Status is deliberately not patchable — it only moves through
/// `complete`/`revert`.
#[derive(Debug, Clone, Default)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub assignee: Option<Assignee>,
    pub category: Option<Category>,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<Option<NaiveTime>>,
}
