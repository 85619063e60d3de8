// stats.rs — Completion statistics, the 7-day histogram, and the
// per-category pending breakdown.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use hearth_goal::{Category, Completion, Goal, GoalStatus};
use serde::Serialize;
use uuid::Uuid;

/// Aggregate completion counts for one filtered goal set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    pub completed: usize,
    pub pending: usize,
    pub total: usize,
    /// `round(completed / total * 100)`; 0 for an empty set.
    pub completion_rate: u32,
}

/// One bar of the 7-day completion histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCount {
    pub date: NaiveDate,
    /// Three-letter weekday label ("Sun".."Sat").
    pub day_name: String,
    pub count: usize,
}

/// Pending-goal count and share for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
    /// Rounded integer share of the pending total.
    pub percentage: u32,
}

/// Count completed/pending/total goals and the completion rate.
pub fn completion_stats(goals: &[Goal]) -> CompletionStats {
    let completed = goals
        .iter()
        .filter(|g| g.status == GoalStatus::Completed)
        .count();
    let total = goals.len();
    CompletionStats {
        completed,
        pending: total - completed,
        total,
        completion_rate: percentage(completed, total),
    }
}

/// Completions per day over the trailing 7 calendar days ending `today`,
/// oldest to newest. Only completions belonging to the given (already
/// filtered) goal set are counted.
pub fn daily_completions(
    goals: &[Goal],
    completions: &[Completion],
    today: NaiveDate,
) -> Vec<DailyCount> {
    let goal_ids: HashSet<Uuid> = goals.iter().map(|g| g.id).collect();

    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let count = completions
                .iter()
                .filter(|c| {
                    c.completed_at.date_naive() == date && goal_ids.contains(&c.goal_id)
                })
                .count();
            DailyCount {
                date,
                day_name: date.format("%a").to_string(),
                count,
            }
        })
        .collect()
}

/// Count pending goals per category and each category's share of the
/// pending total. Categories with no pending goals are omitted; the
/// result is in [`Category::ALL`] order. Empty when nothing is pending.
pub fn category_breakdown(goals: &[Goal]) -> Vec<CategoryCount> {
    let pending: Vec<&Goal> = goals
        .iter()
        .filter(|g| g.status == GoalStatus::Pending)
        .collect();
    let total = pending.len();

    Category::ALL
        .iter()
        .filter_map(|category| {
            let count = pending.iter().filter(|g| g.category == *category).count();
            (count > 0).then_some(CategoryCount {
                category: *category,
                count,
                percentage: percentage(count, total),
            })
        })
        .collect()
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
