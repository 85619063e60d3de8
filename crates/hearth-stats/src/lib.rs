//! # hearth-stats
//!
//! Read-side aggregations over a [`hearth_goal::GoalStore`] snapshot.
//!
//! Everything here is a pure function of (goal set, completion set,
//! "today"/"now") — no mutation, no hidden state. Callers pass the
//! already-filtered goal list from [`GoalStore::list`] so every view
//! respects the same assignee filter.
//!
//! - [`bucket_goals`] — today / today-completed / this-week / this-month
//!   groupings for the Tasks view (buckets overlap on purpose)
//! - [`due_on`] — exact-date lookup for the Calendar day pane
//! - [`completion_stats`] — completed/pending/total counts and rate
//! - [`daily_completions`] — 7-day completion histogram
//! - [`category_breakdown`] — pending goals per category with shares
//!
//! [`GoalStore::list`]: hearth_goal::GoalStore::list

pub mod buckets;
pub mod stats;

pub use buckets::{bucket_goals, due_on, GoalBuckets};
pub use stats::{
    category_breakdown, completion_stats, daily_completions, CategoryCount, CompletionStats,
    DailyCount,
};

#[cfg(test)]
mod tests {
    // End-to-end scenario across the store and both aggregation modules.

    use chrono::{NaiveDate, Utc};
    use hearth_goal::{Assignee, AssigneeFilter, Category, GoalDraft, GoalStatus, GoalStore};

    use crate::{bucket_goals, completion_stats, daily_completions};

    #[test]
    fn family_walk_moves_between_buckets_on_completion() {
        let today = Utc::now().date_naive();
        let mut store = GoalStore::new();
        let goal = store
            .create(GoalDraft {
                title: "Walk".to_string(),
                assignee: Some(Assignee::Family),
                category: Some(Category::Exercise),
                due_date: Some(today),
                ..GoalDraft::default()
            })
            .unwrap();

        let family = AssigneeFilter::Only(Assignee::Family);
        let goals = store.list(family);
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].status, GoalStatus::Pending);

        // Pending and due today: lands in both the today and this-week
        // buckets (overlap is deliberate).
        let buckets = bucket_goals(&goals, today);
        assert!(buckets.today.iter().any(|g| g.id == goal.id));
        assert!(buckets.this_week.iter().any(|g| g.id == goal.id));
        assert!(buckets.today_completed.is_empty());

        let before = daily_completions(&goals, store.completions(), today);
        assert_eq!(before.last().unwrap().count, 0);

        store.complete(goal.id, Assignee::Family).unwrap();

        let goals = store.list(family);
        let buckets = bucket_goals(&goals, today);
        assert!(buckets.today.is_empty());
        assert!(buckets.today_completed.iter().any(|g| g.id == goal.id));

        // Today's histogram bar picks up the new completion.
        let after = daily_completions(&goals, store.completions(), today);
        assert_eq!(after.last().unwrap().count, before.last().unwrap().count + 1);

        let stats = completion_stats(&goals);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.completion_rate, 100);
    }

    #[test]
    fn seeded_demo_data_aggregates_consistently() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let store = hearth_goal::seed::demo_store(today);
        let goals = store.list(AssigneeFilter::Everyone);

        let stats = completion_stats(&goals);
        assert_eq!(stats.total, 8);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 6);
        assert_eq!(stats.completion_rate, 25);

        let chart = daily_completions(&goals, store.completions(), today);
        assert_eq!(chart.iter().map(|d| d.count).sum::<usize>(), 2);
        assert_eq!(chart.last().unwrap().count, 1);
    }
}
