// seed.rs — Sample household dataset for demos and populated-store tests.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use crate::store::GoalStore;
use crate::types::{Assignee, Category, Completion, Goal, GoalStatus};

/// Build a store seeded with the demo household: eight goals spread from
/// yesterday to four days out, two of them already completed (with their
/// completion records).
pub fn demo_store(today: NaiveDate) -> GoalStore {
    let walk = seed_goal(
        "Evening walk",
        Assignee::Family,
        Category::Exercise,
        today,
        hm(20, 0),
        GoalStatus::Completed,
    );
    let groceries = seed_goal(
        "Grocery run",
        Assignee::Jaeseong,
        Category::Routine,
        today - Duration::days(1),
        None,
        GoalStatus::Completed,
    );

    let completions = vec![
        completion_record(&walk, Assignee::Family, midday(today)),
        completion_record(&groceries, Assignee::Jaeseong, midday(today - Duration::days(1))),
    ];

    let goals = vec![
        seed_goal(
            "Up at 7 AM",
            Assignee::Eun,
            Category::Health,
            today,
            hm(7, 0),
            GoalStatus::Pending,
        ),
        seed_goal(
            "Read for 30 minutes",
            Assignee::Mirang,
            Category::Study,
            today,
            None,
            GoalStatus::Pending,
        ),
        walk,
        seed_goal(
            "One-minute plank",
            Assignee::Jaeseong,
            Category::Exercise,
            today,
            None,
            GoalStatus::Pending,
        ),
        seed_goal(
            "An hour of Rust study",
            Assignee::Mirang,
            Category::Study,
            today + Duration::days(1),
            None,
            GoalStatus::Pending,
        ),
        seed_goal(
            "Weekend deep clean",
            Assignee::Family,
            Category::Routine,
            today + Duration::days(4),
            None,
            GoalStatus::Pending,
        ),
        groceries,
        seed_goal(
            "Yoga practice",
            Assignee::Eun,
            Category::Hobby,
            today + Duration::days(2),
            hm(18, 0),
            GoalStatus::Pending,
        ),
    ];

    GoalStore::with_data(goals, completions)
}

fn seed_goal(
    title: &str,
    assignee: Assignee,
    category: Category,
    due_date: NaiveDate,
    due_time: Option<NaiveTime>,
    status: GoalStatus,
) -> Goal {
    let now = Utc::now();
    Goal {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        assignee,
        category,
        due_date,
        due_time,
        status,
        created_at: now,
        updated_at: now,
    }
}

fn completion_record(goal: &Goal, by: Assignee, at: DateTime<Utc>) -> Completion {
    Completion {
        id: Uuid::new_v4(),
        goal_id: goal.id,
        completed_at: at,
        completed_by: by,
    }
}

fn hm(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn midday(date: NaiveDate) -> DateTime<Utc> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&date.and_time(noon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssigneeFilter;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn demo_store_has_eight_goals_and_two_completions() {
        let store = demo_store(today());
        assert_eq!(store.len(), 8);
        assert_eq!(store.completions().len(), 2);
    }

    #[test]
    fn every_completed_seed_goal_has_a_completion_record() {
        let store = demo_store(today());
        for goal in store.list(AssigneeFilter::Everyone) {
            match goal.status {
                GoalStatus::Completed => {
                    assert!(store.completion_for(goal.id).is_some(), "{}", goal.title)
                }
                GoalStatus::Pending => {
                    assert!(store.completion_for(goal.id).is_none(), "{}", goal.title)
                }
            }
        }
    }

    #[test]
    fn seed_due_dates_span_yesterday_to_four_days_out() {
        let store = demo_store(today());
        let goals = store.list(AssigneeFilter::Everyone);
        let earliest = goals.iter().map(|g| g.due_date).min().unwrap();
        let latest = goals.iter().map(|g| g.due_date).max().unwrap();
        assert_eq!(earliest, today() - Duration::days(1));
        assert_eq!(latest, today() + Duration::days(4));
    }
}
