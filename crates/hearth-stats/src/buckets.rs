// buckets.rs — Due-date groupings for the Tasks and Calendar views.
//
// Buckets are computed independently and overlap on purpose: a pending
// goal due today also belongs to this week and this month. The week runs
// Sunday through Saturday.

use chrono::{Datelike, Duration, NaiveDate};
use hearth_goal::{Goal, GoalStatus};
use serde::Serialize;

/// The Tasks-view groupings of one filtered goal set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalBuckets {
    /// Pending goals due exactly today.
    pub today: Vec<Goal>,
    /// Completed goals due today.
    pub today_completed: Vec<Goal>,
    /// Pending goals due within the current Sunday-started week.
    pub this_week: Vec<Goal>,
    /// Pending goals due within the current calendar month.
    pub this_month: Vec<Goal>,
}

/// Partition a filtered goal set by due-date proximity to `today`.
pub fn bucket_goals(goals: &[Goal], today: NaiveDate) -> GoalBuckets {
    let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    let week_end = week_start + Duration::days(6);

    let mut buckets = GoalBuckets::default();
    for goal in goals {
        match goal.status {
            GoalStatus::Completed => {
                if goal.due_date == today {
                    buckets.today_completed.push(goal.clone());
                }
            }
            GoalStatus::Pending => {
                if goal.due_date == today {
                    buckets.today.push(goal.clone());
                }
                if goal.due_date >= week_start && goal.due_date <= week_end {
                    buckets.this_week.push(goal.clone());
                }
                if goal.due_date.year() == today.year() && goal.due_date.month() == today.month() {
                    buckets.this_month.push(goal.clone());
                }
            }
        }
    }
    buckets
}

/// Goals due on an exact date, any status. Feeds the calendar day pane.
pub fn due_on(goals: &[Goal], date: NaiveDate) -> Vec<Goal> {
    goals
        .iter()
        .filter(|g| g.due_date == date)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hearth_goal::{Assignee, Category};
    use uuid::Uuid;

    fn goal(title: &str, due: NaiveDate, status: GoalStatus) -> Goal {
        let now = Utc::now();
        Goal {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            assignee: Assignee::Family,
            category: Category::Routine,
            due_date: due,
            due_time: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pending_goal_due_today_lands_in_three_buckets() {
        // 2026-08-23 is a Sunday, so the week is Aug 23–29.
        let today = date(2026, 8, 23);
        let goals = vec![goal("Walk", today, GoalStatus::Pending)];

        let buckets = bucket_goals(&goals, today);
        assert_eq!(buckets.today.len(), 1);
        assert_eq!(buckets.this_week.len(), 1);
        assert_eq!(buckets.this_month.len(), 1);
        assert!(buckets.today_completed.is_empty());
    }

    #[test]
    fn completed_goal_due_today_only_lands_in_today_completed() {
        let today = date(2026, 8, 23);
        let goals = vec![goal("Walk", today, GoalStatus::Completed)];

        let buckets = bucket_goals(&goals, today);
        assert!(buckets.today.is_empty());
        assert!(buckets.this_week.is_empty());
        assert!(buckets.this_month.is_empty());
        assert_eq!(buckets.today_completed.len(), 1);
    }

    #[test]
    fn week_runs_sunday_through_saturday() {
        // Wednesday; its week is Sunday Aug 23 through Saturday Aug 29.
        let today = date(2026, 8, 26);
        let goals = vec![
            goal("sunday", date(2026, 8, 23), GoalStatus::Pending),
            goal("saturday", date(2026, 8, 29), GoalStatus::Pending),
            goal("last saturday", date(2026, 8, 22), GoalStatus::Pending),
            goal("next sunday", date(2026, 8, 30), GoalStatus::Pending),
        ];

        let buckets = bucket_goals(&goals, today);
        let week: Vec<&str> = buckets.this_week.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(week, vec!["sunday", "saturday"]);
    }

    #[test]
    fn month_bucket_is_calendar_month_not_rolling_window() {
        let today = date(2026, 8, 26);
        let goals = vec![
            goal("first", date(2026, 8, 1), GoalStatus::Pending),
            goal("last", date(2026, 8, 31), GoalStatus::Pending),
            goal("september", date(2026, 9, 1), GoalStatus::Pending),
            goal("july", date(2026, 7, 31), GoalStatus::Pending),
        ];

        let buckets = bucket_goals(&goals, today);
        let month: Vec<&str> = buckets
            .this_month
            .iter()
            .map(|g| g.title.as_str())
            .collect();
        assert_eq!(month, vec!["first", "last"]);
    }

    #[test]
    fn due_on_matches_exact_date_regardless_of_status() {
        let day = date(2026, 8, 24);
        let goals = vec![
            goal("pending", day, GoalStatus::Pending),
            goal("done", day, GoalStatus::Completed),
            goal("other day", date(2026, 8, 25), GoalStatus::Pending),
        ];

        let on_day = due_on(&goals, day);
        assert_eq!(on_day.len(), 2);
        assert!(due_on(&goals, date(2026, 8, 20)).is_empty());
    }

    #[test]
    fn empty_goal_set_yields_empty_buckets() {
        let buckets = bucket_goals(&[], date(2026, 8, 23));
        assert!(buckets.today.is_empty());
        assert!(buckets.today_completed.is_empty());
        assert!(buckets.this_week.is_empty());
        assert!(buckets.this_month.is_empty());
    }
}
