// tasks.rs — The Tasks view: today / this week / this month buckets.

use chrono::Local;
use hearth_goal::{seed, AssigneeFilter, Goal};
use hearth_stats::bucket_goals;

use super::goal_line;

pub fn execute(filter: AssigneeFilter) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let store = seed::demo_store(today);
    let goals = store.list(filter);
    let buckets = bucket_goals(&goals, today);

    println!("Tasks for {filter} — {today}");
    section("Today", &buckets.today);
    section("Completed today", &buckets.today_completed);
    section("This week", &buckets.this_week);
    section("This month", &buckets.this_month);
    Ok(())
}

fn section(title: &str, goals: &[Goal]) {
    println!();
    println!("{title} ({})", goals.len());
    if goals.is_empty() {
        println!("  nothing here");
        return;
    }
    for goal in goals {
        println!("  {}", goal_line(goal));
    }
}
