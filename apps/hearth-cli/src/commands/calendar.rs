// calendar.rs — Goals due on one exact date.

use chrono::{Local, NaiveDate};
use hearth_goal::{seed, AssigneeFilter};
use hearth_stats::due_on;

use super::goal_line;

pub fn execute(filter: AssigneeFilter, date: Option<NaiveDate>) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let date = date.unwrap_or(today);
    let store = seed::demo_store(today);
    let goals = due_on(&store.list(filter), date);

    println!("Goals due {date} for {filter}");
    if goals.is_empty() {
        println!("  no goals on this date");
        return Ok(());
    }
    for goal in &goals {
        println!("  {}", goal_line(goal));
    }
    Ok(())
}
