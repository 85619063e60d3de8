// commands/ — one module per top-level subcommand.

pub mod calendar;
pub mod demo;
pub mod stats;
pub mod tasks;

use hearth_goal::Goal;

/// One-line rendering of a goal shared by the list views.
pub fn goal_line(goal: &Goal) -> String {
    let glyph = match goal.status {
        hearth_goal::GoalStatus::Pending => "[ ]",
        hearth_goal::GoalStatus::Completed => "[x]",
    };
    let time = goal
        .due_time
        .map(|t| format!(" at {}", t.format("%H:%M")))
        .unwrap_or_default();
    format!(
        "{glyph} {} — {} / {}{time} (due {})",
        goal.title,
        goal.assignee.label(),
        goal.category.label(),
        goal.due_date
    )
}
