// demo.rs — Scripted walkthrough of the goal lifecycle against the
// seeded store. State is in-memory, so the whole story plays out in one
// invocation.

use chrono::Local;
use hearth_goal::{seed, Assignee, AssigneeFilter, Category, GoalDraft, GoalPatch};

use super::goal_line;

pub fn execute() -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let mut store = seed::demo_store(today);
    println!(
        "Seeded demo household: {} goals, {} completions",
        store.len(),
        store.completions().len()
    );

    // Create.
    let goal = store.create(GoalDraft {
        title: "Walk".to_string(),
        assignee: Some(Assignee::Family),
        category: Some(Category::Exercise),
        due_date: Some(today),
        ..GoalDraft::default()
    })?;
    println!("\ncreated:   {}", goal_line(&goal));

    // Validation names every missing field at once.
    if let Err(err) = store.create(GoalDraft::default()) {
        println!("rejected:  {err}");
    }

    // Edit.
    let goal = store.update(
        goal.id,
        GoalPatch {
            title: Some("Evening walk together".to_string()),
            ..GoalPatch::default()
        },
    )?;
    println!("updated:   {}", goal_line(&goal));

    // Complete, then show the conflict guard.
    let goal = store.complete(goal.id, Assignee::Family)?;
    println!("completed: {}", goal_line(&goal));
    if let Some(record) = store.completion_for(goal.id) {
        println!(
            "           closed out by {} at {}",
            record.completed_by.label(),
            record.completed_at.format("%Y-%m-%d %H:%M")
        );
    }
    if let Err(err) = store.complete(goal.id, Assignee::Eun) {
        println!("rejected:  {err}");
    }

    // Revert and delete.
    let goal = store.revert(goal.id)?;
    println!("reverted:  {}", goal_line(&goal));
    store.delete(goal.id);
    println!(
        "deleted:   store back to {} goals",
        store.list(AssigneeFilter::Everyone).len()
    );
    Ok(())
}
