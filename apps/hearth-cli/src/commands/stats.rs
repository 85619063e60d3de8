// stats.rs — The Stats view: completion rate, 7-day histogram, and the
// per-category pending breakdown.

use chrono::Local;
use hearth_goal::{seed, AssigneeFilter};
use hearth_stats::{category_breakdown, completion_stats, daily_completions};

pub fn execute(filter: AssigneeFilter) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let store = seed::demo_store(today);
    let goals = store.list(filter);

    let stats = completion_stats(&goals);
    println!("Stats for {filter} — {today}");
    println!(
        "  completed {} / pending {} / total {} — {}% done",
        stats.completed, stats.pending, stats.total, stats.completion_rate
    );

    println!();
    println!("Completions, last 7 days:");
    for day in daily_completions(&goals, store.completions(), today) {
        println!("  {} {}  {}", day.day_name, day.date, "#".repeat(day.count));
    }

    println!();
    println!("Pending goals by category:");
    let breakdown = category_breakdown(&goals);
    if breakdown.is_empty() {
        println!("  nothing pending");
        return Ok(());
    }
    for row in breakdown {
        println!(
            "  {:<10} {:>2}  {:>3}%  {}",
            row.category.label(),
            row.count,
            row.percentage,
            "=".repeat(row.percentage as usize / 5)
        );
    }
    Ok(())
}
