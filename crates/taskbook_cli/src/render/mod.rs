use tabled::builder::Builder;
use tabled::settings::Style;
use taskbook_core::config::Palette;
use taskbook_core::model::Task;

/// Render the task list as a Unicode table, one row per task, with
/// 1-based positions in the first column.
pub fn render_table(tasks: &[Task], palette: &Palette) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Task", "Done", "Created", "Completed"]);

    for (index, task) in tasks.iter().enumerate() {
        let description = if task.done {
            palette.paint_done(&format!("\u{2714} {}", task.description))
        } else {
            palette.paint_pending(&task.description)
        };
        let done = if task.done { "yes" } else { "no" };
        let completed_at = task.completed_at.as_deref().unwrap_or("-");

        builder.push_record([
            (index + 1).to_string(),
            description,
            done.to_string(),
            palette.paint_muted(&task.created_at),
            palette.paint_muted(completed_at),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}
