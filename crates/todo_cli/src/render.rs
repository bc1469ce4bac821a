//! Plain-text rendering of the task board.

use todo_core::{TaskBoard, TaskSection};

pub fn render_board(board: &TaskBoard) -> String {
    let mut out = String::new();
    render_section(&mut out, &board.active);
    render_section(&mut out, &board.completed);
    out
}

fn render_section(out: &mut String, section: &TaskSection) {
    if let Some(message) = section.empty_message {
        out.push_str(message);
        out.push('\n');
        return;
    }
    if section.tasks.is_empty() {
        return;
    }

    out.push_str(section.title);
    out.push('\n');
    for task in &section.tasks {
        let mark = if task.is_done { 'x' } else { ' ' };
        out.push_str(&format!("  [{mark}] #{} {}\n", task.id, task.text));
    }
}
