//! CLI session driver.
//!
//! # Responsibility
//! - Own one `TaskListModel` for the lifetime of the process.
//! - Map stdin lines to list operations and print the board after each
//!   effective change.

mod cli;
mod command;
mod render;

use clap::Parser;
use cli::Args;
use command::{parse_command, Command, USAGE};
use log::{debug, info};
use render::render_board;
use std::io::{self, BufRead, Write};
use todo_core::view::board::{ADD_BUTTON_LABEL, APP_TITLE, INPUT_PLACEHOLDER};
use todo_core::{default_log_level, init_logging, input_error, TaskBoard, TaskListModel};

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(log_dir) = args.log_dir {
        if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
            eprintln!("logging disabled: {err}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock())
}

fn run_session<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut model = TaskListModel::new();
    info!("event=session_start module=cli status=ok");

    writeln!(output, "{APP_TITLE} {}", todo_core::core_version())?;
    writeln!(output, "{INPUT_PLACEHOLDER}: `{} <text>`", ADD_BUTTON_LABEL.to_lowercase())?;
    writeln!(output, "{USAGE}")?;
    write!(output, "{}", render_board(&TaskBoard::from_tasks(model.tasks())))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}; {USAGE}")?;
                continue;
            }
        };

        let revision = model.revision();
        match command {
            Command::Add(text) => {
                // Field validation runs before the model sees the draft.
                if let Some(message) = input_error(&text) {
                    writeln!(output, "{message}")?;
                    continue;
                }
                model.add(&text);
            }
            Command::Toggle(id) => model.toggle(id),
            Command::Remove(id) => model.remove(id),
            Command::Edit(id, text) => model.edit(id, &text),
            Command::List => {
                write!(output, "{}", render_board(&TaskBoard::from_tasks(model.tasks())))?;
                continue;
            }
            Command::Help => {
                writeln!(output, "{USAGE}")?;
                continue;
            }
            Command::Quit => break,
        }

        if model.revision() != revision {
            debug!(
                "event=board_render module=cli status=ok revision={}",
                model.revision()
            );
            write!(output, "{}", render_board(&TaskBoard::from_tasks(model.tasks())))?;
        }
    }

    info!(
        "event=session_end module=cli status=ok revision={}",
        model.revision()
    );
    Ok(())
}
