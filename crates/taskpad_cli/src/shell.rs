//! Line-oriented command shell over the engine.
//!
//! Commands map 1:1 onto the engine's public operations; the shell itself
//! holds no task state beyond the row-number mapping of the last rendered
//! view.

use chrono::NaiveDate;
use std::io::{self, Write};
use taskpad_core::{
    parse_priority, parse_priority_filter, parse_status_filter, EngineRuntime, Notifier,
    SnapshotStore, TaskId, TaskListEngine,
};

pub fn run<S, N>(runtime: &EngineRuntime<S, N>) -> Result<(), String>
where
    S: SnapshotStore + Send + 'static,
    N: Notifier + Send + 'static,
{
    let engine = runtime.engine();
    let stdin = io::stdin();

    println!(
        "taskpad {} (type `help` for commands, `quit` to exit)",
        taskpad_core::core_version()
    );
    let mut ids = {
        let guard = engine.lock().map_err(|_| "engine state lock poisoned")?;
        render_view(&guard)
    };

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|err| err.to_string())?;

        input.clear();
        let read = stdin.read_line(&mut input).map_err(|err| err.to_string())?;
        if read == 0 {
            println!();
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = split_word(line);
        if matches!(command, "quit" | "exit") {
            break;
        }
        if command == "help" {
            print_help();
            continue;
        }

        let mut guard = engine.lock().map_err(|_| "engine state lock poisoned")?;
        dispatch(&mut guard, &ids, command, rest);
        ids = render_view(&guard);
    }

    Ok(())
}

fn dispatch<S: SnapshotStore, N: Notifier>(
    engine: &mut TaskListEngine<S, N>,
    ids: &[TaskId],
    command: &str,
    rest: &str,
) {
    match command {
        "add" => {
            engine.set_draft_text(rest);
            if engine.add_task().is_none() {
                println!("  nothing added: task text is empty");
            }
        }
        "due" => match parse_due(rest) {
            Ok(due) => engine.set_draft_due_date(due),
            Err(message) => println!("  {message}"),
        },
        "prio" => match parse_priority(rest) {
            Some(priority) => engine.set_draft_priority(priority),
            None => println!("  expected high, medium or low"),
        },
        "done" => match resolve(ids, rest) {
            Some(id) => engine.toggle_done(id),
            None => println!("  expected a row number from the last list"),
        },
        "delete" => match resolve(ids, rest) {
            Some(id) => engine.delete_task(id),
            None => println!("  expected a row number from the last list"),
        },
        "edit" => {
            let (row, text) = split_word(rest);
            match resolve(ids, row) {
                Some(id) => {
                    let current = engine
                        .tasks()
                        .iter()
                        .find(|task| task.id == id)
                        .map(|task| task.text.clone())
                        .unwrap_or_default();
                    engine.begin_edit(id, current);
                    engine.set_edit_buffer(text);
                    engine.commit_edit(id);
                }
                None => println!("  expected a row number from the last list"),
            }
        }
        "search" => {
            let term = if rest == "-" { "" } else { rest };
            engine.set_search_term(term);
        }
        "status" => match parse_status_filter(rest) {
            Some(status) => engine.set_status_filter(status),
            None => println!("  expected all, done or notdone"),
        },
        "filter" => match parse_priority_filter(rest) {
            Some(priority) => engine.set_priority_filter(priority),
            None => println!("  expected all, high, medium or low"),
        },
        "list" => {}
        other => println!("  unknown command `{other}`; type `help`"),
    }
}

fn render_view<S: SnapshotStore, N: Notifier>(engine: &TaskListEngine<S, N>) -> Vec<TaskId> {
    let visible = engine.visible_tasks();
    if visible.is_empty() {
        println!("  (no tasks match)");
    }

    let mut ids = Vec::with_capacity(visible.len());
    for (index, task) in visible.iter().enumerate() {
        let marker = if task.done { "x" } else { " " };
        let due = task
            .due_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "no date".to_string());
        println!(
            "  {:>2}. [{marker}] {}  ({due}, {})",
            index + 1,
            task.text,
            task.priority.as_str()
        );
        ids.push(task.id);
    }
    println!("  {} shown / {} total", visible.len(), engine.tasks().len());
    ids
}

fn parse_due(raw: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("`{trimmed}` is not a date; expected YYYY-MM-DD"))
}

fn resolve(ids: &[TaskId], raw: &str) -> Option<TaskId> {
    let row: usize = raw.trim().parse().ok()?;
    ids.get(row.checked_sub(1)?).copied()
}

fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (line, ""),
    }
}

fn print_help() {
    println!(
        "  add <text>          add a task using the pending due date and priority
  due <YYYY-MM-DD|->  set or clear the pending due date
  prio <level>        set the pending priority (high, medium, low)
  list                show the current view
  done <n>            toggle completion for row n
  edit <n> <text>     replace the text of row n
  delete <n>          delete row n
  search <term|->     set or clear the search term
  status <value>      filter by status (all, done, notdone)
  filter <value>      filter by priority (all, high, medium, low)
  quit                exit"
    );
}
