//! Command-line host over the OD Tasks store.
//!
//! # Responsibility
//! - Open the same durable record the app uses and dispatch actions to it.
//! - Print read projections (task list, note previews, stats).
//!
//! Without a subcommand it prints a linkage probe.

mod cli;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use odtasks_core::search::filter::{filter_notes, filter_tasks};
use odtasks_core::search::preview::note_summaries;
use odtasks_core::{
    dashboard, default_log_level, init_logging, Action, AppState, AppStore, Connectivity, Note,
    SqliteStateRepository, SystemClock, Task, UserStatsPatch,
};
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "odtasks_state.sqlite3";
const SHORT_ID_CHARS: usize = 8;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        init_logging(level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let Some(command) = cli.command else {
        println!("odtasks_core ping={}", odtasks_core::ping());
        println!("odtasks_core version={}", odtasks_core::core_version());
        return Ok(());
    };

    let db_path = cli
        .db
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
    let mut store = open_store(db_path)?;

    match command {
        Commands::AddTask {
            title,
            description,
            category,
            priority,
        } => {
            let task = Task::new(
                title.trim(),
                description,
                category.into(),
                priority.into(),
                &SystemClock,
            );
            let id = task.id.clone();
            dispatch(&mut store, Action::AddTask(task))?;
            println!("Task created: {id}");
        }
        Commands::Toggle { task_id } => {
            let id = resolve_task_id(store.state(), &task_id)?;
            dispatch(&mut store, Action::ToggleTaskCompletion(id.clone()))?;
            let status = store
                .state()
                .task(&id)
                .map(|task| task.status.label())
                .unwrap_or("missing");
            println!("Task {} is now {status}.", short_id(&id));
        }
        Commands::ToggleSubtask {
            task_id,
            subtask_id,
        } => {
            let id = resolve_task_id(store.state(), &task_id)?;
            dispatch(&mut store, Action::ToggleSubTask {
                task_id: id,
                subtask_id,
            })?;
            println!("Subtask toggled.");
        }
        Commands::DeleteTask { task_id } => {
            let id = resolve_task_id(store.state(), &task_id)?;
            dispatch(&mut store, Action::DeleteTask(id.clone()))?;
            println!("Task {} deleted.", short_id(&id));
        }
        Commands::Tasks { term } => print_tasks(store.state(), &term),
        Commands::AddNote { title, content } => {
            let mut note = Note::new(&SystemClock);
            note.title = title.trim().to_string();
            note.content = content;
            let id = note.id.clone();
            dispatch(&mut store, Action::AddNote(note))?;
            println!("Note created: {id}");
        }
        Commands::Notes { term } => print_notes(store.state(), &term),
        Commands::Focus { minutes } => {
            if minutes == 0 {
                bail!("a focus session needs at least one minute");
            }
            dispatch(&mut store, Action::RecordFocusSession { minutes })?;
            println!("Focus session recorded: {minutes} min.");
        }
        Commands::Rename { name } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                bail!("name cannot be empty");
            }
            dispatch(&mut store, Action::UpdateUser(UserStatsPatch {
                name: Some(name),
                ..UserStatsPatch::default()
            }))?;
            println!("Name updated.");
        }
        Commands::DeleteNote { note_id } => {
            let id = note_id.trim();
            if store.state().note(id).is_none() {
                bail!("no note with id `{id}`");
            }
            dispatch(&mut store, Action::DeleteNote(id.to_string()))?;
            println!("Note {} deleted.", short_id(id));
        }
        Commands::Stats => print_stats(store.state()),
        Commands::Reset { yes } => {
            if !yes {
                bail!("reset erases every task, note and stat; rerun with --yes");
            }
            dispatch(&mut store, Action::ResetAll)?;
            println!("All data erased.");
        }
    }
    Ok(())
}

fn open_store(db_path: PathBuf) -> Result<AppStore<SqliteStateRepository>> {
    let repo = SqliteStateRepository::open(&db_path)
        .with_context(|| format!("failed to open state database `{}`", db_path.display()))?;
    Ok(AppStore::open(repo, SystemClock, Connectivity::default()))
}

fn dispatch(store: &mut AppStore<SqliteStateRepository>, action: Action) -> Result<()> {
    let kind = action.kind();
    store.dispatch(action)?;
    info!("event=cli_command module=cli status=ok action={kind}");
    Ok(())
}

/// Accepts a full id or a prefix that matches exactly one task.
fn resolve_task_id(state: &AppState, raw: &str) -> Result<String> {
    let needle = raw.trim();
    if needle.is_empty() {
        bail!("task id cannot be empty");
    }
    if state.task(needle).is_some() {
        return Ok(needle.to_string());
    }
    let mut matches = state.tasks.iter().filter(|task| task.id.starts_with(needle));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task.id.clone()),
        (Some(_), Some(_)) => bail!("task id prefix `{needle}` is ambiguous"),
        (None, _) => bail!("no task matches `{needle}`"),
    }
}

fn short_id(id: &str) -> &str {
    id.char_indices()
        .nth(SHORT_ID_CHARS)
        .map(|(cut, _)| &id[..cut])
        .unwrap_or(id)
}

fn print_tasks(state: &AppState, term: &str) {
    let hits = filter_tasks(&state.tasks, term);
    if hits.is_empty() {
        println!("No tasks.");
        return;
    }
    for task in hits {
        let mark = if task.is_completed() { "x" } else { " " };
        println!(
            "[{mark}] {}  {:<8} {:<6} {:>3}%  {}",
            short_id(&task.id),
            task.category.label(),
            task.priority.label(),
            task.completion_percentage,
            task.title
        );
        for sub in &task.sub_tasks {
            let sub_mark = if sub.is_completed { "x" } else { " " };
            println!("      [{sub_mark}] {}  {}", short_id(&sub.id), sub.title);
        }
    }
}

fn print_notes(state: &AppState, term: &str) {
    let hits: Vec<Note> = filter_notes(&state.notes, term).into_iter().cloned().collect();
    if hits.is_empty() {
        println!("No notes.");
        return;
    }
    for row in note_summaries(&hits) {
        println!(
            "{}  {}/{}  {}",
            short_id(&row.id),
            row.folder,
            row.title,
            row.preview.as_deref().unwrap_or("(empty)")
        );
    }
}

fn print_stats(state: &AppState) {
    let summary = dashboard(state);
    let user = &state.user;
    println!("{}", user.name);
    match summary.level.next_xp {
        Some(next) => println!(
            "Level {}  {} / {} xp ({}%)",
            summary.level.level, user.xp, next, summary.level_percent
        ),
        None => println!("Level {}  {} xp (max)", summary.level.level, user.xp),
    }
    println!("Streak {} day(s)", summary.streak);
    println!(
        "Tasks {} total, {} pending, {} in progress, {} completed ({}%)",
        summary.total_tasks,
        summary.pending_tasks,
        summary.in_progress_tasks,
        summary.completed_tasks,
        summary.completion_rate
    );
    println!(
        "Focus {} min over {} session(s)",
        summary.total_focus_minutes, summary.focus_sessions
    );
}
