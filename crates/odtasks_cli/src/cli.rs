use clap::{Parser, Subcommand, ValueEnum};
use odtasks_core::{Category, Priority};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "OD Tasks command-line host", long_about = None)]
pub struct Cli {
    /// SQLite file holding the state record
    #[arg(long, env = "ODTASKS_DB_PATH", value_name = "PATH")]
    pub db: Option<PathBuf>,
    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,
    /// trace|debug|info|warn|error; defaults by build mode
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task at the head of the list
    AddTask {
        #[arg(value_name = "TITLE")]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long, value_enum, default_value_t = CategoryArg::Other)]
        category: CategoryArg,
        #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
        priority: PriorityArg,
    },
    /// Flip a task between pending and completed
    Toggle {
        /// Task id or a unique prefix of it
        #[arg(value_name = "TASK_ID")]
        task_id: String,
    },
    /// Flip one subtask of a task
    ToggleSubtask {
        #[arg(value_name = "TASK_ID")]
        task_id: String,
        #[arg(value_name = "SUBTASK_ID")]
        subtask_id: String,
    },
    /// Delete a task
    DeleteTask {
        #[arg(value_name = "TASK_ID")]
        task_id: String,
    },
    /// List tasks, optionally filtered by a search term
    Tasks {
        #[arg(value_name = "TERM", default_value = "")]
        term: String,
    },
    /// Add a note in the Main folder
    AddNote {
        #[arg(value_name = "TITLE")]
        title: String,
        #[arg(value_name = "CONTENT", default_value = "")]
        content: String,
    },
    /// List notes with previews, optionally filtered by a search term
    Notes {
        #[arg(value_name = "TERM", default_value = "")]
        term: String,
    },
    /// Record a finished focus session
    Focus {
        #[arg(value_name = "MINUTES")]
        minutes: u64,
    },
    /// Change the display name
    Rename {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Delete a note by its full id
    DeleteNote {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },
    /// Show level, streak and task counts
    Stats,
    /// Erase every task, note and stat
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Study,
    Work,
    Leisure,
    Other,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Study => Category::Study,
            CategoryArg::Work => Category::Work,
            CategoryArg::Leisure => Category::Leisure,
            CategoryArg::Other => Category::Other,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}
