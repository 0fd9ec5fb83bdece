//! A command-line front-end to a local task list

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use pocket_tasks::auth::check_credentials;
use pocket_tasks::notification::LogNotifier;
use pocket_tasks::storage::FileStore;
use pocket_tasks::store::TaskStore;
use pocket_tasks::{TaskError, TaskId, TaskList};


#[derive(Parser)]
#[command(name = "pocket-tasks", version, about = "Manage a local to-do list")]
struct Cli {
    #[arg(long, env = "POCKET_TASKS_USER")]
    username: String,

    #[arg(long, env = "POCKET_TASKS_PASSWORD", hide_env_values = true)]
    password: String,

    /// Folder the tasks are saved in
    #[arg(long, env = "POCKET_TASKS_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every task, most urgent first
    List,
    /// Add a task
    Add {
        name: String,
        /// Due date (YYYY-MM-DD). Defaults to today
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Mark a task as done, or as not done
    Toggle {
        id: String,
    },
}


#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if check_credentials(&cli.username, &cli.password) == false {
        eprintln!("Invalid username or password");
        return ExitCode::FAILURE;
    }

    let backend = match &cli.data_dir {
        Some(folder) => FileStore::new(folder),
        None => FileStore::from_config(),
    };
    let task_list = TaskList::new(TaskStore::new(backend), LogNotifier::new());

    match run(&task_list, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}

async fn run(task_list: &TaskList<FileStore, LogNotifier>, command: Command) -> Result<(), TaskError> {
    let today = Local::now().date_naive();

    match command {
        Command::List => {},
        Command::Add { name, due } => {
            let task = task_list.create(&name, due.unwrap_or(today)).await?;
            println!("Added \"{}\" ({})", task.name(), task.id());
        },
        Command::Toggle { id } => {
            if let Err(err) = task_list.request_notification_permission().await {
                println!("{}", err);
            }
            if task_list.toggle(&TaskId::from(id)).await?.is_none() {
                log::debug!("Nothing was toggled");
            }
        },
    }

    let tasks = task_list.tasks().await;
    let rows = pocket_tasks::view::present(&tasks, today);
    pocket_tasks::utils::print_task_list(&rows);
    Ok(())
}
