use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use taskbook_cli::cli::{Action, Cli};
use taskbook_cli::render::render_table;
use taskbook_core::config;
use taskbook_core::error::StoreError;
use taskbook_core::model::Task;
use taskbook_core::storage::TaskStore;

fn normalize_parse_error(err: clap::Error) -> StoreError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    StoreError::invalid_input(message)
}

fn print_task_json(task: &Task) {
    let json = serde_json::json!({
        "task": task.description,
        "done": task.done,
        "created_date": task.created_at,
        "completed_date": task.completed_at,
    });
    println!("{json}");
}

fn resolve_store_path(cli: &Cli) -> PathBuf {
    cli.file.clone().unwrap_or_else(config::store_path)
}

fn run(cli: Cli, action: Action) -> Result<(), StoreError> {
    let path = resolve_store_path(&cli);
    let mut store = TaskStore::load(&path)?;

    match action {
        Action::Add(text) => {
            let task = store.add(&text)?;
            store.save(&path)?;
            if cli.json {
                print_task_json(&task);
            } else {
                println!("Added task: {}", task.description);
            }
        }
        Action::Complete(position) => {
            let task = store.complete(position)?;
            store.save(&path)?;
            if cli.json {
                print_task_json(&task);
            } else {
                println!("Completed task {}: {}", position, task.description);
            }
        }
        Action::Delete(position) => {
            let task = store.delete(position)?;
            store.save(&path)?;
            if cli.json {
                print_task_json(&task);
            } else {
                println!("Deleted task {}: {}", position, task.description);
            }
        }
        Action::List => {
            if cli.json {
                let content = serde_json::to_string_pretty(store.tasks())
                    .map_err(|err| StoreError::encode(err.to_string()))?;
                println!("{content}");
            } else {
                let theme = config::load_config_with_fallback().config.theme;
                let palette = config::palette_for_theme(theme.as_deref());
                println!("{}", render_table(store.tasks(), &palette));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                print!("{err}");
                return;
            }
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    let Some(action) = cli.action() else {
        let mut cmd = Cli::command();
        eprintln!("{}", cmd.render_help());
        std::process::exit(1);
    };

    if let Err(err) = run(cli, action) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
