use assistant::application::{run_migration, ConsolePrompt, JournalService, TodoService};
use assistant::cli::commands::clean_tags;
use assistant::cli::{print_json, Cli, Commands, JournalCommands, TodoCommands};
use assistant::domain::{
    JournalEntry, JournalFilter, JournalUpdate, NewJournalEntry, NewTodo, Record, TodoFilter,
    TodoItem, TodoUpdate,
};
use assistant::error::AssistantError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Warnings and diagnostics go to stderr; RUST_LOG overrides the level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), AssistantError> {
    match cli.command {
        Commands::Todo { command } => run_todo(command),
        Commands::Journal { command } => run_journal(command),
        Commands::Migrate => run_migration(&mut ConsolePrompt),
    }
}

fn run_todo(command: TodoCommands) -> Result<(), AssistantError> {
    let mut service = TodoService::open_default()?;

    match command {
        TodoCommands::Add {
            title,
            category,
            priority,
            due_date,
            project,
            assignee,
            tags,
            description,
        } => {
            let item = service.add(NewTodo {
                title,
                category,
                priority,
                due_date,
                project,
                assignee,
                tags: clean_tags(tags),
                description,
            })?;
            print_json(&item)
        }
        TodoCommands::List {
            category,
            status,
            priority,
            project,
            assignee,
            tags,
        } => {
            let items = service.list(&TodoFilter {
                category,
                status,
                priority,
                project,
                assignee,
                tags: clean_tags(tags),
            });
            print_json(&items)
        }
        TodoCommands::Update {
            id,
            title,
            status,
            priority,
            category,
            due_date,
            project,
            assignee,
            tags,
            description,
        } => {
            let update = TodoUpdate {
                title,
                status,
                priority,
                category,
                due_date,
                project,
                assignee,
                tags: tags.map(clean_tags),
                description,
            };
            match service.update(id, &update)? {
                Some(item) => print_json(&item),
                None => Err(AssistantError::RecordNotFound {
                    kind: TodoItem::LABEL,
                    id,
                }),
            }
        }
        TodoCommands::Delete { id } => {
            if service.delete(id)? {
                println!("{} {} deleted", TodoItem::LABEL, id);
                Ok(())
            } else {
                Err(AssistantError::RecordNotFound {
                    kind: TodoItem::LABEL,
                    id,
                })
            }
        }
        TodoCommands::Search { keyword } => print_json(&service.search(&keyword)),
    }
}

fn run_journal(command: JournalCommands) -> Result<(), AssistantError> {
    let mut service = JournalService::open_default()?;

    match command {
        JournalCommands::Add {
            content,
            category,
            mood,
            tags,
        } => {
            let entry = service.add(NewJournalEntry {
                content,
                category,
                mood,
                tags: clean_tags(tags),
            })?;
            print_json(&entry)
        }
        JournalCommands::List {
            category,
            mood,
            start_date,
            end_date,
            tags,
        } => {
            let entries = service.list(&JournalFilter {
                category,
                mood,
                start_date,
                end_date,
                tags: clean_tags(tags),
            });
            print_json(&entries)
        }
        JournalCommands::Update {
            id,
            content,
            category,
            mood,
            tags,
        } => {
            let update = JournalUpdate {
                content,
                category,
                mood,
                tags: tags.map(clean_tags),
            };
            match service.update(id, &update)? {
                Some(entry) => print_json(&entry),
                None => Err(AssistantError::RecordNotFound {
                    kind: JournalEntry::LABEL,
                    id,
                }),
            }
        }
        JournalCommands::Delete { id } => {
            if service.delete(id)? {
                println!("{} {} deleted", JournalEntry::LABEL, id);
                Ok(())
            } else {
                Err(AssistantError::RecordNotFound {
                    kind: JournalEntry::LABEL,
                    id,
                })
            }
        }
        JournalCommands::Search { keyword } => print_json(&service.search(&keyword)),
    }
}
