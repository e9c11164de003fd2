//! Library management console.
//!
//! # Architecture Overview
//!
//! ```text
//!   command line / shell
//!        │
//!        ▼
//!   ┌──────────┐   resolve    ┌──────────┐  first use  ┌──────────┐
//!   │lifecycle │─────────────▶│ routing  │────────────▶│  views   │
//!   │   App    │              │RouteTable│             │  Page    │
//!   └────┬─────┘              └──────────┘             └────┬─────┘
//!        │                                                  │ load
//!        ▼                                                  ▼
//!   ┌──────────┐            ┌──────────┐   HTTP/JSON   ┌──────────┐
//!   │   api    │───────────▶│ gateway  │──────────────▶│ backend  │
//!   │LibraryApi│            │ Gateway  │◀──────────────│          │
//!   └──────────┘            └────┬─────┘               └──────────┘
//!                                │ failures
//!                                ▼
//!                           notifications (stderr)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use library_console::api::{BookDraft, Credentials, PublisherDraft, ReaderDraft};
use library_console::config::{resolve_config, ConfigOverrides};
use library_console::gateway::{ChannelNotifier, ConsoleNotifier, Notification, Notifier};
use library_console::lifecycle::{App, NavigationError};
use library_console::observability::logging;

#[derive(Parser)]
#[command(name = "library-console")]
#[command(about = "Administrative console for the library management system", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides the config file)
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// Request timeout in milliseconds (overrides the config file)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (overrides the config file)
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate interactively
    Shell,
    #[command(flatten)]
    Run(Action),
}

/// One-shot commands: run once, print the result, exit.
#[derive(Subcommand)]
enum Action {
    /// List the navigable pages
    Routes,
    /// Open a page by path, e.g. /home/books
    Open { path: String },
    /// Sign in to the backend
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Manage readers
    Readers {
        #[command(subcommand)]
        action: ReaderAction,
    },
    /// Manage publishers
    Publishers {
        #[command(subcommand)]
        action: PublisherAction,
    },
    /// Manage books
    Books {
        #[command(subcommand)]
        action: BookAction,
    },
    /// Manage physical copies
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },
    /// Lend a copy to a reader
    Borrow {
        #[arg(long)]
        card: i64,
        #[arg(long)]
        copy: i64,
    },
    /// Take a copy back
    Return {
        #[arg(long)]
        copy: i64,
        #[arg(long)]
        damaged: bool,
    },
    /// Show a reader's loans
    Records {
        #[arg(long)]
        card: i64,
    },
    /// Inspect and settle fines
    Fines {
        #[command(subcommand)]
        action: FineAction,
    },
}

#[derive(Subcommand)]
enum ReaderAction {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
    },
    Update {
        #[arg(long)]
        card: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
    },
    Delete {
        #[arg(long)]
        card: i64,
    },
}

#[derive(Subcommand)]
enum PublisherAction {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: Option<String>,
    },
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: Option<String>,
    },
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum BookAction {
    List,
    Create {
        #[arg(long)]
        isbn: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        publisher: i64,
        #[arg(long)]
        price: Option<f64>,
    },
    Update {
        #[arg(long)]
        isbn: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        publisher: i64,
        #[arg(long)]
        price: Option<f64>,
    },
    Delete {
        #[arg(long)]
        isbn: String,
    },
}

#[derive(Subcommand)]
enum InventoryAction {
    List,
    Add {
        #[arg(long)]
        isbn: String,
    },
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        isbn: String,
    },
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum FineAction {
    /// All fines, or one reader's with --card
    List {
        #[arg(long)]
        card: Option<i64>,
    },
    Pay {
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        ConfigOverrides {
            base_url: cli.base_url,
            timeout_ms: cli.timeout_ms,
            log_level: cli.log_level,
        },
    )?;
    logging::init_logging(&config.observability)?;

    let console: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    let action = match cli.command {
        Commands::Shell => {
            let (notifier, mut notifications) = ChannelNotifier::new();
            let printer = console.clone();
            tokio::spawn(async move {
                while let Some(notification) = notifications.recv().await {
                    printer.notify(notification);
                }
            });
            let app = App::bootstrap(&config, Arc::new(notifier))?;
            run_shell(&app).await?;
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Run(action) => action,
    };

    let app = App::bootstrap(&config, console.clone())?;
    match run_command(&app, console.as_ref(), action).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(NavigationError::NotFound(e)) => {
            eprintln!("{}", e);
            print_routes(&app);
            Ok(ExitCode::FAILURE)
        }
        // already shown by the gateway
        Err(NavigationError::Request(_)) => Ok(ExitCode::FAILURE),
    }
}

async fn run_command(
    app: &App,
    notifier: &dyn Notifier,
    action: Action,
) -> Result<(), NavigationError> {
    let api = app.api();

    match action {
        Action::Routes => print_routes(app),
        Action::Open { path } => open(app, &path).await?,
        Action::Login { username, password } => {
            let receipt = api.login(&Credentials { username, password }).await?;
            notifier.notify(Notification::info(receipt.message));
        }
        Action::Readers { action } => match action {
            ReaderAction::List => print_json(&api.list_readers().await?),
            ReaderAction::Create { name, category } => {
                print_json(&api.create_reader(&ReaderDraft { name, category }).await?)
            }
            ReaderAction::Update { card, name, category } => {
                print_json(&api.update_reader(card, &ReaderDraft { name, category }).await?)
            }
            ReaderAction::Delete { card } => {
                notifier.notify(Notification::info(api.delete_reader(card).await?.message))
            }
        },
        Action::Publishers { action } => match action {
            PublisherAction::List => print_json(&api.list_publishers().await?),
            PublisherAction::Create { name, address } => {
                print_json(&api.create_publisher(&PublisherDraft { name, address }).await?)
            }
            PublisherAction::Update { id, name, address } => {
                print_json(&api.update_publisher(id, &PublisherDraft { name, address }).await?)
            }
            PublisherAction::Delete { id } => {
                notifier.notify(Notification::info(api.delete_publisher(id).await?.message))
            }
        },
        Action::Books { action } => match action {
            BookAction::List => print_json(&api.list_books().await?),
            BookAction::Create { isbn, title, author, publisher, price } => {
                let draft = BookDraft { isbn, title, author, publisher_id: publisher, price };
                print_json(&api.create_book(&draft).await?)
            }
            BookAction::Update { isbn, title, author, publisher, price } => {
                let draft = BookDraft { isbn: isbn.clone(), title, author, publisher_id: publisher, price };
                print_json(&api.update_book(&isbn, &draft).await?)
            }
            BookAction::Delete { isbn } => {
                notifier.notify(Notification::info(api.delete_book(&isbn).await?.message))
            }
        },
        Action::Inventory { action } => match action {
            InventoryAction::List => print_json(&api.list_inventory().await?),
            InventoryAction::Add { isbn } => print_json(&api.add_inventory(&isbn).await?),
            InventoryAction::Update { id, isbn } => print_json(&api.update_inventory(id, &isbn).await?),
            InventoryAction::Delete { id } => {
                notifier.notify(Notification::info(api.delete_inventory(id).await?.message))
            }
        },
        Action::Borrow { card, copy } => {
            notifier.notify(Notification::info(api.borrow(card, copy).await?.message))
        }
        Action::Return { copy, damaged } => {
            notifier.notify(Notification::info(api.return_book(copy, damaged).await?.message))
        }
        Action::Records { card } => print_json(&api.borrow_records(card).await?),
        Action::Fines { action } => match action {
            FineAction::List { card: None } => print_json(&api.all_fines().await?),
            FineAction::List { card: Some(card) } => print_json(&api.fines_for(card).await?),
            FineAction::Pay { id } => {
                notifier.notify(Notification::info(api.pay_fine(id).await?.message))
            }
        },
    }
    Ok(())
}

async fn open(app: &App, path: &str) -> Result<(), NavigationError> {
    let mounted = app.navigate(path).await?;
    for screen in &mounted.screens {
        println!("{}", screen);
    }
    Ok(())
}

async fn run_shell(app: &App) -> Result<(), std::io::Error> {
    println!("Type a path (e.g. /home/books), 'routes', or 'quit'.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "routes" => print_routes(app),
            path => match open(app, path).await {
                Ok(()) => {}
                Err(NavigationError::NotFound(e)) => eprintln!("{}", e),
                Err(NavigationError::Request(_)) => {}
            },
        }
    }
    Ok(())
}

fn print_routes(app: &App) {
    for (name, path) in app.routes().routes() {
        println!("{:<14} {}", name, path);
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => tracing::error!(error = %e, "Could not render result"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_is_its_own_mode() {
        let cli = Cli::try_parse_from(["library-console", "shell"]).unwrap();
        assert!(matches!(cli.command, Commands::Shell));

        let cli = Cli::try_parse_from(["library-console", "open", "/home/books"]).unwrap();
        match cli.command {
            Commands::Run(Action::Open { path }) => assert_eq!(path, "/home/books"),
            _ => panic!("expected a one-shot open"),
        }

        let cli = Cli::try_parse_from(["library-console", "fines", "pay", "--id", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Run(Action::Fines { action: FineAction::Pay { id: 3 } })
        ));
    }
}
