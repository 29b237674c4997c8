//! Command-line interface: argument definitions and dispatch

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{self, StatusFilter};
use crate::config::Config;
use crate::constants::{CONFIG_ENV_VAR, WARN_TERMINAL_TOO_SMALL};
use crate::entities::todo::DEFAULT_PRIORITY;
use crate::entities::{NewTodo, TodoPatch};
use crate::icons::IconService;
use crate::logger;
use crate::storage::{StoreError, TodoStore};
use crate::ui::TableRenderer;

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about = "Track todos in a local SQLite database", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ~/.todo/config.json)
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Mirror debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the todo database and table
    Init,
    /// Add a todo
    Add {
        /// Name of the todo
        #[arg(short, long)]
        name: String,
        /// Free-form content
        #[arg(short, long, default_value = "")]
        content: String,
        /// Priority (1 low - 3 high)
        #[arg(short, long, default_value_t = DEFAULT_PRIORITY, value_parser = clap::value_parser!(i32).range(0..))]
        priority: i32,
    },
    /// List todos
    List {
        /// Which todos to show
        #[arg(short, long, value_enum, default_value_t = StatusFilter::Incomplete)]
        status: StatusFilter,
        /// Maximum number of todos to show, 0 for no limit (default from config)
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Show a single todo
    View {
        /// Id of the todo
        #[arg(long)]
        id: i64,
    },
    /// Change fields of a todo, leaving the others as they are
    Update {
        /// Id of the todo
        #[arg(long)]
        id: i64,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New content
        #[arg(short, long)]
        content: Option<String>,
        /// New priority
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(0..))]
        priority: Option<i32>,
    },
    /// Mark a todo as completed
    #[command(alias = "comp")]
    Complete {
        /// Id of the todo
        #[arg(long)]
        id: i64,
    },
    /// Delete a todo
    #[command(alias = "del")]
    Delete {
        /// Id of the todo
        #[arg(long)]
        id: i64,
    },
    /// Remove the todo database file
    Reset {
        /// Confirm removal
        #[arg(long)]
        yes: bool,
    },
    /// View or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show all configuration values
    View,
    /// Set a configuration value
    Set { key: String, value: String },
    /// Remove a free-form setting
    #[command(alias = "del")]
    Unset { key: String },
}

impl Commands {
    fn renders_todos(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::List { .. } | Self::View { .. } | Self::Update { .. } | Self::Complete { .. }
        )
    }
}

/// Parse arguments, run the command and map the outcome to an exit code.
pub async fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here, on stdout
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

/// Storage faults are fatal (2); everything else is a user-facing error (1).
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<StoreError>() {
        Some(store_err) if !store_err.is_user_error() => 2,
        _ => 1,
    }
}

async fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    logger::init(&config.logging, &config.log_file_path(), cli.verbose)?;

    let store = TodoStore::new(config.database_path(), config.table_name.clone());
    let renderer = TableRenderer::from_terminal().with_icons(IconService::new(config.display.icon_theme));
    let mut out = std::io::stdout().lock();

    if cli.command.renders_todos() && !renderer.fits_table() && std::io::stdout().is_terminal() {
        eprintln!("{WARN_TERMINAL_TOO_SMALL}");
    }

    match cli.command {
        Commands::Init => {
            commands::init(&store, &mut out).await?;
        }
        Commands::Add {
            name,
            content,
            priority,
        } => {
            let todo = NewTodo::new(name).with_content(content).with_priority(priority);
            commands::add(&store, &renderer, &mut out, todo).await?;
        }
        Commands::List { status, limit } => {
            let limit = limit.unwrap_or(config.display.default_limit);
            commands::list(&store, &renderer, &mut out, status, limit).await?;
        }
        Commands::View { id } => commands::view(&store, &renderer, &mut out, id).await?,
        Commands::Update {
            id,
            name,
            content,
            priority,
        } => {
            let patch = TodoPatch {
                name,
                content,
                priority,
            };
            commands::update(&store, &renderer, &mut out, id, patch).await?;
        }
        Commands::Complete { id } => commands::complete(&store, &renderer, &mut out, id).await?,
        Commands::Delete { id } => {
            commands::delete(&store, &mut out, id).await?;
        }
        Commands::Reset { yes } => {
            commands::reset(&store, &mut out, yes).await?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::View => commands::config_view(&config, &mut out)?,
            ConfigCommands::Set { key, value } => commands::config_set(&mut config, &mut out, &key, &value)?,
            ConfigCommands::Unset { key } => commands::config_unset(&mut config, &mut out, &key)?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["todo", "add", "-n", "Buy milk", "-p", "3"]).unwrap();
        match cli.command {
            Commands::Add {
                name,
                content,
                priority,
            } => {
                assert_eq!(name, "Buy milk");
                assert_eq!(content, "");
                assert_eq!(priority, 3);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["todo", "list"]).unwrap();
        match cli.command {
            Commands::List { status, limit } => {
                assert_eq!(status, StatusFilter::Incomplete);
                assert_eq!(limit, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert!(matches!(
            Cli::try_parse_from(["todo", "comp", "--id", "4"]).unwrap().command,
            Commands::Complete { id: 4 }
        ));
        assert!(matches!(
            Cli::try_parse_from(["todo", "del", "--id", "4"]).unwrap().command,
            Commands::Delete { id: 4 }
        ));
    }

    #[test]
    fn test_negative_priority_rejected() {
        assert!(Cli::try_parse_from(["todo", "add", "-n", "x", "-p", "-1"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        let not_found = anyhow::Error::from(StoreError::NotFound(1));
        let fatal = anyhow::Error::from(StoreError::StorageUnavailable("disk".to_string()));
        assert_eq!(exit_status(&not_found), 1);
        assert_eq!(exit_status(&fatal), 2);
    }
}
