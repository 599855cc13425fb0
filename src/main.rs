//! # Arch Compass CLI (`compass`)
//!
//! Browse the architecture pattern catalog, compare patterns for a project
//! context, and start the HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! compass --config ./config/compass.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `compass init` | Create the SQLite database and run schema migrations |
//! | `compass seed` | Load the built-in patterns into the catalog |
//! | `compass import <file>` | Load patterns from a TOML or JSON catalog file |
//! | `compass patterns` | List catalog patterns, optionally filtered |
//! | `compass show <id>` | Show one pattern in full |
//! | `compass criteria` | Show the weighted comparison criteria |
//! | `compass compare <id> <id>...` | Rank patterns and recommend one |
//! | `compass serve` | Start the JSON HTTP server |
//!
//! Set `COMPASS_LOG` (e.g. `COMPASS_LOG=debug`) to control log output on stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use arch_compass::engine::models::{
    Category, Level, PatternFilter, ProjectContext, TeamSize, Timeline,
};
use arch_compass::{compare, config, import, migrate, patterns, server};

/// Arch Compass CLI — weighted comparison of software architecture patterns.
#[derive(Parser)]
#[command(
    name = "compass",
    about = "Arch Compass — compare software architecture patterns for your project",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/compass.toml")]
    config: PathBuf,

    /// Enable debug logging (overridden by `COMPASS_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Idempotent; running it multiple times is safe.
    Init,

    /// Upsert the built-in patterns (one per category) into the catalog.
    Seed,

    /// Import patterns from a catalog file.
    ///
    /// The file holds a `patterns` array in TOML (`[[patterns]]`) or JSON
    /// (`.json` extension). All records are validated before any is written.
    Import {
        /// Path to the catalog file.
        file: PathBuf,
    },

    /// List catalog patterns.
    Patterns {
        /// Only patterns in this category (e.g. `serverless`, `event-driven`).
        #[arg(long)]
        category: Option<Category>,

        /// Only patterns with this complexity (`low`, `medium`, `high`).
        #[arg(long)]
        complexity: Option<Level>,

        /// Only patterns with this scalability (`low`, `medium`, `high`).
        #[arg(long)]
        scalability: Option<Level>,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show a pattern by id.
    Show {
        /// Pattern id.
        id: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show the weighted comparison criteria.
    Criteria {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Compare two or more patterns for a project context.
    ///
    /// Context flags only shape the reasoning text; scores come from the
    /// fixed criterion weights.
    Compare {
        /// Pattern ids to compare (at least two).
        #[arg(required = true)]
        ids: Vec<String>,

        /// Size of your team: `small`, `medium`, or `large`.
        #[arg(long, default_value = "medium")]
        team_size: TeamSize,

        /// Budget: `low`, `medium`, or `high`.
        #[arg(long, default_value = "medium")]
        budget: Level,

        /// Timeline: `short`, `medium`, or `long`.
        #[arg(long, default_value = "medium")]
        timeline: Timeline,

        /// Expected scale: `low`, `medium`, or `high`.
        #[arg(long, default_value = "medium")]
        scale: Level,

        /// Project complexity: `low`, `medium`, or `high`.
        #[arg(long, default_value = "medium")]
        complexity: Level,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP server.
    ///
    /// Binds to `[server].bind`, applies migrations, and seeds the built-in
    /// catalog if it is empty and `[catalog].seed_builtin` is set.
    Serve,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("COMPASS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let load = || config::load_config(&cli.config);

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&load()?).await?;
            println!("Database initialized successfully.");
        }
        Commands::Seed => {
            import::run_seed(&load()?).await?;
        }
        Commands::Import { file } => {
            import::run_import(&load()?, &file).await?;
        }
        Commands::Patterns {
            category,
            complexity,
            scalability,
            json,
        } => {
            let filter = PatternFilter {
                category,
                complexity,
                scalability,
            };
            patterns::run_list(&load()?, &filter, json).await?;
        }
        Commands::Show { id, json } => {
            patterns::run_show(&load()?, &id, json).await?;
        }
        Commands::Compare {
            ids,
            team_size,
            budget,
            timeline,
            scale,
            complexity,
            json,
        } => {
            let context = ProjectContext {
                team_size,
                budget,
                timeline,
                expected_scale: scale,
                complexity,
            };
            compare::run_compare(&load()?, &ids, context, json).await?;
        }
        Commands::Serve => {
            server::run_server(&load()?).await?;
        }
        Commands::Criteria { json } => {
            // Criteria are static and need no config.
            patterns::run_criteria(json)?;
        }
    }

    Ok(())
}
