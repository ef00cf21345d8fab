//! Command-line interface.
//!
//! Without a subcommand the binary launches the TUI; the subcommands give
//! headless access to the roster and the router.

mod completions;

use crate::components::student_detail::detail_lines;
use crate::config::Config;
use crate::model::Roster;
use crate::router::{Route, View};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use tracing::info;

/// Browse a student roster and their retakes in the terminal
#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Browse a student roster and their retakes in the terminal", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use an alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start the TUI on this route, e.g. "studentDetail/Anna Smirnova/G102"
    #[arg(long, value_name = "ROUTE")]
    pub route: Option<String>,

    /// Override the configured theme (dark, light, nocolor)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every student with id, name and group
    List,
    /// Resolve a route and print what its page shows
    Show {
        /// Route path, e.g. "student/2" or "studentDetail/Ivan Petrov/G101"
        route: String,
    },
    /// Write the default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Configuration file location
    Config,
    /// Shows logs location and how to view them
    Logs,
    /// Generate shell completions
    Completions {
        /// Target shell; detected from $SHELL when omitted
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file this invocation reads
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::get_config_path)
    }

    /// Route to open the TUI on, if one was given
    pub fn initial_route(&self) -> Result<Option<Route>> {
        self.route
            .as_deref()
            .map(|route| {
                route
                    .parse::<Route>()
                    .with_context(|| format!("Invalid --route {:?}", route))
            })
            .transpose()
    }

    /// Execute the subcommand. Returns `false` when the TUI should launch.
    pub fn execute(&self) -> Result<bool> {
        let Some(command) = &self.command else {
            return Ok(false);
        };

        let config_path = self.config_path();
        match command {
            Commands::List => {
                info!("CLI: list command executed");
                let roster = load_roster(&config_path)?;
                for line in list_lines(&roster) {
                    println!("{}", line);
                }
            }
            Commands::Show { route } => {
                info!("CLI: show {:?}", route);
                let roster = load_roster(&config_path)?;
                for line in show_lines(&roster, route)? {
                    println!("{}", line);
                }
            }
            Commands::InitConfig { force } => init_config(&config_path, *force)?,
            Commands::Config => println!("{}", config_path.display()),
            Commands::Logs => {
                let log_file = crate::utils::get_log_dir().join("roster.log");
                println!("{}", log_file.display());
                println!("View logs in real-time: tail -f {:?}", log_file);
            }
            Commands::Completions { shell } => completions::generate(*shell)?,
        }
        Ok(true)
    }
}

fn load_roster(config_path: &Path) -> Result<Roster> {
    Config::load_or_default(config_path)
        .context("Failed to load configuration")?
        .roster()
}

/// One line per student: `id<TAB>name<TAB>group`
pub fn list_lines(roster: &Roster) -> Vec<String> {
    roster
        .students()
        .iter()
        .map(|s| format!("{}\t{}\t{}", s.id, s.name, s.group))
        .collect()
}

/// Text shown by the page at `route`.
///
/// A malformed route is an error; a well-formed route that matches no
/// student yields no lines, like the blank page in the TUI.
pub fn show_lines(roster: &Roster, route: &str) -> Result<Vec<String>> {
    let route: Route = route
        .parse()
        .with_context(|| format!("Invalid route {:?}", route))?;

    Ok(match route.resolve(roster) {
        View::List => list_lines(roster),
        View::Detail(student) => detail_lines(student, roster.retake_subjects()),
    })
}

/// Write the default config to `config_path`
pub fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {:?} (use --force to overwrite)",
            config_path
        );
    }
    Config::default().save(config_path)?;
    info!("Wrote default config to {:?}", config_path);
    println!("Wrote {}", config_path.display());
    Ok(())
}
