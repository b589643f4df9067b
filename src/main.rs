//! wxbench: terminal dashboard for a weather-prediction model benchmark
//!
//! Browse the study's model metrics, correlations and feature importances
//! interactively, or print any tab as a summary, JSON or Markdown report.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wxbench::{
    cli::{self, ViewOptions},
    config::AppConfig,
    pipeline::{auto_detect_format, exit_codes, OutputTarget},
    reports::ReportFormat,
};

#[derive(Parser)]
#[command(name = "wxbench")]
#[command(version)]
#[command(about = "Weather model benchmark dashboard", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    3  Error occurred

EXAMPLES:
    # Open the dashboard on the comparison tab
    wxbench view --tab comparison

    # Every tab as Markdown
    wxbench view --all -o markdown -O results.md

    # Unknown tabs render a not-found view instead of failing
    wxbench view --tab forecast -o summary")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Tab to open (see `wxbench tabs`)
    #[arg(short, long)]
    tab: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Report every tab instead of the selected one
    #[arg(long)]
    all: bool,

    /// Disable mouse support in the dashboard
    #[arg(long)]
    no_mouse: bool,

    /// Hide tab icons
    #[arg(long)]
    no_icons: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard or print a tab as a report
    View(ViewArgs),

    /// List the dashboard tabs
    Tabs,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .wxbench.yaml in the current directory
    Init,
}

impl ViewArgs {
    fn overrides(&self) -> AppConfig {
        let mut builder = AppConfig::builder()
            .initial_tab(self.tab.clone())
            .mouse_enabled(!self.no_mouse)
            .show_icons(!self.no_icons);
        if let Some(format) = self.output {
            builder = builder.output_format(format);
        }
        builder.build()
    }
}

/// Log level for the subscriber.
///
/// The dashboard owns the terminal, so only warnings get through while it
/// runs unless the user asked for more.
fn log_level(cli: &Cli) -> &'static str {
    if cli.verbose {
        return "debug";
    }
    if cli.quiet {
        return "warn";
    }
    match &cli.command {
        Commands::View(args) => {
            let target = OutputTarget::from_option(args.output_file.clone());
            let format = args.output.unwrap_or(ReportFormat::Auto);
            if auto_detect_format(format, &target) == ReportFormat::Tui {
                "warn"
            } else {
                "info"
            }
        }
        _ => "info",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = log_level(&cli);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let mut stdout = io::stdout();
    let exit_code = match cli.command {
        Commands::View(args) => {
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &args.overrides());
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            let options = ViewOptions {
                output_file: args.output_file,
                all: args.all,
                no_color: cli.no_color,
                quiet: cli.quiet,
            };
            cli::run_view(&config, &options)
        }

        Commands::Tabs => cli::run_tabs(&mut stdout),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "wxbench", &mut stdout);
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => cli::run_config_schema(output.as_deref(), &mut stdout),

        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(cli.config.as_deref(), &mut stdout),
            ConfigAction::Path => cli::run_config_path(cli.config.as_deref(), &mut stdout),
            ConfigAction::Init => std::env::current_dir()
                .context("cannot determine current directory")
                .and_then(|dir| cli::run_config_init(&dir)),
        },
    };

    match exit_code {
        Ok(code) if code == exit_codes::SUCCESS => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
