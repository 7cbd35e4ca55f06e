use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pillarscope::cli::OutputFormat;
use pillarscope::cli::commands::assess::AssessOptions;

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "pillarscope")]
#[command(
    version,
    about = "Five-pillar architecture assessment with LLM agents and heuristic fallback"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess an architecture description across all five pillars
    Assess {
        #[arg(help = "Architecture description (text or markdown)")]
        architecture: PathBuf,
        #[arg(long, help = "Incident export (CSV) to fold into the assessment")]
        cases: Option<PathBuf>,
        #[arg(
            long = "service",
            help = "Service detected in architecture diagrams (repeatable)"
        )]
        services: Vec<String>,
        #[arg(long, help = "Skip the LLM and use heuristic scoring only")]
        no_llm: bool,
        #[arg(short = 'f', long, default_value = "text", value_parser = parse_output_format, help = "Output format: text, json")]
        format: OutputFormat,
        #[arg(short = 'o', long, help = "Write the scorecard to a file")]
        output: Option<PathBuf>,
    },

    /// Analyze an incident export on its own
    Cases {
        #[arg(help = "Incident export (CSV)")]
        csv: PathBuf,
        #[arg(short = 'f', long, default_value = "text", value_parser = parse_output_format, help = "Output format: text, json")]
        format: OutputFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text (toml), json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Write a project configuration file
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mpillarscope encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            pillarscope::cli::Output::default().error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Assess {
            architecture,
            cases,
            services,
            no_llm,
            format,
            output,
        } => {
            pillarscope::cli::commands::assess::run(AssessOptions {
                architecture,
                cases,
                services,
                no_llm,
                format,
                output,
                quiet: cli.quiet,
            })?;
        }
        Commands::Cases { csv, format } => {
            pillarscope::cli::commands::cases::run(&csv, format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                pillarscope::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                pillarscope::cli::commands::config::path()?;
            }
            ConfigAction::Init { force } => {
                pillarscope::cli::commands::config::init(force)?;
            }
        },
    }

    Ok(())
}
