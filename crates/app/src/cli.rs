use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use course_core::model::ModuleId;
use services::config::{DEFAULT_CONTENT_BASE, DEFAULT_DB_URL};

/// Desktop viewer for a seven-module course.
#[derive(Parser, Debug)]
#[command(name = "course-viewer", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Content base: an http(s) URL or a directory containing `content/`.
    #[arg(long, global = true, env = "COURSE_CONTENT_BASE", default_value = DEFAULT_CONTENT_BASE)]
    pub content: String,

    /// SQLite database holding completion progress.
    #[arg(long, global = true, env = "COURSE_DB_URL", default_value = DEFAULT_DB_URL)]
    pub db: String,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Launch the desktop viewer (default).
    Ui,
    /// Print completed modules and overall progress.
    Progress {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Mark a module as complete.
    Complete { module: ModuleId },
    /// Print a module's markdown.
    Show { module: u32 },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Filter directives for the workspace crates at the level chosen by `-v`.
fn default_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    ["course_viewer", "services", "storage", "ui"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing based on CLI flags. Logs go to stderr so command output stays clean.
pub fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
