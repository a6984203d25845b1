mod cli;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use serde::Serialize;
use services::{ConfigError, ViewerConfig, ViewerSession};
use ui::{App, UiApp, build_app_context};

use crate::cli::{Cli, Command};

const COURSE_TITLE: &str = "APIs for AI Applications";

struct DesktopApp {
    session: Arc<ViewerSession>,
}

impl UiApp for DesktopApp {
    fn course_title(&self) -> String {
        COURSE_TITLE.to_string()
    }

    fn session(&self) -> Arc<ViewerSession> {
        Arc::clone(&self.session)
    }
}

#[derive(Debug, Serialize)]
struct ProgressReport {
    completed: Vec<u32>,
    percent: f64,
    last_viewed: Option<u32>,
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ConfigError::InvalidDbUrl(db_url.to_string()))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ConfigError::InvalidDbUrl(db_url.to_string()).into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let db_url = normalize_sqlite_url(&cli.db);
    let config = ViewerConfig::new(&cli.content, db_url)?;

    // Open + migrate SQLite before any command runs.
    prepare_sqlite_file(&config.db_url)?;
    let session = ViewerSession::from_config(&config).await?;
    tracing::debug!(content = ?config.content_base, db = %config.db_url, "viewer session ready");

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                session: Arc::new(session),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(COURSE_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Progress { json } => {
            let snapshot = session.load_progress().await?;
            let report = ProgressReport {
                completed: snapshot
                    .progress
                    .completed()
                    .iter()
                    .map(|id| id.value())
                    .collect(),
                percent: snapshot.progress.percent(),
                last_viewed: snapshot.last_viewed.map(|id| id.value()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let catalog = session.catalog();
                for entry in catalog.entries() {
                    let mark = if snapshot.progress.is_complete(entry.id()) {
                        "x"
                    } else {
                        " "
                    };
                    println!("[{mark}] Module {}: {}", entry.id(), entry.title());
                }
                println!(
                    "{}/{} complete ({:.1}%)",
                    snapshot.progress.completed_count(),
                    snapshot.progress.total(),
                    report.percent
                );
                if let Some(last) = report.last_viewed {
                    println!("Last viewed: module {last}");
                }
            }
            Ok(())
        }
        Command::Complete { module } => {
            let progress = session.mark_complete(module).await?;
            println!(
                "Module {module} complete. Progress: {:.1}%",
                progress.percent()
            );
            Ok(())
        }
        Command::Show { module } => {
            let opened = session.open_module(module).await;
            println!("{}", opened.markdown);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli::init_tracing(&cli);

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
