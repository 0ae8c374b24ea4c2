use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use sysdc_studio::app::Studio;
use sysdc_studio::flow::FlowLayout;
use sysdc_studio::kernel::services::adapters::{
    ensure_settings_file, load_settings, HttpWorkspaceClient, TokioExecutor, WatchToolChannel,
};
use sysdc_studio::kernel::services::ports::Settings;
use sysdc_studio::kernel::{Action, AppState, Severity};
use sysdc_studio::models::{load_from_dir, FlowDesign};

mod logging;

/// SysDC studio - design workspaces and flow layout
#[derive(Parser)]
#[command(name = "sysdc-studio", version)]
#[command(about = "Lay out SysDC flow designs and sync design workspaces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a `[nodes, edges]` flow design JSON file
    Layout {
        input: PathBuf,
        /// Write the laid-out design here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Download a workspace into a local directory
    Pull {
        id: String,
        dir: PathBuf,
        #[arg(long)]
        base_url: Option<String>,
        /// Seconds to wait for the backend
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
    /// Upload a local directory as a new workspace and print its id
    Push {
        dir: PathBuf,
        #[arg(long)]
        base_url: Option<String>,
        /// Seconds to wait for the backend
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _logging = logging::init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "unable to create settings file");
    }
    let settings = load_settings();
    match cli.command {
        Commands::Layout { input, output } => layout(&settings, &input, output.as_deref()),
        Commands::Pull {
            id,
            dir,
            base_url,
            timeout,
        } => pull(settings, id, &dir, base_url, Duration::from_secs(timeout)),
        Commands::Push {
            dir,
            base_url,
            timeout,
        } => push(settings, &dir, base_url, Duration::from_secs(timeout)),
    }
}

fn layout(settings: &Settings, input: &Path, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let data = std::fs::read_to_string(input)?;
    let (mut nodes, edges): FlowDesign = serde_json::from_str(&data)?;
    FlowLayout::new(settings.layout).apply(&mut nodes, &edges);

    let out = serde_json::to_string_pretty(&(nodes, edges))?;
    match output {
        Some(path) => std::fs::write(path, out)?,
        None => println!("{out}"),
    }
    Ok(())
}

fn studio(settings: &Settings, state: AppState, base_url: Option<String>) -> std::io::Result<Studio> {
    let base_url = base_url.unwrap_or_else(|| settings.workspace.base_url.clone());
    tracing::info!(%base_url, "using workspace backend");
    Ok(Studio::new(
        state,
        Arc::new(TokioExecutor::new()?),
        Arc::new(HttpWorkspaceClient::new(base_url)),
        Arc::new(WatchToolChannel::new()),
    ))
}

/// Fails with the session's error notification, if one is showing.
fn check_notification(studio: &Studio) -> Result<(), Box<dyn Error>> {
    match studio.state().notify.current() {
        Some(n) if n.severity == Severity::Error => Err(n.text.clone().into()),
        _ => Ok(()),
    }
}

fn pull(
    settings: Settings,
    id: String,
    dir: &Path,
    base_url: Option<String>,
    timeout: Duration,
) -> Result<(), Box<dyn Error>> {
    let mut studio = studio(&settings, AppState::new(&settings), base_url)?;
    studio.dispatch_and_wait(Action::WorkspaceOpen { id: id.clone() }, timeout);
    check_notification(&studio)?;
    if studio.state().workspace.id() != Some(id.trim()) {
        return Err(format!("timed out loading workspace {id}").into());
    }

    let files = studio.state().fs.read_all();
    for file in &files {
        let path = dir.join(file.name.trim_start_matches('/'));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &file.body)?;
    }
    println!("pulled {} files into {}", files.len(), dir.display());
    Ok(())
}

fn push(
    settings: Settings,
    dir: &Path,
    base_url: Option<String>,
    timeout: Duration,
) -> Result<(), Box<dyn Error>> {
    let fs = load_from_dir(dir)?;
    if fs.is_empty() {
        return Err(format!("no files under {}", dir.display()).into());
    }
    let target = fs.read_all().into_iter().next().map(|leaf| leaf.name);
    let state = AppState::with_fs(fs, target, &settings);

    let mut studio = studio(&settings, state, base_url)?;
    studio.dispatch_and_wait(Action::WorkspaceCreate, timeout);
    check_notification(&studio)?;
    let id = studio
        .state()
        .workspace
        .id()
        .ok_or("timed out creating workspace")?;
    println!("{id}");
    Ok(())
}
