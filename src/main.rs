use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tilemenu::{logging, tui};

#[derive(Parser)]
#[command(name = "tilemenu", about = "Terminal tile-grid launcher.")]
struct Cli {
    /// Project directory containing project.json and assets/ (defaults to current)
    #[arg(short, long)]
    dir: Option<String>,

    /// Fixed column count (skips width-based estimation)
    #[arg(long)]
    columns: Option<u16>,

    /// Disable sound cues
    #[arg(long)]
    mute: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _logging = logging::init();

    let cli = Cli::parse();
    let project_dir = PathBuf::from(cli.dir.unwrap_or_else(|| ".".into()));

    info!("tilemenu starting in {}", project_dir.display());

    tui::runner::run_tui(&project_dir, cli.columns, cli.mute).await
}
