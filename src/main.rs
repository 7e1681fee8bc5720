use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use neoprefs::config::{PrefStore, PrefsFile};
use neoprefs::logging::init_tracing;
use neoprefs::ui::app::App;
use neoprefs::ui::page::PageId;
use neoprefs::ui::runtime;

/// Terminal editor for launcher dock and drawer preferences.
#[derive(Debug, Parser)]
#[command(name = "neoprefs", version, about)]
struct Cli {
    /// Preferences file (default: <config dir>/neo-launcher/prefs.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Page shown at startup
    #[arg(long, value_enum, default_value_t = PageId::Dock)]
    page: PageId,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.unwrap_or_else(PrefsFile::default_path);
    let store = PrefStore::open(path.clone())
        .with_context(|| format!("Failed to open preferences at {}", path.display()))?;
    tracing::info!(page = ?cli.page, "Starting preferences UI");

    runtime::run(App::new(Box::new(store), cli.page))?;
    Ok(())
}
