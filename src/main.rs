use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use group_details::config::{ConfigError, StoreConfig};
use group_details::loader::load_group_detail;
use group_details::store::{RestStore, StoreError, TableStore};
use group_details::view::{GroupDetailsScreen, render};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "group-details", about = "Show a group and its members from the table store")]
struct Cli {
    /// Table store base URL.
    #[arg(long, env = "SUPABASE_URL")]
    base_url: Option<String>,

    /// Table store API key.
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Print the settled render model as JSON instead of streaming frames.
    #[arg(long)]
    json: bool,

    /// Identifier of the group to show.
    group_id: String,
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = StoreConfig::resolve(cli.base_url, cli.api_key)?;
    let store: Arc<dyn TableStore> = Arc::new(RestStore::new(&config)?);
    tracing::info!(base_url = %config.base_url, group_id = %cli.group_id, "group details starting");

    if cli.json {
        let state = load_group_detail(store.as_ref(), &cli.group_id).await;
        let out = serde_json::to_string_pretty(&render(&state))?;
        writeln!(io::stdout(), "{out}")?;
        return Ok(());
    }

    let mut screen = GroupDetailsScreen::mount(store, cli.group_id);
    let mut stdout = io::stdout();
    let mut shown = screen.render();
    write!(stdout, "{shown}")?;
    while let Some(next) = screen.next_update().await {
        if next != shown {
            writeln!(stdout, "---")?;
            write!(stdout, "{next}")?;
            shown = next;
        }
    }
    screen.unmount();
    Ok(())
}
