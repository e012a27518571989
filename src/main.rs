use clap::Parser;
use scout::api::NetworkClient;
use scout::core::config;
use scout::core::state::App;
use scout::store::{PlayerStore, PreferenceStore};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "scout", about = "Football Manager player scouting in the terminal")]
struct Args {
    /// Override the API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Directory for saved players and preferences
    #[arg(long)]
    data_dir: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to scout.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("scout.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        config::ScoutConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.base_url.as_deref(),
        args.data_dir.as_deref(),
    );

    log::info!(
        "Scout starting up: base_url={} data_dir={}",
        resolved.base_url,
        resolved.data_dir.display()
    );

    let Some(api_key) = resolved.api_key.clone() else {
        return Err(std::io::Error::other(
            "RapidAPI key must be set (config file or RAPIDAPI_KEY env var)",
        ));
    };

    let client = NetworkClient::new(
        api_key,
        resolved.api_host.clone(),
        resolved.base_url.clone(),
    );
    let players = PlayerStore::open(resolved.players_path());
    let preferences =
        PreferenceStore::open(resolved.preferences_path()).map_err(std::io::Error::other)?;

    let app = App::new(Arc::new(client), players, preferences);
    scout::tui::run(app)
}
