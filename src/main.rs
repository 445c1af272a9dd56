mod common;
mod config;
mod network;
mod storage;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use network::{ApiClient, MessagesApi};
use tokio::sync::mpsc;
use ui::ContactApp;

#[derive(Parser)]
#[command(
    name = "contact_desk",
    version,
    about = "Desktop client for the contact messages API"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Backend origin, e.g. http://localhost:8080
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);
    let env_base_url = std::env::var(config::BACKEND_URL_ENV).ok();
    let base_url =
        config::resolve_base_url(cli.base_url.as_deref(), env_base_url.as_deref(), &app_config);

    let endpoint = match config::messages_endpoint(&base_url) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };
    log::info!("Using messages endpoint {endpoint}");

    run_client(MessagesApi::new(endpoint)).await
}

async fn run_client(api: MessagesApi) -> Result<(), eframe::Error> {
    // UI -> network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    tokio::spawn(ApiClient::new(api, event_tx, cmd_rx).run());

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Contact Messages",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ContactApp should only be initialized once");

            Ok(Box::new(ContactApp::new(cc, cmd_tx.clone(), event_receiver)))
        }),
    )
}
