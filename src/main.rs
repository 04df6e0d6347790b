use open_match::cli;
use open_match::config::Settings;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!(
        "Configuration loaded (matching: {}, search: {}, catalogue: {:?})",
        settings.endpoints.matching_url, settings.endpoints.search_url, settings.catalogue.source
    );

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = cli::run(args, &settings).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
