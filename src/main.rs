use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use aq_screen::config::Settings;
use aq_screen::routes::{self, AppState};
use aq_screen::services::load_classifier;
use aq_screen::Screener;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting AQ screening service...");
    info!("Configuration loaded successfully");

    // Without a classifier no prediction is possible: stop here.
    let classifier = match load_classifier(&settings.model.path).await {
        Ok(classifier) => classifier,
        Err(e) => {
            error!("Failed to load classifier: {}", e);
            std::process::exit(1);
        }
    };

    let screener = match Screener::new(Arc::new(classifier), settings.model.variant) {
        Ok(screener) => screener,
        Err(e) => {
            error!(
                "Classifier at {} does not match encoder variant {}: {}",
                settings.model.path.display(),
                settings.model.variant,
                e
            );
            std::process::exit(1);
        }
    };

    info!("Screener initialized with encoder variant {}", screener.variant());

    let app_state = AppState { screener };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
