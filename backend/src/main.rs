use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use backend::config::Config;
use backend::identity::HeaderIdentity;
use backend::lifecycle::FormService;
use backend::store::FormStore;
use backend::AppState;
use env_logger::Env;
use log::{error, info};
use std::io;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let store = FormStore::open(&config.database_path).map_err(|e| {
        error!("cannot open {}: {}", config.database_path.display(), e);
        io::Error::other(e)
    })?;
    info!("using database {}", store.path().display());

    let state = AppState::new(
        FormService::new(store),
        Arc::new(HeaderIdentity::new(config.identity_header.clone())),
        config.json_limit,
    );

    let url = format!("http://{}:{}", config.host, config.port);
    info!("Server running at {}", url);
    info!("trusting principal header {}", config.identity_header);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| state.configure(cfg))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
