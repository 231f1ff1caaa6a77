use std::io;

use actix_web::HttpServer;
use quiz_relay::{app_state::AppState, config::Config, server::build_app};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if let Err(err) = config.validate() {
        log::error!("{}", err);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, err.to_string()));
    }

    let state = AppState::new(config.clone())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let (host, port) = config.bind_address();
    log::info!("Allowing cross-origin requests from {}", config.allowed_origin);

    let server = HttpServer::new(move || build_app(state.clone())).bind((host.as_str(), port))?;

    log::info!("Server running at http://{}:{}", host, port);
    server.run().await
}
