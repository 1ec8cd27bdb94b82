use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use std::io;
use std::sync::Arc;

use taskkeep::auth::{AuthService, PasswordHasher, TokenService};
use taskkeep::config::Config;
use taskkeep::routes;
use taskkeep::store::Store;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let store = match &config.database_url {
        Some(url) => Store::connect(url)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
        None => {
            log::warn!("DATABASE_URL not set; data will be kept in memory only");
            Store::in_memory()
        }
    };

    let tokens = Arc::new(TokenService::new(&config.jwt_secret, config.token_lifetime));
    let auth_service = AuthService::new(
        store.clone(),
        PasswordHasher::new(config.bcrypt_cost),
        tokens,
    );

    log::info!(
        "Starting taskkeep at {} ({} store)",
        config.server_url(),
        store.backend_name()
    );
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config(store.clone(), auth_service.clone()))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
