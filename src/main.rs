use std::env;

use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;
use pushkind_common::models::config::CommonServerConfig;

use restaurant_pos::repository::DieselRepository;
use restaurant_pos::routes::{api_v1, json_config};

/// Process settings read from the environment (and `.env` when present).
struct Settings {
    database_url: String,
    address: String,
    port: u16,
    cookie_domain: String,
    secret: Option<String>,
    auth_service_url: String,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Settings {
    fn from_env() -> Result<Self, String> {
        let port = var_or("PORT", "8080");
        let port = port.parse::<u16>().unwrap_or_else(|_| {
            log::warn!("PORT `{port}` is not a valid port, using 8080");
            8080
        });

        let auth_service_url = env::var("AUTH_SERVICE_URL")
            .map_err(|_| "AUTH_SERVICE_URL environment variable not set".to_string())?;

        Ok(Self {
            database_url: var_or("DATABASE_URL", "app.db"),
            address: var_or("ADDRESS", "127.0.0.1"),
            port,
            cookie_domain: var_or("DOMAIN", "localhost"),
            secret: env::var("SECRET_KEY").ok(),
            auth_service_url,
        })
    }

    fn session_key(&self) -> Key {
        match &self.secret {
            Some(secret) => Key::from(secret.as_bytes()),
            None => {
                log::warn!("SECRET_KEY not set, sessions will not survive a restart");
                Key::generate()
            }
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(message) => {
            log::error!("{message}");
            std::process::exit(1);
        }
    };

    let secret_key = settings.session_key();
    let common_config = CommonServerConfig {
        secret: settings.secret.clone().unwrap_or_default(),
        auth_service_url: settings.auth_service_url.clone(),
    };

    let repo = match establish_connection_pool(&settings.database_url) {
        Ok(pool) => DieselRepository::new(pool),
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let cookie_domain = format!(".{}", settings.cookie_domain);
    log::info!(
        "Serving restaurant API on {}:{}",
        settings.address,
        settings.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .cookie_domain(Some(cookie_domain.clone()))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(common_config.clone()))
            .service(
                web::scope("/api")
                    .app_data(json_config())
                    .configure(api_v1),
            )
    })
    .bind((settings.address.as_str(), settings.port))?
    .run()
    .await
}
