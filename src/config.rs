use std::env;

/// Process-wide configuration, loaded once at startup from the environment.
///
/// Nothing in request-handling code reads environment variables directly;
/// everything flows through this struct (and the services built from it,
/// e.g. `TokenService`).
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub server_port: u16,
    pub server_host: String,
}

/// Fallback signing secret used outside of production when `JWT_SECRET`
/// is not set.
const DEV_JWT_SECRET: &str = "taskvault-dev-secret";

impl Config {
    pub fn from_env() -> Self {
        let production = env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if production => panic!("JWT_SECRET must be set in production"),
            _ => {
                log::warn!("JWT_SECRET not set, falling back to the development default");
                DEV_JWT_SECRET.to_string()
            }
        };

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret,
            token_ttl_days: env::var("TOKEN_TTL_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("TOKEN_TTL_DAYS must be a number"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
