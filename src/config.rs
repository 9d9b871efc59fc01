use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub token_ttl_minutes: i64,
    pub db_max_connections: u32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;
        let jwt_secret = env_required("JWT_SECRET")?;

        if jwt_secret.len() < 16 {
            return Err("JWT_SECRET must be at least 16 characters".to_string());
        }

        let host: IpAddr = env_or("EMS_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid EMS_HOST: {e}"))?;

        let port: u16 = env_or("EMS_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid EMS_PORT: {e}"))?;

        let max_body_size: usize = env_or("EMS_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid EMS_MAX_BODY_SIZE: {e}"))?;

        let token_ttl_minutes: i64 = env_or("EMS_TOKEN_TTL_MINUTES", "60")
            .parse()
            .map_err(|e| format!("Invalid EMS_TOKEN_TTL_MINUTES: {e}"))?;

        if token_ttl_minutes <= 0 {
            return Err("EMS_TOKEN_TTL_MINUTES must be positive".to_string());
        }

        let db_max_connections: u32 = env_or("EMS_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid EMS_DB_MAX_CONNECTIONS: {e}"))?;

        let log_level = env_or("EMS_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            max_body_size,
            token_ttl_minutes,
            db_max_connections,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
