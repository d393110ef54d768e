//! Application Configuration
//! Mission: Load all runtime settings from the environment in one place

use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub access_token_secret: String,
    pub mongodb_uri: String,
    pub db_name: String,
    pub jwt_expiration_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .unwrap_or(5000);

        let access_token_secret = std::env::var("ACCESS_TOKEN_SECRET")
            .context("ACCESS_TOKEN_SECRET must be set")?;

        let mongodb_uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let db_name = std::env::var("MONGODB_DB").unwrap_or_else(|_| "BistroBossDB".to_string());

        let jwt_expiration_hours = std::env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1);

        Ok(Self {
            port,
            access_token_secret,
            mongodb_uri,
            db_name,
            jwt_expiration_hours,
        })
    }
}
