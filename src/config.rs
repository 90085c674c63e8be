/// Application configuration, parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection URL. The observation file is opened read-only.
    pub database_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://Resources/hawaii.sqlite?mode=ro".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8001".to_string())
                .parse()
                .expect("PORT must be a valid u16"),
        }
    }
}
