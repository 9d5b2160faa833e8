pub const DATABASE_PATH_ENV: &str = "TOURNAMENT_DATABASE_PATH";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    pub busy_timeout_ms: u64,
    pub connection_timeout_ms: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "tournament.db".to_string(),
            pool_size: 4,
            busy_timeout_ms: 5000,
            connection_timeout_ms: 10_000,
        }
    }
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            path: std::env::var(DATABASE_PATH_ENV).unwrap_or(defaults.path),
            ..defaults
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
        }
    }

    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.database.path = path;
        }
        self
    }
}
