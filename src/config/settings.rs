const DATABASE_PATH_VAR: &str = "DATABASE_PATH";
const DEFAULT_DATABASE_PATH: &str = "swiss_tournament.db";

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self::from_path(std::env::var(DATABASE_PATH_VAR).ok())
    }
}

impl DatabaseSettings {
    /// Settings for the given file, falling back to the default database file
    pub fn from_path(path: Option<String>) -> Self {
        Self {
            path: path.unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            pool_size: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
        }
    }

    /// Command-line database path takes precedence over the environment
    pub fn with_database_path(mut self, path: Option<&str>) -> Self {
        if let Some(path) = path {
            self.database.path = path.to_string();
        }
        self
    }
}
