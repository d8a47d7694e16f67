use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub log_level: String,
    pub serper_api_key: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub search_base_url: String,
    pub gemini_base_url: String,
    pub postcodes_base_url: String,
    pub user_agent: String,
    /// Request one search result instead of ten and only the first two factors per category.
    pub test_mode: bool,
    pub factor_delay_ms: u64,
    pub output_dir: PathBuf,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("database_url", &"[redacted]")
            .field("serper_api_key", &"[redacted]")
            .field("gemini_api_key", &"[redacted]")
            .field("gemini_model", &self.gemini_model)
            .field("search_base_url", &self.search_base_url)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("postcodes_base_url", &self.postcodes_base_url)
            .field("user_agent", &self.user_agent)
            .field("test_mode", &self.test_mode)
            .field("factor_delay_ms", &self.factor_delay_ms)
            .field("output_dir", &self.output_dir)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
