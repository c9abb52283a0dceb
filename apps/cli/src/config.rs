//! CLI configuration

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the jobtrack API
    pub api_url: String,
}
