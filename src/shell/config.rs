use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MINIMUM_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Whole-year age floor applied on create and replace.
    pub minimum_age: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            minimum_age: DEFAULT_MINIMUM_AGE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.port = port.parse().context("PORT must be a port number")?;
        }
        if let Ok(age) = std::env::var("USER_MINIMUM_AGE") {
            config.minimum_age = age
                .parse()
                .context("USER_MINIMUM_AGE must be a whole number of years")?;
        }
        Ok(config)
    }
}
