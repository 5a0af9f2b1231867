use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

/// Hard ceiling for request bodies, 2 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: default_db_path(), timeout_secs: default_timeout(), sqlx_logging: false }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_body")]
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_body_bytes: default_max_body() }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 3000 }
fn default_db_path() -> String { "data/single.db".into() }
fn default_timeout() -> u64 { 5 }
fn default_max_body() -> usize { DEFAULT_MAX_BODY_BYTES }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or defaults when it is absent), apply env overrides, validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => AppConfig::default(),
            Err(e) => return Err(e),
        };
        cfg.apply_env(|k| std::env::var(k).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Overlay deployment variables: `HOST`, `PORT`, `DATABASE_PATH`, `TOKIO_WORKER_THREADS`.
    ///
    /// A variable that is set but does not parse is an error, not a fallback.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow!("PORT={port:?} is not a valid port: {e}"))?;
        }
        if let Some(path) = lookup("DATABASE_PATH") {
            self.database.path = path;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS") {
            let threads = w
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow!("TOKIO_WORKER_THREADS={w:?} is not a thread count: {e}"))?;
            self.server.worker_threads = Some(threads);
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        if self.limits.max_body_bytes == 0 {
            return Err(anyhow!("limits.max_body_bytes must be > 0"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(anyhow!("database.path is empty; set it in config.toml or DATABASE_PATH"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("database.timeout_secs must be a positive number of seconds"));
        }
        // path is spliced into a sqlite:// URL as-is
        if self.path.contains(['?', '#']) {
            return Err(anyhow!("database.path must not contain '?' or '#': {}", self.path));
        }
        Ok(())
    }

    /// sqlx connection URL; `mode=rwc` creates the file on first open.
    /// Only valid for paths accepted by `validate`.
    pub fn url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}
