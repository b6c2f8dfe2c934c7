use contracts::system::auth::{RouteTable, AUTH_COOKIE};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub routes: RouteTable,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built SPA bundle (`index.html`, wasm, assets)
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// HS256 secret; without it token claims are read unverified
    #[serde(default)]
    pub jwt_secret: Option<String>,
}

fn default_cookie_name() -> String {
    AUTH_COOKIE.to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            jwt_secret: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
dist_dir = "dist"

[auth]
cookie_name = "authToken"

[routes]
login = "/login"
user_home = "/records"
admin_home = "/admin"
admin = ["/admin"]
public = ["/", "/home", "/login", "/register"]
static_extensions = ["svg", "png", "jpg", "pdf", "ico", "js", "wasm", "css"]
"#;

impl Config {
    pub fn embedded() -> anyhow::Result<Self> {
        Ok(toml::from_str(DEFAULT_CONFIG)?)
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}: {}", addr, e))
    }

    /// `dist_dir` resolved against the executable directory
    pub fn dist_path(&self) -> PathBuf {
        resolve_path(&self.server.dist_dir)
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return Ok(toml::from_str(&contents)?);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    Config::embedded()
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Relative paths are taken from the executable directory when they exist
/// there, then from the working directory.
pub fn resolve_path(raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if let Some(candidate) = exe_dir().map(|dir| dir.join(path)) {
        if candidate.exists() {
            return candidate;
        }
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(e) => {
            tracing::warn!("cannot read the working directory: {}", e);
            path.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::embedded().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(config.auth.cookie_name, "authToken");
        assert!(config.auth.jwt_secret.is_none());
        assert_eq!(config.routes, RouteTable::default());
        assert_eq!(config.addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            dist_dir = "/srv/elos"

            [routes]
            admin = ["/admin", "/gestao"]
            "#,
        )
        .unwrap();
        assert_eq!(config.auth.cookie_name, "authToken");
        assert_eq!(config.routes.login, "/login");
        assert!(config.routes.is_admin_only("/gestao/relatorios"));
        assert_eq!(config.dist_path(), PathBuf::from("/srv/elos"));
    }

    #[test]
    fn test_relative_path_falls_back_to_working_dir() {
        let resolved = resolve_path("src/shared");
        assert!(resolved.is_absolute());
        assert!(resolved.join("config.rs").is_file());

        let missing = resolve_path("no-such-dist");
        assert_eq!(missing, std::env::current_dir().unwrap().join("no-such-dist"));
    }
}
