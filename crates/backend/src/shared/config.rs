use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub frontend: FrontendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON file with the resource catalog
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    /// Directory with the built frontend (trunk output)
    pub dist: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[catalog]
path = "data/resources.json"

[frontend]
dist = "dist"
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Current working directory
/// 3. Embedded default
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Some(exe_dir) = exe_dir() {
        candidates.push(exe_dir.join("config.toml"));
    }
    candidates.push(PathBuf::from("config.toml"));

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Resolve a configured path
///
/// Absolute paths are used as is. Relative ones are looked up next to the
/// executable first and fall back to the current directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    resolve_from(configured, exe_dir().as_deref())
}

fn resolve_from(configured: &str, exe_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if let Some(exe_dir) = exe_dir {
        let beside_exe = exe_dir.join(path);
        if beside_exe.exists() {
            return beside_exe;
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.path, "data/resources.json");
        assert_eq!(config.frontend.dist, "dist");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nport = 8080\n").is_err());
    }

    #[test]
    fn test_resolve_relative_path_falls_back_to_cwd() {
        let missing_dir = Path::new("/nonexistent-exe-dir");
        assert_eq!(
            resolve_from("data/resources.json", Some(missing_dir)),
            PathBuf::from("data/resources.json")
        );
        assert_eq!(resolve_from("dist", None), PathBuf::from("dist"));
    }

    #[test]
    fn test_resolve_absolute_path_is_kept() {
        let absolute = std::env::temp_dir().join("resources.json");
        let configured = absolute.to_string_lossy().to_string();
        assert_eq!(resolve_from(&configured, Some(Path::new("/opt"))), absolute);
    }

    #[test]
    fn test_resolve_prefers_file_next_to_exe() {
        let dir = std::env::temp_dir();
        let file = dir.join("resolve_test_catalog.json");
        std::fs::write(&file, "[]").unwrap();

        assert_eq!(resolve_from("resolve_test_catalog.json", Some(&dir)), file);

        std::fs::remove_file(file).unwrap();
    }
}
