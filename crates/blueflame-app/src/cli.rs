//! CLI argument definitions for the BlueFlame server.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Shahbaz AI chat backend powered by BlueFlame.
#[derive(Parser, Debug)]
#[command(name = "blueflame", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Address to bind the API server to.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Data directory for the SQLite document store.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long = "init-config")]
    pub init_config: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > BLUEFLAME_CONFIG env var > ~/.blueflame/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("BLUEFLAME_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > BLUEFLAME_PORT > PORT > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        pick_port(self.port, |key| std::env::var(key).ok(), config_port)
    }

    /// Resolve the bind host. `None` keeps the config value.
    pub fn resolve_host(&self) -> Option<String> {
        self.host.clone()
    }

    /// Resolve the data directory. `None` keeps the config value.
    pub fn resolve_data_dir(&self) -> Option<String> {
        self.data_dir
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
    }

    /// Resolve the log level. `None` keeps the config value.
    pub fn resolve_log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

/// Port precedence over an injectable environment lookup.
/// Unparseable env values are skipped.
fn pick_port(flag: Option<u16>, env: impl Fn(&str) -> Option<String>, config_port: u16) -> u16 {
    if let Some(p) = flag {
        return p;
    }
    for key in ["BLUEFLAME_PORT", "PORT"] {
        if let Some(p) = env(key).and_then(|v| v.trim().parse::<u16>().ok()) {
            return p;
        }
    }
    config_port
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".blueflame").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".blueflame").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "blueflame",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--data-dir",
            "/tmp/bf",
            "-l",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.resolve_host().as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.resolve_data_dir().as_deref(), Some("/tmp/bf"));
        assert_eq!(args.resolve_log_level().as_deref(), Some("debug"));
        assert!(!args.init_config);
    }

    #[test]
    fn test_port_flag_wins() {
        let env = env_of(&[("BLUEFLAME_PORT", "7000"), ("PORT", "6000")]);
        assert_eq!(pick_port(Some(9000), env, 8000), 9000);
    }

    #[test]
    fn test_blueflame_port_beats_port() {
        let env = env_of(&[("BLUEFLAME_PORT", "7000"), ("PORT", "6000")]);
        assert_eq!(pick_port(None, env, 8000), 7000);
    }

    #[test]
    fn test_port_env_fallback() {
        assert_eq!(pick_port(None, env_of(&[("PORT", "6000")]), 8000), 6000);
    }

    #[test]
    fn test_invalid_env_port_skipped() {
        let env = env_of(&[("BLUEFLAME_PORT", "not-a-port"), ("PORT", "99999")]);
        assert_eq!(pick_port(None, env, 8000), 8000);
    }
}
