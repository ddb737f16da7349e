//! Configuration loading.
//!
//! Sources, later ones winning:
//!
//! 1. Defaults (demo mode on port 8000)
//! 2. YAML file (`-f`/`--config`, missing file is fine)
//! 3. `MADRASAH_`-prefixed environment variables
//! 4. Bare `DATABASE_URL`, `DATABASE_NAME`, `PORT`, `HOST` variables, as
//!    injected by most hosting platforms
//!
//! `database_url` unset means no persistent store: the server runs in demo
//! mode with fixed credentials.

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "madrasah-admin", about = "Administrative backend for the madrasah website")]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short = 'f', long, env = "MADRASAH_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit
    #[arg(long)]
    pub validate: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// PostgreSQL connection string; unset runs the server in demo mode
    pub database_url: Option<String>,
    /// Logical database name, reported by diagnostics only
    pub database_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: None,
            database_name: None,
        }
    }
}

impl Config {
    pub fn load(args: &Args) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Yaml::file(&args.config))
            .merge(Env::prefixed("MADRASAH_"))
            .merge(Env::raw().only(&["DATABASE_URL", "DATABASE_NAME", "PORT", "HOST"]))
            .extract()?;
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_args() -> Args {
        Args {
            config: "config.yaml".to_string(),
            validate: false,
        }
    }

    #[test]
    fn test_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = Config::load(&default_args()).unwrap();
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8000);
            assert!(config.database_url.is_none());
            assert!(config.database_name.is_none());
            assert_eq!(config.bind_address(), "0.0.0.0:8000");
            Ok(())
        });
    }

    #[test]
    fn test_bare_env_overrides() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORT", "9001");
            jail.set_env("DATABASE_URL", "postgres://localhost/madrasah");
            jail.set_env("DATABASE_NAME", "madrasah");

            let config = Config::load(&default_args()).unwrap();
            assert_eq!(config.port, 9001);
            assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/madrasah"));
            assert_eq!(config.database_name.as_deref(), Some("madrasah"));
            Ok(())
        });
    }

    #[test]
    fn test_yaml_file_then_env_wins() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "port: 9002\nhost: 127.0.0.1\n")?;
            let config = Config::load(&default_args()).unwrap();
            assert_eq!(config.port, 9002);
            assert_eq!(config.host, "127.0.0.1");

            jail.set_env("PORT", "9003");
            let config = Config::load(&default_args()).unwrap();
            assert_eq!(config.port, 9003);
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("MADRASAH_HOST", "10.0.0.5");
            let config = Config::load(&default_args()).unwrap();
            assert_eq!(config.host, "10.0.0.5");
            Ok(())
        });
    }
}
