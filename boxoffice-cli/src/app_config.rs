use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use serde::Deserialize;
use std::env;

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub movies: Vec<MovieConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String { "warn".to_string() }

/// A movie seeded into the catalog at start-up
#[derive(Debug, Deserialize, Clone)]
pub struct MovieConfig {
    pub title: String,
    pub show_timings: Vec<String>,
    pub total_seats: u32,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::with_defaults()
            // Per-mode catalog, e.g. config/development.toml
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(File::with_name("config/local").required(false))
            // Eg.. `BOXOFFICE__LOGGING__FILTER=debug` sets `logging.filter`
            .add_source(config::Environment::with_prefix("BOXOFFICE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// The built-in catalog, compiled into the binary
    fn with_defaults() -> ConfigBuilder<DefaultState> {
        config::Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let config: Config = Config::with_defaults()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.filter, "warn");
        let titles: Vec<_> = config.movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Shaitaan", "Article 370"]);
        assert_eq!(config.movies[0].show_timings, vec!["10:00 AM", "1:00 PM", "4:00 PM"]);
        assert_eq!(config.movies[1].total_seats, 60);
    }

    #[test]
    fn test_override_replaces_movies() {
        let overrides = r#"
            [logging]
            filter = "boxoffice_catalog=debug"

            [[movies]]
            title = "Matinee"
            show_timings = ["9:00 AM"]
            total_seats = 3
        "#;

        let config: Config = Config::with_defaults()
            .add_source(File::from_str(overrides, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.logging.filter, "boxoffice_catalog=debug");
        assert_eq!(config.movies.len(), 1);
        assert_eq!(config.movies[0].title, "Matinee");
        assert_eq!(config.movies[0].total_seats, 3);
    }
}
