//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["folio.toml", ".folio.toml"];
const ENV_PREFIX: &str = "FOLIO_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `FOLIO_*` environment variables (e.g. `FOLIO_BEHAVIOR__THINKING_DELAY_MS`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./folio.toml` or `./.folio.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/folio/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path, Self::project_config_path())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>, project_path: Option<PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = project_path {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Self::env())
    }

    /// Load defaults plus `FOLIO_*` environment variables, skipping all files
    /// (for --no-config)
    pub fn load_env_only() -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env())
            .extract()
            .map_err(Box::new)
    }

    fn env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config sources being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        let env_keys: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(ENV_PREFIX) && key != "FOLIO_LOG")
            .collect();
        if env_keys.is_empty() {
            println!("  [     ] Env:     {}* variables", ENV_PREFIX);
        } else {
            println!("  [FOUND] Env:     {}", env_keys.join(", "));
        }

        if let Some(path) = config_path {
            if path.exists() {
                println!("  [FOUND] Explicit: {}", path.display());
            } else {
                println!("  [MISSING] Explicit: {}", path.display());
            }
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./folio.toml or ./.folio.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_env_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("folio.toml", "[behavior]\nthinking_delay_ms = 250\n")?;
            jail.set_env("FOLIO_BEHAVIOR__THINKING_DELAY_MS", "0");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.behavior.thinking_delay_ms, 0);
            Ok(())
        });
    }

    #[test]
    fn test_project_file_applies_without_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(".folio.toml", "[output]\nformat = \"json\"\n")?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.output.format, Some(folio_domain::OutputFormat::Json));
            Ok(())
        });
    }

    #[test]
    fn test_env_only_skips_files_but_keeps_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("folio.toml", "[behavior]\nthinking_delay_ms = 250\n")?;
            jail.set_env("FOLIO_OUTPUT__FORMAT", "json");

            let config = ConfigLoader::load_env_only().map_err(|e| *e)?;
            assert_eq!(config.output.format, Some(folio_domain::OutputFormat::Json));
            assert_eq!(config.behavior.thinking_delay_ms, 1000);
            Ok(())
        });
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("folio"));
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "folio.toml",
                "[behavior]\nthinking_delay_ms = 10\n[output]\ncolor = false\n",
            )?;
            jail.create_file("explicit.toml", "[behavior]\nthinking_delay_ms = 20\n")?;

            let config = ConfigLoader::load(Some(Path::new("explicit.toml"))).map_err(|e| *e)?;

            assert_eq!(config.behavior.thinking_delay_ms, 20);
            // Untouched keys survive from the lower-priority file
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[behavior]\nthinking_delay_ms = \"soon\"\n").unwrap();

        let result: Result<FileConfig, _> = ConfigLoader::figment(Some(&path), None).extract();
        assert!(result.is_err());
    }
}
