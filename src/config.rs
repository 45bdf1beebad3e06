use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Не выводить пустую комбинацию (без модификаторов) как отдельный submap
    #[serde(default)]
    pub skip_empty_submap: bool,
    /// Пропускать вручную написанные блоки `submap=...` до `submap=reset`
    #[serde(default = "default_suppress_submap_blocks")]
    pub suppress_submap_blocks: bool,
}

fn default_suppress_submap_blocks() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
            },
            generator: GeneratorConfig {
                skip_empty_submap: false,
                suppress_submap_blocks: default_suppress_submap_blocks(),
            },
        }
    }
}

impl Config {
    /// Загружает конфигурацию: значения по умолчанию, затем TOML файл
    /// (отсутствующий файл не ошибка), затем переменные `HYPR_LAYERS_*`.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("HYPR_LAYERS_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.generator.skip_empty_submap);
        assert!(config.generator.suppress_submap_blocks);
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert!(config.generator.suppress_submap_blocks);
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[logging]\nlevel = \"debug\"\n\n[generator]\nskip_empty_submap = true\nsuppress_submap_blocks = false"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.generator.skip_empty_submap);
        assert!(!config.generator.suppress_submap_blocks);
    }

    #[test]
    fn test_load_rejects_bad_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"loud\"").unwrap();

        assert!(Config::load(file.path()).is_err());
    }
}
