use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:5050".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_defaults_to_port_5050() {
        assert_eq!(Config::default().web.bind, "0.0.0.0:5050");
        assert_eq!(Config::from_str("{}").unwrap().web.bind, "0.0.0.0:5050");
        assert_eq!(Config::from_str("web: {}").unwrap().web.bind, "0.0.0.0:5050");
    }

    #[test]
    fn bind_from_yaml() {
        let config = Config::from_str("web:\n  bind: 127.0.0.1:9000\n").unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:9000");
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(matches!(
            Config::from_str("web: [unclosed"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
