use serde::{Deserialize, Serialize};

use super::ConfigError;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(config)?)
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError> {
        Ok(serde_yaml_ng::from_str(content)?)
    }
}
