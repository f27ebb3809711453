use eyre::{Report, WrapErr};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct Config {
    conf: toml::Table,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config, Report> {
        let text = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Config::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Config, Report> {
        Ok(Config {
            conf: toml::from_str(text).wrap_err("cannot parse configuration file")?,
        })
    }
}

pub fn get_config<T: DeserializeOwned>(
    config: &Config,
    section: &str,
    key: &str,
) -> Result<Option<T>, Report> {
    config
        .conf
        .get(section)
        .and_then(|s| s.get(key))
        .map(|v| {
            v.clone()
                .try_into()
                .wrap_err_with(|| format!("cannot parse {section}.{key} configuration parameter"))
        })
        .transpose()
}

/// Names of the keys present in `section`.
pub fn config_keys(config: &Config, section: &str) -> Vec<String> {
    config
        .conf
        .get(section)
        .and_then(|s| s.as_table())
        .map(|t| t.keys().cloned().collect())
        .unwrap_or_default()
}
