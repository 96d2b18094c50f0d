//! Startup settings: defaults, optional `userdeck.toml`, env overrides.

use std::{collections::HashMap, fs};

use client_core::DEFAULT_USERS_ENDPOINT;

#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("userdeck.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("USERDECK__ENDPOINT") {
        settings.endpoint = v;
    }

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("endpoint") {
            settings.endpoint = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_config_overrides_endpoint() {
        let mut settings = Settings::default();
        apply_file_config(&mut settings, "endpoint = \"http://127.0.0.1:9000/users\"\n");
        assert_eq!(settings.endpoint, "http://127.0.0.1:9000/users");
    }

    #[test]
    fn malformed_file_config_keeps_defaults() {
        let mut settings = Settings::default();
        apply_file_config(&mut settings, "endpoint = [not toml");
        assert_eq!(settings.endpoint, DEFAULT_USERS_ENDPOINT);
    }
}
