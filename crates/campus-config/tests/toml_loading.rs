//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use campus_config::CampusConfig;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://records.example.edu"
timeout_secs = 30
"#,
        )?;

        let config: CampusConfig = Figment::from(Serialized::defaults(CampusConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://records.example.edu");
        assert_eq!(config.api.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn loads_general_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 50
default_format = "json"
"#,
        )?;

        let config: CampusConfig = Figment::from(Serialized::defaults(CampusConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://backend.internal:9000"
"#,
        )?;

        let config: CampusConfig = Figment::from(Serialized::defaults(CampusConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://backend.internal:9000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn env_vars_override_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://from-toml:8080"
"#,
        )?;
        jail.set_env("CAMPUS_API__BASE_URL", "http://from-env:8080");

        let config: CampusConfig = Figment::from(Serialized::defaults(CampusConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("CAMPUS_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "http://from-env:8080");
        Ok(())
    });
}

#[test]
fn env_var_maps_nested_general_section() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_GENERAL__DEFAULT_LIMIT", "99");

        let config: CampusConfig = Figment::from(Serialized::defaults(CampusConfig::default()))
            .merge(Env::prefixed("CAMPUS_").split("__"))
            .extract()?;

        assert_eq!(config.general.default_limit, 99);
        Ok(())
    });
}
