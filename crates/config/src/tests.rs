use figment::{
    Figment,
    providers::{Format, Toml},
};
use secrecy::ExposeSecret;

use super::*;

const MINIMAL: &str = r#"
    app_name = "invena"
    app_env = "development"

    [database]
    url = "postgres://localhost/invena"

    [redis]
    url = "redis://localhost:6379"

    [server]
    host = "0.0.0.0"
    port = 50051

    [telemetry]
"#;

fn load_str(toml: &str) -> AppConfig {
    Figment::new()
        .merge(Toml::string(toml))
        .extract()
        .expect("config should parse")
}

#[test]
fn test_minimal_config_with_defaults() {
    let config = load_str(MINIMAL);

    assert_eq!(config.app_name, "invena");
    assert!(config.is_development());
    assert!(!config.is_production());
    assert_eq!(
        config.database.url.expose_secret(),
        "postgres://localhost/invena"
    );
    // 未显式配置时使用默认值
    assert_eq!(config.telemetry.log_level, "info");
    assert_eq!(config.server.port, 50051);
}

#[test]
fn test_layered_override() {
    let config: AppConfig = Figment::new()
        .merge(Toml::string(MINIMAL))
        .merge(Toml::string(
            r#"
            app_env = "production"

            [telemetry]
            log_level = "warn"
            "#,
        ))
        .extract()
        .unwrap();

    assert!(config.is_production());
    assert_eq!(config.telemetry.log_level, "warn");
    // 未覆盖的字段保持底层值
    assert_eq!(config.server.host, "0.0.0.0");
}
