use ping_service::config::{Config, DEFAULT_MAX_RETRIES};
use ping_service::error::ConfigError;
use std::fs;
use std::io::Write;
use std::time::Duration;

fn create_temp_env_file(content: &str, file_path: &str) {
    let mut file = fs::File::create(&file_path).expect("Failed to create temp env file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp env file");
}

#[test]
fn test_from_env_file_success() {
    let file_path = "test_success.env";
    let content = "PING_PORT=8080\nPONG_HOST=pong.local\nPONG_PORT=9090";

    create_temp_env_file(content, file_path);

    let config = Config::from_env_file(file_path).unwrap();

    assert_eq!(config.listen_port, 8080);
    assert_eq!(config.pong_host, "pong.local");
    assert_eq!(config.pong_port, 9090);
    assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
    assert_eq!(config.request_timeout, None);
    assert_eq!(config.pong_url(), "http://pong.local:9090");

    fs::remove_file(file_path).unwrap();
}

#[test]
fn test_from_env_file_with_optional_values_and_comments() {
    let file_path = "test_optional.env";
    let content = "
# ping service
PING_PORT=8081
PONG_HOST=127.0.0.1
PONG_PORT=9091
MAX_RETRIES=5
PONG_TIMEOUT_MS=250
    ";

    create_temp_env_file(content, file_path);

    let config = Config::from_env_file(file_path).unwrap();

    assert_eq!(config.max_retries, 5);
    assert_eq!(config.request_timeout, Some(Duration::from_millis(250)));
    assert_eq!(config.listen_addr().port(), 8081);

    fs::remove_file(file_path).unwrap();
}

#[test]
fn test_from_env_file_missing_key() {
    let file_path = "test_missing_key.env";
    let content = "PING_PORT=8080\nPONG_PORT=9090";

    create_temp_env_file(content, file_path);

    let result = Config::from_env_file(file_path);

    assert!(matches!(result, Err(ConfigError::Missing("PONG_HOST"))));

    fs::remove_file(file_path).unwrap();
}

#[test]
fn test_from_env_file_invalid_port() {
    let file_path = "test_invalid_port.env";
    let content = "PING_PORT=eighty\nPONG_HOST=pong\nPONG_PORT=9090";

    create_temp_env_file(content, file_path);

    let result = Config::from_env_file(file_path);

    match result {
        Err(ConfigError::Invalid { key, value }) => {
            assert_eq!(key, "PING_PORT");
            assert_eq!(value, "eighty");
        }
        other => panic!("expected invalid PING_PORT, got {:?}", other),
    }

    fs::remove_file(file_path).unwrap();
}

#[test]
fn test_config_fails_on_zero_retries() {
    let file_path = "test_zero_retries.env";
    let content = "PING_PORT=8080\nPONG_HOST=pong\nPONG_PORT=9090\nMAX_RETRIES=0";

    create_temp_env_file(content, file_path);

    let result = Config::from_env_file(file_path);

    assert!(matches!(result, Err(ConfigError::ZeroRetries)));

    fs::remove_file(file_path).unwrap();
}

#[test]
fn test_from_env_file_missing_file() {
    let result = Config::from_env_file("does_not_exist.env");

    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_config_fails_on_empty_pong_host() {
    let file_path = "test_empty_host.env";
    let content = "PING_PORT=8080\nPONG_HOST=\nPONG_PORT=9090";

    create_temp_env_file(content, file_path);

    let result = Config::from_env_file(file_path);

    assert!(matches!(result, Err(ConfigError::EmptyHost)));

    fs::remove_file(file_path).unwrap();
}
