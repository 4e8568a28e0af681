//! Configuration loading tests.

use std::path::PathBuf;

use echo_server::config::{ConfigError, EchoConfig};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "echo-server-test-{}-{}",
        std::process::id(),
        name
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn defaults_bind_on_8080() {
    let config = EchoConfig::default();
    assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("echo-server-test-no-such-file.toml");
    let config = EchoConfig::load_or_default(&path).unwrap();
    assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
}

#[test]
fn file_overrides_bind_address() {
    let path = write_temp(
        "override.toml",
        "[listener]\nbind_address = \"127.0.0.1:9000\"\n",
    );

    let config = EchoConfig::load(&path).unwrap();
    assert_eq!(config.listener.bind_address, "127.0.0.1:9000");

    let _ = std::fs::remove_file(path);
}

#[test]
fn unparseable_bind_address_is_rejected() {
    let path = write_temp(
        "bad-addr.toml",
        "[listener]\nbind_address = \"not-an-address\"\n",
    );

    let err = EchoConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddress { .. }));

    let _ = std::fs::remove_file(path);
}

#[test]
fn malformed_toml_is_rejected() {
    let path = write_temp("bad-syntax.toml", "[listener\nbind_address = ");

    let err = EchoConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let _ = std::fs::remove_file(path);
}
