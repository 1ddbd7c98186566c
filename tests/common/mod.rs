//! Shared testing utilities for focuscoach integration tests.

use assert_cmd::Command;
use focuscoach::BackendConfig;
use url::Url;

/// Build a command for invoking the compiled `focuscoach` binary.
#[allow(dead_code)]
pub fn cli() -> Command {
    Command::cargo_bin("focuscoach").expect("Failed to locate focuscoach binary")
}

/// Backend configuration pointing at a mock server.
#[allow(dead_code)]
pub fn config_for(server: &mockito::Server) -> BackendConfig {
    BackendConfig {
        endpoint: Url::parse(&server.url()).expect("mock server URL must parse"),
        timeout_secs: Some(5),
        ..BackendConfig::default()
    }
}

/// Backend configuration pointing at a local port nobody listens on.
#[allow(dead_code)]
pub fn unreachable_config() -> BackendConfig {
    let port = {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind ephemeral port");
        listener.local_addr().expect("Failed to read local address").port()
    };
    BackendConfig {
        endpoint: Url::parse(&format!("http://127.0.0.1:{}", port)).expect("URL must parse"),
        timeout_secs: Some(5),
        ..BackendConfig::default()
    }
}
