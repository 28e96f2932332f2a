use std::env;
use tinypaste_client::config::{Config, Credentials, RestApiConfig};
use tinypaste_client::constants::TINYPASTE_API;
use tinypaste_client::model::requests::ResponseFormat;

// Single test so the TINYPASTE_* variables are never mutated concurrently
#[test]
fn test_config_from_environment() {
    unsafe {
        env::remove_var("TINYPASTE_USERNAME");
        env::remove_var("TINYPASTE_PASSWORD");
        env::remove_var("TINYPASTE_BASE_URL");
        env::remove_var("TINYPASTE_TIMEOUT");
        env::remove_var("TINYPASTE_RESPONSE_FORMAT");
    }

    let config = Config::new();
    assert_eq!(config.credentials, Credentials::default());
    assert_eq!(config.rest_api.base_url, TINYPASTE_API);
    assert_eq!(config.rest_api.timeout, None);
    assert_eq!(config.response_format, ResponseFormat::Json);

    unsafe {
        env::set_var("TINYPASTE_USERNAME", "alice");
        env::set_var("TINYPASTE_PASSWORD", "secret");
        env::set_var("TINYPASTE_BASE_URL", "http://localhost:1234/api");
        env::set_var("TINYPASTE_TIMEOUT", "15");
        env::set_var("TINYPASTE_RESPONSE_FORMAT", "xml");
    }

    let config = Config::new();
    assert_eq!(config.credentials.username, "alice");
    assert_eq!(config.credentials.password, "secret");
    assert!(config.credentials.is_complete());
    assert_eq!(config.rest_api.base_url, "http://localhost:1234/api");
    assert_eq!(config.rest_api.timeout, Some(15));
    assert_eq!(config.response_format, ResponseFormat::Xml);

    unsafe {
        env::set_var("TINYPASTE_RESPONSE_FORMAT", "yaml");
        env::set_var("TINYPASTE_TIMEOUT", "soon");
    }

    let config = Config::new();
    assert_eq!(config.response_format, ResponseFormat::Json);
    assert_eq!(config.rest_api.timeout, None);

    unsafe {
        env::remove_var("TINYPASTE_USERNAME");
        env::remove_var("TINYPASTE_PASSWORD");
        env::remove_var("TINYPASTE_BASE_URL");
        env::remove_var("TINYPASTE_TIMEOUT");
        env::remove_var("TINYPASTE_RESPONSE_FORMAT");
    }
}

#[test]
fn test_with_base_url_is_anonymous() {
    let config = Config::with_base_url("http://example.test/api");
    assert!(!config.credentials.is_complete());
    assert_eq!(config.rest_api.base_url, "http://example.test/api");
    assert_eq!(config.response_format, ResponseFormat::Json);
}

#[test]
fn test_rest_api_default() {
    let rest = RestApiConfig::default();
    assert_eq!(rest.base_url, "http://tny.cz/api");
    assert_eq!(rest.timeout, None);
}

#[test]
fn test_display_hides_password() {
    let mut config = Config::with_base_url("http://example.test/api");
    config.credentials = Credentials::new("alice", "hunter2");

    let display = config.to_string();
    let debug = format!("{config:?}");
    assert!(display.contains("alice"));
    assert!(!display.contains("hunter2"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn test_response_format_serializes_uppercase() {
    let json = serde_json::to_string(&ResponseFormat::Xml).unwrap();
    assert_eq!(json, "\"XML\"");
}
