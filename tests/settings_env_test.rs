//! The client reads no environment: settings come from defaults and flags only.
//!
//! Kept in its own test binary: it mutates process environment.

use std::env;

use rmhook::cli::commands::load_settings;
use rmhook::config::{Settings, DEFAULT_BASE_URL};

#[test]
fn given_rmhook_env_vars_when_loading_settings_then_they_are_ignored() {
    // Arrange
    env::set_var("RMHOOK_BASE_URL", "http://192.168.1.20:9999");
    env::set_var("RMHOOK_TIMEOUTS__REQUEST_SECS", "60");

    // Act
    let settings = load_settings(None);
    env::remove_var("RMHOOK_BASE_URL");
    env::remove_var("RMHOOK_TIMEOUTS__REQUEST_SECS");
    let settings = settings.expect("settings");

    // Assert
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.server().url("/exportFile"), format!("{DEFAULT_BASE_URL}/exportFile"));
}

#[test]
fn given_base_url_flag_when_loading_settings_then_it_wins() {
    let settings = load_settings(Some("http://127.0.0.1:9999/".into())).expect("settings");

    assert_eq!(settings.server().url("/health"), "http://127.0.0.1:9999/health");
}
