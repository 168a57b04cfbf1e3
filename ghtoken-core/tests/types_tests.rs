//! Unit tests for secure credential wrappers

use ghtoken_core::types::{Credentials, OneTimePassword, Password};

#[test]
fn test_password_is_redacted_in_debug() {
    let password = Password::new("hunter2".to_string());
    let debug = format!("{:?}", password);

    assert!(!debug.contains("hunter2"));
    assert_eq!(password.expose(), "hunter2");
}

#[test]
fn test_otp_is_redacted_in_debug() {
    let otp = OneTimePassword::from("123456".to_string());
    assert!(!format!("{:?}", otp).contains("123456"));
    assert_eq!(otp.expose(), "123456");
}

#[test]
fn test_credentials_debug_shows_only_username() {
    let credentials = Credentials::new("octocat", "hunter2".to_string());
    let debug = format!("{:?}", credentials);

    assert!(debug.contains("octocat"));
    assert!(!debug.contains("hunter2"));
}
