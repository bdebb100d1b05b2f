// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ConfigError, ProviderConfig};

#[test]
fn test_both_variables_present() {
    let config = ProviderConfig::from_lookup(|name| match name {
        "MONDAY_API_URL" => Some(String::from("https://api.monday.com/v2")),
        "MONDAY_API_TOKEN" => Some(String::from("secret")),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.api_url, "https://api.monday.com/v2");
    assert_eq!(config.api_token, "secret");
}

#[test]
fn test_missing_url_is_reported_first() {
    let err = ProviderConfig::from_lookup(|_| None).unwrap_err();
    assert_eq!(err, ConfigError::MissingVar("MONDAY_API_URL"));
}

#[test]
fn test_blank_token_is_rejected() {
    let err = ProviderConfig::from_lookup(|name| match name {
        "MONDAY_API_URL" => Some(String::from("https://api.monday.com/v2")),
        "MONDAY_API_TOKEN" => Some(String::from("   ")),
        _ => None,
    })
    .unwrap_err();
    assert_eq!(err, ConfigError::EmptyVar("MONDAY_API_TOKEN"));
}

#[test]
fn test_error_messages_name_the_variable() {
    assert_eq!(
        ConfigError::MissingVar("MONDAY_API_URL").to_string(),
        "environment variable MONDAY_API_URL is not set"
    );
    assert_eq!(
        ConfigError::EmptyVar("MONDAY_API_TOKEN").to_string(),
        "environment variable MONDAY_API_TOKEN is set but empty"
    );
}
