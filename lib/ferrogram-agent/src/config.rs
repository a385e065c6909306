// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use ferrogram_crypto::rsa;
use ferrogram_mtproto::authentication;

/// The default lifetime the server is asked to give temporary keys.
pub const DEFAULT_TEMP_KEY_EXPIRY_SECONDS: i32 = 7200;

/// Host-provided configuration for a [`crate::UserAgent`].
///
/// Everything here is plain data; detecting device or locale values is
/// the host's business.
#[derive(Clone)]
pub struct Configuration {
    /// Developer credentials from my.telegram.org.
    pub api_id: i32,
    pub api_hash: String,

    pub device_model: String,
    pub system_version: String,
    pub app_version: String,
    pub lang_code: String,

    /// Whether to create short-lived keys bound to the permanent one,
    /// giving the connection perfect forward secrecy.
    pub pfs_enabled: bool,

    /// Whether the IPv6 endpoint tables may be used.
    pub ipv6_enabled: bool,

    /// How long the server should keep temporary keys valid for.
    pub temp_key_expire_seconds: i32,

    /// Talk to the test data centers instead of the production ones.
    pub test_mode: bool,

    /// The server RSA public keys trusted for the handshake.
    pub rsa_keys: Vec<rsa::Key>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            api_id: 0,
            api_hash: String::new(),
            device_model: "unknown".to_string(),
            system_version: "unknown".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            lang_code: "en".to_string(),
            pfs_enabled: false,
            ipv6_enabled: false,
            temp_key_expire_seconds: DEFAULT_TEMP_KEY_EXPIRY_SECONDS,
            test_mode: false,
            rsa_keys: authentication::known_rsa_keys(),
        }
    }
}
