// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The per-data-center client: keys, salts, handshake state and the
//! session it multiplexes its queries over.
use crate::net::Endpoint;
use crate::query::QueryId;
use crate::session::Session;
use ferrogram_crypto::AuthKey;
use ferrogram_mtproto::authentication::{Step1, Step2, Step3};
use ferrogram_mtproto::mtp::Plain;
use ferrogram_mtproto::MsgId;
use std::time::Duration;

/// The shortest pause before re-opening a lost connection.
pub(crate) const RECONNECT_BACKOFF_MIN: Duration = Duration::from_millis(250);

/// Backoff doubles up to this cap.
pub(crate) const RECONNECT_BACKOFF_MAX: Duration = Duration::from_secs(59);

/// Every how often the keepalive ping is sent.
pub(crate) const PING_INTERVAL: Duration = Duration::from_secs(60);

/// The deferred-disconnect window the server is asked for; must exceed
/// [`PING_INTERVAL`] or the server hangs up between pings.
pub(crate) const PING_DISCONNECT_DELAY: i32 = 75;

/// The authorization state machine of a client. The `_temp` states run
/// the same exchange a second time to produce the short-lived key that
/// gives the connection forward secrecy.
pub(crate) enum AuthState {
    Init,
    ReqPqSent(Step1),
    ReqDhSent(Step2),
    ClientDhSent(Step3),
    InitTemp,
    ReqPqSentTemp(Step1),
    ReqDhSentTemp(Step2),
    ClientDhSentTemp(Step3),
    Authorized,
    Failed,
}

impl AuthState {
    /// Whether the client is mid-handshake for the given key kind.
    pub fn in_progress(&self) -> bool {
        !matches!(self, AuthState::Init | AuthState::Authorized | AuthState::Failed)
    }

    pub fn is_temp(&self) -> bool {
        matches!(
            self,
            AuthState::InitTemp
                | AuthState::ReqPqSentTemp(_)
                | AuthState::ReqDhSentTemp(_)
                | AuthState::ClientDhSentTemp(_)
        )
    }
}

/// Everything a host has to persist to resume a DC without a fresh
/// handshake. Handed out through [`crate::Callback::dc_updated`].
#[derive(Clone, Debug, PartialEq)]
pub struct DcPersistedState {
    pub id: i32,
    pub auth_key: Option<[u8; 256]>,
    pub auth_key_id: i64,
    pub temp_auth_key: Option<[u8; 256]>,
    pub temp_auth_key_id: i64,
    pub server_salt: i64,
    pub server_time_delta: i32,
    pub endpoints_v4: Vec<Endpoint>,
    pub endpoints_v6: Vec<Endpoint>,
    pub logged_in: bool,
    pub configured: bool,
}

pub(crate) struct MtprotoClient {
    pub dc_id: i32,
    pub state: AuthState,

    /// The plain-MTP state used while a handshake is in flight.
    pub plain: Plain,

    /// The primary transport while no session exists yet; it becomes
    /// the session's primary worker once a key is available.
    pub handshake_worker: Option<crate::session::Worker>,

    pub auth_key: Option<AuthKey>,
    pub temp_auth_key: Option<AuthKey>,
    pub server_salt: i64,

    /// `server_time − wall_clock`, in seconds.
    pub server_time_delta: i32,

    /// `server_time − monotonic_clock`, in seconds. Message identifiers
    /// derive from this one so wall-clock jumps cannot break them.
    pub server_time_udelta: i64,

    pub session: Option<Session>,

    pub pending_queries: Vec<QueryId>,
    pub active_queries: usize,

    pub endpoints_v4: Vec<Endpoint>,
    pub endpoints_v6: Vec<Endpoint>,

    pub configured: bool,
    pub bound: bool,
    pub authorized: bool,
    pub logged_in: bool,

    pub logout_query: Option<QueryId>,
    pub auth_transfer_in_progress: bool,

    /// At most one binding query per DC may be in flight.
    pub bind_query: Option<QueryId>,
    pub bind_msg_id: MsgId,
    pub temp_key_expires_at: i32,

    pub reconnect_backoff: Duration,
    pub cleanup_timer_armed: bool,
}

impl MtprotoClient {
    pub fn new(dc_id: i32, endpoints_v4: Vec<Endpoint>, endpoints_v6: Vec<Endpoint>) -> Self {
        Self {
            dc_id,
            state: AuthState::Init,
            plain: Plain::new(),
            handshake_worker: None,
            auth_key: None,
            temp_auth_key: None,
            server_salt: 0,
            server_time_delta: 0,
            server_time_udelta: 0,
            session: None,
            pending_queries: Vec::new(),
            active_queries: 0,
            endpoints_v4,
            endpoints_v6,
            configured: false,
            bound: false,
            authorized: false,
            logged_in: false,
            logout_query: None,
            auth_transfer_in_progress: false,
            bind_query: None,
            bind_msg_id: MsgId(0),
            temp_key_expires_at: 0,
            reconnect_backoff: RECONNECT_BACKOFF_MIN,
            cleanup_timer_armed: false,
        }
    }

    /// Restores a client from host-persisted state. The handshake is
    /// skipped entirely when a permanent key is present.
    pub fn restore(state: DcPersistedState) -> Self {
        let mut client = Self::new(state.id, state.endpoints_v4, state.endpoints_v6);
        client.auth_key = state.auth_key.map(AuthKey::from_bytes);
        client.temp_auth_key = state.temp_auth_key.map(AuthKey::from_bytes);
        client.server_salt = state.server_salt;
        client.server_time_delta = state.server_time_delta;
        client.logged_in = state.logged_in;
        client.authorized = client.auth_key.is_some();
        if client.authorized {
            client.state = AuthState::Authorized;
        }
        // The temp key may have expired while we were away; it is
        // re-bound before the client is considered configured again.
        client
    }

    pub fn persisted_state(&self) -> DcPersistedState {
        DcPersistedState {
            id: self.dc_id,
            auth_key: self.auth_key.as_ref().map(|k| k.to_bytes()),
            auth_key_id: self.auth_key.as_ref().map(|k| k.id()).unwrap_or(0),
            temp_auth_key: self.temp_auth_key.as_ref().map(|k| k.to_bytes()),
            temp_auth_key_id: self.temp_auth_key.as_ref().map(|k| k.id()).unwrap_or(0),
            server_salt: self.server_salt,
            server_time_delta: self.server_time_delta,
            endpoints_v4: self.endpoints_v4.clone(),
            endpoints_v6: self.endpoints_v6.clone(),
            logged_in: self.logged_in,
            configured: self.configured,
        }
    }

    pub fn is_logging_out(&self) -> bool {
        self.logout_query.is_some()
    }

    /// Whether an inbound frame's key id belongs to this client.
    pub fn owns_auth_key_id(&self, key_id: i64) -> bool {
        self.temp_auth_key.as_ref().map(|k| k.id()) == Some(key_id)
            || self.auth_key.as_ref().map(|k| k.id()) == Some(key_id)
    }

    /// Forgets every authorization artifact; the next connection starts
    /// the handshake from scratch.
    pub fn reset_authorization(&mut self) {
        self.state = AuthState::Init;
        self.auth_key = None;
        self.temp_auth_key = None;
        self.server_salt = 0;
        self.authorized = false;
        self.bound = false;
        self.configured = false;
        self.logged_in = false;
        self.bind_query = None;
        self.bind_msg_id = MsgId(0);
    }

    /// Drops only the temporary key, so a fresh one can be generated
    /// and bound to the surviving permanent key.
    pub fn reset_temp_authorization(&mut self) {
        self.temp_auth_key = None;
        self.bound = false;
        self.configured = false;
        self.bind_query = None;
        self.bind_msg_id = MsgId(0);
        if matches!(self.state, AuthState::Authorized) {
            self.state = AuthState::InitTemp;
        }
    }

    /// Whether the session can be reaped: nothing active, nothing
    /// pending.
    pub fn is_quiescent(&self) -> bool {
        self.active_queries == 0 && self.pending_queries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_with_key_skips_the_handshake() {
        let persisted = DcPersistedState {
            id: 2,
            auth_key: Some([1; 256]),
            auth_key_id: AuthKey::from_bytes([1; 256]).id(),
            temp_auth_key: None,
            temp_auth_key_id: 0,
            server_salt: 99,
            server_time_delta: -3,
            endpoints_v4: vec![Endpoint::new("149.154.167.51", 443)],
            endpoints_v6: vec![],
            logged_in: true,
            configured: true,
        };

        let client = MtprotoClient::restore(persisted.clone());
        assert!(client.authorized);
        assert!(client.logged_in);
        assert!(!client.configured, "binding must run again after restore");
        assert_eq!(client.server_salt, 99);
        assert_eq!(client.persisted_state().auth_key, persisted.auth_key);
    }

    #[test]
    fn key_id_ownership_covers_both_keys() {
        let mut client = MtprotoClient::new(1, vec![], vec![]);
        let perm = AuthKey::from_bytes([1; 256]);
        let temp = AuthKey::from_bytes([2; 256]);
        client.auth_key = Some(perm.clone());
        client.temp_auth_key = Some(temp.clone());

        assert!(client.owns_auth_key_id(perm.id()));
        assert!(client.owns_auth_key_id(temp.id()));
        assert!(!client.owns_auth_key_id(12345));
    }

    #[test]
    fn resetting_temp_authorization_keeps_the_permanent_key() {
        let mut client = MtprotoClient::new(1, vec![], vec![]);
        client.auth_key = Some(AuthKey::from_bytes([1; 256]));
        client.temp_auth_key = Some(AuthKey::from_bytes([2; 256]));
        client.state = AuthState::Authorized;
        client.authorized = true;
        client.bound = true;
        client.configured = true;

        client.reset_temp_authorization();
        assert!(client.auth_key.is_some());
        assert!(client.temp_auth_key.is_none());
        assert!(!client.bound);
        assert!(client.state.is_temp());
    }
}
