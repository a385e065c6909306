// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The engine façade: owns every per-DC client, the query registry, the
//! update counters and the secret chats, and reacts to the three inputs
//! a host can deliver (network readiness, timer expiry, and prompted
//! values).
//!
//! Ownership is strictly tree-shaped: the agent owns clients, clients
//! own sessions, sessions own workers. Everything else refers to those
//! by identifier, so re-entrant flows (a result handler that sends a
//! new query) borrow nothing across the call.
use crate::callback::{Callback, Value, ValueRequest};
use crate::client::{
    AuthState, DcPersistedState, MtprotoClient, PING_DISCONNECT_DELAY, PING_INTERVAL,
    RECONNECT_BACKOFF_MAX, RECONNECT_BACKOFF_MIN,
};
use crate::config::Configuration;
use crate::dcs;
use crate::net::{Connection, ConnectionFactory, ConnectionStatus};
use crate::query::{
    logging_out_error, timeout_error, ExecutionOption, Query, QueryId, ResultHandler,
    ACKED_QUERY_TIMEOUT, DEFAULT_RETRY_DELAY, QUERY_TIMEOUT,
};
use crate::secret_chat::SecretChat;
use crate::session::{
    Session, Worker, WorkerId, ACK_FLUSH_TIMEOUT, SESSION_CLEANUP_TIMEOUT, WORKER_IDLE_TIMEOUT,
};
use crate::storage::UnconfirmedSecretMessageStorage;
use crate::timers::{Clock, TimerQueue, TimerToken};
use ferrogram_crypto::dh;
use ferrogram_mtproto::mtp::{self, Inbound, Mtp};
use ferrogram_mtproto::transport::{self, Transport};
use ferrogram_mtproto::{authentication, MsgId, RpcError};
use ferrogram_tl::{self as tl, Deserializable, Identifiable, RemoteCall, Serializable};
use log::{debug, error, info, trace, warn};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Every how often the update state is compared against the server's.
const STATE_LOOKUP_INTERVAL: Duration = Duration::from_secs(3600);

/// How long a secret chat waits for a missing message before skipping
/// over the hole.
pub(crate) const SECRET_HOLE_TIMEOUT: Duration = Duration::from_secs(3);

/// The highest DC id a migration error is trusted to point at.
const MAX_DC_ID: i32 = 100;

/// The result type handed to typed [`UserAgent::invoke`] handlers.
pub type InvocationResult<T> = Result<T, InvocationError>;

/// Why a typed invocation did not produce its return value.
#[derive(Debug)]
pub enum InvocationError {
    /// The server reported an error.
    Rpc(RpcError),

    /// The server's answer failed to deserialize into the expected
    /// type.
    Parse(tl::deserialize::Error),
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rpc(error) => write!(f, "{}", error),
            Self::Parse(error) => write!(f, "bad response: {}", error),
        }
    }
}

impl std::error::Error for InvocationError {}

/// Update-engine counters, persisted by the host as one record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AgentPersistedState {
    pub our_id: i32,
    pub pts: i32,
    pub qts: i32,
    pub seq: i32,
    pub date: i32,
    pub active_dc_id: i32,
}

/// Where the login conversation with the host currently stands.
enum LoginState {
    Idle,
    WaitingPhone,
    WaitingCode {
        phone: String,
        phone_code_hash: String,
        registered: bool,
    },
    WaitingPassword {
        current_salt: Vec<u8>,
    },
    WaitingRegister {
        phone: String,
        phone_code_hash: String,
        code: String,
    },
}

/// Products of draining one worker's connection, processed after the
/// client borrow is released.
enum PumpEvent {
    StatusChanged(WorkerId, ConnectionStatus),

    /// A raw transport frame, not yet interpreted.
    Frame(Vec<u8>),

    /// A decoded plain-MTP body (a handshake step response).
    HandshakePayload(Vec<u8>),

    /// Decoded items from the encrypted MTP.
    Inbound(WorkerId, Vec<Inbound>),

    SessionBroken(&'static str),
    AuthKeyUnknown,
}

pub struct UserAgent {
    pub(crate) config: Configuration,
    pub(crate) callback: Box<dyn Callback>,
    connector: Box<dyn ConnectionFactory>,
    pub(crate) timers: Box<dyn TimerQueue>,
    clock: Box<dyn Clock>,
    pub(crate) secret_storage: Box<dyn UnconfirmedSecretMessageStorage>,

    pub(crate) clients: HashMap<i32, MtprotoClient>,

    /// The DC user-level queries go to.
    active_dc: i32,

    /// The DC that owns the account's authorization; exports flow from
    /// here when another DC needs to be logged in.
    home_dc: i32,

    pub(crate) our_id: i32,

    queries: HashMap<QueryId, Query>,
    queries_by_msg: HashMap<(i32, MsgId), QueryId>,
    next_query_id: QueryId,

    // Update-consistency counters. Only the update engine writes these.
    pub(crate) pts: i32,
    pub(crate) qts: i32,
    pub(crate) seq: i32,
    pub(crate) date: i32,
    pub(crate) channel_pts: HashMap<i32, i32>,
    pub(crate) channel_access_hashes: HashMap<i32, i64>,
    pub(crate) diff_locked: bool,
    pub(crate) channel_diff_locked: HashSet<i32>,

    pub(crate) secret_chats: HashMap<i32, SecretChat>,

    login: LoginState,
    password_locked: bool,
}

impl UserAgent {
    pub fn new(
        config: Configuration,
        callback: Box<dyn Callback>,
        connector: Box<dyn ConnectionFactory>,
        timers: Box<dyn TimerQueue>,
        clock: Box<dyn Clock>,
        secret_storage: Box<dyn UnconfirmedSecretMessageStorage>,
    ) -> Self {
        Self {
            config,
            callback,
            connector,
            timers,
            clock,
            secret_storage,
            clients: HashMap::new(),
            active_dc: 2,
            home_dc: 2,
            our_id: 0,
            queries: HashMap::new(),
            queries_by_msg: HashMap::new(),
            next_query_id: 1,
            pts: 0,
            qts: 0,
            seq: 0,
            date: 0,
            channel_pts: HashMap::new(),
            channel_access_hashes: HashMap::new(),
            diff_locked: false,
            channel_diff_locked: HashSet::new(),
            secret_chats: HashMap::new(),
            login: LoginState::Idle,
            password_locked: false,
        }
    }

    // State restoration and inspection
    // ========================================

    /// Restores a DC from host-persisted state.
    pub fn restore_dc(&mut self, state: DcPersistedState) {
        let client = MtprotoClient::restore(state);
        if client.logged_in {
            self.home_dc = client.dc_id;
        }
        self.clients.insert(client.dc_id, client);
    }

    /// Restores the account-wide counters.
    pub fn restore_state(&mut self, state: AgentPersistedState) {
        self.our_id = state.our_id;
        self.pts = state.pts;
        self.qts = state.qts;
        self.seq = state.seq;
        self.date = state.date;
        if state.active_dc_id != 0 {
            self.active_dc = state.active_dc_id;
        }
    }

    pub fn persisted_state(&self) -> AgentPersistedState {
        AgentPersistedState {
            our_id: self.our_id,
            pts: self.pts,
            qts: self.qts,
            seq: self.seq,
            date: self.date,
            active_dc_id: self.active_dc,
        }
    }

    pub fn active_dc(&self) -> i32 {
        self.active_dc
    }

    pub fn home_dc(&self) -> i32 {
        self.home_dc
    }

    pub fn pts(&self) -> i32 {
        self.pts
    }

    pub fn qts(&self) -> i32 {
        self.qts
    }

    pub fn is_getting_difference(&self) -> bool {
        self.diff_locked
    }

    pub fn is_logged_in(&self) -> bool {
        self.clients
            .get(&self.home_dc)
            .map(|c| c.logged_in)
            .unwrap_or(false)
    }

    pub(crate) fn now(&self) -> Duration {
        self.clock.now_unix()
    }

    // Connection management
    // ========================================

    /// Makes sure the active DC has a client that is connecting.
    pub fn connect(&mut self) {
        let dc_id = self.active_dc;
        self.ensure_client_connected(dc_id);
    }

    /// Switches the DC user-level queries are routed to.
    pub fn set_active_dc(&mut self, dc_id: i32) {
        if self.active_dc == dc_id {
            return;
        }
        info!("active dc changed to {}", dc_id);
        self.active_dc = dc_id;
        self.callback.active_dc_changed(dc_id);
        self.ensure_client_connected(dc_id);
    }

    fn ensure_client(&mut self, dc_id: i32) -> &mut MtprotoClient {
        let test_mode = self.config.test_mode;
        self.clients.entry(dc_id).or_insert_with(|| {
            MtprotoClient::new(
                dc_id,
                dcs::seed_endpoints_v4(dc_id, test_mode),
                dcs::seed_endpoints_v6(dc_id, test_mode),
            )
        })
    }

    fn open_worker(&mut self, dc_id: i32) -> Worker {
        let ipv6_enabled = self.config.ipv6_enabled;
        let client = self.ensure_client(dc_id);
        let v4 = client.endpoints_v4.clone();
        let v6 = if ipv6_enabled {
            client.endpoints_v6.clone()
        } else {
            Vec::new()
        };
        let mut connection = self.connector.connect(dc_id, &v4, &v6);
        connection.open();
        Worker::new(connection)
    }

    /// Opens the primary connection of a DC, if there is none yet.
    pub(crate) fn ensure_client_connected(&mut self, dc_id: i32) {
        self.ensure_client(dc_id);
        let has_transport = {
            let client = self.clients.get(&dc_id).unwrap();
            client.session.is_some() || client.handshake_worker.is_some()
        };
        if has_transport {
            return;
        }

        debug!("opening primary connection to dc {}", dc_id);
        let worker = self.open_worker(dc_id);
        let client = self.clients.get_mut(&dc_id).unwrap();
        client.handshake_worker = Some(worker);
        self.poke_transport(dc_id);
    }

    /// Reacts to the current status of a freshly created or re-opened
    /// connection, since some hosts connect synchronously.
    fn poke_transport(&mut self, dc_id: i32) {
        self.on_network_event(dc_id);
    }

    // Network pump
    // ========================================

    /// The host calls this whenever any connection of the DC has data
    /// to read or changed status.
    pub fn on_network_event(&mut self, dc_id: i32) {
        if !self.clients.contains_key(&dc_id) {
            return;
        }

        let now = self.now();
        let mut events = Vec::new();

        {
            let client = self.clients.get_mut(&dc_id).unwrap();

            // The handshake worker, when present, is the only transport.
            if let Some(worker) = client.handshake_worker.as_mut() {
                pump_handshake_worker(worker, &mut client.plain, now, &mut events);
            } else if let Some(session) = client.session.as_mut() {
                // Collect raw frames per worker first; the decryption
                // state is shared by all of them.
                let mut raw = Vec::new();
                for id in session.worker_ids() {
                    let worker = session.worker_mut(id).unwrap();
                    let mut per_worker = Vec::new();
                    pump_frames(worker, id, &mut per_worker);
                    raw.push((id, per_worker));
                }

                for (id, per_worker) in raw {
                    for event in per_worker {
                        match event {
                            PumpEvent::Frame(frame) => {
                                match session.mtp.deserialize(&frame, now) {
                                    Ok(inbound) => events.push(PumpEvent::Inbound(id, inbound)),
                                    Err(err) => events.push(classify_mtp_error(err)),
                                }
                            }
                            other => events.push(other),
                        }
                    }
                }
            }
        }

        self.process_pump_events(dc_id, events);
    }

    fn process_pump_events(&mut self, dc_id: i32, events: Vec<PumpEvent>) {
        for event in events {
            match event {
                PumpEvent::StatusChanged(worker_id, status) => {
                    self.on_worker_status(dc_id, worker_id, status);
                }
                PumpEvent::Frame(_) => {
                    debug_assert!(false, "raw frames are decoded before dispatch");
                }
                PumpEvent::HandshakePayload(frame) => {
                    self.on_handshake_payload(dc_id, frame);
                }
                PumpEvent::Inbound(worker_id, inbound) => {
                    for item in inbound {
                        self.dispatch_inbound(dc_id, worker_id, item);
                    }
                    self.after_inbound(dc_id);
                }
                PumpEvent::SessionBroken(reason) => {
                    warn!("session on dc {} broken: {}", dc_id, reason);
                    self.restart_session(dc_id);
                }
                PumpEvent::AuthKeyUnknown => {
                    warn!("dc {} does not know our auth key; starting over", dc_id);
                    self.restart_authorization(dc_id);
                }
            }
        }
    }

    /// Arms the ack flush after processing inbound traffic, and hands
    /// out any persisted-state change.
    fn after_inbound(&mut self, dc_id: i32) {
        let client = match self.clients.get_mut(&dc_id) {
            Some(client) => client,
            None => return,
        };
        if let Some(session) = client.session.as_mut() {
            // The server salt may have rotated while deserializing.
            client.server_salt = session.mtp.salt();
            if session.mtp.has_pending_ack() && !session.ack_timer_armed {
                session.ack_timer_armed = true;
                self.timers
                    .schedule(ACK_FLUSH_TIMEOUT, TimerToken::AckFlush(dc_id));
            }
        }
    }

    fn on_worker_status(&mut self, dc_id: i32, worker_id: WorkerId, status: ConnectionStatus) {
        debug!("dc {} worker {} is now {:?}", dc_id, worker_id, status);
        if worker_id == 0 {
            self.callback.connection_status_changed(dc_id, status);
        }

        match status {
            ConnectionStatus::Connected => {
                {
                    let client = self.ensure_client(dc_id);
                    client.reconnect_backoff = RECONNECT_BACKOFF_MIN;
                }
                self.on_transport_ready(dc_id);
            }
            ConnectionStatus::Disconnected | ConnectionStatus::Closed => {
                if worker_id == 0 {
                    let backoff = {
                        let client = self.ensure_client(dc_id);
                        let backoff = client.reconnect_backoff;
                        client.reconnect_backoff =
                            (client.reconnect_backoff * 2).min(RECONNECT_BACKOFF_MAX);
                        backoff
                    };
                    info!("dc {} lost its connection; retrying in {:?}", dc_id, backoff);
                    self.timers.schedule(backoff, TimerToken::Reconnect(dc_id));
                }
            }
            ConnectionStatus::Connecting => {}
        }
    }

    /// The primary transport of the DC became usable.
    fn on_transport_ready(&mut self, dc_id: i32) {
        let needs_handshake = {
            let client = self.ensure_client(dc_id);
            client.handshake_worker.is_some() && !matches!(client.state, AuthState::Authorized)
        };

        if needs_handshake {
            let (authorized, pfs) = {
                let client = self.clients.get(&dc_id).unwrap();
                (client.authorized, self.config.pfs_enabled)
            };
            if !authorized {
                self.start_handshake(dc_id, false);
            } else if pfs {
                self.start_handshake(dc_id, true);
            }
            return;
        }

        // Restored client with a persisted key and a fresh connection.
        let ready = {
            let client = self.clients.get(&dc_id).unwrap();
            client.session.is_none() && client.handshake_worker.is_some() && client.authorized
        };
        if ready {
            let needs_temp_key = {
                let client = self.clients.get_mut(&dc_id).unwrap();
                if client.temp_auth_key.is_none() {
                    if self.config.pfs_enabled {
                        client.state = AuthState::InitTemp;
                        true
                    } else {
                        client.temp_auth_key = client.auth_key.clone();
                        client.bound = true;
                        false
                    }
                } else {
                    false
                }
            };
            if needs_temp_key {
                self.start_handshake(dc_id, true);
            } else {
                self.finish_authorization(dc_id);
            }
        }

        self.send_pending_queries(dc_id);
    }

    // Handshake driving
    // ========================================

    fn start_handshake(&mut self, dc_id: i32, temp: bool) {
        info!(
            "starting {} key generation on dc {}",
            if temp { "temporary" } else { "permanent" },
            dc_id
        );

        let expires_in = self.config.temp_key_expire_seconds;
        let step = if temp {
            authentication::step1_temp(expires_in)
        } else {
            authentication::step1()
        };

        match step {
            Ok((request, data)) => {
                let client = self.clients.get_mut(&dc_id).unwrap();
                client.state = if temp {
                    AuthState::ReqPqSentTemp(data)
                } else {
                    AuthState::ReqPqSent(data)
                };
                self.send_plain(dc_id, &request);
            }
            Err(err) => {
                error!("failed to start handshake on dc {}: {}", dc_id, err);
            }
        }
    }

    fn send_plain(&mut self, dc_id: i32, request: &[u8]) {
        let now = self.now();
        let client = self.clients.get_mut(&dc_id).unwrap();
        if client.plain.push(request, now).is_none() {
            // A previous plain exchange never finished; start clean.
            let _ = client.plain.finalize(now);
            client.plain.push(request, now);
        }
        let payload = client.plain.finalize(now);
        if let Some(worker) = client.handshake_worker.as_mut() {
            let mut packed = Vec::new();
            worker.transport.pack(&payload, &mut packed);
            worker.connection.write(&packed);
            worker.connection.flush();
        }
    }

    fn on_handshake_payload(&mut self, dc_id: i32, body: Vec<u8>) {
        let now = self.now();
        let state = {
            let client = self.clients.get_mut(&dc_id).unwrap();
            std::mem::replace(&mut client.state, AuthState::Init)
        };

        let result = match state {
            AuthState::ReqPqSent(step) => authentication::step2(step, &body, &self.config.rsa_keys)
                .map(|(request, data)| (request, AuthState::ReqDhSent(data))),
            AuthState::ReqPqSentTemp(step) => {
                authentication::step2(step, &body, &self.config.rsa_keys)
                    .map(|(request, data)| (request, AuthState::ReqDhSentTemp(data)))
            }
            AuthState::ReqDhSent(step) => authentication::step3(step, &body, now)
                .map(|(request, data)| (request, AuthState::ClientDhSent(data))),
            AuthState::ReqDhSentTemp(step) => authentication::step3(step, &body, now)
                .map(|(request, data)| (request, AuthState::ClientDhSentTemp(data))),
            AuthState::ClientDhSent(step) => {
                return self.on_key_created(dc_id, authentication::create_key(step, &body), false);
            }
            AuthState::ClientDhSentTemp(step) => {
                return self.on_key_created(dc_id, authentication::create_key(step, &body), true);
            }
            other => {
                // Stray plain payload; nothing was expecting it.
                debug!("ignoring plain payload on dc {} in unrelated state", dc_id);
                self.clients.get_mut(&dc_id).unwrap().state = other;
                return;
            }
        };

        match result {
            Ok((request, next_state)) => {
                self.clients.get_mut(&dc_id).unwrap().state = next_state;
                self.send_plain(dc_id, &request);
            }
            Err(err) => self.on_handshake_error(dc_id, err),
        }
    }

    fn on_handshake_error(&mut self, dc_id: i32, err: authentication::Error) {
        let temp = {
            let client = self.clients.get(&dc_id).unwrap();
            client.authorized
        };
        error!("handshake with dc {} failed: {}", dc_id, err);

        match err {
            authentication::Error::DhGenRetry | authentication::Error::DhGenFail => {
                // Preserve nothing from the aborted attempt.
                self.start_handshake(dc_id, temp);
            }
            _ => {
                // Integrity failure: mark the connection bad and retry
                // through the reconnect path.
                let client = self.clients.get_mut(&dc_id).unwrap();
                client.state = AuthState::Failed;
                if let Some(worker) = client.handshake_worker.as_mut() {
                    worker.connection.close();
                }
                let backoff = client.reconnect_backoff;
                client.reconnect_backoff = (backoff * 2).min(RECONNECT_BACKOFF_MAX);
                self.timers.schedule(backoff, TimerToken::Reconnect(dc_id));
            }
        }
    }

    fn on_key_created(
        &mut self,
        dc_id: i32,
        result: Result<authentication::Finished, authentication::Error>,
        temp: bool,
    ) {
        let finished = match result {
            Ok(finished) => finished,
            Err(err) => return self.on_handshake_error(dc_id, err),
        };

        let monotonic = self.clock.monotonic().as_secs() as i64;
        let pfs = self.config.pfs_enabled;
        {
            let client = self.clients.get_mut(&dc_id).unwrap();
            let key = ferrogram_crypto::AuthKey::from_bytes(finished.auth_key);
            info!(
                "dc {} obtained {} auth key {:?}",
                dc_id,
                if temp { "temp" } else { "perm" },
                key
            );

            client.server_salt = finished.first_salt;
            client.server_time_delta = finished.time_offset;
            client.server_time_udelta = finished.server_time as i64 - monotonic;

            if temp {
                client.temp_auth_key = Some(key);
                client.state = AuthState::Authorized;
            } else {
                client.auth_key = Some(key);
                client.authorized = true;
                if pfs {
                    client.state = AuthState::InitTemp;
                } else {
                    // Without forward secrecy the permanent key plays
                    // both roles and no binding is needed.
                    client.temp_auth_key = client.auth_key.clone();
                    client.bound = true;
                    client.state = AuthState::Authorized;
                }
            }
        }

        let state = self.clients.get(&dc_id).unwrap().persisted_state();
        self.callback.dc_updated(&state);

        if !temp && pfs {
            self.start_handshake(dc_id, true);
        } else {
            self.finish_authorization(dc_id);
        }
    }

    /// Builds the session over the handshake connection and either
    /// binds the temp key or configures the client directly.
    fn finish_authorization(&mut self, dc_id: i32) {
        {
            let client = self.clients.get_mut(&dc_id).unwrap();
            let key = match client.temp_auth_key.as_ref().or(client.auth_key.as_ref()) {
                Some(key) => key.to_bytes(),
                None => {
                    error!("dc {} has no key to build a session with", dc_id);
                    return;
                }
            };

            let worker = match client.handshake_worker.take() {
                Some(worker) => worker,
                None => {
                    error!("dc {} has no transport to build a session with", dc_id);
                    return;
                }
            };

            let mtp = mtp::Encrypted::build()
                .time_offset(client.server_time_delta)
                .first_salt(client.server_salt)
                .finish(key);
            client.session = Some(Session::new(mtp, worker));
        }

        let bound = self.clients.get(&dc_id).unwrap().bound;
        if bound {
            self.configure(dc_id);
        } else {
            self.bind_temp_auth_key(dc_id);
        }

        self.timers.schedule(PING_INTERVAL, TimerToken::Ping(dc_id));
    }

    fn restart_authorization(&mut self, dc_id: i32) {
        if let Some(client) = self.clients.get_mut(&dc_id) {
            if let Some(mut session) = client.session.take() {
                session.close();
            }
            if let Some(worker) = client.handshake_worker.as_mut() {
                worker.connection.close();
            }
            client.handshake_worker = None;
            client.reset_authorization();
        }
        self.release_in_flight_queries(dc_id);
        self.ensure_client_connected(dc_id);
    }

    pub(crate) fn restart_temp_authorization(&mut self, dc_id: i32) {
        let worker = {
            let client = match self.clients.get_mut(&dc_id) {
                Some(client) => client,
                None => return,
            };
            client.reset_temp_authorization();
            // The session was encrypted under the dead temp key; pull
            // its primary connection back for the new handshake.
            client.session.take().map(|session| {
                let Session { primary, .. } = session;
                primary
            })
        };
        self.release_in_flight_queries(dc_id);

        let client = self.clients.get_mut(&dc_id).unwrap();
        match worker {
            Some(worker) => {
                client.handshake_worker = Some(worker);
                self.start_handshake(dc_id, true);
            }
            None => self.ensure_client_connected(dc_id),
        }
    }

    /// Replaces the session after time drift, integrity failure or an
    /// unsupported session id: fresh session id, same keys and salt.
    pub(crate) fn restart_session(&mut self, dc_id: i32) {
        info!("restarting session on dc {}", dc_id);
        let worker = {
            let client = match self.clients.get_mut(&dc_id) {
                Some(client) => client,
                None => return,
            };
            match client.session.take() {
                Some(mut session) => {
                    // Keep the primary transport; secondary workers die
                    // with the old session.
                    for id in session.worker_ids() {
                        if id != 0 {
                            session.remove_secondary(id);
                        }
                    }
                    Some(session.primary)
                }
                None => None,
            }
        };
        self.release_in_flight_queries(dc_id);

        let client = self.clients.get_mut(&dc_id).unwrap();
        if let Some(worker) = worker {
            let key = client
                .temp_auth_key
                .as_ref()
                .or(client.auth_key.as_ref())
                .map(|k| k.to_bytes());
            if let Some(key) = key {
                let mtp = mtp::Encrypted::build()
                    .time_offset(client.server_time_delta)
                    .first_salt(client.server_salt)
                    .finish(key);
                client.session = Some(Session::new(mtp, worker));
            } else {
                client.handshake_worker = Some(worker);
            }
        }
        self.send_pending_queries(dc_id);
    }

    /// Puts every in-flight query of the DC back on the pending list,
    /// to be re-sent once the client recovers.
    fn release_in_flight_queries(&mut self, dc_id: i32) {
        let ids: Vec<QueryId> = self
            .queries
            .values()
            .filter(|q| q.dc_id == dc_id && q.in_flight())
            .map(|q| q.id)
            .collect();

        for id in ids {
            let query = self.queries.get_mut(&id).unwrap();
            self.queries_by_msg.remove(&(dc_id, query.msg_id));
            query.msg_id = MsgId(0);
            query.session_id = 0;
            query.worker = None;
            query.ack_received = false;
            self.timers.cancel(TimerToken::QueryTimeout(id));

            let client = self.clients.get_mut(&dc_id).unwrap();
            client.active_queries = client.active_queries.saturating_sub(1);
            if !client.pending_queries.contains(&id) {
                client.pending_queries.push(id);
            }
        }
    }
}

/// Drains the handshake worker's connection, decoding the plain-MTP
/// frames right away (the handshake has no other state to consult).
fn pump_handshake_worker(
    worker: &mut Worker,
    plain: &mut mtp::Plain,
    now: Duration,
    events: &mut Vec<PumpEvent>,
) {
    let mut raw = Vec::new();
    pump_frames(worker, 0, &mut raw);

    for event in raw {
        match event {
            PumpEvent::Frame(frame) => match plain.deserialize(&frame, now) {
                Ok(inbound) => {
                    for item in inbound {
                        if let Inbound::RpcResult { body, .. } = item {
                            events.push(PumpEvent::HandshakePayload(body));
                        }
                    }
                }
                Err(err) => {
                    warn!("bad plain payload: {}", err);
                    events.push(PumpEvent::SessionBroken("bad plain payload"));
                }
            },
            other => events.push(other),
        }
    }
}

/// Reads available bytes and splits them into transport frames. The
/// frames stay undecoded; callers know what protocol is expected.
fn pump_frames(worker: &mut Worker, worker_id: WorkerId, events: &mut Vec<PumpEvent>) {
    let status = worker.connection.status();
    if status != worker.last_status {
        worker.last_status = status;
        events.push(PumpEvent::StatusChanged(worker_id, status));
    }

    // Only read while whole frames can follow; a partial read stays in
    // the worker's buffer until more bytes arrive.
    loop {
        let available = worker.connection.available_bytes_for_read();
        if available == 0 {
            break;
        }
        let mut chunk = vec![0; available];
        let read = worker.connection.read(&mut chunk);
        if read == 0 {
            break;
        }
        chunk.truncate(read);
        worker.pending_input.extend(chunk);
    }

    let mut consumed = 0;
    while consumed < worker.pending_input.len() {
        match worker.transport.unpack(&worker.pending_input[consumed..]) {
            Ok(offset) => {
                let frame =
                    worker.pending_input[consumed + offset.data_start..consumed + offset.data_end]
                        .to_vec();
                events.push(PumpEvent::Frame(frame));
                consumed += offset.next_offset;
            }
            Err(transport::Error::MissingBytes) => break,
            Err(transport::Error::BadStatus { status }) if status == 404 => {
                events.push(PumpEvent::AuthKeyUnknown);
                consumed = worker.pending_input.len();
                break;
            }
            Err(err) => {
                warn!("transport error on worker {}: {}", worker_id, err);
                events.push(PumpEvent::SessionBroken("transport error"));
                consumed = worker.pending_input.len();
                break;
            }
        }
    }
    worker.pending_input.drain(..consumed);
}

fn classify_mtp_error(err: ferrogram_mtproto::DeserializeError) -> PumpEvent {
    use ferrogram_mtproto::DeserializeError::*;
    match err {
        BadMessageTime { .. } => PumpEvent::SessionBroken("message time drift"),
        BadSessionId { .. } => PumpEvent::SessionBroken("unexpected session id"),
        MessageKeyMismatch => PumpEvent::SessionBroken("message key mismatch"),
        BadAuthKey { got } => {
            warn!("dropping frame for foreign auth key {}", got);
            PumpEvent::SessionBroken("foreign auth key")
        }
        TransportError { code } if code == -404 => PumpEvent::AuthKeyUnknown,
        other => {
            // Fatal for the frame, not for the session.
            warn!("dropping undecodable frame: {}", other);
            PumpEvent::Inbound(0, Vec::new())
        }
    }
}

/// How a query's bytes reach the wire.
enum WireMode {
    /// A brand-new message id.
    Fresh,

    /// A pre-claimed message id (the body already embeds it).
    Prepared(MsgId),

    /// Retransmission within the same session: the original message is
    /// wrapped in a single-entry container so the old id survives.
    ContainerResend,
}

/// Query submission and lifecycle.
impl UserAgent {
    /// Invokes a typed request on the active DC.
    pub fn invoke<R, F>(&mut self, request: &R, handler: F) -> QueryId
    where
        R: RemoteCall,
        F: FnOnce(&mut UserAgent, InvocationResult<R::Return>) + 'static,
    {
        self.invoke_on(self.active_dc, request, ExecutionOption::Normal, handler)
    }

    /// Invokes a typed request on a specific DC with explicit execution
    /// semantics.
    pub fn invoke_on<R, F>(
        &mut self,
        dc_id: i32,
        request: &R,
        option: ExecutionOption,
        handler: F,
    ) -> QueryId
    where
        R: RemoteCall,
        F: FnOnce(&mut UserAgent, InvocationResult<R::Return>) + 'static,
    {
        let body = match option {
            // User-level queries always identify the connection and the
            // schema layer they speak.
            ExecutionOption::Normal | ExecutionOption::Login => self.wrapped_body(request),
            ExecutionOption::Logout | ExecutionOption::Force => request.to_bytes(),
        };

        let name = {
            let raw = request.to_bytes();
            tl::name_for_id(u32::from_le_bytes(raw[..4].try_into().unwrap()))
        };

        self.submit_query(
            dc_id,
            name,
            body,
            option,
            false,
            true,
            Box::new(move |agent, result| {
                let mapped = match result {
                    Ok(bytes) => R::Return::from_bytes(&bytes).map_err(InvocationError::Parse),
                    Err(error) => Err(InvocationError::Rpc(error)),
                };
                handler(agent, mapped);
            }),
        )
    }

    /// `invokeWithLayer { initConnection { ... } }` around a request.
    fn wrapped_body<R: RemoteCall>(&self, request: &R) -> Vec<u8> {
        use tl::functions::{help::GetConfig, InitConnection, InvokeWithLayer};

        // The constructor identifiers do not depend on the inner type.
        let mut body = Vec::new();
        <InvokeWithLayer<GetConfig>>::CONSTRUCTOR_ID.serialize(&mut body);
        tl::LAYER.serialize(&mut body);
        <InitConnection<GetConfig>>::CONSTRUCTOR_ID.serialize(&mut body);
        self.config.api_id.serialize(&mut body);
        self.config.device_model.serialize(&mut body);
        self.config.system_version.serialize(&mut body);
        self.config.app_version.serialize(&mut body);
        self.config.lang_code.serialize(&mut body);
        request.serialize(&mut body);
        body
    }

    /// Registers a raw query and tries to put it on the wire.
    pub(crate) fn submit_query(
        &mut self,
        dc_id: i32,
        name: &'static str,
        body: Vec<u8>,
        option: ExecutionOption,
        file_transfer: bool,
        retry_on_timeout: bool,
        handler: ResultHandler,
    ) -> QueryId {
        let id = self.next_query_id;
        self.next_query_id += 1;

        let query = Query {
            id,
            name,
            body,
            dc_id,
            option,
            msg_id: MsgId(0),
            session_id: 0,
            seq_no: 0,
            worker: None,
            ack_received: false,
            file_transfer,
            retry_on_timeout,
            handler: Some(handler),
        };
        self.execute_query(query);
        id
    }

    /// Drops a query. A result that later arrives for it is discarded.
    pub fn cancel_query(&mut self, id: QueryId) {
        if let Some(query) = self.queries.remove(&id) {
            self.timers.cancel(TimerToken::QueryTimeout(id));
            self.timers.cancel(TimerToken::QueryRetry(id));
            if query.in_flight() {
                self.queries_by_msg.remove(&(query.dc_id, query.msg_id));
            }
            self.detach_query_transport(&query);
            if let Some(client) = self.clients.get_mut(&query.dc_id) {
                client.pending_queries.retain(|&p| p != id);
            }
        }
    }

    fn execute_query(&mut self, query: Query) {
        let dc_id = query.dc_id;
        self.ensure_client(dc_id);

        let logging_out = self.clients.get(&dc_id).unwrap().is_logging_out();
        if logging_out && !query.is_force() && !query.is_logout() {
            debug!("rejecting query {} while logging out", query.name);
            return self.finish_query(query, Err(logging_out_error()));
        }

        if !self.query_can_send(&query) {
            return self.enqueue_pending(query);
        }

        self.send_query_wire(query, WireMode::Fresh);
    }

    fn query_can_send(&self, query: &Query) -> bool {
        let client = match self.clients.get(&query.dc_id) {
            Some(client) => client,
            None => return false,
        };
        let transport_ready = client
            .session
            .as_ref()
            .map(|s| s.primary.is_connected())
            .unwrap_or(false);

        transport_ready
            && (client.configured || query.is_force())
            && (client.logged_in || query.is_login() || query.is_force())
    }

    fn enqueue_pending(&mut self, query: Query) {
        let dc_id = query.dc_id;
        let id = query.id;
        debug!("query {} #{} is pending on dc {}", query.name, id, dc_id);

        let wants_auth = {
            let client = self.clients.get(&dc_id).unwrap();
            !client.logged_in
                && matches!(query.option, ExecutionOption::Normal)
                && dc_id != self.home_dc
                && self.is_logged_in()
        };

        self.queries.insert(id, query);
        let client = self.clients.get_mut(&dc_id).unwrap();
        if !client.pending_queries.contains(&id) {
            client.pending_queries.push(id);
        }

        self.ensure_client_connected(dc_id);
        if wants_auth {
            self.transfer_auth_to(dc_id);
        }
    }

    fn send_query_wire(&mut self, mut query: Query, mode: WireMode) {
        let dc_id = query.dc_id;
        let now = self.now();

        if self
            .clients
            .get(&dc_id)
            .map(|c| c.session.is_none())
            .unwrap_or(true)
        {
            return self.enqueue_pending(query);
        }

        // Growing the worker pool needs the connector, so decide first.
        let spawn_secondary = {
            let session = self.clients.get(&dc_id).unwrap().session.as_ref().unwrap();
            match session.least_loaded_worker() {
                Some((_, load)) => load > 0 && session.can_grow() && !query.is_force(),
                None => false,
            }
        };
        if spawn_secondary {
            let worker = self.open_worker(dc_id);
            let session = self
                .clients
                .get_mut(&dc_id)
                .unwrap()
                .session
                .as_mut()
                .unwrap();
            let id = session.add_secondary(worker);
            debug!("dc {} grew secondary worker {}", dc_id, id);
        }

        let mut idle_cancel = None;
        {
            let client = self.clients.get_mut(&dc_id).unwrap();
            let session = client.session.as_mut().unwrap();

            let (worker_id, _) = session.least_loaded_worker().unwrap_or((0, 0));

            let pushed = match &mode {
                WireMode::Fresh => session.mtp.push(&query.body, now),
                WireMode::Prepared(msg_id) => session.mtp.push_prepared(&query.body, *msg_id, now),
                WireMode::ContainerResend => {
                    let wrapped = mtp::wrap_in_container(query.msg_id, query.seq_no, &query.body);
                    session.mtp.push(&wrapped, now)
                }
            };
            let pushed = match pushed {
                Some(msg_id) => Some(msg_id),
                None => {
                    // The buffered container is full; flush it through
                    // the primary worker and retry.
                    let payload = session.mtp.finalize(now);
                    if !payload.is_empty() {
                        let primary = &mut session.primary;
                        let mut packed = Vec::new();
                        primary.transport.pack(&payload, &mut packed);
                        primary.connection.write(&packed);
                        primary.connection.flush();
                    }
                    match &mode {
                        WireMode::Fresh => session.mtp.push(&query.body, now),
                        WireMode::Prepared(msg_id) => {
                            session.mtp.push_prepared(&query.body, *msg_id, now)
                        }
                        WireMode::ContainerResend => {
                            let wrapped =
                                mtp::wrap_in_container(query.msg_id, query.seq_no, &query.body);
                            session.mtp.push(&wrapped, now)
                        }
                    }
                }
            };
            let outer_msg_id = match pushed {
                Some(msg_id) => msg_id,
                None => {
                    error!("query {} does not fit in an empty container", query.name);
                    drop(client);
                    return self.finish_query(
                        query,
                        Err(RpcError {
                            code: 400,
                            name: "QUERY_TOO_LARGE".to_string(),
                            value: None,
                        }),
                    );
                }
            };

            match mode {
                WireMode::Fresh | WireMode::Prepared(_) => {
                    query.msg_id = outer_msg_id;
                    query.seq_no = session.mtp.sequence() - 1;
                }
                WireMode::ContainerResend => {
                    // The inner message keeps its identity; only the
                    // envelope is new.
                }
            }
            query.session_id = session.session_id();
            query.worker = Some(worker_id);
            query.ack_received = false;

            let payload = session.mtp.finalize(now);
            let worker = session.worker_mut(worker_id).unwrap();
            let mut packed = Vec::new();
            worker.transport.pack(&payload, &mut packed);
            worker.connection.write(&packed);
            worker.connection.flush();
            worker.assign(query.msg_id, query.file_transfer);
            if worker.idle_timer_armed {
                worker.idle_timer_armed = false;
                idle_cancel = Some(TimerToken::WorkerIdle(dc_id, worker_id as u32));
            }

            client.active_queries += 1;
            if client.cleanup_timer_armed {
                client.cleanup_timer_armed = false;
                self.timers.cancel(TimerToken::SessionCleanup(dc_id));
            }
        }
        if let Some(token) = idle_cancel {
            self.timers.cancel(token);
        }

        debug!(
            "sent query {} #{} with {:?} to dc {}",
            query.name, query.id, query.msg_id, dc_id
        );
        self.queries_by_msg.insert((dc_id, query.msg_id), query.id);
        self.timers
            .schedule(QUERY_TIMEOUT, TimerToken::QueryTimeout(query.id));
        self.queries.insert(query.id, query);
    }

    /// Removes a finished or failed in-flight query from every index.
    fn take_query_by_msg(&mut self, dc_id: i32, msg_id: MsgId) -> Option<Query> {
        let id = self.queries_by_msg.remove(&(dc_id, msg_id))?;
        let query = self.queries.remove(&id)?;
        self.timers.cancel(TimerToken::QueryTimeout(id));
        self.timers.cancel(TimerToken::QueryRetry(id));
        self.detach_query_transport(&query);
        Some(query)
    }

    /// Releases a query's transport bookkeeping: worker load, active
    /// counts, and the reaping timers those feed.
    fn detach_query_transport(&mut self, query: &Query) {
        let dc_id = query.dc_id;
        let client = match self.clients.get_mut(&dc_id) {
            Some(client) => client,
            None => return,
        };
        if query.in_flight() {
            client.active_queries = client.active_queries.saturating_sub(1);
        }

        if let (Some(session), Some(worker_id)) = (client.session.as_mut(), query.worker) {
            if let Some(worker) = session.worker_mut(worker_id) {
                worker.release(query.msg_id);
                if worker_id != 0 && worker.is_idle() && !worker.idle_timer_armed {
                    worker.idle_timer_armed = true;
                    self.timers.schedule(
                        WORKER_IDLE_TIMEOUT,
                        TimerToken::WorkerIdle(dc_id, worker_id as u32),
                    );
                }
            }
        }

        if client.is_quiescent() && dc_id != self.active_dc && !client.cleanup_timer_armed {
            client.cleanup_timer_armed = true;
            self.timers
                .schedule(SESSION_CLEANUP_TIMEOUT, TimerToken::SessionCleanup(dc_id));
        }
    }

    fn finish_query(&mut self, mut query: Query, result: Result<Vec<u8>, RpcError>) {
        if let Some(handler) = query.handler.take() {
            handler(self, result);
        }
    }

    // Inbound dispatch
    // ========================================

    fn dispatch_inbound(&mut self, dc_id: i32, _worker_id: WorkerId, item: Inbound) {
        match item {
            Inbound::RpcResult { msg_id, body } => self.on_rpc_result(dc_id, msg_id, body),
            Inbound::RpcError { msg_id, error } => self.on_rpc_error(dc_id, msg_id, error),
            Inbound::BadMessage { msg_id, code } => self.on_bad_message(dc_id, msg_id, code),
            Inbound::NewSession {
                first_msg_id,
                unique_id,
            } => {
                info!(
                    "dc {} created a new server-side session {} (first msg {})",
                    dc_id, unique_id, first_msg_id
                );
                // Updates may have been lost around the reset.
                if self.is_logged_in() {
                    self.begin_get_difference();
                }
            }
            Inbound::Acks(msg_ids) => self.on_acks(dc_id, msg_ids),
            Inbound::Update(body) => self.on_updates_bytes(dc_id, body),
        }
    }

    fn on_rpc_result(&mut self, dc_id: i32, msg_id: MsgId, body: Vec<u8>) {
        match self.take_query_by_msg(dc_id, msg_id) {
            Some(query) => {
                debug!("got result for query {} #{}", query.name, query.id);
                self.finish_query(query, Ok(body));
            }
            None => {
                info!("got result for unknown {:?} on dc {}", msg_id, dc_id);
            }
        }
    }

    fn on_acks(&mut self, dc_id: i32, msg_ids: Vec<MsgId>) {
        for msg_id in msg_ids {
            let id = match self.queries_by_msg.get(&(dc_id, msg_id)) {
                Some(&id) => id,
                None => continue,
            };
            let (is_logout, already) = {
                let query = self.queries.get_mut(&id).unwrap();
                let already = query.ack_received;
                query.ack_received = true;
                (query.is_logout(), already)
            };
            if !already {
                self.timers
                    .schedule(ACKED_QUERY_TIMEOUT, TimerToken::QueryTimeout(id));
            }

            // The server acks a logout and then closes the connection
            // without a result, so the ack is the result.
            if is_logout {
                if let Some(query) = self.take_query_by_msg(dc_id, msg_id) {
                    self.finish_query(query, Ok(true.to_bytes()));
                }
            }
        }
    }

    fn on_bad_message(&mut self, dc_id: i32, msg_id: MsgId, code: i32) {
        let query = match self.take_query_by_msg(dc_id, msg_id) {
            Some(query) => query,
            None => {
                debug!("bad msg {} for unknown {:?} on dc {}", code, msg_id, dc_id);
                return;
            }
        };
        warn!(
            "server rejected query {} #{} with code {}",
            query.name, query.id, code
        );

        // Whatever made the message bad (salt, time skew, container) was
        // already corrected by the framing layer before we got here.
        match code {
            16 | 17 | 48 | 64 => {
                let id = query.id;
                self.queries.insert(id, query);
                self.alarm_query(id);
            }
            32 | 33 => {
                // The sequence numbers went unrecoverably wrong; start a
                // fresh session and let it resend everything.
                self.stash_as_pending(query);
                self.restart_session(dc_id);
            }
            _ => {
                let id = query.id;
                self.queries.insert(id, query);
                self.timers
                    .schedule(QUERY_TIMEOUT, TimerToken::QueryTimeout(id));
            }
        }
    }

    /// Resets a query to its unsent state and parks it on its client.
    fn stash_as_pending(&mut self, mut query: Query) {
        query.msg_id = MsgId(0);
        query.session_id = 0;
        query.seq_no = 0;
        query.worker = None;
        query.ack_received = false;
        let dc_id = query.dc_id;
        let id = query.id;
        self.queries.insert(id, query);
        let client = self.ensure_client(dc_id);
        if !client.pending_queries.contains(&id) {
            client.pending_queries.push(id);
        }
    }

    /// Re-sends a query, preserving its message identity when it is
    /// still within the session that first carried it.
    fn alarm_query(&mut self, id: QueryId) {
        let mut query = match self.queries.remove(&id) {
            Some(query) => query,
            // A timer raced with the result; nothing to do.
            None => return,
        };
        self.timers.cancel(TimerToken::QueryTimeout(id));
        self.timers.cancel(TimerToken::QueryRetry(id));
        if query.in_flight() {
            self.queries_by_msg.remove(&(query.dc_id, query.msg_id));
            self.detach_query_transport(&query);
        }

        let dc_id = query.dc_id;
        let logging_out = self
            .clients
            .get(&dc_id)
            .map(|c| c.is_logging_out())
            .unwrap_or(false);
        if logging_out && !query.is_force() && !query.is_logout() {
            return self.finish_query(query, Err(logging_out_error()));
        }

        if !self.query_can_send(&query) {
            query.msg_id = MsgId(0);
            query.session_id = 0;
            return self.enqueue_pending(query);
        }

        let same_session = query.in_flight()
            && self
                .clients
                .get(&dc_id)
                .and_then(|c| c.session.as_ref())
                .map(|s| s.session_id() == query.session_id)
                .unwrap_or(false);

        if same_session {
            info!("re-sending query {} #{} in its session", query.name, id);
            self.send_query_wire(query, WireMode::ContainerResend);
        } else {
            info!("re-sending query {} #{} from scratch", query.name, id);
            query.msg_id = MsgId(0);
            query.session_id = 0;
            self.send_query_wire(query, WireMode::Fresh);
        }
    }

    // Error recovery ladder
    // ========================================

    fn on_rpc_error(&mut self, dc_id: i32, msg_id: MsgId, error: RpcError) {
        let query = match self.take_query_by_msg(dc_id, msg_id) {
            Some(query) => query,
            None => {
                info!("got error {} for unknown {:?} on dc {}", error, msg_id, dc_id);
                return;
            }
        };

        debug!(
            "query {} #{} failed with {} on dc {}",
            query.name, query.id, error, dc_id
        );

        match error.code {
            303 => self.handle_migration(query, error),
            401 if error.is("SESSION_PASSWORD_NEEDED") => {
                self.begin_password_flow();
                if query.should_retry_after_recovery() {
                    self.stash_as_pending(query);
                } else {
                    self.finish_query(query, Err(error));
                }
            }
            401 if error.is("AUTH_KEY_UNREGISTERED") || error.is("AUTH_KEY_INVALID") => {
                warn!("dc {} no longer accepts our authorization", dc_id);
                {
                    let client = self.clients.get_mut(&dc_id).unwrap();
                    client.logged_in = false;
                }
                let state = self.clients.get(&dc_id).unwrap().persisted_state();
                self.callback.dc_updated(&state);

                let retry = query.should_retry_after_recovery();
                if retry {
                    self.stash_as_pending(query);
                } else {
                    self.finish_query(query, Err(error));
                }
                self.login();
            }
            401 if error.is("AUTH_KEY_PERM_EMPTY") => {
                // Only temp keys produce this; rebuild and rebind one.
                if query.should_retry_after_recovery() {
                    self.stash_as_pending(query);
                } else {
                    self.finish_query(query, Err(error));
                }
                self.restart_temp_authorization(dc_id);
            }
            420 | 500 => self.handle_transient_error(query, error),
            400..=499 => {
                // Bad input, privacy violations, missing entities: the
                // caller's problem, unchanged.
                self.finish_query(query, Err(error));
            }
            _ => self.handle_transient_error(query, error),
        }
    }

    fn handle_migration(&mut self, mut query: Query, error: RpcError) {
        let target = match error.value {
            Some(dc) if (1..MAX_DC_ID as u32).contains(&dc) => dc as i32,
            _ => {
                warn!("unusable migration error: {}", error);
                return self.finish_query(query, Err(error));
            }
        };
        let recognized = error.is("USER_MIGRATE")
            || error.is("PHONE_MIGRATE")
            || error.is("NETWORK_MIGRATE");
        if !recognized {
            return self.finish_query(query, Err(error));
        }

        info!("server asked us to migrate to dc {}", target);
        self.set_active_dc(target);

        if query.should_retry_after_recovery() || query.is_login() {
            query.dc_id = target;
            query.msg_id = MsgId(0);
            query.session_id = 0;
            query.ack_received = false;
            self.execute_query(query);
        } else {
            self.finish_query(query, Err(error));
        }
    }

    fn handle_transient_error(&mut self, query: Query, error: RpcError) {
        let delay = match error.value {
            Some(seconds) if error.is("FLOOD_WAIT") => Duration::from_secs(seconds as u64),
            _ => DEFAULT_RETRY_DELAY,
        };

        if !query.should_retry_after_recovery() {
            return self.finish_query(query, Err(error));
        }

        info!(
            "retrying query {} #{} in {:?} after {}",
            query.name, query.id, delay, error
        );

        let id = query.id;
        let dc_id = query.dc_id;
        let mut query = query;
        let unconfigured = self
            .clients
            .get(&dc_id)
            .map(|c| !c.configured)
            .unwrap_or(true);
        if unconfigured && !query.is_force() {
            query.session_id = 0;
        }
        query.msg_id = MsgId(0);
        query.ack_received = false;
        self.queries.insert(id, query);
        self.timers.schedule(delay, TimerToken::QueryRetry(id));
    }
}

/// Timer dispatch and the flows it drives.
impl UserAgent {
    /// The host delivers every timer expiry here.
    pub fn handle_timer(&mut self, token: TimerToken) {
        trace!("timer fired: {:?}", token);
        match token {
            TimerToken::QueryTimeout(id) => self.on_query_timeout(id),
            TimerToken::QueryRetry(id) => self.alarm_query(id),
            TimerToken::AckFlush(dc_id) => self.flush_acks(dc_id),
            TimerToken::SessionCleanup(dc_id) => self.on_session_cleanup(dc_id),
            TimerToken::WorkerIdle(dc_id, worker_id) => {
                self.on_worker_idle(dc_id, worker_id as WorkerId)
            }
            TimerToken::Reconnect(dc_id) => self.on_reconnect(dc_id),
            TimerToken::Ping(dc_id) => self.on_ping_due(dc_id),
            TimerToken::StateLookup => self.on_state_lookup(),
            TimerToken::SecretChatHole(chat_id) => self.on_secret_hole_timeout(chat_id),
        }
    }

    fn on_query_timeout(&mut self, id: QueryId) {
        let retry = match self.queries.get(&id) {
            Some(query) => query.retry_on_timeout,
            // Stale firing for a finished query.
            None => return,
        };

        if retry {
            self.alarm_query(id);
        } else {
            let query = self.queries.remove(&id).unwrap();
            if query.in_flight() {
                self.queries_by_msg.remove(&(query.dc_id, query.msg_id));
                self.detach_query_transport(&query);
            }
            self.finish_query(query, Err(timeout_error()));
        }
    }

    /// Sends the accumulated acknowledgements as a standalone message.
    fn flush_acks(&mut self, dc_id: i32) {
        let now = self.now();
        let client = match self.clients.get_mut(&dc_id) {
            Some(client) => client,
            None => return,
        };
        let session = match client.session.as_mut() {
            Some(session) => session,
            None => return,
        };

        session.ack_timer_armed = false;
        if !session.mtp.has_pending_ack() {
            return;
        }

        trace!("flushing acks on dc {}", dc_id);
        let payload = session.mtp.finalize(now);
        if payload.is_empty() {
            return;
        }
        let primary = &mut session.primary;
        let mut packed = Vec::new();
        primary.transport.pack(&payload, &mut packed);
        primary.connection.write(&packed);
        primary.connection.flush();
    }

    fn on_session_cleanup(&mut self, dc_id: i32) {
        if dc_id == self.active_dc {
            return;
        }
        let client = match self.clients.get_mut(&dc_id) {
            Some(client) => client,
            None => return,
        };
        client.cleanup_timer_armed = false;
        if !client.is_quiescent() {
            return;
        }

        info!("destroying idle session on dc {}", dc_id);
        if let Some(mut session) = client.session.take() {
            session.close();
        }
        self.timers.cancel(TimerToken::Ping(dc_id));
    }

    fn on_worker_idle(&mut self, dc_id: i32, worker_id: WorkerId) {
        let client = match self.clients.get_mut(&dc_id) {
            Some(client) => client,
            None => return,
        };
        let session = match client.session.as_mut() {
            Some(session) => session,
            None => return,
        };
        let still_idle = session
            .worker(worker_id)
            .map(|w| {
                w.is_idle()
            })
            .unwrap_or(false);
        if still_idle {
            debug!("reaping idle worker {} on dc {}", worker_id, dc_id);
            session.remove_secondary(worker_id);
        }
    }

    fn on_reconnect(&mut self, dc_id: i32) {
        let client = match self.clients.get_mut(&dc_id) {
            Some(client) => client,
            None => return,
        };

        info!("re-opening connection to dc {}", dc_id);
        if matches!(client.state, AuthState::Failed) {
            client.state = AuthState::Init;
        }
        if let Some(session) = client.session.as_mut() {
            session.primary.connection.open();
        } else if let Some(worker) = client.handshake_worker.as_mut() {
            worker.connection.open();
        } else {
            self.ensure_client_connected(dc_id);
            return;
        }
        self.poke_transport(dc_id);
    }

    fn on_ping_due(&mut self, dc_id: i32) {
        let has_session = self
            .clients
            .get(&dc_id)
            .map(|c| c.session.is_some())
            .unwrap_or(false);
        if !has_session {
            return;
        }

        let mut ping_id = [0u8; 8];
        getrandom::getrandom(&mut ping_id).expect("failed to generate a ping id");
        let request = tl::functions::PingDelayDisconnect {
            ping_id: i64::from_le_bytes(ping_id),
            disconnect_delay: PING_DISCONNECT_DELAY,
        };

        self.submit_query(
            dc_id,
            "ping_delay_disconnect",
            request.to_bytes(),
            ExecutionOption::Force,
            false,
            false,
            Box::new(|_, result| {
                if let Err(err) = result {
                    debug!("keepalive ping failed: {}", err);
                }
            }),
        );
        self.timers.schedule(PING_INTERVAL, TimerToken::Ping(dc_id));
    }

    fn on_state_lookup(&mut self) {
        if self.is_logged_in() {
            self.invoke(&tl::functions::updates::GetState {}, |agent, result| {
                if let Ok(tl::enums::updates::State::State(state)) = result {
                    if state.pts != agent.pts || state.qts != agent.qts || state.seq != agent.seq {
                        info!(
                            "server state differs (pts {} vs {}); getting difference",
                            state.pts, agent.pts
                        );
                        agent.begin_get_difference();
                    }
                }
            });
        }
        self.timers
            .schedule(STATE_LOOKUP_INTERVAL, TimerToken::StateLookup);
    }

    // Temp-key binding and configuration
    // ========================================

    fn bind_temp_auth_key(&mut self, dc_id: i32) {
        let now = self.now();
        let (msg_id, request) = {
            let client = self.clients.get_mut(&dc_id).unwrap();
            if client.bind_query.is_some() {
                // Only one binding may be in flight per DC.
                return;
            }
            let session = match client.session.as_mut() {
                Some(session) => session,
                None => return,
            };
            let perm_key = match client.auth_key.as_ref() {
                Some(key) => key.clone(),
                None => return,
            };
            let temp_key_id = match client.temp_auth_key.as_ref() {
                Some(key) => key.id(),
                None => return,
            };

            let msg_id = session.mtp.next_msg_id(now);
            let expires_at = now.as_secs() as i32
                + client.server_time_delta
                + self.config.temp_key_expire_seconds;
            client.temp_key_expires_at = expires_at;
            client.bind_msg_id = msg_id;

            let request = authentication::build_bind_temp_auth_key(
                &perm_key,
                temp_key_id,
                session.session_id(),
                expires_at,
                msg_id,
            );
            (msg_id, request)
        };

        info!("binding temp auth key on dc {}", dc_id);
        let id = self.next_query_id;
        self.next_query_id += 1;
        let query = Query {
            id,
            name: "auth.bindTempAuthKey",
            body: request.to_bytes(),
            dc_id,
            option: ExecutionOption::Force,
            msg_id: MsgId(0),
            session_id: 0,
            seq_no: 0,
            worker: None,
            ack_received: false,
            file_transfer: false,
            retry_on_timeout: false,
            handler: Some(Box::new(move |agent, result| {
                agent.on_bind_result(dc_id, result);
            })),
        };
        self.clients.get_mut(&dc_id).unwrap().bind_query = Some(id);
        self.send_query_wire(query, WireMode::Prepared(msg_id));
    }

    fn on_bind_result(&mut self, dc_id: i32, result: Result<Vec<u8>, RpcError>) {
        {
            let client = self.clients.get_mut(&dc_id).unwrap();
            client.bind_query = None;
        }

        match result.map(|bytes| bool::from_bytes(&bytes)) {
            Ok(Ok(true)) => {
                info!("temp auth key bound on dc {}", dc_id);
                let client = self.clients.get_mut(&dc_id).unwrap();
                client.bound = true;
                self.configure(dc_id);
            }
            Ok(Ok(false)) | Ok(Err(_)) => {
                warn!("binding on dc {} got a malformed answer", dc_id);
                self.restart_temp_authorization(dc_id);
            }
            Err(error) => {
                // A dead or expired temp key cannot be bound; make a
                // fresh one and try again.
                warn!("binding on dc {} failed: {}", dc_id, error);
                self.restart_temp_authorization(dc_id);
            }
        }
    }

    /// Fetches the server configuration, completing the client setup.
    fn configure(&mut self, dc_id: i32) {
        debug!("requesting configuration on dc {}", dc_id);
        let body = tl::functions::help::GetConfig {}.to_bytes();
        self.submit_query(
            dc_id,
            "help.getConfig",
            body,
            ExecutionOption::Force,
            false,
            true,
            Box::new(move |agent, result| match result {
                Ok(bytes) => match tl::enums::Config::from_bytes(&bytes) {
                    Ok(tl::enums::Config::Config(config)) => {
                        agent.on_configured(dc_id, config);
                    }
                    Err(err) => {
                        warn!("config response failed to parse: {}", err);
                    }
                },
                Err(error) => {
                    warn!("help.getConfig failed on dc {}: {}", dc_id, error);
                }
            }),
        );
    }

    fn on_configured(&mut self, dc_id: i32, config: tl::types::Config) {
        info!(
            "dc {} configured (this_dc = {}, {} options)",
            dc_id,
            config.this_dc,
            config.dc_options.len()
        );
        self.apply_dc_options(&config.dc_options);

        {
            let client = self.clients.get_mut(&dc_id).unwrap();
            client.configured = true;
        }
        let state = self.clients.get(&dc_id).unwrap().persisted_state();
        self.callback.dc_updated(&state);

        self.timers
            .schedule(STATE_LOOKUP_INTERVAL, TimerToken::StateLookup);
        self.send_pending_queries(dc_id);
    }

    /// Merges learned DC options into the per-client endpoint tables.
    /// Media-only options are not useful to the core and are dropped.
    pub(crate) fn apply_dc_options(&mut self, options: &[tl::enums::DcOption]) {
        for tl::enums::DcOption::Option(option) in options {
            if option.media_only {
                continue;
            }
            let endpoint = crate::net::Endpoint::new(option.ip_address.clone(), option.port as u16);
            let client = self.ensure_client(option.id);
            let table = if option.ipv6 {
                &mut client.endpoints_v6
            } else {
                &mut client.endpoints_v4
            };
            if !table.contains(&endpoint) {
                debug!("learned endpoint {:?} for dc {}", endpoint, option.id);
                table.push(endpoint);
            }
        }
    }

    fn send_pending_queries(&mut self, dc_id: i32) {
        let ids = match self.clients.get_mut(&dc_id) {
            Some(client) => std::mem::take(&mut client.pending_queries),
            None => return,
        };
        if ids.is_empty() {
            return;
        }

        debug!("draining {} pending queries on dc {}", ids.len(), dc_id);
        for id in ids {
            if let Some(query) = self.queries.remove(&id) {
                self.execute_query(query);
            }
        }
    }

    // Cross-DC authorization transfer
    // ========================================

    fn transfer_auth_to(&mut self, dc_id: i32) {
        {
            let client = self.ensure_client(dc_id);
            if client.auth_transfer_in_progress {
                return;
            }
            client.auth_transfer_in_progress = true;
        }
        let home = self.home_dc;
        info!("exporting authorization from dc {} to dc {}", home, dc_id);

        self.invoke_on(
            home,
            &tl::functions::auth::ExportAuthorization { dc_id },
            ExecutionOption::Normal,
            move |agent, result| match result {
                Ok(tl::enums::auth::ExportedAuthorization::Exported(exported)) => {
                    agent.invoke_on(
                        dc_id,
                        &tl::functions::auth::ImportAuthorization {
                            id: exported.id,
                            bytes: exported.bytes,
                        },
                        ExecutionOption::Login,
                        move |agent, result| {
                            {
                                let client = agent.ensure_client(dc_id);
                                client.auth_transfer_in_progress = false;
                            }
                            match result {
                                Ok(_) => {
                                    info!("authorization imported into dc {}", dc_id);
                                    agent.ensure_client(dc_id).logged_in = true;
                                    let state =
                                        agent.clients.get(&dc_id).unwrap().persisted_state();
                                    agent.callback.dc_updated(&state);
                                    agent.send_pending_queries(dc_id);
                                }
                                Err(error) => {
                                    warn!("auth import into dc {} failed: {}", dc_id, error);
                                }
                            }
                        },
                    );
                }
                Err(error) => {
                    warn!("auth export for dc {} failed: {}", dc_id, error);
                    agent.ensure_client(dc_id).auth_transfer_in_progress = false;
                }
            },
        );
    }

    // Login, password and logout flows
    // ========================================

    /// Starts the interactive login conversation. The engine will ask
    /// the host for the phone number, the received code, and possibly
    /// the cloud password or sign-up details.
    pub fn login(&mut self) {
        if self.is_logged_in() {
            return;
        }
        if !matches!(self.login, LoginState::Idle) {
            return;
        }

        self.connect();
        self.login = LoginState::WaitingPhone;
        self.callback.get_value(ValueRequest::PhoneNumber);
    }

    /// The host's answer to the last [`ValueRequest`].
    pub fn provide_value(&mut self, value: Value) {
        let state = std::mem::replace(&mut self.login, LoginState::Idle);
        match (state, value) {
            (LoginState::WaitingPhone, Value::PhoneNumber(phone)) => {
                self.send_code_request(phone);
            }
            (
                LoginState::WaitingCode {
                    phone,
                    phone_code_hash,
                    registered,
                },
                Value::LoginCode(code),
            ) => {
                if registered {
                    self.sign_in(phone, phone_code_hash, code);
                } else {
                    self.login = LoginState::WaitingRegister {
                        phone,
                        phone_code_hash,
                        code,
                    };
                    self.callback.get_value(ValueRequest::RegisterInfo);
                }
            }
            (LoginState::WaitingPassword { current_salt }, Value::Password(password)) => {
                self.check_password(current_salt, password);
            }
            (
                LoginState::WaitingRegister {
                    phone,
                    phone_code_hash,
                    code,
                },
                Value::RegisterInfo {
                    first_name,
                    last_name,
                },
            ) => {
                self.sign_up(phone, phone_code_hash, code, first_name, last_name);
            }
            (state, value) => {
                warn!("unexpected login value {:?}; keeping state", value);
                self.login = state;
            }
        }
    }

    fn send_code_request(&mut self, phone: String) {
        let request = tl::functions::auth::SendCode {
            phone_number: phone.clone(),
            sms_type: 0,
            api_id: self.config.api_id,
            api_hash: self.config.api_hash.clone(),
            lang_code: self.config.lang_code.clone(),
        };
        self.invoke_on(
            self.active_dc,
            &request,
            ExecutionOption::Login,
            move |agent, result| match result {
                Ok(sent) => {
                    let (phone_code_hash, registered) = match sent {
                        tl::enums::auth::SentCode::Code(x) => (x.phone_code_hash, x.phone_registered),
                        tl::enums::auth::SentCode::AppCode(x) => {
                            (x.phone_code_hash, x.phone_registered)
                        }
                    };
                    agent.login = LoginState::WaitingCode {
                        phone,
                        phone_code_hash,
                        registered,
                    };
                    agent.callback.get_value(ValueRequest::LoginCode);
                }
                Err(error) => {
                    warn!("auth.sendCode failed: {}", error);
                    agent.login = LoginState::WaitingPhone;
                    agent.callback.get_value(ValueRequest::PhoneNumber);
                }
            },
        );
    }

    fn sign_in(&mut self, phone: String, phone_code_hash: String, code: String) {
        let request = tl::functions::auth::SignIn {
            phone_number: phone.clone(),
            phone_code_hash: phone_code_hash.clone(),
            phone_code: code,
        };
        self.invoke_on(
            self.active_dc,
            &request,
            ExecutionOption::Login,
            move |agent, result| match result {
                Ok(authorization) => agent.finish_login(authorization),
                Err(InvocationError::Rpc(ref error)) if error.is("PHONE_NUMBER_UNOCCUPIED") => {
                    agent.login = LoginState::WaitingCode {
                        phone,
                        phone_code_hash,
                        registered: false,
                    };
                    agent.callback.get_value(ValueRequest::LoginCode);
                }
                Err(error) => {
                    // A needed password is handled by the error ladder;
                    // everything else restarts the code prompt.
                    if agent.is_logged_in() || agent.password_locked {
                        return;
                    }
                    warn!("auth.signIn failed: {}", error);
                    agent.login = LoginState::WaitingCode {
                        phone,
                        phone_code_hash,
                        registered: true,
                    };
                    agent.callback.get_value(ValueRequest::LoginCode);
                }
            },
        );
    }

    fn sign_up(
        &mut self,
        phone: String,
        phone_code_hash: String,
        code: String,
        first_name: String,
        last_name: String,
    ) {
        let request = tl::functions::auth::SignUp {
            phone_number: phone,
            phone_code_hash,
            phone_code: code,
            first_name,
            last_name,
        };
        self.invoke_on(
            self.active_dc,
            &request,
            ExecutionOption::Login,
            |agent, result| match result {
                Ok(authorization) => agent.finish_login(authorization),
                Err(error) => {
                    warn!("auth.signUp failed: {}", error);
                    agent.login = LoginState::WaitingPhone;
                    agent.callback.get_value(ValueRequest::PhoneNumber);
                }
            },
        );
    }

    /// Begins the two-factor flow after a 401 `SESSION_PASSWORD_NEEDED`.
    pub(crate) fn begin_password_flow(&mut self) {
        if self.password_locked {
            return;
        }
        self.password_locked = true;

        self.invoke_on(
            self.active_dc,
            &tl::functions::account::GetPassword {},
            ExecutionOption::Login,
            |agent, result| match result {
                Ok(tl::enums::account::Password::Password(password)) => {
                    agent.login = LoginState::WaitingPassword {
                        current_salt: password.current_salt,
                    };
                    agent.callback.get_value(ValueRequest::Password {
                        hint: password.hint,
                    });
                }
                Ok(tl::enums::account::Password::NoPassword(_)) => {
                    // The server asked for a password that isn't set;
                    // nothing sensible to do but unlock.
                    warn!("password required but account has none");
                    agent.password_locked = false;
                }
                Err(error) => {
                    warn!("account.getPassword failed: {}", error);
                    agent.password_locked = false;
                }
            },
        );
    }

    fn check_password(&mut self, current_salt: Vec<u8>, password: String) {
        let hash =
            ferrogram_crypto::password::calculate_password_hash(&current_salt, password.as_bytes());
        self.invoke_on(
            self.active_dc,
            &tl::functions::auth::CheckPassword {
                password_hash: hash,
            },
            ExecutionOption::Login,
            move |agent, result| match result {
                Ok(authorization) => {
                    agent.password_locked = false;
                    agent.finish_login(authorization);
                }
                Err(error) => {
                    warn!("auth.checkPassword failed: {}", error);
                    agent.login = LoginState::WaitingPassword { current_salt };
                    agent.callback.get_value(ValueRequest::Password {
                        hint: String::new(),
                    });
                }
            },
        );
    }

    fn finish_login(&mut self, authorization: tl::enums::auth::Authorization) {
        let tl::enums::auth::Authorization::Authorization(authorization) = authorization;
        let user_id = match authorization.user {
            tl::enums::User::User(user) => user.id,
            tl::enums::User::Empty(user) => user.id,
        };

        let dc_id = self.active_dc;
        info!("logged in as user {} on dc {}", user_id, dc_id);

        self.our_id = user_id;
        self.home_dc = dc_id;
        self.login = LoginState::Idle;
        self.password_locked = false;
        {
            let client = self.ensure_client(dc_id);
            client.logged_in = true;
        }

        self.callback.our_id(user_id);
        let state = self.clients.get(&dc_id).unwrap().persisted_state();
        self.callback.dc_updated(&state);

        // Seed the update counters so gaps can be detected from here on.
        self.invoke(&tl::functions::updates::GetState {}, |agent, result| {
            if let Ok(tl::enums::updates::State::State(state)) = result {
                agent.pts = state.pts;
                agent.qts = state.qts;
                agent.seq = state.seq;
                agent.date = state.date;
                agent.callback.pts_changed(state.pts);
                agent.callback.qts_changed(state.qts);
                agent.callback.date_changed(state.date);
            }
        });

        self.send_pending_queries(dc_id);
    }

    /// Logs the account out. Pending queries fail with a synthetic 600
    /// error; the ack of the logout query itself completes it.
    pub fn log_out(&mut self) {
        let dc_id = self.active_dc;
        if self
            .clients
            .get(&dc_id)
            .map(|c| c.is_logging_out())
            .unwrap_or(false)
        {
            return;
        }

        info!("logging out from dc {}", dc_id);
        let body = tl::functions::auth::LogOut {}.to_bytes();
        let id = self.submit_query(
            dc_id,
            "auth.logOut",
            body,
            ExecutionOption::Logout,
            false,
            true,
            Box::new(move |agent, _result| {
                agent.finish_logout(dc_id);
            }),
        );
        if let Some(client) = self.clients.get_mut(&dc_id) {
            client.logout_query = Some(id);
        }
    }

    fn finish_logout(&mut self, dc_id: i32) {
        info!("logged out from dc {}", dc_id);
        let pending = {
            let client = match self.clients.get_mut(&dc_id) {
                Some(client) => client,
                None => return,
            };
            client.logout_query = None;
            // The server forgets the authorization on logout, so keeping
            // the keys would only produce AUTH_KEY_UNREGISTERED later.
            if let Some(mut session) = client.session.take() {
                session.close();
            }
            client.reset_authorization();
            std::mem::take(&mut client.pending_queries)
        };

        for id in pending {
            if let Some(query) = self.queries.remove(&id) {
                self.finish_query(query, Err(logging_out_error()));
            }
        }

        let state = self.clients.get(&dc_id).unwrap().persisted_state();
        self.callback.dc_updated(&state);
    }
}

/// Secret-chat operations.
impl UserAgent {
    /// Initiates an end-to-end encrypted chat with a user. The request
    /// completes through `updateEncryption` once the peer accepts.
    pub fn create_secret_chat(&mut self, user_id: i32, access_hash: i64) {
        self.with_dh_config(move |agent, g, prime| {
            let mut private_key = [0u8; 256];
            getrandom::getrandom(&mut private_key).expect("failed to generate a DH secret");
            let g_a = dh::mod_exp_g(g, &private_key, &prime);

            let mut random = [0u8; 8];
            getrandom::getrandom(&mut random).expect("failed to generate a chat id");
            let random_id = i32::from_le_bytes(random[..4].try_into().unwrap());

            let mut chat = SecretChat::new(random_id, access_hash, user_id, agent.our_id, true);
            chat.encr_root = g;
            chat.encr_prime = prime;
            chat.g_key = g_a.clone();
            // The private exponent lives in the key slot until the peer
            // answers with g_b and the shared key replaces it.
            chat.key = dh::pad_to_256(&private_key);
            agent.secret_chats.insert(random_id, chat);

            agent.invoke(
                &tl::functions::messages::RequestEncryption {
                    user_id: tl::enums::InputUser::User(tl::types::InputUser {
                        user_id,
                        access_hash,
                    }),
                    random_id,
                    g_a,
                },
                move |agent, result| match result {
                    Ok(chat) => agent.on_encryption_update(chat, 0),
                    Err(error) => {
                        warn!("messages.requestEncryption failed: {}", error);
                        agent.secret_chats.remove(&random_id);
                    }
                },
            );
        });
    }

    /// Accepts a secret chat the peer requested (state `Waiting`).
    pub fn accept_secret_chat(&mut self, chat_id: i32) {
        let (access_hash, g_a) = match self.secret_chats.get(&chat_id) {
            Some(chat) if chat.state == crate::secret_chat::SecretChatState::Waiting => {
                (chat.access_hash, chat.g_key.clone())
            }
            _ => {
                warn!("cannot accept secret chat {}: not waiting", chat_id);
                return;
            }
        };

        self.with_dh_config(move |agent, g, prime| {
            if !dh::check_g_bytes(&g_a, &prime) {
                warn!("secret chat {}: peer's g_a is out of range", chat_id);
                agent.discard_secret_chat(chat_id);
                return;
            }

            let mut private_key = [0u8; 256];
            getrandom::getrandom(&mut private_key).expect("failed to generate a DH secret");
            let g_b = dh::mod_exp_g(g, &private_key, &prime);
            let key = dh::pad_to_256(&dh::mod_exp(&g_a, &private_key, &prime));

            let fingerprint = {
                let chat = agent.secret_chats.get_mut(&chat_id).unwrap();
                chat.encr_root = g;
                chat.encr_prime = prime;
                chat.set_key(key);
                chat.state = crate::secret_chat::SecretChatState::Ok;
                chat.key_fingerprint
            };

            agent.invoke(
                &tl::functions::messages::AcceptEncryption {
                    peer: tl::enums::InputEncryptedChat::Chat(tl::types::InputEncryptedChat {
                        chat_id,
                        access_hash,
                    }),
                    g_b,
                    key_fingerprint: fingerprint,
                },
                move |agent, result| {
                    if let Err(error) = result {
                        warn!("messages.acceptEncryption failed: {}", error);
                        agent.discard_secret_chat(chat_id);
                    } else if let Some(chat) = agent.secret_chats.get(&chat_id) {
                        agent.callback.secret_chat_update(chat);
                    }
                },
            );
        });
    }

    /// Abandons a secret chat on both ends.
    pub fn discard_secret_chat(&mut self, chat_id: i32) {
        if let Some(chat) = self.secret_chats.get_mut(&chat_id) {
            chat.state = crate::secret_chat::SecretChatState::Deleted;
        }
        self.invoke(
            &tl::functions::messages::DiscardEncryption { chat_id },
            move |agent, result| {
                if let Err(error) = result {
                    debug!("messages.discardEncryption failed: {}", error);
                }
                if let Some(chat) = agent.secret_chats.get(&chat_id) {
                    agent.callback.secret_chat_update(chat);
                }
            },
        );
    }

    /// Sends an already-encrypted secret-chat payload. The blob is kept
    /// in the unconfirmed store until the server confirms receipt, so a
    /// crash cannot lose it. The chat's outbound counter advances as
    /// soon as the payload is accepted locally.
    pub fn send_secret_message(&mut self, chat_id: i32, random_id: i64, data: Vec<u8>) {
        let (access_hash, ok) = match self.secret_chats.get_mut(&chat_id) {
            Some(chat) if chat.state == crate::secret_chat::SecretChatState::Ok => {
                chat.out_seq_no += 1;
                (chat.access_hash, true)
            }
            Some(chat) => (chat.access_hash, false),
            None => {
                warn!("cannot send to unknown secret chat {}", chat_id);
                return;
            }
        };
        if !ok {
            warn!("cannot send to secret chat {} before the key exchange", chat_id);
            let _ = access_hash;
            return;
        }

        self.secret_storage.append(random_id, &data);

        self.invoke(
            &tl::functions::messages::SendEncrypted {
                peer: tl::enums::InputEncryptedChat::Chat(tl::types::InputEncryptedChat {
                    chat_id,
                    access_hash,
                }),
                random_id,
                data,
            },
            move |agent, result| match result {
                Ok(_) => {
                    agent.secret_storage.remove(random_id);
                }
                Err(error) => {
                    // Left in the unconfirmed store for a later resend.
                    warn!("messages.sendEncrypted failed: {}", error);
                }
            },
        );
    }

    /// Handles `updateEncryption`: chat requested, accepted or
    /// discarded by the peer.
    pub(crate) fn on_encryption_update(&mut self, chat: tl::enums::EncryptedChat, _date: i32) {
        match chat {
            tl::enums::EncryptedChat::Requested(requested) => {
                let mut chat = SecretChat::new(
                    requested.id,
                    requested.access_hash,
                    requested.participant_id,
                    requested.admin_id,
                    false,
                );
                chat.date = requested.date;
                chat.g_key = requested.g_a;
                info!("secret chat {} requested by peer", requested.id);
                self.secret_chats.insert(requested.id, chat);
                let chat = self.secret_chats.get(&requested.id).unwrap();
                self.callback.secret_chat_update(chat);
            }
            tl::enums::EncryptedChat::Waiting(waiting) => {
                if let Some(chat) = self.secret_chats.get_mut(&waiting.id) {
                    chat.access_hash = waiting.access_hash;
                    chat.date = waiting.date;
                }
            }
            tl::enums::EncryptedChat::Chat(accepted) => {
                let completed = {
                    match self.secret_chats.get_mut(&accepted.id) {
                        Some(chat) if chat.is_creator() => {
                            // Our private exponent is parked in the key
                            // slot; replace it with the shared secret.
                            let private_key = chat.key;
                            let key = dh::pad_to_256(&dh::mod_exp(
                                &accepted.g_a_or_b,
                                &private_key,
                                &chat.encr_prime,
                            ));
                            chat.set_key(key);
                            chat.access_hash = accepted.access_hash;
                            chat.state = crate::secret_chat::SecretChatState::Ok;

                            if chat.key_fingerprint != accepted.key_fingerprint {
                                warn!(
                                    "secret chat {}: fingerprint mismatch, discarding",
                                    accepted.id
                                );
                                None
                            } else {
                                info!("secret chat {} established", accepted.id);
                                Some(accepted.id)
                            }
                        }
                        _ => None,
                    }
                };
                match completed {
                    Some(id) => {
                        let chat = self.secret_chats.get(&id).unwrap();
                        self.callback.secret_chat_update(chat);
                    }
                    None => self.discard_secret_chat(accepted.id),
                }
            }
            tl::enums::EncryptedChat::Discarded(discarded) => {
                if let Some(chat) = self.secret_chats.get_mut(&discarded.id) {
                    info!("secret chat {} discarded by peer", discarded.id);
                    chat.state = crate::secret_chat::SecretChatState::Deleted;
                    let chat = self.secret_chats.get(&discarded.id).unwrap();
                    self.callback.secret_chat_update(chat);
                }
            }
            tl::enums::EncryptedChat::Empty(_) => {}
        }
    }

    /// Decrypts, reassembles and delivers one inbound secret message.
    pub(crate) fn on_secret_message(&mut self, chat_id: i32, payload: &[u8]) {
        use crate::secret_chat::InboundSecret;

        let outcome = {
            let chat = match self.secret_chats.get_mut(&chat_id) {
                Some(chat) => chat,
                None => {
                    warn!("secret message for unknown chat {}", chat_id);
                    return;
                }
            };

            let parsed = match chat.decrypt_payload(payload) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!("secret chat {}: dropping payload: {}", chat_id, err);
                    return;
                }
            };
            if let Some(layer) = parsed.layer {
                chat.layer = layer;
            }

            chat.process_inbound(parsed.raw_in_seq_no, parsed.raw_out_seq_no, parsed.message)
        };

        match outcome {
            InboundSecret::Deliver(messages) => {
                for message in messages {
                    self.callback.new_secret_message(chat_id, &message);
                }
            }
            InboundSecret::Queued => {
                let arm = {
                    let chat = self.secret_chats.get_mut(&chat_id).unwrap();
                    let arm = !chat.hole_timer_armed;
                    chat.hole_timer_armed = true;
                    arm
                };
                if arm {
                    self.timers
                        .schedule(SECRET_HOLE_TIMEOUT, TimerToken::SecretChatHole(chat_id));
                }
            }
            InboundSecret::Dropped(reason) => {
                debug!("secret chat {}: dropped inbound ({:?})", chat_id, reason);
            }
        }
    }

    fn on_secret_hole_timeout(&mut self, chat_id: i32) {
        let healed = match self.secret_chats.get_mut(&chat_id) {
            Some(chat) => {
                chat.hole_timer_armed = false;
                chat.heal_hole()
            }
            None => return,
        };
        for message in healed {
            self.callback.new_secret_message(chat_id, &message);
        }
    }

    /// Fetches (or reuses) the DH parameters for secret chats, handing
    /// the generator and prime to `then`.
    fn with_dh_config<F>(&mut self, then: F)
    where
        F: FnOnce(&mut UserAgent, i32, Vec<u8>) + 'static,
    {
        self.invoke(
            &tl::functions::messages::GetDhConfig {
                version: 0,
                random_length: 0,
            },
            move |agent, result| match result {
                Ok(tl::enums::messages::DhConfig::Config(config)) => {
                    if !dh::check_dh_prime_bytes(&config.p, config.g) {
                        error!("server sent unsafe DH parameters for secret chats");
                        return;
                    }
                    then(agent, config.g, config.p);
                }
                Ok(tl::enums::messages::DhConfig::NotModified(_)) => {
                    // We always request version 0, so the server should
                    // never claim we are up to date.
                    warn!("unexpected dhConfigNotModified");
                }
                Err(error) => {
                    warn!("messages.getDhConfig failed: {}", error);
                }
            },
        );
    }
}
