// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end scenarios against a scripted in-memory server.
//!
//! The harness owns both sides of every "socket": the engine reads and
//! writes through [`PipeConnection`], and the [`MockServer`] decrypts
//! the client's frames with the shared authorization key to answer them
//! the way a data center would.
use ferrogram_agent::*;
use ferrogram_crypto::{calc_key, calc_msg_key, AuthKey, Side};
use ferrogram_tl::{self as tl, Deserializable, Identifiable, Serializable};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

const NOW: Duration = Duration::from_secs(1_700_000_000);

#[derive(Default)]
struct PipeState {
    to_server: Vec<u8>,
    to_client: Vec<u8>,
    status: Option<ConnectionStatus>,
}

#[derive(Clone, Default)]
struct Pipe(Rc<RefCell<PipeState>>);

impl Pipe {
    fn push_to_client(&self, bytes: &[u8]) {
        self.0.borrow_mut().to_client.extend_from_slice(bytes);
    }

    fn drain_to_server(&self) -> Vec<u8> {
        std::mem::take(&mut self.0.borrow_mut().to_server)
    }
}

struct PipeConnection(Pipe);

impl Connection for PipeConnection {
    fn open(&mut self) {
        self.0 .0.borrow_mut().status = Some(ConnectionStatus::Connected);
    }

    fn close(&mut self) {
        self.0 .0.borrow_mut().status = Some(ConnectionStatus::Closed);
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut state = self.0 .0.borrow_mut();
        let n = buf.len().min(state.to_client.len());
        buf[..n].copy_from_slice(&state.to_client[..n]);
        state.to_client.drain(..n);
        n
    }

    fn peek(&mut self, buf: &mut [u8]) -> usize {
        let state = self.0 .0.borrow();
        let n = buf.len().min(state.to_client.len());
        buf[..n].copy_from_slice(&state.to_client[..n]);
        n
    }

    fn available_bytes_for_read(&self) -> usize {
        self.0 .0.borrow().to_client.len()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0 .0.borrow_mut().to_server.extend_from_slice(bytes);
    }

    fn flush(&mut self) {}

    fn status(&self) -> ConnectionStatus {
        self.0
             .0
            .borrow()
            .status
            .unwrap_or(ConnectionStatus::Connecting)
    }
}

/// Hands each DC the same pipe every time it connects, so tests can
/// watch any DC's traffic.
#[derive(Clone, Default)]
struct PipeFactory {
    pipes: Rc<RefCell<HashMap<i32, Pipe>>>,
    connects: Rc<RefCell<Vec<i32>>>,
}

impl PipeFactory {
    fn pipe(&self, dc_id: i32) -> Pipe {
        self.pipes
            .borrow_mut()
            .entry(dc_id)
            .or_default()
            .clone()
    }

    fn connect_log(&self) -> Vec<i32> {
        self.connects.borrow().clone()
    }
}

impl ConnectionFactory for PipeFactory {
    fn connect(&mut self, dc_id: i32, _v4: &[Endpoint], _v6: &[Endpoint]) -> Box<dyn Connection> {
        self.connects.borrow_mut().push(dc_id);
        Box::new(PipeConnection(self.pipe(dc_id)))
    }
}

/// One inbound client message after decryption.
struct ClientMessage {
    msg_id: i64,
    body: Vec<u8>,
}

/// Decrypts and frames messages like the data center would.
struct MockServer {
    pipe: Pipe,
    auth_key: AuthKey,
    seen_hello: bool,
    session_id: i64,
    salt: i64,
    last_msg_id: i64,
    seq: i32,
}

impl MockServer {
    fn new(pipe: Pipe, auth_key: [u8; 256]) -> Self {
        Self {
            pipe,
            auth_key: AuthKey::from_bytes(auth_key),
            seen_hello: false,
            session_id: 0,
            salt: 0,
            last_msg_id: 0,
            seq: 1,
        }
    }

    /// Splits, decrypts and flattens everything the client sent since
    /// the last call. Containers are recursed into.
    fn recv(&mut self) -> Vec<ClientMessage> {
        let mut bytes = self.pipe.drain_to_server();
        if !self.seen_hello && bytes.first() == Some(&0xef) {
            self.seen_hello = true;
            bytes.remove(0);
        }

        let mut messages = Vec::new();
        let mut offset = 0;
        while offset < bytes.len() {
            let (header, words) = if bytes[offset] < 127 {
                (1, bytes[offset] as usize)
            } else {
                let mut len = [0u8; 4];
                len[..3].copy_from_slice(&bytes[offset + 1..offset + 4]);
                (4, u32::from_le_bytes(len) as usize)
            };
            let frame = &bytes[offset + header..offset + header + words * 4];
            offset += header + words * 4;
            self.decrypt_frame(frame, &mut messages);
        }
        messages
    }

    /// The salt the client stamped on its most recent frame.
    fn last_seen_salt(&self) -> i64 {
        self.salt
    }

    fn decrypt_frame(&mut self, frame: &[u8], out: &mut Vec<ClientMessage>) {
        assert_eq!(&frame[..8], &self.auth_key.id().to_le_bytes(), "foreign key id");
        let msg_key: [u8; 16] = frame[8..24].try_into().unwrap();
        let (key, iv) = calc_key(&self.auth_key, &msg_key, Side::Client);
        let plain = ferrogram_crypto::decrypt_ige(&frame[24..], &key, &iv);

        self.salt = i64::from_le_bytes(plain[0..8].try_into().unwrap());
        self.session_id = i64::from_le_bytes(plain[8..16].try_into().unwrap());
        let msg_id = i64::from_le_bytes(plain[16..24].try_into().unwrap());
        let len = i32::from_le_bytes(plain[28..32].try_into().unwrap()) as usize;
        let body = plain[32..32 + len].to_vec();
        self.flatten(msg_id, body, out);
    }

    fn flatten(&mut self, msg_id: i64, body: Vec<u8>, out: &mut Vec<ClientMessage>) {
        const MSG_CONTAINER: u32 = 0x73f1f8dc;
        if body.len() >= 8 && u32::from_le_bytes(body[..4].try_into().unwrap()) == MSG_CONTAINER {
            let count = i32::from_le_bytes(body[4..8].try_into().unwrap()) as usize;
            let mut offset = 8;
            for _ in 0..count {
                let inner_id = i64::from_le_bytes(body[offset..offset + 8].try_into().unwrap());
                let inner_len =
                    i32::from_le_bytes(body[offset + 12..offset + 16].try_into().unwrap()) as usize;
                let inner = body[offset + 16..offset + 16 + inner_len].to_vec();
                offset += 16 + inner_len;
                self.flatten(inner_id, inner, out);
            }
        } else {
            out.push(ClientMessage { msg_id, body });
        }
    }

    fn next_msg_id(&mut self) -> i64 {
        let mut id = ((NOW.as_secs() as i64) << 32) | 1;
        if id <= self.last_msg_id {
            id = self.last_msg_id + 4;
        }
        self.last_msg_id = id;
        id
    }

    /// Encrypts one server-side message into the client's read buffer.
    fn send(&mut self, body: &[u8]) {
        let msg_id = self.next_msg_id();
        let seq = self.seq;
        self.seq += 2;

        let mut plain = Vec::new();
        self.salt.serialize(&mut plain);
        self.session_id.serialize(&mut plain);
        msg_id.serialize(&mut plain);
        seq.serialize(&mut plain);
        (body.len() as i32).serialize(&mut plain);
        plain.extend_from_slice(body);

        let msg_key = calc_msg_key(&plain);
        let (key, iv) = calc_key(&self.auth_key, &msg_key, Side::Server);
        let cipher = ferrogram_crypto::encrypt_ige(&plain, &key, &iv);

        let mut frame = Vec::new();
        frame.extend(self.auth_key.id().to_le_bytes());
        frame.extend(msg_key);
        frame.extend(cipher);

        let words = frame.len() / 4;
        let mut packet = Vec::new();
        if words < 127 {
            packet.push(words as u8);
        } else {
            packet.push(0x7f);
            packet.extend(&(words as u32).to_le_bytes()[..3]);
        }
        packet.extend(frame);
        self.pipe.push_to_client(&packet);
    }

    fn send_rpc_result(&mut self, req_msg_id: i64, result: &[u8]) {
        const RPC_RESULT: u32 = 0xf35c6d01;
        let mut body = Vec::new();
        RPC_RESULT.serialize(&mut body);
        req_msg_id.serialize(&mut body);
        body.extend_from_slice(result);
        self.send(&body);
    }

    fn send_rpc_error(&mut self, req_msg_id: i64, code: i32, message: &str) {
        let mut result = Vec::new();
        tl::types::RpcError::CONSTRUCTOR_ID.serialize(&mut result);
        tl::types::RpcError {
            error_code: code,
            error_message: message.to_string(),
        }
        .serialize(&mut result);
        self.send_rpc_result(req_msg_id, &result);
    }
}

/// Strips `invokeWithLayer { initConnection { ... } }` from a query.
fn unwrap_query(body: &[u8]) -> &[u8] {
    const INVOKE_WITH_LAYER: u32 = 0xda9b0d0d;
    if u32::from_le_bytes(body[..4].try_into().unwrap()) != INVOKE_WITH_LAYER {
        return body;
    }
    // constructor + layer + initConnection constructor + api_id
    let mut offset = 4 + 4 + 4 + 4;
    for _ in 0..4 {
        // Four short strings follow; all below the long-form threshold.
        let len = body[offset] as usize;
        let padded = (1 + len + 3) / 4 * 4;
        offset += padded;
    }
    &body[offset..]
}

fn query_constructor(body: &[u8]) -> u32 {
    u32::from_le_bytes(unwrap_query(body)[..4].try_into().unwrap())
}

#[derive(Clone, Default)]
struct Record {
    dc_updates: Rc<RefCell<Vec<DcPersistedState>>>,
    messages: Rc<RefCell<Vec<tl::enums::Message>>>,
    pts_changes: Rc<RefCell<Vec<i32>>>,
}

struct RecordingCallback(Record);

impl Callback for RecordingCallback {
    fn dc_updated(&mut self, state: &DcPersistedState) {
        self.0.dc_updates.borrow_mut().push(state.clone());
    }

    fn new_messages(&mut self, messages: &[tl::enums::Message]) {
        self.0.messages.borrow_mut().extend_from_slice(messages);
    }

    fn pts_changed(&mut self, pts: i32) {
        self.0.pts_changes.borrow_mut().push(pts);
    }
}

struct Harness {
    agent: UserAgent,
    factory: PipeFactory,
    timers: Rc<RefCell<ManualTimerQueue>>,
    record: Record,
    auth_key: [u8; 256],
}

/// A [`TimerQueue`] front backed by the shared manual queue.
struct SharedTimers(Rc<RefCell<ManualTimerQueue>>);

impl TimerQueue for SharedTimers {
    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        self.0.borrow_mut().schedule(delay, token);
    }

    fn cancel(&mut self, token: TimerToken) {
        self.0.borrow_mut().cancel(token);
    }
}

impl Harness {
    fn new() -> Self {
        let mut auth_key = [0u8; 256];
        auth_key
            .iter_mut()
            .enumerate()
            .for_each(|(i, x)| *x = (i * 7) as u8);

        let factory = PipeFactory::default();
        let timers = Rc::new(RefCell::new(ManualTimerQueue::new()));
        let record = Record::default();

        let mut agent = UserAgent::new(
            Configuration {
                api_id: 11111,
                api_hash: "abcdef".to_string(),
                ..Configuration::default()
            },
            Box::new(RecordingCallback(record.clone())),
            Box::new(factory.clone()),
            Box::new(SharedTimers(timers.clone())),
            Box::new(StepClock::new(NOW)),
            Box::new(MemoryUnconfirmedStorage::new()),
        );

        agent.restore_dc(DcPersistedState {
            id: 2,
            auth_key: Some(auth_key),
            auth_key_id: AuthKey::from_bytes(auth_key).id(),
            temp_auth_key: None,
            temp_auth_key_id: 0,
            server_salt: 0x11112222,
            server_time_delta: 0,
            endpoints_v4: vec![Endpoint::new("149.154.167.51", 443)],
            endpoints_v6: vec![],
            logged_in: true,
            configured: false,
        });

        Self {
            agent,
            factory,
            timers,
            record,
            auth_key,
        }
    }

    fn server(&self, dc_id: i32) -> MockServer {
        MockServer::new(self.factory.pipe(dc_id), self.auth_key)
    }

    fn pump(&mut self, dc_id: i32) {
        self.agent.on_network_event(dc_id);
    }

    fn fire_timers(&mut self, by: Duration) {
        let due = self.timers.borrow_mut().advance(by);
        for token in due {
            self.agent.handle_timer(token);
        }
    }

    /// Connects DC 2 and answers its configuration exchange, leaving
    /// the client ready for user-level queries.
    fn bring_up(&mut self) -> MockServer {
        let mut server = self.server(2);
        self.agent.connect();
        self.pump(2);

        let messages = server.recv();
        let get_config = messages
            .iter()
            .find(|m| query_constructor(&m.body) == 0xc4f9186b)
            .expect("client must request configuration");
        server.send_rpc_result(get_config.msg_id, &sample_config().to_bytes());
        self.pump(2);

        server
    }
}

fn sample_config() -> tl::enums::Config {
    tl::enums::Config::Config(tl::types::Config {
        date: NOW.as_secs() as i32,
        expires: NOW.as_secs() as i32 + 3600,
        test_mode: false,
        this_dc: 2,
        dc_options: vec![tl::enums::DcOption::Option(tl::types::DcOption {
            ipv6: false,
            media_only: false,
            tcpo_only: false,
            id: 4,
            ip_address: "149.154.167.92".to_string(),
            port: 443,
        })],
        chat_size_max: 200,
        broadcast_size_max: 1000,
        forwarded_count_max: 100,
        online_update_period_ms: 120_000,
        offline_blur_timeout_ms: 5000,
        offline_idle_timeout_ms: 30_000,
        online_cloud_timeout_ms: 300_000,
        notify_cloud_delay_ms: 30_000,
        notify_default_delay_ms: 1500,
        chat_big_size: 10,
        push_chat_period_ms: 60_000,
        push_chat_limit: 2,
        saved_gifs_limit: 200,
        edit_time_limit: 172_800,
        disabled_features: vec![],
    })
}

fn sample_state(pts: i32) -> tl::enums::updates::State {
    tl::enums::updates::State::State(tl::types::updates::State {
        pts,
        qts: 1,
        date: NOW.as_secs() as i32,
        seq: 1,
        unread_count: 0,
    })
}

#[test]
fn connecting_configures_the_client() {
    let mut harness = Harness::new();
    harness.bring_up();

    let updates = harness.record.dc_updates.borrow();
    assert!(
        updates.iter().any(|state| state.id == 2 && state.configured),
        "the client must report itself configured"
    );

    // The config carried an option for DC 4, which must now be known.
    drop(updates);
    let mut harness2 = harness;
    harness2.agent.set_active_dc(4);
    assert!(harness2.factory.connect_log().contains(&4));
}

#[test]
fn bad_server_salt_rotates_and_resends() {
    let mut harness = Harness::new();
    let mut server = harness.bring_up();

    harness
        .agent
        .invoke(&tl::functions::updates::GetState {}, |_, _| {});
    harness.pump(2);

    let sent = server.recv();
    let query = sent
        .iter()
        .find(|m| query_constructor(&m.body) == tl::functions::updates::GetState::CONSTRUCTOR_ID)
        .expect("query must have been sent");
    let old_msg_id = query.msg_id;
    let old_salt = server.last_seen_salt();

    // Reject it over the salt; the engine must adopt the new one.
    const NEW_SALT: i64 = 0x4242_4242_4242;
    let mut body = Vec::new();
    tl::types::BadServerSalt::CONSTRUCTOR_ID.serialize(&mut body);
    tl::types::BadServerSalt {
        bad_msg_id: old_msg_id,
        bad_msg_seqno: 1,
        error_code: 48,
        new_server_salt: NEW_SALT,
    }
    .serialize(&mut body);
    server.send(&body);
    harness.pump(2);

    let resent = server.recv();
    assert!(!resent.is_empty(), "the query must be retransmitted");
    assert_ne!(old_salt, NEW_SALT);
    assert_eq!(
        server.last_seen_salt(),
        NEW_SALT,
        "retransmission must carry the rotated salt"
    );

    // The same message identity survives inside the retransmission,
    // while the envelope got a fresh id.
    assert!(resent.iter().any(|m| m.msg_id == old_msg_id));
}

#[test]
fn migration_switches_dc_and_restarts_the_query_there() {
    let mut harness = Harness::new();
    let mut server = harness.bring_up();

    harness
        .agent
        .invoke(&tl::functions::updates::GetState {}, |_, _| {});
    harness.pump(2);

    let sent = server.recv();
    let query = sent
        .iter()
        .find(|m| query_constructor(&m.body) == tl::functions::updates::GetState::CONSTRUCTOR_ID)
        .unwrap();

    server.send_rpc_error(query.msg_id, 303, "PHONE_MIGRATE_4");
    harness.pump(2);

    assert_eq!(harness.agent.active_dc(), 4);
    assert!(
        harness.factory.connect_log().contains(&4),
        "a connection to the new DC must be opened"
    );

    // The fresh DC owns no authorization yet, so a key exchange starts:
    // an unencrypted frame carrying req_pq.
    harness.pump(4);
    let raw = harness.factory.pipe(4).drain_to_server();
    assert!(!raw.is_empty(), "dc 4 must see handshake traffic");
    let req_pq = tl::functions::ReqPq::CONSTRUCTOR_ID.to_le_bytes();
    assert!(
        raw.windows(4).any(|w| w == req_pq),
        "the first frame must be req_pq"
    );
}

#[test]
fn update_gap_triggers_difference_recovery() {
    let mut harness = Harness::new();
    let mut server = harness.bring_up();
    harness.agent.restore_state(AgentPersistedState {
        our_id: 10,
        pts: 100,
        qts: 1,
        seq: 1,
        date: 1,
        active_dc_id: 2,
    });

    // An update for pts 103 when only 100 is known: a hole of two.
    let update = tl::enums::Updates::UpdateShort(tl::types::UpdateShort {
        update: tl::enums::Update::NewMessage(tl::types::UpdateNewMessage {
            message: tl::enums::Message::Empty(tl::types::MessageEmpty { id: 1 }),
            pts: 103,
            pts_count: 1,
        }),
        date: NOW.as_secs() as i32,
    });
    server.send(&update.to_bytes());
    harness.pump(2);

    assert!(harness.agent.is_getting_difference());
    assert_eq!(harness.agent.pts(), 100, "the gapped update must not apply");

    let sent = server.recv();
    let diff_query = sent
        .iter()
        .find(|m| {
            query_constructor(&m.body) == tl::functions::updates::GetDifference::CONSTRUCTOR_ID
        })
        .expect("a difference must be requested");

    // While locked, further updates are dropped.
    let update = tl::enums::Updates::UpdateShort(tl::types::UpdateShort {
        update: tl::enums::Update::NewMessage(tl::types::UpdateNewMessage {
            message: tl::enums::Message::Empty(tl::types::MessageEmpty { id: 2 }),
            pts: 104,
            pts_count: 1,
        }),
        date: NOW.as_secs() as i32,
    });
    server.send(&update.to_bytes());
    harness.pump(2);
    assert_eq!(harness.agent.pts(), 100);

    // The server materializes the missed messages.
    let difference = tl::enums::updates::Difference::Difference(tl::types::updates::Difference {
        new_messages: vec![
            tl::enums::Message::Empty(tl::types::MessageEmpty { id: 1 }),
            tl::enums::Message::Empty(tl::types::MessageEmpty { id: 2 }),
        ],
        new_encrypted_messages: vec![],
        other_updates: vec![],
        chats: vec![],
        users: vec![],
        state: sample_state(104),
    });
    server.send_rpc_result(diff_query.msg_id, &difference.to_bytes());
    harness.pump(2);

    assert!(!harness.agent.is_getting_difference());
    assert_eq!(harness.agent.pts(), 104);
    assert_eq!(harness.record.messages.borrow().len(), 2);
}

#[test]
fn container_results_fire_in_order_and_are_acked_once() {
    let mut harness = Harness::new();
    let mut server = harness.bring_up();

    let order = Rc::new(RefCell::new(Vec::new()));
    let (first, second) = (order.clone(), order.clone());
    harness
        .agent
        .invoke(&tl::functions::updates::GetState {}, move |_, _| {
            first.borrow_mut().push(1);
        });
    harness.pump(2);
    harness
        .agent
        .invoke(&tl::functions::updates::GetState {}, move |_, _| {
            second.borrow_mut().push(2);
        });
    harness.pump(2);

    let sent = server.recv();
    let queries: Vec<&ClientMessage> = sent
        .iter()
        .filter(|m| {
            query_constructor(&m.body) == tl::functions::updates::GetState::CONSTRUCTOR_ID
        })
        .collect();
    assert_eq!(queries.len(), 2);

    // Both results inside one container, in file order.
    const RPC_RESULT: u32 = 0xf35c6d01;
    const MSG_CONTAINER: u32 = 0x73f1f8dc;
    let mut inner = Vec::new();
    for query in &queries {
        let mut result = Vec::new();
        RPC_RESULT.serialize(&mut result);
        query.msg_id.serialize(&mut result);
        sample_state(7).serialize(&mut result);
        inner.push(result);
    }

    let mut container = Vec::new();
    MSG_CONTAINER.serialize(&mut container);
    2i32.serialize(&mut container);
    for (i, result) in inner.iter().enumerate() {
        server.next_msg_id().serialize(&mut container);
        ((i as i32) * 2 + 3).serialize(&mut container);
        (result.len() as i32).serialize(&mut container);
        container.extend_from_slice(result);
    }
    server.send(&container);
    harness.pump(2);

    assert_eq!(&*order.borrow(), &[1, 2], "results must fire in file order");

    // A single flush timer is armed even though two messages arrived.
    assert!(harness
        .timers
        .borrow()
        .is_scheduled(TimerToken::AckFlush(2)));

    harness.fire_timers(Duration::from_secs(1));
    let flushed = server.recv();
    let acks = flushed
        .iter()
        .find(|m| {
            u32::from_le_bytes(m.body[..4].try_into().unwrap())
                == tl::types::MsgsAck::CONSTRUCTOR_ID
        })
        .expect("acks must be flushed after the timer");
    let ack = tl::enums::MsgsAck::from_bytes(&acks.body).unwrap();
    let tl::enums::MsgsAck::Ack(ack) = ack;
    assert!(ack.msg_ids.len() >= 2, "both inner messages must be acked");
}

#[test]
fn queries_before_configuration_wait_for_it() {
    let mut harness = Harness::new();
    let mut server = harness.server(2);

    // Invoke before any connection exists: the query must wait, then
    // flow once the client is configured.
    let done = Rc::new(RefCell::new(false));
    let flag = done.clone();
    harness
        .agent
        .invoke(&tl::functions::updates::GetState {}, move |_, _| {
            *flag.borrow_mut() = true;
        });

    harness.pump(2);
    let messages = server.recv();
    let get_config = messages
        .iter()
        .find(|m| query_constructor(&m.body) == 0xc4f9186b)
        .expect("configuration must be requested");
    assert!(
        !messages
            .iter()
            .any(|m| query_constructor(&m.body)
                == tl::functions::updates::GetState::CONSTRUCTOR_ID),
        "user queries must wait for configuration"
    );

    server.send_rpc_result(get_config.msg_id, &sample_config().to_bytes());
    harness.pump(2);

    let sent = server.recv();
    let query = sent
        .iter()
        .find(|m| query_constructor(&m.body) == tl::functions::updates::GetState::CONSTRUCTOR_ID)
        .expect("the pending query must go out after configuration");
    server.send_rpc_result(query.msg_id, &sample_state(7).to_bytes());
    harness.pump(2);

    assert!(*done.borrow());
}

#[test]
fn msg_ids_in_one_burst_are_monotonic() {
    let mut harness = Harness::new();
    let mut server = harness.bring_up();

    for _ in 0..5 {
        harness
            .agent
            .invoke(&tl::functions::updates::GetState {}, |_, _| {});
        harness.pump(2);
    }

    let sent = server.recv();
    let ids: Vec<i64> = sent
        .iter()
        .filter(|m| {
            query_constructor(&m.body) == tl::functions::updates::GetState::CONSTRUCTOR_ID
        })
        .map(|m| m.msg_id)
        .collect();
    assert_eq!(ids.len(), 5);
    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1], "msg ids must be strictly increasing");
        assert_eq!(pair[1] % 4, 0, "client msg ids are divisible by four");
    }
}
