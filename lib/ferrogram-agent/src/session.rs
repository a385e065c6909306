// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A session scopes the `msg_id` and `seq_no` spaces and multiplexes
//! its traffic over one primary connection plus a small pool of
//! secondary ones.
//!
//! The primary worker performs the handshake and carries the session's
//! control messages; secondaries only exist to overlap long transfers,
//! and are reaped once idle.
use crate::net::{Connection, ConnectionStatus};
use ferrogram_mtproto::mtp::Encrypted;
use ferrogram_mtproto::transport::Abridged;
use ferrogram_mtproto::MsgId;
use std::collections::HashSet;
use std::time::Duration;

/// How many secondary workers a session may grow.
pub(crate) const MAX_SECONDARY_WORKERS: usize = 3;

/// How long a secondary worker may sit without work before its
/// connection is closed.
pub(crate) const WORKER_IDLE_TIMEOUT: Duration = Duration::from_secs(15);

/// How long a non-active client's session may be fully quiet before it
/// is destroyed.
pub(crate) const SESSION_CLEANUP_TIMEOUT: Duration = Duration::from_secs(5);

/// How long received message ids may accumulate before they are flushed
/// to the server as a standalone `msgs_ack`.
pub(crate) const ACK_FLUSH_TIMEOUT: Duration = Duration::from_secs(1);

/// Index 0 is the primary worker; secondaries follow.
pub(crate) type WorkerId = usize;

pub(crate) struct Worker {
    pub connection: Box<dyn Connection>,

    /// The transport framing is stateful per connection (it sends a
    /// protocol hello on the first packet).
    pub transport: Abridged,

    /// Bytes read off the connection that do not yet form a full
    /// transport packet.
    pub pending_input: Vec<u8>,

    /// Message ids of the queries currently assigned to this worker.
    /// File transfers are tracked separately so they don't keep a
    /// secondary alive.
    pub workload: HashSet<MsgId>,
    pub background_load: HashSet<MsgId>,

    /// Whether the idle timer for this (secondary) worker is armed.
    pub idle_timer_armed: bool,

    /// The status observed on the last poll, to detect transitions.
    pub last_status: ConnectionStatus,
}

impl Worker {
    pub fn new(connection: Box<dyn Connection>) -> Self {
        Self {
            connection,
            transport: Abridged::new(),
            pending_input: Vec::new(),
            workload: HashSet::new(),
            background_load: HashSet::new(),
            idle_timer_armed: false,
            // Starting from `Connecting` guarantees the first poll of an
            // already-established connection still reports a transition.
            last_status: ConnectionStatus::Connecting,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.status() == ConnectionStatus::Connected
    }

    /// The load considered when picking a worker for a new query.
    pub fn load(&self) -> usize {
        self.workload.len() + self.background_load.len()
    }

    /// Whether the idle timer should run for this worker.
    pub fn is_idle(&self) -> bool {
        self.workload.is_empty()
    }

    pub fn assign(&mut self, msg_id: MsgId, file_transfer: bool) {
        if file_transfer {
            self.background_load.insert(msg_id);
        } else {
            self.workload.insert(msg_id);
        }
    }

    pub fn release(&mut self, msg_id: MsgId) {
        self.workload.remove(&msg_id);
        self.background_load.remove(&msg_id);
    }
}

pub(crate) struct Session {
    pub mtp: Encrypted,

    pub primary: Worker,

    /// Secondary workers keep their slot index for the lifetime of the
    /// session so that their idle timers can address them.
    pub secondary: Vec<Option<Worker>>,

    /// Whether the 1-second ack flush timer is armed.
    pub ack_timer_armed: bool,
}

impl Session {
    /// The primary worker is handed over whole because its transport
    /// has already greeted the server during the handshake.
    pub fn new(mtp: Encrypted, primary: Worker) -> Self {
        Self {
            mtp,
            primary,
            secondary: Vec::new(),
            ack_timer_armed: false,
        }
    }

    pub fn session_id(&self) -> i64 {
        self.mtp.session_id()
    }

    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        if id == 0 {
            Some(&self.primary)
        } else {
            self.secondary.get(id - 1).and_then(|w| w.as_ref())
        }
    }

    pub fn worker_mut(&mut self, id: WorkerId) -> Option<&mut Worker> {
        if id == 0 {
            Some(&mut self.primary)
        } else {
            self.secondary.get_mut(id - 1).and_then(|w| w.as_mut())
        }
    }

    pub fn worker_ids(&self) -> Vec<WorkerId> {
        let mut ids = vec![0];
        ids.extend(
            self.secondary
                .iter()
                .enumerate()
                .filter(|(_, w)| w.is_some())
                .map(|(i, _)| i + 1),
        );
        ids
    }

    /// The connected worker with the lowest live load, if any.
    pub fn least_loaded_worker(&self) -> Option<(WorkerId, usize)> {
        self.worker_ids()
            .into_iter()
            .filter_map(|id| {
                let worker = self.worker(id)?;
                worker.is_connected().then(|| (id, worker.load()))
            })
            .min_by_key(|&(_, load)| load)
    }

    /// Whether the pool may still grow a secondary worker.
    pub fn can_grow(&self) -> bool {
        self.secondary.iter().filter(|w| w.is_some()).count() < MAX_SECONDARY_WORKERS
    }

    /// Adds a secondary worker, reusing a free slot when one exists.
    pub fn add_secondary(&mut self, worker: Worker) -> WorkerId {
        for (i, slot) in self.secondary.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(worker);
                return i + 1;
            }
        }
        self.secondary.push(Some(worker));
        self.secondary.len()
    }

    /// Closes and removes a secondary worker. The primary cannot be
    /// removed this way.
    pub fn remove_secondary(&mut self, id: WorkerId) -> bool {
        if id == 0 {
            return false;
        }
        match self.secondary.get_mut(id - 1) {
            Some(slot @ Some(_)) => {
                if let Some(mut worker) = slot.take() {
                    worker.connection.close();
                }
                true
            }
            _ => false,
        }
    }

    /// Tears the whole session down. Outstanding queries are released
    /// back to their client by the caller.
    pub fn close(&mut self) {
        self.primary.connection.close();
        for slot in self.secondary.iter_mut() {
            if let Some(mut worker) = slot.take() {
                worker.connection.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeConnection {
        status: ConnectionStatus,
    }

    impl Connection for FakeConnection {
        fn open(&mut self) {
            self.status = ConnectionStatus::Connected;
        }
        fn close(&mut self) {
            self.status = ConnectionStatus::Closed;
        }
        fn read(&mut self, _buf: &mut [u8]) -> usize {
            0
        }
        fn peek(&mut self, _buf: &mut [u8]) -> usize {
            0
        }
        fn available_bytes_for_read(&self) -> usize {
            0
        }
        fn write(&mut self, _bytes: &[u8]) {}
        fn flush(&mut self) {}
        fn status(&self) -> ConnectionStatus {
            self.status
        }
    }

    fn connected() -> Box<dyn Connection> {
        Box::new(FakeConnection {
            status: ConnectionStatus::Connected,
        })
    }

    fn session() -> Session {
        Session::new(Encrypted::build().finish([0; 256]), Worker::new(connected()))
    }

    #[test]
    fn least_loaded_prefers_emptier_workers() {
        let mut session = session();
        session.primary.assign(MsgId(4), false);
        session.primary.assign(MsgId(8), false);

        let id = session.add_secondary(Worker::new(connected()));
        session.worker_mut(id).unwrap().assign(MsgId(12), false);

        assert_eq!(session.least_loaded_worker(), Some((id, 1)));
    }

    #[test]
    fn file_transfers_count_for_load_but_not_for_idleness() {
        let mut worker = Worker::new(connected());
        worker.assign(MsgId(4), true);

        assert_eq!(worker.load(), 1);
        assert!(worker.is_idle());

        worker.release(MsgId(4));
        assert_eq!(worker.load(), 0);
    }

    #[test]
    fn pool_growth_is_bounded() {
        let mut session = session();
        for _ in 0..MAX_SECONDARY_WORKERS {
            assert!(session.can_grow());
            session.add_secondary(Worker::new(connected()));
        }
        assert!(!session.can_grow());
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut session = session();
        let first = session.add_secondary(Worker::new(connected()));
        let second = session.add_secondary(Worker::new(connected()));
        assert_ne!(first, second);

        assert!(session.remove_secondary(first));
        assert!(session.worker(first).is_none());

        let reused = session.add_secondary(Worker::new(connected()));
        assert_eq!(reused, first);
    }

    #[test]
    fn primary_cannot_be_removed() {
        let mut session = session();
        assert!(!session.remove_secondary(0));
    }
}
