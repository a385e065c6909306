// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One outstanding remote procedure call.
//!
//! The record itself is plain data; the state transitions (send, ack,
//! retransmit, error recovery) are driven by the [`crate::UserAgent`],
//! which owns every query and can reach the clients and sessions the
//! transitions touch.
use crate::session::WorkerId;
use crate::UserAgent;
use ferrogram_mtproto::{MsgId, RpcError};
use std::time::Duration;

/// How queries behave while their client is not fully ready.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionOption {
    /// Waits for the client to be configured and logged in.
    Normal,

    /// May run on a client that is not logged in yet (the login calls
    /// themselves).
    Login,

    /// The query that logs the client out; its ack already means
    /// success.
    Logout,

    /// Bypasses every readiness check (handshake-adjacent calls such as
    /// the temp-key binding or `help.getConfig`).
    Force,
}

pub type QueryId = u64;

/// Called exactly once with the final outcome of the query.
pub type ResultHandler = Box<dyn FnOnce(&mut UserAgent, Result<Vec<u8>, RpcError>)>;

/// The base timeout for a query that has not been acknowledged yet.
pub(crate) const QUERY_TIMEOUT: Duration = Duration::from_secs(12);

/// The extended timeout once the server acknowledged the query.
pub(crate) const ACKED_QUERY_TIMEOUT: Duration = Duration::from_secs(24);

/// Retry delay for transient server errors without a `FLOOD_WAIT` hint.
pub(crate) const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);

/// The synthetic error delivered to queries rejected because the client
/// is logging out.
pub(crate) fn logging_out_error() -> RpcError {
    RpcError {
        code: 600,
        name: "LOGGING_OUT".to_string(),
        value: None,
    }
}

/// The synthetic error delivered when a query times out and must not be
/// retried.
pub(crate) fn timeout_error() -> RpcError {
    RpcError {
        code: 408,
        name: "QUERY_TIMEOUT".to_string(),
        value: None,
    }
}

pub(crate) struct Query {
    pub id: QueryId,
    pub name: &'static str,
    pub body: Vec<u8>,
    pub dc_id: i32,
    pub option: ExecutionOption,

    /// Zero until the query is serialized into a session.
    pub msg_id: MsgId,

    /// The session the query was last sent under, to tell apart "can
    /// retransmit by container" from "needs a fresh message id".
    pub session_id: i64,

    /// The sequence number the query carried when it was last sent.
    pub seq_no: i32,

    pub worker: Option<WorkerId>,
    pub ack_received: bool,
    pub file_transfer: bool,
    pub retry_on_timeout: bool,

    /// Taken out of the query when the final result or error arrives.
    pub handler: Option<ResultHandler>,
}

impl Query {
    pub fn is_login(&self) -> bool {
        self.option == ExecutionOption::Login
    }

    pub fn is_logout(&self) -> bool {
        self.option == ExecutionOption::Logout
    }

    pub fn is_force(&self) -> bool {
        self.option == ExecutionOption::Force
    }

    /// Whether the query was sent and still occupies a message id.
    pub fn in_flight(&self) -> bool {
        self.msg_id != MsgId(0)
    }

    /// Whether the query may be re-sent after the engine recovered from
    /// the error that interrupted it.
    pub fn should_retry_after_recovery(&self) -> bool {
        // The logout query must not outlive its client's logout state.
        !self.is_logout()
    }
}
