// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Implementation of the Mobile Transport Protocol. This layer is
//! responsible for converting zero or more input requests into outgoing
//! messages, and for processing the data inside transport payloads.
//!
//! A distinction between plain and encrypted is made for simplicity (the
//! plain variant hardly requires any state) and to help prevent invalid
//! states (encrypted communication cannot occur without an authorization
//! key).
//!
//! The layer never reads clocks on its own; callers pass the current
//! wall-clock time (as a duration since the Unix epoch) into every
//! operation that needs one, which keeps the whole state machine
//! deterministic under test.
mod encrypted;
mod plain;

use crate::errors::{DeserializeError, RpcError};
use crate::manual_tl;
use crate::MsgId;
use ferrogram_tl::{Identifiable, Serializable};
use std::time::Duration;

pub use encrypted::{Builder, Encrypted};
pub use plain::Plain;

/// A single piece of data extracted from a transport payload.
#[derive(Debug)]
pub enum Inbound {
    /// The result body for a previously-sent request.
    RpcResult { msg_id: MsgId, body: Vec<u8> },

    /// The server reported an error for a previously-sent request.
    RpcError { msg_id: MsgId, error: RpcError },

    /// The server rejected one of our messages without processing it.
    /// The referenced request has to be sent again.
    BadMessage { msg_id: MsgId, code: i32 },

    /// The server created a new session to talk to us; updates may have
    /// been lost, and the caller should fetch the difference.
    NewSession { first_msg_id: i64, unique_id: i64 },

    /// The server acknowledged these previously-sent messages.
    Acks(Vec<MsgId>),

    /// An update object, still serialized because updates are handled by
    /// a different component than request results.
    Update(Vec<u8>),
}

/// The trait shared by the plain and encrypted MTP implementations.
pub trait Mtp {
    /// Pushes a request into the internal buffer, assigning it a message
    /// identifier. Returns `None` when the buffer cannot fit the request,
    /// in which case [`Mtp::finalize`] should be called first.
    fn push(&mut self, request: &[u8], now: Duration) -> Option<MsgId>;

    /// Takes the buffered messages out as a single transport payload,
    /// wrapping them in a container and encrypting them as needed.
    /// Returns an empty vector when there is nothing to send.
    fn finalize(&mut self, now: Duration) -> Vec<u8>;

    /// Processes a transport payload coming from the server.
    fn deserialize(&mut self, payload: &[u8], now: Duration)
        -> Result<Vec<Inbound>, DeserializeError>;
}

/// Re-frames an already-sent message (with its original identifier and
/// sequence number) inside a single-entry `msg_container`, so it can be
/// retransmitted from a different session without the server treating it
/// as a duplicate.
pub fn wrap_in_container(msg_id: MsgId, seq_no: i32, body: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(8 + manual_tl::Message::SIZE_OVERHEAD + body.len());
    manual_tl::MessageContainer::CONSTRUCTOR_ID.serialize(&mut buffer);
    1i32.serialize(&mut buffer);
    msg_id.0.serialize(&mut buffer);
    seq_no.serialize(&mut buffer);
    (body.len() as i32).serialize(&mut buffer);
    buffer.extend_from_slice(body);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_wrap_preserves_the_original_header() {
        let body = [1u8, 2, 3, 4];
        let wrapped = wrap_in_container(MsgId(0x1234), 5, &body);

        assert_eq!(&wrapped[0..4], &0x73f1f8dcu32.to_le_bytes());
        assert_eq!(&wrapped[4..8], &1i32.to_le_bytes());
        assert_eq!(&wrapped[8..16], &0x1234i64.to_le_bytes());
        assert_eq!(&wrapped[16..20], &5i32.to_le_bytes());
        assert_eq!(&wrapped[20..24], &4i32.to_le_bytes());
        assert_eq!(&wrapped[24..], &body);
    }
}
