// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Inbound, Mtp};
use crate::errors::DeserializeError;
use crate::MsgId;
use ferrogram_tl::{Cursor, Deserializable, Serializable};
use std::time::Duration;

/// An implementation of the [Mobile Transport Protocol] for plaintext
/// (unencrypted) messages.
///
/// Plain messages may only be used for requests that don't require an
/// authorization key to be present, such as those needed to generate
/// the authorization key itself.
///
/// The reason to separate the plaintext and encrypted implementations
/// is that, even though they are similar, the plaintext part does not
/// need to deal with the complexity of the full protocol, and keeping
/// it separate means the encryption key can be mandatory in the other.
///
/// [Mobile Transport Protocol]: https://core.telegram.org/mtproto/description#unencrypted-message
#[non_exhaustive]
pub struct Plain {
    buffer: Vec<u8>,
}

#[allow(clippy::new_without_default)]
impl Plain {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }
}

impl Mtp for Plain {
    /// Wraps a request's data into a plain message (also known as an
    /// [unencrypted message]).
    ///
    /// Only one request may be in flight at a time; a second push before
    /// [`Mtp::finalize`] is rejected.
    ///
    /// [unencrypted message]: https://core.telegram.org/mtproto/description#unencrypted-message
    fn push(&mut self, request: &[u8], _now: Duration) -> Option<MsgId> {
        if !self.buffer.is_empty() {
            return None;
        }

        0i64.serialize(&mut self.buffer); // auth_key_id = 0

        // There is no need to generate a valid `msg_id` for the requests
        // used during key generation; the server accepts zero.
        0i64.serialize(&mut self.buffer); // message_id

        (request.len() as i32).serialize(&mut self.buffer); // message_data_length
        self.buffer.extend_from_slice(request); // message_data

        Some(MsgId(0))
    }

    fn finalize(&mut self, _now: Duration) -> Vec<u8> {
        std::mem::take(&mut self.buffer)
    }

    /// Validates that the response is a correct plain message, and if it
    /// is, returns its inner contents.
    fn deserialize(
        &mut self,
        payload: &[u8],
        _now: Duration,
    ) -> Result<Vec<Inbound>, DeserializeError> {
        crate::utils::check_message_buffer(payload)?;

        let mut buf = Cursor::from_slice(payload);
        let auth_key_id = i64::deserialize(&mut buf)?;
        if auth_key_id != 0 {
            return Err(DeserializeError::BadAuthKey { got: auth_key_id });
        }

        let msg_id = i64::deserialize(&mut buf)?;
        // We can't validate it's close to our system time, because our
        // own clock may be wrong at this point (it only matters once
        // encrypted communication begins). However:
        //
        // > server message identifiers modulo 4 yield 1 if
        // > the message is a response to a client message
        if msg_id <= 0 || (msg_id % 4) != 1 {
            return Err(DeserializeError::BadMessageId { got: msg_id });
        }

        let len = i32::deserialize(&mut buf)?;
        if len <= 0 {
            return Err(DeserializeError::NegativeMessageLength { got: len });
        }
        if (20 + len) as usize > payload.len() {
            return Err(DeserializeError::TooLongMessageLength {
                got: len as usize,
                max_length: payload.len() - 20,
            });
        }

        Ok(vec![Inbound::RpcResult {
            msg_id: MsgId(0),
            body: payload[20..20 + len as usize].into(),
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Duration {
        Duration::from_secs(1693436740)
    }

    #[test]
    fn only_one_request_in_flight() {
        let mut mtp = Plain::new();
        assert!(mtp.push(b"Hey!", now()).is_some());
        assert!(mtp.push(b"Bye!", now()).is_none());

        let output = mtp.finalize(now());
        assert_eq!(output.len(), 24);
        assert!(mtp.push(b"Bye!", now()).is_some());
    }

    #[test]
    fn response_with_wrong_key_id_is_rejected() {
        let mut mtp = Plain::new();
        let mut payload = vec![1u8; 8];
        payload.extend([0; 16]);

        assert!(matches!(
            mtp.deserialize(&payload, now()),
            Err(DeserializeError::BadAuthKey { .. })
        ));
    }

    #[test]
    fn response_body_is_extracted() {
        let mut mtp = Plain::new();
        let mut payload = Vec::new();
        0i64.serialize(&mut payload);
        5i64.serialize(&mut payload); // 5 % 4 == 1
        4i32.serialize(&mut payload);
        payload.extend(b"data");

        let inbound = mtp.deserialize(&payload, now()).unwrap();
        match &inbound[..] {
            [Inbound::RpcResult { msg_id, body }] => {
                assert_eq!(*msg_id, MsgId(0));
                assert_eq!(body, b"data");
            }
            other => panic!("unexpected inbound: {:?}", other),
        }
    }
}
