// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Inbound, Mtp};
use crate::errors::DeserializeError;
use crate::{manual_tl, MsgId};
use ferrogram_crypto::{calc_msg_key, decrypt_data_v1, encrypt_data_v1, AuthKey};
use ferrogram_tl::{self as tl, Cursor, Deserializable, Identifiable, Serializable};
use getrandom::getrandom;
use log::{debug, info, warn};
use std::mem;
use std::time::Duration;

/// Incoming message identifiers may encode a time at most this far
/// behind our view of the server clock before the session is replaced.
const MSG_ID_MAX_BEHIND: i64 = 300;

/// Incoming message identifiers may encode a time at most this far
/// ahead of our view of the server clock before the session is replaced.
const MSG_ID_MAX_AHEAD: i64 = 30;

// The first actual message comes after `salt` and `session_id`.
const HEADER_LEN: usize = 16;

// The message header for the container occupies the size of the message
// header (`msg_id`, `seq_no` and `size`) followed by the container's own
// header (`constructor`, `len`).
const CONTAINER_HEADER_LEN: usize = (8 + 4 + 4) + (4 + 4);

/// A builder to configure [`Encrypted`] instances.
pub struct Builder {
    time_offset: i32,
    first_salt: i64,
    session_id: Option<i64>,
    compression_threshold: Option<usize>,
}

impl Builder {
    /// Configures the time offset to the server's clock, in seconds.
    pub fn time_offset(mut self, offset: i32) -> Self {
        self.time_offset = offset;
        self
    }

    /// Configures the first server salt to use.
    pub fn first_salt(mut self, first_salt: i64) -> Self {
        self.first_salt = first_salt;
        self
    }

    /// Keeps a previously-used session identity instead of generating a
    /// fresh one.
    pub fn session_id(mut self, session_id: i64) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Configures the compression threshold for outgoing messages.
    pub fn compression_threshold(mut self, threshold: Option<usize>) -> Self {
        self.compression_threshold = threshold;
        self
    }

    /// Finishes the builder and returns the MTP instance with all the
    /// configuration changes applied.
    pub fn finish(self, auth_key: [u8; 256]) -> Encrypted {
        Encrypted {
            auth_key: AuthKey::from_bytes(auth_key),
            time_offset: self.time_offset,
            salt: self.first_salt,
            session_id: self.session_id.unwrap_or_else(|| {
                let mut buffer = [0u8; 8];
                getrandom(&mut buffer).expect("failed to generate a secure session_id");
                i64::from_le_bytes(buffer)
            }),
            sequence: 0,
            last_msg_id: 0,
            received_count: 0,
            pending_ack: vec![],
            compression_threshold: self.compression_threshold,
            inbound: Vec::new(),
            buffer: Vec::new(),
            msg_count: 0,
        }
    }
}

/// An implementation of the [Mobile Transport Protocol] for ciphertext
/// (encrypted) messages, using the original SHA1-based key derivation.
///
/// [Mobile Transport Protocol]: https://core.telegram.org/mtproto/description
pub struct Encrypted {
    /// The authorization key used to encrypt the payload.
    auth_key: AuthKey,

    /// The time offset from the server's time, in seconds.
    time_offset: i32,

    /// The current salt to be used when encrypting the payload.
    salt: i64,

    /// The secure, random identifier for this session.
    session_id: i64,

    /// The current message sequence counter. Content-related messages
    /// advance it by two; its low bit is only ever set on the wire.
    sequence: i32,

    /// The ID of the last message, in either direction.
    last_msg_id: i64,

    /// How many payloads were successfully received and processed.
    received_count: u64,

    /// Identifiers that need to be acknowledged to the server.
    ///
    /// A [content-related message] is "a message requiring an explicit
    /// acknowledgment. These include all the user and many service
    /// messages, virtually all with the exception of containers and
    /// acknowledgments."
    ///
    /// [content-related message]: https://core.telegram.org/mtproto/description#content-related-message
    pending_ack: Vec<i64>,

    /// If present, the threshold in bytes at which a message will be
    /// considered large enough to attempt compressing it. Otherwise,
    /// outgoing messages will never be compressed.
    compression_threshold: Option<usize>,

    /// Results of processing an incoming payload, drained on return.
    inbound: Vec<Inbound>,

    /// Buffer where outgoing requests are serialized to.
    buffer: Vec<u8>,

    /// How many messages are in the buffer.
    msg_count: usize,
}

impl Encrypted {
    /// Start building a new encrypted MTP state.
    pub fn build() -> Builder {
        Builder {
            time_offset: 0,
            first_salt: 0,
            session_id: None,
            compression_threshold: crate::DEFAULT_COMPRESSION_THRESHOLD,
        }
    }

    /// The authorization key used for encryption and decryption.
    pub fn auth_key(&self) -> [u8; 256] {
        self.auth_key.to_bytes()
    }

    pub fn auth_key_id(&self) -> i64 {
        self.auth_key.id()
    }

    pub fn session_id(&self) -> i64 {
        self.session_id
    }

    pub fn salt(&self) -> i64 {
        self.salt
    }

    pub fn set_salt(&mut self, salt: i64) {
        self.salt = salt;
    }

    pub fn time_offset(&self) -> i32 {
        self.time_offset
    }

    /// The raw sequence counter. After a content-related message was
    /// pushed, `sequence() - 1` is the number it carried on the wire.
    pub fn sequence(&self) -> i32 {
        self.sequence
    }

    pub fn last_msg_id(&self) -> i64 {
        self.last_msg_id
    }

    pub fn received_count(&self) -> u64 {
        self.received_count
    }

    /// Whether any inbound message ids still await acknowledgement.
    pub fn has_pending_ack(&self) -> bool {
        !self.pending_ack.is_empty()
    }

    /// Generates and claims the next outbound message identifier without
    /// serializing anything. Needed by requests whose body must embed
    /// their own message identifier before being pushed, such as the
    /// temporary-key binding.
    pub fn next_msg_id(&mut self, now: Duration) -> MsgId {
        MsgId(self.get_new_msg_id(now))
    }

    /// Like [`Mtp::push`], but the message uses a previously claimed
    /// identifier instead of generating a fresh one, and is exempt from
    /// compression (its body is already encrypted).
    pub fn push_prepared(&mut self, request: &[u8], msg_id: MsgId, _now: Duration) -> Option<MsgId> {
        if self.buffer.is_empty() {
            self.buffer.resize(HEADER_LEN + CONTAINER_HEADER_LEN, 0);
        }

        assert!(request.len() % 4 == 0);
        if self.msg_count >= manual_tl::MessageContainer::MAXIMUM_LENGTH {
            return None;
        }
        let new_size = self.buffer.len() + request.len() + manual_tl::Message::SIZE_OVERHEAD;
        if new_size >= manual_tl::MessageContainer::MAXIMUM_SIZE {
            return None;
        }

        msg_id.0.serialize(&mut self.buffer);
        self.get_seq_no(true).serialize(&mut self.buffer);
        (request.len() as i32).serialize(&mut self.buffer);
        self.buffer.extend_from_slice(request);
        self.msg_count += 1;

        Some(msg_id)
    }

    /// Correct our time offset based on a known valid message ID.
    fn correct_time_offset(&mut self, msg_id: i64, now: Duration) {
        let correct = (msg_id >> 32) as i32;
        self.time_offset = correct - now.as_secs() as i32;
        debug!("corrected time offset to {}s", self.time_offset);
    }

    /// Generates a new unique message ID based on the current time since
    /// the epoch, applying the known time offset.
    fn get_new_msg_id(&mut self, now: Duration) -> i64 {
        let seconds = (now.as_secs() as i64 + self.time_offset as i64) as u64;
        let nanoseconds = now.subsec_nanos() as u64;
        let mut new_msg_id = ((seconds << 32) | (nanoseconds << 2)) as i64 & !3;

        if self.last_msg_id >= new_msg_id {
            new_msg_id = self.last_msg_id + 4;
        }

        self.last_msg_id = new_msg_id;
        new_msg_id
    }

    /// Generates the next sequence number depending on whether the
    /// message is content-related or not.
    fn get_seq_no(&mut self, content_related: bool) -> i32 {
        if content_related {
            let result = self.sequence + 1;
            self.sequence += 2;
            result
        } else {
            self.sequence
        }
    }

    fn serialize_msg(&mut self, body: &[u8], content_related: bool, now: Duration) -> MsgId {
        let msg_id = self.get_new_msg_id(now);

        msg_id.serialize(&mut self.buffer);
        self.get_seq_no(content_related).serialize(&mut self.buffer);
        (body.len() as i32).serialize(&mut self.buffer);
        self.buffer.extend_from_slice(body);

        self.msg_count += 1;
        MsgId(msg_id)
    }

    /// `finalize`, but without encryption.
    fn finalize_plain(&mut self, now: Duration) -> Vec<u8> {
        if self.msg_count == 0 {
            return Vec::new();
        }

        if self.msg_count == 1 {
            // Won't be writing the message header for the container.
            self.buffer.drain(HEADER_LEN..HEADER_LEN + CONTAINER_HEADER_LEN);
        }

        {
            let mut tmp = Vec::with_capacity(HEADER_LEN);
            self.salt.serialize(&mut tmp);
            self.session_id.serialize(&mut tmp);
            self.buffer[0..tmp.len()].copy_from_slice(&tmp);
        }

        if self.msg_count != 1 {
            // Give the container its message ID and sequence number.
            // Inner messages must carry lower IDs, so this happens last.
            let mut tmp = Vec::with_capacity(CONTAINER_HEADER_LEN);
            self.get_new_msg_id(now).serialize(&mut tmp);
            self.get_seq_no(false).serialize(&mut tmp);

            // + 8 because it includes the constructor ID and length.
            let len = (self.buffer.len() - HEADER_LEN - CONTAINER_HEADER_LEN + 8) as i32;
            len.serialize(&mut tmp);

            manual_tl::MessageContainer::CONSTRUCTOR_ID.serialize(&mut tmp);
            (self.msg_count as i32).serialize(&mut tmp);
            self.buffer[HEADER_LEN..HEADER_LEN + CONTAINER_HEADER_LEN].copy_from_slice(&tmp);
        }

        self.msg_count = 0;
        mem::take(&mut self.buffer)
    }

    fn process_message(
        &mut self,
        message: manual_tl::Message,
        gzip_depth: usize,
        now: Duration,
    ) -> Result<(), DeserializeError> {
        if message.requires_ack() {
            self.pending_ack.push(message.msg_id);
        }

        // Handle all the possible service messages:
        // https://core.telegram.org/mtproto/service_messages
        match message.constructor_id()? {
            manual_tl::RpcResult::CONSTRUCTOR_ID => self.handle_rpc_result(message),
            manual_tl::MessageContainer::CONSTRUCTOR_ID => {
                self.handle_container(message, gzip_depth, now)
            }
            manual_tl::GzipPacked::CONSTRUCTOR_ID => {
                self.handle_gzip_packed(message, gzip_depth, now)
            }
            tl::types::MsgsAck::CONSTRUCTOR_ID => self.handle_ack(message),
            tl::types::BadMsgNotification::CONSTRUCTOR_ID
            | tl::types::BadServerSalt::CONSTRUCTOR_ID => {
                self.handle_bad_notification(message, now)
            }
            tl::types::MsgsStateReq::CONSTRUCTOR_ID
            | tl::types::MsgsStateInfo::CONSTRUCTOR_ID
            | tl::types::MsgsAllInfo::CONSTRUCTOR_ID
            | tl::types::MsgResendReq::CONSTRUCTOR_ID => self.handle_state_messages(message),
            tl::types::MsgDetailedInfo::CONSTRUCTOR_ID
            | tl::types::MsgNewDetailedInfo::CONSTRUCTOR_ID => self.handle_detailed_info(message),
            tl::types::FutureSalts::CONSTRUCTOR_ID => self.handle_future_salts(message),
            tl::types::Pong::CONSTRUCTOR_ID => self.handle_pong(message),
            tl::types::DestroySessionOk::CONSTRUCTOR_ID
            | tl::types::DestroySessionNone::CONSTRUCTOR_ID => self.handle_destroy_session(message),
            tl::types::NewSessionCreated::CONSTRUCTOR_ID => {
                self.handle_new_session_created(message)
            }
            tl::types::HttpWait::CONSTRUCTOR_ID => Ok(()),
            _ => self.handle_update(message),
        }
    }

    /// **Response to an RPC query.**
    ///
    /// The result may be wrapped in `gzip_packed`, carry an `rpc_error`,
    /// or answer an earlier `rpc_drop_answer`.
    fn handle_rpc_result(&mut self, message: manual_tl::Message) -> Result<(), DeserializeError> {
        let rpc_result = manual_tl::RpcResult::from_bytes(&message.body)?;
        let inner_constructor = rpc_result.inner_constructor()?;
        let manual_tl::RpcResult { req_msg_id, result } = rpc_result;
        let msg_id = MsgId(req_msg_id);

        match inner_constructor {
            tl::types::RpcError::CONSTRUCTOR_ID => {
                let mut cursor = Cursor::from_slice(&result[4..]);
                let error = tl::types::RpcError::deserialize(&mut cursor)?;
                self.inbound.push(Inbound::RpcError {
                    msg_id,
                    error: error.into(),
                });
            }

            // Cancellation of an RPC query; the `msg_id` corresponds to
            // the `rpc_drop_answer` request itself.
            tl::types::RpcAnswerUnknown::CONSTRUCTOR_ID
            | tl::types::RpcAnswerDroppedRunning::CONSTRUCTOR_ID
            | tl::types::RpcAnswerDropped::CONSTRUCTOR_ID => {
                self.inbound.push(Inbound::RpcResult {
                    msg_id,
                    body: result,
                });
            }

            // The server should not compress errors, so a packed body is
            // always a proper result.
            manual_tl::GzipPacked::CONSTRUCTOR_ID => {
                let body = manual_tl::GzipPacked::from_bytes(&result)?.decompress()?;
                self.inbound.push(Inbound::RpcResult { msg_id, body });
            }

            _ => {
                self.inbound.push(Inbound::RpcResult {
                    msg_id,
                    body: result,
                });
            }
        }

        Ok(())
    }

    /// **Acknowledgment of receipt** of one or more of our messages.
    fn handle_ack(&mut self, message: manual_tl::Message) -> Result<(), DeserializeError> {
        let tl::enums::MsgsAck::Ack(ack) = tl::enums::MsgsAck::from_bytes(&message.body)?;
        self.inbound
            .push(Inbound::Acks(ack.msg_ids.into_iter().map(MsgId).collect()));
        Ok(())
    }

    /// **Notice of ignored error message.**
    ///
    /// The server rejected one of our messages without processing it.
    /// For `bad_server_salt` (code 48) the frame also carries the salt
    /// that should be used from now on; for the time-skew codes 16 and
    /// 17 we can resynchronize our clock against the notification's own
    /// message identifier.
    fn handle_bad_notification(
        &mut self,
        message: manual_tl::Message,
        now: Duration,
    ) -> Result<(), DeserializeError> {
        // Callers correlate the bad msg id with their in-flight queries,
        // so the time correction below must happen before they resend.
        let notification = tl::enums::BadMsgNotification::from_bytes(&message.body)?;
        match notification {
            tl::enums::BadMsgNotification::BadServerSalt(x) => {
                debug!("salt rotated to {}", x.new_server_salt);
                self.salt = x.new_server_salt;
                self.inbound.push(Inbound::BadMessage {
                    msg_id: MsgId(x.bad_msg_id),
                    code: x.error_code,
                });
            }
            tl::enums::BadMsgNotification::Notification(x) => {
                match x.error_code {
                    16 | 17 => {
                        // Sent `msg_id` was too low or too high: our
                        // `time_offset` is wrong. The notification's own
                        // id carries valid server time to resync against.
                        self.correct_time_offset(message.msg_id, now);
                        info!(
                            "bad_msg_notification code {}; time offset now {}s",
                            x.error_code, self.time_offset
                        );
                    }
                    32 => {
                        // Sent `seq_no` was too low: jump well ahead.
                        self.sequence += 64;
                    }
                    33 => {
                        // Sent `seq_no` was too high.
                        self.sequence -= 16;
                    }
                    _ => {
                        warn!("bad msg notification with code {}", x.error_code);
                    }
                }
                self.inbound.push(Inbound::BadMessage {
                    msg_id: MsgId(x.bad_msg_id),
                    code: x.error_code,
                });
            }
        }

        Ok(())
    }

    /// Requests and reports about the state of older messages. None of
    /// these carry data the upper layers act on.
    fn handle_state_messages(&mut self, message: manual_tl::Message) -> Result<(), DeserializeError> {
        debug!(
            "ignoring message state service message {:08x?}",
            message.constructor_id()
        );
        Ok(())
    }

    /// **Extended voluntary communication of status of one message.**
    ///
    /// Normally used by the server to respond to the receipt of a
    /// duplicate `msg_id`. The answer itself only needs acknowledgement.
    fn handle_detailed_info(&mut self, message: manual_tl::Message) -> Result<(), DeserializeError> {
        let detailed = tl::enums::MsgDetailedInfo::from_bytes(&message.body)?;
        match detailed {
            tl::enums::MsgDetailedInfo::Info(x) => self.pending_ack.push(x.answer_msg_id),
            tl::enums::MsgDetailedInfo::New(x) => self.pending_ack.push(x.answer_msg_id),
        }
        Ok(())
    }

    /// **Request for several future salts.**
    ///
    /// The response is routed like any other result, keyed on the
    /// requesting message identifier.
    fn handle_future_salts(&mut self, message: manual_tl::Message) -> Result<(), DeserializeError> {
        let tl::enums::FutureSalts::Salts(salts) =
            tl::enums::FutureSalts::from_bytes(&message.body)?;

        self.inbound.push(Inbound::RpcResult {
            msg_id: MsgId(salts.req_msg_id),
            body: message.body,
        });
        Ok(())
    }

    /// **Ping messages (PING/PONG).**
    ///
    /// A `pong` is transmitted in response to a `ping`, and is routed
    /// back by the identifier of the `ping` message.
    fn handle_pong(&mut self, message: manual_tl::Message) -> Result<(), DeserializeError> {
        let tl::enums::Pong::Pong(pong) = tl::enums::Pong::from_bytes(&message.body)?;

        self.inbound.push(Inbound::RpcResult {
            msg_id: MsgId(pong.msg_id),
            body: message.body,
        });
        Ok(())
    }

    /// **Request to destroy session.**
    fn handle_destroy_session(&mut self, _message: manual_tl::Message) -> Result<(), DeserializeError> {
        debug!("got destroy session result");
        Ok(())
    }

    /// **New session creation notification.**
    ///
    /// The server had to create a new session to talk to us, so there
    /// may be a gap in the updates stream that has to be recovered; the
    /// notification also carries the salt to use from now on.
    fn handle_new_session_created(
        &mut self,
        message: manual_tl::Message,
    ) -> Result<(), DeserializeError> {
        let tl::enums::NewSession::Created(new_session) =
            tl::enums::NewSession::from_bytes(&message.body)?;

        self.salt = new_session.server_salt;
        self.inbound.push(Inbound::NewSession {
            first_msg_id: new_session.first_msg_id,
            unique_id: new_session.unique_id,
        });
        Ok(())
    }

    /// **Containers (simple container).**
    ///
    /// A container carries several messages at once, each with its own
    /// identifier, sequence number and length; they are processed in
    /// iteration order. Empty inner messages are allowed and skipped.
    fn handle_container(
        &mut self,
        message: manual_tl::Message,
        gzip_depth: usize,
        now: Duration,
    ) -> Result<(), DeserializeError> {
        let container =
            manual_tl::MessageContainer::deserialize(&mut Cursor::from_slice(&message.body))?;
        for inner_message in container.messages {
            if inner_message.body.is_empty() {
                continue;
            }
            self.process_message(inner_message, gzip_depth, now)?;
        }

        Ok(())
    }

    /// **Packed object.**
    ///
    /// Replaces any other object with its gzipped representation. Only
    /// one level of compression is allowed by the protocol; the frame is
    /// dropped if the inflated payload is compressed again.
    fn handle_gzip_packed(
        &mut self,
        message: manual_tl::Message,
        gzip_depth: usize,
        now: Duration,
    ) -> Result<(), DeserializeError> {
        if gzip_depth > 0 {
            return Err(DeserializeError::NestedGzip);
        }

        let container = manual_tl::GzipPacked::from_bytes(&message.body)?;
        self.process_message(
            manual_tl::Message {
                body: container.decompress()?,
                ..message
            },
            gzip_depth + 1,
            now,
        )
    }

    /// Anything that is not a service message must be an update.
    fn handle_update(&mut self, message: manual_tl::Message) -> Result<(), DeserializeError> {
        self.inbound.push(Inbound::Update(message.body));
        Ok(())
    }

    fn check_inbound_msg_id(&self, msg_id: i64, now: Duration) -> Result<(), DeserializeError> {
        // Server-originated identifiers always have the low bit set.
        if msg_id % 2 == 0 {
            return Err(DeserializeError::BadMessageId { got: msg_id });
        }

        let message_time = msg_id >> 32;
        let server_time = now.as_secs() as i64 + self.time_offset as i64;
        if message_time < server_time - MSG_ID_MAX_BEHIND
            || message_time > server_time + MSG_ID_MAX_AHEAD
        {
            return Err(DeserializeError::BadMessageTime { got: msg_id });
        }

        Ok(())
    }
}

impl Mtp for Encrypted {
    /// Pushes a request into the internal buffer, giving it a message
    /// identifier and a sequence number. Any pending acknowledgements
    /// are included with it.
    ///
    /// Panics if the request length is not padded to 4 bytes. The
    /// serialization of requests will always be correctly padded, so
    /// an error case for this would never trigger.
    fn push(&mut self, request: &[u8], now: Duration) -> Option<MsgId> {
        if self.buffer.is_empty() {
            // First push; reserve space for `finalize` to fill in.
            self.buffer.resize(HEADER_LEN + CONTAINER_HEADER_LEN, 0);
        }

        // Acknowledgements have priority over user requests, because
        // unacked messages get re-sent by the server.
        if !self.pending_ack.is_empty() {
            let body = tl::enums::MsgsAck::Ack(tl::types::MsgsAck {
                msg_ids: mem::take(&mut self.pending_ack),
            })
            .to_bytes();
            self.serialize_msg(&body, false, now);
        }

        if self.msg_count >= manual_tl::MessageContainer::MAXIMUM_LENGTH {
            return None;
        }

        // Requests that are too large would cause Telegram to close the
        // connection, but they are so uncommon it's not worth an `Err`.
        assert!(
            request.len() + manual_tl::Message::SIZE_OVERHEAD
                <= manual_tl::MessageContainer::MAXIMUM_SIZE
        );
        assert!(request.len() % 4 == 0);

        // Payload from the outside is always considered to be
        // content-related, which means we can apply compression.
        let mut body = request;
        let compressed;
        if let Some(threshold) = self.compression_threshold {
            if request.len() >= threshold {
                compressed = manual_tl::GzipPacked::new(request).to_bytes();
                if compressed.len() < request.len() {
                    body = &compressed;
                }
            }
        }

        let new_size = self.buffer.len() + body.len() + manual_tl::Message::SIZE_OVERHEAD;
        if new_size >= manual_tl::MessageContainer::MAXIMUM_SIZE {
            // No more messages fit in this container.
            return None;
        }

        Some(self.serialize_msg(body, true, now))
    }

    fn finalize(&mut self, now: Duration) -> Vec<u8> {
        // Acknowledgements may be pending with nothing else to send.
        if self.msg_count == 0 && !self.pending_ack.is_empty() {
            self.buffer.resize(HEADER_LEN + CONTAINER_HEADER_LEN, 0);
            let body = tl::enums::MsgsAck::Ack(tl::types::MsgsAck {
                msg_ids: mem::take(&mut self.pending_ack),
            })
            .to_bytes();
            self.serialize_msg(&body, false, now);
        }

        let buffer = self.finalize_plain(now);
        if buffer.is_empty() {
            buffer
        } else {
            encrypt_data_v1(&buffer, &self.auth_key)
        }
    }

    /// Processes an encrypted payload from the server.
    fn deserialize(
        &mut self,
        payload: &[u8],
        now: Duration,
    ) -> Result<Vec<Inbound>, DeserializeError> {
        crate::utils::check_message_buffer(payload)?;

        let (plaintext, msg_key) = decrypt_data_v1(payload, &self.auth_key).map_err(|e| match e {
            ferrogram_crypto::Error::AuthKeyMismatch => DeserializeError::BadAuthKey {
                got: i64::from_le_bytes(payload[..8].try_into().unwrap()),
            },
            other => DeserializeError::DecryptionError(other),
        })?;

        if plaintext.len() < HEADER_LEN + manual_tl::Message::SIZE_OVERHEAD {
            return Err(DeserializeError::MessageBufferTooSmall);
        }

        // The message key only covers the plaintext up to the payload's
        // declared end; the padding that follows is excluded.
        let msg_len = i32::from_le_bytes(plaintext[28..32].try_into().unwrap());
        if msg_len < 0 {
            return Err(DeserializeError::NegativeMessageLength { got: msg_len });
        }
        if msg_len % 4 != 0 {
            return Err(DeserializeError::MisalignedMessageLength { got: msg_len });
        }
        let data_end = HEADER_LEN + manual_tl::Message::SIZE_OVERHEAD + msg_len as usize;
        if data_end > plaintext.len() {
            return Err(DeserializeError::TooLongMessageLength {
                got: msg_len as usize,
                max_length: plaintext.len() - HEADER_LEN - manual_tl::Message::SIZE_OVERHEAD,
            });
        }
        if plaintext.len() - data_end > 15 {
            return Err(DeserializeError::MisalignedMessageLength { got: msg_len });
        }
        if calc_msg_key(&plaintext[..data_end]) != msg_key {
            return Err(DeserializeError::MessageKeyMismatch);
        }

        let mut buffer = Cursor::from_slice(&plaintext[..data_end]);

        let _salt = i64::deserialize(&mut buffer)?;
        let session_id = i64::deserialize(&mut buffer)?;
        if session_id != self.session_id {
            return Err(DeserializeError::BadSessionId {
                got: session_id,
                expected: self.session_id,
            });
        }

        let message = manual_tl::Message::deserialize(&mut buffer)?;
        self.check_inbound_msg_id(message.msg_id, now)?;

        self.process_message(message, 0, now)?;
        self.received_count += 1;

        Ok(mem::take(&mut self.inbound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // salt + session_id
    const MESSAGE_PREFIX_LEN: usize = 16;

    // gzip_packed#3072cfa1 packed_data:string = Object;
    const GZIP_PACKED_HEADER: [u8; 4] = [0xa1, 0xcf, 0x72, 0x30];

    // msg_container#73f1f8dc messages:vector<message> = MessageContainer;
    const MSG_CONTAINER_HEADER: [u8; 4] = [0xdc, 0xf8, 0xf1, 0x73];

    const REQUEST: &[u8] = b"Hey!";
    const REQUEST_B: &[u8] = b"Bye!";

    fn auth_key() -> [u8; 256] {
        [0; 256]
    }

    fn now() -> Duration {
        Duration::new(1693436740, 1234)
    }

    fn ensure_buffer_is_message(buffer: &[u8], body: &[u8], seq_no: u8) {
        // msg_id, based on the current time
        assert_ne!(&buffer[0..8], [0, 0, 0, 0, 0, 0, 0, 0]);
        // seq_no, ever-increasing odd number (little endian)
        assert_eq!(&buffer[8..12], [seq_no, 0, 0, 0]);
        // bytes, the len of the body (little endian)
        assert_eq!(&buffer[12..16], [body.len() as u8, 0, 0, 0]);
        // the body itself, padded to 4 bytes
        assert_eq!(&buffer[16..], body);
    }

    #[test]
    fn ensure_serialization_has_salt_session_id() {
        let mut mtp = Encrypted::build().finish(auth_key());

        mtp.push(REQUEST, now());
        let buffer = mtp.finalize_plain(now());

        // salt comes first, it's zero by default.
        assert_eq!(&buffer[0..8], [0, 0, 0, 0, 0, 0, 0, 0]);

        // session_id should be random.
        assert_ne!(&buffer[8..16], [0, 0, 0, 0, 0, 0, 0, 0]);

        // Only one message should remain.
        ensure_buffer_is_message(&buffer[MESSAGE_PREFIX_LEN..], REQUEST, 1);
    }

    #[test]
    fn ensure_correct_multi_serialization() {
        let mut mtp = Encrypted::build()
            .compression_threshold(None)
            .finish(auth_key());

        assert!(mtp.push(REQUEST, now()).is_some());
        assert!(mtp.push(REQUEST_B, now()).is_some());
        let buffer = mtp.finalize_plain(now());
        let buffer = &buffer[MESSAGE_PREFIX_LEN..];

        // container msg_id
        assert_ne!(&buffer[0..8], [0, 0, 0, 0, 0, 0, 0, 0]);
        // seq_no: after two content messages (1, 3) the next
        // non-content-related is 4.
        assert_eq!(&buffer[8..12], [4, 0, 0, 0]);
        // body length
        assert_eq!(&buffer[12..16], [48, 0, 0, 0]);

        // container constructor
        assert_eq!(&buffer[16..20], MSG_CONTAINER_HEADER);
        // number of contained messages
        assert_eq!(&buffer[20..24], [2, 0, 0, 0]);

        ensure_buffer_is_message(&buffer[24..44], REQUEST, 1);
        ensure_buffer_is_message(&buffer[44..], REQUEST_B, 3);
    }

    #[test]
    fn msg_ids_are_strictly_increasing_and_multiples_of_four() {
        let mut mtp = Encrypted::build()
            .compression_threshold(None)
            .finish(auth_key());

        // Repeatedly pushing with the same mock time exercises the bump.
        let mut previous = 0;
        for _ in 0..32 {
            let MsgId(msg_id) = mtp.push(REQUEST, now()).unwrap();
            assert_eq!(msg_id % 4, 0);
            assert!(msg_id > previous);
            previous = msg_id;
        }
    }

    #[test]
    fn container_id_is_larger_than_inner_ids() {
        let mut mtp = Encrypted::build()
            .compression_threshold(None)
            .finish(auth_key());

        let a = mtp.push(REQUEST, now()).unwrap();
        let b = mtp.push(REQUEST_B, now()).unwrap();
        mtp.finalize_plain(now());

        assert!(b > a);
        assert!(MsgId(mtp.last_msg_id()) > b);
    }

    #[test]
    fn ensure_no_compression_is_honored() {
        // A large vector of null bytes should compress.
        let mut mtp = Encrypted::build()
            .compression_threshold(None)
            .finish(auth_key());

        mtp.push(&vec![0; 512 * 1024], now());
        let buffer = mtp.finalize_plain(now());
        assert!(!buffer.windows(4).any(|w| w == GZIP_PACKED_HEADER));
    }

    #[test]
    fn ensure_some_compression() {
        {
            // High threshold not reached, should not compress.
            let mut mtp = Encrypted::build()
                .compression_threshold(Some(768 * 1024))
                .finish(auth_key());
            mtp.push(&vec![0; 512 * 1024], now());
            let buffer = mtp.finalize_plain(now());
            assert!(!buffer.windows(4).any(|w| w == GZIP_PACKED_HEADER));
        }
        {
            // Low threshold is exceeded, should compress.
            let mut mtp = Encrypted::build()
                .compression_threshold(Some(256 * 1024))
                .finish(auth_key());
            mtp.push(&vec![0; 512 * 1024], now());
            let buffer = mtp.finalize_plain(now());
            assert!(buffer.windows(4).any(|w| w == GZIP_PACKED_HEADER));
        }
        {
            // The default should compress.
            let mut mtp = Encrypted::build().finish(auth_key());
            mtp.push(&vec![0; 512 * 1024], now());
            let buffer = mtp.finalize_plain(now());
            assert!(buffer.windows(4).any(|w| w == GZIP_PACKED_HEADER));
        }
    }

    #[test]
    fn finalize_with_nothing_is_empty() {
        let mut mtp = Encrypted::build().finish(auth_key());
        assert!(mtp.finalize(now()).is_empty());
    }

    /// Feed a server-framed message through `deserialize` by building
    /// the same frame the server would.
    fn server_frame(mtp: &Encrypted, body: &[u8], msg_id: i64, seq_no: i32) -> Vec<u8> {
        let key = AuthKey::from_bytes(mtp.auth_key());
        let mut plaintext = Vec::new();
        mtp.salt().serialize(&mut plaintext);
        mtp.session_id().serialize(&mut plaintext);
        msg_id.serialize(&mut plaintext);
        seq_no.serialize(&mut plaintext);
        (body.len() as i32).serialize(&mut plaintext);
        plaintext.extend_from_slice(body);

        // The server derives its AES key with the opposite direction, so
        // encrypt manually the way it would.
        let msg_key = calc_msg_key(&plaintext);
        let (aes_key, aes_iv) =
            ferrogram_crypto::calc_key(&key, &msg_key, ferrogram_crypto::Side::Server);
        let mut frame = Vec::new();
        frame.extend(mtp.auth_key_id().to_le_bytes());
        frame.extend(msg_key);
        frame.extend(ferrogram_crypto::encrypt_ige(&plaintext, &aes_key, &aes_iv));
        frame
    }

    fn server_msg_id() -> i64 {
        ((now().as_secs() as i64) << 32) | 1
    }

    #[test]
    fn inbound_pong_is_routed_by_ping_msg_id() {
        let mut mtp = Encrypted::build().finish(auth_key());

        let body = tl::enums::Pong::Pong(tl::types::Pong {
            msg_id: 0x0807060504030201,
            ping_id: 7,
        })
        .to_bytes();
        let frame = server_frame(&mtp, &body, server_msg_id(), 1);

        let inbound = mtp.deserialize(&frame, now()).unwrap();
        match &inbound[..] {
            [Inbound::RpcResult { msg_id, .. }] => {
                assert_eq!(*msg_id, MsgId(0x0807060504030201));
            }
            other => panic!("unexpected inbound: {:?}", other),
        }
        // Content-related inbound messages must be acknowledged.
        assert!(mtp.has_pending_ack());
    }

    #[test]
    fn inbound_bad_server_salt_rotates_salt() {
        let mut mtp = Encrypted::build().first_salt(0x11).finish(auth_key());

        let body = tl::enums::BadMsgNotification::BadServerSalt(tl::types::BadServerSalt {
            bad_msg_id: 0xf00,
            bad_msg_seqno: 1,
            error_code: 48,
            new_server_salt: 0x22,
        })
        .to_bytes();
        let frame = server_frame(&mtp, &body, server_msg_id(), 1);

        let inbound = mtp.deserialize(&frame, now()).unwrap();
        assert_eq!(mtp.salt(), 0x22);
        match &inbound[..] {
            [Inbound::BadMessage { msg_id, code }] => {
                assert_eq!(*msg_id, MsgId(0xf00));
                assert_eq!(*code, 48);
            }
            other => panic!("unexpected inbound: {:?}", other),
        }
    }

    #[test]
    fn inbound_frame_for_other_session_is_rejected() {
        let mut mtp = Encrypted::build().finish(auth_key());
        let mut other = Encrypted::build().finish(auth_key());
        // Distinct random session ids, same auth key.
        assert_ne!(mtp.session_id(), other.session_id());

        let body = tl::enums::Pong::Pong(tl::types::Pong {
            msg_id: 1,
            ping_id: 2,
        })
        .to_bytes();
        let frame = server_frame(&other, &body, server_msg_id(), 1);

        assert!(matches!(
            mtp.deserialize(&frame, now()),
            Err(DeserializeError::BadSessionId { .. })
        ));
    }

    #[test]
    fn inbound_time_drift_forces_session_reset() {
        let mut mtp = Encrypted::build().finish(auth_key());

        let body = tl::enums::Pong::Pong(tl::types::Pong {
            msg_id: 1,
            ping_id: 2,
        })
        .to_bytes();

        let stale = ((now().as_secs() as i64 - 301) << 32) | 1;
        let frame = server_frame(&mtp, &body, stale, 1);
        assert!(matches!(
            mtp.deserialize(&frame, now()),
            Err(DeserializeError::BadMessageTime { .. })
        ));

        let future = ((now().as_secs() as i64 + 31) << 32) | 1;
        let frame = server_frame(&mtp, &body, future, 1);
        assert!(matches!(
            mtp.deserialize(&frame, now()),
            Err(DeserializeError::BadMessageTime { .. })
        ));
    }

    #[test]
    fn inbound_container_messages_are_flattened_in_order() {
        let mut mtp = Encrypted::build().finish(auth_key());

        let pong = |ping_msg_id: i64| {
            tl::enums::Pong::Pong(tl::types::Pong {
                msg_id: ping_msg_id,
                ping_id: 0,
            })
            .to_bytes()
        };

        let base_id = server_msg_id();
        let mut container = Vec::new();
        manual_tl::MessageContainer::CONSTRUCTOR_ID.serialize(&mut container);
        2i32.serialize(&mut container);
        for (i, body) in [pong(111), pong(222)].iter().enumerate() {
            (base_id + 4 * i as i64).serialize(&mut container);
            ((i * 2 + 1) as i32).serialize(&mut container);
            (body.len() as i32).serialize(&mut container);
            container.extend_from_slice(body);
        }

        let frame = server_frame(&mtp, &container, base_id + 8, 4);
        let inbound = mtp.deserialize(&frame, now()).unwrap();

        let ids: Vec<_> = inbound
            .iter()
            .map(|i| match i {
                Inbound::RpcResult { msg_id, .. } => msg_id.0,
                other => panic!("unexpected inbound: {:?}", other),
            })
            .collect();
        assert_eq!(ids, [111, 222]);
    }

    #[test]
    fn tampered_frame_fails_the_message_key_check() {
        let mut mtp = Encrypted::build().finish(auth_key());

        let body = tl::enums::Pong::Pong(tl::types::Pong {
            msg_id: 1,
            ping_id: 2,
        })
        .to_bytes();
        let mut frame = server_frame(&mtp, &body, server_msg_id(), 1);
        let last = frame.len() - 1;
        frame[last] ^= 0xff;

        assert!(matches!(
            mtp.deserialize(&frame, now()),
            Err(DeserializeError::MessageKeyMismatch)
        ));
    }
}
