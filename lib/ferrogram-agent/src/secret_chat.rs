// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Secret chats: end-to-end encrypted conversations whose payloads are
//! AES-IGE encrypted under a DH-derived pair key, independent of the
//! MTProto authorization key.
//!
//! This module owns the per-chat state, payload decryption, and the
//! in-order reassembly of inbound messages. Chats old enough to predate
//! explicit sequence numbers are a separate [`SequenceMode`] variant;
//! their messages are delivered as they arrive.
use ferrogram_crypto::{calc_key, calc_msg_key, decrypt_ige, AuthKey, Side};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fmt;

/// `decryptedMessageLayer#1be31789 random_bytes:bytes layer:int
/// in_seq_no:int out_seq_no:int message:DecryptedMessage`
const DECRYPTED_MESSAGE_LAYER: u32 = 0x1be31789;

/// The lifecycle of a secret chat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretChatState {
    /// We requested the chat and await the peer's acceptance.
    Requested,
    /// The peer requested the chat and we have not accepted yet.
    Waiting,
    /// The key exchange completed; messages flow.
    Ok,
    /// Either side discarded the chat.
    Deleted,
}

/// State of an in-flight key re-exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyExchangeState {
    None,
    Requested,
    Accepted,
    Committed,
    Aborted,
}

/// How the chat numbers its messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceMode {
    /// The chat was created before explicit sequence numbers existed;
    /// inbound messages carry no counters and are delivered unordered.
    PreSeqNo,
    /// Explicit `in_seq_no`/`out_seq_no` counters inside the payload.
    SeqNo,
}

/// What to do with an inbound secret-chat message.
#[derive(Debug, PartialEq)]
pub enum InboundSecret {
    /// Messages that became deliverable, oldest first.
    Deliver(Vec<Vec<u8>>),

    /// The message is ahead of the expected sequence; it was queued and
    /// the hole-heal timer should run.
    Queued,

    /// The message was discarded.
    Dropped(SecretDropReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretDropReason {
    /// The sequence parity does not belong to the peer.
    BadParity,

    /// The peer claims to have seen more of our messages than we sent.
    InSeqNoAhead,

    /// We already delivered this sequence number.
    Duplicate,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SecretChatError {
    /// The payload is shorter than its framing.
    InvalidLength,

    /// The payload was encrypted under a different key.
    KeyFingerprintMismatch { got: i64, expected: i64 },

    /// The message key does not match the decrypted contents.
    MessageKeyMismatch,
}

impl std::error::Error for SecretChatError {}

impl fmt::Display for SecretChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => write!(f, "secret payload too short or misaligned"),
            Self::KeyFingerprintMismatch { got, expected } => {
                write!(f, "key fingerprint {} does not match {}", got, expected)
            }
            Self::MessageKeyMismatch => write!(f, "secret payload msg key mismatch"),
        }
    }
}

/// A parsed inbound secret payload, after decryption.
#[derive(Debug)]
pub(crate) struct ParsedSecretPayload {
    pub raw_in_seq_no: Option<i32>,
    pub raw_out_seq_no: Option<i32>,
    pub layer: Option<i32>,
    pub message: Vec<u8>,
}

/// One end-to-end encrypted chat.
pub struct SecretChat {
    pub chat_id: i32,
    pub access_hash: i64,
    pub user_id: i32,
    pub admin_id: i32,
    pub date: i32,
    pub ttl: i32,
    pub layer: i32,
    pub state: SecretChatState,
    pub sequence_mode: SequenceMode,

    /// DH parameters learned from `messages.getDhConfig`.
    pub encr_root: i32,
    pub encr_param_version: i32,
    pub encr_prime: Vec<u8>,

    /// Our public value during chat creation.
    pub g_key: Vec<u8>,

    /// The shared 2048-bit key and the low 64 bits of its SHA1.
    pub key: [u8; 256],
    pub key_fingerprint: i64,

    pub exchange_state: KeyExchangeState,
    pub exchange_id: i64,
    pub exchange_key: [u8; 256],

    /// Whether this side created the chat; decides sequence parity.
    is_creator: bool,

    /// How many inbound messages were delivered in order.
    pub in_seq_no: i32,

    /// How many outbound messages were sent.
    pub out_seq_no: i32,

    /// Out-of-order messages keyed by their sequence number, waiting
    /// either for the hole to fill or for the heal timer.
    pending: BTreeMap<i32, Vec<u8>>,

    pub(crate) hole_timer_armed: bool,
}

impl SecretChat {
    pub fn new(chat_id: i32, access_hash: i64, user_id: i32, admin_id: i32, is_creator: bool) -> Self {
        Self {
            chat_id,
            access_hash,
            user_id,
            admin_id,
            date: 0,
            ttl: 0,
            layer: 17,
            state: if is_creator {
                SecretChatState::Requested
            } else {
                SecretChatState::Waiting
            },
            sequence_mode: SequenceMode::SeqNo,
            encr_root: 0,
            encr_param_version: 0,
            encr_prime: Vec::new(),
            g_key: Vec::new(),
            key: [0; 256],
            key_fingerprint: 0,
            exchange_state: KeyExchangeState::None,
            exchange_id: 0,
            exchange_key: [0; 256],
            is_creator,
            in_seq_no: 0,
            out_seq_no: 0,
            pending: BTreeMap::new(),
            hole_timer_armed: false,
        }
    }

    pub fn is_creator(&self) -> bool {
        self.is_creator
    }

    /// Installs the pair key, caching its fingerprint.
    pub fn set_key(&mut self, key: [u8; 256]) {
        self.key_fingerprint = AuthKey::from_bytes(key).id();
        self.key = key;
    }

    /// The raw `out_seq_no` for the next message this side sends: twice
    /// the count, with the side's parity bit mixed in. The creator's
    /// messages carry odd raw sequence numbers.
    pub fn next_raw_out_seq_no(&self) -> i32 {
        self.out_seq_no * 2 + if self.is_creator { 1 } else { 0 }
    }

    /// The raw `in_seq_no` this side reports: how many of the peer's
    /// messages we delivered, with the peer's parity bit mixed in.
    pub fn raw_in_seq_no(&self) -> i32 {
        self.in_seq_no * 2 + if self.is_creator { 0 } else { 1 }
    }

    /// Decrypts an inbound payload and splits off the layer envelope.
    pub(crate) fn decrypt_payload(&self, bytes: &[u8]) -> Result<ParsedSecretPayload, SecretChatError> {
        if bytes.len() < 8 + 16 + 16 || (bytes.len() - 24) % 16 != 0 {
            return Err(SecretChatError::InvalidLength);
        }

        let fingerprint = i64::from_le_bytes(bytes[..8].try_into().unwrap());
        if fingerprint != self.key_fingerprint {
            return Err(SecretChatError::KeyFingerprintMismatch {
                got: fingerprint,
                expected: self.key_fingerprint,
            });
        }

        let msg_key: [u8; 16] = bytes[8..24].try_into().unwrap();
        // Both directions of a secret chat derive with the client-side
        // offset; the parties are distinguished by sequence parity only.
        let pair_key = AuthKey::from_bytes(self.key);
        let (aes_key, aes_iv) = calc_key(&pair_key, &msg_key, Side::Client);
        let plaintext = decrypt_ige(&bytes[24..], &aes_key, &aes_iv);

        if plaintext.len() < 4 {
            return Err(SecretChatError::InvalidLength);
        }
        let len = i32::from_le_bytes(plaintext[..4].try_into().unwrap());
        if len < 0 || 4 + len as usize > plaintext.len() {
            return Err(SecretChatError::InvalidLength);
        }
        let data_end = 4 + len as usize;
        if calc_msg_key(&plaintext[..data_end]) != msg_key {
            return Err(SecretChatError::MessageKeyMismatch);
        }

        let inner = &plaintext[4..data_end];
        if inner.len() >= 4
            && u32::from_le_bytes(inner[..4].try_into().unwrap()) == DECRYPTED_MESSAGE_LAYER
        {
            // random_bytes:bytes layer:int in_seq_no:int out_seq_no:int
            // message:DecryptedMessage
            let mut cursor = ferrogram_tl::Cursor::from_slice(&inner[4..]);
            use ferrogram_tl::Deserializable;
            let _random_bytes =
                Vec::<u8>::deserialize(&mut cursor).map_err(|_| SecretChatError::InvalidLength)?;
            let layer =
                i32::deserialize(&mut cursor).map_err(|_| SecretChatError::InvalidLength)?;
            let raw_in_seq_no =
                i32::deserialize(&mut cursor).map_err(|_| SecretChatError::InvalidLength)?;
            let raw_out_seq_no =
                i32::deserialize(&mut cursor).map_err(|_| SecretChatError::InvalidLength)?;
            let message = inner[4 + cursor.pos()..].to_vec();

            Ok(ParsedSecretPayload {
                raw_in_seq_no: Some(raw_in_seq_no),
                raw_out_seq_no: Some(raw_out_seq_no),
                layer: Some(layer),
                message,
            })
        } else {
            // Chats from before the layer envelope carry the message
            // object directly, with no sequence numbers at all.
            Ok(ParsedSecretPayload {
                raw_in_seq_no: None,
                raw_out_seq_no: None,
                layer: None,
                message: inner.to_vec(),
            })
        }
    }

    /// Applies the reassembly rules to an inbound message.
    pub fn process_inbound(
        &mut self,
        raw_in_seq_no: Option<i32>,
        raw_out_seq_no: Option<i32>,
        message: Vec<u8>,
    ) -> InboundSecret {
        let (raw_in, raw_out) = match (self.sequence_mode, raw_in_seq_no, raw_out_seq_no) {
            (SequenceMode::PreSeqNo, _, _) | (_, None, None) => {
                // No counters to enforce; deliver as-is.
                return InboundSecret::Deliver(vec![message]);
            }
            (SequenceMode::SeqNo, Some(raw_in), Some(raw_out)) => (raw_in, raw_out),
            _ => return InboundSecret::Dropped(SecretDropReason::BadParity),
        };

        // The peer's outbound parity is the opposite of ours, and the
        // in-counter it reports about us must carry our parity.
        let peer_parity = if self.is_creator { 0 } else { 1 };
        let our_parity = 1 - peer_parity;
        if raw_out % 2 != peer_parity || raw_in % 2 != our_parity {
            warn!(
                "secret chat {}: bad sequence parity (in {}, out {})",
                self.chat_id, raw_in, raw_out
            );
            return InboundSecret::Dropped(SecretDropReason::BadParity);
        }

        // The peer cannot have seen messages we never sent.
        if raw_in / 2 > self.out_seq_no {
            warn!(
                "secret chat {}: peer claims {} of our messages, we sent {}",
                self.chat_id,
                raw_in / 2,
                self.out_seq_no
            );
            return InboundSecret::Dropped(SecretDropReason::InSeqNoAhead);
        }

        let seq = raw_out / 2;
        if seq < self.in_seq_no {
            debug!(
                "secret chat {}: duplicate message {} (expected {})",
                self.chat_id, seq, self.in_seq_no
            );
            return InboundSecret::Dropped(SecretDropReason::Duplicate);
        }

        if seq > self.in_seq_no {
            info!(
                "secret chat {}: hole before message {} (expected {}), waiting",
                self.chat_id, seq, self.in_seq_no
            );
            self.pending.insert(seq, message);
            return InboundSecret::Queued;
        }

        // In order: deliver it plus whatever it unblocked.
        let mut deliverable = vec![message];
        self.in_seq_no += 1;
        while let Some(payload) = self.pending.remove(&self.in_seq_no) {
            deliverable.push(payload);
            self.in_seq_no += 1;
        }

        InboundSecret::Deliver(deliverable)
    }

    /// Whether any out-of-order messages are waiting for the hole to
    /// fill.
    pub fn has_hole(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Gives up waiting for missing messages and delivers the earliest
    /// contiguous run of what did arrive, skipping the hole.
    pub fn heal_hole(&mut self) -> Vec<Vec<u8>> {
        let first = match self.pending.keys().next() {
            Some(&seq) => seq,
            None => return Vec::new(),
        };

        info!(
            "secret chat {}: giving up on messages {}..{}",
            self.chat_id, self.in_seq_no, first
        );

        self.in_seq_no = first;
        let mut deliverable = Vec::new();
        while let Some(payload) = self.pending.remove(&self.in_seq_no) {
            deliverable.push(payload);
            self.in_seq_no += 1;
        }
        deliverable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(is_creator: bool) -> SecretChat {
        let mut chat = SecretChat::new(7, 0xacce55, 10, if is_creator { 99 } else { 10 }, is_creator);
        chat.state = SecretChatState::Ok;
        chat
    }

    /// Raw out-sequence number as the *peer* of `c` would stamp it.
    fn peer_raw_out(c: &SecretChat, seq: i32) -> i32 {
        seq * 2 + if c.is_creator() { 0 } else { 1 }
    }

    /// Raw in-sequence number as the *peer* of `c` would report it.
    fn peer_raw_in(c: &SecretChat, seen_of_ours: i32) -> i32 {
        seen_of_ours * 2 + if c.is_creator() { 1 } else { 0 }
    }

    #[test]
    fn in_order_messages_are_delivered_and_advance() {
        let mut c = chat(false);

        let r = c.process_inbound(Some(peer_raw_in(&c, 0)), Some(peer_raw_out(&c, 0)), b"a".to_vec());
        assert_eq!(r, InboundSecret::Deliver(vec![b"a".to_vec()]));
        assert_eq!(c.in_seq_no, 1);

        let r = c.process_inbound(Some(peer_raw_in(&c, 0)), Some(peer_raw_out(&c, 1)), b"b".to_vec());
        assert_eq!(r, InboundSecret::Deliver(vec![b"b".to_vec()]));
        assert_eq!(c.in_seq_no, 2);
    }

    #[test]
    fn wrong_parity_is_dropped() {
        let mut c = chat(false);
        // Our own parity coming back at us.
        let ours = c.next_raw_out_seq_no();
        let r = c.process_inbound(Some(peer_raw_in(&c, 0)), Some(ours), b"a".to_vec());
        assert_eq!(r, InboundSecret::Dropped(SecretDropReason::BadParity));
        assert_eq!(c.in_seq_no, 0);
    }

    #[test]
    fn peer_claiming_unsent_messages_is_dropped() {
        let mut c = chat(false);
        assert_eq!(c.out_seq_no, 0);
        let r = c.process_inbound(Some(peer_raw_in(&c, 1)), Some(peer_raw_out(&c, 0)), b"a".to_vec());
        assert_eq!(r, InboundSecret::Dropped(SecretDropReason::InSeqNoAhead));
    }

    #[test]
    fn duplicates_are_dropped() {
        let mut c = chat(false);
        c.in_seq_no = 3;
        let r = c.process_inbound(Some(peer_raw_in(&c, 0)), Some(peer_raw_out(&c, 2)), b"a".to_vec());
        assert_eq!(r, InboundSecret::Dropped(SecretDropReason::Duplicate));
        assert_eq!(c.in_seq_no, 3);
    }

    #[test]
    fn hole_is_queued_until_the_missing_message_arrives() {
        let mut c = chat(true);
        c.in_seq_no = 5;

        // Message 6 arrives before message 5.
        let r = c.process_inbound(Some(peer_raw_in(&c, 0)), Some(peer_raw_out(&c, 6)), b"six".to_vec());
        assert_eq!(r, InboundSecret::Queued);
        assert!(c.has_hole());
        assert_eq!(c.in_seq_no, 5);

        let r = c.process_inbound(Some(peer_raw_in(&c, 0)), Some(peer_raw_out(&c, 5)), b"five".to_vec());
        assert_eq!(
            r,
            InboundSecret::Deliver(vec![b"five".to_vec(), b"six".to_vec()])
        );
        assert_eq!(c.in_seq_no, 7);
        assert!(!c.has_hole());
    }

    #[test]
    fn healing_skips_the_hole_and_delivers_the_prefix() {
        let mut c = chat(true);
        c.in_seq_no = 5;

        // 7 and 8 arrive; 5 and 6 never do.
        c.process_inbound(Some(peer_raw_in(&c, 0)), Some(peer_raw_out(&c, 7)), b"seven".to_vec());
        c.process_inbound(Some(peer_raw_in(&c, 0)), Some(peer_raw_out(&c, 8)), b"eight".to_vec());

        let healed = c.heal_hole();
        assert_eq!(healed, vec![b"seven".to_vec(), b"eight".to_vec()]);
        assert_eq!(c.in_seq_no, 9);
        assert!(!c.has_hole());
        assert!(c.heal_hole().is_empty());
    }

    #[test]
    fn pre_seq_no_chats_deliver_immediately() {
        let mut c = chat(false);
        c.sequence_mode = SequenceMode::PreSeqNo;
        let r = c.process_inbound(None, None, b"old".to_vec());
        assert_eq!(r, InboundSecret::Deliver(vec![b"old".to_vec()]));
        assert_eq!(c.in_seq_no, 0);
    }

    #[test]
    fn payload_round_trip_through_the_pair_key() {
        let mut c = chat(true);
        let mut key = [0u8; 256];
        key.iter_mut().enumerate().for_each(|(i, x)| *x = i as u8);
        c.set_key(key);

        // Frame a layer-17 payload the way the peer would.
        let mut inner = Vec::new();
        {
            use ferrogram_tl::Serializable;
            DECRYPTED_MESSAGE_LAYER.serialize(&mut inner);
            (&[0u8; 15][..]).serialize(&mut inner); // random_bytes
            17i32.serialize(&mut inner); // layer
            peer_raw_in(&c, 0).serialize(&mut inner);
            peer_raw_out(&c, 0).serialize(&mut inner);
            inner.extend(b"msg!");
        }

        let mut plaintext = Vec::new();
        plaintext.extend((inner.len() as i32).to_le_bytes());
        plaintext.extend(&inner);
        let msg_key = calc_msg_key(&plaintext);
        let pair_key = AuthKey::from_bytes(key);
        let (aes_key, aes_iv) = calc_key(&pair_key, &msg_key, Side::Client);

        let mut payload = Vec::new();
        payload.extend(c.key_fingerprint.to_le_bytes());
        payload.extend(msg_key);
        payload.extend(ferrogram_crypto::encrypt_ige(&plaintext, &aes_key, &aes_iv));

        let parsed = c.decrypt_payload(&payload).unwrap();
        assert_eq!(parsed.layer, Some(17));
        assert_eq!(parsed.raw_out_seq_no, Some(peer_raw_out(&c, 0)));
        assert_eq!(parsed.message, b"msg!");

        // And a wrong fingerprint must be rejected.
        let mut bad = payload.clone();
        bad[0] ^= 1;
        assert!(matches!(
            c.decrypt_payload(&bad),
            Err(SecretChatError::KeyFingerprintMismatch { .. })
        ));
    }
}
