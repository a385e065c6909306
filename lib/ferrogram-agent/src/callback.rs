// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Notifications from the engine to the host.
use crate::net::ConnectionStatus;
use crate::secret_chat::SecretChat;
use crate::DcPersistedState;
use ferrogram_tl as tl;

/// Values the engine may ask the host for during login.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueRequest {
    /// The phone number to sign in with.
    PhoneNumber,

    /// The login code the user received.
    LoginCode,

    /// The two-factor cloud password.
    Password { hint: String },

    /// First and last name, for accounts that do not exist yet.
    RegisterInfo,
}

/// The host's answer to a [`ValueRequest`], delivered through
/// [`crate::UserAgent::provide_value`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    PhoneNumber(String),
    LoginCode(String),
    Password(String),
    RegisterInfo {
        first_name: String,
        last_name: String,
    },
}

/// Everything the engine tells its host. All methods default to doing
/// nothing so hosts only override what they care about.
///
/// Callbacks always run on the engine's loop; hosts must not re-enter
/// the engine from inside one. Anything they want done in reaction is
/// queued and performed on return.
#[allow(unused_variables)]
pub trait Callback {
    /// The persistent state of a DC changed and should be saved.
    fn dc_updated(&mut self, state: &DcPersistedState) {}

    fn active_dc_changed(&mut self, dc_id: i32) {}

    /// The id of the logged-in user became known.
    fn our_id(&mut self, id: i32) {}

    fn pts_changed(&mut self, pts: i32) {}

    fn qts_changed(&mut self, qts: i32) {}

    fn date_changed(&mut self, date: i32) {}

    fn connection_status_changed(&mut self, dc_id: i32, status: ConnectionStatus) {}

    fn new_messages(&mut self, messages: &[tl::enums::Message]) {}

    /// A fully reassembled secret-chat payload, still serialized under
    /// the chat's own layer.
    fn new_secret_message(&mut self, chat_id: i32, payload: &[u8]) {}

    /// The server assigned a definitive id to a message we sent.
    fn message_id_updated(&mut self, random_id: i64, server_id: i32) {}

    fn message_deleted(&mut self, ids: &[i32], channel_id: Option<i32>) {}

    /// `outgoing` tells which side's history was read, up to `max_id`.
    fn mark_messages_read(&mut self, outgoing: bool, peer: &tl::enums::Peer, max_id: i32) {}

    fn typing_status_changed(
        &mut self,
        user_id: i32,
        chat_id: Option<i32>,
        action: &tl::enums::SendMessageAction,
    ) {
    }

    fn status_notification(&mut self, user_id: i32, status: &tl::enums::UserStatus) {}

    fn avatar_update(&mut self, user_id: i32) {}

    fn chat_update_participants(&mut self, participants: &tl::enums::ChatParticipants) {}

    fn secret_chat_update(&mut self, chat: &SecretChat) {}

    fn update_notification_settings(
        &mut self,
        peer: &tl::enums::NotifyPeer,
        settings: &tl::enums::PeerNotifySettings,
    ) {
    }

    fn message_media_webpage_updated(&mut self, webpage: &tl::enums::WebPage) {}

    /// The engine needs a value from the user to continue logging in.
    /// The host answers asynchronously via
    /// [`crate::UserAgent::provide_value`].
    fn get_value(&mut self, request: ValueRequest) {}
}

/// A [`Callback`] that ignores every notification.
pub struct NoopCallback;

impl Callback for NoopCallback {}
