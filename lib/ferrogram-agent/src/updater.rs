// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The update-consistency engine: applies server-pushed updates against
//! the `(pts, qts, seq, date)` counters, detects duplicates and gaps,
//! and recovers missed updates through `updates.getDifference`.
//!
//! The rules per update carrying `(pts, pts_count)`:
//!
//! * reported ≤ current: a duplicate, dropped;
//! * reported > current + count: a gap, triggering a difference;
//! * reported = current + count: applied, advancing the counter.
//!
//! While a difference is being fetched, other inbound updates are
//! dropped; the difference response itself re-delivers them.
use crate::user_agent::UserAgent;
use ferrogram_tl::{self as tl, Deserializable};
use log::{debug, info, warn};

/// How many messages a channel difference may return at once.
const CHANNEL_DIFF_LIMIT: i32 = 100;

/// Inbound dispatch.
impl UserAgent {
    /// A serialized member of the updates family arrived on a session.
    pub(crate) fn on_updates_bytes(&mut self, dc_id: i32, body: Vec<u8>) {
        match tl::enums::Updates::from_bytes(&body) {
            Ok(updates) => self.process_updates(updates),
            Err(err) => {
                // An unknown or malformed update is fatal only for this
                // frame; whatever it carried will come back through the
                // difference.
                warn!("undecodable update from dc {}: {}", dc_id, err);
                if self.is_logged_in() {
                    self.begin_get_difference();
                }
            }
        }
    }

    pub(crate) fn process_updates(&mut self, updates: tl::enums::Updates) {
        match updates {
            tl::enums::Updates::TooLong(_) => {
                info!("server reports too many updates; getting difference");
                self.begin_get_difference();
            }
            tl::enums::Updates::UpdateShort(short) => {
                self.apply_update(short.update, true);
                self.bump_date(short.date);
            }
            tl::enums::Updates::UpdateShortMessage(short) => {
                if self.check_pts(short.pts, short.pts_count) {
                    let message = self.message_from_short(&short);
                    self.callback.new_messages(&[message]);
                    self.bump_date(short.date);
                }
            }
            tl::enums::Updates::UpdateShortChatMessage(short) => {
                if self.check_pts(short.pts, short.pts_count) {
                    let message = self.message_from_short_chat(&short);
                    self.callback.new_messages(&[message]);
                    self.bump_date(short.date);
                }
            }
            tl::enums::Updates::UpdateShortSentMessage(short) => {
                // The content belongs to the request that produced it;
                // only the counters matter here.
                let _ = self.check_pts(short.pts, short.pts_count);
            }
            tl::enums::Updates::Combined(combined) => {
                if !self.check_seq(combined.seq_start, combined.seq, combined.date) {
                    return;
                }
                self.harvest_access_hashes(&combined.chats);
                for update in combined.updates {
                    self.apply_update(update, true);
                }
            }
            tl::enums::Updates::Updates(updates) => {
                if !self.check_seq(updates.seq, updates.seq, updates.date) {
                    return;
                }
                self.harvest_access_hashes(&updates.chats);
                for update in updates.updates {
                    self.apply_update(update, true);
                }
            }
        }
    }

    /// Applies a single update. With `check` set the consistency rules
    /// run first; a difference response re-applies its content with the
    /// checks off, because the counters jump to the returned state.
    pub(crate) fn apply_update(&mut self, update: tl::enums::Update, check: bool) {
        use tl::enums::Update;

        match update {
            Update::ChannelTooLong(u) => {
                self.begin_get_channel_difference(u.channel_id);
            }
            Update::NewMessage(u) => {
                if !check || self.check_pts(u.pts, u.pts_count) {
                    self.callback.new_messages(&[u.message]);
                }
            }
            Update::DeleteMessages(u) => {
                if !check || self.check_pts(u.pts, u.pts_count) {
                    self.callback.message_deleted(&u.messages, None);
                }
            }
            Update::ReadHistoryInbox(u) => {
                if !check || self.check_pts(u.pts, u.pts_count) {
                    self.callback.mark_messages_read(false, &u.peer, u.max_id);
                }
            }
            Update::ReadHistoryOutbox(u) => {
                if !check || self.check_pts(u.pts, u.pts_count) {
                    self.callback.mark_messages_read(true, &u.peer, u.max_id);
                }
            }
            Update::ReadMessagesContents(u) => {
                // Only the counter matters to the engine.
                let _ = !check || self.check_pts(u.pts, u.pts_count);
            }
            Update::WebPage(u) => {
                if !check || self.check_pts(u.pts, u.pts_count) {
                    self.callback.message_media_webpage_updated(&u.webpage);
                }
            }
            Update::NewEncryptedMessage(u) => {
                if !check || self.check_qts(u.qts) {
                    self.dispatch_encrypted_message(u.message);
                }
            }
            Update::NewChannelMessage(u) => {
                let channel_id = channel_id_of_message(&u.message);
                let applies = match (check, channel_id) {
                    (false, _) => true,
                    (true, Some(id)) => self.check_channel_pts(id, u.pts, u.pts_count),
                    (true, None) => true,
                };
                if applies {
                    self.callback.new_messages(&[u.message]);
                }
            }
            Update::DeleteChannelMessages(u) => {
                if !check || self.check_channel_pts(u.channel_id, u.pts, u.pts_count) {
                    self.callback
                        .message_deleted(&u.messages, Some(u.channel_id));
                }
            }
            Update::ReadChannelInbox(u) => {
                let peer = tl::enums::Peer::Channel(tl::types::PeerChannel {
                    channel_id: u.channel_id,
                });
                self.callback.mark_messages_read(false, &peer, u.max_id);
            }
            Update::MessageId(u) => {
                self.callback.message_id_updated(u.random_id, u.id);
            }
            Update::UserTyping(u) => {
                self.callback.typing_status_changed(u.user_id, None, &u.action);
            }
            Update::ChatUserTyping(u) => {
                self.callback
                    .typing_status_changed(u.user_id, Some(u.chat_id), &u.action);
            }
            Update::UserStatus(u) => {
                self.callback.status_notification(u.user_id, &u.status);
            }
            Update::UserPhoto(u) => {
                self.callback.avatar_update(u.user_id);
            }
            Update::ChatParticipants(u) => {
                self.callback.chat_update_participants(&u.participants);
            }
            Update::NotifySettings(u) => {
                self.callback
                    .update_notification_settings(&u.peer, &u.notify_settings);
            }
            Update::Encryption(u) => {
                self.on_encryption_update(u.chat, u.date);
            }
            Update::EncryptedChatTyping(u) => {
                if let Some(chat) = self.secret_chats.get(&u.chat_id) {
                    let user_id = chat.user_id;
                    let action =
                        tl::enums::SendMessageAction::Typing(tl::types::SendMessageTypingAction {});
                    self.callback
                        .typing_status_changed(user_id, Some(u.chat_id), &action);
                }
            }
            Update::EncryptedMessagesRead(u) => {
                if let Some(chat) = self.secret_chats.get(&u.chat_id) {
                    let peer = tl::enums::Peer::User(tl::types::PeerUser {
                        user_id: chat.user_id,
                    });
                    self.callback.mark_messages_read(true, &peer, u.max_date);
                }
            }
            Update::DcOptions(u) => {
                self.apply_dc_options(&u.dc_options);
            }
            Update::UserName(_)
            | Update::ChatParticipantAdd(_)
            | Update::ChatParticipantDelete(_)
            | Update::Channel(_)
            | Update::ChannelMessageViews(_) => {
                // Known, but nothing for the engine or its callbacks.
            }
        }
    }

    fn dispatch_encrypted_message(&mut self, message: tl::enums::EncryptedMessage) {
        let (chat_id, bytes) = match message {
            tl::enums::EncryptedMessage::Message(m) => (m.chat_id, m.bytes),
            tl::enums::EncryptedMessage::Service(m) => (m.chat_id, m.bytes),
        };
        self.on_secret_message(chat_id, &bytes);
    }

    /// Remembers channel access hashes seen in update containers; the
    /// channel-difference request needs them.
    pub(crate) fn harvest_access_hashes(&mut self, chats: &[tl::enums::Chat]) {
        for chat in chats {
            if let tl::enums::Chat::Channel(channel) = chat {
                if let Some(hash) = channel.access_hash {
                    self.channel_access_hashes.insert(channel.id, hash);
                }
            }
        }
    }

    // Counter checks
    // ========================================

    fn check_pts(&mut self, pts: i32, pts_count: i32) -> bool {
        if pts == 0 {
            // No ordering information; apply in arrival order.
            return true;
        }
        if self.diff_locked {
            debug!("dropping pts {} while difference is locked", pts);
            return false;
        }

        if pts <= self.pts {
            debug!("duplicate update (local {}, remote {})", self.pts, pts);
            false
        } else if pts > self.pts + pts_count {
            info!(
                "update gap (local {}, count {}, remote {})",
                self.pts, pts_count, pts
            );
            self.begin_get_difference();
            false
        } else {
            self.pts = pts;
            self.callback.pts_changed(pts);
            true
        }
    }

    fn check_qts(&mut self, qts: i32) -> bool {
        if qts == 0 {
            return true;
        }
        if self.diff_locked {
            debug!("dropping qts {} while difference is locked", qts);
            return false;
        }

        if qts <= self.qts {
            debug!("duplicate secret update (local {}, remote {})", self.qts, qts);
            false
        } else if qts > self.qts + 1 {
            info!("secret update gap (local {}, remote {})", self.qts, qts);
            self.begin_get_difference();
            false
        } else {
            self.qts = qts;
            self.callback.qts_changed(qts);
            true
        }
    }

    fn check_seq(&mut self, seq_start: i32, seq: i32, date: i32) -> bool {
        // A zero seq means the container's order does not matter.
        if seq_start == 0 {
            return true;
        }
        if self.diff_locked {
            return false;
        }

        if seq_start <= self.seq {
            debug!("duplicate container (local seq {}, remote {})", self.seq, seq_start);
            false
        } else if seq_start > self.seq + 1 {
            info!(
                "container gap (local seq {}, remote {})",
                self.seq, seq_start
            );
            self.begin_get_difference();
            false
        } else {
            self.seq = seq;
            self.bump_date(date);
            true
        }
    }

    fn check_channel_pts(&mut self, channel_id: i32, pts: i32, pts_count: i32) -> bool {
        if pts == 0 {
            return true;
        }
        if self.channel_diff_locked.contains(&channel_id) {
            return false;
        }

        let local = match self.channel_pts.get(&channel_id) {
            Some(&local) => local,
            None => {
                // First sighting; whatever the server says is right.
                self.channel_pts.insert(channel_id, pts);
                return true;
            }
        };

        if pts <= local {
            debug!(
                "duplicate channel {} update (local {}, remote {})",
                channel_id, local, pts
            );
            false
        } else if pts > local + pts_count {
            info!(
                "channel {} gap (local {}, count {}, remote {})",
                channel_id, local, pts_count, pts
            );
            self.begin_get_channel_difference(channel_id);
            false
        } else {
            self.channel_pts.insert(channel_id, pts);
            true
        }
    }

    fn bump_date(&mut self, date: i32) {
        if date != 0 && date > self.date {
            self.date = date;
            self.callback.date_changed(date);
        }
    }

    // Difference recovery
    // ========================================

    /// Starts recovering the account-wide update gap, unless a recovery
    /// is already running.
    pub(crate) fn begin_get_difference(&mut self) {
        if self.diff_locked || !self.is_logged_in() {
            return;
        }
        self.diff_locked = true;

        let request = tl::functions::updates::GetDifference {
            pts: self.pts,
            date: self.date,
            qts: self.qts,
        };
        debug!(
            "getting difference from pts {}, qts {}, date {}",
            self.pts, self.qts, self.date
        );
        self.invoke(&request, |agent, result| match result {
            Ok(difference) => agent.apply_difference(difference),
            Err(error) => {
                warn!("updates.getDifference failed: {}", error);
                agent.diff_locked = false;
            }
        });
    }

    fn apply_difference(&mut self, difference: tl::enums::updates::Difference) {
        match difference {
            tl::enums::updates::Difference::Empty(empty) => {
                debug!("difference is empty (seq {})", empty.seq);
                self.seq = empty.seq;
                self.bump_date(empty.date);
                self.diff_locked = false;
            }
            tl::enums::updates::Difference::Difference(diff) => {
                let state = diff.state.clone();
                self.apply_difference_contents(
                    diff.new_messages,
                    diff.new_encrypted_messages,
                    diff.other_updates,
                    diff.chats,
                );
                self.adopt_state(state);
                self.diff_locked = false;
                debug!("difference applied; pts is now {}", self.pts);
            }
            tl::enums::updates::Difference::Slice(slice) => {
                let state = slice.intermediate_state.clone();
                self.apply_difference_contents(
                    slice.new_messages,
                    slice.new_encrypted_messages,
                    slice.other_updates,
                    slice.chats,
                );
                self.adopt_state(state);
                debug!("partial difference applied; continuing from {}", self.pts);

                // More is waiting; ask again from the new state.
                let request = tl::functions::updates::GetDifference {
                    pts: self.pts,
                    date: self.date,
                    qts: self.qts,
                };
                self.invoke(&request, |agent, result| match result {
                    Ok(difference) => agent.apply_difference(difference),
                    Err(error) => {
                        warn!("updates.getDifference failed: {}", error);
                        agent.diff_locked = false;
                    }
                });
            }
        }
    }

    fn apply_difference_contents(
        &mut self,
        new_messages: Vec<tl::enums::Message>,
        new_encrypted_messages: Vec<tl::enums::EncryptedMessage>,
        other_updates: Vec<tl::enums::Update>,
        chats: Vec<tl::enums::Chat>,
    ) {
        self.harvest_access_hashes(&chats);

        // The difference is authoritative: its contents are applied in
        // order with the per-update consistency checks disabled.
        for update in other_updates {
            self.apply_update(update, false);
        }
        if !new_messages.is_empty() {
            self.callback.new_messages(&new_messages);
        }
        for message in new_encrypted_messages {
            self.dispatch_encrypted_message(message);
        }
    }

    fn adopt_state(&mut self, state: tl::enums::updates::State) {
        let tl::enums::updates::State::State(state) = state;
        self.pts = state.pts;
        self.qts = state.qts;
        self.seq = state.seq;
        self.callback.pts_changed(state.pts);
        self.callback.qts_changed(state.qts);
        self.bump_date(state.date);
    }

    // Channel difference
    // ========================================

    pub(crate) fn begin_get_channel_difference(&mut self, channel_id: i32) {
        if self.channel_diff_locked.contains(&channel_id) || !self.is_logged_in() {
            return;
        }
        let access_hash = match self.channel_access_hashes.get(&channel_id) {
            Some(&hash) => hash,
            None => {
                // Without the hash the request cannot be made; drop the
                // stale pts so the next update re-seeds it.
                warn!(
                    "cannot get difference for channel {}: unknown access hash",
                    channel_id
                );
                self.channel_pts.remove(&channel_id);
                return;
            }
        };
        let pts = match self.channel_pts.get(&channel_id) {
            Some(&pts) => pts,
            None => return,
        };

        self.channel_diff_locked.insert(channel_id);
        let request = tl::functions::updates::GetChannelDifference {
            channel: tl::enums::InputChannel::Channel(tl::types::InputChannel {
                channel_id,
                access_hash,
            }),
            filter: tl::enums::ChannelMessagesFilter::Empty(
                tl::types::ChannelMessagesFilterEmpty {},
            ),
            pts,
            limit: CHANNEL_DIFF_LIMIT,
        };
        debug!("getting channel {} difference from pts {}", channel_id, pts);
        self.invoke(&request, move |agent, result| match result {
            Ok(difference) => agent.apply_channel_difference(channel_id, difference),
            Err(error) => {
                warn!("updates.getChannelDifference failed: {}", error);
                agent.channel_diff_locked.remove(&channel_id);
            }
        });
    }

    fn apply_channel_difference(
        &mut self,
        channel_id: i32,
        difference: tl::enums::updates::ChannelDifference,
    ) {
        match difference {
            tl::enums::updates::ChannelDifference::Empty(empty) => {
                self.channel_pts.insert(channel_id, empty.pts);
                self.channel_diff_locked.remove(&channel_id);
            }
            tl::enums::updates::ChannelDifference::TooLong(too_long) => {
                // Too much history was missed for an incremental fix;
                // adopt the head position and let the host re-fetch.
                info!("channel {} difference is too long", channel_id);
                self.harvest_access_hashes(&too_long.chats);
                self.channel_pts.insert(channel_id, too_long.pts);
                self.channel_diff_locked.remove(&channel_id);
            }
            tl::enums::updates::ChannelDifference::Difference(diff) => {
                self.harvest_access_hashes(&diff.chats);
                for update in diff.other_updates {
                    self.apply_update(update, false);
                }
                if !diff.new_messages.is_empty() {
                    self.callback.new_messages(&diff.new_messages);
                }
                self.channel_pts.insert(channel_id, diff.pts);
                if diff.r#final {
                    self.channel_diff_locked.remove(&channel_id);
                } else {
                    self.channel_diff_locked.remove(&channel_id);
                    self.begin_get_channel_difference(channel_id);
                }
            }
        }
    }

    // Short-message adaptors
    // ========================================

    fn message_from_short(&self, short: &tl::types::UpdateShortMessage) -> tl::enums::Message {
        let (from_id, peer) = if short.out {
            (self.our_id, short.user_id)
        } else {
            (short.user_id, self.our_id)
        };
        tl::enums::Message::Message(tl::types::Message {
            out: short.out,
            mentioned: short.mentioned,
            media_unread: short.media_unread,
            silent: short.silent,
            post: false,
            id: short.id,
            from_id: Some(from_id),
            to_id: tl::enums::Peer::User(tl::types::PeerUser { user_id: peer }),
            fwd_from: short.fwd_from.clone(),
            via_bot_id: short.via_bot_id,
            reply_to_msg_id: short.reply_to_msg_id,
            date: short.date,
            message: short.message.clone(),
            media: None,
            reply_markup: None,
            entities: short.entities.clone(),
            views: None,
            edit_date: None,
        })
    }

    fn message_from_short_chat(
        &self,
        short: &tl::types::UpdateShortChatMessage,
    ) -> tl::enums::Message {
        tl::enums::Message::Message(tl::types::Message {
            out: short.out,
            mentioned: short.mentioned,
            media_unread: short.media_unread,
            silent: short.silent,
            post: false,
            id: short.id,
            from_id: Some(short.from_id),
            to_id: tl::enums::Peer::Chat(tl::types::PeerChat {
                chat_id: short.chat_id,
            }),
            fwd_from: short.fwd_from.clone(),
            via_bot_id: short.via_bot_id,
            reply_to_msg_id: short.reply_to_msg_id,
            date: short.date,
            message: short.message.clone(),
            media: None,
            reply_markup: None,
            entities: short.entities.clone(),
            views: None,
            edit_date: None,
        })
    }
}

/// The channel a message belongs to, when it belongs to one.
fn channel_id_of_message(message: &tl::enums::Message) -> Option<i32> {
    let to_id = match message {
        tl::enums::Message::Message(m) => &m.to_id,
        tl::enums::Message::Service(m) => &m.to_id,
        tl::enums::Message::Empty(_) => return None,
    };
    match to_id {
        tl::enums::Peer::Channel(peer) => Some(peer.channel_id),
        _ => None,
    }
}
