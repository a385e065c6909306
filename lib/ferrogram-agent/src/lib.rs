// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The client engine on top of the wire protocol: per-DC clients with
//! their handshakes and sessions, the query lifecycle, the
//! update-consistency counters, and secret chats.
//!
//! The engine is single-threaded and performs no I/O or timekeeping of
//! its own. A host embeds it by implementing four small traits —
//! [`Connection`]/[`ConnectionFactory`] for sockets, [`TimerQueue`] for
//! timers, [`Clock`] for time, and [`Callback`] for notifications — and
//! then drives [`UserAgent`] by calling
//! [`UserAgent::on_network_event`] and [`UserAgent::handle_timer`] from
//! its event loop.

#![deny(unsafe_code)]

mod callback;
mod client;
mod config;
pub mod dcs;
mod net;
mod query;
pub mod secret_chat;
mod session;
mod storage;
mod timers;
mod updater;
mod user_agent;

pub use callback::{Callback, NoopCallback, Value, ValueRequest};
pub use client::DcPersistedState;
pub use config::{Configuration, DEFAULT_TEMP_KEY_EXPIRY_SECONDS};
pub use net::{Connection, ConnectionFactory, ConnectionStatus, Endpoint};
pub use query::{ExecutionOption, QueryId};
pub use secret_chat::SecretChat;
pub use storage::{MemoryUnconfirmedStorage, UnconfirmedSecretMessageStorage};
pub use timers::{Clock, ManualTimerQueue, StepClock, SystemClock, TimerQueue, TimerToken};
pub use user_agent::{AgentPersistedState, InvocationError, InvocationResult, UserAgent};
