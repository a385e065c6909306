// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Hand-maintained schema subset, laid out the way a code generator
//! would: one `struct` per constructor in [`types`], one `enum` per boxed
//! type in [`enums`], and the requests in [`functions`]. Definitions are
//! quoted in each item's documentation.
pub mod enums;
pub mod functions;
pub mod types;

/// The schema layer the definitions in this module were taken from.
pub const LAYER: i32 = 45;

/// Best-effort name for a constructor identifier, for logging purposes.
pub fn name_for_id(id: u32) -> &'static str {
    use crate::Identifiable;

    match id {
        types::ResPq::CONSTRUCTOR_ID => "resPQ",
        types::ServerDhParamsOk::CONSTRUCTOR_ID => "server_DH_params_ok",
        types::ServerDhParamsFail::CONSTRUCTOR_ID => "server_DH_params_fail",
        types::DhGenOk::CONSTRUCTOR_ID => "dh_gen_ok",
        types::DhGenRetry::CONSTRUCTOR_ID => "dh_gen_retry",
        types::DhGenFail::CONSTRUCTOR_ID => "dh_gen_fail",
        types::RpcError::CONSTRUCTOR_ID => "rpc_error",
        types::Pong::CONSTRUCTOR_ID => "pong",
        types::NewSessionCreated::CONSTRUCTOR_ID => "new_session_created",
        types::MsgsAck::CONSTRUCTOR_ID => "msgs_ack",
        types::BadMsgNotification::CONSTRUCTOR_ID => "bad_msg_notification",
        types::BadServerSalt::CONSTRUCTOR_ID => "bad_server_salt",
        types::MsgDetailedInfo::CONSTRUCTOR_ID => "msg_detailed_info",
        types::MsgNewDetailedInfo::CONSTRUCTOR_ID => "msg_new_detailed_info",
        types::FutureSalts::CONSTRUCTOR_ID => "future_salts",
        types::Config::CONSTRUCTOR_ID => "config",
        types::UpdatesTooLong::CONSTRUCTOR_ID => "updatesTooLong",
        types::UpdateShort::CONSTRUCTOR_ID => "updateShort",
        types::UpdateShortMessage::CONSTRUCTOR_ID => "updateShortMessage",
        types::UpdateShortChatMessage::CONSTRUCTOR_ID => "updateShortChatMessage",
        types::UpdateShortSentMessage::CONSTRUCTOR_ID => "updateShortSentMessage",
        types::UpdatesCombined::CONSTRUCTOR_ID => "updatesCombined",
        types::Updates::CONSTRUCTOR_ID => "updates",
        functions::ReqPq::CONSTRUCTOR_ID => "req_pq",
        functions::ReqDhParams::CONSTRUCTOR_ID => "req_DH_params",
        functions::SetClientDhParams::CONSTRUCTOR_ID => "set_client_DH_params",
        functions::Ping::CONSTRUCTOR_ID => "ping",
        functions::PingDelayDisconnect::CONSTRUCTOR_ID => "ping_delay_disconnect",
        functions::auth::BindTempAuthKey::CONSTRUCTOR_ID => "auth.bindTempAuthKey",
        functions::auth::ExportAuthorization::CONSTRUCTOR_ID => "auth.exportAuthorization",
        functions::auth::ImportAuthorization::CONSTRUCTOR_ID => "auth.importAuthorization",
        functions::auth::SignIn::CONSTRUCTOR_ID => "auth.signIn",
        functions::auth::SignUp::CONSTRUCTOR_ID => "auth.signUp",
        functions::auth::SendCode::CONSTRUCTOR_ID => "auth.sendCode",
        functions::auth::CheckPassword::CONSTRUCTOR_ID => "auth.checkPassword",
        functions::auth::LogOut::CONSTRUCTOR_ID => "auth.logOut",
        functions::account::GetPassword::CONSTRUCTOR_ID => "account.getPassword",
        functions::help::GetConfig::CONSTRUCTOR_ID => "help.getConfig",
        functions::updates::GetState::CONSTRUCTOR_ID => "updates.getState",
        functions::updates::GetDifference::CONSTRUCTOR_ID => "updates.getDifference",
        functions::updates::GetChannelDifference::CONSTRUCTOR_ID => "updates.getChannelDifference",
        functions::messages::GetDhConfig::CONSTRUCTOR_ID => "messages.getDhConfig",
        functions::messages::SendEncrypted::CONSTRUCTOR_ID => "messages.sendEncrypted",
        functions::messages::SendEncryptedService::CONSTRUCTOR_ID => "messages.sendEncryptedService",
        functions::messages::RequestEncryption::CONSTRUCTOR_ID => "messages.requestEncryption",
        functions::messages::AcceptEncryption::CONSTRUCTOR_ID => "messages.acceptEncryption",
        functions::messages::DiscardEncryption::CONSTRUCTOR_ID => "messages.discardEncryption",
        _ => "(unknown)",
    }
}
