// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Requests the engine is able to perform. Only client-to-server
//! serialization is implemented for these.
use crate::{enums, Identifiable, RemoteCall, Serializable};

/// `req_pq#60469778 nonce:int128 = ResPQ;`
#[derive(Clone, Debug, PartialEq)]
pub struct ReqPq {
    pub nonce: [u8; 16],
}

impl Identifiable for ReqPq {
    const CONSTRUCTOR_ID: u32 = 0x60469778;
}

impl Serializable for ReqPq {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.nonce.serialize(buf);
    }
}

impl RemoteCall for ReqPq {
    type Return = enums::ResPq;
}

/// `req_DH_params#d712e4be nonce:int128 server_nonce:int128 p:bytes q:bytes public_key_fingerprint:long encrypted_data:bytes = Server_DH_Params;`
#[derive(Clone, Debug, PartialEq)]
pub struct ReqDhParams {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub public_key_fingerprint: i64,
    pub encrypted_data: Vec<u8>,
}

impl Identifiable for ReqDhParams {
    const CONSTRUCTOR_ID: u32 = 0xd712e4be;
}

impl Serializable for ReqDhParams {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.p.serialize(buf);
        self.q.serialize(buf);
        self.public_key_fingerprint.serialize(buf);
        self.encrypted_data.serialize(buf);
    }
}

impl RemoteCall for ReqDhParams {
    type Return = enums::ServerDhParams;
}

/// `set_client_DH_params#f5045f1f nonce:int128 server_nonce:int128 encrypted_data:bytes = Set_client_DH_params_answer;`
#[derive(Clone, Debug, PartialEq)]
pub struct SetClientDhParams {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub encrypted_data: Vec<u8>,
}

impl Identifiable for SetClientDhParams {
    const CONSTRUCTOR_ID: u32 = 0xf5045f1f;
}

impl Serializable for SetClientDhParams {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.encrypted_data.serialize(buf);
    }
}

impl RemoteCall for SetClientDhParams {
    type Return = enums::SetClientDhParamsAnswer;
}

/// `rpc_drop_answer#58e4a740 req_msg_id:long = RpcDropAnswer;`
#[derive(Clone, Debug, PartialEq)]
pub struct RpcDropAnswer {
    pub req_msg_id: i64,
}

impl Identifiable for RpcDropAnswer {
    const CONSTRUCTOR_ID: u32 = 0x58e4a740;
}

impl Serializable for RpcDropAnswer {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.req_msg_id.serialize(buf);
    }
}

impl RemoteCall for RpcDropAnswer {
    type Return = enums::RpcDropAnswer;
}

/// `get_future_salts#b921bd04 num:int = FutureSalts;`
#[derive(Clone, Debug, PartialEq)]
pub struct GetFutureSalts {
    pub num: i32,
}

impl Identifiable for GetFutureSalts {
    const CONSTRUCTOR_ID: u32 = 0xb921bd04;
}

impl Serializable for GetFutureSalts {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.num.serialize(buf);
    }
}

impl RemoteCall for GetFutureSalts {
    type Return = enums::FutureSalts;
}

/// `ping#7abe77ec ping_id:long = Pong;`
#[derive(Clone, Debug, PartialEq)]
pub struct Ping {
    pub ping_id: i64,
}

impl Identifiable for Ping {
    const CONSTRUCTOR_ID: u32 = 0x7abe77ec;
}

impl Serializable for Ping {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.ping_id.serialize(buf);
    }
}

impl RemoteCall for Ping {
    type Return = enums::Pong;
}

/// `ping_delay_disconnect#f3427b8c ping_id:long disconnect_delay:int = Pong;`
#[derive(Clone, Debug, PartialEq)]
pub struct PingDelayDisconnect {
    pub ping_id: i64,
    pub disconnect_delay: i32,
}

impl Identifiable for PingDelayDisconnect {
    const CONSTRUCTOR_ID: u32 = 0xf3427b8c;
}

impl Serializable for PingDelayDisconnect {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.ping_id.serialize(buf);
        self.disconnect_delay.serialize(buf);
    }
}

impl RemoteCall for PingDelayDisconnect {
    type Return = enums::Pong;
}

/// `destroy_session#e7512126 session_id:long = DestroySessionRes;`
#[derive(Clone, Debug, PartialEq)]
pub struct DestroySession {
    pub session_id: i64,
}

impl Identifiable for DestroySession {
    const CONSTRUCTOR_ID: u32 = 0xe7512126;
}

impl Serializable for DestroySession {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.session_id.serialize(buf);
    }
}

impl RemoteCall for DestroySession {
    type Return = enums::DestroySessionRes;
}

/// `invokeWithLayer#da9b0d0d {X:Type} layer:int query:!X = X;`
#[derive(Clone, Debug, PartialEq)]
pub struct InvokeWithLayer<X: RemoteCall> {
    pub layer: i32,
    pub query: X,
}

impl<X: RemoteCall> Identifiable for InvokeWithLayer<X> {
    const CONSTRUCTOR_ID: u32 = 0xda9b0d0d;
}

impl<X: RemoteCall> Serializable for InvokeWithLayer<X> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.layer.serialize(buf);
        self.query.serialize(buf);
    }
}

impl<X: RemoteCall> RemoteCall for InvokeWithLayer<X> {
    type Return = X::Return;
}

/// `initConnection#69796de9 {X:Type} api_id:int device_model:string system_version:string app_version:string lang_code:string query:!X = X;`
#[derive(Clone, Debug, PartialEq)]
pub struct InitConnection<X: RemoteCall> {
    pub api_id: i32,
    pub device_model: String,
    pub system_version: String,
    pub app_version: String,
    pub lang_code: String,
    pub query: X,
}

impl<X: RemoteCall> Identifiable for InitConnection<X> {
    const CONSTRUCTOR_ID: u32 = 0x69796de9;
}

impl<X: RemoteCall> Serializable for InitConnection<X> {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        Self::CONSTRUCTOR_ID.serialize(buf);
        self.api_id.serialize(buf);
        self.device_model.serialize(buf);
        self.system_version.serialize(buf);
        self.app_version.serialize(buf);
        self.lang_code.serialize(buf);
        self.query.serialize(buf);
    }
}

impl<X: RemoteCall> RemoteCall for InitConnection<X> {
    type Return = X::Return;
}

pub mod auth {
    use crate::{enums, Identifiable, RemoteCall, Serializable};

    /// `auth.bindTempAuthKey#cdd42a05 perm_auth_key_id:long nonce:long expires_at:int encrypted_message:bytes = Bool;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct BindTempAuthKey {
        pub perm_auth_key_id: i64,
        pub nonce: i64,
        pub expires_at: i32,
        pub encrypted_message: Vec<u8>,
    }

    impl Identifiable for BindTempAuthKey {
        const CONSTRUCTOR_ID: u32 = 0xcdd42a05;
    }

    impl Serializable for BindTempAuthKey {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.perm_auth_key_id.serialize(buf);
            self.nonce.serialize(buf);
            self.expires_at.serialize(buf);
            self.encrypted_message.serialize(buf);
        }
    }

    impl RemoteCall for BindTempAuthKey {
        type Return = bool;
    }

    /// `auth.exportAuthorization#e5bfffcd dc_id:int = auth.ExportedAuthorization;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct ExportAuthorization {
        pub dc_id: i32,
    }

    impl Identifiable for ExportAuthorization {
        const CONSTRUCTOR_ID: u32 = 0xe5bfffcd;
    }

    impl Serializable for ExportAuthorization {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.dc_id.serialize(buf);
        }
    }

    impl RemoteCall for ExportAuthorization {
        type Return = enums::auth::ExportedAuthorization;
    }

    /// `auth.importAuthorization#e3ef9613 id:int bytes:bytes = auth.Authorization;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct ImportAuthorization {
        pub id: i32,
        pub bytes: Vec<u8>,
    }

    impl Identifiable for ImportAuthorization {
        const CONSTRUCTOR_ID: u32 = 0xe3ef9613;
    }

    impl Serializable for ImportAuthorization {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.id.serialize(buf);
            self.bytes.serialize(buf);
        }
    }

    impl RemoteCall for ImportAuthorization {
        type Return = enums::auth::Authorization;
    }

    /// `auth.sendCode#768d5f4d phone_number:string sms_type:int api_id:int api_hash:string lang_code:string = auth.SentCode;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct SendCode {
        pub phone_number: String,
        pub sms_type: i32,
        pub api_id: i32,
        pub api_hash: String,
        pub lang_code: String,
    }

    impl Identifiable for SendCode {
        const CONSTRUCTOR_ID: u32 = 0x768d5f4d;
    }

    impl Serializable for SendCode {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.phone_number.serialize(buf);
            self.sms_type.serialize(buf);
            self.api_id.serialize(buf);
            self.api_hash.serialize(buf);
            self.lang_code.serialize(buf);
        }
    }

    impl RemoteCall for SendCode {
        type Return = enums::auth::SentCode;
    }

    /// `auth.signIn#bcd51581 phone_number:string phone_code_hash:string phone_code:string = auth.Authorization;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct SignIn {
        pub phone_number: String,
        pub phone_code_hash: String,
        pub phone_code: String,
    }

    impl Identifiable for SignIn {
        const CONSTRUCTOR_ID: u32 = 0xbcd51581;
    }

    impl Serializable for SignIn {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.phone_number.serialize(buf);
            self.phone_code_hash.serialize(buf);
            self.phone_code.serialize(buf);
        }
    }

    impl RemoteCall for SignIn {
        type Return = enums::auth::Authorization;
    }

    /// `auth.signUp#1b067634 phone_number:string phone_code_hash:string phone_code:string first_name:string last_name:string = auth.Authorization;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct SignUp {
        pub phone_number: String,
        pub phone_code_hash: String,
        pub phone_code: String,
        pub first_name: String,
        pub last_name: String,
    }

    impl Identifiable for SignUp {
        const CONSTRUCTOR_ID: u32 = 0x1b067634;
    }

    impl Serializable for SignUp {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.phone_number.serialize(buf);
            self.phone_code_hash.serialize(buf);
            self.phone_code.serialize(buf);
            self.first_name.serialize(buf);
            self.last_name.serialize(buf);
        }
    }

    impl RemoteCall for SignUp {
        type Return = enums::auth::Authorization;
    }

    /// `auth.checkPassword#0a63011e password_hash:bytes = auth.Authorization;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct CheckPassword {
        pub password_hash: Vec<u8>,
    }

    impl Identifiable for CheckPassword {
        const CONSTRUCTOR_ID: u32 = 0x0a63011e;
    }

    impl Serializable for CheckPassword {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.password_hash.serialize(buf);
        }
    }

    impl RemoteCall for CheckPassword {
        type Return = enums::auth::Authorization;
    }

    /// `auth.logOut#5717da40 = Bool;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct LogOut {}

    impl Identifiable for LogOut {
        const CONSTRUCTOR_ID: u32 = 0x5717da40;
    }

    impl Serializable for LogOut {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
        }
    }

    impl RemoteCall for LogOut {
        type Return = bool;
    }
}

pub mod account {
    use crate::{enums, Identifiable, RemoteCall, Serializable};

    /// `account.getPassword#548a30f5 = account.Password;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct GetPassword {}

    impl Identifiable for GetPassword {
        const CONSTRUCTOR_ID: u32 = 0x548a30f5;
    }

    impl Serializable for GetPassword {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
        }
    }

    impl RemoteCall for GetPassword {
        type Return = enums::account::Password;
    }
}

pub mod help {
    use crate::{enums, Identifiable, RemoteCall, Serializable};

    /// `help.getConfig#c4f9186b = Config;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct GetConfig {}

    impl Identifiable for GetConfig {
        const CONSTRUCTOR_ID: u32 = 0xc4f9186b;
    }

    impl Serializable for GetConfig {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
        }
    }

    impl RemoteCall for GetConfig {
        type Return = enums::Config;
    }
}

pub mod updates {
    use crate::{enums, Identifiable, RemoteCall, Serializable};

    /// `updates.getState#edd4882a = updates.State;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct GetState {}

    impl Identifiable for GetState {
        const CONSTRUCTOR_ID: u32 = 0xedd4882a;
    }

    impl Serializable for GetState {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
        }
    }

    impl RemoteCall for GetState {
        type Return = enums::updates::State;
    }

    /// `updates.getDifference#0a041495 pts:int date:int qts:int = updates.Difference;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct GetDifference {
        pub pts: i32,
        pub date: i32,
        pub qts: i32,
    }

    impl Identifiable for GetDifference {
        const CONSTRUCTOR_ID: u32 = 0x0a041495;
    }

    impl Serializable for GetDifference {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.pts.serialize(buf);
            self.date.serialize(buf);
            self.qts.serialize(buf);
        }
    }

    impl RemoteCall for GetDifference {
        type Return = enums::updates::Difference;
    }

    /// `updates.getChannelDifference#bb32d7c0 channel:InputChannel filter:ChannelMessagesFilter pts:int limit:int = updates.ChannelDifference;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct GetChannelDifference {
        pub channel: enums::InputChannel,
        pub filter: enums::ChannelMessagesFilter,
        pub pts: i32,
        pub limit: i32,
    }

    impl Identifiable for GetChannelDifference {
        const CONSTRUCTOR_ID: u32 = 0xbb32d7c0;
    }

    impl Serializable for GetChannelDifference {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.channel.serialize(buf);
            self.filter.serialize(buf);
            self.pts.serialize(buf);
            self.limit.serialize(buf);
        }
    }

    impl RemoteCall for GetChannelDifference {
        type Return = enums::updates::ChannelDifference;
    }
}

pub mod messages {
    use crate::{enums, Identifiable, RemoteCall, Serializable};

    /// `messages.getDhConfig#26cf8950 version:int random_length:int = messages.DhConfig;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct GetDhConfig {
        pub version: i32,
        pub random_length: i32,
    }

    impl Identifiable for GetDhConfig {
        const CONSTRUCTOR_ID: u32 = 0x26cf8950;
    }

    impl Serializable for GetDhConfig {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.version.serialize(buf);
            self.random_length.serialize(buf);
        }
    }

    impl RemoteCall for GetDhConfig {
        type Return = enums::messages::DhConfig;
    }

    /// `messages.requestEncryption#f64daf43 user_id:InputUser random_id:int g_a:bytes = EncryptedChat;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct RequestEncryption {
        pub user_id: enums::InputUser,
        pub random_id: i32,
        pub g_a: Vec<u8>,
    }

    impl Identifiable for RequestEncryption {
        const CONSTRUCTOR_ID: u32 = 0xf64daf43;
    }

    impl Serializable for RequestEncryption {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.user_id.serialize(buf);
            self.random_id.serialize(buf);
            self.g_a.serialize(buf);
        }
    }

    impl RemoteCall for RequestEncryption {
        type Return = enums::EncryptedChat;
    }

    /// `messages.acceptEncryption#3dbc0415 peer:InputEncryptedChat g_b:bytes key_fingerprint:long = EncryptedChat;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct AcceptEncryption {
        pub peer: enums::InputEncryptedChat,
        pub g_b: Vec<u8>,
        pub key_fingerprint: i64,
    }

    impl Identifiable for AcceptEncryption {
        const CONSTRUCTOR_ID: u32 = 0x3dbc0415;
    }

    impl Serializable for AcceptEncryption {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.peer.serialize(buf);
            self.g_b.serialize(buf);
            self.key_fingerprint.serialize(buf);
        }
    }

    impl RemoteCall for AcceptEncryption {
        type Return = enums::EncryptedChat;
    }

    /// `messages.discardEncryption#edd923c5 chat_id:int = Bool;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct DiscardEncryption {
        pub chat_id: i32,
    }

    impl Identifiable for DiscardEncryption {
        const CONSTRUCTOR_ID: u32 = 0xedd923c5;
    }

    impl Serializable for DiscardEncryption {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.chat_id.serialize(buf);
        }
    }

    impl RemoteCall for DiscardEncryption {
        type Return = bool;
    }

    /// `messages.sendEncrypted#a9776773 peer:InputEncryptedChat random_id:long data:bytes = messages.SentEncryptedMessage;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct SendEncrypted {
        pub peer: enums::InputEncryptedChat,
        pub random_id: i64,
        pub data: Vec<u8>,
    }

    impl Identifiable for SendEncrypted {
        const CONSTRUCTOR_ID: u32 = 0xa9776773;
    }

    impl Serializable for SendEncrypted {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.peer.serialize(buf);
            self.random_id.serialize(buf);
            self.data.serialize(buf);
        }
    }

    impl RemoteCall for SendEncrypted {
        type Return = enums::messages::SentEncryptedMessage;
    }

    /// `messages.sendEncryptedService#32d439a4 peer:InputEncryptedChat random_id:long data:bytes = messages.SentEncryptedMessage;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct SendEncryptedService {
        pub peer: enums::InputEncryptedChat,
        pub random_id: i64,
        pub data: Vec<u8>,
    }

    impl Identifiable for SendEncryptedService {
        const CONSTRUCTOR_ID: u32 = 0x32d439a4;
    }

    impl Serializable for SendEncryptedService {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            Self::CONSTRUCTOR_ID.serialize(buf);
            self.peer.serialize(buf);
            self.random_id.serialize(buf);
            self.data.serialize(buf);
        }
    }

    impl RemoteCall for SendEncryptedService {
        type Return = enums::messages::SentEncryptedMessage;
    }
}
