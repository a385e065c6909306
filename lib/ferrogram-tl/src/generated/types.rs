// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One `struct` per schema constructor. Serialization here is *bare*
//! (without the constructor identifier); the boxed form lives in the
//! sibling [`enums`](../enums/index.html) module.
use crate::deserialize::{Buffer, Result};
use crate::{enums, Deserializable, Identifiable, Serializable};

/// `resPQ#05162463 nonce:int128 server_nonce:int128 pq:bytes server_public_key_fingerprints:Vector<long> = ResPQ;`
#[derive(Clone, Debug, PartialEq)]
pub struct ResPq {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub pq: Vec<u8>,
    pub server_public_key_fingerprints: Vec<i64>,
}

impl Identifiable for ResPq {
    const CONSTRUCTOR_ID: u32 = 0x05162463;
}

impl Serializable for ResPq {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.pq.serialize(buf);
        self.server_public_key_fingerprints.serialize(buf);
    }
}

impl Deserializable for ResPq {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            pq: Vec::<u8>::deserialize(buf)?,
            server_public_key_fingerprints: Vec::<i64>::deserialize(buf)?,
        })
    }
}

/// `p_q_inner_data#83c95aec pq:bytes p:bytes q:bytes nonce:int128 server_nonce:int128 new_nonce:int256 = P_Q_inner_data;`
#[derive(Clone, Debug, PartialEq)]
pub struct PQInnerData {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
}

impl Identifiable for PQInnerData {
    const CONSTRUCTOR_ID: u32 = 0x83c95aec;
}

impl Serializable for PQInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.pq.serialize(buf);
        self.p.serialize(buf);
        self.q.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce.serialize(buf);
    }
}

impl Deserializable for PQInnerData {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            pq: Vec::<u8>::deserialize(buf)?,
            p: Vec::<u8>::deserialize(buf)?,
            q: Vec::<u8>::deserialize(buf)?,
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce: <[u8; 32]>::deserialize(buf)?,
        })
    }
}

/// `p_q_inner_data_temp#3c6a84d4 pq:bytes p:bytes q:bytes nonce:int128 server_nonce:int128 new_nonce:int256 expires_in:int = P_Q_inner_data;`
#[derive(Clone, Debug, PartialEq)]
pub struct PQInnerDataTemp {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
    pub expires_in: i32,
}

impl Identifiable for PQInnerDataTemp {
    const CONSTRUCTOR_ID: u32 = 0x3c6a84d4;
}

impl Serializable for PQInnerDataTemp {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.pq.serialize(buf);
        self.p.serialize(buf);
        self.q.serialize(buf);
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce.serialize(buf);
        self.expires_in.serialize(buf);
    }
}

impl Deserializable for PQInnerDataTemp {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            pq: Vec::<u8>::deserialize(buf)?,
            p: Vec::<u8>::deserialize(buf)?,
            q: Vec::<u8>::deserialize(buf)?,
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce: <[u8; 32]>::deserialize(buf)?,
            expires_in: i32::deserialize(buf)?,
        })
    }
}

/// `server_DH_params_ok#d0e8075c nonce:int128 server_nonce:int128 encrypted_answer:bytes = Server_DH_Params;`
#[derive(Clone, Debug, PartialEq)]
pub struct ServerDhParamsOk {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub encrypted_answer: Vec<u8>,
}

impl Identifiable for ServerDhParamsOk {
    const CONSTRUCTOR_ID: u32 = 0xd0e8075c;
}

impl Serializable for ServerDhParamsOk {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.encrypted_answer.serialize(buf);
    }
}

impl Deserializable for ServerDhParamsOk {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            encrypted_answer: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// `server_DH_params_fail#79cb045d nonce:int128 server_nonce:int128 new_nonce_hash:int128 = Server_DH_Params;`
#[derive(Clone, Debug, PartialEq)]
pub struct ServerDhParamsFail {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash: [u8; 16],
}

impl Identifiable for ServerDhParamsFail {
    const CONSTRUCTOR_ID: u32 = 0x79cb045d;
}

impl Serializable for ServerDhParamsFail {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce_hash.serialize(buf);
    }
}

impl Deserializable for ServerDhParamsFail {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce_hash: <[u8; 16]>::deserialize(buf)?,
        })
    }
}

/// `server_DH_inner_data#b5890dba nonce:int128 server_nonce:int128 g:int dh_prime:bytes g_a:bytes server_time:int = Server_DH_inner_data;`
#[derive(Clone, Debug, PartialEq)]
pub struct ServerDhInnerData {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub g: i32,
    pub dh_prime: Vec<u8>,
    pub g_a: Vec<u8>,
    pub server_time: i32,
}

impl Identifiable for ServerDhInnerData {
    const CONSTRUCTOR_ID: u32 = 0xb5890dba;
}

impl Serializable for ServerDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.g.serialize(buf);
        self.dh_prime.serialize(buf);
        self.g_a.serialize(buf);
        self.server_time.serialize(buf);
    }
}

impl Deserializable for ServerDhInnerData {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            g: i32::deserialize(buf)?,
            dh_prime: Vec::<u8>::deserialize(buf)?,
            g_a: Vec::<u8>::deserialize(buf)?,
            server_time: i32::deserialize(buf)?,
        })
    }
}

/// `client_DH_inner_data#6643b654 nonce:int128 server_nonce:int128 retry_id:long g_b:bytes = Client_DH_Inner_Data;`
#[derive(Clone, Debug, PartialEq)]
pub struct ClientDhInnerData {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub retry_id: i64,
    pub g_b: Vec<u8>,
}

impl Identifiable for ClientDhInnerData {
    const CONSTRUCTOR_ID: u32 = 0x6643b654;
}

impl Serializable for ClientDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.retry_id.serialize(buf);
        self.g_b.serialize(buf);
    }
}

impl Deserializable for ClientDhInnerData {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            retry_id: i64::deserialize(buf)?,
            g_b: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// `dh_gen_ok#3bcbf734 nonce:int128 server_nonce:int128 new_nonce_hash1:int128 = Set_client_DH_params_answer;`
#[derive(Clone, Debug, PartialEq)]
pub struct DhGenOk {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash1: [u8; 16],
}

impl Identifiable for DhGenOk {
    const CONSTRUCTOR_ID: u32 = 0x3bcbf734;
}

impl Serializable for DhGenOk {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce_hash1.serialize(buf);
    }
}

impl Deserializable for DhGenOk {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce_hash1: <[u8; 16]>::deserialize(buf)?,
        })
    }
}

/// `dh_gen_retry#46dc1fb9 nonce:int128 server_nonce:int128 new_nonce_hash2:int128 = Set_client_DH_params_answer;`
#[derive(Clone, Debug, PartialEq)]
pub struct DhGenRetry {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash2: [u8; 16],
}

impl Identifiable for DhGenRetry {
    const CONSTRUCTOR_ID: u32 = 0x46dc1fb9;
}

impl Serializable for DhGenRetry {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce_hash2.serialize(buf);
    }
}

impl Deserializable for DhGenRetry {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce_hash2: <[u8; 16]>::deserialize(buf)?,
        })
    }
}

/// `dh_gen_fail#a69dae02 nonce:int128 server_nonce:int128 new_nonce_hash3:int128 = Set_client_DH_params_answer;`
#[derive(Clone, Debug, PartialEq)]
pub struct DhGenFail {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash3: [u8; 16],
}

impl Identifiable for DhGenFail {
    const CONSTRUCTOR_ID: u32 = 0xa69dae02;
}

impl Serializable for DhGenFail {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.server_nonce.serialize(buf);
        self.new_nonce_hash3.serialize(buf);
    }
}

impl Deserializable for DhGenFail {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce_hash3: <[u8; 16]>::deserialize(buf)?,
        })
    }
}

/// `bind_auth_key_inner#75a3f765 nonce:long temp_auth_key_id:long perm_auth_key_id:long temp_session_id:long expires_at:int = BindAuthKeyInner;`
#[derive(Clone, Debug, PartialEq)]
pub struct BindAuthKeyInner {
    pub nonce: i64,
    pub temp_auth_key_id: i64,
    pub perm_auth_key_id: i64,
    pub temp_session_id: i64,
    pub expires_at: i32,
}

impl Identifiable for BindAuthKeyInner {
    const CONSTRUCTOR_ID: u32 = 0x75a3f765;
}

impl Serializable for BindAuthKeyInner {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.nonce.serialize(buf);
        self.temp_auth_key_id.serialize(buf);
        self.perm_auth_key_id.serialize(buf);
        self.temp_session_id.serialize(buf);
        self.expires_at.serialize(buf);
    }
}

impl Deserializable for BindAuthKeyInner {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            nonce: i64::deserialize(buf)?,
            temp_auth_key_id: i64::deserialize(buf)?,
            perm_auth_key_id: i64::deserialize(buf)?,
            temp_session_id: i64::deserialize(buf)?,
            expires_at: i32::deserialize(buf)?,
        })
    }
}

/// `rpc_error#2144ca19 error_code:int error_message:string = RpcError;`
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    pub error_code: i32,
    pub error_message: String,
}

impl Identifiable for RpcError {
    const CONSTRUCTOR_ID: u32 = 0x2144ca19;
}

impl Serializable for RpcError {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.error_code.serialize(buf);
        self.error_message.serialize(buf);
    }
}

impl Deserializable for RpcError {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            error_code: i32::deserialize(buf)?,
            error_message: String::deserialize(buf)?,
        })
    }
}

/// `rpc_answer_unknown#5e2ad36e = RpcDropAnswer;`
#[derive(Clone, Debug, PartialEq)]
pub struct RpcAnswerUnknown {}

impl Identifiable for RpcAnswerUnknown {
    const CONSTRUCTOR_ID: u32 = 0x5e2ad36e;
}

impl Serializable for RpcAnswerUnknown {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for RpcAnswerUnknown {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `rpc_answer_dropped_running#cd78e586 = RpcDropAnswer;`
#[derive(Clone, Debug, PartialEq)]
pub struct RpcAnswerDroppedRunning {}

impl Identifiable for RpcAnswerDroppedRunning {
    const CONSTRUCTOR_ID: u32 = 0xcd78e586;
}

impl Serializable for RpcAnswerDroppedRunning {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for RpcAnswerDroppedRunning {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `rpc_answer_dropped#a43ad8b7 msg_id:long seq_no:int bytes:int = RpcDropAnswer;`
#[derive(Clone, Debug, PartialEq)]
pub struct RpcAnswerDropped {
    pub msg_id: i64,
    pub seq_no: i32,
    pub bytes: i32,
}

impl Identifiable for RpcAnswerDropped {
    const CONSTRUCTOR_ID: u32 = 0xa43ad8b7;
}

impl Serializable for RpcAnswerDropped {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.msg_id.serialize(buf);
        self.seq_no.serialize(buf);
        self.bytes.serialize(buf);
    }
}

impl Deserializable for RpcAnswerDropped {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            msg_id: i64::deserialize(buf)?,
            seq_no: i32::deserialize(buf)?,
            bytes: i32::deserialize(buf)?,
        })
    }
}

/// `future_salt#0949d9dc valid_since:int valid_until:int salt:long = FutureSalt;`
#[derive(Clone, Debug, PartialEq)]
pub struct FutureSalt {
    pub valid_since: i32,
    pub valid_until: i32,
    pub salt: i64,
}

impl Identifiable for FutureSalt {
    const CONSTRUCTOR_ID: u32 = 0x0949d9dc;
}

impl Serializable for FutureSalt {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.valid_since.serialize(buf);
        self.valid_until.serialize(buf);
        self.salt.serialize(buf);
    }
}

impl Deserializable for FutureSalt {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            valid_since: i32::deserialize(buf)?,
            valid_until: i32::deserialize(buf)?,
            salt: i64::deserialize(buf)?,
        })
    }
}

/// `future_salts#ae500895 req_msg_id:long now:int salts:vector<future_salt> = FutureSalts;`
#[derive(Clone, Debug, PartialEq)]
pub struct FutureSalts {
    pub req_msg_id: i64,
    pub now: i32,
    pub salts: Vec<FutureSalt>,
}

impl Identifiable for FutureSalts {
    const CONSTRUCTOR_ID: u32 = 0xae500895;
}

impl Serializable for FutureSalts {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.req_msg_id.serialize(buf);
        self.now.serialize(buf);
        crate::RawVec(self.salts.clone()).serialize(buf);
    }
}

impl Deserializable for FutureSalts {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            req_msg_id: i64::deserialize(buf)?,
            now: i32::deserialize(buf)?,
            salts: crate::RawVec::<FutureSalt>::deserialize(buf)?.0,
        })
    }
}

/// `pong#347773c5 msg_id:long ping_id:long = Pong;`
#[derive(Clone, Debug, PartialEq)]
pub struct Pong {
    pub msg_id: i64,
    pub ping_id: i64,
}

impl Identifiable for Pong {
    const CONSTRUCTOR_ID: u32 = 0x347773c5;
}

impl Serializable for Pong {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.msg_id.serialize(buf);
        self.ping_id.serialize(buf);
    }
}

impl Deserializable for Pong {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            msg_id: i64::deserialize(buf)?,
            ping_id: i64::deserialize(buf)?,
        })
    }
}

/// `destroy_session_ok#e22045fc session_id:long = DestroySessionRes;`
#[derive(Clone, Debug, PartialEq)]
pub struct DestroySessionOk {
    pub session_id: i64,
}

impl Identifiable for DestroySessionOk {
    const CONSTRUCTOR_ID: u32 = 0xe22045fc;
}

impl Serializable for DestroySessionOk {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.session_id.serialize(buf);
    }
}

impl Deserializable for DestroySessionOk {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            session_id: i64::deserialize(buf)?,
        })
    }
}

/// `destroy_session_none#62d350c9 session_id:long = DestroySessionRes;`
#[derive(Clone, Debug, PartialEq)]
pub struct DestroySessionNone {
    pub session_id: i64,
}

impl Identifiable for DestroySessionNone {
    const CONSTRUCTOR_ID: u32 = 0x62d350c9;
}

impl Serializable for DestroySessionNone {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.session_id.serialize(buf);
    }
}

impl Deserializable for DestroySessionNone {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            session_id: i64::deserialize(buf)?,
        })
    }
}

/// `new_session_created#9ec20908 first_msg_id:long unique_id:long server_salt:long = NewSession;`
#[derive(Clone, Debug, PartialEq)]
pub struct NewSessionCreated {
    pub first_msg_id: i64,
    pub unique_id: i64,
    pub server_salt: i64,
}

impl Identifiable for NewSessionCreated {
    const CONSTRUCTOR_ID: u32 = 0x9ec20908;
}

impl Serializable for NewSessionCreated {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.first_msg_id.serialize(buf);
        self.unique_id.serialize(buf);
        self.server_salt.serialize(buf);
    }
}

impl Deserializable for NewSessionCreated {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            first_msg_id: i64::deserialize(buf)?,
            unique_id: i64::deserialize(buf)?,
            server_salt: i64::deserialize(buf)?,
        })
    }
}

/// `msgs_ack#62d6b459 msg_ids:Vector<long> = MsgsAck;`
#[derive(Clone, Debug, PartialEq)]
pub struct MsgsAck {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgsAck {
    const CONSTRUCTOR_ID: u32 = 0x62d6b459;
}

impl Serializable for MsgsAck {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.msg_ids.serialize(buf);
    }
}

impl Deserializable for MsgsAck {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
        })
    }
}

/// `bad_msg_notification#a7eff811 bad_msg_id:long bad_msg_seqno:int error_code:int = BadMsgNotification;`
#[derive(Clone, Debug, PartialEq)]
pub struct BadMsgNotification {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
}

impl Identifiable for BadMsgNotification {
    const CONSTRUCTOR_ID: u32 = 0xa7eff811;
}

impl Serializable for BadMsgNotification {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.bad_msg_id.serialize(buf);
        self.bad_msg_seqno.serialize(buf);
        self.error_code.serialize(buf);
    }
}

impl Deserializable for BadMsgNotification {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            bad_msg_id: i64::deserialize(buf)?,
            bad_msg_seqno: i32::deserialize(buf)?,
            error_code: i32::deserialize(buf)?,
        })
    }
}

/// `bad_server_salt#edab447b bad_msg_id:long bad_msg_seqno:int error_code:int new_server_salt:long = BadMsgNotification;`
#[derive(Clone, Debug, PartialEq)]
pub struct BadServerSalt {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
    pub new_server_salt: i64,
}

impl Identifiable for BadServerSalt {
    const CONSTRUCTOR_ID: u32 = 0xedab447b;
}

impl Serializable for BadServerSalt {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.bad_msg_id.serialize(buf);
        self.bad_msg_seqno.serialize(buf);
        self.error_code.serialize(buf);
        self.new_server_salt.serialize(buf);
    }
}

impl Deserializable for BadServerSalt {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            bad_msg_id: i64::deserialize(buf)?,
            bad_msg_seqno: i32::deserialize(buf)?,
            error_code: i32::deserialize(buf)?,
            new_server_salt: i64::deserialize(buf)?,
        })
    }
}

/// `msgs_state_req#da69fb52 msg_ids:Vector<long> = MsgsStateReq;`
#[derive(Clone, Debug, PartialEq)]
pub struct MsgsStateReq {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgsStateReq {
    const CONSTRUCTOR_ID: u32 = 0xda69fb52;
}

impl Serializable for MsgsStateReq {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.msg_ids.serialize(buf);
    }
}

impl Deserializable for MsgsStateReq {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
        })
    }
}

/// `msgs_state_info#04deb57d req_msg_id:long info:bytes = MsgsStateInfo;`
#[derive(Clone, Debug, PartialEq)]
pub struct MsgsStateInfo {
    pub req_msg_id: i64,
    pub info: Vec<u8>,
}

impl Identifiable for MsgsStateInfo {
    const CONSTRUCTOR_ID: u32 = 0x04deb57d;
}

impl Serializable for MsgsStateInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.req_msg_id.serialize(buf);
        self.info.serialize(buf);
    }
}

impl Deserializable for MsgsStateInfo {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            req_msg_id: i64::deserialize(buf)?,
            info: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// `msgs_all_info#8cc0d131 msg_ids:Vector<long> info:bytes = MsgsAllInfo;`
#[derive(Clone, Debug, PartialEq)]
pub struct MsgsAllInfo {
    pub msg_ids: Vec<i64>,
    pub info: Vec<u8>,
}

impl Identifiable for MsgsAllInfo {
    const CONSTRUCTOR_ID: u32 = 0x8cc0d131;
}

impl Serializable for MsgsAllInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.msg_ids.serialize(buf);
        self.info.serialize(buf);
    }
}

impl Deserializable for MsgsAllInfo {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
            info: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// `msg_detailed_info#276d3ec6 msg_id:long answer_msg_id:long bytes:int status:int = MsgDetailedInfo;`
#[derive(Clone, Debug, PartialEq)]
pub struct MsgDetailedInfo {
    pub msg_id: i64,
    pub answer_msg_id: i64,
    pub bytes: i32,
    pub status: i32,
}

impl Identifiable for MsgDetailedInfo {
    const CONSTRUCTOR_ID: u32 = 0x276d3ec6;
}

impl Serializable for MsgDetailedInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.msg_id.serialize(buf);
        self.answer_msg_id.serialize(buf);
        self.bytes.serialize(buf);
        self.status.serialize(buf);
    }
}

impl Deserializable for MsgDetailedInfo {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            msg_id: i64::deserialize(buf)?,
            answer_msg_id: i64::deserialize(buf)?,
            bytes: i32::deserialize(buf)?,
            status: i32::deserialize(buf)?,
        })
    }
}

/// `msg_new_detailed_info#809db6df answer_msg_id:long bytes:int status:int = MsgDetailedInfo;`
#[derive(Clone, Debug, PartialEq)]
pub struct MsgNewDetailedInfo {
    pub answer_msg_id: i64,
    pub bytes: i32,
    pub status: i32,
}

impl Identifiable for MsgNewDetailedInfo {
    const CONSTRUCTOR_ID: u32 = 0x809db6df;
}

impl Serializable for MsgNewDetailedInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.answer_msg_id.serialize(buf);
        self.bytes.serialize(buf);
        self.status.serialize(buf);
    }
}

impl Deserializable for MsgNewDetailedInfo {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            answer_msg_id: i64::deserialize(buf)?,
            bytes: i32::deserialize(buf)?,
            status: i32::deserialize(buf)?,
        })
    }
}

/// `msg_resend_req#7d861a08 msg_ids:Vector<long> = MsgResendReq;`
#[derive(Clone, Debug, PartialEq)]
pub struct MsgResendReq {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgResendReq {
    const CONSTRUCTOR_ID: u32 = 0x7d861a08;
}

impl Serializable for MsgResendReq {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.msg_ids.serialize(buf);
    }
}

impl Deserializable for MsgResendReq {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
        })
    }
}

/// `http_wait#9299359f max_delay:int wait_after:int max_wait:int = HttpWait;`
#[derive(Clone, Debug, PartialEq)]
pub struct HttpWait {
    pub max_delay: i32,
    pub wait_after: i32,
    pub max_wait: i32,
}

impl Identifiable for HttpWait {
    const CONSTRUCTOR_ID: u32 = 0x9299359f;
}

impl Serializable for HttpWait {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.max_delay.serialize(buf);
        self.wait_after.serialize(buf);
        self.max_wait.serialize(buf);
    }
}

impl Deserializable for HttpWait {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            max_delay: i32::deserialize(buf)?,
            wait_after: i32::deserialize(buf)?,
            max_wait: i32::deserialize(buf)?,
        })
    }
}

/// `dcOption#05d8c6cc flags:# ipv6:flags.0?true media_only:flags.1?true tcpo_only:flags.2?true id:int ip_address:string port:int = DcOption;`
#[derive(Clone, Debug, PartialEq)]
pub struct DcOption {
    pub ipv6: bool,
    pub media_only: bool,
    pub tcpo_only: bool,
    pub id: i32,
    pub ip_address: String,
    pub port: i32,
}

impl Identifiable for DcOption {
    const CONSTRUCTOR_ID: u32 = 0x05d8c6cc;
}

impl Serializable for DcOption {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.ipv6 {
            flags |= 1;
        }
        if self.media_only {
            flags |= 1 << 1;
        }
        if self.tcpo_only {
            flags |= 1 << 2;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        self.ip_address.serialize(buf);
        self.port.serialize(buf);
    }
}

impl Deserializable for DcOption {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            ipv6: flags & 1 != 0,
            media_only: flags & (1 << 1) != 0,
            tcpo_only: flags & (1 << 2) != 0,
            id: i32::deserialize(buf)?,
            ip_address: String::deserialize(buf)?,
            port: i32::deserialize(buf)?,
        })
    }
}

/// `disabledFeature#ae636f24 feature:string description:string = DisabledFeature;`
#[derive(Clone, Debug, PartialEq)]
pub struct DisabledFeature {
    pub feature: String,
    pub description: String,
}

impl Identifiable for DisabledFeature {
    const CONSTRUCTOR_ID: u32 = 0xae636f24;
}

impl Serializable for DisabledFeature {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.feature.serialize(buf);
        self.description.serialize(buf);
    }
}

impl Deserializable for DisabledFeature {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            feature: String::deserialize(buf)?,
            description: String::deserialize(buf)?,
        })
    }
}

/// `config#4e32b894 date:int expires:int test_mode:Bool this_dc:int dc_options:Vector<DcOption> chat_size_max:int broadcast_size_max:int forwarded_count_max:int online_update_period_ms:int offline_blur_timeout_ms:int offline_idle_timeout_ms:int online_cloud_timeout_ms:int notify_cloud_delay_ms:int notify_default_delay_ms:int chat_big_size:int push_chat_period_ms:int push_chat_limit:int saved_gifs_limit:int edit_time_limit:int disabled_features:Vector<DisabledFeature> = Config;`
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub date: i32,
    pub expires: i32,
    pub test_mode: bool,
    pub this_dc: i32,
    pub dc_options: Vec<enums::DcOption>,
    pub chat_size_max: i32,
    pub broadcast_size_max: i32,
    pub forwarded_count_max: i32,
    pub online_update_period_ms: i32,
    pub offline_blur_timeout_ms: i32,
    pub offline_idle_timeout_ms: i32,
    pub online_cloud_timeout_ms: i32,
    pub notify_cloud_delay_ms: i32,
    pub notify_default_delay_ms: i32,
    pub chat_big_size: i32,
    pub push_chat_period_ms: i32,
    pub push_chat_limit: i32,
    pub saved_gifs_limit: i32,
    pub edit_time_limit: i32,
    pub disabled_features: Vec<enums::DisabledFeature>,
}

impl Identifiable for Config {
    const CONSTRUCTOR_ID: u32 = 0x4e32b894;
}

impl Serializable for Config {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.date.serialize(buf);
        self.expires.serialize(buf);
        self.test_mode.serialize(buf);
        self.this_dc.serialize(buf);
        self.dc_options.serialize(buf);
        self.chat_size_max.serialize(buf);
        self.broadcast_size_max.serialize(buf);
        self.forwarded_count_max.serialize(buf);
        self.online_update_period_ms.serialize(buf);
        self.offline_blur_timeout_ms.serialize(buf);
        self.offline_idle_timeout_ms.serialize(buf);
        self.online_cloud_timeout_ms.serialize(buf);
        self.notify_cloud_delay_ms.serialize(buf);
        self.notify_default_delay_ms.serialize(buf);
        self.chat_big_size.serialize(buf);
        self.push_chat_period_ms.serialize(buf);
        self.push_chat_limit.serialize(buf);
        self.saved_gifs_limit.serialize(buf);
        self.edit_time_limit.serialize(buf);
        self.disabled_features.serialize(buf);
    }
}

impl Deserializable for Config {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            date: i32::deserialize(buf)?,
            expires: i32::deserialize(buf)?,
            test_mode: bool::deserialize(buf)?,
            this_dc: i32::deserialize(buf)?,
            dc_options: Vec::<enums::DcOption>::deserialize(buf)?,
            chat_size_max: i32::deserialize(buf)?,
            broadcast_size_max: i32::deserialize(buf)?,
            forwarded_count_max: i32::deserialize(buf)?,
            online_update_period_ms: i32::deserialize(buf)?,
            offline_blur_timeout_ms: i32::deserialize(buf)?,
            offline_idle_timeout_ms: i32::deserialize(buf)?,
            online_cloud_timeout_ms: i32::deserialize(buf)?,
            notify_cloud_delay_ms: i32::deserialize(buf)?,
            notify_default_delay_ms: i32::deserialize(buf)?,
            chat_big_size: i32::deserialize(buf)?,
            push_chat_period_ms: i32::deserialize(buf)?,
            push_chat_limit: i32::deserialize(buf)?,
            saved_gifs_limit: i32::deserialize(buf)?,
            edit_time_limit: i32::deserialize(buf)?,
            disabled_features: Vec::<enums::DisabledFeature>::deserialize(buf)?,
        })
    }
}

/// `peerUser#9db1bc6d user_id:int = Peer;`
#[derive(Clone, Debug, PartialEq)]
pub struct PeerUser {
    pub user_id: i32,
}

impl Identifiable for PeerUser {
    const CONSTRUCTOR_ID: u32 = 0x9db1bc6d;
}

impl Serializable for PeerUser {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
    }
}

impl Deserializable for PeerUser {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
        })
    }
}

/// `peerChat#bad0e5bb chat_id:int = Peer;`
#[derive(Clone, Debug, PartialEq)]
pub struct PeerChat {
    pub chat_id: i32,
}

impl Identifiable for PeerChat {
    const CONSTRUCTOR_ID: u32 = 0xbad0e5bb;
}

impl Serializable for PeerChat {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat_id.serialize(buf);
    }
}

impl Deserializable for PeerChat {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            chat_id: i32::deserialize(buf)?,
        })
    }
}

/// `peerChannel#bddde532 channel_id:int = Peer;`
#[derive(Clone, Debug, PartialEq)]
pub struct PeerChannel {
    pub channel_id: i32,
}

impl Identifiable for PeerChannel {
    const CONSTRUCTOR_ID: u32 = 0xbddde532;
}

impl Serializable for PeerChannel {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.channel_id.serialize(buf);
    }
}

impl Deserializable for PeerChannel {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            channel_id: i32::deserialize(buf)?,
        })
    }
}

/// `inputUserEmpty#b98886cf = InputUser;`
#[derive(Clone, Debug, PartialEq)]
pub struct InputUserEmpty {}

impl Identifiable for InputUserEmpty {
    const CONSTRUCTOR_ID: u32 = 0xb98886cf;
}

impl Serializable for InputUserEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for InputUserEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `inputUserSelf#f7c1b13f = InputUser;`
#[derive(Clone, Debug, PartialEq)]
pub struct InputUserSelf {}

impl Identifiable for InputUserSelf {
    const CONSTRUCTOR_ID: u32 = 0xf7c1b13f;
}

impl Serializable for InputUserSelf {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for InputUserSelf {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `inputUser#d8292816 user_id:int access_hash:long = InputUser;`
#[derive(Clone, Debug, PartialEq)]
pub struct InputUser {
    pub user_id: i32,
    pub access_hash: i64,
}

impl Identifiable for InputUser {
    const CONSTRUCTOR_ID: u32 = 0xd8292816;
}

impl Serializable for InputUser {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
        self.access_hash.serialize(buf);
    }
}

impl Deserializable for InputUser {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
        })
    }
}

/// `inputChannelEmpty#ee8c1e86 = InputChannel;`
#[derive(Clone, Debug, PartialEq)]
pub struct InputChannelEmpty {}

impl Identifiable for InputChannelEmpty {
    const CONSTRUCTOR_ID: u32 = 0xee8c1e86;
}

impl Serializable for InputChannelEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for InputChannelEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `inputChannel#afeb712e channel_id:int access_hash:long = InputChannel;`
#[derive(Clone, Debug, PartialEq)]
pub struct InputChannel {
    pub channel_id: i32,
    pub access_hash: i64,
}

impl Identifiable for InputChannel {
    const CONSTRUCTOR_ID: u32 = 0xafeb712e;
}

impl Serializable for InputChannel {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.channel_id.serialize(buf);
        self.access_hash.serialize(buf);
    }
}

impl Deserializable for InputChannel {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            channel_id: i32::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
        })
    }
}

/// `inputEncryptedChat#f141b5e1 chat_id:int access_hash:long = InputEncryptedChat;`
#[derive(Clone, Debug, PartialEq)]
pub struct InputEncryptedChat {
    pub chat_id: i32,
    pub access_hash: i64,
}

impl Identifiable for InputEncryptedChat {
    const CONSTRUCTOR_ID: u32 = 0xf141b5e1;
}

impl Serializable for InputEncryptedChat {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat_id.serialize(buf);
        self.access_hash.serialize(buf);
    }
}

impl Deserializable for InputEncryptedChat {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            chat_id: i32::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
        })
    }
}

/// `fileLocationUnavailable#7c596b46 volume_id:long local_id:int secret:long = FileLocation;`
#[derive(Clone, Debug, PartialEq)]
pub struct FileLocationUnavailable {
    pub volume_id: i64,
    pub local_id: i32,
    pub secret: i64,
}

impl Identifiable for FileLocationUnavailable {
    const CONSTRUCTOR_ID: u32 = 0x7c596b46;
}

impl Serializable for FileLocationUnavailable {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.volume_id.serialize(buf);
        self.local_id.serialize(buf);
        self.secret.serialize(buf);
    }
}

impl Deserializable for FileLocationUnavailable {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            volume_id: i64::deserialize(buf)?,
            local_id: i32::deserialize(buf)?,
            secret: i64::deserialize(buf)?,
        })
    }
}

/// `fileLocation#53d69076 dc_id:int volume_id:long local_id:int secret:long = FileLocation;`
#[derive(Clone, Debug, PartialEq)]
pub struct FileLocation {
    pub dc_id: i32,
    pub volume_id: i64,
    pub local_id: i32,
    pub secret: i64,
}

impl Identifiable for FileLocation {
    const CONSTRUCTOR_ID: u32 = 0x53d69076;
}

impl Serializable for FileLocation {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.dc_id.serialize(buf);
        self.volume_id.serialize(buf);
        self.local_id.serialize(buf);
        self.secret.serialize(buf);
    }
}

impl Deserializable for FileLocation {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            dc_id: i32::deserialize(buf)?,
            volume_id: i64::deserialize(buf)?,
            local_id: i32::deserialize(buf)?,
            secret: i64::deserialize(buf)?,
        })
    }
}

/// `userProfilePhotoEmpty#4f11bae1 = UserProfilePhoto;`
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfilePhotoEmpty {}

impl Identifiable for UserProfilePhotoEmpty {
    const CONSTRUCTOR_ID: u32 = 0x4f11bae1;
}

impl Serializable for UserProfilePhotoEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for UserProfilePhotoEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `userProfilePhoto#d559d8c8 photo_id:long photo_small:FileLocation photo_big:FileLocation = UserProfilePhoto;`
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfilePhoto {
    pub photo_id: i64,
    pub photo_small: enums::FileLocation,
    pub photo_big: enums::FileLocation,
}

impl Identifiable for UserProfilePhoto {
    const CONSTRUCTOR_ID: u32 = 0xd559d8c8;
}

impl Serializable for UserProfilePhoto {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.photo_id.serialize(buf);
        self.photo_small.serialize(buf);
        self.photo_big.serialize(buf);
    }
}

impl Deserializable for UserProfilePhoto {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            photo_id: i64::deserialize(buf)?,
            photo_small: enums::FileLocation::deserialize(buf)?,
            photo_big: enums::FileLocation::deserialize(buf)?,
        })
    }
}

/// `userStatusEmpty#09d05049 = UserStatus;`
#[derive(Clone, Debug, PartialEq)]
pub struct UserStatusEmpty {}

impl Identifiable for UserStatusEmpty {
    const CONSTRUCTOR_ID: u32 = 0x09d05049;
}

impl Serializable for UserStatusEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for UserStatusEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `userStatusOnline#edb93949 expires:int = UserStatus;`
#[derive(Clone, Debug, PartialEq)]
pub struct UserStatusOnline {
    pub expires: i32,
}

impl Identifiable for UserStatusOnline {
    const CONSTRUCTOR_ID: u32 = 0xedb93949;
}

impl Serializable for UserStatusOnline {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.expires.serialize(buf);
    }
}

impl Deserializable for UserStatusOnline {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            expires: i32::deserialize(buf)?,
        })
    }
}

/// `userStatusOffline#008c703f was_online:int = UserStatus;`
#[derive(Clone, Debug, PartialEq)]
pub struct UserStatusOffline {
    pub was_online: i32,
}

impl Identifiable for UserStatusOffline {
    const CONSTRUCTOR_ID: u32 = 0x008c703f;
}

impl Serializable for UserStatusOffline {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.was_online.serialize(buf);
    }
}

impl Deserializable for UserStatusOffline {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            was_online: i32::deserialize(buf)?,
        })
    }
}

/// `userStatusRecently#e26f42f1 = UserStatus;`
#[derive(Clone, Debug, PartialEq)]
pub struct UserStatusRecently {}

impl Identifiable for UserStatusRecently {
    const CONSTRUCTOR_ID: u32 = 0xe26f42f1;
}

impl Serializable for UserStatusRecently {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for UserStatusRecently {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `userStatusLastWeek#07bf09fc = UserStatus;`
#[derive(Clone, Debug, PartialEq)]
pub struct UserStatusLastWeek {}

impl Identifiable for UserStatusLastWeek {
    const CONSTRUCTOR_ID: u32 = 0x07bf09fc;
}

impl Serializable for UserStatusLastWeek {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for UserStatusLastWeek {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `userStatusLastMonth#77ebc742 = UserStatus;`
#[derive(Clone, Debug, PartialEq)]
pub struct UserStatusLastMonth {}

impl Identifiable for UserStatusLastMonth {
    const CONSTRUCTOR_ID: u32 = 0x77ebc742;
}

impl Serializable for UserStatusLastMonth {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for UserStatusLastMonth {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `userEmpty#200250ba id:int = User;`
#[derive(Clone, Debug, PartialEq)]
pub struct UserEmpty {
    pub id: i32,
}

impl Identifiable for UserEmpty {
    const CONSTRUCTOR_ID: u32 = 0x200250ba;
}

impl Serializable for UserEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for UserEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
        })
    }
}

/// `user#d10d979a flags:# self:flags.10?true contact:flags.11?true mutual_contact:flags.12?true deleted:flags.13?true bot:flags.14?true bot_chat_history:flags.15?true bot_nochats:flags.16?true verified:flags.17?true restricted:flags.18?true min:flags.20?true bot_inline_geo:flags.21?true id:int access_hash:flags.0?long first_name:flags.1?string last_name:flags.2?string username:flags.3?string phone:flags.4?string photo:flags.5?UserProfilePhoto status:flags.6?UserStatus bot_info_version:flags.14?int restriction_reason:flags.18?string bot_inline_placeholder:flags.19?string = User;`
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub is_self: bool,
    pub contact: bool,
    pub mutual_contact: bool,
    pub deleted: bool,
    pub bot: bool,
    pub bot_chat_history: bool,
    pub bot_nochats: bool,
    pub verified: bool,
    pub restricted: bool,
    pub min: bool,
    pub bot_inline_geo: bool,
    pub id: i32,
    pub access_hash: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<enums::UserProfilePhoto>,
    pub status: Option<enums::UserStatus>,
    pub bot_info_version: Option<i32>,
    pub restriction_reason: Option<String>,
    pub bot_inline_placeholder: Option<String>,
}

impl Identifiable for User {
    const CONSTRUCTOR_ID: u32 = 0xd10d979a;
}

impl Serializable for User {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.is_self {
            flags |= 1 << 10;
        }
        if self.contact {
            flags |= 1 << 11;
        }
        if self.mutual_contact {
            flags |= 1 << 12;
        }
        if self.deleted {
            flags |= 1 << 13;
        }
        if self.bot || self.bot_info_version.is_some() {
            flags |= 1 << 14;
        }
        if self.bot_chat_history {
            flags |= 1 << 15;
        }
        if self.bot_nochats {
            flags |= 1 << 16;
        }
        if self.verified {
            flags |= 1 << 17;
        }
        if self.restricted || self.restriction_reason.is_some() {
            flags |= 1 << 18;
        }
        if self.min {
            flags |= 1 << 20;
        }
        if self.bot_inline_geo {
            flags |= 1 << 21;
        }
        if self.access_hash.is_some() {
            flags |= 1 << 0;
        }
        if self.first_name.is_some() {
            flags |= 1 << 1;
        }
        if self.last_name.is_some() {
            flags |= 1 << 2;
        }
        if self.username.is_some() {
            flags |= 1 << 3;
        }
        if self.phone.is_some() {
            flags |= 1 << 4;
        }
        if self.photo.is_some() {
            flags |= 1 << 5;
        }
        if self.status.is_some() {
            flags |= 1 << 6;
        }
        if self.bot_inline_placeholder.is_some() {
            flags |= 1 << 19;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        if let Some(ref x) = self.access_hash {
            x.serialize(buf);
        }
        if let Some(ref x) = self.first_name {
            x.serialize(buf);
        }
        if let Some(ref x) = self.last_name {
            x.serialize(buf);
        }
        if let Some(ref x) = self.username {
            x.serialize(buf);
        }
        if let Some(ref x) = self.phone {
            x.serialize(buf);
        }
        if let Some(ref x) = self.photo {
            x.serialize(buf);
        }
        if let Some(ref x) = self.status {
            x.serialize(buf);
        }
        // Bits 14 and 18 are shared between a boolean flag and an
        // optional field; once the bit is set the field must follow.
        if flags & (1 << 14) != 0 {
            self.bot_info_version.unwrap_or(0).serialize(buf);
        }
        if flags & (1 << 18) != 0 {
            self.restriction_reason
                .clone()
                .unwrap_or_default()
                .serialize(buf);
        }
        if let Some(ref x) = self.bot_inline_placeholder {
            x.serialize(buf);
        }
    }
}

impl Deserializable for User {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        let id = i32::deserialize(buf)?;
        let access_hash = if flags & (1 << 0) != 0 {
            Some(i64::deserialize(buf)?)
        } else {
            None
        };
        let first_name = if flags & (1 << 1) != 0 {
            Some(String::deserialize(buf)?)
        } else {
            None
        };
        let last_name = if flags & (1 << 2) != 0 {
            Some(String::deserialize(buf)?)
        } else {
            None
        };
        let username = if flags & (1 << 3) != 0 {
            Some(String::deserialize(buf)?)
        } else {
            None
        };
        let phone = if flags & (1 << 4) != 0 {
            Some(String::deserialize(buf)?)
        } else {
            None
        };
        let photo = if flags & (1 << 5) != 0 {
            Some(enums::UserProfilePhoto::deserialize(buf)?)
        } else {
            None
        };
        let status = if flags & (1 << 6) != 0 {
            Some(enums::UserStatus::deserialize(buf)?)
        } else {
            None
        };
        let bot_info_version = if flags & (1 << 14) != 0 {
            Some(i32::deserialize(buf)?)
        } else {
            None
        };
        let restriction_reason = if flags & (1 << 18) != 0 {
            Some(String::deserialize(buf)?)
        } else {
            None
        };
        let bot_inline_placeholder = if flags & (1 << 19) != 0 {
            Some(String::deserialize(buf)?)
        } else {
            None
        };
        Ok(Self {
            is_self: flags & (1 << 10) != 0,
            contact: flags & (1 << 11) != 0,
            mutual_contact: flags & (1 << 12) != 0,
            deleted: flags & (1 << 13) != 0,
            bot: flags & (1 << 14) != 0,
            bot_chat_history: flags & (1 << 15) != 0,
            bot_nochats: flags & (1 << 16) != 0,
            verified: flags & (1 << 17) != 0,
            restricted: flags & (1 << 18) != 0,
            min: flags & (1 << 20) != 0,
            bot_inline_geo: flags & (1 << 21) != 0,
            id,
            access_hash,
            first_name,
            last_name,
            username,
            phone,
            photo,
            status,
            bot_info_version,
            restriction_reason,
            bot_inline_placeholder,
        })
    }
}

/// `chatPhotoEmpty#37c1011c = ChatPhoto;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatPhotoEmpty {}

impl Identifiable for ChatPhotoEmpty {
    const CONSTRUCTOR_ID: u32 = 0x37c1011c;
}

impl Serializable for ChatPhotoEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for ChatPhotoEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `chatPhoto#6153276a photo_small:FileLocation photo_big:FileLocation = ChatPhoto;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatPhoto {
    pub photo_small: enums::FileLocation,
    pub photo_big: enums::FileLocation,
}

impl Identifiable for ChatPhoto {
    const CONSTRUCTOR_ID: u32 = 0x6153276a;
}

impl Serializable for ChatPhoto {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.photo_small.serialize(buf);
        self.photo_big.serialize(buf);
    }
}

impl Deserializable for ChatPhoto {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            photo_small: enums::FileLocation::deserialize(buf)?,
            photo_big: enums::FileLocation::deserialize(buf)?,
        })
    }
}

/// `chatEmpty#9ba2d800 id:int = Chat;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEmpty {
    pub id: i32,
}

impl Identifiable for ChatEmpty {
    const CONSTRUCTOR_ID: u32 = 0x9ba2d800;
}

impl Serializable for ChatEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for ChatEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
        })
    }
}

/// `chat#d91cdd54 flags:# creator:flags.0?true kicked:flags.1?true left:flags.2?true admins_enabled:flags.3?true admin:flags.4?true deactivated:flags.5?true id:int title:string photo:ChatPhoto participants_count:int date:int version:int migrated_to:flags.6?InputChannel = Chat;`
#[derive(Clone, Debug, PartialEq)]
pub struct Chat {
    pub creator: bool,
    pub kicked: bool,
    pub left: bool,
    pub admins_enabled: bool,
    pub admin: bool,
    pub deactivated: bool,
    pub id: i32,
    pub title: String,
    pub photo: enums::ChatPhoto,
    pub participants_count: i32,
    pub date: i32,
    pub version: i32,
    pub migrated_to: Option<enums::InputChannel>,
}

impl Identifiable for Chat {
    const CONSTRUCTOR_ID: u32 = 0xd91cdd54;
}

impl Serializable for Chat {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.creator {
            flags |= 1 << 0;
        }
        if self.kicked {
            flags |= 1 << 1;
        }
        if self.left {
            flags |= 1 << 2;
        }
        if self.admins_enabled {
            flags |= 1 << 3;
        }
        if self.admin {
            flags |= 1 << 4;
        }
        if self.deactivated {
            flags |= 1 << 5;
        }
        if self.migrated_to.is_some() {
            flags |= 1 << 6;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        self.title.serialize(buf);
        self.photo.serialize(buf);
        self.participants_count.serialize(buf);
        self.date.serialize(buf);
        self.version.serialize(buf);
        if let Some(ref x) = self.migrated_to {
            x.serialize(buf);
        }
    }
}

impl Deserializable for Chat {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            creator: flags & (1 << 0) != 0,
            kicked: flags & (1 << 1) != 0,
            left: flags & (1 << 2) != 0,
            admins_enabled: flags & (1 << 3) != 0,
            admin: flags & (1 << 4) != 0,
            deactivated: flags & (1 << 5) != 0,
            id: i32::deserialize(buf)?,
            title: String::deserialize(buf)?,
            photo: enums::ChatPhoto::deserialize(buf)?,
            participants_count: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            version: i32::deserialize(buf)?,
            migrated_to: if flags & (1 << 6) != 0 {
                Some(enums::InputChannel::deserialize(buf)?)
            } else {
                None
            },
        })
    }
}

/// `chatForbidden#07328bdb id:int title:string = Chat;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatForbidden {
    pub id: i32,
    pub title: String,
}

impl Identifiable for ChatForbidden {
    const CONSTRUCTOR_ID: u32 = 0x07328bdb;
}

impl Serializable for ChatForbidden {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.title.serialize(buf);
    }
}

impl Deserializable for ChatForbidden {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
            title: String::deserialize(buf)?,
        })
    }
}

/// `channel#a14dca52 flags:# creator:flags.0?true kicked:flags.1?true left:flags.2?true editor:flags.3?true moderator:flags.4?true broadcast:flags.5?true verified:flags.7?true megagroup:flags.8?true restricted:flags.9?true democracy:flags.10?true signatures:flags.11?true min:flags.12?true id:int access_hash:flags.13?long title:string username:flags.6?string photo:ChatPhoto date:int version:int restriction_reason:flags.9?string = Chat;`
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub creator: bool,
    pub kicked: bool,
    pub left: bool,
    pub editor: bool,
    pub moderator: bool,
    pub broadcast: bool,
    pub verified: bool,
    pub megagroup: bool,
    pub restricted: bool,
    pub democracy: bool,
    pub signatures: bool,
    pub min: bool,
    pub id: i32,
    pub access_hash: Option<i64>,
    pub title: String,
    pub username: Option<String>,
    pub photo: enums::ChatPhoto,
    pub date: i32,
    pub version: i32,
    pub restriction_reason: Option<String>,
}

impl Identifiable for Channel {
    const CONSTRUCTOR_ID: u32 = 0xa14dca52;
}

impl Serializable for Channel {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.creator {
            flags |= 1 << 0;
        }
        if self.kicked {
            flags |= 1 << 1;
        }
        if self.left {
            flags |= 1 << 2;
        }
        if self.editor {
            flags |= 1 << 3;
        }
        if self.moderator {
            flags |= 1 << 4;
        }
        if self.broadcast {
            flags |= 1 << 5;
        }
        if self.verified {
            flags |= 1 << 7;
        }
        if self.megagroup {
            flags |= 1 << 8;
        }
        if self.restricted || self.restriction_reason.is_some() {
            flags |= 1 << 9;
        }
        if self.democracy {
            flags |= 1 << 10;
        }
        if self.signatures {
            flags |= 1 << 11;
        }
        if self.min {
            flags |= 1 << 12;
        }
        if self.access_hash.is_some() {
            flags |= 1 << 13;
        }
        if self.username.is_some() {
            flags |= 1 << 6;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        if let Some(ref x) = self.access_hash {
            x.serialize(buf);
        }
        self.title.serialize(buf);
        if let Some(ref x) = self.username {
            x.serialize(buf);
        }
        self.photo.serialize(buf);
        self.date.serialize(buf);
        self.version.serialize(buf);
        // Bit 9 doubles as the `restricted` flag; once set, the reason
        // string must follow.
        if flags & (1 << 9) != 0 {
            self.restriction_reason
                .clone()
                .unwrap_or_default()
                .serialize(buf);
        }
    }
}

impl Deserializable for Channel {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        let id = i32::deserialize(buf)?;
        let access_hash = if flags & (1 << 13) != 0 {
            Some(i64::deserialize(buf)?)
        } else {
            None
        };
        let title = String::deserialize(buf)?;
        let username = if flags & (1 << 6) != 0 {
            Some(String::deserialize(buf)?)
        } else {
            None
        };
        let photo = enums::ChatPhoto::deserialize(buf)?;
        let date = i32::deserialize(buf)?;
        let version = i32::deserialize(buf)?;
        let restriction_reason = if flags & (1 << 9) != 0 {
            Some(String::deserialize(buf)?)
        } else {
            None
        };
        Ok(Self {
            creator: flags & (1 << 0) != 0,
            kicked: flags & (1 << 1) != 0,
            left: flags & (1 << 2) != 0,
            editor: flags & (1 << 3) != 0,
            moderator: flags & (1 << 4) != 0,
            broadcast: flags & (1 << 5) != 0,
            verified: flags & (1 << 7) != 0,
            megagroup: flags & (1 << 8) != 0,
            restricted: flags & (1 << 9) != 0,
            democracy: flags & (1 << 10) != 0,
            signatures: flags & (1 << 11) != 0,
            min: flags & (1 << 12) != 0,
            id,
            access_hash,
            title,
            username,
            photo,
            date,
            version,
            restriction_reason,
        })
    }
}

/// `channelForbidden#2d85832c id:int access_hash:long title:string = Chat;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelForbidden {
    pub id: i32,
    pub access_hash: i64,
    pub title: String,
}

impl Identifiable for ChannelForbidden {
    const CONSTRUCTOR_ID: u32 = 0x2d85832c;
}

impl Serializable for ChannelForbidden {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.title.serialize(buf);
    }
}

impl Deserializable for ChannelForbidden {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
            title: String::deserialize(buf)?,
        })
    }
}

/// `chatParticipant#c8d7493e user_id:int inviter_id:int date:int = ChatParticipant;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipant {
    pub user_id: i32,
    pub inviter_id: i32,
    pub date: i32,
}

impl Identifiable for ChatParticipant {
    const CONSTRUCTOR_ID: u32 = 0xc8d7493e;
}

impl Serializable for ChatParticipant {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
        self.inviter_id.serialize(buf);
        self.date.serialize(buf);
    }
}

impl Deserializable for ChatParticipant {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
            inviter_id: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
        })
    }
}

/// `chatParticipantCreator#da13538a user_id:int = ChatParticipant;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipantCreator {
    pub user_id: i32,
}

impl Identifiable for ChatParticipantCreator {
    const CONSTRUCTOR_ID: u32 = 0xda13538a;
}

impl Serializable for ChatParticipantCreator {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
    }
}

impl Deserializable for ChatParticipantCreator {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
        })
    }
}

/// `chatParticipantAdmin#e2d6e436 user_id:int inviter_id:int date:int = ChatParticipant;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipantAdmin {
    pub user_id: i32,
    pub inviter_id: i32,
    pub date: i32,
}

impl Identifiable for ChatParticipantAdmin {
    const CONSTRUCTOR_ID: u32 = 0xe2d6e436;
}

impl Serializable for ChatParticipantAdmin {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
        self.inviter_id.serialize(buf);
        self.date.serialize(buf);
    }
}

impl Deserializable for ChatParticipantAdmin {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
            inviter_id: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
        })
    }
}

/// `chatParticipantsForbidden#fc900c2b flags:# chat_id:int self_participant:flags.0?ChatParticipant = ChatParticipants;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipantsForbidden {
    pub chat_id: i32,
    pub self_participant: Option<enums::ChatParticipant>,
}

impl Identifiable for ChatParticipantsForbidden {
    const CONSTRUCTOR_ID: u32 = 0xfc900c2b;
}

impl Serializable for ChatParticipantsForbidden {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.self_participant.is_some() {
            flags |= 1 << 0;
        }
        flags.serialize(buf);
        self.chat_id.serialize(buf);
        if let Some(ref x) = self.self_participant {
            x.serialize(buf);
        }
    }
}

impl Deserializable for ChatParticipantsForbidden {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            chat_id: i32::deserialize(buf)?,
            self_participant: if flags & (1 << 0) != 0 {
                Some(enums::ChatParticipant::deserialize(buf)?)
            } else {
                None
            },
        })
    }
}

/// `chatParticipants#3f460fed chat_id:int participants:Vector<ChatParticipant> version:int = ChatParticipants;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatParticipants {
    pub chat_id: i32,
    pub participants: Vec<enums::ChatParticipant>,
    pub version: i32,
}

impl Identifiable for ChatParticipants {
    const CONSTRUCTOR_ID: u32 = 0x3f460fed;
}

impl Serializable for ChatParticipants {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat_id.serialize(buf);
        self.participants.serialize(buf);
        self.version.serialize(buf);
    }
}

impl Deserializable for ChatParticipants {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            chat_id: i32::deserialize(buf)?,
            participants: Vec::<enums::ChatParticipant>::deserialize(buf)?,
            version: i32::deserialize(buf)?,
        })
    }
}

/// `geoPointEmpty#1117dd5f = GeoPoint;`
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPointEmpty {}

impl Identifiable for GeoPointEmpty {
    const CONSTRUCTOR_ID: u32 = 0x1117dd5f;
}

impl Serializable for GeoPointEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for GeoPointEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `geoPoint#2049d70c long:double lat:double = GeoPoint;`
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub long: f64,
    pub lat: f64,
}

impl Identifiable for GeoPoint {
    const CONSTRUCTOR_ID: u32 = 0x2049d70c;
}

impl Serializable for GeoPoint {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.long.serialize(buf);
        self.lat.serialize(buf);
    }
}

impl Deserializable for GeoPoint {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            long: f64::deserialize(buf)?,
            lat: f64::deserialize(buf)?,
        })
    }
}

/// `photoSizeEmpty#0e17e23c type:string = PhotoSize;`
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSizeEmpty {
    pub r#type: String,
}

impl Identifiable for PhotoSizeEmpty {
    const CONSTRUCTOR_ID: u32 = 0x0e17e23c;
}

impl Serializable for PhotoSizeEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.r#type.serialize(buf);
    }
}

impl Deserializable for PhotoSizeEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            r#type: String::deserialize(buf)?,
        })
    }
}

/// `photoSize#77bfb61b type:string location:FileLocation w:int h:int size:int = PhotoSize;`
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoSize {
    pub r#type: String,
    pub location: enums::FileLocation,
    pub w: i32,
    pub h: i32,
    pub size: i32,
}

impl Identifiable for PhotoSize {
    const CONSTRUCTOR_ID: u32 = 0x77bfb61b;
}

impl Serializable for PhotoSize {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.r#type.serialize(buf);
        self.location.serialize(buf);
        self.w.serialize(buf);
        self.h.serialize(buf);
        self.size.serialize(buf);
    }
}

impl Deserializable for PhotoSize {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            r#type: String::deserialize(buf)?,
            location: enums::FileLocation::deserialize(buf)?,
            w: i32::deserialize(buf)?,
            h: i32::deserialize(buf)?,
            size: i32::deserialize(buf)?,
        })
    }
}

/// `photoCachedSize#e9a734fa type:string location:FileLocation w:int h:int bytes:bytes = PhotoSize;`
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoCachedSize {
    pub r#type: String,
    pub location: enums::FileLocation,
    pub w: i32,
    pub h: i32,
    pub bytes: Vec<u8>,
}

impl Identifiable for PhotoCachedSize {
    const CONSTRUCTOR_ID: u32 = 0xe9a734fa;
}

impl Serializable for PhotoCachedSize {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.r#type.serialize(buf);
        self.location.serialize(buf);
        self.w.serialize(buf);
        self.h.serialize(buf);
        self.bytes.serialize(buf);
    }
}

impl Deserializable for PhotoCachedSize {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            r#type: String::deserialize(buf)?,
            location: enums::FileLocation::deserialize(buf)?,
            w: i32::deserialize(buf)?,
            h: i32::deserialize(buf)?,
            bytes: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// `photoEmpty#2331b22d id:long = Photo;`
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoEmpty {
    pub id: i64,
}

impl Identifiable for PhotoEmpty {
    const CONSTRUCTOR_ID: u32 = 0x2331b22d;
}

impl Serializable for PhotoEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for PhotoEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i64::deserialize(buf)?,
        })
    }
}

/// `photo#cded42fe id:long access_hash:long date:int sizes:Vector<PhotoSize> = Photo;`
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub sizes: Vec<enums::PhotoSize>,
}

impl Identifiable for Photo {
    const CONSTRUCTOR_ID: u32 = 0xcded42fe;
}

impl Serializable for Photo {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.date.serialize(buf);
        self.sizes.serialize(buf);
    }
}

impl Deserializable for Photo {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i64::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            sizes: Vec::<enums::PhotoSize>::deserialize(buf)?,
        })
    }
}

/// `inputStickerSetEmpty#ffb62b95 = InputStickerSet;`
#[derive(Clone, Debug, PartialEq)]
pub struct InputStickerSetEmpty {}

impl Identifiable for InputStickerSetEmpty {
    const CONSTRUCTOR_ID: u32 = 0xffb62b95;
}

impl Serializable for InputStickerSetEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for InputStickerSetEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `inputStickerSetID#9de7a269 id:long access_hash:long = InputStickerSet;`
#[derive(Clone, Debug, PartialEq)]
pub struct InputStickerSetId {
    pub id: i64,
    pub access_hash: i64,
}

impl Identifiable for InputStickerSetId {
    const CONSTRUCTOR_ID: u32 = 0x9de7a269;
}

impl Serializable for InputStickerSetId {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
    }
}

impl Deserializable for InputStickerSetId {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i64::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
        })
    }
}

/// `inputStickerSetShortName#861cc8a0 short_name:string = InputStickerSet;`
#[derive(Clone, Debug, PartialEq)]
pub struct InputStickerSetShortName {
    pub short_name: String,
}

impl Identifiable for InputStickerSetShortName {
    const CONSTRUCTOR_ID: u32 = 0x861cc8a0;
}

impl Serializable for InputStickerSetShortName {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.short_name.serialize(buf);
    }
}

impl Deserializable for InputStickerSetShortName {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            short_name: String::deserialize(buf)?,
        })
    }
}

/// `documentAttributeImageSize#6c37c15c w:int h:int = DocumentAttribute;`
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAttributeImageSize {
    pub w: i32,
    pub h: i32,
}

impl Identifiable for DocumentAttributeImageSize {
    const CONSTRUCTOR_ID: u32 = 0x6c37c15c;
}

impl Serializable for DocumentAttributeImageSize {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.w.serialize(buf);
        self.h.serialize(buf);
    }
}

impl Deserializable for DocumentAttributeImageSize {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            w: i32::deserialize(buf)?,
            h: i32::deserialize(buf)?,
        })
    }
}

/// `documentAttributeAnimated#11b58939 = DocumentAttribute;`
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAttributeAnimated {}

impl Identifiable for DocumentAttributeAnimated {
    const CONSTRUCTOR_ID: u32 = 0x11b58939;
}

impl Serializable for DocumentAttributeAnimated {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for DocumentAttributeAnimated {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `documentAttributeSticker#3a556302 alt:string stickerset:InputStickerSet = DocumentAttribute;`
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAttributeSticker {
    pub alt: String,
    pub stickerset: enums::InputStickerSet,
}

impl Identifiable for DocumentAttributeSticker {
    const CONSTRUCTOR_ID: u32 = 0x3a556302;
}

impl Serializable for DocumentAttributeSticker {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.alt.serialize(buf);
        self.stickerset.serialize(buf);
    }
}

impl Deserializable for DocumentAttributeSticker {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            alt: String::deserialize(buf)?,
            stickerset: enums::InputStickerSet::deserialize(buf)?,
        })
    }
}

/// `documentAttributeVideo#5910cccb duration:int w:int h:int = DocumentAttribute;`
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAttributeVideo {
    pub duration: i32,
    pub w: i32,
    pub h: i32,
}

impl Identifiable for DocumentAttributeVideo {
    const CONSTRUCTOR_ID: u32 = 0x5910cccb;
}

impl Serializable for DocumentAttributeVideo {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.duration.serialize(buf);
        self.w.serialize(buf);
        self.h.serialize(buf);
    }
}

impl Deserializable for DocumentAttributeVideo {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            duration: i32::deserialize(buf)?,
            w: i32::deserialize(buf)?,
            h: i32::deserialize(buf)?,
        })
    }
}

/// `documentAttributeAudio#9852f9c6 flags:# voice:flags.10?true duration:int title:flags.0?string performer:flags.1?string waveform:flags.2?bytes = DocumentAttribute;`
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAttributeAudio {
    pub voice: bool,
    pub duration: i32,
    pub title: Option<String>,
    pub performer: Option<String>,
    pub waveform: Option<Vec<u8>>,
}

impl Identifiable for DocumentAttributeAudio {
    const CONSTRUCTOR_ID: u32 = 0x9852f9c6;
}

impl Serializable for DocumentAttributeAudio {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.voice {
            flags |= 1 << 10;
        }
        if self.title.is_some() {
            flags |= 1 << 0;
        }
        if self.performer.is_some() {
            flags |= 1 << 1;
        }
        if self.waveform.is_some() {
            flags |= 1 << 2;
        }
        flags.serialize(buf);
        self.duration.serialize(buf);
        if let Some(ref x) = self.title {
            x.serialize(buf);
        }
        if let Some(ref x) = self.performer {
            x.serialize(buf);
        }
        if let Some(ref x) = self.waveform {
            x.serialize(buf);
        }
    }
}

impl Deserializable for DocumentAttributeAudio {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            voice: flags & (1 << 10) != 0,
            duration: i32::deserialize(buf)?,
            title: if flags & (1 << 0) != 0 {
                Some(String::deserialize(buf)?)
            } else {
                None
            },
            performer: if flags & (1 << 1) != 0 {
                Some(String::deserialize(buf)?)
            } else {
                None
            },
            waveform: if flags & (1 << 2) != 0 {
                Some(Vec::<u8>::deserialize(buf)?)
            } else {
                None
            },
        })
    }
}

/// `documentAttributeFilename#15590068 file_name:string = DocumentAttribute;`
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAttributeFilename {
    pub file_name: String,
}

impl Identifiable for DocumentAttributeFilename {
    const CONSTRUCTOR_ID: u32 = 0x15590068;
}

impl Serializable for DocumentAttributeFilename {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.file_name.serialize(buf);
    }
}

impl Deserializable for DocumentAttributeFilename {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            file_name: String::deserialize(buf)?,
        })
    }
}

/// `documentAttributeHasStickers#9801d2f7 = DocumentAttribute;`
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentAttributeHasStickers {}

impl Identifiable for DocumentAttributeHasStickers {
    const CONSTRUCTOR_ID: u32 = 0x9801d2f7;
}

impl Serializable for DocumentAttributeHasStickers {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for DocumentAttributeHasStickers {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `documentEmpty#36f8c871 id:long = Document;`
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentEmpty {
    pub id: i64,
}

impl Identifiable for DocumentEmpty {
    const CONSTRUCTOR_ID: u32 = 0x36f8c871;
}

impl Serializable for DocumentEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for DocumentEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i64::deserialize(buf)?,
        })
    }
}

/// `document#f9a39f4f id:long access_hash:long date:int mime_type:string size:int thumb:PhotoSize dc_id:int version:int attributes:Vector<DocumentAttribute> = Document;`
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: i64,
    pub access_hash: i64,
    pub date: i32,
    pub mime_type: String,
    pub size: i32,
    pub thumb: enums::PhotoSize,
    pub dc_id: i32,
    pub version: i32,
    pub attributes: Vec<enums::DocumentAttribute>,
}

impl Identifiable for Document {
    const CONSTRUCTOR_ID: u32 = 0xf9a39f4f;
}

impl Serializable for Document {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.date.serialize(buf);
        self.mime_type.serialize(buf);
        self.size.serialize(buf);
        self.thumb.serialize(buf);
        self.dc_id.serialize(buf);
        self.version.serialize(buf);
        self.attributes.serialize(buf);
    }
}

impl Deserializable for Document {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i64::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            mime_type: String::deserialize(buf)?,
            size: i32::deserialize(buf)?,
            thumb: enums::PhotoSize::deserialize(buf)?,
            dc_id: i32::deserialize(buf)?,
            version: i32::deserialize(buf)?,
            attributes: Vec::<enums::DocumentAttribute>::deserialize(buf)?,
        })
    }
}

/// `webPageEmpty#eb1477e8 id:long = WebPage;`
#[derive(Clone, Debug, PartialEq)]
pub struct WebPageEmpty {
    pub id: i64,
}

impl Identifiable for WebPageEmpty {
    const CONSTRUCTOR_ID: u32 = 0xeb1477e8;
}

impl Serializable for WebPageEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for WebPageEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i64::deserialize(buf)?,
        })
    }
}

/// `webPagePending#c586da1c id:long date:int = WebPage;`
#[derive(Clone, Debug, PartialEq)]
pub struct WebPagePending {
    pub id: i64,
    pub date: i32,
}

impl Identifiable for WebPagePending {
    const CONSTRUCTOR_ID: u32 = 0xc586da1c;
}

impl Serializable for WebPagePending {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.date.serialize(buf);
    }
}

impl Deserializable for WebPagePending {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i64::deserialize(buf)?,
            date: i32::deserialize(buf)?,
        })
    }
}

/// `webPage#ca820ed7 flags:# id:long url:string display_url:string type:flags.0?string site_name:flags.1?string title:flags.2?string description:flags.3?string photo:flags.4?Photo embed_url:flags.5?string embed_type:flags.5?string embed_width:flags.6?int embed_height:flags.6?int duration:flags.7?int author:flags.8?string document:flags.9?Document = WebPage;`
#[derive(Clone, Debug, PartialEq)]
pub struct WebPage {
    pub id: i64,
    pub url: String,
    pub display_url: String,
    pub r#type: Option<String>,
    pub site_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo: Option<enums::Photo>,
    pub embed_url: Option<String>,
    pub embed_type: Option<String>,
    pub embed_width: Option<i32>,
    pub embed_height: Option<i32>,
    pub duration: Option<i32>,
    pub author: Option<String>,
    pub document: Option<enums::Document>,
}

impl Identifiable for WebPage {
    const CONSTRUCTOR_ID: u32 = 0xca820ed7;
}

impl Serializable for WebPage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.r#type.is_some() {
            flags |= 1 << 0;
        }
        if self.site_name.is_some() {
            flags |= 1 << 1;
        }
        if self.title.is_some() {
            flags |= 1 << 2;
        }
        if self.description.is_some() {
            flags |= 1 << 3;
        }
        if self.photo.is_some() {
            flags |= 1 << 4;
        }
        if self.embed_url.is_some() {
            flags |= 1 << 5;
        }
        if self.embed_width.is_some() {
            flags |= 1 << 6;
        }
        if self.duration.is_some() {
            flags |= 1 << 7;
        }
        if self.author.is_some() {
            flags |= 1 << 8;
        }
        if self.document.is_some() {
            flags |= 1 << 9;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        self.url.serialize(buf);
        self.display_url.serialize(buf);
        if let Some(ref x) = self.r#type {
            x.serialize(buf);
        }
        if let Some(ref x) = self.site_name {
            x.serialize(buf);
        }
        if let Some(ref x) = self.title {
            x.serialize(buf);
        }
        if let Some(ref x) = self.description {
            x.serialize(buf);
        }
        if let Some(ref x) = self.photo {
            x.serialize(buf);
        }
        if let Some(ref x) = self.embed_url {
            x.serialize(buf);
        }
        if let Some(ref x) = self.embed_type {
            x.serialize(buf);
        }
        if let Some(ref x) = self.embed_width {
            x.serialize(buf);
        }
        if let Some(ref x) = self.embed_height {
            x.serialize(buf);
        }
        if let Some(ref x) = self.duration {
            x.serialize(buf);
        }
        if let Some(ref x) = self.author {
            x.serialize(buf);
        }
        if let Some(ref x) = self.document {
            x.serialize(buf);
        }
    }
}

impl Deserializable for WebPage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            id: i64::deserialize(buf)?,
            url: String::deserialize(buf)?,
            display_url: String::deserialize(buf)?,
            r#type: if flags & (1 << 0) != 0 {
                Some(String::deserialize(buf)?)
            } else {
                None
            },
            site_name: if flags & (1 << 1) != 0 {
                Some(String::deserialize(buf)?)
            } else {
                None
            },
            title: if flags & (1 << 2) != 0 {
                Some(String::deserialize(buf)?)
            } else {
                None
            },
            description: if flags & (1 << 3) != 0 {
                Some(String::deserialize(buf)?)
            } else {
                None
            },
            photo: if flags & (1 << 4) != 0 {
                Some(enums::Photo::deserialize(buf)?)
            } else {
                None
            },
            embed_url: if flags & (1 << 5) != 0 {
                Some(String::deserialize(buf)?)
            } else {
                None
            },
            embed_type: if flags & (1 << 5) != 0 {
                Some(String::deserialize(buf)?)
            } else {
                None
            },
            embed_width: if flags & (1 << 6) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
            embed_height: if flags & (1 << 6) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
            duration: if flags & (1 << 7) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
            author: if flags & (1 << 8) != 0 {
                Some(String::deserialize(buf)?)
            } else {
                None
            },
            document: if flags & (1 << 9) != 0 {
                Some(enums::Document::deserialize(buf)?)
            } else {
                None
            },
        })
    }
}

/// `messageEntityUnknown#bb92ba95 offset:int length:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityUnknown {
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityUnknown {
    const CONSTRUCTOR_ID: u32 = 0xbb92ba95;
}

impl Serializable for MessageEntityUnknown {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityUnknown {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
        })
    }
}

/// `messageEntityMention#fa04579d offset:int length:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityMention {
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityMention {
    const CONSTRUCTOR_ID: u32 = 0xfa04579d;
}

impl Serializable for MessageEntityMention {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityMention {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
        })
    }
}

/// `messageEntityHashtag#6f635b0d offset:int length:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityHashtag {
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityHashtag {
    const CONSTRUCTOR_ID: u32 = 0x6f635b0d;
}

impl Serializable for MessageEntityHashtag {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityHashtag {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
        })
    }
}

/// `messageEntityBotCommand#6cef8ac7 offset:int length:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityBotCommand {
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityBotCommand {
    const CONSTRUCTOR_ID: u32 = 0x6cef8ac7;
}

impl Serializable for MessageEntityBotCommand {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityBotCommand {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
        })
    }
}

/// `messageEntityUrl#6ed02538 offset:int length:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityUrl {
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityUrl {
    const CONSTRUCTOR_ID: u32 = 0x6ed02538;
}

impl Serializable for MessageEntityUrl {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityUrl {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
        })
    }
}

/// `messageEntityEmail#64e475c2 offset:int length:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityEmail {
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityEmail {
    const CONSTRUCTOR_ID: u32 = 0x64e475c2;
}

impl Serializable for MessageEntityEmail {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityEmail {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
        })
    }
}

/// `messageEntityBold#bd610bc9 offset:int length:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityBold {
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityBold {
    const CONSTRUCTOR_ID: u32 = 0xbd610bc9;
}

impl Serializable for MessageEntityBold {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityBold {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
        })
    }
}

/// `messageEntityItalic#826f8b60 offset:int length:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityItalic {
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityItalic {
    const CONSTRUCTOR_ID: u32 = 0x826f8b60;
}

impl Serializable for MessageEntityItalic {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityItalic {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
        })
    }
}

/// `messageEntityCode#28a20571 offset:int length:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityCode {
    pub offset: i32,
    pub length: i32,
}

impl Identifiable for MessageEntityCode {
    const CONSTRUCTOR_ID: u32 = 0x28a20571;
}

impl Serializable for MessageEntityCode {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
    }
}

impl Deserializable for MessageEntityCode {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
        })
    }
}

/// `messageEntityPre#73924be0 offset:int length:int language:string = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityPre {
    pub offset: i32,
    pub length: i32,
    pub language: String,
}

impl Identifiable for MessageEntityPre {
    const CONSTRUCTOR_ID: u32 = 0x73924be0;
}

impl Serializable for MessageEntityPre {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
        self.language.serialize(buf);
    }
}

impl Deserializable for MessageEntityPre {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
            language: String::deserialize(buf)?,
        })
    }
}

/// `messageEntityTextUrl#76a6d327 offset:int length:int url:string = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityTextUrl {
    pub offset: i32,
    pub length: i32,
    pub url: String,
}

impl Identifiable for MessageEntityTextUrl {
    const CONSTRUCTOR_ID: u32 = 0x76a6d327;
}

impl Serializable for MessageEntityTextUrl {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
        self.url.serialize(buf);
    }
}

impl Deserializable for MessageEntityTextUrl {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
            url: String::deserialize(buf)?,
        })
    }
}

/// `messageEntityMentionName#352dca58 offset:int length:int user_id:int = MessageEntity;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityMentionName {
    pub offset: i32,
    pub length: i32,
    pub user_id: i32,
}

impl Identifiable for MessageEntityMentionName {
    const CONSTRUCTOR_ID: u32 = 0x352dca58;
}

impl Serializable for MessageEntityMentionName {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.offset.serialize(buf);
        self.length.serialize(buf);
        self.user_id.serialize(buf);
    }
}

impl Deserializable for MessageEntityMentionName {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            offset: i32::deserialize(buf)?,
            length: i32::deserialize(buf)?,
            user_id: i32::deserialize(buf)?,
        })
    }
}

/// `keyboardButton#a2fa4880 text:string = KeyboardButton;`
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardButton {
    pub text: String,
}

impl Identifiable for KeyboardButton {
    const CONSTRUCTOR_ID: u32 = 0xa2fa4880;
}

impl Serializable for KeyboardButton {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.text.serialize(buf);
    }
}

impl Deserializable for KeyboardButton {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            text: String::deserialize(buf)?,
        })
    }
}

/// `keyboardButtonRow#77608b83 buttons:Vector<KeyboardButton> = KeyboardButtonRow;`
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardButtonRow {
    pub buttons: Vec<enums::KeyboardButton>,
}

impl Identifiable for KeyboardButtonRow {
    const CONSTRUCTOR_ID: u32 = 0x77608b83;
}

impl Serializable for KeyboardButtonRow {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.buttons.serialize(buf);
    }
}

impl Deserializable for KeyboardButtonRow {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            buttons: Vec::<enums::KeyboardButton>::deserialize(buf)?,
        })
    }
}

/// `replyKeyboardHide#a03e5b85 flags:# selective:flags.2?true = ReplyMarkup;`
#[derive(Clone, Debug, PartialEq)]
pub struct ReplyKeyboardHide {
    pub selective: bool,
}

impl Identifiable for ReplyKeyboardHide {
    const CONSTRUCTOR_ID: u32 = 0xa03e5b85;
}

impl Serializable for ReplyKeyboardHide {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.selective {
            flags |= 1 << 2;
        }
        flags.serialize(buf);
    }
}

impl Deserializable for ReplyKeyboardHide {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            selective: flags & (1 << 2) != 0,
        })
    }
}

/// `replyKeyboardForceReply#f4108aa0 flags:# single_use:flags.1?true selective:flags.2?true = ReplyMarkup;`
#[derive(Clone, Debug, PartialEq)]
pub struct ReplyKeyboardForceReply {
    pub single_use: bool,
    pub selective: bool,
}

impl Identifiable for ReplyKeyboardForceReply {
    const CONSTRUCTOR_ID: u32 = 0xf4108aa0;
}

impl Serializable for ReplyKeyboardForceReply {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.single_use {
            flags |= 1 << 1;
        }
        if self.selective {
            flags |= 1 << 2;
        }
        flags.serialize(buf);
    }
}

impl Deserializable for ReplyKeyboardForceReply {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            single_use: flags & (1 << 1) != 0,
            selective: flags & (1 << 2) != 0,
        })
    }
}

/// `replyKeyboardMarkup#3502758c flags:# resize:flags.0?true single_use:flags.1?true selective:flags.2?true rows:Vector<KeyboardButtonRow> = ReplyMarkup;`
#[derive(Clone, Debug, PartialEq)]
pub struct ReplyKeyboardMarkup {
    pub resize: bool,
    pub single_use: bool,
    pub selective: bool,
    pub rows: Vec<enums::KeyboardButtonRow>,
}

impl Identifiable for ReplyKeyboardMarkup {
    const CONSTRUCTOR_ID: u32 = 0x3502758c;
}

impl Serializable for ReplyKeyboardMarkup {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.resize {
            flags |= 1 << 0;
        }
        if self.single_use {
            flags |= 1 << 1;
        }
        if self.selective {
            flags |= 1 << 2;
        }
        flags.serialize(buf);
        self.rows.serialize(buf);
    }
}

impl Deserializable for ReplyKeyboardMarkup {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            resize: flags & (1 << 0) != 0,
            single_use: flags & (1 << 1) != 0,
            selective: flags & (1 << 2) != 0,
            rows: Vec::<enums::KeyboardButtonRow>::deserialize(buf)?,
        })
    }
}

/// `messageMediaEmpty#3ded6320 = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaEmpty {}

impl Identifiable for MessageMediaEmpty {
    const CONSTRUCTOR_ID: u32 = 0x3ded6320;
}

impl Serializable for MessageMediaEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for MessageMediaEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `messageMediaPhoto#3d8ce53d photo:Photo caption:string = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaPhoto {
    pub photo: enums::Photo,
    pub caption: String,
}

impl Identifiable for MessageMediaPhoto {
    const CONSTRUCTOR_ID: u32 = 0x3d8ce53d;
}

impl Serializable for MessageMediaPhoto {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.photo.serialize(buf);
        self.caption.serialize(buf);
    }
}

impl Deserializable for MessageMediaPhoto {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            photo: enums::Photo::deserialize(buf)?,
            caption: String::deserialize(buf)?,
        })
    }
}

/// `messageMediaGeo#56e0d474 geo:GeoPoint = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaGeo {
    pub geo: enums::GeoPoint,
}

impl Identifiable for MessageMediaGeo {
    const CONSTRUCTOR_ID: u32 = 0x56e0d474;
}

impl Serializable for MessageMediaGeo {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.geo.serialize(buf);
    }
}

impl Deserializable for MessageMediaGeo {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            geo: enums::GeoPoint::deserialize(buf)?,
        })
    }
}

/// `messageMediaContact#5e7d2f39 phone_number:string first_name:string last_name:string user_id:int = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaContact {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub user_id: i32,
}

impl Identifiable for MessageMediaContact {
    const CONSTRUCTOR_ID: u32 = 0x5e7d2f39;
}

impl Serializable for MessageMediaContact {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.phone_number.serialize(buf);
        self.first_name.serialize(buf);
        self.last_name.serialize(buf);
        self.user_id.serialize(buf);
    }
}

impl Deserializable for MessageMediaContact {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            phone_number: String::deserialize(buf)?,
            first_name: String::deserialize(buf)?,
            last_name: String::deserialize(buf)?,
            user_id: i32::deserialize(buf)?,
        })
    }
}

/// `messageMediaUnsupported#9f84f49e = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaUnsupported {}

impl Identifiable for MessageMediaUnsupported {
    const CONSTRUCTOR_ID: u32 = 0x9f84f49e;
}

impl Serializable for MessageMediaUnsupported {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for MessageMediaUnsupported {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `messageMediaDocument#f3e02ea8 document:Document caption:string = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaDocument {
    pub document: enums::Document,
    pub caption: String,
}

impl Identifiable for MessageMediaDocument {
    const CONSTRUCTOR_ID: u32 = 0xf3e02ea8;
}

impl Serializable for MessageMediaDocument {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.document.serialize(buf);
        self.caption.serialize(buf);
    }
}

impl Deserializable for MessageMediaDocument {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            document: enums::Document::deserialize(buf)?,
            caption: String::deserialize(buf)?,
        })
    }
}

/// `messageMediaWebPage#a32dd600 webpage:WebPage = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaWebPage {
    pub webpage: enums::WebPage,
}

impl Identifiable for MessageMediaWebPage {
    const CONSTRUCTOR_ID: u32 = 0xa32dd600;
}

impl Serializable for MessageMediaWebPage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.webpage.serialize(buf);
    }
}

impl Deserializable for MessageMediaWebPage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            webpage: enums::WebPage::deserialize(buf)?,
        })
    }
}

/// `messageMediaVenue#7912b71f geo:GeoPoint title:string address:string provider:string venue_id:string = MessageMedia;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaVenue {
    pub geo: enums::GeoPoint,
    pub title: String,
    pub address: String,
    pub provider: String,
    pub venue_id: String,
}

impl Identifiable for MessageMediaVenue {
    const CONSTRUCTOR_ID: u32 = 0x7912b71f;
}

impl Serializable for MessageMediaVenue {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.geo.serialize(buf);
        self.title.serialize(buf);
        self.address.serialize(buf);
        self.provider.serialize(buf);
        self.venue_id.serialize(buf);
    }
}

impl Deserializable for MessageMediaVenue {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            geo: enums::GeoPoint::deserialize(buf)?,
            title: String::deserialize(buf)?,
            address: String::deserialize(buf)?,
            provider: String::deserialize(buf)?,
            venue_id: String::deserialize(buf)?,
        })
    }
}

/// `messageActionEmpty#b6aef7b0 = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionEmpty {}

impl Identifiable for MessageActionEmpty {
    const CONSTRUCTOR_ID: u32 = 0xb6aef7b0;
}

impl Serializable for MessageActionEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for MessageActionEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `messageActionChatCreate#a6638b9a title:string users:Vector<int> = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatCreate {
    pub title: String,
    pub users: Vec<i32>,
}

impl Identifiable for MessageActionChatCreate {
    const CONSTRUCTOR_ID: u32 = 0xa6638b9a;
}

impl Serializable for MessageActionChatCreate {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.title.serialize(buf);
        self.users.serialize(buf);
    }
}

impl Deserializable for MessageActionChatCreate {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            title: String::deserialize(buf)?,
            users: Vec::<i32>::deserialize(buf)?,
        })
    }
}

/// `messageActionChatEditTitle#b5a1ce5a title:string = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatEditTitle {
    pub title: String,
}

impl Identifiable for MessageActionChatEditTitle {
    const CONSTRUCTOR_ID: u32 = 0xb5a1ce5a;
}

impl Serializable for MessageActionChatEditTitle {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.title.serialize(buf);
    }
}

impl Deserializable for MessageActionChatEditTitle {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            title: String::deserialize(buf)?,
        })
    }
}

/// `messageActionChatEditPhoto#7fcb13a8 photo:Photo = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatEditPhoto {
    pub photo: enums::Photo,
}

impl Identifiable for MessageActionChatEditPhoto {
    const CONSTRUCTOR_ID: u32 = 0x7fcb13a8;
}

impl Serializable for MessageActionChatEditPhoto {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.photo.serialize(buf);
    }
}

impl Deserializable for MessageActionChatEditPhoto {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            photo: enums::Photo::deserialize(buf)?,
        })
    }
}

/// `messageActionChatDeletePhoto#95e3fbef = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatDeletePhoto {}

impl Identifiable for MessageActionChatDeletePhoto {
    const CONSTRUCTOR_ID: u32 = 0x95e3fbef;
}

impl Serializable for MessageActionChatDeletePhoto {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for MessageActionChatDeletePhoto {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `messageActionChatAddUser#488a7337 users:Vector<int> = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatAddUser {
    pub users: Vec<i32>,
}

impl Identifiable for MessageActionChatAddUser {
    const CONSTRUCTOR_ID: u32 = 0x488a7337;
}

impl Serializable for MessageActionChatAddUser {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.users.serialize(buf);
    }
}

impl Deserializable for MessageActionChatAddUser {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            users: Vec::<i32>::deserialize(buf)?,
        })
    }
}

/// `messageActionChatDeleteUser#b2ae9b0c user_id:int = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatDeleteUser {
    pub user_id: i32,
}

impl Identifiable for MessageActionChatDeleteUser {
    const CONSTRUCTOR_ID: u32 = 0xb2ae9b0c;
}

impl Serializable for MessageActionChatDeleteUser {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
    }
}

impl Deserializable for MessageActionChatDeleteUser {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
        })
    }
}

/// `messageActionChatJoinedByLink#f89cf5e8 inviter_id:int = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatJoinedByLink {
    pub inviter_id: i32,
}

impl Identifiable for MessageActionChatJoinedByLink {
    const CONSTRUCTOR_ID: u32 = 0xf89cf5e8;
}

impl Serializable for MessageActionChatJoinedByLink {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.inviter_id.serialize(buf);
    }
}

impl Deserializable for MessageActionChatJoinedByLink {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            inviter_id: i32::deserialize(buf)?,
        })
    }
}

/// `messageActionChannelCreate#95d2ac92 title:string = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChannelCreate {
    pub title: String,
}

impl Identifiable for MessageActionChannelCreate {
    const CONSTRUCTOR_ID: u32 = 0x95d2ac92;
}

impl Serializable for MessageActionChannelCreate {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.title.serialize(buf);
    }
}

impl Deserializable for MessageActionChannelCreate {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            title: String::deserialize(buf)?,
        })
    }
}

/// `messageActionChatMigrateTo#51bdb021 channel_id:int = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatMigrateTo {
    pub channel_id: i32,
}

impl Identifiable for MessageActionChatMigrateTo {
    const CONSTRUCTOR_ID: u32 = 0x51bdb021;
}

impl Serializable for MessageActionChatMigrateTo {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.channel_id.serialize(buf);
    }
}

impl Deserializable for MessageActionChatMigrateTo {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            channel_id: i32::deserialize(buf)?,
        })
    }
}

/// `messageActionChannelMigrateFrom#b055eaee title:string chat_id:int = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChannelMigrateFrom {
    pub title: String,
    pub chat_id: i32,
}

impl Identifiable for MessageActionChannelMigrateFrom {
    const CONSTRUCTOR_ID: u32 = 0xb055eaee;
}

impl Serializable for MessageActionChannelMigrateFrom {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.title.serialize(buf);
        self.chat_id.serialize(buf);
    }
}

impl Deserializable for MessageActionChannelMigrateFrom {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            title: String::deserialize(buf)?,
            chat_id: i32::deserialize(buf)?,
        })
    }
}

/// `messageActionPinMessage#94bd38ed = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionPinMessage {}

impl Identifiable for MessageActionPinMessage {
    const CONSTRUCTOR_ID: u32 = 0x94bd38ed;
}

impl Serializable for MessageActionPinMessage {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for MessageActionPinMessage {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `messageActionHistoryClear#9fbab604 = MessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionHistoryClear {}

impl Identifiable for MessageActionHistoryClear {
    const CONSTRUCTOR_ID: u32 = 0x9fbab604;
}

impl Serializable for MessageActionHistoryClear {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for MessageActionHistoryClear {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `messageFwdHeader#c786ddcb flags:# from_id:flags.0?int date:int channel_id:flags.1?int channel_post:flags.2?int = MessageFwdHeader;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageFwdHeader {
    pub from_id: Option<i32>,
    pub date: i32,
    pub channel_id: Option<i32>,
    pub channel_post: Option<i32>,
}

impl Identifiable for MessageFwdHeader {
    const CONSTRUCTOR_ID: u32 = 0xc786ddcb;
}

impl Serializable for MessageFwdHeader {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.from_id.is_some() {
            flags |= 1 << 0;
        }
        if self.channel_id.is_some() {
            flags |= 1 << 1;
        }
        if self.channel_post.is_some() {
            flags |= 1 << 2;
        }
        flags.serialize(buf);
        if let Some(ref x) = self.from_id {
            x.serialize(buf);
        }
        self.date.serialize(buf);
        if let Some(ref x) = self.channel_id {
            x.serialize(buf);
        }
        if let Some(ref x) = self.channel_post {
            x.serialize(buf);
        }
    }
}

impl Deserializable for MessageFwdHeader {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            from_id: if flags & (1 << 0) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
            date: i32::deserialize(buf)?,
            channel_id: if flags & (1 << 1) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
            channel_post: if flags & (1 << 2) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
        })
    }
}

/// `messageEmpty#83e5de54 id:int = Message;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEmpty {
    pub id: i32,
}

impl Identifiable for MessageEmpty {
    const CONSTRUCTOR_ID: u32 = 0x83e5de54;
}

impl Serializable for MessageEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for MessageEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
        })
    }
}

/// `message#c09be45f flags:# out:flags.1?true mentioned:flags.4?true media_unread:flags.5?true silent:flags.13?true post:flags.14?true id:int from_id:flags.8?int to_id:Peer fwd_from:flags.2?MessageFwdHeader via_bot_id:flags.11?int reply_to_msg_id:flags.3?int date:int message:string media:flags.9?MessageMedia reply_markup:flags.6?ReplyMarkup entities:flags.7?Vector<MessageEntity> views:flags.10?int edit_date:flags.15?int = Message;`
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub post: bool,
    pub id: i32,
    pub from_id: Option<i32>,
    pub to_id: enums::Peer,
    pub fwd_from: Option<enums::MessageFwdHeader>,
    pub via_bot_id: Option<i32>,
    pub reply_to_msg_id: Option<i32>,
    pub date: i32,
    pub message: String,
    pub media: Option<enums::MessageMedia>,
    pub reply_markup: Option<enums::ReplyMarkup>,
    pub entities: Option<Vec<enums::MessageEntity>>,
    pub views: Option<i32>,
    pub edit_date: Option<i32>,
}

impl Identifiable for Message {
    const CONSTRUCTOR_ID: u32 = 0xc09be45f;
}

impl Serializable for Message {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.out {
            flags |= 1 << 1;
        }
        if self.mentioned {
            flags |= 1 << 4;
        }
        if self.media_unread {
            flags |= 1 << 5;
        }
        if self.silent {
            flags |= 1 << 13;
        }
        if self.post {
            flags |= 1 << 14;
        }
        if self.from_id.is_some() {
            flags |= 1 << 8;
        }
        if self.fwd_from.is_some() {
            flags |= 1 << 2;
        }
        if self.via_bot_id.is_some() {
            flags |= 1 << 11;
        }
        if self.reply_to_msg_id.is_some() {
            flags |= 1 << 3;
        }
        if self.media.is_some() {
            flags |= 1 << 9;
        }
        if self.reply_markup.is_some() {
            flags |= 1 << 6;
        }
        if self.entities.is_some() {
            flags |= 1 << 7;
        }
        if self.views.is_some() {
            flags |= 1 << 10;
        }
        if self.edit_date.is_some() {
            flags |= 1 << 15;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        if let Some(ref x) = self.from_id {
            x.serialize(buf);
        }
        self.to_id.serialize(buf);
        if let Some(ref x) = self.fwd_from {
            x.serialize(buf);
        }
        if let Some(ref x) = self.via_bot_id {
            x.serialize(buf);
        }
        if let Some(ref x) = self.reply_to_msg_id {
            x.serialize(buf);
        }
        self.date.serialize(buf);
        self.message.serialize(buf);
        if let Some(ref x) = self.media {
            x.serialize(buf);
        }
        if let Some(ref x) = self.reply_markup {
            x.serialize(buf);
        }
        if let Some(ref x) = self.entities {
            x.serialize(buf);
        }
        if let Some(ref x) = self.views {
            x.serialize(buf);
        }
        if let Some(ref x) = self.edit_date {
            x.serialize(buf);
        }
    }
}

impl Deserializable for Message {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        let id = i32::deserialize(buf)?;
        let from_id = if flags & (1 << 8) != 0 {
            Some(i32::deserialize(buf)?)
        } else {
            None
        };
        let to_id = enums::Peer::deserialize(buf)?;
        let fwd_from = if flags & (1 << 2) != 0 {
            Some(enums::MessageFwdHeader::deserialize(buf)?)
        } else {
            None
        };
        let via_bot_id = if flags & (1 << 11) != 0 {
            Some(i32::deserialize(buf)?)
        } else {
            None
        };
        let reply_to_msg_id = if flags & (1 << 3) != 0 {
            Some(i32::deserialize(buf)?)
        } else {
            None
        };
        let date = i32::deserialize(buf)?;
        let message = String::deserialize(buf)?;
        let media = if flags & (1 << 9) != 0 {
            Some(enums::MessageMedia::deserialize(buf)?)
        } else {
            None
        };
        let reply_markup = if flags & (1 << 6) != 0 {
            Some(enums::ReplyMarkup::deserialize(buf)?)
        } else {
            None
        };
        let entities = if flags & (1 << 7) != 0 {
            Some(Vec::<enums::MessageEntity>::deserialize(buf)?)
        } else {
            None
        };
        let views = if flags & (1 << 10) != 0 {
            Some(i32::deserialize(buf)?)
        } else {
            None
        };
        let edit_date = if flags & (1 << 15) != 0 {
            Some(i32::deserialize(buf)?)
        } else {
            None
        };
        Ok(Self {
            out: flags & (1 << 1) != 0,
            mentioned: flags & (1 << 4) != 0,
            media_unread: flags & (1 << 5) != 0,
            silent: flags & (1 << 13) != 0,
            post: flags & (1 << 14) != 0,
            id,
            from_id,
            to_id,
            fwd_from,
            via_bot_id,
            reply_to_msg_id,
            date,
            message,
            media,
            reply_markup,
            entities,
            views,
            edit_date,
        })
    }
}

/// `messageService#9e19a1f6 flags:# out:flags.1?true mentioned:flags.4?true media_unread:flags.5?true silent:flags.13?true post:flags.14?true id:int from_id:flags.8?int to_id:Peer reply_to_msg_id:flags.3?int date:int action:MessageAction = Message;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageService {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub post: bool,
    pub id: i32,
    pub from_id: Option<i32>,
    pub to_id: enums::Peer,
    pub reply_to_msg_id: Option<i32>,
    pub date: i32,
    pub action: enums::MessageAction,
}

impl Identifiable for MessageService {
    const CONSTRUCTOR_ID: u32 = 0x9e19a1f6;
}

impl Serializable for MessageService {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.out {
            flags |= 1 << 1;
        }
        if self.mentioned {
            flags |= 1 << 4;
        }
        if self.media_unread {
            flags |= 1 << 5;
        }
        if self.silent {
            flags |= 1 << 13;
        }
        if self.post {
            flags |= 1 << 14;
        }
        if self.from_id.is_some() {
            flags |= 1 << 8;
        }
        if self.reply_to_msg_id.is_some() {
            flags |= 1 << 3;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        if let Some(ref x) = self.from_id {
            x.serialize(buf);
        }
        self.to_id.serialize(buf);
        if let Some(ref x) = self.reply_to_msg_id {
            x.serialize(buf);
        }
        self.date.serialize(buf);
        self.action.serialize(buf);
    }
}

impl Deserializable for MessageService {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        let id = i32::deserialize(buf)?;
        let from_id = if flags & (1 << 8) != 0 {
            Some(i32::deserialize(buf)?)
        } else {
            None
        };
        let to_id = enums::Peer::deserialize(buf)?;
        let reply_to_msg_id = if flags & (1 << 3) != 0 {
            Some(i32::deserialize(buf)?)
        } else {
            None
        };
        let date = i32::deserialize(buf)?;
        let action = enums::MessageAction::deserialize(buf)?;
        Ok(Self {
            out: flags & (1 << 1) != 0,
            mentioned: flags & (1 << 4) != 0,
            media_unread: flags & (1 << 5) != 0,
            silent: flags & (1 << 13) != 0,
            post: flags & (1 << 14) != 0,
            id,
            from_id,
            to_id,
            reply_to_msg_id,
            date,
            action,
        })
    }
}

/// `sendMessageTypingAction#16bf744e = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageTypingAction {}

impl Identifiable for SendMessageTypingAction {
    const CONSTRUCTOR_ID: u32 = 0x16bf744e;
}

impl Serializable for SendMessageTypingAction {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for SendMessageTypingAction {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `sendMessageCancelAction#fd5ec8f5 = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageCancelAction {}

impl Identifiable for SendMessageCancelAction {
    const CONSTRUCTOR_ID: u32 = 0xfd5ec8f5;
}

impl Serializable for SendMessageCancelAction {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for SendMessageCancelAction {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `sendMessageRecordVideoAction#a187d66f = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageRecordVideoAction {}

impl Identifiable for SendMessageRecordVideoAction {
    const CONSTRUCTOR_ID: u32 = 0xa187d66f;
}

impl Serializable for SendMessageRecordVideoAction {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for SendMessageRecordVideoAction {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `sendMessageUploadVideoAction#e9763aec progress:int = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageUploadVideoAction {
    pub progress: i32,
}

impl Identifiable for SendMessageUploadVideoAction {
    const CONSTRUCTOR_ID: u32 = 0xe9763aec;
}

impl Serializable for SendMessageUploadVideoAction {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.progress.serialize(buf);
    }
}

impl Deserializable for SendMessageUploadVideoAction {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            progress: i32::deserialize(buf)?,
        })
    }
}

/// `sendMessageRecordAudioAction#d52f73f7 = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageRecordAudioAction {}

impl Identifiable for SendMessageRecordAudioAction {
    const CONSTRUCTOR_ID: u32 = 0xd52f73f7;
}

impl Serializable for SendMessageRecordAudioAction {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for SendMessageRecordAudioAction {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `sendMessageUploadAudioAction#f351d7ab progress:int = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageUploadAudioAction {
    pub progress: i32,
}

impl Identifiable for SendMessageUploadAudioAction {
    const CONSTRUCTOR_ID: u32 = 0xf351d7ab;
}

impl Serializable for SendMessageUploadAudioAction {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.progress.serialize(buf);
    }
}

impl Deserializable for SendMessageUploadAudioAction {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            progress: i32::deserialize(buf)?,
        })
    }
}

/// `sendMessageUploadPhotoAction#d1d34a26 progress:int = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageUploadPhotoAction {
    pub progress: i32,
}

impl Identifiable for SendMessageUploadPhotoAction {
    const CONSTRUCTOR_ID: u32 = 0xd1d34a26;
}

impl Serializable for SendMessageUploadPhotoAction {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.progress.serialize(buf);
    }
}

impl Deserializable for SendMessageUploadPhotoAction {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            progress: i32::deserialize(buf)?,
        })
    }
}

/// `sendMessageUploadDocumentAction#aa0cd9e4 progress:int = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageUploadDocumentAction {
    pub progress: i32,
}

impl Identifiable for SendMessageUploadDocumentAction {
    const CONSTRUCTOR_ID: u32 = 0xaa0cd9e4;
}

impl Serializable for SendMessageUploadDocumentAction {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.progress.serialize(buf);
    }
}

impl Deserializable for SendMessageUploadDocumentAction {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            progress: i32::deserialize(buf)?,
        })
    }
}

/// `sendMessageGeoLocationAction#176f8ba1 = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageGeoLocationAction {}

impl Identifiable for SendMessageGeoLocationAction {
    const CONSTRUCTOR_ID: u32 = 0x176f8ba1;
}

impl Serializable for SendMessageGeoLocationAction {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for SendMessageGeoLocationAction {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `sendMessageChooseContactAction#628cbc6f = SendMessageAction;`
#[derive(Clone, Debug, PartialEq)]
pub struct SendMessageChooseContactAction {}

impl Identifiable for SendMessageChooseContactAction {
    const CONSTRUCTOR_ID: u32 = 0x628cbc6f;
}

impl Serializable for SendMessageChooseContactAction {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for SendMessageChooseContactAction {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `notifyPeer#9fd40bd8 peer:Peer = NotifyPeer;`
#[derive(Clone, Debug, PartialEq)]
pub struct NotifyPeer {
    pub peer: enums::Peer,
}

impl Identifiable for NotifyPeer {
    const CONSTRUCTOR_ID: u32 = 0x9fd40bd8;
}

impl Serializable for NotifyPeer {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.peer.serialize(buf);
    }
}

impl Deserializable for NotifyPeer {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            peer: enums::Peer::deserialize(buf)?,
        })
    }
}

/// `notifyUsers#b4c83b4c = NotifyPeer;`
#[derive(Clone, Debug, PartialEq)]
pub struct NotifyUsers {}

impl Identifiable for NotifyUsers {
    const CONSTRUCTOR_ID: u32 = 0xb4c83b4c;
}

impl Serializable for NotifyUsers {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for NotifyUsers {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `notifyChats#c007cec3 = NotifyPeer;`
#[derive(Clone, Debug, PartialEq)]
pub struct NotifyChats {}

impl Identifiable for NotifyChats {
    const CONSTRUCTOR_ID: u32 = 0xc007cec3;
}

impl Serializable for NotifyChats {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for NotifyChats {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `notifyAll#74d07c60 = NotifyPeer;`
#[derive(Clone, Debug, PartialEq)]
pub struct NotifyAll {}

impl Identifiable for NotifyAll {
    const CONSTRUCTOR_ID: u32 = 0x74d07c60;
}

impl Serializable for NotifyAll {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for NotifyAll {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `peerNotifySettingsEmpty#70a68512 = PeerNotifySettings;`
#[derive(Clone, Debug, PartialEq)]
pub struct PeerNotifySettingsEmpty {}

impl Identifiable for PeerNotifySettingsEmpty {
    const CONSTRUCTOR_ID: u32 = 0x70a68512;
}

impl Serializable for PeerNotifySettingsEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for PeerNotifySettingsEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `peerNotifySettings#9acda4c0 flags:# show_previews:flags.0?true silent:flags.1?true mute_until:int sound:string = PeerNotifySettings;`
#[derive(Clone, Debug, PartialEq)]
pub struct PeerNotifySettings {
    pub show_previews: bool,
    pub silent: bool,
    pub mute_until: i32,
    pub sound: String,
}

impl Identifiable for PeerNotifySettings {
    const CONSTRUCTOR_ID: u32 = 0x9acda4c0;
}

impl Serializable for PeerNotifySettings {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.show_previews {
            flags |= 1 << 0;
        }
        if self.silent {
            flags |= 1 << 1;
        }
        flags.serialize(buf);
        self.mute_until.serialize(buf);
        self.sound.serialize(buf);
    }
}

impl Deserializable for PeerNotifySettings {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            show_previews: flags & (1 << 0) != 0,
            silent: flags & (1 << 1) != 0,
            mute_until: i32::deserialize(buf)?,
            sound: String::deserialize(buf)?,
        })
    }
}

/// `encryptedChatEmpty#ab7ec0a0 id:int = EncryptedChat;`
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedChatEmpty {
    pub id: i32,
}

impl Identifiable for EncryptedChatEmpty {
    const CONSTRUCTOR_ID: u32 = 0xab7ec0a0;
}

impl Serializable for EncryptedChatEmpty {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for EncryptedChatEmpty {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
        })
    }
}

/// `encryptedChatWaiting#3bf703dc id:int access_hash:long date:int admin_id:int participant_id:int = EncryptedChat;`
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedChatWaiting {
    pub id: i32,
    pub access_hash: i64,
    pub date: i32,
    pub admin_id: i32,
    pub participant_id: i32,
}

impl Identifiable for EncryptedChatWaiting {
    const CONSTRUCTOR_ID: u32 = 0x3bf703dc;
}

impl Serializable for EncryptedChatWaiting {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.date.serialize(buf);
        self.admin_id.serialize(buf);
        self.participant_id.serialize(buf);
    }
}

impl Deserializable for EncryptedChatWaiting {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            admin_id: i32::deserialize(buf)?,
            participant_id: i32::deserialize(buf)?,
        })
    }
}

/// `encryptedChatRequested#c878527e id:int access_hash:long date:int admin_id:int participant_id:int g_a:bytes = EncryptedChat;`
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedChatRequested {
    pub id: i32,
    pub access_hash: i64,
    pub date: i32,
    pub admin_id: i32,
    pub participant_id: i32,
    pub g_a: Vec<u8>,
}

impl Identifiable for EncryptedChatRequested {
    const CONSTRUCTOR_ID: u32 = 0xc878527e;
}

impl Serializable for EncryptedChatRequested {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.date.serialize(buf);
        self.admin_id.serialize(buf);
        self.participant_id.serialize(buf);
        self.g_a.serialize(buf);
    }
}

impl Deserializable for EncryptedChatRequested {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            admin_id: i32::deserialize(buf)?,
            participant_id: i32::deserialize(buf)?,
            g_a: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// `encryptedChat#fa56ce36 id:int access_hash:long date:int admin_id:int participant_id:int g_a_or_b:bytes key_fingerprint:long = EncryptedChat;`
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedChat {
    pub id: i32,
    pub access_hash: i64,
    pub date: i32,
    pub admin_id: i32,
    pub participant_id: i32,
    pub g_a_or_b: Vec<u8>,
    pub key_fingerprint: i64,
}

impl Identifiable for EncryptedChat {
    const CONSTRUCTOR_ID: u32 = 0xfa56ce36;
}

impl Serializable for EncryptedChat {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.date.serialize(buf);
        self.admin_id.serialize(buf);
        self.participant_id.serialize(buf);
        self.g_a_or_b.serialize(buf);
        self.key_fingerprint.serialize(buf);
    }
}

impl Deserializable for EncryptedChat {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            admin_id: i32::deserialize(buf)?,
            participant_id: i32::deserialize(buf)?,
            g_a_or_b: Vec::<u8>::deserialize(buf)?,
            key_fingerprint: i64::deserialize(buf)?,
        })
    }
}

/// `encryptedChatDiscarded#13d6dd27 id:int = EncryptedChat;`
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedChatDiscarded {
    pub id: i32,
}

impl Identifiable for EncryptedChatDiscarded {
    const CONSTRUCTOR_ID: u32 = 0x13d6dd27;
}

impl Serializable for EncryptedChatDiscarded {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
    }
}

impl Deserializable for EncryptedChatDiscarded {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
        })
    }
}

/// `encryptedFileEmpty#c21f497e = EncryptedFile;`
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedFileEmpty {}

impl Identifiable for EncryptedFileEmpty {
    const CONSTRUCTOR_ID: u32 = 0xc21f497e;
}

impl Serializable for EncryptedFileEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for EncryptedFileEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `encryptedFile#4a70994c id:long access_hash:long size:int dc_id:int key_fingerprint:int = EncryptedFile;`
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedFile {
    pub id: i64,
    pub access_hash: i64,
    pub size: i32,
    pub dc_id: i32,
    pub key_fingerprint: i32,
}

impl Identifiable for EncryptedFile {
    const CONSTRUCTOR_ID: u32 = 0x4a70994c;
}

impl Serializable for EncryptedFile {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.access_hash.serialize(buf);
        self.size.serialize(buf);
        self.dc_id.serialize(buf);
        self.key_fingerprint.serialize(buf);
    }
}

impl Deserializable for EncryptedFile {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i64::deserialize(buf)?,
            access_hash: i64::deserialize(buf)?,
            size: i32::deserialize(buf)?,
            dc_id: i32::deserialize(buf)?,
            key_fingerprint: i32::deserialize(buf)?,
        })
    }
}

/// `encryptedMessage#ed18c118 random_id:long chat_id:int date:int bytes:bytes file:EncryptedFile = EncryptedMessage;`
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedMessage {
    pub random_id: i64,
    pub chat_id: i32,
    pub date: i32,
    pub bytes: Vec<u8>,
    pub file: enums::EncryptedFile,
}

impl Identifiable for EncryptedMessage {
    const CONSTRUCTOR_ID: u32 = 0xed18c118;
}

impl Serializable for EncryptedMessage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.random_id.serialize(buf);
        self.chat_id.serialize(buf);
        self.date.serialize(buf);
        self.bytes.serialize(buf);
        self.file.serialize(buf);
    }
}

impl Deserializable for EncryptedMessage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            random_id: i64::deserialize(buf)?,
            chat_id: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            bytes: Vec::<u8>::deserialize(buf)?,
            file: enums::EncryptedFile::deserialize(buf)?,
        })
    }
}

/// `encryptedMessageService#23734b06 random_id:long chat_id:int date:int bytes:bytes = EncryptedMessage;`
#[derive(Clone, Debug, PartialEq)]
pub struct EncryptedMessageService {
    pub random_id: i64,
    pub chat_id: i32,
    pub date: i32,
    pub bytes: Vec<u8>,
}

impl Identifiable for EncryptedMessageService {
    const CONSTRUCTOR_ID: u32 = 0x23734b06;
}

impl Serializable for EncryptedMessageService {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.random_id.serialize(buf);
        self.chat_id.serialize(buf);
        self.date.serialize(buf);
        self.bytes.serialize(buf);
    }
}

impl Deserializable for EncryptedMessageService {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            random_id: i64::deserialize(buf)?,
            chat_id: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            bytes: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// `updateNewMessage#1f2b0afd message:Message pts:int pts_count:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

impl Identifiable for UpdateNewMessage {
    const CONSTRUCTOR_ID: u32 = 0x1f2b0afd;
}

impl Serializable for UpdateNewMessage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.message.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
    }
}

impl Deserializable for UpdateNewMessage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            message: enums::Message::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
        })
    }
}

/// `updateMessageID#4e90bfd6 id:int random_id:long = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateMessageId {
    pub id: i32,
    pub random_id: i64,
}

impl Identifiable for UpdateMessageId {
    const CONSTRUCTOR_ID: u32 = 0x4e90bfd6;
}

impl Serializable for UpdateMessageId {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.id.serialize(buf);
        self.random_id.serialize(buf);
    }
}

impl Deserializable for UpdateMessageId {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            id: i32::deserialize(buf)?,
            random_id: i64::deserialize(buf)?,
        })
    }
}

/// `updateDeleteMessages#a20db0e5 messages:Vector<int> pts:int pts_count:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateDeleteMessages {
    pub messages: Vec<i32>,
    pub pts: i32,
    pub pts_count: i32,
}

impl Identifiable for UpdateDeleteMessages {
    const CONSTRUCTOR_ID: u32 = 0xa20db0e5;
}

impl Serializable for UpdateDeleteMessages {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.messages.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
    }
}

impl Deserializable for UpdateDeleteMessages {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            messages: Vec::<i32>::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
        })
    }
}

/// `updateUserTyping#5c486927 user_id:int action:SendMessageAction = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUserTyping {
    pub user_id: i32,
    pub action: enums::SendMessageAction,
}

impl Identifiable for UpdateUserTyping {
    const CONSTRUCTOR_ID: u32 = 0x5c486927;
}

impl Serializable for UpdateUserTyping {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
        self.action.serialize(buf);
    }
}

impl Deserializable for UpdateUserTyping {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
            action: enums::SendMessageAction::deserialize(buf)?,
        })
    }
}

/// `updateChatUserTyping#9a65ea1f chat_id:int user_id:int action:SendMessageAction = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChatUserTyping {
    pub chat_id: i32,
    pub user_id: i32,
    pub action: enums::SendMessageAction,
}

impl Identifiable for UpdateChatUserTyping {
    const CONSTRUCTOR_ID: u32 = 0x9a65ea1f;
}

impl Serializable for UpdateChatUserTyping {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat_id.serialize(buf);
        self.user_id.serialize(buf);
        self.action.serialize(buf);
    }
}

impl Deserializable for UpdateChatUserTyping {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            chat_id: i32::deserialize(buf)?,
            user_id: i32::deserialize(buf)?,
            action: enums::SendMessageAction::deserialize(buf)?,
        })
    }
}

/// `updateChatParticipants#07761198 participants:ChatParticipants = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChatParticipants {
    pub participants: enums::ChatParticipants,
}

impl Identifiable for UpdateChatParticipants {
    const CONSTRUCTOR_ID: u32 = 0x07761198;
}

impl Serializable for UpdateChatParticipants {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.participants.serialize(buf);
    }
}

impl Deserializable for UpdateChatParticipants {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            participants: enums::ChatParticipants::deserialize(buf)?,
        })
    }
}

/// `updateUserStatus#1bfbd823 user_id:int status:UserStatus = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUserStatus {
    pub user_id: i32,
    pub status: enums::UserStatus,
}

impl Identifiable for UpdateUserStatus {
    const CONSTRUCTOR_ID: u32 = 0x1bfbd823;
}

impl Serializable for UpdateUserStatus {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
        self.status.serialize(buf);
    }
}

impl Deserializable for UpdateUserStatus {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
            status: enums::UserStatus::deserialize(buf)?,
        })
    }
}

/// `updateUserName#a7332b73 user_id:int first_name:string last_name:string username:string = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUserName {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

impl Identifiable for UpdateUserName {
    const CONSTRUCTOR_ID: u32 = 0xa7332b73;
}

impl Serializable for UpdateUserName {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
        self.first_name.serialize(buf);
        self.last_name.serialize(buf);
        self.username.serialize(buf);
    }
}

impl Deserializable for UpdateUserName {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
            first_name: String::deserialize(buf)?,
            last_name: String::deserialize(buf)?,
            username: String::deserialize(buf)?,
        })
    }
}

/// `updateUserPhoto#95313b0c user_id:int date:int photo:UserProfilePhoto previous:Bool = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateUserPhoto {
    pub user_id: i32,
    pub date: i32,
    pub photo: enums::UserProfilePhoto,
    pub previous: bool,
}

impl Identifiable for UpdateUserPhoto {
    const CONSTRUCTOR_ID: u32 = 0x95313b0c;
}

impl Serializable for UpdateUserPhoto {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.user_id.serialize(buf);
        self.date.serialize(buf);
        self.photo.serialize(buf);
        self.previous.serialize(buf);
    }
}

impl Deserializable for UpdateUserPhoto {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            user_id: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            photo: enums::UserProfilePhoto::deserialize(buf)?,
            previous: bool::deserialize(buf)?,
        })
    }
}

/// `updateNewEncryptedMessage#12bcbd9a message:EncryptedMessage qts:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewEncryptedMessage {
    pub message: enums::EncryptedMessage,
    pub qts: i32,
}

impl Identifiable for UpdateNewEncryptedMessage {
    const CONSTRUCTOR_ID: u32 = 0x12bcbd9a;
}

impl Serializable for UpdateNewEncryptedMessage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.message.serialize(buf);
        self.qts.serialize(buf);
    }
}

impl Deserializable for UpdateNewEncryptedMessage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            message: enums::EncryptedMessage::deserialize(buf)?,
            qts: i32::deserialize(buf)?,
        })
    }
}

/// `updateEncryptedChatTyping#1710f156 chat_id:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateEncryptedChatTyping {
    pub chat_id: i32,
}

impl Identifiable for UpdateEncryptedChatTyping {
    const CONSTRUCTOR_ID: u32 = 0x1710f156;
}

impl Serializable for UpdateEncryptedChatTyping {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat_id.serialize(buf);
    }
}

impl Deserializable for UpdateEncryptedChatTyping {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            chat_id: i32::deserialize(buf)?,
        })
    }
}

/// `updateEncryption#b4a2e88d chat:EncryptedChat date:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateEncryption {
    pub chat: enums::EncryptedChat,
    pub date: i32,
}

impl Identifiable for UpdateEncryption {
    const CONSTRUCTOR_ID: u32 = 0xb4a2e88d;
}

impl Serializable for UpdateEncryption {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat.serialize(buf);
        self.date.serialize(buf);
    }
}

impl Deserializable for UpdateEncryption {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            chat: enums::EncryptedChat::deserialize(buf)?,
            date: i32::deserialize(buf)?,
        })
    }
}

/// `updateEncryptedMessagesRead#38fe25b7 chat_id:int max_date:int date:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateEncryptedMessagesRead {
    pub chat_id: i32,
    pub max_date: i32,
    pub date: i32,
}

impl Identifiable for UpdateEncryptedMessagesRead {
    const CONSTRUCTOR_ID: u32 = 0x38fe25b7;
}

impl Serializable for UpdateEncryptedMessagesRead {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat_id.serialize(buf);
        self.max_date.serialize(buf);
        self.date.serialize(buf);
    }
}

impl Deserializable for UpdateEncryptedMessagesRead {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            chat_id: i32::deserialize(buf)?,
            max_date: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
        })
    }
}

/// `updateChatParticipantAdd#ea4b0e5c chat_id:int user_id:int inviter_id:int date:int version:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChatParticipantAdd {
    pub chat_id: i32,
    pub user_id: i32,
    pub inviter_id: i32,
    pub date: i32,
    pub version: i32,
}

impl Identifiable for UpdateChatParticipantAdd {
    const CONSTRUCTOR_ID: u32 = 0xea4b0e5c;
}

impl Serializable for UpdateChatParticipantAdd {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat_id.serialize(buf);
        self.user_id.serialize(buf);
        self.inviter_id.serialize(buf);
        self.date.serialize(buf);
        self.version.serialize(buf);
    }
}

impl Deserializable for UpdateChatParticipantAdd {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            chat_id: i32::deserialize(buf)?,
            user_id: i32::deserialize(buf)?,
            inviter_id: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            version: i32::deserialize(buf)?,
        })
    }
}

/// `updateChatParticipantDelete#6e5f8c22 chat_id:int user_id:int version:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChatParticipantDelete {
    pub chat_id: i32,
    pub user_id: i32,
    pub version: i32,
}

impl Identifiable for UpdateChatParticipantDelete {
    const CONSTRUCTOR_ID: u32 = 0x6e5f8c22;
}

impl Serializable for UpdateChatParticipantDelete {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.chat_id.serialize(buf);
        self.user_id.serialize(buf);
        self.version.serialize(buf);
    }
}

impl Deserializable for UpdateChatParticipantDelete {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            chat_id: i32::deserialize(buf)?,
            user_id: i32::deserialize(buf)?,
            version: i32::deserialize(buf)?,
        })
    }
}

/// `updateDcOptions#8e5e9873 dc_options:Vector<DcOption> = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateDcOptions {
    pub dc_options: Vec<enums::DcOption>,
}

impl Identifiable for UpdateDcOptions {
    const CONSTRUCTOR_ID: u32 = 0x8e5e9873;
}

impl Serializable for UpdateDcOptions {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.dc_options.serialize(buf);
    }
}

impl Deserializable for UpdateDcOptions {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            dc_options: Vec::<enums::DcOption>::deserialize(buf)?,
        })
    }
}

/// `updateNotifySettings#bec268ef peer:NotifyPeer notify_settings:PeerNotifySettings = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNotifySettings {
    pub peer: enums::NotifyPeer,
    pub notify_settings: enums::PeerNotifySettings,
}

impl Identifiable for UpdateNotifySettings {
    const CONSTRUCTOR_ID: u32 = 0xbec268ef;
}

impl Serializable for UpdateNotifySettings {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.peer.serialize(buf);
        self.notify_settings.serialize(buf);
    }
}

impl Deserializable for UpdateNotifySettings {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            peer: enums::NotifyPeer::deserialize(buf)?,
            notify_settings: enums::PeerNotifySettings::deserialize(buf)?,
        })
    }
}

/// `updateReadHistoryInbox#9961fd5c peer:Peer max_id:int pts:int pts_count:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateReadHistoryInbox {
    pub peer: enums::Peer,
    pub max_id: i32,
    pub pts: i32,
    pub pts_count: i32,
}

impl Identifiable for UpdateReadHistoryInbox {
    const CONSTRUCTOR_ID: u32 = 0x9961fd5c;
}

impl Serializable for UpdateReadHistoryInbox {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.peer.serialize(buf);
        self.max_id.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
    }
}

impl Deserializable for UpdateReadHistoryInbox {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            peer: enums::Peer::deserialize(buf)?,
            max_id: i32::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
        })
    }
}

/// `updateReadHistoryOutbox#2f2f21bf peer:Peer max_id:int pts:int pts_count:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateReadHistoryOutbox {
    pub peer: enums::Peer,
    pub max_id: i32,
    pub pts: i32,
    pub pts_count: i32,
}

impl Identifiable for UpdateReadHistoryOutbox {
    const CONSTRUCTOR_ID: u32 = 0x2f2f21bf;
}

impl Serializable for UpdateReadHistoryOutbox {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.peer.serialize(buf);
        self.max_id.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
    }
}

impl Deserializable for UpdateReadHistoryOutbox {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            peer: enums::Peer::deserialize(buf)?,
            max_id: i32::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
        })
    }
}

/// `updateWebPage#7f891213 webpage:WebPage pts:int pts_count:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateWebPage {
    pub webpage: enums::WebPage,
    pub pts: i32,
    pub pts_count: i32,
}

impl Identifiable for UpdateWebPage {
    const CONSTRUCTOR_ID: u32 = 0x7f891213;
}

impl Serializable for UpdateWebPage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.webpage.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
    }
}

impl Deserializable for UpdateWebPage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            webpage: enums::WebPage::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
        })
    }
}

/// `updateReadMessagesContents#68c13933 messages:Vector<int> pts:int pts_count:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateReadMessagesContents {
    pub messages: Vec<i32>,
    pub pts: i32,
    pub pts_count: i32,
}

impl Identifiable for UpdateReadMessagesContents {
    const CONSTRUCTOR_ID: u32 = 0x68c13933;
}

impl Serializable for UpdateReadMessagesContents {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.messages.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
    }
}

impl Deserializable for UpdateReadMessagesContents {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            messages: Vec::<i32>::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
        })
    }
}

/// `updateChannelTooLong#eb0467fb flags:# channel_id:int pts:flags.0?int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChannelTooLong {
    pub channel_id: i32,
    pub pts: Option<i32>,
}

impl Identifiable for UpdateChannelTooLong {
    const CONSTRUCTOR_ID: u32 = 0xeb0467fb;
}

impl Serializable for UpdateChannelTooLong {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.pts.is_some() {
            flags |= 1 << 0;
        }
        flags.serialize(buf);
        self.channel_id.serialize(buf);
        if let Some(ref x) = self.pts {
            x.serialize(buf);
        }
    }
}

impl Deserializable for UpdateChannelTooLong {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            channel_id: i32::deserialize(buf)?,
            pts: if flags & (1 << 0) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
        })
    }
}

/// `updateChannel#b6d45656 channel_id:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChannel {
    pub channel_id: i32,
}

impl Identifiable for UpdateChannel {
    const CONSTRUCTOR_ID: u32 = 0xb6d45656;
}

impl Serializable for UpdateChannel {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.channel_id.serialize(buf);
    }
}

impl Deserializable for UpdateChannel {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            channel_id: i32::deserialize(buf)?,
        })
    }
}

/// `updateNewChannelMessage#62ba04d9 message:Message pts:int pts_count:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateNewChannelMessage {
    pub message: enums::Message,
    pub pts: i32,
    pub pts_count: i32,
}

impl Identifiable for UpdateNewChannelMessage {
    const CONSTRUCTOR_ID: u32 = 0x62ba04d9;
}

impl Serializable for UpdateNewChannelMessage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.message.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
    }
}

impl Deserializable for UpdateNewChannelMessage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            message: enums::Message::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
        })
    }
}

/// `updateReadChannelInbox#4214f37f channel_id:int max_id:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateReadChannelInbox {
    pub channel_id: i32,
    pub max_id: i32,
}

impl Identifiable for UpdateReadChannelInbox {
    const CONSTRUCTOR_ID: u32 = 0x4214f37f;
}

impl Serializable for UpdateReadChannelInbox {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.channel_id.serialize(buf);
        self.max_id.serialize(buf);
    }
}

impl Deserializable for UpdateReadChannelInbox {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            channel_id: i32::deserialize(buf)?,
            max_id: i32::deserialize(buf)?,
        })
    }
}

/// `updateDeleteChannelMessages#c37521c9 channel_id:int messages:Vector<int> pts:int pts_count:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateDeleteChannelMessages {
    pub channel_id: i32,
    pub messages: Vec<i32>,
    pub pts: i32,
    pub pts_count: i32,
}

impl Identifiable for UpdateDeleteChannelMessages {
    const CONSTRUCTOR_ID: u32 = 0xc37521c9;
}

impl Serializable for UpdateDeleteChannelMessages {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.channel_id.serialize(buf);
        self.messages.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
    }
}

impl Deserializable for UpdateDeleteChannelMessages {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            channel_id: i32::deserialize(buf)?,
            messages: Vec::<i32>::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
        })
    }
}

/// `updateChannelMessageViews#98a12b4b channel_id:int id:int views:int = Update;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateChannelMessageViews {
    pub channel_id: i32,
    pub id: i32,
    pub views: i32,
}

impl Identifiable for UpdateChannelMessageViews {
    const CONSTRUCTOR_ID: u32 = 0x98a12b4b;
}

impl Serializable for UpdateChannelMessageViews {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.channel_id.serialize(buf);
        self.id.serialize(buf);
        self.views.serialize(buf);
    }
}

impl Deserializable for UpdateChannelMessageViews {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            channel_id: i32::deserialize(buf)?,
            id: i32::deserialize(buf)?,
            views: i32::deserialize(buf)?,
        })
    }
}

/// `updatesTooLong#e317af7e = Updates;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdatesTooLong {}

impl Identifiable for UpdatesTooLong {
    const CONSTRUCTOR_ID: u32 = 0xe317af7e;
}

impl Serializable for UpdatesTooLong {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for UpdatesTooLong {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `updateShortMessage#914fbf11 flags:# out:flags.1?true mentioned:flags.4?true media_unread:flags.5?true silent:flags.13?true id:int user_id:int message:string pts:int pts_count:int date:int fwd_from:flags.2?MessageFwdHeader via_bot_id:flags.11?int reply_to_msg_id:flags.3?int entities:flags.7?Vector<MessageEntity> = Updates;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShortMessage {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub id: i32,
    pub user_id: i32,
    pub message: String,
    pub pts: i32,
    pub pts_count: i32,
    pub date: i32,
    pub fwd_from: Option<enums::MessageFwdHeader>,
    pub via_bot_id: Option<i32>,
    pub reply_to_msg_id: Option<i32>,
    pub entities: Option<Vec<enums::MessageEntity>>,
}

impl Identifiable for UpdateShortMessage {
    const CONSTRUCTOR_ID: u32 = 0x914fbf11;
}

impl Serializable for UpdateShortMessage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.out {
            flags |= 1 << 1;
        }
        if self.mentioned {
            flags |= 1 << 4;
        }
        if self.media_unread {
            flags |= 1 << 5;
        }
        if self.silent {
            flags |= 1 << 13;
        }
        if self.fwd_from.is_some() {
            flags |= 1 << 2;
        }
        if self.via_bot_id.is_some() {
            flags |= 1 << 11;
        }
        if self.reply_to_msg_id.is_some() {
            flags |= 1 << 3;
        }
        if self.entities.is_some() {
            flags |= 1 << 7;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        self.user_id.serialize(buf);
        self.message.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
        self.date.serialize(buf);
        if let Some(ref x) = self.fwd_from {
            x.serialize(buf);
        }
        if let Some(ref x) = self.via_bot_id {
            x.serialize(buf);
        }
        if let Some(ref x) = self.reply_to_msg_id {
            x.serialize(buf);
        }
        if let Some(ref x) = self.entities {
            x.serialize(buf);
        }
    }
}

impl Deserializable for UpdateShortMessage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            out: flags & (1 << 1) != 0,
            mentioned: flags & (1 << 4) != 0,
            media_unread: flags & (1 << 5) != 0,
            silent: flags & (1 << 13) != 0,
            id: i32::deserialize(buf)?,
            user_id: i32::deserialize(buf)?,
            message: String::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            fwd_from: if flags & (1 << 2) != 0 {
                Some(enums::MessageFwdHeader::deserialize(buf)?)
            } else {
                None
            },
            via_bot_id: if flags & (1 << 11) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
            reply_to_msg_id: if flags & (1 << 3) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
            entities: if flags & (1 << 7) != 0 {
                Some(Vec::<enums::MessageEntity>::deserialize(buf)?)
            } else {
                None
            },
        })
    }
}

/// `updateShortChatMessage#16812688 flags:# out:flags.1?true mentioned:flags.4?true media_unread:flags.5?true silent:flags.13?true id:int from_id:int chat_id:int message:string pts:int pts_count:int date:int fwd_from:flags.2?MessageFwdHeader via_bot_id:flags.11?int reply_to_msg_id:flags.3?int entities:flags.7?Vector<MessageEntity> = Updates;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShortChatMessage {
    pub out: bool,
    pub mentioned: bool,
    pub media_unread: bool,
    pub silent: bool,
    pub id: i32,
    pub from_id: i32,
    pub chat_id: i32,
    pub message: String,
    pub pts: i32,
    pub pts_count: i32,
    pub date: i32,
    pub fwd_from: Option<enums::MessageFwdHeader>,
    pub via_bot_id: Option<i32>,
    pub reply_to_msg_id: Option<i32>,
    pub entities: Option<Vec<enums::MessageEntity>>,
}

impl Identifiable for UpdateShortChatMessage {
    const CONSTRUCTOR_ID: u32 = 0x16812688;
}

impl Serializable for UpdateShortChatMessage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.out {
            flags |= 1 << 1;
        }
        if self.mentioned {
            flags |= 1 << 4;
        }
        if self.media_unread {
            flags |= 1 << 5;
        }
        if self.silent {
            flags |= 1 << 13;
        }
        if self.fwd_from.is_some() {
            flags |= 1 << 2;
        }
        if self.via_bot_id.is_some() {
            flags |= 1 << 11;
        }
        if self.reply_to_msg_id.is_some() {
            flags |= 1 << 3;
        }
        if self.entities.is_some() {
            flags |= 1 << 7;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        self.from_id.serialize(buf);
        self.chat_id.serialize(buf);
        self.message.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
        self.date.serialize(buf);
        if let Some(ref x) = self.fwd_from {
            x.serialize(buf);
        }
        if let Some(ref x) = self.via_bot_id {
            x.serialize(buf);
        }
        if let Some(ref x) = self.reply_to_msg_id {
            x.serialize(buf);
        }
        if let Some(ref x) = self.entities {
            x.serialize(buf);
        }
    }
}

impl Deserializable for UpdateShortChatMessage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            out: flags & (1 << 1) != 0,
            mentioned: flags & (1 << 4) != 0,
            media_unread: flags & (1 << 5) != 0,
            silent: flags & (1 << 13) != 0,
            id: i32::deserialize(buf)?,
            from_id: i32::deserialize(buf)?,
            chat_id: i32::deserialize(buf)?,
            message: String::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            fwd_from: if flags & (1 << 2) != 0 {
                Some(enums::MessageFwdHeader::deserialize(buf)?)
            } else {
                None
            },
            via_bot_id: if flags & (1 << 11) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
            reply_to_msg_id: if flags & (1 << 3) != 0 {
                Some(i32::deserialize(buf)?)
            } else {
                None
            },
            entities: if flags & (1 << 7) != 0 {
                Some(Vec::<enums::MessageEntity>::deserialize(buf)?)
            } else {
                None
            },
        })
    }
}

/// `updateShort#78d4dec1 update:Update date:int = Updates;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShort {
    pub update: enums::Update,
    pub date: i32,
}

impl Identifiable for UpdateShort {
    const CONSTRUCTOR_ID: u32 = 0x78d4dec1;
}

impl Serializable for UpdateShort {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.update.serialize(buf);
        self.date.serialize(buf);
    }
}

impl Deserializable for UpdateShort {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            update: enums::Update::deserialize(buf)?,
            date: i32::deserialize(buf)?,
        })
    }
}

/// `updatesCombined#725b04c3 updates:Vector<Update> users:Vector<User> chats:Vector<Chat> date:int seq_start:int seq:int = Updates;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdatesCombined {
    pub updates: Vec<enums::Update>,
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date: i32,
    pub seq_start: i32,
    pub seq: i32,
}

impl Identifiable for UpdatesCombined {
    const CONSTRUCTOR_ID: u32 = 0x725b04c3;
}

impl Serializable for UpdatesCombined {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.updates.serialize(buf);
        self.users.serialize(buf);
        self.chats.serialize(buf);
        self.date.serialize(buf);
        self.seq_start.serialize(buf);
        self.seq.serialize(buf);
    }
}

impl Deserializable for UpdatesCombined {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            updates: Vec::<enums::Update>::deserialize(buf)?,
            users: Vec::<enums::User>::deserialize(buf)?,
            chats: Vec::<enums::Chat>::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            seq_start: i32::deserialize(buf)?,
            seq: i32::deserialize(buf)?,
        })
    }
}

/// `updates#74ae4240 updates:Vector<Update> users:Vector<User> chats:Vector<Chat> date:int seq:int = Updates;`
#[derive(Clone, Debug, PartialEq)]
pub struct Updates {
    pub updates: Vec<enums::Update>,
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date: i32,
    pub seq: i32,
}

impl Identifiable for Updates {
    const CONSTRUCTOR_ID: u32 = 0x74ae4240;
}

impl Serializable for Updates {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.updates.serialize(buf);
        self.users.serialize(buf);
        self.chats.serialize(buf);
        self.date.serialize(buf);
        self.seq.serialize(buf);
    }
}

impl Deserializable for Updates {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            updates: Vec::<enums::Update>::deserialize(buf)?,
            users: Vec::<enums::User>::deserialize(buf)?,
            chats: Vec::<enums::Chat>::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            seq: i32::deserialize(buf)?,
        })
    }
}

/// `updateShortSentMessage#11f1331c flags:# out:flags.1?true id:int pts:int pts_count:int date:int media:flags.9?MessageMedia entities:flags.7?Vector<MessageEntity> = Updates;`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShortSentMessage {
    pub out: bool,
    pub id: i32,
    pub pts: i32,
    pub pts_count: i32,
    pub date: i32,
    pub media: Option<enums::MessageMedia>,
    pub entities: Option<Vec<enums::MessageEntity>>,
}

impl Identifiable for UpdateShortSentMessage {
    const CONSTRUCTOR_ID: u32 = 0x11f1331c;
}

impl Serializable for UpdateShortSentMessage {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.out {
            flags |= 1 << 1;
        }
        if self.media.is_some() {
            flags |= 1 << 9;
        }
        if self.entities.is_some() {
            flags |= 1 << 7;
        }
        flags.serialize(buf);
        self.id.serialize(buf);
        self.pts.serialize(buf);
        self.pts_count.serialize(buf);
        self.date.serialize(buf);
        if let Some(ref x) = self.media {
            x.serialize(buf);
        }
        if let Some(ref x) = self.entities {
            x.serialize(buf);
        }
    }
}

impl Deserializable for UpdateShortSentMessage {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            out: flags & (1 << 1) != 0,
            id: i32::deserialize(buf)?,
            pts: i32::deserialize(buf)?,
            pts_count: i32::deserialize(buf)?,
            date: i32::deserialize(buf)?,
            media: if flags & (1 << 9) != 0 {
                Some(enums::MessageMedia::deserialize(buf)?)
            } else {
                None
            },
            entities: if flags & (1 << 7) != 0 {
                Some(Vec::<enums::MessageEntity>::deserialize(buf)?)
            } else {
                None
            },
        })
    }
}

pub mod auth {
    use crate::deserialize::{Buffer, Result};
    use crate::{enums, Deserializable, Identifiable, Serializable};

    /// `auth.sentCode#efed51d9 phone_registered:Bool phone_code_hash:string send_call_timeout:int is_password:Bool = auth.SentCode;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct SentCode {
        pub phone_registered: bool,
        pub phone_code_hash: String,
        pub send_call_timeout: i32,
        pub is_password: bool,
    }

    impl Identifiable for SentCode {
        const CONSTRUCTOR_ID: u32 = 0xefed51d9;
    }

    impl Serializable for SentCode {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.phone_registered.serialize(buf);
            self.phone_code_hash.serialize(buf);
            self.send_call_timeout.serialize(buf);
            self.is_password.serialize(buf);
        }
    }

    impl Deserializable for SentCode {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                phone_registered: bool::deserialize(buf)?,
                phone_code_hash: String::deserialize(buf)?,
                send_call_timeout: i32::deserialize(buf)?,
                is_password: bool::deserialize(buf)?,
            })
        }
    }

    /// `auth.sentAppCode#e325edcf phone_registered:Bool phone_code_hash:string send_call_timeout:int is_password:Bool = auth.SentCode;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct SentAppCode {
        pub phone_registered: bool,
        pub phone_code_hash: String,
        pub send_call_timeout: i32,
        pub is_password: bool,
    }

    impl Identifiable for SentAppCode {
        const CONSTRUCTOR_ID: u32 = 0xe325edcf;
    }

    impl Serializable for SentAppCode {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.phone_registered.serialize(buf);
            self.phone_code_hash.serialize(buf);
            self.send_call_timeout.serialize(buf);
            self.is_password.serialize(buf);
        }
    }

    impl Deserializable for SentAppCode {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                phone_registered: bool::deserialize(buf)?,
                phone_code_hash: String::deserialize(buf)?,
                send_call_timeout: i32::deserialize(buf)?,
                is_password: bool::deserialize(buf)?,
            })
        }
    }

    /// `auth.authorization#ff036af1 flags:# tmp_sessions:flags.0?int user:User = auth.Authorization;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct Authorization {
        pub tmp_sessions: Option<i32>,
        pub user: enums::User,
    }

    impl Identifiable for Authorization {
        const CONSTRUCTOR_ID: u32 = 0xff036af1;
    }

    impl Serializable for Authorization {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            let mut flags = 0u32;
            if self.tmp_sessions.is_some() {
                flags |= 1 << 0;
            }
            flags.serialize(buf);
            if let Some(ref x) = self.tmp_sessions {
                x.serialize(buf);
            }
            self.user.serialize(buf);
        }
    }

    impl Deserializable for Authorization {
        fn deserialize(buf: Buffer) -> Result<Self> {
            let flags = u32::deserialize(buf)?;
            Ok(Self {
                tmp_sessions: if flags & (1 << 0) != 0 {
                    Some(i32::deserialize(buf)?)
                } else {
                    None
                },
                user: enums::User::deserialize(buf)?,
            })
        }
    }

    /// `auth.exportedAuthorization#df969c2d id:int bytes:bytes = auth.ExportedAuthorization;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct ExportedAuthorization {
        pub id: i32,
        pub bytes: Vec<u8>,
    }

    impl Identifiable for ExportedAuthorization {
        const CONSTRUCTOR_ID: u32 = 0xdf969c2d;
    }

    impl Serializable for ExportedAuthorization {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.id.serialize(buf);
            self.bytes.serialize(buf);
        }
    }

    impl Deserializable for ExportedAuthorization {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                id: i32::deserialize(buf)?,
                bytes: Vec::<u8>::deserialize(buf)?,
            })
        }
    }
}

pub mod account {
    use crate::deserialize::{Buffer, Result};
    use crate::{Deserializable, Identifiable, Serializable};

    /// `account.noPassword#96dabc18 new_salt:bytes email_unconfirmed_pattern:string = account.Password;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct NoPassword {
        pub new_salt: Vec<u8>,
        pub email_unconfirmed_pattern: String,
    }

    impl Identifiable for NoPassword {
        const CONSTRUCTOR_ID: u32 = 0x96dabc18;
    }

    impl Serializable for NoPassword {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.new_salt.serialize(buf);
            self.email_unconfirmed_pattern.serialize(buf);
        }
    }

    impl Deserializable for NoPassword {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                new_salt: Vec::<u8>::deserialize(buf)?,
                email_unconfirmed_pattern: String::deserialize(buf)?,
            })
        }
    }

    /// `account.password#7c18141c current_salt:bytes new_salt:bytes hint:string has_recovery:Bool email_unconfirmed_pattern:string = account.Password;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct Password {
        pub current_salt: Vec<u8>,
        pub new_salt: Vec<u8>,
        pub hint: String,
        pub has_recovery: bool,
        pub email_unconfirmed_pattern: String,
    }

    impl Identifiable for Password {
        const CONSTRUCTOR_ID: u32 = 0x7c18141c;
    }

    impl Serializable for Password {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.current_salt.serialize(buf);
            self.new_salt.serialize(buf);
            self.hint.serialize(buf);
            self.has_recovery.serialize(buf);
            self.email_unconfirmed_pattern.serialize(buf);
        }
    }

    impl Deserializable for Password {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                current_salt: Vec::<u8>::deserialize(buf)?,
                new_salt: Vec::<u8>::deserialize(buf)?,
                hint: String::deserialize(buf)?,
                has_recovery: bool::deserialize(buf)?,
                email_unconfirmed_pattern: String::deserialize(buf)?,
            })
        }
    }
}

pub mod updates {
    use crate::deserialize::{Buffer, Result};
    use crate::{enums, Deserializable, Identifiable, Serializable};

    /// `updates.state#a56c2a3e pts:int qts:int date:int seq:int unread_count:int = updates.State;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct State {
        pub pts: i32,
        pub qts: i32,
        pub date: i32,
        pub seq: i32,
        pub unread_count: i32,
    }

    impl Identifiable for State {
        const CONSTRUCTOR_ID: u32 = 0xa56c2a3e;
    }

    impl Serializable for State {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.pts.serialize(buf);
            self.qts.serialize(buf);
            self.date.serialize(buf);
            self.seq.serialize(buf);
            self.unread_count.serialize(buf);
        }
    }

    impl Deserializable for State {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                pts: i32::deserialize(buf)?,
                qts: i32::deserialize(buf)?,
                date: i32::deserialize(buf)?,
                seq: i32::deserialize(buf)?,
                unread_count: i32::deserialize(buf)?,
            })
        }
    }

    /// `updates.differenceEmpty#5d75a138 date:int seq:int = updates.Difference;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct DifferenceEmpty {
        pub date: i32,
        pub seq: i32,
    }

    impl Identifiable for DifferenceEmpty {
        const CONSTRUCTOR_ID: u32 = 0x5d75a138;
    }

    impl Serializable for DifferenceEmpty {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.date.serialize(buf);
            self.seq.serialize(buf);
        }
    }

    impl Deserializable for DifferenceEmpty {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                date: i32::deserialize(buf)?,
                seq: i32::deserialize(buf)?,
            })
        }
    }

    /// `updates.difference#00f49ca0 new_messages:Vector<Message> new_encrypted_messages:Vector<EncryptedMessage> other_updates:Vector<Update> chats:Vector<Chat> users:Vector<User> state:updates.State = updates.Difference;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct Difference {
        pub new_messages: Vec<enums::Message>,
        pub new_encrypted_messages: Vec<enums::EncryptedMessage>,
        pub other_updates: Vec<enums::Update>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
        pub state: enums::updates::State,
    }

    impl Identifiable for Difference {
        const CONSTRUCTOR_ID: u32 = 0x00f49ca0;
    }

    impl Serializable for Difference {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.new_messages.serialize(buf);
            self.new_encrypted_messages.serialize(buf);
            self.other_updates.serialize(buf);
            self.chats.serialize(buf);
            self.users.serialize(buf);
            self.state.serialize(buf);
        }
    }

    impl Deserializable for Difference {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                new_messages: Vec::<enums::Message>::deserialize(buf)?,
                new_encrypted_messages: Vec::<enums::EncryptedMessage>::deserialize(buf)?,
                other_updates: Vec::<enums::Update>::deserialize(buf)?,
                chats: Vec::<enums::Chat>::deserialize(buf)?,
                users: Vec::<enums::User>::deserialize(buf)?,
                state: enums::updates::State::deserialize(buf)?,
            })
        }
    }

    /// `updates.differenceSlice#a8fb1981 new_messages:Vector<Message> new_encrypted_messages:Vector<EncryptedMessage> other_updates:Vector<Update> chats:Vector<Chat> users:Vector<User> intermediate_state:updates.State = updates.Difference;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct DifferenceSlice {
        pub new_messages: Vec<enums::Message>,
        pub new_encrypted_messages: Vec<enums::EncryptedMessage>,
        pub other_updates: Vec<enums::Update>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
        pub intermediate_state: enums::updates::State,
    }

    impl Identifiable for DifferenceSlice {
        const CONSTRUCTOR_ID: u32 = 0xa8fb1981;
    }

    impl Serializable for DifferenceSlice {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.new_messages.serialize(buf);
            self.new_encrypted_messages.serialize(buf);
            self.other_updates.serialize(buf);
            self.chats.serialize(buf);
            self.users.serialize(buf);
            self.intermediate_state.serialize(buf);
        }
    }

    impl Deserializable for DifferenceSlice {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                new_messages: Vec::<enums::Message>::deserialize(buf)?,
                new_encrypted_messages: Vec::<enums::EncryptedMessage>::deserialize(buf)?,
                other_updates: Vec::<enums::Update>::deserialize(buf)?,
                chats: Vec::<enums::Chat>::deserialize(buf)?,
                users: Vec::<enums::User>::deserialize(buf)?,
                intermediate_state: enums::updates::State::deserialize(buf)?,
            })
        }
    }

    /// `updates.channelDifferenceEmpty#3e11affb flags:# final:flags.0?true pts:int timeout:flags.1?int = updates.ChannelDifference;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelDifferenceEmpty {
        pub r#final: bool,
        pub pts: i32,
        pub timeout: Option<i32>,
    }

    impl Identifiable for ChannelDifferenceEmpty {
        const CONSTRUCTOR_ID: u32 = 0x3e11affb;
    }

    impl Serializable for ChannelDifferenceEmpty {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            let mut flags = 0u32;
            if self.r#final {
                flags |= 1 << 0;
            }
            if self.timeout.is_some() {
                flags |= 1 << 1;
            }
            flags.serialize(buf);
            self.pts.serialize(buf);
            if let Some(ref x) = self.timeout {
                x.serialize(buf);
            }
        }
    }

    impl Deserializable for ChannelDifferenceEmpty {
        fn deserialize(buf: Buffer) -> Result<Self> {
            let flags = u32::deserialize(buf)?;
            Ok(Self {
                r#final: flags & (1 << 0) != 0,
                pts: i32::deserialize(buf)?,
                timeout: if flags & (1 << 1) != 0 {
                    Some(i32::deserialize(buf)?)
                } else {
                    None
                },
            })
        }
    }

    /// `updates.channelDifferenceTooLong#5e167646 flags:# final:flags.0?true pts:int timeout:flags.1?int top_message:int read_inbox_max_id:int unread_count:int messages:Vector<Message> chats:Vector<Chat> users:Vector<User> = updates.ChannelDifference;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelDifferenceTooLong {
        pub r#final: bool,
        pub pts: i32,
        pub timeout: Option<i32>,
        pub top_message: i32,
        pub read_inbox_max_id: i32,
        pub unread_count: i32,
        pub messages: Vec<enums::Message>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    impl Identifiable for ChannelDifferenceTooLong {
        const CONSTRUCTOR_ID: u32 = 0x5e167646;
    }

    impl Serializable for ChannelDifferenceTooLong {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            let mut flags = 0u32;
            if self.r#final {
                flags |= 1 << 0;
            }
            if self.timeout.is_some() {
                flags |= 1 << 1;
            }
            flags.serialize(buf);
            self.pts.serialize(buf);
            if let Some(ref x) = self.timeout {
                x.serialize(buf);
            }
            self.top_message.serialize(buf);
            self.read_inbox_max_id.serialize(buf);
            self.unread_count.serialize(buf);
            self.messages.serialize(buf);
            self.chats.serialize(buf);
            self.users.serialize(buf);
        }
    }

    impl Deserializable for ChannelDifferenceTooLong {
        fn deserialize(buf: Buffer) -> Result<Self> {
            let flags = u32::deserialize(buf)?;
            Ok(Self {
                r#final: flags & (1 << 0) != 0,
                pts: i32::deserialize(buf)?,
                timeout: if flags & (1 << 1) != 0 {
                    Some(i32::deserialize(buf)?)
                } else {
                    None
                },
                top_message: i32::deserialize(buf)?,
                read_inbox_max_id: i32::deserialize(buf)?,
                unread_count: i32::deserialize(buf)?,
                messages: Vec::<enums::Message>::deserialize(buf)?,
                chats: Vec::<enums::Chat>::deserialize(buf)?,
                users: Vec::<enums::User>::deserialize(buf)?,
            })
        }
    }

    /// `updates.channelDifference#2064674e flags:# final:flags.0?true pts:int timeout:flags.1?int new_messages:Vector<Message> other_updates:Vector<Update> chats:Vector<Chat> users:Vector<User> = updates.ChannelDifference;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelDifference {
        pub r#final: bool,
        pub pts: i32,
        pub timeout: Option<i32>,
        pub new_messages: Vec<enums::Message>,
        pub other_updates: Vec<enums::Update>,
        pub chats: Vec<enums::Chat>,
        pub users: Vec<enums::User>,
    }

    impl Identifiable for ChannelDifference {
        const CONSTRUCTOR_ID: u32 = 0x2064674e;
    }

    impl Serializable for ChannelDifference {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            let mut flags = 0u32;
            if self.r#final {
                flags |= 1 << 0;
            }
            if self.timeout.is_some() {
                flags |= 1 << 1;
            }
            flags.serialize(buf);
            self.pts.serialize(buf);
            if let Some(ref x) = self.timeout {
                x.serialize(buf);
            }
            self.new_messages.serialize(buf);
            self.other_updates.serialize(buf);
            self.chats.serialize(buf);
            self.users.serialize(buf);
        }
    }

    impl Deserializable for ChannelDifference {
        fn deserialize(buf: Buffer) -> Result<Self> {
            let flags = u32::deserialize(buf)?;
            Ok(Self {
                r#final: flags & (1 << 0) != 0,
                pts: i32::deserialize(buf)?,
                timeout: if flags & (1 << 1) != 0 {
                    Some(i32::deserialize(buf)?)
                } else {
                    None
                },
                new_messages: Vec::<enums::Message>::deserialize(buf)?,
                other_updates: Vec::<enums::Update>::deserialize(buf)?,
                chats: Vec::<enums::Chat>::deserialize(buf)?,
                users: Vec::<enums::User>::deserialize(buf)?,
            })
        }
    }
}

pub mod messages {
    use crate::deserialize::{Buffer, Result};
    use crate::{enums, Deserializable, Identifiable, Serializable};

    /// `messages.dhConfigNotModified#c0e24635 random:bytes = messages.DhConfig;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct DhConfigNotModified {
        pub random: Vec<u8>,
    }

    impl Identifiable for DhConfigNotModified {
        const CONSTRUCTOR_ID: u32 = 0xc0e24635;
    }

    impl Serializable for DhConfigNotModified {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.random.serialize(buf);
        }
    }

    impl Deserializable for DhConfigNotModified {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                random: Vec::<u8>::deserialize(buf)?,
            })
        }
    }

    /// `messages.dhConfig#2c221edd g:int p:bytes version:int random:bytes = messages.DhConfig;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct DhConfig {
        pub g: i32,
        pub p: Vec<u8>,
        pub version: i32,
        pub random: Vec<u8>,
    }

    impl Identifiable for DhConfig {
        const CONSTRUCTOR_ID: u32 = 0x2c221edd;
    }

    impl Serializable for DhConfig {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.g.serialize(buf);
            self.p.serialize(buf);
            self.version.serialize(buf);
            self.random.serialize(buf);
        }
    }

    impl Deserializable for DhConfig {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                g: i32::deserialize(buf)?,
                p: Vec::<u8>::deserialize(buf)?,
                version: i32::deserialize(buf)?,
                random: Vec::<u8>::deserialize(buf)?,
            })
        }
    }

    /// `messages.sentEncryptedMessage#560f8935 date:int = messages.SentEncryptedMessage;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct SentEncryptedMessage {
        pub date: i32,
    }

    impl Identifiable for SentEncryptedMessage {
        const CONSTRUCTOR_ID: u32 = 0x560f8935;
    }

    impl Serializable for SentEncryptedMessage {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.date.serialize(buf);
        }
    }

    impl Deserializable for SentEncryptedMessage {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                date: i32::deserialize(buf)?,
            })
        }
    }

    /// `messages.sentEncryptedFile#9493ff32 date:int file:EncryptedFile = messages.SentEncryptedMessage;`
    #[derive(Clone, Debug, PartialEq)]
    pub struct SentEncryptedFile {
        pub date: i32,
        pub file: enums::EncryptedFile,
    }

    impl Identifiable for SentEncryptedFile {
        const CONSTRUCTOR_ID: u32 = 0x9493ff32;
    }

    impl Serializable for SentEncryptedFile {
        fn serialize(&self, buf: &mut impl Extend<u8>) {
            self.date.serialize(buf);
            self.file.serialize(buf);
        }
    }

    impl Deserializable for SentEncryptedFile {
        fn deserialize(buf: Buffer) -> Result<Self> {
            Ok(Self {
                date: i32::deserialize(buf)?,
                file: enums::EncryptedFile::deserialize(buf)?,
            })
        }
    }
}

/// `messageRange#0ae30253 min_id:int max_id:int = MessageRange;`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageRange {
    pub min_id: i32,
    pub max_id: i32,
}

impl Identifiable for MessageRange {
    const CONSTRUCTOR_ID: u32 = 0x0ae30253;
}

impl Serializable for MessageRange {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.min_id.serialize(buf);
        self.max_id.serialize(buf);
    }
}

impl Deserializable for MessageRange {
    fn deserialize(buf: Buffer) -> Result<Self> {
        Ok(Self {
            min_id: i32::deserialize(buf)?,
            max_id: i32::deserialize(buf)?,
        })
    }
}

/// `channelMessagesFilterEmpty#94d42ee7 = ChannelMessagesFilter;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelMessagesFilterEmpty {}

impl Identifiable for ChannelMessagesFilterEmpty {
    const CONSTRUCTOR_ID: u32 = 0x94d42ee7;
}

impl Serializable for ChannelMessagesFilterEmpty {
    fn serialize(&self, _buf: &mut impl Extend<u8>) {}
}

impl Deserializable for ChannelMessagesFilterEmpty {
    fn deserialize(_buf: Buffer) -> Result<Self> {
        Ok(Self {})
    }
}

/// `channelMessagesFilter#cd77d957 flags:# exclude_new_messages:flags.1?true ranges:Vector<MessageRange> = ChannelMessagesFilter;`
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelMessagesFilter {
    pub exclude_new_messages: bool,
    pub ranges: Vec<enums::MessageRange>,
}

impl Identifiable for ChannelMessagesFilter {
    const CONSTRUCTOR_ID: u32 = 0xcd77d957;
}

impl Serializable for ChannelMessagesFilter {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        let mut flags = 0u32;
        if self.exclude_new_messages {
            flags |= 1 << 1;
        }
        flags.serialize(buf);
        self.ranges.serialize(buf);
    }
}

impl Deserializable for ChannelMessagesFilter {
    fn deserialize(buf: Buffer) -> Result<Self> {
        let flags = u32::deserialize(buf)?;
        Ok(Self {
            exclude_new_messages: flags & (1 << 1) != 0,
            ranges: Vec::<enums::MessageRange>::deserialize(buf)?,
        })
    }
}
