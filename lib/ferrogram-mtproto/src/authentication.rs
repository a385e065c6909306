// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Contains the steps required to generate an authorization key.
//!
//! # Examples
//!
//! ```no_run
//! use ferrogram_mtproto::authentication;
//! use std::time::Duration;
//!
//! fn send_data_to_server(request: &[u8]) -> Result<Vec<u8>, authentication::Error> {
//!     unimplemented!()
//! }
//!
//! fn main() -> Result<(), authentication::Error> {
//!     let now = Duration::from_secs(0); // current unix time in reality
//!     let keys = authentication::known_rsa_keys();
//!
//!     let (request, data) = authentication::step1()?;
//!     let response = send_data_to_server(&request)?;
//!
//!     let (request, data) = authentication::step2(data, &response, &keys)?;
//!     let response = send_data_to_server(&request)?;
//!
//!     let (request, data) = authentication::step3(data, &response, now)?;
//!     let response = send_data_to_server(&request)?;
//!
//!     let authentication::Finished { auth_key, .. } = authentication::create_key(data, &response)?;
//!     // Now there is a secure `auth_key` to send encrypted messages with.
//!     Ok(())
//! }
//! ```
use crate::MsgId;
use ferrogram_crypto::{dh, rsa, AuthKey};
use ferrogram_tl::{self as tl, Cursor, Deserializable, RemoteCall, Serializable};
use getrandom::getrandom;
use num_bigint::BigUint;
use sha1::{Digest, Sha1};
use std::fmt;
use std::time::Duration;

/// Represents an error that occured during the generation of an
/// authorization key.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The response data was invalid and did not match our expectations.
    InvalidResponse {
        /// The inner error that caused the invalid response.
        error: tl::deserialize::Error,
    },

    /// The server's nonce did not match ours.
    InvalidNonce {
        /// The unexpected nonce that we got.
        got: [u8; 16],

        /// The expected nonce.
        expected: [u8; 16],
    },

    /// The server's PQ number was not of the right size.
    InvalidPqSize {
        /// The unexpected size that we got.
        size: usize,
    },

    /// None of the server fingerprints are known to us.
    UnknownFingerprints {
        /// The list of fingerprints that we got.
        fingerprints: Vec<i64>,
    },

    /// The server failed to send the Diffie-Hellman parameters.
    DhParamsFail,

    /// The server's nonce has changed during the key exchange.
    InvalidServerNonce {
        /// The unexpected nonce that we got.
        got: [u8; 16],

        /// The expected nonce.
        expected: [u8; 16],
    },

    /// The server's `encrypted_answer` is not correctly padded.
    EncryptedResponseNotPadded {
        /// The non-padded length of the response.
        len: usize,
    },

    /// An error occured while trying to read the DH inner data.
    InvalidDhInnerData {
        /// The inner error that occured when reading the data.
        error: tl::deserialize::Error,
    },

    /// The server sent a `dh_prime` that is not a safe 2048-bit prime
    /// with a matching generator.
    InvalidDhPrime,

    /// Some parameter (`g`, `g_a` or `g_b`) was out of range.
    GParameterOutOfRange,

    /// The generation of Diffie-Hellman parameters is to be retried.
    DhGenRetry,

    /// The generation of Diffie-Hellman parameters failed.
    DhGenFail,

    /// The plaintext answer hash did not match.
    InvalidAnswerHash {
        /// The unexpected hash that we got.
        got: [u8; 20],

        /// The expected hash.
        expected: [u8; 20],
    },

    /// The new nonce hash did not match.
    InvalidNewNonceHash {
        /// The unexpected hash that we got.
        got: [u8; 16],

        /// The expected hash.
        expected: [u8; 16],
    },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResponse { error } => write!(f, "invalid server response: {}", error),
            Self::InvalidNonce { got, expected } => {
                write!(f, "invalid nonce: got {:?}, expected {:?}", got, expected)
            }
            Self::InvalidPqSize { size } => write!(f, "invalid pq size {}", size),
            Self::UnknownFingerprints { fingerprints } => {
                write!(f, "all server fingerprints are unknown: {:?}", fingerprints)
            }
            Self::DhParamsFail => write!(f, "the generation of DH parameters by the server failed"),
            Self::InvalidServerNonce { got, expected } => write!(
                f,
                "invalid server nonce: got {:?}, expected {:?}",
                got, expected
            ),
            Self::EncryptedResponseNotPadded { len } => write!(
                f,
                "the encrypted server response was {} bytes long, which is not correctly padded",
                len
            ),
            Self::InvalidDhInnerData { error } => {
                write!(f, "could not deserialize DH inner data: {}", error)
            }
            Self::InvalidDhPrime => write!(f, "the DH prime sent by the server is unsafe"),
            Self::GParameterOutOfRange => {
                write!(f, "a DH parameter was outside of the safe range")
            }
            Self::DhGenRetry => write!(f, "the generation of DH parameters should be retried"),
            Self::DhGenFail => write!(f, "the generation of DH parameters failed"),
            Self::InvalidAnswerHash { got, expected } => write!(
                f,
                "invalid answer hash: got {:?}, expected {:?}",
                got, expected
            ),
            Self::InvalidNewNonceHash { got, expected } => write!(
                f,
                "invalid new nonce hash: got {:?}, expected {:?}",
                got, expected
            ),
        }
    }
}

impl From<tl::deserialize::Error> for Error {
    fn from(error: tl::deserialize::Error) -> Self {
        Self::InvalidResponse { error }
    }
}

/// The data generated by [`step1`], needed for [`step2`].
pub struct Step1 {
    nonce: [u8; 16],
    expires_in: Option<i32>,
}

/// The data generated by [`step2`], needed for [`step3`].
pub struct Step2 {
    nonce: [u8; 16],
    server_nonce: [u8; 16],
    new_nonce: [u8; 32],
}

/// The data generated by [`step3`], needed for [`create_key`].
pub struct Step3 {
    nonce: [u8; 16],
    server_nonce: [u8; 16],
    new_nonce: [u8; 32],
    gab: BigUint,
    time_offset: i32,
    server_time: i32,
}

/// The first step of the process to generate a permanent authorization
/// key.
pub fn step1() -> Result<(Vec<u8>, Step1), Error> {
    let random_bytes = {
        let mut buffer = [0; 16];
        getrandom(&mut buffer).expect("failed to generate secure data for auth key");
        buffer
    };

    do_step1(&random_bytes, None)
}

/// Like [`step1`], but the resulting key will be a temporary one that
/// the server forgets after `expires_in` seconds.
pub fn step1_temp(expires_in: i32) -> Result<(Vec<u8>, Step1), Error> {
    let random_bytes = {
        let mut buffer = [0; 16];
        getrandom(&mut buffer).expect("failed to generate secure data for auth key");
        buffer
    };

    do_step1(&random_bytes, Some(expires_in))
}

// n.b.: the `do_step` functions are pure so that they can be tested.
fn do_step1(random_bytes: &[u8; 16], expires_in: Option<i32>) -> Result<(Vec<u8>, Step1), Error> {
    // Step 1. Generate a secure random nonce.
    let nonce = *random_bytes;
    Ok((
        tl::functions::ReqPq { nonce }.to_bytes(),
        Step1 { nonce, expires_in },
    ))
}

/// The second step of the process to generate an authorization key:
/// validate the PQ response, factorize `pq` and request DH parameters
/// under one of the provided server keys.
pub fn step2(data: Step1, response: &[u8], keys: &[rsa::Key]) -> Result<(Vec<u8>, Step2), Error> {
    let random_bytes = {
        let mut buffer = [0; 32 + 192];
        getrandom(&mut buffer).expect("failed to generate secure data for auth key");
        buffer
    };

    do_step2(data, response, keys, &random_bytes)
}

fn do_step2(
    data: Step1,
    response: &[u8],
    keys: &[rsa::Key],
    random_bytes: &[u8; 32 + 192],
) -> Result<(Vec<u8>, Step2), Error> {
    let Step1 { nonce, expires_in } = data;
    let tl::enums::ResPq::Pq(res_pq) =
        <tl::functions::ReqPq as RemoteCall>::Return::from_bytes(response)?;

    check_nonce(&res_pq.nonce, &nonce)?;

    if res_pq.pq.len() != 8 {
        return Err(Error::InvalidPqSize {
            size: res_pq.pq.len(),
        });
    }

    let pq = u64::from_be_bytes(res_pq.pq[..].try_into().unwrap());
    let (p, q) = ferrogram_crypto::factorize::factorize(pq);

    let new_nonce: [u8; 32] = random_bytes[..32].try_into().unwrap();
    let random_bytes: [u8; 192] = random_bytes[32..].try_into().unwrap();

    // Convert (p, q) to bytes using the least amount of space possible.
    // If we don't do this, Telegram will close the connection with -404.
    let p_bytes = strip_leading_zeros(&p.to_be_bytes());
    let q_bytes = strip_leading_zeros(&q.to_be_bytes());

    // "pq is a representation of a natural number (in binary big endian
    // format)": https://core.telegram.org/mtproto/auth_key
    let pq_inner_data = match expires_in {
        None => tl::enums::PQInnerData::Data(tl::types::PQInnerData {
            pq: res_pq.pq.clone(),
            p: p_bytes.clone(),
            q: q_bytes.clone(),
            nonce,
            server_nonce: res_pq.server_nonce,
            new_nonce,
        })
        .to_bytes(),
        Some(expires_in) => tl::enums::PQInnerData::Temp(tl::types::PQInnerDataTemp {
            pq: res_pq.pq.clone(),
            p: p_bytes.clone(),
            q: q_bytes.clone(),
            nonce,
            server_nonce: res_pq.server_nonce,
            new_nonce,
            expires_in,
        })
        .to_bytes(),
    };

    let (fingerprint, key) = match res_pq
        .server_public_key_fingerprints
        .iter()
        .find_map(|&fingerprint| {
            keys.iter()
                .find(|key| key.fingerprint() == fingerprint)
                .map(|key| (fingerprint, key))
        }) {
        Some(x) => x,
        None => {
            return Err(Error::UnknownFingerprints {
                fingerprints: res_pq.server_public_key_fingerprints.clone(),
            })
        }
    };

    let ciphertext = rsa::encrypt_hashed(&pq_inner_data, key, &random_bytes);

    Ok((
        tl::functions::ReqDhParams {
            nonce,
            server_nonce: res_pq.server_nonce,
            p: p_bytes,
            q: q_bytes,
            public_key_fingerprint: fingerprint,
            encrypted_data: ciphertext,
        }
        .to_bytes(),
        Step2 {
            nonce,
            server_nonce: res_pq.server_nonce,
            new_nonce,
        },
    ))
}

/// The third step of the process to generate an authorization key:
/// decrypt and validate the server's DH parameters, and complete our
/// side of the exchange.
pub fn step3(data: Step2, response: &[u8], now: Duration) -> Result<(Vec<u8>, Step3), Error> {
    let random_bytes = {
        let mut buffer = [0; 256 + 16];
        getrandom(&mut buffer).expect("failed to generate secure data for auth key");
        buffer
    };

    do_step3(data, response, &random_bytes, now.as_secs() as i32)
}

fn do_step3(
    data: Step2,
    response: &[u8],
    random_bytes: &[u8; 256 + 16],
    now: i32,
) -> Result<(Vec<u8>, Step3), Error> {
    let Step2 {
        nonce,
        server_nonce,
        new_nonce,
    } = data;
    let server_dh_params =
        <tl::functions::ReqDhParams as RemoteCall>::Return::from_bytes(response)?;

    let server_dh_params = match server_dh_params {
        tl::enums::ServerDhParams::Fail(server_dh_params) => {
            // Even though this is a failing case, we should still
            // perform all the security checks.
            check_nonce(&server_dh_params.nonce, &nonce)?;
            check_server_nonce(&server_dh_params.server_nonce, &server_nonce)?;

            let new_nonce_hash: [u8; 16] = {
                let mut hasher = Sha1::new();
                hasher.update(new_nonce);
                let sha = hasher.finalize();
                sha[4..20].try_into().unwrap()
            };
            check_new_nonce_hash(&server_dh_params.new_nonce_hash, &new_nonce_hash)?;

            return Err(Error::DhParamsFail);
        }
        tl::enums::ServerDhParams::Ok(x) => x,
    };

    check_nonce(&server_dh_params.nonce, &nonce)?;
    check_server_nonce(&server_dh_params.server_nonce, &server_nonce)?;

    if server_dh_params.encrypted_answer.len() % 16 != 0 {
        return Err(Error::EncryptedResponseNotPadded {
            len: server_dh_params.encrypted_answer.len(),
        });
    }

    // Complete the DH exchange.
    let (key, iv) = ferrogram_crypto::generate_key_data_from_nonce(&server_nonce, &new_nonce);

    // sha1 hash + plain text + padding
    let plain_text_answer =
        ferrogram_crypto::decrypt_ige(&server_dh_params.encrypted_answer, &key, &iv);

    let got_answer_hash: [u8; 20] = plain_text_answer[..20].try_into().unwrap();

    // Use a cursor explicitly so we know where the answer ends (and most
    // importantly, where the padding starts).
    let mut plain_text_cursor = Cursor::from_slice(&plain_text_answer[20..]);
    let server_dh_inner = match tl::enums::ServerDhInnerData::deserialize(&mut plain_text_cursor) {
        Ok(tl::enums::ServerDhInnerData::Data(x)) => x,
        Err(error) => return Err(Error::InvalidDhInnerData { error }),
    };

    let expected_answer_hash = {
        let mut hasher = Sha1::new();
        hasher.update(&plain_text_answer[20..20 + plain_text_cursor.pos()]);
        hasher.finalize().into()
    };

    if got_answer_hash != expected_answer_hash {
        return Err(Error::InvalidAnswerHash {
            got: got_answer_hash,
            expected: expected_answer_hash,
        });
    }

    check_nonce(&server_dh_inner.nonce, &nonce)?;
    check_server_nonce(&server_dh_inner.server_nonce, &server_nonce)?;

    let dh_prime = BigUint::from_bytes_be(&server_dh_inner.dh_prime);
    let g = BigUint::from(server_dh_inner.g as u32);
    let g_a = BigUint::from_bytes_be(&server_dh_inner.g_a);

    // The prime and generator only have to be validated once per server
    // answer; a bad pair here means the connection is being tampered
    // with and the whole authorization must be aborted.
    if !dh::check_dh_prime(&dh_prime, server_dh_inner.g) {
        return Err(Error::InvalidDhPrime);
    }

    let time_offset = server_dh_inner.server_time - now;

    let b = BigUint::from_bytes_be(&random_bytes[..256]);
    let g_b = g.modpow(&b, &dh_prime);
    let gab = g_a.modpow(&b, &dh_prime);

    // Remove the used part from our available random data.
    let random_bytes: [u8; 16] = random_bytes[256..].try_into().unwrap();

    // "Both sides are to check that g, g_a and g_b are greater than 1
    // and less than dh_prime - 1. We recommend checking that g_a and
    // g_b are between 2^{2048-64} and dh_prime - 2^{2048-64} as well."
    if !dh::check_g_in_range(&g, &dh_prime)
        || !dh::check_g_in_range(&g_a, &dh_prime)
        || !dh::check_g_in_range(&g_b, &dh_prime)
        || !dh::check_g_in_safe_range(&g_a, &dh_prime)
        || !dh::check_g_in_safe_range(&g_b, &dh_prime)
    {
        return Err(Error::GParameterOutOfRange);
    }

    // Prepare the client DH inner data.
    let client_dh_inner = tl::enums::ClientDhInnerData::Data(tl::types::ClientDhInnerData {
        nonce,
        server_nonce,
        retry_id: 0,
        g_b: g_b.to_bytes_be(),
    })
    .to_bytes();

    // sha1(client_dh_inner).digest() + client_dh_inner
    let client_dh_inner_hashed = {
        let mut buffer = Vec::with_capacity(20 + client_dh_inner.len() + 16);

        let mut hasher = Sha1::new();
        hasher.update(&client_dh_inner);
        buffer.extend(hasher.finalize());
        buffer.extend(&client_dh_inner);

        // Pad it ourselves, or `encrypt_ige` would with new randomness.
        let pad_len = (16 - (buffer.len() % 16)) % 16;
        buffer.extend(&random_bytes[..pad_len]);

        buffer
    };

    let client_dh_encrypted = ferrogram_crypto::encrypt_ige(&client_dh_inner_hashed, &key, &iv);

    Ok((
        tl::functions::SetClientDhParams {
            nonce,
            server_nonce,
            encrypted_data: client_dh_encrypted,
        }
        .to_bytes(),
        Step3 {
            nonce,
            server_nonce,
            new_nonce,
            gab,
            time_offset,
            server_time: server_dh_inner.server_time,
        },
    ))
}

/// The final result of doing the authorization handshake, generated by
/// [`create_key`].
#[derive(Clone, Debug, PartialEq)]
pub struct Finished {
    pub auth_key: [u8; 256],
    pub time_offset: i32,
    pub server_time: i32,
    pub first_salt: i64,
}

/// The last step of the process to generate an authorization key.
pub fn create_key(data: Step3, response: &[u8]) -> Result<Finished, Error> {
    let Step3 {
        nonce,
        server_nonce,
        new_nonce,
        gab,
        time_offset,
        server_time,
    } = data;
    let dh_gen = <tl::functions::SetClientDhParams as RemoteCall>::Return::from_bytes(response)?;

    struct DhGenData {
        nonce: [u8; 16],
        server_nonce: [u8; 16],
        new_nonce_hash: [u8; 16],
        nonce_number: u8,
    }

    let dh_gen = match dh_gen {
        tl::enums::SetClientDhParamsAnswer::DhGenOk(x) => DhGenData {
            nonce: x.nonce,
            server_nonce: x.server_nonce,
            new_nonce_hash: x.new_nonce_hash1,
            nonce_number: 1,
        },
        tl::enums::SetClientDhParamsAnswer::DhGenRetry(x) => DhGenData {
            nonce: x.nonce,
            server_nonce: x.server_nonce,
            new_nonce_hash: x.new_nonce_hash2,
            nonce_number: 2,
        },
        tl::enums::SetClientDhParamsAnswer::DhGenFail(x) => DhGenData {
            nonce: x.nonce,
            server_nonce: x.server_nonce,
            new_nonce_hash: x.new_nonce_hash3,
            nonce_number: 3,
        },
    };

    check_nonce(&dh_gen.nonce, &nonce)?;
    check_server_nonce(&dh_gen.server_nonce, &server_nonce)?;

    let auth_key = {
        let mut buffer = [0; 256];
        let gab_bytes = gab.to_bytes_be();
        // The shared key might need fewer than 256 bytes; pad on the left.
        let skip = buffer.len() - gab_bytes.len();
        buffer[skip..].copy_from_slice(&gab_bytes);
        AuthKey::from_bytes(buffer)
    };

    let new_nonce_hash = auth_key.calc_new_nonce_hash(&new_nonce, dh_gen.nonce_number);
    check_new_nonce_hash(&dh_gen.new_nonce_hash, &new_nonce_hash)?;

    let first_salt = {
        let mut buffer = [0; 8];
        buffer
            .iter_mut()
            .zip(&new_nonce[..8])
            .zip(&server_nonce[..8])
            .for_each(|((x, a), b)| *x = a ^ b);
        i64::from_le_bytes(buffer)
    };

    match dh_gen.nonce_number {
        1 => Ok(Finished {
            auth_key: auth_key.to_bytes(),
            time_offset,
            server_time,
            first_salt,
        }),
        2 => Err(Error::DhGenRetry),
        _ => Err(Error::DhGenFail),
    }
}

/// Builds the `auth.bindTempAuthKey` request that associates a freshly
/// generated temporary key with the permanent one.
///
/// The inner `bind_auth_key_inner` payload is encrypted under the
/// *permanent* key, with a random salt and session of its own, and the
/// message identifier of the outer query; the outer query itself then
/// travels under the temporary key.
pub fn build_bind_temp_auth_key(
    perm_key: &AuthKey,
    temp_auth_key_id: i64,
    temp_session_id: i64,
    expires_at: i32,
    msg_id: MsgId,
) -> tl::functions::auth::BindTempAuthKey {
    let mut random_bytes = [0u8; 24];
    getrandom(&mut random_bytes).expect("failed to generate secure data for key binding");

    do_build_bind_temp_auth_key(
        perm_key,
        temp_auth_key_id,
        temp_session_id,
        expires_at,
        msg_id,
        &random_bytes,
    )
}

fn do_build_bind_temp_auth_key(
    perm_key: &AuthKey,
    temp_auth_key_id: i64,
    temp_session_id: i64,
    expires_at: i32,
    msg_id: MsgId,
    random_bytes: &[u8; 24],
) -> tl::functions::auth::BindTempAuthKey {
    let nonce = i64::from_le_bytes(random_bytes[0..8].try_into().unwrap());
    let inner_salt = i64::from_le_bytes(random_bytes[8..16].try_into().unwrap());
    let inner_session_id = i64::from_le_bytes(random_bytes[16..24].try_into().unwrap());

    let body = tl::enums::BindAuthKeyInner::Inner(tl::types::BindAuthKeyInner {
        nonce,
        temp_auth_key_id,
        perm_auth_key_id: perm_key.id(),
        temp_session_id,
        expires_at,
    })
    .to_bytes();

    let mut plaintext = Vec::with_capacity(32 + body.len());
    inner_salt.serialize(&mut plaintext);
    inner_session_id.serialize(&mut plaintext);
    msg_id.0.serialize(&mut plaintext);
    0i32.serialize(&mut plaintext); // seq_no
    (body.len() as i32).serialize(&mut plaintext);
    plaintext.extend_from_slice(&body);

    tl::functions::auth::BindTempAuthKey {
        perm_auth_key_id: perm_key.id(),
        nonce,
        expires_at,
        encrypted_message: ferrogram_crypto::encrypt_data_v1(&plaintext, perm_key),
    }
}

/// The well-known public RSA keys of the production and test servers.
pub fn known_rsa_keys() -> Vec<rsa::Key> {
    [
        // Production
        "29379598170669337022986177149456128565388431120058863768162556424047512191330847455146576344487764408661701890505066208632169112269581063774293102577308490531282748465986139880977280302242772832972539403531316010870401287642763009136156734339538042419388722777357134487746169093539093850251243897188928735903389451772730245253062963384108812842079887538976360465290946139638691491496062099570836476454855996319192747663615955633778034897140982517446405334423701359108810182097749467210509584293428076654573384828809574217079944388301239431309115013843331317877374435868468779972014486325557807783825502498215169806323",
        // Test
        "25342889448840415564971689590713473206898847759084779052582026594546022463853940585885215951168491965708222649399180603818074200620463776135424884632162512403163793083921641631564740959529419359595852941166848940585952337613333022396096584117954892216031229237302943701877588456738335398602461675225081791820393153757504952636234951323237820036543581047826906120927972487366805292115792231423684261262330394324750785450942589751755390156647751460719351439969059949569615302809050721500330239005077889855323917509948255722081644689442127297605422579707142646660768825302832201908302295573257427896031830742328565032949",
    ]
    .iter()
    .map(|n| rsa::Key::new(n, "65537").expect("compiled-in key must parse"))
    .collect()
}

/// Helper function to avoid the boilerplate of checking for an invalid
/// nonce.
fn check_nonce(got: &[u8; 16], expected: &[u8; 16]) -> Result<(), Error> {
    if got == expected {
        Ok(())
    } else {
        Err(Error::InvalidNonce {
            got: *got,
            expected: *expected,
        })
    }
}

/// Helper function to avoid the boilerplate of checking for an invalid
/// server nonce.
fn check_server_nonce(got: &[u8; 16], expected: &[u8; 16]) -> Result<(), Error> {
    if got == expected {
        Ok(())
    } else {
        Err(Error::InvalidServerNonce {
            got: *got,
            expected: *expected,
        })
    }
}

/// Helper function to avoid the boilerplate of checking for an invalid
/// new nonce hash.
fn check_new_nonce_hash(got: &[u8; 16], expected: &[u8; 16]) -> Result<(), Error> {
    if got == expected {
        Ok(())
    } else {
        Err(Error::InvalidNewNonceHash {
            got: *got,
            expected: *expected,
        })
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> Vec<u8> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrogram_tl::Identifiable;

    fn fixture_nonce() -> [u8; 16] {
        let mut nonce = [0u8; 16];
        nonce.iter_mut().enumerate().for_each(|(i, x)| *x = i as u8);
        nonce
    }

    fn fixture_server_nonce() -> [u8; 16] {
        [0xa5; 16]
    }

    #[test]
    fn step1_sends_req_pq_with_our_nonce() {
        let random = fixture_nonce();
        let (request, data) = do_step1(&random, None).unwrap();

        assert_eq!(
            &request[..4],
            &tl::functions::ReqPq::CONSTRUCTOR_ID.to_le_bytes()
        );
        assert_eq!(&request[4..], &random);
        assert_eq!(data.nonce, random);
        assert!(data.expires_in.is_none());
    }

    fn res_pq_response(nonce: [u8; 16], fingerprints: Vec<i64>) -> Vec<u8> {
        tl::enums::ResPq::Pq(tl::types::ResPq {
            nonce,
            server_nonce: fixture_server_nonce(),
            pq: 0x17ED48941A08F981u64.to_be_bytes().to_vec(),
            server_public_key_fingerprints: fingerprints,
        })
        .to_bytes()
    }

    #[test]
    fn step2_rejects_changed_nonce() {
        let (_, data) = do_step1(&fixture_nonce(), None).unwrap();
        let response = res_pq_response([0xff; 16], vec![1]);

        let random = [7u8; 32 + 192];
        match do_step2(data, &response, &known_rsa_keys(), &random) {
            Err(Error::InvalidNonce { got, expected }) => {
                assert_eq!(got, [0xff; 16]);
                assert_eq!(expected, fixture_nonce());
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn step2_rejects_unknown_fingerprints() {
        let (_, data) = do_step1(&fixture_nonce(), None).unwrap();
        let response = res_pq_response(fixture_nonce(), vec![123, 456]);

        let random = [7u8; 32 + 192];
        match do_step2(data, &response, &known_rsa_keys(), &random) {
            Err(Error::UnknownFingerprints { fingerprints }) => {
                assert_eq!(fingerprints, vec![123, 456]);
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn step2_requests_dh_params_with_factorized_pq() {
        let keys = known_rsa_keys();
        let fingerprint = keys[0].fingerprint();

        let (_, data) = do_step1(&fixture_nonce(), None).unwrap();
        let response = res_pq_response(fixture_nonce(), vec![fingerprint]);

        let random = [7u8; 32 + 192];
        let (request, data) = do_step2(data, &response, &keys, &random).unwrap();

        assert_eq!(
            &request[..4],
            &tl::functions::ReqDhParams::CONSTRUCTOR_ID.to_le_bytes()
        );
        assert_eq!(data.nonce, fixture_nonce());
        assert_eq!(data.server_nonce, fixture_server_nonce());
        assert_eq!(data.new_nonce, [7u8; 32]);

        // 0x17ED48941A08F981 = 1229739323 * 1402015859; the request
        // must carry both factors in big-endian with no leading zeros.
        let p = 1229739323u64.to_be_bytes();
        let q = 1402015859u64.to_be_bytes();
        assert!(request
            .windows(4)
            .any(|w| w == strip_leading_zeros(&p).as_slice()));
        assert!(request
            .windows(4)
            .any(|w| w == strip_leading_zeros(&q).as_slice()));
    }

    #[test]
    fn create_key_checks_the_new_nonce_hash() {
        let gab = BigUint::from(0x1234_5678_9abc_defu64);
        let auth_key = {
            let mut buffer = [0u8; 256];
            let gab_bytes = gab.to_bytes_be();
            buffer[256 - gab_bytes.len()..].copy_from_slice(&gab_bytes);
            AuthKey::from_bytes(buffer)
        };
        let new_nonce = [3u8; 32];

        let data = Step3 {
            nonce: fixture_nonce(),
            server_nonce: fixture_server_nonce(),
            new_nonce,
            gab: gab.clone(),
            time_offset: 4,
            server_time: 1693436740,
        };

        let response = tl::enums::SetClientDhParamsAnswer::DhGenOk(tl::types::DhGenOk {
            nonce: fixture_nonce(),
            server_nonce: fixture_server_nonce(),
            new_nonce_hash1: auth_key.calc_new_nonce_hash(&new_nonce, 1),
        })
        .to_bytes();

        let finished = create_key(data, &response).unwrap();
        assert_eq!(finished.auth_key, auth_key.to_bytes());
        assert_eq!(finished.time_offset, 4);

        // The first salt mixes the new nonce with the server nonce.
        let expected_salt = i64::from_le_bytes([
            3 ^ 0xa5,
            3 ^ 0xa5,
            3 ^ 0xa5,
            3 ^ 0xa5,
            3 ^ 0xa5,
            3 ^ 0xa5,
            3 ^ 0xa5,
            3 ^ 0xa5,
        ]);
        assert_eq!(finished.first_salt, expected_salt);
    }

    #[test]
    fn create_key_surfaces_retry_and_fail() {
        let gab = BigUint::from(7u32);
        let auth_key = {
            let mut buffer = [0u8; 256];
            buffer[255] = 7;
            AuthKey::from_bytes(buffer)
        };
        let new_nonce = [9u8; 32];

        let make_data = || Step3 {
            nonce: fixture_nonce(),
            server_nonce: fixture_server_nonce(),
            new_nonce,
            gab: gab.clone(),
            time_offset: 0,
            server_time: 0,
        };

        let retry = tl::enums::SetClientDhParamsAnswer::DhGenRetry(tl::types::DhGenRetry {
            nonce: fixture_nonce(),
            server_nonce: fixture_server_nonce(),
            new_nonce_hash2: auth_key.calc_new_nonce_hash(&new_nonce, 2),
        })
        .to_bytes();
        assert_eq!(create_key(make_data(), &retry), Err(Error::DhGenRetry));

        let fail = tl::enums::SetClientDhParamsAnswer::DhGenFail(tl::types::DhGenFail {
            nonce: fixture_nonce(),
            server_nonce: fixture_server_nonce(),
            new_nonce_hash3: auth_key.calc_new_nonce_hash(&new_nonce, 3),
        })
        .to_bytes();
        assert_eq!(create_key(make_data(), &fail), Err(Error::DhGenFail));
    }

    #[test]
    fn bind_request_inner_frame_decrypts_under_the_permanent_key() {
        let perm_key = AuthKey::from_bytes([0x33; 256]);
        let random = [0x11u8; 24];

        let request = do_build_bind_temp_auth_key(&perm_key, 0x7777, 0x8888, 1000, MsgId(4), &random);

        assert_eq!(request.perm_auth_key_id, perm_key.id());
        assert_eq!(request.expires_at, 1000);

        let (plaintext, _msg_key) =
            ferrogram_crypto::decrypt_data_v1(&request.encrypted_message, &perm_key).unwrap();

        // salt ‖ session_id ‖ msg_id ‖ seq_no ‖ len ‖ body
        assert_eq!(
            &plaintext[16..24],
            &4i64.to_le_bytes(),
            "inner msg_id must match the outer query"
        );
        assert_eq!(&plaintext[24..28], &0i32.to_le_bytes());

        let len = i32::from_le_bytes(plaintext[28..32].try_into().unwrap()) as usize;
        let body = &plaintext[32..32 + len];
        let inner = tl::enums::BindAuthKeyInner::from_bytes(body).unwrap();
        let tl::enums::BindAuthKeyInner::Inner(inner) = inner;
        assert_eq!(inner.nonce, request.nonce);
        assert_eq!(inner.temp_auth_key_id, 0x7777);
        assert_eq!(inner.perm_auth_key_id, perm_key.id());
        assert_eq!(inner.temp_session_id, 0x8888);
        assert_eq!(inner.expires_at, 1000);
    }
}
