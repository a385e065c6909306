// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that can occur when using the library's functions.
use ferrogram_tl as tl;
use std::error::Error;
use std::fmt;

/// The error type for the deserialization of server messages.
#[derive(Debug, Clone, PartialEq)]
pub enum DeserializeError {
    /// The frame carried an authorization key ID that is neither the
    /// temporary nor the permanent key of the receiving client.
    BadAuthKey { got: i64 },

    /// The server's message ID did not match our expectations.
    BadMessageId { got: i64 },

    /// The server's message ID encodes a time too far from our own view
    /// of the server clock. The session must be replaced.
    BadMessageTime { got: i64 },

    /// The frame was encrypted for a session other than the receiving one.
    BadSessionId { got: i64, expected: i64 },

    /// The server's message length was not strictly positive.
    NegativeMessageLength { got: i32 },

    /// The server's message length was past the buffer.
    TooLongMessageLength { got: usize, max_length: usize },

    /// The server's message length was not padded to a word boundary, or
    /// left more slack than the framing allows.
    MisalignedMessageLength { got: i32 },

    /// The message key in the frame does not match the decrypted contents.
    MessageKeyMismatch,

    /// The error occured at the [transport level], making it impossible
    /// to deserialize any data. The absolute value resembles an HTTP
    /// status code. Some known, possible codes are:
    ///
    /// * 404, if the authorization key used was not found, meaning that
    ///   the server is not aware of the key used by the client.
    ///
    /// * 429, if too many transport connections were established to the
    ///   same IP address in a too-short lapse of time.
    ///
    /// [transport level]: https://core.telegram.org/mtproto/mtproto-transports#transport-errors
    TransportError { code: i32 },

    /// The received buffer is too small to contain a valid response
    /// message, or the response seemed valid at first but trying to
    /// deserialize it proved the buffer to be too small.
    MessageBufferTooSmall,

    /// The server responded with compressed data which we failed to
    /// decompress.
    DecompressionFailed,

    /// The server sent compressed data nested inside compressed data,
    /// which the protocol forbids.
    NestedGzip,

    /// While deserializing the response types one of them had a
    /// constructor that did not match our expectations.
    UnexpectedConstructor { id: u32 },

    /// Attempting to decrypt the message failed in some way.
    DecryptionError(ferrogram_crypto::Error),
}

impl Error for DeserializeError {}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::BadAuthKey { got } => write!(f, "bad server auth key (got {})", got),
            Self::BadMessageId { got } => write!(f, "bad server message id (got {})", got),
            Self::BadMessageTime { got } => {
                write!(f, "server message id {} is too far from our time", got)
            }
            Self::BadSessionId { got, expected } => write!(
                f,
                "bad server session id (got {}, expected {})",
                got, expected
            ),
            Self::NegativeMessageLength { got } => {
                write!(f, "bad server message length (got {})", got)
            }
            Self::TooLongMessageLength { got, max_length } => write!(
                f,
                "bad server message length (got {}, when at most it should be {})",
                got, max_length
            ),
            Self::MisalignedMessageLength { got } => {
                write!(f, "misaligned server message length (got {})", got)
            }
            Self::MessageKeyMismatch => write!(f, "server msgkey mismatches with ours"),
            Self::TransportError { code } => {
                write!(f, "transport-level error, status code: {}", code.abs())
            }
            Self::MessageBufferTooSmall => write!(
                f,
                "server responded with a payload that's too small to fit a valid message"
            ),
            Self::DecompressionFailed => write!(f, "failed to decompress server's data"),
            Self::NestedGzip => write!(f, "server sent gzip nested inside gzip"),
            Self::UnexpectedConstructor { id } => write!(f, "unexpected constructor: {:08x}", id),
            Self::DecryptionError(ref error) => write!(f, "failed to decrypt message: {}", error),
        }
    }
}

impl From<tl::deserialize::Error> for DeserializeError {
    fn from(error: tl::deserialize::Error) -> Self {
        use tl::deserialize::Error::*;

        match error {
            UnexpectedEof => DeserializeError::MessageBufferTooSmall,
            UnexpectedConstructor { id } => DeserializeError::UnexpectedConstructor { id },
        }
    }
}

impl From<ferrogram_crypto::Error> for DeserializeError {
    fn from(error: ferrogram_crypto::Error) -> Self {
        Self::DecryptionError(error)
    }
}

/// This error occurs when a Remote Procedure Call was unsuccessful.
///
/// The request should be retransmitted when this happens, unless the
/// variant is `RpcError`.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The parameters used in the request were invalid and caused a
    /// Remote Procedure Call error.
    RpcError(RpcError),

    /// The call was dropped (cancelled), so the server will not process
    /// it.
    Dropped,

    /// The message sent to the server was invalid, and the request
    /// must be retransmitted.
    BadMessage {
        /// The code of the bad message error.
        code: i32,
    },

    /// The deserialization of the response that was meant to confirm
    /// this request failed, so while the server technically responded to
    /// the request, its answer is useless as it could not be understood.
    Deserialize(DeserializeError),
}

impl RequestError {
    pub fn should_retransmit(&self) -> bool {
        !matches!(self, Self::RpcError(_))
    }
}

impl From<DeserializeError> for RequestError {
    fn from(error: DeserializeError) -> Self {
        Self::Deserialize(error)
    }
}

impl From<tl::deserialize::Error> for RequestError {
    fn from(error: tl::deserialize::Error) -> Self {
        RequestError::from(DeserializeError::from(error))
    }
}

/// The error type reported by the server when a request is misused.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcError {
    /// A numerical value similar to HTTP status codes.
    pub code: i32,

    /// The ASCII error name, normally in screaming snake case.
    pub name: String,

    /// If the error name carried an additional numeric value (such as
    /// the seconds of a `FLOOD_WAIT_42`), it is split out here.
    pub value: Option<u32>,
}

impl Error for RpcError {}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rpc error {}: {}", self.code, self.name)?;
        if let Some(value) = self.value {
            write!(f, " (value: {})", value)?;
        }
        Ok(())
    }
}

impl RpcError {
    /// Matches on the name of the RPC error, ignoring the numeric value.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

impl From<tl::types::RpcError> for RpcError {
    fn from(error: tl::types::RpcError) -> Self {
        // Extract the numeric value in the error, if any.
        if let Some(value) = error
            .error_message
            .split(|c: char| !c.is_ascii_digit())
            .find(|s| !s.is_empty())
        {
            let mut to_remove = String::with_capacity(1 + value.len());
            to_remove.push('_');
            to_remove.push_str(value);
            Self {
                code: error.error_code,
                name: error.error_message.replace(&to_remove, ""),
                // Safe to unwrap, matched on digits.
                value: Some(value.parse().unwrap()),
            }
        } else {
            Self {
                code: error.error_code,
                name: error.error_message.clone(),
                value: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_rpc_error_parsing() {
        assert_eq!(
            RpcError::from(tl::types::RpcError {
                error_code: 400,
                error_message: "CHAT_INVALID".into(),
            }),
            RpcError {
                code: 400,
                name: "CHAT_INVALID".into(),
                value: None
            }
        );

        assert_eq!(
            RpcError::from(tl::types::RpcError {
                error_code: 420,
                error_message: "FLOOD_WAIT_31".into(),
            }),
            RpcError {
                code: 420,
                name: "FLOOD_WAIT".into(),
                value: Some(31)
            }
        );

        assert_eq!(
            RpcError::from(tl::types::RpcError {
                error_code: 303,
                error_message: "PHONE_MIGRATE_4".into(),
            }),
            RpcError {
                code: 303,
                name: "PHONE_MIGRATE".into(),
                value: Some(4)
            }
        );

        assert_eq!(
            RpcError::from(tl::types::RpcError {
                error_code: 500,
                error_message: "INTERDC_2_CALL_ERROR".into(),
            }),
            RpcError {
                code: 500,
                name: "INTERDC_CALL_ERROR".into(),
                value: Some(2)
            }
        );
    }
}
