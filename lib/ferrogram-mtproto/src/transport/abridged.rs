// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Error, Transport, UnpackedOffset};

/// The lightest MTProto transport protocol available. This is an
/// implementation of the [abridged transport].
///
/// * Overhead: very small.
/// * Minimum envelope length: 1 byte.
/// * Maximum envelope length: 4 bytes.
///
/// It serializes the input payload as follows, if the length is small
/// enough:
///
/// ```text
/// +-+----...----+
/// |L|  payload  |
/// +-+----...----+
///  ^ 1 byte
/// ```
///
/// Otherwise:
///
/// ```text
/// +----+----...----+
/// |0x7f len|  payload  |
/// +----+----...----+
///  ^^^^ 4 bytes
/// ```
///
/// [abridged transport]: https://core.telegram.org/mtproto/mtproto-transports#abridged
pub struct Abridged {
    init: bool,
}

#[allow(clippy::new_without_default)]
impl Abridged {
    pub fn new() -> Self {
        Self { init: false }
    }
}

impl Transport for Abridged {
    fn pack(&mut self, input: &[u8], output: &mut Vec<u8>) {
        assert_eq!(input.len() % 4, 0);

        if !self.init {
            output.push(0xef);
            self.init = true;
        }

        let len = input.len() / 4;
        if len < 127 {
            output.push(len as u8);
        } else {
            output.push(0x7f);
            output.extend(&(len as u32).to_le_bytes()[..3]);
        }
        output.extend_from_slice(input);
    }

    fn unpack(&mut self, input: &[u8]) -> Result<UnpackedOffset, Error> {
        if input.is_empty() {
            return Err(Error::MissingBytes);
        }

        let header_len;
        let len = input[0];
        let len = if len < 127 {
            header_len = 1;
            len as i32
        } else {
            if input.len() < 4 {
                return Err(Error::MissingBytes);
            }

            header_len = 4;
            i32::from_le_bytes(input[0..4].try_into().unwrap()) >> 8
        };

        if len <= 0 {
            return Err(Error::BadLen { got: len });
        }

        let len = len as usize * 4;
        if input.len() < header_len + len {
            return Err(Error::MissingBytes);
        }

        // A tiny "packet" holding a negative number is a transport-level
        // status report, such as -404 for an unknown authorization key.
        if len == 4 {
            let status = i32::from_le_bytes(input[header_len..header_len + 4].try_into().unwrap());
            if status < 0 {
                return Err(Error::BadStatus {
                    status: (-status) as u32,
                });
            }
        }

        Ok(UnpackedOffset {
            data_start: header_len,
            data_end: header_len + len,
            next_offset: header_len + len,
        })
    }

    fn reset(&mut self) {
        self.init = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a new abridged transport, and `n` bytes of input data.
    fn setup_pack(n: usize) -> (Abridged, Vec<u8>) {
        let input = (0..n).map(|x| (x & 0xff) as u8).collect();
        (Abridged::new(), input)
    }

    #[test]
    fn pack_empty() {
        let (mut transport, input) = setup_pack(0);
        let mut output = Vec::new();
        transport.pack(&input, &mut output);
        assert_eq!(&output, &[0xef, 0]);
    }

    #[test]
    #[should_panic]
    fn pack_non_padded() {
        let (mut transport, input) = setup_pack(7);
        let mut output = Vec::new();
        transport.pack(&input, &mut output);
    }

    #[test]
    fn pack_normal() {
        let (mut transport, input) = setup_pack(128);
        let mut output = Vec::new();
        transport.pack(&input, &mut output);
        assert_eq!(&output[..2], &[0xef, 32]);
        assert_eq!(&output[2..], &input[..]);
    }

    #[test]
    fn pack_only_sends_the_hello_once() {
        let (mut transport, input) = setup_pack(8);
        let mut output = Vec::new();
        transport.pack(&input, &mut output);
        output.clear();
        transport.pack(&input, &mut output);
        assert_eq!(output[0], 2);
    }

    #[test]
    fn pack_large() {
        let (mut transport, input) = setup_pack(1024);
        let mut output = Vec::new();
        transport.pack(&input, &mut output);
        assert_eq!(&output[..5], &[0xef, 127, 0, 1, 0]);
        assert_eq!(&output[5..], &input[..]);
    }

    #[test]
    fn boundary_between_length_forms() {
        // 126 words still fit the single-byte form; 127 words do not.
        let (mut transport, input) = setup_pack(126 * 4);
        let mut output = Vec::new();
        transport.pack(&input, &mut output);
        assert_eq!(&output[..2], &[0xef, 126]);

        let (mut transport, input) = setup_pack(127 * 4);
        let mut output = Vec::new();
        transport.pack(&input, &mut output);
        assert_eq!(&output[..5], &[0xef, 0x7f, 127, 0, 0]);
    }

    #[test]
    fn unpack_small() {
        let mut transport = Abridged::new();
        assert_eq!(transport.unpack(&[1]), Err(Error::MissingBytes));
    }

    #[test]
    fn unpack_normal() {
        let (mut transport, input) = setup_pack(128);
        let mut packed = Vec::new();
        transport.pack(&input, &mut packed);

        let offset = transport.unpack(&packed[1..]).unwrap(); // skip hello byte
        assert_eq!(&packed[1..][offset.data_start..offset.data_end], &input[..]);
    }

    #[test]
    fn unpack_two_at_once() {
        let (mut transport, input) = setup_pack(128);
        let mut packed = Vec::new();
        transport.pack(&input, &mut packed);
        let mut buffer = packed[1..].to_vec(); // skip hello byte
        let single_size = buffer.len();
        packed.clear();
        transport.pack(&input, &mut packed);
        buffer.extend(&packed);

        let offset = transport.unpack(&buffer).unwrap();
        assert_eq!(&buffer[offset.data_start..offset.data_end], &input[..]);
        assert_eq!(offset.next_offset, single_size);

        let offset = transport.unpack(&buffer[single_size..]).unwrap();
        assert_eq!(
            &buffer[single_size..][offset.data_start..offset.data_end],
            &input[..]
        );
    }

    #[test]
    fn unpack_large() {
        let (mut transport, input) = setup_pack(1024);
        let mut packed = Vec::new();
        transport.pack(&input, &mut packed);

        let offset = transport.unpack(&packed[1..]).unwrap();
        assert_eq!(&packed[1..][offset.data_start..offset.data_end], &input[..]);
    }

    #[test]
    fn unpack_bad_status() {
        let mut transport = Abridged::new();
        let mut buffer = vec![1u8];
        buffer.extend(&(-404_i32).to_le_bytes());

        assert_eq!(
            transport.unpack(&buffer),
            Err(Error::BadStatus { status: 404 })
        );
    }
}
