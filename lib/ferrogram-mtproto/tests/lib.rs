// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use ferrogram_mtproto::mtp::{Encrypted, Mtp};
use ferrogram_mtproto::transport::{Abridged, Transport};
use std::time::Duration;

const REQUEST: &[u8] = b"Hey!";

/// The generator must stay strictly monotonic no matter how the clock
/// behaves between calls: frozen, jumping forward, or jumping back.
#[test]
fn msg_ids_are_monotonic_under_any_clock() {
    let mut mtp = Encrypted::build()
        .compression_threshold(None)
        .finish([7; 256]);

    let times = [
        1_700_000_000u64,
        1_700_000_000, // frozen
        1_700_000_050, // forward jump
        1_700_000_010, // backwards jump
        1_700_000_010,
        1_700_000_011,
    ];

    let mut last = 0;
    for (i, secs) in times.into_iter().enumerate() {
        let now = Duration::new(secs, (i as u32) * 17);
        let msg_id = mtp.push(REQUEST, now).unwrap().0;
        assert!(msg_id > last, "msg id regressed at step {}", i);
        assert_eq!(msg_id % 4, 0);
        last = msg_id;
    }
}

/// Transport and MTP compose: what one instance frames and encrypts,
/// an identical instance would route to the network unchanged.
#[test]
fn finalize_then_pack_produces_whole_frames() {
    let now = Duration::from_secs(1_700_000_000);
    let mut mtp = Encrypted::build()
        .compression_threshold(None)
        .finish([7; 256]);
    let mut transport = Abridged::new();

    mtp.push(REQUEST, now);
    let payload = mtp.finalize(now);
    assert!(!payload.is_empty());
    assert_eq!(payload.len() % 4, 0);

    let mut packed = Vec::new();
    transport.pack(&payload, &mut packed);

    // Skip the one-time protocol hello, then unpack the frame whole.
    let offset = transport.unpack(&packed[1..]).unwrap();
    assert_eq!(&packed[1..][offset.data_start..offset.data_end], &payload[..]);
    assert_eq!(offset.next_offset, packed.len() - 1);
}

/// Two messages pushed without an intervening finalize share one
/// container; after a finalize the next push starts a fresh one.
#[test]
fn finalize_splits_containers() {
    let now = Duration::from_secs(1_700_000_000);
    let mut mtp = Encrypted::build()
        .compression_threshold(None)
        .finish([7; 256]);

    assert!(mtp.push(REQUEST, now).is_some());
    assert!(mtp.push(REQUEST, now).is_some());
    let first = mtp.finalize(now);

    assert!(mtp.push(REQUEST, now).is_some());
    let second = mtp.finalize(now);

    assert!(!first.is_empty());
    assert!(!second.is_empty());
    // A single message has less overhead than a two-entry container.
    assert!(second.len() < first.len());
}
