// Copyright 2024 - developers of the `ferrogram` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compiled-in data-center endpoint tables.
//!
//! These only have to be good enough to reach *some* server; the real
//! tables are learned from `help.getConfig` afterwards.
use crate::net::Endpoint;

const PORT: u16 = 443;

/// Known `static` options for the production data centers.
const PRODUCTION_V4: [(i32, &str); 5] = [
    (1, "149.154.175.53"),
    (2, "149.154.167.51"),
    (3, "149.154.175.100"),
    (4, "149.154.167.92"),
    (5, "91.108.56.190"),
];

const PRODUCTION_V6: [(i32, &str); 5] = [
    (1, "2001:b28:f23d:f001::a"),
    (2, "2001:67c:4e8:f002::a"),
    (3, "2001:b28:f23d:f003::a"),
    (4, "2001:67c:4e8:f004::a"),
    (5, "2001:b28:f23f:f005::a"),
];

/// The test deployment only spans three data centers.
const TEST_V4: [(i32, &str); 3] = [
    (1, "149.154.175.10"),
    (2, "149.154.167.40"),
    (3, "149.154.175.117"),
];

const TEST_V6: [(i32, &str); 3] = [
    (1, "2001:b28:f23d:f001::e"),
    (2, "2001:67c:4e8:f002::e"),
    (3, "2001:b28:f23d:f003::e"),
];

fn lookup(table: &[(i32, &str)], dc_id: i32) -> Vec<Endpoint> {
    table
        .iter()
        .filter(|(id, _)| *id == dc_id)
        .map(|(_, address)| Endpoint::new(*address, PORT))
        .collect()
}

/// The compiled-in IPv4 endpoints for a data center.
pub fn seed_endpoints_v4(dc_id: i32, test_mode: bool) -> Vec<Endpoint> {
    if test_mode {
        lookup(&TEST_V4, dc_id)
    } else {
        lookup(&PRODUCTION_V4, dc_id)
    }
}

/// The compiled-in IPv6 endpoints for a data center.
pub fn seed_endpoints_v6(dc_id: i32, test_mode: bool) -> Vec<Endpoint> {
    if test_mode {
        lookup(&TEST_V6, dc_id)
    } else {
        lookup(&PRODUCTION_V6, dc_id)
    }
}

/// All data center ids with compiled-in endpoints.
pub fn seed_dc_ids(test_mode: bool) -> Vec<i32> {
    if test_mode {
        TEST_V4.iter().map(|(id, _)| *id).collect()
    } else {
        PRODUCTION_V4.iter().map(|(id, _)| *id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_production_dc_has_both_families() {
        for dc in seed_dc_ids(false) {
            assert_eq!(seed_endpoints_v4(dc, false).len(), 1);
            assert_eq!(seed_endpoints_v6(dc, false).len(), 1);
        }
    }

    #[test]
    fn unknown_dcs_start_with_no_endpoints() {
        assert!(seed_endpoints_v4(100, false).is_empty());
        assert!(seed_endpoints_v4(4, true).is_empty());
    }
}
