//! Address classification for initialize-time config checks.
//!
//! Soroban addresses carry their kind in the strkey: contracts encode as
//! `C…`, bare external accounts as `G…`. The checks below read the strkey
//! rendering, which works for any address without a cross-contract call.

use soroban_sdk::Address;

/// Every strkey rendering of an address is exactly 56 characters.
const STRKEY_LEN: usize = 56;

fn strkey_bytes(address: &Address) -> [u8; STRKEY_LEN] {
    let strkey = address.to_string();
    let mut buf = [0u8; STRKEY_LEN];
    strkey.copy_into_slice(&mut buf);
    buf
}

/// True if `address` identifies a deployed contract rather than a bare
/// external account.
pub fn is_contract(address: &Address) -> bool {
    strkey_bytes(address)[0] == b'C'
}

/// True if `address` is the all-zero account or contract address.
///
/// A zero payload encodes as a run of `A` characters after the version
/// prefix; checking the first 51 of them cannot collide with a real key.
pub fn is_zero_address(address: &Address) -> bool {
    let buf = strkey_bytes(address);
    buf[1..52].iter().all(|b| *b == b'A')
}
