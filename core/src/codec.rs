//! Argument encoding for the `@`-separated transaction data grammar.
//!
//! Built-in function calls travel in the `data` field as
//! `FunctionName@arg1@arg2@...`, where every argument is the lowercase hex
//! of its top-level binary encoding:
//!
//! - unsigned integers are minimal big-endian bytes, so zero is the empty
//!   argument and there are always an even number of hex digits;
//! - strings are their UTF-8 bytes;
//! - addresses are their 32 raw bytes.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::address::Address;

/// Separator between the function name and each argument.
pub const ARGUMENTS_SEPARATOR: char = '@';

/// Hex of an arbitrary-precision unsigned integer. Zero encodes as `""`.
pub fn encode_biguint(value: &BigUint) -> String {
    if value.is_zero() {
        return String::new();
    }
    hex::encode(value.to_bytes_be())
}

/// Hex of a `u64`, minimal big-endian. Zero encodes as `""`.
pub fn encode_u64(value: u64) -> String {
    let bytes = value.to_be_bytes();
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    hex::encode(&bytes[first..])
}

/// Hex of a string's UTF-8 bytes.
pub fn encode_str(value: &str) -> String {
    hex::encode(value.as_bytes())
}

/// Hex of an address's raw bytes.
pub fn encode_address(address: &Address) -> String {
    address.to_hex()
}

/// Joins a function name and its encoded arguments with `@`.
pub fn join_args<S: AsRef<str>>(parts: &[S]) -> String {
    let capacity = parts.iter().map(|p| p.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(ARGUMENTS_SEPARATOR);
        }
        out.push_str(part.as_ref());
    }
    out
}
