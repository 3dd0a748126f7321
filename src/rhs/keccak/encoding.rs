// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: encoding.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! NIST SP 800-185 integer and string encodings.

/// Big-endian bytes of `value` with leading zeros dropped (at least one
/// byte is kept).
fn trim_be_bytes(value: u64) -> Vec<u8> {
	let bytes = value.to_be_bytes();
	let first = bytes
		.iter()
		.position(|&b| b != 0)
		.unwrap_or(bytes.len() - 1);
	bytes[first..].to_vec()
}

pub fn left_encode(value: u64) -> Vec<u8> {
	let encoded = trim_be_bytes(value);
	let mut out = Vec::with_capacity(1 + encoded.len());
	out.push(encoded.len() as u8);
	out.extend_from_slice(&encoded);
	out
}

pub fn right_encode(value: u64) -> Vec<u8> {
	let mut out = trim_be_bytes(value);
	out.push(out.len() as u8);
	out
}

pub fn encode_string(input: &[u8]) -> Vec<u8> {
	let mut out = left_encode((input.len() as u64) * 8);
	out.extend_from_slice(input);
	out
}

/// `left_encode(w) || input`, zero-padded to a multiple of `w`.
pub fn bytepad(input: &[u8], w: usize) -> Vec<u8> {
	let mut out = left_encode(w as u64);
	out.extend_from_slice(input);
	let rem = out.len() % w;
	if rem != 0 {
		out.resize(out.len() + w - rem, 0);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn left_encode_prefixes_length() {
		assert_eq!(left_encode(0), vec![1, 0]);
		assert_eq!(left_encode(168), vec![1, 168]);
		assert_eq!(left_encode(256), vec![2, 1, 0]);
	}

	#[test]
	fn right_encode_suffixes_length() {
		assert_eq!(right_encode(0), vec![0, 1]);
		assert_eq!(right_encode(256), vec![1, 0, 2]);
		assert_eq!(right_encode(u64::MAX), {
			let mut v = vec![0xff; 8];
			v.push(8);
			v
		});
	}

	#[test]
	fn encode_string_uses_bit_length() {
		assert_eq!(encode_string(b""), vec![1, 0]);
		assert_eq!(encode_string(b"KMAC"), vec![1, 32, b'K', b'M', b'A', b'C']);
	}

	#[test]
	fn bytepad_rounds_up_to_rate() {
		let padded = bytepad(&[0xAA; 10], 8);
		assert_eq!(padded.len(), 16);
		assert_eq!(&padded[..3], &[1, 8, 0xAA]);
		assert!(padded[12..].iter().all(|&b| b == 0));
	}

	#[test]
	fn bytepad_does_not_add_a_block_when_aligned() {
		assert_eq!(bytepad(&[0x55; 6], 8).len(), 8);
	}
}
