// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: streaming.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! The streaming digest contract shared by every engine, plus helpers
//! for feeding readers and rendering digests as hexadecimal.

use hex::{encode, encode_upper};
use std::io::{self, Read};

const READ_BUFFER_SIZE: usize = 8192;

/// Incremental digest engine.
///
/// `write` never fails and accepts any input length. `finalize` works on
/// a private copy of the state, so the stream can keep growing after a
/// digest has been taken.
pub trait StreamingDigest: Send {
	/// Restores the initial state, including any keyed priming.
	fn reset(&mut self);

	/// Absorbs `data`; every completed block is compressed immediately.
	fn write(&mut self, data: &[u8]);

	/// Natural absorption granularity in bytes.
	fn block_size(&self) -> usize;

	/// Digest length in bytes.
	fn output_size(&self) -> usize;

	/// Returns `prefix` followed by the digest of everything written so
	/// far. The engine itself is left untouched.
	fn finalize(&self, prefix: &[u8]) -> Vec<u8>;

	fn box_clone(&self) -> Box<dyn StreamingDigest>;

	fn sum(&self) -> Vec<u8> {
		self.finalize(&[])
	}
}

impl Clone for Box<dyn StreamingDigest> {
	fn clone(&self) -> Self {
		self.box_clone()
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexCase {
	#[default]
	Lower,
	Upper,
}

pub fn to_hex(bytes: &[u8], case: HexCase) -> String {
	match case {
		HexCase::Lower => encode(bytes),
		HexCase::Upper => encode_upper(bytes),
	}
}

/// Resets `digest`, streams `reader` through it and returns the digest.
pub fn sum_reader<D, R>(digest: &mut D, mut reader: R) -> io::Result<Vec<u8>>
where
	D: StreamingDigest + ?Sized,
	R: Read,
{
	digest.reset();
	let mut buffer = [0u8; READ_BUFFER_SIZE];
	loop {
		let n = match reader.read(&mut buffer) {
			Ok(0) => break,
			Ok(n) => n,
			Err(err) if err.kind() == io::ErrorKind::Interrupted => {
				continue
			}
			Err(err) => return Err(err),
		};
		digest.write(&buffer[..n]);
	}
	Ok(digest.sum())
}

pub fn sum_reader_hex<D, R>(
	digest: &mut D,
	reader: R,
	case: HexCase,
) -> io::Result<String>
where
	D: StreamingDigest + ?Sized,
	R: Read,
{
	sum_reader(digest, reader).map(|bytes| to_hex(&bytes, case))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rhs::md2::Md2;

	#[test]
	fn hex_case_is_respected() {
		assert_eq!(to_hex(&[0xab, 0x01], HexCase::Lower), "ab01");
		assert_eq!(to_hex(&[0xab, 0x01], HexCase::Upper), "AB01");
	}

	#[test]
	fn sum_reader_resets_before_reading() {
		let mut md2 = Md2::new();
		md2.write(b"stale bytes");
		let hex = sum_reader_hex(&mut md2, &b""[..], HexCase::Lower)
			.expect("in-memory reader");
		assert_eq!(hex, "8350e5a3e24c153df2275c9f80692773");
	}

	#[test]
	fn finalize_prepends_prefix() {
		let md2 = Md2::new();
		let out = md2.finalize(b"pre");
		assert_eq!(&out[..3], b"pre");
		assert_eq!(out.len(), 3 + md2.output_size());
	}
}
