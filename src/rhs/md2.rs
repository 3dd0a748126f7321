// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: md2.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! MD2 (RFC 1319). Kept for compatibility with legacy data only.

use super::buffer::BlockBuffer;
use super::streaming::StreamingDigest;

pub const SIZE: usize = 16;
pub const BLOCK_SIZE: usize = 16;

const ROUNDS: usize = 18;

// permutation of 0..=255 derived from the digits of pi
const S: [u8; 256] = [
	41, 46, 67, 201, 162, 216, 124, 1, 61, 54, 84, 161, 236, 240, 6, 19,
	98, 167, 5, 243, 192, 199, 115, 140, 152, 147, 43, 217, 188, 76, 130,
	202, 30, 155, 87, 60, 253, 212, 224, 22, 103, 66, 111, 24, 138, 23,
	229, 18, 190, 78, 196, 214, 218, 158, 222, 73, 160, 251, 245, 142,
	187, 47, 238, 122, 169, 104, 121, 145, 21, 178, 7, 63, 148, 194, 16,
	137, 11, 34, 95, 33, 128, 127, 93, 154, 90, 144, 50, 39, 53, 62, 204,
	231, 191, 247, 151, 3, 255, 25, 48, 179, 72, 165, 181, 209, 215, 94,
	146, 42, 172, 86, 170, 198, 79, 184, 56, 210, 150, 164, 125, 182, 118,
	252, 107, 226, 156, 116, 4, 241, 69, 157, 112, 89, 100, 113, 135, 32,
	134, 91, 207, 101, 230, 45, 168, 2, 27, 96, 37, 173, 174, 176, 185,
	246, 28, 70, 97, 105, 52, 64, 126, 15, 85, 71, 163, 35, 221, 81, 175,
	58, 195, 92, 249, 206, 186, 197, 234, 38, 44, 83, 13, 110, 133, 40,
	132, 9, 211, 223, 205, 244, 65, 129, 77, 82, 106, 220, 55, 200, 108,
	193, 171, 250, 36, 225, 123, 8, 12, 189, 177, 74, 120, 136, 149, 139,
	227, 99, 232, 109, 233, 203, 213, 254, 59, 0, 29, 57, 242, 239, 183,
	14, 102, 88, 208, 228, 166, 119, 114, 248, 235, 117, 75, 10, 49, 68,
	80, 180, 143, 237, 31, 26, 219, 153, 141, 51, 159, 17, 131, 20,
];

#[derive(Clone)]
struct Md2State {
	// three 16-byte lanes: chaining value, message block, their xor
	x: [u8; 3 * BLOCK_SIZE],
	checksum: [u8; BLOCK_SIZE],
}

impl Md2State {
	const fn new() -> Self {
		Self {
			x: [0u8; 3 * BLOCK_SIZE],
			checksum: [0u8; BLOCK_SIZE],
		}
	}

	fn compress(&mut self, block: &[u8]) {
		for (i, &byte) in block.iter().enumerate() {
			self.x[BLOCK_SIZE + i] = byte;
			self.x[2 * BLOCK_SIZE + i] = byte ^ self.x[i];
		}

		let mut t = 0u8;
		for round in 0..ROUNDS {
			for x in self.x.iter_mut() {
				*x ^= S[t as usize];
				t = *x;
			}
			t = t.wrapping_add(round as u8);
		}

		let mut l = self.checksum[BLOCK_SIZE - 1];
		for (c, &byte) in self.checksum.iter_mut().zip(block) {
			*c ^= S[(byte ^ l) as usize];
			l = *c;
		}
	}
}

#[derive(Clone)]
pub struct Md2 {
	state: Md2State,
	buffer: BlockBuffer<BLOCK_SIZE>,
}

impl Md2 {
	pub const fn new() -> Self {
		Self {
			state: Md2State::new(),
			buffer: BlockBuffer::new(),
		}
	}
}

impl Default for Md2 {
	fn default() -> Self {
		Self::new()
	}
}

impl StreamingDigest for Md2 {
	fn reset(&mut self) {
		self.state = Md2State::new();
		self.buffer.clear();
	}

	fn write(&mut self, data: &[u8]) {
		let state = &mut self.state;
		self.buffer
			.feed(data, BLOCK_SIZE, |block| state.compress(block));
	}

	fn block_size(&self) -> usize {
		BLOCK_SIZE
	}

	fn output_size(&self) -> usize {
		SIZE
	}

	fn finalize(&self, prefix: &[u8]) -> Vec<u8> {
		let mut h = self.clone();

		// N bytes of value N, N in 1..=16
		let n = BLOCK_SIZE - h.buffer.len();
		h.write(&[n as u8; BLOCK_SIZE][..n]);
		assert_eq!(h.buffer.len(), 0, "md2 padding left a partial block");

		let checksum = h.state.checksum;
		h.write(&checksum);
		assert_eq!(h.buffer.len(), 0, "md2 checksum left a partial block");

		let mut out = Vec::with_capacity(prefix.len() + SIZE);
		out.extend_from_slice(prefix);
		out.extend_from_slice(&h.state.x[..SIZE]);
		out
	}

	fn box_clone(&self) -> Box<dyn StreamingDigest> {
		Box::new(self.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	fn md2(data: &[u8]) -> Vec<u8> {
		let mut h = Md2::new();
		h.write(data);
		h.sum()
	}

	#[test]
	fn rfc1319_vectors() {
		assert_eq!(md2(b""), hex!("8350e5a3e24c153df2275c9f80692773"));
		assert_eq!(md2(b"abc"), hex!("da853b0d3f88d99b30283a69e6ded6bb"));
		assert_eq!(
			md2(b"message digest"),
			hex!("ab4f496bfb2a530b219ff33031fe06b0")
		);
	}

	#[test]
	fn single_byte() {
		assert_eq!(md2(b"b"), hex!("82ce940b1b4fd2ecd8236e81a6f8b5cb"));
	}

	#[test]
	fn sbox_is_a_permutation() {
		let mut seen = [false; 256];
		for &v in S.iter() {
			assert!(!seen[v as usize], "duplicate s-box entry {}", v);
			seen[v as usize] = true;
		}
	}

	#[test]
	fn large_write_after_buffered_bytes() {
		let data = vec![0x5au8; 1000];
		let mut h = Md2::new();
		h.write(&data[..3]);
		h.write(&data[3..]);
		assert_eq!(h.sum(), md2(&data));
	}
}
