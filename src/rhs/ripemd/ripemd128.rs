// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: ripemd128.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! RIPEMD-128: two four-word lines over the shared schedule, folded
//! back into a single four-word chaining value.

use super::{round4, Compression, Line, IV};

#[derive(Clone, Debug)]
pub struct Ripemd128State {
	h: [u32; 4],
}

impl Compression for Ripemd128State {
	const OUTPUT_SIZE: usize = 16;

	fn initial() -> Self {
		Self {
			h: [IV[0], IV[1], IV[2], IV[3]],
		}
	}

	fn compress(&mut self, x: &[u32; 16]) {
		let mut left = self.h;
		let mut right = self.h;
		for round in 0..4 {
			round4(&mut left, x, round, Line::Left);
			round4(&mut right, x, round, Line::Right);
		}

		let [h0, h1, h2, h3] = self.h;
		let [a, b, c, d] = left;
		let [aa, bb, cc, dd] = right;
		self.h = [
			h1.wrapping_add(c).wrapping_add(dd),
			h2.wrapping_add(d).wrapping_add(aa),
			h3.wrapping_add(a).wrapping_add(bb),
			h0.wrapping_add(b).wrapping_add(cc),
		];
	}

	fn words(&self) -> &[u32] {
		&self.h
	}
}

#[cfg(test)]
mod tests {
	use super::super::Ripemd128;
	use crate::rhs::streaming::StreamingDigest;
	use hex_literal::hex;

	fn ripemd128(data: &[u8]) -> Vec<u8> {
		let mut h = Ripemd128::new();
		h.write(data);
		h.sum()
	}

	#[test]
	fn reference_vectors() {
		assert_eq!(ripemd128(b""), hex!("cdf26213a150dc3ecb610f18f6b38b46"));
		assert_eq!(ripemd128(b"abc"), hex!("c14a12199c66e4ba84636b0f69144c77"));
		assert_eq!(
			ripemd128(
				b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
			),
			hex!("b4328f031ccb7750865e3ee986f5ee9a")
		);
	}
}
