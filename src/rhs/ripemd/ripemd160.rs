// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: ripemd160.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! RIPEMD-160 compression.

use super::{round5, Compression, Line, IV};

#[derive(Clone, Debug)]
pub struct Ripemd160State {
	h: [u32; 5],
}

impl Compression for Ripemd160State {
	const OUTPUT_SIZE: usize = 20;

	fn initial() -> Self {
		Self { h: IV }
	}

	fn compress(&mut self, x: &[u32; 16]) {
		let mut left = self.h;
		let mut right = self.h;
		for round in 0..5 {
			round5(&mut left, x, round, Line::Left);
			round5(&mut right, x, round, Line::Right);
		}

		let [h0, h1, h2, h3, h4] = self.h;
		let [a, b, c, d, e] = left;
		let [aa, bb, cc, dd, ee] = right;
		self.h = [
			h1.wrapping_add(c).wrapping_add(dd),
			h2.wrapping_add(d).wrapping_add(ee),
			h3.wrapping_add(e).wrapping_add(aa),
			h4.wrapping_add(a).wrapping_add(bb),
			h0.wrapping_add(b).wrapping_add(cc),
		];
	}

	fn words(&self) -> &[u32] {
		&self.h
	}
}

#[cfg(test)]
mod tests {
	use super::super::Ripemd160;
	use crate::rhs::streaming::StreamingDigest;
	use hex_literal::hex;

	fn ripemd160(data: &[u8]) -> Vec<u8> {
		let mut h = Ripemd160::new();
		h.write(data);
		h.sum()
	}

	#[test]
	fn reference_vectors() {
		assert_eq!(
			ripemd160(b""),
			hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31")
		);
		assert_eq!(
			ripemd160(b"abc"),
			hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")
		);
		assert_eq!(
			ripemd160(
				b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
			),
			hex!("d9b27c4dda5b353363352e08a0e112f8c1e0738c")
		);
	}
}
