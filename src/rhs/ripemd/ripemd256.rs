// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: ripemd256.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! RIPEMD-256: two RIPEMD-128 lines with separate chaining values that
//! trade one word after every round.

use super::{round4, Compression, Line, IV, IV_EXTENDED};

// word exchanged between the lines after rounds 1..=4: a, b, c, d
const EXCHANGE: [usize; 4] = [0, 1, 2, 3];

#[derive(Clone, Debug)]
pub struct Ripemd256State {
	h: [u32; 8],
}

impl Compression for Ripemd256State {
	const OUTPUT_SIZE: usize = 32;

	fn initial() -> Self {
		let mut h = [0u32; 8];
		h[..4].copy_from_slice(&IV[..4]);
		h[4..].copy_from_slice(&IV_EXTENDED[..4]);
		Self { h }
	}

	fn compress(&mut self, x: &[u32; 16]) {
		let mut left = [self.h[0], self.h[1], self.h[2], self.h[3]];
		let mut right = [self.h[4], self.h[5], self.h[6], self.h[7]];
		for (round, &i) in EXCHANGE.iter().enumerate() {
			round4(&mut left, x, round, Line::Left);
			round4(&mut right, x, round, Line::Right);
			std::mem::swap(&mut left[i], &mut right[i]);
		}

		for (h, v) in self.h.iter_mut().zip(left.iter().chain(right.iter())) {
			*h = h.wrapping_add(*v);
		}
	}

	fn words(&self) -> &[u32] {
		&self.h
	}
}

#[cfg(test)]
mod tests {
	use super::super::Ripemd256;
	use crate::rhs::streaming::StreamingDigest;
	use hex_literal::hex;

	fn ripemd256(data: &[u8]) -> Vec<u8> {
		let mut h = Ripemd256::new();
		h.write(data);
		h.sum()
	}

	#[test]
	fn reference_vectors() {
		assert_eq!(
			ripemd256(b""),
			hex!("02ba4c4e5f8ecd1877fc52d64d30e37a2d9774fb1e5d026380ae0168e3c5522d")
		);
		assert_eq!(
			ripemd256(b"abc"),
			hex!("afbd6e228b9d8cbbcef5ca2d03e6dba10ac0bc7dcbe4680e1e42d2e975459b65")
		);
		assert_eq!(
			ripemd256(
				b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
			),
			hex!("5ad114f0ccf88d0d5a5784f842d0b86884a233c8e8eb6dd3fd23745cc17090fa")
		);
	}
}
