// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: ripemd320.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! RIPEMD-320: two RIPEMD-160 lines kept apart, swapping one word
//! after each round.

use super::{round5, Compression, Line, IV, IV_EXTENDED};

// b, d, a, c, e are exchanged after rounds 1..=5
const EXCHANGE: [usize; 5] = [1, 3, 0, 2, 4];

#[derive(Clone, Debug)]
pub struct Ripemd320State {
	h: [u32; 10],
}

impl Compression for Ripemd320State {
	const OUTPUT_SIZE: usize = 40;

	fn initial() -> Self {
		let mut h = [0u32; 10];
		h[..5].copy_from_slice(&IV);
		h[5..].copy_from_slice(&IV_EXTENDED);
		Self { h }
	}

	fn compress(&mut self, x: &[u32; 16]) {
		let mut left = [self.h[0], self.h[1], self.h[2], self.h[3], self.h[4]];
		let mut right = [self.h[5], self.h[6], self.h[7], self.h[8], self.h[9]];
		for (round, &i) in EXCHANGE.iter().enumerate() {
			round5(&mut left, x, round, Line::Left);
			round5(&mut right, x, round, Line::Right);
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
	use super::super::Ripemd320;
	use crate::rhs::streaming::StreamingDigest;
	use hex_literal::hex;

	fn ripemd320(data: &[u8]) -> Vec<u8> {
		let mut h = Ripemd320::new();
		h.write(data);
		h.sum()
	}

	#[test]
	fn reference_vectors() {
		assert_eq!(
			ripemd320(b""),
			hex!("22d65d5661536cdc75c1fdf5c6de7b41b9f27325ebc61e8557177d705a0ec880151c3a32a00899b8")
		);
		assert_eq!(
			ripemd320(b"abc"),
			hex!("de4c01b3054f8930a79d09ae738e92301e5a17085beffdc1b8d116713e74f82fa942d64cdbc4682d")
		);
		assert_eq!(
			ripemd320(
				b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
			),
			hex!("265044d981c72af8c31a1c016ab7afced26808e9e34a1b537e054c2ca6c08e71609e6cd4141d85d8")
		);
	}
}
