// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// Module: ripemd (RIPEMD-128/160/256/320)
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! The RIPEMD family. All four variants share the Merkle-Damgard framing,
//! the message schedule and the round functions; they differ in the
//! width of each line and in how the two parallel lines are combined.

mod ripemd128;
mod ripemd160;
mod ripemd256;
mod ripemd320;

pub use ripemd128::Ripemd128State;
pub use ripemd160::Ripemd160State;
pub use ripemd256::Ripemd256State;
pub use ripemd320::Ripemd320State;

use super::buffer::BlockBuffer;
use super::streaming::StreamingDigest;

pub const BLOCK_SIZE: usize = 64;

pub type Ripemd128 = Ripemd<Ripemd128State>;
pub type Ripemd160 = Ripemd<Ripemd160State>;
pub type Ripemd256 = Ripemd<Ripemd256State>;
pub type Ripemd320 = Ripemd<Ripemd320State>;

/// Chaining state of one RIPEMD variant.
pub trait Compression: Clone + Send + 'static {
	const OUTPUT_SIZE: usize;

	fn initial() -> Self;

	/// Processes one block of sixteen little-endian message words.
	fn compress(&mut self, x: &[u32; 16]);

	/// Chaining words, emitted little-endian as the digest.
	fn words(&self) -> &[u32];
}

#[derive(Clone)]
pub struct Ripemd<C: Compression> {
	state: C,
	buffer: BlockBuffer<BLOCK_SIZE>,
	length: u64,
}

impl<C: Compression> Ripemd<C> {
	pub fn new() -> Self {
		Self {
			state: C::initial(),
			buffer: BlockBuffer::new(),
			length: 0,
		}
	}
}

impl<C: Compression> Default for Ripemd<C> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C: Compression> StreamingDigest for Ripemd<C> {
	fn reset(&mut self) {
		self.state = C::initial();
		self.buffer.clear();
		self.length = 0;
	}

	fn write(&mut self, data: &[u8]) {
		self.length = self.length.wrapping_add(data.len() as u64);
		let state = &mut self.state;
		self.buffer.feed(data, BLOCK_SIZE, |block| {
			state.compress(&load_words(block))
		});
	}

	fn block_size(&self) -> usize {
		BLOCK_SIZE
	}

	fn output_size(&self) -> usize {
		C::OUTPUT_SIZE
	}

	fn finalize(&self, prefix: &[u8]) -> Vec<u8> {
		let mut h = self.clone();
		let bits = h.length.wrapping_mul(8);

		// 0x80, zeros up to 56 mod 64, then the bit length
		let pending = h.buffer.len();
		let pad_len = if pending < 56 { 56 - pending } else { 120 - pending };
		let mut padding = [0u8; BLOCK_SIZE];
		padding[0] = 0x80;
		h.write(&padding[..pad_len]);
		h.write(&bits.to_le_bytes());
		assert_eq!(h.buffer.len(), 0, "ripemd padding left a partial block");

		let mut out = Vec::with_capacity(prefix.len() + C::OUTPUT_SIZE);
		out.extend_from_slice(prefix);
		for word in h.state.words() {
			out.extend_from_slice(&word.to_le_bytes());
		}
		out
	}

	fn box_clone(&self) -> Box<dyn StreamingDigest> {
		Box::new(self.clone())
	}
}

fn load_words(block: &[u8]) -> [u32; 16] {
	let mut x = [0u32; 16];
	for (word, bytes) in x.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
	}
	x
}

pub(crate) const IV: [u32; 5] =
	[0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Second half of the doubled-width initial values (256 / 320).
pub(crate) const IV_EXTENDED: [u32; 5] =
	[0x76543210, 0xfedcba98, 0x89abcdef, 0x01234567, 0x3c2d1e0f];

// message word selection, left line
const R: [usize; 80] = [
	0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
	7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
	3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
	1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
	4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];

// message word selection, right line
const RP: [usize; 80] = [
	5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
	6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
	15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
	8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
	12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

const S: [u32; 80] = [
	11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
	7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
	11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
	11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
	9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];

const SP: [u32; 80] = [
	8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
	9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
	9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
	15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
	8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

const KL: [u32; 5] = [0x00000000, 0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xa953fd4e];
const KR4: [u32; 4] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x00000000];
const KR5: [u32; 5] = [0x50a28be6, 0x5c4dd124, 0x6d703ef3, 0x7a6d76e9, 0x00000000];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Line {
	Left,
	Right,
}

#[inline(always)]
fn f(function: usize, x: u32, y: u32, z: u32) -> u32 {
	match function {
		0 => x ^ y ^ z,
		1 => (x & y) | (!x & z),
		2 => (x | !y) ^ z,
		3 => (x & z) | (y & !z),
		_ => x ^ (y | !z),
	}
}

/// Sixteen steps of a four-word line (RIPEMD-128 and RIPEMD-256).
pub(crate) fn round4(v: &mut [u32; 4], x: &[u32; 16], round: usize, line: Line) {
	let (order, shifts, k, function) = match line {
		Line::Left => (&R, &S, KL[round], round),
		Line::Right => (&RP, &SP, KR4[round], 3 - round),
	};
	let [mut a, mut b, mut c, mut d] = *v;
	for j in round * 16..(round + 1) * 16 {
		let t = a
			.wrapping_add(f(function, b, c, d))
			.wrapping_add(x[order[j]])
			.wrapping_add(k)
			.rotate_left(shifts[j]);
		a = d;
		d = c;
		c = b;
		b = t;
	}
	*v = [a, b, c, d];
}

/// Sixteen steps of a five-word line (RIPEMD-160 and RIPEMD-320).
pub(crate) fn round5(v: &mut [u32; 5], x: &[u32; 16], round: usize, line: Line) {
	let (order, shifts, k, function) = match line {
		Line::Left => (&R, &S, KL[round], round),
		Line::Right => (&RP, &SP, KR5[round], 4 - round),
	};
	let [mut a, mut b, mut c, mut d, mut e] = *v;
	for j in round * 16..(round + 1) * 16 {
		let t = a
			.wrapping_add(f(function, b, c, d))
			.wrapping_add(x[order[j]])
			.wrapping_add(k)
			.rotate_left(shifts[j])
			.wrapping_add(e);
		a = e;
		e = d;
		d = c.rotate_left(10);
		c = b;
		b = t;
	}
	*v = [a, b, c, d, e];
}
