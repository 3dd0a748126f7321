// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: hmac.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! RFC 2104 HMAC over any streaming engine.

use super::streaming::StreamingDigest;
use zeroize::Zeroizing;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

#[derive(Clone)]
pub struct Hmac {
	inner: Box<dyn StreamingDigest>,
	// engine already primed with key ^ opad
	outer: Box<dyn StreamingDigest>,
	inner_pad: Zeroizing<Vec<u8>>,
}

impl Hmac {
	/// Keys longer than the engine's block size are hashed first; the
	/// result is zero-padded to one block.
	pub fn new(mut digest: Box<dyn StreamingDigest>, key: &[u8]) -> Self {
		let block_size = digest.block_size();
		digest.reset();

		let mut block = if key.len() > block_size {
			digest.write(key);
			let hashed = Zeroizing::new(digest.sum());
			digest.reset();
			hashed
		} else {
			Zeroizing::new(key.to_vec())
		};
		block.resize(block_size, 0);

		let inner_pad: Zeroizing<Vec<u8>> =
			Zeroizing::new(block.iter().map(|b| b ^ IPAD).collect());
		let outer_pad: Zeroizing<Vec<u8>> =
			Zeroizing::new(block.iter().map(|b| b ^ OPAD).collect());

		let mut outer = digest.box_clone();
		outer.write(&outer_pad);
		let mut inner = digest;
		inner.write(&inner_pad);

		Self {
			inner,
			outer,
			inner_pad,
		}
	}
}

impl StreamingDigest for Hmac {
	fn reset(&mut self) {
		self.inner.reset();
		self.inner.write(&self.inner_pad);
	}

	fn write(&mut self, data: &[u8]) {
		self.inner.write(data);
	}

	fn block_size(&self) -> usize {
		self.inner.block_size()
	}

	fn output_size(&self) -> usize {
		self.outer.output_size()
	}

	fn finalize(&self, prefix: &[u8]) -> Vec<u8> {
		let mut outer = self.outer.box_clone();
		outer.write(&self.inner.sum());
		outer.finalize(prefix)
	}

	fn box_clone(&self) -> Box<dyn StreamingDigest> {
		Box::new(self.clone())
	}
}
