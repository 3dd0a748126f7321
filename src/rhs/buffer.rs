// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: buffer.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Fixed-capacity pending-bytes buffer shared by the block engines.

/// Holds the tail of the input that does not yet fill a block.
///
/// `N` is the capacity; the effective block length is passed to
/// [`BlockBuffer::feed`] so that sponges with a runtime rate can share
/// the same storage type.
#[derive(Clone)]
pub(crate) struct BlockBuffer<const N: usize> {
	data: [u8; N],
	len: usize,
}

impl<const N: usize> BlockBuffer<N> {
	pub(crate) const fn new() -> Self {
		Self {
			data: [0u8; N],
			len: 0,
		}
	}

	pub(crate) fn clear(&mut self) {
		self.data = [0u8; N];
		self.len = 0;
	}

	pub(crate) fn len(&self) -> usize {
		self.len
	}

	pub(crate) fn pending(&self) -> &[u8] {
		&self.data[..self.len]
	}

	/// Appends `input`, handing every completed `block_len` chunk to
	/// `compress`. On return fewer than `block_len` bytes are pending.
	pub(crate) fn feed(
		&mut self,
		mut input: &[u8],
		block_len: usize,
		mut compress: impl FnMut(&[u8]),
	) {
		assert!(
			block_len > 0 && block_len <= N,
			"block length {} exceeds buffer capacity {}",
			block_len,
			N
		);

		if self.len > 0 {
			let take = (block_len - self.len).min(input.len());
			self.data[self.len..self.len + take]
				.copy_from_slice(&input[..take]);
			self.len += take;
			input = &input[take..];
			if self.len < block_len {
				return;
			}
			compress(&self.data[..block_len]);
			self.len = 0;
		}

		let mut blocks = input.chunks_exact(block_len);
		for block in &mut blocks {
			compress(block);
		}
		let rest = blocks.remainder();
		self.data[..rest.len()].copy_from_slice(rest);
		self.len = rest.len();
	}
}

#[cfg(test)]
mod tests {
	use super::BlockBuffer;

	fn collect(
		buffer: &mut BlockBuffer<8>,
		input: &[u8],
		block_len: usize,
	) -> Vec<Vec<u8>> {
		let mut blocks = Vec::new();
		buffer.feed(input, block_len, |b| blocks.push(b.to_vec()));
		blocks
	}

	#[test]
	fn keeps_partial_block_pending() {
		let mut buffer = BlockBuffer::<8>::new();
		assert!(collect(&mut buffer, b"abc", 4).is_empty());
		assert_eq!(buffer.pending(), b"abc");
		let blocks = collect(&mut buffer, b"defghij", 4);
		assert_eq!(blocks, vec![b"abcd".to_vec(), b"efgh".to_vec()]);
		assert_eq!(buffer.pending(), b"ij");
	}

	#[test]
	fn exact_multiple_leaves_nothing_pending() {
		let mut buffer = BlockBuffer::<8>::new();
		let blocks = collect(&mut buffer, &[7u8; 16], 8);
		assert_eq!(blocks.len(), 2);
		assert_eq!(buffer.len(), 0);
	}

	#[test]
	fn empty_input_is_a_no_op() {
		let mut buffer = BlockBuffer::<8>::new();
		collect(&mut buffer, b"xy", 8);
		assert!(collect(&mut buffer, b"", 8).is_empty());
		assert_eq!(buffer.pending(), b"xy");
	}
}
