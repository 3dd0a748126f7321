// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// Module: keccak (sponge construction over Keccak-f[1600])
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Keccak sponge with multi-rate padding and a domain-separation byte,
//! covering legacy Keccak, SHA-3, SHAKE and cSHAKE.

pub mod encoding;
mod permutation;

use self::encoding::{bytepad, encode_string};
use self::permutation::{keccak_f1600, LANES};
use super::buffer::BlockBuffer;
use super::error::{DigestError, DigestErrorKind};
use super::streaming::StreamingDigest;
use std::sync::Arc;

pub const SIZE_224: usize = 28;
pub const SIZE_256: usize = 32;
pub const SIZE_384: usize = 48;
pub const SIZE_512: usize = 64;

/// Rate of SHAKE128 / cSHAKE128 / KMAC128 in bytes.
pub const RATE_128: usize = 168;
/// Rate of SHAKE256 / cSHAKE256 / KMAC256 in bytes.
pub const RATE_256: usize = 136;

pub const MIN_CSHAKE_OUTPUT: usize = 8;

const STATE_BYTES: usize = LANES * 8;

/// Suffix byte placed right after the message before the final `0x80`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Domain {
	Keccak = 0x01,
	Sha3 = 0x06,
	Shake = 0x1f,
	CShake = 0x04,
}

#[derive(Clone)]
pub struct Keccak {
	state: [u64; LANES],
	rate: usize,
	output_size: usize,
	domain: Domain,
	buffer: BlockBuffer<STATE_BYTES>,
	// cSHAKE name/customization block, absorbed again on every reset
	preamble: Option<Arc<[u8]>>,
}

impl Keccak {
	/// Generic sponge. `rate` must be a positive multiple of eight below
	/// the 200-byte state size; `output_size` must be non-zero.
	pub fn new(
		rate: usize,
		output_size: usize,
		domain: Domain,
	) -> Result<Self, DigestError> {
		if rate == 0 || rate >= STATE_BYTES || rate % 8 != 0 {
			return Err(DigestError::new(
				DigestErrorKind::InvalidOutputSize,
				format!("invalid keccak rate: {} bytes", rate),
			));
		}
		if output_size == 0 {
			return Err(DigestError::new(
				DigestErrorKind::InvalidOutputSize,
				"keccak output size must not be zero",
			));
		}
		Ok(Self::from_parts(rate, output_size, domain))
	}

	/// Fixed-output sponge whose capacity is twice `output_size`.
	pub fn with_output_size(
		output_size: usize,
		domain: Domain,
	) -> Result<Self, DigestError> {
		if output_size == 0 || output_size >= STATE_BYTES / 2 {
			return Err(DigestError::new(
				DigestErrorKind::InvalidOutputSize,
				format!(
					"invalid keccak output size: {} bytes",
					output_size
				),
			));
		}
		Self::new(STATE_BYTES - 2 * output_size, output_size, domain)
	}

	const fn from_parts(
		rate: usize,
		output_size: usize,
		domain: Domain,
	) -> Self {
		Self {
			state: [0u64; LANES],
			rate,
			output_size,
			domain,
			buffer: BlockBuffer::new(),
			preamble: None,
		}
	}

	const fn fixed(output_size: usize, domain: Domain) -> Self {
		Self::from_parts(STATE_BYTES - 2 * output_size, output_size, domain)
	}

	pub const fn keccak224() -> Self {
		Self::fixed(SIZE_224, Domain::Keccak)
	}

	pub const fn keccak256() -> Self {
		Self::fixed(SIZE_256, Domain::Keccak)
	}

	pub const fn keccak384() -> Self {
		Self::fixed(SIZE_384, Domain::Keccak)
	}

	pub const fn keccak512() -> Self {
		Self::fixed(SIZE_512, Domain::Keccak)
	}

	pub const fn sha3_224() -> Self {
		Self::fixed(SIZE_224, Domain::Sha3)
	}

	pub const fn sha3_256() -> Self {
		Self::fixed(SIZE_256, Domain::Sha3)
	}

	pub const fn sha3_384() -> Self {
		Self::fixed(SIZE_384, Domain::Sha3)
	}

	pub const fn sha3_512() -> Self {
		Self::fixed(SIZE_512, Domain::Sha3)
	}

	pub fn shake128(output_size: usize) -> Result<Self, DigestError> {
		Self::new(RATE_128, output_size, Domain::Shake)
	}

	pub fn shake256(output_size: usize) -> Result<Self, DigestError> {
		Self::new(RATE_256, output_size, Domain::Shake)
	}

	pub fn cshake128(
		function_name: &[u8],
		customization: &[u8],
		output_size: usize,
	) -> Result<Self, DigestError> {
		Self::cshake(RATE_128, function_name, customization, output_size)
	}

	pub fn cshake256(
		function_name: &[u8],
		customization: &[u8],
		output_size: usize,
	) -> Result<Self, DigestError> {
		Self::cshake(RATE_256, function_name, customization, output_size)
	}

	fn cshake(
		rate: usize,
		function_name: &[u8],
		customization: &[u8],
		output_size: usize,
	) -> Result<Self, DigestError> {
		if output_size < MIN_CSHAKE_OUTPUT {
			return Err(DigestError::new(
				DigestErrorKind::InvalidOutputSize,
				format!(
					"cshake output size is less than {} bytes",
					MIN_CSHAKE_OUTPUT
				),
			));
		}
		// with neither string set cSHAKE is plain SHAKE
		if function_name.is_empty() && customization.is_empty() {
			return Self::new(rate, output_size, Domain::Shake);
		}
		let mut encoded = encode_string(function_name);
		encoded.extend_from_slice(&encode_string(customization));
		let mut sponge = Self::new(rate, output_size, Domain::CShake)?;
		sponge.preamble = Some(bytepad(&encoded, rate).into());
		sponge.reset();
		Ok(sponge)
	}

	pub fn rate(&self) -> usize {
		self.rate
	}

	pub fn domain(&self) -> Domain {
		self.domain
	}

	/// Pads a copy of the sponge and squeezes `len` bytes out of it.
	pub fn squeeze(&self, len: usize) -> Vec<u8> {
		let mut out = Vec::with_capacity(len);
		let mut sponge = self.clone();
		sponge.pad();
		sponge.squeeze_into(&mut out, len);
		out
	}

	fn pad(&mut self) {
		let rate = self.rate;
		let pending = self.buffer.len();
		assert!(
			pending < rate,
			"keccak buffer holds a full block at finalization"
		);
		let mut block = [0u8; STATE_BYTES];
		block[..pending].copy_from_slice(self.buffer.pending());
		block[pending] = self.domain as u8;
		block[rate - 1] |= 0x80;
		absorb(&mut self.state, &block[..rate]);
		self.buffer.clear();
	}

	fn squeeze_into(&mut self, out: &mut Vec<u8>, len: usize) {
		let mut remaining = len;
		let mut bytes = [0u8; STATE_BYTES];
		loop {
			for (chunk, lane) in
				bytes.chunks_exact_mut(8).zip(self.state.iter())
			{
				chunk.copy_from_slice(&lane.to_le_bytes());
			}
			let take = remaining.min(self.rate);
			out.extend_from_slice(&bytes[..take]);
			remaining -= take;
			if remaining == 0 {
				break;
			}
			keccak_f1600(&mut self.state);
		}
	}
}

/// XORs one rate-sized block into the lanes and permutes.
fn absorb(state: &mut [u64; LANES], block: &[u8]) {
	for (lane, chunk) in state.iter_mut().zip(block.chunks_exact(8)) {
		let mut word = [0u8; 8];
		word.copy_from_slice(chunk);
		*lane ^= u64::from_le_bytes(word);
	}
	keccak_f1600(state);
}

impl StreamingDigest for Keccak {
	fn reset(&mut self) {
		self.state = [0u64; LANES];
		self.buffer.clear();
		if let Some(preamble) = self.preamble.clone() {
			self.write(&preamble);
		}
	}

	fn write(&mut self, data: &[u8]) {
		let rate = self.rate;
		let state = &mut self.state;
		self.buffer.feed(data, rate, |block| absorb(state, block));
	}

	fn block_size(&self) -> usize {
		self.rate
	}

	fn output_size(&self) -> usize {
		self.output_size
	}

	fn finalize(&self, prefix: &[u8]) -> Vec<u8> {
		let mut out = Vec::with_capacity(prefix.len() + self.output_size);
		out.extend_from_slice(prefix);
		let mut sponge = self.clone();
		sponge.pad();
		sponge.squeeze_into(&mut out, self.output_size);
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

	const ALNUM: &[u8] =
		b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

	fn digest(mut sponge: Keccak, data: &[u8]) -> Vec<u8> {
		sponge.write(data);
		sponge.sum()
	}

	#[test]
	fn sha3_256_empty() {
		assert_eq!(
			digest(Keccak::sha3_256(), b""),
			hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
		);
	}

	#[test]
	fn sha3_256_alphanumeric() {
		assert_eq!(
			digest(Keccak::sha3_256(), ALNUM),
			hex!("43722f9b1954d61ff7e937458f12d61a7eb4eabd8b744b6a7ea2983612711084")
		);
	}

	#[test]
	fn sha3_224_abc() {
		assert_eq!(
			digest(Keccak::sha3_224(), b"abc"),
			hex!("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf")
		);
	}

	#[test]
	fn sha3_512_multi_block() {
		assert_eq!(
			digest(Keccak::sha3_512(), &[b'a'; 200]),
			hex!("eae6c85c6904f11075de9f9d5e1064371d000510fa3d2d79d40cf9be34892fb01859d0a0234e138bcb0ad5c84f6c0dca226a414b0c9a2897cb695f5185fe36ec")
		);
	}

	#[test]
	fn legacy_keccak_224_and_384() {
		assert_eq!(
			digest(Keccak::keccak224(), ALNUM),
			hex!("1975ce9fa3191efcd0cc85cb553d7f28a8632ef955383e48c9d4d0fd")
		);
		assert_eq!(
			digest(Keccak::keccak384(), ALNUM),
			hex!("cd576e7288361c9d8749e2d9abc506b8be45cd83f3abf6e0fb79b597b7aaf28b35bf8c366fe1906f3732ebf628b60e60")
		);
	}

	#[test]
	fn shake128_extends_past_one_block() {
		let shake = Keccak::shake128(64).expect("shake128");
		assert_eq!(
			shake.sum(),
			hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef263cb1eea988004b93103cfb0aeefd2a686e01fa4a58e8a3639ca8a1e3f9ae57e2")
		);
		let long = digest(Keccak::shake256(200).expect("shake256"), b"abc");
		assert_eq!(long.len(), 200);
		assert_eq!(
			&long[184..],
			&hex!("e6f3b5d710ed3b677513771af6bfe119")
		);
	}

	#[test]
	fn cshake_vectors() {
		let cshake = Keccak::cshake128(b"", b"Email Signature", 32)
			.expect("cshake128");
		assert_eq!(
			digest(cshake, &[0, 1, 2, 3]),
			hex!("c1c36925b6409a04f1b504fcbca9d82b4017277cb5ed2b2065fc1d3814d5aaf5")
		);
		let cshake = Keccak::cshake256(b"", b"Email Signature", 64)
			.expect("cshake256");
		assert_eq!(
			digest(cshake, &[0, 1, 2, 3]),
			hex!("d008828e2b80ac9d2218ffee1d070c48b8e4c87bff32c9699d5b6896eee0edd164020e2be0560858d9c00c037e34a96937c561a74c412bb4c746469527281c8c")
		);
	}

	#[test]
	fn cshake_without_strings_is_shake() {
		let cshake = Keccak::cshake128(b"", b"", 32).expect("cshake128");
		let shake = Keccak::shake128(32).expect("shake128");
		assert_eq!(digest(cshake, ALNUM), digest(shake, ALNUM));
	}

	#[test]
	fn cshake_rejects_short_output() {
		let err = Keccak::cshake256(b"N", b"S", 7).err().expect("error");
		assert_eq!(err.kind(), DigestErrorKind::InvalidOutputSize);
	}

	#[test]
	fn cshake_reset_reabsorbs_preamble() {
		let mut cshake = Keccak::cshake128(b"", b"Email Signature", 32)
			.expect("cshake128");
		cshake.write(b"discarded");
		cshake.reset();
		assert_eq!(
			digest(cshake, &[0, 1, 2, 3]),
			hex!("c1c36925b6409a04f1b504fcbca9d82b4017277cb5ed2b2065fc1d3814d5aaf5")
		);
	}

	#[test]
	fn rejects_invalid_geometry() {
		assert!(Keccak::new(0, 32, Domain::Sha3).is_err());
		assert!(Keccak::new(137, 32, Domain::Sha3).is_err());
		assert!(Keccak::new(200, 32, Domain::Sha3).is_err());
		assert!(Keccak::shake128(0).is_err());
		assert!(Keccak::with_output_size(100, Domain::Sha3).is_err());
	}

	#[test]
	fn oversized_output_is_rejected_without_overflow() {
		for size in [STATE_BYTES / 2, usize::MAX / 2 + 1, usize::MAX] {
			let err = Keccak::with_output_size(size, Domain::Sha3)
				.err()
				.expect("error");
			assert_eq!(err.kind(), DigestErrorKind::InvalidOutputSize);
		}
		assert!(Keccak::with_output_size(96, Domain::Keccak).is_ok());
	}

	#[test]
	fn with_output_size_matches_named_constructor() {
		let sponge = Keccak::with_output_size(SIZE_256, Domain::Sha3)
			.expect("geometry");
		assert_eq!(sponge.block_size(), 136);
		assert_eq!(digest(sponge, ALNUM), digest(Keccak::sha3_256(), ALNUM));
	}

	#[test]
	fn squeeze_reads_arbitrary_lengths() {
		let mut shake = Keccak::shake128(32).expect("shake128");
		shake.write(ALNUM);
		let long = shake.squeeze(500);
		assert_eq!(&long[..32], shake.sum().as_slice());
	}
}
