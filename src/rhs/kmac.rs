// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: kmac.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! KMAC (NIST SP 800-185) for the 128- and 256-bit security levels,
//! built on this crate's cSHAKE sponge.

use super::error::{DigestError, DigestErrorKind};
use super::keccak::encoding::{bytepad, encode_string, right_encode};
use super::keccak::{Keccak, RATE_128, RATE_256};
use super::streaming::StreamingDigest;
use zeroize::Zeroizing;

const FUNCTION_NAME: &[u8] = b"KMAC";

/// Default tag length of KMAC128 in bytes.
pub const SIZE_128: usize = 32;
/// Default tag length of KMAC256 in bytes.
pub const SIZE_256: usize = 64;

pub const MIN_KEY_128: usize = 16;
pub const MIN_KEY_256: usize = 32;
pub const MIN_OUTPUT_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KmacStrength {
	Kmac128,
	Kmac256,
}

impl KmacStrength {
	fn rate(self) -> usize {
		match self {
			KmacStrength::Kmac128 => RATE_128,
			KmacStrength::Kmac256 => RATE_256,
		}
	}

	fn min_key_len(self) -> usize {
		match self {
			KmacStrength::Kmac128 => MIN_KEY_128,
			KmacStrength::Kmac256 => MIN_KEY_256,
		}
	}

	fn label(self) -> &'static str {
		match self {
			KmacStrength::Kmac128 => "kmac-128",
			KmacStrength::Kmac256 => "kmac-256",
		}
	}

	pub fn default_output_size(self) -> usize {
		match self {
			KmacStrength::Kmac128 => SIZE_128,
			KmacStrength::Kmac256 => SIZE_256,
		}
	}
}

#[derive(Clone)]
pub struct Kmac {
	sponge: Keccak,
	output_size: usize,
	// bytepad(encode_string(key), rate), replayed on reset
	key_block: Zeroizing<Vec<u8>>,
}

impl Kmac {
	pub fn kmac128(
		key: &[u8],
		customization: &[u8],
		output_size: usize,
	) -> Result<Self, DigestError> {
		Self::new(KmacStrength::Kmac128, key, customization, output_size)
	}

	pub fn kmac256(
		key: &[u8],
		customization: &[u8],
		output_size: usize,
	) -> Result<Self, DigestError> {
		Self::new(KmacStrength::Kmac256, key, customization, output_size)
	}

	pub fn new(
		strength: KmacStrength,
		key: &[u8],
		customization: &[u8],
		output_size: usize,
	) -> Result<Self, DigestError> {
		if key.len() < strength.min_key_len() {
			return Err(DigestError::new(
				DigestErrorKind::InvalidKeyLength,
				format!(
					"{} key is less than {} bytes",
					strength.label(),
					strength.min_key_len()
				),
			));
		}
		if output_size < MIN_OUTPUT_SIZE {
			return Err(DigestError::new(
				DigestErrorKind::InvalidOutputSize,
				format!(
					"kmac size is less than {} bytes",
					MIN_OUTPUT_SIZE
				),
			));
		}

		let rate = strength.rate();
		let sponge = match strength {
			KmacStrength::Kmac128 => {
				Keccak::cshake128(FUNCTION_NAME, customization, output_size)
			}
			KmacStrength::Kmac256 => {
				Keccak::cshake256(FUNCTION_NAME, customization, output_size)
			}
		}?;
		let key_block =
			Zeroizing::new(bytepad(&Zeroizing::new(encode_string(key)), rate));

		let mut kmac = Self {
			sponge,
			output_size,
			key_block,
		};
		kmac.prime();
		Ok(kmac)
	}

	fn prime(&mut self) {
		self.sponge.write(&self.key_block);
	}
}

impl StreamingDigest for Kmac {
	fn reset(&mut self) {
		self.sponge.reset();
		self.prime();
	}

	fn write(&mut self, data: &[u8]) {
		self.sponge.write(data);
	}

	fn block_size(&self) -> usize {
		self.sponge.block_size()
	}

	fn output_size(&self) -> usize {
		self.output_size
	}

	fn finalize(&self, prefix: &[u8]) -> Vec<u8> {
		let mut sponge = self.sponge.clone();
		sponge.write(&right_encode((self.output_size as u64) * 8));
		sponge.finalize(prefix)
	}

	fn box_clone(&self) -> Box<dyn StreamingDigest> {
		Box::new(self.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	const APP: &[u8] = b"My Tagged Application";

	fn sample_key() -> Vec<u8> {
		(0x40u8..0x60).collect()
	}

	fn tag(mut kmac: Kmac, data: &[u8]) -> Vec<u8> {
		kmac.write(data);
		kmac.sum()
	}

	#[test]
	fn kmac128_sample_one() {
		let kmac = Kmac::kmac128(&sample_key(), b"", 32).expect("kmac");
		assert_eq!(
			tag(kmac, &[0, 1, 2, 3]),
			hex!("e5780b0d3ea6f7d3a429c5706aa43a00fadbd7d49628839e3187243f456ee14e")
		);
	}

	#[test]
	fn kmac128_sample_two() {
		let kmac = Kmac::kmac128(&sample_key(), APP, 32).expect("kmac");
		assert_eq!(
			tag(kmac, &[0, 1, 2, 3]),
			hex!("3b1fba963cd8b0b59e8c1a6d71888b7143651af8ba0a7070c0979e2811324aa5")
		);
	}

	#[test]
	fn kmac128_sample_three() {
		let data: Vec<u8> = (0u8..200).collect();
		let kmac = Kmac::kmac128(&sample_key(), APP, 32).expect("kmac");
		assert_eq!(
			tag(kmac, &data),
			hex!("1f5b4e6cca02209e0dcb5ca635b89a15e271ecc760071dfd805faa38f9729230")
		);
	}

	#[test]
	fn kmac256_samples() {
		let kmac = Kmac::kmac256(&sample_key(), APP, 64).expect("kmac");
		assert_eq!(
			tag(kmac, &[0, 1, 2, 3]),
			hex!("20c570c31346f703c9ac36c61c03cb64c3970d0cfc787e9b79599d273a68d2f7f69d4cc3de9d104a351689f27cf6f5951f0103f33f4f24871024d9c27773a8dd")
		);
		let data: Vec<u8> = (0u8..200).collect();
		let kmac = Kmac::kmac256(&sample_key(), b"", 64).expect("kmac");
		assert_eq!(
			tag(kmac, &data),
			hex!("75358cf39e41494e949707927cee0af20a3ff553904c86b08f21cc414bcfd691589d27cf5e15369cbbff8b9a4c2eb17800855d0235ff635da82533ec6b759b69")
		);
	}

	#[test]
	fn rejects_short_keys() {
		let err = Kmac::kmac128(&[0u8; 15], b"", 32).err().expect("error");
		assert_eq!(err.kind(), DigestErrorKind::InvalidKeyLength);
		assert!(Kmac::kmac128(&[0u8; 16], b"", 32).is_ok());

		let err = Kmac::kmac256(&[0u8; 31], b"", 64).err().expect("error");
		assert_eq!(err.kind(), DigestErrorKind::InvalidKeyLength);
		assert!(Kmac::kmac256(&[0u8; 32], b"", 64).is_ok());
	}

	#[test]
	fn rejects_short_output() {
		let err = Kmac::kmac128(&[0u8; 16], b"", 7).err().expect("error");
		assert_eq!(err.kind(), DigestErrorKind::InvalidOutputSize);
		assert!(Kmac::kmac128(&[0u8; 16], b"", 8).is_ok());
	}

	#[test]
	fn reset_reprimes_the_key() {
		let mut kmac = Kmac::kmac128(&sample_key(), APP, 32).expect("kmac");
		kmac.write(b"first message");
		kmac.reset();
		assert_eq!(
			tag(kmac, &[0, 1, 2, 3]),
			hex!("3b1fba963cd8b0b59e8c1a6d71888b7143651af8ba0a7070c0979e2811324aa5")
		);
	}

	#[test]
	fn output_length_is_bound_into_the_tag() {
		let short = Kmac::kmac128(&sample_key(), b"", 16).expect("kmac");
		let long = Kmac::kmac128(&sample_key(), b"", 32).expect("kmac");
		let short = tag(short, b"msg");
		let long = tag(long, b"msg");
		assert_eq!(short.len(), 16);
		assert_ne!(short.as_slice(), &long[..16]);
	}
}
