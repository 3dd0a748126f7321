// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: registry.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Closed registry mapping algorithm names and sub-types to engines.
//!
//! Parsing an [`Options`] record yields an [`Algorithm`] that carries
//! every parameter its engine needs; unknown names, unknown sub-types and
//! bad key material are reported here, before a single byte is hashed.

use super::crc16::{preset_by_name, Crc16, Crc16Preset};
use super::delegate::{
	self, crc_variant, Blake2Variant, Crc32, Crc32Variant, Crc64,
	Crc64Variant,
};
use super::error::{DigestError, DigestErrorKind};
use super::hmac::Hmac;
use super::keccak::{Domain, Keccak, SIZE_224, SIZE_256, SIZE_384, SIZE_512};
use super::kmac::{Kmac, KmacStrength};
use super::md2::Md2;
use super::options::Options;
use super::ripemd::{Ripemd128, Ripemd160, Ripemd256, Ripemd320};
use super::streaming::StreamingDigest;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, warn};
use zeroize::Zeroizing;

#[derive(
	Clone,
	Copy,
	Debug,
	PartialEq,
	Eq,
	Hash,
	Display,
	EnumIter,
	EnumString,
	IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum AlgorithmId {
	#[strum(serialize = "crc-16")]
	Crc16,
	#[strum(serialize = "crc-32")]
	Crc32,
	#[strum(serialize = "crc-64")]
	Crc64,
	#[strum(serialize = "md2")]
	Md2,
	#[strum(serialize = "md4")]
	Md4,
	#[strum(serialize = "md5")]
	Md5,
	#[strum(serialize = "sha1")]
	Sha1,
	#[strum(serialize = "sha2-256")]
	Sha2_256,
	#[strum(serialize = "sha2-256-224")]
	Sha2_256_224,
	#[strum(serialize = "sha2-512")]
	Sha2_512,
	#[strum(serialize = "sha2-512-224")]
	Sha2_512_224,
	#[strum(serialize = "sha2-512-256")]
	Sha2_512_256,
	#[strum(serialize = "sha2-512-384")]
	Sha2_512_384,
	#[strum(serialize = "sha3-224")]
	Sha3_224,
	#[strum(serialize = "sha3-256")]
	Sha3_256,
	#[strum(serialize = "sha3-384")]
	Sha3_384,
	#[strum(serialize = "sha3-512")]
	Sha3_512,
	#[strum(serialize = "keccak-224")]
	Keccak224,
	#[strum(serialize = "keccak-256")]
	Keccak256,
	#[strum(serialize = "keccak-384")]
	Keccak384,
	#[strum(serialize = "keccak-512")]
	Keccak512,
	#[strum(serialize = "shake-128")]
	Shake128,
	#[strum(serialize = "shake-256")]
	Shake256,
	#[strum(serialize = "cshake-128")]
	CShake128,
	#[strum(serialize = "cshake-256")]
	CShake256,
	#[strum(serialize = "kmac-128")]
	Kmac128,
	#[strum(serialize = "kmac-256")]
	Kmac256,
	#[strum(serialize = "ripemd-128")]
	Ripemd128,
	#[strum(serialize = "ripemd-160")]
	Ripemd160,
	#[strum(serialize = "ripemd-256")]
	Ripemd256,
	#[strum(serialize = "ripemd-320")]
	Ripemd320,
	#[strum(serialize = "blake2s-128")]
	Blake2s128,
	#[strum(serialize = "blake2s-256")]
	Blake2s256,
	#[strum(serialize = "blake2b-256")]
	Blake2b256,
	#[strum(serialize = "blake2b-384")]
	Blake2b384,
	#[strum(serialize = "blake2b-512")]
	Blake2b512,
}

#[derive(Clone, Copy, Debug)]
pub struct AlgorithmMetadata {
	pub identifier: &'static str,
	pub display_name: &'static str,
	pub legacy: bool,
}

impl AlgorithmMetadata {
	const fn legacy(
		identifier: &'static str,
		display_name: &'static str,
	) -> Self {
		Self {
			identifier,
			display_name,
			legacy: true,
		}
	}

	const fn current(
		identifier: &'static str,
		display_name: &'static str,
	) -> Self {
		Self {
			identifier,
			display_name,
			legacy: false,
		}
	}
}

impl AlgorithmId {
	pub fn identifier(self) -> &'static str {
		self.into()
	}

	pub fn metadata(self) -> AlgorithmMetadata {
		use AlgorithmMetadata as M;
		let id = self.identifier();
		match self {
			AlgorithmId::Crc16 => M::current(id, "CRC-16"),
			AlgorithmId::Crc32 => M::current(id, "CRC-32"),
			AlgorithmId::Crc64 => M::current(id, "CRC-64"),
			AlgorithmId::Md2 => M::legacy(id, "MD2"),
			AlgorithmId::Md4 => M::legacy(id, "MD4"),
			AlgorithmId::Md5 => M::legacy(id, "MD5"),
			AlgorithmId::Sha1 => M::legacy(id, "SHA-1"),
			AlgorithmId::Sha2_256 => M::current(id, "SHA-256"),
			AlgorithmId::Sha2_256_224 => M::current(id, "SHA-224"),
			AlgorithmId::Sha2_512 => M::current(id, "SHA-512"),
			AlgorithmId::Sha2_512_224 => M::current(id, "SHA-512/224"),
			AlgorithmId::Sha2_512_256 => M::current(id, "SHA-512/256"),
			AlgorithmId::Sha2_512_384 => M::current(id, "SHA-384"),
			AlgorithmId::Sha3_224 => M::current(id, "SHA3-224"),
			AlgorithmId::Sha3_256 => M::current(id, "SHA3-256"),
			AlgorithmId::Sha3_384 => M::current(id, "SHA3-384"),
			AlgorithmId::Sha3_512 => M::current(id, "SHA3-512"),
			AlgorithmId::Keccak224 => M::current(id, "Keccak-224"),
			AlgorithmId::Keccak256 => M::current(id, "Keccak-256"),
			AlgorithmId::Keccak384 => M::current(id, "Keccak-384"),
			AlgorithmId::Keccak512 => M::current(id, "Keccak-512"),
			AlgorithmId::Shake128 => M::current(id, "SHAKE128"),
			AlgorithmId::Shake256 => M::current(id, "SHAKE256"),
			AlgorithmId::CShake128 => M::current(id, "cSHAKE128"),
			AlgorithmId::CShake256 => M::current(id, "cSHAKE256"),
			AlgorithmId::Kmac128 => M::current(id, "KMAC128"),
			AlgorithmId::Kmac256 => M::current(id, "KMAC256"),
			AlgorithmId::Ripemd128 => M::current(id, "RIPEMD-128"),
			AlgorithmId::Ripemd160 => M::current(id, "RIPEMD-160"),
			AlgorithmId::Ripemd256 => M::current(id, "RIPEMD-256"),
			AlgorithmId::Ripemd320 => M::current(id, "RIPEMD-320"),
			AlgorithmId::Blake2s128 => M::current(id, "BLAKE2s-128"),
			AlgorithmId::Blake2s256 => M::current(id, "BLAKE2s-256"),
			AlgorithmId::Blake2b256 => M::current(id, "BLAKE2b-256"),
			AlgorithmId::Blake2b384 => M::current(id, "BLAKE2b-384"),
			AlgorithmId::Blake2b512 => M::current(id, "BLAKE2b-512"),
		}
	}

	pub fn display_name(self) -> &'static str {
		self.metadata().display_name
	}

	/// Collision-broken algorithms kept only for interoperability.
	pub fn is_legacy(self) -> bool {
		self.metadata().legacy
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sha2Variant {
	Sha224,
	Sha256,
	Sha384,
	Sha512,
	Sha512_224,
	Sha512_256,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecurityLevel {
	L128,
	L256,
}

impl SecurityLevel {
	pub fn default_output_size(self) -> usize {
		match self {
			SecurityLevel::L128 => SIZE_256,
			SecurityLevel::L256 => SIZE_512,
		}
	}
}

/// Digest widths of the fixed-output Keccak and SHA-3 functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum KeccakWidth {
	W224,
	W256,
	W384,
	W512,
}

impl KeccakWidth {
	pub fn output_size(self) -> usize {
		match self {
			KeccakWidth::W224 => SIZE_224,
			KeccakWidth::W256 => SIZE_256,
			KeccakWidth::W384 => SIZE_384,
			KeccakWidth::W512 => SIZE_512,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RipemdWidth {
	W128,
	W160,
	W256,
	W320,
}

/// A fully parameterised algorithm choice.
#[derive(Clone)]
pub enum Algorithm {
	Crc16(Crc16Preset),
	Crc32(Crc32Variant),
	Crc64(Crc64Variant),
	Md2,
	Md4,
	Md5,
	Sha1,
	Sha2(Sha2Variant),
	/// Fixed-output Keccak with the SHA-3 (`0x06`) suffix.
	Sha3(KeccakWidth),
	/// Pre-standard Keccak with the `0x01` suffix.
	Keccak(KeccakWidth),
	Shake {
		level: SecurityLevel,
		output_size: usize,
	},
	CShake {
		level: SecurityLevel,
		function_name: Vec<u8>,
		customization: Vec<u8>,
	},
	Kmac {
		strength: KmacStrength,
		key: Zeroizing<Vec<u8>>,
		customization: Vec<u8>,
		output_size: usize,
	},
	Ripemd(RipemdWidth),
	Blake2 {
		variant: Blake2Variant,
		key: Zeroizing<Vec<u8>>,
	},
}

impl Algorithm {
	/// Parses the algorithm name and sub-type of `options`. Sub-types are
	/// only meaningful for the CRC families and are ignored elsewhere.
	pub fn from_options(options: &Options) -> Result<Self, DigestError> {
		let name = options.algorithm();
		let id = AlgorithmId::from_str(name).map_err(|_| {
			DigestError::new(
				DigestErrorKind::UnsupportedAlgorithm,
				format!("unsupported algorithm `{}`", name),
			)
		})?;
		let sub_type = options.sub_type();
		let key = || Zeroizing::new(options.key().to_vec());

		Ok(match id {
			AlgorithmId::Crc16 => Algorithm::Crc16(preset_by_name(sub_type)?),
			AlgorithmId::Crc32 => {
				Algorithm::Crc32(crc_variant(id.identifier(), sub_type)?)
			}
			AlgorithmId::Crc64 => {
				Algorithm::Crc64(crc_variant(id.identifier(), sub_type)?)
			}
			AlgorithmId::Md2 => Algorithm::Md2,
			AlgorithmId::Md4 => Algorithm::Md4,
			AlgorithmId::Md5 => Algorithm::Md5,
			AlgorithmId::Sha1 => Algorithm::Sha1,
			AlgorithmId::Sha2_256 => Algorithm::Sha2(Sha2Variant::Sha256),
			AlgorithmId::Sha2_256_224 => Algorithm::Sha2(Sha2Variant::Sha224),
			AlgorithmId::Sha2_512 => Algorithm::Sha2(Sha2Variant::Sha512),
			AlgorithmId::Sha2_512_224 => {
				Algorithm::Sha2(Sha2Variant::Sha512_224)
			}
			AlgorithmId::Sha2_512_256 => {
				Algorithm::Sha2(Sha2Variant::Sha512_256)
			}
			AlgorithmId::Sha2_512_384 => Algorithm::Sha2(Sha2Variant::Sha384),
			AlgorithmId::Sha3_224 => Algorithm::Sha3(KeccakWidth::W224),
			AlgorithmId::Sha3_256 => Algorithm::Sha3(KeccakWidth::W256),
			AlgorithmId::Sha3_384 => Algorithm::Sha3(KeccakWidth::W384),
			AlgorithmId::Sha3_512 => Algorithm::Sha3(KeccakWidth::W512),
			AlgorithmId::Keccak224 => Algorithm::Keccak(KeccakWidth::W224),
			AlgorithmId::Keccak256 => Algorithm::Keccak(KeccakWidth::W256),
			AlgorithmId::Keccak384 => Algorithm::Keccak(KeccakWidth::W384),
			AlgorithmId::Keccak512 => Algorithm::Keccak(KeccakWidth::W512),
			AlgorithmId::Shake128 => Algorithm::Shake {
				level: SecurityLevel::L128,
				output_size: SecurityLevel::L128.default_output_size(),
			},
			AlgorithmId::Shake256 => Algorithm::Shake {
				level: SecurityLevel::L256,
				output_size: SecurityLevel::L256.default_output_size(),
			},
			AlgorithmId::CShake128 | AlgorithmId::CShake256 => {
				Algorithm::CShake {
					level: if id == AlgorithmId::CShake128 {
						SecurityLevel::L128
					} else {
						SecurityLevel::L256
					},
					function_name: options.function_name().to_vec(),
					customization: options.customization().to_vec(),
				}
			}
			AlgorithmId::Kmac128 => Algorithm::Kmac {
				strength: KmacStrength::Kmac128,
				key: key(),
				customization: options.customization().to_vec(),
				output_size: options.kmac128_size(),
			},
			AlgorithmId::Kmac256 => Algorithm::Kmac {
				strength: KmacStrength::Kmac256,
				key: key(),
				customization: options.customization().to_vec(),
				output_size: options.kmac256_size(),
			},
			AlgorithmId::Ripemd128 => Algorithm::Ripemd(RipemdWidth::W128),
			AlgorithmId::Ripemd160 => Algorithm::Ripemd(RipemdWidth::W160),
			AlgorithmId::Ripemd256 => Algorithm::Ripemd(RipemdWidth::W256),
			AlgorithmId::Ripemd320 => Algorithm::Ripemd(RipemdWidth::W320),
			AlgorithmId::Blake2s128 => Algorithm::Blake2 {
				variant: Blake2Variant::S128,
				key: key(),
			},
			AlgorithmId::Blake2s256 => Algorithm::Blake2 {
				variant: Blake2Variant::S256,
				key: key(),
			},
			AlgorithmId::Blake2b256 => Algorithm::Blake2 {
				variant: Blake2Variant::B256,
				key: key(),
			},
			AlgorithmId::Blake2b384 => Algorithm::Blake2 {
				variant: Blake2Variant::B384,
				key: key(),
			},
			AlgorithmId::Blake2b512 => Algorithm::Blake2 {
				variant: Blake2Variant::B512,
				key: key(),
			},
		})
	}

	pub fn id(&self) -> AlgorithmId {
		match self {
			Algorithm::Crc16(_) => AlgorithmId::Crc16,
			Algorithm::Crc32(_) => AlgorithmId::Crc32,
			Algorithm::Crc64(_) => AlgorithmId::Crc64,
			Algorithm::Md2 => AlgorithmId::Md2,
			Algorithm::Md4 => AlgorithmId::Md4,
			Algorithm::Md5 => AlgorithmId::Md5,
			Algorithm::Sha1 => AlgorithmId::Sha1,
			Algorithm::Sha2(variant) => match variant {
				Sha2Variant::Sha224 => AlgorithmId::Sha2_256_224,
				Sha2Variant::Sha256 => AlgorithmId::Sha2_256,
				Sha2Variant::Sha384 => AlgorithmId::Sha2_512_384,
				Sha2Variant::Sha512 => AlgorithmId::Sha2_512,
				Sha2Variant::Sha512_224 => AlgorithmId::Sha2_512_224,
				Sha2Variant::Sha512_256 => AlgorithmId::Sha2_512_256,
			},
			Algorithm::Sha3(width) => match width {
				KeccakWidth::W224 => AlgorithmId::Sha3_224,
				KeccakWidth::W256 => AlgorithmId::Sha3_256,
				KeccakWidth::W384 => AlgorithmId::Sha3_384,
				KeccakWidth::W512 => AlgorithmId::Sha3_512,
			},
			Algorithm::Keccak(width) => match width {
				KeccakWidth::W224 => AlgorithmId::Keccak224,
				KeccakWidth::W256 => AlgorithmId::Keccak256,
				KeccakWidth::W384 => AlgorithmId::Keccak384,
				KeccakWidth::W512 => AlgorithmId::Keccak512,
			},
			Algorithm::Shake { level, .. } => match level {
				SecurityLevel::L128 => AlgorithmId::Shake128,
				SecurityLevel::L256 => AlgorithmId::Shake256,
			},
			Algorithm::CShake { level, .. } => match level {
				SecurityLevel::L128 => AlgorithmId::CShake128,
				SecurityLevel::L256 => AlgorithmId::CShake256,
			},
			Algorithm::Kmac { strength, .. } => match strength {
				KmacStrength::Kmac128 => AlgorithmId::Kmac128,
				KmacStrength::Kmac256 => AlgorithmId::Kmac256,
			},
			Algorithm::Ripemd(width) => match width {
				RipemdWidth::W128 => AlgorithmId::Ripemd128,
				RipemdWidth::W160 => AlgorithmId::Ripemd160,
				RipemdWidth::W256 => AlgorithmId::Ripemd256,
				RipemdWidth::W320 => AlgorithmId::Ripemd320,
			},
			Algorithm::Blake2 { variant, .. } => match variant {
				Blake2Variant::S128 => AlgorithmId::Blake2s128,
				Blake2Variant::S256 => AlgorithmId::Blake2s256,
				Blake2Variant::B256 => AlgorithmId::Blake2b256,
				Blake2Variant::B384 => AlgorithmId::Blake2b384,
				Blake2Variant::B512 => AlgorithmId::Blake2b512,
			},
		}
	}

	/// Instantiates the engine. Key and output-size policies of the keyed
	/// constructions are enforced here.
	pub fn build(&self) -> Result<Box<dyn StreamingDigest>, DigestError> {
		let engine: Box<dyn StreamingDigest> = match self {
			Algorithm::Crc16(preset) => Box::new(Crc16::with_preset(*preset)),
			Algorithm::Crc32(variant) => Box::new(Crc32::new(*variant)),
			Algorithm::Crc64(variant) => Box::new(Crc64::new(*variant)),
			Algorithm::Md2 => Box::new(Md2::new()),
			Algorithm::Md4 => Box::new(delegate::Md4::new()),
			Algorithm::Md5 => Box::new(delegate::Md5::new()),
			Algorithm::Sha1 => Box::new(delegate::Sha1::new()),
			Algorithm::Sha2(variant) => match variant {
				Sha2Variant::Sha224 => Box::new(delegate::Sha224::new()),
				Sha2Variant::Sha256 => Box::new(delegate::Sha256::new()),
				Sha2Variant::Sha384 => Box::new(delegate::Sha384::new()),
				Sha2Variant::Sha512 => Box::new(delegate::Sha512::new()),
				Sha2Variant::Sha512_224 => Box::new(delegate::Sha512_224::new()),
				Sha2Variant::Sha512_256 => Box::new(delegate::Sha512_256::new()),
			},
			Algorithm::Sha3(width) => Box::new(Keccak::with_output_size(
				width.output_size(),
				Domain::Sha3,
			)?),
			Algorithm::Keccak(width) => Box::new(Keccak::with_output_size(
				width.output_size(),
				Domain::Keccak,
			)?),
			Algorithm::Shake { level, output_size } => match level {
				SecurityLevel::L128 => Box::new(Keccak::shake128(*output_size)?),
				SecurityLevel::L256 => Box::new(Keccak::shake256(*output_size)?),
			},
			Algorithm::CShake {
				level,
				function_name,
				customization,
			} => {
				let size = level.default_output_size();
				match level {
					SecurityLevel::L128 => Box::new(Keccak::cshake128(
						function_name,
						customization,
						size,
					)?),
					SecurityLevel::L256 => Box::new(Keccak::cshake256(
						function_name,
						customization,
						size,
					)?),
				}
			}
			Algorithm::Kmac {
				strength,
				key,
				customization,
				output_size,
			} => Box::new(Kmac::new(
				*strength,
				key,
				customization,
				*output_size,
			)?),
			Algorithm::Ripemd(width) => match width {
				RipemdWidth::W128 => Box::new(Ripemd128::new()),
				RipemdWidth::W160 => Box::new(Ripemd160::new()),
				RipemdWidth::W256 => Box::new(Ripemd256::new()),
				RipemdWidth::W320 => Box::new(Ripemd320::new()),
			},
			Algorithm::Blake2 { variant, key } => delegate::blake2(*variant, key)?,
		};
		Ok(engine)
	}
}

/// Builds the engine described by `options`.
pub fn from_options(
	options: &Options,
) -> Result<Box<dyn StreamingDigest>, DigestError> {
	let built = Algorithm::from_options(options).and_then(|algorithm| {
		let id = algorithm.id();
		if id.is_legacy() {
			warn!(
				algorithm = id.identifier(),
				"{} is collision-broken; use it for legacy interoperability only",
				id.display_name()
			);
		}
		debug!(
			algorithm = id.identifier(),
			sub_type = options.sub_type(),
			"constructing digest engine"
		);
		algorithm.build()
	});
	if let Err(err) = &built {
		debug!(
			algorithm = options.algorithm(),
			kind = ?err.kind(),
			"rejected digest configuration: {}",
			err
		);
	}
	built
}

/// Factory keyed by algorithm name, sub-type and key material.
pub fn create(
	name: &str,
	sub_type: &str,
	key: &[u8],
) -> Result<Box<dyn StreamingDigest>, DigestError> {
	from_options(&Options::new(name).with_sub_type(sub_type).with_key(key))
}

/// HMAC over the unkeyed engine named `name`.
pub fn create_hmac(
	name: &str,
	sub_type: &str,
	hmac_key: &[u8],
) -> Result<Box<dyn StreamingDigest>, DigestError> {
	hmac_from_options(&Options::new(name).with_sub_type(sub_type), hmac_key)
}

/// HMAC keyed with `hmac_key` over the engine described by `options`.
/// The engine keeps its own key material, so keyed engines (KMAC,
/// BLAKE2) can sit inside the HMAC as well.
pub fn hmac_from_options(
	options: &Options,
	hmac_key: &[u8],
) -> Result<Box<dyn StreamingDigest>, DigestError> {
	let digest = from_options(options)?;
	Ok(Box::new(Hmac::new(digest, hmac_key)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::IntoEnumIterator;

	#[test]
	fn every_identifier_round_trips() {
		for id in AlgorithmId::iter() {
			let parsed = AlgorithmId::from_str(id.identifier()).expect("parse");
			assert_eq!(parsed, id);
			assert_eq!(id.to_string(), id.identifier());
		}
	}

	#[test]
	fn names_are_case_insensitive() {
		assert_eq!(
			AlgorithmId::from_str("RIPEMD-160").expect("parse"),
			AlgorithmId::Ripemd160
		);
	}

	#[test]
	fn legacy_flags() {
		let legacy: Vec<_> =
			AlgorithmId::iter().filter(|id| id.is_legacy()).collect();
		assert_eq!(
			legacy,
			vec![
				AlgorithmId::Md2,
				AlgorithmId::Md4,
				AlgorithmId::Md5,
				AlgorithmId::Sha1
			]
		);
		assert_eq!(AlgorithmId::Sha2_512_256.display_name(), "SHA-512/256");
	}

	#[test]
	fn parsed_algorithm_reports_its_id() {
		for id in AlgorithmId::iter() {
			let options = Options::new(id.identifier());
			let algorithm = Algorithm::from_options(&options).expect("parse");
			assert_eq!(algorithm.id(), id);
		}
	}

	#[test]
	fn engines_report_expected_sizes() {
		let key = [7u8; 32];
		let cases = [
			("crc-16", 2),
			("crc-64", 8),
			("md2", 16),
			("sha2-512-224", 28),
			("sha3-384", 48),
			("shake-128", 32),
			("shake-256", 64),
			("cshake-256", 64),
			("kmac-128", 32),
			("ripemd-320", 40),
			("blake2b-384", 48),
		];
		for (name, size) in cases {
			let digest = create(name, "", &key).expect(name);
			assert_eq!(digest.output_size(), size, "{}", name);
		}
	}

	#[test]
	fn unknown_algorithm() {
		let err = create("sha4-256", "", &[]).err().expect("error");
		assert_eq!(err.kind(), DigestErrorKind::UnsupportedAlgorithm);
	}

	#[test]
	fn unknown_crc_sub_type() {
		for name in ["crc-16", "crc-32", "crc-64"] {
			let err = create(name, "bogus", &[]).err().expect("error");
			assert_eq!(err.kind(), DigestErrorKind::UnknownSubType, "{}", name);
		}
	}

	#[test]
	fn keyed_algorithms_validate_keys() {
		let err = create("kmac-256", "", &[1u8; 31]).err().expect("error");
		assert_eq!(err.kind(), DigestErrorKind::InvalidKeyLength);
		let err = create("blake2b-512", "", &[]).err().expect("error");
		assert_eq!(err.kind(), DigestErrorKind::InvalidKey);
		assert!(create("blake2s-256", "", &[]).is_ok());
	}

	#[test]
	fn kmac_size_comes_from_options() {
		let options = Options::new("kmac-256")
			.with_key([1u8; 32])
			.with_kmac256_size(20);
		assert_eq!(from_options(&options).expect("kmac").output_size(), 20);
		let err = from_options(&options.with_kmac256_size(4))
			.err()
			.expect("error");
		assert_eq!(err.kind(), DigestErrorKind::InvalidOutputSize);
	}

	#[test]
	fn sha3_and_keccak_widths_report_matching_ids() {
		for width in KeccakWidth::iter() {
			for algorithm in [Algorithm::Sha3(width), Algorithm::Keccak(width)] {
				let engine = algorithm.build().expect("build");
				assert_eq!(engine.output_size(), width.output_size());
				assert_eq!(
					algorithm.id(),
					Algorithm::from_options(&Options::new(
						algorithm.id().identifier()
					))
					.expect("parse")
					.id()
				);
			}
		}
		assert_eq!(Algorithm::Sha3(KeccakWidth::W384).id(), AlgorithmId::Sha3_384);
		assert_eq!(
			Algorithm::Keccak(KeccakWidth::W224).id(),
			AlgorithmId::Keccak224
		);
	}

	#[test]
	fn hmac_over_keyed_engines() {
		let options = Options::new("blake2b-256")
			.with_key(b"46cf18a9b447991b450cad3facf5937e");
		let mut mac = hmac_from_options(&options, b"outer key").expect("hmac");
		mac.write(b"Compliance message");
		assert_eq!(
			hex::encode(mac.sum()),
			"2d63add747232d5370c12abc7d4d5202f57cda0b50b513b1ac8ff0d87ee3505d"
		);
		assert_eq!(mac.block_size(), 128);

		let options = Options::new("blake2s-128")
			.with_key(b"46cf18a9b447991b450cad3facf5937e");
		let mut mac = hmac_from_options(&options, b"outer key").expect("hmac");
		mac.write(b"Compliance message");
		assert_eq!(
			hex::encode(mac.sum()),
			"7b5f8ea9e14ba8e77cbf281914a75468"
		);

		let err = create_hmac("blake2s-128", "", b"outer key")
			.err()
			.expect("error");
		assert_eq!(err.kind(), DigestErrorKind::InvalidKey);
	}

	#[test]
	fn hmac_factory() {
		let mut mac = create_hmac("md5", "", &[0x0b; 16]).expect("hmac");
		mac.write(b"Hi There");
		assert_eq!(
			hex::encode(mac.sum()),
			"9294727a3638bb1c13f48ef8158bfc9d"
		);
	}
}
