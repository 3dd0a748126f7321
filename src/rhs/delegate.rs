// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: delegate.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Adapters that put RustCrypto digests, keyed BLAKE2 and the `crc`
//! crate's CRC-32 / CRC-64 behind [`StreamingDigest`].

use super::error::{DigestError, DigestErrorKind};
use super::streaming::StreamingDigest;
use blake2::{Blake2bMac, Blake2s256, Blake2sMac};
use crc::{
	Algorithm, Crc, CRC_32_ISCSI, CRC_32_ISO_HDLC, CRC_64_GO_ISO,
	CRC_64_XZ,
};
use digest::consts::{U16, U32, U48, U64};
use digest::core_api::BlockSizeUser;
use digest::{Digest, KeyInit, Mac, OutputSizeUser};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

pub type Md4 = Delegated<md4::Md4>;
pub type Md5 = Delegated<md5::Md5>;
pub type Sha1 = Delegated<sha1::Sha1>;
pub type Sha224 = Delegated<sha2::Sha224>;
pub type Sha256 = Delegated<sha2::Sha256>;
pub type Sha384 = Delegated<sha2::Sha384>;
pub type Sha512 = Delegated<sha2::Sha512>;
pub type Sha512_224 = Delegated<sha2::Sha512_224>;
pub type Sha512_256 = Delegated<sha2::Sha512_256>;

/// Unkeyed RustCrypto hash.
#[derive(Clone)]
pub struct Delegated<D> {
	inner: D,
}

impl<D> Delegated<D>
where
	D: Digest + BlockSizeUser + Clone + Send + 'static,
{
	pub fn new() -> Self {
		Self { inner: D::new() }
	}
}

impl<D> Default for Delegated<D>
where
	D: Digest + BlockSizeUser + Clone + Send + 'static,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<D> StreamingDigest for Delegated<D>
where
	D: Digest + BlockSizeUser + Clone + Send + 'static,
{
	fn reset(&mut self) {
		self.inner = D::new();
	}

	fn write(&mut self, data: &[u8]) {
		Digest::update(&mut self.inner, data);
	}

	fn block_size(&self) -> usize {
		<D as BlockSizeUser>::block_size()
	}

	fn output_size(&self) -> usize {
		<D as Digest>::output_size()
	}

	fn finalize(&self, prefix: &[u8]) -> Vec<u8> {
		let mut out = prefix.to_vec();
		out.extend_from_slice(&self.inner.clone().finalize());
		out
	}

	fn box_clone(&self) -> Box<dyn StreamingDigest> {
		Box::new(self.clone())
	}
}

/// Keyed MAC from the RustCrypto stack. A freshly keyed copy is kept so
/// that `reset` never needs the raw key again.
#[derive(Clone)]
pub struct Keyed<M> {
	mac: M,
	pristine: M,
	block_size: usize,
}

impl<M> Keyed<M>
where
	M: Mac + KeyInit + Clone + Send + 'static,
{
	pub fn new(key: &[u8], block_size: usize) -> Result<Self, DigestError> {
		let mac = <M as KeyInit>::new_from_slice(key).map_err(|_| {
			DigestError::new(
				DigestErrorKind::InvalidKeyLength,
				format!("unsupported key length: {} bytes", key.len()),
			)
		})?;
		Ok(Self {
			pristine: mac.clone(),
			mac,
			block_size,
		})
	}
}

impl<M> StreamingDigest for Keyed<M>
where
	M: Mac + KeyInit + Clone + Send + 'static,
{
	fn reset(&mut self) {
		self.mac = self.pristine.clone();
	}

	fn write(&mut self, data: &[u8]) {
		Mac::update(&mut self.mac, data);
	}

	fn block_size(&self) -> usize {
		self.block_size
	}

	fn output_size(&self) -> usize {
		<M as OutputSizeUser>::output_size()
	}

	fn finalize(&self, prefix: &[u8]) -> Vec<u8> {
		let mut out = prefix.to_vec();
		out.extend_from_slice(&self.mac.clone().finalize().into_bytes());
		out
	}

	fn box_clone(&self) -> Box<dyn StreamingDigest> {
		Box::new(self.clone())
	}
}

const BLAKE2S_BLOCK: usize = 64;
const BLAKE2B_BLOCK: usize = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blake2Variant {
	S128,
	S256,
	B256,
	B384,
	B512,
}

impl Blake2Variant {
	pub fn label(self) -> &'static str {
		match self {
			Blake2Variant::S128 => "blake2s-128",
			Blake2Variant::S256 => "blake2s-256",
			Blake2Variant::B256 => "blake2b-256",
			Blake2Variant::B384 => "blake2b-384",
			Blake2Variant::B512 => "blake2b-512",
		}
	}

	pub fn output_size(self) -> usize {
		match self {
			Blake2Variant::S128 => 16,
			Blake2Variant::S256 | Blake2Variant::B256 => 32,
			Blake2Variant::B384 => 48,
			Blake2Variant::B512 => 64,
		}
	}

	/// Longest accepted key; bounded by the digest size of the family
	/// member rather than by the BLAKE2 parameter block.
	pub fn max_key_len(self) -> usize {
		match self {
			Blake2Variant::S128 | Blake2Variant::S256 => 32,
			other => other.output_size(),
		}
	}

	/// Only BLAKE2s-256 has an unkeyed form.
	pub fn requires_key(self) -> bool {
		self != Blake2Variant::S256
	}
}

pub fn blake2(
	variant: Blake2Variant,
	key: &[u8],
) -> Result<Box<dyn StreamingDigest>, DigestError> {
	if variant.requires_key() && key.is_empty() {
		return Err(DigestError::new(
			DigestErrorKind::InvalidKey,
			format!("{} key is empty", variant.label()),
		));
	}
	if key.len() > variant.max_key_len() {
		return Err(DigestError::new(
			DigestErrorKind::InvalidKeyLength,
			format!(
				"{} key is greater than {} bytes",
				variant.label(),
				variant.max_key_len()
			),
		));
	}

	let engine: Box<dyn StreamingDigest> = match variant {
		Blake2Variant::S128 => {
			Box::new(Keyed::<Blake2sMac<U16>>::new(key, BLAKE2S_BLOCK)?)
		}
		Blake2Variant::S256 if key.is_empty() => {
			Box::new(Delegated::<Blake2s256>::new())
		}
		Blake2Variant::S256 => {
			Box::new(Keyed::<Blake2sMac<U32>>::new(key, BLAKE2S_BLOCK)?)
		}
		Blake2Variant::B256 => {
			Box::new(Keyed::<Blake2bMac<U32>>::new(key, BLAKE2B_BLOCK)?)
		}
		Blake2Variant::B384 => {
			Box::new(Keyed::<Blake2bMac<U48>>::new(key, BLAKE2B_BLOCK)?)
		}
		Blake2Variant::B512 => {
			Box::new(Keyed::<Blake2bMac<U64>>::new(key, BLAKE2B_BLOCK)?)
		}
	};
	Ok(engine)
}

/// Reflected Koopman polynomial with the IEEE framing.
const CRC_32_KOOPMAN: Algorithm<u32> = Algorithm {
	width: 32,
	poly: 0x741b8cd7,
	init: 0xffffffff,
	refin: true,
	refout: true,
	xorout: 0xffffffff,
	check: 0x2d3dd0ae,
	residue: 0x0843323b,
};

static CRC32_IEEE: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);
static CRC32_CASTAGNOLI: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);
static CRC32_KOOPMAN: Crc<u32> = Crc::<u32>::new(&CRC_32_KOOPMAN);
static CRC64_ISO: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);
static CRC64_ECMA: Crc<u64> = Crc::<u64>::new(&CRC_64_XZ);

#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Crc32Variant {
	#[default]
	Ieee,
	Castagnoli,
	Koopman,
}

impl Crc32Variant {
	fn crc(self) -> &'static Crc<u32> {
		match self {
			Crc32Variant::Ieee => &CRC32_IEEE,
			Crc32Variant::Castagnoli => &CRC32_CASTAGNOLI,
			Crc32Variant::Koopman => &CRC32_KOOPMAN,
		}
	}
}

#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Crc64Variant {
	#[default]
	Iso,
	Ecma,
}

impl Crc64Variant {
	fn crc(self) -> &'static Crc<u64> {
		match self {
			Crc64Variant::Iso => &CRC64_ISO,
			Crc64Variant::Ecma => &CRC64_ECMA,
		}
	}
}

/// Resolves a CRC sub-type; the empty name selects the default variant.
pub fn crc_variant<V>(algorithm: &str, name: &str) -> Result<V, DigestError>
where
	V: FromStr + Default,
{
	if name.is_empty() {
		return Ok(V::default());
	}
	V::from_str(name).map_err(|_| {
		DigestError::new(
			DigestErrorKind::UnknownSubType,
			format!("unknown sub type for {}: {}", algorithm, name),
		)
	})
}

#[derive(Clone)]
pub struct Crc32 {
	variant: Crc32Variant,
	digest: crc::Digest<'static, u32>,
}

impl Crc32 {
	pub fn new(variant: Crc32Variant) -> Self {
		Self {
			variant,
			digest: variant.crc().digest(),
		}
	}

	pub fn from_name(name: &str) -> Result<Self, DigestError> {
		crc_variant("crc-32", name).map(Self::new)
	}

	pub fn variant(&self) -> Crc32Variant {
		self.variant
	}
}

impl StreamingDigest for Crc32 {
	fn reset(&mut self) {
		self.digest = self.variant.crc().digest();
	}

	fn write(&mut self, data: &[u8]) {
		self.digest.update(data);
	}

	fn block_size(&self) -> usize {
		1
	}

	fn output_size(&self) -> usize {
		4
	}

	fn finalize(&self, prefix: &[u8]) -> Vec<u8> {
		let mut out = prefix.to_vec();
		out.extend_from_slice(&self.digest.clone().finalize().to_be_bytes());
		out
	}

	fn box_clone(&self) -> Box<dyn StreamingDigest> {
		Box::new(self.clone())
	}
}

#[derive(Clone)]
pub struct Crc64 {
	variant: Crc64Variant,
	digest: crc::Digest<'static, u64>,
}

impl Crc64 {
	pub fn new(variant: Crc64Variant) -> Self {
		Self {
			variant,
			digest: variant.crc().digest(),
		}
	}

	pub fn from_name(name: &str) -> Result<Self, DigestError> {
		crc_variant("crc-64", name).map(Self::new)
	}

	pub fn variant(&self) -> Crc64Variant {
		self.variant
	}
}

impl StreamingDigest for Crc64 {
	fn reset(&mut self) {
		self.digest = self.variant.crc().digest();
	}

	fn write(&mut self, data: &[u8]) {
		self.digest.update(data);
	}

	fn block_size(&self) -> usize {
		1
	}

	fn output_size(&self) -> usize {
		8
	}

	fn finalize(&self, prefix: &[u8]) -> Vec<u8> {
		let mut out = prefix.to_vec();
		out.extend_from_slice(&self.digest.clone().finalize().to_be_bytes());
		out
	}

	fn box_clone(&self) -> Box<dyn StreamingDigest> {
		Box::new(self.clone())
	}
}
