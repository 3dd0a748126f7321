// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: lib.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Incremental digest engines implemented from first principles
//! (CRC-16, MD2, Keccak/SHA-3/SHAKE/cSHAKE, KMAC, RIPEMD) behind one
//! streaming contract, plus a registry that also exposes well-known
//! RustCrypto engines through the same contract.

pub mod rhs {
	pub(crate) mod buffer;
	pub mod crc16;
	pub mod delegate;
	pub mod error;
	pub mod hmac;
	pub mod keccak;
	pub mod kmac;
	pub mod md2;
	pub mod options;
	pub mod registry;
	pub mod ripemd;
	pub mod streaming;
}

pub use rhs::error::{DigestError, DigestErrorKind};
pub use rhs::options::Options;
pub use rhs::registry::{
	create, create_hmac, from_options, hmac_from_options, Algorithm, AlgorithmId,
};
pub use rhs::streaming::{to_hex, HexCase, StreamingDigest};
