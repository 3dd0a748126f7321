// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: options.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Construction record handed to the registry.

use super::kmac::{SIZE_128, SIZE_256};
use std::fmt;
use zeroize::Zeroizing;

#[derive(Clone)]
pub struct Options {
	algorithm: String,
	sub_type: String,
	key: Zeroizing<Vec<u8>>,
	function_name: Vec<u8>,
	customization: Vec<u8>,
	kmac128_size: usize,
	kmac256_size: usize,
}

impl Options {
	/// Options for `algorithm` with an empty key, empty cSHAKE strings and
	/// the default KMAC tag lengths.
	pub fn new(algorithm: impl Into<String>) -> Self {
		Self {
			algorithm: algorithm.into(),
			sub_type: String::new(),
			key: Zeroizing::new(Vec::new()),
			function_name: Vec::new(),
			customization: Vec::new(),
			kmac128_size: SIZE_128,
			kmac256_size: SIZE_256,
		}
	}

	pub fn with_key(mut self, key: impl AsRef<[u8]>) -> Self {
		self.key = Zeroizing::new(key.as_ref().to_vec());
		self
	}

	pub fn with_function_name(mut self, name: impl AsRef<[u8]>) -> Self {
		self.function_name = name.as_ref().to_vec();
		self
	}

	pub fn with_customization(mut self, customization: impl AsRef<[u8]>) -> Self {
		self.customization = customization.as_ref().to_vec();
		self
	}

	pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
		self.sub_type = sub_type.into();
		self
	}

	pub fn with_kmac128_size(mut self, size: usize) -> Self {
		self.kmac128_size = size;
		self
	}

	pub fn with_kmac256_size(mut self, size: usize) -> Self {
		self.kmac256_size = size;
		self
	}

	pub fn algorithm(&self) -> &str {
		&self.algorithm
	}

	pub fn sub_type(&self) -> &str {
		&self.sub_type
	}

	pub fn key(&self) -> &[u8] {
		&self.key
	}

	pub fn function_name(&self) -> &[u8] {
		&self.function_name
	}

	pub fn customization(&self) -> &[u8] {
		&self.customization
	}

	pub fn kmac128_size(&self) -> usize {
		self.kmac128_size
	}

	pub fn kmac256_size(&self) -> usize {
		self.kmac256_size
	}
}

// key material stays out of logs
impl fmt::Debug for Options {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Options")
			.field("algorithm", &self.algorithm)
			.field("sub_type", &self.sub_type)
			.field("key_len", &self.key.len())
			.field("function_name", &String::from_utf8_lossy(&self.function_name))
			.field("customization", &String::from_utf8_lossy(&self.customization))
			.field("kmac128_size", &self.kmac128_size)
			.field("kmac256_size", &self.kmac256_size)
			.finish()
	}
}
