// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: error.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Configuration errors raised while constructing digest engines.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestErrorKind {
	UnsupportedAlgorithm,
	UnknownSubType,
	InvalidKey,
	InvalidKeyLength,
	InvalidOutputSize,
}

#[derive(Debug, Clone)]
pub struct DigestError {
	kind: DigestErrorKind,
	message: Cow<'static, str>,
}

impl DigestError {
	pub fn new(
		kind: DigestErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn kind(&self) -> DigestErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for DigestError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for DigestError {}
