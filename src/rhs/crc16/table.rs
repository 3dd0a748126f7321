// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: table.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Lookup tables for the CRC-16 engine.

use super::preset::{Crc16Params, Crc16Preset};
use std::sync::{Arc, OnceLock};
use strum::IntoEnumIterator;

/// 256-entry lookup table derived from a parameter set. Immutable once
/// built; engines share it through an `Arc`.
#[derive(Debug, PartialEq, Eq)]
pub struct Crc16Table {
	params: Crc16Params,
	data: [u16; 256],
}

impl Crc16Table {
	pub const fn new(params: Crc16Params) -> Self {
		let mut data = [0u16; 256];
		let mut n = 0;
		while n < 256 {
			let mut crc = (n as u16) << 8;
			let mut i = 0;
			while i < 8 {
				crc = if crc & 0x8000 != 0 {
					(crc << 1) ^ params.poly
				} else {
					crc << 1
				};
				i += 1;
			}
			data[n] = crc;
			n += 1;
		}
		Self { params, data }
	}

	/// Shared table for a named preset, built on first use.
	pub fn preset(preset: Crc16Preset) -> Arc<Self> {
		static TABLES: OnceLock<Vec<Arc<Crc16Table>>> = OnceLock::new();
		let tables = TABLES.get_or_init(|| {
			Crc16Preset::iter()
				.map(|p| Arc::new(Crc16Table::new(p.params())))
				.collect()
		});
		Arc::clone(&tables[preset as usize])
	}

	pub fn params(&self) -> &Crc16Params {
		&self.params
	}

	pub(crate) fn entry(&self, index: u8) -> u16 {
		self.data[index as usize]
	}
}
