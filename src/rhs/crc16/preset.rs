// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: preset.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Named CRC-16 parameter sets with their published check values.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Parameters of a CRC-16 variant. `check` is the checksum of the
/// ASCII string `"123456789"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crc16Params {
	pub poly: u16,
	pub init: u16,
	pub refin: bool,
	pub refout: bool,
	pub xorout: u16,
	pub check: u16,
}

impl Crc16Params {
	const fn new(
		poly: u16,
		init: u16,
		reflect: bool,
		xorout: u16,
		check: u16,
	) -> Self {
		Self {
			poly,
			init,
			refin: reflect,
			refout: reflect,
			xorout,
			check,
		}
	}
}

#[derive(
	Clone,
	Copy,
	Debug,
	Default,
	PartialEq,
	Eq,
	Hash,
	Display,
	EnumCount,
	EnumIter,
	EnumString,
	IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Crc16Preset {
	#[default]
	#[strum(serialize = "arc")]
	Arc,
	#[strum(serialize = "aug-ccitt")]
	AugCcitt,
	#[strum(serialize = "bypass")]
	Buypass,
	#[strum(serialize = "ccitt_false")]
	CcittFalse,
	#[strum(serialize = "cdma2000")]
	Cdma2000,
	#[strum(serialize = "dds-110")]
	Dds110,
	#[strum(serialize = "dect-r")]
	DectR,
	#[strum(serialize = "dect-x")]
	DectX,
	#[strum(serialize = "dnp")]
	Dnp,
	#[strum(serialize = "en-13757")]
	En13757,
	#[strum(serialize = "genibus")]
	Genibus,
	#[strum(serialize = "maxim")]
	Maxim,
	#[strum(serialize = "mcrf4xx")]
	Mcrf4xx,
	#[strum(serialize = "riello")]
	Riello,
	#[strum(serialize = "t10-dif")]
	T10Dif,
	#[strum(serialize = "teledisk")]
	Teledisk,
	#[strum(serialize = "tms37157")]
	Tms37157,
	#[strum(serialize = "usb")]
	Usb,
	#[strum(serialize = "crc-a")]
	CrcA,
	#[strum(serialize = "kermit")]
	Kermit,
	#[strum(serialize = "modbus")]
	Modbus,
	#[strum(serialize = "x-25")]
	X25,
	#[strum(serialize = "xmodem")]
	Xmodem,
}

impl Crc16Preset {
	pub const fn params(self) -> Crc16Params {
		use Crc16Preset as p;
		match self {
			p::Arc => Crc16Params::new(0x8005, 0x0000, true, 0x0000, 0xBB3D),
			p::AugCcitt => Crc16Params::new(0x1021, 0x1D0F, false, 0x0000, 0xE5CC),
			p::Buypass => Crc16Params::new(0x8005, 0x0000, false, 0x0000, 0xFEE8),
			p::CcittFalse => Crc16Params::new(0x1021, 0xFFFF, false, 0x0000, 0x29B1),
			p::Cdma2000 => Crc16Params::new(0xC867, 0xFFFF, false, 0x0000, 0x4C06),
			p::Dds110 => Crc16Params::new(0x8005, 0x800D, false, 0x0000, 0x9ECF),
			p::DectR => Crc16Params::new(0x0589, 0x0000, false, 0x0001, 0x007E),
			p::DectX => Crc16Params::new(0x0589, 0x0000, false, 0x0000, 0x007F),
			p::Dnp => Crc16Params::new(0x3D65, 0x0000, true, 0xFFFF, 0xEA82),
			p::En13757 => Crc16Params::new(0x3D65, 0x0000, false, 0xFFFF, 0xC2B7),
			p::Genibus => Crc16Params::new(0x1021, 0xFFFF, false, 0xFFFF, 0xD64E),
			p::Maxim => Crc16Params::new(0x8005, 0x0000, true, 0xFFFF, 0x44C2),
			p::Mcrf4xx => Crc16Params::new(0x1021, 0xFFFF, true, 0x0000, 0x6F91),
			p::Riello => Crc16Params::new(0x1021, 0xB2AA, true, 0x0000, 0x63D0),
			p::T10Dif => Crc16Params::new(0x8BB7, 0x0000, false, 0x0000, 0xD0DB),
			p::Teledisk => Crc16Params::new(0xA097, 0x0000, false, 0x0000, 0x0FB3),
			p::Tms37157 => Crc16Params::new(0x1021, 0x89EC, true, 0x0000, 0x26B1),
			p::Usb => Crc16Params::new(0x8005, 0xFFFF, true, 0xFFFF, 0xB4C8),
			p::CrcA => Crc16Params::new(0x1021, 0xC6C6, true, 0x0000, 0xBF05),
			p::Kermit => Crc16Params::new(0x1021, 0x0000, true, 0x0000, 0x2189),
			p::Modbus => Crc16Params::new(0x8005, 0xFFFF, true, 0x0000, 0x4B37),
			p::X25 => Crc16Params::new(0x1021, 0xFFFF, true, 0xFFFF, 0x906E),
			p::Xmodem => Crc16Params::new(0x1021, 0x0000, false, 0x0000, 0x31C3),
		}
	}

	pub fn identifier(self) -> &'static str {
		self.into()
	}
}
