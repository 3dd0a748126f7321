// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rusthashed
// File: permutation.rs
// Author: rusthashed maintainers
// Copyright (c) 2025 rusthashed maintainers

//! Keccak-f[1600].

pub(crate) const LANES: usize = 25;
const ROUNDS: usize = 24;

const ROUND_CONSTANTS: [u64; ROUNDS] = [
	0x0000_0000_0000_0001,
	0x0000_0000_0000_8082,
	0x8000_0000_0000_808a,
	0x8000_0000_8000_8000,
	0x0000_0000_0000_808b,
	0x0000_0000_8000_0001,
	0x8000_0000_8000_8081,
	0x8000_0000_0000_8009,
	0x0000_0000_0000_008a,
	0x0000_0000_0000_0088,
	0x0000_0000_8000_8009,
	0x0000_0000_8000_000a,
	0x0000_0000_8000_808b,
	0x8000_0000_0000_008b,
	0x8000_0000_0000_8089,
	0x8000_0000_0000_8003,
	0x8000_0000_0000_8002,
	0x8000_0000_0000_0080,
	0x0000_0000_0000_800a,
	0x8000_0000_8000_000a,
	0x8000_0000_8000_8081,
	0x8000_0000_0000_8080,
	0x0000_0000_8000_0001,
	0x8000_0000_8000_8008,
];

// rho offsets, listed in the order pi visits the lanes starting at lane 1
const RHO: [u32; 24] = [
	1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62,
	18, 39, 61, 20, 44,
];

const PI: [usize; 24] = [
	10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20,
	14, 22, 9, 6, 1,
];

pub(crate) fn keccak_f1600(state: &mut [u64; LANES]) {
	for rc in ROUND_CONSTANTS {
		// theta
		let mut columns = [0u64; 5];
		for (x, column) in columns.iter_mut().enumerate() {
			*column = state[x]
				^ state[x + 5] ^ state[x + 10]
				^ state[x + 15] ^ state[x + 20];
		}
		for x in 0..5 {
			let d = columns[(x + 4) % 5] ^ columns[(x + 1) % 5].rotate_left(1);
			for y in (0..LANES).step_by(5) {
				state[y + x] ^= d;
			}
		}

		// rho and pi
		let mut carried = state[1];
		for (&lane, &offset) in PI.iter().zip(RHO.iter()) {
			let next = state[lane];
			state[lane] = carried.rotate_left(offset);
			carried = next;
		}

		// chi
		for y in (0..LANES).step_by(5) {
			let row = [
				state[y],
				state[y + 1],
				state[y + 2],
				state[y + 3],
				state[y + 4],
			];
			for x in 0..5 {
				state[y + x] =
					row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
			}
		}

		// iota
		state[0] ^= rc;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_state_first_lane() {
		// first two lanes of Keccak-f[1600] applied to the all-zero state
		let mut state = [0u64; LANES];
		keccak_f1600(&mut state);
		assert_eq!(state[0], 0xF1258F7940E1DDE7);
		assert_eq!(state[1], 0x84D5CCF933C0478A);
	}
}
