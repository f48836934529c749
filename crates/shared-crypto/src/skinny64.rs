//! # Skinny-64-192 Block Cipher
//!
//! Lightweight tweakable block cipher with a 64-bit block and a 192-bit
//! tweakey (TK1 ‖ TK2 ‖ TK3), 40 rounds. Used to encrypt the 8-byte EBID
//! plaintext under the per-epoch server key.
//!
//! ## State Layout
//!
//! The 64-bit block is a 4x4 matrix of 4-bit cells filled row by row, the
//! most significant nibble of the first byte being cell 0.
//!
//! ```text
//! round r:  SubCells → AddConstants → AddRoundTweakey → ShiftRows → MixColumns
//! ```
//!
//! Reference: Beierle et al., "The SKINNY Family of Block Ciphers", CRYPTO 2016.

use crate::CryptoError;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Key (tweakey) size in bytes.
pub const KEY_SIZE: usize = 24;

/// Number of rounds for the 64-bit block, 192-bit tweakey variant.
const ROUNDS: usize = 40;

type Cells = [u8; 16];

const SBOX: [u8; 16] = [
    0xc, 0x6, 0x9, 0x0, 0x1, 0xa, 0x2, 0xb, 0x3, 0x8, 0x5, 0xd, 0x4, 0xe, 0x7, 0xf,
];

const SBOX_INV: [u8; 16] = [
    0x3, 0x4, 0x6, 0x8, 0xc, 0xa, 0x1, 0xe, 0x9, 0x2, 0x5, 0x7, 0x0, 0xb, 0xd, 0xf,
];

/// Cell permutation applied to every tweakey array between rounds.
const TWEAKEY_PERMUTATION: [usize; 16] = [9, 15, 8, 13, 10, 14, 12, 11, 0, 1, 2, 3, 4, 5, 6, 7];

/// Row i rotated right by i cells.
const SHIFT_ROWS: [usize; 16] = [0, 1, 2, 3, 7, 4, 5, 6, 10, 11, 8, 9, 13, 14, 15, 12];

const ROUND_CONSTANTS: [u8; ROUNDS] = round_constants();

/// 6-bit affine LFSR, one output per round.
const fn round_constants() -> [u8; ROUNDS] {
    let mut out = [0u8; ROUNDS];
    let mut rc: u8 = 0;
    let mut i = 0;
    while i < ROUNDS {
        rc = ((rc << 1) & 0x3f) | (((rc >> 5) ^ (rc >> 4) ^ 1) & 1);
        out[i] = rc;
        i += 1;
    }
    out
}

fn lfsr_tk2(x: u8) -> u8 {
    ((x << 1) & 0xf) | (((x >> 3) ^ (x >> 2)) & 1)
}

fn lfsr_tk3(x: u8) -> u8 {
    (x >> 1) | (((x ^ (x >> 3)) & 1) << 3)
}

fn to_cells(bytes: &[u8]) -> Cells {
    let mut cells = [0u8; 16];
    for (i, byte) in bytes.iter().take(BLOCK_SIZE).enumerate() {
        cells[2 * i] = byte >> 4;
        cells[2 * i + 1] = byte & 0x0f;
    }
    cells
}

fn from_cells(cells: &Cells) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (cells[2 * i] << 4) | cells[2 * i + 1];
    }
    out
}

/// Skinny-64-192 with a pre-expanded key schedule.
///
/// Only the first two rows of the tweakey state touch the cipher state, so
/// each round key is 8 cells.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Skinny64 {
    round_keys: [[u8; 8]; ROUNDS],
}

impl Skinny64 {
    /// Expand a 24-byte key.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeyLength` unless `key` is exactly 24 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: key.len(),
            });
        }

        let mut tk = [
            to_cells(&key[0..8]),
            to_cells(&key[8..16]),
            to_cells(&key[16..24]),
        ];
        let mut round_keys = [[0u8; 8]; ROUNDS];

        for round_key in round_keys.iter_mut() {
            for (i, cell) in round_key.iter_mut().enumerate() {
                *cell = tk[0][i] ^ tk[1][i] ^ tk[2][i];
            }
            for array in tk.iter_mut() {
                let previous = *array;
                for (i, cell) in array.iter_mut().enumerate() {
                    *cell = previous[TWEAKEY_PERMUTATION[i]];
                }
            }
            for i in 0..8 {
                tk[1][i] = lfsr_tk2(tk[1][i]);
                tk[2][i] = lfsr_tk3(tk[2][i]);
            }
        }

        tk.zeroize();
        Ok(Self { round_keys })
    }

    /// Encrypt one 8-byte block.
    pub fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut s = to_cells(block);

        for (round, round_key) in self.round_keys.iter().enumerate() {
            for cell in s.iter_mut() {
                *cell = SBOX[*cell as usize];
            }

            let rc = ROUND_CONSTANTS[round];
            s[0] ^= rc & 0x0f;
            s[4] ^= (rc >> 4) & 0x03;
            s[8] ^= 0x02;

            for (cell, key) in s.iter_mut().zip(round_key.iter()) {
                *cell ^= key;
            }

            let shifted = s;
            for (i, cell) in s.iter_mut().enumerate() {
                *cell = shifted[SHIFT_ROWS[i]];
            }

            for col in 0..4 {
                let (a, b, c, d) = (s[col], s[4 + col], s[8 + col], s[12 + col]);
                s[col] = a ^ c ^ d;
                s[4 + col] = a;
                s[8 + col] = b ^ c;
                s[12 + col] = a ^ c;
            }
        }

        from_cells(&s)
    }

    /// Decrypt one 8-byte block.
    pub fn decrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut s = to_cells(block);

        for (round, round_key) in self.round_keys.iter().enumerate().rev() {
            for col in 0..4 {
                let (a, b, c, d) = (s[col], s[4 + col], s[8 + col], s[12 + col]);
                let row2 = b ^ d;
                s[col] = b;
                s[4 + col] = c ^ row2;
                s[8 + col] = row2;
                s[12 + col] = a ^ d;
            }

            let shifted = s;
            for (i, cell) in shifted.iter().enumerate() {
                s[SHIFT_ROWS[i]] = *cell;
            }

            for (cell, key) in s.iter_mut().zip(round_key.iter()) {
                *cell ^= key;
            }

            let rc = ROUND_CONSTANTS[round];
            s[0] ^= rc & 0x0f;
            s[4] ^= (rc >> 4) & 0x03;
            s[8] ^= 0x02;

            for cell in s.iter_mut() {
                *cell = SBOX_INV[*cell as usize];
            }
        }

        from_cells(&s)
    }
}

impl std::fmt::Debug for Skinny64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Skinny64([REDACTED])")
    }
}
