//! PRESENT, a lightweight substitution-permutation network: 64-bit blocks,
//! 31 rounds of key whitening, nibble-wise substitution, and a fixed bit
//! permutation, plus a final whitening step. Two key schedules are
//! supported, keyed on an 80-bit or a 128-bit secret.

mod tables;

use super::{bits::Bits, BlockCipher, BlockDecrypt, BlockEncrypt};
use crate::Key;
use tables::{SBOX, SBOX_INV};

const ROUNDS: usize = 31;

fn sbox_layer(state: u64, sbox: &[u8; 16]) -> u64 {
    let mut out = 0u64;
    for i in 0..16 {
        let shift = i * 4;
        let nibble = ((state >> shift) & 0xF) as usize;
        out |= (sbox[nibble] as u64) << shift;
    }
    out
}

/// Input bit `i` moves to output bit `p_layer(i)`.
fn p_layer(i: u32) -> u32 {
    if i == 63 {
        63
    } else {
        (16 * i) % 63
    }
}

/// `16 * 4 == 64 == 1 (mod 63)`, so multiplying by 4 undoes multiplying by
/// 16: this is `p_layer`'s exact inverse as a permutation of `0..64`.
fn p_layer_inv(i: u32) -> u32 {
    if i == 63 {
        63
    } else {
        (4 * i) % 63
    }
}

fn permute_bits(state: u64, f: impl Fn(u32) -> u32) -> u64 {
    let mut out = 0u64;
    for i in 0..64 {
        let bit = (state >> i) & 1;
        out |= bit << f(i);
    }
    out
}

fn rotate_left_reg(x: u128, width: u32, positions: u32) -> u128 {
    let mask = if width == 128 { u128::MAX } else { (1u128 << width) - 1 };
    let x = x & mask;
    let positions = positions % width;
    if positions == 0 {
        return x;
    }
    ((x << positions) | (x >> (width - positions))) & mask
}

fn key_schedule_80(key: [u8; 10]) -> [Bits; 32] {
    let mut reg: u128 = 0;
    for &b in &key {
        reg = (reg << 8) | b as u128;
    }
    let width = 80u32;
    let mut round_keys = [Bits::zero(64); 32];
    for i in 0..32 {
        let top64 = (reg >> (width - 64)) & ((1u128 << 64) - 1);
        round_keys[i] = Bits::new(top64 as u64, 64);
        if i < 31 {
            reg = rotate_left_reg(reg, width, 61);
            let top_nibble = ((reg >> (width - 4)) & 0xF) as usize;
            let substituted = SBOX[top_nibble] as u128;
            reg = (reg & !(0xFu128 << (width - 4))) | (substituted << (width - 4));
            let counter = (i + 1) as u128;
            reg ^= counter << 15;
        }
    }
    round_keys
}

fn key_schedule_128(key: [u8; 16]) -> [Bits; 32] {
    let mut reg: u128 = 0;
    for &b in &key {
        reg = (reg << 8) | b as u128;
    }
    let width = 128u32;
    let mut round_keys = [Bits::zero(64); 32];
    for i in 0..32 {
        let top64 = (reg >> (width - 64)) & ((1u128 << 64) - 1);
        round_keys[i] = Bits::new(top64 as u64, 64);
        if i < 31 {
            reg = rotate_left_reg(reg, width, 61);
            let n1 = ((reg >> (width - 4)) & 0xF) as usize;
            let n2 = ((reg >> (width - 8)) & 0xF) as usize;
            let s1 = SBOX[n1] as u128;
            let s2 = SBOX[n2] as u128;
            reg = (reg & !(0xFFu128 << (width - 8))) | (s1 << (width - 4)) | (s2 << (width - 8));
            let counter = (i + 1) as u128;
            reg ^= counter << 62;
        }
    }
    round_keys
}

fn run_encrypt(data: [u8; 8], round_keys: &[Bits; 32]) -> [u8; 8] {
    let mut state = Bits::from_bytes(&data).value();
    for round_key in round_keys.iter().take(ROUNDS) {
        state ^= round_key.value();
        state = sbox_layer(state, &SBOX);
        state = permute_bits(state, p_layer);
    }
    state ^= round_keys[ROUNDS].value();
    Bits::new(state, 64).to_bytes().try_into().expect("8 bytes")
}

fn run_decrypt(data: [u8; 8], round_keys: &[Bits; 32]) -> [u8; 8] {
    let mut state = Bits::from_bytes(&data).value();
    state ^= round_keys[ROUNDS].value();
    for round_key in round_keys[..ROUNDS].iter().rev() {
        state = permute_bits(state, p_layer_inv);
        state = sbox_layer(state, &SBOX_INV);
        state ^= round_key.value();
    }
    Bits::new(state, 64).to_bytes().try_into().expect("8 bytes")
}

/// PRESENT with an 80-bit key.
#[derive(Clone)]
pub struct Present80 {
    round_keys: [Bits; 32],
}

impl Present80 {
    pub fn new(key: Key<[u8; 10]>) -> Self {
        Self {
            round_keys: key_schedule_80(key.0),
        }
    }
}

impl BlockEncrypt for Present80 {
    type Block = [u8; 8];
    fn encrypt(&self, data: [u8; 8]) -> [u8; 8] {
        run_encrypt(data, &self.round_keys)
    }
}

impl BlockDecrypt for Present80 {
    type Block = [u8; 8];
    fn decrypt(&self, data: [u8; 8]) -> [u8; 8] {
        run_decrypt(data, &self.round_keys)
    }
}

impl BlockCipher for Present80 {
    type Block = [u8; 8];
    const BLOCK_SIZE: usize = 64;
    const KEY_SIZE: usize = 80;
}

/// PRESENT with a 128-bit key.
#[derive(Clone)]
pub struct Present128 {
    round_keys: [Bits; 32],
}

impl Present128 {
    pub fn new(key: Key<[u8; 16]>) -> Self {
        Self {
            round_keys: key_schedule_128(key.0),
        }
    }
}

impl BlockEncrypt for Present128 {
    type Block = [u8; 8];
    fn encrypt(&self, data: [u8; 8]) -> [u8; 8] {
        run_encrypt(data, &self.round_keys)
    }
}

impl BlockDecrypt for Present128 {
    type Block = [u8; 8];
    fn decrypt(&self, data: [u8; 8]) -> [u8; 8] {
        run_decrypt(data, &self.round_keys)
    }
}

impl BlockCipher for Present128 {
    type Block = [u8; 8];
    const BLOCK_SIZE: usize = 64;
    const KEY_SIZE: usize = 128;
}
