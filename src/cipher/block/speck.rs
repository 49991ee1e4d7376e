//! SPECK-128/256: a 128-bit ARX block cipher keyed on a 256-bit secret.
//! Each round is an add-rotate-xor mix of the block's two 64-bit words;
//! the key schedule runs the same round function over the key words to
//! grow a sequence of round keys.

use super::{BlockCipher, BlockDecrypt, BlockEncrypt};
use crate::Key;

const ALPHA: u32 = 8;
const BETA: u32 = 3;
const ROUNDS: usize = 34;
/// Number of 64-bit words in the 256-bit key.
const KEY_WORDS: usize = 4;

fn round(x: u64, y: u64, k: u64) -> (u64, u64) {
    let x = x.rotate_right(ALPHA).wrapping_add(y) ^ k;
    let y = y.rotate_left(BETA) ^ x;
    (x, y)
}

fn inv_round(x: u64, y: u64, k: u64) -> (u64, u64) {
    let y = (y ^ x).rotate_right(BETA);
    let x = (x ^ k).wrapping_sub(y).rotate_left(ALPHA);
    (x, y)
}

fn words_from_key(key: &[u8; 32]) -> [u64; KEY_WORDS] {
    let mut words = [0u64; KEY_WORDS];
    for (i, chunk) in key.chunks_exact(8).enumerate() {
        words[i] = u64::from_be_bytes(chunk.try_into().expect("8-byte chunk"));
    }
    words
}

fn key_schedule(key: [u8; 32]) -> [u64; ROUNDS] {
    let words = words_from_key(&key);
    let mut k = vec![words[0]];
    let mut l = vec![words[1], words[2], words[3]];
    for i in 0..ROUNDS - 1 {
        let new_l = k[i].wrapping_add(l[i].rotate_right(ALPHA)) ^ i as u64;
        let new_k = k[i].rotate_left(BETA) ^ new_l;
        l.push(new_l);
        k.push(new_k);
    }
    k.try_into().expect("exactly ROUNDS round keys")
}

fn block_to_words(data: [u8; 16]) -> (u64, u64) {
    let x = u64::from_be_bytes(data[0..8].try_into().expect("8 bytes"));
    let y = u64::from_be_bytes(data[8..16].try_into().expect("8 bytes"));
    (x, y)
}

fn words_to_block(x: u64, y: u64) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[0..8].copy_from_slice(&x.to_be_bytes());
    out[8..16].copy_from_slice(&y.to_be_bytes());
    out
}

/// SPECK with a 128-bit block and a 256-bit key. Only one size combination
/// is supported, so the type carries no size parameters.
#[derive(Clone)]
pub struct Speck128_256 {
    round_keys: [u64; ROUNDS],
}

impl Speck128_256 {
    pub fn new(key: Key<[u8; 32]>) -> Self {
        Self {
            round_keys: key_schedule(key.0),
        }
    }
}

impl BlockEncrypt for Speck128_256 {
    type Block = [u8; 16];

    fn encrypt(&self, data: [u8; 16]) -> [u8; 16] {
        let (mut x, mut y) = block_to_words(data);
        for &k in &self.round_keys {
            (x, y) = round(x, y, k);
        }
        words_to_block(x, y)
    }
}

impl BlockDecrypt for Speck128_256 {
    type Block = [u8; 16];

    fn decrypt(&self, data: [u8; 16]) -> [u8; 16] {
        let (mut x, mut y) = block_to_words(data);
        for &k in self.round_keys.iter().rev() {
            (x, y) = inv_round(x, y, k);
        }
        words_to_block(x, y)
    }
}

impl BlockCipher for Speck128_256 {
    type Block = [u8; 16];
    const BLOCK_SIZE: usize = 128;
    const KEY_SIZE: usize = 256;
}
