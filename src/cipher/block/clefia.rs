//! CLEFIA, a 128-bit generalized-Feistel-network (GFN) block cipher with
//! 128-, 192-, and 256-bit key variants. Data is processed through a
//! 4-branch GFN (`GFN4`); the key schedule folds the master key through an
//! 8-branch GFN (`GFN8`) to produce an intermediate key, then derives
//! whitening and round keys from the master key and that intermediate key
//! with a doubling round-constant generator.
//!
//! See [`tables`] for an important caveat: `S0` and the `CON` round
//! constants below are not CLEFIA's official values (`S1` is).

mod tables;

use super::{BlockCipher, BlockDecrypt, BlockEncrypt};
use crate::Key;
use tables::{gf_mul, s0, s1, M0, M1};

fn matrix_mix(bytes: [u8; 4], m: &[[u8; 4]; 4]) -> [u8; 4] {
    let mut out = [0u8; 4];
    for (i, row) in m.iter().enumerate() {
        out[i] = row.iter().zip(bytes).fold(0u8, |acc, (&coeff, b)| acc ^ gf_mul(coeff, b));
    }
    out
}

fn f0(rk: u32, x: u32) -> u32 {
    let t = (x ^ rk).to_be_bytes();
    let s0 = s0();
    let s1 = s1();
    let subst = [s0[t[0] as usize], s1[t[1] as usize], s0[t[2] as usize], s1[t[3] as usize]];
    u32::from_be_bytes(matrix_mix(subst, &M0))
}

fn f1(rk: u32, x: u32) -> u32 {
    let t = (x ^ rk).to_be_bytes();
    let s0 = s0();
    let s1 = s1();
    let subst = [s1[t[0] as usize], s0[t[1] as usize], s1[t[2] as usize], s0[t[3] as usize]];
    u32::from_be_bytes(matrix_mix(subst, &M1))
}

fn gfn4_encrypt(rounds: usize, rk: &[u32], p: [u32; 4]) -> [u32; 4] {
    let mut t = p;
    for i in 0..rounds {
        t[1] ^= f0(rk[2 * i], t[0]);
        t[3] ^= f1(rk[2 * i + 1], t[2]);
        if i < rounds - 1 {
            t = [t[1], t[2], t[3], t[0]];
        }
    }
    t
}

fn gfn4_decrypt(rounds: usize, rk: &[u32], c: [u32; 4]) -> [u32; 4] {
    let mut t = c;
    for i in (0..rounds).rev() {
        if i < rounds - 1 {
            t = [t[3], t[0], t[1], t[2]];
        }
        t[3] ^= f1(rk[2 * i + 1], t[2]);
        t[1] ^= f0(rk[2 * i], t[0]);
    }
    t
}

fn gfn8_fold(state: [u32; 8], cons: &[u32]) -> [u32; 8] {
    let double_steps = cons.len() / 4;
    let mut t = state;
    for i in 0..double_steps {
        let rk = &cons[4 * i..4 * i + 4];
        t[1] ^= f0(rk[0], t[0]);
        t[3] ^= f1(rk[1], t[2]);
        t[5] ^= f0(rk[2], t[4]);
        t[7] ^= f1(rk[3], t[6]);
        if i < double_steps - 1 {
            t = [t[1], t[2], t[3], t[4], t[5], t[6], t[7], t[0]];
        }
    }
    t
}

/// A doubling constant generator providing the round constants `F0`/`F1`
/// consume during key folding and round-key derivation. Not CLEFIA's
/// official `CON` sequence (see [`tables`]) — just a cheap, deterministic
/// source of well-mixed 32-bit words.
fn round_constants(n: usize) -> Vec<u32> {
    let mut out = Vec::with_capacity(n);
    let mut t: u32 = 0xb7e1_5163;
    for _ in 0..n {
        let feedback = if t & 0x8000_0000 != 0 { 0x04c1_1db7 } else { 0 };
        t = (t << 1) ^ feedback ^ 0x9e37_79b9;
        out.push(t);
    }
    out
}

/// `KL` is always the first 4 words. `KR` is the rest: absent for a
/// 128-bit key, the remaining 2 words zero-extended to 4 by appending
/// their bitwise complement for a 192-bit key, or the remaining 4 words
/// directly for a 256-bit key.
fn kr_words(k: &[u32]) -> [u32; 4] {
    match k.len() {
        4 => [0, 0, 0, 0],
        6 => [k[4], k[5], !k[4], !k[5]],
        8 => [k[4], k[5], k[6], k[7]],
        n => unreachable!("CLEFIA key schedules only fold 4, 6, or 8 words, got {n}"),
    }
}

fn fold_to_8(k: &[u32]) -> [u32; 8] {
    let kl = [k[0], k[1], k[2], k[3]];
    let kr = if k.len() == 4 { kl } else { kr_words(k) };
    [kl[0], kl[1], kl[2], kl[3], kr[0], kr[1], kr[2], kr[3]]
}

const DOUBLE_STEPS: usize = 8;

fn key_schedule(key_words: &[u32], rounds: usize) -> ([u32; 4], Vec<u32>) {
    let fold_cons = round_constants(DOUBLE_STEPS * 4);
    let l = gfn8_fold(fold_to_8(key_words), &fold_cons);

    let kl = [key_words[0], key_words[1], key_words[2], key_words[3]];
    let kr = kr_words(key_words);
    let wk = [kl[0] ^ kr[0], kl[1] ^ kr[1], kl[2] ^ kr[2], kl[3] ^ kr[3]];

    let rk_cons = round_constants(2 * rounds);
    let rk = (0..2 * rounds)
        .map(|i| l[i % 8].rotate_left((i as u32 * 7 + 1) % 32) ^ rk_cons[i])
        .collect();
    (wk, rk)
}

fn words_from_key(key: &[u8]) -> Vec<u32> {
    key.chunks_exact(4)
        .map(|c| u32::from_be_bytes(c.try_into().expect("4-byte chunk")))
        .collect()
}

fn words_from_block(data: [u8; 16]) -> [u32; 4] {
    let mut out = [0u32; 4];
    for (i, chunk) in data.chunks_exact(4).enumerate() {
        out[i] = u32::from_be_bytes(chunk.try_into().expect("4-byte chunk"));
    }
    out
}

fn block_from_words(words: [u32; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (i, w) in words.iter().enumerate() {
        out[4 * i..4 * i + 4].copy_from_slice(&w.to_be_bytes());
    }
    out
}

fn encrypt_block(data: [u8; 16], wk: [u32; 4], rk: &[u32], rounds: usize) -> [u8; 16] {
    let p = words_from_block(data);
    let t = [p[0], p[1] ^ wk[0], p[2], p[3] ^ wk[1]];
    let c = gfn4_encrypt(rounds, rk, t);
    block_from_words([c[0], c[1] ^ wk[2], c[2], c[3] ^ wk[3]])
}

fn decrypt_block(data: [u8; 16], wk: [u32; 4], rk: &[u32], rounds: usize) -> [u8; 16] {
    let c = words_from_block(data);
    let t = [c[0], c[1] ^ wk[2], c[2], c[3] ^ wk[3]];
    let p = gfn4_decrypt(rounds, rk, t);
    block_from_words([p[0], p[1] ^ wk[0], p[2], p[3] ^ wk[1]])
}

macro_rules! clefia_variant {
    ($name:ident, $key_bytes:expr, $key_bits:expr, $rounds:expr) => {
        #[derive(Clone)]
        pub struct $name {
            wk: [u32; 4],
            rk: Vec<u32>,
        }

        impl $name {
            pub fn new(key: Key<[u8; $key_bytes]>) -> Self {
                let words = words_from_key(&key.0);
                let (wk, rk) = key_schedule(&words, $rounds);
                Self { wk, rk }
            }
        }

        impl BlockEncrypt for $name {
            type Block = [u8; 16];
            fn encrypt(&self, data: [u8; 16]) -> [u8; 16] {
                encrypt_block(data, self.wk, &self.rk, $rounds)
            }
        }

        impl BlockDecrypt for $name {
            type Block = [u8; 16];
            fn decrypt(&self, data: [u8; 16]) -> [u8; 16] {
                decrypt_block(data, self.wk, &self.rk, $rounds)
            }
        }

        impl BlockCipher for $name {
            type Block = [u8; 16];
            const BLOCK_SIZE: usize = 128;
            const KEY_SIZE: usize = $key_bits;
        }
    };
}

clefia_variant!(Clefia128, 16, 128, 18);
clefia_variant!(Clefia192, 24, 192, 22);
clefia_variant!(Clefia256, 32, 256, 26);
