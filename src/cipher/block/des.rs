//! The Data Encryption Standard, as specified in FIPS 46-3, built entirely
//! from the [primitive components](super::primitives) and
//! [pipeline](super::pipeline) combinators: an initial bit permutation, 16
//! Feistel rounds whose round function is itself a small pipeline, and a
//! final permutation that happens to be the initial one's inverse.

mod tables;

use super::{
    bits::Bits,
    error::KeyParityError,
    pipeline::{Component, Order, Pipeline},
    primitives::{ExpansionPBox, HorizontalPipeline, SBox, StraightPBox, Swapper, XorKey},
    BlockCipher, BlockDecrypt, BlockEncrypt,
};
use crate::Key;

/// A constructed DES instance: the 16 round keys derived from the key
/// schedule, plus the shared components every round reuses.
#[derive(Clone)]
pub struct Des {
    round_keys: [Bits; 16],
    ip: StraightPBox,
    expansion: ExpansionPBox,
    substitution: HorizontalPipeline,
    straight: StraightPBox,
    swap: Swapper,
}

impl Des {
    /// Build the key schedule and fix the shared permutation/substitution
    /// tables. When `validate_parity` is set, each key byte's 8 bits (the
    /// 7 key bits plus its low parity bit) must XOR to zero; a byte whose
    /// bits XOR to one carries a parity error and the key is rejected.
    pub fn new(key: Key<[u8; 8]>, validate_parity: bool) -> Result<Self, KeyParityError> {
        if validate_parity {
            for (i, &byte) in key.0.iter().enumerate() {
                if byte.count_ones() % 2 != 0 {
                    return Err(KeyParityError { byte: i });
                }
            }
        }

        use tables::*;

        let pc1 = super::primitives::CompressionPBox::new(&PC1, 1, 64);
        let pc2 = super::primitives::CompressionPBox::new(&PC2, 1, 56);

        let key_bits = Bits::from_bytes(&key.0);
        let cd = pc1.encrypt(key_bits).expect("key is exactly 64 bits");
        let (mut c, mut d) = cd.split();

        let mut round_keys = [Bits::zero(48); 16];
        for (i, &shift) in SHIFTS.iter().enumerate() {
            c = c.rotate_left(shift);
            d = d.rotate_left(shift);
            let joined = c.join(d);
            round_keys[i] = pc2.encrypt(joined).expect("56-bit halves");
        }

        Ok(Self {
            round_keys,
            ip: StraightPBox::new(&IP, 1),
            expansion: ExpansionPBox::new(&E, 1, 32),
            substitution: HorizontalPipeline::new(vec![
                SBox(S1),
                SBox(S2),
                SBox(S3),
                SBox(S4),
                SBox(S5),
                SBox(S6),
                SBox(S7),
                SBox(S8),
            ]),
            straight: StraightPBox::new(&P, 1),
            swap: Swapper::new(64),
        })
    }

    /// The round function `F`, built fresh for each round because the
    /// XOR key changes every time: expand, mix in the round key,
    /// substitute, permute.
    fn feistel(&self, half: Bits, round_key: Bits) -> Bits {
        let pipeline = Pipeline::new(
            vec![
                Component::Expansion(self.expansion.clone()),
                Component::Xor(XorKey::new(round_key)),
                Component::Substitute(self.substitution.clone()),
                Component::Straight(self.straight.clone()),
            ],
            Order::Original,
        );
        pipeline
            .encrypt(half)
            .expect("DES round pipeline widths are fixed by construction")
    }

    fn run(&self, data: [u8; 8], round_keys: impl Iterator<Item = Bits>) -> [u8; 8] {
        let block = self.ip.encrypt(Bits::from_bytes(&data)).expect("64-bit block");
        let (mut l, mut r) = block.split();
        for round_key in round_keys {
            let f = self.feistel(r, round_key);
            let next_r = l.xor(f).expect("32-bit halves");
            l = r;
            r = next_r;
        }
        // The preoutput block is R16 || L16, the swap of the natural
        // L16 || R16 join.
        let natural = l.join(r);
        let preoutput = self.swap.encrypt(natural).expect("64-bit width");
        // Applying the initial permutation's inverse here is correct only
        // because DES's final permutation is defined as IP's inverse.
        let plain = self.ip.decrypt(preoutput).expect("64-bit width");
        plain.to_bytes().try_into().expect("8 bytes")
    }
}

impl BlockEncrypt for Des {
    type Block = [u8; 8];

    fn encrypt(&self, data: [u8; 8]) -> [u8; 8] {
        self.run(data, self.round_keys.iter().copied())
    }
}

impl BlockDecrypt for Des {
    type Block = [u8; 8];

    fn decrypt(&self, data: [u8; 8]) -> [u8; 8] {
        self.run(data, self.round_keys.iter().rev().copied())
    }
}

impl BlockCipher for Des {
    type Block = [u8; 8];
    const BLOCK_SIZE: usize = 64;
    const KEY_SIZE: usize = 64;
}
