//! The small, individually weak bit operations ([`StraightPBox`],
//! [`ExpansionPBox`], [`CompressionPBox`], [`SBox`], [`Swapper`],
//! [`XorKey`]) that [`Des`](super::des::Des) and
//! [`Present80`](super::present::Present80) are built from. None of these is
//! a cipher on its own; composed through a [`Pipeline`](super::pipeline::Pipeline),
//! they are.

use super::{
    bits::Bits,
    error::{NonInvertible, SizeMismatch},
};

fn permute(input: Bits, table: &[u32], start: u32) -> Bits {
    let mut value = 0u64;
    for &src in table {
        let bit = input.bit(src - start);
        value = (value << 1) | bit;
    }
    Bits::new(value, table.len() as u32)
}

/// A bijective bit permutation: as many output bits as input bits.
///
/// `table[i]` names the `start`-based source position feeding output bit
/// `i`. The inverse table is cached at construction so `decrypt` reverses
/// the permutation directly.
#[derive(Debug, Clone)]
pub struct StraightPBox {
    table: Vec<u32>,
    inverse: Vec<u32>,
    start: u32,
}

impl StraightPBox {
    /// `table` must be a bijection on `0..table.len()` once shifted by
    /// `start`; malformed tables are a caller error, not a runtime one.
    pub fn new(table: &[u32], start: u32) -> Self {
        let mut inverse = vec![0u32; table.len()];
        for (i, &src) in table.iter().enumerate() {
            inverse[(src - start) as usize] = i as u32;
        }
        Self {
            table: table.to_vec(),
            inverse,
            start,
        }
    }

    pub fn encrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        self.check(input)?;
        Ok(permute(input, &self.table, self.start))
    }

    pub fn decrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        self.check(input)?;
        Ok(permute(input, &self.inverse, 0))
    }

    fn check(&self, input: Bits) -> Result<(), SizeMismatch> {
        if input.width() as usize != self.table.len() {
            return Err(SizeMismatch {
                expected: self.table.len() as u32,
                actual: input.width(),
            });
        }
        Ok(())
    }
}

/// A bit permutation with more output positions than input positions;
/// source positions may repeat (DES's expansion from 32 to 48 bits).
#[derive(Debug, Clone)]
pub struct ExpansionPBox {
    table: Vec<u32>,
    inverse: Vec<u32>,
    start: u32,
    input_width: u32,
}

impl ExpansionPBox {
    pub fn new(table: &[u32], start: u32, input_width: u32) -> Self {
        let mut inverse = vec![0u32; input_width as usize];
        for (i, &src) in table.iter().enumerate() {
            // A later occurrence overwrites an earlier one, so that the
            // recovered input bit comes from the last output position that
            // copied it.
            inverse[(src - start) as usize] = i as u32;
        }
        Self {
            table: table.to_vec(),
            inverse,
            start,
            input_width,
        }
    }

    pub fn encrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        if input.width() != self.input_width {
            return Err(SizeMismatch {
                expected: self.input_width,
                actual: input.width(),
            });
        }
        Ok(permute(input, &self.table, self.start))
    }

    pub fn decrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        if input.width() as usize != self.table.len() {
            return Err(SizeMismatch {
                expected: self.table.len() as u32,
                actual: input.width(),
            });
        }
        Ok(permute(input, &self.inverse, 0))
    }
}

/// A bit permutation with fewer output positions than input positions
/// (DES's PC-1 and PC-2). Irreversible: distinct input bits are discarded,
/// so [`decrypt`](Self::decrypt) always fails.
#[derive(Debug, Clone)]
pub struct CompressionPBox {
    table: Vec<u32>,
    start: u32,
    input_width: u32,
}

impl CompressionPBox {
    pub fn new(table: &[u32], start: u32, input_width: u32) -> Self {
        Self {
            table: table.to_vec(),
            start,
            input_width,
        }
    }

    pub fn encrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        if input.width() != self.input_width {
            return Err(SizeMismatch {
                expected: self.input_width,
                actual: input.width(),
            });
        }
        Ok(permute(input, &self.table, self.start))
    }

    pub fn decrypt(&self, _input: Bits) -> Result<Bits, NonInvertible> {
        Err(NonInvertible)
    }
}

/// A DES S-box: a 4x16 lookup table addressed by a 6-bit input. The outer
/// two bits select the row, the middle four bits select the column.
#[derive(Debug, Clone, Copy)]
pub struct SBox(pub [[u8; 16]; 4]);

impl SBox {
    pub fn encrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        if input.width() != 6 {
            return Err(SizeMismatch {
                expected: 6,
                actual: input.width(),
            });
        }
        let v = input.value() as u8;
        let row = (((v >> 5) & 1) << 1 | (v & 1)) as usize;
        let col = ((v >> 1) & 0b1111) as usize;
        Ok(Bits::new(self.0[row][col] as u64, 4))
    }

    /// DES never supplies an inverse table for its S-boxes: the Feistel
    /// structure as a whole is invertible even though each S-box, taken
    /// alone, maps a 6-bit domain onto a 4-bit range and is not.
    pub fn decrypt(&self, _input: Bits) -> Result<Bits, NonInvertible> {
        Err(NonInvertible)
    }
}

/// Splits a fixed-width input into 8 six-bit segments, substitutes each
/// through its own [`SBox`], and concatenates the four-bit results. Used
/// for DES's substitution stage (48 bits in, 32 bits out).
#[derive(Debug, Clone)]
pub struct HorizontalPipeline {
    boxes: Vec<SBox>,
}

impl HorizontalPipeline {
    pub fn new(boxes: Vec<SBox>) -> Self {
        Self { boxes }
    }

    pub fn encrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        let total_in = 6 * self.boxes.len() as u32;
        if input.width() != total_in {
            return Err(SizeMismatch {
                expected: total_in,
                actual: input.width(),
            });
        }
        let segments = input.n_ary_split(6);
        let out: Vec<Bits> = segments
            .into_iter()
            .zip(&self.boxes)
            .map(|(seg, sbox)| sbox.encrypt(seg).expect("segment width checked above"))
            .collect();
        Ok(Bits::n_ary_join(&out, 4))
    }

    pub fn decrypt(&self, _input: Bits) -> Result<Bits, NonInvertible> {
        Err(NonInvertible)
    }
}

/// Swaps the high and low halves of a value by bit count. Self-inverse.
///
/// Precondition: `width` must be even, and every use of this primitive in
/// this crate splits on a whole-byte boundary.
#[derive(Debug, Clone, Copy)]
pub struct Swapper {
    width: u32,
}

impl Swapper {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn encrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        self.apply(input)
    }

    pub fn decrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        self.apply(input)
    }

    fn apply(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        if input.width() != self.width {
            return Err(SizeMismatch {
                expected: self.width,
                actual: input.width(),
            });
        }
        let (high, low) = input.split();
        Ok(low.join(high))
    }
}

/// XORs a block with a fixed key of the same width. Self-inverse.
#[derive(Debug, Clone, Copy)]
pub struct XorKey {
    key: Bits,
}

impl XorKey {
    pub fn new(key: Bits) -> Self {
        Self { key }
    }

    pub fn encrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        input.xor(self.key).ok_or(SizeMismatch {
            expected: self.key.width(),
            actual: input.width(),
        })
    }

    pub fn decrypt(&self, input: Bits) -> Result<Bits, SizeMismatch> {
        self.encrypt(input)
    }
}
