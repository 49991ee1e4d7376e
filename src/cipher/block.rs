pub mod bits;
mod clefia;
mod des;
mod error;
mod modes;
mod padding;
mod pipeline;
mod present;
mod primitives;
mod speck;
mod triple_des;

pub use {
    bits::Bits,
    clefia::{Clefia128, Clefia192, Clefia256},
    des::Des,
    error::{ComponentError, KeyParityError, NonInvertible, PaddingError, SizeMismatch},
    modes::{increment_be, Cbc, Cfb, Ctr, Ecb, Ofb},
    padding::{PadNone, PadZeros, Padding, Pkcs7},
    present::{Present128, Present80},
    speck::Speck128_256,
    triple_des::TripleDes,
};

use crate::Bytes;

/// A block cipher encrypts and decrypts data in blocks of fixed size.
///
/// A block cipher alone does not fulfill the definition of a
/// [cipher](crate::Cipher), because it can't handle inputs of arbitrary
/// length; for that, pair it with a [block mode](crate::BlockMode).
///
/// Unlike a general [`Cipher`](crate::Cipher), a block cipher's key is
/// consumed once, at construction, into a round-key schedule the instance
/// owns; `encrypt`/`decrypt` take only the block.
pub trait BlockCipher:
    BlockEncrypt<Block = <Self as BlockCipher>::Block> + BlockDecrypt<Block = <Self as BlockCipher>::Block>
{
    type Block: Bytes;

    /// Block size, in bits.
    const BLOCK_SIZE: usize;
    /// Key size, in bits.
    const KEY_SIZE: usize;
}

/// The encryption half of a [`BlockCipher`].
pub trait BlockEncrypt {
    type Block: Bytes;

    fn encrypt(&self, data: Self::Block) -> Self::Block;
}

/// The decryption half of a [`BlockCipher`].
pub trait BlockDecrypt {
    type Block: Bytes;

    fn decrypt(&self, data: Self::Block) -> Self::Block;
}
