use crate::{Bytes, Cipher};

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;

pub use {
    cbc::Cbc,
    cfb::Cfb,
    ctr::{increment_be, Ctr},
    ecb::Ecb,
    ofb::Ofb,
};

/// A way to execute a [block cipher](crate::BlockCipher) on data of arbitrary
/// length.
///
/// A block cipher can only encrypt or decrypt one block at a time. In order to
/// encrypt arbitrary amounts of data, there needs to be a way to ensure that
/// the data is a multiple of the block size ([padding](crate::Padding)) and a
/// way to map input blocks of plaintext to output blocks of ciphertext. The
/// "mode of operation" usually refers to the combination of these two
/// requirements.
pub trait BlockMode: Cipher {}

/// Number of whole bytes in a block cipher's block, used by every mode to
/// size its chunks.
pub(super) fn block_bytes<C: crate::BlockCipher>() -> usize {
    C::BLOCK_SIZE / 8
}

/// XORs two same-width byte buffers together, byte by byte.
pub(super) fn xor_bytes<B: Bytes>(a: B, b: B) -> B {
    let xored: Vec<u8> = a.as_ref().iter().zip(b.as_ref()).map(|(&x, &y)| x ^ y).collect();
    B::try_from(xored.as_slice()).expect("operands share a width")
}
