use super::{block_bytes, xor_bytes};
use crate::{BlockCipher, Cipher, Padding, Pkcs7};

/// Cipher block chaining: each plaintext block is XORed with the previous
/// ciphertext block before encryption, so identical plaintext blocks no
/// longer produce identical ciphertext.
pub struct Cbc<C: BlockCipher, P = Pkcs7> {
    cipher: C,
    iv: C::Block,
    padding: P,
}

impl<C: BlockCipher> Cbc<C, Pkcs7> {
    pub fn new(cipher: C, iv: C::Block) -> Self {
        Self {
            cipher,
            iv,
            padding: Pkcs7,
        }
    }
}

impl<C: BlockCipher, P: Padding> Cbc<C, P> {
    pub fn with_padding(cipher: C, iv: C::Block, padding: P) -> Self {
        Self { cipher, iv, padding }
    }
}

impl<C: BlockCipher, P: Padding> Cipher for Cbc<C, P> {
    type Err = P::Err;

    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let n = block_bytes::<C>();
        let padded = self.padding.pad(data.to_vec(), n);
        let mut prev = self.iv;
        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(n) {
            let block = C::Block::try_from(chunk).expect("chunk sized to block");
            let enc = self.cipher.encrypt(xor_bytes(block, prev));
            out.extend(enc);
            prev = enc;
        }
        out
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, Self::Err> {
        let n = block_bytes::<C>();
        let mut prev = self.iv;
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(n) {
            let block = C::Block::try_from(chunk).expect("chunk sized to block");
            out.extend(xor_bytes(self.cipher.decrypt(block), prev));
            prev = block;
        }
        self.padding.unpad(out, n)
    }
}

impl<C: BlockCipher, P: Padding> super::BlockMode for Cbc<C, P> {}
