use super::block_bytes;
use crate::{BlockCipher, Cipher, Padding, Pkcs7};

/// Electronic codebook: every block is encrypted independently.
///
/// The simplest mode, and the one to avoid for anything but single-block
/// messages or already-random-looking data: identical plaintext blocks
/// produce identical ciphertext blocks, leaking structure.
pub struct Ecb<C, P = Pkcs7> {
    cipher: C,
    padding: P,
}

impl<C: BlockCipher> Ecb<C, Pkcs7> {
    pub fn new(cipher: C) -> Self {
        Self {
            cipher,
            padding: Pkcs7,
        }
    }
}

impl<C: BlockCipher, P: Padding> Ecb<C, P> {
    pub fn with_padding(cipher: C, padding: P) -> Self {
        Self { cipher, padding }
    }
}

impl<C: BlockCipher, P: Padding> Cipher for Ecb<C, P> {
    type Err = P::Err;

    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let n = block_bytes::<C>();
        let padded = self.padding.pad(data.to_vec(), n);
        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(n) {
            let block = C::Block::try_from(chunk).expect("chunk sized to block");
            out.extend(self.cipher.encrypt(block));
        }
        out
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, Self::Err> {
        let n = block_bytes::<C>();
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(n) {
            let block = C::Block::try_from(chunk).expect("chunk sized to block");
            out.extend(self.cipher.decrypt(block));
        }
        self.padding.unpad(out, n)
    }
}

impl<C: BlockCipher, P: Padding> super::BlockMode for Ecb<C, P> {}
