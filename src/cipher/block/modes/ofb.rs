use crate::{BlockCipher, Cipher, PadNone, Padding};

/// Output feedback: a synchronous stream cipher built by repeatedly
/// encrypting the block cipher's own output, starting from the IV. The
/// keystream does not depend on the plaintext or ciphertext at all, so
/// encryption and decryption are the same operation.
pub struct Ofb<C: BlockCipher, P = PadNone> {
    cipher: C,
    iv: C::Block,
    padding: P,
}

impl<C: BlockCipher> Ofb<C, PadNone> {
    pub fn new(cipher: C, iv: C::Block) -> Self {
        Self {
            cipher,
            iv,
            padding: PadNone,
        }
    }
}

impl<C: BlockCipher, P: Padding> Ofb<C, P> {
    pub fn with_padding(cipher: C, iv: C::Block, padding: P) -> Self {
        Self { cipher, iv, padding }
    }

    fn apply(&self, data: &[u8]) -> Vec<u8> {
        let n = super::block_bytes::<C>();
        let mut o = self.iv;
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(n) {
            o = self.cipher.encrypt(o);
            out.extend(chunk.iter().zip(o.as_ref()).map(|(&b, &k)| b ^ k));
        }
        out
    }
}

impl<C: BlockCipher, P: Padding> Cipher for Ofb<C, P> {
    type Err = P::Err;

    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let n = super::block_bytes::<C>();
        let padded = self.padding.pad(data.to_vec(), n);
        self.apply(&padded)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, Self::Err> {
        let n = super::block_bytes::<C>();
        self.padding.unpad(self.apply(data), n)
    }
}

impl<C: BlockCipher, P: Padding> super::BlockMode for Ofb<C, P> {}
