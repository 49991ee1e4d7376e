use crate::{BlockCipher, Cipher, Padding, Pkcs7};

/// Increments `bytes` as a big-endian integer, wrapping modulo 2^(8 *
/// bytes.len()). Block-size-agnostic: every mode that needs a counter
/// block shares this instead of hardcoding a word width.
pub fn increment_be(bytes: &mut [u8]) {
    for byte in bytes.iter_mut().rev() {
        let (next, overflow) = byte.overflowing_add(1);
        *byte = next;
        if !overflow {
            return;
        }
    }
}

/// Counter mode: turns a block cipher into a stream cipher by encrypting a
/// counter block that increments once per block, independent of the data.
/// This makes `encrypt`/`decrypt` the same operation, and lets every block
/// be produced (or consumed) independently of its neighbors.
pub struct Ctr<C: BlockCipher, P = Pkcs7> {
    cipher: C,
    iv: C::Block,
    padding: P,
}

impl<C: BlockCipher> Ctr<C, Pkcs7> {
    pub fn new(cipher: C, iv: C::Block) -> Self {
        Self {
            cipher,
            iv,
            padding: Pkcs7,
        }
    }
}

impl<C: BlockCipher, P: Padding> Ctr<C, P> {
    pub fn with_padding(cipher: C, iv: C::Block, padding: P) -> Self {
        Self { cipher, iv, padding }
    }

    fn apply(&self, data: &[u8]) -> Vec<u8> {
        let n = super::block_bytes::<C>();
        let mut counter = self.iv;
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(n) {
            let keystream = self.cipher.encrypt(counter);
            out.extend(chunk.iter().zip(keystream.as_ref()).map(|(&b, &k)| b ^ k));
            let mut next = counter.as_ref().to_vec();
            increment_be(&mut next);
            counter = C::Block::try_from(&next).expect("counter width unchanged");
        }
        out
    }
}

impl<C: BlockCipher, P: Padding> Cipher for Ctr<C, P> {
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

impl<C: BlockCipher, P: Padding> super::BlockMode for Ctr<C, P> {}
