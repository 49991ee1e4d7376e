use crate::{BlockCipher, Cipher, PadNone, Padding};

/// Cipher feedback: turns a block cipher into a self-synchronizing stream
/// cipher. Each keystream block is produced by encrypting the previous
/// ciphertext segment (the IV, for the first segment), so both directions
/// call the block cipher's `encrypt`, never `decrypt`.
pub struct Cfb<C: BlockCipher, P = PadNone> {
    cipher: C,
    iv: C::Block,
    padding: P,
}

impl<C: BlockCipher> Cfb<C, PadNone> {
    pub fn new(cipher: C, iv: C::Block) -> Self {
        Self {
            cipher,
            iv,
            padding: PadNone,
        }
    }
}

impl<C: BlockCipher, P: Padding> Cfb<C, P> {
    pub fn with_padding(cipher: C, iv: C::Block, padding: P) -> Self {
        Self { cipher, iv, padding }
    }

    /// Feeds `segment` (the ciphertext bytes just produced or consumed) into
    /// `iv`: drop the leading `segment.len()` bytes and append `segment`.
    fn feedback(iv: C::Block, segment: &[u8]) -> C::Block {
        let mut bytes = iv.as_ref().to_vec();
        bytes.drain(..segment.len());
        bytes.extend_from_slice(segment);
        C::Block::try_from(&bytes).expect("feedback preserves block width")
    }
}

impl<C: BlockCipher, P: Padding> Cipher for Cfb<C, P> {
    type Err = P::Err;

    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let n = super::block_bytes::<C>();
        let padded = self.padding.pad(data.to_vec(), n);
        let mut iv = self.iv;
        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks(n) {
            let keystream = self.cipher.encrypt(iv);
            let ct: Vec<u8> = chunk.iter().zip(keystream.as_ref()).map(|(&p, &k)| p ^ k).collect();
            iv = Self::feedback(iv, &ct);
            out.extend(ct);
        }
        out
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, Self::Err> {
        let n = super::block_bytes::<C>();
        let mut iv = self.iv;
        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(n) {
            let keystream = self.cipher.encrypt(iv);
            let pt: Vec<u8> = chunk.iter().zip(keystream.as_ref()).map(|(&c, &k)| c ^ k).collect();
            iv = Self::feedback(iv, chunk);
            out.extend(pt);
        }
        self.padding.unpad(out, n)
    }
}

impl<C: BlockCipher, P: Padding> super::BlockMode for Cfb<C, P> {}
