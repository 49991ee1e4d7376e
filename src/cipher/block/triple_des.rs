//! Triple DES, keyed with three independent 56-bit keys and applied as
//! encrypt-encrypt-encrypt rather than the more common encrypt-decrypt-encrypt.
//! EEE is a deliberate, documented choice here, not a mistake: it still gives
//! three independent key schedules and a 168-bit nominal key, and it composes
//! with [`Des`] without needing a second, decrypt-shaped constructor.

use super::{des::Des, error::KeyParityError, BlockCipher, BlockDecrypt, BlockEncrypt};
use crate::Key;

#[derive(Clone)]
pub struct TripleDes {
    k1: Des,
    k2: Des,
    k3: Des,
}

impl TripleDes {
    pub fn new(
        k1: Key<[u8; 8]>,
        k2: Key<[u8; 8]>,
        k3: Key<[u8; 8]>,
        validate_parity: bool,
    ) -> Result<Self, KeyParityError> {
        Ok(Self {
            k1: Des::new(k1, validate_parity)?,
            k2: Des::new(k2, validate_parity)?,
            k3: Des::new(k3, validate_parity)?,
        })
    }
}

impl BlockEncrypt for TripleDes {
    type Block = [u8; 8];

    fn encrypt(&self, data: [u8; 8]) -> [u8; 8] {
        let a = self.k1.encrypt(data);
        let b = self.k2.encrypt(a);
        self.k3.encrypt(b)
    }
}

impl BlockDecrypt for TripleDes {
    type Block = [u8; 8];

    /// Undoes [`encrypt`](BlockEncrypt::encrypt) by running each stage's
    /// decrypt in reverse order, matching the EEE construction rather than
    /// the usual EDE one.
    fn decrypt(&self, data: [u8; 8]) -> [u8; 8] {
        let a = self.k3.decrypt(data);
        let b = self.k2.decrypt(a);
        self.k1.decrypt(b)
    }
}

impl BlockCipher for TripleDes {
    type Block = [u8; 8];
    const BLOCK_SIZE: usize = 64;
    const KEY_SIZE: usize = 168;
}
