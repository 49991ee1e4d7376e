use {super::Padding, std::convert::Infallible};

/// Pads with zero bytes up to the next multiple of the block size.
///
/// Unlike [`Pkcs7`](super::Pkcs7), a plaintext that is already a multiple of
/// the block size is left untouched — no extra block is appended. This
/// makes unpadding ambiguous: [`unpad`](Self::unpad) strips *all* trailing
/// zero bytes, so a plaintext that itself ends in zero bytes loses them.
/// That ambiguity is inherent to this scheme, not a bug in this
/// implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PadZeros;

impl Padding for PadZeros {
    type Err = Infallible;

    fn pad(&self, mut data: Vec<u8>, n: usize) -> Vec<u8> {
        let remainder = data.len() % n;
        if remainder != 0 {
            data.resize(data.len() + (n - remainder), 0);
        }
        data
    }

    fn unpad(&self, mut data: Vec<u8>, _n: usize) -> Result<Vec<u8>, Self::Err> {
        while data.last() == Some(&0) {
            data.pop();
        }
        Ok(data)
    }
}
