use {super::Padding, std::convert::Infallible};

/// No padding at all: `pad`/`unpad` are the identity.
///
/// Only sound for modes that never need the input rounded up to a block
/// boundary — the streaming modes ([`Cfb`](crate::Cfb), [`Ofb`](crate::Ofb)),
/// which consume a short final segment directly instead of padding it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PadNone;

impl Padding for PadNone {
    type Err = Infallible;

    fn pad(&self, data: Vec<u8>, _n: usize) -> Vec<u8> {
        data
    }

    fn unpad(&self, data: Vec<u8>, _n: usize) -> Result<Vec<u8>, Self::Err> {
        Ok(data)
    }
}
