use {
    super::Padding,
    crate::cipher::block::error::PaddingError,
    docext::docext,
};

/// Pkcs7 is a simple approach to padding.
///
/// If the message needs to be padded with $n$ bytes and the block size is $B$,
/// this padding scheme will append $n$ bytes with the value $n$. If $n = 0$,
/// then an entire block of padding is added, i.e. $B$ bytes with the value $B$.
#[docext]
pub struct Pkcs7;

impl Padding for Pkcs7 {
    type Err = PaddingError;

    fn pad(&self, mut data: Vec<u8>, n: usize) -> Vec<u8> {
        let remainder = data.len() % n;
        let count = if remainder == 0 { n } else { n - remainder };
        data.extend(std::iter::repeat(count as u8).take(count));
        data
    }

    fn unpad(&self, mut data: Vec<u8>, n: usize) -> Result<Vec<u8>, Self::Err> {
        let count = *data.last().ok_or(PaddingError::Malformed)?;
        if count == 0 || count as usize > n || count as usize > data.len() {
            return Err(PaddingError::InvalidCount(count));
        }
        let split = data.len() - count as usize;
        if data[split..].iter().any(|&b| b != count) {
            return Err(PaddingError::Malformed);
        }
        data.truncate(split);
        Ok(data)
    }
}
