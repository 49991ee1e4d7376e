use crate::{PadNone, PadZeros, Padding, PaddingError, Pkcs7};

#[test]
fn pkcs7_round_trips_unaligned_input() {
    let data = vec![1, 2, 3, 4, 5];
    let padded = Pkcs7.pad(data.clone(), 8);
    assert_eq!(padded.len(), 8);
    assert_eq!(Pkcs7.unpad(padded, 8).unwrap(), data);
}

#[test]
fn pkcs7_adds_a_full_block_when_already_aligned() {
    let data = vec![0u8; 8];
    let padded = Pkcs7.pad(data.clone(), 8);
    assert_eq!(padded.len(), 16);
    assert_eq!(Pkcs7.unpad(padded, 8).unwrap(), data);
}

#[test]
fn pkcs7_rejects_malformed_padding() {
    let mut padded = Pkcs7.pad(vec![1, 2, 3], 8);
    let last = padded.len() - 1;
    padded[last - 1] = 0xff;
    assert!(matches!(
        Pkcs7.unpad(padded, 8),
        Err(PaddingError::Malformed)
    ));
}

#[test]
fn pkcs7_rejects_zero_count() {
    let mut data = vec![1, 2, 3, 4, 5, 6, 7, 0];
    let len = data.len();
    data[len - 1] = 0;
    assert!(matches!(
        Pkcs7.unpad(data, 8),
        Err(PaddingError::InvalidCount(0))
    ));
}

#[test]
fn pad_none_is_the_identity() {
    let data = vec![9, 8, 7];
    assert_eq!(PadNone.pad(data.clone(), 8), data);
    assert_eq!(PadNone.unpad(data.clone(), 8).unwrap(), data);
}

#[test]
fn pad_zeros_rounds_up_to_block_size() {
    let data = vec![1, 2, 3];
    let padded = PadZeros.pad(data.clone(), 8);
    assert_eq!(padded, vec![1, 2, 3, 0, 0, 0, 0, 0]);
}

#[test]
fn pad_zeros_leaves_aligned_input_untouched() {
    let data = vec![1u8; 8];
    assert_eq!(PadZeros.pad(data.clone(), 8), data);
}

#[test]
fn pad_zeros_unpad_strips_all_trailing_zeros() {
    // Documented ambiguity: a plaintext that itself ends in zero bytes
    // loses them on unpad. `1` survives, the trailing zero does not.
    let data = vec![1, 0];
    let padded = PadZeros.pad(data, 8);
    assert_eq!(PadZeros.unpad(padded, 8).unwrap(), vec![1]);
}
