use crate::{increment_be, Cipher, Ctr, Des, Key};

#[test]
fn encryption_and_decryption_are_the_same_operation() {
    let des = Des::new(Key([0x24; 8]), false).unwrap();
    let ctr = Ctr::new(des, [0u8; 8]);
    let data = b"counter mode never pads short input".to_vec();
    assert_eq!(ctr.encrypt(&data), ctr.decrypt(&data).unwrap());
}

#[test]
fn round_trip_is_identity() {
    let des = Des::new(Key([0x77; 8]), false).unwrap();
    let ctr = Ctr::new(des, 0u64.to_be_bytes());
    let plaintext = b"a message longer than one block".to_vec();
    let ciphertext = ctr.encrypt(&plaintext);
    assert_eq!(ctr.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn same_keystream_reveals_plaintext_xor() {
    // Two plaintexts under the same key+IV: XOR of the ciphertexts equals
    // the XOR of the plaintexts, confirming the keystream is unaffected by
    // the data being encrypted.
    let des = Des::new(Key([0x01; 8]), false).unwrap();
    let ctr_a = Ctr::new(des.clone(), [0u8; 8]);
    let ctr_b = Ctr::new(des, [0u8; 8]);

    let a = [0x11u8; 16];
    let b = [0x22u8; 16];
    let ca = ctr_a.encrypt(&a);
    let cb = ctr_b.encrypt(&b);

    let xor_plain: Vec<u8> = a.iter().zip(&b).map(|(&x, &y)| x ^ y).collect();
    let xor_cipher: Vec<u8> = ca.iter().zip(&cb).map(|(&x, &y)| x ^ y).collect();
    assert_eq!(xor_plain, xor_cipher);
}

#[test]
fn increment_be_wraps_around() {
    let mut counter = [0xff, 0xff];
    increment_be(&mut counter);
    assert_eq!(counter, [0x00, 0x00]);

    let mut counter = [0x00, 0xff];
    increment_be(&mut counter);
    assert_eq!(counter, [0x01, 0x00]);
}
