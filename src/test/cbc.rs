use crate::{Cbc, Cipher, Des, Key};

#[test]
fn round_trip_with_unaligned_plaintext() {
    let des = Des::new(Key(0x0123456789ABCDEFu64.to_be_bytes()), false).unwrap();
    let iv = 0x1122334455667788u64.to_be_bytes();
    let cbc = Cbc::new(des, iv);

    let plaintext = b"a block cipher toolkit exercise".to_vec();
    let ciphertext = cbc.encrypt(&plaintext);
    assert_eq!(ciphertext.len() % 8, 0);
    assert_eq!(cbc.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn identical_plaintext_blocks_produce_different_ciphertext() {
    // Unlike ECB, chaining through the IV means two identical plaintext
    // blocks never produce identical ciphertext blocks.
    let des = Des::new(Key([0x42; 8]), false).unwrap();
    let cbc = Cbc::new(des, [0u8; 8]);

    let plaintext = [7u8; 16];
    let ciphertext = cbc.encrypt(&plaintext);
    assert_ne!(&ciphertext[0..8], &ciphertext[8..16]);
}

#[test]
fn aligned_plaintext_still_grows_by_one_block() {
    let des = Des::new(Key([0x11; 8]), false).unwrap();
    let cbc = Cbc::new(des, [0u8; 8]);
    let plaintext = [1u8; 24];
    assert_eq!(cbc.encrypt(&plaintext).len(), 32);
}
