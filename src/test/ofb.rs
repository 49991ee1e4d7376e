use crate::{Cipher, Des, Key, Ofb};

#[test]
fn round_trip_with_a_short_final_segment() {
    let des = Des::new(Key([0x5a; 8]), false).unwrap();
    let ofb = Ofb::new(des, [0u8; 8]);
    let plaintext = b"exactly eleven!".to_vec();
    let ciphertext = ofb.encrypt(&plaintext);
    assert_eq!(ciphertext.len(), plaintext.len());
    assert_eq!(ofb.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn encryption_and_decryption_are_the_same_operation() {
    let des = Des::new(Key([0x24; 8]), false).unwrap();
    let ofb = Ofb::new(des, [0u8; 8]);
    let data = b"the keystream never depends on the data".to_vec();
    assert_eq!(ofb.encrypt(&data), ofb.decrypt(&data).unwrap());
}

#[test]
fn distinct_ivs_produce_distinct_ciphertext() {
    let des = Des::new(Key([0x33; 8]), false).unwrap();
    let a = Ofb::new(des.clone(), [0u8; 8]);
    let b = Ofb::new(des, [1u8; 8]);
    let plaintext = b"same key, different iv".to_vec();
    assert_ne!(a.encrypt(&plaintext), b.encrypt(&plaintext));
}
