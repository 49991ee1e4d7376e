use crate::{Cfb, Cipher, Des, Key};

#[test]
fn round_trip_with_a_short_final_segment() {
    let des = Des::new(Key([0x5a; 8]), false).unwrap();
    let cfb = Cfb::new(des, [0u8; 8]);
    let plaintext = b"exactly eleven!".to_vec();
    let ciphertext = cfb.encrypt(&plaintext);
    assert_eq!(ciphertext.len(), plaintext.len());
    assert_eq!(cfb.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn never_pads_to_a_block_boundary() {
    let des = Des::new(Key([0x09; 8]), false).unwrap();
    let cfb = Cfb::new(des, [0u8; 8]);
    let plaintext = vec![1, 2, 3];
    assert_eq!(cfb.encrypt(&plaintext).len(), 3);
}

#[test]
fn distinct_ivs_produce_distinct_ciphertext() {
    let des = Des::new(Key([0x33; 8]), false).unwrap();
    let a = Cfb::new(des.clone(), [0u8; 8]);
    let b = Cfb::new(des, [1u8; 8]);
    let plaintext = b"same key, different iv".to_vec();
    assert_ne!(a.encrypt(&plaintext), b.encrypt(&plaintext));
}
