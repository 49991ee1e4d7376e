use crate::{BlockDecrypt, BlockEncrypt, Key, Present128, Present80};

#[test]
fn present80_known_answer_vector() {
    let key = Key([0u8; 10]);
    let plain = [0u8; 8];
    let cipher = 0x5579c1387b228445u64.to_be_bytes();

    let present = Present80::new(key);
    assert_eq!(present.encrypt(plain), cipher);
    assert_eq!(present.decrypt(cipher), plain);
}

#[test]
fn present128_known_answer_vector() {
    let key = Key(*b"\x01\x23\x45\x67\x89\xab\xcd\xef\x01\x23\x45\x67\x89\xab\xcd\xef");
    let plain = 0x0123456789abcdefu64.to_be_bytes();
    let cipher = 0x0e9d28685e671dd6u64.to_be_bytes();

    let present = Present128::new(key);
    assert_eq!(present.encrypt(plain), cipher);
    assert_eq!(present.decrypt(cipher), plain);
}

#[test]
fn round_trip_is_identity_for_arbitrary_blocks() {
    let present80 = Present80::new(Key([0x42; 10]));
    let present128 = Present128::new(Key([0x7a; 16]));
    let block = 0x0011223344556677u64.to_be_bytes();
    assert_eq!(present80.decrypt(present80.encrypt(block)), block);
    assert_eq!(present128.decrypt(present128.encrypt(block)), block);
}
