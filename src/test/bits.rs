use crate::Bits;

#[test]
fn split_and_join_roundtrip() {
    let bits = Bits::new(0b1010_1100, 8);
    let (high, low) = bits.split();
    assert_eq!(high.value(), 0b1010);
    assert_eq!(low.value(), 0b1100);
    assert_eq!(high.join(low), bits);
}

#[test]
fn n_ary_split_and_join_roundtrip() {
    let bits = Bits::new(0b001_010_011_100, 12);
    let chunks = bits.n_ary_split(3);
    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[0].value(), 0b001);
    assert_eq!(chunks[3].value(), 0b100);
    assert_eq!(Bits::n_ary_join(&chunks, 3), bits);
}

#[test]
fn rotate_left_wraps() {
    let bits = Bits::new(0b1100_0011, 8);
    assert_eq!(bits.rotate_left(2).value(), 0b0000_1111);
    assert_eq!(bits.rotate_left(8), bits);
}

#[test]
fn xor_requires_matching_width() {
    let a = Bits::new(0xff, 8);
    let b = Bits::new(0x0f, 4);
    assert!(a.xor(b).is_none());
    assert_eq!(a.xor(Bits::new(0x0f, 8)).unwrap().value(), 0xf0);
}

#[test]
fn bytes_roundtrip() {
    let original = [0xde, 0xad, 0xbe, 0xef];
    let bits = Bits::from_bytes(&original);
    assert_eq!(bits.width(), 32);
    assert_eq!(bits.to_bytes(), original);
}

#[test]
fn bit_indexing_is_big_endian() {
    let bits = Bits::new(0b1000_0000, 8);
    assert_eq!(bits.bit(0), 1);
    assert_eq!(bits.bit(7), 0);
}
