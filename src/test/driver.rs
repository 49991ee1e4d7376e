use crate::{Blocks, ModeKind};

#[test]
fn blocks_yields_full_chunks_then_a_short_final_one() {
    let data = [1, 2, 3, 4, 5, 6, 7];
    let chunks: Vec<&[u8]> = Blocks::new(&data, 3).collect();
    assert_eq!(chunks, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7][..]]);
}

#[test]
fn blocks_is_empty_for_empty_input() {
    let data: [u8; 0] = [];
    assert_eq!(Blocks::new(&data, 8).count(), 0);
}

#[test]
fn mode_kind_parses_recognized_names() {
    assert_eq!("ECB".parse(), Ok(ModeKind::Ecb));
    assert_eq!("CBC".parse(), Ok(ModeKind::Cbc));
    assert_eq!("CFB".parse(), Ok(ModeKind::Cfb));
    assert_eq!("OFB".parse(), Ok(ModeKind::Ofb));
    assert_eq!("CTR".parse(), Ok(ModeKind::Ctr));
}

#[test]
fn mode_kind_rejects_unknown_names() {
    let result: Result<ModeKind, _> = "XTS".parse();
    assert!(result.is_err());
}
