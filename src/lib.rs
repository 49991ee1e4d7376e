#![feature(return_position_impl_trait_in_trait)]


mod bytes;
mod cipher;
mod key;

pub use {
    bytes::Bytes,
    cipher::{
        increment_be,
        BlockCipher,
        BlockDecrypt,
        BlockEncrypt,
        BlockMode,
        Bits,
        Blocks,
        Cbc,
        Cfb,
        Cipher,
        Clefia128,
        Clefia192,
        Clefia256,
        ComponentError,
        Ctr,
        Des,
        Ecb,
        KeyParityError,
        ModeKind,
        NonInvertible,
        Ofb,
        PadNone,
        PadZeros,
        Padding,
        PaddingError,
        Pkcs7,
        Present128,
        Present80,
        SizeMismatch,
        Speck128_256,
        TripleDes,
        UnknownMode,
    },
    key::Key,
};
