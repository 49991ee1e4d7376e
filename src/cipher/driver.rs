//! The pieces a driver (CLI, test harness, or other caller) needs to turn a
//! byte slice and a mode name into a running mode: a pull-based chunk
//! iterator, and a string-keyed registry of the modes this crate supports.

use std::{fmt, str::FromStr};

/// A pull-based iterator over `block_bytes`-sized chunks of `data`. The
/// final chunk is yielded as-is when `data.len()` is not a multiple of
/// `block_bytes`, so a padding stage downstream can size it.
pub struct Blocks<'a> {
    data: &'a [u8],
    block_bytes: usize,
    offset: usize,
}

impl<'a> Blocks<'a> {
    pub fn new(data: &'a [u8], block_bytes: usize) -> Self {
        Self {
            data,
            block_bytes,
            offset: 0,
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.data.len() {
            return None;
        }
        let end = (self.offset + self.block_bytes).min(self.data.len());
        let chunk = &self.data[self.offset..end];
        self.offset = end;
        Some(chunk)
    }
}

/// The mode names this crate's driver recognizes. Kept as a plain enum
/// rather than a table of boxed constructors: every mode is generic over
/// its block cipher, so a single dispatch table can't name a concrete
/// constructor anyway — callers match on the variant and build the mode
/// themselves with whichever cipher they're using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Ecb,
    Cbc,
    Cfb,
    Ofb,
    Ctr,
}

impl FromStr for ModeKind {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ECB" => Ok(Self::Ecb),
            "CBC" => Ok(Self::Cbc),
            "CFB" => Ok(Self::Cfb),
            "OFB" => Ok(Self::Ofb),
            "CTR" => Ok(Self::Ctr),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized mode name: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMode {}
