use std::fmt;

/// A block, key, or segment did not have the exact width a component
/// required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    pub expected: u32,
    pub actual: u32,
}

impl fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} bits, got {}", self.expected, self.actual)
    }
}

impl std::error::Error for SizeMismatch {}

/// Decryption was requested on a component that cannot be inverted, such as a
/// [compression P-box](super::primitives::CompressionPBox) or a bare
/// [S-box](super::primitives::SBox).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonInvertible;

impl fmt::Display for NonInvertible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("component does not support decryption")
    }
}

impl std::error::Error for NonInvertible {}

/// A component inside a [`Pipeline`](super::pipeline::Pipeline) or
/// [`HorizontalPipeline`](super::pipeline::HorizontalPipeline) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentError {
    SizeMismatch(SizeMismatch),
    NonInvertible(NonInvertible),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch(e) => e.fmt(f),
            Self::NonInvertible(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ComponentError {}

impl From<SizeMismatch> for ComponentError {
    fn from(e: SizeMismatch) -> Self {
        Self::SizeMismatch(e)
    }
}

impl From<NonInvertible> for ComponentError {
    fn from(e: NonInvertible) -> Self {
        Self::NonInvertible(e)
    }
}

/// A DES key failed the odd-parity check requested at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyParityError {
    pub byte: usize,
}

impl fmt::Display for KeyParityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key byte {} fails odd-parity check", self.byte)
    }
}

impl std::error::Error for KeyParityError {}

/// Padding could not be removed because it was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingError {
    /// The final byte did not encode a valid padding count for the block
    /// size in use.
    InvalidCount(u8),
    /// The padding bytes were present but did not all equal the count.
    Malformed,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCount(n) => write!(f, "invalid padding count byte: {n:#x}"),
            Self::Malformed => f.write_str("padding bytes do not match the padding count"),
        }
    }
}

impl std::error::Error for PaddingError {}
