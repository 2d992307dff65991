#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Fewer bytes remain than a read requires.
    #[error("truncated input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        /// Cursor offset where the failed read started
        offset: usize,
        /// Number of bytes the read required
        needed: usize,
        /// Number of bytes that were left
        remaining: usize,
    },

    #[error("unsupported RTS version: {0}")]
    UnsupportedVersion(u8),

    /// Varint marker `0xFF` has no decoding rule.
    #[error("unsupported varint marker 0xFF at offset {offset}")]
    UnsupportedVarintMarker { offset: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
