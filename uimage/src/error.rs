//! Error types for uImage decoding

use thiserror::Error;

/// Errors raised while decoding, validating or splitting a uImage
#[derive(Debug, Error)]
pub enum UImageError {
    /// The buffer ends before a required field or region
    #[error("truncated input: need {needed} bytes, only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// The first word of the buffer is not the uImage magic
    #[error("bad magic number: expected 0x{expected:08x}, found 0x{found:08x}")]
    BadMagic { expected: u32, found: u32 },

    /// Stored header CRC does not match the recomputed one
    #[error("header checksum mismatch: stored 0x{stored:08x}, computed 0x{computed:08x}")]
    HeaderChecksumMismatch { stored: u32, computed: u32 },

    /// Stored data CRC does not match the recomputed one
    #[error("data checksum mismatch: stored 0x{stored:08x}, computed 0x{computed:08x}")]
    DataChecksumMismatch { stored: u32, computed: u32 },

    /// The multi-file length table is malformed
    #[error("corrupt multi-file length table: {0}")]
    CorruptLengthTable(String),

    /// The compression code has no catalog entry
    #[error("unknown compression code: {0}")]
    UnknownCompressionCode(u8),

    /// I/O error from a file collaborator
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Extraction settings could not be loaded
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for uImage operations
pub type Result<T> = std::result::Result<T, UImageError>;

impl UImageError {
    /// Create a truncated input error
    pub fn truncated(needed: usize, available: usize) -> Self {
        Self::TruncatedInput { needed, available }
    }

    /// Create a corrupt length table error
    pub fn corrupt_table(msg: impl Into<String>) -> Self {
        Self::CorruptLengthTable(msg.into())
    }

    /// Process exit status used by the command line front end
    ///
    /// Every kind gets its own non-zero code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TruncatedInput { .. } => 2,
            Self::BadMagic { .. } => 3,
            Self::HeaderChecksumMismatch { .. } => 4,
            Self::DataChecksumMismatch { .. } => 5,
            Self::CorruptLengthTable(_) => 6,
            Self::UnknownCompressionCode(_) => 7,
            Self::Io(_) => 8,
            Self::Config(_) => 9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            UImageError::truncated(64, 3),
            UImageError::BadMagic {
                expected: 0x27051956,
                found: 0,
            },
            UImageError::HeaderChecksumMismatch {
                stored: 1,
                computed: 2,
            },
            UImageError::DataChecksumMismatch {
                stored: 1,
                computed: 2,
            },
            UImageError::corrupt_table("no terminator"),
            UImageError::UnknownCompressionCode(0xff),
            UImageError::Io(std::io::Error::other("boom")),
            UImageError::Config("bad".into()),
        ];

        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_error_messages() {
        let err = UImageError::truncated(64, 10);
        assert_eq!(
            err.to_string(),
            "truncated input: need 64 bytes, only 10 available"
        );

        let err = UImageError::BadMagic {
            expected: 0x27051956,
            found: 0xdeadbeef,
        };
        assert!(err.to_string().contains("0x27051956"));
        assert!(err.to_string().contains("0xdeadbeef"));
    }
}
