//! Error types.

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Account identifier was the empty string.
    EmptyAccount,
    /// Digest string was not `0x` followed by 64 hex characters.
    InvalidDigest,
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::EmptyAccount => f.write_str("Account URL is required"),
            KernelError::InvalidDigest => f.write_str("Invalid digest encoding"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}

pub type KernelResult<T> = core::result::Result<T, KernelError>;
