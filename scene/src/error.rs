use thiserror::Error;

use std::collections::{TryReserveError};

///
/// The ways that decoding or rendering a TinyVG document can fail
///
/// An operation either produces its full result or one of these errors
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum TvgError {
    /// A buffer, table or command list could not be allocated
    #[error("out of memory")]
    OutOfMemory,

    /// The output sink refused some data
    #[error("the output stream reported an error")]
    Io,

    /// The input does not follow the TinyVG format (bad magic, truncated data, bad index, bad tag...)
    #[error("invalid TinyVG data")]
    InvalidData,

    /// The input is well-formed but uses a version or encoding that is not implemented
    #[error("unsupported TinyVG version or encoding")]
    Unsupported,
}

impl From<TryReserveError> for TvgError {
    #[inline]
    fn from(_: TryReserveError) -> TvgError {
        TvgError::OutOfMemory
    }
}

///
/// Logs the reason for rejecting some input data and returns the `InvalidData` error
///
#[inline]
pub (crate) fn invalid_data(reason: &str) -> TvgError {
    log::debug!("Rejecting TinyVG data: {}", reason);
    TvgError::InvalidData
}

///
/// Logs the reason for rejecting some well-formed data and returns the `Unsupported` error
///
#[inline]
pub (crate) fn unsupported(reason: &str) -> TvgError {
    log::debug!("Unsupported TinyVG data: {}", reason);
    TvgError::Unsupported
}
