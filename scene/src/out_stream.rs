use crate::error::*;

use std::io;

///
/// A byte sink that documents are written to
///
/// A sink may accept fewer bytes than it was offered; `write_all()` keeps writing until everything has been
/// accepted. A sink that accepts nothing, or that returns an error, aborts the write with `TvgError::Io`.
///
pub trait OutStream {
    ///
    /// Writes some of the bytes in a buffer, returning the number that were accepted
    ///
    fn write(&mut self, buffer: &[u8]) -> Result<usize, TvgError>;

    ///
    /// Writes an entire buffer to this stream
    ///
    fn write_all(&mut self, buffer: &[u8]) -> Result<(), TvgError> {
        let mut remaining = buffer;

        while !remaining.is_empty() {
            let written = self.write(remaining)?;

            if written == 0 || written > remaining.len() {
                log::warn!("Output stream stopped accepting data with {} bytes remaining", remaining.len());
                return Err(TvgError::Io);
            }

            remaining = &remaining[written..];
        }

        Ok(())
    }

    ///
    /// Writes a string to this stream
    ///
    #[inline]
    fn write_str(&mut self, text: &str) -> Result<(), TvgError> {
        self.write_all(text.as_bytes())
    }
}

///
/// Adapts a `std::io::Write` implementation to an `OutStream`
///
pub struct WriteStream<W: io::Write> {
    target: W,
}

impl<W: io::Write> WriteStream<W> {
    ///
    /// Creates an output stream that writes to the specified target
    ///
    pub fn new(target: W) -> WriteStream<W> {
        WriteStream { target }
    }

    ///
    /// Returns the target of this stream
    ///
    pub fn into_inner(self) -> W {
        self.target
    }
}

impl<W: io::Write> OutStream for WriteStream<W> {
    fn write(&mut self, buffer: &[u8]) -> Result<usize, TvgError> {
        loop {
            match self.target.write(buffer) {
                Ok(written)                                             => { return Ok(written); }
                Err(err) if err.kind() == io::ErrorKind::Interrupted    => { }
                Err(err)                                                => {
                    log::warn!("Output stream failed: {}", err);
                    return Err(TvgError::Io);
                }
            }
        }
    }
}

impl OutStream for Vec<u8> {
    #[inline]
    fn write(&mut self, buffer: &[u8]) -> Result<usize, TvgError> {
        self.try_reserve(buffer.len())?;
        self.extend_from_slice(buffer);

        Ok(buffer.len())
    }
}
