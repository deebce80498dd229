use crate::error::Error;

use log::{debug, trace};
use std::io::{self, Read, Write};

/// Capacity of the transfer buffer; matches the C library's BUFSIZ
pub const BLOCK_SIZE: usize = 8192;

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Totals for a completed transfer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Transferred {
    pub bytes: u64,
    /// Number of reads that returned data
    pub chunks: u64,
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Copy everything from `source` to `destination` one block at a time, using a stack buffer of
/// `BLOCK_SIZE` bytes
pub fn transfer<R, W>(source: &mut R, destination: &mut W) -> Result<Transferred, Error>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut block = [0u8; BLOCK_SIZE];
    transfer_with_buffer(source, destination, &mut block)
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
/// Copy everything from `source` to `destination` through the caller's buffer.
///
/// Each read fills at most `buffer.len()` bytes, and those bytes are written out in full before
/// the next read. A short read is not end of input: only a read of zero bytes ends the loop.
/// No error is retried, `Interrupted` included. An empty buffer is rejected as a read error.
pub fn transfer_with_buffer<R, W>(
    source: &mut R,
    destination: &mut W,
    buffer: &mut [u8],
) -> Result<Transferred, Error>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    if buffer.is_empty() {
        return Err(Error::Read(io::Error::new(
            io::ErrorKind::InvalidInput,
            "transfer buffer has no capacity",
        )));
    }

    let mut totals = Transferred::default();

    loop {
        let bytes_read = source.read(buffer).map_err(Error::Read)?;

        if bytes_read == 0 {
            break; // EOF
        }

        trace!("chunk {}: read {bytes_read} bytes", totals.chunks);
        write_block(destination, &buffer[..bytes_read])?;

        totals.chunks += 1;
        totals.bytes += bytes_read as u64;
    }

    destination.flush().map_err(Error::Write)?;
    debug!("transferred {} bytes in {} chunks", totals.bytes, totals.chunks);

    Ok(totals)
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// Internal
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
fn write_block<W: Write + ?Sized>(destination: &mut W, block: &[u8]) -> Result<(), Error> {
    let mut remaining = block;

    while !remaining.is_empty() {
        match destination.write(remaining) {
            Ok(0) => {
                return Err(Error::Write(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "destination accepted no bytes",
                )));
            }
            Ok(written) if written > remaining.len() => {
                return Err(Error::Write(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("destination reported {written} bytes written out of {}", remaining.len()),
                )));
            }
            Ok(written) => {
                if written < remaining.len() {
                    trace!("partial write: {written} of {} bytes", remaining.len());
                }
                remaining = &remaining[written..];
            }
            Err(e) => return Err(Error::Write(e)),
        }
    }

    Ok(())
}
